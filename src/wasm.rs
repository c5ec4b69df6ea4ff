use std::num::NonZero;

use js_sys::Int32Array;
use wasm_bindgen::prelude::*;

use crate::location::Location;
use crate::solver::{KnightsTour, TourMode};

/// Solve from `(row, col)` on a `size`x`size` board for use from JavaScript.
///
/// The tour comes back flattened row-major with `-1` for unvisited cells; `undefined` when no tour exists.
#[wasm_bindgen(js_name = solveTour)]
pub fn solve_tour(size: usize, row: usize, col: usize, closed: bool) -> Result<Option<Int32Array>, JsError> {
    let size = NonZero::new(size).ok_or_else(|| JsError::new("board size must be positive"))?;
    let mode = if closed { TourMode::Closed } else { TourMode::Open };

    let mut solver = KnightsTour::new(size);
    if !solver.solve(Location(row, col), mode)? {
        return Ok(None);
    }

    let flat: Vec<i32> = solver.board().visit_orders().iter()
        .map(|order| order.map_or(-1, |order| order as i32))
        .collect();
    Ok(Some(Int32Array::from(flat.as_slice())))
}
