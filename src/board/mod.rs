//! Board state.
//!
//! A `Board` is created one of two ways per session:
//! - **Fresh**: `Board::fresh` lays a shuffled deck onto slots `0..N`
//! - **Resumed**: `Board::from_record` rebuilds a saved layout

mod state;

pub use state::Board;
