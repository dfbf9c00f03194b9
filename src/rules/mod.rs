//! Turn rules: selection, resolution, and win detection.
//!
//! - `SelectionEngine`: accepts picks, buffers up to two, gates input
//! - `MatchResolver`: compares a pair, updates match count and score
//! - `WinDetector`: fires once when every pair is found

mod resolver;
mod selection;
mod win;

pub use resolver::{MatchResolver, Resolution};
pub use selection::{IgnoreReason, Selection, SelectionEngine, SelectionPhase};
pub use win::WinDetector;
