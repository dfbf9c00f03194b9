//! Session facade.
//!
//! `MemoryGame` wires the grid spec, deck builder, board, selection engine,
//! resolver, win detector, scheduler and codec into one engine instance.
//! Collaborators (store, presenter) are passed in by value or by `&mut`
//! handle; there is no global instance.

mod game;

pub use game::{MemoryGame, PickOutcome, SessionOrigin};
