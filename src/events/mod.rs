//! Events and the presentation boundary.
//!
//! The engine reports every visible change as a [`GameEvent`] routed to a
//! [`Presenter`]. The presenter is injected when a session is created; there
//! is no global lookup.

mod event;
mod presenter;

pub use event::GameEvent;
pub use presenter::{EventLog, NullPresenter, Presenter};
