//! Deferred operations.
//!
//! Two things happen after a delay: hiding the board at the end of the
//! intro reveal, and flipping back a mismatched pair. Both are explicit
//! [`ScheduledTask`] values on a [`Scheduler`]; the session applies each
//! one when its timer fires. Input stays locked while either is pending.

mod scheduler;

pub use scheduler::{PendingTask, ScheduledTask, Scheduler};
