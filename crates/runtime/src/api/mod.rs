//! Public runtime API surface.
//!
//! This module gathers the types exposed to hosts of the runtime crate so the
//! session and repository layers can stay focused on game flow and I/O.

pub mod errors;
pub mod events;
pub mod presenter;

pub use errors::{Result, RuntimeError};
pub use events::Notice;
pub use presenter::{Presenter, RenderFrame};
