//! Line-oriented terminal front-end for the maze runtime.
//!
//! # Architecture
//!
//! [`CliApp`] owns the session controller and feeds it one command per input
//! line. The controller draws through [`TerminalPresenter`], which writes plain
//! text to any `Write` sink so the whole loop can run against buffers in tests.

mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod presentation;
pub mod timer;

pub use app::{CliApp, Flow};
pub use config::{CliArgs, load_economy};
pub use presentation::TerminalPresenter;
