//! Session runtime for the maze adventure.
//!
//! This crate wires the `game-core` rules, the `game-content` loaders and the
//! plaintext save format into a single-threaded session API. Hosts embed
//! [`SessionController`] with their own [`Presenter`] and feed it commands.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the controller, its status, and the level-up snapshot
//! - [`economy`] prices items and performs atomic purchases
//! - [`repository`] encodes saves and talks to the file system
//! - [`api`] exposes the types hosts interact with
//! - [`config`] reads host configuration from the environment
pub mod api;
pub mod config;
pub mod economy;
pub mod repository;
pub mod session;

pub use api::{Notice, Presenter, RenderFrame, Result, RuntimeError};
pub use config::SessionConfig;
pub use economy::{Economy, EconomyError, PriceTable, PurchaseOutcome};
pub use repository::{
    FileSaveRepository, RepositoryError, SaveLocation, SaveTarget, StatDeltas, StatsRecord,
};
pub use session::{LevelUpSnapshot, SaveReference, SessionController, SessionStatus};
