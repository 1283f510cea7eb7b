//! Bootstrap services
//!
//! Each module wraps one kind of external collaborator:
//! - `runner`: subprocess execution
//! - `prompt`: the interactive download confirmation
//! - `interpreter`, `venv`, `packages`, `smoke_test`: Python environment steps
//! - `models`: model hub access and post-download checks
//!
//! `bootstrap` strings them together in order.

pub mod bootstrap;
pub mod interpreter;
pub mod models;
pub mod packages;
pub mod prompt;
pub mod runner;
pub mod venv;

pub use bootstrap::Bootstrapper;
pub use models::ModelHub;
pub use prompt::{LinePrompt, Prompt, StdinPrompt};
pub use runner::{CommandRunner, SystemRunner};
