//! PDF question generator bootstrapper
//!
//! This crate prepares the local runtime for the PDF question generator: it
//! creates the working directories, builds a Python virtual environment with
//! the CPU-only dependency stack, checks the install with an import smoke test
//! and can pre-fetch the default model into the local cache.
//!
//! # Modules
//! - `entities`: steps, reports, invocations and the subprocess environment
//! - `error`: the error type and its exit codes
//! - `locales`: translated console messages
//! - `service`: the bootstrap steps and their external collaborators
//! - `utils`: configuration, initialization and the model downloader
//!
//! # Examples
//! ```rust
//! use qgen_bootstrap::entities::is_affirmative;
//!
//! assert!(is_affirmative("Sí"));
//! assert!(!is_affirmative(""));
//! ```

pub mod entities;
pub mod error;
pub mod locales;
pub mod service;
pub mod utils;

pub use error::*;
pub use locales::{LocaleError, Locales};
