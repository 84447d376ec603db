//! QuickGen: a small desktop password generator.
//!
//! The pure generator lives in [`password`]; [`generator`] wraps it in a
//! stateful component with clipboard copy feedback, and [`app`] hosts that
//! component in an eframe window.

pub mod app;
pub mod clipboard;
pub mod error;
pub mod generator;
pub mod logging;
pub mod password;
pub mod settings;

pub use error::{Error, Result};
pub use generator::{COPY_FAILED_MESSAGE, CopyIcon, PasswordGenerator};
pub use password::{CharacterClass, GeneratorOptions, generate_password};
