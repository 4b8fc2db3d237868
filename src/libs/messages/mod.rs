//! User-facing text.
//!
//! All console output is expressed as a [`Message`] variant and printed
//! through the `msg_*!` macros from [`macros`], which also decide whether the
//! line goes to the console or to `tracing`.
//!
//! ```rust
//! use worktally::libs::messages::Message;
//!
//! assert_eq!(Message::ConfigSaved.to_string(), "Configuration saved successfully");
//! ```

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
