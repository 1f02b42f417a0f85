//! # easypanel-adapter-console
//!
//! Terminal front-end for the panel client.
//!
//! - [`MemoryBoard`]: the view, a table of bound elements implementing
//!   the `BindingResolver` port, with a revision counter front-ends can watch
//! - [`LinePrompt`] / [`AssumeYes`]: `Confirmer` implementations
//! - [`render`]: plain-text rendering of the board and of notifications
//!
//! ## Dependency rule
//!
//! Depends on `easypanel-app` (port traits) and `easypanel-domain` only.

mod board;
mod prompt;
pub mod render;

pub use board::{BoardElement, ElementState, MemoryBoard};
pub use prompt::{AssumeYes, LinePrompt, TerminalPrompt, is_yes};
