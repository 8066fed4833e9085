//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, input line
//! - **[`panes`]**: stateless render functions for each visible pane
//! - **[`theme`]**: color palette shared by all panes
//!
//! Construct an [`App`] around a [`Session`] and call [`App::run`].
//!
//! [`Session`]: crate::session::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
