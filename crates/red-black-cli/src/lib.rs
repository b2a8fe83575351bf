//! `rbt` — interactive shell around [`red_black_tree::RbTree`].
//!
//! Provides the pieces used by the binary entry point:
//! - [`Session`] — the menu loop over explicit input/output handles
//! - [`render`] — the top-down `R----` / `L----` tree display
//! - [`Options`] — command-line options
//! - [`logging::init`] — tracing subscriber setup

mod error;
pub mod logging;
mod options;
pub mod render;
pub mod session;

pub use error::CliError;
pub use options::Options;
pub use render::render;
pub use session::{Command, Session};
