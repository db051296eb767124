//! HTTP server rendering URL path text as PNG images.
//!
//! `GET /text-to-image/:text` returns the decoded text rendered in black on a
//! transparent canvas, encoded as PNG. Configuration comes from the
//! environment, read once at startup; see [`config::Config`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod sanitize;

pub use config::Config;
pub use error::AppError;
pub use handlers::app;
