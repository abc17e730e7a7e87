//! Web app manifest service.
//!
//! Serves a web app manifest at `/manifest.json`. The `name` query parameter
//! becomes the application name; everything else in the document is fixed:
//!
//! ```text
//! GET /manifest.json?name=My+App
//!
//! {"name":"My App","display":"standalone","icons":[{"src":"/static/icon.png","sizes":"256x256"}]}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`manifest`]: Manifest document types
//! - [`api`]: HTTP router and handlers
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod manifest;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServerError};
pub use manifest::ManifestDocument;
