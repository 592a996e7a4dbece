//! # contentscale
//!
//! Mock content-marketing API: templated content generation and synthesized
//! SEO keyword research served as JSON over HTTP.
//!
//! Random metrics, simulated latency and timestamps are injected through the
//! [`mock`] traits so every service can be driven deterministically.

pub mod config;
pub mod content;
pub mod error;
pub mod http_server;
pub mod logging;
pub mod mock;
pub mod seo;

pub use config::{AppConfig, CliArgs};
pub use content::{ContentRequest, ContentResult, ContentService, ContentType};
pub use error::{Error, Result};
pub use http_server::{create_router, serve, AppState};
pub use seo::{SeoResearchResult, SeoResearchService};
