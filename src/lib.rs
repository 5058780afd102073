//! Organization site admin client
//!
//! Typed access to the site's REST backend (members, events, projects, tags)
//! plus the form state, diff-and-patch updates and page controllers the admin
//! dashboard is built on.

pub mod api;
pub mod config;
pub mod diff;
pub mod errors;
pub mod forms;
pub mod models;
pub mod notify;
pub mod pages;
pub mod public;
pub mod session;
pub mod telemetry;

pub use api::ApiClient;
pub use config::Config;
pub use errors::ClientError;
