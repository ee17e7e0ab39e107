//! Lumiára CMS importer
//!
//! Pushes the site's static content file into the headless CMS through its
//! mutation API.

pub mod config;
pub mod error;
pub mod http;
pub mod importer;
pub mod mutation;
pub mod store;

pub use config::Config;
pub use error::{ClientError, ClientResult, ConfigError, ImportError, ImportResult};
pub use http::SanityClient;
pub use importer::{ImportReport, Importer};
pub use store::{ContentStore, DryRunStore};
