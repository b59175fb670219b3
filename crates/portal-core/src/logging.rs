//! Tracing subscriber setup.
//!
//! ```ignore
//! portal_core::logging::init_logging(Some("portal_core=debug,info"))?;
//! ```
//!
//! Without an explicit directive the filter comes from `RUST_LOG`, and
//! falls back to [`DEFAULT_FILTER`].

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{PortalError, PortalResult};

pub const DEFAULT_FILTER: &str = "info";

/// Build the filter from an explicit directive, `RUST_LOG`, or the default.
///
/// An invalid explicit directive is reported on stderr and replaced by the
/// default; logging is not set up yet at that point.
pub fn env_filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
            eprintln!("invalid log filter {:?}: {}", directive, e);
            EnvFilter::new(DEFAULT_FILTER)
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Install the global subscriber: env filter plus human-readable output
pub fn init_logging(directive: Option<&str>) -> PortalResult<()> {
    tracing_subscriber::registry()
        .with(env_filter(directive))
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| PortalError::Logging(e.to_string()))
}
