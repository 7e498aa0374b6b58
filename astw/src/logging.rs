//! Tracing setup for the `astw` binary.
//!
//! Output formats, selected with `ASTW_LOG_FORMAT`:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `json`: one JSON object per event
//!
//! ```bash
//! ASTW_LOG=debug astw render tree.json
//! ASTW_LOG="astwriter::macros=trace" ASTW_LOG_FORMAT=json astw render tree.json
//! ```
//!
//! Nothing is installed unless `ASTW_LOG` or `RUST_LOG` is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn from_env() -> Self {
        match std::env::var("ASTW_LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// `ASTW_LOG` wins over `RUST_LOG` when both are set.
fn build_filter() -> EnvFilter {
    if let Ok(value) = std::env::var("ASTW_LOG") {
        EnvFilter::builder().parse_lossy(value)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Installs the global subscriber on stderr, leaving stdout to rendered
/// source.
pub fn init_tracing() {
    let has_astw_log = std::env::var("ASTW_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_astw_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
