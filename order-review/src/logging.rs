//! Logging setup
//!
//! `RUST_LOG` wins; otherwise the configured filter; otherwise a build
//! profile default.

use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

fn env_filter(configured: Option<&str>) -> EnvFilter {
    if let Ok(from_env) = EnvFilter::try_from_default_env() {
        return from_env;
    }
    if let Some(directive) = configured {
        match EnvFilter::try_new(directive) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("Ignoring invalid log filter {directive:?}: {e}"),
        }
    }
    if cfg!(debug_assertions) {
        EnvFilter::new("info,order_review=debug,shared=debug")
    } else {
        EnvFilter::new("warn,order_review=info")
    }
}

/// Install the global subscriber (stderr). Later calls are no-ops.
pub fn init(configured: Option<&str>) {
    let stderr_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(env_filter(configured))
        .with(stderr_layer)
        .try_init();
}
