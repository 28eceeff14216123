//! Tracing configuration for totp-enroll
//!
//! ## Behavior / 行为
//!
//! - **Environment-aware**: debug level in debug builds, info otherwise
//! - **stderr only**: the wizard owns stdout, so log lines never interleave
//!   with the rendered steps / 日志写入 stderr，不与向导界面混杂

use std::io;

use tracing_subscriber::{fmt, fmt::time::ChronoUtc, prelude::*, registry, EnvFilter};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// HTTP client internals stay at `warn` so a `debug` session only shows
/// enrollment transitions and adapter activity.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        "hyper=warn".to_string(),
        "hyper_util=warn".to_string(),
        "reqwest=warn".to_string(),
        "rustls=warn".to_string(),
    ]
}

/// Initialize the tracing subscriber
///
/// `RUST_LOG` overrides the default directives.
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let fmt_layer = fmt::layer()
        .with_timer(ChronoUtc::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_target(true)
        .with_writer(io::stderr);

    registry().with(env_filter).with(fmt_layer).try_init()?;

    Ok(())
}
