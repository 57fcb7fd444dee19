//! Diagnostic tracing on stderr, filtered by `RUST_LOG`.
//!
//! Snapshots are product output and go to stdout through `io::render`; they
//! are never routed through tracing.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Without `RUST_LOG` only warnings are shown,
/// e.g. rejected session lines; `RUST_LOG=powmod=debug` adds one event per pass.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(build_filter(directives.as_deref()))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

const DEFAULT_DIRECTIVES: &str = "warn";

/// `directives` wins when set and parseable; otherwise [`DEFAULT_DIRECTIVES`].
fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|dirs| EnvFilter::try_new(dirs).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_filter_defaults_to_warn() {
        assert_eq!(build_filter(None).to_string(), "warn");
    }

    #[test]
    fn explicit_directives_override_default() {
        assert_eq!(
            build_filter(Some("powmod=debug")).to_string(),
            "powmod=debug"
        );
    }
}
