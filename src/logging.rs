use tracing_subscriber::filter::{Directive, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "sample_grouper=info";
const DEBUG_DIRECTIVE: &str = "sample_grouper=debug";

/// Build the log filter from `RUST_LOG` (if set) and the `--debug` flag
///
/// `--debug` is layered on top of whatever `RUST_LOG` asks for.
pub fn env_filter(debug: bool) -> EnvFilter {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(), debug)
}

fn filter_from(env: Option<&str>, debug: bool) -> EnvFilter {
    let filter = env
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE));

    match (debug, DEBUG_DIRECTIVE.parse::<Directive>()) {
        (true, Ok(directive)) => filter.add_directive(directive),
        _ => filter,
    }
}

/// Install the global fmt subscriber writing to stderr
pub fn init(debug: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_info() {
        let filter = filter_from(None, false).to_string();
        assert!(filter.contains("sample_grouper=info"));
    }

    #[test]
    fn test_debug_without_env() {
        let filter = filter_from(None, true).to_string();
        assert!(filter.contains("sample_grouper=debug"));
    }

    #[test]
    fn test_debug_overrides_quiet_env() {
        let filter = filter_from(Some("warn"), true).to_string();
        assert!(filter.contains("warn"));
        assert!(filter.contains("sample_grouper=debug"));
    }

    #[test]
    fn test_env_kept_without_debug() {
        let filter = filter_from(Some("warn"), false).to_string();
        assert!(filter.contains("warn"));
        assert!(!filter.contains("sample_grouper"));
    }

    #[test]
    fn test_invalid_env_falls_back() {
        let filter = filter_from(Some("sample_grouper=loudest"), false).to_string();
        assert!(filter.contains("sample_grouper=info"));
    }
}
