use std::error::Error;
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn Error + Send + Sync>;

/// Install a compact stderr subscriber. `RUST_LOG` wins over `log_level`.
pub fn init(log_level: &str) -> Result<(), BoxError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_filter(log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
}

fn level_filter(log_level: &str) -> Result<EnvFilter, BoxError> {
    EnvFilter::try_new(log_level)
        .map_err(|e| format!("invalid log level/filter '{log_level}': {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_accepts_directives() {
        assert!(level_filter("warn").is_ok());
        assert!(level_filter("kyh_core=debug").is_ok());
    }

    #[test]
    fn test_level_filter_rejects_bad_level() {
        let err = level_filter("kyh_core=loud").unwrap_err();
        assert!(err.to_string().contains("kyh_core=loud"));
    }
}
