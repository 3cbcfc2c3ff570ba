// ============================================================================
// Logging Initialisation
// Installs a tracing subscriber for binaries, benches and tests
// ============================================================================

use tracing::Level;

/// Install a global `fmt` subscriber that prints events at `level` and above.
///
/// Returns an error if a global subscriber is already set, which makes it
/// safe to call from several tests.
pub fn init_logging(level: Level) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("failed to install tracing subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_error() {
        let _ = init_logging(Level::DEBUG);
        assert!(init_logging(Level::DEBUG).is_err());
    }
}
