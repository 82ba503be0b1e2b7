use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives, e.g. `KUBEGEN_LOG=kubegen=debug`.
pub const LOG_ENV: &str = "KUBEGEN_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

/// Installs a global subscriber that writes to stderr, leaving stdout to the printed objects.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    // Fails when embedded in a host that installed its own subscriber.
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        tracing::debug!(%err, "keeping the existing global subscriber");
    }
}
