use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Level used when the process starts. Load notices are `info`, so they show.
const DEFAULT_DIRECTIVE: &str = "task_manager=info";

/// Sends diagnostics to stderr so they interleave with the menu without
/// mixing into stdout.
pub fn init() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(DEFAULT_DIRECTIVE))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
