/// Installs the process-wide subscriber. Verbosity comes from `RUST_LOG`.
/// Output goes to stderr so that anything printed on stdout stays machine-readable.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
