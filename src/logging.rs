pub mod logging {
    use std::io;
    use tracing_subscriber::EnvFilter;

    // Logs go to stderr so stdout only carries matched URLs.
    pub fn configure_logging() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(filter)
            .init();
    }
}
