//! sortbench entry point
//!
//! Times one sorting algorithm on a reproducible array, or the full
//! reference suite with `--suite`.

fn main() {
    // Logs go to stderr so stdout stays parseable; RUST_LOG overrides the level
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    std::process::exit(sortbench::cli::run());
}
