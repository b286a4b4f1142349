//! parse-batch binary

fn main() {
    use clap::Parser;
    use parse_batch::ParseBatchArgs;

    init_tracing_subscriber();

    if let Err(err) = ParseBatchArgs::parse().run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber, writing to stderr and filtered by `RUST_LOG` (defaults to
/// `info`).
fn init_tracing_subscriber() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(false)
                .with_ansi(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
