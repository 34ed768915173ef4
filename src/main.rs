use png2xtheme::{BUILTIN_CURSORS, Config};

fn main() {
    init_logging();

    let cfg = Config::default();
    if let Err(e) = png2xtheme::run(BUILTIN_CURSORS, &cfg) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Leveled logging on stderr, `debug` and up by default; `RUST_LOG` overrides.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
