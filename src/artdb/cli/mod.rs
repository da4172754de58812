//! # CLI Layer
//!
//! One client of the artdb library. This is the only code that touches the
//! terminal: it parses arguments, installs the log subscriber, calls
//! [`artdb::api::ArtdbApi`], and turns each `CmdResult` into output.
//!
//! - `args`: clap definitions
//! - `commands`: `run()`, context setup and one `handle_*` per subcommand
//! - `print`: tables, full record views and messages

mod args;
mod commands;
mod print;

pub use commands::run;

/// Installs the stderr log subscriber. `RUST_LOG` directives still apply on top.
pub(crate) fn init_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
