use std::io;

use tracing_subscriber::EnvFilter;

use crate::{prelude::*, prompt};

#[derive(Debug, clap::Parser)]
#[command(version, author, about)]
struct Opts {
    /// Log filter, using env_logger-like syntax
    #[arg(long, env = "RUST_LOG")]
    log_filter: Option<String>,

    /// Spanning-tree algorithm to run
    #[arg(long, value_enum, default_value = "kruskal")]
    algorithm: prompt::Algorithm,

    /// Start vertex for Prim's algorithm
    #[arg(long, default_value_t = 0)]
    start: usize,
}

macro_rules! init_error {
    ($($args:tt)*) => ({
        ::tracing::error!($($args)*);
        ::std::process::exit(1);
    })
}

fn init_subscriber(log_filter: impl AsRef<str>) {
    let log_filter = log_filter.as_ref();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(log_filter)
                .unwrap_or_else(|e| init_error!("Invalid log filter {log_filter:?}: {e}")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .unwrap_or_else(|e| init_error!("Error initializing logger: {e}"));
}

#[inline]
pub fn main() {
    let opts: Opts = clap::Parser::parse();
    init_subscriber(opts.log_filter.as_deref().unwrap_or("info"));

    debug!(?opts, "Options parsed");

    std::process::exit(match run(opts) {
        Ok(()) => 0,
        Err(e) => {
            error!("{e:?}");
            1
        },
    });
}

fn run(opts: Opts) -> Result {
    let Opts {
        log_filter: _,
        algorithm,
        start,
    } = opts;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    prompt::session(stdin, stdout, algorithm, start).context("Prompt session failed")
}
