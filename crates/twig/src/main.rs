//! Entry point for twig, an interactive minimum-spanning-tree calculator

#![deny(
    clippy::disallowed_methods,
    clippy::suspicious,
    clippy::style,
    clippy::clone_on_ref_ptr,
    missing_debug_implementations,
    missing_copy_implementations
)]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod entry;
mod prompt;

mod prelude {
    #![expect(unused_imports, reason = "Some exports may not yet be used")]

    pub use anyhow::{anyhow, bail, ensure, Context as _, Error};
    pub use tracing::{
        debug, debug_span, error, error_span, info, info_span, instrument, trace, trace_span, warn,
        warn_span,
    };
    pub use tracing_subscriber::prelude::*;

    pub type Result<T = (), E = Error> = std::result::Result<T, E>;
}

fn main() { entry::main(); }
