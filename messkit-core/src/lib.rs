//! # messkit-core
//!
//! Shared plumbing for the messkit generators: the error type, the
//! output directory overwrite policy, logger setup and a few small file
//! helpers. The generators themselves live in `messkit-house` and
//! `messkit-reads`.

pub mod errors;
pub mod logging;
pub mod outdir;
pub mod utils;

// re-exports
pub use errors::{MessError, Result};
pub use outdir::prepare_output_dir;
