//! # messkit-reads
//!
//! Builds the "messy sequencing" exercise: a directory of empty
//! `*.fastq.gz` files whose names follow a sample naming convention
//! with a configurable amount of chaos.
//!
//! ## Chaos levels
//!
//! - `low` - standard field order, one separator, lowercase or CAPS
//! - `medium` - standard field order, one separator, any case style
//! - `high` - shuffled metadata, mixed separators, any case style
//!
//! ILLUMINA samples are paired-end and get an `_R1`/`_R2` file pair;
//! every other technology is single-end and gets one file.
//!
//! ```rust,ignore
//! use messkit_reads::{Candidates, ChaosLevel, create_sequencing_mess};
//!
//! let candidates = Candidates::default();
//! let created = create_sequencing_mess(Path::new("./messy-reads"), 5, &candidates, ChaosLevel::High, 42, false)?;
//! ```

pub mod case;
pub mod chaos;
pub mod config;
pub mod consts;
pub mod filename;
pub mod generator;

// re-exports
pub use case::*;
pub use chaos::*;
pub use config::*;
pub use filename::*;
pub use generator::*;
