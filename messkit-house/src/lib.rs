//! # messkit-house
//!
//! Builds the "clean the house" exercise: a directory of item files, some
//! with misspelled names and some marked for removal.
//!
//! ```rust,ignore
//! use messkit_house::{MessLevel, create_messy_house};
//!
//! let level = MessLevel::from_flags(true, true, false); // level 3
//! let mut rng = rand::rng();
//! let summary = create_messy_house(Path::new("./clean-the-house"), level, &mut rng, false)?;
//! ```
//!
//! ## Module Structure
//!
//! - [`corrupt`] - single-character typos (delete, insert, substitute, transpose)
//! - [`mess`] - the mess level and the file population loop
//! - [`consts`] - rooms, items, rates and file contents

pub mod consts;
pub mod corrupt;
pub mod mess;

// re-exports
pub use corrupt::*;
pub use mess::*;
