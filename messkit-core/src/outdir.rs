use std::fs;
use std::path::Path;

use log::warn;

use crate::errors::{MessError, Result};

///
/// Get an output directory ready for a fresh run.
///
/// If the directory exists it is either removed (when `force` is set) or
/// left untouched and an [`MessError::OutputExists`] is returned. The
/// directory (and any missing parents) is then created.
///
/// # Arguments:
/// - outdir: path to the output directory
/// - force: remove an existing directory instead of failing
///
pub fn prepare_output_dir(outdir: &Path, force: bool) -> Result<()> {
    if outdir.exists() {
        if !force {
            return Err(MessError::OutputExists(outdir.to_path_buf()));
        }
        warn!("Overwriting existing directory {}", outdir.display());
        if outdir.is_dir() {
            fs::remove_dir_all(outdir)?;
        } else {
            fs::remove_file(outdir)?;
        }
    }

    fs::create_dir_all(outdir)?;

    Ok(())
}
