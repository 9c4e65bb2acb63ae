use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use rand::Rng;

use messkit_core::Result;
use messkit_core::utils::progress_bar;

use crate::consts::*;
use crate::corrupt::corrupt;

///
/// How messy the house should be, from 0 (tidy) to 3.
///
/// The level scales the typo probability by [`CORRUPTION_RATE`] and the
/// removal-note probability by [`REMOVAL_RATE`].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct MessLevel(u8);

impl MessLevel {
    /// Any value above [`MAX_MESS_LEVEL`] is clamped.
    pub fn new(level: u8) -> Self {
        MessLevel(level.min(MAX_MESS_LEVEL))
    }

    ///
    /// Combine the `--messy` (1), `--messier` (2) and `--messiest` (3)
    /// flags additively.
    ///
    pub fn from_flags(messy: bool, messier: bool, messiest: bool) -> Self {
        let level = u8::from(messy) + u8::from(messier) * 2 + u8::from(messiest) * 3;
        MessLevel::new(level)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn corruption_probability(&self) -> f64 {
        CORRUPTION_RATE * f64::from(self.0)
    }

    pub fn removal_probability(&self) -> f64 {
        REMOVAL_RATE * f64::from(self.0)
    }
}

impl fmt::Display for MessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One item file, planned but not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseFile {
    pub name: String,
    pub corrupted: bool,
    pub remove: bool,
}

impl HouseFile {
    /// The text the file is written with.
    pub fn contents(&self) -> String {
        if self.remove {
            format!("{REMOVE_LINE}\n{KEEP_LINE}\n")
        } else {
            format!("{KEEP_LINE}\n")
        }
    }
}

/// Tally of a finished house.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseSummary {
    pub rooms: usize,
    pub files: usize,
    pub corrupted: usize,
    pub marked_for_removal: usize,
}

///
/// Draw every random decision for a house without touching the disk.
///
/// For each item, a file count is drawn from
/// `MIN_FILES_PER_ITEM..=MAX_FILES_PER_ITEM`. Each file then independently
/// gets a misspelled item name and a removal note with the probabilities
/// given by `level`. Files are named `{item}_{index:03}.txt`.
///
pub fn plan_mess<R: Rng + ?Sized>(items: &[&str], level: MessLevel, rng: &mut R) -> Vec<HouseFile> {
    let p_corrupt = level.corruption_probability();
    let p_remove = level.removal_probability();

    let mut files = Vec::new();
    for item in items {
        let count = rng.random_range(MIN_FILES_PER_ITEM..=MAX_FILES_PER_ITEM);
        for index in 0..count {
            let corrupted = rng.random::<f64>() < p_corrupt;
            let name = if corrupted {
                corrupt(item, rng)
            } else {
                item.to_string()
            };
            let remove = rng.random::<f64>() < p_remove;

            files.push(HouseFile {
                name: format!("{name}_{index:03}.txt"),
                corrupted,
                remove,
            });
        }
    }

    files
}

/// Create one (empty) subdirectory per room.
pub fn create_rooms(outdir: &Path, rooms: &[&str]) -> Result<()> {
    for room in rooms {
        fs::create_dir_all(outdir.join(room))?;
    }
    Ok(())
}

/// Write a planned file into `outdir`, replacing any file of the same name.
pub fn write_house_file(outdir: &Path, file: &HouseFile) -> Result<()> {
    let path = outdir.join(&file.name);
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(file.contents().as_bytes())?;
    writer.flush()?;
    Ok(())
}

///
/// Create a messy house under `outdir`.
///
/// The room directories from [`ROOMS`] are created but left empty; the
/// item files from [`ITEMS`] are written flat into `outdir`. `outdir`
/// itself must already exist.
///
/// # Arguments:
/// - outdir: path to the (prepared) output directory
/// - level: how messy the house should be
/// - rng: the random source
/// - hide_progress: don't draw a progress bar
///
pub fn create_messy_house<R: Rng + ?Sized>(
    outdir: &Path,
    level: MessLevel,
    rng: &mut R,
    hide_progress: bool,
) -> Result<HouseSummary> {
    info!("Starting to create a messy ({level}) house...");

    info!("Creating rooms");
    create_rooms(outdir, ROOMS)?;

    info!("Creating a mess");
    let files = plan_mess(ITEMS, level, rng);

    let pb = progress_bar(files.len() as u64, "files", hide_progress);
    for file in &files {
        write_house_file(outdir, file)?;
        debug!("Created: {}", file.name);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let summary = summarize(ROOMS.len(), &files);
    info!(
        "Wrote {} files ({} misspelled, {} marked for removal)",
        summary.files, summary.corrupted, summary.marked_for_removal
    );
    info!("Finished creating a messy house.");

    Ok(summary)
}

/// Count what a plan contains.
pub fn summarize(rooms: usize, files: &[HouseFile]) -> HouseSummary {
    HouseSummary {
        rooms,
        files: files.len(),
        corrupted: files.iter().filter(|f| f.corrupted).count(),
        marked_for_removal: files.iter().filter(|f| f.remove).count(),
    }
}
