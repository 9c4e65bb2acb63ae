use std::path::Path;

use log::{debug, info};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use messkit_core::utils::{progress_bar, touch};
use messkit_core::{MessError, Result};

use crate::chaos::ChaosLevel;
use crate::consts::*;
use crate::filename::{FilenameSpec, synthesize};

///
/// The values sample metadata is drawn from.
///
/// Every list holds at least one entry; technology tokens are stored
/// upper-cased.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    organisms: Vec<String>,
    orgs: Vec<String>,
    techs: Vec<String>,
    years: Vec<String>,
}

// Command line lists arrive already split and trimmed by `parse_list`;
// config file lists arrive raw, so both go through this one filter.
fn clean_candidates(values: Vec<String>, what: &'static str) -> Result<Vec<String>> {
    let values: Vec<String> = values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();

    if values.is_empty() {
        return Err(MessError::EmptyCandidates(what));
    }

    Ok(values)
}

impl Candidates {
    pub fn new(
        organisms: Vec<String>,
        orgs: Vec<String>,
        techs: Vec<String>,
        years: Vec<String>,
    ) -> Result<Self> {
        let techs = clean_candidates(techs, "techs")?
            .into_iter()
            .map(|t| t.to_uppercase())
            .collect();

        Ok(Candidates {
            organisms: clean_candidates(organisms, "organisms")?,
            orgs: clean_candidates(orgs, "orgs")?,
            techs,
            years: clean_candidates(years, "years")?,
        })
    }

    pub fn organisms(&self) -> &[String] {
        &self.organisms
    }

    pub fn orgs(&self) -> &[String] {
        &self.orgs
    }

    pub fn techs(&self) -> &[String] {
        &self.techs
    }

    pub fn years(&self) -> &[String] {
        &self.years
    }
}

fn to_owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for Candidates {
    fn default() -> Self {
        Candidates {
            organisms: to_owned_list(DEFAULT_ORGANISMS),
            orgs: to_owned_list(DEFAULT_ORGS),
            techs: to_owned_list(DEFAULT_TECHS),
            years: to_owned_list(DEFAULT_YEARS),
        }
    }
}

// lists are non-empty by construction
fn pick<'a, R: Rng + ?Sized>(values: &'a [String], rng: &mut R) -> &'a str {
    &values[rng.random_range(0..values.len())]
}

/// The files planned for one sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleFiles {
    pub sample_id: String,
    pub tech: String,
    pub filenames: Vec<String>,
}

/// Whether a technology produces paired-end (R1/R2) reads.
pub fn is_paired(tech: &str) -> bool {
    tech.eq_ignore_ascii_case(PAIRED_TECH)
}

/// `SA001`, `SA002`, ...
pub fn sample_id(index: usize) -> String {
    format!("{SAMPLE_PREFIX}{index:03}")
}

///
/// Turn an R1 file name into its R2 mate by swapping `_R1.` for `_R2.`
/// (or `_r1.` for `_r2.`).
///
/// A name holding neither token comes back unchanged.
///
pub fn derive_r2_filename(r1: &str) -> String {
    if r1.contains("_R1.") {
        r1.replace("_R1.", "_R2.")
    } else if r1.contains("_r1.") {
        r1.replace("_r1.", "_r2.")
    } else {
        r1.to_string()
    }
}

///
/// Draw the metadata for sample number `index` and name its files.
///
/// Metadata is drawn in the order organism, org, year, tech.
///
pub fn plan_sample<R: Rng + ?Sized>(
    index: usize,
    candidates: &Candidates,
    chaos: ChaosLevel,
    rng: &mut R,
) -> SampleFiles {
    let sample_id = sample_id(index);
    let organism = pick(&candidates.organisms, rng);
    let org = pick(&candidates.orgs, rng);
    let year = pick(&candidates.years, rng);
    let tech = pick(&candidates.techs, rng);

    let paired = is_paired(tech);
    let spec = FilenameSpec {
        sample_id: &sample_id,
        organism,
        org,
        year,
        tech,
        read_num: if paired { Some(1) } else { None },
    };

    let name = synthesize(&spec, chaos, rng);
    let filenames = if paired {
        let r2 = derive_r2_filename(&name);
        vec![name, r2]
    } else {
        vec![name]
    };

    SampleFiles {
        sample_id,
        tech: tech.to_string(),
        filenames,
    }
}

/// Plan samples `1..=samples`.
pub fn plan_samples<R: Rng + ?Sized>(
    samples: usize,
    candidates: &Candidates,
    chaos: ChaosLevel,
    rng: &mut R,
) -> Vec<SampleFiles> {
    (1..=samples)
        .map(|index| plan_sample(index, candidates, chaos, rng))
        .collect()
}

///
/// Create the planned files, empty, in `outdir`. Returns how many files
/// were created.
///
pub fn write_sample_files(outdir: &Path, sample: &SampleFiles) -> Result<usize> {
    for filename in &sample.filenames {
        touch(&outdir.join(filename))?;
        debug!("Created: {filename}");
    }
    Ok(sample.filenames.len())
}

///
/// Create a messy sequencing directory under `outdir`.
///
/// The run is fully determined by `seed`. `outdir` itself must already
/// exist.
///
/// # Arguments:
/// - outdir: path to the (prepared) output directory
/// - samples: number of samples to generate
/// - candidates: values to draw sample metadata from
/// - chaos: how much naming variation to allow
/// - seed: random seed
/// - hide_progress: don't draw a progress bar
///
pub fn create_sequencing_mess(
    outdir: &Path,
    samples: usize,
    candidates: &Candidates,
    chaos: ChaosLevel,
    seed: u64,
    hide_progress: bool,
) -> Result<usize> {
    info!("Creating sequencing mess with chaos level: {chaos}");
    info!(
        "Generating {samples} samples across {} organizations",
        candidates.orgs.len()
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let plan = plan_samples(samples, candidates, chaos, &mut rng);

    let pb = progress_bar(plan.len() as u64, "samples", hide_progress);
    let mut files_created = 0;
    for sample in &plan {
        files_created += write_sample_files(outdir, sample)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!("Created {files_created} files in {}", outdir.display());
    info!("Mess created successfully! Time to clean it up.");

    Ok(files_created)
}
