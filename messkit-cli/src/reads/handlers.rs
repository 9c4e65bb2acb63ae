use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;

use messkit_core::logging::init_logger;
use messkit_core::prepare_output_dir;
use messkit_core::utils::parse_list;
use messkit_reads::consts::*;
use messkit_reads::{Candidates, ChaosLevel, ReadsConfig, create_sequencing_mess};

/// Everything a run needs, after merging the command line, the config file
/// and the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadsSettings {
    pub samples: usize,
    pub candidates: Candidates,
    pub chaos: ChaosLevel,
    pub outdir: PathBuf,
    pub seed: u64,
}

fn list_option(
    matches: &ArgMatches,
    name: &str,
    from_config: Option<Vec<String>>,
    default: &[&str],
) -> Vec<String> {
    match matches.get_one::<String>(name) {
        Some(value) => parse_list(value),
        None => from_config.unwrap_or_else(|| default.iter().map(|v| v.to_string()).collect()),
    }
}

impl ReadsSettings {
    ///
    /// Resolve settings: command line first, then the config file, then
    /// the built-in defaults.
    ///
    pub fn resolve(matches: &ArgMatches, config: ReadsConfig) -> Result<Self> {
        let chaos: ChaosLevel = match matches.get_one::<String>("chaos") {
            Some(chaos) => chaos.parse()?,
            None => config.chaos_level()?.unwrap_or_default(),
        };

        let candidates = Candidates::new(
            list_option(matches, "organisms", config.organisms, DEFAULT_ORGANISMS),
            list_option(matches, "orgs", config.orgs, DEFAULT_ORGS),
            list_option(matches, "techs", config.techs, DEFAULT_TECHS),
            list_option(matches, "years", config.years, DEFAULT_YEARS),
        )?;

        let samples = matches
            .get_one::<usize>("samples")
            .copied()
            .or(config.samples)
            .unwrap_or(DEFAULT_SAMPLES);

        let seed = matches
            .get_one::<u64>("seed")
            .copied()
            .or(config.seed)
            .unwrap_or(DEFAULT_SEED);

        let outdir = matches
            .get_one::<String>("outdir")
            .map(PathBuf::from)
            .or(config.outdir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTDIR));

        Ok(ReadsSettings {
            samples,
            candidates,
            chaos,
            outdir,
            seed,
        })
    }
}

/// Matches items from CLAP args before generating the read files
pub fn run_create_sequencing_mess(matches: &ArgMatches) -> Result<()> {
    let verbose = matches.get_flag("verbose");
    let silent = matches.get_flag("silent");
    init_logger(verbose, silent);

    let config = match matches.get_one::<String>("config") {
        Some(path) => ReadsConfig::from_file(Path::new(path))
            .with_context(|| format!("Failed to load config file: {path}"))?,
        None => ReadsConfig::default(),
    };
    let settings = ReadsSettings::resolve(matches, config)?;
    let outdir = settings.outdir.as_path();

    prepare_output_dir(outdir, matches.get_flag("force"))?;

    create_sequencing_mess(
        outdir,
        settings.samples,
        &settings.candidates,
        settings.chaos,
        settings.seed,
        silent,
    )
    .with_context(|| format!("Failed to create sequencing mess in {}", outdir.display()))?;

    Ok(())
}
