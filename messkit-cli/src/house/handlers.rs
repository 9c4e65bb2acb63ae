use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use messkit_core::logging::init_logger;
use messkit_core::prepare_output_dir;
use messkit_house::{MessLevel, create_messy_house};

/// Matches items from CLAP args before building the house
pub fn run_clean_the_house(matches: &ArgMatches) -> Result<()> {
    let verbose = matches.get_flag("verbose");
    let silent = matches.get_flag("silent");
    init_logger(verbose, silent);

    let outdir = matches
        .get_one::<String>("outdir")
        .expect("outdir has a default value");
    let outdir = Path::new(outdir);

    prepare_output_dir(outdir, matches.get_flag("force"))?;

    let level = MessLevel::from_flags(
        matches.get_flag("messy"),
        matches.get_flag("messier"),
        matches.get_flag("messiest"),
    );

    create_messy_house(outdir, level, &mut rand::rng(), silent)
        .with_context(|| format!("Failed to create a messy house in {}", outdir.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::house::cli::create_house_cli;
    use messkit_house::consts::{ITEMS, MIN_FILES_PER_ITEM, ROOMS};
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::fs;

    #[rstest]
    fn test_tidy_house() {
        let tempdir = tempfile::tempdir().unwrap();
        let outdir = tempdir.path().join("house");
        let matches = create_house_cli()
            .try_get_matches_from(["clean-the-house", "--silent", "-o", outdir.to_str().unwrap()])
            .unwrap();

        run_clean_the_house(&matches).unwrap();

        for room in ROOMS {
            assert!(outdir.join(room).is_dir());
        }
        let mut written = 0;
        for entry in fs::read_dir(&outdir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_file() {
                written += 1;
                assert_eq!(fs::read_to_string(&path).unwrap(), "Please keep this item\n");
            }
        }
        assert!(written >= ITEMS.len() * MIN_FILES_PER_ITEM);
    }

    #[rstest]
    fn test_existing_outdir_needs_force() {
        let tempdir = tempfile::tempdir().unwrap();
        let outdir = tempdir.path().to_str().unwrap();

        let matches = create_house_cli()
            .try_get_matches_from(["clean-the-house", "--silent", "-o", outdir])
            .unwrap();
        assert!(run_clean_the_house(&matches).is_err());

        let matches = create_house_cli()
            .try_get_matches_from(["clean-the-house", "--silent", "--force", "--messiest", "-o", outdir])
            .unwrap();
        assert!(run_clean_the_house(&matches).is_ok());
    }
}
