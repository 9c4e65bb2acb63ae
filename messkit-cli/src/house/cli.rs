use clap::{Arg, Command, arg};

pub use messkit_house::consts::*;

pub fn create_house_cli() -> Command {
    Command::new(HOUSE_CMD)
        .bin_name(HOUSE_CMD)
        .version(VERSION)
        .about("A command-line tool to generate a messy house that needs cleaning.")
        .arg(
            Arg::new("outdir")
                .short('o')
                .long("outdir")
                .value_name("DIR")
                .default_value(DEFAULT_OUTDIR)
                .help("Directory to write the output files to"),
        )
        .arg(arg!(--messy "Create a messy house"))
        .arg(arg!(--messier "Create a messier house"))
        .arg(arg!(--messiest "Create the messiest house"))
        .arg(arg!(--force "Overwrite the existing output directory"))
        .arg(arg!(--verbose "Increase the verbosity of output"))
        .arg(arg!(--silent "Only critical errors will be printed"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_defaults() {
        let matches = create_house_cli().try_get_matches_from([HOUSE_CMD]).unwrap();

        assert_eq!(matches.get_one::<String>("outdir").unwrap(), DEFAULT_OUTDIR);
        assert!(!matches.get_flag("messy"));
        assert!(!matches.get_flag("force"));
    }

    #[rstest]
    fn test_flags() {
        let matches = create_house_cli()
            .try_get_matches_from([HOUSE_CMD, "-o", "tidy", "--messy", "--messier", "--force"])
            .unwrap();

        assert_eq!(matches.get_one::<String>("outdir").unwrap(), "tidy");
        assert!(matches.get_flag("messy"));
        assert!(matches.get_flag("messier"));
        assert!(!matches.get_flag("messiest"));
        assert!(matches.get_flag("force"));
    }

    #[rstest]
    fn test_version_flag() {
        let err = create_house_cli()
            .try_get_matches_from([HOUSE_CMD, "--version"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[rstest]
    fn test_unknown_flag() {
        assert!(
            create_house_cli()
                .try_get_matches_from([HOUSE_CMD, "--tidy"])
                .is_err()
        );
    }
}
