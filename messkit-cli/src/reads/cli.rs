use clap::builder::PossibleValuesParser;
use clap::{Arg, Command, arg};

pub use messkit_reads::consts::*;

pub fn create_reads_cli() -> Command {
    Command::new(READS_CMD)
        .bin_name(READS_CMD)
        .version(VERSION)
        .about("Generate messy sequencing files for command-line training exercises.")
        .long_about(
            "Generate messy sequencing files for command-line training exercises.\n\n\
            Creates empty .fastq.gz files with realistic naming patterns and configurable \
            levels of chaos. Illumina files are paired-end (R1/R2), while ONT and PacBio \
            files are single-end.\n\n\
            Chaos levels:\n  \
            low    - Standard format, dashes OR underscores, lowercase OR CAPS\n  \
            medium - Standard format, dashes OR underscores, all case variants\n  \
            high   - Shuffled metadata order, mixed separators, all case variants",
        )
        .arg(
            Arg::new("samples")
                .short('s')
                .long("samples")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help(format!("Number of samples to generate [default: {DEFAULT_SAMPLES}]")),
        )
        .arg(
            Arg::new("organisms")
                .long("organisms")
                .value_name("LIST")
                .help(format!(
                    "Comma-separated list of organism shorthand names [default: {}]",
                    DEFAULT_ORGANISMS.join(",")
                )),
        )
        .arg(
            Arg::new("orgs")
                .long("orgs")
                .value_name("LIST")
                .help(format!(
                    "Comma-separated list of organization names [default: {}]",
                    DEFAULT_ORGS.join(",")
                )),
        )
        .arg(
            Arg::new("techs")
                .long("techs")
                .value_name("LIST")
                .help(format!(
                    "Comma-separated list of sequencing technologies [default: {}]",
                    DEFAULT_TECHS.join(",")
                )),
        )
        .arg(
            Arg::new("years")
                .long("years")
                .value_name("LIST")
                .help(format!(
                    "Comma-separated list of years [default: {}]",
                    DEFAULT_YEARS.join(",")
                )),
        )
        .arg(
            Arg::new("chaos")
                .long("chaos")
                .value_name("LEVEL")
                .value_parser(PossibleValuesParser::new(["low", "medium", "high"]))
                .ignore_case(true)
                .help(format!(
                    "Level of naming chaos (low=minimal variation, high=maximum chaos) [default: {DEFAULT_CHAOS}]"
                )),
        )
        .arg(
            Arg::new("outdir")
                .short('o')
                .long("outdir")
                .value_name("DIR")
                .help(format!("Directory to write the output files to [default: {DEFAULT_OUTDIR}]")),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .value_parser(clap::value_parser!(u64))
                .help(format!("Random seed for reproducible output [default: {DEFAULT_SEED}]")),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML file with default settings; command line options take precedence"),
        )
        .arg(arg!(--force "Overwrite existing output directory"))
        .arg(arg!(--verbose "Increase the verbosity of output"))
        .arg(arg!(--silent "Only critical errors will be printed"))
}
