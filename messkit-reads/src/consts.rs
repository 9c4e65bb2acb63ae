pub const READS_CMD: &str = "create-sequencing-mess";
pub const VERSION: &str = "0.1.0";

pub const DEFAULT_OUTDIR: &str = "./messy-reads";
pub const DEFAULT_SAMPLES: usize = 5;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_CHAOS: &str = "low";

pub const DEFAULT_ORGANISMS: &[&str] = &["FLU", "COVID", "RSV", "MPOX", "MEAS"];
pub const DEFAULT_ORGS: &[&str] = &["WPHL", "WY", "UW", "WSLV", "CDC", "APHL"];
pub const DEFAULT_TECHS: &[&str] = &["ILLUMINA", "ONT", "PACBIO"];
pub const DEFAULT_YEARS: &[&str] = &["2019", "2020", "2021", "2022", "2023", "2024", "2025"];

/// The only paired-end technology.
pub const PAIRED_TECH: &str = "ILLUMINA";

pub const SEPARATORS: &[char] = &['-', '_'];
pub const READS_EXTENSION: &str = ".fastq.gz";
pub const SAMPLE_PREFIX: &str = "SA";
