use rand::Rng;
use rand::seq::SliceRandom;

use crate::case::CaseStyle;
use crate::chaos::ChaosLevel;
use crate::consts::{READS_EXTENSION, SEPARATORS};

/// The fields a read file name is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilenameSpec<'a> {
    pub sample_id: &'a str,
    pub organism: &'a str,
    pub org: &'a str,
    pub year: &'a str,
    pub tech: &'a str,
    /// `Some(1)` / `Some(2)` for paired-end reads, `None` for single-end.
    pub read_num: Option<u8>,
}

///
/// The two separator slots of a file name.
///
/// `primary` goes after the sample id and between the metadata fields;
/// `secondary` goes between the metadata and the technology.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    pub primary: char,
    pub secondary: char,
}

/// Every random decision behind a single file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingChoice {
    pub case: CaseStyle,
    pub separators: Separators,
    /// Indices into `[organism, org, year]`.
    pub field_order: [usize; 3],
}

fn random_separator<R: Rng + ?Sized>(rng: &mut R) -> char {
    SEPARATORS[rng.random_range(0..SEPARATORS.len())]
}

///
/// Draw the case style, the separators and the field order for one name.
///
/// The draws happen in that order, so a seeded generator always yields the
/// same sequence of choices.
///
pub fn choose_naming<R: Rng + ?Sized>(chaos: ChaosLevel, rng: &mut R) -> NamingChoice {
    let styles = chaos.case_styles();
    let case = styles[rng.random_range(0..styles.len())];

    let primary = random_separator(rng);
    let secondary = if chaos.mixes_separators() {
        random_separator(rng)
    } else {
        primary
    };

    let mut field_order = [0, 1, 2];
    if chaos.shuffles_fields() {
        field_order.shuffle(rng);
    }

    NamingChoice {
        case,
        separators: Separators { primary, secondary },
        field_order,
    }
}

///
/// Put a file name together from its fields and a set of choices.
///
/// The result has the shape
/// `{sample_id}{sep1}{metadata joined by sep1}{sep2}{tech}[_R{n}].fastq.gz`.
/// The read suffix keeps its upper-case `R` unless the case style is
/// [`CaseStyle::Lowercase`].
///
pub fn compose_filename(spec: &FilenameSpec, choice: &NamingChoice) -> String {
    let case = choice.case;
    let Separators { primary, secondary } = choice.separators;

    let fields = [spec.organism, spec.org, spec.year];
    let metadata: Vec<String> = choice
        .field_order
        .iter()
        .map(|&i| case.apply(fields[i]))
        .collect();
    let metadata = metadata.join(primary.to_string().as_str());

    let read_suffix = match spec.read_num {
        Some(n) if case == CaseStyle::Lowercase => format!("_r{n}"),
        Some(n) => format!("_R{n}"),
        None => String::new(),
    };

    format!(
        "{}{primary}{metadata}{secondary}{}{read_suffix}{READS_EXTENSION}",
        case.apply(spec.sample_id),
        case.apply(spec.tech),
    )
}

///
/// Generate a file name for `spec` with the amount of chaos given by `chaos`.
///
/// # Arguments:
/// - spec: the sample fields
/// - chaos: how much variation to allow
/// - rng: the random source
///
pub fn synthesize<R: Rng + ?Sized>(spec: &FilenameSpec, chaos: ChaosLevel, rng: &mut R) -> String {
    let choice = choose_naming(chaos, rng);
    compose_filename(spec, &choice)
}
