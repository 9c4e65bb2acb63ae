use std::fmt;
use std::str::FromStr;

use messkit_core::MessError;

use crate::case::CaseStyle;

/// How much variation goes into each generated file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChaosLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl ChaosLevel {
    /// The case styles a file name may be drawn in.
    pub fn case_styles(&self) -> &'static [CaseStyle] {
        match self {
            ChaosLevel::Low => &[CaseStyle::Lowercase, CaseStyle::Caps],
            ChaosLevel::Medium | ChaosLevel::High => &[
                CaseStyle::Lowercase,
                CaseStyle::Caps,
                CaseStyle::CamelCase,
                CaseStyle::DashCase,
            ],
        }
    }

    /// Whether the two separator slots are drawn independently.
    pub fn mixes_separators(&self) -> bool {
        matches!(self, ChaosLevel::High)
    }

    /// Whether the metadata fields are shuffled.
    pub fn shuffles_fields(&self) -> bool {
        matches!(self, ChaosLevel::High)
    }
}

impl FromStr for ChaosLevel {
    type Err = MessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(ChaosLevel::Low),
            "medium" => Ok(ChaosLevel::Medium),
            "high" => Ok(ChaosLevel::High),
            _ => Err(MessError::InvalidChaosLevel(s.to_string())),
        }
    }
}

impl fmt::Display for ChaosLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChaosLevel::Low => "low",
            ChaosLevel::Medium => "medium",
            ChaosLevel::High => "high",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("low", ChaosLevel::Low)]
    #[case("MEDIUM", ChaosLevel::Medium)]
    #[case(" High ", ChaosLevel::High)]
    fn test_parse_chaos_level(#[case] value: &str, #[case] expected: ChaosLevel) {
        assert_eq!(value.parse::<ChaosLevel>().unwrap(), expected);
    }

    #[rstest]
    fn test_default_matches_const() {
        assert_eq!(
            crate::consts::DEFAULT_CHAOS.parse::<ChaosLevel>().unwrap(),
            ChaosLevel::default()
        );
    }

    #[rstest]
    fn test_parse_bad_chaos_level() {
        let res = "extreme".parse::<ChaosLevel>();
        assert!(matches!(res, Err(MessError::InvalidChaosLevel(_))));
    }

    #[rstest]
    fn test_display_round_trips() {
        for level in [ChaosLevel::Low, ChaosLevel::Medium, ChaosLevel::High] {
            assert_eq!(level.to_string().parse::<ChaosLevel>().unwrap(), level);
        }
    }

    #[rstest]
    fn test_low_only_plain_cases() {
        assert_eq!(
            ChaosLevel::Low.case_styles(),
            &[CaseStyle::Lowercase, CaseStyle::Caps]
        );
        assert_eq!(ChaosLevel::Medium.case_styles().len(), 4);
        assert!(!ChaosLevel::Medium.mixes_separators());
        assert!(!ChaosLevel::Medium.shuffles_fields());
        assert!(ChaosLevel::High.mixes_separators());
        assert!(ChaosLevel::High.shuffles_fields());
    }
}
