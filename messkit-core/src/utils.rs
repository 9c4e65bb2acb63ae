use std::fs::File;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

///
/// Split a comma-separated option value into trimmed tokens.
///
/// Empty tokens (e.g. from a trailing comma) are dropped.
///
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Create (or truncate) an empty file.
pub fn touch(path: &Path) -> std::io::Result<()> {
    File::create(path)?;
    Ok(())
}

///
/// A progress bar for `len` steps, or a hidden one when `hidden` is set.
///
pub fn progress_bar(len: u64, unit: &str, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    let template = format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos}}/{{len}} {unit} ({{eta}})");
    match ProgressStyle::default_bar().template(&template) {
        Ok(style) => pb.set_style(style.progress_chars("##-")),
        Err(_) => pb.set_style(ProgressStyle::default_bar()),
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("FLU,COVID,RSV", vec!["FLU", "COVID", "RSV"])]
    #[case(" FLU , COVID ", vec!["FLU", "COVID"])]
    #[case("WPHL,", vec!["WPHL"])]
    #[case("", vec![])]
    fn test_parse_list(#[case] value: &str, #[case] expected: Vec<&str>) {
        assert_eq!(parse_list(value), expected);
    }

    #[rstest]
    fn test_touch_creates_empty_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("SA001_ONT.fastq.gz");

        touch(&path).unwrap();

        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    }

    #[rstest]
    fn test_hidden_progress_bar() {
        let pb = progress_bar(10, "files", true);
        assert!(pb.is_hidden());
    }
}
