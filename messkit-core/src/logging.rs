use log::LevelFilter;

///
/// Pick the log level from the `--verbose` / `--silent` pair.
///
/// `--silent` wins if both are given.
///
pub fn level_from_flags(verbose: bool, silent: bool) -> LevelFilter {
    if silent {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

///
/// Initialise the global logger on stderr.
///
/// Calling this more than once is harmless; later calls are ignored.
///
pub fn init_logger(verbose: bool, silent: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(level_from_flags(verbose, silent))
        .format_timestamp_secs()
        .target(env_logger::Target::Stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(false, false, LevelFilter::Info)]
    #[case(true, false, LevelFilter::Debug)]
    #[case(false, true, LevelFilter::Error)]
    #[case(true, true, LevelFilter::Error)]
    fn test_level_from_flags(#[case] verbose: bool, #[case] silent: bool, #[case] expected: LevelFilter) {
        assert_eq!(level_from_flags(verbose, silent), expected);
    }

    #[rstest]
    fn test_init_logger_twice() {
        init_logger(false, true);
        init_logger(true, false);
    }
}
