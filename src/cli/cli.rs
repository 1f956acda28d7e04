use std::path::PathBuf;

use clap::Parser;

use crate::application::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Polls a directory tree and reports added and removed paths")]
pub struct Cli {
    /// Directory to watch for changes
    #[clap(long, short, default_value = "./")]
    pub target_directory: PathBuf,

    /// Milliseconds to wait between two scans of the target directory
    #[clap(long, short, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: u64,

    #[clap(long, short, default_value = "info", value_enum)]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["fswatch"]).expect("Defaults should parse");

        assert_eq!(cli.target_directory, PathBuf::from("./"));
        assert_eq!(cli.interval_ms, 1000);
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[rstest]
    #[case(&["fswatch", "--target-directory", "/srv/data"], "/srv/data", 1000)]
    #[case(&["fswatch", "-t", "./testdir", "-i", "250"], "./testdir", 250)]
    #[case(&["fswatch", "--interval-ms", "1"], "./", 1)]
    fn test_explicit_arguments(
        #[case] args: &[&str],
        #[case] target: &str,
        #[case] interval_ms: u64,
    ) {
        let cli = Cli::try_parse_from(args).expect("Arguments should parse");

        assert_eq!(cli.target_directory, PathBuf::from(target));
        assert_eq!(cli.interval_ms, interval_ms);
    }

    #[rstest]
    #[case(&["fswatch", "--interval-ms", "0"])]
    #[case(&["fswatch", "--interval-ms", "soon"])]
    #[case(&["fswatch", "--log-level", "verbose"])]
    fn test_rejects_invalid_arguments(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_silent_log_level_disables_tracing() {
        let cli = Cli::try_parse_from(["fswatch", "-l", "silent"]).expect("Arguments should parse");

        assert_eq!(cli.log_level.to_tracing_level(), None);
    }
}
