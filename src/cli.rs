//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::Parser;

/// Create a readable Slack channel log file from a channel export directory.
#[derive(Parser, Debug, Clone)]
#[command(name = "slackmerge")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    slackmerge -d exports/general        # writes exports/general.txt
    slackmerge --data exports/random -v

EXIT CODES:
    0 success, 1 usage, 2 users file missing, 3 wrong file format,
    4 aborted, 5 unknown user, 6 I/O error")]
pub struct Args {
    /// Data directory holding users.json and the daily export files
    #[arg(short, long, value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Returns the log level forced by `-v`/`-q`, if any.
    ///
    /// Without either flag `RUST_LOG` decides, defaulting to `info`.
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        if self.quiet {
            Some(log::LevelFilter::Warn)
        } else if self.verbose {
            Some(log::LevelFilter::Debug)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_short_and_long_data() {
        let args = Args::try_parse_from(["slackmerge", "-d", "exports/general"]).unwrap();
        assert_eq!(args.data, Some(PathBuf::from("exports/general")));

        let args = Args::try_parse_from(["slackmerge", "--data", "x"]).unwrap();
        assert_eq!(args.data, Some(PathBuf::from("x")));
    }

    #[test]
    fn test_data_is_optional_at_parse_time() {
        let args = Args::try_parse_from(["slackmerge"]).unwrap();
        assert!(args.data.is_none());
    }

    #[test]
    fn test_log_level() {
        let args = Args::try_parse_from(["slackmerge", "-v"]).unwrap();
        assert_eq!(args.log_level(), Some(log::LevelFilter::Debug));

        let args = Args::try_parse_from(["slackmerge", "-q"]).unwrap();
        assert_eq!(args.log_level(), Some(log::LevelFilter::Warn));

        let args = Args::try_parse_from(["slackmerge"]).unwrap();
        assert_eq!(args.log_level(), None);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["slackmerge", "-v", "-q"]).is_err());
    }
}
