use crate::package::CompressionLevel;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Command-line arguments for the h5pack tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Prompt for a single folder, package it and exit
    pub once: bool,

    /// Compression applied to archive entries
    pub level: CompressionLevel,

    /// Folder to package without any prompt
    pub path: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        Self::from_matches(&Self::command().get_matches())
    }

    pub fn command() -> Command {
        Command::new("h5pack")
            .version(clap::crate_version!())
            .about("Package a folder of H5P content into a distributable .h5p file")
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("DIR")
                    .help("Package DIR directly and exit, without prompting")
            )
            .arg(
                Arg::new("once")
                    .short('o')
                    .long("once")
                    .action(ArgAction::SetTrue)
                    .help("Ask for a single folder, package it and exit (no menu)")
            )
            .arg(
                Arg::new("level")
                    .short('l')
                    .long("level")
                    .value_name("LEVEL")
                    .env("H5PACK_LEVEL")
                    .value_parser(["optimal", "fastest", "smallest", "store"])
                    .ignore_case(true)
                    .default_value("optimal")
                    .help("Compression level for archive entries")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            verbose: matches.get_flag("verbose"),
            once: matches.get_flag("once"),
            level: matches
                .get_one::<String>("level")
                .and_then(|level| level.parse().ok())
                .unwrap_or_default(),
            path: matches.get_one::<String>("path").map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::from_matches(&Args::command().try_get_matches_from(argv).unwrap())
    }

    #[test]
    fn test_defaults_to_menu() {
        let args = parse(&["h5pack"]);
        assert!(!args.once);
        assert!(!args.verbose);
        assert!(args.path.is_none());
    }

    #[test]
    fn test_path_and_level() {
        let args = parse(&["h5pack", "-p", "lesson1", "--level", "smallest", "-v"]);
        assert_eq!(args.path, Some(PathBuf::from("lesson1")));
        assert_eq!(args.level, CompressionLevel::Smallest);
        assert!(args.verbose);
    }

    #[test]
    fn test_level_ignores_case() {
        let args = parse(&["h5pack", "--level", "Smallest"]);
        assert_eq!(args.level, CompressionLevel::Smallest);

        let args = parse(&["h5pack", "-l", "STORE"]);
        assert_eq!(args.level, CompressionLevel::Store);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        assert!(Args::command()
            .try_get_matches_from(["h5pack", "--level", "ultra"])
            .is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }
}
