use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "nts", version, about = "NTS Radio in the terminal", long_about = None)]
pub struct Cli {
    /// Plain text output, no colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file (default: ~/.config/nts/config.toml)
    #[arg(long, global = true, env = "NTS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// What is on air now on both channels, and what is next
    Now {
        /// Show cover art above each channel
        #[arg(long)]
        art: bool,
        /// Art width in pixels (one per column)
        #[arg(long, value_name = "N", requires = "art")]
        art_width: Option<u16>,
        /// Art height in pixels (two per row)
        #[arg(long, value_name = "N", requires = "art")]
        art_height: Option<u16>,
    },
    /// Full schedule for both channels
    Schedule,
    /// Raw live document as pretty-printed JSON
    Json,
    /// About NTS and its streams
    Info,
    /// Print a channel's live stream URL
    Stream {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
        channel: u8,
    },
    /// Play a channel's live stream in the media player
    Play {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
        channel: u8,
    },
    /// Infinite mixtapes
    #[command(subcommand)]
    Mixtape(MixtapeCommand),
}

#[derive(Subcommand, Debug)]
pub enum MixtapeCommand {
    /// List every mixtape
    List,
    /// Find mixtapes by title, subtitle, alias or description
    Search { query: String },
    /// Details for one mixtape
    Info { name: String },
    /// Play one mixtape in the media player
    Play { name: String },
    /// Play random mixtapes until Ctrl-C
    Random,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["nts", "now", "--art", "--no-color", "--art-width", "40"])
                .unwrap();
        assert!(cli.no_color);
        match cli.command {
            Command::Now {
                art,
                art_width,
                art_height,
            } => {
                assert!(art);
                assert_eq!(art_width, Some(40));
                assert_eq!(art_height, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn channel_outside_range_is_a_usage_error() {
        for bad in ["0", "3", "x"] {
            let err = Cli::try_parse_from(["nts", "stream", bad]).unwrap_err();
            assert_eq!(err.exit_code(), 2);
            assert!(matches!(
                err.kind(),
                ErrorKind::ValueValidation | ErrorKind::InvalidValue
            ));
        }
        assert!(Cli::try_parse_from(["nts", "play", "2"]).is_ok());
    }

    #[test]
    fn mixtape_subcommands() {
        let cli = Cli::try_parse_from(["nts", "mixtape", "info", "poolside"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Mixtape(MixtapeCommand::Info { ref name }) if name == "poolside"
        ));
        assert!(Cli::try_parse_from(["nts", "mixtape"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
