mod commands;
mod terminal;

use commands::{CommandLine, Commands, classify, rank};
use dialr_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    match commands.command {
        Commands::Rank {
            groups,
            keep_unusable,
            excluded,
            prefer,
        } => {
            print::header("ranking endpoints");
            let cfg = Config {
                keep_unusable,
                excluded,
                preferred: prefer,
            };
            rank::rank(&groups, &cfg)
        }
        Commands::Classify { values } => {
            print::header("classifying addresses");
            classify::classify(&values);
            Ok(())
        }
    }
}
