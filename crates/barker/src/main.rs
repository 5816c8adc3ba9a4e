use barker::proto::{self, ControlCommand};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "barker", version, about = "Remote control for the marquee carousel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Advance to the next slide
    Next,
    /// Go back to the previous slide
    Previous,
    /// Jump straight to the slide at the given index
    Select {
        /// Zero-based slide index
        index: usize,
    },
    /// Reload the slide deck from the config file
    Reload,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let command = match cli.command {
        Commands::Next => ControlCommand::Next,
        Commands::Previous => ControlCommand::Previous,
        Commands::Select { index } => ControlCommand::Select(index),
        Commands::Reload => ControlCommand::Reload,
    };

    proto::send(command)
}
