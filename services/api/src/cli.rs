use crate::report::{run_config_report, run_score_report, ConfigArgs, ScoreArgs};
use crate::server;
use crate::take::{run_take, TakeArgs};
use clap::{Args, Parser, Subcommand};
use maturity_check::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Onboarding Maturity Check",
    about = "Serve and run the Onboarding Maturity Check quiz from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a list of answers and print the matching result tier
    Score(ScoreArgs),
    /// Print the effective quiz configuration as JSON
    Config(ConfigArgs),
    /// Take the quiz interactively in the terminal
    Take(TakeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Persist the quiz configuration to this JSON file instead of memory
    #[arg(long)]
    pub(crate) store: Option<PathBuf>,
    /// Directory holding the built single-page application
    #[arg(long)]
    pub(crate) public_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score_report(args),
        Command::Config(args) => run_config_report(args),
        Command::Take(args) => run_take(args),
    }
}
