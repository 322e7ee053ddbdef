use crate::demo::{run_demo, DemoArgs};
use crate::infra::bootstrap;
use crate::search::{run_options, run_search, SearchArgs};
use clap::{Parser, Subcommand};
use consultant_directory::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "consultant-directory",
    about = "Search the consultant directory the way the listing page does",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply filters and list matching consultants (default command)
    Search(SearchArgs),
    /// Show the expertise vocabulary and rate bounds the filters accept
    Options,
    /// Replay a listing-page session: filter, search, clear
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Search(SearchArgs::default()));

    let context = bootstrap()?;

    match command {
        Command::Search(args) => run_search(&context, args),
        Command::Options => run_options(&context),
        Command::Demo(args) => run_demo(&context, args),
    }
}
