use crate::commands::{
    run_daily, run_deal, run_launch_days, run_numerology, run_pipeline, DailyArgs, DealArgs,
    LaunchDaysArgs, NumerologyArgs, PipelineArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use vibeworks_hub::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "VibeWorks Hub",
    about = "Serve or query the VibeWorks Hub numerology and business-timing scores",
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
    /// Compute a single insight from the command line
    Insights {
        #[command(subcommand)]
        command: InsightsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum InsightsCommand {
    /// Life path, sun sign and today's universal day for a birth date
    Numerology(NumerologyArgs),
    /// Closing probability for one deal
    Deal(DealArgs),
    /// Moon phase, tarot card and category scores for a day
    Daily(DailyArgs),
    /// Upcoming days aligned for launches
    LaunchDays(LaunchDaysArgs),
    /// Score every deal in a CRM pipeline CSV export
    Pipeline(PipelineArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Insights { command } => match command {
            InsightsCommand::Numerology(args) => run_numerology(args),
            InsightsCommand::Deal(args) => run_deal(args),
            InsightsCommand::Daily(args) => run_daily(args),
            InsightsCommand::LaunchDays(args) => run_launch_days(args),
            InsightsCommand::Pipeline(args) => run_pipeline(args),
        },
    }
}
