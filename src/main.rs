use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use paycheck_planner::cli::{
    handle_config_command, handle_plan_command, handle_quick_command, ConfigArgs, QuickArgs,
};
use paycheck_planner::config::{FlowVariant, PlannerPaths, Settings};

#[derive(Parser)]
#[command(
    name = "paycheck",
    version,
    about = "Step-by-step paycheck allocation wizard",
    long_about = "Paycheck Planner walks a single paycheck through fixed expenses, \
                  wants, and savings or debt goals, checking every allocation \
                  against what you earned, then prints a summary of the plan."
)]
struct Cli {
    /// Flow variant to run (overrides the config file)
    #[arg(long, global = true, value_enum)]
    variant: Option<FlowVariant>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a paycheck interactively
    Plan,

    /// Plan a paycheck in one shot from arguments
    Quick(QuickArgs),

    /// Show current configuration and paths
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so exported summaries on stdout stay clean
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();

    let paths = PlannerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(variant) = cli.variant {
        if variant != settings.variant {
            settings.variant = variant;
            // configured categories only apply to the configured variant
            settings.categories = None;
        }
    }
    settings.validate()?;

    match cli.command {
        Some(Commands::Plan) => {
            handle_plan_command(&settings)?;
        }
        Some(Commands::Quick(args)) => {
            let stdout = io::stdout();
            handle_quick_command(&settings, &args, &mut stdout.lock())?;
        }
        Some(Commands::Config(args)) => {
            let stdout = io::stdout();
            handle_config_command(&paths, &settings, &args, &mut stdout.lock())?;
        }
        None => {
            println!("Paycheck Planner - plan where every dollar of this paycheck goes");
            println!();
            println!("Run 'paycheck plan' to start the wizard.");
            println!("Run 'paycheck --help' for usage information.");
        }
    }

    Ok(())
}
