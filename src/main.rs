use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use expense_trend::cli::{
    handle_budget_command, handle_categories_command, handle_expense_command,
    handle_trend_command, BudgetCommands, ExpenseCommands, FilterArgs, TrendArgs,
};
use expense_trend::config::{paths::TrendPaths, settings::Settings};
use expense_trend::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense-trend",
    version,
    about = "Expense trends and budget depletion from the command line",
    long_about = "expense-trend records expenses and turns them into a spend-over-time \
                  series and a remaining-budget series, either per expense or summed \
                  into day, week, month or year buckets."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record, list and delete expenses
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Show or change the budget figure
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Spend and remaining-budget series
    Trend(TrendArgs),

    /// Spend per category
    Categories(FilterArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = TrendPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Trend(args)) => handle_trend_command(&storage, &settings, args)?,
        Some(Commands::Categories(args)) => handle_categories_command(&storage, &settings, args)?,
        Some(Commands::Config) => {
            println!("expense-trend Configuration");
            println!("===========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!("Profile file:    {}", paths.profile_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Date format:         {}", settings.date_format);
            println!("  Default view:        {}", settings.default_view);
            println!("  Default granularity: {}", settings.default_granularity);
            println!(
                "  Auto view granular up to {} day(s) or {} expense(s)",
                settings.auto_thresholds.max_span_days, settings.auto_thresholds.max_count
            );
        }
        None => {
            println!("expense-trend - expense trends and budget depletion");
            println!();
            println!("Run 'expense-trend --help' for usage information.");
        }
    }

    Ok(())
}
