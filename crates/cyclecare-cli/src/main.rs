use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod logging;

use commands::GlobalArgs;

#[derive(Parser)]
#[command(name = "cyclecare-cli", version, about = "CycleCare CLI")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's cycle status
    Status {
        /// Date to report on instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Classify a single date
    Classify {
        /// Date to classify (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Predict the next cycle start
    Next {
        /// Reference date; the prediction is strictly after it (default: today)
        #[arg(long)]
        after: Option<String>,
        /// Number of upcoming starts to list
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },
    /// Month calendar with phase markers
    Calendar(commands::calendar::CalendarArgs),
    /// Phase-paired suggestions for a day
    Suggest {
        /// Date to suggest for instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Also print the insight request for a text generator
        #[arg(long)]
        prompt: bool,
    },
    /// Stored cycle profile management
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let global = &cli.global;
    let result = match cli.command {
        Commands::Status { date } => commands::status::run(global, date.as_deref()),
        Commands::Classify { date } => commands::status::classify_date(global, &date),
        Commands::Next { after, count } => commands::next::run(global, after.as_deref(), count),
        Commands::Calendar(args) => commands::calendar::run(global, &args),
        Commands::Suggest { date, prompt } => {
            commands::suggest::run(global, date.as_deref(), prompt)
        }
        Commands::Profile { action } => commands::profile::run(global, action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "cyclecare-cli", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
