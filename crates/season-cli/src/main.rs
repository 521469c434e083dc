use season_cli::{months, of, predicate};

use anyhow::Result;
use clap::{Parser, Subcommand};
use season_filter::Hemisphere;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the WHERE fragment for a season selection
    Predicate(predicate::Args),

    /// Print the season a date falls in
    Of {
        /// Date as YYYY-MM-DD
        date: String,

        #[clap(long, default_value = "northern")]
        hemisphere: Hemisphere,
    },

    /// Print the month table
    Months {
        #[clap(long)]
        hemisphere: Option<Hemisphere>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Predicate(args) => predicate::exec(&args, &mut stdout),
        Command::Of { date, hemisphere } => of::exec(&date, hemisphere, &mut stdout),
        Command::Months { hemisphere } => months::exec(hemisphere, &mut stdout),
    }
}
