use anyhow::{Context, Result};
use season_filter::{
    EmptySelectionPolicy, FilterOptions, Flavor, Hemisphere, Operator, SeasonFilter,
};
use std::{io::Write, path::PathBuf};

#[derive(clap::Args, Debug, Default)]
pub struct Args {
    /// Date column as `table.column`, `column`, or a SQL expression
    #[clap(short, long, required_unless_present = "options")]
    pub column: Option<String>,

    /// Database driver name (mysql, pgsql, sqlite); others render ANSI SQL
    #[clap(short, long)]
    pub dialect: Option<String>,

    #[clap(long)]
    pub hemisphere: Option<Hemisphere>,

    /// Season to select; repeat or separate with commas
    #[clap(short, long = "season")]
    pub seasons: Vec<String>,

    /// Match dates outside the selected seasons
    #[clap(long)]
    pub negate: bool,

    /// Resolution of an empty selection: match-all or match-none
    #[clap(long)]
    pub empty_selection: Option<EmptySelectionPolicy>,

    /// Load filter options from a JSON file; flags override its values
    #[clap(long)]
    pub options: Option<PathBuf>,
}

pub fn exec(args: &Args, out: &mut impl Write) -> Result<()> {
    let options = options(args)?;
    let filter = SeasonFilter::new(&options).context("invalid season filter")?;

    log::debug!("{}", filter.admin_summary());

    match filter.where_clause() {
        Some(sql) => writeln!(out, "{sql}")?,
        None => writeln!(out, "-- no predicate")?,
    }

    Ok(())
}

fn options(args: &Args) -> Result<FilterOptions> {
    let mut options = match &args.options {
        Some(path) => FilterOptions::from_path(path)?,
        None => FilterOptions::new(""),
    };

    if let Some(column) = &args.column {
        options.column = column.clone();
    }

    if let Some(dialect) = &args.dialect {
        options.dialect = Flavor::from_driver(dialect);
    }

    if let Some(hemisphere) = args.hemisphere {
        options.hemisphere = hemisphere;
    }

    if !args.seasons.is_empty() {
        options.seasons = args
            .seasons
            .iter()
            .flat_map(|token| token.split(','))
            .map(|token| token.trim().to_string())
            .collect();
    }

    if args.negate {
        options.operator = Operator::NotIn;
    }

    if args.empty_selection.is_some() {
        options.empty_selection = args.empty_selection;
    }

    Ok(options)
}
