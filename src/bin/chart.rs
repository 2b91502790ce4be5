//! Command-line chart data tool.
//!
//! Computes the same chart data as the HTTP API from a page-view dump,
//! without running the server.
//!
//! # Usage
//!
//! ```bash
//! # Multi-line chart data as JSON
//! cargo run --bin chart -- line page-views.json
//!
//! # Bar chart data as of a fixed day
//! cargo run --bin chart -- bar page-views.json --as-of 2020-03-20
//!
//! # Colored per-restaurant summary, reading stdin
//! cat page-views.json | cargo run --bin chart -- summary
//!
//! # Popularity scores
//! cargo run --bin chart -- scores page-views.json
//!
//! # Allow a longer axis than the default twenty years
//! cargo run --bin chart -- line page-views.json --max-axis-weeks 2080
//! ```

use pageview_charts::application::services::ChartLimits;
use pageview_charts::application::services::chart_limits::{
    DEFAULT_MAX_AXIS_WEEKS, DEFAULT_MAX_CHART_CELLS,
};
use pageview_charts::application::services::page_view_aligner::{
    align, align_at, axis_weeks, bar_chart_at, find_earliest_week, total_views,
};
use pageview_charts::application::services::page_view_scorer;
use pageview_charts::domain::calendar;
use pageview_charts::domain::entities::{RestaurantPageViews, WeekYear};
use pageview_charts::infrastructure::seed::{load_seed_file, parse_seed};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Chart data for restaurant page views.
#[derive(Parser)]
#[command(name = "chart")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print weekly-aligned multi-line chart data as JSON
    Line {
        #[command(flatten)]
        input: InputArgs,

        /// Longest date axis to build, in weeks
        #[arg(long, default_value_t = DEFAULT_MAX_AXIS_WEEKS)]
        max_axis_weeks: usize,

        /// Largest chart to build, axis weeks times series
        #[arg(long, default_value_t = DEFAULT_MAX_CHART_CELLS)]
        max_cells: usize,
    },

    /// Print last-week and average bar chart data as JSON
    Bar(InputArgs),

    /// Print a per-restaurant summary table
    Summary(InputArgs),

    /// Print normalized popularity scores as JSON
    Scores(InputArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Page-view JSON file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Day treated as "now" (YYYY-MM-DD, default: today)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Emit compact JSON
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Line {
            input: args,
            max_axis_weeks,
            max_cells,
        } => {
            let series = read_series(&args).await?;
            let limits = ChartLimits {
                max_axis_weeks,
                max_cells,
            };
            limits
                .check(&series, as_of(&args))
                .context("Refusing to build line chart")?;

            let dataset = match args.as_of {
                Some(today) => align_at(&series, today),
                None => align(&series),
            };
            print_json(&dataset, args.compact)?;
        }
        Commands::Bar(args) => {
            let series = read_series(&args).await?;
            let bar = bar_chart_at(&series, as_of(&args));
            print_json(&bar, args.compact)?;
        }
        Commands::Summary(args) => {
            let series = read_series(&args).await?;
            print_summary(&series, as_of(&args));
        }
        Commands::Scores(args) => {
            let series = read_series(&args).await?;
            print_json(&page_view_scorer::scores(&series), args.compact)?;
        }
    }

    Ok(())
}

fn as_of(args: &InputArgs) -> NaiveDate {
    args.as_of.unwrap_or_else(calendar::today)
}

async fn read_series(args: &InputArgs) -> Result<Vec<RestaurantPageViews>> {
    match args.input {
        Some(ref path) => Ok(load_seed_file(path).await?),
        None => {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("Failed to read stdin")?;
            parse_seed(&raw).context("Failed to parse page views from stdin")
        }
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", rendered);
    Ok(())
}

/// Prints one row per restaurant plus the axis span.
///
/// # Output Format
///
/// ```text
/// Page Views (as of 2020-03-20)
///
///   Restaurant                     Weeks  Total      Average    Last week
///   ───────────────────────────────────────────────────────────────────────
///   Wildfire                       2      12         6.00       10
///   Poke Doke                      1      8          8.00       8
/// ```
fn print_summary(series: &[RestaurantPageViews], today: NaiveDate) {
    println!(
        "{} {}",
        "Page Views".bright_blue().bold(),
        format!("(as of {})", today).bright_black()
    );
    println!();

    if series.is_empty() {
        println!("{}", "  No page views found".yellow());
        return;
    }

    let bar = bar_chart_at(series, today);

    println!(
        "  {:<30} {:<6} {:<10} {:<10} {}",
        "Restaurant".bright_white().bold(),
        "Weeks".bright_white().bold(),
        "Total".bright_white().bold(),
        "Average".bright_white().bold(),
        "Last week".bright_white().bold()
    );
    println!("  {}", "─".repeat(71).bright_black());

    let rows = series
        .iter()
        .zip(bar.last_week_counts())
        .zip(bar.averages());

    for ((restaurant, last_week), average) in rows {
        let total = total_views(restaurant);
        let last_week = if *last_week == 0 {
            last_week.to_string().bright_black()
        } else {
            last_week.to_string().green()
        };

        println!(
            "  {:<30} {:<6} {:<10} {:<10} {}",
            restaurant.name.cyan(),
            restaurant.page_views.len(),
            total,
            format!("{:.2}", average),
            last_week
        );
    }

    println!();
    match find_earliest_week(series).and_then(|week| week.start_date()) {
        Some(start) => {
            let weeks = axis_weeks(series, today);
            println!(
                "  Axis: {} weeks from {}",
                weeks.to_string().bright_white().bold(),
                start
            );
        }
        None => println!("{}", "  Axis: no datable records".yellow()),
    }

    if let Some(current) = WeekYear::containing(today) {
        println!(
            "  Current week: {} of {}",
            current.week.to_string().bright_white().bold(),
            current.year
        );
    }
    println!();
}
