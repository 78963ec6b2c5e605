//! TaskRank CLI - rank a batch of tasks by priority.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use taskrank_engine::{PriorityEngine, Strategy};
use tracing::{info, Level};

mod input;

use input::load_batch;

#[derive(Parser)]
#[command(name = "taskrank")]
#[command(about = "Task priority analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a task batch by priority
    Analyze {
        /// JSON file containing the task batch
        file: PathBuf,
        /// Scoring strategy (overrides one named in the file)
        #[arg(long)]
        strategy: Option<String>,
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        now: Option<NaiveDate>,
        /// Emit the full analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Suggest the top tasks to work on next
    Suggest {
        /// JSON file containing the task batch
        file: PathBuf,
        /// Scoring strategy (overrides one named in the file)
        #[arg(long)]
        strategy: Option<String>,
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        now: Option<NaiveDate>,
        /// Number of suggestions
        #[arg(long, default_value = "3")]
        count: usize,
    },
    /// List available strategies and their weights
    Strategies,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            strategy,
            now,
            json,
        } => {
            let batch = load_batch(&file)?;
            info!("loaded {} task(s) from {}", batch.tasks.len(), file.display());

            let engine =
                PriorityEngine::new(resolve_strategy(strategy, batch.strategy.as_deref()));
            let analysis = engine.analyze(&batch.tasks, resolve_now(now));

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
                return Ok(());
            }

            if !analysis.circular_dependencies.is_empty() {
                println!(
                    "Warning: {} circular dependency chain(s) detected:",
                    analysis.circular_dependencies.len()
                );
                for cycle in analysis.circular_dependencies.cycles() {
                    let chain: Vec<String> = cycle.iter().map(ToString::to_string).collect();
                    println!("  {}", chain.join(" -> "));
                }
            }

            println!(
                "Tasks ({}), strategy: {}",
                analysis.total_tasks, analysis.strategy_used
            );
            for scored in &analysis.tasks {
                println!(
                    "  {:>6.2} | {:<6} | {} - {}",
                    scored.priority_score,
                    scored.priority_level.as_str(),
                    scored.task.id,
                    scored.task.title,
                );
                println!("         {}", scored.explanation);
            }
        }
        Commands::Suggest {
            file,
            strategy,
            now,
            count,
        } => {
            let batch = load_batch(&file)?;
            let engine =
                PriorityEngine::new(resolve_strategy(strategy, batch.strategy.as_deref()));
            let suggestions = engine.suggest(&batch.tasks, resolve_now(now), count);

            for suggestion in &suggestions {
                println!("{}. {}", suggestion.rank, suggestion.task.task.title);
                println!("   {}", suggestion.reason);
            }
        }
        Commands::Strategies => {
            for strategy in Strategy::ALL {
                let weights = strategy.weights();
                println!(
                    "{:<16} urgency {:.2} | importance {:.2} | effort {:.2} | dependencies {:.2}",
                    strategy.as_str(),
                    weights.urgency,
                    weights.importance,
                    weights.effort,
                    weights.dependency,
                );
            }
        }
    }

    Ok(())
}

/// An explicit --strategy flag wins over a strategy named in the file.
fn resolve_strategy(flag: Option<String>, embedded: Option<&str>) -> Strategy {
    flag.as_deref()
        .or(embedded)
        .map(Strategy::parse)
        .unwrap_or_default()
}

/// Pin the reference time to midnight UTC of the given date, or use the
/// current time.
fn resolve_now(date: Option<NaiveDate>) -> DateTime<Utc> {
    match date {
        Some(date) => date.and_time(NaiveTime::MIN).and_utc(),
        None => Utc::now(),
    }
}
