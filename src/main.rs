use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use tiny_planet::{
    config::init_logging,
    runner::SessionRunner,
    scenario::{ScenarioLoader, MAX_GENERATIONS},
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Tiny Planet headless runner")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/balanced_start.yaml")]
    scenario: PathBuf,

    /// Override generation count (uses scenario default when omitted)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_GENERATIONS))]
    generations: Option<u64>,

    /// Override the placement seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the full run summary as JSON instead of one line per generation
    #[arg(long)]
    json: bool,

    /// Log level filter (overrides the scenario's logging.level)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let mut scenario = loader.load(&cli.scenario)?;
    if let Some(seed) = cli.seed {
        scenario.seed = seed;
    }
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| scenario.logging.level.clone());
    init_logging(&level)?;

    let generations = scenario.generations(cli.generations);
    let mut runner = SessionRunner::new(scenario);
    let print_lines = !cli.json;
    let summary = runner.run_with_hook(generations, |report| {
        if print_lines {
            let placed: Vec<&str> = report.placed.iter().map(|kind| kind.as_str()).collect();
            println!(
                "gen {:>3} | placed [{}] | health {:>5.1} {} {} | score {}",
                report.generation,
                placed.join(", "),
                report.planet.health,
                report.emotion.emoji(),
                report.emotion,
                report.score
            );
        }
    });

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Scenario '{}' completed after {} generations. Planet feels {}: \"{}\" Final score: {}",
            summary.scenario,
            summary.generations_played,
            summary.final_emotion,
            summary.final_emotion.message(),
            summary.score
        );
    }
    Ok(())
}
