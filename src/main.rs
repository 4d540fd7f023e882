mod cli;

use blockscore::config::ScoringConfig;
use blockscore::error::Result;
use blockscore::metrics::{RawMetrics, read_metrics};
use blockscore::score::{self, OutputOptions};
use clap::Parser;

use cli::{Cli, Commands};

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Score {
            input,
            metrics,
            json,
            strict,
            config,
            top,
        } => {
            let config = ScoringConfig::resolve(config.as_deref())?;
            let mut raw = match &input {
                Some(path) => read_metrics(path)?,
                None => RawMetrics::default(),
            };
            metrics.apply(&mut raw);

            // Show target in header when the counts came from a file
            let target = input
                .as_deref()
                .and_then(|p| p.to_str())
                .filter(|s| *s != "-")
                .map(str::to_string);
            let opts = OutputOptions { json, strict, top };
            score::run(&raw, &config, opts, target.as_deref())
        }
        Commands::Compare {
            before,
            after,
            json,
            strict,
            config,
        } => {
            let config = ScoringConfig::resolve(config.as_deref())?;
            let opts = OutputOptions {
                json,
                strict,
                top: 0,
            };
            score::run_compare(&before, &after, &config, opts)
        }
        Commands::Grade { score: value, json } => score::run_grade(value, json),
        Commands::Weights { config, json } => {
            let config = ScoringConfig::resolve(config.as_deref())?;
            score::run_weights(&config, json)
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = dispatch(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
