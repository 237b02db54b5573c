mod cli;

use anyhow::{bail, Context};
use clap::Parser;
use cli::{Cli, Commands};
use dialoguer::Input;
use soilsense::classifier::ClassifierAdapter;
use soilsense::config::Config;
use soilsense::logic::DecisionEngine;
use soilsense::models::{EvaluationResult, SoilParameter};
use soilsense::report;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(model) = cli.model {
        config.model.path = model;
    }

    match cli.command {
        Some(Commands::Check) => check(&config),
        Some(Commands::Predict { input, json }) => predict(&config, input, json),
        None => predict(&config, None, false),
    }
}

fn check(config: &Config) -> anyhow::Result<()> {
    println!("Model artifact: {}", config.model.path.display());
    let adapter = ClassifierAdapter::load(&config.model.path);
    match adapter.unavailable_reason() {
        None => {
            println!("Model: OK");
            Ok(())
        }
        Some(reason) => bail!("Model: UNAVAILABLE - {}", reason),
    }
}

fn predict(config: &Config, input: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let adapter = ClassifierAdapter::load(&config.model.path);
    if let Some(reason) = adapter.unavailable_reason() {
        // Refuse to evaluate rather than guess.
        bail!(
            "cannot evaluate: classifier model unavailable ({}). \
             Check the model path in config.yaml or SOILSENSE_MODEL_PATH.",
            reason
        );
    }

    let raw = match input {
        Some(path) => read_sample_file(&path)?,
        None => prompt_sample()?,
    };

    let engine = DecisionEngine::new(Box::new(adapter));
    let result = engine.evaluate(&raw)?;

    print_result(&result, json)
}

/// Reads a sample from a JSON object of parameter name -> value.
fn read_sample_file(path: &Path) -> anyhow::Result<HashMap<SoilParameter, f64>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading sample file {}", path.display()))?;
    let raw: HashMap<String, f64> =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;

    let mut sample = HashMap::new();
    for (key, value) in raw {
        match SoilParameter::from_str(&key) {
            Some(param) => {
                sample.insert(param, value);
            }
            None => bail!("unknown soil parameter '{}' in {}", key, path.display()),
        }
    }
    Ok(sample)
}

/// Prompts for each parameter in canonical order, pre-filled with typical
/// lab values.
fn prompt_sample() -> anyhow::Result<HashMap<SoilParameter, f64>> {
    let mut sample = HashMap::new();
    for param in SoilParameter::ALL {
        let value: f64 = Input::new()
            .with_prompt(format!("{} ({}) [{}]", param.full_name(), param.as_str(), param.unit()))
            .default(param.typical_value())
            .interact_text()?;
        sample.insert(param, value);
    }
    Ok(sample)
}

fn print_result(result: &EvaluationResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", report::render(result));
    }
    Ok(())
}
