use super::DmcAppError;
use crate::model::algorithm::{ModeChoiceAlgorithm, ModeChoiceConfig};
use config::{Config, ConfigError, File};
use dmc_core::model::plan::Person;
use kdam::{Bar, BarBuilder, BarExt};
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fmt::Display,
    io::{BufReader, BufWriter},
    path::Path,
    sync::{Arc, Mutex},
};

/// how the persons of a run came out.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub n_persons: usize,
    /// persons with at least one trip whose plan was rewritten
    pub n_updated: usize,
    /// persons without trips
    pub n_unchanged: usize,
    pub n_infeasible: usize,
    pub n_failed: usize,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "mode choice finished for {} persons: {} updated, {} without trips, {} infeasible, {} failed",
            self.n_persons, self.n_updated, self.n_unchanged, self.n_infeasible, self.n_failed
        )
    }
}

enum Outcome {
    Updated,
    Unchanged,
    Infeasible,
    Failed,
}

/// reads the mode choice sections of a configuration file. `modes`, `scoring`
/// and `router` are required, all other sections fall back to defaults.
pub fn read_configuration(path: &Path) -> Result<ModeChoiceConfig, DmcAppError> {
    let filename = path.to_string_lossy();
    let config = Config::builder()
        .add_source(File::from(path))
        .build()
        .map_err(|e| {
            let msg = format!("file '{filename}' produced error: {e}");
            DmcAppError::InvalidUserInput(msg)
        })?;

    Ok(ModeChoiceConfig {
        model: optional_section(&config, "model", &filename)?.unwrap_or_default(),
        modes: required_section(&config, "modes", &filename)?,
        constraints: optional_section(&config, "constraints", &filename)?.unwrap_or_default(),
        home_finder: optional_section(&config, "home_finder", &filename)?.unwrap_or_default(),
        estimator: optional_section(&config, "estimator", &filename)?.unwrap_or_default(),
        scoring: required_section(&config, "scoring", &filename)?,
        router: required_section(&config, "router", &filename)?,
        waiting_time: optional_section(&config, "waiting_time", &filename)?.unwrap_or_default(),
    })
}

fn required_section<T: DeserializeOwned>(
    config: &Config,
    key: &str,
    filename: &str,
) -> Result<T, DmcAppError> {
    config.get::<T>(key).map_err(|e| {
        let msg = format!("error reading '{key}' key in '{filename}': {e}");
        DmcAppError::InvalidUserInput(msg)
    })
}

fn optional_section<T: DeserializeOwned>(
    config: &Config,
    key: &str,
    filename: &str,
) -> Result<Option<T>, DmcAppError> {
    match config.get::<T>(key) {
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => {
            let msg = format!("error reading '{key}' key in '{filename}': {e}");
            Err(DmcAppError::InvalidUserInput(msg))
        }
    }
}

/// reads a JSON array of persons.
pub fn read_population(path: &Path) -> Result<Vec<Person>, DmcAppError> {
    let read_error = |message: String| DmcAppError::ReadError {
        path: path.to_string_lossy().to_string(),
        message,
    };
    let file = std::fs::File::open(path).map_err(|e| read_error(e.to_string()))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| read_error(format!("while decoding population, {e}")))
}

pub fn write_population(path: &Path, persons: &[Person]) -> Result<(), DmcAppError> {
    let write_error = |message: String| DmcAppError::WriteError {
        path: path.to_string_lossy().to_string(),
        message,
    };
    let file = std::fs::File::create(path).map_err(|e| write_error(e.to_string()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), persons)
        .map_err(|e| write_error(format!("while encoding population, {e}")))
}

/// runs the mode choice for every person on the current rayon pool. persons
/// whose decision fails keep their plan, and the failure is logged.
pub fn run_mode_choice(
    algorithm: &ModeChoiceAlgorithm,
    persons: Vec<Person>,
    seed: u64,
) -> Result<(Vec<Person>, RunSummary), DmcAppError> {
    let n_persons = persons.len();

    // a progress bar shared across threads
    let bar: Arc<Mutex<Bar>> = Arc::new(Mutex::new(
        BarBuilder::default()
            .desc("mode choice")
            .total(n_persons)
            .animation("fillup")
            .build()
            .map_err(|e| DmcAppError::InternalError(format!("failure building progress bar: {e}")))?,
    ));

    let results = persons
        .into_par_iter()
        .map(|mut person| {
            let mut rng = StdRng::seed_from_u64(seed ^ person.stable_hash());
            let outcome = match algorithm.run(&mut person, &mut rng) {
                Ok(modes) if modes.is_empty() => Outcome::Unchanged,
                Ok(_) => Outcome::Updated,
                Err(e) if e.is_infeasible() => {
                    log::warn!("{e}");
                    Outcome::Infeasible
                }
                Err(e) => {
                    log::warn!("mode choice failed for person '{}': {e}", person.id);
                    Outcome::Failed
                }
            };
            if let Ok(mut bar) = bar.clone().lock() {
                let _ = bar.update(1);
            }
            (person, outcome)
        })
        .collect::<Vec<_>>();

    eprintln!(); // end progress bar

    let mut summary = RunSummary {
        n_persons,
        ..Default::default()
    };
    let persons = results
        .into_iter()
        .map(|(person, outcome)| {
            match outcome {
                Outcome::Updated => summary.n_updated += 1,
                Outcome::Unchanged => summary.n_unchanged += 1,
                Outcome::Infeasible => summary.n_infeasible += 1,
                Outcome::Failed => summary.n_failed += 1,
            }
            person
        })
        .collect();
    Ok((persons, summary))
}
