use super::{run_ops, DmcAppError};
use crate::model::algorithm::ModeChoiceAlgorithm;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Command line tool for tour-based discrete mode choice over a population of agent plans
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct DmcApp {
    #[command(subcommand)]
    pub op: DmcOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum DmcOperation {
    /// decide new modes for every trip of every person in a population
    Run {
        /// TOML configuration file describing the mode choice model
        #[arg(short, long)]
        configuration_file: String,

        /// JSON file containing the list of persons and their plans
        #[arg(short, long)]
        population_file: String,

        /// location on disk to write the updated population as JSON
        #[arg(short, long)]
        output_file: String,

        /// random seed. each person draws from a generator seeded with this
        /// value and the person id, so results do not depend on threading.
        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        /// number of threads to use. if not provided, use all available cores.
        #[arg(long)]
        parallelism: Option<usize>,
    },
}

impl DmcOperation {
    pub fn run(&self) -> Result<(), DmcAppError> {
        match self {
            DmcOperation::Run {
                configuration_file,
                population_file,
                output_file,
                seed,
                parallelism,
            } => {
                let config = run_ops::read_configuration(Path::new(configuration_file))?;
                let algorithm = ModeChoiceAlgorithm::try_from(&config)?;
                let persons = run_ops::read_population(Path::new(population_file))?;
                log::info!("read {} persons from '{population_file}'", persons.len());

                let (persons, summary) = match parallelism {
                    Some(n) => {
                        let pool = rayon::ThreadPoolBuilder::new()
                            .num_threads(*n)
                            .build()
                            .map_err(|e| {
                                DmcAppError::InternalError(format!(
                                    "failure building thread pool with {n} threads: {e}"
                                ))
                            })?;
                        pool.install(|| run_ops::run_mode_choice(&algorithm, persons, *seed))?
                    }
                    None => run_ops::run_mode_choice(&algorithm, persons, *seed)?,
                };
                log::info!("{summary}");

                run_ops::write_population(Path::new(output_file), &persons)?;
                log::info!("wrote {} persons to '{output_file}'", persons.len());
                Ok(())
            }
        }
    }
}
