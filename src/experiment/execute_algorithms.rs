use std::fs;

use log::{error, info};
use serde::Serialize;

use crate::error::{ExperimentError, Result};
use crate::experiment::executor::{ExperimentTask, ParallelExperimentExecutor, RunFailure};
use crate::experiment::{ExperimentComponent, ExperimentConfiguration};

/// Runs every configured (algorithm, problem) pair `independent_runs` times
/// and persists one FUN/VAR file pair per run under
/// `{base}/{tag}/{problem}`. Batches of different tagged algorithms are
/// never interleaved, which bounds concurrent resource usage to one
/// algorithm's working set.
pub struct ExecuteAlgorithms<'a>
{
    configuration: &'a ExperimentConfiguration,
}

#[derive(Serialize)]
struct ExecutionReport<'a>
{
    experiment_name: &'a str,
    total_runs: usize,
    failed_runs: &'a [RunFailure],
}

impl<'a> ExecuteAlgorithms<'a> {
    pub fn new(configuration: &'a ExperimentConfiguration) -> Self
    {
        ExecuteAlgorithms { configuration }
    }

    /// Ensures the experiment base directory exists. A plain file occupying
    /// the path is deleted first; any failure here is fatal and aborts the
    /// pipeline before a single task is submitted.
    fn prepare_output_directory(&self) -> Result<()>
    {
        let base = self.configuration.experiment_base_directory();

        if base.exists() && !base.is_dir()
        {
            fs::remove_file(base).map_err(|source| ExperimentError::directory_creation(base, source))?;
        }

        if !base.is_dir()
        {
            info!("creating experiment directory {}", base.display());
            fs::create_dir_all(base).map_err(|source| ExperimentError::directory_creation(base, source))?;
        }

        Ok(())
    }

    fn write_execution_report(&self, total_runs: usize, failures: &[RunFailure]) -> Result<()>
    {
        let report = ExecutionReport {
            experiment_name: self.configuration.experiment_name(),
            total_runs,
            failed_runs: failures,
        };

        let path = self.configuration.experiment_base_directory().join("execution_report.json");

        let content = serde_json::to_string_pretty(&report)
            .map_err(|source| ExperimentError::report_generation(&path, source.into()))?;

        fs::write(&path, content).map_err(|source| ExperimentError::report_generation(&path, source))
    }
}

impl ExperimentComponent for ExecuteAlgorithms<'_> {
    fn run(&self) -> Result<()>
    {
        info!("ExecuteAlgorithms: preparing output directory");
        self.prepare_output_directory()?;

        let configuration = self.configuration;
        let mut failures: Vec<RunFailure> = Vec::new();

        for tagged in configuration.algorithm_list()
        {
            let output_directory = configuration.output_directory(tagged.tag(), tagged.problem_name());

            // one-time pre-batch step; every task of the batch shares this dir
            fs::create_dir_all(&output_directory)
                .map_err(|source| ExperimentError::directory_creation(&output_directory, source))?;

            let mut executor = ParallelExperimentExecutor::new(configuration.number_of_cores());
            executor.start()?;

            for run_id in 0..configuration.independent_runs()
            {
                let mut snapshot = tagged.clone();
                snapshot.reseed(run_id as u64);

                executor.add_task(ExperimentTask {
                    algorithm: snapshot,
                    run_id,
                    output_directory: output_directory.clone(),
                    front_file_name: configuration.output_pareto_front_file_name().to_string(),
                    set_file_name: configuration.output_pareto_set_file_name().to_string(),
                });
            }

            failures.extend(executor.parallel_execution()?);
            executor.stop();
        }

        let total_runs = configuration.algorithm_list().len() * configuration.independent_runs();
        self.write_execution_report(total_runs, &failures)?;

        if failures.is_empty()
        {
            info!("ExecuteAlgorithms: all {} runs completed", total_runs);
            Ok(())
        }
        else
        {
            for failure in &failures
            {
                error!(
                    "failed: run {} of {} on {}: {}",
                    failure.run_id, failure.algorithm_tag, failure.problem_name, failure.message
                );
            }

            let first = &failures[0];
            Err(ExperimentError::run(format!(
                "{} of {} runs failed; first failure: run {} of {} on {}: {}",
                failures.len(),
                total_runs,
                first.run_id,
                first.algorithm_tag,
                first.problem_name,
                first.message
            )))
        }
    }
}
