use std::path::PathBuf;

use log::{info, warn};
use serde::Serialize;

use crate::algorithm::TaggedAlgorithm;
use crate::error::{ExperimentError, Result};
use crate::front;

/// One independent run. The task owns a value-isolated snapshot of the
/// tagged algorithm (cloned and reseeded before scheduling) plus everything
/// it needs to persist its result, so concurrently executing tasks share no
/// mutable state and never target the same output path.
pub struct ExperimentTask
{
    pub algorithm: TaggedAlgorithm,
    pub run_id: usize,
    pub output_directory: PathBuf,
    pub front_file_name: String,
    pub set_file_name: String,
}

/// A run failure recorded against its run id. Sibling runs of the same batch
/// are unaffected.
#[derive(Debug, Clone, Serialize)]
pub struct RunFailure
{
    pub algorithm_tag: String,
    pub problem_name: String,
    pub run_id: usize,
    pub message: String,
}

/// Bounded worker pool executing one batch of independent-run tasks with at
/// most `number_of_cores` active at a time. Tasks block only on the
/// algorithm's run-to-completion call and on file I/O, so a pool of size 1
/// degrades to sequential execution with identical outputs.
pub struct ParallelExperimentExecutor
{
    number_of_cores: usize,
    runtime: Option<tokio::runtime::Runtime>,
    tasks: Vec<ExperimentTask>,
}

impl ParallelExperimentExecutor {
    pub fn new(number_of_cores: usize) -> Self
    {
        ParallelExperimentExecutor { number_of_cores, runtime: None, tasks: Vec::new() }
    }

    /// Initializes the worker pool.
    pub fn start(&mut self) -> Result<()>
    {
        if self.number_of_cores < 1
        {
            return Err(ExperimentError::configuration("executor needs at least one core"));
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.number_of_cores)
            .build()
            .map_err(|error| ExperimentError::configuration(format!("cannot start worker pool: {}", error)))?;

        self.runtime = Some(runtime);

        Ok(())
    }

    /// Enqueues one task. Must not be called concurrently with
    /// [`Self::parallel_execution`].
    pub fn add_task(&mut self, task: ExperimentTask)
    {
        self.tasks.push(task);
    }

    /// Runs every enqueued task to completion and blocks until the last one
    /// finishes. A failing task is recorded and its siblings still run;
    /// the collected failures are returned for the orchestrator to surface.
    pub fn parallel_execution(&mut self) -> Result<Vec<RunFailure>>
    {
        let runtime = self
            .runtime
            .as_ref()
            .ok_or_else(|| ExperimentError::configuration("executor has not been started"))?;

        let tasks = std::mem::take(&mut self.tasks);

        let mut handles = Vec::with_capacity(tasks.len());
        for task in tasks
        {
            let identity = (
                task.algorithm.tag().to_string(),
                task.algorithm.problem_name().to_string(),
                task.run_id,
            );

            handles.push((identity, runtime.spawn(async move { execute_task(task) })));
        }

        runtime.block_on(async move {
            let mut failures = Vec::new();

            for ((algorithm_tag, problem_name, run_id), handle) in handles
            {
                match handle.await {
                    Ok(Ok(())) => {}
                    Ok(Err(failure)) => {
                        warn!(
                            "run {} of {} on {} failed: {}",
                            failure.run_id, failure.algorithm_tag, failure.problem_name, failure.message
                        );
                        failures.push(failure);
                    }
                    Err(join_error) => {
                        warn!("run {} of {} on {} panicked", run_id, algorithm_tag, problem_name);
                        failures.push(RunFailure {
                            algorithm_tag,
                            problem_name,
                            run_id,
                            message: format!("task aborted: {}", join_error),
                        });
                    }
                }
            }

            Ok(failures)
        })
    }

    /// Releases pool resources. Idempotent.
    pub fn stop(&mut self)
    {
        self.tasks.clear();
        self.runtime.take();
    }
}

fn execute_task(mut task: ExperimentTask) -> std::result::Result<(), RunFailure>
{
    let algorithm_tag = task.algorithm.tag().to_string();
    let problem_name = task.algorithm.problem_name().to_string();
    let run_id = task.run_id;

    let failure = |message: String| RunFailure {
        algorithm_tag: algorithm_tag.clone(),
        problem_name: problem_name.clone(),
        run_id,
        message,
    };

    info!("running {} on {} (run {})", algorithm_tag, problem_name, run_id);

    let records = task.algorithm.run().map_err(|error| failure(error.to_string()))?;

    let fun_path = task.output_directory.join(format!("{}{}.tsv", task.front_file_name, task.run_id));
    let var_path = task.output_directory.join(format!("{}{}.tsv", task.set_file_name, task.run_id));

    let objectives: Vec<Vec<f64>> = records.iter().map(|record| record.objectives.clone()).collect();
    let variables: Vec<Vec<f64>> = records.into_iter().map(|record| record.variables).collect();

    front::write_vector_file(&fun_path, &objectives).map_err(|error| failure(error.to_string()))?;
    front::write_vector_file(&var_path, &variables).map_err(|error| failure(error.to_string()))?;

    Ok(())
}
