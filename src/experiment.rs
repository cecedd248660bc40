pub mod boxplots;
pub mod compute_quality_indicators;
pub mod execute_algorithms;
pub mod executor;
pub mod friedman;
pub mod latex_tables;
pub mod wilcoxon;

use std::path::{Path, PathBuf};

use crate::algorithm::TaggedAlgorithm;
use crate::error::{ExperimentError, Result};
use crate::front;
use crate::indicator::Indicator;
use crate::problem::Problem;

pub const DEFAULT_INDEPENDENT_RUNS: usize = 25;

/// One stage of the pipeline: execution, indicator computation or a report
/// generator. `run` is idempotent given identical inputs and overwrites its
/// outputs in place.
pub trait ExperimentComponent {
    fn run(&self) -> Result<()>;
}

/// Immutable description of a full experimental study. Built once through
/// [`ExperimentBuilder`] before the pipeline starts; every component receives
/// it by reference, with no ambient or global lookup.
pub struct ExperimentConfiguration
{
    experiment_name: String,
    experiment_base_directory: PathBuf,
    algorithm_list: Vec<TaggedAlgorithm>,
    problem_list: Vec<Box<dyn Problem>>,
    indicator_list: Vec<Box<dyn Indicator>>,
    reference_front_directory: PathBuf,
    reference_front_file_names: Vec<String>,
    independent_runs: usize,
    number_of_cores: usize,
    output_pareto_front_file_name: String,
    output_pareto_set_file_name: String,
}

impl ExperimentConfiguration {
    pub fn experiment_name(&self) -> &str {
        self.experiment_name.as_str()
    }

    pub fn experiment_base_directory(&self) -> &Path {
        self.experiment_base_directory.as_path()
    }

    pub fn algorithm_list(&self) -> &[TaggedAlgorithm] {
        &self.algorithm_list
    }

    pub fn problem_list(&self) -> &[Box<dyn Problem>] {
        &self.problem_list
    }

    pub fn indicator_list(&self) -> &[Box<dyn Indicator>] {
        &self.indicator_list
    }

    pub fn independent_runs(&self) -> usize {
        self.independent_runs
    }

    pub fn number_of_cores(&self) -> usize {
        self.number_of_cores
    }

    pub fn output_pareto_front_file_name(&self) -> &str {
        self.output_pareto_front_file_name.as_str()
    }

    pub fn output_pareto_set_file_name(&self) -> &str {
        self.output_pareto_set_file_name.as_str()
    }

    /// Directory owned by one (algorithm tag, problem) pair:
    /// `{base}/{tag}/{problem}`.
    pub fn output_directory(&self, tag: &str, problem_name: &str) -> PathBuf {
        self.experiment_base_directory.join(tag).join(problem_name)
    }

    /// Location of the per-run indicator value file for one
    /// (indicator, tag, problem) triple.
    pub fn indicator_file_path(&self, indicator_name: &str, tag: &str, problem_name: &str) -> PathBuf {
        self.output_directory(tag, problem_name).join(indicator_name)
    }

    /// Reference front file for a problem, paired by position with the
    /// problem list.
    pub fn reference_front_path(&self, problem_name: &str) -> Option<PathBuf> {
        self.problem_list
            .iter()
            .position(|problem| problem.name() == problem_name)
            .and_then(|index| self.reference_front_file_names.get(index))
            .map(|file_name| self.reference_front_directory.join(file_name))
    }

    pub fn problem_names(&self) -> Vec<&str> {
        self.problem_list.iter().map(|problem| problem.name()).collect()
    }

    /// Algorithm tags with duplicates removed, first occurrence order kept.
    /// Every statistical component de-duplicates before laying out columns;
    /// an algorithm tagged identically twice is one column.
    pub fn deduplicated_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();

        for tagged in &self.algorithm_list
        {
            if !tags.contains(&tagged.tag())
            {
                tags.push(tagged.tag());
            }
        }

        tags
    }

    /// Per-run indicator values for one (indicator, tag, problem) triple
    /// with missing (NaN) runs filtered out. An unreadable file counts as
    /// fully missing.
    pub fn read_indicator_values(&self, indicator_name: &str, tag: &str, problem_name: &str) -> Vec<f64> {
        let path = self.indicator_file_path(indicator_name, tag, problem_name);

        front::read_value_file(&path)
            .unwrap_or_default()
            .into_iter()
            .filter(|value| !value.is_nan())
            .collect()
    }
}

/// Fluent builder for [`ExperimentConfiguration`].
pub struct ExperimentBuilder
{
    experiment_name: String,
    experiment_base_directory: PathBuf,
    algorithm_list: Vec<TaggedAlgorithm>,
    problem_list: Vec<Box<dyn Problem>>,
    indicator_list: Vec<Box<dyn Indicator>>,
    reference_front_directory: PathBuf,
    reference_front_file_names: Vec<String>,
    independent_runs: usize,
    number_of_cores: usize,
    output_pareto_front_file_name: String,
    output_pareto_set_file_name: String,
}

impl ExperimentBuilder {
    pub fn new(experiment_name: impl Into<String>) -> Self
    {
        ExperimentBuilder {
            experiment_name: experiment_name.into(),
            experiment_base_directory: PathBuf::new(),
            algorithm_list: Vec::new(),
            problem_list: Vec::new(),
            indicator_list: Vec::new(),
            reference_front_directory: PathBuf::new(),
            reference_front_file_names: Vec::new(),
            independent_runs: DEFAULT_INDEPENDENT_RUNS,
            number_of_cores: num_cpus::get(),
            output_pareto_front_file_name: "FUN".to_string(),
            output_pareto_set_file_name: "VAR".to_string(),
        }
    }

    pub fn set_experiment_base_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.experiment_base_directory = path.into();
        self
    }

    pub fn set_algorithm_list(mut self, algorithm_list: Vec<TaggedAlgorithm>) -> Self {
        self.algorithm_list = algorithm_list;
        self
    }

    pub fn set_problem_list(mut self, problem_list: Vec<Box<dyn Problem>>) -> Self {
        self.problem_list = problem_list;
        self
    }

    pub fn set_indicator_list(mut self, indicator_list: Vec<Box<dyn Indicator>>) -> Self {
        self.indicator_list = indicator_list;
        self
    }

    pub fn set_reference_front_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.reference_front_directory = path.into();
        self
    }

    pub fn set_reference_front_file_names(mut self, file_names: Vec<String>) -> Self {
        self.reference_front_file_names = file_names;
        self
    }

    pub fn set_independent_runs(mut self, independent_runs: usize) -> Self {
        self.independent_runs = independent_runs;
        self
    }

    pub fn set_number_of_cores(mut self, number_of_cores: usize) -> Self {
        self.number_of_cores = number_of_cores;
        self
    }

    pub fn set_output_pareto_front_file_name(mut self, name: impl Into<String>) -> Self {
        self.output_pareto_front_file_name = name.into();
        self
    }

    pub fn set_output_pareto_set_file_name(mut self, name: impl Into<String>) -> Self {
        self.output_pareto_set_file_name = name.into();
        self
    }

    pub fn build(self) -> Result<ExperimentConfiguration>
    {
        if self.algorithm_list.is_empty()
        {
            return Err(ExperimentError::configuration("algorithm list is empty"));
        }

        if self.problem_list.is_empty()
        {
            return Err(ExperimentError::configuration("problem list is empty"));
        }

        if self.experiment_base_directory.as_os_str().is_empty()
        {
            return Err(ExperimentError::configuration("experiment base directory is not set"));
        }

        if self.independent_runs < 1
        {
            return Err(ExperimentError::configuration("independent runs must be at least 1"));
        }

        if self.number_of_cores < 1
        {
            return Err(ExperimentError::configuration("number of cores must be at least 1"));
        }

        if !self.reference_front_file_names.is_empty()
            && self.reference_front_file_names.len() != self.problem_list.len()
        {
            return Err(ExperimentError::configuration(
                "reference front file names must pair one-to-one with problems",
            ));
        }

        Ok(ExperimentConfiguration {
            experiment_name: self.experiment_name,
            experiment_base_directory: self.experiment_base_directory,
            algorithm_list: self.algorithm_list,
            problem_list: self.problem_list,
            indicator_list: self.indicator_list,
            reference_front_directory: self.reference_front_directory,
            reference_front_file_names: self.reference_front_file_names,
            independent_runs: self.independent_runs,
            number_of_cores: self.number_of_cores,
            output_pareto_front_file_name: self.output_pareto_front_file_name,
            output_pareto_set_file_name: self.output_pareto_set_file_name,
        })
    }
}
