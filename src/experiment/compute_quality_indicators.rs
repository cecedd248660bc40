use std::fs;

use itertools::Itertools;
use log::{info, warn};
use markdown_table::MarkdownTable;

use crate::error::{ExperimentError, Result};
use crate::experiment::{ExperimentComponent, ExperimentConfiguration};
use crate::front;
use crate::indicator::Indicator;
use crate::statistics;

/// Computes every configured indicator for every run front against the
/// problem's reference front and writes one value per line (run index
/// ascending) to `{base}/{tag}/{problem}/{indicatorName}`. A malformed or
/// missing front is recorded as NaN and never aborts sibling computations;
/// downstream statistics treat NaN as a missing run.
pub struct ComputeQualityIndicators<'a>
{
    configuration: &'a ExperimentConfiguration,
}

impl<'a> ComputeQualityIndicators<'a> {
    pub fn new(configuration: &'a ExperimentConfiguration) -> Self
    {
        ComputeQualityIndicators { configuration }
    }

    fn run_value(&self, indicator: &dyn Indicator, tag: &str, problem_name: &str, run_id: usize) -> f64
    {
        let configuration = self.configuration;

        let reference_path = match configuration.reference_front_path(problem_name) {
            Some(path) => path,
            None => {
                warn!("{}: no reference front configured for {}", indicator.name(), problem_name);
                return f64::NAN;
            }
        };

        let fun_path = configuration.output_directory(tag, problem_name).join(format!(
            "{}{}.tsv",
            configuration.output_pareto_front_file_name(),
            run_id
        ));

        let computed = front::read_vector_file(&reference_path).and_then(|reference| {
            let obtained = front::read_vector_file(&fun_path)?;
            indicator.evaluate(&obtained, &reference)
        });

        match computed {
            Ok(value) => value,
            Err(error) => {
                warn!(
                    "{}: recording NaN for run {} of {} on {}: {}",
                    indicator.name(),
                    run_id,
                    tag,
                    problem_name,
                    error
                );
                f64::NAN
            }
        }
    }

    /// Markdown mean-value table (problems x algorithms) per indicator,
    /// written next to the data and echoed to the log.
    fn write_summary(&self, indicator: &dyn Indicator) -> Result<()>
    {
        let configuration = self.configuration;
        let tags = configuration.deduplicated_tags();

        let mut header = vec!["".to_string()];
        header.extend(tags.iter().map(|tag| tag.to_string()));

        let mut lines = vec![header];

        for problem_name in configuration.problem_names()
        {
            let mut line = vec![problem_name.to_string()];

            for tag in &tags
            {
                let values = configuration.read_indicator_values(indicator.name(), tag, problem_name);

                if values.is_empty()
                {
                    line.push("-".to_string());
                }
                else
                {
                    line.push(format!("{:.4e}", statistics::mean(&values)));
                }
            }

            lines.push(line);
        }

        let table = MarkdownTable::new(lines);

        info!("{} summary:\n{}", indicator.name(), table.to_string());

        let path = configuration
            .experiment_base_directory()
            .join(format!("{}.summary.md", indicator.name()));

        fs::write(&path, table.to_string()).map_err(|source| ExperimentError::report_generation(&path, source))
    }
}

impl ExperimentComponent for ComputeQualityIndicators<'_> {
    fn run(&self) -> Result<()>
    {
        let configuration = self.configuration;

        for (indicator, tagged) in configuration
            .indicator_list()
            .iter()
            .cartesian_product(configuration.algorithm_list())
        {
            let tag = tagged.tag();
            let problem_name = tagged.problem_name();

            let values: Vec<f64> = (0..configuration.independent_runs())
                .map(|run_id| self.run_value(indicator.as_ref(), tag, problem_name, run_id))
                .collect();

            let path = configuration.indicator_file_path(indicator.name(), tag, problem_name);
            front::write_value_file(&path, &values)?;
        }

        for indicator in configuration.indicator_list()
        {
            info!("ComputeQualityIndicators: {}", indicator.name());
            self.write_summary(indicator.as_ref())?;
        }

        Ok(())
    }
}
