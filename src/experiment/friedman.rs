use std::fs;

use log::info;

use crate::error::{ExperimentError, Result};
use crate::experiment::{ExperimentComponent, ExperimentConfiguration};
use crate::statistics;

/// Ranks the algorithms per problem by mean indicator value (ties receive
/// averaged ranks, missing cells rank last), sums the ranks across problems
/// and emits `{base}/latex/FriedmanTest{indicator}.tex` ordered by ascending
/// total rank. Lower rank means better under the smaller-is-better
/// convention.
pub struct GenerateFriedmanTestTables<'a>
{
    configuration: &'a ExperimentConfiguration,
}

impl<'a> GenerateFriedmanTestTables<'a> {
    pub fn new(configuration: &'a ExperimentConfiguration) -> Self
    {
        GenerateFriedmanTestTables { configuration }
    }
}

impl ExperimentComponent for GenerateFriedmanTestTables<'_> {
    fn run(&self) -> Result<()>
    {
        let configuration = self.configuration;

        let latex_directory = configuration.experiment_base_directory().join("latex");
        fs::create_dir_all(&latex_directory)
            .map_err(|source| ExperimentError::report_generation(&latex_directory, source))?;

        let tags = configuration.deduplicated_tags();
        let problems = configuration.problem_names();

        for indicator in configuration.indicator_list()
        {
            info!("GenerateFriedmanTestTables: {}", indicator.name());

            let mut mean_grid: Vec<Vec<f64>> = Vec::with_capacity(problems.len());

            for problem_name in &problems
            {
                let row = tags
                    .iter()
                    .map(|tag| {
                        let values = configuration.read_indicator_values(indicator.name(), tag, problem_name);

                        if values.is_empty()
                        {
                            f64::NAN
                        }
                        else
                        {
                            statistics::mean(&values)
                        }
                    })
                    .collect();

                mean_grid.push(row);
            }

            let ranking = friedman_ranking(&tags, &mean_grid);
            let document = friedman_document(indicator.name(), problems.len(), &ranking);

            let path = latex_directory.join(format!("FriedmanTest{}.tex", indicator.name()));
            fs::write(&path, document).map_err(|source| ExperimentError::report_generation(&path, source))?;
        }

        Ok(())
    }
}

/// Total rank per tag over the problems-by-tags mean grid, sorted ascending.
fn friedman_ranking(tags: &[&str], mean_grid: &[Vec<f64>]) -> Vec<(String, f64)>
{
    let mut totals = vec![0.0; tags.len()];

    for row in mean_grid
    {
        for (index, rank) in statistics::averaged_ranks(row).into_iter().enumerate()
        {
            totals[index] += rank;
        }
    }

    let mut ranking: Vec<(String, f64)> = tags
        .iter()
        .map(|tag| tag.to_string())
        .zip(totals)
        .collect();

    ranking.sort_by(|a, b| a.1.total_cmp(&b.1));

    ranking
}

fn friedman_document(indicator_name: &str, problem_count: usize, ranking: &[(String, f64)]) -> String
{
    let mut out = String::new();

    out.push_str("\\documentclass{article}\n");
    out.push_str("\\begin{document}\n");
    out.push_str(&format!(
        "\\section*{{Friedman ranking for {}}}\n",
        indicator_name
    ));
    out.push_str("\\begin{table}\n");
    out.push_str(&format!(
        "\\caption{{Total and mean rank over {} problems (lower is better)}}\n",
        problem_count
    ));
    out.push_str("\\centering\n");
    out.push_str("\\begin{tabular}{lcc}\n");
    out.push_str("Algorithm & Total rank & Mean rank \\\\\n\\hline\n");

    for (tag, total) in ranking
    {
        out.push_str(&format!(
            "{} & {:.2} & {:.2} \\\\\n",
            tag,
            total,
            total / problem_count as f64
        ));
    }

    out.push_str("\\hline\n\\end{tabular}\n\\end{table}\n");
    out.push_str("\\end{document}\n");

    out
}
