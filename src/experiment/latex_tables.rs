use std::fs;

use log::info;

use crate::error::{ExperimentError, Result};
use crate::experiment::{ExperimentComponent, ExperimentConfiguration};
use crate::statistics;

/// Per-run statistics of one (algorithm, problem) cell, or `None` when every
/// run of the cell is missing.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CellStatistics
{
    mean: f64,
    standard_deviation: f64,
    median: f64,
    interquartile_range: f64,
}

/// Emits `{base}/latex/{indicator}.tex`, a self-contained LaTeX document
/// with two tables per indicator: mean +- standard deviation and
/// median +- interquartile range, one row per problem and one column per
/// de-duplicated algorithm tag, the best (smallest) cell per row in bold.
pub struct GenerateLatexTablesWithStatistics<'a>
{
    configuration: &'a ExperimentConfiguration,
}

impl<'a> GenerateLatexTablesWithStatistics<'a> {
    pub fn new(configuration: &'a ExperimentConfiguration) -> Self
    {
        GenerateLatexTablesWithStatistics { configuration }
    }

    fn cell(&self, indicator_name: &str, tag: &str, problem_name: &str) -> Option<CellStatistics>
    {
        let values = self.configuration.read_indicator_values(indicator_name, tag, problem_name);

        if values.is_empty()
        {
            return None;
        }

        Some(CellStatistics {
            mean: statistics::mean(&values),
            standard_deviation: statistics::standard_deviation(&values),
            median: statistics::median(&values),
            interquartile_range: statistics::interquartile_range(&values),
        })
    }
}

impl ExperimentComponent for GenerateLatexTablesWithStatistics<'_> {
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
            info!("GenerateLatexTablesWithStatistics: {}", indicator.name());

            let mut grid: Vec<Vec<Option<CellStatistics>>> = Vec::with_capacity(problems.len());
            for problem_name in &problems
            {
                grid.push(
                    tags.iter()
                        .map(|tag| self.cell(indicator.name(), tag, problem_name))
                        .collect(),
                );
            }

            let document = latex_document(indicator.name(), &tags, &problems, &grid);

            let path = latex_directory.join(format!("{}.tex", indicator.name()));
            fs::write(&path, document).map_err(|source| ExperimentError::report_generation(&path, source))?;
        }

        Ok(())
    }
}

fn latex_document(
    indicator_name: &str,
    tags: &[&str],
    problems: &[&str],
    grid: &[Vec<Option<CellStatistics>>],
) -> String
{
    let mut out = String::new();

    out.push_str("\\documentclass{article}\n");
    out.push_str("\\usepackage{colortbl}\n");
    out.push_str("\\begin{document}\n");
    out.push_str(&format!("\\section*{{{}}}\n", indicator_name));

    out.push_str(&latex_table(
        &format!("{}. Mean and standard deviation", indicator_name),
        tags,
        problems,
        grid,
        |cell| (cell.mean, cell.standard_deviation),
    ));

    out.push_str(&latex_table(
        &format!("{}. Median and interquartile range", indicator_name),
        tags,
        problems,
        grid,
        |cell| (cell.median, cell.interquartile_range),
    ));

    out.push_str("\\end{document}\n");

    out
}

fn latex_table(
    caption: &str,
    tags: &[&str],
    problems: &[&str],
    grid: &[Vec<Option<CellStatistics>>],
    select: impl Fn(&CellStatistics) -> (f64, f64),
) -> String
{
    let mut out = String::new();

    out.push_str("\\begin{table}\n");
    out.push_str(&format!("\\caption{{{}}}\n", caption));
    out.push_str("\\centering\n");
    out.push_str(&format!("\\begin{{tabular}}{{l{}}}\n", "c".repeat(tags.len())));

    for tag in tags
    {
        out.push_str(&format!(" & {}", tag));
    }
    out.push_str(" \\\\\n\\hline\n");

    for (row_index, problem_name) in problems.iter().enumerate()
    {
        let row = &grid[row_index];

        // smaller is better across every bundled indicator
        let best = row
            .iter()
            .flatten()
            .map(|cell| select(cell).0)
            .fold(f64::INFINITY, f64::min);

        out.push_str(problem_name);

        for cell in row
        {
            match cell {
                Some(cell) => {
                    let (location, spread) = select(cell);
                    let formatted = format!("${:.2e}_{{{:.2e}}}$", location, spread);

                    if location == best
                    {
                        out.push_str(&format!(" & \\textbf{{{}}}", formatted));
                    }
                    else
                    {
                        out.push_str(&format!(" & {}", formatted));
                    }
                }
                None => out.push_str(" & --"),
            }
        }

        out.push_str(" \\\\\n");
    }

    out.push_str("\\hline\n\\end{tabular}\n\\end{table}\n");

    out
}
