use std::fs;

use log::info;

use crate::error::{ExperimentError, Result};
use crate::experiment::{ExperimentComponent, ExperimentConfiguration};

const DEFAULT_R_DIRECTORY: &str = "R";

/// Emits one R script per indicator (`{base}/R/{indicator}.Boxplot.R`) that
/// renders a grouped per-problem boxplot of every algorithm's per-run
/// values. Grid layout and notch display are fluent, pre-generation
/// settings. Run with `Rscript {indicator}.Boxplot.R` from the R directory.
pub struct GenerateBoxplotsWithR<'a>
{
    configuration: &'a ExperimentConfiguration,
    number_of_rows: usize,
    number_of_columns: usize,
    display_notch: bool,
}

impl<'a> GenerateBoxplotsWithR<'a> {
    pub fn new(configuration: &'a ExperimentConfiguration) -> Self
    {
        GenerateBoxplotsWithR {
            configuration,
            number_of_rows: 3,
            number_of_columns: 3,
            display_notch: false,
        }
    }

    pub fn set_rows(mut self, rows: usize) -> Self {
        self.number_of_rows = rows;
        self
    }

    pub fn set_columns(mut self, columns: usize) -> Self {
        self.number_of_columns = columns;
        self
    }

    pub fn set_display_notch(mut self) -> Self {
        self.display_notch = true;
        self
    }
}

impl ExperimentComponent for GenerateBoxplotsWithR<'_> {
    fn run(&self) -> Result<()>
    {
        let configuration = self.configuration;

        let r_directory = configuration.experiment_base_directory().join(DEFAULT_R_DIRECTORY);
        fs::create_dir_all(&r_directory)
            .map_err(|source| ExperimentError::report_generation(&r_directory, source))?;

        let tags = configuration.deduplicated_tags();
        let problems = configuration.problem_names();

        for indicator in configuration.indicator_list()
        {
            info!("GenerateBoxplotsWithR: {}", indicator.name());

            let script = boxplot_script(
                indicator.name(),
                &tags,
                &problems,
                self.number_of_rows,
                self.number_of_columns,
                self.display_notch,
            );

            let path = r_directory.join(format!("{}.Boxplot.R", indicator.name()));
            fs::write(&path, script).map_err(|source| ExperimentError::report_generation(&path, source))?;
        }

        Ok(())
    }
}

fn boxplot_script(
    indicator_name: &str,
    tags: &[&str],
    problems: &[&str],
    rows: usize,
    columns: usize,
    display_notch: bool,
) -> String
{
    let mut script = String::new();

    script.push_str(&format!(
        "postscript(\"{}.Boxplot.eps\", horizontal=FALSE, onefile=FALSE, height=8, width=12, pointsize=10)\n",
        indicator_name
    ));
    script.push_str("resultDirectory<-\"..\"\n");
    script.push_str("qIndicator <- function(indicator, problem)\n");
    script.push_str("{\n");

    for tag in tags
    {
        script.push_str(&format!("file{}<-paste(resultDirectory, \"{}\", sep=\"/\")\n", tag, tag));
        script.push_str(&format!("file{}<-paste(file{}, problem, sep=\"/\")\n", tag, tag));
        script.push_str(&format!("file{}<-paste(file{}, indicator, sep=\"/\")\n", tag, tag));
        script.push_str(&format!("{}<-scan(file{})\n", tag, tag));
        script.push('\n');
    }

    script.push_str("algs<-c(");
    script.push_str(&tags.iter().map(|tag| format!("\"{}\"", tag)).collect::<Vec<_>>().join(","));
    script.push_str(")\n");

    script.push_str("boxplot(");
    for tag in tags
    {
        script.push_str(&format!("{},", tag));
    }
    if display_notch
    {
        script.push_str("names=algs, notch = TRUE)\n");
    }
    else
    {
        script.push_str("names=algs, notch = FALSE)\n");
    }

    script.push_str("titulo <-paste(indicator, problem, sep=\":\")\n");
    script.push_str("title(main=titulo)\n");
    script.push_str("}\n");

    script.push_str(&format!("par(mfrow=c({},{}))\n", rows, columns));
    script.push_str(&format!("indicator<-\"{}\"\n", indicator_name));

    for problem_name in problems
    {
        script.push_str(&format!("qIndicator(indicator, \"{}\")\n", problem_name));
    }

    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_loads_every_algorithm_and_problem()
    {
        let script = boxplot_script("Epsilon", &["NSGAII", "SMPSO"], &["ZDT1", "ZDT2"], 3, 3, false);

        assert!(script.contains("fileNSGAII<-paste(resultDirectory, \"NSGAII\", sep=\"/\")"));
        assert!(script.contains("SMPSO<-scan(fileSMPSO)"));
        assert!(script.contains("algs<-c(\"NSGAII\",\"SMPSO\")"));
        assert!(script.contains("qIndicator(indicator, \"ZDT1\")"));
        assert!(script.contains("qIndicator(indicator, \"ZDT2\")"));
        assert!(script.contains("notch = FALSE"));
    }

    #[test]
    fn layout_and_notch_are_configurable()
    {
        let script = boxplot_script("GD", &["A", "B"], &["P"], 2, 4, true);

        assert!(script.contains("par(mfrow=c(2,4))"));
        assert!(script.contains("notch = TRUE"));
    }
}
