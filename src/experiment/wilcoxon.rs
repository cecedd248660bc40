use std::fs;

use log::{info, warn};

use crate::error::{ExperimentError, Result};
use crate::experiment::{ExperimentComponent, ExperimentConfiguration};

/// Emits, per indicator, an R script performing the Wilcoxon signed rank
/// test for every unordered pair of algorithms on every problem, plus a
/// companion LaTeX table file the script fills in when executed. Nothing is
/// computed numerically in-process: generation is pure text assembly over
/// the de-duplicated algorithm tags, the problem names and the indicator.
///
/// Outputs: `{base}/R/{indicator}.Wilcoxon.R` and
/// `{base}/R/{indicator}.Wilcoxon.tex`. Run with
/// `Rscript {indicator}.Wilcoxon.R` from the R directory.
pub struct GenerateWilcoxonTestTablesWithR<'a>
{
    configuration: &'a ExperimentConfiguration,
}

impl<'a> GenerateWilcoxonTestTablesWithR<'a> {
    pub fn new(configuration: &'a ExperimentConfiguration) -> Self
    {
        GenerateWilcoxonTestTablesWithR { configuration }
    }
}

impl ExperimentComponent for GenerateWilcoxonTestTablesWithR<'_> {
    fn run(&self) -> Result<()>
    {
        let configuration = self.configuration;

        let tags = configuration.deduplicated_tags();
        if tags.len() < 2
        {
            warn!("GenerateWilcoxonTestTablesWithR: fewer than two algorithms, nothing to compare");
            return Ok(());
        }

        let r_directory = configuration.experiment_base_directory().join("R");
        fs::create_dir_all(&r_directory)
            .map_err(|source| ExperimentError::report_generation(&r_directory, source))?;

        let problems = configuration.problem_names();

        for indicator in configuration.indicator_list()
        {
            info!("GenerateWilcoxonTestTablesWithR: {}", indicator.name());

            let script_path = r_directory.join(format!("{}.Wilcoxon.R", indicator.name()));
            let table_path = r_directory.join(format!("{}.Wilcoxon.tex", indicator.name()));

            fs::write(&script_path, wilcoxon_script(indicator.name(), &tags, &problems))
                .map_err(|source| ExperimentError::report_generation(&script_path, source))?;

            fs::write(&table_path, wilcoxon_table_skeleton(indicator.name(), &tags))
                .map_err(|source| ExperimentError::report_generation(&table_path, source))?;
        }

        Ok(())
    }
}

fn quoted_vector(items: &[&str]) -> String
{
    items.iter().map(|item| format!("\"{}\"", item)).collect::<Vec<_>>().join(", ")
}

fn wilcoxon_script(indicator_name: &str, tags: &[&str], problems: &[&str]) -> String
{
    let mut script = String::new();

    script.push_str(&format!("### Wilcoxon signed rank test script for indicator {}\n", indicator_name));
    script.push_str("### Generated file, overwritten on every pipeline run.\n");
    script.push_str("resultDirectory<-\"..\"\n");
    script.push_str(&format!("latexFile<-\"{}.Wilcoxon.tex\"\n", indicator_name));
    script.push_str(&format!("problems<-c({})\n", quoted_vector(problems)));
    script.push_str(&format!("algorithms<-c({})\n", quoted_vector(tags)));
    script.push('\n');
    script.push_str("qIndicator<-function(algorithm, problem) {\n");
    script.push_str(&format!(
        "  scan(paste(resultDirectory, algorithm, problem, \"{}\", sep=\"/\"), quiet=TRUE)\n",
        indicator_name
    ));
    script.push_str("}\n");
    script.push('\n');
    script.push_str("testSymbol<-function(left, right) {\n");
    script.push_str("  test<-suppressWarnings(wilcox.test(left, right, paired=TRUE))\n");
    script.push_str("  if (is.nan(test$p.value) || test$p.value >= 0.05) {\n");
    script.push_str("    \"--\"\n");
    script.push_str("  } else if (median(left) < median(right)) {\n");
    script.push_str("    \"$\\\\blacktriangle$\"\n");
    script.push_str("  } else {\n");
    script.push_str("    \"$\\\\triangledown$\"\n");
    script.push_str("  }\n");
    script.push_str("}\n");
    script.push('\n');
    script.push_str("write(\"\\\\begin{tabular}{l|");
    script.push_str(&"l".repeat(tags.len() - 1));
    script.push_str("}\", latexFile, append=FALSE)\n");
    script.push_str("header<-paste(algorithms[2:length(algorithms)], collapse=\" & \")\n");
    script.push_str("write(paste0(\" & \", header, \" \\\\\\\\ \\\\hline\"), latexFile, append=TRUE)\n");
    script.push('\n');
    script.push_str("for (i in 1:(length(algorithms)-1)) {\n");
    script.push_str("  row<-algorithms[i]\n");
    script.push_str("  for (j in 2:length(algorithms)) {\n");
    script.push_str("    if (j <= i) {\n");
    script.push_str("      row<-paste(row, \"\", sep=\" & \")\n");
    script.push_str("    } else {\n");
    script.push_str("      symbols<-\"\"\n");
    script.push_str("      for (problem in problems) {\n");
    script.push_str("        left<-qIndicator(algorithms[i], problem)\n");
    script.push_str("        right<-qIndicator(algorithms[j], problem)\n");
    script.push_str("        symbols<-paste0(symbols, testSymbol(left, right))\n");
    script.push_str("      }\n");
    script.push_str("      row<-paste(row, symbols, sep=\" & \")\n");
    script.push_str("    }\n");
    script.push_str("  }\n");
    script.push_str("  write(paste0(row, \" \\\\\\\\\"), latexFile, append=TRUE)\n");
    script.push_str("}\n");
    script.push('\n');
    script.push_str("write(\"\\\\end{tabular}\", latexFile, append=TRUE)\n");

    script
}

/// Placeholder table overwritten by the R script; written so both artifacts
/// exist deterministically right after generation.
fn wilcoxon_table_skeleton(indicator_name: &str, tags: &[&str]) -> String
{
    let mut table = String::new();

    table.push_str(&format!(
        "%% {}: pairwise Wilcoxon table, produced by {}.Wilcoxon.R\n",
        indicator_name, indicator_name
    ));
    table.push_str(&format!("\\begin{{tabular}}{{l|{}}}\n", "l".repeat(tags.len() - 1)));
    table.push_str("\\end{tabular}\n");

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_embeds_configuration_as_r_vectors()
    {
        let script = wilcoxon_script("Epsilon", &["NSGAII", "SMPSO", "SPEA2"], &["ZDT1", "ZDT4"]);

        assert!(script.contains("algorithms<-c(\"NSGAII\", \"SMPSO\", \"SPEA2\")"));
        assert!(script.contains("problems<-c(\"ZDT1\", \"ZDT4\")"));
        assert!(script.contains("latexFile<-\"Epsilon.Wilcoxon.tex\""));
        assert!(script.contains("resultDirectory<-\"..\""));
        assert!(script.contains("wilcox.test(left, right, paired=TRUE)"));
    }

    #[test]
    fn generation_is_deterministic_text_assembly()
    {
        let first = wilcoxon_script("GD", &["A", "B"], &["P"]);
        let second = wilcoxon_script("GD", &["A", "B"], &["P"]);

        assert_eq!(first, second);
    }

    #[test]
    fn skeleton_matches_column_count()
    {
        let skeleton = wilcoxon_table_skeleton("GD", &["A", "B", "C"]);

        assert!(skeleton.contains("\\begin{tabular}{l|ll}"));
    }
}
