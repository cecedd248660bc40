use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::algorithm::TaggedAlgorithm;
use crate::error::ExperimentError;
use crate::experiment::boxplots::GenerateBoxplotsWithR;
use crate::experiment::compute_quality_indicators::ComputeQualityIndicators;
use crate::experiment::execute_algorithms::ExecuteAlgorithms;
use crate::experiment::friedman::GenerateFriedmanTestTables;
use crate::experiment::latex_tables::GenerateLatexTablesWithStatistics;
use crate::experiment::wilcoxon::GenerateWilcoxonTestTablesWithR;
use crate::experiment::{ExperimentBuilder, ExperimentComponent, ExperimentConfiguration};
use crate::front;
use crate::indicator::Epsilon;
use crate::problem::zdt::Zdt1;
use crate::tests::support::{stub_tagged, write_reference_front, StubAlgorithm};

fn two_algorithm_study(
    base_directory: &Path,
    front_directory: &Path,
    algorithms: Vec<TaggedAlgorithm>,
    cores: usize,
    runs: usize,
) -> ExperimentConfiguration
{
    write_reference_front(&front_directory.join("ZDT1.pf")).unwrap();

    ExperimentBuilder::new("pipeline-test")
        .set_experiment_base_directory(base_directory)
        .set_algorithm_list(algorithms)
        .set_problem_list(vec![Box::new(Zdt1::default())])
        .set_indicator_list(vec![Box::new(Epsilon)])
        .set_reference_front_directory(front_directory)
        .set_reference_front_file_names(vec!["ZDT1.pf".to_string()])
        .set_independent_runs(runs)
        .set_number_of_cores(cores)
        .build()
        .unwrap()
}

#[test]
fn produces_the_full_grid_of_run_files()
{
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("study");

    let configuration = two_algorithm_study(
        &base,
        dir.path(),
        vec![
            stub_tagged("algoA", 0.0, Box::new(Zdt1::default())),
            stub_tagged("algoB", 0.5, Box::new(Zdt1::default())),
        ],
        2,
        5,
    );

    ExecuteAlgorithms::new(&configuration).run().unwrap();
    ComputeQualityIndicators::new(&configuration).run().unwrap();

    for tag in ["algoA", "algoB"]
    {
        for run_id in 0..5
        {
            let fun = front::read_vector_file(&base.join(tag).join("ZDT1").join(format!("FUN{}.tsv", run_id))).unwrap();
            let var = front::read_vector_file(&base.join(tag).join("ZDT1").join(format!("VAR{}.tsv", run_id))).unwrap();

            assert_eq!(fun.len(), var.len());
            assert_eq!(fun[0].len(), 2);
            assert_eq!(var[0].len(), 30);
        }

        let epsilon = front::read_value_file(&base.join(tag).join("ZDT1").join("Epsilon")).unwrap();
        assert_eq!(epsilon.len(), 5);
        assert!(epsilon.iter().all(|value| value.is_finite()));
    }

    assert!(base.join("Epsilon.summary.md").is_file());
    assert!(base.join("execution_report.json").is_file());
}

#[test]
fn pool_size_does_not_change_outputs()
{
    let dir = TempDir::new().unwrap();

    let mut contents: Vec<Vec<(String, String)>> = Vec::new();

    for (label, cores) in [("sequential", 1), ("parallel", 4)]
    {
        let base = dir.path().join(label);

        let configuration = two_algorithm_study(
            &base,
            dir.path(),
            vec![
                stub_tagged("algoA", 0.0, Box::new(Zdt1::default())),
                stub_tagged("algoB", 0.5, Box::new(Zdt1::default())),
            ],
            cores,
            6,
        );

        ExecuteAlgorithms::new(&configuration).run().unwrap();
        ComputeQualityIndicators::new(&configuration).run().unwrap();

        let mut files = Vec::new();
        for tag in ["algoA", "algoB"]
        {
            for run_id in 0..6
            {
                for prefix in ["FUN", "VAR"]
                {
                    let name = format!("{}/{}{}.tsv", tag, prefix, run_id);
                    let content = fs::read_to_string(base.join(tag).join("ZDT1").join(format!("{}{}.tsv", prefix, run_id))).unwrap();
                    files.push((name, content));
                }
            }

            let epsilon = fs::read_to_string(base.join(tag).join("ZDT1").join("Epsilon")).unwrap();
            files.push((format!("{}/Epsilon", tag), epsilon));
        }

        contents.push(files);
    }

    assert_eq!(contents[0], contents[1]);
}

#[test]
fn unreachable_base_directory_aborts_before_any_run()
{
    let dir = TempDir::new().unwrap();

    // the parent of the base path is a plain file, so no directory can appear
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "occupied").unwrap();
    let base = blocker.join("study");

    let configuration = two_algorithm_study(
        &base,
        dir.path(),
        vec![stub_tagged("algoA", 0.0, Box::new(Zdt1::default()))],
        1,
        3,
    );

    let result = ExecuteAlgorithms::new(&configuration).run();

    match result {
        Err(error @ ExperimentError::DirectoryCreation { .. }) => assert!(error.is_fatal()),
        other => panic!("expected directory creation error, got {:?}", other.err()),
    }

    assert!(!base.exists());
}

#[test]
fn plain_file_at_base_path_is_replaced_by_the_directory()
{
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("study");
    fs::write(&base, "stale artifact").unwrap();

    let configuration = two_algorithm_study(
        &base,
        dir.path(),
        vec![stub_tagged("algoA", 0.0, Box::new(Zdt1::default()))],
        1,
        2,
    );

    ExecuteAlgorithms::new(&configuration).run().unwrap();

    assert!(base.is_dir());
    assert!(base.join("algoA").join("ZDT1").join("FUN1.tsv").is_file());
}

#[test]
fn failed_run_is_isolated_and_reported()
{
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("study");

    let failing = TaggedAlgorithm::with_tag(
        Box::new(StubAlgorithm::new("algoA", 0.0).failing_on(2)),
        Box::new(Zdt1::default()),
        "algoA",
    );

    let configuration = two_algorithm_study(&base, dir.path(), vec![failing], 2, 5);

    let error = ExecuteAlgorithms::new(&configuration).run().unwrap_err();

    match error {
        ExperimentError::Run(message) => {
            assert!(message.contains("run 2"));
            assert!(message.contains("1 of 5 runs failed"));
        }
        other => panic!("expected run error, got {:?}", other),
    }

    // siblings still produced valid output, only run 2 is missing
    let run_dir = base.join("algoA").join("ZDT1");
    for run_id in [0usize, 1, 3, 4]
    {
        assert!(run_dir.join(format!("FUN{}.tsv", run_id)).is_file());
        assert!(run_dir.join(format!("VAR{}.tsv", run_id)).is_file());
    }
    assert!(!run_dir.join("FUN2.tsv").exists());

    let report = fs::read_to_string(base.join("execution_report.json")).unwrap();
    assert!(report.contains("\"run_id\": 2"));

    // downstream statistics record the failed run as missing, not a crash
    ComputeQualityIndicators::new(&configuration).run().unwrap();

    let epsilon = front::read_value_file(&run_dir.join("Epsilon")).unwrap();
    assert_eq!(epsilon.len(), 5);
    assert!(epsilon[2].is_nan());
    assert!(epsilon.iter().enumerate().all(|(run_id, value)| run_id == 2 || value.is_finite()));
}

#[test]
fn duplicate_tags_collapse_to_one_report_column()
{
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("study");

    let configuration = two_algorithm_study(
        &base,
        dir.path(),
        vec![
            stub_tagged("algoA", 0.0, Box::new(Zdt1::default())),
            stub_tagged("algoA", 0.0, Box::new(Zdt1::default())),
            stub_tagged("algoB", 0.5, Box::new(Zdt1::default())),
        ],
        2,
        3,
    );

    ExecuteAlgorithms::new(&configuration).run().unwrap();
    ComputeQualityIndicators::new(&configuration).run().unwrap();
    GenerateBoxplotsWithR::new(&configuration).run().unwrap();
    GenerateLatexTablesWithStatistics::new(&configuration).run().unwrap();
    GenerateWilcoxonTestTablesWithR::new(&configuration).run().unwrap();

    let boxplot = fs::read_to_string(base.join("R").join("Epsilon.Boxplot.R")).unwrap();
    assert_eq!(boxplot.matches("algoA<-scan(").count(), 1);
    assert!(boxplot.contains("algs<-c(\"algoA\",\"algoB\")"));

    let latex = fs::read_to_string(base.join("latex").join("Epsilon.tex")).unwrap();
    assert_eq!(latex.matches(" & algoA").count(), 2); // one header per table

    let wilcoxon = fs::read_to_string(base.join("R").join("Epsilon.Wilcoxon.R")).unwrap();
    assert!(wilcoxon.contains("algorithms<-c(\"algoA\", \"algoB\")"));
}

#[test]
fn friedman_table_orders_algorithms_by_total_rank()
{
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("study");

    // algoB dominates algoA on the single problem in every run
    let configuration = two_algorithm_study(
        &base,
        dir.path(),
        vec![
            stub_tagged("algoA", 0.8, Box::new(Zdt1::default())),
            stub_tagged("algoB", 0.0, Box::new(Zdt1::default())),
        ],
        1,
        4,
    );

    ExecuteAlgorithms::new(&configuration).run().unwrap();
    ComputeQualityIndicators::new(&configuration).run().unwrap();
    GenerateFriedmanTestTables::new(&configuration).run().unwrap();

    let table = fs::read_to_string(base.join("latex").join("FriedmanTestEpsilon.tex")).unwrap();

    let position_b = table.find("algoB & 1.00").expect("algoB row");
    let position_a = table.find("algoA & 2.00").expect("algoA row");
    assert!(position_b < position_a);
}
