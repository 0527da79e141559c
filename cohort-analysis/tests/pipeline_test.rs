//! End-to-end pipeline tests: CSV → catalog scan → bipartite graph → report.

use std::io::Write;

use cohort_analysis::bipartite::build;
use cohort_analysis::catalog::default_catalog;
use cohort_analysis::report::{GraphSummary, SvgExporter};
use cohort_analysis::table::{load_csv, sample};

fn write_csv(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("students.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    (dir, path)
}

const THREE_STUDENTS: &str = "\
id,Gender,Age,Academic Pressure,Study Satisfaction,Sleep Duration
1,Female,20,2.0,4.0,'7-8 hours'
2,Male,30,3.0,3.0,'Less than 5 hours'
3,Female,45,4.5,1.0,'More than 8 hours'
";

#[test]
fn three_record_scenario_produces_the_expected_graph() {
    let (_dir, path) = write_csv(THREE_STUDENTS);
    let table = load_csv(&path).unwrap();
    let catalog = default_catalog().unwrap();
    let graph = build(&table, &catalog);

    assert_eq!(graph.student_ids(), vec!["1", "2", "3"]);
    assert_eq!(graph.attribute_names().len(), 13);
    assert!(graph.is_bipartite());

    let mut edges = graph.edges();
    edges.sort_unstable();
    assert_eq!(
        edges,
        vec![
            ("1", "Age_Young"),
            ("1", "Gender_Female"),
            ("1", "HasGoodSleep"),
            ("1", "High_Study_Satisfaction"),
            ("1", "Low_Academic_Pressure"),
            ("2", "Age_Young_Adult"),
            ("2", "Gender_Male"),
            ("2", "HasBadSleep"),
            ("2", "Medium_Academic_Pressure"),
            ("2", "Medium_Study_Satisfaction"),
            ("3", "Age_Adult"),
            ("3", "Gender_Female"),
            ("3", "HasGoodSleep"),
            ("3", "High_Academic_Pressure"),
            ("3", "Low_Study_Satisfaction"),
        ]
    );
}

#[test]
fn build_is_deterministic_across_runs() {
    let (_dir, path) = write_csv(THREE_STUDENTS);
    let table = load_csv(&path).unwrap();
    let catalog = default_catalog().unwrap();

    let first = build(&table, &catalog);
    let second = build(&table, &catalog);

    assert_eq!(first.edges(), second.edges());
    assert_eq!(first.student_ids(), second.student_ids());
    assert_eq!(first.attribute_names(), second.attribute_names());
}

#[test]
fn malformed_rows_lose_edges_but_keep_their_node() {
    let csv = "\
id,Gender,Age,Academic Pressure,Study Satisfaction,Sleep Duration
1,Female,20,2.0,4.0,'7-8 hours'
2,,not-a-number,,,unrecorded
";
    let (_dir, path) = write_csv(csv);
    let table = load_csv(&path).unwrap();
    let graph = build(&table, &default_catalog().unwrap());

    assert_eq!(graph.student_ids(), vec!["1", "2"]);
    assert_eq!(graph.degree("2"), Some(0));
    assert!(graph.edges().iter().all(|(s, _)| *s == "1"));
}

#[test]
fn sampled_pipeline_stays_deterministic() {
    let mut csv = String::from("id,Gender,Age\n");
    for i in 0..40 {
        csv.push_str(&format!("{},Female,{}\n", i, 18 + (i % 30)));
    }
    let (_dir, path) = write_csv(&csv);
    let table = load_csv(&path).unwrap();

    let a = sample(&table, 25.0, 42);
    let b = sample(&table, 25.0, 42);
    assert_eq!(a.len(), 10);

    let catalog = default_catalog().unwrap();
    assert_eq!(build(&a, &catalog).edges(), build(&b, &catalog).edges());
}

#[test]
fn summary_and_svg_agree_with_the_graph() {
    let (_dir, path) = write_csv(THREE_STUDENTS);
    let table = load_csv(&path).unwrap();
    let graph = build(&table, &default_catalog().unwrap());

    let summary = GraphSummary::from_graph(&graph);
    assert_eq!(summary.total_nodes, 16);
    assert_eq!(summary.total_edges, 15);
    assert!(summary.is_bipartite);
    assert_eq!(summary.sample_students, vec!["1", "2", "3"]);

    let out = _dir.path().join("graph.svg");
    SvgExporter::default().write(&graph, &out).unwrap();
    let svg = std::fs::read_to_string(&out).unwrap();
    assert_eq!(svg.matches("<line").count(), 15);
    assert_eq!(svg.matches("<circle").count(), 16);
}
