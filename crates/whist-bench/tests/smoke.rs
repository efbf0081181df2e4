use std::fs;
use std::path::Path;

use tempfile::tempdir;
use whist_bench::config::BenchConfig;
use whist_bench::runner::MatchRunner;

fn load_config(output_dir: &Path, variant: &str, matches: usize) -> BenchConfig {
    let yaml = format!(
        r#"
run_id: "test_smoke"
deals:
  seed: 4242
  matches: {matches}
variant: "{variant}"
agents:
  - name: "north"
    kind: "simple"
  - name: "east"
    kind: "lowest"
  - name: "south"
    kind: "simple"
  - name: "west"
    kind: "simple"
outputs:
  jsonl: "{jsonl}"
logging:
  enable_structured: false
"#,
        jsonl = output_dir.join("hands.jsonl").display(),
    );

    let mut cfg: BenchConfig = serde_yaml::from_str(&yaml).expect("valid yaml");
    cfg.validate().expect("config validates");
    cfg
}

fn run_to_string(variant: &str, matches: usize) -> (whist_bench::runner::RunSummary, String) {
    let dir = tempdir().expect("temp dir");
    let config = load_config(dir.path(), variant, matches);
    let outputs = config.resolved_outputs();
    let runner = MatchRunner::new(config, outputs).expect("runner created");
    let summary = runner.run().expect("matches complete");
    let jsonl = fs::read_to_string(&summary.jsonl_path).expect("jsonl readable");
    (summary, jsonl)
}

#[test]
fn classic_matches_write_one_row_per_hand() {
    let (summary, jsonl) = run_to_string("classic", 3);
    assert_eq!(summary.matches_played, 3);
    assert_eq!(jsonl.lines().count(), summary.hands_played);
    assert_eq!(summary.match_wins.iter().sum::<usize>(), 3);

    for line in jsonl.lines() {
        let row: serde_json::Value = serde_json::from_str(line).expect("row decodes to JSON");
        let tricks = row["tricks"].as_array().expect("tricks array");
        let total: u64 = tricks.iter().filter_map(|t| t.as_u64()).sum();
        assert_eq!(total, 13);
        assert_eq!(row["cards_per_seat"], 13);
        assert_eq!(row["variant"], "classic");
    }
}

#[test]
fn knock_out_plays_thirteen_shrinking_hands() {
    let (summary, jsonl) = run_to_string("knock_out", 1);
    assert_eq!(summary.hands_played, 13);
    let sizes: Vec<u64> = jsonl
        .lines()
        .map(|line| {
            let row: serde_json::Value = serde_json::from_str(line).expect("row decodes");
            row["cards_per_seat"].as_u64().expect("cards_per_seat")
        })
        .collect();
    assert_eq!(sizes, (1..=13).rev().collect::<Vec<u64>>());
}

#[test]
fn single_hand_ends_after_one_hand() {
    let (summary, _) = run_to_string("single_hand", 2);
    assert_eq!(summary.hands_played, 2);
}

#[test]
fn same_seed_produces_identical_output() {
    let (_, first) = run_to_string("classic", 2);
    let (_, second) = run_to_string("classic", 2);
    assert_eq!(first, second);
}
