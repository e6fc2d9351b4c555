use super::*;
use season_core::{BaselineAverages, SwissAverages};

fn summary() -> ComparisonSummary {
    ComparisonSummary::new(
        &SimConfig {
            n_seasons: 20_000,
            ..Default::default()
        },
        SwissAverages {
            avg_weak_top8: 0.4,
            avg_weak_top24: 4.5,
        },
        BaselineAverages {
            avg_weak_qualified: 1.75,
            avg_weak_group_winners: 0.25,
        },
    )
}

#[test]
fn test_summary_csv_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("summary.csv");
    write_summary_csv(&path, &summary()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "metric,value",
            "swiss_avg_weak_top8,0.4",
            "swiss_avg_weak_top24,4.5",
            "baseline_avg_weak_top2,1.75",
            "baseline_avg_weak_group_winners,0.25",
            "n_seasons,20000",
        ]
    );
}

#[test]
fn test_summary_csv_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.csv");
    write_summary_csv(&path, &summary()).unwrap();

    let data = load_summary_csv(&path).unwrap();
    assert_eq!(data.len(), 5);
    assert_eq!(data["swiss_avg_weak_top24"], 4.5);
    assert_eq!(data["n_seasons"], 20_000.0);
}

#[test]
fn test_load_skips_malformed_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.csv");
    fs::write(
        &path,
        "metric,value\nswiss_avg_weak_top8,0.5\nstray\nextra,1,2\nn_seasons,10\n",
    )
    .unwrap();

    let data = load_summary_csv(&path).unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data["swiss_avg_weak_top8"], 0.5);
}

#[test]
fn test_load_rejects_non_numeric_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.csv");
    fs::write(&path, "metric,value\nswiss_avg_weak_top8,lots\n").unwrap();

    assert!(matches!(
        load_summary_csv(&path),
        Err(CompareError::InvalidValue { .. })
    ));
}

#[test]
fn test_load_missing_file() {
    assert!(load_summary_csv(Path::new("no/such/summary.csv")).is_err());
}

#[test]
fn test_require_metric() {
    let mut data = HashMap::new();
    data.insert("a".to_string(), 1.0);
    assert_eq!(require_metric(&data, "a").unwrap(), 1.0);
    assert!(matches!(
        require_metric(&data, "b"),
        Err(CompareError::MissingMetric(m)) if m == "b"
    ));
}

#[test]
fn test_run_report_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    let report = RunReport::new("test run", SimConfig::default(), 4, summary());
    report.save(&path).unwrap();

    let loaded = RunReport::load(&path).unwrap();
    assert_eq!(loaded.name, "test run");
    assert_eq!(loaded.workers, 4);
    assert_eq!(loaded.config, SimConfig::default());
    assert_eq!(loaded.summary, summary());
}
