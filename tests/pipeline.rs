use sample_grouper::{run, Config, CopyOutcome, DiscoveryError};
use std::fs;
use std::path::Path;

fn config(src: &Path, dest: &Path, keyword: &str, group_size: usize, max: usize) -> Config {
    Config::builder()
        .source(src.to_string_lossy())
        .destination(dest.to_string_lossy())
        .keyword(keyword)
        .group_size(group_size)
        .max_files(max)
        .build()
        .unwrap()
}

fn seed(dir: &Path, names: &[&str]) {
    for name in names {
        let path = dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, format!("payload of {name}")).unwrap();
    }
}

#[test]
fn test_kick_scenario() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    seed(src.path(), &["kick_808.wav", "KICK_perc.aiff", "snare.wav", "kick.txt"]);

    let report = run(&config(src.path(), dest.path(), "kick", 2, 10)).unwrap();

    assert_eq!(report.matched, 2);
    assert_eq!(report.batches.len(), 1);
    assert_eq!(report.copied(), 2);
    assert_eq!(report.failed(), 0);
    assert!(!report.hit_max());

    let group = dest.path().join("group_1");
    assert_eq!(
        fs::read_to_string(group.join("kick_808.wav")).unwrap(),
        "payload of kick_808.wav"
    );
    assert!(group.join("KICK_perc.aiff").is_file());
    assert!(!group.join("snare.wav").exists());
    assert!(!group.join("kick.txt").exists());
    assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 1);
}

#[test]
fn test_nested_tree_with_cap() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let names: Vec<String> = (0..7).map(|i| format!("pack_{}/Hat_{i}.WAV", i % 3)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    seed(src.path(), &refs);

    let report = run(&config(src.path(), dest.path(), "hat", 2, 5)).unwrap();

    assert_eq!(report.matched, 7);
    assert_eq!(report.considered, 5);
    assert!(report.hit_max());
    assert_eq!(
        report.batches.iter().map(|b| b.files).collect::<Vec<_>>(),
        vec![2, 2, 1]
    );
    assert_eq!(report.copied(), 5);
    assert!(!dest.path().join("group_4").exists());
}

#[test]
fn test_dry_run_copies_nothing() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    seed(src.path(), &["kick_1.wav", "kick_2.aif", "kick_3.aiff"]);

    let config = Config::builder()
        .source(src.path().to_string_lossy())
        .destination(dest.path().to_string_lossy())
        .keyword("kick")
        .group_size(2)
        .dry_run(true)
        .build()
        .unwrap();
    let report = run(&config).unwrap();

    assert!(report.dry_run);
    assert_eq!(report.planned(), 3);
    assert_eq!(report.copied(), 0);
    assert_eq!(report.bytes(), 0);
    for batch in &report.batches {
        for file in &batch.outcomes {
            assert_eq!(file.outcome, CopyOutcome::Planned);
            assert!(!file.destination.exists());
        }
    }
    assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);
}

#[test]
fn test_rerun_overwrites_with_identical_bytes() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    seed(src.path(), &["kick.wav"]);
    let config = config(src.path(), dest.path(), "kick", 4, 10);

    run(&config).unwrap();
    let report = run(&config).unwrap();

    assert_eq!(report.copied(), 1);
    assert_eq!(
        fs::read(dest.path().join("group_1/kick.wav")).unwrap(),
        fs::read(src.path().join("kick.wav")).unwrap()
    );
}

#[test]
fn test_missing_source_fails_before_copying() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();

    let result = run(&config(&src.path().join("missing"), dest.path(), "kick", 2, 10));

    assert!(matches!(result, Err(DiscoveryError::Walk { .. })));
    assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);
}

#[test]
fn test_json_report() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    seed(src.path(), &["kick.wav"]);

    let report = run(&config(src.path(), dest.path(), "kick", 2, 10)).unwrap();
    let report_path = out.path().join("report.json");
    report.write_json(&report_path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["matched"], 1);
    assert_eq!(json["group_size"], 2);
    assert_eq!(json["batches"][0]["index"], 1);
    assert_eq!(json["batches"][0]["outcomes"][0]["status"], "copied");
    assert_eq!(json["batches"][0]["outcomes"][0]["bytes"], 19);
}
