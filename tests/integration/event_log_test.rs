use rigmon::core::event_log::{OfflineLog, OfflineOutcome, RestartLog};
use rigmon::RigmonError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_offline_log_created_when_missing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("offline.csv");

    let log = OfflineLog::load(&path).unwrap();
    assert!(log.records().is_empty());
    assert!(path.exists());
}

#[test]
fn test_offline_log_roundtrip_writes_header() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("offline.csv");

    let mut log = OfflineLog::load(&path).unwrap();
    log.record("Pang01", 90, 1_000);
    log.record("Ferm02", 90, 1_050);
    log.save(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(
        lines,
        [
            "miner_name,offline,last_invoked",
            "Pang01,1,1000",
            "Ferm02,1,1050"
        ]
    );

    let mut reloaded = OfflineLog::load(&path).unwrap();
    assert_eq!(reloaded, log);
    assert_eq!(
        reloaded.record("Pang01", 90, 5_000),
        OfflineOutcome::WentOffline(2)
    );
}

#[test]
fn test_offline_log_reads_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("offline.csv");
    fs::write(
        &path,
        "miner_name,offline,last_invoked\nPang03,4,1600000000\n",
    )
    .unwrap();

    let mut log = OfflineLog::load(&path).unwrap();
    assert_eq!(log.get("Pang03").unwrap().offline, 4);
    assert_eq!(
        log.record("Pang03", 60, 1_600_000_100),
        OfflineOutcome::StillOffline
    );
    assert_eq!(log.get("Pang03").unwrap().offline, 4);
}

#[test]
fn test_invalid_count_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("offline.csv");
    fs::write(
        &path,
        "miner_name,offline,last_invoked\nPang01,1,1000\nPang02,many,1000\n",
    )
    .unwrap();

    match OfflineLog::load(&path) {
        Err(RigmonError::InvalidLogRecord { line, reason, .. }) => {
            assert_eq!(line, 3);
            assert!(reason.contains("many"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_restart_log_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("logs").join("restarts.csv");
    fs::create_dir_all(path.parent().unwrap()).unwrap();

    let mut log = RestartLog::load(&path).unwrap();
    assert_eq!(log.record("Pang01"), 1);
    log.save(&path).unwrap();

    let mut log = RestartLog::load(&path).unwrap();
    assert_eq!(log.record("Pang01"), 2);
    assert_eq!(log.record("Ferm01"), 1);
    log.save(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "miner_name,restarts\nPang01,2\nFerm01,1\n");
}

#[test]
fn test_restart_log_missing_column_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("restarts.csv");
    fs::write(&path, "miner_name,restarts\nPang01\n").unwrap();

    assert!(matches!(
        RestartLog::load(&path),
        Err(RigmonError::InvalidLogRecord { .. })
    ));
}
