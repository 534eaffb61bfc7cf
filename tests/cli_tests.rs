use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{JAN1_0900, JAN1_1700, JAN1_2300, JAN2_0100, Workspace, serve};

fn closed_line(start: f64, end: f64) -> String {
    format!("{:?},{:?}\n", start, end)
}

#[test]
fn test_start_stop_cycle() {
    let ws = Workspace::new();

    ws.plog()
        .arg("start")
        .assert()
        .success()
        .stdout(contains("New timer started."));

    let after_start = ws.read_staging().expect("staging file created");
    assert_eq!(after_start.lines().count(), 1);
    assert!(after_start.ends_with(",\n"));

    ws.plog()
        .arg("start")
        .assert()
        .success()
        .stdout(contains("Timer is already running"));
    assert_eq!(ws.read_staging().unwrap(), after_start);

    ws.plog()
        .arg("stop")
        .assert()
        .success()
        .stdout(contains("Timer stopped."));

    let after_stop = ws.read_staging().unwrap();
    assert_eq!(after_stop.lines().count(), 1);
    assert!(!after_stop.ends_with(",\n"));

    ws.plog()
        .arg("stop")
        .assert()
        .success()
        .stdout(contains("No timer is currently running."));
    assert_eq!(ws.read_staging().unwrap(), after_stop);
}

#[test]
fn test_status_without_timers() {
    let ws = Workspace::new();

    ws.plog()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("No timer started."));
}

#[test]
fn test_status_last_and_all() {
    let ws = Workspace::new();
    ws.write_staging(&format!(
        "{}{}",
        closed_line(JAN1_0900, JAN1_0900 + 3600.0),
        closed_line(JAN1_1700 - 8.0 * 3600.0, JAN1_1700)
    ));

    ws.plog()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Last timer: Start: 2024-01-01 09:00:00, End: 2024-01-01 17:00:00"))
        .stdout(contains("8:00:00"))
        .stdout(contains("Timer 1:").not());

    ws.plog()
        .args(["status", "--all"])
        .assert()
        .success()
        .stdout(contains("Timer 1: Start: 2024-01-01 09:00:00, End: 2024-01-01 10:00:00"))
        .stdout(contains("Timer 2: Start: 2024-01-01 09:00:00"))
        .stdout(contains("Total time worked:"))
        .stdout(contains("9:00:00"));
}

#[test]
fn test_status_running_timer() {
    let ws = Workspace::new();
    ws.plog().arg("start").assert().success();

    ws.plog()
        .args(["status", "-a"])
        .assert()
        .success()
        .stdout(contains("Currently Running"))
        .stdout(contains("Total time worked:"));
}

#[test]
fn test_malformed_staging_fails() {
    let ws = Workspace::new();
    ws.write_staging("1704099600.0;1704128400.0\n");

    ws.plog()
        .arg("status")
        .assert()
        .failure()
        .stderr(contains("Malformed staging file"))
        .stderr(contains("line 1"));

    assert_eq!(
        ws.read_staging().unwrap(),
        "1704099600.0;1704128400.0\n"
    );
}

#[test]
fn test_reset_is_idempotent() {
    let ws = Workspace::new();
    ws.plog().arg("start").assert().success();

    ws.plog()
        .arg("reset")
        .assert()
        .success()
        .stdout(contains("Timer has been reset."));
    assert!(!ws.staging().exists());

    ws.plog().arg("reset").assert().success();
}

#[test]
fn test_staging_override() {
    let ws = Workspace::new();
    let custom = ws.dir.path().join("custom.staging");

    ws.plog()
        .args(["--staging", custom.to_str().unwrap(), "start"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!ws.staging().exists());
}

#[test]
fn test_push_requires_configuration() {
    let ws = Workspace::new();
    let content = closed_line(JAN1_0900, JAN1_1700);
    ws.write_staging(&content);

    ws.plog()
        .arg("push")
        .assert()
        .failure()
        .stderr(contains("PLOG_API_URL"));

    assert_eq!(ws.read_staging().unwrap(), content);
}

#[test]
fn test_push_unknown_backend() {
    let ws = Workspace::new();

    ws.plog()
        .env("PLOG_BACKEND", "carrier-pigeon")
        .arg("push")
        .assert()
        .failure()
        .stderr(contains("Unknown PLOG_BACKEND"));
}

#[test]
fn test_unknown_backend_only_blocks_push() {
    let ws = Workspace::new();
    ws.write_staging(&closed_line(JAN1_0900, JAN1_1700));

    ws.plog()
        .env("PLOG_BACKEND", "typo")
        .arg("reset")
        .assert()
        .success()
        .stdout(contains("Timer has been reset."));
    assert!(!ws.staging().exists());

    ws.plog()
        .env("PLOG_BACKEND", "typo")
        .arg("start")
        .assert()
        .success()
        .stdout(contains("New timer started."));
    ws.plog()
        .env("PLOG_BACKEND", "typo")
        .arg("status")
        .assert()
        .success();
    ws.plog()
        .env("PLOG_BACKEND", "typo")
        .arg("stop")
        .assert()
        .success();

    let staged = ws.read_staging().expect("staging file kept");
    ws.plog()
        .env("PLOG_BACKEND", "typo")
        .env("PLOG_API_URL", "http://127.0.0.1:9")
        .env("PLOG_API_TOKEN", "token")
        .arg("push")
        .assert()
        .failure()
        .stderr(contains("Unknown PLOG_BACKEND 'typo'"));
    assert_eq!(ws.read_staging().unwrap(), staged);
}

#[test]
fn test_unknown_backend_in_config_file_allows_reset() {
    let ws = Workspace::new();
    let dir = ws.dir.path().join(".plog");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("plog.conf"), "backend: nope\n").unwrap();
    ws.plog().arg("start").assert().success();

    ws.plog().arg("reset").assert().success();
    assert!(!ws.staging().exists());

    ws.plog()
        .arg("push")
        .assert()
        .failure()
        .stderr(contains("Unknown PLOG_BACKEND 'nope'"));
}

#[test]
fn test_push_nothing_to_push() {
    let ws = Workspace::new();

    ws.plog()
        .env("PLOG_API_URL", "http://127.0.0.1:9")
        .env("PLOG_API_TOKEN", "token")
        .arg("push")
        .assert()
        .success()
        .stdout(contains("No timers found to push."));
}

#[test]
fn test_push_cross_midnight_keeps_staging() {
    let ws = Workspace::new();
    let content = closed_line(JAN1_2300, JAN2_0100);
    ws.write_staging(&content);

    ws.plog()
        .env("PLOG_API_URL", "http://127.0.0.1:9")
        .env("PLOG_API_TOKEN", "token")
        .arg("push")
        .assert()
        .failure()
        .stderr(contains("must be the same"));

    assert_eq!(ws.read_staging().unwrap(), content);
}

#[test]
fn test_push_success_clears_staging() {
    let ws = Workspace::new();
    ws.write_staging(&closed_line(JAN1_0900, JAN1_1700));
    let (base, server) = serve(vec![(200, "{\"success\":true}")]);

    ws.plog()
        .env("PLOG_API_URL", &base)
        .env("PLOG_API_TOKEN", "token")
        .args(["push", "-m", "worked"])
        .assert()
        .success()
        .stdout(contains("All timers pushed and reset."));

    let requests = server.join().unwrap();
    assert_eq!(requests[0].path, "/api/plog/attendances");
    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(body["attendances"][0]["comment"], "worked");
    assert_eq!(body["attendances"][0]["date"], "2024-01-01");
    assert_eq!(body["attendances"][0]["start_time"], "09:00:00");
    assert_eq!(body["attendances"][0]["end_time"], "17:00:00");

    assert!(!ws.staging().exists());
    let journal = fs::read_to_string(ws.journal()).unwrap();
    assert!(journal.contains("\tpush\t"));
}

#[test]
fn test_push_remote_failure_keeps_staging() {
    let ws = Workspace::new();
    let content = closed_line(JAN1_0900, JAN1_1700);
    ws.write_staging(&content);
    let (base, server) = serve(vec![(502, "bad gateway")]);

    ws.plog()
        .env("PLOG_BACKEND", "gateway")
        .env("PLOG_API_URL", &base)
        .env("PLOG_API_TOKEN", "token")
        .arg("push")
        .assert()
        .failure()
        .stdout(contains("Run 'plog push' again"))
        .stderr(contains("502"))
        .stderr(contains("bad gateway"));

    assert_eq!(server.join().unwrap()[0].path, "/attendances");
    assert_eq!(ws.read_staging().unwrap(), content);
    let journal = fs::read_to_string(ws.journal()).unwrap();
    assert!(journal.contains("\tpush_failed\t"));
}

#[test]
fn test_push_partial_submission_warns_about_resent_entries() {
    let ws = Workspace::new();
    let content = format!(
        "{}{}",
        closed_line(JAN1_0900, JAN1_0900 + 3600.0),
        closed_line(JAN1_1700 - 3600.0, JAN1_1700)
    );
    ws.write_staging(&content);
    let (base, server) = serve(vec![
        (200, "{\"success\":true,\"data\":{\"token\":\"bearer-123\"}}"),
        (200, "{\"id\":1}"),
        (500, "boom"),
    ]);

    ws.plog()
        .env("PLOG_BACKEND", "personio")
        .env("PERSONIO_API_URL", &base)
        .env("PERSONIO_API_KEY", "client-id")
        .env("PERSONIO_API_SECRET", "client-secret")
        .arg("push")
        .assert()
        .failure()
        .stdout(contains("Run 'plog push' again"))
        .stdout(contains(
            "1 entry already accepted remotely will be sent again on retry.",
        ))
        .stderr(contains("1 of 2"))
        .stderr(contains("boom"));

    let requests = server.join().unwrap();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].path, "/auth");
    assert_eq!(requests[2].path, "/work_hours");
    assert_eq!(ws.read_staging().unwrap(), content);
    let journal = fs::read_to_string(ws.journal()).unwrap();
    assert!(journal.contains("\tpush_failed\t"));
}

#[test]
fn test_token_requires_function_key() {
    let ws = Workspace::new();

    ws.plog()
        .args(["token", "-e", "jane@example.com"])
        .assert()
        .failure()
        .stderr(contains("PLOG_TOKEN_FUNCTION_KEY"));
}

#[test]
fn test_log_print_lists_operations() {
    let ws = Workspace::new();

    ws.plog()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("The journal is empty."));

    ws.plog().arg("start").assert().success();
    ws.plog().arg("stop").assert().success();
    ws.plog().arg("reset").assert().success();

    ws.plog()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("start"))
        .stdout(contains("Timer stopped after"))
        .stdout(contains("Timer has been reset"));
}

#[test]
fn test_config_print_masks_secrets() {
    let ws = Workspace::new();

    ws.plog()
        .env("PLOG_API_URL", "https://hr.example.com")
        .env("PLOG_API_TOKEN", "supersecrettoken")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("https://hr.example.com"))
        .stdout(contains("************oken"))
        .stdout(contains("supersecrettoken").not());
}

#[test]
fn test_config_file_is_read() {
    let ws = Workspace::new();
    let dir = ws.dir.path().join(".plog");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("plog.conf"), "staging_file: from-config.staging\n").unwrap();

    ws.plog().arg("start").assert().success();

    assert!(ws.dir.path().join("from-config.staging").exists());
    assert!(!ws.staging().exists());
}
