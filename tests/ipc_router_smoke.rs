mod support;

use serde_json::json;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use support::{error_code, Sidecar};

fn temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let p = std::env::temp_dir().join(format!("{prefix}-{nanos}"));
    std::fs::create_dir_all(&p).expect("create temp dir");
    p
}

#[test]
fn router_dispatch_smoke_covers_handler_families() {
    let mut sc = Sidecar::spawn();

    let health = sc.call_ok("health", json!({}));
    assert_eq!(health["schoolName"].as_str(), Some("Alzihrawi"));

    let calls = [
        ("students.create", json!({ "name": "Amy", "age": 16, "gradeLevel": 2 })),
        ("students.list", json!({})),
        ("students.find", json!({ "name": "Am" })),
        ("students.search", json!({ "criteria": { "gradeLevel": 2 } })),
        ("teachers.create", json!({ "name": "Rana Alfaisal", "age": 50, "subject": "Arabic" })),
        ("teachers.list", json!({})),
        ("teachers.find", json!({ "name": "Rana" })),
        ("grades.upsert", json!({ "studentId": 1000, "subject": "Arabic", "score": 95 })),
        ("grades.list", json!({ "studentId": 1000 })),
        ("grades.records", json!({})),
        ("reports.student", json!({ "studentId": 1000 })),
        ("reports.schoolStats", json!({})),
        ("analytics.gradeLevels", json!({})),
        ("analytics.subjects", json!({})),
        ("students.delete", json!({ "studentId": 1000 })),
    ];
    for (method, params) in calls {
        sc.call_ok(method, params);
    }
}

#[test]
fn unknown_method_and_bad_json_are_reported() {
    let mut sc = Sidecar::spawn();

    let value = sc.call("students.rename", json!({}));
    assert_eq!(error_code(&value), Some("not_implemented"));

    let value = sc.send_line("not json");
    assert_eq!(value["ok"].as_bool(), Some(false));
    assert_eq!(error_code(&value), Some("bad_json"));

    let value = sc.call("students.create", json!({ "age": 16 }));
    assert_eq!(error_code(&value), Some("bad_params"));
    assert_eq!(value["error"]["message"].as_str(), Some("missing name"));
}

#[test]
fn config_file_sets_school_name_and_id_sequences() {
    let cfg = temp_dir("schoold-config").join("schoold.json");
    std::fs::write(
        &cfg,
        json!({ "schoolName": "Riverside", "firstStudentId": 1, "firstTeacherId": 900 }).to_string(),
    )
    .expect("write config");

    let mut sc = Sidecar::spawn_with_config(&cfg);
    let health = sc.call_ok("health", json!({}));
    assert_eq!(health["schoolName"].as_str(), Some("Riverside"));

    assert_eq!(sc.create_student("Amy", 16, 2), 1);
    let t = sc.call_ok(
        "teachers.create",
        json!({ "name": "Nada Aljundi", "age": 55, "subject": "Science" }),
    );
    assert_eq!(t["teacher"]["id"].as_u64(), Some(900));
}
