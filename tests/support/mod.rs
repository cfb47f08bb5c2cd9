#![allow(dead_code)]

use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

/// A running `schoold` driven line by line over stdin/stdout.
pub struct Sidecar {
    child: Child,
    stdin: ChildStdin,
    reader: BufReader<ChildStdout>,
    next_id: u64,
}

impl Sidecar {
    pub fn spawn() -> Self {
        Self::launch(None)
    }

    pub fn spawn_with_config(config: &Path) -> Self {
        Self::launch(Some(config))
    }

    fn launch(config: Option<&Path>) -> Self {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_schoold"));
        match config {
            Some(p) => cmd.env("SCHOOLD_CONFIG", p),
            None => cmd.env_remove("SCHOOLD_CONFIG"),
        };
        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("spawn schoold");
        let stdin = child.stdin.take().expect("child stdin");
        let stdout = child.stdout.take().expect("child stdout");
        Self {
            child,
            stdin,
            reader: BufReader::new(stdout),
            next_id: 1,
        }
    }

    /// Writes one raw line and returns the parsed reply.
    pub fn send_line(&mut self, line: &str) -> serde_json::Value {
        writeln!(self.stdin, "{line}").expect("write request");
        self.stdin.flush().expect("flush request");
        let mut out = String::new();
        self.reader.read_line(&mut out).expect("read response line");
        assert!(!out.trim().is_empty(), "empty response for {line}");
        serde_json::from_str(out.trim()).expect("parse response json")
    }

    pub fn call(&mut self, method: &str, params: serde_json::Value) -> serde_json::Value {
        let id = self.next_id.to_string();
        self.next_id += 1;
        let payload = json!({ "id": id, "method": method, "params": params });
        let value = self.send_line(&payload.to_string());
        assert_eq!(value["id"].as_str(), Some(id.as_str()), "id echo for {method}");
        value
    }

    /// Calls `method`, asserts success and returns `result`.
    pub fn call_ok(&mut self, method: &str, params: serde_json::Value) -> serde_json::Value {
        let value = self.call(method, params);
        assert_eq!(value["ok"].as_bool(), Some(true), "{method} failed: {value}");
        value["result"].clone()
    }

    pub fn create_student(&mut self, name: &str, age: u32, level: u8) -> u64 {
        let res = self.call_ok(
            "students.create",
            json!({ "name": name, "age": age, "gradeLevel": level }),
        );
        res["student"]["id"].as_u64().expect("student id")
    }

    pub fn upsert_grade(&mut self, student_id: u64, subject: &str, score: f64) {
        self.call_ok(
            "grades.upsert",
            json!({ "studentId": student_id, "subject": subject, "score": score }),
        );
    }
}

impl Drop for Sidecar {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub fn error_code(value: &serde_json::Value) -> Option<&str> {
    value["error"]["code"].as_str()
}

pub fn names(result: &serde_json::Value) -> Vec<String> {
    result["students"]
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|s| s["name"].as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
