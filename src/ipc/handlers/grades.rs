use crate::ipc::error::{respond, HandlerResult};
use crate::ipc::types::{AppState, Request};
use crate::model::Subject;
use serde_json::json;

fn handle_grades_upsert(state: &mut AppState, req: &Request) -> HandlerResult {
    let student_id = req.u64_param("studentId")?;
    let subject: Subject = req.typed_param("subject")?;
    let score = req.f64_param("score")?;

    state.school.add_grade(student_id, subject, score)?;
    Ok(json!({ "ok": true }))
}

fn handle_grades_list(state: &mut AppState, req: &Request) -> HandlerResult {
    let student_id = req.u64_param("studentId")?;
    Ok(json!({ "grades": state.school.student_grades(student_id) }))
}

fn handle_grades_records(state: &mut AppState) -> HandlerResult {
    Ok(json!({ "rows": state.school.grade_rows() }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let outcome = match req.method.as_str() {
        "grades.upsert" => handle_grades_upsert(state, req),
        "grades.list" => handle_grades_list(state, req),
        "grades.records" => handle_grades_records(state),
        _ => return None,
    };
    Some(respond(&req.id, outcome))
}
