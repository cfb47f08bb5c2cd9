use crate::ipc::error::{respond, Fault, HandlerResult};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_reports_student(state: &mut AppState, req: &Request) -> HandlerResult {
    let student_id = req.u64_param("studentId")?;
    let report = state.school.student_report(student_id).ok_or_else(|| {
        Fault::not_found("student not found").with_details(json!({ "studentId": student_id }))
    })?;
    Ok(json!({ "report": report }))
}

fn handle_reports_school_stats(state: &mut AppState) -> HandlerResult {
    Ok(json!({
        "schoolName": state.school.config().school_name,
        "stats": state.school.school_statistics(),
    }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let outcome = match req.method.as_str() {
        "reports.student" => handle_reports_student(state, req),
        "reports.schoolStats" => handle_reports_school_stats(state),
        _ => return None,
    };
    Some(respond(&req.id, outcome))
}
