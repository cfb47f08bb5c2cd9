use crate::ipc::error::{respond, HandlerResult};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_grade_levels(state: &mut AppState) -> HandlerResult {
    Ok(json!({ "distribution": state.school.grade_level_distribution() }))
}

fn handle_subjects(state: &mut AppState) -> HandlerResult {
    Ok(json!({ "subjects": state.school.subject_statistics() }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let outcome = match req.method.as_str() {
        "analytics.gradeLevels" => handle_grade_levels(state),
        "analytics.subjects" => handle_subjects(state),
        _ => return None,
    };
    Some(respond(&req.id, outcome))
}
