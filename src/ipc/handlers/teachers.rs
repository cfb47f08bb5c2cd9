use crate::ipc::error::{respond, Fault, HandlerResult};
use crate::ipc::types::{AppState, Request};
use crate::model::Subject;
use serde_json::json;

fn handle_teachers_create(state: &mut AppState, req: &Request) -> HandlerResult {
    let name = req.str_param("name")?;
    let age = req.u32_param("age")?;
    let subject: Subject = req.typed_param("subject")?;

    let teacher = state.school.add_teacher(name, age, subject);
    Ok(json!({ "teacher": teacher }))
}

fn handle_teachers_list(state: &mut AppState) -> HandlerResult {
    let teachers: Vec<_> = state.school.teachers().collect();
    Ok(json!({
        "teachers": teachers,
        "enrolled": state.school.store().enrolled_teachers(),
    }))
}

fn handle_teachers_find(state: &mut AppState, req: &Request) -> HandlerResult {
    let query = req.str_param("name")?;
    let teacher = state.school.find_teacher_by_name(query).ok_or_else(|| {
        Fault::not_found("teacher not found").with_details(json!({ "name": query }))
    })?;
    Ok(json!({ "teacher": teacher }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let outcome = match req.method.as_str() {
        "teachers.create" => handle_teachers_create(state, req),
        "teachers.list" => handle_teachers_list(state),
        "teachers.find" => handle_teachers_find(state, req),
        _ => return None,
    };
    Some(respond(&req.id, outcome))
}
