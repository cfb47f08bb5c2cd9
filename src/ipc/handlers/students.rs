use crate::ipc::error::{respond, Fault, HandlerResult};
use crate::ipc::types::{AppState, Request};
use crate::model::GradeLevel;
use crate::query::SearchCriteria;
use serde_json::json;

fn handle_students_create(state: &mut AppState, req: &Request) -> HandlerResult {
    let name = req.str_param("name")?;
    let age = req.u32_param("age")?;
    let grade_level: GradeLevel = req.typed_param("gradeLevel")?;

    let student = state.school.add_student(name, age, grade_level);
    Ok(json!({ "student": student }))
}

fn handle_students_list(state: &mut AppState) -> HandlerResult {
    let students: Vec<_> = state.school.students().collect();
    Ok(json!({
        "students": students,
        "enrolled": state.school.store().enrolled_students(),
    }))
}

fn handle_students_find(state: &mut AppState, req: &Request) -> HandlerResult {
    let query = req.str_param("name")?;
    let student = state.school.find_student_by_name(query).ok_or_else(|| {
        Fault::not_found("student not found").with_details(json!({ "name": query }))
    })?;
    Ok(json!({ "student": student }))
}

fn handle_students_search(state: &mut AppState, req: &Request) -> HandlerResult {
    // No criteria object means no filters.
    let criteria: SearchCriteria = req.typed_param_or_default("criteria")?;
    let students = state.school.search_students(&criteria);
    Ok(json!({ "students": students }))
}

fn handle_students_delete(state: &mut AppState, req: &Request) -> HandlerResult {
    let student_id = req.u64_param("studentId")?;
    if !state.school.remove_student(student_id) {
        return Err(Fault::not_found("student not found"));
    }
    Ok(json!({ "ok": true }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let outcome = match req.method.as_str() {
        "students.create" => handle_students_create(state, req),
        "students.list" => handle_students_list(state),
        "students.find" => handle_students_find(state, req),
        "students.search" => handle_students_search(state, req),
        "students.delete" => handle_students_delete(state, req),
        _ => return None,
    };
    Some(respond(&req.id, outcome))
}
