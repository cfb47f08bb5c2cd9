use crate::ipc::error::{respond, HandlerResult};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_health(state: &mut AppState) -> HandlerResult {
    Ok(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "schoolName": state.school.config().school_name,
    }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let outcome = match req.method.as_str() {
        "health" => handle_health(state),
        _ => return None,
    };
    Some(respond(&req.id, outcome))
}
