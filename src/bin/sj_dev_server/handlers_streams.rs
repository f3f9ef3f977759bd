use std::collections::BTreeMap;

use sj_console::model::T_STREAM_TYPE;

use super::*;

fn to_entity<T: serde::Serialize>(key: &str, value: &T) -> Response {
    match serde_json::to_value(value) {
        Ok(v) => {
            let mut body = serde_json::Map::new();
            body.insert(key.to_string(), v);
            entity(body.into())
        }
        Err(err) => internal_error(err.into()),
    }
}

pub(super) async fn list_streams(State(state): State<Arc<AppState>>) -> Response {
    let streams: Vec<Stream> = state.streams.read().await.values().cloned().collect();
    to_entity("streams", &streams)
}

pub(super) async fn stream_types() -> Response {
    to_entity("types", &STREAM_TYPES)
}

pub(super) async fn get_stream(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    match state.streams.read().await.get(&name) {
        Some(s) => to_entity("stream", s),
        None => not_found(format!("Stream '{}' has not been found.", name)),
    }
}

/// Checks a new stream against the catalog. Returns the rejection message.
pub(super) fn validate_stream(
    stream: &Stream,
    services: &BTreeMap<String, Service>,
) -> Result<(), String> {
    if stream.name.trim().is_empty() {
        return Err("Stream name is required.".to_string());
    }
    if !STREAM_TYPES.contains(&stream.stream_type.as_str()) {
        return Err(format!("Unknown stream type '{}'.", stream.stream_type));
    }
    if !services.contains_key(&stream.service) {
        return Err(format!("Service '{}' does not exist.", stream.service));
    }
    if stream.generator.is_some() && stream.stream_type != T_STREAM_TYPE {
        return Err(format!(
            "Generator is only supported for {} streams.",
            T_STREAM_TYPE
        ));
    }
    Ok(())
}

pub(super) async fn create_stream(
    State(state): State<Arc<AppState>>,
    Json(stream): Json<Stream>,
) -> Response {
    {
        let services = state.services.read().await;
        if let Err(msg) = validate_stream(&stream, &services) {
            return bad_request(msg);
        }
    }
    let mut streams = state.streams.write().await;
    if streams.contains_key(&stream.name) && !stream.force {
        return bad_request(format!("Stream '{}' already exists.", stream.name));
    }
    let name = stream.name.clone();
    streams.insert(name.clone(), stream);
    tracing::info!(%name, "stream created");
    message(format!("Stream '{}' has been saved.", name))
}

pub(super) async fn delete_stream(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    match state.streams.write().await.remove(&name) {
        Some(_) => message(format!("Stream '{}' has been deleted.", name)),
        None => not_found(format!("Stream '{}' has not been found.", name)),
    }
}

pub(super) async fn related_stream(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    if !state.streams.read().await.contains_key(&name) {
        return not_found(format!("Stream '{}' has not been found.", name));
    }
    let instances = state.instances_using(&name).await;
    to_entity("instances", &instances)
}

pub(super) async fn list_services(State(state): State<Arc<AppState>>) -> Response {
    let services: Vec<Service> = state.services.read().await.values().cloned().collect();
    to_entity("services", &services)
}

pub(super) async fn get_service(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    match state.services.read().await.get(&name) {
        Some(s) => to_entity("service", s),
        None => not_found(format!("Service '{}' has not been found.", name)),
    }
}

/// Dev-only: services can be registered so streams have something to bind to.
pub(super) async fn create_service(
    State(state): State<Arc<AppState>>,
    Json(service): Json<Service>,
) -> Response {
    if service.name.trim().is_empty() {
        return bad_request("Service name is required.");
    }
    let name = service.name.clone();
    state.services.write().await.insert(name.clone(), service);
    message(format!("Service '{}' has been saved.", name))
}

/// Dev-only: registers an instance so streams gain dependents.
pub(super) async fn create_instance(
    State(state): State<Arc<AppState>>,
    Json(instance): Json<Instance>,
) -> Response {
    if instance.name.trim().is_empty() {
        return bad_request("Instance name is required.");
    }
    let name = instance.name.clone();
    state.instances.write().await.insert(name.clone(), instance);
    message(format!("Instance '{}' has been saved.", name))
}

pub(super) async fn delete_instance(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    match state.instances.write().await.remove(&name) {
        Some(_) => message(format!("Instance '{}' has been deleted.", name)),
        None => not_found(format!("Instance '{}' has not been found.", name)),
    }
}

#[cfg(test)]
#[path = "../../tests/bin/sj_dev_server/handlers_streams_tests.rs"]
mod tests;
