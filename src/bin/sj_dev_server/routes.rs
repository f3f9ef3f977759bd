//! Route table for everything under `/v1`.

use axum::extract::DefaultBodyLimit;

use super::*;

const UPLOAD_LIMIT: usize = 64 * 1024 * 1024;

pub(super) fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/custom/files", get(list_files).post(upload_file))
        .route("/custom/files/:name", get(download_file).delete(delete_file))
        .route("/custom/jars", get(list_jars).post(upload_jar))
        .route(
            "/custom/jars/:name/:version",
            get(download_jar).delete(delete_jar),
        )
        .route("/streams", get(list_streams).post(create_stream))
        .route("/streams/_types", get(stream_types))
        .route("/streams/:name", get(get_stream).delete(delete_stream))
        .route("/streams/:name/related", get(related_stream))
        .route("/services", get(list_services).post(create_service))
        .route("/services/:name", get(get_service))
        .route("/instances", post(create_instance))
        .route("/instances/:name", axum::routing::delete(delete_instance))
        .layer(DefaultBodyLimit::max(UPLOAD_LIMIT))
}
