use super::*;

/// Which custom collection a request targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum CustomKind {
    Files,
    Jars,
}

impl CustomKind {
    fn field(self) -> &'static str {
        match self {
            CustomKind::Files => "file",
            CustomKind::Jars => "jar",
        }
    }

    fn list_key(self) -> &'static str {
        match self {
            CustomKind::Files => "custom-files",
            CustomKind::Jars => "custom-jars",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            CustomKind::Files => "Custom file",
            CustomKind::Jars => "Jar",
        }
    }
}

struct Upload {
    filename: String,
    bytes: Vec<u8>,
    description: Option<String>,
}

async fn read_upload(kind: CustomKind, mut multipart: Multipart) -> Result<Upload, Response> {
    let mut file = None;
    let mut description = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(format!("invalid multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == kind.field() {
            let filename = field
                .file_name()
                .map(str::to_string)
                .filter(|f| !f.is_empty())
                .ok_or_else(|| bad_request("uploaded part has no file name"))?;
            let bytes = field
                .bytes()
                .await
                .map_err(|e| bad_request(format!("read upload: {}", e)))?;
            file = Some((filename, bytes.to_vec()));
        } else if name == "description" {
            let text = field
                .text()
                .await
                .map_err(|e| bad_request(format!("read description: {}", e)))?;
            description = Some(text).filter(|t| !t.trim().is_empty());
        }
    }
    let Some((filename, bytes)) = file else {
        return Err(bad_request(format!(
            "missing multipart field '{}'",
            kind.field()
        )));
    };
    Ok(Upload {
        filename,
        bytes,
        description,
    })
}

fn attachment(name: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", name),
            ),
        ],
        axum::body::Bytes::from(bytes),
    )
        .into_response()
}

async fn list_custom(state: &AppState, kind: CustomKind) -> Response {
    let items: Vec<CustomFile> = match kind {
        CustomKind::Files => state
            .files
            .read()
            .await
            .values()
            .map(|f| f.meta.clone())
            .collect(),
        CustomKind::Jars => state
            .jars
            .read()
            .await
            .values()
            .map(|f| f.meta.clone())
            .collect(),
    };
    match serde_json::to_value(items) {
        Ok(list) => {
            let mut body = serde_json::Map::new();
            body.insert(kind.list_key().to_string(), list);
            entity(body.into())
        }
        Err(err) => internal_error(err.into()),
    }
}

pub(super) async fn list_files(State(state): State<Arc<AppState>>) -> Response {
    list_custom(&state, CustomKind::Files).await
}

pub(super) async fn list_jars(State(state): State<Arc<AppState>>) -> Response {
    list_custom(&state, CustomKind::Jars).await
}

pub(super) async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Response {
    let upload = match read_upload(CustomKind::Files, multipart).await {
        Ok(u) => u,
        Err(resp) => return resp,
    };
    let mut files = state.files.write().await;
    if files.contains_key(&upload.filename) {
        return bad_request(format!(
            "Custom file '{}' already exists.",
            upload.filename
        ));
    }
    let meta = CustomFile {
        name: upload.filename.clone(),
        version: None,
        description: upload.description,
        upload_date: Some(now_ts()),
        size: Some(upload.bytes.len() as u64),
    };
    tracing::info!(name = %meta.name, size = upload.bytes.len(), "custom file uploaded");
    files.insert(
        upload.filename.clone(),
        StoredFile {
            meta,
            bytes: upload.bytes,
        },
    );
    message(format!(
        "Custom file '{}' has been uploaded.",
        upload.filename
    ))
}

pub(super) async fn upload_jar(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Response {
    let upload = match read_upload(CustomKind::Jars, multipart).await {
        Ok(u) => u,
        Err(resp) => return resp,
    };
    if !upload.filename.ends_with(".jar") {
        return bad_request(format!(
            "File '{}' does not have the .jar extension.",
            upload.filename
        ));
    }
    let version = jar_version(&upload.filename);
    let key = (upload.filename.clone(), version.clone());
    let mut jars = state.jars.write().await;
    if jars.contains_key(&key) {
        return bad_request(format!(
            "Jar '{}' version {} already exists.",
            upload.filename, version
        ));
    }
    let meta = CustomFile {
        name: upload.filename.clone(),
        version: Some(version),
        description: upload.description,
        upload_date: Some(now_ts()),
        size: Some(upload.bytes.len() as u64),
    };
    tracing::info!(name = %meta.name, "jar uploaded");
    jars.insert(
        key,
        StoredFile {
            meta,
            bytes: upload.bytes,
        },
    );
    message(format!("Jar '{}' has been uploaded.", upload.filename))
}

pub(super) async fn download_file(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    match state.files.read().await.get(&name) {
        Some(f) => attachment(&f.meta.name, f.bytes.clone()),
        None => not_found(format!("{} '{}' has not been found.", CustomKind::Files.noun(), name)),
    }
}

pub(super) async fn download_jar(
    State(state): State<Arc<AppState>>,
    Path((name, version)): Path<(String, String)>,
) -> Response {
    match state.jars.read().await.get(&(name.clone(), version.clone())) {
        Some(f) => attachment(&f.meta.name, f.bytes.clone()),
        None => not_found(format!(
            "{} '{}' version {} has not been found.",
            CustomKind::Jars.noun(),
            name,
            version
        )),
    }
}

pub(super) async fn delete_file(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    match state.files.write().await.remove(&name) {
        Some(_) => message(format!("{} '{}' has been deleted.", CustomKind::Files.noun(), name)),
        None => not_found(format!("{} '{}' has not been found.", CustomKind::Files.noun(), name)),
    }
}

pub(super) async fn delete_jar(
    State(state): State<Arc<AppState>>,
    Path((name, version)): Path<(String, String)>,
) -> Response {
    match state.jars.write().await.remove(&(name.clone(), version.clone())) {
        Some(_) => message(format!("{} '{}' has been deleted.", CustomKind::Jars.noun(), name)),
        None => not_found(format!(
            "{} '{}' version {} has not been found.",
            CustomKind::Jars.noun(),
            name,
            version
        )),
    }
}
