//! Admin panel handlers.

use crate::{
    core::{
        admin::{AdminTab, ProductForm},
        events::{UiEvent, UiOutcome, process_upload},
    },
    errors::{Error, Result},
    web::AppState,
};
use axum::{
    Form,
    body::Bytes,
    extract::{Multipart, Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

/// Query string of the admin page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminQuery {
    /// `upload` or `manage`
    pub tab: Option<String>,
}

/// Delete confirmation form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteForm {
    /// `true` once the user confirmed the prompt
    pub confirm: String,
}

/// `GET /admin`
pub async fn show(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Result<UiOutcome> {
    let tab = query
        .tab
        .as_deref()
        .map(str::parse::<AdminTab>)
        .transpose()?;
    state.dispatch(UiEvent::ShowAdmin { tab }).await
}

/// `POST /admin/products` - create, or commit the pending edit.
pub async fn submit_product(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<UiOutcome> {
    state.dispatch(UiEvent::SubmitProductForm(form)).await
}

/// `POST /admin/products/{id}/edit`
pub async fn begin_edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<UiOutcome> {
    state.dispatch(UiEvent::BeginEdit { id }).await
}

/// `POST /admin/draft/cancel`
pub async fn cancel_edit(State(state): State<AppState>) -> Result<UiOutcome> {
    state.dispatch(UiEvent::CancelEdit).await
}

/// `POST /admin/products/{id}/delete`
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> Result<UiOutcome> {
    let confirmed = form.confirm == "true";
    state
        .dispatch(UiEvent::DeleteProduct { id, confirmed })
        .await
}

/// `GET /admin/export`
pub async fn export(State(state): State<AppState>) -> Result<UiOutcome> {
    state.dispatch(UiEvent::ExportCatalog).await
}

/// Form field carrying the catalog document on `/admin/import`.
pub const CATALOG_FIELD: &str = "catalog";
/// Form field carrying the image on `/admin/ocr`.
pub const IMAGE_FIELD: &str = "image";

/// Reads the file posted under `name`, skipping any other fields.
/// A browser sends the field with an empty body when no file was chosen.
async fn read_file_field(multipart: &mut Multipart, name: &str) -> Result<Bytes> {
    let upload_error = |e: axum::extract::multipart::MultipartError| Error::Upload {
        message: e.body_text(),
    };
    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() != Some(name) {
            continue;
        }
        let bytes = field.bytes().await.map_err(upload_error)?;
        if bytes.is_empty() {
            break;
        }
        return Ok(bytes);
    }
    Err(Error::Upload {
        message: format!("no file was selected for '{name}'"),
    })
}

/// `POST /admin/import` - multipart form with the document under [`CATALOG_FIELD`].
pub async fn import(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<UiOutcome> {
    let bytes = read_file_field(&mut multipart, CATALOG_FIELD).await?;
    let document = String::from_utf8(bytes.to_vec()).map_err(|e| Error::Import {
        message: e.to_string(),
    })?;
    state.dispatch(UiEvent::ImportCatalog { document }).await
}

/// `POST /admin/ocr` - multipart form with the image under [`IMAGE_FIELD`].
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<UiOutcome> {
    let image = read_file_field(&mut multipart, IMAGE_FIELD).await?;
    process_upload(
        Arc::clone(&state.context),
        Arc::clone(&state.ocr),
        image.to_vec(),
    )
    .await
}

/// `POST /admin/ocr/reset` - the "Try Again" action.
pub async fn reset_upload(State(state): State<AppState>) -> Result<UiOutcome> {
    state.dispatch(UiEvent::ResetUpload).await
}
