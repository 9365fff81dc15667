//! Request handlers for the five routes.

use std::sync::Arc;

use axum::extract::{Multipart, Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use minijinja::context;
use serde::{Deserialize, Serialize};

use darkroom_core::{payload, pipeline, Filter, FilterOutcome, ImageId, PipelineError};

use super::{ApiError, AppState};

/// One row of the filter menu.
#[derive(Serialize)]
struct MenuEntry {
    name: &'static str,
    label: &'static str,
}

fn filter_menu() -> Vec<MenuEntry> {
    Filter::ALL
        .iter()
        .map(|f| MenuEntry {
            name: f.name(),
            label: f.label(),
        })
        .collect()
}

/// `GET /` - the filter-menu landing page.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = state.render("index.html", context! { filters => filter_menu() })?;
    Ok(Html(page))
}

/// `POST /upload` - ingest a multipart upload and show the filter page.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    let mut upload: Option<Vec<u8>> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("image") {
            upload = Some(field.bytes().await?.to_vec());
        }
    }
    let bytes = upload.ok_or(ApiError::MissingField("image"))?;

    // Decode and resize off the async executor
    let processor = Arc::clone(&state.processor);
    let stored = tokio::task::spawn_blocking(move || processor.ingest(&bytes)).await??;

    let page = state.render(
        "filter.html",
        context! {
            filters => filter_menu(),
            image_id => stored.id.as_str(),
            image_data => payload::to_data_uri(&stored.bytes),
        },
    )?;
    state.store.put(stored);
    Ok(Html(page))
}

#[derive(Deserialize)]
pub struct FilterPageQuery {
    image_id: String,
}

/// `GET /apply-filter?image_id=` - the filter page for an existing upload.
pub async fn filter_page(
    State(state): State<AppState>,
    Query(query): Query<FilterPageQuery>,
) -> Result<Html<String>, ApiError> {
    let stored = state
        .store
        .get(&ImageId::from(query.image_id.as_str()))
        .ok_or(PipelineError::NotFound { id: query.image_id })?;

    let page = state.render(
        "filter.html",
        context! {
            filters => filter_menu(),
            image_id => stored.id.as_str(),
            image_data => payload::to_data_uri(&stored.bytes),
        },
    )?;
    Ok(Html(page))
}

#[derive(Deserialize)]
pub struct ApplyFilterForm {
    image_id: String,
    selected_filter: String,
}

#[derive(Serialize)]
pub struct ApplyFilterResponse {
    image_data: String,
    filter_name: String,
}

/// `POST /api/apply-filter` - run a filter over a stored image.
///
/// Unknown filter names echo the stored payload unchanged.
pub async fn apply_filter(
    State(state): State<AppState>,
    Form(form): Form<ApplyFilterForm>,
) -> Result<Json<ApplyFilterResponse>, ApiError> {
    let stored = state
        .store
        .get(&ImageId::from(form.image_id.as_str()))
        .ok_or(PipelineError::NotFound { id: form.image_id })?;

    let filter = Filter::from_name(&form.selected_filter);
    let label = filter.map_or("Unknown", Filter::label);

    let outcome = match filter {
        // Identity: return the stored payload bit-for-bit, skipping the
        // decode/re-encode round trip
        None => FilterOutcome {
            bytes: stored.bytes,
            label: label.to_string(),
        },
        Some(filter) => {
            let engine = Arc::clone(&state.engine);
            let processor = Arc::clone(&state.processor);
            tokio::task::spawn_blocking(move || -> Result<FilterOutcome, PipelineError> {
                let image = pipeline::decode::decode(&stored.bytes)?.to_rgb8();
                let filtered = engine.apply(Some(filter), &image);
                Ok(FilterOutcome {
                    bytes: processor.encode(&filtered)?,
                    label: label.to_string(),
                })
            })
            .await??
        }
    };

    Ok(Json(ApplyFilterResponse {
        image_data: payload::to_data_uri(&outcome.bytes),
        filter_name: outcome.label,
    }))
}

#[derive(Deserialize)]
pub struct DownloadForm {
    image_data: String,
    filter_name: String,
}

/// `POST /download` - turn a data URI back into a binary attachment.
pub async fn download(Form(form): Form<DownloadForm>) -> Result<Response, ApiError> {
    let bytes = payload::from_data_uri(&form.image_data)?;
    let filename = format!("filtered_image_{}.jpg", form.filter_name);

    let headers = [
        (header::CONTENT_TYPE, "image/jpeg".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, bytes).into_response())
}
