//! Event CRUD endpoints

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use serde::Serialize;

use eventos_core::{EventPatch, EventRecord, NewEvent};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/eventos", get(list_events).post(create_event))
        .route(
            "/api/eventos/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}

/// Response body for a deleted event
#[derive(Serialize)]
pub struct DeleteResponse {
    pub mensaje: String,
    pub evento: EventRecord,
}

/// Ids that are not numbers can never match a stored event
fn parse_id(raw: &str) -> Result<u64, AppError> {
    raw.parse()
        .map_err(|_| AppError::new(StatusCode::NOT_FOUND, "Event not found"))
}

/// GET /api/eventos - List all events
async fn list_events(State(state): State<AppState>) -> Json<Vec<EventRecord>> {
    let store = state.store.read().await;
    Json(store.list().to_vec())
}

/// GET /api/eventos/:id - Get one event
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventRecord>, AppError> {
    let id = parse_id(&id)?;
    let store = state.store.read().await;
    Ok(Json(store.get(id)?.clone()))
}

/// POST /api/eventos - Create a new event
async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<NewEvent>, JsonRejection>,
) -> Result<(StatusCode, Json<EventRecord>), AppError> {
    let Json(fields) = payload?;
    let mut store = state.store.write().await;
    let created = store.create(fields)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/eventos/:id - Update some fields of an event
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EventPatch>, JsonRejection>,
) -> Result<Json<EventRecord>, AppError> {
    let id = parse_id(&id)?;
    let mut store = state.store.write().await;
    // Unknown ids win over malformed bodies
    store.get(id)?;
    let Json(patch) = payload?;
    Ok(Json(store.update(id, patch)?))
}

/// DELETE /api/eventos/:id - Delete an event
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = parse_id(&id)?;
    let mut store = state.store.write().await;
    let evento = store.delete(id)?;
    Ok(Json(DeleteResponse {
        mensaje: "Evento eliminado".to_string(),
        evento,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use eventos_core::EventStore;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> (tempfile::TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path().join("cards.json")).unwrap();
        (dir, crate::routes::router(AppState::new(store)))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn concierto() -> Value {
        json!({
            "title": "Concierto",
            "category": "music",
            "dateTime": "2025-10-16T10:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (_dir, app) = app();

        let (status, created) = send(&app, "POST", "/api/eventos", Some(concierto())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 1);
        assert_eq!(created["description"], "");
        assert_eq!(created["imgURL"], "");

        let (status, fetched) = send(&app, "GET", "/api/eventos/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_without_date_time_is_bad_request() {
        let (_dir, app) = app();
        let body = json!({ "title": "Sin fecha", "category": "misc" });

        let (status, body) = send(&app, "POST", "/api/eventos", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("dateTime"), "{error}");
        assert!(error.contains("required"), "{error}");
    }

    #[tokio::test]
    async fn test_create_with_malformed_date_time() {
        let (_dir, app) = app();
        let mut body = concierto();
        body["dateTime"] = json!("2025-10-16T10:00:00+02:00");

        let (status, body) = send(&app, "POST", "/api/eventos", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("ISO 8601"));
    }

    #[tokio::test]
    async fn test_create_with_unparsable_json() {
        let (_dir, app) = app();
        let request = Request::builder()
            .method("POST")
            .uri("/api/eventos")
            .header("content-type", "application/json")
            .body(Body::from("{\"title\": "))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_unknown_and_non_numeric_ids() {
        let (_dir, app) = app();
        for uri in ["/api/eventos/42", "/api/eventos/abc"] {
            let (status, body) = send(&app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert!(body["error"].is_string());
        }
    }

    #[tokio::test]
    async fn test_update_nonexistent_is_not_found() {
        let (_dir, app) = app();
        let (status, _) = send(&app, "PUT", "/api/eventos/999", Some(json!({"title": "X"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let (_dir, app) = app();
        send(&app, "POST", "/api/eventos", Some(concierto())).await;

        let (status, updated) = send(
            &app,
            "PUT",
            "/api/eventos/1",
            Some(json!({ "description": "Entradas agotadas" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["title"], "Concierto");
        assert_eq!(updated["description"], "Entradas agotadas");

        let (status, _) = send(
            &app,
            "PUT",
            "/api/eventos/1",
            Some(json!({ "dateTime": "not-a-date" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_removes_from_list() {
        let (_dir, app) = app();
        send(&app, "POST", "/api/eventos", Some(concierto())).await;
        let mut second = concierto();
        second["title"] = json!("Teatro");
        send(&app, "POST", "/api/eventos", Some(second)).await;

        let (status, body) = send(&app, "DELETE", "/api/eventos/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mensaje"], "Evento eliminado");
        assert_eq!(body["evento"]["title"], "Concierto");

        let (_, list) = send(&app, "GET", "/api/eventos", None).await;
        let list = list.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["title"], "Teatro");

        let (status, _) = send(&app, "DELETE", "/api/eventos/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_persistence_failure_is_server_error() {
        let (dir, app) = app();
        send(&app, "POST", "/api/eventos", Some(concierto())).await;
        std::fs::write(dir.path().join("cards.json"), "not json").unwrap();

        let (status, body) = send(&app, "DELETE", "/api/eventos/1", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());

        // The in-memory snapshot still serves reads
        let (status, list) = send(&app, "GET", "/api/eventos", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 1);
    }
}
