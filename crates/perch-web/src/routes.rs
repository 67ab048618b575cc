use axum::Json;
use axum::extract::Multipart;
use axum::http::StatusCode;
use serde_json::{Value, json};

/// GET / — service banner.
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "perch posture service",
        "status": "ok"
    }))
}

/// GET /health — liveness probe for the hosting platform.
pub async fn health() -> &'static str {
    "OK"
}

/// GET /info — what this deployment is and is not.
pub async fn info() -> Json<Value> {
    Json(json!({
        "app": "perch",
        "note": "placeholder service; posture detection runs on the client, \
                 not against a server-side webcam"
    }))
}

/// POST /process-image — stub for server-side posture detection.
///
/// Accepts multipart/form-data with an `image` field. Without the field
/// this is a 400; with it, a 501: running the pose model on the hosting
/// box is out of scope for this service.
pub async fn process_image(mut multipart: Multipart) -> (StatusCode, Json<Value>) {
    let mut has_image = false;

    while let Ok(Some(field)) = multipart.next_field().await {
        let is_image = field.name() == Some("image");
        // Drain the field so the multipart stream can advance.
        if field.bytes().await.is_ok() && is_image {
            has_image = true;
        }
    }

    if !has_image {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "no image uploaded" })),
        );
    }

    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({
            "error": "server-side processing not implemented in this placeholder",
            "status": "not_implemented"
        })),
    )
}
