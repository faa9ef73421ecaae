use axum::Json;

/// GET / - Welcome endpoint.
pub async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Bienvenue sur l'API d'exemple!",
        "health": "/health",
    }))
}
