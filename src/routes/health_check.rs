use actix_web::HttpResponse;

/// Liveness probe. Request ids come from the tracing middleware.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
