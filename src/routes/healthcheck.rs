use actix_web::HttpResponse;

/// Liveness probe, answers as long as the server is accepting connections
pub async fn healthcheck() -> HttpResponse {
    HttpResponse::Ok().finish()
}
