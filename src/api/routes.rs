use actix_cors::Cors;
use actix_web::{web, HttpResponse};

use super::error::ApiError;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health checks
        .route("/health", web::get().to(health_check))
        .route("/metrics", web::get().to(metrics_endpoint))

        // API v1
        .service(
            web::scope("/api/v1")
                .app_data(json_config())
                .wrap(
                    Cors::default()
                        .allowed_origin_fn(|origin, _req_head| {
                            origin.as_bytes().starts_with(b"http://localhost") ||
                            origin.as_bytes().starts_with(b"https://")
                        })
                        .allowed_methods(vec!["GET", "POST"])
                        .allowed_headers(vec!["Content-Type"])
                        .expose_headers(vec!["Content-Disposition"])
                        .max_age(3600)
                )

                .service(
                    web::scope("/awb")
                        .route("/download", web::post().to(handlers::download_awb))
                        .route("/preview", web::post().to(handlers::preview_awb))
                )

                .service(
                    web::scope("/invoices")
                        .route("/html", web::post().to(handlers::invoice_html))
                        .route("/download", web::post().to(handlers::download_invoice))
                        .route("/print", web::post().to(handlers::print_invoice))
                )
        );
}

/// Errores de JSON con el mismo formato que el resto de la API.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(1_048_576)
        .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into())
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}

async fn metrics_endpoint() -> HttpResponse {
    use prometheus::{Encoder, TextEncoder};

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return HttpResponse::InternalServerError().finish();
    }

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer)
}
