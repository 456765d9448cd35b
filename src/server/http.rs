use std::sync::Arc;

use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use serde::Serialize;
use tracing::info;

use crate::config::settings::ServerConfig;
use crate::error::{AdminError, Result};
use crate::handlers::api::AdminApi;
use crate::models::contact::ContactRequest;

/// Contact endpoint response structure
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub email_sent: bool,
}

/// Health check response structure
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
}

/// Contact form intake handler
#[post("/contact")]
pub async fn handle_contact(
    body: web::Json<ContactRequest>,
    api: web::Data<Arc<AdminApi>>,
) -> impl Responder {
    let outcome = api.contact_submit(body.into_inner()).await;

    match outcome.data {
        Some(result) => HttpResponse::Ok().json(ContactResponse {
            success: true,
            message: "Mensaje enviado correctamente".to_string(),
            email_sent: result.email_sent,
        }),
        None => HttpResponse::BadRequest().json(ContactResponse {
            success: false,
            message: outcome
                .error
                .unwrap_or_else(|| "Faltan datos requeridos".to_string()),
            email_sent: false,
        }),
    }
}

/// Health check handler
#[get("/health")]
pub async fn handle_health() -> impl Responder {
    HttpResponse::Ok().json(HealthCheckResponse {
        status: "OK".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Run the HTTP surface (contact intake + health) until shutdown
pub async fn run_http_server(config: &ServerConfig, api: Arc<AdminApi>) -> Result<()> {
    let address = config.address()?;
    info!(%address, "HTTP server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(api.clone()))
            .service(handle_contact)
            .service(handle_health)
    })
    .bind(address)
    .map_err(|e| AdminError::config(format!("failed to bind {address}: {e}")))?
    .run()
    .await
    .map_err(AdminError::from)
}
