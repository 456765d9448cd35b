// Contact intake and theme preference scenarios

use std::sync::Arc;

use actix_web::{test, web, App};
use async_trait::async_trait;

use institute_admin_server::config::Config;
use institute_admin_server::error::{AdminError, Result};
use institute_admin_server::handlers::api::AdminApi;
use institute_admin_server::models::contact::{ContactMessage, ContactRequest};
use institute_admin_server::models::theme::Theme;
use institute_admin_server::server::http::{handle_contact, handle_health};
use institute_admin_server::services::ContactNotifier;

mod common;

fn request(name: &str, message: &str) -> ContactRequest {
    ContactRequest {
        name: name.to_string(),
        email: "padre@familia.pe".to_string(),
        phone: "999 888 777".to_string(),
        message: message.to_string(),
    }
}

struct FailingNotifier;

#[async_trait]
impl ContactNotifier for FailingNotifier {
    async fn notify(&self, _recipient: &str, _message: &ContactMessage) -> Result<()> {
        Err(AdminError::Network("smtp unreachable".into()))
    }
}

#[tokio::test]
async fn submission_is_persisted_with_increasing_ids() {
    let store = common::memory_store();
    let api = common::api_on(store);

    let first = api
        .contact_submit(request("Carlos", "Quisiera información de matrícula"))
        .await
        .data
        .unwrap();
    let second = api
        .contact_submit(request("María", "Horarios de los cursos"))
        .await
        .data
        .unwrap();

    assert_eq!(first.message.id, 1);
    assert_eq!(second.message.id, 2);
    assert!(first.email_sent);

    let recent = api.contact_recent(None).await.data.unwrap();
    assert_eq!(recent.len(), 2);
    // newest first
    assert_eq!(recent[0].name, "María");
    assert_eq!(recent[1].name, "Carlos");
}

#[tokio::test]
async fn missing_field_is_rejected_and_nothing_is_stored() {
    let store = common::memory_store();
    let api = common::api_on(store);

    let response = api.contact_submit(request("Carlos", "   ")).await;
    assert!(!response.success);
    assert!(response.error.unwrap().contains("message"));

    assert!(api.contact_recent(None).await.data.unwrap().is_empty());
}

#[tokio::test]
async fn recent_listing_honors_limit() {
    let store = common::memory_store();
    let api = common::api_on(store);

    for i in 0..5 {
        api.contact_submit(request("Carlos", &format!("mensaje {i}"))).await;
    }

    let limited = api.contact_recent(Some(3)).await.data.unwrap();
    assert_eq!(limited.len(), 3);
    assert_eq!(limited[0].message, "mensaje 4");
}

#[tokio::test]
async fn failed_notification_does_not_fail_the_submission() {
    let store = common::memory_store();
    let api = AdminApi::with_notifier(store, &Config::default(), Arc::new(FailingNotifier));

    let outcome = api
        .contact_submit(request("Carlos", "Quisiera información"))
        .await
        .data
        .unwrap();
    assert!(!outcome.email_sent);

    // the message was stored regardless
    assert_eq!(api.contact_recent(None).await.data.unwrap().len(), 1);
}

#[tokio::test]
async fn theme_persists_and_toggles() {
    let store = common::memory_store();
    let api = common::api_on(store);

    assert_eq!(api.theme().await.data, Some(None));

    api.set_theme(Theme::Oscuro).await;
    assert_eq!(api.theme().await.data, Some(Some(Theme::Oscuro)));

    let toggled = api.toggle_theme().await.data.unwrap();
    assert_eq!(toggled, Theme::Claro);
    assert_eq!(api.theme().await.data, Some(Some(Theme::Claro)));
}

#[tokio::test]
async fn unrecognized_stored_theme_reads_as_none() {
    use institute_admin_server::store::KeyValueStore;

    let store = common::memory_store();
    store.set("tema", "dark").await.unwrap();

    let api = common::api_on(store);
    assert_eq!(api.theme().await.data, Some(None));
}

#[actix_web::test]
async fn contact_endpoint_accepts_and_rejects() {
    let store = common::memory_store();
    let api = Arc::new(common::api_on(store));

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(api.clone()))
            .service(handle_contact)
            .service(handle_health),
    )
    .await;

    let ok = test::TestRequest::post()
        .uri("/contact")
        .set_json(serde_json::json!({
            "name": "Carlos",
            "email": "padre@familia.pe",
            "phone": "999 888 777",
            "message": "Quisiera información de matrícula"
        }))
        .to_request();
    let response = test::call_service(&app, ok).await;
    assert!(response.status().is_success());

    let bad = test::TestRequest::post()
        .uri("/contact")
        .set_json(serde_json::json!({
            "name": "Carlos",
            "email": "sin-arroba",
            "phone": "999 888 777",
            "message": "hola"
        }))
        .to_request();
    let response = test::call_service(&app, bad).await;
    assert_eq!(response.status(), 400);

    let health = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, health).await;
    assert_eq!(body["status"], "OK");
}
