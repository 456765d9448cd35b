// User-directory CRUD scenarios over the in-memory store

use institute_admin_server::config::settings::DirectoryConfig;
use institute_admin_server::models::directory::NewDirectoryRecord;
use institute_admin_server::services::DirectoryService;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

fn record(first: &str, last: &str, email: &str) -> NewDirectoryRecord {
    NewDirectoryRecord {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        phone: "999 888 777".to_string(),
        age: 30,
    }
}

#[tokio::test]
async fn first_record_in_empty_directory_gets_fallback_id() {
    let store = common::memory_store();
    let api = common::api_on(store);

    let created = api
        .directory_create(record("Emily", "Johnson", "emily@x.edu.pe"))
        .await
        .data
        .unwrap();
    assert_eq!(created.id, 30);
}

#[tokio::test]
async fn sequential_creates_yield_strictly_increasing_unique_ids() {
    let store = common::memory_store();
    let api = common::api_on(store);

    let a = api
        .directory_create(record("Ana", "Pérez", "ana@x.edu.pe"))
        .await
        .data
        .unwrap();
    let b = api
        .directory_create(record("Luis", "Gómez", "luis@x.edu.pe"))
        .await
        .data
        .unwrap();
    let c = api
        .directory_create(record("Rosa", "Quispe", "rosa@x.edu.pe"))
        .await
        .data
        .unwrap();

    assert!(a.id < b.id && b.id < c.id);
    assert_eq!(b.id, a.id + 1);
    assert_eq!(c.id, b.id + 1);
}

#[tokio::test]
async fn create_rejects_duplicate_email() {
    let store = common::memory_store();
    let api = common::api_on(store);

    assert!(api
        .directory_create(record("Ana", "Pérez", "ana@x.edu.pe"))
        .await
        .success);
    let duplicate = api
        .directory_create(record("Otra", "Persona", "ana@x.edu.pe"))
        .await;
    assert!(!duplicate.success);
    assert!(duplicate.error.unwrap().contains("ya está registrado"));
}

#[tokio::test]
async fn create_validates_fields_before_persisting() {
    let store = common::memory_store();
    let api = common::api_on(store);

    let bad_name = api
        .directory_create(record("Ana99", "Pérez", "ana@x.edu.pe"))
        .await;
    assert!(!bad_name.success);

    let bad_age = api
        .directory_create(NewDirectoryRecord {
            age: 0,
            ..record("Ana", "Pérez", "ana@x.edu.pe")
        })
        .await;
    assert!(!bad_age.success);

    let bad_phone = api
        .directory_create(NewDirectoryRecord {
            phone: "12345".to_string(),
            ..record("Ana", "Pérez", "ana@x.edu.pe")
        })
        .await;
    assert!(!bad_phone.success);

    assert!(api.directory_list().await.data.unwrap().is_empty());
}

#[tokio::test]
async fn search_is_case_insensitive_over_name_and_email() {
    let store = common::memory_store();
    let api = common::api_on(store);

    api.directory_create(record("Emily", "Johnson", "emily.johnson@x.edu.pe"))
        .await;
    api.directory_create(record("Ana", "Pérez", "ana@x.edu.pe")).await;

    let by_name = api.directory_search("emily john").await.data.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].first_name, "Emily");

    let by_email = api.directory_search("ANA@X").await.data.unwrap();
    assert_eq!(by_email.len(), 1);

    let all = api.directory_search("  ").await.data.unwrap();
    assert_eq!(all.len(), 2);

    let none = api.directory_search("nadie").await.data.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn update_replaces_record_and_validation_failure_mutates_nothing() {
    let store = common::memory_store();
    let api = common::api_on(store);

    let mut created = api
        .directory_create(record("Ana", "Pérez", "ana@x.edu.pe"))
        .await
        .data
        .unwrap();

    created.phone = "111 222 333".to_string();
    let updated = api.directory_update(created.clone()).await.data.unwrap();
    assert_eq!(updated.phone, "111 222 333");

    // invalid edit: rejected and the stored record keeps the last good value
    created.age = 130;
    let rejected = api.directory_update(created.clone()).await;
    assert!(!rejected.success);

    let listed = api.directory_list().await.data.unwrap();
    assert_eq!(listed[0].age, 30);
    assert_eq!(listed[0].phone, "111 222 333");
}

#[tokio::test]
async fn delete_removes_exactly_one_record() {
    let store = common::memory_store();
    let api = common::api_on(store);

    let a = api
        .directory_create(record("Ana", "Pérez", "ana@x.edu.pe"))
        .await
        .data
        .unwrap();
    api.directory_create(record("Luis", "Gómez", "luis@x.edu.pe")).await;

    let deleted = api.directory_delete(a.id, true).await;
    assert_eq!(deleted.data, Some(true));

    let remaining = api.directory_list().await.data.unwrap();
    assert_eq!(remaining.len(), 1);
    assert!(api.directory_search("ana@x.edu.pe").await.data.unwrap().is_empty());
}

#[tokio::test]
async fn unconfirmed_delete_is_a_no_op() {
    let store = common::memory_store();
    let api = common::api_on(store);

    let a = api
        .directory_create(record("Ana", "Pérez", "ana@x.edu.pe"))
        .await
        .data
        .unwrap();

    let outcome = api.directory_delete(a.id, false).await;
    assert_eq!(outcome.data, Some(false));
    assert_eq!(api.directory_list().await.data.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_unknown_id_fails() {
    let store = common::memory_store();
    let api = common::api_on(store);

    let response = api.directory_delete(404, true).await;
    assert!(!response.success);
}

#[tokio::test]
async fn seed_runs_once_and_only_when_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": [
                {"id": 1, "firstName": "Emily", "lastName": "Johnson",
                 "email": "emily.johnson@x.dummyjson.com", "phone": "+81 965-431-3024",
                 "age": 28, "gender": "female"},
                {"id": 2, "firstName": "Michael", "lastName": "Williams",
                 "email": "michael.williams@x.dummyjson.com", "phone": "+49 258-627-6644",
                 "age": 35, "gender": "male"}
            ]
        })))
        .mount(&server)
        .await;

    let store = common::memory_store();
    let config = DirectoryConfig {
        seed_url: server.uri(),
        ..DirectoryConfig::default()
    };
    let directory = DirectoryService::new(store.clone(), config);

    let seeded = directory.seed_if_empty().await.unwrap();
    assert_eq!(seeded, 2);
    assert_eq!(directory.list().await.unwrap().len(), 2);

    // already populated: the remote is never consulted again
    let again = directory.seed_if_empty().await.unwrap();
    assert_eq!(again, 0);
}

#[tokio::test]
async fn failed_seed_leaves_directory_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = common::memory_store();
    let config = DirectoryConfig {
        seed_url: server.uri(),
        ..DirectoryConfig::default()
    };
    let directory = DirectoryService::new(store.clone(), config);

    assert!(directory.seed_if_empty().await.is_err());
    assert!(directory.list().await.unwrap().is_empty());
}
