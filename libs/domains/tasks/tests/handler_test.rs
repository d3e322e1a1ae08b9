//! Handler tests for the Tasks domain
//!
//! These drive the `/Tasks` router with `oneshot` against an in-memory
//! repository, checking:
//! - Status codes and the `Location` header
//! - Request/response JSON shape
//! - Error bodies and empty 404 bodies

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use domain_tasks::*;
use http_body_util::BodyExt;
use sea_orm::DbErr;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

const TASK_ID: &str = "11111111-1111-1111-1111-111111111111";
const OTHER_ID: &str = "22222222-2222-2222-2222-222222222222";

/// Repository backed by a map, counting every call that reaches it
#[derive(Clone, Default)]
struct InMemoryTaskRepository {
    tasks: Arc<Mutex<HashMap<Uuid, TaskItem>>>,
    calls: Arc<AtomicUsize>,
}

impl InMemoryTaskRepository {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self) -> TaskResult<Vec<TaskItem>> {
        self.touch();
        let mut tasks: Vec<_> = self.tasks.lock().unwrap().values().cloned().collect();
        tasks.sort_by(|a, b| a.description.cmp(&b.description));
        Ok(tasks)
    }

    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<TaskItem>> {
        self.touch();
        Ok(self.tasks.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, task: TaskItem) -> TaskResult<()> {
        self.touch();
        let mut tasks = self.tasks.lock().unwrap();
        if tasks.contains_key(&task.id) {
            return Err(TaskError::Database(DbErr::Custom(format!(
                "duplicate key value violates unique constraint \"PK_Tasks\": {}",
                task.id
            ))));
        }
        tasks.insert(task.id, task);
        Ok(())
    }

    async fn update(&self, task: TaskItem) -> TaskResult<()> {
        self.touch();
        if let Some(existing) = self.tasks.lock().unwrap().get_mut(&task.id) {
            existing.description = task.description;
            existing.completed = task.completed;
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> TaskResult<()> {
        self.touch();
        self.tasks.lock().unwrap().remove(&id);
        Ok(())
    }
}

/// Repository whose every call fails like a lost database connection
struct UnavailableTaskRepository;

fn refused() -> TaskError {
    TaskError::Database(DbErr::Custom("connection refused".into()))
}

#[async_trait]
impl TaskRepository for UnavailableTaskRepository {
    async fn list(&self) -> TaskResult<Vec<TaskItem>> {
        Err(refused())
    }

    async fn get_by_id(&self, _id: Uuid) -> TaskResult<Option<TaskItem>> {
        Err(refused())
    }

    async fn create(&self, _task: TaskItem) -> TaskResult<()> {
        Err(refused())
    }

    async fn update(&self, _task: TaskItem) -> TaskResult<()> {
        Err(refused())
    }

    async fn delete(&self, _id: Uuid) -> TaskResult<()> {
        Err(refused())
    }
}

fn app(repo: &InMemoryTaskRepository) -> Router {
    handlers::router(TaskService::new(repo.clone()))
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn raw_request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn json_body(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn buy_milk() -> Value {
    json!({"Id": TASK_ID, "Description": "buy milk", "Completed": false})
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[tokio::test]
async fn test_task_lifecycle() {
    let repo = InMemoryTaskRepository::default();
    let app = app(&repo);
    let task_uri = format!("/Tasks/{TASK_ID}");

    // 1. Create
    let response = send(&app, request("POST", "/Tasks", Some(buy_milk()))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], task_uri.as_str());
    assert_eq!(json_body(response).await, buy_milk());

    // 2. Read back
    let response = send(&app, request("GET", &task_uri, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, buy_milk());

    // 3. Mismatched ids
    let response = send(
        &app,
        request(
            "PUT",
            &task_uri,
            Some(json!({"Id": OTHER_ID, "Description": "x", "Completed": true})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"message": "O ID da URL não corresponde ao ID da tarefa."})
    );

    // 4. Update
    let updated = json!({"Id": TASK_ID, "Description": "buy bread", "Completed": true});
    let response = send(&app, request("PUT", &task_uri, Some(updated.clone()))).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = send(&app, request("GET", &task_uri, None)).await;
    assert_eq!(json_body(response).await, updated);

    // 5. Delete twice
    let response = send(&app, request("DELETE", &task_uri, None)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, request("DELETE", &task_uri, None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());

    // 6. Empty table
    let response = send(&app, request("GET", "/Tasks", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

// ============================================================================
// List / Get
// ============================================================================

#[tokio::test]
async fn test_list_tasks_ordered_by_description() {
    let repo = InMemoryTaskRepository::default();
    let app = app(&repo);

    for (id, description) in [(OTHER_ID, "walk dog"), (TASK_ID, "buy milk")] {
        let body = json!({"Id": id, "Description": description, "Completed": false});
        let response = send(&app, request("POST", "/Tasks", Some(body))).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(&app, request("GET", "/Tasks", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!([
            {"Id": TASK_ID, "Description": "buy milk", "Completed": false},
            {"Id": OTHER_ID, "Description": "walk dog", "Completed": false}
        ])
    );
}

#[tokio::test]
async fn test_get_missing_task_is_empty_404() {
    let repo = InMemoryTaskRepository::default();

    let response = send(&app(&repo), request("GET", &format!("/Tasks/{OTHER_ID}"), None)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_nil_id_is_invalid_argument_on_every_id_route() {
    let repo = InMemoryTaskRepository::default();
    let app = app(&repo);
    let nil_uri = format!("/Tasks/{}", Uuid::nil());

    for method in ["GET", "DELETE"] {
        let response = send(&app, request(method, &nil_uri, None)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(
            json_body(response).await,
            json!({"message": "O 'id' fornecido é inválido."})
        );
    }

    let response = send(
        &app,
        request(
            "PUT",
            &nil_uri,
            Some(json!({"Id": Uuid::nil(), "Description": "x", "Completed": false})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"message": "O 'id' fornecido é inválido."})
    );

    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_malformed_path_id_is_400() {
    let repo = InMemoryTaskRepository::default();

    let response = send(&app(&repo), request("GET", "/Tasks/not-a-uuid", None)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"message": "Invalid UUID: not-a-uuid"})
    );
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_blank_description_variants() {
    let repo = InMemoryTaskRepository::default();
    let app = app(&repo);

    for description in ["", "   ", "\t"] {
        let body = json!({"Id": TASK_ID, "Description": description, "Completed": false});
        let response = send(&app, request("POST", "/Tasks", Some(body))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"message": "Descrição é um campo obrigatório."})
        );
    }

    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_create_nil_id_and_blank_description_joins_messages() {
    let repo = InMemoryTaskRepository::default();

    let body = json!({"Id": Uuid::nil(), "Description": " ", "Completed": false});
    let response = send(&app(&repo), request("POST", "/Tasks", Some(body))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"message": "O 'id' fornecido é inválido.\nDescrição é um campo obrigatório."})
    );
}

#[tokio::test]
async fn test_create_missing_fields_fail_validation() {
    let repo = InMemoryTaskRepository::default();

    let response = send(&app(&repo), request("POST", "/Tasks", Some(json!({})))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"message": "O 'id' fornecido é inválido.\nDescrição é um campo obrigatório."})
    );
}

#[tokio::test]
async fn test_create_null_body() {
    let repo = InMemoryTaskRepository::default();

    let response = send(&app(&repo), raw_request("POST", "/Tasks", "null")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"message": "A tarefa não pode ser nula."})
    );
}

#[tokio::test]
async fn test_create_accepts_lowercase_fields() {
    let repo = InMemoryTaskRepository::default();

    let body = json!({"id": TASK_ID, "description": "buy milk", "completed": false});
    let response = send(&app(&repo), request("POST", "/Tasks", Some(body))).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await, buy_milk());
}

#[tokio::test]
async fn test_create_malformed_json_is_400() {
    let repo = InMemoryTaskRepository::default();

    let response = send(&app(&repo), raw_request("POST", "/Tasks", "{\"Id\":")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_create_duplicate_id_is_500() {
    let repo = InMemoryTaskRepository::default();
    let app = app(&repo);

    let response = send(&app, request("POST", "/Tasks", Some(buy_milk()))).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&app, request("POST", "/Tasks", Some(buy_milk()))).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["message"].as_str().unwrap().contains("duplicate key"));
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_id_mismatch_never_reaches_repository() {
    let repo = InMemoryTaskRepository::default();

    let body = json!({"Id": OTHER_ID, "Description": "x", "Completed": true});
    let response = send(
        &app(&repo),
        request("PUT", &format!("/Tasks/{TASK_ID}"), Some(body)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_update_missing_task_is_404() {
    let repo = InMemoryTaskRepository::default();

    let body = json!({"Id": TASK_ID, "Description": "buy bread", "Completed": true});
    let response = send(
        &app(&repo),
        request("PUT", &format!("/Tasks/{TASK_ID}"), Some(body)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_update_blank_description_is_400() {
    let repo = InMemoryTaskRepository::default();
    let app = app(&repo);
    send(&app, request("POST", "/Tasks", Some(buy_milk()))).await;

    let body = json!({"Id": TASK_ID, "Description": "", "Completed": true});
    let response = send(&app, request("PUT", &format!("/Tasks/{TASK_ID}"), Some(body))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"message": "Descrição é um campo obrigatório."})
    );
}

#[tokio::test]
async fn test_update_null_body_on_existing_task() {
    let repo = InMemoryTaskRepository::default();
    let app = app(&repo);
    send(&app, request("POST", "/Tasks", Some(buy_milk()))).await;

    let response = send(&app, raw_request("PUT", &format!("/Tasks/{TASK_ID}"), "null")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"message": "A tarefa não pode ser nula."})
    );
}

// ============================================================================
// Failures and routing
// ============================================================================

#[tokio::test]
async fn test_json_bodies_declare_utf8_charset() {
    let repo = InMemoryTaskRepository::default();
    let app = app(&repo);
    let utf8_json = "application/json; charset=utf-8";

    let created = json!({"Id": TASK_ID, "Description": "pão de queijo", "Completed": false});
    let response = send(&app, request("POST", "/Tasks", Some(created.clone()))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::CONTENT_TYPE], utf8_json);
    assert_eq!(json_body(response).await, created);

    let response = send(&app, request("GET", "/Tasks", None)).await;
    assert_eq!(response.headers()[header::CONTENT_TYPE], utf8_json);

    let response = send(&app, request("GET", &format!("/Tasks/{TASK_ID}"), None)).await;
    assert_eq!(response.headers()[header::CONTENT_TYPE], utf8_json);

    let response = send(&app, raw_request("POST", "/Tasks", "null")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()[header::CONTENT_TYPE], utf8_json);
}

#[tokio::test]
async fn test_storage_failure_is_500_with_message() {
    let app = handlers::router(TaskService::new(UnavailableTaskRepository));

    for (method, uri, body) in [
        ("GET", "/Tasks".to_string(), None),
        ("GET", format!("/Tasks/{TASK_ID}"), None),
        ("POST", "/Tasks".to_string(), Some(buy_milk())),
        ("PUT", format!("/Tasks/{TASK_ID}"), Some(buy_milk())),
        ("DELETE", format!("/Tasks/{TASK_ID}"), None),
    ] {
        let response = send(&app, request(method, &uri, body)).await;

        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "{method} {uri}"
        );
        assert_eq!(
            json_body(response).await,
            json!({"message": refused().to_string()})
        );
    }
}

#[test]
fn test_openapi_documents_task_routes() {
    use utoipa::OpenApi;

    let doc = serde_json::to_value(TasksApiDoc::openapi()).unwrap();

    // Paths are relative; the host nests them under TASKS_PATH
    assert!(doc["paths"][""]["get"].is_object());
    assert!(doc["paths"][""]["post"].is_object());
    assert!(doc["paths"]["/{id}"]["get"].is_object());
    assert!(doc["paths"]["/{id}"]["put"].is_object());
    assert!(doc["paths"]["/{id}"]["delete"].is_object());
    assert!(doc["components"]["schemas"]["TaskItem"].is_object());
}
