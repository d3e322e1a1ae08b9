use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Task API",
        version = "0.1.0",
        description = "CRUD API for to-do tasks"
    ),
    nest(
        (path = domain_tasks::TASKS_PATH, api = domain_tasks::TasksApiDoc)
    )
)]
pub struct ApiDoc;
