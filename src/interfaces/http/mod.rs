use crate::application::{
    CsvExportUseCase, CsvImportUseCase, ListStudentsUseCase, ManageStudentUseCase, UploadUseCase,
};
use crate::domain::error::AppError;
use crate::domain::repository::StudentRepository;
use crate::domain::student::{NewStudent, StudentOrder};
use crate::infrastructure::config::{AppConfig, ServerConfig};
use actix_cors::Cors;
use actix_web::{
    delete, dev::Server, get, post, put, web, App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

pub struct HttpState {
    pub import_path: PathBuf,
    pub export_path: PathBuf,
    pub import_use_case: CsvImportUseCase,
    pub export_use_case: CsvExportUseCase,
    pub upload_use_case: UploadUseCase,
    pub list_use_case: ListStudentsUseCase,
    pub manage_use_case: ManageStudentUseCase,
}

impl HttpState {
    pub fn new(config: &AppConfig, repository: Arc<dyn StudentRepository>) -> Self {
        Self {
            import_path: config.import_path(),
            export_path: config.export_path(),
            import_use_case: CsvImportUseCase::new(repository.clone()),
            export_use_case: CsvExportUseCase::new(repository.clone()),
            upload_use_case: UploadUseCase::new(config.import_path()),
            list_use_case: ListStudentsUseCase::new(repository.clone()),
            manage_use_case: ManageStudentUseCase::new(repository),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Deserialize)]
struct ListQuery {
    #[serde(default)]
    order: StudentOrder,
}

/// Full replacement body for `PUT /students/{id}`.
#[derive(Deserialize)]
struct StudentPayload {
    name: String,
    age: i64,
    email: String,
    password: String,
}

impl From<StudentPayload> for NewStudent {
    fn from(p: StudentPayload) -> Self {
        NewStudent::new(p.name, p.age, p.email, p.password)
    }
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

#[post("/students/import")]
async fn import_students(data: web::Data<HttpState>) -> impl Responder {
    info!(source = %data.import_path.display(), "Import requested");

    match data.import_use_case.execute(&data.import_path).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => error_response("Import", &e),
    }
}

#[post("/students/export")]
async fn export_students(data: web::Data<HttpState>) -> impl Responder {
    info!(destination = %data.export_path.display(), "Export requested");

    match data.export_use_case.execute(&data.export_path).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => error_response("Export", &e),
    }
}

#[post("/students/upload")]
async fn upload_students(data: web::Data<HttpState>, body: web::Bytes) -> impl Responder {
    info!(
        path = %data.upload_use_case.target().display(),
        bytes = body.len(),
        "Upload requested"
    );

    match data.upload_use_case.execute(&body) {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => error_response("Upload", &e),
    }
}

#[get("/students")]
async fn list_students(
    data: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    match data.list_use_case.execute(query.order).await {
        Ok(students) => HttpResponse::Ok().json(students),
        Err(e) => error_response("Listing students", &e),
    }
}

#[get("/students/{id}")]
async fn get_student(data: web::Data<HttpState>, id: web::Path<i64>) -> impl Responder {
    match data.manage_use_case.get(id.into_inner()).await {
        Ok(student) => HttpResponse::Ok().json(student),
        Err(e) => error_response("Fetching student", &e),
    }
}

#[put("/students/{id}")]
async fn update_student(
    data: web::Data<HttpState>,
    id: web::Path<i64>,
    payload: web::Json<StudentPayload>,
) -> impl Responder {
    let student = NewStudent::from(payload.into_inner());
    match data.manage_use_case.update(id.into_inner(), &student).await {
        Ok(student) => HttpResponse::Ok().json(student),
        Err(e) => error_response("Updating student", &e),
    }
}

#[delete("/students/{id}")]
async fn delete_student(data: web::Data<HttpState>, id: web::Path<i64>) -> impl Responder {
    match data.manage_use_case.delete(id.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response("Deleting student", &e),
    }
}

/// Plain-text failure response; the status only reflects the error kind.
fn error_response(action: &str, err: &AppError) -> HttpResponse {
    error!(error = %err, kind = err.kind(), "{} failed", action);

    let mut response = match err {
        AppError::NotFound(_) => HttpResponse::NotFound(),
        AppError::SchemaError(_) | AppError::ValidationError(_) | AppError::ParseError(_) => {
            HttpResponse::BadRequest()
        }
        _ => HttpResponse::InternalServerError(),
    };
    response.body(err.to_string())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(health)
            .service(import_students)
            .service(export_students)
            .service(upload_students)
            .service(list_students)
            .service(get_student)
            .service(update_student)
            .service(delete_student),
    );
}

pub fn start_server(state: web::Data<HttpState>, config: &ServerConfig) -> std::io::Result<Server> {
    let max_upload_bytes = config.max_upload_bytes;

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local tool

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .app_data(web::PayloadConfig::new(max_upload_bytes))
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    Ok(server)
}
