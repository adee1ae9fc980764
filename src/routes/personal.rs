use actix_web::{HttpResponse, Responder, Scope, delete, get, post, put, web};

use crate::db::DbPool;
use crate::dto::api::{DataResponse, PagedResponse};
use crate::forms::DeleteForm;
use crate::forms::personal::{PersonalForm, UpdatePersonalForm};
use crate::pagination::PageParams;
use crate::repository::personal::DieselPersonalRepository;
use crate::routes::{ListQueryParams, error_response};
use crate::services::personal as service;

/// All personal endpoints under `/api/personal`.
///
/// The literal routes register before `/{id}` so `getPersonal` and
/// `telefono` never reach the id matcher.
pub fn scope() -> Scope {
    web::scope("/api/personal")
        .service(list_personal)
        .service(list_all_personal)
        .service(get_personal_by_telefono)
        .service(create_personal)
        .service(update_personal)
        .service(delete_personal)
        .service(get_personal_by_id)
}

#[get("")]
async fn list_personal(
    params: web::Query<ListQueryParams>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselPersonalRepository::new(&pool);
    let page_params = PageParams::parse(params.page.as_deref(), params.page_size.as_deref());

    match service::list_personal(&repo, &page_params) {
        Ok((pagination, data)) => HttpResponse::Ok().json(PagedResponse { data, pagination }),
        Err(e) => error_response("Failed to list personal", e),
    }
}

#[get("/getPersonal")]
async fn list_all_personal(pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselPersonalRepository::new(&pool);

    match service::list_all_personal(&repo) {
        Ok(data) => HttpResponse::Ok().json(DataResponse::new(data)),
        Err(e) => error_response("Failed to list all personal", e),
    }
}

#[get("/telefono/{telefono}")]
async fn get_personal_by_telefono(
    telefono: web::Path<String>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselPersonalRepository::new(&pool);

    match service::get_personal_by_phone(&repo, &telefono) {
        Ok(data) => HttpResponse::Ok().json(DataResponse::new(data)),
        Err(e) => error_response("Failed to look up personal by phone", e),
    }
}

#[get("/{id}")]
async fn get_personal_by_id(id: web::Path<i32>, pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselPersonalRepository::new(&pool);

    match service::get_personal_by_id(&repo, id.into_inner()) {
        Ok(data) => HttpResponse::Ok().json(DataResponse::new(data)),
        Err(e) => error_response("Failed to get personal", e),
    }
}

#[post("")]
async fn create_personal(
    form: web::Json<PersonalForm>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselPersonalRepository::new(&pool);

    match service::create_personal(&repo, &form) {
        Ok(data) => HttpResponse::Created().json(DataResponse::new(data)),
        Err(e) => error_response("Failed to create personal", e),
    }
}

#[put("")]
async fn update_personal(
    form: web::Json<UpdatePersonalForm>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselPersonalRepository::new(&pool);

    match service::update_personal(&repo, &form) {
        Ok(data) => HttpResponse::Ok().json(DataResponse::new(data)),
        Err(e) => error_response("Failed to update personal", e),
    }
}

#[delete("")]
async fn delete_personal(form: web::Json<DeleteForm>, pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselPersonalRepository::new(&pool);

    match service::delete_personal(&repo, form.id) {
        Ok(()) => HttpResponse::Ok().json(DataResponse::new(serde_json::Value::Null)),
        Err(e) => error_response("Failed to delete personal", e),
    }
}
