use actix_web::{HttpResponse, Responder, Scope, delete, get, post, put, web};

use crate::db::DbPool;
use crate::dto::api::{DataResponse, PagedResponse};
use crate::forms::DeleteForm;
use crate::forms::cliente::{ClienteForm, UpdateClienteForm};
use crate::pagination::PageParams;
use crate::repository::cliente::DieselClienteRepository;
use crate::routes::{ListQueryParams, error_response};
use crate::services::cliente as service;

/// All cliente endpoints under `/api/clientes`.
pub fn scope() -> Scope {
    web::scope("/api/clientes")
        .service(list_clientes)
        .service(list_all_clientes)
        .service(create_cliente)
        .service(update_cliente)
        .service(delete_cliente)
        .service(get_cliente_by_id)
}

#[get("")]
async fn list_clientes(
    params: web::Query<ListQueryParams>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselClienteRepository::new(&pool);
    let page_params = PageParams::parse(params.page.as_deref(), params.page_size.as_deref());

    match service::list_clientes(&repo, &page_params) {
        Ok((pagination, data)) => HttpResponse::Ok().json(PagedResponse { data, pagination }),
        Err(e) => error_response("Failed to list clientes", e),
    }
}

#[get("/getClientes")]
async fn list_all_clientes(pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselClienteRepository::new(&pool);

    match service::list_all_clientes(&repo) {
        Ok(data) => HttpResponse::Ok().json(DataResponse::new(data)),
        Err(e) => error_response("Failed to list all clientes", e),
    }
}

#[get("/{id}")]
async fn get_cliente_by_id(id: web::Path<i32>, pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselClienteRepository::new(&pool);

    match service::get_cliente_by_id(&repo, id.into_inner()) {
        Ok(data) => HttpResponse::Ok().json(DataResponse::new(data)),
        Err(e) => error_response("Failed to get cliente", e),
    }
}

#[post("")]
async fn create_cliente(form: web::Json<ClienteForm>, pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselClienteRepository::new(&pool);

    match service::create_cliente(&repo, &form) {
        Ok(data) => HttpResponse::Created().json(DataResponse::new(data)),
        Err(e) => error_response("Failed to create cliente", e),
    }
}

#[put("")]
async fn update_cliente(
    form: web::Json<UpdateClienteForm>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselClienteRepository::new(&pool);

    match service::update_cliente(&repo, &form) {
        Ok(data) => HttpResponse::Ok().json(DataResponse::new(data)),
        Err(e) => error_response("Failed to update cliente", e),
    }
}

#[delete("")]
async fn delete_cliente(form: web::Json<DeleteForm>, pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselClienteRepository::new(&pool);

    match service::delete_cliente(&repo, form.id) {
        Ok(()) => HttpResponse::Ok().json(DataResponse::new(serde_json::Value::Null)),
        Err(e) => error_response("Failed to delete cliente", e),
    }
}
