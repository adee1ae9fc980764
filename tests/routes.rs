use actix_web::{App, test, web};
use serde_json::json;

use directorio_api::domain::personal::Personal;
use directorio_api::dto::api::{DataResponse, ErrorBody, ErrorResponse, PagedResponse};
use directorio_api::routes;

mod common;

macro_rules! personal_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($test_db.pool().clone()))
                .app_data(directorio_api::json_config())
                .app_data(directorio_api::path_config())
                .service(routes::personal::scope())
                .service(routes::cliente::scope()),
        )
        .await
    };
}

macro_rules! create_personal {
    ($app:expr, $name:expr, $phone:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/personal")
            .set_json(json!({ "name": $name, "phone": $phone }))
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), 201);
        let body: DataResponse<Personal> = test::read_body_json(resp).await;
        body.data
    }};
}

#[actix_web::test]
async fn test_create_then_get_round_trip() {
    let test_db = common::TestDb::new("routes_round_trip.db");
    let app = personal_app!(test_db);

    let created = create_personal!(&app, "Ana Torres", "5512345678");
    assert!(created.id > 0);

    let req = test::TestRequest::get()
        .uri(&format!("/api/personal/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: DataResponse<Personal> = test::read_body_json(resp).await;
    assert_eq!(body.data.name, "Ana Torres");
    assert_eq!(body.data.phone, "5512345678");
}

#[actix_web::test]
async fn test_paginated_list_envelope() {
    let test_db = common::TestDb::new("routes_paginated_list.db");
    let app = personal_app!(test_db);

    for i in 1..=25 {
        create_personal!(&app, &format!("Persona {i:02}"), "5512345678");
    }

    let req = test::TestRequest::get()
        .uri("/api/personal?page=2&pageSize=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: PagedResponse<Personal> = test::read_body_json(resp).await;
    assert_eq!(body.data.len(), 10);
    assert_eq!(body.data[0].name, "Persona 11");
    assert_eq!(body.pagination.total, 25);
    assert_eq!(body.pagination.total_pages, 3);
    assert_eq!(body.pagination.current_page, 2);
    assert_eq!(body.pagination.page_size, 10);
}

#[actix_web::test]
async fn test_list_clamps_page_and_defaults_bad_input() {
    let test_db = common::TestDb::new("routes_list_clamping.db");
    let app = personal_app!(test_db);

    for i in 1..=5 {
        create_personal!(&app, &format!("Persona {i}"), "5512345678");
    }

    // page beyond range is clamped to the only page there is
    let req = test::TestRequest::get()
        .uri("/api/personal?page=99&pageSize=10")
        .to_request();
    let body: PagedResponse<Personal> =
        test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.len(), 5);
    assert_eq!(body.pagination.current_page, 1);
    assert_eq!(body.pagination.total_pages, 1);

    // garbage query input falls back to the defaults instead of failing
    let req = test::TestRequest::get()
        .uri("/api/personal?page=abc&pageSize=-4")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: PagedResponse<Personal> = test::read_body_json(resp).await;
    assert_eq!(body.pagination.current_page, 1);
    assert_eq!(body.pagination.page_size, 10);

    // an absurdly large pageSize still answers with the whole collection
    let req = test::TestRequest::get()
        .uri("/api/personal?pageSize=18446744073709551615")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: PagedResponse<Personal> = test::read_body_json(resp).await;
    assert_eq!(body.data.len(), 5);
    assert_eq!(body.pagination.total_pages, 1);
}

#[actix_web::test]
async fn test_empty_collection_lists_without_error() {
    let test_db = common::TestDb::new("routes_empty_list.db");
    let app = personal_app!(test_db);

    let req = test::TestRequest::get().uri("/api/personal").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: PagedResponse<Personal> = test::read_body_json(resp).await;
    assert!(body.data.is_empty());
    assert_eq!(body.pagination.total_pages, 0);
}

#[actix_web::test]
async fn test_unpaginated_list_returns_everything() {
    let test_db = common::TestDb::new("routes_unpaginated_list.db");
    let app = personal_app!(test_db);

    for i in 1..=15 {
        create_personal!(&app, &format!("Persona {i:02}"), "5512345678");
    }

    let req = test::TestRequest::get()
        .uri("/api/personal/getPersonal")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: DataResponse<Vec<Personal>> = test::read_body_json(resp).await;
    assert_eq!(body.data.len(), 15);
    assert_eq!(body.data[0].name, "Persona 01");
}

#[actix_web::test]
async fn test_phone_lookup_returns_matches_or_empty() {
    let test_db = common::TestDb::new("routes_phone_lookup.db");
    let app = personal_app!(test_db);

    create_personal!(&app, "Ana", "5511111111");
    create_personal!(&app, "Bruno", "5522222222");
    create_personal!(&app, "Carla", "5511111111");

    let req = test::TestRequest::get()
        .uri("/api/personal/telefono/5511111111")
        .to_request();
    let body: DataResponse<Vec<Personal>> =
        test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.len(), 2);

    // no matches is an empty success, not a not-found failure
    let req = test::TestRequest::get()
        .uri("/api/personal/telefono/5599999999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: DataResponse<Vec<Personal>> = test::read_body_json(resp).await;
    assert!(body.data.is_empty());
}

#[actix_web::test]
async fn test_create_with_invalid_payload_reports_issues() {
    let test_db = common::TestDb::new("routes_invalid_create.db");
    let app = personal_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/personal")
        .set_json(json!({ "name": "", "phone": "123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);
    let body: ErrorResponse = test::read_body_json(resp).await;
    match body.error {
        ErrorBody::Issues { issues } => {
            let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
            assert_eq!(fields, ["name", "phone"]);
        }
        ErrorBody::Message { message } => panic!("expected issues, got message {message:?}"),
    }

    // nothing was persisted
    let req = test::TestRequest::get().uri("/api/personal").to_request();
    let body: PagedResponse<Personal> =
        test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.pagination.total, 0);
}

#[actix_web::test]
async fn test_update_and_delete_missing_records_are_not_found() {
    let test_db = common::TestDb::new("routes_not_found.db");
    let app = personal_app!(test_db);

    let req = test::TestRequest::put()
        .uri("/api/personal")
        .set_json(json!({ "id": 999, "name": "Nadie", "phone": "5512345678" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body, ErrorResponse::message("Registro no encontrado"));

    let req = test::TestRequest::delete()
        .uri("/api/personal")
        .set_json(json!({ "id": 999 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::get()
        .uri("/api/personal/999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_non_numeric_id_answers_with_the_envelope() {
    let test_db = common::TestDb::new("routes_bad_id.db");
    let app = personal_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/api/personal/abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body, ErrorResponse::message("Identificador inválido"));
}

#[actix_web::test]
async fn test_unreadable_body_answers_with_the_envelope() {
    let test_db = common::TestDb::new("routes_bad_body.db");
    let app = personal_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/personal")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body, ErrorResponse::message("Cuerpo de la petición inválido"));
}

#[actix_web::test]
async fn test_update_replaces_the_record() {
    let test_db = common::TestDb::new("routes_update.db");
    let app = personal_app!(test_db);

    let created = create_personal!(&app, "Ana", "5512345678");

    let req = test::TestRequest::put()
        .uri("/api/personal")
        .set_json(json!({
            "id": created.id,
            "name": "Ana Torres",
            "phone": "5587654321",
            "position": "Coordinadora"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: DataResponse<Personal> = test::read_body_json(resp).await;
    assert_eq!(body.data.id, created.id);
    assert_eq!(body.data.name, "Ana Torres");
    assert_eq!(body.data.phone, "5587654321");
    assert_eq!(body.data.position, Some("Coordinadora".to_string()));
}

#[actix_web::test]
async fn test_delete_removes_the_record() {
    let test_db = common::TestDb::new("routes_delete.db");
    let app = personal_app!(test_db);

    let created = create_personal!(&app, "Ana", "5512345678");

    let req = test::TestRequest::delete()
        .uri("/api/personal")
        .set_json(json!({ "id": created.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get()
        .uri(&format!("/api/personal/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_clientes_follow_the_same_contract() {
    let test_db = common::TestDb::new("routes_clientes.db");
    let app = personal_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/clientes")
        .set_json(json!({ "name": "Comercial del Centro", "phone": "5544444444" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let req = test::TestRequest::get()
        .uri("/api/clientes/getClientes")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::post()
        .uri("/api/clientes")
        .set_json(json!({ "name": "", "phone": "123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);
}
