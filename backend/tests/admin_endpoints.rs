//! End-to-end checks of the assembled application backed by the in-memory
//! catalogue: login, CRUD, constraint errors, cascades and storefront
//! delegation.

use std::sync::Arc;

use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{Method, StatusCode};
use actix_web::{HttpResponse, test as actix_test, web};
use mockable::DefaultClock;
use reverence::domain::ports::StaticLoginService;
use reverence::inbound::http::health::HealthState;
use reverence::inbound::http::state::HttpState;
use reverence::outbound::memory::InMemoryCatalogueRepository;
use reverence::server::{AppDependencies, build_app};
use rstest::rstest;
use serde_json::{Value, json};

fn storefront(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/",
        web::get().to(|| async { HttpResponse::Ok().body("storefront") }),
    );
}

fn dependencies() -> AppDependencies {
    let http_state = HttpState::from_service(
        Arc::new(StaticLoginService::new("admin", "password")),
        Arc::new(InMemoryCatalogueRepository::new()),
        Arc::new(DefaultClock),
    );
    AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: web::Data::new(http_state),
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
        ttl_minutes: 60,
        storefront,
    }
}

async fn login(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
) -> Cookie<'static> {
    let request = actix_test::TestRequest::post()
        .uri("/admin/login")
        .set_json(json!({"username": "admin", "password": "password"}))
        .to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    response
        .response()
        .cookies()
        .find(|c| c.name() == "session")
        .expect("session cookie")
        .into_owned()
}

async fn send(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    cookie: &Cookie<'static>,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = actix_test::TestRequest::default()
        .method(method)
        .uri(uri)
        .cookie(cookie.clone());
    if let Some(body) = body {
        request = request.set_json(body);
    }
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status();
    let bytes = actix_test::read_body(response).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, value)
}

fn id_of(value: &Value) -> String {
    value["id"].as_str().expect("id field").to_owned()
}

#[actix_web::test]
async fn catalogue_lifecycle_with_cascades() {
    let app = actix_test::init_service(build_app(dependencies())).await;
    let cookie = login(&app).await;

    let (status, size) = send(&app, &cookie, Method::POST, "/admin/sizes", Some(json!({"name": "M"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let size_id = id_of(&size);

    let (status, category) = send(
        &app,
        &cookie,
        Method::POST,
        "/admin/categories",
        Some(json!({"name": "Summer Shirts"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(category["slug"], json!("summer-shirts"));
    let category_id = id_of(&category);

    let (status, item) = send(
        &app,
        &cookie,
        Method::POST,
        "/admin/items",
        Some(json!({
            "name": "Linen Shirt",
            "categoryId": category_id,
            "price": "100.00",
            "discount": "20.00",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["effectivePrice"], json!("80.00"));
    assert_eq!(item["slug"], json!("linen-shirt"));
    let item_id = id_of(&item);

    let attach_uri = format!("/admin/items/{item_id}/sizes");
    let (status, _) = send(
        &app,
        &cookie,
        Method::POST,
        &attach_uri,
        Some(json!({"sizeId": size_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, error) = send(
        &app,
        &cookie,
        Method::POST,
        &attach_uri,
        Some(json!({"sizeId": size_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], json!("conflict"));

    let (status, sizes) = send(&app, &cookie, Method::GET, &attach_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sizes[0]["sizeName"], json!("M"));
    assert_eq!(sizes[0]["available"], json!(true));

    let (status, _) = send(
        &app,
        &cookie,
        Method::DELETE,
        &format!("/admin/sizes/{size_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, sizes) = send(&app, &cookie, Method::GET, &attach_uri, None).await;
    assert_eq!(sizes, json!([]));

    let (status, _) = send(
        &app,
        &cookie,
        Method::DELETE,
        &format!("/admin/categories/{category_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(
        &app,
        &cookie,
        Method::GET,
        &format!("/admin/items/{item_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn duplicate_category_names_conflict() {
    let app = actix_test::init_service(build_app(dependencies())).await;
    let cookie = login(&app).await;
    let body = json!({"name": "Outerwear"});

    let (first, _) = send(&app, &cookie, Method::POST, "/admin/categories", Some(body.clone())).await;
    let (second, error) = send(&app, &cookie, Method::POST, "/admin/categories", Some(body)).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(error["code"], json!("conflict"));
}

#[rstest]
#[case(json!({"name": "Coat", "price": "50.00", "discount": "0"}), StatusCode::CREATED, Some("50.00"))]
#[case(json!({"name": "Coat", "price": "50.00", "discount": "150"}), StatusCode::BAD_REQUEST, None)]
#[case(json!({"name": "Coat", "price": "-1"}), StatusCode::BAD_REQUEST, None)]
#[actix_web::test]
async fn item_pricing_rules(
    #[case] mut body: Value,
    #[case] expected: StatusCode,
    #[case] effective: Option<&str>,
) {
    let app = actix_test::init_service(build_app(dependencies())).await;
    let cookie = login(&app).await;
    let (_, category) = send(
        &app,
        &cookie,
        Method::POST,
        "/admin/categories",
        Some(json!({"name": "Coats"})),
    )
    .await;
    body["categoryId"] = category["id"].clone();

    let (status, item) = send(&app, &cookie, Method::POST, "/admin/items", Some(body)).await;

    assert_eq!(status, expected);
    if let Some(effective) = effective {
        assert_eq!(item["effectivePrice"], json!(effective));
    } else {
        assert_eq!(item["code"], json!("invalid_request"));
    }
}

#[actix_web::test]
async fn item_with_unknown_category_is_rejected() {
    let app = actix_test::init_service(build_app(dependencies())).await;
    let cookie = login(&app).await;

    let (status, error) = send(
        &app,
        &cookie,
        Method::POST,
        "/admin/items",
        Some(json!({
            "name": "Orphan",
            "categoryId": uuid::Uuid::new_v4(),
            "price": "10.00",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], json!("invalid_request"));
}

#[actix_web::test]
async fn unauthenticated_admin_requests_carry_a_trace_id() {
    let app = actix_test::init_service(build_app(dependencies())).await;

    let request = actix_test::TestRequest::get()
        .uri("/admin/items")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key("trace-id"));
}

#[actix_web::test]
async fn malformed_ids_are_bad_requests() {
    let app = actix_test::init_service(build_app(dependencies())).await;
    let cookie = login(&app).await;

    let (status, error) = send(&app, &cookie, Method::GET, "/admin/sizes/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"]["field"], json!("path"));
}

#[rstest]
#[case("/", StatusCode::OK)]
#[case("/collections/summer", StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn other_paths_go_to_the_storefront(#[case] uri: &str, #[case] expected: StatusCode) {
    let app = actix_test::init_service(build_app(dependencies())).await;

    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), expected);
}
