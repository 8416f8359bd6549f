use axum::Json;
use axum::extract::{FromRequestParts, State};
use axum::http::{Request, StatusCode};
use serde_json::json;

use inoxviet_application::RequestContext;
use inoxviet_core::{RecordId, UserIdentity};
use inoxviet_domain::{Category, ContactStatus, Product};

use crate::api_config::{ApiConfig, StorageBackend};
use crate::api_services::{Storage, build_state};
use crate::dto::{
    AuditLogListQuery, AuthEventRequest, CatalogQuery, ChatRequest, ContactListQuery,
    ContactSubmissionRequest, ListQuery, StatusRequest,
};
use crate::error::ApiResult;
use crate::extract::{Admin, ApiJson, ApiPath, ApiQuery, Caller};
use crate::state::AppState;

use super::{
    chat_handler, create_record_handler, delete_record_handler, list_audit_log_handler,
    list_contacts_handler, list_records_handler, public_products_handler,
    record_auth_event_handler, set_contact_status_handler, submit_contact_handler,
    update_record_handler,
};

fn test_state() -> AppState {
    let config = ApiConfig {
        migrate_only: false,
        storage: StorageBackend::Memory,
        frontend_url: "http://localhost:3000".to_owned(),
        api_host: "127.0.0.1".to_owned(),
        api_port: 3001,
        trusted_proxies: Vec::new(),
        chat_endpoint: None,
        chat_history_limit: 10,
        default_page_size: 10,
    };

    match build_state(&config, &Storage::Memory) {
        Ok(state) => state,
        Err(error) => panic!("in-memory state should build: {error}"),
    }
}

fn admin() -> Admin {
    Admin(
        RequestContext::admin(UserIdentity::new(
            "admin-1",
            "Quản trị viên",
            Some("admin@inoxviet.vn".to_owned()),
        ))
        .with_origin(Some("203.0.113.7".to_owned())),
    )
}

fn status_of<T>(result: ApiResult<T>) -> StatusCode {
    match result {
        Ok(_) => StatusCode::OK,
        Err(error) => error.status(),
    }
}

async fn seed_category(state: &AppState, name: &str) -> Category {
    let created = create_record_handler::<Category>(
        State(state.clone()),
        admin(),
        ApiJson(json!({ "name": name })),
    )
    .await;

    match created {
        Ok((status, Json(category))) if status == StatusCode::CREATED => category,
        Ok((status, _)) => panic!("unexpected status {status}"),
        Err(error) => panic!("category should be created: {error:?}"),
    }
}

async fn seed_product(state: &AppState, name: &str, category_id: RecordId) -> Product {
    let created = create_record_handler::<Product>(
        State(state.clone()),
        admin(),
        ApiJson(json!({
            "id": RecordId::new(),
            "name": name,
            "category_id": category_id,
            "price": 1_250_000,
            "unit": "tấm",
        })),
    )
    .await;

    match created {
        Ok((_, Json(product))) => product,
        Err(error) => panic!("product should be created: {error:?}"),
    }
}

#[tokio::test]
async fn admin_extractor_rejects_anonymous_callers() {
    let (mut parts, ()) = Request::builder().body(()).unwrap_or_default().into_parts();

    let admin = Admin::from_request_parts(&mut parts, &()).await;
    assert!(matches!(admin, Err(error) if error.status() == StatusCode::UNAUTHORIZED));

    let caller = Caller::from_request_parts(&mut parts, &()).await;
    assert!(matches!(caller, Ok(Caller(context)) if context.actor().is_none()));
}

#[tokio::test]
async fn created_records_get_fresh_ids_and_derived_slugs() {
    let state = test_state();
    let category = seed_category(&state, "Tấm inox").await;
    let product = seed_product(&state, "Tấm inox 304 2B", category.id).await;

    assert_eq!(category.slug, "tam-inox");
    assert_eq!(product.slug, "tam-inox-304-2b");

    let renamed = update_record_handler::<Product>(
        State(state.clone()),
        admin(),
        ApiPath(product.id),
        ApiJson(json!({
            "id": RecordId::new(),
            "name": "Tấm inox 304 BA",
            "slug": "",
            "category_id": category.id,
        })),
    )
    .await;
    assert!(matches!(
        renamed,
        Ok(Json(updated)) if updated.id == product.id && updated.slug == "tam-inox-304-ba"
    ));
}

#[tokio::test]
async fn list_search_ignores_vietnamese_accents_and_paginates() {
    let state = test_state();
    let category = seed_category(&state, "Ống thép").await;
    for index in 1..=12 {
        seed_product(&state, &format!("Ống thép đúc {index}"), category.id).await;
    }
    seed_product(&state, "Tấm inox 316", category.id).await;

    let page = list_records_handler::<Product>(
        State(state.clone()),
        admin(),
        ApiQuery(ListQuery {
            page: Some(2),
            page_size: None,
            q: Some("ong thep duc".to_owned()),
        }),
    )
    .await;

    let Ok(Json(page)) = page else {
        panic!("list should succeed");
    };
    assert_eq!(page.page.total_items, 12);
    assert_eq!(page.page.page, 2);
    assert_eq!(page.items.len(), 2);
}

#[tokio::test]
async fn invalid_bodies_and_duplicate_slugs_map_to_client_errors() {
    let state = test_state();
    let category = seed_category(&state, "Thép hộp").await;

    let not_an_object = create_record_handler::<Category>(
        State(state.clone()),
        admin(),
        ApiJson(json!(["Thép hộp"])),
    )
    .await;
    assert_eq!(status_of(not_an_object), StatusCode::BAD_REQUEST);

    let duplicate = create_record_handler::<Category>(
        State(state.clone()),
        admin(),
        ApiJson(json!({ "name": "Thép Hộp" })),
    )
    .await;
    assert_eq!(status_of(duplicate), StatusCode::CONFLICT);

    let unknown_category = create_record_handler::<Product>(
        State(state.clone()),
        admin(),
        ApiJson(json!({ "name": "Thép V", "category_id": RecordId::new() })),
    )
    .await;
    assert_eq!(status_of(unknown_category), StatusCode::BAD_REQUEST);

    seed_product(&state, "Thép hộp 40x80", category.id).await;
    let in_use = delete_record_handler::<Category>(
        State(state.clone()),
        admin(),
        ApiPath(category.id),
    )
    .await;
    assert_eq!(status_of(in_use), StatusCode::CONFLICT);
}

#[tokio::test]
async fn deleting_a_product_is_visible_in_the_audit_log() {
    let state = test_state();
    let category = seed_category(&state, "Tấm inox").await;
    let product = seed_product(&state, "Tấm inox 304", category.id).await;

    let deleted = delete_record_handler::<Product>(
        State(state.clone()),
        admin(),
        ApiPath(product.id),
    )
    .await;
    assert!(matches!(deleted, Ok(status) if status == StatusCode::NO_CONTENT));

    let log = list_audit_log_handler(
        State(state.clone()),
        admin(),
        ApiQuery(AuditLogListQuery {
            category: Some("Product".to_owned()),
            severity: Some("Warning".to_owned()),
            ..AuditLogListQuery::default()
        }),
    )
    .await;
    let Ok(Json(log)) = log else {
        panic!("audit log should load");
    };

    assert_eq!(log.items.len(), 1);
    assert_eq!(log.items[0].action, "product.delete");
    assert_eq!(log.items[0].details, "Xóa sản phẩm: Tấm inox 304");
    assert_eq!(log.items[0].user_id.as_deref(), Some("admin-1"));
    assert_eq!(log.items[0].ip_address.as_deref(), Some("203.0.113.7"));

    let bad_filter = list_audit_log_handler(
        State(state),
        admin(),
        ApiQuery(AuditLogListQuery {
            category: Some("Billing".to_owned()),
            ..AuditLogListQuery::default()
        }),
    )
    .await;
    assert_eq!(status_of(bad_filter), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn public_catalog_hides_unpublished_products() {
    let state = test_state();
    let category = seed_category(&state, "Tấm inox").await;
    seed_product(&state, "Tấm inox 304", category.id).await;
    let draft = seed_product(&state, "Tấm inox 430", category.id).await;

    let hidden = super::set_product_status_handler(
        State(state.clone()),
        admin(),
        ApiPath(draft.id),
        ApiJson(StatusRequest {
            status: "draft".to_owned(),
        }),
    )
    .await;
    assert!(hidden.is_ok());

    let catalog = public_products_handler(State(state), ApiQuery(CatalogQuery::default())).await;
    let Ok(Json(catalog)) = catalog else {
        panic!("catalog should load");
    };

    assert_eq!(catalog.items.len(), 1);
    assert_eq!(catalog.items[0].product.name, "Tấm inox 304");
    assert_eq!(catalog.items[0].category_name.as_deref(), Some("Tấm inox"));
}

#[tokio::test]
async fn contact_requests_flow_from_form_to_inbox() {
    let state = test_state();

    let submitted = submit_contact_handler(
        State(state.clone()),
        Caller(RequestContext::anonymous()),
        ApiJson(ContactSubmissionRequest {
            full_name: "Phạm D".to_owned(),
            email: None,
            phone: Some("0903 123 456".to_owned()),
            subject: Some("Báo giá inox 201".to_owned()),
            message: "Cần 50 tấm".to_owned(),
        }),
    )
    .await;
    let Ok((status, Json(contact))) = submitted else {
        panic!("contact should be accepted");
    };
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(contact.status, ContactStatus::New);

    let replied = set_contact_status_handler(
        State(state.clone()),
        admin(),
        ApiPath(contact.id),
        ApiJson(StatusRequest {
            status: "replied".to_owned(),
        }),
    )
    .await;
    assert!(replied.is_ok());

    let inbox = list_contacts_handler(
        State(state.clone()),
        admin(),
        ApiQuery(ContactListQuery {
            status: Some("replied".to_owned()),
            q: Some("bao gia".to_owned()),
            ..ContactListQuery::default()
        }),
    )
    .await;
    assert!(matches!(inbox, Ok(Json(page)) if page.items.len() == 1));

    let unknown_status = list_contacts_handler(
        State(state),
        admin(),
        ApiQuery(ContactListQuery {
            status: Some("pending".to_owned()),
            ..ContactListQuery::default()
        }),
    )
    .await;
    assert_eq!(status_of(unknown_status), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn contact_form_requires_a_way_to_reply() {
    let state = test_state();

    let submitted = submit_contact_handler(
        State(state),
        Caller(RequestContext::anonymous()),
        ApiJson(ContactSubmissionRequest {
            full_name: "Phạm D".to_owned(),
            email: None,
            phone: None,
            subject: None,
            message: "Cần báo giá".to_owned(),
        }),
    )
    .await;

    assert_eq!(status_of(submitted), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_without_an_endpoint_is_a_client_error() {
    let state = test_state();

    let reply = chat_handler(
        State(state),
        ApiJson(ChatRequest {
            message: "Inox 304 giá bao nhiêu?".to_owned(),
            history: Vec::new(),
        }),
    )
    .await;

    assert_eq!(status_of(reply), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn auth_events_are_validated_and_recorded() {
    let state = test_state();

    let unknown = record_auth_event_handler(
        State(state.clone()),
        Caller(RequestContext::anonymous()),
        ApiJson(AuthEventRequest {
            event: "password_reset".to_owned(),
            email: None,
            reason: None,
        }),
    )
    .await;
    assert_eq!(status_of(unknown), StatusCode::BAD_REQUEST);

    let failed = record_auth_event_handler(
        State(state.clone()),
        Caller(RequestContext::anonymous()),
        ApiJson(AuthEventRequest {
            event: "login_failed".to_owned(),
            email: Some("khach@example.com".to_owned()),
            reason: Some("sai mật khẩu".to_owned()),
        }),
    )
    .await;
    assert!(matches!(failed, Ok(status) if status == StatusCode::NO_CONTENT));

    let log = list_audit_log_handler(
        State(state),
        admin(),
        ApiQuery(AuditLogListQuery {
            category: Some("Auth".to_owned()),
            ..AuditLogListQuery::default()
        }),
    )
    .await;
    assert!(matches!(
        log,
        Ok(Json(page)) if page.items.len() == 1 && page.items[0].action == "auth.login.failure"
    ));
}

#[tokio::test]
async fn anonymous_login_success_reports_are_rejected_and_not_logged() {
    let state = test_state();

    let forged = record_auth_event_handler(
        State(state.clone()),
        Caller(RequestContext::anonymous()),
        ApiJson(AuthEventRequest {
            event: "login_succeeded".to_owned(),
            email: Some("admin@inoxviet.vn".to_owned()),
            reason: None,
        }),
    )
    .await;
    assert_eq!(status_of(forged), StatusCode::UNAUTHORIZED);

    let signed_in = record_auth_event_handler(
        State(state.clone()),
        Caller(admin().0),
        ApiJson(AuthEventRequest {
            event: "login_succeeded".to_owned(),
            email: Some("admin@inoxviet.vn".to_owned()),
            reason: None,
        }),
    )
    .await;
    assert!(signed_in.is_ok());

    let log = list_audit_log_handler(
        State(state),
        admin(),
        ApiQuery(AuditLogListQuery {
            category: Some("Auth".to_owned()),
            ..AuditLogListQuery::default()
        }),
    )
    .await;
    let Ok(Json(log)) = log else {
        panic!("audit log should load");
    };
    assert_eq!(log.items.len(), 1);
    assert_eq!(log.items[0].action, "auth.login.success");
    assert_eq!(log.items[0].user_id.as_deref(), Some("admin-1"));
}
