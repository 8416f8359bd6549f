use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post, put};
use inoxviet_core::AppError;
use inoxviet_domain::{AdminUser, Agent, Category, NewsArticle, Product, Slider, Tag};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, Collection};
use crate::middleware::{self, ACTOR_EMAIL_HEADER, ACTOR_ID_HEADER, ACTOR_NAME_HEADER};
use crate::state::AppState;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let site_routes = Router::new()
        .route("/health", get(handlers::health_handler))
        .route(
            "/api/catalog/products",
            get(handlers::public_products_handler),
        )
        .route(
            "/api/catalog/products/{slug}",
            get(handlers::public_product_handler),
        )
        .route(
            "/api/catalog/categories",
            get(handlers::public_categories_handler),
        )
        .route("/api/news", get(handlers::public_news_handler))
        .route("/api/news/{slug}", get(handlers::public_article_handler))
        .route("/api/site/sliders", get(handlers::active_sliders_handler))
        .route("/api/site/agents", get(handlers::public_agents_handler))
        .route(
            "/api/site/settings",
            get(handlers::public_site_settings_handler),
        )
        .route("/api/chat", post(handlers::chat_handler))
        .route("/api/auth/events", post(handlers::record_auth_event_handler));

    let back_office_routes = Router::new()
        .merge(collection_routes::<Product>())
        .merge(collection_routes::<Category>())
        .merge(collection_routes::<NewsArticle>())
        .merge(collection_routes::<Tag>())
        .merge(collection_routes::<Slider>())
        .merge(collection_routes::<Agent>())
        .merge(collection_routes::<AdminUser>())
        .route(
            "/api/products/{id}/status",
            put(handlers::set_product_status_handler),
        )
        .route(
            "/api/products/{id}/featured",
            put(handlers::toggle_product_featured_handler),
        )
        .route(
            "/api/categories/{id}/status",
            put(handlers::set_category_status_handler),
        )
        .route("/api/posts/{id}/status", put(handlers::set_post_status_handler))
        .route(
            "/api/sliders/{id}/active",
            put(handlers::set_slider_active_handler),
        )
        .route(
            "/api/agents/{id}/active",
            put(handlers::set_agent_active_handler),
        )
        .route("/api/users/{id}/active", put(handlers::set_user_active_handler))
        .route("/api/users/{id}/role", put(handlers::set_user_role_handler))
        // POST is the public contact form; the other handlers require an admin.
        .route(
            "/api/contacts",
            get(handlers::list_contacts_handler).post(handlers::submit_contact_handler),
        )
        .route(
            "/api/contacts/{id}",
            get(handlers::get_contact_handler).delete(handlers::delete_contact_handler),
        )
        .route(
            "/api/contacts/{id}/status",
            put(handlers::set_contact_status_handler),
        )
        .route(
            "/api/contacts/{id}/note",
            put(handlers::set_contact_note_handler),
        )
        .route(
            "/api/settings",
            get(handlers::site_settings_handler).put(handlers::update_site_settings_handler),
        )
        .route(
            "/api/settings/chat-prompt",
            get(handlers::chat_prompt_handler).put(handlers::update_chat_prompt_handler),
        )
        .route("/api/audit-log", get(handlers::list_audit_log_handler))
        .route(
            "/api/audit-log/{id}",
            delete(handlers::delete_audit_log_entry_handler),
        )
        .route("/api/dashboard", get(handlers::dashboard_handler));

    Ok(Router::new()
        .merge(site_routes)
        .merge(back_office_routes)
        .layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_same_origin_for_mutations,
        ))
        .layer(from_fn_with_state(
            app_state.clone(),
            middleware::resolve_request_context,
        ))
        .layer(build_cors_layer(frontend_url)?)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}

/// Generic CRUD routes under `/api/<collection>`.
fn collection_routes<T: Collection>() -> Router<AppState> {
    let collection = format!("/api/{}", T::KIND.collection());
    let item = format!("{collection}/{{id}}");

    Router::new()
        .route(
            collection.as_str(),
            get(handlers::list_records_handler::<T>).post(handlers::create_record_handler::<T>),
        )
        .route(
            item.as_str(),
            get(handlers::get_record_handler::<T>)
                .put(handlers::update_record_handler::<T>)
                .delete(handlers::delete_record_handler::<T>),
        )
}

fn build_cors_layer(frontend_url: &str) -> Result<CorsLayer, AppError> {
    Ok(CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            HeaderName::from_static(ACTOR_ID_HEADER),
            HeaderName::from_static(ACTOR_NAME_HEADER),
            HeaderName::from_static(ACTOR_EMAIL_HEADER),
        ]))
}
