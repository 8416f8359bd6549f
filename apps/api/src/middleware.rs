use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderMap, HeaderValue, Method, header};
use axum::middleware::Next;
use axum::response::Response;
use inoxviet_application::RequestContext;
use inoxviet_core::{AppError, UserIdentity};
use ipnet::IpNet;

use crate::error::ApiResult;
use crate::state::AppState;

pub const ACTOR_ID_HEADER: &str = "x-actor-id";
pub const ACTOR_NAME_HEADER: &str = "x-actor-name";
pub const ACTOR_EMAIL_HEADER: &str = "x-actor-email";
const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Attaches the caller's identity and address to the request.
pub async fn resolve_request_context(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(address)| address.ip());
    let headers = request.headers();
    let origin = client_ip(
        peer,
        header_text(headers, FORWARDED_FOR_HEADER).as_deref(),
        &state.trusted_proxies,
    );

    let context = match actor_from_headers(headers) {
        Some(actor) => RequestContext::admin(actor),
        None => RequestContext::anonymous(),
    }
    .with_origin(origin.map(|address| address.to_string()));

    request.extensions_mut().insert(context);
    next.run(request).await
}

pub async fn require_same_origin_for_mutations(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    if is_state_changing_method(request.method()) {
        let headers = request.headers();

        if let Some(fetch_site) = headers.get("sec-fetch-site")
            && fetch_site == HeaderValue::from_static("cross-site")
        {
            return Err(AppError::Unauthorized("cross-site request blocked".to_owned()).into());
        }

        let origin = headers
            .get(header::ORIGIN)
            .and_then(|value| value.to_str().ok());
        let referer = headers
            .get(header::REFERER)
            .and_then(|value| value.to_str().ok());

        if !is_same_origin(origin, referer, state.frontend_url.as_str()) {
            return Err(AppError::Unauthorized("origin validation failed".to_owned()).into());
        }
    }

    Ok(next.run(request).await)
}

/// Compares the browser-supplied origin hints with the front end's origin.
/// A referer only matches when the origin is followed by a path, query or
/// fragment boundary.
fn is_same_origin(origin: Option<&str>, referer: Option<&str>, allowed_origin: &str) -> bool {
    let allowed_origin = allowed_origin.trim_end_matches('/');
    match (origin, referer) {
        (Some(origin), _) => origin == allowed_origin,
        (None, Some(referer)) => referer.strip_prefix(allowed_origin).is_some_and(|rest| {
            rest.is_empty() || rest.starts_with(['/', '?', '#'])
        }),
        // Non-browser clients send neither header.
        (None, None) => true,
    }
}

fn is_state_changing_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

/// Reads the administrator identity forwarded by the auth proxy.
pub fn actor_from_headers(headers: &HeaderMap) -> Option<UserIdentity> {
    let subject = header_text(headers, ACTOR_ID_HEADER)?;
    let display_name =
        header_text(headers, ACTOR_NAME_HEADER).unwrap_or_else(|| subject.clone());
    let email = header_text(headers, ACTOR_EMAIL_HEADER);

    Some(UserIdentity::new(subject, display_name, email))
}

/// Resolves the client address. Forwarded hops are only believed when the
/// peer is a trusted proxy; the rightmost untrusted hop wins.
pub fn client_ip(
    peer: Option<IpAddr>,
    forwarded_for: Option<&str>,
    trusted_proxies: &[IpNet],
) -> Option<IpAddr> {
    let is_trusted = |address: &IpAddr| trusted_proxies.iter().any(|net| net.contains(address));

    let peer = peer?;
    if !is_trusted(&peer) {
        return Some(peer);
    }

    let forwarded = forwarded_for
        .into_iter()
        .flat_map(|value| value.rsplit(','))
        .map_while(|hop| IpAddr::from_str(hop.trim()).ok())
        .find(|address| !is_trusted(address));

    Some(forwarded.unwrap_or(peer))
}

/// Header values may carry UTF-8 display names, so bytes are decoded directly.
fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}
