pub mod health;

use axum::handler::Handler;
use axum::routing::{on, MethodFilter, MethodRouter};
use axum::Router;
use nexaura_core::contract::{
    Endpoint, HttpMethod, CONTACT_SUBMIT, POLICIES_GET, POLICIES_LIST, PRODUCTS_LIST,
};

use crate::handlers::{contact, policy, product};
use crate::state::AppState;

/// Build the public API route tree from the route contract.
///
/// Paths and methods come from the endpoint descriptors in
/// `nexaura_core::contract`; this function only pairs each one with its
/// handler.
///
/// ```text
/// POST   /api/contact               contact.submit  -> contact::submit
/// GET    /api/products              products.list   -> product::list
/// GET    /api/policies              policies.list   -> policy::list
/// GET    /api/policies/{slug}       policies.get    -> policy::get_by_slug
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(&CONTACT_SUBMIT.router_path(), mount(&CONTACT_SUBMIT, contact::submit))
        .route(&PRODUCTS_LIST.router_path(), mount(&PRODUCTS_LIST, product::list))
        .route(&POLICIES_LIST.router_path(), mount(&POLICIES_LIST, policy::list))
        .route(&POLICIES_GET.router_path(), mount(&POLICIES_GET, policy::get_by_slug))
}

/// A method router answering only the endpoint's declared method.
fn mount<H, T>(endpoint: &Endpoint, handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    on(method_filter(endpoint.method), handler)
}

fn method_filter(method: HttpMethod) -> MethodFilter {
    match method {
        HttpMethod::Get => MethodFilter::GET,
        HttpMethod::Post => MethodFilter::POST,
    }
}
