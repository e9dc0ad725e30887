//! Rutas HTTP
//!
//! Cada entidad se monta con el mismo router CRUD genérico bajo `/api`.

pub mod crud_routes;
pub mod extract;
pub mod system_routes;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::{catch_panic_middleware, cors_middleware};
use crate::models::{Client, Employee, Invoice, InvoiceItem, Setting, Task, Vehicle, Work};
use crate::state::AppState;
use crud_routes::create_crud_router;
use system_routes::{create_system_router, not_found_fallback};

/// Router completo de la aplicación, con middleware y estado
pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .merge(create_crud_router::<Client>())
        .merge(create_crud_router::<Vehicle>())
        .merge(create_crud_router::<Work>())
        .merge(create_crud_router::<Task>())
        .merge(create_crud_router::<Employee>())
        .merge(create_crud_router::<Invoice>())
        .merge(create_crud_router::<InvoiceItem>())
        .merge(create_crud_router::<Setting>())
        .merge(create_system_router())
        .fallback(not_found_fallback)
        .layer(catch_panic_middleware())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
