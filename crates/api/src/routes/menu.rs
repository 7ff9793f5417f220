//! Route definitions for menu lookup.

use axum::routing::get;
use axum::Router;

use crate::handlers::menu;
use crate::state::AppState;

/// Menu routes mounted at `/menus`.
///
/// ```text
/// GET    /{menuCode}        -> get_by_code
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{menuCode}", get(menu::get_by_code))
}
