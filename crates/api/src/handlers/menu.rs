//! Handlers for the `/menus` resource.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use ebpro_core::error::CoreError;
use ebpro_core::types::MenuCode;
use ebpro_db::models::menu::MenuDto;
use ebpro_db::repositories::MenuRepo;
use ebpro_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Look up a menu by code and map it to its transfer object.
///
/// Fails with [`CoreError::NotFound`] when no row has the given code.
pub async fn find_menu_by_code(pool: &DbPool, menu_code: MenuCode) -> AppResult<MenuDto> {
    let Some(menu) = MenuRepo::find_by_code(pool, menu_code).await? else {
        tracing::debug!(menu_code, "Menu not found");
        return Err(CoreError::menu_not_found(menu_code).into());
    };

    tracing::debug!(menu_code, menu_name = %menu.menu_name, "Menu found");
    Ok(MenuDto::from(menu))
}

/// GET /menus/{menuCode}
pub async fn get_by_code(
    State(state): State<AppState>,
    menu_code: Result<Path<MenuCode>, PathRejection>,
) -> AppResult<Json<MenuDto>> {
    let Path(menu_code) =
        menu_code.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let menu = find_menu_by_code(&state.pool, menu_code).await?;
    Ok(Json(menu))
}
