//! Menu row model and its transfer object.

use ebpro_core::types::MenuCode;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `tbl_menu` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Menu {
    pub menu_code: MenuCode,
    pub menu_name: String,
    /// Stored as text; no numeric interpretation happens in this service.
    pub menu_price: String,
    pub category_code: String,
    pub orderable_status: String,
}

/// External representation of a [`Menu`], returned by `GET /menus/{menuCode}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDto {
    pub menu_code: MenuCode,
    pub menu_name: String,
    pub menu_price: String,
    pub category_code: String,
    pub orderable_status: String,
}

impl From<Menu> for MenuDto {
    fn from(menu: Menu) -> Self {
        Self {
            menu_code: menu.menu_code,
            menu_name: menu.menu_name,
            menu_price: menu.menu_price,
            category_code: menu.category_code,
            orderable_status: menu.orderable_status,
        }
    }
}
