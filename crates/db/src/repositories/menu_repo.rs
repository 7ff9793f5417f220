//! Repository for the `tbl_menu` table.

use ebpro_core::types::MenuCode;
use sqlx::PgPool;

use crate::models::menu::Menu;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "menu_code, menu_name, menu_price, category_code, orderable_status";

/// Read access to menu rows. Rows are owned by the external store; this
/// service never writes them.
pub struct MenuRepo;

impl MenuRepo {
    /// Find a menu by its primary key. Returns `None` when no row matches.
    pub async fn find_by_code(
        pool: &PgPool,
        menu_code: MenuCode,
    ) -> Result<Option<Menu>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tbl_menu WHERE menu_code = $1");
        sqlx::query_as::<_, Menu>(&query)
            .bind(menu_code)
            .fetch_optional(pool)
            .await
    }
}
