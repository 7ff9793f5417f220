use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },
}

impl CoreError {
    /// Shorthand for a missing `tbl_menu` row.
    pub fn menu_not_found(menu_code: crate::types::MenuCode) -> Self {
        CoreError::NotFound {
            entity: "Menu",
            id: DbId::from(menu_code),
        }
    }
}
