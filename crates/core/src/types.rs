/// Generic row identifier used in error reporting.
pub type DbId = i64;

/// Primary key of a menu row (`tbl_menu.menu_code`, a PostgreSQL INTEGER).
pub type MenuCode = i32;
