pub mod form;
pub mod layout;
pub mod path;

// Export utilities that are used
pub use form::{blocking_fields, validate_email, FieldEdit, FormCursor};
pub use layout::{center_popup, create_page_layout, is_compact};
pub use path::{
    format_path_for_display, get_cache_dir, get_config_dir, get_config_path, get_cookie_path,
    get_home_dir, get_log_path,
};
