// Render helpers for the page and its overlays

pub mod category_modal;
pub mod contact_form;
pub mod fallback;
pub mod footer;
pub mod header;
pub mod nav_menu;
pub mod popup;

pub use category_modal::CategoryModal;
pub use contact_form::ContactPanel;
pub use fallback::{fallback_text, render_failure_text, FallbackView};
pub use footer::Footer;
pub use header::Header;
pub use nav_menu::{MenuEntry, NavMenu};
pub use popup::Popup;
