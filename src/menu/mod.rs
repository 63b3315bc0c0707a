mod loader;

pub use loader::{flatten_sections, load_menu, save_meal};
