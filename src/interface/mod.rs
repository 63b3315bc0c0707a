pub mod output;
pub mod prompts;
pub mod render;

pub use output::write_meal_csv;
pub use prompts::{prompt_target, resolve_item_names};
pub use render::{display_meal, display_menu};
