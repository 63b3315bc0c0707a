pub mod item;
pub mod macros;
pub mod meal;

pub use item::MenuItem;
pub use macros::MacroVector;
pub use meal::{MealEntry, SolvedMeal};
