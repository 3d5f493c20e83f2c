mod category;
mod day;
mod difficulty;
mod meal_plan;
mod meal_slot;
mod recipe;
mod shopping_item;

pub use category::Category;
pub use day::Day;
pub use difficulty::Difficulty;
pub use meal_plan::{DailyPlan, WeeklyPlan};
pub use meal_slot::MealSlot;
pub use recipe::{Recipe, RecipeDraft};
pub use shopping_item::{ShoppingItem, StoredShoppingEntry};
