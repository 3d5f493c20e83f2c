//! The application stores.
//!
//! Each store owns its in-memory state and one storage key. Mutating
//! methods write the store's whole state back before returning; nothing
//! else triggers a save.

mod filter;
mod meal_plan;
mod recipes;
mod shopping_list;
mod theme;

pub use filter::{filter_recipes, CategoryFilter, RecipeFilter};
pub use meal_plan::MealPlanStore;
pub use recipes::RecipeStore;
pub use shopping_list::ShoppingListStore;
pub use theme::{
    ColorSchemeListener, ColorSchemeSource, DisplayMarker, DisplayModeFlag, ListenerId,
    ManualColorScheme, ThemePreference, ThemeStore,
};
