//! Recipe Vault Core Library
//!
//! Recipes, the weekly meal plan, the shopping list and the theme
//! preference, each kept in memory and mirrored to key-value storage.

pub mod defaults;
pub mod id;
pub mod models;
pub mod storage;
pub mod stores;

pub use models::{
    Category, DailyPlan, Day, Difficulty, MealSlot, Recipe, RecipeDraft, ShoppingItem,
    StoredShoppingEntry, WeeklyPlan,
};
pub use storage::{
    Durable, FileStorage, KeyValueStore, MemoryStorage, StorageError, StorageKey,
};
pub use stores::{
    filter_recipes, CategoryFilter, ColorSchemeSource, DisplayMarker, DisplayModeFlag,
    ManualColorScheme, MealPlanStore, RecipeFilter, RecipeStore, ShoppingListStore,
    ThemePreference, ThemeStore,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
