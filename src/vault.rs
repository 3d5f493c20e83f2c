//! Process-wide store wiring.
//!
//! Built once in `main` and handed to the command being run.

use std::sync::Arc;

use recipe_vault_core::defaults::sample_recipes;
use recipe_vault_core::{
    DisplayModeFlag, FileStorage, KeyValueStore, ManualColorScheme, MealPlanStore, RecipeStore,
    ShoppingListStore, ThemeStore,
};

use crate::config::Config;

pub struct Vault {
    pub recipes: RecipeStore,
    pub meal_plan: MealPlanStore,
    pub shopping: ShoppingListStore,
    pub theme: ThemeStore,
    pub display: Arc<DisplayModeFlag>,
}

impl Vault {
    /// Opens the file-backed vault in the configured data directory.
    pub fn open(config: &Config) -> Self {
        let storage = Arc::new(FileStorage::new(config.data_dir.value.clone()));
        tracing::debug!("Data directory: {}", storage.data_dir().display());
        Self::with_storage(storage, config.prefers_dark.value)
    }

    /// Wires every store to one storage backend.
    ///
    /// The shopping list is left unloaded; commands call `load_items`.
    pub fn with_storage(storage: Arc<dyn KeyValueStore>, prefers_dark: bool) -> Self {
        let recipes = RecipeStore::load(storage.clone(), sample_recipes());

        let mut meal_plan = MealPlanStore::new(storage.clone());
        meal_plan.hydrate();

        let shopping = ShoppingListStore::new(storage.clone());

        let display = Arc::new(DisplayModeFlag::new());
        let mut theme = ThemeStore::new(storage, display.clone());
        theme.mount(Arc::new(ManualColorScheme::new(prefers_dark)));

        Self {
            recipes,
            meal_plan,
            shopping,
            theme,
            display,
        }
    }
}
