/// The persisted entries, one per store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Recipes,
    MealPlan,
    ShoppingList,
    Theme,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::Recipes,
        StorageKey::MealPlan,
        StorageKey::ShoppingList,
        StorageKey::Theme,
    ];

    /// The key name as stored by every backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Recipes => "recipes",
            StorageKey::MealPlan => "vault_meal_plan",
            StorageKey::ShoppingList => "vault_shopping_list",
            StorageKey::Theme => "theme",
        }
    }

    /// Returns the filename used by [`super::FileStorage`].
    pub fn filename(&self) -> &'static str {
        match self {
            StorageKey::Recipes => "recipes.json",
            StorageKey::MealPlan => "vault_meal_plan.json",
            StorageKey::ShoppingList => "vault_shopping_list.json",
            // Stored as the bare literal, not JSON.
            StorageKey::Theme => "theme",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
