//! The canonical recipe collection.

use std::sync::Arc;

use crate::id::new_id;
use crate::models::{Recipe, RecipeDraft};
use crate::storage::{Durable, KeyValueStore, StorageKey};

/// Owns the recipe list and mirrors it to the `recipes` entry.
///
/// Construct once at startup with [`RecipeStore::load`] and pass it to
/// whatever needs it. Every mutation that changes the list rewrites the
/// whole collection before returning.
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    durable: Durable<Vec<Recipe>>,
}

impl RecipeStore {
    /// Loads persisted recipes and merges in the bundled defaults.
    ///
    /// Persisted recipes come first and win on id collision; defaults whose
    /// id is not already present follow in their own order. The merged list
    /// is saved straight away, even when nothing changed.
    pub fn load(storage: Arc<dyn KeyValueStore>, defaults: Vec<Recipe>) -> Self {
        let durable = Durable::new(storage, StorageKey::Recipes);
        let persisted = durable.load().unwrap_or_default();
        let recipes = merge_with_defaults(persisted, defaults);

        tracing::debug!("Loaded {} recipe(s)", recipes.len());
        durable.save(&recipes);

        Self { recipes, durable }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Appends a new recipe with a freshly generated id.
    pub fn add_recipe(&mut self, draft: RecipeDraft) -> &Recipe {
        let recipe = Recipe::from_draft(new_id(), draft);
        tracing::debug!("Adding recipe {} ({})", recipe.id, recipe.title);
        self.recipes.push(recipe);
        self.commit();

        let last = self.recipes.len() - 1;
        &self.recipes[last]
    }

    /// Removes the recipe with this id. Returns false if there was none.
    pub fn delete_recipe(&mut self, id: &str) -> bool {
        let len_before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        if self.recipes.len() == len_before {
            return false;
        }

        tracing::debug!("Deleted recipe {}", id);
        self.commit();
        true
    }

    /// Replaces every field but the id, keeping the recipe's position.
    /// Returns false if no recipe has this id.
    pub fn update_recipe(&mut self, id: &str, draft: RecipeDraft) -> bool {
        let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == id) else {
            return false;
        };

        recipe.replace_with(draft);
        tracing::debug!("Updated recipe {}", id);
        self.commit();
        true
    }

    fn commit(&self) {
        self.durable.save(&self.recipes);
    }
}

fn merge_with_defaults(persisted: Vec<Recipe>, defaults: Vec<Recipe>) -> Vec<Recipe> {
    let mut merged = persisted;
    let missing: Vec<Recipe> = defaults
        .into_iter()
        .filter(|d| !merged.iter().any(|r| r.id == d.id))
        .collect();
    merged.extend(missing);
    merged
}
