//! Shopping checklist derived from the meal plan.
//!
//! Unlike the other stores, construction does not read storage. The host
//! calls [`ShoppingListStore::load_items`] explicitly.

use std::collections::HashSet;
use std::sync::Arc;

use crate::models::{ShoppingItem, StoredShoppingEntry, WeeklyPlan};
use crate::storage::{Durable, KeyValueStore, StorageKey};

pub struct ShoppingListStore {
    items: Vec<ShoppingItem>,
    durable: Durable<Vec<StoredShoppingEntry>>,
}

impl ShoppingListStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            items: Vec::new(),
            durable: Durable::new(storage, StorageKey::ShoppingList),
        }
    }

    /// Reads the persisted list, upgrading bare-name entries to unchecked
    /// items with fresh ids. Leaves the current items alone when nothing
    /// is stored.
    pub fn load_items(&mut self) {
        let Some(entries) = self.durable.load() else {
            return;
        };

        let legacy = entries
            .iter()
            .filter(|e| matches!(e, StoredShoppingEntry::Legacy(_)))
            .count();
        if legacy > 0 {
            tracing::info!("Upgrading {} legacy shopping item(s)", legacy);
        }

        self.items = entries
            .into_iter()
            .map(StoredShoppingEntry::into_item)
            .collect();
        self.commit();
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the whole list with one unchecked item per distinct
    /// ingredient in the plan, in first-seen order. Manual items and
    /// checked state are discarded.
    pub fn generate_from_meal_plan(&mut self, plan: &WeeklyPlan) {
        let mut seen: HashSet<&String> = HashSet::new();
        self.items = plan
            .recipes()
            .flat_map(|recipe| recipe.ingredients.iter())
            .filter(|name| seen.insert(*name))
            .map(|name| ShoppingItem::new(name.clone()))
            .collect();

        tracing::debug!("Generated {} shopping item(s)", self.items.len());
        self.commit();
    }

    /// Adds an unchecked item at the top of the list. Blank names are
    /// ignored; the name is kept as typed.
    pub fn add_item(&mut self, name: &str) -> Option<&ShoppingItem> {
        if name.trim().is_empty() {
            return None;
        }

        self.items.insert(0, ShoppingItem::new(name));
        self.commit();
        self.items.first()
    }

    /// Flips the checked flag of one item. Returns false if no item has
    /// this id.
    pub fn toggle_item(&mut self, id: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return false;
        };

        item.checked = !item.checked;
        self.commit();
        true
    }

    /// Returns false if no item has this id.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() == len_before {
            return false;
        }

        self.commit();
        true
    }

    /// Unchecks every item.
    pub fn clear_checked(&mut self) {
        if !self.items.iter().any(|i| i.checked) {
            return;
        }

        for item in &mut self.items {
            item.checked = false;
        }
        self.commit();
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| i.checked).count()
    }

    /// Percentage of checked items, rounded to the nearest integer.
    /// An empty list is 0.
    pub fn progress(&self) -> u32 {
        if self.items.is_empty() {
            return 0;
        }
        let ratio = self.checked_count() as f64 / self.items.len() as f64;
        (ratio * 100.0).round() as u32
    }

    fn commit(&self) {
        let entries: Vec<StoredShoppingEntry> = self
            .items
            .iter()
            .cloned()
            .map(StoredShoppingEntry::Item)
            .collect();
        self.durable.save(&entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Day, MealSlot, Recipe, RecipeDraft};
    use crate::storage::MemoryStorage;

    fn recipe(id: &str, ingredients: &[&str]) -> Recipe {
        Recipe::from_draft(
            id,
            RecipeDraft::new(id, Category::Dinner).with_ingredients(ingredients.iter().copied()),
        )
    }

    fn persisted(storage: &Arc<MemoryStorage>) -> Vec<ShoppingItem> {
        let text = storage.get(StorageKey::ShoppingList).unwrap().unwrap();
        serde_json::from_str(&text).unwrap()
    }

    fn names(store: &ShoppingListStore) -> Vec<&str> {
        store.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_new_store_does_not_read_storage() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(StorageKey::ShoppingList, "[\"milk\"]").unwrap();

        let store = ShoppingListStore::new(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_items_migrates_legacy_entries() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(
                StorageKey::ShoppingList,
                r#"["milk", {"id": "x", "name": "eggs", "checked": true}]"#,
            )
            .unwrap();

        let mut store = ShoppingListStore::new(storage.clone());
        store.load_items();

        let items = store.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "milk");
        assert!(!items[0].checked);
        assert!(!items[0].id.is_empty());
        assert_eq!(
            items[1],
            ShoppingItem {
                id: "x".to_string(),
                name: "eggs".to_string(),
                checked: true,
            }
        );

        // The upgraded form is what gets stored.
        assert_eq!(persisted(&storage), store.items());
    }

    #[test]
    fn test_load_items_rewrites_current_format_too() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(
                StorageKey::ShoppingList,
                "[\n  {\"id\": \"a\", \"name\": \"flour\", \"checked\": false}\n]",
            )
            .unwrap();

        let mut store = ShoppingListStore::new(storage.clone());
        store.load_items();

        let raw = storage.get(StorageKey::ShoppingList).unwrap().unwrap();
        assert_eq!(raw, serde_json::to_string(store.items()).unwrap());
        assert_eq!(names(&store), vec!["flour"]);
    }

    #[test]
    fn test_load_items_with_nothing_stored_keeps_state() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = ShoppingListStore::new(storage.clone());
        store.add_item("bread");
        storage.remove(StorageKey::ShoppingList).unwrap();

        store.load_items();

        assert_eq!(names(&store), vec!["bread"]);
    }

    #[test]
    fn test_load_items_with_corrupt_data_keeps_state() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(StorageKey::ShoppingList, "[1, 2").unwrap();

        let mut store = ShoppingListStore::new(storage);
        store.load_items();

        assert!(store.is_empty());
    }

    #[test]
    fn test_generate_deduplicates_and_discards_previous_items() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = ShoppingListStore::new(storage.clone());
        store.add_item("paper towels");

        let mut plan = WeeklyPlan::empty();
        plan.day_mut(Day::Monday)
            .set(MealSlot::Breakfast, recipe("omelette", &["egg", "cheese"]));
        plan.day_mut(Day::Tuesday)
            .set(MealSlot::Breakfast, recipe("cake", &["flour", "egg"]));

        store.generate_from_meal_plan(&plan);

        assert_eq!(names(&store), vec!["egg", "cheese", "flour"]);
        assert!(store.items().iter().all(|i| !i.checked));
        assert_eq!(persisted(&storage), store.items());
    }

    #[test]
    fn test_generate_dedup_is_exact_match() {
        let mut store = ShoppingListStore::new(Arc::new(MemoryStorage::new()));
        let mut plan = WeeklyPlan::empty();
        plan.day_mut(Day::Monday)
            .set(MealSlot::Lunch, recipe("a", &["Egg", "egg", "egg"]));

        store.generate_from_meal_plan(&plan);

        assert_eq!(names(&store), vec!["Egg", "egg"]);
    }

    #[test]
    fn test_generate_from_empty_plan_clears_list() {
        let mut store = ShoppingListStore::new(Arc::new(MemoryStorage::new()));
        store.add_item("milk");

        store.generate_from_meal_plan(&WeeklyPlan::empty());

        assert!(store.is_empty());
        assert_eq!(store.progress(), 0);
    }

    #[test]
    fn test_add_item_goes_to_front() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = ShoppingListStore::new(storage.clone());

        store.add_item("milk");
        store.add_item("eggs");

        assert_eq!(names(&store), vec!["eggs", "milk"]);
        assert_eq!(persisted(&storage), store.items());
    }

    #[test]
    fn test_add_blank_item_is_rejected() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = ShoppingListStore::new(storage.clone());

        assert!(store.add_item("").is_none());
        assert!(store.add_item("   \t").is_none());

        assert!(store.is_empty());
        assert!(storage.get(StorageKey::ShoppingList).unwrap().is_none());
    }

    #[test]
    fn test_toggle_item_flips_only_that_item() {
        let mut store = ShoppingListStore::new(Arc::new(MemoryStorage::new()));
        store.add_item("a");
        store.add_item("b");
        let id = store.items()[1].id.clone();

        assert!(store.toggle_item(&id));
        assert!(!store.items()[0].checked);
        assert!(store.items()[1].checked);

        assert!(store.toggle_item(&id));
        assert!(!store.items()[1].checked);
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        let mut store = ShoppingListStore::new(Arc::new(MemoryStorage::new()));
        store.add_item("a");

        assert!(!store.toggle_item("nope"));
        assert_eq!(store.checked_count(), 0);
    }

    #[test]
    fn test_progress() {
        let mut store = ShoppingListStore::new(Arc::new(MemoryStorage::new()));
        assert_eq!(store.progress(), 0);

        for name in ["a", "b", "c", "d"] {
            store.add_item(name);
        }
        let ids: Vec<String> = store.items().iter().map(|i| i.id.clone()).collect();
        store.toggle_item(&ids[0]);
        store.toggle_item(&ids[2]);

        assert_eq!(store.progress(), 50);
    }

    #[test]
    fn test_progress_rounds() {
        let mut store = ShoppingListStore::new(Arc::new(MemoryStorage::new()));
        for name in ["a", "b", "c"] {
            store.add_item(name);
        }
        let id = store.items()[0].id.clone();
        store.toggle_item(&id);
        assert_eq!(store.progress(), 33);

        let id = store.items()[1].id.clone();
        store.toggle_item(&id);
        assert_eq!(store.progress(), 67);
    }

    #[test]
    fn test_remove_item() {
        let mut store = ShoppingListStore::new(Arc::new(MemoryStorage::new()));
        store.add_item("a");
        store.add_item("b");
        let id = store.items()[0].id.clone();

        assert!(store.remove_item(&id));
        assert_eq!(names(&store), vec!["a"]);
        assert!(!store.remove_item(&id));
    }

    #[test]
    fn test_clear_checked() {
        let mut store = ShoppingListStore::new(Arc::new(MemoryStorage::new()));
        store.add_item("a");
        store.add_item("b");
        let ids: Vec<String> = store.items().iter().map(|i| i.id.clone()).collect();
        for id in &ids {
            store.toggle_item(id);
        }
        assert_eq!(store.progress(), 100);

        store.clear_checked();
        assert_eq!(store.checked_count(), 0);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_reload_sees_saved_items() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = ShoppingListStore::new(storage.clone());
        store.add_item("milk");
        let id = store.items()[0].id.clone();
        store.toggle_item(&id);

        let mut reloaded = ShoppingListStore::new(storage);
        reloaded.load_items();

        assert_eq!(reloaded.items(), store.items());
    }
}
