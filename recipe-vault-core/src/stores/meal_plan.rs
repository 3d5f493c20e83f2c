//! The weekly meal-plan store.

use std::sync::Arc;

use crate::models::{DailyPlan, Day, MealSlot, Recipe, WeeklyPlan};
use crate::storage::{Durable, KeyValueStore, StorageKey};

/// Owns the week grid and mirrors it to `vault_meal_plan`.
///
/// A new store starts empty. Persisted data is only read by [`hydrate`],
/// which the host calls once it has shown the empty grid.
///
/// [`hydrate`]: MealPlanStore::hydrate
pub struct MealPlanStore {
    plan: WeeklyPlan,
    durable: Durable<WeeklyPlan>,
}

impl MealPlanStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            plan: WeeklyPlan::empty(),
            durable: Durable::new(storage, StorageKey::MealPlan),
        }
    }

    /// Replaces the in-memory plan with the persisted one, if there is one
    /// and it parses. Otherwise the current plan is kept.
    pub fn hydrate(&mut self) {
        match self.durable.try_load() {
            Ok(Some(plan)) => {
                tracing::debug!("Loaded saved meal plan");
                self.plan = plan;
            }
            Ok(None) => {}
            Err(e) => tracing::error!("Failed to load saved meal plan: {}", e),
        }
    }

    pub fn plan(&self) -> &WeeklyPlan {
        &self.plan
    }

    pub fn day(&self, day: Day) -> &DailyPlan {
        self.plan.day(day)
    }

    /// Puts a copy of the recipe into the slot.
    ///
    /// `day` must be one of the seven day names exactly as written
    /// ("Monday" .. "Sunday"); anything else is ignored and `false` returned.
    pub fn add_recipe_to_plan(&mut self, day: &str, slot: MealSlot, recipe: &Recipe) -> bool {
        match exact_day(day) {
            Some(day) => {
                self.assign(day, slot, recipe);
                true
            }
            None => {
                tracing::debug!("Ignoring unknown day '{}'", day);
                false
            }
        }
    }

    /// Empties the slot. Unknown day names are ignored.
    pub fn remove_recipe_from_plan(&mut self, day: &str, slot: MealSlot) -> bool {
        match exact_day(day) {
            Some(day) => {
                self.unassign(day, slot);
                true
            }
            None => {
                tracing::debug!("Ignoring unknown day '{}'", day);
                false
            }
        }
    }

    pub fn assign(&mut self, day: Day, slot: MealSlot, recipe: &Recipe) {
        self.plan.day_mut(day).set(slot, recipe.clone());
        self.commit();
    }

    pub fn unassign(&mut self, day: Day, slot: MealSlot) {
        self.plan.day_mut(day).clear(slot);
        self.commit();
    }

    /// Resets every slot of the week to empty.
    pub fn clear_week(&mut self) {
        self.plan = WeeklyPlan::empty();
        self.commit();
    }

    fn commit(&self) {
        self.durable.save(&self.plan);
    }
}

fn exact_day(name: &str) -> Option<Day> {
    Day::ALL.into_iter().find(|day| day.as_str() == name)
}
