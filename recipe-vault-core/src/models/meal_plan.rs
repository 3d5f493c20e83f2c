//! The weekly meal-plan grid.
//!
//! Slots hold a full copy of the recipe taken when it was planned, not a
//! reference by id. Editing or deleting the recipe afterwards leaves the
//! planned copy untouched.

use serde::{Deserialize, Serialize};

use super::day::Day;
use super::meal_slot::MealSlot;
use super::recipe::Recipe;

/// Five meal slots for one day. Missing keys deserialize as empty slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DailyPlan {
    #[serde(rename = "Breakfast")]
    pub breakfast: Option<Recipe>,
    #[serde(rename = "Lunch")]
    pub lunch: Option<Recipe>,
    #[serde(rename = "Snack")]
    pub snack: Option<Recipe>,
    #[serde(rename = "Dinner")]
    pub dinner: Option<Recipe>,
    #[serde(rename = "Dessert")]
    pub dessert: Option<Recipe>,
}

impl DailyPlan {
    pub fn get(&self, slot: MealSlot) -> Option<&Recipe> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_ref(),
            MealSlot::Lunch => self.lunch.as_ref(),
            MealSlot::Snack => self.snack.as_ref(),
            MealSlot::Dinner => self.dinner.as_ref(),
            MealSlot::Dessert => self.dessert.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: MealSlot) -> &mut Option<Recipe> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Snack => &mut self.snack,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Dessert => &mut self.dessert,
        }
    }

    pub fn set(&mut self, slot: MealSlot, recipe: Recipe) {
        *self.slot_mut(slot) = Some(recipe);
    }

    /// Empties the slot, returning what was in it.
    pub fn clear(&mut self, slot: MealSlot) -> Option<Recipe> {
        self.slot_mut(slot).take()
    }

    /// All five slots in Breakfast, Lunch, Snack, Dinner, Dessert order.
    pub fn slots(&self) -> impl Iterator<Item = (MealSlot, Option<&Recipe>)> + '_ {
        MealSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    pub fn is_empty(&self) -> bool {
        self.slots().all(|(_, recipe)| recipe.is_none())
    }
}

/// Seven daily plans keyed by day name. Always fully populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WeeklyPlan {
    #[serde(rename = "Monday")]
    pub monday: DailyPlan,
    #[serde(rename = "Tuesday")]
    pub tuesday: DailyPlan,
    #[serde(rename = "Wednesday")]
    pub wednesday: DailyPlan,
    #[serde(rename = "Thursday")]
    pub thursday: DailyPlan,
    #[serde(rename = "Friday")]
    pub friday: DailyPlan,
    #[serde(rename = "Saturday")]
    pub saturday: DailyPlan,
    #[serde(rename = "Sunday")]
    pub sunday: DailyPlan,
}

impl WeeklyPlan {
    /// A plan with all 35 slots empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn day(&self, day: Day) -> &DailyPlan {
        match day {
            Day::Monday => &self.monday,
            Day::Tuesday => &self.tuesday,
            Day::Wednesday => &self.wednesday,
            Day::Thursday => &self.thursday,
            Day::Friday => &self.friday,
            Day::Saturday => &self.saturday,
            Day::Sunday => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: Day) -> &mut DailyPlan {
        match day {
            Day::Monday => &mut self.monday,
            Day::Tuesday => &mut self.tuesday,
            Day::Wednesday => &mut self.wednesday,
            Day::Thursday => &mut self.thursday,
            Day::Friday => &mut self.friday,
            Day::Saturday => &mut self.saturday,
            Day::Sunday => &mut self.sunday,
        }
    }

    /// Days in Monday..Sunday order.
    pub fn days(&self) -> impl Iterator<Item = (Day, &DailyPlan)> + '_ {
        Day::ALL.into_iter().map(move |day| (day, self.day(day)))
    }

    /// Every planned recipe, day by day, slot by slot.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> + '_ {
        self.days()
            .flat_map(|(_, plan)| plan.slots().filter_map(|(_, recipe)| recipe))
    }

    pub fn is_empty(&self) -> bool {
        self.days().all(|(_, plan)| plan.is_empty())
    }
}
