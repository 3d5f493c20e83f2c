use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five meal-time positions within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
    Dessert,
}

impl MealSlot {
    pub const ALL: [MealSlot; 5] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
        MealSlot::Dessert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snack => "Snack",
            MealSlot::Dinner => "Dinner",
            MealSlot::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "snack" => Ok(MealSlot::Snack),
            "dinner" => Ok(MealSlot::Dinner),
            "dessert" => Ok(MealSlot::Dessert),
            _ => Err(format!(
                "Invalid meal slot '{}'. Valid options: breakfast, lunch, snack, dinner, dessert",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_slot_display() {
        assert_eq!(format!("{}", MealSlot::Snack), "Snack");
        assert_eq!(format!("{}", MealSlot::Dessert), "Dessert");
    }

    #[test]
    fn test_meal_slot_from_str() {
        assert_eq!(MealSlot::from_str("breakfast").unwrap(), MealSlot::Breakfast);
        assert_eq!(MealSlot::from_str("DINNER").unwrap(), MealSlot::Dinner);
        assert!(MealSlot::from_str("brunch").is_err());
    }
}
