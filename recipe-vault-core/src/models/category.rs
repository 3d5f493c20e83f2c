use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Snack,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Dessert,
        Category::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Dessert => "Dessert",
            Category::Snack => "Snack",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(Category::Breakfast),
            "lunch" => Ok(Category::Lunch),
            "dinner" => Ok(Category::Dinner),
            "dessert" => Ok(Category::Dessert),
            "snack" => Ok(Category::Snack),
            _ => Err(format!(
                "Invalid category '{}'. Valid options: breakfast, lunch, dinner, dessert, snack",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", Category::Breakfast), "Breakfast");
        assert_eq!(format!("{}", Category::Dessert), "Dessert");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(Category::from_str("lunch").unwrap(), Category::Lunch);
        assert_eq!(Category::from_str("SNACK").unwrap(), Category::Snack);
        assert_eq!(Category::from_str("Dinner").unwrap(), Category::Dinner);
        assert!(Category::from_str("brunch").is_err());
        assert!(Category::from_str("").is_err());
    }

    #[test]
    fn test_category_json_uses_capitalized_name() {
        let json = serde_json::to_string(&Category::Breakfast).unwrap();
        assert_eq!(json, "\"Breakfast\"");

        let parsed: Category = serde_json::from_str("\"Snack\"").unwrap();
        assert_eq!(parsed, Category::Snack);
    }
}
