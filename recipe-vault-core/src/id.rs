//! Identifier generation for recipes and shopping items.

use uuid::Uuid;

/// Returns a fresh random identifier (UUID v4, hyphenated).
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_is_uuid() {
        let id = new_id();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_ne!(id, new_id());
    }
}
