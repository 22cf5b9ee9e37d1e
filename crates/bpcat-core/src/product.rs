//! The catalog entity and its field constraints

use serde::{Deserialize, Serialize};

/// Identifier length bounds enforced by the client-side validators.
pub const ID_MIN_LEN: usize = 3;
pub const ID_MAX_LEN: usize = 10;

/// Name length bounds.
///
/// The backend's own DTO validator accepts names of 6 characters and up;
/// the client contract is pinned at 5 and lets the server have the final
/// word on stricter input.
pub const NAME_MIN_LEN: usize = 5;
pub const NAME_MAX_LEN: usize = 100;

/// Description length bounds.
pub const DESCRIPTION_MIN_LEN: usize = 10;
pub const DESCRIPTION_MAX_LEN: usize = 200;

/// A bank product as it travels over the wire.
///
/// Both dates are ISO `YYYY-MM-DD` strings in every API payload; the list
/// view renders them as `DD/MM/YYYY` via [`crate::dates::format_display`].
///
/// `date_revision` is not free-standing data: any record written through
/// the form holds `date_release` shifted by exactly one calendar year.
/// Records read back from the API are displayed as-is even when they
/// violate that relation; the form corrects the revision date the moment
/// the release date is touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, immutable once created.
    pub id: String,

    /// Commercial name.
    pub name: String,

    /// Short marketing description.
    pub description: String,

    /// Logo URL. Required but not format-checked beyond non-empty.
    pub logo: String,

    /// Date the product becomes effective (ISO `YYYY-MM-DD`).
    pub date_release: String,

    /// Derived review date: release + 1 calendar year (ISO `YYYY-MM-DD`).
    pub date_revision: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: "P001".to_string(),
            name: "Cuenta Flexible".to_string(),
            description: "Cuenta de ahorro sin comisiones".to_string(),
            logo: "https://cdn.example.com/p001.png".to_string(),
            date_release: "2025-03-10".to_string(),
            date_revision: "2026-03-10".to_string(),
        }
    }

    #[test]
    fn test_wire_field_names_are_snake_case() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "id",
            "name",
            "description",
            "logo",
            "date_release",
            "date_revision",
        ] {
            assert!(obj.contains_key(key), "missing wire field {key}");
        }
        assert_eq!(obj.len(), 6);
    }

    #[test]
    fn test_round_trips_through_json() {
        let product = sample();
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
