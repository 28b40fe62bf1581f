use serde::{Deserialize, Serialize};

/// One point-of-interest record.
///
/// The JSON wire names are camelCase and fixed; the field set and order must
/// survive load/save round-trips unchanged, so nothing here is optional or
/// defaulted. `is_completed` is the only field ever mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub city: String,
    pub state: String,
    pub park: String,
    pub description: String,
    pub image_name: String,
    pub is_completed: bool,
}

impl Location {
    /// Marker shown in the list view.
    pub fn marker(&self) -> &'static str {
        if self.is_completed { "★" } else { "☆" }
    }

    /// "City, State" line for the detail view.
    pub fn place(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}
