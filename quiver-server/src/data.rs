//! The static lookup table behind the mock server.

use serde::Serialize;

/// The category keys the server recognizes.
pub const CATEGORIES: [&str; 3] = ["tags", "persons", "locations"];

/// A single filter option. The category label is duplicated onto each record,
/// matching the wire shape clients select.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String
}

/// Returns the canned options registered for a category, in registration
/// order. Unrecognized categories yield an empty list rather than an error.
pub fn options_for(category: &str) -> Vec<Item> {
    let names: &[&str] = match category {
        "tags" => &["Nature", "Architecture", "Wildlife", "Landscape", "Urban"],
        "persons" => &[
            "John Doe",
            "Jane Smith",
            "Mike Johnson",
            "Sarah Wilson",
            "David Brown"
        ],
        "locations" => &["New York", "Los Angeles", "Chicago", "Miami", "Seattle"],
        _ => return Vec::new()
    };

    names
        .iter()
        .enumerate()
        .map(|(i, name)| Item {
            id: (i + 1).to_string(),
            name: (*name).to_string(),
            type_: category.to_string()
        })
        .collect()
}
