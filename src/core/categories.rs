use crate::domain::model::CategoryMapping;

const fn mapping(
    display_name: &'static str,
    keyword: &'static str,
    place_type: &'static str,
) -> CategoryMapping {
    CategoryMapping {
        display_name,
        google_keyword: Some(keyword),
        google_type: Some(place_type),
    }
}

/// Searchable categories, in display order.
pub static CATEGORY_MAPPINGS: &[CategoryMapping] = &[
    mapping("Grocery Store", "grocery", "grocery_or_supermarket"),
    mapping("Gas Station", "gas station", "gas_station"),
    mapping("Church", "church", "place_of_worship"),
    mapping("Park", "park", "park"),
    mapping("Restaurant", "restaurant", "restaurant"),
    mapping("Healthcare", "hospital", "hospital"),
    mapping("Banking", "bank", "bank"),
    mapping("Education", "school", "school"),
    mapping("Shopping", "shopping mall", "shopping_mall"),
];

pub fn lookup(display_name: &str) -> Option<&'static CategoryMapping> {
    CATEGORY_MAPPINGS
        .iter()
        .find(|m| m.display_name == display_name)
}

pub fn names() -> Vec<&'static str> {
    CATEGORY_MAPPINGS.iter().map(|m| m.display_name).collect()
}
