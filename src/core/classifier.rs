use crate::domain::model::RawPlace;

pub const OTHER: &str = "Other";

/// Priority order matters: the first rule with a shared tag wins.
const RULES: &[(&[&str], &str)] = &[
    (&["grocery_or_supermarket", "supermarket"], "Grocery Store"),
    (&["gas_station"], "Gas Station"),
    (&["restaurant", "meal_takeaway", "food"], "Restaurant"),
    (&["place_of_worship", "church"], "Church"),
    (&["park", "rv_park", "amusement_park"], "Park"),
    (&["hospital", "doctor", "pharmacy"], "Healthcare"),
    (&["bank", "atm"], "Banking"),
    (&["school", "university"], "Education"),
    (&["shopping_mall", "clothing_store", "store"], "Shopping"),
];

pub fn classify(place: &RawPlace) -> String {
    let types = place.types();

    for (tags, label) in RULES {
        if types.iter().any(|t| tags.contains(&t.as_str())) {
            return label.to_string();
        }
    }

    match types.first() {
        Some(first) => humanize_tag(first),
        None => OTHER.to_string(),
    }
}

/// `car_repair` -> `Car Repair`
fn humanize_tag(tag: &str) -> String {
    tag.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_with(types: &[&str]) -> RawPlace {
        RawPlace {
            types: Some(types.iter().map(|t| t.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_earliest_rule_wins() {
        assert_eq!(classify(&place_with(&["restaurant", "park"])), "Restaurant");
        assert_eq!(classify(&place_with(&["park", "restaurant"])), "Restaurant");
        assert_eq!(
            classify(&place_with(&["store", "gas_station", "food"])),
            "Gas Station"
        );
    }

    #[test]
    fn test_each_rule() {
        let cases = [
            ("supermarket", "Grocery Store"),
            ("gas_station", "Gas Station"),
            ("meal_takeaway", "Restaurant"),
            ("church", "Church"),
            ("rv_park", "Park"),
            ("pharmacy", "Healthcare"),
            ("atm", "Banking"),
            ("university", "Education"),
            ("clothing_store", "Shopping"),
        ];
        for (tag, expected) in cases {
            assert_eq!(classify(&place_with(&[tag])), expected, "tag {}", tag);
        }
    }

    #[test]
    fn test_fallback_title_cases_first_tag() {
        assert_eq!(
            classify(&place_with(&["car_repair", "point_of_interest"])),
            "Car Repair"
        );
        assert_eq!(classify(&place_with(&["lodging"])), "Lodging");
    }

    #[test]
    fn test_no_tags_is_other() {
        assert_eq!(classify(&place_with(&[])), "Other");
        assert_eq!(classify(&RawPlace::default()), "Other");
    }
}
