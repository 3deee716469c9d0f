//! The fixed city roster the backend knows how to plan for

/// Cities available in the dispatch form, in display order
pub const CITIES: [&str; 10] = [
    "Mumbai",
    "Delhi",
    "Bengaluru",
    "Kolkata",
    "Chennai",
    "Hyderabad",
    "Pune",
    "Jaipur",
    "Lucknow",
    "Ahmedabad",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_city_list_has_no_duplicates() {
        let unique: HashSet<_> = CITIES.iter().collect();
        assert_eq!(unique.len(), CITIES.len());
    }

    #[test]
    fn test_city_list_order_is_stable() {
        assert_eq!(CITIES[0], "Mumbai");
        assert_eq!(CITIES[1], "Delhi");
        assert_eq!(CITIES[9], "Ahmedabad");
    }
}
