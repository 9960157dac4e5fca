/// Inventory name used when a label matches nothing.
pub const UNKNOWN_FOOD: &str = "Unknown";

// Ordered: the first key found inside the lowercased label wins.
const LABEL_MAP: &[(&str, &str)] = &[
    ("broccoli", "Broccoli"),
    ("cucumber", "Cucumber"),
    ("mushroom", "Mushroom"),
    ("bell pepper", "Bell Pepper"),
    ("strawberry", "Strawberry"),
    ("lemon", "Lemon"),
    // mapped to "Salt" in the first version, which had no inventory row
    ("saltshaker", "Salt Shaker"),
    ("salt shaker", "Salt Shaker"),
    ("bagel", "Bagel"),
    // was "Guacamole", which never matched the lowercased label
    ("guacamole", "Guacamole"),
];

/// Map a raw ImageNet-style class name (e.g. "saltshaker, salt shaker") to an
/// inventory name, or [`UNKNOWN_FOOD`].
pub fn map_label(raw_label: &str) -> &'static str {
    let lowered = raw_label.to_lowercase();
    LABEL_MAP
        .iter()
        .find(|(key, _)| lowered.contains(key))
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_FOOD)
}
