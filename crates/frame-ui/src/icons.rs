//! Icon collections
//!
//! Only the `lucide` collection ships, with the handful of glyphs the frames
//! use. Icons are stored as raw SVG markup; `currentColor` marks the spots
//! where the resolved icon color is injected.

const LUCIDE_OPEN: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\">";

const LUCIDE: &[(&str, &str)] = &[
    ("arrow-right", "<path d=\"M5 12h14\"/><path d=\"m12 5 7 7-7 7\"/>"),
    ("check", "<path d=\"M20 6 9 17l-5-5\"/>"),
    (
        "circle-check",
        "<circle cx=\"12\" cy=\"12\" r=\"10\"/><path d=\"m9 12 2 2 4-4\"/>",
    ),
    (
        "clock",
        "<circle cx=\"12\" cy=\"12\" r=\"10\"/><polyline points=\"12 6 12 12 16 14\"/>",
    ),
    ("x", "<path d=\"M18 6 6 18\"/><path d=\"m6 6 12 12\"/>"),
    (
        "zap",
        "<path d=\"M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z\"/>",
    ),
];

/// Names of the supported collections
pub const COLLECTIONS: &[&str] = &["lucide"];

/// Look up an icon's SVG markup
///
/// Returns `None` when either the collection or the icon is unknown.
pub fn lookup(collection: &str, name: &str) -> Option<String> {
    match collection {
        "lucide" => LUCIDE
            .iter()
            .find(|(icon, _)| *icon == name)
            .map(|(_, body)| format!("{}{}</svg>", LUCIDE_OPEN, body)),
        _ => None,
    }
}

/// Icon names available in a collection
pub fn names(collection: &str) -> Vec<&'static str> {
    match collection {
        "lucide" => LUCIDE.iter().map(|(name, _)| *name).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let svg = lookup("lucide", "zap").unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("currentColor"));
    }

    #[test]
    fn test_unknown() {
        assert!(lookup("lucide", "not-an-icon").is_none());
        assert!(lookup("heroicons", "zap").is_none());
        assert!(names("heroicons").is_empty());
        assert!(names("lucide").contains(&"check"));
    }
}
