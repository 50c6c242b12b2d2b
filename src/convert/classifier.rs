// src/convert/classifier.rs

//! Property eligibility for px-to-rem conversion
//!
//! Matching is by substring on the lowercased, trimmed property name, so
//! `padding` also covers `padding-top`, and `border` also covers
//! `border-left-width`. The exclusion list is checked first and wins.

/// Properties that stay in pixels no matter what they also contain
const EXCLUDED_PROPERTIES: &[&str] = &[
    "border",
    "border-width",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "outline",
    "outline-width",
    "outline-offset",
    "box-shadow",
    "text-shadow",
    "transform",
    "translate",
];

/// Typography and spacing/sizing properties that scale with the root font size
const CONVERTIBLE_PROPERTIES: &[&str] = &[
    "font-size",
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "gap",
    "row-gap",
    "column-gap",
    "width",
    "height",
    "max-width",
    "max-height",
    "min-width",
    "min-height",
];

/// Decides whether a declaration's property may have its pixel values converted
pub struct PropertyClassifier;

impl PropertyClassifier {
    /// Check if a property name is eligible for conversion
    ///
    /// Order of checks matters: a name matching both lists (for example
    /// `border-width`) is rejected.
    pub fn is_eligible(property: &str) -> bool {
        let normalized = property.trim().to_lowercase();

        if EXCLUDED_PROPERTIES
            .iter()
            .any(|excluded| normalized.contains(excluded))
        {
            return false;
        }

        CONVERTIBLE_PROPERTIES
            .iter()
            .any(|convertible| normalized.contains(convertible))
    }

    /// Property names that are always rejected
    pub fn excluded() -> &'static [&'static str] {
        EXCLUDED_PROPERTIES
    }

    /// Property names that are accepted unless also excluded
    pub fn convertible() -> &'static [&'static str] {
        CONVERTIBLE_PROPERTIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typography_and_spacing_are_eligible() {
        assert!(PropertyClassifier::is_eligible("font-size"));
        assert!(PropertyClassifier::is_eligible("padding"));
        assert!(PropertyClassifier::is_eligible("margin-left"));
        assert!(PropertyClassifier::is_eligible("column-gap"));
        assert!(PropertyClassifier::is_eligible("max-height"));
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert!(PropertyClassifier::is_eligible("  Font-Size "));
        assert!(PropertyClassifier::is_eligible("PADDING"));
        assert!(!PropertyClassifier::is_eligible(" Box-Shadow"));
    }

    #[test]
    fn test_border_rejected_even_with_width() {
        assert!(!PropertyClassifier::is_eligible("border-width"));
        assert!(!PropertyClassifier::is_eligible("border-left-width"));
        assert!(!PropertyClassifier::is_eligible("outline-width"));
        assert!(!PropertyClassifier::is_eligible("border"));
    }

    #[test]
    fn test_shadows_and_transforms_rejected() {
        assert!(!PropertyClassifier::is_eligible("box-shadow"));
        assert!(!PropertyClassifier::is_eligible("text-shadow"));
        assert!(!PropertyClassifier::is_eligible("transform"));
        assert!(!PropertyClassifier::is_eligible("translate"));
        assert!(!PropertyClassifier::is_eligible("outline-offset"));
    }

    #[test]
    fn test_unlisted_properties_rejected() {
        assert!(!PropertyClassifier::is_eligible("top"));
        assert!(!PropertyClassifier::is_eligible("letter-spacing"));
        assert!(!PropertyClassifier::is_eligible(""));
    }

    #[test]
    fn test_substring_matching_extends_to_unlisted_names() {
        // Containment, not equality
        assert!(PropertyClassifier::is_eligible("stroke-width"));
        assert!(PropertyClassifier::is_eligible("scroll-margin-top"));
        assert!(PropertyClassifier::is_eligible("line-height"));
        assert!(!PropertyClassifier::is_eligible("fontSize"));
    }

    #[test]
    fn test_every_excluded_entry_wins() {
        for excluded in PropertyClassifier::excluded() {
            assert!(!PropertyClassifier::is_eligible(excluded), "{excluded}");
        }
        for convertible in PropertyClassifier::convertible() {
            assert!(PropertyClassifier::is_eligible(convertible), "{convertible}");
        }
    }
}
