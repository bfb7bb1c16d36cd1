use super::Vocabulary;

/// Every valid `aria-*` property and state (WAI-ARIA 1.3).
pub static ARIA_PROPERTIES: Vocabulary = Vocabulary::new(&[
    "aria-activedescendant",
    "aria-atomic",
    "aria-autocomplete",
    "aria-braillelabel",
    "aria-brailleroledescription",
    "aria-busy",
    "aria-checked",
    "aria-colcount",
    "aria-colindex",
    "aria-colindextext",
    "aria-colspan",
    "aria-controls",
    "aria-current",
    "aria-describedby",
    "aria-description",
    "aria-details",
    "aria-disabled",
    "aria-dropeffect",
    "aria-errormessage",
    "aria-expanded",
    "aria-flowto",
    "aria-grabbed",
    "aria-haspopup",
    "aria-hidden",
    "aria-invalid",
    "aria-keyshortcuts",
    "aria-label",
    "aria-labelledby",
    "aria-level",
    "aria-live",
    "aria-modal",
    "aria-multiline",
    "aria-multiselectable",
    "aria-orientation",
    "aria-owns",
    "aria-placeholder",
    "aria-posinset",
    "aria-pressed",
    "aria-readonly",
    "aria-relevant",
    "aria-required",
    "aria-roledescription",
    "aria-rowcount",
    "aria-rowindex",
    "aria-rowindextext",
    "aria-rowspan",
    "aria-selected",
    "aria-setsize",
    "aria-sort",
    "aria-valuemax",
    "aria-valuemin",
    "aria-valuenow",
    "aria-valuetext",
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_properties() {
        assert!(ARIA_PROPERTIES.contains("aria-label"));
        assert!(ARIA_PROPERTIES.contains("aria-labelledby"));
        assert!(ARIA_PROPERTIES.contains("aria-errormessage"));
        assert!(!ARIA_PROPERTIES.contains("aria-labeledby"));
        assert!(!ARIA_PROPERTIES.contains("aria-"));
        assert!(!ARIA_PROPERTIES.contains("aria"));
    }

    #[test]
    fn test_no_duplicates() {
        let mut names: Vec<_> = ARIA_PROPERTIES.iter().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ARIA_PROPERTIES.len());
    }
}
