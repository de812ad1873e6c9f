use factlens_verify::keywords::extract;
use proptest::prelude::*;

proptest! {
    // Extracting from the joined output of a previous extraction changes
    // nothing: filtering and de-duplication are fixpoints.
    #[test]
    fn extraction_is_idempotent(text in "[A-Za-z0-9£$€ .,-]{0,80}") {
        let first = extract(&text);
        let second = extract(&first.join(" "));
        prop_assert_eq!(&first, &second, "not idempotent for {:?}", text);
    }

    #[test]
    fn keywords_are_unique_case_insensitively(text in "[A-Za-z0-9£$€ .,-]{0,80}") {
        let keywords = extract(&text);
        let mut lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        lowered.sort();
        lowered.dedup();
        prop_assert_eq!(lowered.len(), keywords.len());
    }

    #[test]
    fn surviving_keywords_are_long_or_numeric(text in "[A-Za-z0-9£$€ .,-]{0,80}") {
        for keyword in extract(&text) {
            let chars = keyword.chars().count();
            let has_digit = keyword.chars().any(|c| c.is_ascii_digit());
            prop_assert!(chars >= 3 || has_digit, "weak keyword {keyword:?}");
        }
    }
}
