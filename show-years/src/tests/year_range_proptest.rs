//! Property-based tests for the two title shapes
//!
//! Prefixes never contain `(`, `)` or `-`, so the only delimiters in a
//! generated title are the ones around its years.

use proptest::prelude::*;

use crate::year_range::{
    extract_single_year, extract_year_end, extract_year_start, parse_year_info, ShowTitle,
    YearRange,
};

/// Show names: ASCII, punctuation or any other text without delimiters
fn prefix_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z][A-Za-z0-9 ]{0,20}",
        "[A-Za-z0-9 .,:!?'&]{0,20}",
        "[^()\\-]{0,20}",
    ]
}

proptest! {
    #[test]
    fn range_titles_yield_start_and_end(
        prefix in prefix_strategy(),
        start in 0..=i32::MAX,
        end in any::<i32>(),
    ) {
        let title = format!("{} ({}-{})", prefix, start, end);

        prop_assert_eq!(extract_year_start(&title), Ok(start));
        prop_assert_eq!(extract_year_end(&title), Ok(end));
        prop_assert!(extract_single_year(&title).is_err());
        prop_assert_eq!(parse_year_info(&title), Ok(YearRange::Range { start, end }));

        let show = ShowTitle::new(title.as_str());
        prop_assert_eq!(show.name(), prefix.trim());
    }

    #[test]
    fn single_year_titles_yield_one_year(
        prefix in prefix_strategy(),
        year in 0..=i32::MAX,
    ) {
        let title = format!("{} ({})", prefix, year);

        prop_assert_eq!(extract_single_year(&title), Ok(year));
        prop_assert!(extract_year_start(&title).is_err());
        prop_assert!(extract_year_end(&title).is_err());
        prop_assert_eq!(parse_year_info(&title), Ok(YearRange::Single { year }));
    }

    #[test]
    fn titles_without_brackets_have_no_years(prefix in prefix_strategy()) {
        prop_assert!(extract_year_start(&prefix).is_err());
        prop_assert!(extract_year_end(&prefix).is_err());
        prop_assert!(extract_single_year(&prefix).is_err());
        prop_assert!(parse_year_info(&prefix).is_err());
    }
}
