// Export the year range extractors
pub mod year_range;

#[cfg(test)]
pub mod tests;

pub use crate::year_range::{
    extract_single_year, extract_year_end, extract_year_start, parse_year_info, FormatError,
    ShowTitle, TitleShape, YearRange,
};
