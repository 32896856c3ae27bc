pub mod fixtures;
pub mod year_range_proptest;
