//! Utility functions for Sampler
//!
//! Small parsing and aggregation helpers used by the API layer.

use serde::{Deserialize, Serialize};

use crate::error::SamplerError;

/// Aggregate statistics over a list of integers
///
/// `min` and `max` are `None` when the input is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberSummary {
    pub count: usize,
    pub sum: i64,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

/// Parse a comma-separated list of integers
///
/// Blank segments are skipped, surrounding whitespace is tolerated.
///
/// # Examples
///
/// ```
/// use sampler_common::parse_int_list;
///
/// assert_eq!(parse_int_list("1,2,3").unwrap(), vec![1, 2, 3]);
/// assert_eq!(parse_int_list(" 1 , ,2 ").unwrap(), vec![1, 2]);
/// assert!(parse_int_list("1,x").is_err());
/// ```
pub fn parse_int_list(values: &str) -> Result<Vec<i64>, SamplerError> {
    values
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment
                .parse::<i64>()
                .map_err(|_| SamplerError::InvalidNumber(segment.to_string()))
        })
        .collect()
}

/// Compute count, sum, min, and max over a list of integers
pub fn summarize(values: &[i64]) -> NumberSummary {
    NumberSummary {
        count: values.len(),
        sum: values.iter().sum(),
        min: values.iter().min().copied(),
        max: values.iter().max().copied(),
    }
}
