//! Sibling ordering strategies for canonical serialization.

use crate::error::MxError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy for ordering sibling fields at each schema level.
///
/// The default is [`SortOrder::AlphabetAsc`]; it applies whenever a caller
/// does not select a strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    AlphabetAsc,
    AlphabetDesc,
    SimpleFirst,
    ComplexFirst,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::AlphabetAsc,
        SortOrder::AlphabetDesc,
        SortOrder::SimpleFirst,
        SortOrder::ComplexFirst,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::AlphabetAsc => "alphabetAsc",
            SortOrder::AlphabetDesc => "alphabetDesc",
            SortOrder::SimpleFirst => "simpleFirst",
            SortOrder::ComplexFirst => "complexFirst",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = MxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| {
                MxError::InvalidInput(format!(
                    "unknown sort order '{s}', expected one of: alphabetAsc, alphabetDesc, simpleFirst, complexFirst"
                ))
            })
    }
}
