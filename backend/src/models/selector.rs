//! Query inputs: the site selector and the payload range.

use std::fmt;
use std::str::FromStr;

use qtty::Kilograms;
use serde::{Deserialize, Serialize};

use crate::error::InvalidRangeError;

/// Wire value of the "every site" sentinel.
pub const ALL_SITES: &str = "ALL";

/// Display label of the "every site" option.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// Site filter applied to a query.
///
/// Only the exact string `"ALL"` is the sentinel. Any other value, including
/// other casings such as `"All"`, names a site and is matched case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelector {
    #[default]
    All,
    Site(String),
}

impl SiteSelector {
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelector::All
        } else {
            SiteSelector::Site(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelector::All)
    }

    pub fn site(&self) -> Option<&str> {
        match self {
            SiteSelector::All => None,
            SiteSelector::Site(site) => Some(site),
        }
    }

    /// Whether a record at `launch_site` passes this selector.
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelector::All => true,
            SiteSelector::Site(site) => site == launch_site,
        }
    }

    /// Wire value of this selector.
    pub fn as_str(&self) -> &str {
        match self {
            SiteSelector::All => ALL_SITES,
            SiteSelector::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiteSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SiteSelector::parse(s))
    }
}

impl From<String> for SiteSelector {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelector::All
        } else {
            SiteSelector::Site(value)
        }
    }
}

impl From<&str> for SiteSelector {
    fn from(value: &str) -> Self {
        SiteSelector::parse(value)
    }
}

impl From<SiteSelector> for String {
    fn from(selector: SiteSelector) -> Self {
        match selector {
            SiteSelector::All => ALL_SITES.to_string(),
            SiteSelector::Site(site) => site,
        }
    }
}

/// Closed payload interval `[low, high]` in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    low: Kilograms,
    high: Kilograms,
}

impl PayloadRange {
    /// Build a range, rejecting `low > high` and NaN bounds.
    ///
    /// Infinite bounds are accepted, so `[-inf, inf]` selects every payload.
    pub fn new(low: f64, high: f64) -> Result<Self, InvalidRangeError> {
        if low.is_nan() || high.is_nan() {
            return Err(InvalidRangeError::NotANumber { low, high });
        }
        if low > high {
            return Err(InvalidRangeError::Inverted { low, high });
        }
        Ok(Self {
            low: Kilograms::new(low),
            high: Kilograms::new(high),
        })
    }

    /// The degenerate `[0, 0]` range.
    pub fn zero() -> Self {
        Self {
            low: Kilograms::new(0.0),
            high: Kilograms::new(0.0),
        }
    }

    pub fn low(&self) -> f64 {
        self.low.value()
    }

    pub fn high(&self) -> f64 {
        self.high.value()
    }

    /// Inclusive on both ends.
    pub fn contains(&self, payload_kg: f64) -> bool {
        payload_kg >= self.low() && payload_kg <= self.high()
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] kg", self.low(), self.high())
    }
}
