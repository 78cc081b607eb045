//! Storefront API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Storefront API endpoint to address.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Storefront API version.
///
/// Shopify releases new API versions quarterly (January, April, July,
/// October). This enum provides variants for known stable versions, plus an
/// `Unstable` variant for development and a `Custom` variant for future
/// versions.
///
/// The version becomes part of the endpoint path:
/// `/api/{version}/graphql.json`.
///
/// # Example
///
/// ```rust
/// use shopify_storefront::ApiVersion;
///
/// // Use the latest stable version
/// let version = ApiVersion::latest();
/// assert!(version.is_stable());
///
/// // Parse from string
/// let version: ApiVersion = "2025-01".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2025_01);
///
/// // Display as string
/// assert_eq!(format!("{}", ApiVersion::V2025_01), "2025-01");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2024-04 (April 2024)
    V2024_04,
    /// API version 2024-07 (July 2024)
    V2024_07,
    /// API version 2024-10 (October 2024)
    V2024_10,
    /// API version 2025-01 (January 2025)
    V2025_01,
    /// Unstable API version for development and testing.
    Unstable,
    /// Custom version string for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    ///
    /// This should be updated when new stable versions are released.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_01
    }

    /// Returns `true` if this is a known stable API version.
    ///
    /// Returns `false` for `Unstable` and `Custom` variants.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    /// Returns the oldest API version within Shopify's support window
    /// (approximately 12 months). Versions older than this are considered
    /// deprecated and may stop working at any time.
    #[must_use]
    pub const fn minimum_supported() -> Self {
        Self::V2024_04
    }

    /// Returns `true` if this version is within Shopify's support window.
    ///
    /// `Unstable` is always supported for development; `Custom` versions are
    /// assumed to be newer and therefore supported.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_storefront::ApiVersion;
    ///
    /// assert!(ApiVersion::V2025_01.is_supported());
    /// assert!(ApiVersion::Unstable.is_supported());
    /// ```
    #[must_use]
    pub fn is_supported(&self) -> bool {
        match self {
            Self::Unstable | Self::Custom(_) => true,
            _ => *self >= Self::minimum_supported(),
        }
    }

    /// Returns a numeric ordering value for version comparison.
    ///
    /// This is used internally for implementing `Ord`.
    const fn ordinal(&self) -> u32 {
        match self {
            Self::V2024_04 => 1,
            Self::V2024_07 => 2,
            Self::V2024_10 => 3,
            Self::V2025_01 => 4,
            Self::Unstable => 100,  // Always sorts after stable versions
            Self::Custom(_) => 101, // Custom sorts after unstable
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        // Format: YYYY-MM
        if s.len() != 7 {
            return false;
        }

        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return false;
        }

        let year = parts[0];
        let month = parts[1];

        if year.len() != 4 || month.len() != 2 {
            return false;
        }

        // Validate year is numeric
        if !year.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        // Validate month is 01, 04, 07, or 10 (Shopify's quarterly releases)
        matches!(month, "01" | "04" | "07" | "10")
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            // Custom versions compare lexicographically with each other
            (Self::Custom(a), Self::Custom(b)) => a.cmp(b),
            // Otherwise use ordinal comparison
            _ => self.ordinal().cmp(&other.ordinal()),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V2024_04 => "2024-04",
            Self::V2024_07 => "2024-07",
            Self::V2024_10 => "2024-10",
            Self::V2025_01 => "2025-01",
            Self::Unstable => "unstable",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "2024-04" => Ok(Self::V2024_04),
            "2024-07" => Ok(Self::V2024_07),
            "2024-10" => Ok(Self::V2024_10),
            "2025-01" => Ok(Self::V2025_01),
            "unstable" => Ok(Self::Unstable),
            _ => {
                // Check if it matches the version format YYYY-MM
                if Self::is_valid_version_format(&s) {
                    Ok(Self::Custom(s))
                } else {
                    Err(ConfigError::InvalidApiVersion { version: s })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_known_versions() {
        assert_eq!(
            "2024-10".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2024_10
        );
        assert_eq!(
            "2025-01".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2025_01
        );
        assert_eq!(
            "unstable".parse::<ApiVersion>().unwrap(),
            ApiVersion::Unstable
        );
    }

    #[test]
    fn test_api_version_parses_future_versions_as_custom() {
        let version = "2026-04".parse::<ApiVersion>().unwrap();
        assert_eq!(version, ApiVersion::Custom("2026-04".to_string()));
        assert!(!version.is_stable());
        assert!(version.is_supported());
    }

    #[test]
    fn test_api_version_rejects_invalid_formats() {
        assert!("2025".parse::<ApiVersion>().is_err());
        assert!("2025-02".parse::<ApiVersion>().is_err()); // not a quarterly month
        assert!("25-01".parse::<ApiVersion>().is_err());
        assert!("garbage".parse::<ApiVersion>().is_err());
        assert!("".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_api_version_display_round_trips() {
        for version in [
            ApiVersion::V2024_04,
            ApiVersion::V2024_07,
            ApiVersion::V2024_10,
            ApiVersion::V2025_01,
            ApiVersion::Unstable,
        ] {
            let displayed = version.to_string();
            let parsed: ApiVersion = displayed.parse().unwrap();
            assert_eq!(parsed, version);
        }
    }

    #[test]
    fn test_latest_is_stable_and_supported() {
        let latest = ApiVersion::latest();
        assert!(latest.is_stable());
        assert!(latest.is_supported());
    }

    #[test]
    fn test_default_is_latest() {
        assert_eq!(ApiVersion::default(), ApiVersion::latest());
    }

    #[test]
    fn test_version_ordering() {
        assert!(ApiVersion::V2024_04 < ApiVersion::V2024_10);
        assert!(ApiVersion::V2024_10 < ApiVersion::V2025_01);
        assert!(ApiVersion::V2025_01 < ApiVersion::Unstable);
        assert!(ApiVersion::Unstable < ApiVersion::Custom("2026-01".to_string()));
    }

    #[test]
    fn test_minimum_supported_boundary() {
        assert!(ApiVersion::minimum_supported().is_supported());
    }
}
