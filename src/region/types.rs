//! Core types for the region subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Administrative level of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    #[serde(rename = "country")]
    Nation,
    County,
    Municipality,
}

impl RegionKind {
    /// Swedish label used in plain-text output.
    pub fn label_sv(&self) -> &'static str {
        match self {
            Self::Nation => "riket",
            Self::County => "län",
            Self::Municipality => "kommun",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nation => write!(f, "Nation"),
            Self::County => write!(f, "County"),
            Self::Municipality => write!(f, "Municipality"),
        }
    }
}

/// A nation, county or municipality record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// "00" for the nation, 2 digits for a county, 4 digits for a municipality.
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RegionKind,
    /// Owning county, set only for municipalities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county_code: Option<String>,
}

impl Region {
    pub fn nation(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self { code: code.into(), name: name.into(), kind: RegionKind::Nation, county_code: None }
    }

    pub fn county(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self { code: code.into(), name: name.into(), kind: RegionKind::County, county_code: None }
    }

    pub fn municipality(
        code: impl Into<String>,
        name: impl Into<String>,
        county_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            kind: RegionKind::Municipality,
            county_code: Some(county_code.into()),
        }
    }

    pub fn is_municipality(&self) -> bool {
        self.kind == RegionKind::Municipality
    }

    /// One-line plain rendering, e.g. `1480  Göteborg (kommun, Västra Götalands län)`.
    pub fn display_line(&self, county_name: Option<&str>) -> String {
        match county_name {
            Some(county) => format!("{:<4}  {} ({}, {})", self.code, self.name, self.kind.label_sv(), county),
            None => format!("{:<4}  {} ({})", self.code, self.name, self.kind.label_sv()),
        }
    }
}

/// Which search rule produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchRule {
    Code,
    Name,
    Fuzzy,
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code => write!(f, "exact code"),
            Self::Name => write!(f, "exact name"),
            Self::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

/// Counts per administrative level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionStats {
    pub total: usize,
    pub nations: usize,
    pub counties: usize,
    pub municipalities: usize,
}

/// Invariant violations found while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateCode(String),
    DuplicateName(String),
    /// Code does not have the shape its kind requires.
    InvalidCode { code: String, kind: RegionKind },
    MissingCountyCode(String),
    /// A nation or county carries a county code.
    UnexpectedCountyCode(String),
    /// Municipality code prefix disagrees with its county code.
    CountyMismatch { code: String, county_code: String },
    UnknownCounty { code: String, county_code: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCode(code) => write!(f, "Duplicate region code '{}'", code),
            Self::DuplicateName(name) => write!(f, "Duplicate region name '{}'", name),
            Self::InvalidCode { code, kind } => {
                write!(f, "Invalid {} code '{}'", kind.to_string().to_lowercase(), code)
            }
            Self::MissingCountyCode(code) => {
                write!(f, "Municipality '{}' has no county code", code)
            }
            Self::UnexpectedCountyCode(code) => {
                write!(f, "Region '{}' is not a municipality but has a county code", code)
            }
            Self::CountyMismatch { code, county_code } => write!(
                f,
                "Municipality '{}' does not start with its county code '{}'",
                code, county_code
            ),
            Self::UnknownCounty { code, county_code } => write!(
                f,
                "Municipality '{}' references unknown county '{}'",
                code, county_code
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_json_shape() {
        let region = Region::municipality("1480", "Göteborg", "14");
        let json = serde_json::to_value(&region).unwrap();
        assert_eq!(json["code"], "1480");
        assert_eq!(json["type"], "municipality");
        assert_eq!(json["countyCode"], "14");
    }

    #[test]
    fn test_nation_serializes_as_country() {
        let json = serde_json::to_value(Region::nation("00", "Riket")).unwrap();
        assert_eq!(json["type"], "country");
        assert!(json.get("countyCode").is_none());
    }

    #[test]
    fn test_region_deserialize_without_county() {
        let region: Region =
            serde_json::from_str(r#"{"code":"14","name":"Västra Götalands län","type":"county"}"#).unwrap();
        assert_eq!(region, Region::county("14", "Västra Götalands län"));
    }

    #[test]
    fn test_display_line() {
        let region = Region::municipality("1480", "Göteborg", "14");
        assert_eq!(
            region.display_line(Some("Västra Götalands län")),
            "1480  Göteborg (kommun, Västra Götalands län)"
        );
        assert_eq!(Region::nation("00", "Riket").display_line(None), "00    Riket (riket)");
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::UnknownCounty { code: "9901".into(), county_code: "99".into() };
        assert_eq!(format!("{}", err), "Municipality '9901' references unknown county '99'");
        let err = CatalogError::InvalidCode { code: "1".into(), kind: RegionKind::County };
        assert_eq!(format!("{}", err), "Invalid county code '1'");
    }
}
