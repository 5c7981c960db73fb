//! The region catalog: an immutable record set plus code and name indices.
//!
//! Built once, validated on construction, then shared read-only (usually
//! behind an `Arc`). Lookups are total and return `None` or an empty list
//! instead of failing.

use super::data::ALL_REGIONS;
use super::types::{CatalogError, Region, RegionKind, RegionStats};
use std::collections::HashMap;

/// Validated set of regions with exact-lookup indices.
#[derive(Debug)]
pub struct RegionCatalog {
    regions: Vec<Region>,
    by_code: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl RegionCatalog {
    /// Build the catalog from the built-in SCB dataset.
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::build(ALL_REGIONS.iter().map(|e| e.to_region()).collect())?;
        let stats = catalog.stats();
        tracing::info!(
            total = stats.total,
            counties = stats.counties,
            municipalities = stats.municipalities,
            "Built-in region catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from `regions`, checking every data invariant.
    ///
    /// Declaration order is kept and drives the order of scans and filters.
    pub fn build(regions: Vec<Region>) -> Result<Self, CatalogError> {
        let mut by_code = HashMap::with_capacity(regions.len());
        let mut by_name = HashMap::with_capacity(regions.len());

        for (idx, region) in regions.iter().enumerate() {
            check_shape(region)?;
            if by_code.insert(region.code.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateCode(region.code.clone()));
            }
            if by_name.insert(region.name.to_lowercase(), idx).is_some() {
                return Err(CatalogError::DuplicateName(region.name.clone()));
            }
        }

        // County references can only be checked once every code is indexed.
        for region in regions.iter().filter(|r| r.is_municipality()) {
            let county_code = region.county_code.as_deref().unwrap_or_default();
            let is_county = by_code
                .get(county_code)
                .is_some_and(|&idx| regions[idx].kind == RegionKind::County);
            if !is_county {
                return Err(CatalogError::UnknownCounty {
                    code: region.code.clone(),
                    county_code: county_code.to_string(),
                });
            }
        }

        Ok(Self { regions, by_code, by_name })
    }

    pub fn get_by_code(&self, code: &str) -> Option<&Region> {
        self.by_code.get(code).map(|&idx| &self.regions[idx])
    }

    /// Case-insensitive, otherwise exact, name lookup.
    pub fn get_by_exact_name(&self, name: &str) -> Option<&Region> {
        self.by_name.get(&name.to_lowercase()).map(|&idx| &self.regions[idx])
    }

    /// Municipalities belonging to `county_code`. Empty for unknown counties.
    pub fn municipalities_in_county(&self, county_code: &str) -> Vec<&Region> {
        self.municipalities()
            .into_iter()
            .filter(|m| m.county_code.as_deref() == Some(county_code))
            .collect()
    }

    pub fn counties(&self) -> Vec<&Region> {
        self.of_kind(RegionKind::County)
    }

    pub fn municipalities(&self) -> Vec<&Region> {
        self.of_kind(RegionKind::Municipality)
    }

    /// The owning county of a municipality.
    pub fn county_of(&self, region: &Region) -> Option<&Region> {
        region.county_code.as_deref().and_then(|cc| self.get_by_code(cc))
    }

    /// Every region in declaration order.
    pub fn all(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn stats(&self) -> RegionStats {
        RegionStats {
            total: self.regions.len(),
            nations: self.of_kind(RegionKind::Nation).len(),
            counties: self.of_kind(RegionKind::County).len(),
            municipalities: self.of_kind(RegionKind::Municipality).len(),
        }
    }

    fn of_kind(&self, kind: RegionKind) -> Vec<&Region> {
        self.regions.iter().filter(|r| r.kind == kind).collect()
    }
}

/// Per-record checks that need no other record.
fn check_shape(region: &Region) -> Result<(), CatalogError> {
    let digits = region.code.chars().all(|c| c.is_ascii_digit());
    let valid_code = match region.kind {
        RegionKind::Nation => region.code == "00",
        RegionKind::County => digits && region.code.len() == 2,
        RegionKind::Municipality => digits && region.code.len() == 4,
    };
    if !valid_code {
        return Err(CatalogError::InvalidCode { code: region.code.clone(), kind: region.kind });
    }

    match (region.kind, region.county_code.as_deref()) {
        (RegionKind::Municipality, None) => Err(CatalogError::MissingCountyCode(region.code.clone())),
        (RegionKind::Municipality, Some(cc)) if !region.code.starts_with(cc) || cc.len() != 2 => {
            Err(CatalogError::CountyMismatch {
                code: region.code.clone(),
                county_code: cc.to_string(),
            })
        }
        (RegionKind::Nation | RegionKind::County, Some(_)) => {
            Err(CatalogError::UnexpectedCountyCode(region.code.clone()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn builtin() -> RegionCatalog {
        RegionCatalog::builtin().unwrap()
    }

    fn tiny() -> Vec<Region> {
        vec![
            Region::nation("00", "Riket"),
            Region::county("14", "Västra Götalands län"),
            Region::municipality("1480", "Göteborg", "14"),
        ]
    }

    #[test]
    fn test_builtin_stats() {
        let stats = builtin().stats();
        assert_eq!(stats.total, 312);
        assert_eq!(stats.nations, 1);
        assert_eq!(stats.counties, 21);
        assert_eq!(stats.municipalities, 290);
    }

    #[test]
    fn test_builtin_codes_and_names_unique() {
        let catalog = builtin();
        let codes: HashSet<_> = catalog.all().iter().map(|r| r.code.as_str()).collect();
        let names: HashSet<_> = catalog.all().iter().map(|r| r.name.to_lowercase()).collect();
        assert_eq!(codes.len(), catalog.len());
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_builtin_county_references() {
        let catalog = builtin();
        for m in catalog.municipalities() {
            let cc = m.county_code.as_deref().unwrap();
            assert_eq!(cc, &m.code[..2], "{} has mismatched county", m.name);
            let county = catalog.get_by_code(cc).unwrap();
            assert_eq!(county.kind, RegionKind::County);
        }
    }

    #[test]
    fn test_get_by_code() {
        let catalog = builtin();
        assert_eq!(catalog.get_by_code("1480").unwrap().name, "Göteborg");
        assert_eq!(catalog.get_by_code("00").unwrap().kind, RegionKind::Nation);
        assert!(catalog.get_by_code("9999").is_none());
    }

    #[test]
    fn test_get_by_exact_name_case_insensitive() {
        let catalog = builtin();
        assert_eq!(catalog.get_by_exact_name("GÖTEBORG").unwrap().code, "1480");
        assert_eq!(catalog.get_by_exact_name("västra götalands län").unwrap().code, "14");
        // Exact means no diacritic folding.
        assert!(catalog.get_by_exact_name("Goteborg").is_none());
    }

    #[test]
    fn test_municipalities_in_county() {
        let catalog = builtin();
        let vg = catalog.municipalities_in_county("14");
        assert_eq!(vg.len(), 49);
        assert!(vg.iter().all(|m| m.county_code.as_deref() == Some("14")));
        assert!(vg.iter().all(|m| m.code != "14"));
        assert!(vg.iter().any(|m| m.code == "1482"));
    }

    #[test]
    fn test_municipalities_in_unknown_county() {
        let catalog = builtin();
        assert!(catalog.municipalities_in_county("99").is_empty());
        assert!(catalog.municipalities_in_county("").is_empty());
        assert!(catalog.municipalities_in_county("00").is_empty());
    }

    #[test]
    fn test_counties_in_declaration_order() {
        let catalog = builtin();
        let counties = catalog.counties();
        assert_eq!(counties.first().unwrap().code, "01");
        assert_eq!(counties.last().unwrap().code, "25");
        assert!(counties.iter().all(|c| c.kind == RegionKind::County));
    }

    #[test]
    fn test_county_of() {
        let catalog = builtin();
        let kungalv = catalog.get_by_code("1482").unwrap();
        assert_eq!(catalog.county_of(kungalv).unwrap().name, "Västra Götalands län");
        let county = catalog.get_by_code("14").unwrap();
        assert!(catalog.county_of(county).is_none());
    }

    #[test]
    fn test_build_tiny() {
        let catalog = RegionCatalog::build(tiny()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_build_duplicate_code() {
        let mut regions = tiny();
        regions.push(Region::municipality("1480", "Andra Göteborg", "14"));
        assert_eq!(
            RegionCatalog::build(regions).unwrap_err(),
            CatalogError::DuplicateCode("1480".into())
        );
    }

    #[test]
    fn test_build_duplicate_name_ignores_case() {
        let mut regions = tiny();
        regions.push(Region::municipality("1481", "GÖTEBORG", "14"));
        assert_eq!(
            RegionCatalog::build(regions).unwrap_err(),
            CatalogError::DuplicateName("GÖTEBORG".into())
        );
    }

    #[test]
    fn test_build_unknown_county() {
        let mut regions = tiny();
        regions.push(Region::municipality("1380", "Halmstad", "13"));
        assert_eq!(
            RegionCatalog::build(regions).unwrap_err(),
            CatalogError::UnknownCounty { code: "1380".into(), county_code: "13".into() }
        );
    }

    #[test]
    fn test_build_county_declared_after_municipality() {
        let regions = vec![
            Region::municipality("1380", "Halmstad", "13"),
            Region::county("13", "Hallands län"),
        ];
        assert!(RegionCatalog::build(regions).is_ok());
    }

    #[test]
    fn test_build_county_mismatch() {
        let mut regions = tiny();
        regions.push(Region::municipality("1380", "Halmstad", "14"));
        assert!(matches!(
            RegionCatalog::build(regions),
            Err(CatalogError::CountyMismatch { .. })
        ));
    }

    #[test]
    fn test_build_invalid_codes() {
        assert!(matches!(
            RegionCatalog::build(vec![Region::county("1", "Ett län")]),
            Err(CatalogError::InvalidCode { kind: RegionKind::County, .. })
        ));
        assert!(matches!(
            RegionCatalog::build(vec![Region::nation("SE", "Sverige")]),
            Err(CatalogError::InvalidCode { kind: RegionKind::Nation, .. })
        ));
        assert!(matches!(
            RegionCatalog::build(vec![Region::county("14", "Län"), Region::municipality("14a0", "X", "14")]),
            Err(CatalogError::InvalidCode { kind: RegionKind::Municipality, .. })
        ));
    }

    #[test]
    fn test_build_county_code_on_wrong_kind() {
        let mut county = Region::county("14", "Västra Götalands län");
        county.county_code = Some("14".into());
        assert_eq!(
            RegionCatalog::build(vec![county]).unwrap_err(),
            CatalogError::UnexpectedCountyCode("14".into())
        );
    }

    #[test]
    fn test_build_missing_county_code() {
        let mut m = Region::municipality("1480", "Göteborg", "14");
        m.county_code = None;
        assert_eq!(
            RegionCatalog::build(vec![Region::county("14", "Län"), m]).unwrap_err(),
            CatalogError::MissingCountyCode("1480".into())
        );
    }
}
