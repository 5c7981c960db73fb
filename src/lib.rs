//! SCB Regions — offline gazetteer of Swedish administrative regions.
//!
//! Resolves free-text or partial-code queries to canonical region records
//! (nation, county, municipality) suitable as a `Region` selection for
//! Statistics Sweden tables.

pub mod region;
pub mod server;
