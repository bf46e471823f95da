//! Administrative hierarchy: region (departamento), province and district.
//!
//! Every level carries a six digit code. District codes come straight from
//! the source files; region and province codes are synthesized at load time:
//!
//! - region: `{counter:02}0000`
//! - province: `{region prefix}{counter:02}00`

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::ids::{DistrictId, ProvinceId, RegionId};

/// Width of every administrative code.
pub const CODE_WIDTH: usize = 6;

/// Largest counter representable in the two-digit code segments.
pub const MAX_CODE_COUNTER: u32 = 99;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
    pub code: String,
    pub natural_region: Option<String>,
    pub population: Option<i64>,
    pub area_km2: Option<f64>,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub id: ProvinceId,
    pub region_id: RegionId,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub id: DistrictId,
    pub province_id: ProvinceId,
    pub name: String,
    pub code: String,
}

/// Synthesize a region code from its sequence number.
pub fn region_code(counter: u32) -> Result<String> {
    check_counter(counter)?;
    Ok(format!("{counter:02}0000"))
}

/// Synthesize a province code under the given region code.
pub fn province_code(region_code: &str, counter: u32) -> Result<String> {
    check_counter(counter)?;
    let prefix = code_prefix(region_code)?;
    Ok(format!("{prefix}{counter:02}00"))
}

/// The two leading digits of a region or province code.
pub fn code_prefix(code: &str) -> Result<&str> {
    match code.get(..2) {
        Some(prefix) if prefix.chars().all(|ch| ch.is_ascii_digit()) => Ok(prefix),
        _ => Err(ModelError::InvalidCode(code.to_string())),
    }
}

/// Normalize a raw district code to six digits, left padded with zeros.
///
/// Accepts the integral float rendering some exports use (`"10101.0"`).
pub fn district_code(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_suffix(".0")
        .unwrap_or(trimmed);
    if digits.is_empty()
        || digits.len() > CODE_WIDTH
        || !digits.chars().all(|ch| ch.is_ascii_digit())
    {
        return Err(ModelError::InvalidCode(raw.to_string()));
    }
    Ok(format!("{digits:0>width$}", width = CODE_WIDTH))
}

fn check_counter(counter: u32) -> Result<()> {
    if counter == 0 || counter > MAX_CODE_COUNTER {
        return Err(ModelError::InvalidCode(format!("counter {counter}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_codes_are_sequential() {
        assert_eq!(region_code(1).unwrap(), "010000");
        assert_eq!(region_code(25).unwrap(), "250000");
        assert!(region_code(0).is_err());
        assert!(region_code(100).is_err());
    }

    #[test]
    fn province_code_uses_region_prefix() {
        assert_eq!(province_code("020000", 3).unwrap(), "020300");
        assert!(province_code("x", 1).is_err());
    }

    #[test]
    fn district_code_is_zero_padded() {
        assert_eq!(district_code("10101").unwrap(), "010101");
        assert_eq!(district_code(" 150101 ").unwrap(), "150101");
        assert_eq!(district_code("10101.0").unwrap(), "010101");
        assert!(district_code("").is_err());
        assert!(district_code("1234567").is_err());
        assert!(district_code("12a4").is_err());
    }
}
