//! Report requests as they arrive from a query string, and their validated
//! forms.
//!
//! Each `*Request` holds optional fields. `validate` collects every missing
//! parameter into one [`ClientError`]; `from_params` parses key/value pairs
//! and rejects values that are present but unreadable.

use std::ops::RangeInclusive;
use std::str::FromStr;

use zoonosis_model::{DiseaseId, RegionId};

use crate::error::ClientError;

const DISEASE_ID: &[&str] = &["disease_id", "zoonosis_id"];
const DISEASE_IDS: &[&str] = &["disease_ids", "disease_id", "zoonosis_id"];
const YEAR: &[&str] = &["year", "anio"];
const YEAR_START: &[&str] = &["year_start", "anio_inicio"];
const YEAR_END: &[&str] = &["year_end", "anio_fin"];
const REGION: &[&str] = &["region", "departamento"];
const REGION_IDS: &[&str] = &["region_ids", "region_id"];

/// Borrowed view over query pairs; the first name in each list is the
/// canonical one used in error messages.
struct Params<'a> {
    pairs: &'a [(&'a str, &'a str)],
}

impl<'a> Params<'a> {
    fn values(&self, names: &[&str]) -> impl Iterator<Item = &'a str> {
        let names = names.to_vec();
        self.pairs
            .iter()
            .filter(move |&&(key, _)| names.contains(&key))
            .map(|&(_, value)| value.trim())
            .filter(|value| !value.is_empty())
    }

    fn one<T: FromStr>(&self, names: &[&str]) -> Result<Option<T>, ClientError> {
        match self.values(names).next() {
            Some(value) => parse(names[0], value).map(Some),
            None => Ok(None),
        }
    }

    /// Repeated keys and comma-separated values both accumulate.
    fn many<T: FromStr>(&self, names: &[&str]) -> Result<Vec<T>, ClientError> {
        let mut parsed = Vec::new();
        for value in self.values(names) {
            for item in value.split(',').map(str::trim).filter(|item| !item.is_empty()) {
                parsed.push(parse(names[0], item)?);
            }
        }
        Ok(parsed)
    }
}

fn parse<T: FromStr>(name: &str, value: &str) -> Result<T, ClientError> {
    value.parse().map_err(|_| ClientError::invalid(name, value))
}

fn require<T>(value: Option<T>, name: &'static str, missing: &mut Vec<&'static str>) -> Option<T> {
    if value.is_none() {
        missing.push(name);
    }
    value
}

fn finish<T>(missing: Vec<&'static str>, build: impl FnOnce() -> Option<T>) -> Result<T, ClientError> {
    if !missing.is_empty() {
        return Err(ClientError::missing(missing));
    }
    build().ok_or_else(|| ClientError::missing(Vec::new()))
}

/// Regional restriction for the seasonal report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegionScope {
    #[default]
    National,
    Region(RegionId),
}

impl FromStr for RegionScope {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty()
            || value.eq_ignore_ascii_case("national")
            || value.eq_ignore_ascii_case("nacional")
        {
            return Ok(RegionScope::National);
        }
        value
            .parse::<i64>()
            .map(|id| RegionScope::Region(RegionId(id)))
            .map_err(|_| ClientError::invalid(REGION[0], value))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendRequest {
    pub disease_id: Option<i64>,
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendQuery {
    pub disease: DiseaseId,
    pub years: RangeInclusive<i32>,
}

impl TrendRequest {
    pub fn from_params(pairs: &[(&str, &str)]) -> Result<Self, ClientError> {
        let params = Params { pairs };
        Ok(Self {
            disease_id: params.one(DISEASE_ID)?,
            year_start: params.one(YEAR_START)?,
            year_end: params.one(YEAR_END)?,
        })
    }

    pub fn validate(&self) -> Result<TrendQuery, ClientError> {
        let mut missing = Vec::new();
        let disease = require(self.disease_id, DISEASE_ID[0], &mut missing);
        let start = require(self.year_start, YEAR_START[0], &mut missing);
        let end = require(self.year_end, YEAR_END[0], &mut missing);
        finish(missing, || {
            Some(TrendQuery {
                disease: DiseaseId(disease?),
                years: start?..=end?,
            })
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoRequest {
    pub disease_id: Option<i64>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoQuery {
    pub disease: DiseaseId,
    pub year: i32,
}

impl GeoRequest {
    pub fn from_params(pairs: &[(&str, &str)]) -> Result<Self, ClientError> {
        let params = Params { pairs };
        Ok(Self {
            disease_id: params.one(DISEASE_ID)?,
            year: params.one(YEAR)?,
        })
    }

    pub fn validate(&self) -> Result<GeoQuery, ClientError> {
        let mut missing = Vec::new();
        let disease = require(self.disease_id, DISEASE_ID[0], &mut missing);
        let year = require(self.year, YEAR[0], &mut missing);
        finish(missing, || {
            Some(GeoQuery {
                disease: DiseaseId(disease?),
                year: year?,
            })
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonalRequest {
    pub disease_ids: Vec<i64>,
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
    /// Absent means national.
    pub region: Option<RegionScope>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonalQuery {
    pub diseases: Vec<DiseaseId>,
    pub years: RangeInclusive<i32>,
    pub scope: RegionScope,
}

impl SeasonalRequest {
    pub fn from_params(pairs: &[(&str, &str)]) -> Result<Self, ClientError> {
        let params = Params { pairs };
        Ok(Self {
            disease_ids: params.many(DISEASE_IDS)?,
            year_start: params.one(YEAR_START)?,
            year_end: params.one(YEAR_END)?,
            region: params.one(REGION)?,
        })
    }

    pub fn validate(&self) -> Result<SeasonalQuery, ClientError> {
        let mut missing = Vec::new();
        if self.disease_ids.is_empty() {
            missing.push(DISEASE_IDS[0]);
        }
        let start = require(self.year_start, YEAR_START[0], &mut missing);
        let end = require(self.year_end, YEAR_END[0], &mut missing);
        finish(missing, || {
            Some(SeasonalQuery {
                diseases: self.disease_ids.iter().copied().map(DiseaseId).collect(),
                years: start?..=end?,
                scope: self.region.unwrap_or_default(),
            })
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionalRequest {
    pub region_ids: Vec<i64>,
    pub disease_id: Option<i64>,
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionalQuery {
    pub regions: Vec<RegionId>,
    pub disease: DiseaseId,
    pub years: RangeInclusive<i32>,
}

impl RegionalRequest {
    pub fn from_params(pairs: &[(&str, &str)]) -> Result<Self, ClientError> {
        let params = Params { pairs };
        Ok(Self {
            region_ids: params.many(REGION_IDS)?,
            disease_id: params.one(DISEASE_ID)?,
            year_start: params.one(YEAR_START)?,
            year_end: params.one(YEAR_END)?,
        })
    }

    pub fn validate(&self) -> Result<RegionalQuery, ClientError> {
        let mut missing = Vec::new();
        if self.region_ids.is_empty() {
            missing.push(REGION_IDS[0]);
        }
        let disease = require(self.disease_id, DISEASE_ID[0], &mut missing);
        let start = require(self.year_start, YEAR_START[0], &mut missing);
        let end = require(self.year_end, YEAR_END[0], &mut missing);
        finish(missing, || {
            Some(RegionalQuery {
                regions: self.region_ids.iter().copied().map(RegionId).collect(),
                disease: DiseaseId(disease?),
                years: start?..=end?,
            })
        })
    }
}
