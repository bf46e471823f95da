//! Region, province and district creation from cleaned rows.
//!
//! Each level is built from the distinct keys of the input in the order they
//! first appear. Failures are logged and the offending key skipped; the
//! builder never aborts.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::Serialize;
use tracing::{debug, info, warn};

use zoonosis_ingest::CleanRecord;
use zoonosis_model::{Province, Region, district_code};
use zoonosis_store::repository::{
    get_or_create_district, get_or_create_province, get_or_create_region,
};
use zoonosis_store::{Connection, Fetched};

use crate::codes::CodeAllocator;

/// Created/existing/skipped tallies for one hierarchy level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelSummary {
    pub created: usize,
    pub existing: usize,
    pub skipped: usize,
}

impl LevelSummary {
    fn record<T>(&mut self, fetched: &Fetched<T>) {
        if fetched.was_created() {
            self.created += 1;
        } else {
            self.existing += 1;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HierarchySummary {
    pub regions: LevelSummary,
    pub provinces: LevelSummary,
    pub districts: LevelSummary,
}

/// Keys in first-seen order, without repeats.
fn distinct<K, I>(keys: I) -> Vec<K>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut seen = HashSet::new();
    keys.into_iter()
        .filter(|key| seen.insert(key.clone()))
        .collect()
}

/// Get or create every region, province and district named in `rows`.
pub fn build_hierarchy(
    conn: &Connection,
    rows: &[CleanRecord],
    codes: &mut CodeAllocator,
) -> HierarchySummary {
    let mut summary = HierarchySummary::default();

    let mut regions: HashMap<&str, Region> = HashMap::new();
    for name in distinct(rows.iter().map(|row| row.region.as_str())) {
        match get_or_create_region(conn, name, || codes.next_region_code(conn)) {
            Ok(fetched) => {
                summary.regions.record(&fetched);
                regions.insert(name, fetched.into_inner());
            }
            Err(err) => {
                warn!(region = name, error = %err, "skipping region");
                summary.regions.skipped += 1;
            }
        }
    }
    info!(
        created = summary.regions.created,
        existing = summary.regions.existing,
        "regions ready"
    );

    let mut provinces: HashMap<(&str, &str), Province> = HashMap::new();
    let pairs = distinct(
        rows.iter()
            .map(|row| (row.region.as_str(), row.province.as_str())),
    );
    for (region_name, name) in pairs {
        let Some(region) = regions.get(region_name) else {
            debug!(region = region_name, province = name, "region unavailable");
            summary.provinces.skipped += 1;
            continue;
        };
        match get_or_create_province(conn, region.id, name, || {
            codes.next_province_code(conn, region)
        }) {
            Ok(fetched) => {
                summary.provinces.record(&fetched);
                provinces.insert((region_name, name), fetched.into_inner());
            }
            Err(err) => {
                warn!(region = region_name, province = name, error = %err, "skipping province");
                summary.provinces.skipped += 1;
            }
        }
    }
    info!(
        created = summary.provinces.created,
        existing = summary.provinces.existing,
        "provinces ready"
    );

    let tuples = distinct(rows.iter().map(|row| {
        (
            row.region.as_str(),
            row.province.as_str(),
            row.district.as_str(),
            row.district_code.as_deref(),
        )
    }));
    for (region_name, province_name, name, raw_code) in tuples {
        let Some(raw_code) = raw_code else {
            warn!(district = name, province = province_name, "district has no code, skipping");
            summary.districts.skipped += 1;
            continue;
        };
        let Some(province) = provinces.get(&(region_name, province_name)) else {
            debug!(district = name, province = province_name, "province unavailable");
            summary.districts.skipped += 1;
            continue;
        };
        let created = district_code(raw_code)
            .map_err(zoonosis_store::StoreError::from)
            .and_then(|code| get_or_create_district(conn, province.id, name, &code));
        match created {
            Ok(fetched) => summary.districts.record(&fetched),
            Err(err) => {
                warn!(district = name, code = raw_code, error = %err, "skipping district");
                summary.districts.skipped += 1;
            }
        }
    }
    info!(
        created = summary.districts.created,
        existing = summary.districts.existing,
        skipped = summary.districts.skipped,
        "districts ready"
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoonosis_store::Store;
    use zoonosis_store::repository::{find_district, find_province, find_region_by_name};

    fn row(region: &str, province: &str, district: &str, code: Option<&str>) -> CleanRecord {
        CleanRecord {
            region: region.to_string(),
            province: province.to_string(),
            district: district.to_string(),
            district_code: code.map(str::to_string),
            disease: "RABIA".to_string(),
            diagnostic_code: None,
            diagnosis_type: None,
            year: "2023".to_string(),
            week: "10".to_string(),
            age: None,
            age_unit: None,
            sex: None,
            health_office: None,
        }
    }

    #[test]
    fn codes_follow_encounter_order() {
        let store = Store::open_in_memory().unwrap();
        let conn = store.connection();
        let rows = vec![
            row("PIURA", "SULLANA", "BELLAVISTA", Some("200602")),
            row("LIMA", "LIMA", "LINCE", Some("150116")),
            row("PIURA", "PAITA", "PAITA", Some("200501")),
            row("PIURA", "SULLANA", "BELLAVISTA", Some("200602")),
        ];
        let summary = build_hierarchy(conn, &rows, &mut CodeAllocator::new());

        assert_eq!(summary.regions.created, 2);
        assert_eq!(summary.provinces.created, 3);
        assert_eq!(summary.districts.created, 3);

        let piura = find_region_by_name(conn, "PIURA").unwrap().unwrap();
        let lima = find_region_by_name(conn, "LIMA").unwrap().unwrap();
        assert_eq!(piura.code, "010000");
        assert_eq!(lima.code, "020000");
        let paita = find_province(conn, piura.id, "PAITA").unwrap().unwrap();
        assert_eq!(paita.code, "010200");
        let lima_province = find_province(conn, lima.id, "LIMA").unwrap().unwrap();
        assert_eq!(lima_province.code, "020100");
    }

    #[test]
    fn district_without_code_is_skipped() {
        let store = Store::open_in_memory().unwrap();
        let conn = store.connection();
        let rows = vec![
            row("CUSCO", "URUBAMBA", "MACHUPICCHU", None),
            row("CUSCO", "URUBAMBA", "OLLANTAYTAMBO", Some("80705.0")),
        ];
        let summary = build_hierarchy(conn, &rows, &mut CodeAllocator::new());
        assert_eq!(summary.districts.created, 1);
        assert_eq!(summary.districts.skipped, 1);

        let region = find_region_by_name(conn, "CUSCO").unwrap().unwrap();
        let province = find_province(conn, region.id, "URUBAMBA").unwrap().unwrap();
        let district = find_district(conn, province.id, "OLLANTAYTAMBO").unwrap().unwrap();
        assert_eq!(district.code, "080705");
        assert!(find_district(conn, province.id, "MACHUPICCHU").unwrap().is_none());
    }

    #[test]
    fn malformed_district_code_is_skipped() {
        let store = Store::open_in_memory().unwrap();
        let rows = vec![row("LIMA", "LIMA", "LINCE", Some("15-0116"))];
        let summary = build_hierarchy(store.connection(), &rows, &mut CodeAllocator::new());
        assert_eq!(summary.districts.skipped, 1);
        assert_eq!(summary.districts.created, 0);
    }

    #[test]
    fn second_pass_finds_everything_existing() {
        let store = Store::open_in_memory().unwrap();
        let conn = store.connection();
        let rows = vec![row("LIMA", "LIMA", "LINCE", Some("150116"))];
        build_hierarchy(conn, &rows, &mut CodeAllocator::new());
        let again = build_hierarchy(conn, &rows, &mut CodeAllocator::new());
        assert_eq!(again.regions.existing, 1);
        assert_eq!(again.provinces.existing, 1);
        assert_eq!(again.districts.existing, 1);
        assert_eq!(again.regions.created + again.provinces.created + again.districts.created, 0);
    }
}
