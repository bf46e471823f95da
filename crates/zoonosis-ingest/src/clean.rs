//! Name repair and critical-field row cleaning.

use crate::record::{CleanRecord, RawRecord};

/// How a latin-1 `Ñ` shows up after a UTF-8 round trip through a spreadsheet.
pub const MOJIBAKE_ENYE: &str = "ï¿½";

/// Trim and uppercase a region name.
pub fn normalize_region_name(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Repair the mis-encoded `Ñ`, then trim and uppercase.
///
/// Applies to province and district names, which are the only fields the
/// national export mangles.
pub fn normalize_place_name(raw: &str) -> String {
    raw.replace(MOJIBAKE_ENYE, "Ñ")
        .replace('\u{fffd}', "Ñ")
        .trim()
        .to_uppercase()
}

/// Result of the cleaning pass over a whole file.
#[derive(Debug, Clone, Default)]
pub struct CleanedRows {
    pub records: Vec<CleanRecord>,
    /// Rows read from the source.
    pub total: usize,
    /// Rows dropped for missing a critical field.
    pub dropped: usize,
}

/// Normalize names and drop rows missing any critical field (region,
/// province, district, disease, year, week).
///
/// Runs once over the full input before any entity is built.
pub fn clean_records(raw: Vec<RawRecord>) -> CleanedRows {
    let total = raw.len();
    let records: Vec<CleanRecord> = raw.into_iter().filter_map(clean_record).collect();
    let dropped = total - records.len();
    tracing::info!(total, valid = records.len(), dropped, "cleaned notification rows");
    CleanedRows {
        records,
        total,
        dropped,
    }
}

fn clean_record(raw: RawRecord) -> Option<CleanRecord> {
    let region = non_empty(raw.region.as_deref().map(normalize_region_name))?;
    let province = non_empty(raw.province.as_deref().map(normalize_place_name))?;
    let district = non_empty(raw.district.as_deref().map(normalize_place_name))?;
    let disease = non_empty(raw.disease.map(|name| name.trim().to_string()))?;
    let year = non_empty(raw.year)?;
    let week = non_empty(raw.week)?;
    Some(CleanRecord {
        region,
        province,
        district,
        district_code: raw.district_code,
        disease,
        diagnostic_code: raw.diagnostic_code,
        diagnosis_type: raw.diagnosis_type,
        year,
        week,
        age: raw.age,
        age_unit: raw.age_unit,
        sex: raw.sex,
        health_office: raw.health_office,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(region: &str, province: &str, district: &str) -> RawRecord {
        RawRecord {
            region: Some(region.to_string()),
            province: Some(province.to_string()),
            district: Some(district.to_string()),
            district_code: Some("150101".to_string()),
            disease: Some("RABIA".to_string()),
            year: Some("2023".to_string()),
            week: Some("5".to_string()),
            ..RawRecord::default()
        }
    }

    #[test]
    fn repairs_mangled_enye() {
        assert_eq!(normalize_place_name("  caï¿½ete "), "CAÑETE");
        assert_eq!(normalize_place_name("CA\u{fffd}ETE"), "CAÑETE");
    }

    #[test]
    fn region_names_are_only_trimmed_and_uppercased() {
        assert_eq!(normalize_region_name(" lima "), "LIMA");
        assert_eq!(normalize_region_name("ï¿½"), "Ï¿½");
    }

    #[test]
    fn drops_rows_missing_critical_fields() {
        let mut no_week = raw("LIMA", "LIMA", "LINCE");
        no_week.week = None;
        let mut no_disease = raw("LIMA", "LIMA", "LINCE");
        no_disease.disease = Some("  ".to_string());
        let rows = vec![raw("lima", "lima", "lince"), no_week, no_disease];

        let cleaned = clean_records(rows);
        assert_eq!(cleaned.total, 3);
        assert_eq!(cleaned.dropped, 2);
        assert_eq!(cleaned.records.len(), 1);
        assert_eq!(cleaned.records[0].district, "LINCE");
    }

    #[test]
    fn optional_fields_do_not_drop_rows() {
        let mut row = raw("CUSCO", "CUSCO", "SANTIAGO");
        row.district_code = None;
        row.age = None;
        let cleaned = clean_records(vec![row]);
        assert_eq!(cleaned.dropped, 0);
    }
}
