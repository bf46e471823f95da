use rusqlite::{Connection, OptionalExtension, Row, params};

use zoonosis_model::{District, DistrictId, Province, ProvinceId, Region, RegionId};

use super::Fetched;
use crate::error::{Result, StoreError};

const REGION_COLUMNS: &str = "id, name, code, natural_region, population, area_km2";

fn region_from_row(row: &Row<'_>) -> rusqlite::Result<Region> {
    Ok(Region {
        id: RegionId(row.get(0)?),
        name: row.get(1)?,
        code: row.get(2)?,
        natural_region: row.get(3)?,
        population: row.get(4)?,
        area_km2: row.get(5)?,
    })
}

fn province_from_row(row: &Row<'_>) -> rusqlite::Result<Province> {
    Ok(Province {
        id: ProvinceId(row.get(0)?),
        region_id: RegionId(row.get(1)?),
        name: row.get(2)?,
        code: row.get(3)?,
    })
}

fn district_from_row(row: &Row<'_>) -> rusqlite::Result<District> {
    Ok(District {
        id: DistrictId(row.get(0)?),
        province_id: ProvinceId(row.get(1)?),
        name: row.get(2)?,
        code: row.get(3)?,
    })
}

pub fn find_region_by_name(conn: &Connection, name: &str) -> Result<Option<Region>> {
    let region = conn
        .query_row(
            &format!("SELECT {REGION_COLUMNS} FROM region WHERE name = ?1"),
            params![name],
            region_from_row,
        )
        .optional()?;
    Ok(region)
}

pub fn get_region(conn: &Connection, id: RegionId) -> Result<Region> {
    conn.query_row(
        &format!("SELECT {REGION_COLUMNS} FROM region WHERE id = ?1"),
        params![id.get()],
        region_from_row,
    )
    .optional()?
    .ok_or_else(|| StoreError::not_found("region", id))
}

pub fn list_regions(conn: &Connection) -> Result<Vec<Region>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {REGION_COLUMNS} FROM region ORDER BY name"
    ))?;
    let regions = stmt
        .query_map([], region_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(regions)
}

/// Get a region by name, inserting it with a freshly allocated code when
/// absent. `allocate_code` only runs on insert.
pub fn get_or_create_region<F>(conn: &Connection, name: &str, allocate_code: F) -> Result<Fetched<Region>>
where
    F: FnOnce() -> Result<String>,
{
    if let Some(region) = find_region_by_name(conn, name)? {
        return Ok(Fetched::Existing(region));
    }
    let code = allocate_code()?;
    conn.execute(
        "INSERT INTO region (name, code) VALUES (?1, ?2)",
        params![name, code],
    )?;
    Ok(Fetched::Created(Region {
        id: RegionId(conn.last_insert_rowid()),
        name: name.to_string(),
        code,
        natural_region: None,
        population: None,
        area_km2: None,
    }))
}

pub fn find_province(conn: &Connection, region_id: RegionId, name: &str) -> Result<Option<Province>> {
    let province = conn
        .query_row(
            "SELECT id, region_id, name, code FROM province WHERE region_id = ?1 AND name = ?2",
            params![region_id.get(), name],
            province_from_row,
        )
        .optional()?;
    Ok(province)
}

pub fn get_or_create_province<F>(
    conn: &Connection,
    region_id: RegionId,
    name: &str,
    allocate_code: F,
) -> Result<Fetched<Province>>
where
    F: FnOnce() -> Result<String>,
{
    if let Some(province) = find_province(conn, region_id, name)? {
        return Ok(Fetched::Existing(province));
    }
    let code = allocate_code()?;
    conn.execute(
        "INSERT INTO province (region_id, name, code) VALUES (?1, ?2, ?3)",
        params![region_id.get(), name, code],
    )?;
    Ok(Fetched::Created(Province {
        id: ProvinceId(conn.last_insert_rowid()),
        region_id,
        name: name.to_string(),
        code,
    }))
}

pub fn find_district(conn: &Connection, province_id: ProvinceId, name: &str) -> Result<Option<District>> {
    let district = conn
        .query_row(
            "SELECT id, province_id, name, code FROM district WHERE province_id = ?1 AND name = ?2",
            params![province_id.get(), name],
            district_from_row,
        )
        .optional()?;
    Ok(district)
}

/// Get a district by `(province, name)`, inserting it with `code` when absent.
pub fn get_or_create_district(
    conn: &Connection,
    province_id: ProvinceId,
    name: &str,
    code: &str,
) -> Result<Fetched<District>> {
    if let Some(district) = find_district(conn, province_id, name)? {
        return Ok(Fetched::Existing(district));
    }
    conn.execute(
        "INSERT INTO district (province_id, name, code) VALUES (?1, ?2, ?3)",
        params![province_id.get(), name, code],
    )?;
    Ok(Fetched::Created(District {
        id: DistrictId(conn.last_insert_rowid()),
        province_id,
        name: name.to_string(),
        code: code.to_string(),
    }))
}

/// Highest region code number in use (the `NN` of `NN0000`), 0 when empty.
pub fn max_region_counter(conn: &Connection) -> Result<u32> {
    let max: Option<i64> = conn.query_row(
        "SELECT MAX(CAST(substr(code, 1, 2) AS INTEGER)) FROM region",
        [],
        |row| row.get(0),
    )?;
    Ok(max.and_then(|value| u32::try_from(value).ok()).unwrap_or(0))
}

/// Highest province counter (the `PP` of `RRPP00`) used under a region.
pub fn max_province_counter(conn: &Connection, region_id: RegionId) -> Result<u32> {
    let max: Option<i64> = conn.query_row(
        "SELECT MAX(CAST(substr(code, 3, 2) AS INTEGER)) FROM province WHERE region_id = ?1",
        params![region_id.get()],
        |row| row.get(0),
    )?;
    Ok(max.and_then(|value| u32::try_from(value).ok()).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Store;

    fn code(value: &str) -> impl FnOnce() -> Result<String> {
        let value = value.to_string();
        move || Ok(value)
    }

    #[test]
    fn region_get_or_create_is_idempotent() {
        let store = Store::open_in_memory().unwrap();
        let conn = store.connection();
        let first = get_or_create_region(conn, "LIMA", code("010000")).unwrap();
        assert!(first.was_created());
        let second =
            get_or_create_region(conn, "LIMA", || panic!("code allocated for existing region"))
                .unwrap();
        assert!(!second.was_created());
        assert_eq!(first.into_inner().id, second.into_inner().id);
    }

    #[test]
    fn province_names_repeat_across_regions() {
        let store = Store::open_in_memory().unwrap();
        let conn = store.connection();
        let lima = get_or_create_region(conn, "LIMA", code("010000")).unwrap().into_inner();
        let piura = get_or_create_region(conn, "PIURA", code("020000")).unwrap().into_inner();
        get_or_create_province(conn, lima.id, "CENTRO", code("010100")).unwrap();
        let other = get_or_create_province(conn, piura.id, "CENTRO", code("020100")).unwrap();
        assert!(other.was_created());
    }

    #[test]
    fn duplicate_code_is_rejected() {
        let store = Store::open_in_memory().unwrap();
        let conn = store.connection();
        get_or_create_region(conn, "LIMA", code("010000")).unwrap();
        let err = get_or_create_region(conn, "PIURA", code("010000")).unwrap_err();
        assert!(matches!(err, StoreError::Sqlite(_)));
    }

    #[test]
    fn counters_follow_stored_codes() {
        let store = Store::open_in_memory().unwrap();
        let conn = store.connection();
        assert_eq!(max_region_counter(conn).unwrap(), 0);
        let region = get_or_create_region(conn, "CUSCO", code("070000")).unwrap().into_inner();
        get_or_create_province(conn, region.id, "URUBAMBA", code("071200")).unwrap();
        assert_eq!(max_region_counter(conn).unwrap(), 7);
        assert_eq!(max_province_counter(conn, region.id).unwrap(), 12);
    }

    #[test]
    fn missing_region_is_not_found() {
        let store = Store::open_in_memory().unwrap();
        let err = get_region(store.connection(), RegionId(9)).unwrap_err();
        assert_eq!(err.to_string(), "region not found: 9");
    }
}
