//! Reports over a small seeded store.

use zoonosis_model::{
    AgeUnit, DiagnosisType, DiseaseId, DistrictId, Gender, NewCase, Patient, RegionId,
    notification_date,
};
use zoonosis_report::{
    GeoRequest, NATIONAL_LABEL, PALETTE, RegionScope, RegionalRequest, ReportError,
    SeasonalRequest, TrendRequest, catalog, geo_report, regional_report, seasonal_report,
    trend_report,
};
use zoonosis_store::repository::{
    get_or_create_disease, get_or_create_district, get_or_create_province, get_or_create_region,
    insert_case, insert_patient,
};
use zoonosis_store::{Connection, Store};

struct Seed {
    rabies: DiseaseId,
    dengue: DiseaseId,
    lima: RegionId,
    piura: RegionId,
}

fn district(conn: &Connection, region: &str, region_code: &str, name: &str, code: &str) -> (RegionId, DistrictId) {
    let region = get_or_create_region(conn, region, || Ok(region_code.to_string()))
        .unwrap()
        .into_inner();
    let province_code = format!("{}0100", &region_code[..2]);
    let province = get_or_create_province(conn, region.id, &region.name, || Ok(province_code))
        .unwrap()
        .into_inner();
    let district = get_or_create_district(conn, province.id, name, code)
        .unwrap()
        .into_inner();
    (region.id, district.id)
}

fn add_case(conn: &Connection, disease: DiseaseId, district: DistrictId, year: i32, week: u32) {
    let patient = insert_patient(conn, &Patient::new(41, AgeUnit::Years, Gender::Female)).unwrap();
    insert_case(
        conn,
        &NewCase {
            disease_id: disease,
            district_id: district,
            patient_id: patient,
            notification_date: notification_date(Some(year), Some(i64::from(week))),
            epi_week: week,
            year,
            diagnostic_code: String::new(),
            diagnosis_type: DiagnosisType::Confirmed,
            health_office_code: None,
        },
    )
    .unwrap();
}

fn seed(conn: &Connection) -> Seed {
    let (lima, lince) = district(conn, "LIMA", "010000", "LINCE", "150116");
    let (piura, castilla) = district(conn, "PIURA", "020000", "CASTILLA", "200104");
    district(conn, "CUSCO", "030000", "SANTIAGO", "080104");
    let rabies = get_or_create_disease(conn, "RABIA", Some("A82")).unwrap().into_inner().id;
    let dengue = get_or_create_disease(conn, "DENGUE", Some("A97")).unwrap().into_inner().id;

    add_case(conn, rabies, lince, 2020, 1);
    add_case(conn, rabies, castilla, 2020, 6);
    add_case(conn, rabies, lince, 2021, 10);
    add_case(conn, rabies, lince, 2023, 2);
    add_case(conn, rabies, lince, 2023, 3);
    add_case(conn, rabies, lince, 2023, 50);
    add_case(conn, rabies, castilla, 2023, 20);
    add_case(conn, rabies, castilla, 2023, 21);
    add_case(conn, dengue, castilla, 2023, 9);
    add_case(conn, dengue, castilla, 2023, 9);

    Seed {
        rabies,
        dengue,
        lima,
        piura,
    }
}

fn id(value: DiseaseId) -> String {
    value.get().to_string()
}

#[test]
fn trend_over_years() {
    let store = Store::open_in_memory().unwrap();
    let conn = store.connection();
    let seed = seed(conn);
    let disease = id(seed.rabies);
    let query = TrendRequest::from_params(&[
        ("disease_id", disease.as_str()),
        ("year_start", "2020"),
        ("year_end", "2023"),
    ])
    .unwrap()
    .validate()
    .unwrap();

    let report = trend_report(conn, &query).unwrap();
    assert_eq!(report.years, vec![2020, 2021, 2023]);
    assert_eq!(report.counts, vec![2, 1, 5]);
    assert_eq!(report.total, 8);
    assert_eq!(report.average, 2.7);
    assert_eq!(report.trend_percent, 150.0);
    assert_eq!(report.peak_year, Some(2023));
    assert_eq!(report.peak_count, 5);
}

#[test]
fn trend_without_cases_is_all_zero() {
    let store = Store::open_in_memory().unwrap();
    let conn = store.connection();
    let seed = seed(conn);
    let query = TrendRequest {
        disease_id: Some(seed.rabies.get()),
        year_start: Some(2023),
        year_end: Some(2020),
    }
    .validate()
    .unwrap();

    let report = trend_report(conn, &query).unwrap();
    assert!(report.years.is_empty());
    assert_eq!(report.total, 0);
    assert_eq!(report.average, 0.0);
    assert_eq!(report.trend_percent, 0.0);
    assert_eq!(report.peak_year, None);
}

#[test]
fn geo_distribution_for_a_year() {
    let store = Store::open_in_memory().unwrap();
    let conn = store.connection();
    let seed = seed(conn);
    let query = GeoRequest {
        disease_id: Some(seed.rabies.get()),
        year: Some(2023),
    }
    .validate()
    .unwrap();

    let report = geo_report(conn, &query).unwrap();
    insta::assert_json_snapshot!(report, @r#"
    {
      "regions": [
        {
          "name": "LIMA",
          "count": 3
        },
        {
          "name": "PIURA",
          "count": 2
        }
      ],
      "national_total": 5,
      "affected_regions": 2,
      "average": 2.5,
      "top5": [
        {
          "name": "LIMA",
          "count": 3
        },
        {
          "name": "PIURA",
          "count": 2
        }
      ]
    }
    "#);
}

#[test]
fn geo_without_cases_is_empty() {
    let store = Store::open_in_memory().unwrap();
    let conn = store.connection();
    let seed = seed(conn);
    let query = GeoRequest {
        disease_id: Some(seed.dengue.get()),
        year: Some(2020),
    }
    .validate()
    .unwrap();

    let report = geo_report(conn, &query).unwrap();
    assert!(report.regions.is_empty());
    assert!(report.top5.is_empty());
    assert_eq!(report.national_total, 0);
    assert_eq!(report.affected_regions, 0);
    assert_eq!(report.average, 0.0);
}

#[test]
fn seasonal_national_series() {
    let store = Store::open_in_memory().unwrap();
    let conn = store.connection();
    let seed = seed(conn);
    let ids = format!("{},{}", id(seed.rabies), id(seed.dengue));
    let query = SeasonalRequest::from_params(&[
        ("disease_ids", ids.as_str()),
        ("year_start", "2023"),
        ("year_end", "2023"),
        ("region", "national"),
    ])
    .unwrap()
    .validate()
    .unwrap();

    let report = seasonal_report(conn, &query).unwrap();
    assert_eq!(report.scope, NATIONAL_LABEL);
    assert_eq!(report.months[0], "Enero");
    assert_eq!(report.grand_total, 7);

    let rabies = &report.series[0];
    assert_eq!(rabies.label, "RABIA");
    assert_eq!(rabies.data, [2, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1]);
    assert_eq!((rabies.border_color, rabies.background_color), PALETTE[0]);
    assert_eq!(report.series[1].border_color, PALETTE[1].0);

    let stats = &report.stats[0];
    assert_eq!(stats.total, 5);
    assert_eq!(stats.monthly_average, 0.4);
    assert_eq!((stats.peak_month, stats.peak_count), ("Enero", 2));
    assert_eq!((stats.low_month, stats.low_count), ("Febrero", 0));
    assert_eq!(report.stats[1].peak_month, "Marzo");
}

#[test]
fn seasonal_restricted_to_a_region() {
    let store = Store::open_in_memory().unwrap();
    let conn = store.connection();
    let seed = seed(conn);
    let query = SeasonalRequest {
        disease_ids: vec![seed.rabies.get()],
        year_start: Some(2023),
        year_end: Some(2023),
        region: Some(RegionScope::Region(seed.lima)),
    }
    .validate()
    .unwrap();

    let report = seasonal_report(conn, &query).unwrap();
    assert_eq!(report.scope, "LIMA");
    assert_eq!(report.series[0].data, [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(report.grand_total, 3);
}

#[test]
fn seasonal_unknown_disease_is_not_found() {
    let store = Store::open_in_memory().unwrap();
    let conn = store.connection();
    let seed = seed(conn);
    let query = SeasonalRequest {
        disease_ids: vec![seed.rabies.get(), 999],
        year_start: Some(2023),
        year_end: Some(2023),
        region: None,
    }
    .validate()
    .unwrap();

    let err = seasonal_report(conn, &query).unwrap_err();
    assert!(matches!(err, ReportError::NotFound { entity: "disease type", .. }));
}

#[test]
fn regional_report_compares_regions() {
    let store = Store::open_in_memory().unwrap();
    let conn = store.connection();
    let seed = seed(conn);
    let query = RegionalRequest {
        region_ids: vec![seed.lima.get(), seed.piura.get()],
        disease_id: Some(seed.rabies.get()),
        year_start: Some(2020),
        year_end: Some(2023),
    }
    .validate()
    .unwrap();

    let report = regional_report(conn, &query).unwrap();
    assert_eq!(report.disease, "RABIA");
    assert_eq!(report.period, "2020 - 2023");

    let lima = &report.regions[0];
    assert_eq!(lima.name, "LIMA");
    assert_eq!(lima.total, 5);
    assert_eq!(lima.average, 1.3);
    assert_eq!(lima.trend_percent, 200.0);
    assert_eq!(lima.yearly.len(), 3);

    let piura = &report.regions[1];
    assert_eq!(piura.total, 3);
    assert_eq!(piura.average, 0.8);
    assert_eq!(piura.trend_percent, 100.0);
}

#[test]
fn regional_unknown_region_is_not_found() {
    let store = Store::open_in_memory().unwrap();
    let conn = store.connection();
    let seed = seed(conn);
    let query = RegionalRequest {
        region_ids: vec![seed.lima.get(), 404],
        disease_id: Some(seed.rabies.get()),
        year_start: Some(2020),
        year_end: Some(2023),
    }
    .validate()
    .unwrap();

    let err = regional_report(conn, &query).unwrap_err();
    assert_eq!(err.to_string(), "region not found: 404");
}

#[test]
fn missing_parameters_stop_before_any_query() {
    let err = GeoRequest::from_params(&[("anio", "2023")])
        .unwrap()
        .validate()
        .unwrap_err();
    assert_eq!(err.missing, vec!["disease_id"]);
    let body = serde_json::to_value(&err).unwrap();
    assert_eq!(body["missing"][0], "disease_id");
}

#[test]
fn catalog_lists_choices() {
    let store = Store::open_in_memory().unwrap();
    let conn = store.connection();
    seed(conn);
    let catalog = catalog(conn).unwrap();
    let names: Vec<&str> = catalog.diseases.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["DENGUE", "RABIA"]);
    assert_eq!(catalog.regions.len(), 3);
    assert_eq!(catalog.years, vec![2020, 2021, 2023]);
    assert_eq!(catalog.totals.cases, 10);
}
