//! CSV reading for notification files.
//!
//! Files exported from the national surveillance system are not reliably
//! UTF-8, so cells are decoded lossily and never abort the read. Text repair
//! happens later in [`crate::clean`].

use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};

use crate::error::{IngestError, Result};
use crate::record::{RawRecord, SourceColumn};

/// Read every data row of the notification file at `path`.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let source_name = path.display().to_string();
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Read {
            source_name: source_name.clone(),
            source,
        })?;
    collect_records(reader, &source_name)
}

/// Read notification rows from any reader; `source_name` labels errors.
pub fn read_records_from<R: Read>(input: R, source_name: &str) -> Result<Vec<RawRecord>> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    collect_records(reader, source_name)
}

fn collect_records<R: Read>(mut reader: csv::Reader<R>, source_name: &str) -> Result<Vec<RawRecord>> {
    let headers = reader
        .byte_headers()
        .map_err(|source| IngestError::Read {
            source_name: source_name.to_string(),
            source,
        })?
        .clone();
    if headers.is_empty() {
        return Err(IngestError::EmptyFile {
            source_name: source_name.to_string(),
        });
    }
    let layout = ColumnLayout::resolve(&headers, source_name)?;

    let mut records = Vec::new();
    let mut row = ByteRecord::new();
    loop {
        let more = reader
            .read_byte_record(&mut row)
            .map_err(|source| IngestError::Read {
                source_name: source_name.to_string(),
                source,
            })?;
        if !more {
            break;
        }
        if row.iter().all(|cell| decode_cell(cell).is_none()) {
            continue;
        }
        records.push(layout.record(&row));
    }
    tracing::debug!(source = %source_name, rows = records.len(), "read notification rows");
    Ok(records)
}

/// Position of each known column in the file's header.
struct ColumnLayout {
    positions: Vec<(SourceColumn, usize)>,
}

impl ColumnLayout {
    fn resolve(headers: &ByteRecord, source_name: &str) -> Result<Self> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let mut positions = Vec::with_capacity(SourceColumn::ALL.len());
        for column in SourceColumn::ALL {
            match names.iter().position(|name| column.matches(name)) {
                Some(idx) => positions.push((column, idx)),
                None if column.is_required() => {
                    return Err(IngestError::MissingColumn {
                        column: column.header(),
                        source_name: source_name.to_string(),
                    });
                }
                None => {
                    tracing::debug!(column = column.header(), "optional column absent");
                }
            }
        }
        Ok(Self { positions })
    }

    fn record(&self, row: &ByteRecord) -> RawRecord {
        let mut record = RawRecord::default();
        for &(column, idx) in &self.positions {
            record.set(column, row.get(idx).and_then(decode_cell));
        }
        record
    }
}

fn normalize_header(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .trim()
        .trim_matches('\u{feff}')
        .trim()
        .to_string()
}

fn decode_cell(raw: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(raw);
    let trimmed = text.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_known_columns_in_any_order() {
        let data = "SEMANA,ano,enfermedad,distrito,provincia,departamento,ubigeo\n\
                    5,2023,RABIA,MIRAFLORES,LIMA,LIMA,150122\n";
        let records = read_records_from(data.as_bytes(), "inline").unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.week.as_deref(), Some("5"));
        assert_eq!(record.year.as_deref(), Some("2023"));
        assert_eq!(record.region.as_deref(), Some("LIMA"));
        assert_eq!(record.district_code.as_deref(), Some("150122"));
        assert_eq!(record.age, None);
    }

    #[test]
    fn blank_cells_are_absent() {
        let data = "departamento,provincia,distrito,ubigeo,enfermedad,ano,semana,edad\n\
                    LIMA, ,X,1,RABIA,2023,1,  \n";
        let records = read_records_from(data.as_bytes(), "inline").unwrap();
        assert_eq!(records[0].province, None);
        assert_eq!(records[0].age, None);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let data = "departamento,provincia,distrito,ubigeo,enfermedad,ano\nA,B,C,1,D,2020\n";
        let err = read_records_from(data.as_bytes(), "inline").unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn {
                column: "semana",
                ..
            }
        ));
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let mut data = b"departamento,provincia,distrito,ubigeo,enfermedad,ano,semana\n".to_vec();
        data.extend_from_slice(b"PIURA,PIURA,CASTILLA,200104,DENGUE,2022,3\n");
        data.extend_from_slice(b"LIMA,CA\xd1ETE,IMPERIAL,150505,RABIA,2022,4\n");
        let records = read_records_from(data.as_slice(), "inline").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].province.as_deref(), Some("CA\u{fffd}ETE"));
    }

    #[test]
    fn fully_blank_rows_are_skipped() {
        let data = "departamento,provincia,distrito,ubigeo,enfermedad,ano,semana\n,,,,,,\nA,B,C,1,D,2020,1\n";
        let records = read_records_from(data.as_bytes(), "inline").unwrap();
        assert_eq!(records.len(), 1);
    }
}
