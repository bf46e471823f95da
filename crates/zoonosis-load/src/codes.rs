//! Administrative code allocation.

use std::collections::HashMap;

use zoonosis_model::{Region, RegionId, province_code, region_code};
use zoonosis_store::repository::{max_province_counter, max_region_counter};
use zoonosis_store::{Connection, Result};

/// Hands out region and province codes.
///
/// Counters start from the highest code already stored, so a second run over
/// the same database continues the sequence instead of colliding with it.
/// Province counters are kept per region.
#[derive(Debug, Default)]
pub struct CodeAllocator {
    region_counter: Option<u32>,
    province_counters: HashMap<RegionId, u32>,
}

impl CodeAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next `NN0000` region code.
    pub fn next_region_code(&mut self, conn: &Connection) -> Result<String> {
        let current = match self.region_counter {
            Some(counter) => counter,
            None => max_region_counter(conn)?,
        };
        let next = current + 1;
        let code = region_code(next)?;
        self.region_counter = Some(next);
        Ok(code)
    }

    /// Next `RRPP00` province code under `region`.
    pub fn next_province_code(&mut self, conn: &Connection, region: &Region) -> Result<String> {
        let current = match self.province_counters.get(&region.id) {
            Some(counter) => *counter,
            None => max_province_counter(conn, region.id)?,
        };
        let next = current + 1;
        let code = province_code(&region.code, next)?;
        self.province_counters.insert(region.id, next);
        Ok(code)
    }
}
