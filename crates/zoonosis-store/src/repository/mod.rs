//! Table-level access functions.
//!
//! Every function takes `&Connection` so callers choose the transactional
//! scope.

mod case;
mod disease;
mod geography;
mod patient;
mod totals;

pub use case::{get_case, insert_case};
pub use disease::{find_disease_by_name, get_disease, get_or_create_disease, list_diseases};
pub use geography::{
    find_district, find_province, find_region_by_name, get_or_create_district,
    get_or_create_province, get_or_create_region, get_region, list_regions, max_province_counter,
    max_region_counter,
};
pub use patient::{get_patient, insert_patient};
pub use totals::{EntityTotals, entity_totals};

/// Outcome of a get-or-create lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Existing(T),
    Created(T),
}

impl<T> Fetched<T> {
    pub fn was_created(&self) -> bool {
        matches!(self, Fetched::Created(_))
    }

    pub fn get(&self) -> &T {
        match self {
            Fetched::Existing(value) | Fetched::Created(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Fetched::Existing(value) | Fetched::Created(value) => value,
        }
    }
}
