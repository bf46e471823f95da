//! Read-only reports over the case store.
//!
//! Every report follows the same shape: a `*Request` of optional fields is
//! validated into a `*Query`, the query filters and groups cases in the
//! store, and the grouped counts are summarized into a serializable report.
//!
//! ```ignore
//! let query = TrendRequest::from_params(&[("disease_id", "1"), ("year_start", "2019"), ("year_end", "2023")])?
//!     .validate()?;
//! let report = trend_report(store.connection(), &query)?;
//! ```

mod catalog;
mod error;
mod geo;
mod regional;
mod request;
mod seasonal;
pub mod stats;
mod trend;

pub use catalog::{Catalog, catalog};
pub use error::{ClientError, ReportError, Result};
pub use geo::{GeoReport, RegionCount, TOP_REGIONS, geo_report};
pub use regional::{RegionSummary, RegionalReport, YearCount, regional_report};
pub use request::{
    GeoQuery, GeoRequest, RegionScope, RegionalQuery, RegionalRequest, SeasonalQuery,
    SeasonalRequest, TrendQuery, TrendRequest,
};
pub use seasonal::{
    NATIONAL_LABEL, PALETTE, SeasonalReport, SeasonalSeries, SeasonalStats, monthly_counts,
    seasonal_report,
};
pub use trend::{TrendReport, trend_report};
