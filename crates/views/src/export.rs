//! "Export data": the filtered points with the filter snapshot that produced them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use sagdec_core::SyntheticPoint;
use sagdec_filter::FilterState;

pub const EXPORT_FILENAME: &str = "sagdec-export.json";

#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument<'a> {
    pub generated_at: DateTime<Utc>,
    pub filters: FilterState,
    pub total_points: usize,
    pub count: usize,
    pub points: Vec<&'a SyntheticPoint>,
}

impl<'a> ExportDocument<'a> {
    pub fn new(
        state: &FilterState,
        total_points: usize,
        points: Vec<&'a SyntheticPoint>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            generated_at,
            filters: *state,
            total_points,
            count: points.len(),
            points,
        }
    }

    pub fn to_json_pretty(&self) -> sagdec_core::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
