//! Request bodies for the strain and location endpoints. Always the first page of five.

use serde::Serialize;

pub const PAGE: u32 = 0;
pub const TAKE: u32 = 5;
pub const SORT_BY_RATING: &str = "rating";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrainQuery {
    pub search: String,
    pub page: u32,
    pub take: u32,
    pub sort: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationQuery {
    pub page: u32,
    pub take: u32,
    pub latitude: f64,
    pub longitude: f64,
}

/// Empty text is passed through; the API answers it with zero results.
pub fn build_strain_query(text: &str) -> StrainQuery {
    StrainQuery {
        search: text.to_string(),
        page: PAGE,
        take: TAKE,
        sort: SORT_BY_RATING.to_string(),
    }
}

pub fn build_location_query(latitude: f64, longitude: f64) -> LocationQuery {
    LocationQuery {
        page: PAGE,
        take: TAKE,
        latitude,
        longitude,
    }
}
