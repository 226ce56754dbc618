/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

//! import of raw VIIRS hotspot records from NASAs Fire Information for Resource Management System (FIRMS),
//! see https://firms.modaps.eosdis.nasa.gov/api/ for the available APIs.
//!
//! FIRMS rate limits its API per map key (transactions per rolling time window), which is why all
//! requests go through a [`fetcher::HotspotFetcher`] that keeps track of the remaining transactions

use std::{fmt, path::PathBuf, time::Duration};
use serde::{Serialize,Deserialize};
use burnscar_common::{
    datetime::{self, deserialize_duration, serialize_duration},
    geo::GeoRect,
    net::RetryPolicy,
};

pub mod errors;
pub mod records;
pub mod rate_limit;
pub mod transport;
pub mod fetcher;

pub use errors::{FirmsError, Result};
pub use records::{FirmsRecord, Satellite, Instrument, DayNight, Confidence, read_records_csv, write_records_csv};
pub use rate_limit::{RateLimitState, MapKeyStatus};
pub use transport::{FirmsTransport, HttpTransport};
pub use fetcher::HotspotFetcher;

burnscar_common::define_load_config!{}

/// configuration of the FIRMS data source. All fields have defaults so that config files only
/// have to specify what differs, which is at least the `map_key`
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct FirmsConfig {
    pub base_url: String,

    /// URL of the endpoint that reports rate limit usage for a map key
    pub status_url: String,

    pub map_key: String,  // keep this private - it is rate limited

    pub instrument: String,
    pub data_version: String,

    /// satellite names as used in FIRMS source names (e.g. "SNPP" for "VIIRS_SNPP_NRT")
    pub satellites: Vec<String>,

    /// number of transactions we want to keep in reserve
    pub min_remaining: u32,

    /// how long to wait before we check the rate limit again
    #[serde(serialize_with="serialize_duration", deserialize_with="deserialize_duration")]
    pub rate_limit_wait: Duration,

    #[serde(serialize_with="serialize_duration", deserialize_with="deserialize_duration")]
    pub request_timeout: Duration,

    pub retry: RetryPolicy,

    /// if set we store each retrieved CSV page here
    #[serde(skip_serializing_if="burnscar_common::is_none")]
    pub cache_dir: Option<PathBuf>,
}

impl Default for FirmsConfig {
    fn default() -> Self {
        FirmsConfig {
            base_url: "https://firms.modaps.eosdis.nasa.gov".to_string(),
            status_url: "https://firms.modaps.eosdis.nasa.gov/mapserver/mapkey_status/".to_string(),
            map_key: String::new(),
            instrument: "VIIRS".to_string(),
            data_version: "NRT".to_string(),
            satellites: vec![ "SNPP".to_string(), "NOAA20".to_string(), "NOAA21".to_string() ],
            min_remaining: 30,
            rate_limit_wait: datetime::secs(10),
            request_timeout: datetime::secs(60),
            retry: RetryPolicy::default(),
            cache_dir: None,
        }
    }
}

impl FirmsConfig {
    /// the FIRMS source name for a given satellite, e.g. "VIIRS_NOAA20_NRT"
    pub fn source (&self, satellite: &str) -> String {
        format!("{}_{}_{}", self.instrument, satellite, self.data_version)
    }
}

/// what we ask FIRMS for: either all hotspots of a country (ISO 3166 alpha-3) or of a rectangular area
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub enum FirmsQuery {
    Country(String),
    Area(GeoRect),
}

impl FirmsQuery {
    /// the FIRMS API endpoint kind
    pub fn kind (&self) -> &'static str {
        match self {
            FirmsQuery::Country(_) => "country",
            FirmsQuery::Area(_) => "area",
        }
    }

    /// the request URL path element that selects the data
    pub fn path_element (&self) -> String {
        match self {
            FirmsQuery::Country(iso3) => iso3.clone(),
            FirmsQuery::Area(r) => format!("{},{},{},{}", r.west(), r.south(), r.east(), r.north()),
        }
    }

    /// every valid CSV response body starts with this
    pub fn expected_header (&self) -> &'static str {
        match self {
            FirmsQuery::Country(_) => "country_id,latitude,longitude",
            FirmsQuery::Area(_) => "latitude,longitude",
        }
    }

    /// a file system friendly name for the query
    pub fn file_name_element (&self) -> String {
        match self {
            FirmsQuery::Country(iso3) => iso3.clone(),
            FirmsQuery::Area(r) => format!("{}_{}_{}_{}", r.west(), r.south(), r.east(), r.north()),
        }
    }
}

impl fmt::Display for FirmsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FirmsQuery::Country(iso3) => write!(f, "country {iso3}"),
            FirmsQuery::Area(r) => write!(f, "area {r}"),
        }
    }
}
