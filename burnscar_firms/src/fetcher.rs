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

use std::{fs, path::PathBuf};
use chrono::NaiveDate;
use futures::FutureExt;
use burnscar_common::{datetime::date_range, debug, info, warn, net::{retry_with, RetryError}};
use crate::{
    errors::{FirmsError, Result},
    records::{parse_records, FirmsRecord},
    rate_limit::RateLimitState,
    transport::{FirmsTransport, HttpTransport},
    FirmsConfig, FirmsQuery,
};

/// a rate limited, retrying client that retrieves raw hotspot records for one day and area from FIRMS.
/// Each (query,date) is retrieved per configured satellite and the records are concatenated.
///
/// Before each request we make sure the map key has enough transactions left (waiting if it does not),
/// after each page we refresh our rate limit state (best effort) so that it reflects what we used
pub struct HotspotFetcher<T: FirmsTransport> {
    config: FirmsConfig,
    transport: T,
    rate_limits: RateLimitState,
}

impl HotspotFetcher<HttpTransport> {
    pub fn new (config: FirmsConfig) -> Result<Self> {
        let transport = HttpTransport::new( &config.status_url, config.request_timeout)?;
        Ok( HotspotFetcher::with_transport( config, transport) )
    }
}

impl<T: FirmsTransport> HotspotFetcher<T> {
    pub fn with_transport (config: FirmsConfig, transport: T) -> Self {
        HotspotFetcher { config, transport, rate_limits: RateLimitState::default() }
    }

    pub fn config (&self) -> &FirmsConfig { &self.config }

    pub fn rate_limits (&self) -> &RateLimitState { &self.rate_limits }

    pub fn transport (&self) -> &T { &self.transport }

    pub async fn refresh_rate_limits (&mut self) -> Result<()> {
        let status = self.transport.map_key_status( &self.config.map_key).await?;
        self.rate_limits.update( status);
        debug!("rate limits: {}", self.rate_limits);
        Ok(())
    }

    /// block until the map key has more than `min_remaining` transactions left.
    /// This always asks the server first since other clients might share the map key, and
    /// FIRMS uses a rolling window so all we can do is to poll
    pub async fn wait_for_capacity (&mut self) -> Result<()> {
        let margin = self.config.min_remaining;

        self.refresh_rate_limits().await?;
        while !self.rate_limits.can_proceed( margin) {
            info!("rate limit exceeded, waiting for {:?}. {}", self.config.rate_limit_wait, self.rate_limits);
            tokio::time::sleep( self.config.rate_limit_wait).await;
            self.refresh_rate_limits().await?;
        }
        Ok(())
    }

    /// according to https://firms.modaps.eosdis.nasa.gov/api/country/ and https://firms.modaps.eosdis.nasa.gov/api/area/
    ///   [BASE_URL]/api/[country|area]/csv/[MAP_KEY]/[SOURCE]/[COUNTRY|AREA_COORDINATES]/[DAY_RANGE]/[DATE]
    /// We always retrieve single days
    pub fn request_url (&self, query: &FirmsQuery, satellite: &str, date: NaiveDate) -> String {
        format!("{}/api/{}/csv/{}/{}/{}/1/{}",
            self.config.base_url, query.kind(), self.config.map_key, self.config.source( satellite), query.path_element(), date)
    }

    fn cache_path (&self, query: &FirmsQuery, satellite: &str, date: NaiveDate) -> Option<PathBuf> {
        self.config.cache_dir.as_ref().map( |dir| {
            dir.join( format!("{}_{}_{}.csv", self.config.source( satellite), query.file_name_element(), date))
        })
    }

    /// one attempt to retrieve a CSV page
    async fn fetch_page (&mut self, query: &FirmsQuery, date: NaiveDate, satellite: &str) -> Result<String> {
        self.wait_for_capacity().await?;

        info!("fetching {} data for {} on {}", self.config.source( satellite), query, date);
        let url = self.request_url( query, satellite, date);
        let body = self.transport.get_csv( &url).await?;

        if !body.starts_with( query.expected_header()) {
            let excerpt: String = body.chars().take(80).collect();
            return Err( FirmsError::InvalidResponse( excerpt))
        }

        Ok(body)
    }

    /// retrieve the raw CSV body for a given query, date and satellite, retrying transient
    /// failures according to the configured retry policy
    pub async fn fetch_raw (&mut self, query: &FirmsQuery, date: NaiveDate, satellite: &str) -> Result<String> {
        let policy = self.config.retry.clone();

        let res = retry_with( &policy, FirmsError::is_transient, self, |this, _attempt| {
            let query = query.clone();
            let satellite = satellite.to_string();
            async move { this.fetch_page( &query, date, &satellite).await }.boxed()
        }).await;

        match res {
            Ok(body) => {
                if let Some(path) = self.cache_path( query, satellite, date) {
                    if let Some(dir) = path.parent() { fs::create_dir_all( dir)?; }
                    fs::write( &path, &body)?;
                }
                Ok(body)
            }
            Err(RetryError::Exhausted{attempts, source}) => {
                Err( FirmsError::FetchFailed( format!("{} {} on {} after {} attempts: {}", self.config.source(satellite), query, date, attempts, source)))
            }
            Err(RetryError::Fatal(e)) => Err(e)
        }
    }

    /// fetch and parse all records for `query` on `date` from the configured satellites
    pub async fn fetch (&mut self, query: &FirmsQuery, date: NaiveDate) -> Result<Vec<FirmsRecord>> {
        let satellites = self.config.satellites.clone();
        self.fetch_satellites( query, date, &satellites).await
    }

    /// the satellites of a constellation produce the same format, so we can just concatenate records
    pub async fn fetch_satellites (&mut self, query: &FirmsQuery, date: NaiveDate, satellites: &[String]) -> Result<Vec<FirmsRecord>> {
        let mut records = Vec::new();

        for satellite in satellites {
            let body = self.fetch_raw( query, date, satellite).await?;

            // the next request refreshes anyway, a failure here must not discard the page
            if let Err(e) = self.refresh_rate_limits().await {
                warn!("rate limit refresh after {} page failed: {}", satellite, e);
            }

            let mut recs = parse_records( &body)?;
            debug!("{} records from {} for {} on {}", recs.len(), satellite, query, date);
            records.append( &mut recs);
        }

        Ok(records)
    }

    /// fetch each day in the inclusive `start..=end` range (an empty list if `end < start`)
    pub async fn fetch_range (&mut self, query: &FirmsQuery, start: NaiveDate, end: NaiveDate) -> Result<Vec<(NaiveDate,Vec<FirmsRecord>)>> {
        let mut days = Vec::new();
        for date in date_range( start, end) {
            let records = self.fetch( query, date).await?;
            days.push( (date, records));
        }
        Ok(days)
    }
}
