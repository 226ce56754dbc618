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

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use burnscar_common::net::get_text;
use crate::{errors::Result, rate_limit::MapKeyStatus};

/// the remote operations we need from FIRMS. This is the seam that allows to run fetchers
/// without network access
#[async_trait]
pub trait FirmsTransport: Send + Sync {
    /// current rate limit usage of `map_key`
    async fn map_key_status (&self, map_key: &str) -> Result<MapKeyStatus>;

    /// the (unchecked) CSV body of a data request
    async fn get_csv (&self, url: &str) -> Result<String>;
}

/// the production transport that talks to the FIRMS server over HTTP
pub struct HttpTransport {
    client: Client,
    status_url: String,
}

impl HttpTransport {
    pub fn new (status_url: impl ToString, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout( timeout).build()?;
        Ok( HttpTransport { client, status_url: status_url.to_string() } )
    }
}

#[async_trait]
impl FirmsTransport for HttpTransport {
    async fn map_key_status (&self, map_key: &str) -> Result<MapKeyStatus> {
        let url = format!("{}?MAP_KEY={}", self.status_url, map_key);
        let body = get_text( &self.client, &url).await?;
        Ok( serde_json::from_str( &body)? )
    }

    async fn get_csv (&self, url: &str) -> Result<String> {
        Ok( get_text( &self.client, url).await? )
    }
}
