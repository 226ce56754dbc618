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

use std::fmt;
use serde::{Serialize,Deserialize};

/// what the FIRMS `mapkey_status` endpoint reports about a map key
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct MapKeyStatus {
    pub transaction_limit: u32,
    pub current_transactions: u32,
    #[serde(default)]
    pub transaction_interval: String,
}

/// our local view of the FIRMS transaction budget. FIRMS uses a rolling window so we can't compute
/// when transactions become available again, we only can ask the server.
/// The initial state is "exhausted" so that we always obtain the server state before the first request
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct RateLimitState {
    pub limit: u32,
    pub used: u32,
    pub interval: String,
}

impl Default for RateLimitState {
    fn default() -> Self {
        RateLimitState { limit: 0, used: 5000, interval: "10 minutes".to_string() }
    }
}

impl RateLimitState {
    /// can be negative if the server counted more transactions than the limit
    pub fn remaining (&self) -> i64 {
        self.limit as i64 - self.used as i64
    }

    /// true if we can issue a request and still keep `margin` transactions in reserve
    pub fn can_proceed (&self, margin: u32) -> bool {
        (self.used as i64) < (self.limit as i64) - (margin as i64)
    }

    pub fn update (&mut self, status: MapKeyStatus) {
        self.limit = status.transaction_limit;
        self.used = status.current_transactions;
        self.interval = status.transaction_interval;
    }
}

impl fmt::Display for RateLimitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.used, self.limit, self.interval)
    }
}
