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

use serde::{Serialize,Deserialize};

/// the parameters of the burn scar validation algorithm. They can be set per call so that thresholds
/// can be tuned without changing code
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ValidationParams {
    /// half side length in meters of the square area of interest around the detection
    pub buffer_distance: f64,

    /// we look for scenes within `acq_date ± days_around`
    pub days_around: u32,

    /// scenes with this or a higher cloud cover percentage are ignored
    pub max_cloudy_percentage: f64,

    /// a burn scar is detected if there are more burnt pixels than this
    pub burnt_pixel_count_threshold: u64,

    /// max NBR of burnt pixels in the after-scene
    pub nbr_after_lte: f64,

    /// min NBR decrease of burnt pixels
    pub nbr_difference_limit: f64,
}

impl Default for ValidationParams {
    fn default() -> Self {
        ValidationParams {
            buffer_distance: 1000.0,
            days_around: 30,
            max_cloudy_percentage: 20.0,
            burnt_pixel_count_threshold: 10,
            nbr_after_lte: -0.10,
            nbr_difference_limit: 0.15,
        }
    }
}

/// configuration for batch validation runs (`validation.ron`)
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub params: ValidationParams,

    /// max number of concurrent validations. This has to stay below the number of concurrent requests
    /// the imagery service allows
    pub max_workers: usize,

    /// we only count building footprints with at least this confidence
    pub building_min_confidence: f64,

    /// how many days after the detection we re-try detections that had no (cloud free) imagery
    pub retry_days: i64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        ValidationConfig {
            params: ValidationParams::default(),
            max_workers: 10,
            building_min_confidence: 0.75,
            retry_days: 14,
        }
    }
}
