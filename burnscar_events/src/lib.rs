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

//! clustering of validated detections into fire events.
//!
//! VIIRS reports one detection per pixel and overpass, i.e. a single fire usually shows up as many
//! detections that share the same pixel geometry and/or follow each other over consecutive days.
//! An event is the transitive closure of both relations within an inclusion zone

use serde::{Serialize,Deserialize};

pub mod errors;
pub mod cluster;

pub use errors::{EventsError, Result};
pub use cluster::{ClusteredEvent, EventClusterer, EventDetection, read_detections_csv, write_events_csv};

burnscar_common::define_load_config!{}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// max number of days between consecutive detections of the same event
    pub max_date_gap: i64,
}

impl Default for EventsConfig {
    fn default() -> Self {
        EventsConfig { max_date_gap: 2 }
    }
}
