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

use chrono::NaiveDate;
use hashbrown::HashMap;
use burnscar_common::datetime::days_between;
use crate::{detection::FireDetection, result::ValidationResult};

/// pick the detections that need a (new) validation run: those that were never validated, and
/// those that had no usable imagery but are recent enough for late imagery to show up
pub fn select_for_validation (detections: Vec<FireDetection>, previous: &[ValidationResult], today: NaiveDate, retry_days: i64) -> Vec<FireDetection> {
    let previous: HashMap<i64,&ValidationResult> = previous.iter().map( |r| (r.firms_id, r)).collect();

    detections.into_iter().filter( |d| {
        match previous.get( &d.id()) {
            None => true,
            Some(r) => r.is_inconclusive() && days_between( d.acq_date(), today) <= retry_days
        }
    }).collect()
}
