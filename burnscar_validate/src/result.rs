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

use std::{io, path::Path};
use chrono::NaiveDate;
use serde::{Serialize,Deserialize};
use crate::errors::Result;

/// the result of validating one detection.
/// Exactly one of `no_data`, `too_cloudy` or an analysed result holds. Results that are flagged
/// have zero counts and no scene dates
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct ValidationResult {
    pub firms_id: i64,
    pub acq_date: NaiveDate,
    pub before_date: Option<NaiveDate>,
    pub after_date: Option<NaiveDate>,
    pub burn_scar_detected: bool,
    pub burnt_pixel_count: u64,
    pub burnt_building_count: u64,
    pub no_data: bool,
    pub too_cloudy: bool,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum ValidationOutcome {
    NoData,
    TooCloudy,
    Analysed,
}

impl ValidationResult {
    fn empty (firms_id: i64, acq_date: NaiveDate) -> Self {
        ValidationResult {
            firms_id, acq_date,
            before_date: None, after_date: None,
            burn_scar_detected: false, burnt_pixel_count: 0, burnt_building_count: 0,
            no_data: false, too_cloudy: false
        }
    }

    /// no imagery that brackets the detection date
    pub fn no_data (firms_id: i64, acq_date: NaiveDate) -> Self {
        ValidationResult { no_data: true, ..Self::empty( firms_id, acq_date) }
    }

    /// imagery exists but not enough of it is cloud free
    pub fn too_cloudy (firms_id: i64, acq_date: NaiveDate) -> Self {
        ValidationResult { too_cloudy: true, ..Self::empty( firms_id, acq_date) }
    }

    pub fn analysed (firms_id: i64, acq_date: NaiveDate, before_date: NaiveDate, after_date: NaiveDate,
                     burnt_pixel_count: u64, burnt_building_count: u64, burnt_pixel_count_threshold: u64) -> Self {
        ValidationResult {
            before_date: Some(before_date),
            after_date: Some(after_date),
            burnt_pixel_count,
            burnt_building_count,
            burn_scar_detected: burnt_pixel_count > burnt_pixel_count_threshold,
            ..Self::empty( firms_id, acq_date)
        }
    }

    pub fn outcome (&self) -> ValidationOutcome {
        if self.no_data { ValidationOutcome::NoData }
        else if self.too_cloudy { ValidationOutcome::TooCloudy }
        else { ValidationOutcome::Analysed }
    }

    /// true if this result might change if we validate again later
    pub fn is_inconclusive (&self) -> bool {
        self.no_data || self.too_cloudy
    }
}

pub fn write_results<W: io::Write> (writer: W, results: &[ValidationResult]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer( writer);
    for r in results {
        csv_writer.serialize( r)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn read_results<R: io::Read> (reader: R) -> Result<Vec<ValidationResult>> {
    let mut csv_reader = csv::Reader::from_reader( reader);
    let mut results = Vec::new();
    for res in csv_reader.deserialize() {
        results.push( res?);
    }
    Ok(results)
}

/// store results as CSV. Missing scene dates are empty fields
pub fn write_results_csv (path: impl AsRef<Path>, results: &[ValidationResult]) -> Result<()> {
    write_results( std::fs::File::create( path)?, results)
}

pub fn read_results_csv (path: impl AsRef<Path>) -> Result<Vec<ValidationResult>> {
    read_results( std::fs::File::open( path)?)
}
