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

use std::sync::Arc;
use chrono::NaiveDate;
use burnscar_common::{datetime::add_days, debug, geo::GeoRect};
use crate::{
    detection::FireDetection,
    errors::{imagery_error, raster_error, Result},
    imagery::{ImageryService, Scene, SceneQuery},
    params::ValidationParams,
    raster::{apply_mask, burn_mask, nbr_difference, scene_nbr, valid_pixel_count},
    result::ValidationResult,
    vectorize::{burnt_areas, intersecting_buildings},
};

/// the default confidence threshold for reference building footprints
pub const BUILDING_MIN_CONFIDENCE: f64 = 0.75;

/// validates single detections by comparing the NBR of the closest cloud free scenes before and
/// after the detection date
pub struct ValidationEngine<S: ImageryService> {
    imagery: Arc<S>,
    building_min_confidence: f64,
}

impl<S: ImageryService> ValidationEngine<S> {
    pub fn new (imagery: Arc<S>) -> Self {
        ValidationEngine { imagery, building_min_confidence: BUILDING_MIN_CONFIDENCE }
    }

    pub fn with_building_min_confidence (mut self, building_min_confidence: f64) -> Self {
        self.building_min_confidence = building_min_confidence;
        self
    }

    pub fn imagery (&self) -> &Arc<S> { &self.imagery }

    /// the full validation of one detection. Missing or cloudy imagery is not an error but a
    /// flagged result, errors are only returned for failed imagery requests or inconsistent rasters
    pub async fn validate (&self, detection: &FireDetection, params: &ValidationParams) -> Result<ValidationResult> {
        let firms_id = detection.id();
        let acq_date = detection.acq_date();

        let aoi = detection.aoi( params.buffer_distance);
        let area_bounds = detection.area_include_bounds()?;

        let days = params.days_around as i64;
        let query = SceneQuery::new( area_bounds, add_days( acq_date, -days), add_days( acq_date, days));

        let dates = self.imagery.scene_dates( &query).await?;
        if !imagery_available( &dates, acq_date) {
            debug!("no imagery around {} for detection {}", acq_date, firms_id);
            return Ok( ValidationResult::no_data( firms_id, acq_date))
        }

        let query = query.with_max_cloud_percentage( params.max_cloudy_percentage);
        let dates = self.imagery.scene_dates( &query).await?;
        if !imagery_available( &dates, acq_date) {
            debug!("no cloud free imagery around {} for detection {}", acq_date, firms_id);
            return Ok( ValidationResult::too_cloudy( firms_id, acq_date))
        }

        let (before, after) = nearest_surrounding_dates( acq_date, &dates)
            .ok_or_else( || imagery_error!("no scene dates for detection {}", firms_id))?;

        let before_scene = self.scene_for_date( &query, before, &aoi).await?;
        let after_scene = self.scene_for_date( &query, after, &aoi).await?;

        if before_scene.grid != after_scene.grid {
            return Err( raster_error!("scenes of {} and {} are not aligned: {:?} vs {:?}", before, after, before_scene.grid, after_scene.grid))
        }

        let before_nbr = scene_nbr( &before_scene)?;
        let after_nbr = scene_nbr( &after_scene)?;

        let difference = nbr_difference( &before_nbr, &after_nbr)?;
        let mask = burn_mask( &difference, &after_nbr, params.nbr_difference_limit, params.nbr_after_lte)?;
        let burnt = apply_mask( &difference, &mask)?;

        let grid = after_scene.grid;
        let areas = burnt_areas( &mask, &grid, &aoi);

        let buildings = self.imagery.buildings( &aoi, self.building_min_confidence).await?;
        let burnt_building_count = intersecting_buildings( &buildings, &areas).len() as u64;

        let burnt_pixel_count = valid_pixel_count( &burnt, &grid, &aoi);

        let result = ValidationResult::analysed( firms_id, acq_date, before, after,
                                                 burnt_pixel_count, burnt_building_count, params.burnt_pixel_count_threshold);
        debug!("detection {}: {} burnt pixels, {} burnt buildings ({} - {})", firms_id, burnt_pixel_count, burnt_building_count, before, after);
        Ok(result)
    }

    async fn scene_for_date (&self, query: &SceneQuery, date: NaiveDate, aoi: &GeoRect) -> Result<Scene> {
        self.imagery.first_scene( &query.on_date( date), aoi).await?
            .ok_or_else( || imagery_error!("no scene for {} covering {}", date, aoi))
    }
}

/// true if there is a scene strictly before and another one strictly after `target`
pub fn imagery_available (dates: &[NaiveDate], target: NaiveDate) -> bool {
    match (dates.iter().min(), dates.iter().max()) {
        (Some(min), Some(max)) => *min < target && target < *max,
        _ => false
    }
}

/// the latest date before and the earliest date after `target`. If there is no date on
/// one side we fall back to the min or max date. Returns None if there are no dates
pub fn nearest_surrounding_dates (target: NaiveDate, dates: &[NaiveDate]) -> Option<(NaiveDate,NaiveDate)> {
    let min = *dates.iter().min()?;
    let max = *dates.iter().max()?;

    let before = dates.iter().filter( |d| **d < target).max().copied().unwrap_or( min);
    let after = dates.iter().filter( |d| **d > target).min().copied().unwrap_or( max);

    Some( (before, after) )
}
