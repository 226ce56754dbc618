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

//! per-pixel band algebra of the burn scar analysis.
//! Invalid pixels (no data or zero reflectance sums) are NaN and never end up in a burn mask

use ndarray::{Array2, Zip};
use burnscar_common::geo::GeoRect;
use crate::{errors::{raster_error, Result}, imagery::{RasterGrid, Scene}, mask::Mask};

fn check_shapes (a: &Array2<f64>, b: &Array2<f64>) -> Result<()> {
    if a.dim() == b.dim() { Ok(()) } else { Err( raster_error!("incompatible raster shapes {:?} and {:?}", a.dim(), b.dim())) }
}

/// Normalized Burn Ratio `(NIR - SWIR) / (NIR + SWIR)`
pub fn nbr (nir: &Array2<f64>, swir: &Array2<f64>) -> Result<Array2<f64>> {
    check_shapes( nir, swir)?;
    Ok( Zip::from( nir).and( swir).map_collect( |&n, &s| {
        let sum = n + s;
        if sum == 0.0 { f64::NAN } else { (n - s) / sum }
    }))
}

pub fn scene_nbr (scene: &Scene) -> Result<Array2<f64>> {
    nbr( &scene.nir, &scene.swir)
}

/// `before - after`, i.e. positive values are NBR decreases
pub fn nbr_difference (before: &Array2<f64>, after: &Array2<f64>) -> Result<Array2<f64>> {
    check_shapes( before, after)?;
    Ok( before - after )
}

/// pixels with `difference >= difference_limit` and `after <= after_lte`
pub fn burn_mask (difference: &Array2<f64>, after: &Array2<f64>, difference_limit: f64, after_lte: f64) -> Result<Mask> {
    check_shapes( difference, after)?;
    let (height, width) = difference.dim();
    Ok( Mask::from_fn( width, height, |row,col| {
        difference[[row,col]] >= difference_limit && after[[row,col]] <= after_lte
    }))
}

/// the difference raster with all pixels outside of `mask` set to NaN
pub fn apply_mask (values: &Array2<f64>, mask: &Mask) -> Result<Array2<f64>> {
    let (height, width) = values.dim();
    if mask.dimensions() != (width,height) {
        return Err( raster_error!("mask does not match raster shape {:?}", values.dim()))
    }
    Ok( Array2::from_shape_fn( (height,width), |(row,col)| {
        if mask.get( row, col) { values[[row,col]] } else { f64::NAN }
    }))
}

/// number of valid (non-NaN) pixels inside of `region`
pub fn valid_pixel_count (values: &Array2<f64>, grid: &RasterGrid, region: &GeoRect) -> u64 {
    values.indexed_iter()
        .filter( |((row,col),v)| !v.is_nan() && grid.pixel_in( region, *row, *col))
        .count() as u64
}
