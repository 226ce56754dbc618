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

use burnscar_common::map_to_opaque_error;

burnscar_common::define_error!{ pub ValidateError = 
    IOError( #[from] std::io::Error) : "IO error: {0}",
    CsvError( #[from] csv::Error) : "CSV error: {0}",
    JsonError( #[from] serde_json::Error) : "JSON error: {0}",
    GeoJsonError(String) : "GeoJSON error: {0}",
    InvalidDetection(String) : "invalid detection: {0}",
    ImageryError(String) : "imagery error: {0}",
    RasterError(String) : "raster error: {0}",
    OpFailed(String) : "operation failed: {0}",
}

map_to_opaque_error!( geojson::Error => ValidateError::GeoJsonError);

pub type Result<T> = std::result::Result<T, ValidateError>;

macro_rules! imagery_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::ValidateError::ImageryError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use imagery_error;

macro_rules! raster_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::ValidateError::RasterError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use raster_error;
