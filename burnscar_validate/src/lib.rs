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

//! validation of fire detections as burn scars by comparing the Normalized Burn Ratio (NBR) of
//! satellite imagery from before and after the detection date.
//!
//! The imagery itself is provided by an [`imagery::ImageryService`], which only has to deliver scene
//! dates, clipped NIR/SWIR rasters and building footprints. All analysis (band algebra, masking,
//! vectorization, spatial joins and pixel counting) happens locally in [`raster`] and [`vectorize`]

pub mod errors;
pub mod detection;
pub mod params;
pub mod result;
pub mod imagery;
pub mod memory;
pub mod mask;
pub mod raster;
pub mod vectorize;
pub mod engine;
pub mod orchestrator;
pub mod selection;

pub use errors::{ValidateError, Result};
pub use detection::FireDetection;
pub use params::{ValidationParams, ValidationConfig};
pub use result::{ValidationResult, ValidationOutcome, read_results_csv, write_results_csv};
pub use imagery::{Building, ImageryService, RasterGrid, Scene, SceneQuery};
pub use memory::MemoryImagery;
pub use engine::ValidationEngine;
pub use orchestrator::ValidationOrchestrator;
pub use selection::select_for_validation;

burnscar_common::define_load_config!{}
