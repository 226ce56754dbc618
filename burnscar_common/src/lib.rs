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

//! shared infrastructure of the burnscar crates: error/log macros, config lookup,
//! retry support for remote calls, date helpers and the geometry types we exchange
//! between the fetch, validation and clustering stages

pub mod macros;
pub mod datetime;
pub mod geo;
pub mod net;
pub mod config;
pub mod log;

// a global fn that can be used with serde(skip_serializing_if="burnscar_common::is_none")
#[inline] pub fn is_none<T> (opt: &Option<T>)->bool { opt.is_none() }

/// mean earth radius in meters (spherical approximation, sufficient for AOI construction)
pub const EARTH_RADIUS: f64 = 6_371_008.8;
