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

//! RON config file lookup.
//! Config files are resolved per crate so that different crates can use the same filename
//! (e.g. a test and a production `firms.ron`) without clashing

use std::{env, fs, path::{Path,PathBuf}};
use serde::Deserialize;
use crate::define_error;

/// env var that points to the root of our config tree
pub const CONFIGS_ENV: &str = "BURNSCAR_CONFIGS";

/// relative dir name that is used if the env var is not set
pub const CONFIGS: &str = "configs";

define_error!{ pub ConfigError = 
    IOError(#[from] std::io::Error) : "IO error: {0}",
    RonError(#[from] ron::error::SpannedError) : "RON error: {0}",
    NotFoundError(String) : "config file not found: {0}"
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// find a config file for a given crate, checking in order
///   - `$BURNSCAR_CONFIGS/<crate>/<filename>`
///   - `./configs/<crate>/<filename>`
///   - `<filename>` (relative to cwd or absolute)
pub fn find_config_file (resource_crate: &str, filename: &str) -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::with_capacity(3);

    if let Ok(root) = env::var(CONFIGS_ENV) {
        candidates.push( Path::new(&root).join(resource_crate).join(filename));
    }
    candidates.push( Path::new(CONFIGS).join(resource_crate).join(filename));
    candidates.push( PathBuf::from(filename));

    candidates.into_iter().find( |p| p.is_file())
}

pub fn load_crate_config<C> (resource_crate: &str, filename: &str) -> Result<C> where C: for<'a> Deserialize<'a> {
    match find_config_file( resource_crate, filename) {
        Some(path) => load_config_file(&path),
        None => Err( ConfigError::NotFoundError( format!("{resource_crate}/{filename}")))
    }
}

pub fn load_config_file<C> (path: impl AsRef<Path>) -> Result<C> where C: for<'a> Deserialize<'a> {
    let src = fs::read_to_string( path)?;
    Ok( ron::from_str( &src)? )
}
