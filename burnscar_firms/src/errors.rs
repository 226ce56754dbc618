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

use burnscar_common::net::NetError;

burnscar_common::define_error!{ pub FirmsError = 
    IOError( #[from] std::io::Error) : "IO error: {0}",
    HttpError( #[from] reqwest::Error) : "http error: {0}",
    NetError( #[from] NetError) : "network error: {0}",
    CsvError( #[from] csv::Error) : "CSV error: {0}",
    JsonError( #[from] serde_json::Error) : "JSON error: {0}",
    InvalidResponse(String) : "invalid response: {0}",
    ParseError(String) : "parse error: {0}",
    FetchFailed(String) : "fetch failed: {0}",
    OpFailed(String) : "operation failed: {0}",
}

pub type Result<T> = std::result::Result<T, FirmsError>;

impl FirmsError {
    /// errors that might go away if we try again later (server hiccups, rate limit pages,
    /// truncated responses). Malformed records are not transient
    pub fn is_transient (&self) -> bool {
        matches!( self, FirmsError::HttpError(_) | FirmsError::NetError(_) | FirmsError::JsonError(_) | FirmsError::InvalidResponse(_))
    }
}

macro_rules! parse_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::FirmsError::ParseError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use parse_error;
