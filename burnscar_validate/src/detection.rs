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

use std::str::FromStr;
use chrono::NaiveDate;
use geo::{Contains, Geometry, Point, Polygon};
use geojson::GeoJson;
use burnscar_common::geo::{GeoPoint, GeoRect};
use crate::errors::{Result, ValidateError};

/// a hotspot detection that fell into an inclusion zone. The detection point has to be
/// inside (not on the boundary of) the inclusion zone polygon, which is checked on construction
#[derive(Debug,Clone,PartialEq)]
pub struct FireDetection {
    id: i64,
    acq_date: NaiveDate,
    geom: Point,
    area_include_geom: Polygon,
}

impl FireDetection {
    pub fn new (id: i64, acq_date: NaiveDate, geom: Point, area_include_geom: Polygon) -> Result<Self> {
        if area_include_geom.contains( &geom) {
            Ok( FireDetection { id, acq_date, geom, area_include_geom } )
        } else {
            Err( ValidateError::InvalidDetection( format!("detection {} at {:?} is not inside its inclusion zone", id, geom.x_y())))
        }
    }

    /// build a detection from GeoJSON geometries (or features) of the point and the inclusion zone
    pub fn from_geojson (id: i64, acq_date: NaiveDate, point: &str, area_include: &str) -> Result<Self> {
        let geom = match parse_geometry( point)? {
            Geometry::Point(p) => p,
            _ => return Err( ValidateError::InvalidDetection( format!("detection {id} location is not a point")))
        };
        let area_include_geom = match parse_geometry( area_include)? {
            Geometry::Polygon(p) => p,
            Geometry::MultiPolygon(mut mp) if mp.0.len() == 1 => mp.0.remove(0),
            _ => return Err( ValidateError::InvalidDetection( format!("detection {id} inclusion zone is not a polygon")))
        };

        FireDetection::new( id, acq_date, geom, area_include_geom)
    }

    #[inline] pub fn id (&self) -> i64 { self.id }
    #[inline] pub fn acq_date (&self) -> NaiveDate { self.acq_date }
    #[inline] pub fn geom (&self) -> &Point { &self.geom }
    #[inline] pub fn area_include_geom (&self) -> &Polygon { &self.area_include_geom }

    pub fn location (&self) -> GeoPoint { GeoPoint::from_point( self.geom) }

    /// the square area of interest around the detection
    pub fn aoi (&self, buffer_distance: f64) -> GeoRect {
        GeoRect::around( &self.location(), buffer_distance)
    }

    /// the bounds of the inclusion zone, which is what we search imagery for
    pub fn area_include_bounds (&self) -> Result<GeoRect> {
        GeoRect::bounds_of( &self.area_include_geom)
            .ok_or_else( || ValidateError::InvalidDetection( format!("detection {} has an empty inclusion zone", self.id)))
    }
}

fn parse_geometry (s: &str) -> Result<Geometry> {
    let geometry = match GeoJson::from_str( s)? {
        GeoJson::Geometry(g) => g,
        GeoJson::Feature(f) => f.geometry.ok_or_else( || ValidateError::GeoJsonError( "feature without geometry".to_string()))?,
        GeoJson::FeatureCollection(_) => return Err( ValidateError::GeoJsonError( "expected a single geometry".to_string()))
    };
    Ok( geometry.try_into()? )
}
