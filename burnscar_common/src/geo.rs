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

//! the geometry wrappers we exchange between burnscar crates.
//! We use the [geo](https://docs.rs/geo/latest/geo/index.html) crate types underneath and only add
//! geodetic degree semantics, square areas of interest around detections and a canonical WKT
//! representation that is used as geometry identity key

use std::fmt::{self, Write};
use serde::{Serialize, Deserialize, Serializer, Deserializer};
use geo::{BoundingRect, Coord, Intersects, LineString, MultiPolygon, Point, Polygon, Rect};
use crate::EARTH_RADIUS;

pub type GeoCoord = Coord<f64>;

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees stored as f64 (x = longitude, y = latitude)
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint( Point::new( normalize_180(lon), lat.clamp(-90.0, 90.0)))
    }

    pub fn from_point (p: Point) -> Self { GeoPoint::from_lon_lat_degrees( p.x(), p.y()) }

    #[inline] pub fn longitude_degrees (&self) -> f64 { self.0.x() }
    #[inline] pub fn latitude_degrees (&self) -> f64 { self.0.y() }

    pub fn point (&self) -> &Point { &self.0 }
    pub fn coord (&self) -> GeoCoord { self.0.0 }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.0.x(), self.0.y())
    }
}

impl From<GeoPoint> for Point {
    fn from (p: GeoPoint) -> Point { p.0 }
}

#[derive(Serialize,Deserialize)]
struct LonLat {
    #[serde(alias="longitude", alias="x")]
    lon: f64,
    #[serde(alias="latitude", alias="y")]
    lat: f64
}

impl Serialize for GeoPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        LonLat{ lon: self.longitude_degrees(), lat: self.latitude_degrees() }.serialize(serializer)
    }
}

// we support alternative field names ("lon"|"longitude"|"x", "lat"|"latitude"|"y") so that we
// can directly deserialize data that was serialized by `geo` types
impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        let ll = LonLat::deserialize(deserializer)?;
        Ok( GeoPoint::from_lon_lat_degrees( ll.lon, ll.lat))
    }
}

/* #endregion GeoPoint */

/* #region GeoRect ************************************************************************************************/

/// an axis aligned rectangle in geodetic degrees. We do not support rectangles crossing the antimeridian
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoRect(Rect);

impl GeoRect {
    pub fn from_wsen (west: f64, south: f64, east: f64, north: f64) -> Self {
        GeoRect( Rect::new( Coord{ x: west, y: south }, Coord{ x: east, y: north }))
    }

    pub fn from_min_max (sw: GeoPoint, ne: GeoPoint) -> Self {
        GeoRect( Rect::new( sw.coord(), ne.coord()))
    }

    /// the square area that results from buffering `center` by `distance` meters and taking the bounds
    /// of the buffer. This uses a spherical earth, which is accurate enough for the km-sized regions we analyze
    pub fn around (center: &GeoPoint, distance: f64) -> Self {
        let lat = center.latitude_degrees();
        let dlat = (distance / EARTH_RADIUS).to_degrees();
        let cos_lat = lat.to_radians().cos().abs().max(1e-9);
        let dlon = (distance / (EARTH_RADIUS * cos_lat)).to_degrees().min(180.0);

        let lon = center.longitude_degrees();
        GeoRect::from_wsen( lon - dlon, (lat - dlat).max(-90.0), lon + dlon, (lat + dlat).min(90.0))
    }

    /// bounding box of a polygon (None if the polygon has no coordinates)
    pub fn bounds_of (polygon: &Polygon) -> Option<Self> {
        polygon.bounding_rect().map( GeoRect)
    }

    pub fn bounds_of_multi (mp: &MultiPolygon) -> Option<Self> {
        mp.bounding_rect().map( GeoRect)
    }

    #[inline] pub fn west (&self)->f64 { self.0.min().x }
    #[inline] pub fn east (&self)->f64 { self.0.max().x }
    #[inline] pub fn south (&self)->f64 { self.0.min().y }
    #[inline] pub fn north (&self)->f64 { self.0.max().y }

    #[inline] pub fn width_degrees (&self)->f64 { self.east() - self.west() }
    #[inline] pub fn height_degrees (&self)->f64 { self.north() - self.south() }

    pub fn center (&self)->GeoPoint { GeoPoint::from_point( self.0.center().into()) }

    pub fn rect (&self) -> &Rect { &self.0 }

    pub fn to_polygon (&self) -> Polygon { self.0.to_polygon() }

    /// inclusive of the boundary, unlike `geo::Contains`
    pub fn contains_point (&self, p: &Point) -> bool {
        p.x() >= self.west() && p.x() <= self.east() && p.y() >= self.south() && p.y() <= self.north()
    }

    pub fn intersects (&self, other: &GeoRect) -> bool {
        self.0.intersects( &other.0)
    }

    /// the overlapping part of two rectangles, if any
    pub fn intersection (&self, other: &GeoRect) -> Option<GeoRect> {
        let west = self.west().max( other.west());
        let east = self.east().min( other.east());
        let south = self.south().max( other.south());
        let north = self.north().min( other.north());

        if west < east && south < north { Some( GeoRect::from_wsen( west, south, east, north)) } else { None }
    }
}

impl fmt::Display for GeoRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{},{}]", self.west(), self.south(), self.east(), self.north())
    }
}

#[derive(Serialize,Deserialize)]
struct Wsen { west: f64, south: f64, east: f64, north: f64 }

impl Serialize for GeoRect {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        Wsen{ west: self.west(), south: self.south(), east: self.east(), north: self.north() }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GeoRect {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        let r = Wsen::deserialize(deserializer)?;
        Ok( GeoRect::from_wsen( r.west, r.south, r.east, r.north))
    }
}

/* #endregion GeoRect */

/* #region WKT ****************************************************************************************************/

/// canonical (shapely compatible) well-known-text output.
/// Two geometries map to the same WKT string iff they have the same vertices in the same order,
/// which is why we can use it as a geometry identity key
pub trait ToWkt {
    fn write_wkt (&self, buf: &mut String);

    fn to_wkt (&self) -> String {
        let mut buf = String::with_capacity(64);
        self.write_wkt( &mut buf);
        buf
    }
}

fn write_coords (buf: &mut String, ls: &LineString) {
    buf.push('(');
    for (i,c) in ls.coords().enumerate() {
        if i > 0 { buf.push_str(", ") }
        let _ = write!( buf, "{} {}", c.x, c.y);
    }
    buf.push(')');
}

fn write_polygon_body (buf: &mut String, polygon: &Polygon) {
    buf.push('(');
    write_coords( buf, polygon.exterior());
    for ring in polygon.interiors() {
        buf.push_str(", ");
        write_coords( buf, ring);
    }
    buf.push(')');
}

impl ToWkt for Point {
    fn write_wkt (&self, buf: &mut String) {
        let _ = write!( buf, "POINT ({} {})", self.x(), self.y());
    }
}

impl ToWkt for Polygon {
    fn write_wkt (&self, buf: &mut String) {
        if self.exterior().0.is_empty() {
            buf.push_str("POLYGON EMPTY");
        } else {
            buf.push_str("POLYGON ");
            write_polygon_body( buf, self);
        }
    }
}

impl ToWkt for MultiPolygon {
    fn write_wkt (&self, buf: &mut String) {
        if self.0.is_empty() {
            buf.push_str("MULTIPOLYGON EMPTY");
        } else {
            buf.push_str("MULTIPOLYGON (");
            for (i,p) in self.0.iter().enumerate() {
                if i > 0 { buf.push_str(", ") }
                write_polygon_body( buf, p);
            }
            buf.push(')');
        }
    }
}

impl ToWkt for GeoRect {
    fn write_wkt (&self, buf: &mut String) {
        self.to_polygon().write_wkt( buf)
    }
}

/* #endregion WKT */

/// normalize longitude degrees into [-180,180]
pub fn normalize_180 (lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        let x = (lon + 180.0).rem_euclid(360.0) - 180.0;
        if x == -180.0 && lon > 0.0 { 180.0 } else { x }
    }
}
