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

use geo::{polygon, MultiPolygon, Point};
use burnscar_common::geo::*;

// run with "cargo test test_geo -- --nocapture"

#[test]
fn test_geo_point_serde() {
    let input = r#"{ "longitude": -122.0, "latitude": 37.0 }"#;
    let p: GeoPoint = serde_json::from_str(&input).unwrap();
    println!("deserialized GeoPoint: {p:?}");
    assert_eq!( p.longitude_degrees(), -122.0);

    let input = r#"{ "x": 10.5, "y": -3.25 }"#;
    let p: GeoPoint = serde_json::from_str(&input).unwrap();
    assert_eq!( p.latitude_degrees(), -3.25);

    let s = serde_json::to_string(&p).unwrap();
    println!("serialized GeoPoint: '{s}'");
    assert_eq!( s, r#"{"lon":10.5,"lat":-3.25}"#);

    assert_eq!( normalize_180( 190.0), -170.0);
}

#[test]
fn test_square_aoi() {
    let center = GeoPoint::from_lon_lat_degrees( 10.0, 0.0);
    let aoi = GeoRect::around( &center, 1000.0);
    println!("AOI at equator: {aoi}");

    // 1km at the equator is about 0.009 degrees in both directions
    assert!( (aoi.height_degrees() - 2.0 * 0.008993).abs() < 1e-5);
    assert!( (aoi.width_degrees() - aoi.height_degrees()).abs() < 1e-9);
    assert!( aoi.contains_point( center.point()));

    // going north, the longitude extent grows
    let north = GeoRect::around( &GeoPoint::from_lon_lat_degrees( 10.0, 60.0), 1000.0);
    println!("AOI at 60N: {north}");
    assert!( (north.width_degrees() - 2.0 * aoi.width_degrees()).abs() < 1e-4);
    assert!( (north.height_degrees() - aoi.height_degrees()).abs() < 1e-9);
}

#[test]
fn test_rect_ops() {
    let a = GeoRect::from_wsen( 0.0, 0.0, 2.0, 2.0);
    let b = GeoRect::from_wsen( 1.0, 1.0, 3.0, 3.0);
    let c = GeoRect::from_wsen( 5.0, 5.0, 6.0, 6.0);

    assert!( a.intersects(&b));
    assert!( !a.intersects(&c));
    assert_eq!( a.intersection(&b), Some( GeoRect::from_wsen( 1.0, 1.0, 2.0, 2.0)));
    assert_eq!( a.intersection(&c), None);

    let s = serde_json::to_string(&a).unwrap();
    println!("serialized GeoRect: '{s}'");
    let a1: GeoRect = serde_json::from_str(&s).unwrap();
    assert_eq!( a, a1);

    let poly = polygon![ (x: 1.0, y: 2.0), (x: 4.0, y: 2.0), (x: 4.0, y: 5.0), (x: 1.0, y: 2.0) ];
    let bounds = GeoRect::bounds_of( &poly).unwrap();
    assert_eq!( bounds, GeoRect::from_wsen( 1.0, 2.0, 4.0, 5.0));
}

#[test]
fn test_wkt() {
    let p = Point::new( 10.0, 20.5);
    assert_eq!( p.to_wkt(), "POINT (10 20.5)");

    let poly = polygon![ (x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 0.0) ];
    let wkt = poly.to_wkt();
    println!("polygon: {wkt}");
    assert_eq!( wkt, "POLYGON ((0 0, 1 0, 1 1, 0 0))");

    let mp = MultiPolygon::new( vec![ poly.clone(), poly.clone()]);
    assert_eq!( mp.to_wkt(), "MULTIPOLYGON (((0 0, 1 0, 1 1, 0 0)), ((0 0, 1 0, 1 1, 0 0)))");
    assert_eq!( MultiPolygon::<f64>::new( vec![]).to_wkt(), "MULTIPOLYGON EMPTY");

    // identical vertices give identical keys, anything else does not
    let other = polygon![ (x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0000001), (x: 0.0, y: 0.0) ];
    assert_eq!( poly.to_wkt(), poly.clone().to_wkt());
    assert_ne!( poly.to_wkt(), other.to_wkt());
}
