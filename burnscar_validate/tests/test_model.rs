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

use chrono::NaiveDate;
use geo::Point;
use burnscar_common::geo::GeoRect;
use burnscar_validate::{
    result::{read_results, write_results},
    errors::ValidateError,
    select_for_validation, FireDetection, ValidationConfig, ValidationOutcome, ValidationParams, ValidationResult,
};

// run with "cargo test test_model -- --nocapture"

fn date (s: &str) -> NaiveDate { NaiveDate::parse_from_str( s, "%Y-%m-%d").unwrap() }

fn detection (id: i64, d: &str) -> FireDetection {
    FireDetection::new( id, date(d), Point::new( 30.0, 13.0), GeoRect::from_wsen( 29.9, 12.9, 30.1, 13.1).to_polygon()).unwrap()
}

#[test]
fn test_detection_invariant() {
    let zone = GeoRect::from_wsen( 29.9, 12.9, 30.1, 13.1).to_polygon();

    let res = FireDetection::new( 1, date("2024-01-15"), Point::new( 31.0, 13.0), zone.clone());
    println!("outside: {res:?}");
    assert!( matches!( res, Err(ValidateError::InvalidDetection(_))));

    // on the boundary is not inside
    assert!( FireDetection::new( 1, date("2024-01-15"), Point::new( 29.9, 13.0), zone.clone()).is_err());

    let det = FireDetection::new( 1, date("2024-01-15"), Point::new( 30.0, 13.0), zone).unwrap();
    assert_eq!( det.area_include_bounds().unwrap(), GeoRect::from_wsen( 29.9, 12.9, 30.1, 13.1));

    let aoi = det.aoi( 1000.0);
    println!("AOI: {aoi}");
    assert!( aoi.contains_point( det.geom()));
}

#[test]
fn test_detection_from_geojson() {
    let point = r#"{ "type": "Point", "coordinates": [30.0, 13.0] }"#;
    let zone = r#"{ "type": "Feature", "properties": {}, "geometry": {
        "type": "Polygon", "coordinates": [[[29.9,12.9],[30.1,12.9],[30.1,13.1],[29.9,13.1],[29.9,12.9]]] } }"#;

    let det = FireDetection::from_geojson( 17, date("2024-01-15"), point, zone).unwrap();
    println!("{det:?}");
    assert_eq!( det.id(), 17);
    assert_eq!( det.geom().x(), 30.0);

    // wrong geometry types
    assert!( FireDetection::from_geojson( 17, date("2024-01-15"), zone, zone).is_err());
    assert!( matches!( FireDetection::from_geojson( 17, date("2024-01-15"), "{ nope", zone), Err(ValidateError::GeoJsonError(_))));
}

#[test]
fn test_result_outcomes() {
    let r = ValidationResult::no_data( 1, date("2024-01-15"));
    assert_eq!( r.outcome(), ValidationOutcome::NoData);
    assert!( r.before_date.is_none() && r.after_date.is_none() && r.burnt_pixel_count == 0);

    let r = ValidationResult::too_cloudy( 1, date("2024-01-15"));
    assert_eq!( r.outcome(), ValidationOutcome::TooCloudy);
    assert!( !r.no_data);

    let r = ValidationResult::analysed( 1, date("2024-01-15"), date("2024-01-10"), date("2024-01-20"), 11, 2, 10);
    assert_eq!( r.outcome(), ValidationOutcome::Analysed);
    assert!( r.burn_scar_detected);
    assert!( !r.is_inconclusive());

    let r = ValidationResult::analysed( 1, date("2024-01-15"), date("2024-01-10"), date("2024-01-20"), 10, 2, 10);
    assert!( !r.burn_scar_detected);
}

#[test]
fn test_result_csv() {
    let results = vec![
        ValidationResult::no_data( 1, date("2024-01-15")),
        ValidationResult::too_cloudy( 2, date("2024-01-16")),
        ValidationResult::analysed( 3, date("2024-01-17"), date("2024-01-10"), date("2024-01-20"), 25, 1, 10),
    ];

    let mut buf: Vec<u8> = Vec::new();
    write_results( &mut buf, &results).unwrap();
    let csv = String::from_utf8( buf.clone()).unwrap();
    println!("{csv}");
    assert!( csv.starts_with("firms_id,acq_date,before_date,after_date,"));
    assert!( csv.contains("1,2024-01-15,,,false,0,0,true,false"));

    let restored = read_results( buf.as_slice()).unwrap();
    assert_eq!( restored, results);
}

#[test]
fn test_selection() {
    let today = date("2024-02-01");
    let detections = vec![
        detection( 1, "2024-01-30"), // never validated
        detection( 2, "2024-01-30"), // validated
        detection( 3, "2024-01-25"), // no data, recent
        detection( 4, "2023-12-01"), // no data, too old
        detection( 5, "2024-01-18"), // too cloudy, exactly 14 days
    ];
    let previous = vec![
        ValidationResult::analysed( 2, date("2024-01-30"), date("2024-01-20"), date("2024-01-31"), 0, 0, 10),
        ValidationResult::no_data( 3, date("2024-01-25")),
        ValidationResult::no_data( 4, date("2023-12-01")),
        ValidationResult::too_cloudy( 5, date("2024-01-18")),
    ];

    let selected: Vec<i64> = select_for_validation( detections, &previous, today, 14).iter().map( |d| d.id()).collect();
    assert_eq!( selected, vec![1, 3, 5]);
}

#[test]
fn test_config() {
    let config: ValidationConfig = ron::from_str( "( max_workers: 4, params: ( days_around: 45 ) )").unwrap();
    println!("{config:#?}");
    assert_eq!( config.max_workers, 4);
    assert_eq!( config.params.days_around, 45);
    assert_eq!( config.params.nbr_difference_limit, 0.15);
    assert_eq!( config.building_min_confidence, 0.75);
    assert_eq!( config.retry_days, 14);
}
