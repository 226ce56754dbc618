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
use burnscar_events::{cluster::{read_detections, write_events}, ClusteredEvent, EventClusterer, EventDetection, EventsConfig};
use burnscar_validate::ValidationResult;

// run with "cargo test test_cluster -- --nocapture"

fn date (s: &str) -> NaiveDate { NaiveDate::parse_from_str( s, "%Y-%m-%d").unwrap() }

fn det (firms_id: i64, d: &str, zone: i64, x: f64, y: f64) -> EventDetection {
    EventDetection::new( firms_id, date(d), zone, &Point::new( x, y))
}

#[test]
fn test_identical_geometry() {
    let detections = vec![
        det( 1, "2024-01-01", 1, 30.0, 13.0),
        det( 2, "2024-01-20", 1, 30.0, 13.0),  // same pixel, way later
        det( 3, "2024-01-10", 1, 31.0, 13.0),
    ];
    let event_nos = EventClusterer::new( 2).assign( &detections);
    println!("event numbers: {event_nos:?}");

    assert_eq!( event_nos[0], event_nos[1]);
    assert_ne!( event_nos[0], event_nos[2]);
    assert_eq!( event_nos, vec![1, 1, 2]);
}

#[test]
fn test_date_gap() {
    let merged = vec![ det( 1, "2024-01-01", 1, 30.0, 13.0), det( 2, "2024-01-02", 1, 30.1, 13.0) ];
    assert_eq!( EventClusterer::new( 2).assign( &merged), vec![1, 1]);

    let separate = vec![ det( 1, "2024-01-01", 1, 30.0, 13.0), det( 2, "2024-01-04", 1, 30.1, 13.0) ];
    assert_eq!( EventClusterer::new( 2).assign( &separate), vec![1, 2]);

    // gaps are between consecutive dates, so events can grow over longer periods
    let chain = vec![
        det( 1, "2024-01-01", 1, 30.0, 13.0),
        det( 2, "2024-01-03", 1, 30.1, 13.0),
        det( 3, "2024-01-05", 1, 30.2, 13.0),
        det( 4, "2024-01-09", 1, 30.3, 13.0),
    ];
    assert_eq!( EventClusterer::new( 2).assign( &chain), vec![1, 1, 1, 2]);
}

#[test]
fn test_zones_are_separate() {
    let detections = vec![
        det( 1, "2024-01-01", 1, 30.0, 13.0),
        det( 2, "2024-01-01", 2, 35.0, 13.0),
        det( 3, "2024-01-02", 2, 35.1, 13.0),
    ];
    let event_nos = EventClusterer::new( 2).assign( &detections);
    assert_eq!( event_nos, vec![1, 2, 2]);
}

#[test]
fn test_numbering_is_deterministic() {
    let detections = vec![
        det( 5, "2024-01-10", 1, 30.0, 13.0),
        det( 4, "2024-01-01", 3, 32.0, 13.0),
        det( 3, "2024-01-01", 2, 31.0, 13.0),
    ];
    let mut reversed = detections.clone();
    reversed.reverse();

    let clusterer = EventClusterer::new( 2);
    assert_eq!( clusterer.assign( &detections), vec![3, 2, 1]);
    assert_eq!( clusterer.assign( &reversed), vec![1, 2, 3]);
}

#[test]
fn test_cluster_table() {
    let detections = vec![
        det( 1, "2024-01-01", 1, 30.0, 13.0),
        det( 2, "2024-01-02", 1, 30.1, 13.0),
        det( 3, "2024-01-02", 1, 30.0, 13.0),
        det( 4, "2024-02-01", 1, 30.5, 13.0),
    ];
    let results = vec![
        ValidationResult::analysed( 1, date("2024-01-01"), date("2023-12-28"), date("2024-01-05"), 30, 2, 10),
        ValidationResult::analysed( 2, date("2024-01-02"), date("2023-12-28"), date("2024-01-05"), 5, 3, 10),
        ValidationResult::no_data( 3, date("2024-01-02")),
    ];

    let events = EventClusterer::from_config( &EventsConfig::default()).cluster( &detections, &results);
    println!("{events:#?}");
    assert_eq!( events.len(), 2);

    let e = &events[0];
    assert_eq!( (e.area_include_id, e.event_no), (1, 1));
    assert_eq!( e.firms_ids, vec![1, 2, 3]);
    assert_eq!( e.start_date, date("2024-01-01"));
    assert_eq!( e.end_date, date("2024-01-02"));
    assert_eq!( e.detection_count, 3);
    assert_eq!( e.burn_scar_count, 1);
    assert_eq!( e.burnt_pixel_count, 30); // the same scar seen by two detections
    assert_eq!( e.burnt_building_count, 3);

    let e = &events[1];
    assert_eq!( e.event_no, 2);
    assert_eq!( e.firms_ids, vec![4]);
    assert_eq!( e.burnt_pixel_count, 0); // not validated

    let mut buf: Vec<u8> = Vec::new();
    write_events( &mut buf, &events).unwrap();
    let csv = String::from_utf8( buf).unwrap();
    println!("{csv}");
    assert!( csv.contains("1,1,2024-01-01,2024-01-02,1;2;3,3,1,30,3"));
}

#[test]
fn test_same_pixel_on_different_days() {
    // two overpasses of the same pixel validate the same scar
    let detections = vec![ det( 1, "2024-01-01", 1, 30.0, 13.0), det( 2, "2024-01-09", 1, 30.0, 13.0) ];
    let results = vec![
        ValidationResult::analysed( 1, date("2024-01-01"), date("2023-12-28"), date("2024-01-05"), 25, 1, 10),
        ValidationResult::analysed( 2, date("2024-01-09"), date("2024-01-05"), date("2024-01-12"), 27, 1, 10),
    ];

    let events = EventClusterer::new( 2).cluster( &detections, &results);
    assert_eq!( events.len(), 1);
    assert_eq!( events[0].burn_scar_count, 2);
    assert_eq!( events[0].burnt_pixel_count, 27);
    assert_eq!( events[0].burnt_building_count, 1);
}

#[test]
fn test_read_detections() {
    let input = "firms_id,acq_date,area_include_id,geometry_wkt\n\
                 1,2024-01-01,7,\"POLYGON ((0 0, 1 0, 1 1, 0 0))\"\n\
                 2,2024-01-05,7,\"POLYGON ((0 0, 1 0, 1 1, 0 0))\"\n";
    let detections = read_detections( input.as_bytes()).unwrap();
    assert_eq!( detections.len(), 2);
    assert_eq!( detections[0].area_include_id, 7);
    assert_eq!( EventClusterer::new( 2).assign( &detections), vec![1, 1]);
}
