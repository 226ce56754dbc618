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

use std::{io, path::Path};
use chrono::NaiveDate;
use hashbrown::HashMap;
use itertools::Itertools;
use serde::{Serialize, Deserialize, Serializer, Deserializer};
use burnscar_common::{datetime::days_between, geo::ToWkt};
use burnscar_validate::ValidationResult;
use crate::{errors::Result, EventsConfig};

/// a detection as it enters clustering: which inclusion zone it fell into and the WKT of its geometry
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct EventDetection {
    pub firms_id: i64,
    pub acq_date: NaiveDate,
    pub area_include_id: i64,
    pub geometry_wkt: String,
}

impl EventDetection {
    pub fn new (firms_id: i64, acq_date: NaiveDate, area_include_id: i64, geometry: &impl ToWkt) -> Self {
        EventDetection { firms_id, acq_date, area_include_id, geometry_wkt: geometry.to_wkt() }
    }

    fn sort_key (&self) -> (NaiveDate, i64, i64) {
        (self.acq_date, self.area_include_id, self.firms_id)
    }
}

/// one row of the clustered event table, keyed by (area_include_id, event_no)
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct ClusteredEvent {
    pub area_include_id: i64,
    pub event_no: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(serialize_with="ser_ids", deserialize_with="de_ids")]
    pub firms_ids: Vec<i64>,
    pub detection_count: usize,
    /// number of detections that were validated as burn scars
    pub burn_scar_count: usize,
    /// max over all validated detections. Detections of the same event look at the same scar,
    /// so summing would count burnt pixels once per detection
    pub burnt_pixel_count: u64,
    /// max over all validated detections (detections of the same event see the same buildings)
    pub burnt_building_count: u64,
}

/// disjoint set forest over detection indices
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new (n: usize) -> Self {
        UnionFind { parent: (0..n).collect(), rank: vec![0; n] }
    }

    fn find (&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root { root = self.parent[root] }

        let mut j = i;
        while self.parent[j] != root {
            let next = self.parent[j];
            self.parent[j] = root;
            j = next;
        }
        root
    }

    fn union (&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb { return }

        if self.rank[ra] < self.rank[rb] {
            self.parent[ra] = rb;
        } else if self.rank[ra] > self.rank[rb] {
            self.parent[rb] = ra;
        } else {
            self.parent[rb] = ra;
            self.rank[ra] += 1;
        }
    }
}

pub struct EventClusterer {
    max_date_gap: i64,
}

impl EventClusterer {
    pub fn new (max_date_gap: i64) -> Self {
        EventClusterer { max_date_gap }
    }

    pub fn from_config (config: &EventsConfig) -> Self {
        EventClusterer::new( config.max_date_gap)
    }

    /// the event number for each detection (in input order).
    /// Detections with identical geometry always share an event. Detections of the same inclusion
    /// zone that follow each other (by date) with no more than `max_date_gap` days in between are
    /// merged. Events are numbered from 1 in order of their earliest (date, zone, firms_id)
    pub fn assign (&self, detections: &[EventDetection]) -> Vec<u32> {
        let mut uf = UnionFind::new( detections.len());

        let mut by_geometry: HashMap<&str,usize> = HashMap::new();
        for (i,d) in detections.iter().enumerate() {
            match by_geometry.get( d.geometry_wkt.as_str()) {
                Some(&j) => uf.union( i, j),
                None => { by_geometry.insert( d.geometry_wkt.as_str(), i); }
            }
        }

        let mut by_zone: HashMap<i64,Vec<usize>> = HashMap::new();
        for (i,d) in detections.iter().enumerate() {
            by_zone.entry( d.area_include_id).or_default().push(i);
        }
        for members in by_zone.values_mut() {
            members.sort_by_key( |&i| (detections[i].acq_date, detections[i].firms_id));
            for (&a,&b) in members.iter().tuple_windows() {
                if days_between( detections[a].acq_date, detections[b].acq_date) <= self.max_date_gap {
                    uf.union( a, b);
                }
            }
        }

        // number events by their earliest member
        let mut first_member: HashMap<usize,usize> = HashMap::new();
        for i in 0..detections.len() {
            let root = uf.find(i);
            let first = first_member.entry( root).or_insert(i);
            if detections[i].sort_key() < detections[*first].sort_key() { *first = i }
        }

        let event_nos: HashMap<usize,u32> = first_member.into_iter()
            .sorted_by_key( |(_,first)| detections[*first].sort_key())
            .enumerate()
            .map( |(n,(root,_))| (root, n as u32 + 1))
            .collect();

        (0..detections.len()).map( |i| event_nos.get( &uf.find(i)).copied().unwrap_or_default()).collect()
    }

    /// the clustered event table, aggregating validation results of the events' detections
    /// (joined by firms_id). Rows are sorted by (event_no, area_include_id)
    pub fn cluster (&self, detections: &[EventDetection], results: &[ValidationResult]) -> Vec<ClusteredEvent> {
        let event_nos = self.assign( detections);
        let results: HashMap<i64,&ValidationResult> = results.iter().map( |r| (r.firms_id, r)).collect();

        let mut groups: HashMap<(u32,i64),Vec<&EventDetection>> = HashMap::new();
        for (d,&event_no) in detections.iter().zip( event_nos.iter()) {
            groups.entry( (event_no, d.area_include_id)).or_default().push(d);
        }

        groups.into_iter()
            .sorted_by_key( |(key,_)| *key)
            .filter_map( |((event_no, area_include_id), members)| {
                let start_date = members.iter().map( |d| d.acq_date).min()?;
                let end_date = members.iter().map( |d| d.acq_date).max()?;
                let firms_ids: Vec<i64> = members.iter().map( |d| d.firms_id).sorted().dedup().collect();

                let validated: Vec<&ValidationResult> = firms_ids.iter().filter_map( |id| results.get(id).copied()).collect();

                Some( ClusteredEvent {
                    area_include_id,
                    event_no,
                    start_date,
                    end_date,
                    detection_count: members.len(),
                    burn_scar_count: validated.iter().filter( |r| r.burn_scar_detected).count(),
                    burnt_pixel_count: validated.iter().map( |r| r.burnt_pixel_count).max().unwrap_or(0),
                    burnt_building_count: validated.iter().map( |r| r.burnt_building_count).max().unwrap_or(0),
                    firms_ids,
                })
            })
            .collect()
    }
}

fn ser_ids<S: Serializer> (ids: &Vec<i64>, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str( &ids.iter().join(";"))
}

fn de_ids<'a,D> (deserializer: D) -> std::result::Result<Vec<i64>,D::Error> where D: Deserializer<'a> {
    let s = String::deserialize( deserializer)?;
    s.split(';')
        .filter( |v| !v.trim().is_empty())
        .map( |v| v.trim().parse::<i64>().map_err( |e| serde::de::Error::custom( format!("invalid firms_id {v:?}: {e}"))))
        .collect()
}

pub fn read_detections<R: io::Read> (reader: R) -> Result<Vec<EventDetection>> {
    let mut csv_reader = csv::Reader::from_reader( reader);
    let mut detections = Vec::new();
    for res in csv_reader.deserialize() {
        detections.push( res?);
    }
    Ok(detections)
}

pub fn read_detections_csv (path: impl AsRef<Path>) -> Result<Vec<EventDetection>> {
    read_detections( std::fs::File::open( path)?)
}

pub fn write_events<W: io::Write> (writer: W, events: &[ClusteredEvent]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer( writer);
    for e in events {
        csv_writer.serialize( e)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_events_csv (path: impl AsRef<Path>, events: &[ClusteredEvent]) -> Result<()> {
    write_events( std::fs::File::create( path)?, events)
}
