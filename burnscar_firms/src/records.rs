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

//! the hotspot record format of the VIIRS 375m active fire product as it is retrieved from FIRMS.
//! Field descriptions are on https://www.earthdata.nasa.gov/data/instruments/viirs/viirs-i-band-375-m-active-fire-data

use std::{fmt, io, path::Path};
use serde::{Serialize,Deserialize};
use chrono::{NaiveDate, NaiveTime};
use burnscar_common::datetime::{ser_hhmm, de_hhmm};
use crate::errors::{parse_error, Result};

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum Satellite {
    #[serde(rename="N")] Snpp,
    #[serde(rename="N20")] Noaa20,
    #[serde(rename="N21")] Noaa21,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum Instrument {
    #[serde(rename="VIIRS")] Viirs,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum DayNight {
    #[serde(rename="D")] Day,
    #[serde(rename="N")] Night,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum Confidence {
    #[serde(rename="l")] Low,
    #[serde(rename="n")] Nominal,
    #[serde(rename="h")] High,
}

/// one row of a FIRMS VIIRS CSV response.
/// `country_id` is only present in responses of country queries
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct FirmsRecord {
    #[serde(default)]
    pub country_id: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub scan: f64,   // cross-scan pixel size in km
    pub track: f64,  // along-track pixel size in km
    pub acq_date: NaiveDate,
    #[serde(serialize_with="ser_hhmm", deserialize_with="de_hhmm")]
    pub acq_time: NaiveTime,
    pub satellite: Satellite,
    pub instrument: Instrument,
    pub version: String,
    pub frp: f64,    // fire radiative power in MW
    pub daynight: DayNight,
    pub bright_ti4: f64,
    pub bright_ti5: f64,
    pub confidence: Confidence,
}

/// parse a FIRMS CSV response body. The first malformed row fails the whole body since we would
/// otherwise silently lose hotspots
pub fn parse_records (body: &str) -> Result<Vec<FirmsRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim( csv::Trim::All)
        .from_reader( body.as_bytes());

    let mut records = Vec::new();
    for (i,res) in csv_reader.deserialize().enumerate() {
        let rec: FirmsRecord = res.map_err( |e| parse_error!("row {}: {}", i+1, e))?;
        records.push( rec);
    }
    Ok(records)
}

pub fn write_records_csv (records: &[FirmsRecord], path: impl AsRef<Path>) -> Result<()> {
    let mut csv_writer = csv::Writer::from_path( path)?;
    for rec in records {
        csv_writer.serialize( rec)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn read_records_csv (path: impl AsRef<Path>) -> Result<Vec<FirmsRecord>> {
    let mut csv_reader = csv::Reader::from_path( path)?;
    let mut records = Vec::new();
    for res in csv_reader.deserialize() {
        records.push( res?);
    }
    Ok(records)
}
