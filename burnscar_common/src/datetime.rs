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

use std::time::Duration;
use chrono::{Days, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};
use parse_duration::parse;

// simple Duration ctors so that we don't have to spell out the second multiples
#[inline] pub fn millis (n: u64)->Duration { Duration::from_millis(n) }
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }
#[inline] pub fn secs_f64 (n: f64)->Duration { Duration::from_secs_f64(n) }
#[inline] pub fn minutes (n: u64)->Duration { Duration::from_secs(n * 60) }

/// the current UTC calendar date.
/// This should be used wherever we might have to use a configured date instead of wall clock
#[inline]
pub fn utc_today()->NaiveDate {
    Utc::now().date_naive()
}

/// all dates from `start` to `end`, both inclusive. Empty if `end < start`
pub fn date_range (start: NaiveDate, end: NaiveDate)->Vec<NaiveDate> {
    start.iter_days().take_while( |d| *d <= end).collect()
}

/// signed number of days from `earlier` to `later`
#[inline]
pub fn days_between (earlier: NaiveDate, later: NaiveDate)->i64 {
    (later - earlier).num_days()
}

/// `date` shifted by `n` days (saturating at the calendar bounds)
pub fn add_days (date: NaiveDate, n: i64)->NaiveDate {
    let shifted = if n >= 0 {
        date.checked_add_days( Days::new( n as u64))
    } else {
        date.checked_sub_days( Days::new( n.unsigned_abs()))
    };
    shifted.unwrap_or( if n >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

/// parse the FIRMS `acq_time` format, which is a HHMM number that might have lost its leading zeros
/// ("5" is 00:05, "130" is 01:30)
pub fn parse_hhmm (s: &str)->Option<NaiveTime> {
    let s = s.trim();
    if s.is_empty() || s.len() > 4 || !s.bytes().all(|b| b.is_ascii_digit()) { return None }

    let padded = format!("{s:0>4}");
    let hour: u32 = padded[0..2].parse().ok()?;
    let minute: u32 = padded[2..4].parse().ok()?;
    NaiveTime::from_hms_opt( hour, minute, 0)
}

//--- support for serde

/// deserialize human readable duration specs such as "10s" or "2min"
pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

pub fn serialize_duration<S: Serializer> (dur: &Duration, s: S) -> Result<S::Ok, S::Error>  {
    let dfm = format!("{}ms", dur.as_millis());
    s.serialize_str(&dfm)
}

/// serialize a NaiveTime as zero padded FIRMS-style HHMM string
pub fn ser_hhmm<S: Serializer> (t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    use chrono::Timelike;
    s.serialize_str( &format!("{:02}{:02}", t.hour(), t.minute()))
}

/// deserialize a FIRMS-style HHMM number (given as number or string)
pub fn de_hhmm <'a,D>(deserializer: D) -> Result<NaiveTime,D::Error> where D: Deserializer<'a> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Hhmm { Num(u32), Str(String) }

    let s = match Hhmm::deserialize(deserializer)? {
        Hhmm::Num(n) => n.to_string(),
        Hhmm::Str(s) => s
    };
    parse_hhmm(&s).ok_or_else( || serde::de::Error::custom( format!("invalid HHMM time: {s:?}")))
}
