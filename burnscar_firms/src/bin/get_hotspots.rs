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

use std::path::PathBuf;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::Parser;
use burnscar_common::{datetime::date_range, geo::GeoRect, info, log::init_tracing, warn};
use burnscar_firms::{load_config, write_records_csv, FirmsConfig, FirmsQuery, HotspotFetcher};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "retrieve raw FIRMS hotspot records for a range of days and store them as one CSV file per day")]
pub struct Args {
    /// name of the config file to use
    #[arg(long, default_value = "firms.ron")]
    pub config: String,

    /// FIRMS map key (overrides the configured one)
    #[arg(long)]
    pub map_key: Option<String>,

    /// ISO 3166 alpha-3 country code
    #[arg(long, conflicts_with = "bbox")]
    pub country: Option<String>,

    /// area as "west,south,east,north" in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub bbox: Option<String>,

    /// directory to store the daily CSV files in
    #[arg(short, long, default_value = "data/raw")]
    pub output_dir: PathBuf,

    /// re-retrieve days that already have an output file
    #[arg(long)]
    pub overwrite: bool,

    /// first day to retrieve (YYYY-MM-DD)
    pub start: NaiveDate,

    /// last day to retrieve (inclusive, defaults to start)
    pub end: Option<NaiveDate>,
}

fn parse_bbox (s: &str) -> Result<GeoRect> {
    let vs: Vec<f64> = s.split(',').map( |v| v.trim().parse::<f64>()).collect::<std::result::Result<_,_>>()?;
    if vs.len() != 4 { return Err( anyhow!("bbox needs 4 comma separated values, got '{s}'")) }
    Ok( GeoRect::from_wsen( vs[0], vs[1], vs[2], vs[3]) )
}

#[tokio::main]
async fn main()->Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config: FirmsConfig = match load_config( &args.config) {
        Ok(config) => config,
        Err(e) => {
            warn!("no usable config {} ({}), using defaults", args.config, e);
            FirmsConfig::default()
        }
    };
    if let Some(map_key) = &args.map_key { config.map_key = map_key.clone() }
    if config.map_key.is_empty() { return Err( anyhow!("no FIRMS map key configured")) }

    let query = match (&args.country, &args.bbox) {
        (Some(iso3), None) => FirmsQuery::Country( iso3.to_uppercase()),
        (None, Some(bbox)) => FirmsQuery::Area( parse_bbox( bbox)?),
        _ => return Err( anyhow!("either --country or --bbox has to be specified"))
    };

    std::fs::create_dir_all( &args.output_dir)?;
    let mut fetcher = HotspotFetcher::new( config)?;

    let end = args.end.unwrap_or( args.start);
    for date in date_range( args.start, end) {
        let path = args.output_dir.join( format!("{date}.csv"));
        if path.is_file() && !args.overwrite {
            info!("skipping {date}, {:?} already exists", path);
            continue;
        }

        let records = fetcher.fetch( &query, date).await?;
        write_records_csv( &records, &path)?;
        info!("stored {} records for {} in {:?}", records.len(), date, path);
    }

    Ok(())
}
