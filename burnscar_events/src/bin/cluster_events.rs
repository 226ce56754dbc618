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

use std::{io, path::PathBuf};
use anyhow::Result;
use clap::Parser;
use burnscar_common::{info, log::init_tracing, warn};
use burnscar_events::{cluster::write_events, load_config, read_detections_csv, write_events_csv, EventClusterer, EventsConfig};
use burnscar_validate::read_results_csv;

#[derive(Parser, Debug)]
#[command(version, about, long_about = "cluster detections into fire events and aggregate their validation results")]
pub struct Args {
    /// name of the config file to use
    #[arg(long, default_value = "events.ron")]
    pub config: String,

    /// max number of days between consecutive detections of an event (overrides config)
    #[arg(long)]
    pub max_date_gap: Option<i64>,

    /// CSV file with validation results to aggregate
    #[arg(short, long)]
    pub results: Option<PathBuf>,

    /// CSV output file (stdout if not set)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// CSV file with firms_id,acq_date,area_include_id,geometry_wkt columns
    pub detections: PathBuf,
}

fn main()->Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config: EventsConfig = match load_config( &args.config) {
        Ok(config) => config,
        Err(e) => {
            warn!("no usable config {} ({}), using defaults", args.config, e);
            EventsConfig::default()
        }
    };
    if let Some(max_date_gap) = args.max_date_gap { config.max_date_gap = max_date_gap }

    let detections = read_detections_csv( &args.detections)?;
    let results = match &args.results {
        Some(path) => read_results_csv( path)?,
        None => Vec::new()
    };

    let events = EventClusterer::from_config( &config).cluster( &detections, &results);
    info!("{} detections clustered into {} event rows", detections.len(), events.len());

    match &args.output {
        Some(path) => write_events_csv( path, &events)?,
        None => write_events( io::stdout().lock(), &events)?
    }

    Ok(())
}
