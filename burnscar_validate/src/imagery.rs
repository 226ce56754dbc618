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

//! the capabilities we need from an imagery provider. Providers (remote analysis platforms, local
//! archives or the in-memory [`crate::memory::MemoryImagery`]) only have to find scenes and deliver
//! clipped NIR/SWIR rasters plus building footprints

use std::ops::Range;
use async_trait::async_trait;
use chrono::NaiveDate;
use geo::{Coord, Polygon, Rect};
use ndarray::{s, Array2};
use burnscar_common::geo::GeoRect;
use crate::errors::{raster_error, Result};

/// scene filter criteria. Dates are inclusive
#[derive(Debug,Clone,PartialEq)]
pub struct SceneQuery {
    pub bounds: GeoRect,
    pub start: NaiveDate,
    pub end: NaiveDate,

    /// only scenes with a cloud cover percentage below this
    pub max_cloud_percentage: Option<f64>,
}

impl SceneQuery {
    pub fn new (bounds: GeoRect, start: NaiveDate, end: NaiveDate) -> Self {
        SceneQuery { bounds, start, end, max_cloud_percentage: None }
    }

    pub fn with_max_cloud_percentage (mut self, max_cloud_percentage: f64) -> Self {
        self.max_cloud_percentage = Some(max_cloud_percentage);
        self
    }

    /// the same query restricted to a single day
    pub fn on_date (&self, date: NaiveDate) -> Self {
        SceneQuery { start: date, end: date, ..self.clone() }
    }

    pub fn matches (&self, date: NaiveDate, cloud_percentage: f64, footprint: &GeoRect) -> bool {
        date >= self.start && date <= self.end
            && self.max_cloud_percentage.map( |max| cloud_percentage < max).unwrap_or(true)
            && self.bounds.intersects( footprint)
    }
}

/// a north-up raster georeference: `width` x `height` pixels evenly covering `bounds`.
/// Row 0 is the northern most row, rasters are stored as `Array2` with shape (height,width)
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct RasterGrid {
    pub bounds: GeoRect,
    pub width: usize,
    pub height: usize,
}

impl RasterGrid {
    pub fn new (bounds: GeoRect, width: usize, height: usize) -> Self {
        RasterGrid { bounds, width, height }
    }

    #[inline] pub fn shape (&self) -> (usize,usize) { (self.height, self.width) }

    #[inline] pub fn pixel_width (&self) -> f64 { self.bounds.width_degrees() / self.width as f64 }
    #[inline] pub fn pixel_height (&self) -> f64 { self.bounds.height_degrees() / self.height as f64 }

    pub fn pixel_center (&self, row: usize, col: usize) -> Coord {
        Coord {
            x: self.bounds.west() + (col as f64 + 0.5) * self.pixel_width(),
            y: self.bounds.north() - (row as f64 + 0.5) * self.pixel_height()
        }
    }

    pub fn pixel_rect (&self, row: usize, col: usize) -> Rect {
        let pw = self.pixel_width();
        let ph = self.pixel_height();
        let west = self.bounds.west() + col as f64 * pw;
        let north = self.bounds.north() - row as f64 * ph;
        Rect::new( Coord{ x: west, y: north - ph }, Coord{ x: west + pw, y: north })
    }

    /// a pixel belongs to a region if its center is inside
    pub fn pixel_in (&self, region: &GeoRect, row: usize, col: usize) -> bool {
        let c = self.pixel_center( row, col);
        c.x >= region.west() && c.x <= region.east() && c.y >= region.south() && c.y <= region.north()
    }

    /// the row and column ranges of pixels that belong to `region` (None if there are none)
    pub fn window (&self, region: &GeoRect) -> Option<(Range<usize>,Range<usize>)> {
        let cols: Vec<usize> = (0..self.width).filter( |&col| {
            let x = self.pixel_center( 0, col).x;
            x >= region.west() && x <= region.east()
        }).collect();
        let rows: Vec<usize> = (0..self.height).filter( |&row| {
            let y = self.pixel_center( row, 0).y;
            y >= region.south() && y <= region.north()
        }).collect();

        match (cols.first(), cols.last(), rows.first(), rows.last()) {
            (Some(&c0), Some(&c1), Some(&r0), Some(&r1)) => Some( (r0..r1+1, c0..c1+1) ),
            _ => None
        }
    }

    /// the grid that covers the given pixel ranges
    pub fn sub_grid (&self, rows: &Range<usize>, cols: &Range<usize>) -> Self {
        let nw = self.pixel_rect( rows.start, cols.start);
        let se = self.pixel_rect( rows.end-1, cols.end-1);
        let bounds = GeoRect::from_wsen( nw.min().x, se.min().y, se.max().x, nw.max().y);
        RasterGrid { bounds, width: cols.len(), height: rows.len() }
    }
}

/// a scene with the bands we need to compute the Normalized Burn Ratio
#[derive(Debug,Clone)]
pub struct Scene {
    pub date: NaiveDate,
    pub cloud_percentage: f64,
    pub grid: RasterGrid,
    /// near infrared reflectance (e.g. Sentinel-2 B8)
    pub nir: Array2<f64>,
    /// short wave infrared reflectance (e.g. Sentinel-2 B12)
    pub swir: Array2<f64>,
}

impl Scene {
    pub fn new (date: NaiveDate, cloud_percentage: f64, grid: RasterGrid, nir: Array2<f64>, swir: Array2<f64>) -> Result<Self> {
        if nir.dim() != grid.shape() || swir.dim() != grid.shape() {
            return Err( raster_error!("band shapes {:?},{:?} do not match grid {:?}", nir.dim(), swir.dim(), grid.shape()))
        }
        Ok( Scene { date, cloud_percentage, grid, nir, swir } )
    }

    /// the part of this scene that is inside of `clip` (None if no pixel is)
    pub fn clip (&self, clip: &GeoRect) -> Option<Scene> {
        let (rows, cols) = self.grid.window( clip)?;
        let grid = self.grid.sub_grid( &rows, &cols);
        let nir = self.nir.slice( s![rows.clone(), cols.clone()]).to_owned();
        let swir = self.swir.slice( s![rows, cols]).to_owned();
        Some( Scene { date: self.date, cloud_percentage: self.cloud_percentage, grid, nir, swir } )
    }
}

/// a reference building footprint
#[derive(Debug,Clone,PartialEq)]
pub struct Building {
    pub id: u64,
    pub footprint: Polygon,
    pub confidence: f64,
}

#[async_trait]
pub trait ImageryService: Send + Sync {
    /// the acquisition dates of all scenes matching `query` (not necessarily sorted or unique)
    async fn scene_dates (&self, query: &SceneQuery) -> Result<Vec<NaiveDate>>;

    /// the earliest scene matching `query`, clipped to `clip`
    async fn first_scene (&self, query: &SceneQuery, clip: &GeoRect) -> Result<Option<Scene>>;

    /// building footprints that intersect `bounds` and have at least `min_confidence`
    async fn buildings (&self, bounds: &GeoRect, min_confidence: f64) -> Result<Vec<Building>>;
}
