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

//! conversion of burn masks into polygons and the spatial join with building footprints

use std::collections::{BTreeMap, VecDeque};
use bit_set::BitSet;
use geo::{BoundingRect, Coord, Intersects, MultiPolygon, Polygon, Rect};
use burnscar_common::geo::GeoRect;
use crate::{imagery::{Building, RasterGrid}, mask::Mask};

/// label of polygons that cover set mask pixels
pub const MASKED: u8 = 1;
/// label of polygons that cover unset mask pixels
pub const BACKGROUND: u8 = 0;

#[derive(Debug,Clone,PartialEq)]
pub struct LabelledPolygon {
    pub label: u8,
    pub geometry: MultiPolygon,
}

/// group 4-connected pixels of equal mask value inside of `region` into polygons.
/// Each polygon is the union of the (row-wise merged) pixel rectangles of one connected region
pub fn vectorize (mask: &Mask, grid: &RasterGrid, region: &GeoRect) -> Vec<LabelledPolygon> {
    let (width, height) = mask.dimensions();
    let mut visited = BitSet::with_capacity( width * height);
    let mut polygons = Vec::new();

    for row in 0..height {
        for col in 0..width {
            let idx = row * width + col;
            if visited.contains( idx) || !grid.pixel_in( region, row, col) { continue }

            let value = mask.get( row, col);
            let pixels = flood_fill( mask, grid, region, &mut visited, row, col, value);
            polygons.push( LabelledPolygon {
                label: if value { MASKED } else { BACKGROUND },
                geometry: pixels_to_polygons( grid, pixels)
            });
        }
    }

    polygons
}

fn flood_fill (mask: &Mask, grid: &RasterGrid, region: &GeoRect, visited: &mut BitSet,
               row: usize, col: usize, value: bool) -> Vec<(usize,usize)> {
    let (width, height) = mask.dimensions();
    let mut pixels = Vec::new();
    let mut queue = VecDeque::new();

    visited.insert( row * width + col);
    queue.push_back( (row,col));

    while let Some((r,c)) = queue.pop_front() {
        pixels.push( (r,c));

        let mut neighbors: Vec<(usize,usize)> = Vec::with_capacity(4);
        if r > 0 { neighbors.push( (r-1,c)) }
        if r+1 < height { neighbors.push( (r+1,c)) }
        if c > 0 { neighbors.push( (r,c-1)) }
        if c+1 < width { neighbors.push( (r,c+1)) }

        for (nr,nc) in neighbors {
            let idx = nr * width + nc;
            if !visited.contains( idx) && mask.get( nr, nc) == value && grid.pixel_in( region, nr, nc) {
                visited.insert( idx);
                queue.push_back( (nr,nc));
            }
        }
    }

    pixels
}

fn pixels_to_polygons (grid: &RasterGrid, pixels: Vec<(usize,usize)>) -> MultiPolygon {
    let mut rows: BTreeMap<usize,Vec<usize>> = BTreeMap::new();
    for (r,c) in pixels {
        rows.entry(r).or_default().push(c);
    }

    let mut polygons = Vec::new();
    for (row, mut cols) in rows {
        cols.sort_unstable();

        let mut start = cols[0];
        let mut end = cols[0];
        for &c in &cols[1..] {
            if c == end + 1 {
                end = c;
            } else {
                polygons.push( run_polygon( grid, row, start, end));
                start = c;
                end = c;
            }
        }
        polygons.push( run_polygon( grid, row, start, end));
    }

    MultiPolygon::new( polygons)
}

fn run_polygon (grid: &RasterGrid, row: usize, first_col: usize, last_col: usize) -> Polygon {
    let first = grid.pixel_rect( row, first_col);
    let last = grid.pixel_rect( row, last_col);
    Rect::new( first.min(), last.max()).to_polygon()
}

/// the polygons of all burnt (masked) areas inside of `region`
pub fn burnt_areas (mask: &Mask, grid: &RasterGrid, region: &GeoRect) -> Vec<MultiPolygon> {
    vectorize( mask, grid, region).into_iter()
        .filter( |p| p.label == MASKED)
        .map( |p| p.geometry)
        .collect()
}

/// the buildings that intersect at least one of the given areas. Each building is counted once
pub fn intersecting_buildings<'a> (buildings: &'a [Building], areas: &[MultiPolygon]) -> Vec<&'a Building> {
    let area_bounds: Vec<Option<Rect>> = areas.iter().map( |a| a.bounding_rect()).collect();

    buildings.iter().filter( |b| {
        match b.footprint.bounding_rect() {
            Some(bb) => areas.iter().zip( area_bounds.iter()).any( |(area, ab)| {
                ab.map( |ab| ab.intersects( &bb)).unwrap_or(false) && area.intersects( &b.footprint)
            }),
            None => false
        }
    }).collect()
}
