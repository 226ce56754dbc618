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

use geo::{Coord, Rect};
use ndarray::{array, Array2};
use burnscar_common::geo::GeoRect;
use burnscar_validate::{
    mask::Mask,
    raster::{apply_mask, burn_mask, nbr, nbr_difference, valid_pixel_count},
    vectorize::{burnt_areas, intersecting_buildings, vectorize, BACKGROUND, MASKED},
    Building, RasterGrid,
};

// run with "cargo test test_raster -- --nocapture"

/// 6x4 pixels of 1 deg
fn grid () -> RasterGrid {
    RasterGrid::new( GeoRect::from_wsen( 0.0, 0.0, 6.0, 4.0), 6, 4)
}

fn whole () -> GeoRect { GeoRect::from_wsen( 0.0, 0.0, 6.0, 4.0) }

#[test]
fn test_nbr() {
    let nir = array![[0.4, 0.1], [0.0, f64::NAN]];
    let swir = array![[0.1, 0.3], [0.0, 0.2]];
    let v = nbr( &nir, &swir).unwrap();
    println!("NBR: {v:?}");

    assert!( (v[[0,0]] - 0.6).abs() < 1e-12);
    assert!( (v[[0,1]] + 0.5).abs() < 1e-12);
    assert!( v[[1,0]].is_nan()); // zero sum
    assert!( v[[1,1]].is_nan());

    assert!( nbr( &nir, &Array2::zeros((3,2))).is_err());
}

#[test]
fn test_burn_mask() {
    let before = array![[0.6, 0.6, 0.6], [0.6, f64::NAN, 0.6]];
    let after  = array![[-0.5, 0.0, -0.05], [-0.5, -0.5, 0.45]];
    let diff = nbr_difference( &before, &after).unwrap();
    let mask = burn_mask( &diff, &after, 0.15, -0.10).unwrap();
    mask.print();

    // (0,1) not dark enough, (0,2) not dark enough, (1,1) invalid, (1,2) no decrease
    assert_eq!( mask.iter().collect::<Vec<_>>(), vec![(0,0), (1,0)]);

    let masked = apply_mask( &diff, &mask).unwrap();
    assert!( (masked[[0,0]] - 1.1).abs() < 1e-12);
    assert!( masked[[0,1]].is_nan());

    let g = RasterGrid::new( GeoRect::from_wsen( 0.0, 0.0, 3.0, 2.0), 3, 2);
    assert_eq!( valid_pixel_count( &masked, &g, &GeoRect::from_wsen( 0.0, 0.0, 3.0, 2.0)), 2);
    // only the northern row
    assert_eq!( valid_pixel_count( &masked, &g, &GeoRect::from_wsen( 0.0, 1.0, 3.0, 2.0)), 1);
}

#[test]
fn test_mask_ops() {
    let a = Mask::from_fn( 4, 2, |r,c| c < 2);
    let b = Mask::from_fn( 4, 2, |r,c| r == 0);
    let ab = a.intersection( &b).unwrap();
    assert_eq!( ab.count(), 2);
    assert!( ab.get( 0, 1) && !ab.get( 1, 1));
    assert!( a.intersection( &Mask::new( 3, 2)).is_err());
}

#[test]
fn test_vectorize() {
    // two separate burnt regions, the second one is only diagonally connected to (2,3)
    //   . X X . . .
    //   . X . . . .
    //   . . . X . .
    //   . . X . . .
    let mask = Mask::from_fn( 6, 4, |r,c| matches!( (r,c), (0,1) | (0,2) | (1,1) | (2,3) | (3,2)));
    mask.print();

    let polygons = vectorize( &mask, &grid(), &whole());
    let n_masked = polygons.iter().filter( |p| p.label == MASKED).count();
    let n_background = polygons.iter().filter( |p| p.label == BACKGROUND).count();
    println!("{} masked, {} background polygons", n_masked, n_background);

    assert_eq!( n_masked, 3); // 4-connected, so the diagonal pixels are separate regions
    assert_eq!( n_background, 1);

    let areas = burnt_areas( &mask, &grid(), &whole());
    assert_eq!( areas.len(), 3);
    let first = &areas[0];
    assert_eq!( first.0.len(), 2); // one rectangle per pixel row

    // restricting the region drops pixels outside of it
    let west = GeoRect::from_wsen( 0.0, 0.0, 2.0, 4.0);
    let areas = burnt_areas( &mask, &grid(), &west);
    assert_eq!( areas.len(), 1);
}

fn building (id: u64, x: f64, y: f64) -> Building {
    Building { id, footprint: Rect::new( Coord{ x, y }, Coord{ x: x + 0.2, y: y + 0.2 }).to_polygon(), confidence: 1.0 }
}

#[test]
fn test_intersecting_buildings() {
    let mask = Mask::from_fn( 6, 4, |r,c| matches!( (r,c), (0,1) | (0,2) | (3,5)));
    let areas = burnt_areas( &mask, &grid(), &whole());
    assert_eq!( areas.len(), 2);

    let buildings = vec![
        building( 1, 1.5, 3.5),   // in the first area
        building( 2, 2.9, 3.5),   // on the edge of the first area
        building( 3, 4.0, 2.0),   // nowhere
        building( 4, 5.5, 0.5),   // in the second area
    ];

    let hit: Vec<u64> = intersecting_buildings( &buildings, &areas).iter().map( |b| b.id).collect();
    assert_eq!( hit, vec![1, 2, 4]);

    // a building touching two areas is only counted once
    let mask = Mask::from_fn( 6, 4, |r,c| matches!( (r,c), (0,0) | (0,2)));
    let areas = burnt_areas( &mask, &grid(), &whole());
    assert_eq!( areas.len(), 2);
    let wide = Building { id: 9, footprint: Rect::new( Coord{ x: 0.5, y: 3.5 }, Coord{ x: 2.5, y: 3.8 }).to_polygon(), confidence: 1.0 };
    assert_eq!( intersecting_buildings( &[wide], &areas).len(), 1);
}
