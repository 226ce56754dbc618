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

use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use chrono::NaiveDate;
use geo::Intersects;
use burnscar_common::geo::GeoRect;
use crate::{errors::Result, imagery::{Building, ImageryService, Scene, SceneQuery}};

/// a deterministic in-memory scene catalogue and building registry.
/// Scenes match a query if their grid bounds intersect the query bounds
#[derive(Debug,Default)]
pub struct MemoryImagery {
    scenes: Vec<Scene>,
    buildings: Vec<Building>,

    n_date_queries: AtomicUsize,
    n_scene_queries: AtomicUsize,
    n_building_queries: AtomicUsize,
}

impl MemoryImagery {
    pub fn new () -> Self { Self::default() }

    pub fn with_scene (mut self, scene: Scene) -> Self {
        self.scenes.push( scene);
        self
    }

    pub fn with_building (mut self, building: Building) -> Self {
        self.buildings.push( building);
        self
    }

    pub fn add_scene (&mut self, scene: Scene) { self.scenes.push( scene) }

    pub fn add_building (&mut self, building: Building) { self.buildings.push( building) }

    pub fn scenes (&self) -> &[Scene] { &self.scenes }

    /// number of (scene_dates, first_scene, buildings) requests so far
    pub fn request_counts (&self) -> (usize,usize,usize) {
        ( self.n_date_queries.load( Ordering::Relaxed),
          self.n_scene_queries.load( Ordering::Relaxed),
          self.n_building_queries.load( Ordering::Relaxed) )
    }

    fn matching<'a> (&'a self, query: &'a SceneQuery) -> impl Iterator<Item=&'a Scene> + 'a {
        self.scenes.iter().filter( move |s| query.matches( s.date, s.cloud_percentage, &s.grid.bounds))
    }
}

#[async_trait]
impl ImageryService for MemoryImagery {
    async fn scene_dates (&self, query: &SceneQuery) -> Result<Vec<NaiveDate>> {
        self.n_date_queries.fetch_add( 1, Ordering::Relaxed);
        Ok( self.matching( query).map( |s| s.date).collect() )
    }

    async fn first_scene (&self, query: &SceneQuery, clip: &GeoRect) -> Result<Option<Scene>> {
        self.n_scene_queries.fetch_add( 1, Ordering::Relaxed);
        Ok( self.matching( query).min_by_key( |s| s.date).and_then( |s| s.clip( clip)) )
    }

    async fn buildings (&self, bounds: &GeoRect, min_confidence: f64) -> Result<Vec<Building>> {
        self.n_building_queries.fetch_add( 1, Ordering::Relaxed);
        let area = bounds.to_polygon();
        Ok( self.buildings.iter()
            .filter( |b| b.confidence >= min_confidence && b.footprint.intersects( &area))
            .cloned()
            .collect() )
    }
}
