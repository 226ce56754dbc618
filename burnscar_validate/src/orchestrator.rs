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

use std::sync::Arc;
use futures::stream::{self, BoxStream, StreamExt};
use burnscar_common::{debug, error};
use crate::{
    detection::FireDetection,
    engine::ValidationEngine,
    imagery::ImageryService,
    params::{ValidationConfig, ValidationParams},
    result::ValidationResult,
};

/// runs many validations concurrently, bounded by `max_workers`.
///
/// Each validation runs in its own task. If it fails (or panics) we log the error and report a
/// `no_data` result for this detection, so that every detection gets exactly one result and no
/// detection can abort the batch. Results are yielded in order of completion
pub struct ValidationOrchestrator<S: ImageryService + 'static> {
    engine: Arc<ValidationEngine<S>>,
    max_workers: usize,
}

impl<S: ImageryService + 'static> ValidationOrchestrator<S> {
    pub fn new (engine: ValidationEngine<S>, max_workers: usize) -> Self {
        ValidationOrchestrator { engine: Arc::new( engine), max_workers: max_workers.max(1) }
    }

    pub fn from_config (imagery: Arc<S>, config: &ValidationConfig) -> Self {
        let engine = ValidationEngine::new( imagery).with_building_min_confidence( config.building_min_confidence);
        ValidationOrchestrator::new( engine, config.max_workers)
    }

    pub fn max_workers (&self) -> usize { self.max_workers }

    pub fn validate_many (&self, detections: Vec<FireDetection>, params: ValidationParams) -> BoxStream<'static, ValidationResult> {
        let engine = self.engine.clone();
        let params = Arc::new( params);

        stream::iter( detections)
            .map( move |detection| {
                let engine = engine.clone();
                let params = params.clone();
                async move { supervise( engine, params, detection).await }
            })
            .buffer_unordered( self.max_workers)
            .boxed()
    }

    /// convenience function to collect all results of [`Self::validate_many`]
    pub async fn validate_all (&self, detections: Vec<FireDetection>, params: ValidationParams) -> Vec<ValidationResult> {
        self.validate_many( detections, params).collect().await
    }
}

async fn supervise<S: ImageryService + 'static> (engine: Arc<ValidationEngine<S>>, params: Arc<ValidationParams>, detection: FireDetection) -> ValidationResult {
    let firms_id = detection.id();
    let acq_date = detection.acq_date();

    let task = tokio::spawn( async move { engine.validate( &detection, &params).await });

    match task.await {
        Ok(Ok(result)) => {
            debug!("detection {} validated: {:?}", firms_id, result.outcome());
            result
        }
        Ok(Err(e)) => {
            error!("validation failed for FIRMS id {}: {}", firms_id, e);
            ValidationResult::no_data( firms_id, acq_date)
        }
        Err(e) => {
            error!("validation task for FIRMS id {} aborted: {}", firms_id, e);
            ValidationResult::no_data( firms_id, acq_date)
        }
    }
}
