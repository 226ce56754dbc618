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

//! common utility functions for network operations: generic retry with exponential backoff
//! and simple text retrieval

use std::{future::Future, time::Duration};
use futures::future::BoxFuture;
use reqwest::{Client, StatusCode};
use serde::{Serialize, Deserialize};

use crate::{define_error, warn, datetime::{self, deserialize_duration, serialize_duration}};

define_error!{ pub NetError = 
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    NotFoundError(String) : "not found {0}",
    OpFailed(String) : "operation failed: {0}",
}

pub type Result<T> = std::result::Result<T, NetError>;

/// the error type of retried operations. We keep the error type of the operation so that
/// callers can still match on the cause
#[derive(thiserror::Error,Debug)]
pub enum RetryError<E> where E: std::error::Error + 'static {
    #[error("giving up after {attempts} attempts: {source}")]
    Exhausted { attempts: u32, source: E },

    #[error("non-retryable error: {0}")]
    Fatal(E),
}

impl<E> RetryError<E> where E: std::error::Error + 'static {
    /// the error of the last attempt
    pub fn into_inner (self) -> E {
        match self {
            RetryError::Exhausted{source,..} => source,
            RetryError::Fatal(e) => e
        }
    }

    pub fn inner (&self) -> &E {
        match self {
            RetryError::Exhausted{source,..} => source,
            RetryError::Fatal(e) => e
        }
    }

    pub fn is_exhausted (&self) -> bool { matches!(self, RetryError::Exhausted{..}) }
}

/// how often and with which delays we retry a failed remote operation
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// total number of attempts (including the first one). 0 is treated as 1
    pub max_attempts: u32,

    /// exponential growth factor of delays
    pub backoff_base: f64,

    /// delay unit that gets multiplied by `backoff_base^n`
    #[serde(serialize_with="serialize_duration", deserialize_with="deserialize_duration")]
    pub backoff_unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy { max_attempts: 3, backoff_base: 2.0, backoff_unit: datetime::secs(1) }
    }
}

impl RetryPolicy {
    pub fn new (max_attempts: u32, backoff_base: f64, backoff_unit: Duration) -> Self {
        RetryPolicy { max_attempts, backoff_base, backoff_unit }
    }

    /// delay before the attempt that follows the failed (0-based) `attempt`
    pub fn backoff_delay (&self, attempt: u32) -> Duration {
        let factor = self.backoff_base.max(0.0).powi( attempt as i32);
        let secs = self.backoff_unit.as_secs_f64() * factor;
        Duration::try_from_secs_f64( secs).unwrap_or( Duration::MAX)
    }

    #[inline] fn attempts (&self) -> u32 { self.max_attempts.max(1) }
}

/// run `op` until it succeeds, fails with an error that is not retryable (according to `is_retryable`)
/// or we run out of attempts. The closure gets the 0-based attempt number
pub async fn retry<T,E,P,F,Fut> (policy: &RetryPolicy, is_retryable: P, mut op: F) -> std::result::Result<T,RetryError<E>>
    where E: std::error::Error + 'static, P: Fn(&E)->bool, F: FnMut(u32)->Fut, Fut: Future<Output=std::result::Result<T,E>>
{
    let max_attempts = policy.attempts();
    let mut attempt = 0;
    loop {
        match op(attempt).await {
            Ok(v) => return Ok(v),
            Err(e) => {
                if !is_retryable(&e) { return Err( RetryError::Fatal(e)) }

                attempt += 1;
                if attempt >= max_attempts {
                    return Err( RetryError::Exhausted{ attempts: attempt, source: e })
                }

                let delay = policy.backoff_delay( attempt-1);
                warn!("attempt {}/{} failed with {}, retry in {:?}", attempt, max_attempts, e, delay);
                tokio::time::sleep( delay).await;
            }
        }
    }
}

/// the stateful version of [`retry`], for operations that need mutable access to some owner state
/// between attempts (e.g. rate limit counters). The future returned by `op` may only borrow `state`
pub async fn retry_with<S,T,E,P,F> (policy: &RetryPolicy, is_retryable: P, state: &mut S, mut op: F) -> std::result::Result<T,RetryError<E>>
    where S: Send, E: std::error::Error + 'static, P: Fn(&E)->bool, F: for<'a> FnMut(&'a mut S, u32)->BoxFuture<'a, std::result::Result<T,E>>
{
    let max_attempts = policy.attempts();
    let mut attempt = 0;
    loop {
        match op( state, attempt).await {
            Ok(v) => return Ok(v),
            Err(e) => {
                if !is_retryable(&e) { return Err( RetryError::Fatal(e)) }

                attempt += 1;
                if attempt >= max_attempts {
                    return Err( RetryError::Exhausted{ attempts: attempt, source: e })
                }

                let delay = policy.backoff_delay( attempt-1);
                warn!("attempt {}/{} failed with {}, retry in {:?}", attempt, max_attempts, e, delay);
                tokio::time::sleep( delay).await;
            }
        }
    }
}

/// GET the body of `url` as text. Anything but a 2xx status is an error
pub async fn get_text (client: &Client, url: &str) -> Result<String> {
    let response = client.get( url).send().await?;
    let status = response.status();

    if status.is_success() {
        Ok( response.text().await? )
    } else if status == StatusCode::NOT_FOUND {
        Err( NetError::NotFoundError( url.to_string()))
    } else {
        Err( NetError::OpFailed( format!("response status {status:?}")))
    }
}
