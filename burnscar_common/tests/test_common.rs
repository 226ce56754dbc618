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

use std::{sync::{Arc, atomic::{AtomicU32, Ordering}}, time::Duration};
use futures::FutureExt;
use chrono::{NaiveDate, NaiveTime};
use burnscar_common::{define_error, datetime::*, net::{retry, retry_with, RetryError, RetryPolicy}};

define_error!{ TestError = 
    Transient(String) : "transient: {0}",
    Permanent(String) : "permanent: {0}",
}

fn is_transient (e: &TestError) -> bool { matches!(e, TestError::Transient(_)) }

fn fast_policy (max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new( max_attempts, 2.0, millis(1))
}

#[test]
fn test_backoff_delays() {
    let policy = RetryPolicy::default();
    assert_eq!( policy.backoff_delay(0), secs(1));
    assert_eq!( policy.backoff_delay(1), secs(2));
    assert_eq!( policy.backoff_delay(2), secs(4));

    let input = r#"( max_attempts: 5, backoff_base: 3.0, backoff_unit: "500ms" )"#;
    let policy: RetryPolicy = ron::from_str(input).unwrap();
    println!("policy: {policy:?}");
    assert_eq!( policy.backoff_delay(2), millis(4500));

    let policy: RetryPolicy = ron::from_str("()").unwrap();
    assert_eq!( policy, RetryPolicy::default());
}

#[tokio::test]
async fn test_retry_succeeds_after_transient_failures() {
    let calls = Arc::new( AtomicU32::new(0));
    let res = retry( &fast_policy(3), is_transient, |attempt| {
        let calls = calls.clone();
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            if attempt < 2 { Err( TestError::Transient(format!("attempt {attempt}"))) } else { Ok(attempt) }
        }
    }).await;

    println!("result: {res:?}");
    assert_eq!( res.unwrap(), 2);
    assert_eq!( calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_retry_exhausted() {
    let calls = Arc::new( AtomicU32::new(0));
    let res: Result<(),_> = retry( &fast_policy(3), is_transient, |attempt| {
        let calls = calls.clone();
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err( TestError::Transient(format!("attempt {attempt}")))
        }
    }).await;

    println!("result: {res:?}");
    let e = res.unwrap_err();
    assert!( e.is_exhausted());
    assert_eq!( e.inner().to_string(), "transient: attempt 2"); // we report the last error
    assert_eq!( calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_retry_fatal_aborts() {
    let calls = Arc::new( AtomicU32::new(0));
    let res: Result<(),_> = retry( &fast_policy(5), is_transient, |_| {
        let calls = calls.clone();
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err( TestError::Permanent("bad row".to_string()))
        }
    }).await;

    assert!( matches!( res, Err(RetryError::Fatal(TestError::Permanent(_)))));
    assert_eq!( calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_retry_with_state() {
    let mut counter: Vec<u32> = Vec::new();
    let res = retry_with( &fast_policy(4), is_transient, &mut counter, |state, attempt| {
        async move {
            state.push( attempt);
            if state.len() < 3 { Err( TestError::Transient("not yet".to_string())) } else { Ok( state.len()) }
        }.boxed()
    }).await;

    assert_eq!( res.unwrap(), 3);
    assert_eq!( counter, vec![0,1,2]);
}

#[test]
fn test_dates() {
    let d = |s: &str| NaiveDate::parse_from_str( s, "%Y-%m-%d").unwrap();

    let range = date_range( d("2024-02-27"), d("2024-03-01"));
    println!("range: {range:?}");
    assert_eq!( range, vec![ d("2024-02-27"), d("2024-02-28"), d("2024-02-29"), d("2024-03-01")]);
    assert!( date_range( d("2024-03-01"), d("2024-02-27")).is_empty());

    assert_eq!( days_between( d("2024-01-10"), d("2024-01-15")), 5);
    assert_eq!( add_days( d("2024-01-01"), -1), d("2023-12-31"));

    assert_eq!( parse_hhmm("5"), NaiveTime::from_hms_opt(0,5,0));
    assert_eq!( parse_hhmm("130"), NaiveTime::from_hms_opt(1,30,0));
    assert_eq!( parse_hhmm("2359"), NaiveTime::from_hms_opt(23,59,0));
    assert_eq!( parse_hhmm("2460"), None);
    assert_eq!( parse_hhmm("12a"), None);
}
