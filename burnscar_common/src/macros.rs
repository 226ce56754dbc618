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

/// syntactic sugar macro to define thiserror Error enums:
/// ```
/// # use burnscar_common::define_error;
/// define_error!{ pub FirmsError = 
///   IOError( #[from] std::io::Error ) : "IO error: {0}",
///   OpFailed(String) : "operation failed: {0}"
/// }
/// ```
/// will get expanded into
/// ```
/// #[derive(thiserror::Error,Debug)]
/// pub enum FirmsError {
///     #[error("IO error: {0}")]
///     IOError(#[from] std::io::Error),
/// 
///     #[error("operation failed: {0}")]
///     OpFailed(String),
/// }
/// ```
/// Note the using crate has to depend on `thiserror`
#[macro_export]
macro_rules! define_error {
    ($vis:vis $name:ident = $( $err_variant:ident ( $( $( #[$meta:meta] )? $field_type:ty),* ) : $msg_lit:literal ),* $(,)?) => {
        #[derive(thiserror::Error,Debug)]
        $vis enum $name {
            $( 
                #[error($msg_lit)]
                $err_variant ( $( $(#[$meta])? $field_type ),*  )
            ),*
        }
    }
}

/// map a foreign error type into a String-carrying variant of our own error enums
/// (for errors we only report but never match on)
#[macro_export]
macro_rules! map_to_opaque_error {
    ($from_error:ty => $to_error:ident :: $variant:ident) => {
        impl From<$from_error> for $to_error {
            fn from (e: $from_error)->Self { $to_error :: $variant ( e.to_string()) }
        }
    };
}

/* #region logging ***********************************************************************/

/*
 * we intercept logging/tracing macros here to have a central place where we can remove/replace them 
 */

#[macro_export]
macro_rules! trace {
    ( $( $id:ident = $e:expr ),* ) => { $crate::log::tracing::trace!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { $crate::log::tracing::trace!( $( $e ),* ) }
}

#[macro_export]
macro_rules! debug {
    ( $( $id:ident = $e:expr ),* ) => { $crate::log::tracing::debug!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { $crate::log::tracing::debug!( $( $e ),* ) }
}

#[macro_export]
macro_rules! info {
    ( $( $id:ident = $e:expr ),* ) => { $crate::log::tracing::info!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { $crate::log::tracing::info!( $( $e ),* ) }
}

#[macro_export]
macro_rules! warn {
    ( $( $id:ident = $e:expr ),* ) => { $crate::log::tracing::warn!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { $crate::log::tracing::warn!( $( $e ),* ) }
}

#[macro_export]
macro_rules! error {
    ( $( $id:ident = $e:expr ),* ) => { $crate::log::tracing::error!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { $crate::log::tracing::error!( $( $e ),* ) }
}

/* #endregion logging */

/* #region config ************************************************************************/

/// this is the macro that needs to be expanded at the top of crates (lib.rs) that define configs.
/// Config users call the defined `load_config(..)` function to instantiate config structs, which
/// looks up files in the config dir of the crate that expanded the macro (see [`crate::config::find_config_file`])
#[macro_export]
macro_rules! define_load_config {
    () => {
        mod configs {
            /// load a RON config file for this crate
            pub fn load_config<C> (filename: &str) -> $crate::config::Result<C> where C: for <'a> serde::Deserialize<'a> {
                $crate::config::load_crate_config( env!("CARGO_PKG_NAME"), filename)
            }
        }
        pub use configs::*; // make load_config() visible at the crate level
    }
}

/* #endregion config */
