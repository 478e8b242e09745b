// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod core_error;
pub use core_error::*;
mod decode;
pub use decode::DecodeError;
mod mask;
pub use mask::InvalidMaskError;
mod unknown_type;
pub use unknown_type::UnknownTypeError;

/// Faults returned by the SoftLayer API.
///
/// The client libraries distinguish between errors detected while trying to
/// send a request (e.g. cannot open a connection), errors trying to interpret
/// the response, and errors returned by the service itself. The types in this
/// module represent the latter.
///
/// # Examples
///
/// ```
/// # use softlayer_gax::error;
/// use error::Error;
/// fn handle_error(e: Error) {
///     if let Some(fault) = e.as_fault() {
///         println!("the service reported {}: {}", fault.exception_class, fault.exception_message)
///     }
/// }
/// ```
pub mod fault;
