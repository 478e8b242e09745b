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

//! Well-known-types for the SoftLayer API.
//!
//! The SoftLayer API uses a handful of scalar types with custom JSON
//! encodings: timestamps are RFC 3339 strings that keep the server's UTC
//! offset, money amounts are decimal values that must not lose precision, and
//! binary payloads are base64 strings. This crate provides Rust types for each
//! of them, with [serde] support matching the wire format.

mod blob;
pub use crate::blob::*;
mod decimal;
pub use crate::decimal::*;
mod timestamp;
pub use crate::timestamp::*;
