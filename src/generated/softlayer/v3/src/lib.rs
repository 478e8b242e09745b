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
//
// Code generated by sidekick. DO NOT EDIT.

//! SoftLayer Client Libraries for Rust - SoftLayer API v3.1
//!
//! This crate contains the client and the data types for a subset of the
//! SoftLayer API: accounts, hardware, virtual guests, DNS domains, search,
//! invoices, and tickets.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use softlayer_v3::client::Client;
//! use softlayer_v3::model;
//! let client = Client::builder().build().await?;
//! let mask = client.mask::<model::VirtualGuest, _, _>(["hostname", "datacenter.name"])?;
//! let guests = client.account().mask(mask).limit(50).get_virtual_guests().await?;
//! for guest in guests {
//!     println!("{guest:?}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(()) });
//! ```
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases.

/// The messages and enums that are part of this client library.
pub mod model;

pub mod registry;

pub use gax::Result;
pub use gax::error::Error;
pub use gax::filter;
pub use gax::mask::Mask;
pub use gaxi::options::Credentials;

#[allow(rustdoc::invalid_html_tags)]
#[allow(rustdoc::redundant_explicit_links)]
pub mod client;

/// Request and client builders.
pub mod builder;
