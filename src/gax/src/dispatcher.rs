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

//! Turns a [Request] into exactly one transport call and a typed outcome.
//!
//! The dispatcher serializes the request, sends it through a [Transport], and
//! classifies the result:
//!
//! * failures to reach the service are returned as-is, they are reported by
//!   the transport,
//! * fault payloads become [ApiFault] errors, with the exception class and
//!   message preserved verbatim,
//! * other unsuccessful responses become transport errors, carrying the
//!   status code, headers, and body,
//! * successful payloads are handed to the [materializer][crate::materialize].
//!
//! The dispatcher never retries, and never caches results.

use crate::Result;
use crate::error::Error;
use crate::error::fault::ApiFault;
use crate::materialize::{self, Payload};
use crate::paginator::Paginator;
use crate::registry::{Polymorphic, Record, TypeRegistry};
use crate::request::{Page, Request, RequestParts};
use crate::response::{Parts, Response};
use crate::transport::{Transport, WireRequest, WireResponse};
use std::sync::Arc;
use tracing::Instrument;

/// Sends requests and materializes their results.
///
/// Dispatchers are cheap to clone, all clones share the same transport and
/// type registry.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    registry: Arc<TypeRegistry>,
}

impl Dispatcher {
    pub fn new<T: Transport + 'static>(transport: T, registry: Arc<TypeRegistry>) -> Self {
        Self::from_shared(Arc::new(transport), registry)
    }

    pub fn from_shared(transport: Arc<dyn Transport>, registry: Arc<TypeRegistry>) -> Self {
        Self {
            transport,
            registry,
        }
    }

    /// The registry used to validate masks and decode results.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Sends `request` and returns the classified payload.
    pub async fn invoke(&self, request: Request) -> Result<Response<Payload>> {
        let parts = request.into_parts();
        let span = tracing::debug_span!(
            "softlayer.invoke",
            service = %parts.service,
            method = %parts.method,
            id = ?parts.id,
        );
        self.invoke_parts(parts).instrument(span).await
    }

    async fn invoke_parts(&self, parts: RequestParts) -> Result<Response<Payload>> {
        let wire = to_wire(parts);
        let response = match self.transport.call(wire).await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("transport error: {e}");
                return Err(e);
            }
        };
        let outcome = classify(&self.registry, response);
        match &outcome {
            Ok(_) => tracing::debug!("call succeeded"),
            Err(e) => match e.as_fault() {
                Some(fault) => tracing::debug!(
                    exception_class = %fault.exception_class,
                    "call failed with a fault: {}",
                    fault.exception_message
                ),
                None => tracing::debug!("call failed: {e}"),
            },
        }
        outcome
    }

    /// Calls a method returning a single record.
    ///
    /// Returns `None` if the service returns no result.
    pub async fn get_one<T: Record>(&self, request: Request) -> Result<Option<T>> {
        self.check_mask(&request, T::typename())?;
        let payload = self.invoke(request).await?.into_body();
        materialize::one(&self.registry, payload)
    }

    /// Calls a method returning a sequence of records.
    pub async fn get_many<T: Record>(&self, request: Request) -> Result<Vec<T>> {
        Ok(self.list::<T>(request).await?.into_body())
    }

    /// Calls a method returning a sequence of records, keeping the response
    /// metadata, such as the total number of results.
    pub async fn list<T: Record>(&self, request: Request) -> Result<Response<Vec<T>>> {
        self.check_mask(&request, T::typename())?;
        let (parts, payload) = self.invoke(request).await?.into_parts();
        let items = materialize::many(&self.registry, payload)?;
        Ok(Response::from_parts(parts, items))
    }

    /// Calls a method returning a scalar.
    pub async fn get_scalar<T: serde::de::DeserializeOwned>(&self, request: Request) -> Result<T> {
        let payload = self.invoke(request).await?.into_body();
        materialize::scalar(payload)
    }

    /// Calls a method returning binary data.
    pub async fn get_blob(&self, request: Request) -> Result<wkt::Blob> {
        let payload = self.invoke(request).await?.into_body();
        materialize::blob(payload)
    }

    /// Calls a method returning a value of a polymorphic union.
    pub async fn get_polymorphic<U: Polymorphic>(&self, request: Request) -> Result<Option<U>> {
        if let Some(mask) = request.mask() {
            let variants = U::shape().variants;
            let fits = variants
                .iter()
                .any(|v| mask.check_root(&self.registry, v).is_ok());
            if !fits {
                mask.check_root(&self.registry, U::shape().name)?;
            }
        }
        let payload = self.invoke(request).await?.into_body();
        materialize::polymorphic(&self.registry, payload)
    }

    /// Calls a method and discards any result.
    pub async fn execute(&self, request: Request) -> Result<()> {
        self.invoke(request).await.map(|_| ())
    }

    /// Iterates over the results of a list method, `limit` results at a time.
    ///
    /// The pagination starts at the offset of the request's page, if any.
    pub fn paginate<T: Record>(&self, request: Request, limit: u32) -> Paginator<Response<Vec<T>>, Error> {
        let offset = request.page().map(|p| p.offset).unwrap_or(0);
        let this = self.clone();
        let execute = move |page: Page| {
            let this = this.clone();
            let request = request.clone().set_page(page);
            async move { this.list::<T>(request).await }
        };
        Paginator::new(Page::new(offset, limit), execute)
    }

    fn check_mask(&self, request: &Request, expected: &str) -> Result<()> {
        match request.mask() {
            Some(mask) => mask.check_root(&self.registry, expected),
            None => Ok(()),
        }
    }
}

fn to_wire(parts: RequestParts) -> WireRequest {
    let RequestParts {
        service,
        method,
        id,
        args,
        mask,
        filter,
        page,
        options,
    } = parts;
    let mut wire = WireRequest::new(service, method);
    wire.id = id;
    wire.parameters = args;
    wire.mask = mask.filter(|m| !m.is_empty()).map(|m| m.render());
    wire.filter = filter.filter(|f| !f.is_empty()).map(|f| f.build());
    wire.page = page;
    wire.options = options;
    wire
}

fn classify(registry: &TypeRegistry, response: WireResponse) -> Result<Response<Payload>> {
    let WireResponse {
        status,
        headers,
        body,
    } = response;
    if !(200..300).contains(&status) {
        return Err(match ApiFault::try_from(&body) {
            Ok(fault) => Error::fault_with_http_metadata(fault, Some(status), Some(headers)),
            Err(_) => Error::http(status, headers, body),
        });
    }
    let payload = Payload::from_body(body);
    if let Payload::Json(value) = &payload {
        if let Some(fault) = ApiFault::embedded(registry, value) {
            return Err(Error::fault_with_http_metadata(
                fault,
                Some(status),
                Some(headers),
            ));
        }
    }
    Ok(Response::from_parts(Parts::new().set_headers(headers), payload))
}
