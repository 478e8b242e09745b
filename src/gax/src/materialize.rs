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

//! Converts successful payloads into the types expected by the caller.
//!
//! Materialization is all or nothing. If any element of a sequence fails to
//! decode the whole call fails, partial results are never returned.

use crate::Result;
use crate::codec;
use crate::error::{DecodeError, Error};
use crate::registry::{Polymorphic, Record, TypeRegistry};
use serde_json::Value;

/// The body of a successful response.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// The service returned no content, or `null`.
    Empty,
    /// A JSON document: a record, a sequence, or a scalar.
    Json(Value),
    /// A body that is not JSON, such as a PDF document.
    Raw(bytes::Bytes),
}

impl Payload {
    /// Classifies a response body.
    pub fn from_body(body: bytes::Bytes) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::Empty;
        }
        match serde_json::from_slice::<Value>(&body) {
            Ok(Value::Null) => Self::Empty,
            Ok(value) => Self::Json(value),
            Err(_) => Self::Raw(body),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Empty => "empty body".to_string(),
            Self::Json(v) => codec::describe(v),
            Self::Raw(b) => format!("non-JSON body ({} bytes)", b.len()),
        }
    }
}

/// Materializes a single record.
///
/// An empty payload is "no result", not an error.
pub fn one<T: Record>(registry: &TypeRegistry, payload: Payload) -> Result<Option<T>> {
    match payload {
        Payload::Empty => Ok(None),
        Payload::Json(value) => codec::decode(registry, value).map(Some),
        raw => Err(mismatch(T::typename(), &raw)),
    }
}

/// Materializes a sequence of records.
///
/// Each element is decoded independently. The first failure aborts the
/// materialization, with the element index leading the error path.
pub fn many<T: Record>(registry: &TypeRegistry, payload: Payload) -> Result<Vec<T>> {
    match payload {
        Payload::Empty => Ok(Vec::new()),
        Payload::Json(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| codec::decode_at(registry, v, &format!("[{i}]")))
            .collect(),
        other => Err(mismatch(&format!("sequence of {}", T::typename()), &other)),
    }
}

/// Materializes a scalar, such as a boolean, an integer, or a decimal.
///
/// Scalars are not coerced, a string where an integer is expected is an
/// error.
pub fn scalar<T: serde::de::DeserializeOwned>(payload: Payload) -> Result<T> {
    let expected = std::any::type_name::<T>();
    match payload {
        Payload::Json(value) => serde_json::from_value::<T>(value.clone())
            .map_err(|_| Error::decode(DecodeError::new(expected, codec::describe(&value)))),
        other => Err(mismatch(expected, &other)),
    }
}

/// Materializes a blob.
///
/// The service returns binary data either as a raw body, or as a base64
/// string in a JSON document.
pub fn blob(payload: Payload) -> Result<wkt::Blob> {
    match payload {
        Payload::Empty => Ok(wkt::Blob::default()),
        Payload::Raw(bytes) => Ok(wkt::Blob::from(bytes)),
        Payload::Json(Value::String(s)) => wkt::Blob::from_base64(&s).map_err(|_| {
            Error::decode(DecodeError::new(
                "base64 string",
                codec::describe(&Value::String(s)),
            ))
        }),
        other => Err(mismatch("blob", &other)),
    }
}

/// Materializes a value of a polymorphic union.
///
/// The concrete type is named by the `complexType` key of the payload. An
/// unknown discriminator is an error, there is no fallback to a base type.
pub fn polymorphic<U: Polymorphic>(registry: &TypeRegistry, payload: Payload) -> Result<Option<U>> {
    match payload {
        Payload::Empty => Ok(None),
        Payload::Json(value) => codec::decode_polymorphic(registry, value).map(Some),
        raw => Err(mismatch(U::shape().name, &raw)),
    }
}

fn mismatch(expected: &str, payload: &Payload) -> Error {
    Error::decode(DecodeError::new(expected, payload.describe()))
}
