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

use crate::error::Error;
use crate::registry::{DISCRIMINATOR, TypeRegistry};
use serde::{Deserialize, Serialize};

/// The record type the service uses to report faults.
pub const CONTAINER_EXCEPTION: &str = "SoftLayer_Container_Exception";

/// A structured fault reported by the SoftLayer API.
///
/// The API reports failures with the name of the exception class raised by
/// the service (e.g. `SoftLayer_Exception_ObjectNotFound`) and a human-readable
/// message. Both values are preserved verbatim.
///
/// # Example
/// ```
/// # use softlayer_gax::error::fault::ApiFault;
/// let fault = ApiFault::default()
///     .set_exception_class("SoftLayer_Exception_ObjectNotFound")
///     .set_exception_message("Unable to find object with id of '123'.");
/// assert!(fault.is_class("SoftLayer_Exception_ObjectNotFound"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ApiFault {
    /// The exception class, e.g. `SoftLayer_Exception_Public`.
    pub exception_class: String,

    /// The exception message, as reported by the service.
    pub exception_message: String,
}

impl ApiFault {
    /// Sets the value for [exception_class][ApiFault::exception_class].
    pub fn set_exception_class<T: Into<String>>(mut self, v: T) -> Self {
        self.exception_class = v.into();
        self
    }

    /// Sets the value for [exception_message][ApiFault::exception_message].
    pub fn set_exception_message<T: Into<String>>(mut self, v: T) -> Self {
        self.exception_message = v.into();
        self
    }

    /// Returns true if the fault was raised with the given exception class.
    pub fn is_class(&self, name: &str) -> bool {
        self.exception_class == name
    }

    /// Detects a fault delivered inside a successful response.
    ///
    /// Some transports deliver faults as a regular payload. Those payloads
    /// have an `exceptionClass` and either declare a `complexType` registered
    /// as [CONTAINER_EXCEPTION] (or one of its subtypes), or have no other
    /// keys besides `exceptionMessage`.
    pub(crate) fn embedded(registry: &TypeRegistry, value: &serde_json::Value) -> Option<Self> {
        let map = value.as_object()?;
        let class = map.get("exceptionClass")?.as_str()?;
        let declared = map
            .get(DISCRIMINATOR)
            .and_then(|v| v.as_str())
            .is_some_and(|t| registry.is_subtype(t, CONTAINER_EXCEPTION));
        let only_fault_keys = map
            .keys()
            .all(|k| matches!(k.as_str(), "exceptionClass" | "exceptionMessage" | DISCRIMINATOR));
        if !declared && !only_fault_keys {
            return None;
        }
        let message = map
            .get("exceptionMessage")
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        Some(
            Self::default()
                .set_exception_class(class)
                .set_exception_message(message),
        )
    }
}

// The REST endpoint reports faults as `{"error": "...", "code": "..."}`, other
// endpoints use the field names of `SoftLayer_Container_Exception`.
#[derive(Deserialize)]
#[serde(untagged)]
enum FaultWrapper {
    Rest {
        error: String,
        code: String,
    },
    Container {
        #[serde(rename = "exceptionClass")]
        exception_class: String,
        #[serde(rename = "exceptionMessage", default)]
        exception_message: String,
    },
}

impl TryFrom<&bytes::Bytes> for ApiFault {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let wrapper = serde_json::from_slice::<FaultWrapper>(value).map_err(Error::deser)?;
        let fault = match wrapper {
            FaultWrapper::Rest { error, code } => ApiFault {
                exception_class: code,
                exception_message: error,
            },
            FaultWrapper::Container {
                exception_class,
                exception_message,
            } => ApiFault {
                exception_class,
                exception_message,
            },
        };
        Ok(fault)
    }
}
