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

/// A response payload does not match the declared shape of a record.
///
/// The `path` locates the offending value, starting at the root of the
/// payload. Field names use their wire names, and sequence elements use
/// indices, e.g. `virtualGuests[3].datacenter.name`.
///
/// # Example
/// ```
/// # use softlayer_gax::error::DecodeError;
/// let e = DecodeError::new("integer", "string").in_field("id").at_index(3);
/// assert_eq!(e.path(), "[3].id");
/// assert!(e.to_string().contains("[3].id"));
/// ```
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("cannot decode `{path}`: expected {expected}, found {actual}")]
#[non_exhaustive]
pub struct DecodeError {
    path: String,
    expected: String,
    actual: String,
}

impl DecodeError {
    /// Creates a new error at the root of the payload.
    pub fn new<E: Into<String>, A: Into<String>>(expected: E, actual: A) -> Self {
        Self {
            path: String::new(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Prefixes the path with a field name.
    pub fn in_field(mut self, name: &str) -> Self {
        self.path = match self.path.as_str() {
            "" => name.to_string(),
            p if p.starts_with('[') => format!("{name}{p}"),
            p => format!("{name}.{p}"),
        };
        self
    }

    /// Prefixes the path with a sequence index.
    pub fn at_index(mut self, index: usize) -> Self {
        self.path = match self.path.as_str() {
            "" => format!("[{index}]"),
            p if p.starts_with('[') => format!("[{index}]{p}"),
            p => format!("[{index}].{p}"),
        };
        self
    }

    pub(crate) fn with_path(mut self, path: String) -> Self {
        self.path = path;
        self
    }

    /// The location of the offending value.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The type declared by the record shape.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// A description of the value found in the payload.
    pub fn actual(&self) -> &str {
        &self.actual
    }
}
