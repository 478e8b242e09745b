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

/// A polymorphic value names a type outside its declared union.
///
/// The discriminator is kept exactly as the service sent it. The library never
/// falls back to the base type when the discriminator is unknown.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("unknown type {discriminator:?} at `{path}`, expected one of {union}")]
#[non_exhaustive]
pub struct UnknownTypeError {
    discriminator: String,
    union: String,
    path: String,
}

impl UnknownTypeError {
    pub fn new<D: Into<String>, U: Into<String>>(discriminator: D, union: U) -> Self {
        Self {
            discriminator: discriminator.into(),
            union: union.into(),
            path: String::new(),
        }
    }

    /// Sets the location of the polymorphic value.
    pub fn with_path<P: Into<String>>(mut self, path: P) -> Self {
        self.path = path.into();
        self
    }

    /// The type name reported by the service, verbatim.
    pub fn discriminator(&self) -> &str {
        &self.discriminator
    }

    /// The name of the declared union.
    pub fn union(&self) -> &str {
        &self.union
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = UnknownTypeError::new("Bogus_Type", "SoftLayer_Resource").with_path("[0].resource");
        assert_eq!(e.discriminator(), "Bogus_Type");
        assert_eq!(e.union(), "SoftLayer_Resource");
        assert_eq!(e.path(), "[0].resource");
        let got = e.to_string();
        assert!(got.contains("Bogus_Type"), "{got}");
        assert!(got.contains("[0].resource"), "{got}");
    }
}
