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

/// An object mask does not match the type it is applied to.
///
/// Masks are validated when they are built, before any request is sent. Each
/// variant names the offending segment and the type it was resolved against.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidMaskError {
    /// The mask root, or a type cast, names a type that is not registered.
    #[error("unknown type {name:?}")]
    UnknownType { name: String },

    /// The segment is not a field of the type.
    #[error("{type_name} has no field named {segment:?}")]
    UnknownField { type_name: String, segment: String },

    /// The path descends into a field that is not a record.
    #[error("{type_name}.{segment} is not a relational property and cannot have children")]
    NotARelation { type_name: String, segment: String },

    /// Polymorphic fields require a type cast before selecting children.
    #[error("{type_name}.{segment} is polymorphic, select children with `{segment}(TypeName)`")]
    CastRequired { type_name: String, segment: String },

    /// The cast type is not compatible with the declared field type.
    #[error("cannot cast {type_name}.{segment} to {cast}")]
    InvalidCast {
        type_name: String,
        segment: String,
        cast: String,
    },

    /// Two masks with different roots cannot be merged, or the mask root does
    /// not match the type returned by a method.
    #[error("mask root {actual} does not match {expected}")]
    RootMismatch { expected: String, actual: String },

    /// The mask text cannot be parsed.
    #[error("cannot parse mask {input:?} at offset {offset}: {message}")]
    Syntax {
        input: String,
        offset: usize,
        message: String,
    },
}

impl InvalidMaskError {
    /// The offending path segment, if the error is about a specific segment.
    pub fn segment(&self) -> Option<&str> {
        match self {
            Self::UnknownField { segment, .. }
            | Self::NotARelation { segment, .. }
            | Self::CastRequired { segment, .. }
            | Self::InvalidCast { segment, .. } => Some(segment),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment() {
        let e = InvalidMaskError::UnknownField {
            type_name: "SoftLayer_Virtual_Guest".into(),
            segment: "nonexistent".into(),
        };
        assert_eq!(e.segment(), Some("nonexistent"));
        let got = e.to_string();
        assert!(got.contains("nonexistent"), "{got}");
        assert!(got.contains("SoftLayer_Virtual_Guest"), "{got}");

        let e = InvalidMaskError::UnknownType {
            name: "SoftLayer_Nope".into(),
        };
        assert_eq!(e.segment(), None);
    }
}
