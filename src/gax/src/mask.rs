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

//! Object masks.
//!
//! An object mask selects the fields and relations the service includes in a
//! response. For example, the following mask retrieves the id and hostname of
//! a virtual guest, plus the name of its data center:
//!
//! ```norust
//! mask[datacenter[name],hostname,id]
//! ```
//!
//! Masks are trees rooted at a record type. They are validated against the
//! [TypeRegistry] when they are built, so a mask naming a field the type does
//! not have is rejected before any request is sent.
//!
//! Polymorphic fields and record fields may be narrowed with a type cast,
//! e.g. `resource(SoftLayer_Hardware)[hostname]`. Selecting children of a
//! polymorphic field requires such a cast.

use crate::Result;
use crate::error::{Error, InvalidMaskError};
use crate::registry::{FieldKind, Record, RecordType, TypeRegistry};
use std::collections::BTreeMap;

/// A validated object mask.
///
/// # Example
/// ```
/// # use softlayer_gax::mask::Mask;
/// # use softlayer_gax::registry::*;
/// # static LOCATION: RecordShape = RecordShape { name: "SoftLayer_Location", parent: None, fields: &[
/// #     FieldShape::new("name", "name", FieldKind::String),
/// # ] };
/// # static GUEST: RecordShape = RecordShape { name: "SoftLayer_Virtual_Guest", parent: None, fields: &[
/// #     FieldShape::new("id", "id", FieldKind::Integer),
/// #     FieldShape::new("hostname", "hostname", FieldKind::String),
/// #     FieldShape::new("datacenter", "datacenter", FieldKind::Record("SoftLayer_Location")),
/// # ] };
/// # let registry = TypeRegistry::builder().register(&LOCATION).register(&GUEST).build()?;
/// let mask = Mask::build(&registry, "SoftLayer_Virtual_Guest", ["id", "hostname", "datacenter.name"])?;
/// assert_eq!(mask.render(), "mask[datacenter[name],hostname,id]");
///
/// let err = Mask::build(&registry, "SoftLayer_Virtual_Guest", ["nonexistent"]).unwrap_err();
/// assert_eq!(err.as_invalid_mask().and_then(|e| e.segment()), Some("nonexistent"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    root: &'static str,
    tree: Node,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Segment {
    name: String,
    cast: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Node {
    // The path ending at this node was selected on its own. For relations
    // this requests the default projection, in addition to any children.
    selected: bool,
    children: BTreeMap<Segment, Node>,
}

impl Mask {
    /// Creates an empty mask rooted at `root`.
    pub fn new(registry: &TypeRegistry, root: &str) -> Result<Self> {
        let ty = lookup(registry, root)?;
        Ok(Self {
            root: ty.name(),
            tree: Node::default(),
        })
    }

    /// Builds a mask from dotted paths, e.g. `datacenter.name`.
    pub fn build<I, S>(registry: &TypeRegistry, root: &str, paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mask = Self::new(registry, root)?;
        for path in paths {
            let path = path.as_ref();
            let segments = Parser::new(path)
                .path_only()
                .map_err(Error::invalid_mask)?;
            mask.insert(registry, &segments).map_err(Error::invalid_mask)?;
        }
        Ok(mask)
    }

    /// Builds a mask for the record type `T`.
    pub fn for_type<T, I, S>(registry: &TypeRegistry, paths: I) -> Result<Self>
    where
        T: Record,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(registry, T::typename(), paths)
    }

    /// Parses a mask in the service syntax.
    ///
    /// Accepts the output of [render][Mask::render], with or without the
    /// `mask` prefix, e.g. `mask[id,datacenter[name]]` or
    /// `id,datacenter.name`.
    pub fn parse(registry: &TypeRegistry, root: &str, text: &str) -> Result<Self> {
        let mut mask = Self::new(registry, root)?;
        let paths = Parser::new(text).mask().map_err(Error::invalid_mask)?;
        for segments in paths {
            mask.insert(registry, &segments)
                .map_err(Error::invalid_mask)?;
        }
        Ok(mask)
    }

    /// The canonical name of the root type.
    pub fn root(&self) -> &'static str {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.tree.children.is_empty()
    }

    /// Returns the union of two masks over the same root.
    ///
    /// Merging is idempotent and independent of the order of the arguments.
    pub fn merge(&self, other: &Mask) -> Result<Mask> {
        if self.root != other.root {
            return Err(Error::invalid_mask(InvalidMaskError::RootMismatch {
                expected: self.root.to_string(),
                actual: other.root.to_string(),
            }));
        }
        let mut tree = self.tree.clone();
        tree.merge(&other.tree);
        Ok(Mask {
            root: self.root,
            tree,
        })
    }

    /// Renders the mask in the service syntax.
    ///
    /// Children are always sorted, the output depends only on the set of
    /// selected paths.
    pub fn render(&self) -> String {
        let mut out = String::from("mask[");
        self.tree.render(&mut out);
        out.push(']');
        out
    }

    /// The selected paths, in dotted notation.
    ///
    /// A relation selected on its own is listed even if some of its fields
    /// are also selected.
    pub fn paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.tree.leaves(String::new(), &mut out);
        out
    }

    /// Verifies the mask can be applied to a method returning `expected`.
    ///
    /// The root must be `expected`, one of its ancestors, or one of its
    /// subtypes.
    pub fn check_root(&self, registry: &TypeRegistry, expected: &str) -> Result<()> {
        if registry.is_subtype(self.root, expected) || registry.is_subtype(expected, self.root) {
            return Ok(());
        }
        Err(Error::invalid_mask(InvalidMaskError::RootMismatch {
            expected: expected.to_string(),
            actual: self.root.to_string(),
        }))
    }

    fn insert(
        &mut self,
        registry: &TypeRegistry,
        segments: &[RawSegment],
    ) -> std::result::Result<(), InvalidMaskError> {
        let mut ty = lookup_raw(registry, self.root)?;
        let mut node = &mut self.tree;
        for (i, raw) in segments.iter().enumerate() {
            let last = i + 1 == segments.len();
            let (segment, next) = resolve(registry, ty, raw, last)?;
            node = node.children.entry(segment).or_default();
            if let Some(next) = next {
                ty = next;
            }
        }
        node.selected = true;
        Ok(())
    }
}

impl std::fmt::Display for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Validates one segment against `ty`, returning the canonical segment and
/// the type of its children, if any.
fn resolve<'r>(
    registry: &'r TypeRegistry,
    ty: &RecordType,
    raw: &RawSegment,
    last: bool,
) -> std::result::Result<(Segment, Option<&'r RecordType>), InvalidMaskError> {
    let field = ty
        .field(&raw.name)
        .ok_or_else(|| InvalidMaskError::UnknownField {
            type_name: ty.name().to_string(),
            segment: raw.name.clone(),
        })?;
    let invalid_cast = |cast: &str| InvalidMaskError::InvalidCast {
        type_name: ty.name().to_string(),
        segment: raw.name.clone(),
        cast: cast.to_string(),
    };
    let next = match (&field.kind, raw.cast.as_deref()) {
        (FieldKind::Record(target), None) => registry.get(target),
        (FieldKind::Record(target), Some(cast)) => {
            if !registry.is_subtype(cast, target) {
                return Err(invalid_cast(cast));
            }
            registry.get(cast)
        }
        (FieldKind::Polymorphic(union), Some(cast)) => {
            let Some(t) = registry.resolve_variant(union, cast) else {
                return Err(invalid_cast(cast));
            };
            Some(t)
        }
        (FieldKind::Polymorphic(_), None) => {
            if !last {
                return Err(InvalidMaskError::CastRequired {
                    type_name: ty.name().to_string(),
                    segment: raw.name.clone(),
                });
            }
            None
        }
        (_, Some(cast)) => return Err(invalid_cast(cast)),
        (_, None) => {
            if !last {
                return Err(InvalidMaskError::NotARelation {
                    type_name: ty.name().to_string(),
                    segment: raw.name.clone(),
                });
            }
            None
        }
    };
    let segment = Segment {
        name: field.wire_name.to_string(),
        // Casts are validated above, store the canonical name.
        cast: raw
            .cast
            .as_ref()
            .and_then(|_| next.map(|t| t.name().to_string())),
    };
    Ok((segment, next))
}

fn lookup<'r>(registry: &'r TypeRegistry, name: &str) -> Result<&'r RecordType> {
    lookup_raw(registry, name).map_err(Error::invalid_mask)
}

fn lookup_raw<'r>(
    registry: &'r TypeRegistry,
    name: &str,
) -> std::result::Result<&'r RecordType, InvalidMaskError> {
    registry
        .get(name)
        .ok_or_else(|| InvalidMaskError::UnknownType {
            name: name.to_string(),
        })
}

impl Node {
    fn merge(&mut self, other: &Node) {
        self.selected |= other.selected;
        for (segment, child) in &other.children {
            self.children
                .entry(segment.clone())
                .or_default()
                .merge(child);
        }
    }

    fn render(&self, out: &mut String) {
        let mut first = true;
        let mut separate = |out: &mut String| {
            if !std::mem::take(&mut first) {
                out.push(',');
            }
        };
        for (segment, child) in &self.children {
            if child.selected || child.children.is_empty() {
                separate(out);
                segment.render(out);
            }
            if !child.children.is_empty() {
                separate(out);
                segment.render(out);
                out.push('[');
                child.render(out);
                out.push(']');
            }
        }
    }

    fn leaves(&self, prefix: String, out: &mut Vec<String>) {
        for (segment, child) in &self.children {
            let mut path = if prefix.is_empty() {
                segment.name.clone()
            } else {
                format!("{prefix}.{}", segment.name)
            };
            if let Some(cast) = &segment.cast {
                path = format!("{path}({cast})");
            }
            if child.selected || child.children.is_empty() {
                out.push(path.clone());
            }
            child.leaves(path, out);
        }
    }
}

impl Segment {
    fn render(&self, out: &mut String) {
        out.push_str(&self.name);
        if let Some(cast) = &self.cast {
            out.push('(');
            out.push_str(cast);
            out.push(')');
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct RawSegment {
    name: String,
    cast: Option<String>,
}

/// A recursive descent parser for the mask syntax.
///
/// ```norust
/// mask  := [ "mask" ] "[" list "]" | list
/// list  := item { "," item }
/// item  := path [ "[" list "]" ]
/// path  := segment { "." segment }
/// segment := ident [ "(" ident ")" ]
/// ```
struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

/// The deepest bracket nesting accepted by [Mask::parse].
pub const MAX_DEPTH: usize = 32;

type ParseResult<T> = std::result::Result<T, InvalidMaskError>;

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
        }
    }

    fn path_only(mut self) -> ParseResult<Vec<RawSegment>> {
        let path = self.path()?;
        self.skip_ws();
        if self.pos != self.input.len() {
            return Err(self.error("unexpected trailing characters"));
        }
        Ok(path)
    }

    fn mask(mut self) -> ParseResult<Vec<Vec<RawSegment>>> {
        self.skip_ws();
        let rest = &self.input[self.pos..];
        let prefixed = rest
            .strip_prefix("mask")
            .is_some_and(|r| r.trim_start().starts_with('['));
        if prefixed {
            self.pos += "mask".len();
            self.skip_ws();
        }
        let bracketed = self.peek() == Some('[');
        if bracketed {
            self.pos += 1;
        }
        let mut out = Vec::new();
        self.skip_ws();
        let empty = if bracketed {
            self.peek() == Some(']')
        } else {
            self.pos == self.input.len()
        };
        if !empty {
            self.list(&[], &mut out)?;
        }
        if bracketed {
            self.skip_ws();
            self.expect(']')?;
        }
        self.skip_ws();
        if self.pos != self.input.len() {
            return Err(self.error("unexpected trailing characters"));
        }
        Ok(out)
    }

    fn list(&mut self, prefix: &[RawSegment], out: &mut Vec<Vec<RawSegment>>) -> ParseResult<()> {
        loop {
            self.item(prefix, out)?;
            self.skip_ws();
            if self.peek() == Some(',') {
                self.pos += 1;
                continue;
            }
            return Ok(());
        }
    }

    fn item(&mut self, prefix: &[RawSegment], out: &mut Vec<Vec<RawSegment>>) -> ParseResult<()> {
        let mut full = prefix.to_vec();
        full.extend(self.path()?);
        self.skip_ws();
        if self.peek() == Some('[') {
            if self.depth == MAX_DEPTH {
                return Err(self.error(&format!("masks cannot nest more than {MAX_DEPTH} levels")));
            }
            self.depth += 1;
            self.pos += 1;
            self.skip_ws();
            self.list(&full, out)?;
            self.skip_ws();
            self.expect(']')?;
            self.depth -= 1;
        } else {
            out.push(full);
        }
        Ok(())
    }

    fn path(&mut self) -> ParseResult<Vec<RawSegment>> {
        let mut segments = vec![self.segment()?];
        while self.peek() == Some('.') {
            self.pos += 1;
            segments.push(self.segment()?);
        }
        Ok(segments)
    }

    fn segment(&mut self) -> ParseResult<RawSegment> {
        self.skip_ws();
        let name = self.ident()?;
        let cast = if self.peek() == Some('(') {
            self.pos += 1;
            let cast = self.ident()?;
            self.expect(')')?;
            Some(cast)
        } else {
            None
        };
        Ok(RawSegment { name, cast })
    }

    fn ident(&mut self) -> ParseResult<String> {
        let start = self.pos;
        let len = self.input[start..]
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(self.input.len() - start);
        if len == 0 {
            return Err(self.error("expected a field or type name"));
        }
        self.pos += len;
        Ok(self.input[start..self.pos].to_string())
    }

    fn expect(&mut self, c: char) -> ParseResult<()> {
        if self.peek() != Some(c) {
            return Err(self.error(&format!("expected {c:?}")));
        }
        self.pos += c.len_utf8();
        Ok(())
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += self.peek().map(char::len_utf8).unwrap_or(1);
        }
    }

    fn error(&self, message: &str) -> InvalidMaskError {
        InvalidMaskError::Syntax {
            input: self.input.to_string(),
            offset: self.pos,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::test_registry;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;
    const GUEST: &str = "SoftLayer_Virtual_Guest";

    #[test]
    fn build_and_render() -> TestResult {
        let registry = test_registry();
        let mask = Mask::build(&registry, GUEST, ["id", "hostname", "datacenter.name"])?;
        assert_eq!(mask.root(), GUEST);
        assert_eq!(mask.render(), "mask[datacenter[name],hostname,id]");
        assert_eq!(mask.to_string(), mask.render());
        assert_eq!(mask.paths(), vec!["datacenter.name", "hostname", "id"]);
        Ok(())
    }

    #[test]
    fn short_root_name() -> TestResult {
        let registry = test_registry();
        let mask = Mask::build(&registry, "Virtual_Guest", ["id"])?;
        assert_eq!(mask.root(), GUEST);
        Ok(())
    }

    #[test]
    fn render_is_order_independent() -> TestResult {
        let registry = test_registry();
        let a = Mask::build(&registry, GUEST, ["datacenter.name", "id", "datacenter.longName"])?;
        let b = Mask::build(&registry, GUEST, ["id", "datacenter.longName", "datacenter.name"])?;
        assert_eq!(a.render(), b.render());
        assert_eq!(a.render(), "mask[datacenter[longName,name],id]");
        Ok(())
    }

    #[test_case("nonexistent", "nonexistent"; "unknown top-level")]
    #[test_case("datacenter.nonexistent", "nonexistent"; "unknown nested")]
    fn unknown_field(path: &str, segment: &str) {
        let registry = test_registry();
        let err = Mask::build(&registry, GUEST, ["id", path]).unwrap_err();
        let mask_error = err.as_invalid_mask().expect("should be InvalidMaskError");
        assert!(
            matches!(mask_error, InvalidMaskError::UnknownField { .. }),
            "{mask_error:?}"
        );
        assert_eq!(mask_error.segment(), Some(segment));
    }

    #[test]
    fn scalar_with_children() {
        let registry = test_registry();
        let err = Mask::build(&registry, GUEST, ["hostname.length"]).unwrap_err();
        assert!(
            matches!(
                err.as_invalid_mask(),
                Some(InvalidMaskError::NotARelation { segment, .. }) if segment == "hostname"
            ),
            "{err:?}"
        );
    }

    #[test]
    fn unknown_root() {
        let registry = test_registry();
        let err = Mask::build(&registry, "SoftLayer_Nope", ["id"]).unwrap_err();
        assert!(
            matches!(err.as_invalid_mask(), Some(InvalidMaskError::UnknownType { .. })),
            "{err:?}"
        );
    }

    #[test]
    fn polymorphic() -> TestResult {
        let registry = test_registry();
        let root = "SoftLayer_Container_Search_Result";
        let mask = Mask::build(
            &registry,
            root,
            ["resource(Hardware).hostname", "resourceType", "resource(SoftLayer_Hardware).id"],
        )?;
        assert_eq!(
            mask.render(),
            "mask[resource(SoftLayer_Hardware)[hostname,id],resourceType]"
        );

        // Selecting the field itself does not require a cast.
        let mask = Mask::build(&registry, root, ["resource"])?;
        assert_eq!(mask.render(), "mask[resource]");

        let err = Mask::build(&registry, root, ["resource.hostname"]).unwrap_err();
        assert!(
            matches!(err.as_invalid_mask(), Some(InvalidMaskError::CastRequired { .. })),
            "{err:?}"
        );

        let err = Mask::build(&registry, root, ["resource(SoftLayer_Location).name"]).unwrap_err();
        assert!(
            matches!(err.as_invalid_mask(), Some(InvalidMaskError::InvalidCast { .. })),
            "{err:?}"
        );

        // The cast selects fields of the member type.
        let err = Mask::build(&registry, root, ["resource(SoftLayer_Hardware).maxMemory"]).unwrap_err();
        assert!(
            matches!(err.as_invalid_mask(), Some(InvalidMaskError::UnknownField { .. })),
            "{err:?}"
        );
        Ok(())
    }

    #[test]
    fn record_cast() -> TestResult {
        let registry = test_registry();
        let err = Mask::build(&registry, GUEST, ["datacenter(SoftLayer_Hardware).id"]).unwrap_err();
        assert!(
            matches!(err.as_invalid_mask(), Some(InvalidMaskError::InvalidCast { .. })),
            "{err:?}"
        );
        let err = Mask::build(&registry, GUEST, ["hostname(SoftLayer_Location)"]).unwrap_err();
        assert!(
            matches!(err.as_invalid_mask(), Some(InvalidMaskError::InvalidCast { .. })),
            "{err:?}"
        );
        Ok(())
    }

    #[test]
    fn merge() -> TestResult {
        let registry = test_registry();
        let a = Mask::build(&registry, GUEST, ["id", "datacenter.name"])?;
        let b = Mask::build(&registry, GUEST, ["hostname", "datacenter.longName"])?;
        let ab = a.merge(&b)?;
        let ba = b.merge(&a)?;
        assert_eq!(ab, ba);
        assert_eq!(ab.render(), "mask[datacenter[longName,name],hostname,id]");
        assert_eq!(ab.merge(&ab)?, ab);
        assert_eq!(a.merge(&a)?, a);
        Ok(())
    }

    #[test]
    fn merge_keeps_whole_relation() -> TestResult {
        let registry = test_registry();
        let whole = Mask::build(&registry, GUEST, ["datacenter"])?;
        let nested = Mask::build(&registry, GUEST, ["datacenter.name"])?;
        let got = whole.merge(&nested)?;
        assert_eq!(got, nested.merge(&whole)?);
        assert_eq!(got.paths(), vec!["datacenter", "datacenter.name"]);
        assert_eq!(got.render(), "mask[datacenter,datacenter[name]]");
        assert_ne!(got, nested);

        let built = Mask::build(&registry, GUEST, ["datacenter.name", "datacenter"])?;
        assert_eq!(built, got);
        assert_eq!(Mask::parse(&registry, GUEST, &got.render())?, got);
        Ok(())
    }

    #[test]
    fn merge_root_mismatch() -> TestResult {
        let registry = test_registry();
        let a = Mask::build(&registry, GUEST, ["id"])?;
        let b = Mask::build(&registry, "SoftLayer_Hardware", ["id"])?;
        let err = a.merge(&b).unwrap_err();
        assert!(
            matches!(err.as_invalid_mask(), Some(InvalidMaskError::RootMismatch { .. })),
            "{err:?}"
        );
        Ok(())
    }

    #[test_case("mask[id,hostname,datacenter[name]]"; "bracketed")]
    #[test_case("mask [ id , hostname, datacenter [ name ] ]"; "whitespace")]
    #[test_case("[id,hostname,datacenter.name]"; "no prefix")]
    #[test_case("id,hostname,datacenter.name"; "bare list")]
    fn parse(input: &str) -> TestResult {
        let registry = test_registry();
        let got = Mask::parse(&registry, GUEST, input)?;
        assert_eq!(got.render(), "mask[datacenter[name],hostname,id]");
        Ok(())
    }

    #[test]
    fn parse_roundtrip() -> TestResult {
        let registry = test_registry();
        let root = "SoftLayer_Container_Search_Result";
        let mask = Mask::build(&registry, root, ["resource(Hardware).datacenter.name", "matchedTerms"])?;
        let got = Mask::parse(&registry, root, &mask.render())?;
        assert_eq!(got, mask);
        Ok(())
    }

    #[test]
    fn parse_empty() -> TestResult {
        let registry = test_registry();
        let got = Mask::parse(&registry, GUEST, "mask[]")?;
        assert!(got.is_empty());
        Ok(())
    }

    #[test_case("mask[id"; "unterminated")]
    #[test_case("mask[id,]"; "trailing comma")]
    #[test_case("mask[id]]"; "trailing bracket")]
    #[test_case("mask[datacenter(]"; "unterminated cast")]
    #[test_case("mask[id;hostname]"; "bad separator")]
    fn parse_syntax_error(input: &str) {
        let registry = test_registry();
        let err = Mask::parse(&registry, GUEST, input).unwrap_err();
        assert!(
            matches!(err.as_invalid_mask(), Some(InvalidMaskError::Syntax { .. })),
            "{err:?}"
        );
    }

    #[test]
    fn parse_nesting_limit() -> TestResult {
        let registry = test_registry();
        let deep = format!("mask[{}id{}]", "datacenter[".repeat(1000), "]".repeat(1000));
        let err = Mask::parse(&registry, GUEST, &deep).unwrap_err();
        assert!(
            matches!(err.as_invalid_mask(), Some(InvalidMaskError::Syntax { .. })),
            "{err:?}"
        );

        // Nesting within the limit parses, the registry decides validity.
        let got = Mask::parse(&registry, GUEST, "mask[datacenter[name]]")?;
        assert_eq!(got.paths(), vec!["datacenter.name"]);
        Ok(())
    }

    #[test]
    fn parse_validates() {
        let registry = test_registry();
        let err = Mask::parse(&registry, GUEST, "mask[id,nonexistent]").unwrap_err();
        assert_eq!(
            err.as_invalid_mask().and_then(|e| e.segment()),
            Some("nonexistent")
        );
    }

    #[test]
    fn check_root() -> TestResult {
        let registry = test_registry();
        let mask = Mask::build(&registry, "SoftLayer_Hardware", ["id"])?;
        mask.check_root(&registry, "SoftLayer_Hardware")?;
        mask.check_root(&registry, "SoftLayer_Hardware_Server")?;
        mask.check_root(&registry, "SoftLayer_Entity")?;
        let err = mask.check_root(&registry, GUEST).unwrap_err();
        assert!(
            matches!(err.as_invalid_mask(), Some(InvalidMaskError::RootMismatch { .. })),
            "{err:?}"
        );
        Ok(())
    }
}
