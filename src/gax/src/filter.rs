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

//! Object filters.
//!
//! Object filters restrict the records returned by list methods. They are
//! sent as a JSON document mirroring the relational path of the filtered
//! property, for example:
//!
//! ```norust
//! {"virtualGuests":{"hostname":{"operation":"^= web"}}}
//! ```
//!
//! # Example
//! ```
//! # use softlayer_gax::filter::{Filter, Path};
//! let filter = Filter::new()
//!     .with(Path::new("virtualGuests.hostname").starts_with("web"))
//!     .with(Path::new("virtualGuests.id").order_by_desc());
//! assert_eq!(
//!     filter.build(),
//!     r#"{"virtualGuests":{"hostname":{"operation":"^= web"},"id":{"operation":"orderBy","options":[{"name":"sort","value":["DESC"]}]}}}"#
//! );
//! ```

use serde_json::{Map, Value, json};

/// A set of conditions, merged into a single filter document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    root: Map<String, Value>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a condition.
    ///
    /// Conditions on different properties are merged. Conditions on the same
    /// property replace any previous operation.
    pub fn with(mut self, condition: Condition) -> Self {
        self.push(condition);
        self
    }

    pub fn push(&mut self, condition: Condition) {
        let Condition { path, op } = condition;
        let tree = path.into_iter().rev().fold(op, |inner, segment| {
            let mut outer = Map::new();
            outer.insert(segment, Value::Object(inner));
            outer
        });
        merge(&mut self.root, tree);
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Renders the filter as a JSON string.
    ///
    /// Keys are sorted, so equal filters always render identically.
    pub fn build(&self) -> String {
        Value::Object(self.root.clone()).to_string()
    }

    /// The filter as a JSON value.
    pub fn as_value(&self) -> Value {
        Value::Object(self.root.clone())
    }
}

const OPERATION: &str = "operation";

fn merge(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match (target.get_mut(&key), value) {
            // A new operation replaces the whole condition, options included.
            (Some(Value::Object(t)), Value::Object(s)) if !s.contains_key(OPERATION) => merge(t, s),
            (_, value) => {
                target.insert(key, value);
            }
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.build())
    }
}

impl FromIterator<Condition> for Filter {
    fn from_iter<I: IntoIterator<Item = Condition>>(iter: I) -> Self {
        let mut filter = Filter::new();
        iter.into_iter().for_each(|c| filter.push(c));
        filter
    }
}

/// One condition on a property.
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    path: Vec<String>,
    op: Map<String, Value>,
}

/// The dotted path of a filtered property, e.g. `virtualGuests.hostname`.
#[derive(Clone, Debug, PartialEq)]
pub struct Path(Vec<String>);

impl Path {
    pub fn new<T: AsRef<str>>(path: T) -> Self {
        Self(
            path.as_ref()
                .split('.')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Matches values equal to `value`.
    pub fn eq<V: Into<Value>>(self, value: V) -> Condition {
        self.operation(value.into())
    }

    pub fn not_eq<V: std::fmt::Display>(self, value: V) -> Condition {
        self.prefixed("!=", value)
    }

    /// Matches values with a pattern, `*` is the wildcard.
    pub fn like<V: std::fmt::Display>(self, value: V) -> Condition {
        self.prefixed("~", value)
    }

    pub fn not_like<V: std::fmt::Display>(self, value: V) -> Condition {
        self.prefixed("!~", value)
    }

    pub fn contains<V: std::fmt::Display>(self, value: V) -> Condition {
        self.prefixed("*=", value)
    }

    pub fn starts_with<V: std::fmt::Display>(self, value: V) -> Condition {
        self.prefixed("^=", value)
    }

    pub fn ends_with<V: std::fmt::Display>(self, value: V) -> Condition {
        self.prefixed("$=", value)
    }

    pub fn gt<V: std::fmt::Display>(self, value: V) -> Condition {
        self.prefixed(">", value)
    }

    pub fn lt<V: std::fmt::Display>(self, value: V) -> Condition {
        self.prefixed("<", value)
    }

    pub fn ge<V: std::fmt::Display>(self, value: V) -> Condition {
        self.prefixed(">=", value)
    }

    pub fn le<V: std::fmt::Display>(self, value: V) -> Condition {
        self.prefixed("<=", value)
    }

    pub fn is_null(self) -> Condition {
        self.operation(Value::from("is null"))
    }

    pub fn not_null(self) -> Condition {
        self.operation(Value::from("not null"))
    }

    /// Matches any of the given values.
    pub fn in_list<I, V>(self, values: I) -> Condition
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.with_options("in", json!([{"name": "data", "value": values}]))
    }

    /// Matches dates in the `[start, end]` range.
    ///
    /// The service expects dates as `MM/DD/YYYY` or `MM/DD/YYYY HH:MM:SS`.
    pub fn date_between<S: Into<String>, E: Into<String>>(self, start: S, end: E) -> Condition {
        self.with_options(
            "betweenDate",
            json!([
                {"name": "startDate", "value": [start.into()]},
                {"name": "endDate", "value": [end.into()]},
            ]),
        )
    }

    pub fn date_after<S: Into<String>>(self, date: S) -> Condition {
        self.with_options("greaterThanDate", json!([{"name": "date", "value": [date.into()]}]))
    }

    pub fn date_before<S: Into<String>>(self, date: S) -> Condition {
        self.with_options("lessThanDate", json!([{"name": "date", "value": [date.into()]}]))
    }

    pub fn order_by_asc(self) -> Condition {
        self.order_by(Order::Asc)
    }

    pub fn order_by_desc(self) -> Condition {
        self.order_by(Order::Desc)
    }

    pub fn order_by(self, order: Order) -> Condition {
        self.with_options("orderBy", json!([{"name": "sort", "value": [order.as_str()]}]))
    }

    fn prefixed<V: std::fmt::Display>(self, op: &str, value: V) -> Condition {
        self.operation(Value::from(format!("{op} {value}")))
    }

    fn operation(self, value: Value) -> Condition {
        let mut op = Map::new();
        op.insert(OPERATION.to_string(), value);
        Condition { path: self.0, op }
    }

    fn with_options(self, operation: &str, options: Value) -> Condition {
        let mut condition = self.operation(Value::from(operation));
        condition.op.insert("options".to_string(), options);
        condition
    }
}

/// The sort order in an `orderBy` condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(Path::new("id").eq(123), json!({"id": {"operation": 123}}))]
    #[test_case(Path::new("hostname").eq("web1"), json!({"hostname": {"operation": "web1"}}))]
    #[test_case(Path::new("hostname").not_eq("web1"), json!({"hostname": {"operation": "!= web1"}}))]
    #[test_case(Path::new("hostname").like("web*"), json!({"hostname": {"operation": "~ web*"}}))]
    #[test_case(Path::new("hostname").not_like("web*"), json!({"hostname": {"operation": "!~ web*"}}))]
    #[test_case(Path::new("hostname").contains("eb"), json!({"hostname": {"operation": "*= eb"}}))]
    #[test_case(Path::new("hostname").starts_with("we"), json!({"hostname": {"operation": "^= we"}}))]
    #[test_case(Path::new("hostname").ends_with("b1"), json!({"hostname": {"operation": "$= b1"}}))]
    #[test_case(Path::new("maxMemory").gt(1024), json!({"maxMemory": {"operation": "> 1024"}}))]
    #[test_case(Path::new("maxMemory").lt(1024), json!({"maxMemory": {"operation": "< 1024"}}))]
    #[test_case(Path::new("maxMemory").ge(1024), json!({"maxMemory": {"operation": ">= 1024"}}))]
    #[test_case(Path::new("maxMemory").le(1024), json!({"maxMemory": {"operation": "<= 1024"}}))]
    #[test_case(Path::new("notes").is_null(), json!({"notes": {"operation": "is null"}}))]
    #[test_case(Path::new("notes").not_null(), json!({"notes": {"operation": "not null"}}))]
    fn operations(condition: Condition, want: Value) {
        let got = Filter::new().with(condition).as_value();
        assert_eq!(got, want);
    }

    #[test]
    fn in_list() {
        let got = Filter::new()
            .with(Path::new("virtualGuests.id").in_list([1, 2, 3]))
            .as_value();
        let want = json!({"virtualGuests": {"id": {
            "operation": "in",
            "options": [{"name": "data", "value": [1, 2, 3]}],
        }}});
        assert_eq!(got, want);
    }

    #[test]
    fn dates() {
        let got = Filter::new()
            .with(Path::new("invoices.createDate").date_between("01/01/2025", "02/01/2025"))
            .as_value();
        let want = json!({"invoices": {"createDate": {
            "operation": "betweenDate",
            "options": [
                {"name": "startDate", "value": ["01/01/2025"]},
                {"name": "endDate", "value": ["02/01/2025"]},
            ],
        }}});
        assert_eq!(got, want);

        let got = Filter::new()
            .with(Path::new("createDate").date_after("01/01/2025"))
            .as_value();
        assert_eq!(got["createDate"]["operation"], "greaterThanDate");
        let got = Filter::new()
            .with(Path::new("createDate").date_before("01/01/2025"))
            .as_value();
        assert_eq!(got["createDate"]["operation"], "lessThanDate");
    }

    #[test]
    fn merge_and_render() {
        let a = Filter::new()
            .with(Path::new("virtualGuests.hostname").eq("web1"))
            .with(Path::new("virtualGuests.datacenter.name").eq("dal13"))
            .with(Path::new("virtualGuests.id").order_by_asc());
        let b: Filter = [
            Path::new("virtualGuests.id").order_by(Order::Asc),
            Path::new("virtualGuests.datacenter.name").eq("dal13"),
            Path::new("virtualGuests.hostname").eq("web1"),
        ]
        .into_iter()
        .collect();
        assert_eq!(a.build(), b.build());
        assert_eq!(
            a.to_string(),
            r#"{"virtualGuests":{"datacenter":{"name":{"operation":"dal13"}},"hostname":{"operation":"web1"},"id":{"operation":"orderBy","options":[{"name":"sort","value":["ASC"]}]}}}"#
        );
    }

    #[test]
    fn same_property_replaces() {
        let got = Filter::new()
            .with(Path::new("hostname").eq("a"))
            .with(Path::new("hostname").eq("b"))
            .as_value();
        assert_eq!(got, json!({"hostname": {"operation": "b"}}));

        let got = Filter::new()
            .with(Path::new("virtualGuests.id").in_list([1, 2]))
            .with(Path::new("virtualGuests.id").eq(3))
            .as_value();
        assert_eq!(got, json!({"virtualGuests": {"id": {"operation": 3}}}));

        let got = Filter::new()
            .with(Path::new("id").eq(3))
            .with(Path::new("id").order_by_desc())
            .as_value();
        assert_eq!(
            got,
            json!({"id": {"operation": "orderBy", "options": [{"name": "sort", "value": ["DESC"]}]}})
        );
    }

    #[test]
    fn empty() {
        let filter = Filter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.build(), "{}");
        assert_eq!(Path::new("a..b"), Path::new("a.b"));
    }
}
