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

//! Converts records to and from their wire representation.
//!
//! Encoding emits only the fields that are present: an absent field is
//! omitted, it is never sent as `null` or as a default value.
//!
//! Decoding checks the payload against the declared shape of the record
//! before converting it. Unknown keys are dropped, `null` values are treated
//! as absent, and every present value must match the declared type of its
//! field. There is no implicit coercion: a string where an integer is
//! expected is a [DecodeError] naming the field. Polymorphic values are
//! resolved to a member of their union, or fail with an [UnknownTypeError].

use crate::Result;
use crate::error::{DecodeError, Error, UnknownTypeError};
use crate::registry::{
    DISCRIMINATOR, FieldKind, FieldShape, Polymorphic, PolymorphicShape, Record, RecordType,
    TypeRegistry,
};
use serde_json::{Map, Value};

/// Encodes a record.
///
/// # Example
/// ```
/// # use softlayer_gax::codec;
/// # use softlayer_gax::registry::*;
/// #[serde_with::skip_serializing_none]
/// #[derive(Default, serde::Serialize, serde::Deserialize)]
/// #[serde(rename_all = "camelCase")]
/// struct Location {
///     id: Option<i64>,
///     name: Option<String>,
/// }
/// # static SHAPE: RecordShape = RecordShape { name: "SoftLayer_Location", parent: None, fields: &[] };
/// # impl Record for Location { fn shape() -> &'static RecordShape { &SHAPE } }
/// let value = codec::encode(&Location { id: Some(0), ..Default::default() })?;
/// assert_eq!(value, serde_json::json!({"id": 0}));
/// # Ok::<(), softlayer_gax::error::Error>(())
/// ```
pub fn encode<T: Record>(record: &T) -> Result<Value> {
    serde_json::to_value(record).map_err(Error::ser)
}

/// Encodes any positional argument of a method call.
pub fn to_argument<T: serde::Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(Error::ser)
}

/// Decodes a record of type `T` from a payload.
pub fn decode<T: Record>(registry: &TypeRegistry, value: Value) -> Result<T> {
    decode_at(registry, value, "")
}

/// Decodes a record, reporting errors relative to `path`.
pub(crate) fn decode_at<T: Record>(registry: &TypeRegistry, value: Value, path: &str) -> Result<T> {
    let ty = registry
        .get(T::typename())
        .ok_or_else(|| Error::deser(format!("type {} is not registered", T::typename())))?;
    let normalized = normalize_record(registry, ty, value, path)?;
    from_normalized(normalized, T::typename(), path)
}

/// Decodes a value of a polymorphic union, resolving its concrete type.
pub fn decode_polymorphic<U: Polymorphic>(registry: &TypeRegistry, value: Value) -> Result<U> {
    decode_polymorphic_at(registry, value, "")
}

pub(crate) fn decode_polymorphic_at<U: Polymorphic>(
    registry: &TypeRegistry,
    value: Value,
    path: &str,
) -> Result<U> {
    let union = U::shape();
    let normalized = normalize_polymorphic(registry, union, None, value, path)?;
    from_normalized(normalized, union.name, path)
}

fn from_normalized<T: serde::de::DeserializeOwned>(
    value: Value,
    type_name: &str,
    path: &str,
) -> Result<T> {
    serde_json::from_value::<T>(value).map_err(|e| {
        Error::decode(DecodeError::new(type_name, e.to_string()).with_path(path.to_string()))
    })
}

fn normalize_record(
    registry: &TypeRegistry,
    ty: &RecordType,
    value: Value,
    path: &str,
) -> Result<Value> {
    let map = match value {
        Value::Object(map) => map,
        other => return Err(mismatch(path, ty.name(), &other)),
    };
    let mut output = Map::with_capacity(map.len());
    let hints = map.clone();
    for (key, value) in map {
        if value.is_null() {
            continue;
        }
        let Some(field) = ty.field(&key) else {
            tracing::trace!("dropping unknown field {key} in {}", ty.name());
            continue;
        };
        if field.deprecated {
            tracing::warn!(
                "the response includes the deprecated field {}.{}",
                ty.name(),
                field.wire_name
            );
        }
        let field_path = join_field(path, field.wire_name);
        let value = normalize_field(registry, field, &hints, value, &field_path)?;
        output.insert(key, value);
    }
    Ok(Value::Object(output))
}

fn normalize_field(
    registry: &TypeRegistry,
    field: &FieldShape,
    siblings: &Map<String, Value>,
    value: Value,
    path: &str,
) -> Result<Value> {
    if !field.repeated {
        return normalize_value(registry, &field.kind, siblings, value, path);
    }
    let items = match value {
        Value::Array(items) => items,
        other => return Err(mismatch(path, "array", &other)),
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, v)| normalize_value(registry, &field.kind, siblings, v, &format!("{path}[{i}]")))
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

fn normalize_value(
    registry: &TypeRegistry,
    kind: &FieldKind,
    siblings: &Map<String, Value>,
    value: Value,
    path: &str,
) -> Result<Value> {
    match kind {
        FieldKind::Record(name) => {
            let ty = registry
                .get(name)
                .ok_or_else(|| Error::deser(format!("type {name} is not registered")))?;
            return normalize_record(registry, ty, value, path);
        }
        FieldKind::Polymorphic(union) => {
            let hint = union
                .hint
                .and_then(|h| siblings.get(h))
                .and_then(|v| v.as_str());
            return normalize_polymorphic(registry, union, hint, value, path);
        }
        _ => {}
    }
    let valid = match (kind, &value) {
        (FieldKind::Bool, Value::Bool(_)) => true,
        (FieldKind::Integer, Value::Number(n)) => n.is_i64(),
        (FieldKind::Unsigned, Value::Number(n)) => n.is_u64(),
        (FieldKind::Decimal, Value::Number(_)) => true,
        (FieldKind::Decimal, Value::String(s)) => wkt::Decimal::try_from(s.as_str()).is_ok(),
        (FieldKind::String, Value::String(_)) => true,
        (FieldKind::Bytes, Value::String(s)) => wkt::Blob::from_base64(s).is_ok(),
        (FieldKind::Timestamp, Value::String(s)) => wkt::Timestamp::try_from(s.as_str()).is_ok(),
        _ => false,
    };
    if valid {
        Ok(value)
    } else {
        Err(mismatch(path, expected_name(kind), &value))
    }
}

fn normalize_polymorphic(
    registry: &TypeRegistry,
    union: &PolymorphicShape,
    hint: Option<&str>,
    value: Value,
    path: &str,
) -> Result<Value> {
    let embedded = value
        .get(DISCRIMINATOR)
        .and_then(|v| v.as_str())
        .map(str::to_string);
    let Some(discriminator) = hint.map(str::to_string).or(embedded) else {
        if !value.is_object() {
            return Err(mismatch(path, union.name, &value));
        }
        return Err(Error::decode(
            DecodeError::new(format!("{union} with a type discriminator", union = union.name), "none")
                .with_path(path.to_string()),
        ));
    };
    let Some(ty) = registry.resolve_variant(union, &discriminator) else {
        return Err(Error::unknown_type(
            UnknownTypeError::new(discriminator, union.name).with_path(path),
        ));
    };
    let mut normalized = normalize_record(registry, ty, value, path)?;
    if let Value::Object(map) = &mut normalized {
        map.insert(DISCRIMINATOR.to_string(), Value::String(ty.name().to_string()));
    }
    Ok(normalized)
}

fn mismatch(path: &str, expected: &str, actual: &Value) -> Error {
    Error::decode(DecodeError::new(expected, describe(actual)).with_path(path.to_string()))
}

fn expected_name(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Bool => "boolean",
        FieldKind::Integer => "integer",
        FieldKind::Unsigned => "unsigned integer",
        FieldKind::Decimal => "decimal",
        FieldKind::String => "string",
        FieldKind::Bytes => "base64 string",
        FieldKind::Timestamp => "RFC 3339 timestamp",
        FieldKind::Record(name) => *name,
        FieldKind::Polymorphic(union) => union.name,
    }
}

pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) if s.chars().count() > 32 => {
            format!("string {:?}...", s.chars().take(32).collect::<String>())
        }
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

fn join_field(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::{
        HARDWARE, HARDWARE_SERVER, LOCATION, RESOURCE, SEARCH_RESULT, VIRTUAL_GUEST,
        test_registry,
    };
    use crate::registry::RecordShape;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Location {
        id: Option<i64>,
        name: Option<String>,
        long_name: Option<String>,
    }
    impl Record for Location {
        fn shape() -> &'static RecordShape {
            &LOCATION
        }
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Guest {
        id: Option<i64>,
        hostname: Option<String>,
        max_memory: Option<u64>,
        create_date: Option<wkt::Timestamp>,
        recurring_fee: Option<wkt::Decimal>,
        hourly_billing_flag: Option<bool>,
        user_data: Option<wkt::Blob>,
        datacenter: Option<Location>,
        tags: Option<Vec<String>>,
    }
    impl Record for Guest {
        fn shape() -> &'static RecordShape {
            &VIRTUAL_GUEST
        }
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Hardware {
        id: Option<i64>,
        hostname: Option<String>,
        datacenter: Option<Location>,
    }
    impl Record for Hardware {
        fn shape() -> &'static RecordShape {
            &HARDWARE
        }
    }

    #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(tag = "complexType")]
    enum Resource {
        #[serde(rename = "SoftLayer_Hardware")]
        Hardware(Hardware),
        #[serde(rename = "SoftLayer_Virtual_Guest")]
        VirtualGuest(Guest),
    }
    impl Polymorphic for Resource {
        fn shape() -> &'static PolymorphicShape {
            &RESOURCE
        }
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct SearchResult {
        matched_terms: Option<Vec<String>>,
        resource: Option<Resource>,
        resource_type: Option<String>,
    }
    impl Record for SearchResult {
        fn shape() -> &'static RecordShape {
            &SEARCH_RESULT
        }
    }

    #[test]
    fn roundtrip() -> TestResult {
        let registry = test_registry();
        let input = Guest {
            id: Some(123),
            hostname: Some("web1".into()),
            max_memory: Some(2048),
            create_date: Some(wkt::Timestamp::try_from("2019-03-07T14:03:34-06:00")?),
            recurring_fee: Some(wkt::Decimal::try_from("12.34")?),
            hourly_billing_flag: Some(false),
            user_data: Some(wkt::Blob::from("#cloud-config")),
            datacenter: Some(Location {
                name: Some("dal10".into()),
                ..Default::default()
            }),
            tags: Some(vec!["b".into(), "a".into()]),
        };
        let encoded = encode(&input)?;
        let got = decode::<Guest>(&registry, encoded)?;
        assert_eq!(got, input);
        Ok(())
    }

    #[test]
    fn omission() -> TestResult {
        let input = Guest {
            id: Some(0),
            hostname: Some(String::new()),
            hourly_billing_flag: Some(false),
            tags: Some(Vec::new()),
            ..Default::default()
        };
        let got = encode(&input)?;
        assert_eq!(
            got,
            json!({"id": 0, "hostname": "", "hourlyBillingFlag": false, "tags": []})
        );
        assert_eq!(encode(&Guest::default())?, json!({}));
        Ok(())
    }

    #[test]
    fn unknown_fields_and_nulls() -> TestResult {
        let registry = test_registry();
        let input = json!({
            "id": 42,
            "hostname": null,
            "notAField": {"nested": true},
            "complexType": "SoftLayer_Virtual_Guest",
            "datacenter": {"name": "dal10", "statusId": 2},
        });
        let got = decode::<Guest>(&registry, input)?;
        let want = Guest {
            id: Some(42),
            datacenter: Some(Location {
                name: Some("dal10".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(json!({"id": "123"}), "id", "integer"; "string for integer")]
    #[test_case(json!({"maxMemory": -1}), "maxMemory", "unsigned integer"; "negative unsigned")]
    #[test_case(json!({"hostname": 7}), "hostname", "string"; "number for string")]
    #[test_case(json!({"hourlyBillingFlag": "false"}), "hourlyBillingFlag", "boolean"; "string for bool")]
    #[test_case(json!({"recurringFee": "abc"}), "recurringFee", "decimal"; "bad decimal")]
    #[test_case(json!({"createDate": "yesterday"}), "createDate", "RFC 3339 timestamp"; "bad timestamp")]
    #[test_case(json!({"userData": "***"}), "userData", "base64 string"; "bad bytes")]
    #[test_case(json!({"datacenter": {"id": 1.5}}), "datacenter.id", "integer"; "nested")]
    #[test_case(json!({"datacenter": {"id": u64::MAX}}), "datacenter.id", "integer"; "integer out of range")]
    #[test_case(json!({"datacenter": "dal10"}), "datacenter", "SoftLayer_Location"; "scalar for record")]
    #[test_case(json!({"tags": "a,b"}), "tags", "array"; "scalar for sequence")]
    #[test_case(json!({"tags": ["a", 2]}), "tags[1]", "string"; "sequence element")]
    fn type_mismatch(input: Value, path: &str, expected: &str) -> TestResult {
        let registry = test_registry();
        let got = decode::<Guest>(&registry, input);
        let err = got.expect_err("type mismatch should fail");
        let decode = err.decode_error().expect("error should carry DecodeError");
        assert_eq!(decode.path(), path, "{err}");
        assert_eq!(decode.expected(), expected, "{err}");
        Ok(())
    }

    #[test]
    fn root_not_an_object() {
        let registry = test_registry();
        let err = decode::<Guest>(&registry, json!([1, 2])).unwrap_err();
        let decode = err.decode_error().unwrap();
        assert_eq!(decode.path(), "");
        assert_eq!(decode.expected(), "SoftLayer_Virtual_Guest");
        assert_eq!(decode.actual(), "array");
    }

    #[test]
    fn decimal_forms() -> TestResult {
        let registry = test_registry();
        let got = decode::<Guest>(&registry, json!({"recurringFee": 0.1}))?;
        assert_eq!(got.recurring_fee, Some(wkt::Decimal::try_from("0.1")?));
        let got = decode::<Guest>(&registry, json!({"recurringFee": "0.10"}))?;
        assert_eq!(got.recurring_fee, Some(wkt::Decimal::try_from("0.1")?));
        Ok(())
    }

    #[test]
    fn decimal_keeps_every_digit() -> TestResult {
        let registry = test_registry();
        let input = serde_json::from_str::<Value>(r#"{"recurringFee": 12345678901234567.89}"#)?;
        let got = decode::<Guest>(&registry, input)?;
        let fee = got.recurring_fee.expect("the payload has a fee");
        assert_eq!(fee.to_string(), "12345678901234567.89");
        Ok(())
    }

    #[test_case("Hardware"; "short name")]
    #[test_case("SoftLayer_Hardware"; "canonical name")]
    fn polymorphic_hint(resource_type: &str) -> TestResult {
        let registry = test_registry();
        let input = json!({
            "matchedTerms": ["web1"],
            "resourceType": resource_type,
            "resource": {"id": 7, "hostname": "web1"},
        });
        let got = decode::<SearchResult>(&registry, input)?;
        let want = Resource::Hardware(Hardware {
            id: Some(7),
            hostname: Some("web1".into()),
            ..Default::default()
        });
        assert_eq!(got.resource, Some(want));
        Ok(())
    }

    #[test]
    fn polymorphic_embedded() -> TestResult {
        let registry = test_registry();
        let input = json!({"complexType": "SoftLayer_Virtual_Guest", "id": 9, "extra": 1});
        let got = decode_polymorphic::<Resource>(&registry, input)?;
        let want = Resource::VirtualGuest(Guest {
            id: Some(9),
            ..Default::default()
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn polymorphic_unknown() {
        let registry = test_registry();
        let input = json!({
            "resourceType": "Bogus_Type",
            "resource": {"id": 7},
        });
        let err = decode::<SearchResult>(&registry, input).unwrap_err();
        let unknown = err.as_unknown_type().expect("error should be UnknownTypeError");
        assert_eq!(unknown.discriminator(), "Bogus_Type");
        assert_eq!(unknown.path(), "resource");
        assert!(err.to_string().contains("Bogus_Type"), "{err}");
    }

    #[test]
    fn polymorphic_outside_union() {
        let registry = test_registry();
        let input = json!({"complexType": "SoftLayer_Location", "id": 1});
        let err = decode_polymorphic::<Resource>(&registry, input).unwrap_err();
        assert!(err.as_unknown_type().is_some(), "{err:?}");
    }

    #[test]
    fn polymorphic_missing_discriminator() {
        let registry = test_registry();
        let err = decode_polymorphic::<Resource>(&registry, json!({"id": 1})).unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        assert!(err.decode_error().is_some(), "{err:?}");
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Server {
        id: Option<i64>,
        hostname: Option<String>,
        memory_capacity: Option<u64>,
    }
    impl Record for Server {
        fn shape() -> &'static RecordShape {
            &HARDWARE_SERVER
        }
    }

    // Captures the messages of WARN events.
    #[derive(Clone, Default)]
    struct WarnLayer {
        messages: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnLayer {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if *event.metadata().level() != tracing::Level::WARN {
                return;
            }
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.messages.lock().unwrap().push(visitor.0);
        }
    }

    struct MessageVisitor(String);

    impl tracing::field::Visit for MessageVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    #[test]
    fn deprecated_field_decodes_with_warning() -> TestResult {
        use tracing_subscriber::prelude::*;
        let layer = WarnLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());

        let registry = test_registry();
        let input = json!({"id": 1, "hostname": "db1", "memoryCapacity": 64});
        let got = tracing::subscriber::with_default(subscriber, || {
            decode::<Server>(&registry, input)
        })?;
        let want = Server {
            id: Some(1),
            hostname: Some("db1".into()),
            memory_capacity: Some(64),
        };
        assert_eq!(got, want);

        let messages = layer.messages.lock().unwrap();
        assert_eq!(messages.len(), 1, "{messages:?}");
        assert!(
            messages[0].contains("SoftLayer_Hardware_Server.hostname"),
            "{messages:?}"
        );
        Ok(())
    }

    #[test]
    fn describe_values() {
        assert_eq!(describe(&json!(null)), "null");
        assert_eq!(describe(&json!(1)), "number 1");
        assert_eq!(describe(&json!("abc")), "string \"abc\"");
        let long = "x".repeat(40);
        assert!(describe(&json!(long)).ends_with("..."));
    }
}
