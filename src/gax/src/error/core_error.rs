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

use super::fault::ApiFault;
use super::{DecodeError, InvalidMaskError, UnknownTypeError};
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. The transport may
/// be unable to reach the service, the request may time out, the service may
/// raise a fault, or the response may not match the declared shape of the
/// result. The library may also reject a request before sending it, for
/// example when an object mask names a field the type does not have.
///
/// This type offers a series of predicates to determine the error kind, and
/// accessors to query the most common error details. Applications can query
/// the error [source][std::error::Error::source] for deeper information.
///
/// # Example
/// ```
/// use softlayer_gax::error::Error;
/// match example_function() {
///     Err(e) if e.as_fault().is_some() => {
///         println!("service fault {e}, class={}", e.as_fault().unwrap().exception_class);
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use softlayer_gax::error::fault::ApiFault;
///     # Err(Error::fault(ApiFault::default().set_exception_class("SoftLayer_Exception_ObjectNotFound")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the fault returned by the service.
    ///
    /// # Example
    /// ```
    /// use softlayer_gax::error::Error;
    /// use softlayer_gax::error::fault::ApiFault;
    /// let fault = ApiFault::default().set_exception_class("SoftLayer_Exception_Public");
    /// let error = Error::fault(fault.clone());
    /// assert_eq!(error.as_fault(), Some(&fault));
    /// ```
    pub fn fault(fault: ApiFault) -> Self {
        Self::fault_with_http_metadata(fault, None, None)
    }

    /// Creates a fault error including transport metadata.
    pub fn fault_with_http_metadata(
        fault: ApiFault,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let details = FaultDetails {
            fault,
            status_code,
            headers,
        };
        Self {
            kind: ErrorKind::Fault(Box::new(details)),
            source: None,
        }
    }

    /// The [ApiFault] raised by the service, if any.
    ///
    /// The exception class and message are preserved verbatim. Consult the
    /// service documentation for the meaning of each exception class.
    pub fn as_fault(&self) -> Option<&ApiFault> {
        match &self.kind {
            ErrorKind::Fault(d) => Some(&d.fault),
            _ => None,
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use softlayer_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.is_transport());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// The request may or may not have reached the service. If the request
    /// mutates any state in the service, it may or may not be safe to attempt
    /// the request again.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing a failure to connect to the service.
    ///
    /// # Example
    /// ```
    /// use softlayer_gax::error::Error;
    /// let error = Error::connect("connection refused");
    /// assert!(error.is_connect());
    /// assert!(error.is_transport());
    /// ```
    pub fn connect<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Connect,
            source: Some(source.into()),
        }
    }

    /// The transport could not establish a connection.
    ///
    /// The request never reached the service.
    pub fn is_connect(&self) -> bool {
        matches!(self.kind, ErrorKind::Connect)
    }

    /// Creates an error representing a response that does not match the
    /// declared result type.
    ///
    /// # Example
    /// ```
    /// use softlayer_gax::error::{DecodeError, Error};
    /// let error = Error::decode(DecodeError::new("integer", "string").in_field("id"));
    /// assert!(error.is_deserialization());
    /// assert_eq!(error.decode_error().map(|e| e.path()), Some("id"));
    /// ```
    pub fn decode(source: DecodeError) -> Self {
        Self::deser(source)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is a response whose values do not match the
    /// types declared by the record. Use [decode_error][Error::decode_error]
    /// to find the field path and the mismatched types.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// The [DecodeError] details, if this is a deserialization error.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match &self.kind {
            ErrorKind::Deserialization => self.source.as_ref()?.downcast_ref::<DecodeError>(),
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request arguments could not be serialized.
    ///
    /// This is always a client-side error, detected before the request is
    /// made.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error for an object mask that does not match its type.
    ///
    /// # Example
    /// ```
    /// use softlayer_gax::error::{Error, InvalidMaskError};
    /// let error = Error::invalid_mask(InvalidMaskError::UnknownType { name: "Nope".into() });
    /// assert!(error.as_invalid_mask().is_some());
    /// ```
    pub fn invalid_mask(source: InvalidMaskError) -> Self {
        Self {
            kind: ErrorKind::InvalidMask,
            source: Some(source.into()),
        }
    }

    /// The [InvalidMaskError] details, if the request was rejected because of
    /// its object mask.
    ///
    /// This is always a client-side error: masks are validated before any
    /// request is sent.
    pub fn as_invalid_mask(&self) -> Option<&InvalidMaskError> {
        match &self.kind {
            ErrorKind::InvalidMask => self.source.as_ref()?.downcast_ref::<InvalidMaskError>(),
            _ => None,
        }
    }

    /// Creates an error for a polymorphic value with an unknown type name.
    pub fn unknown_type(source: UnknownTypeError) -> Self {
        Self {
            kind: ErrorKind::UnknownType,
            source: Some(source.into()),
        }
    }

    /// The [UnknownTypeError] details, if a polymorphic value in the response
    /// named a type outside its declared union.
    pub fn as_unknown_type(&self) -> Option<&UnknownTypeError> {
        match &self.kind {
            ErrorKind::UnknownType => self.source.as_ref()?.downcast_ref::<UnknownTypeError>(),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use softlayer_gax::error::Error;
    /// let e = Error::http(502, http::HeaderMap::new(), bytes::Bytes::from_static(b"bad gateway"));
    /// assert_eq!(e.http_status_code(), Some(502));
    /// ```
    ///
    /// Sometimes the error is generated before it reaches the SoftLayer API.
    /// For example, a proxy or load balancer may generate errors without a
    /// fault payload. In such cases the client library returns the status
    /// code, headers, and HTTP payload.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.status_code,
            ErrorKind::Fault(d) => d.status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.headers.as_ref(),
            ErrorKind::Fault(d) => d.headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot form a valid request.
    ///
    /// This indicates the request is missing required parameters, such as the
    /// id of the object a method applies to.
    #[doc(hidden)]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// If true, the request was missing required parameters.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A non-success HTTP response without a recognizable fault.
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        let kind = ErrorKind::Transport(Box::new(details));
        Self { kind, source: None }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include: a broken connection after the request is sent, or a
    /// body that cannot be read.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem completing the request after the connection was established.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        }))
    }

    /// The request failed in the transport layer.
    ///
    /// This includes connection failures, timeouts, broken connections, and
    /// HTTP errors without a fault payload. The transport never retries, the
    /// application decides whether to attempt the request again.
    pub fn is_transport(&self) -> bool {
        matches!(
            &self.kind,
            ErrorKind::Transport(_) | ErrorKind::Timeout | ErrorKind::Connect
        )
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot build the request {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::InvalidMask, Some(e)) => write!(f, "invalid object mask: {e}"),
            (ErrorKind::UnknownType, Some(e)) => {
                write!(f, "cannot resolve polymorphic value: {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Connect, Some(e)) => {
                write!(f, "cannot connect to the service {e}")
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Fault(d), _) => {
                write!(
                    f,
                    "the service reports a fault {} described as: {}",
                    d.fault.exception_class, d.fault.exception_message
                )
            }
            (_, None) => write!(f, "{:?}", self.kind),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    InvalidMask,
    UnknownType,
    Timeout,
    Connect,
    Transport(Box<TransportDetails>),
    Fault(Box<FaultDetails>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => write!(f, "the transport reports an unknown error"),
        }
    }
}

#[derive(Debug)]
struct FaultDetails {
    fault: ApiFault,
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    fn sample_fault() -> ApiFault {
        ApiFault::default()
            .set_exception_class("SoftLayer_Exception_ObjectNotFound")
            .set_exception_message("Unable to find object with id of '123'.")
    }

    #[test]
    fn fault() {
        let fault = sample_fault();
        let error = Error::fault(fault.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.as_fault(), Some(&fault));
        assert!(
            error.to_string().contains("SoftLayer_Exception_ObjectNotFound"),
            "{error}"
        );
        assert!(error.to_string().contains("'123'"), "{error}");
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
    }

    #[test]
    fn fault_with_http_metadata() {
        let headers = {
            let mut headers = HeaderMap::new();
            headers.insert(
                "content-type",
                http::HeaderValue::from_static("application/json"),
            );
            headers
        };
        let error =
            Error::fault_with_http_metadata(sample_fault(), Some(404), Some(headers.clone()));
        assert_eq!(error.as_fault(), Some(&sample_fault()));
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers));
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn timeout() {
        let source = wkt::TimestampError::OutOfRange;
        let error = Error::timeout(source);
        assert!(error.is_timeout(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_connect(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<wkt::TimestampError>());
        assert!(
            matches!(got, Some(wkt::TimestampError::OutOfRange)),
            "{error:?}"
        );
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.as_fault().is_none(), "{error:?}");
    }

    #[test]
    fn connect() {
        let error = Error::connect("connection refused");
        assert!(error.is_connect(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_timeout(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.to_string().contains("connection refused"), "{error}");
    }

    #[test]
    fn decode() {
        let source = DecodeError::new("integer", "string").in_field("id");
        let error = Error::decode(source.clone());
        assert!(error.is_deserialization(), "{error:?}");
        assert_eq!(error.decode_error(), Some(&source));
        assert!(error.to_string().contains("`id`"), "{error}");
        assert!(!error.is_transport(), "{error:?}");

        let error = Error::deser("not a DecodeError");
        assert!(error.is_deserialization(), "{error:?}");
        assert!(error.decode_error().is_none(), "{error:?}");
    }

    #[test]
    fn ser() {
        let source = wkt::TimestampError::OutOfRange;
        let error = Error::ser(source);
        assert!(error.is_serialization(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        let source = wkt::TimestampError::OutOfRange;
        assert!(error.to_string().contains(&source.to_string()), "{error}");
    }

    #[test]
    fn invalid_mask() {
        let source = InvalidMaskError::UnknownField {
            type_name: "SoftLayer_Virtual_Guest".into(),
            segment: "nonexistent".into(),
        };
        let error = Error::invalid_mask(source.clone());
        assert_eq!(error.as_invalid_mask(), Some(&source));
        assert!(error.as_unknown_type().is_none(), "{error:?}");
        assert!(error.to_string().contains("nonexistent"), "{error}");
    }

    #[test]
    fn unknown_type() {
        let source = UnknownTypeError::new("Bogus_Type", "SoftLayer_Resource");
        let error = Error::unknown_type(source.clone());
        assert_eq!(error.as_unknown_type(), Some(&source));
        assert!(error.as_invalid_mask().is_none(), "{error:?}");
        assert!(error.to_string().contains("Bogus_Type"), "{error}");
    }

    #[test]
    fn binding() {
        let error = Error::binding("missing init parameter");
        assert!(error.is_binding(), "{error:?}");
        assert!(error.to_string().contains("missing init parameter"), "{error}");
        assert!(error.as_fault().is_none(), "{error:?}");
    }

    #[test]
    fn http() {
        let headers = HeaderMap::new();
        let payload = bytes::Bytes::from_static(b"<html>bad gateway</html>");
        let error = Error::http(502, headers.clone(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), Some(&payload));
        assert!(error.to_string().contains("[502]"), "{error}");
        assert!(error.to_string().contains("bad gateway"), "{error}");
    }

    #[test]
    fn io() {
        let error = Error::io("broken pipe");
        assert!(error.is_io(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("broken pipe"), "{error}");
        assert!(error.http_status_code().is_none(), "{error:?}");
    }
}
