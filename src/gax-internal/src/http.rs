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

use crate::options::{ClientConfig, Credentials};
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::transport::{Transport, WireRequest, WireResponse};
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!("softlayer-rust/", env!("CARGO_PKG_VERSION"));

/// Sends SoftLayer calls over the REST (JSON over HTTPS) API.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ReqwestTransport {
    pub async fn new(
        config: ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let cred = crate::options::credentials(&config)?;
        let endpoint = crate::options::endpoint(&config, default_endpoint)?;
        let timeout = crate::options::timeout(&config)?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            cred,
            endpoint,
            timeout,
            user_agent: config.user_agent,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, request: &WireRequest) -> Result<reqwest::Url> {
        let mut path = format!("{}/{}", self.endpoint, request.service);
        if let Some(id) = request.id {
            path.push_str(&format!("/{id}"));
        }
        if !is_implicit_method(&request.method) {
            path.push('/');
            path.push_str(&request.method);
        }
        path.push_str(".json");
        reqwest::Url::parse(&path).map_err(Error::binding)
    }

    fn user_agent(&self, options: &RequestOptions) -> Result<reqwest::header::HeaderValue> {
        let value = [options.user_agent().as_deref(), self.user_agent.as_deref()]
            .into_iter()
            .flatten()
            .chain(std::iter::once(DEFAULT_USER_AGENT))
            .collect::<Vec<_>>()
            .join(" ");
        reqwest::header::HeaderValue::from_str(&value).map_err(Error::ser)
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e if e.is_connect() => Error::connect(e),
            e => Error::io(e),
        }
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn call(&self, request: WireRequest) -> Result<WireResponse> {
        let url = self.url(&request)?;
        let method = http_method(&request.method, !request.parameters.is_empty());
        tracing::debug!("sending {method} {url}");
        let mut builder = self
            .inner
            .request(method, url)
            .basic_auth(self.cred.username(), Some(self.cred.api_key()))
            .header(reqwest::header::USER_AGENT, self.user_agent(&request.options)?);
        let query = query_parameters(&request);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if !request.parameters.is_empty() {
            builder = builder.json(&serde_json::json!({ "parameters": request.parameters }));
        }
        if let Some(timeout) = request.options.timeout().or(self.timeout) {
            builder = builder.timeout(timeout);
        }
        let response = builder.send().await.map_err(Self::map_send_error)?;
        to_wire_response(response).await
    }
}

// These methods are implied by the HTTP verb, they do not appear in the URL.
fn is_implicit_method(method: &str) -> bool {
    matches!(
        method,
        "getObject" | "deleteObject" | "createObject" | "createObjects" | "editObject" | "editObjects"
    )
}

fn http_method(method: &str, has_parameters: bool) -> reqwest::Method {
    match method {
        "deleteObject" => reqwest::Method::DELETE,
        "createObject" | "createObjects" => reqwest::Method::POST,
        "editObject" | "editObjects" => reqwest::Method::PUT,
        _ if has_parameters => reqwest::Method::POST,
        _ => reqwest::Method::GET,
    }
}

fn query_parameters(request: &WireRequest) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(mask) = &request.mask {
        query.push(("objectMask", mask.clone()));
    }
    if let Some(filter) = &request.filter {
        query.push(("objectFilter", filter.clone()));
    }
    if let Some(page) = &request.page {
        query.push(("resultLimit", format!("{},{}", page.offset, page.limit)));
    }
    query
}

async fn to_wire_response(response: reqwest::Response) -> Result<WireResponse> {
    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;
    Ok(WireResponse::new(status, body).set_headers(headers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::request::Page;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    async fn test_transport() -> gax::client_builder::Result<ReqwestTransport> {
        let mut config = ClientConfig::default();
        config.cred = Some(Credentials::new("test-user", "test-key"));
        config.endpoint = Some("https://api.softlayer.com/rest/v3.1/".into());
        ReqwestTransport::new(config, "https://unused.example.com").await
    }

    #[test_case("getObject", false, reqwest::Method::GET)]
    #[test_case("getObject", true, reqwest::Method::POST)]
    #[test_case("getVirtualGuests", false, reqwest::Method::GET)]
    #[test_case("setTags", true, reqwest::Method::POST)]
    #[test_case("deleteObject", false, reqwest::Method::DELETE)]
    #[test_case("createObject", true, reqwest::Method::POST)]
    #[test_case("createObjects", true, reqwest::Method::POST)]
    #[test_case("editObject", true, reqwest::Method::PUT)]
    #[test_case("editObjects", true, reqwest::Method::PUT)]
    fn method_mapping(method: &str, has_parameters: bool, want: reqwest::Method) {
        assert_eq!(http_method(method, has_parameters), want);
    }

    #[test_case("SoftLayer_Account", None, "getObject", "/rest/v3.1/SoftLayer_Account.json")]
    #[test_case("SoftLayer_Account", None, "getVirtualGuests", "/rest/v3.1/SoftLayer_Account/getVirtualGuests.json")]
    #[test_case("SoftLayer_Virtual_Guest", Some(123), "getObject", "/rest/v3.1/SoftLayer_Virtual_Guest/123.json")]
    #[test_case("SoftLayer_Virtual_Guest", Some(123), "powerOn", "/rest/v3.1/SoftLayer_Virtual_Guest/123/powerOn.json")]
    #[test_case("SoftLayer_Virtual_Guest", Some(123), "deleteObject", "/rest/v3.1/SoftLayer_Virtual_Guest/123.json")]
    #[test_case("SoftLayer_Virtual_Guest", None, "createObject", "/rest/v3.1/SoftLayer_Virtual_Guest.json")]
    #[tokio::test]
    async fn url_mapping(service: &str, id: Option<i64>, method: &str, want: &str) -> TestResult {
        let transport = test_transport().await?;
        let mut request = WireRequest::new(service, method);
        request.id = id;
        let url = transport.url(&request)?;
        assert_eq!(url.host_str(), Some("api.softlayer.com"));
        assert_eq!(url.path(), want);
        Ok(())
    }

    #[test]
    fn query_mapping() {
        let mut request = WireRequest::new("SoftLayer_Account", "getVirtualGuests");
        assert!(query_parameters(&request).is_empty());

        request.mask = Some("mask[id]".into());
        request.filter = Some(r#"{"id":{"operation":1}}"#.into());
        request.page = Some(Page::new(50, 25));
        assert_eq!(
            query_parameters(&request),
            vec![
                ("objectMask", "mask[id]".to_string()),
                ("objectFilter", r#"{"id":{"operation":1}}"#.to_string()),
                ("resultLimit", "50,25".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn user_agent_prefixes() -> TestResult {
        let mut config = ClientConfig::default();
        config.cred = Some(Credentials::new("test-user", "test-key"));
        config.endpoint = Some("https://api.softlayer.com/rest/v3.1".into());
        config.user_agent = Some("my-app/1.0".into());
        let transport = ReqwestTransport::new(config, "https://unused.example.com").await?;

        let got = transport.user_agent(&RequestOptions::default())?;
        assert_eq!(got.to_str()?, format!("my-app/1.0 {DEFAULT_USER_AGENT}"));

        let mut options = RequestOptions::default();
        options.set_user_agent("my-call/2.0");
        let got = transport.user_agent(&options)?;
        assert_eq!(
            got.to_str()?,
            format!("my-call/2.0 my-app/1.0 {DEFAULT_USER_AGENT}")
        );

        options.set_user_agent("bad\nvalue");
        let err = transport.user_agent(&options).unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn wire_response_keeps_raw_body() -> TestResult {
        let body = json!({"error": "Object does not exist.", "code": "SoftLayer_Exception_ObjectNotFound"});
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let got = to_wire_response(response).await?;
        assert_eq!(got.status, 404);
        assert_eq!(
            got.headers.get("content-type").map(|v| v.as_bytes()),
            Some(b"application/json".as_slice())
        );
        let parsed: serde_json::Value = serde_json::from_slice(&got.body)?;
        assert_eq!(parsed, body);
        Ok(())
    }

    #[tokio::test]
    async fn wire_response_empty() -> TestResult {
        let http_resp = http::Response::builder().status(204).body(String::new())?;
        let response: reqwest::Response = http_resp.into();
        let got = to_wire_response(response).await?;
        assert!(got.is_success());
        assert!(got.body.is_empty());
        Ok(())
    }
}
