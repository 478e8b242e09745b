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
//
// Code generated by sidekick. DO NOT EDIT.
#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

use crate::Result;
use crate::model;
use gax::codec;
use gax::dispatcher::Dispatcher;
use gax::error::Error;
use gax::filter::Filter;
use gax::mask::Mask;
use gax::options::RequestOptions;
use gax::paginator::Paginator;
use gax::registry::{Record, TypeRegistry};
use gax::request::{Page, Request};
use gax::response::Response;
use gax::transport::Transport;

/// Implements a client for the SoftLayer API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use softlayer_v3::client::Client;
/// # use softlayer_v3::Credentials;
/// let client = Client::builder()
///     .with_credentials(Credentials::new("my-user", "my-api-key"))
///     .build().await?;
/// let account = client.account();
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// The SoftLayer API is organized in services, one per data type. The client
/// offers a handle for each service, such as [Client::account] or
/// [Client::virtual_guest]. Handles configure the object the methods are
/// called on, the object mask, the object filter, and the result window.
///
/// # Configuration
///
/// To configure `Client` use the `with_*` methods in the type returned
/// by [builder()][Client::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global public REST
///   endpoint (`https://api.softlayer.com/rest/v3.1`). Applications using
///   the private network set a different endpoint.
/// * [with_credentials()]: by default this client uses the `SL_USERNAME` and
///   `SL_API_KEY` environment variables.
/// * [with_timeout()]: by default calls have no deadline, unless the
///   `SL_TIMEOUT` environment variable is set.
///
/// [with_endpoint()]: super::builder::client::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::client::ClientBuilder::with_credentials
/// [with_timeout()]: super::builder::client::ClientBuilder::with_timeout
///
/// # Pooling and Cloning
///
/// `Client` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Client` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Client {
    dispatcher: Dispatcher,
}

impl Client {
    /// Returns a builder for [Client].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use softlayer_v3::client::Client;
    /// # use softlayer_v3::Credentials;
    /// let client = Client::builder()
    ///     .with_credentials(Credentials::new("my-user", "my-api-key"))
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::client::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::client::client::Factory)
    }

    /// Creates a new client from the provided transport.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_transport<T>(transport: T) -> gax::client_builder::Result<Self>
    where
        T: Transport + 'static,
    {
        let registry = crate::registry::registry().map_err(gax::client_builder::Error::config)?;
        Ok(Self {
            dispatcher: Dispatcher::new(transport, registry),
        })
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let transport =
            gaxi::http::ReqwestTransport::new(config, gaxi::options::DEFAULT_ENDPOINT).await?;
        Self::from_transport(transport)
    }

    /// The registry used to validate masks and decode results.
    pub fn registry(&self) -> &TypeRegistry {
        self.dispatcher.registry()
    }

    /// Builds an object mask for results of type `T`.
    ///
    /// Each path is a dotted sequence of fields, such as `datacenter.name`.
    /// Polymorphic fields need a type cast, such as
    /// `resource(SoftLayer_Hardware).hostname`.
    pub fn mask<T, I, S>(&self, paths: I) -> Result<Mask>
    where
        T: Record,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Mask::for_type::<T, I, S>(self.registry(), paths)
    }

    /// Parses an object mask for results of type `T`, such as
    /// `mask[id,datacenter[name]]`.
    pub fn parse_mask<T: Record>(&self, text: &str) -> Result<Mask> {
        Mask::parse(self.registry(), T::typename(), text)
    }

    /// Calls methods on the `SoftLayer_Account` service.
    pub fn account(&self) -> Account {
        Account::new(self.dispatcher.clone())
    }

    /// Calls methods on the `SoftLayer_Virtual_Guest` service.
    pub fn virtual_guest(&self) -> VirtualGuest {
        VirtualGuest::new(self.dispatcher.clone())
    }

    /// Calls methods on the `SoftLayer_Hardware` service.
    pub fn hardware(&self) -> Hardware {
        Hardware::new(self.dispatcher.clone())
    }

    /// Calls methods on the `SoftLayer_Dns_Domain` service.
    pub fn dns_domain(&self) -> DnsDomain {
        DnsDomain::new(self.dispatcher.clone())
    }

    /// Calls methods on the `SoftLayer_Search` service.
    pub fn search(&self) -> Search {
        Search::new(self.dispatcher.clone())
    }

    /// Calls methods on the `SoftLayer_Billing_Invoice` service.
    pub fn billing_invoice(&self) -> BillingInvoice {
        BillingInvoice::new(self.dispatcher.clone())
    }

    /// Calls methods on the `SoftLayer_Ticket` service.
    pub fn ticket(&self) -> Ticket {
        Ticket::new(self.dispatcher.clone())
    }
}

// The configuration shared by all the service handles.
#[derive(Clone, Debug)]
struct Scope {
    dispatcher: Dispatcher,
    service: &'static str,
    id: Option<i64>,
    mask: Option<Mask>,
    filter: Option<Filter>,
    offset: Option<u32>,
    limit: Option<u32>,
    options: RequestOptions,
}

impl Scope {
    fn new(dispatcher: Dispatcher, service: &'static str) -> Self {
        Self {
            dispatcher,
            service,
            id: None,
            mask: None,
            filter: None,
            offset: None,
            limit: None,
            options: RequestOptions::default(),
        }
    }

    // The offset is only sent with a limit.
    fn page(&self) -> Option<Page> {
        self.limit
            .map(|limit| Page::new(self.offset.unwrap_or_default(), limit))
    }

    fn request(&self, method: &'static str) -> Request {
        Request::new(self.service, method)
            .set_or_clear_id(self.id)
            .set_or_clear_mask(self.mask.clone())
            .set_or_clear_filter(self.filter.clone())
            .set_or_clear_page(self.page())
            .set_options(self.options.clone())
    }

    // Methods on a specific object fail early if the handle has no id.
    fn object_request(&self, method: &'static str) -> Result<Request> {
        match self.id {
            Some(_) => Ok(self.request(method)),
            None => Err(Error::binding(format!(
                "{}::{method} requires an object id, use `id()` to set it",
                self.service
            ))),
        }
    }
}

macro_rules! service_handle {
    ($(#[$attr:meta])* $name:ident, $service:literal) => {
        $(#[$attr])*
        #[derive(Clone, Debug)]
        pub struct $name(Scope);

        impl $name {
            /// The name of the service.
            pub const SERVICE: &'static str = $service;

            fn new(dispatcher: Dispatcher) -> Self {
                Self(Scope::new(dispatcher, $service))
            }

            /// Sets the id of the object the methods are called on.
            pub fn id(mut self, v: i64) -> Self {
                self.0.id = Some(v);
                self
            }

            /// Sets the object mask.
            ///
            /// The mask selects the relations and fields included in the
            /// results. Its root must match the result type of the method.
            pub fn mask(mut self, v: Mask) -> Self {
                self.0.mask = Some(v);
                self
            }

            /// Sets the object filter.
            pub fn filter(mut self, v: Filter) -> Self {
                self.0.filter = Some(v);
                self
            }

            /// Sets the maximum number of results returned by list methods.
            pub fn limit(mut self, v: u32) -> Self {
                self.0.limit = Some(v);
                self
            }

            /// Sets the number of results skipped by list methods.
            ///
            /// The offset is ignored unless a [limit][Self::limit] is set.
            pub fn offset(mut self, v: u32) -> Self {
                self.0.offset = Some(v);
                self
            }
        }

        impl gax::options::internal::RequestBuilder for $name {
            fn request_options(&mut self) -> &mut RequestOptions {
                &mut self.0.options
            }
        }
    };
}

service_handle!(
    /// The `SoftLayer_Account` service.
    ///
    /// Methods on this service operate on the account of the caller, they do
    /// not need an id.
    ///
    /// # Example
    /// ```no_run
    /// # use softlayer_v3::client::Client;
    /// # use softlayer_v3::filter::{Filter, Path};
    /// # async fn sample(client: &Client) -> softlayer_v3::Result<()> {
    /// let guests = client
    ///     .account()
    ///     .filter(Filter::new().with(Path::new("virtualGuests.hostname").eq("web1")))
    ///     .get_virtual_guests()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    Account,
    "SoftLayer_Account"
);

impl Account {
    /// Gets the account of the caller.
    pub async fn get_object(&self) -> Result<Option<model::Account>> {
        self.0.dispatcher.get_one(self.0.request("getObject")).await
    }

    /// Lists the hardware in the account.
    pub async fn get_hardware(&self) -> Result<Vec<model::Hardware>> {
        self.0.dispatcher.get_many(self.0.request("getHardware")).await
    }

    /// Lists the hardware in the account, `limit` results at a time.
    pub fn get_hardware_by_page(
        &self,
        limit: u32,
    ) -> Paginator<Response<Vec<model::Hardware>>, Error> {
        self.0.dispatcher.paginate(self.0.request("getHardware"), limit)
    }

    /// Lists the virtual guests in the account.
    pub async fn get_virtual_guests(&self) -> Result<Vec<model::VirtualGuest>> {
        self.0
            .dispatcher
            .get_many(self.0.request("getVirtualGuests"))
            .await
    }

    /// Lists the virtual guests in the account, `limit` results at a time.
    ///
    /// # Example
    /// ```no_run
    /// # use softlayer_v3::client::Client;
    /// # async fn sample(client: &Client) -> softlayer_v3::Result<()> {
    /// let mut guests = client.account().get_virtual_guests_by_page(50).items();
    /// while let Some(guest) = guests.next().await {
    ///     println!("{:?}", guest?.hostname);
    /// }
    /// # Ok(()) }
    /// ```
    pub fn get_virtual_guests_by_page(
        &self,
        limit: u32,
    ) -> Paginator<Response<Vec<model::VirtualGuest>>, Error> {
        self.0
            .dispatcher
            .paginate(self.0.request("getVirtualGuests"), limit)
    }

    /// Lists the DNS domains in the account.
    pub async fn get_domains(&self) -> Result<Vec<model::DnsDomain>> {
        self.0.dispatcher.get_many(self.0.request("getDomains")).await
    }

    /// Lists the invoices of the account.
    pub async fn get_invoices(&self) -> Result<Vec<model::BillingInvoice>> {
        self.0.dispatcher.get_many(self.0.request("getInvoices")).await
    }

    /// Lists the invoices of the account, `limit` results at a time.
    pub fn get_invoices_by_page(
        &self,
        limit: u32,
    ) -> Paginator<Response<Vec<model::BillingInvoice>>, Error> {
        self.0.dispatcher.paginate(self.0.request("getInvoices"), limit)
    }

    /// Gets the current balance of the account.
    pub async fn get_balance(&self) -> Result<wkt::Decimal> {
        self.0.dispatcher.get_scalar(self.0.request("getBalance")).await
    }
}

service_handle!(
    /// The `SoftLayer_Virtual_Guest` service.
    ///
    /// Most methods operate on a specific guest, set its id with
    /// [id()][VirtualGuest::id].
    ///
    /// # Example
    /// ```no_run
    /// # use softlayer_v3::client::Client;
    /// # async fn sample(client: &Client) -> softlayer_v3::Result<()> {
    /// let guest = client.virtual_guest().id(123456);
    /// guest.power_on().await?;
    /// let state = guest.get_power_state().await?;
    /// # Ok(()) }
    /// ```
    VirtualGuest,
    "SoftLayer_Virtual_Guest"
);

impl VirtualGuest {
    /// Gets a virtual guest.
    pub async fn get_object(&self) -> Result<Option<model::VirtualGuest>> {
        let request = self.0.object_request("getObject")?;
        self.0.dispatcher.get_one(request).await
    }

    /// Orders a new virtual guest, described by `template`.
    pub async fn create_object(
        &self,
        template: &model::VirtualGuest,
    ) -> Result<Option<model::VirtualGuest>> {
        let request = self
            .0
            .request("createObject")
            .set_args([codec::encode(template)?]);
        self.0.dispatcher.get_one(request).await
    }

    /// Changes the properties of a virtual guest set in `template`.
    pub async fn edit_object(&self, template: &model::VirtualGuest) -> Result<bool> {
        let request = self
            .0
            .object_request("editObject")?
            .set_args([codec::encode(template)?]);
        self.0.dispatcher.get_scalar(request).await
    }

    /// Cancels a virtual guest.
    pub async fn delete_object(&self) -> Result<bool> {
        let request = self.0.object_request("deleteObject")?;
        self.0.dispatcher.get_scalar(request).await
    }

    pub async fn power_on(&self) -> Result<bool> {
        let request = self.0.object_request("powerOn")?;
        self.0.dispatcher.get_scalar(request).await
    }

    pub async fn power_off(&self) -> Result<bool> {
        let request = self.0.object_request("powerOff")?;
        self.0.dispatcher.get_scalar(request).await
    }

    /// Reboots the guest, letting the operating system shut down cleanly.
    pub async fn reboot_soft(&self) -> Result<bool> {
        let request = self.0.object_request("rebootSoft")?;
        self.0.dispatcher.get_scalar(request).await
    }

    pub async fn get_power_state(&self) -> Result<Option<model::VirtualGuestPowerState>> {
        let request = self.0.object_request("getPowerState")?;
        self.0.dispatcher.get_one(request).await
    }

    /// Replaces the tags of the guest with a comma separated list.
    pub async fn set_tags(&self, tags: &str) -> Result<bool> {
        let request = self.0.object_request("setTags")?.add_arg(tags)?;
        self.0.dispatcher.get_scalar(request).await
    }
}

service_handle!(
    /// The `SoftLayer_Hardware` service.
    Hardware,
    "SoftLayer_Hardware"
);

impl Hardware {
    /// Gets a piece of hardware.
    pub async fn get_object(&self) -> Result<Option<model::Hardware>> {
        let request = self.0.object_request("getObject")?;
        self.0.dispatcher.get_one(request).await
    }
}

service_handle!(
    /// The `SoftLayer_Dns_Domain` service.
    DnsDomain,
    "SoftLayer_Dns_Domain"
);

impl DnsDomain {
    /// Gets a DNS domain.
    pub async fn get_object(&self) -> Result<Option<model::DnsDomain>> {
        let request = self.0.object_request("getObject")?;
        self.0.dispatcher.get_one(request).await
    }

    /// Finds the domains in the account with the given name.
    pub async fn get_by_domain_name(&self, name: &str) -> Result<Vec<model::DnsDomain>> {
        let request = self.0.request("getByDomainName").add_arg(name)?;
        self.0.dispatcher.get_many(request).await
    }

    /// Creates an `A` record in the domain.
    pub async fn create_a_record(
        &self,
        host: &str,
        data: &str,
        ttl: i64,
    ) -> Result<Option<model::DnsDomainResourceRecord>> {
        let request = self
            .0
            .object_request("createARecord")?
            .add_arg(host)?
            .add_arg(data)?
            .add_arg(&ttl)?;
        self.0.dispatcher.get_one(request).await
    }

    /// Lists the records in the domain.
    pub async fn get_resource_records(&self) -> Result<Vec<model::DnsDomainResourceRecord>> {
        let request = self.0.object_request("getResourceRecords")?;
        self.0.dispatcher.get_many(request).await
    }

    /// Lists the records in the domain, `limit` results at a time.
    pub fn get_resource_records_by_page(
        &self,
        limit: u32,
    ) -> Result<Paginator<Response<Vec<model::DnsDomainResourceRecord>>, Error>> {
        let request = self.0.object_request("getResourceRecords")?;
        Ok(self.0.dispatcher.paginate(request, limit))
    }

    /// Deletes the domain and all its records.
    pub async fn delete_object(&self) -> Result<bool> {
        let request = self.0.object_request("deleteObject")?;
        self.0.dispatcher.get_scalar(request).await
    }
}

service_handle!(
    /// The `SoftLayer_Search` service.
    ///
    /// Search results are polymorphic, each result names the concrete type
    /// of its resource.
    ///
    /// # Example
    /// ```no_run
    /// # use softlayer_v3::client::Client;
    /// # use softlayer_v3::model::{ContainerSearchResult, Resource};
    /// # async fn sample(client: &Client) -> softlayer_v3::Result<()> {
    /// let mask = client.mask::<ContainerSearchResult, _, _>([
    ///     "resource(SoftLayer_Hardware).hostname",
    ///     "resource(SoftLayer_Virtual_Guest).hostname",
    /// ])?;
    /// let results = client.search().mask(mask).search("_objectType:SoftLayer_Hardware").await?;
    /// for result in results {
    ///     match result.resource {
    ///         Some(Resource::Hardware(h)) => println!("hardware {:?}", h.hostname),
    ///         Some(other) => println!("{}", other.typename()),
    ///         None => {}
    ///     }
    /// }
    /// # Ok(()) }
    /// ```
    Search,
    "SoftLayer_Search"
);

impl Search {
    /// Searches using the simple search syntax.
    pub async fn search(&self, query: &str) -> Result<Vec<model::ContainerSearchResult>> {
        let request = self.0.request("search").add_arg(query)?;
        self.0.dispatcher.get_many(request).await
    }

    /// Searches using the advanced search syntax.
    pub async fn advanced_search(
        &self,
        query: &str,
    ) -> Result<Vec<model::ContainerSearchResult>> {
        let request = self.0.request("advancedSearch").add_arg(query)?;
        self.0.dispatcher.get_many(request).await
    }
}

service_handle!(
    /// The `SoftLayer_Billing_Invoice` service.
    BillingInvoice,
    "SoftLayer_Billing_Invoice"
);

impl BillingInvoice {
    /// Gets an invoice.
    pub async fn get_object(&self) -> Result<Option<model::BillingInvoice>> {
        let request = self.0.object_request("getObject")?;
        self.0.dispatcher.get_one(request).await
    }

    /// Downloads the invoice as a PDF document.
    pub async fn get_pdf(&self) -> Result<wkt::Blob> {
        let request = self.0.object_request("getPdf")?;
        self.0.dispatcher.get_blob(request).await
    }
}

service_handle!(
    /// The `SoftLayer_Ticket` service.
    Ticket,
    "SoftLayer_Ticket"
);

impl Ticket {
    /// Gets a ticket.
    pub async fn get_object(&self) -> Result<Option<model::Ticket>> {
        let request = self.0.object_request("getObject")?;
        self.0.dispatcher.get_one(request).await
    }

    /// Adds an update to the ticket.
    ///
    /// Returns the updates created by the call.
    pub async fn add_update(
        &self,
        update: &model::TicketUpdate,
    ) -> Result<Vec<model::TicketUpdate>> {
        let request = self
            .0
            .object_request("addUpdate")?
            .set_args([codec::encode(update)?]);
        self.0.dispatcher.get_many(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::transport::{WireRequest, WireResponse};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    // Records the requests and returns a canned response.
    #[derive(Debug, Default)]
    struct Fake {
        requests: Arc<Mutex<Vec<WireRequest>>>,
        body: &'static str,
    }

    #[async_trait::async_trait]
    impl Transport for Fake {
        async fn call(&self, request: WireRequest) -> Result<WireResponse> {
            self.requests.lock().unwrap().push(request);
            Ok(WireResponse::new(200, self.body))
        }
    }

    fn client(body: &'static str) -> anyhow::Result<(Client, Arc<Mutex<Vec<WireRequest>>>)> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let fake = Fake {
            requests: requests.clone(),
            body,
        };
        Ok((Client::from_transport(fake)?, requests))
    }

    #[test]
    fn page_needs_limit() -> anyhow::Result<()> {
        let (client, _) = client("[]")?;
        assert_eq!(client.account().offset(10).0.page(), None);
        assert_eq!(
            client.account().limit(25).0.page(),
            Some(Page::new(0, 25))
        );
        assert_eq!(
            client.account().offset(10).limit(25).0.page(),
            Some(Page::new(10, 25))
        );
        assert_eq!(
            client.account().offset(4).limit(0).0.page(),
            Some(Page { offset: 4, limit: 0 })
        );
        Ok(())
    }

    #[tokio::test]
    async fn handle_configures_request() -> anyhow::Result<()> {
        use gax::filter::Path;
        use gax::options::RequestOptionsBuilder;
        let (client, requests) = client("[]")?;
        let mask = client.mask::<model::VirtualGuest, _, _>(["hostname"])?;
        let got = client
            .account()
            .mask(mask)
            .filter(Filter::new().with(Path::new("virtualGuests.id").eq(1)))
            .offset(5)
            .limit(10)
            .with_timeout(std::time::Duration::from_secs(5))
            .get_virtual_guests()
            .await?;
        assert!(got.is_empty());

        let requests = requests.lock().unwrap();
        let request = &requests[0];
        assert_eq!(request.service, "SoftLayer_Account");
        assert_eq!(request.method, "getVirtualGuests");
        assert_eq!(request.id, None);
        assert_eq!(request.mask.as_deref(), Some("mask[hostname]"));
        assert_eq!(
            request.filter.as_deref(),
            Some(r#"{"virtualGuests":{"id":{"operation":1}}}"#)
        );
        assert_eq!(request.page, Some(Page::new(5, 10)));
        assert_eq!(
            request.options.timeout(),
            &Some(std::time::Duration::from_secs(5))
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_id() -> anyhow::Result<()> {
        let (client, requests) = client("true")?;
        let err = client.virtual_guest().power_on().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("powerOn"), "{err}");
        assert!(requests.lock().unwrap().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn arguments() -> anyhow::Result<()> {
        let (client, requests) = client(r#"{"id": 9, "host": "www", "type": "a"}"#)?;
        let record = client
            .dns_domain()
            .id(42)
            .create_a_record("www", "10.0.0.1", 3600)
            .await?
            .expect("the fake returns a record");
        assert_eq!(record.id, Some(9));
        assert_eq!(record.r#type.as_deref(), Some("a"));

        let requests = requests.lock().unwrap();
        assert_eq!(requests[0].id, Some(42));
        assert_eq!(
            requests[0].parameters,
            vec![
                serde_json::json!("www"),
                serde_json::json!("10.0.0.1"),
                serde_json::json!(3600)
            ]
        );
        Ok(())
    }
}
