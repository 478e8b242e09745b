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

pub mod client {
    /// A builder for [Client][crate::client::Client].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use softlayer_v3::*;
    /// # use builder::client::ClientBuilder;
    /// # use client::Client;
    /// # use softlayer_v3::Credentials;
    /// let builder : ClientBuilder = Client::builder();
    /// let client = builder
    ///     .with_endpoint("https://api.service.softlayer.com/rest/v3.1")
    ///     .with_credentials(Credentials::new("my-user", "my-api-key"))
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use crate::client::Client;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Client;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }
}
