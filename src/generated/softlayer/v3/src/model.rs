// Copyright 2024 Google LLC
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

use gax::registry::{Polymorphic, PolymorphicShape, Record, RecordShape};

/// The base type of all the SoftLayer data types.
///
/// It has no fields, it anchors the type hierarchy used by object masks and
/// polymorphic values.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Entity {}

impl Entity {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl Record for Entity {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::ENTITY
    }
}

/// A physical location, such as a datacenter.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Location {
    pub id: std::option::Option<i64>,

    pub name: std::option::Option<std::string::String>,

    pub long_name: std::option::Option<std::string::String>,

    pub status_id: std::option::Option<i64>,
}

impl Location {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Location::id].
    pub fn set_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][Location::id].
    pub fn set_or_clear_id<T: std::convert::Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][Location::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][Location::name].
    pub fn set_or_clear_name<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [long_name][Location::long_name].
    pub fn set_long_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.long_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [long_name][Location::long_name].
    pub fn set_or_clear_long_name<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.long_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status_id][Location::status_id].
    pub fn set_status_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.status_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status_id][Location::status_id].
    pub fn set_or_clear_status_id<T: std::convert::Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.status_id = v.map(|x| x.into());
        self
    }
}

impl Record for Location {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::LOCATION
    }
}

/// A customer account.
///
/// The account owns all the other resources: servers, guests, domains,
/// invoices, and tickets.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Account {
    pub id: std::option::Option<i64>,

    pub company_name: std::option::Option<std::string::String>,

    pub first_name: std::option::Option<std::string::String>,

    pub last_name: std::option::Option<std::string::String>,

    pub email: std::option::Option<std::string::String>,

    pub create_date: std::option::Option<wkt::Timestamp>,

    pub hardware_count: std::option::Option<u64>,

    pub virtual_guest_count: std::option::Option<u64>,

    pub hardware: std::option::Option<std::vec::Vec<crate::model::Hardware>>,

    pub virtual_guests: std::option::Option<std::vec::Vec<crate::model::VirtualGuest>>,

    pub domains: std::option::Option<std::vec::Vec<crate::model::DnsDomain>>,

    pub invoices: std::option::Option<std::vec::Vec<crate::model::BillingInvoice>>,

    pub open_tickets: std::option::Option<std::vec::Vec<crate::model::Ticket>>,
}

impl Account {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Account::id].
    pub fn set_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][Account::id].
    pub fn set_or_clear_id<T: std::convert::Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [company_name][Account::company_name].
    pub fn set_company_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.company_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [company_name][Account::company_name].
    pub fn set_or_clear_company_name<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.company_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [first_name][Account::first_name].
    pub fn set_first_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.first_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first_name][Account::first_name].
    pub fn set_or_clear_first_name<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.first_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [last_name][Account::last_name].
    pub fn set_last_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.last_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [last_name][Account::last_name].
    pub fn set_or_clear_last_name<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.last_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [email][Account::email].
    pub fn set_email<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.email = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [email][Account::email].
    pub fn set_or_clear_email<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.email = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_date][Account::create_date].
    pub fn set_create_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_date = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [create_date][Account::create_date].
    pub fn set_or_clear_create_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: std::option::Option<T>) -> Self {
        self.create_date = v.map(|x| x.into());
        self
    }

    /// Sets the value of [hardware_count][Account::hardware_count].
    pub fn set_hardware_count<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.hardware_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [hardware_count][Account::hardware_count].
    pub fn set_or_clear_hardware_count<T: std::convert::Into<u64>>(mut self, v: std::option::Option<T>) -> Self {
        self.hardware_count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [virtual_guest_count][Account::virtual_guest_count].
    pub fn set_virtual_guest_count<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.virtual_guest_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_guest_count][Account::virtual_guest_count].
    pub fn set_or_clear_virtual_guest_count<T: std::convert::Into<u64>>(mut self, v: std::option::Option<T>) -> Self {
        self.virtual_guest_count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [hardware][Account::hardware].
    pub fn set_hardware<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Hardware>,
    {
        use std::iter::Iterator;
        self.hardware = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [virtual_guests][Account::virtual_guests].
    pub fn set_virtual_guests<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VirtualGuest>,
    {
        use std::iter::Iterator;
        self.virtual_guests = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [domains][Account::domains].
    pub fn set_domains<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::DnsDomain>,
    {
        use std::iter::Iterator;
        self.domains = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [invoices][Account::invoices].
    pub fn set_invoices<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::BillingInvoice>,
    {
        use std::iter::Iterator;
        self.invoices = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [open_tickets][Account::open_tickets].
    pub fn set_open_tickets<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Ticket>,
    {
        use std::iter::Iterator;
        self.open_tickets = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl Record for Account {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::ACCOUNT
    }
}

/// A piece of hardware, such as a bare metal server.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Hardware {
    pub id: std::option::Option<i64>,

    pub hostname: std::option::Option<std::string::String>,

    pub domain: std::option::Option<std::string::String>,

    pub fully_qualified_domain_name: std::option::Option<std::string::String>,

    pub primary_ip_address: std::option::Option<std::string::String>,

    pub notes: std::option::Option<std::string::String>,

    pub serial_number: std::option::Option<std::string::String>,

    pub provision_date: std::option::Option<wkt::Timestamp>,

    pub datacenter: std::option::Option<crate::model::Location>,

    pub account: std::option::Option<crate::model::Account>,

    pub billing_item: std::option::Option<crate::model::BillingItem>,
}

impl Hardware {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Hardware::id].
    pub fn set_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][Hardware::id].
    pub fn set_or_clear_id<T: std::convert::Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [hostname][Hardware::hostname].
    pub fn set_hostname<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.hostname = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [hostname][Hardware::hostname].
    pub fn set_or_clear_hostname<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.hostname = v.map(|x| x.into());
        self
    }

    /// Sets the value of [domain][Hardware::domain].
    pub fn set_domain<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.domain = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [domain][Hardware::domain].
    pub fn set_or_clear_domain<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.domain = v.map(|x| x.into());
        self
    }

    /// Sets the value of [fully_qualified_domain_name][Hardware::fully_qualified_domain_name].
    pub fn set_fully_qualified_domain_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.fully_qualified_domain_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [fully_qualified_domain_name][Hardware::fully_qualified_domain_name].
    pub fn set_or_clear_fully_qualified_domain_name<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.fully_qualified_domain_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [primary_ip_address][Hardware::primary_ip_address].
    pub fn set_primary_ip_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.primary_ip_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [primary_ip_address][Hardware::primary_ip_address].
    pub fn set_or_clear_primary_ip_address<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.primary_ip_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [notes][Hardware::notes].
    pub fn set_notes<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.notes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [notes][Hardware::notes].
    pub fn set_or_clear_notes<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.notes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [serial_number][Hardware::serial_number].
    pub fn set_serial_number<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.serial_number = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [serial_number][Hardware::serial_number].
    pub fn set_or_clear_serial_number<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.serial_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [provision_date][Hardware::provision_date].
    pub fn set_provision_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.provision_date = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [provision_date][Hardware::provision_date].
    pub fn set_or_clear_provision_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: std::option::Option<T>) -> Self {
        self.provision_date = v.map(|x| x.into());
        self
    }

    /// Sets the value of [datacenter][Hardware::datacenter].
    pub fn set_datacenter<T: std::convert::Into<crate::model::Location>>(mut self, v: T) -> Self {
        self.datacenter = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [datacenter][Hardware::datacenter].
    pub fn set_or_clear_datacenter<T: std::convert::Into<crate::model::Location>>(mut self, v: std::option::Option<T>) -> Self {
        self.datacenter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [account][Hardware::account].
    pub fn set_account<T: std::convert::Into<crate::model::Account>>(mut self, v: T) -> Self {
        self.account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [account][Hardware::account].
    pub fn set_or_clear_account<T: std::convert::Into<crate::model::Account>>(mut self, v: std::option::Option<T>) -> Self {
        self.account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [billing_item][Hardware::billing_item].
    pub fn set_billing_item<T: std::convert::Into<crate::model::BillingItem>>(mut self, v: T) -> Self {
        self.billing_item = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [billing_item][Hardware::billing_item].
    pub fn set_or_clear_billing_item<T: std::convert::Into<crate::model::BillingItem>>(mut self, v: std::option::Option<T>) -> Self {
        self.billing_item = v.map(|x| x.into());
        self
    }
}

impl Record for Hardware {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::HARDWARE
    }
}

/// A server, the most common type of [Hardware].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct HardwareServer {
    /// The fields inherited from [Hardware].
    #[serde(flatten)]
    pub base: crate::model::Hardware,

    pub memory_capacity: std::option::Option<u64>,

    pub processor_physical_core_amount: std::option::Option<u64>,

    /// Deprecated.
    pub private_network_only_flag: std::option::Option<bool>,
}

impl HardwareServer {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of the inherited fields.
    pub fn set_base<T: std::convert::Into<crate::model::Hardware>>(mut self, v: T) -> Self {
        self.base = v.into();
        self
    }

    /// Sets the value of [memory_capacity][HardwareServer::memory_capacity].
    pub fn set_memory_capacity<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.memory_capacity = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [memory_capacity][HardwareServer::memory_capacity].
    pub fn set_or_clear_memory_capacity<T: std::convert::Into<u64>>(mut self, v: std::option::Option<T>) -> Self {
        self.memory_capacity = v.map(|x| x.into());
        self
    }

    /// Sets the value of [processor_physical_core_amount][HardwareServer::processor_physical_core_amount].
    pub fn set_processor_physical_core_amount<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.processor_physical_core_amount = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [processor_physical_core_amount][HardwareServer::processor_physical_core_amount].
    pub fn set_or_clear_processor_physical_core_amount<T: std::convert::Into<u64>>(mut self, v: std::option::Option<T>) -> Self {
        self.processor_physical_core_amount = v.map(|x| x.into());
        self
    }

    /// Sets the value of [private_network_only_flag][HardwareServer::private_network_only_flag].
    pub fn set_private_network_only_flag<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.private_network_only_flag = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [private_network_only_flag][HardwareServer::private_network_only_flag].
    pub fn set_or_clear_private_network_only_flag<T: std::convert::Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.private_network_only_flag = v.map(|x| x.into());
        self
    }
}

impl Record for HardwareServer {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::HARDWARE_SERVER
    }
}

/// A virtual server.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct VirtualGuest {
    pub id: std::option::Option<i64>,

    pub hostname: std::option::Option<std::string::String>,

    pub domain: std::option::Option<std::string::String>,

    pub fully_qualified_domain_name: std::option::Option<std::string::String>,

    pub start_cpus: std::option::Option<u64>,

    pub max_memory: std::option::Option<u64>,

    pub hourly_billing_flag: std::option::Option<bool>,

    pub local_disk_flag: std::option::Option<bool>,

    pub dedicated_account_host_only_flag: std::option::Option<bool>,

    pub primary_ip_address: std::option::Option<std::string::String>,

    pub notes: std::option::Option<std::string::String>,

    pub create_date: std::option::Option<wkt::Timestamp>,

    pub modify_date: std::option::Option<wkt::Timestamp>,

    pub datacenter: std::option::Option<crate::model::Location>,

    pub power_state: std::option::Option<crate::model::VirtualGuestPowerState>,

    pub billing_item: std::option::Option<crate::model::BillingItem>,

    pub account: std::option::Option<crate::model::Account>,
}

impl VirtualGuest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][VirtualGuest::id].
    pub fn set_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][VirtualGuest::id].
    pub fn set_or_clear_id<T: std::convert::Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [hostname][VirtualGuest::hostname].
    pub fn set_hostname<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.hostname = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [hostname][VirtualGuest::hostname].
    pub fn set_or_clear_hostname<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.hostname = v.map(|x| x.into());
        self
    }

    /// Sets the value of [domain][VirtualGuest::domain].
    pub fn set_domain<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.domain = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [domain][VirtualGuest::domain].
    pub fn set_or_clear_domain<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.domain = v.map(|x| x.into());
        self
    }

    /// Sets the value of [fully_qualified_domain_name][VirtualGuest::fully_qualified_domain_name].
    pub fn set_fully_qualified_domain_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.fully_qualified_domain_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [fully_qualified_domain_name][VirtualGuest::fully_qualified_domain_name].
    pub fn set_or_clear_fully_qualified_domain_name<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.fully_qualified_domain_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start_cpus][VirtualGuest::start_cpus].
    pub fn set_start_cpus<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.start_cpus = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start_cpus][VirtualGuest::start_cpus].
    pub fn set_or_clear_start_cpus<T: std::convert::Into<u64>>(mut self, v: std::option::Option<T>) -> Self {
        self.start_cpus = v.map(|x| x.into());
        self
    }

    /// Sets the value of [max_memory][VirtualGuest::max_memory].
    pub fn set_max_memory<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.max_memory = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [max_memory][VirtualGuest::max_memory].
    pub fn set_or_clear_max_memory<T: std::convert::Into<u64>>(mut self, v: std::option::Option<T>) -> Self {
        self.max_memory = v.map(|x| x.into());
        self
    }

    /// Sets the value of [hourly_billing_flag][VirtualGuest::hourly_billing_flag].
    pub fn set_hourly_billing_flag<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.hourly_billing_flag = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [hourly_billing_flag][VirtualGuest::hourly_billing_flag].
    pub fn set_or_clear_hourly_billing_flag<T: std::convert::Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.hourly_billing_flag = v.map(|x| x.into());
        self
    }

    /// Sets the value of [local_disk_flag][VirtualGuest::local_disk_flag].
    pub fn set_local_disk_flag<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.local_disk_flag = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [local_disk_flag][VirtualGuest::local_disk_flag].
    pub fn set_or_clear_local_disk_flag<T: std::convert::Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.local_disk_flag = v.map(|x| x.into());
        self
    }

    /// Sets the value of [dedicated_account_host_only_flag][VirtualGuest::dedicated_account_host_only_flag].
    pub fn set_dedicated_account_host_only_flag<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.dedicated_account_host_only_flag = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [dedicated_account_host_only_flag][VirtualGuest::dedicated_account_host_only_flag].
    pub fn set_or_clear_dedicated_account_host_only_flag<T: std::convert::Into<bool>>(mut self, v: std::option::Option<T>) -> Self {
        self.dedicated_account_host_only_flag = v.map(|x| x.into());
        self
    }

    /// Sets the value of [primary_ip_address][VirtualGuest::primary_ip_address].
    pub fn set_primary_ip_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.primary_ip_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [primary_ip_address][VirtualGuest::primary_ip_address].
    pub fn set_or_clear_primary_ip_address<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.primary_ip_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [notes][VirtualGuest::notes].
    pub fn set_notes<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.notes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [notes][VirtualGuest::notes].
    pub fn set_or_clear_notes<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.notes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_date][VirtualGuest::create_date].
    pub fn set_create_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_date = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [create_date][VirtualGuest::create_date].
    pub fn set_or_clear_create_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: std::option::Option<T>) -> Self {
        self.create_date = v.map(|x| x.into());
        self
    }

    /// Sets the value of [modify_date][VirtualGuest::modify_date].
    pub fn set_modify_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.modify_date = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [modify_date][VirtualGuest::modify_date].
    pub fn set_or_clear_modify_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: std::option::Option<T>) -> Self {
        self.modify_date = v.map(|x| x.into());
        self
    }

    /// Sets the value of [datacenter][VirtualGuest::datacenter].
    pub fn set_datacenter<T: std::convert::Into<crate::model::Location>>(mut self, v: T) -> Self {
        self.datacenter = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [datacenter][VirtualGuest::datacenter].
    pub fn set_or_clear_datacenter<T: std::convert::Into<crate::model::Location>>(mut self, v: std::option::Option<T>) -> Self {
        self.datacenter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [power_state][VirtualGuest::power_state].
    pub fn set_power_state<T: std::convert::Into<crate::model::VirtualGuestPowerState>>(mut self, v: T) -> Self {
        self.power_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [power_state][VirtualGuest::power_state].
    pub fn set_or_clear_power_state<T: std::convert::Into<crate::model::VirtualGuestPowerState>>(mut self, v: std::option::Option<T>) -> Self {
        self.power_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [billing_item][VirtualGuest::billing_item].
    pub fn set_billing_item<T: std::convert::Into<crate::model::BillingItem>>(mut self, v: T) -> Self {
        self.billing_item = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [billing_item][VirtualGuest::billing_item].
    pub fn set_or_clear_billing_item<T: std::convert::Into<crate::model::BillingItem>>(mut self, v: std::option::Option<T>) -> Self {
        self.billing_item = v.map(|x| x.into());
        self
    }

    /// Sets the value of [account][VirtualGuest::account].
    pub fn set_account<T: std::convert::Into<crate::model::Account>>(mut self, v: T) -> Self {
        self.account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [account][VirtualGuest::account].
    pub fn set_or_clear_account<T: std::convert::Into<crate::model::Account>>(mut self, v: std::option::Option<T>) -> Self {
        self.account = v.map(|x| x.into());
        self
    }
}

impl Record for VirtualGuest {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::VIRTUAL_GUEST
    }
}

/// The power state of a [VirtualGuest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct VirtualGuestPowerState {
    pub key_name: std::option::Option<std::string::String>,

    pub name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,
}

impl VirtualGuestPowerState {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [key_name][VirtualGuestPowerState::key_name].
    pub fn set_key_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.key_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [key_name][VirtualGuestPowerState::key_name].
    pub fn set_or_clear_key_name<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.key_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][VirtualGuestPowerState::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][VirtualGuestPowerState::name].
    pub fn set_or_clear_name<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][VirtualGuestPowerState::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][VirtualGuestPowerState::description].
    pub fn set_or_clear_description<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.description = v.map(|x| x.into());
        self
    }
}

impl Record for VirtualGuestPowerState {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::VIRTUAL_GUEST_POWER_STATE
    }
}

/// A billable item, such as a server or a service.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct BillingItem {
    pub id: std::option::Option<i64>,

    pub description: std::option::Option<std::string::String>,

    pub recurring_fee: std::option::Option<wkt::Decimal>,

    pub hourly_recurring_fee: std::option::Option<wkt::Decimal>,

    pub create_date: std::option::Option<wkt::Timestamp>,

    pub cancellation_date: std::option::Option<wkt::Timestamp>,
}

impl BillingItem {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][BillingItem::id].
    pub fn set_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][BillingItem::id].
    pub fn set_or_clear_id<T: std::convert::Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][BillingItem::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][BillingItem::description].
    pub fn set_or_clear_description<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [recurring_fee][BillingItem::recurring_fee].
    pub fn set_recurring_fee<T: std::convert::Into<wkt::Decimal>>(mut self, v: T) -> Self {
        self.recurring_fee = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [recurring_fee][BillingItem::recurring_fee].
    pub fn set_or_clear_recurring_fee<T: std::convert::Into<wkt::Decimal>>(mut self, v: std::option::Option<T>) -> Self {
        self.recurring_fee = v.map(|x| x.into());
        self
    }

    /// Sets the value of [hourly_recurring_fee][BillingItem::hourly_recurring_fee].
    pub fn set_hourly_recurring_fee<T: std::convert::Into<wkt::Decimal>>(mut self, v: T) -> Self {
        self.hourly_recurring_fee = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [hourly_recurring_fee][BillingItem::hourly_recurring_fee].
    pub fn set_or_clear_hourly_recurring_fee<T: std::convert::Into<wkt::Decimal>>(mut self, v: std::option::Option<T>) -> Self {
        self.hourly_recurring_fee = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_date][BillingItem::create_date].
    pub fn set_create_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_date = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [create_date][BillingItem::create_date].
    pub fn set_or_clear_create_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: std::option::Option<T>) -> Self {
        self.create_date = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cancellation_date][BillingItem::cancellation_date].
    pub fn set_cancellation_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.cancellation_date = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cancellation_date][BillingItem::cancellation_date].
    pub fn set_or_clear_cancellation_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: std::option::Option<T>) -> Self {
        self.cancellation_date = v.map(|x| x.into());
        self
    }
}

impl Record for BillingItem {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::BILLING_ITEM
    }
}

/// An invoice, the bill for an account in a billing period.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct BillingInvoice {
    pub id: std::option::Option<i64>,

    pub type_code: std::option::Option<std::string::String>,

    pub status_code: std::option::Option<std::string::String>,

    pub invoice_total_amount: std::option::Option<wkt::Decimal>,

    pub create_date: std::option::Option<wkt::Timestamp>,

    pub closed_date: std::option::Option<wkt::Timestamp>,

    pub account: std::option::Option<crate::model::Account>,
}

impl BillingInvoice {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][BillingInvoice::id].
    pub fn set_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][BillingInvoice::id].
    pub fn set_or_clear_id<T: std::convert::Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type_code][BillingInvoice::type_code].
    pub fn set_type_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.type_code = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [type_code][BillingInvoice::type_code].
    pub fn set_or_clear_type_code<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.type_code = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status_code][BillingInvoice::status_code].
    pub fn set_status_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status_code = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status_code][BillingInvoice::status_code].
    pub fn set_or_clear_status_code<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.status_code = v.map(|x| x.into());
        self
    }

    /// Sets the value of [invoice_total_amount][BillingInvoice::invoice_total_amount].
    pub fn set_invoice_total_amount<T: std::convert::Into<wkt::Decimal>>(mut self, v: T) -> Self {
        self.invoice_total_amount = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [invoice_total_amount][BillingInvoice::invoice_total_amount].
    pub fn set_or_clear_invoice_total_amount<T: std::convert::Into<wkt::Decimal>>(mut self, v: std::option::Option<T>) -> Self {
        self.invoice_total_amount = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_date][BillingInvoice::create_date].
    pub fn set_create_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_date = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [create_date][BillingInvoice::create_date].
    pub fn set_or_clear_create_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: std::option::Option<T>) -> Self {
        self.create_date = v.map(|x| x.into());
        self
    }

    /// Sets the value of [closed_date][BillingInvoice::closed_date].
    pub fn set_closed_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.closed_date = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [closed_date][BillingInvoice::closed_date].
    pub fn set_or_clear_closed_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: std::option::Option<T>) -> Self {
        self.closed_date = v.map(|x| x.into());
        self
    }

    /// Sets the value of [account][BillingInvoice::account].
    pub fn set_account<T: std::convert::Into<crate::model::Account>>(mut self, v: T) -> Self {
        self.account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [account][BillingInvoice::account].
    pub fn set_or_clear_account<T: std::convert::Into<crate::model::Account>>(mut self, v: std::option::Option<T>) -> Self {
        self.account = v.map(|x| x.into());
        self
    }
}

impl Record for BillingInvoice {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::BILLING_INVOICE
    }
}

/// A DNS domain hosted on the SoftLayer name servers.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DnsDomain {
    pub id: std::option::Option<i64>,

    pub name: std::option::Option<std::string::String>,

    pub serial: std::option::Option<u64>,

    pub update_date: std::option::Option<wkt::Timestamp>,

    pub resource_records: std::option::Option<std::vec::Vec<crate::model::DnsDomainResourceRecord>>,

    pub account: std::option::Option<crate::model::Account>,
}

impl DnsDomain {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][DnsDomain::id].
    pub fn set_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][DnsDomain::id].
    pub fn set_or_clear_id<T: std::convert::Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][DnsDomain::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][DnsDomain::name].
    pub fn set_or_clear_name<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [serial][DnsDomain::serial].
    pub fn set_serial<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.serial = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [serial][DnsDomain::serial].
    pub fn set_or_clear_serial<T: std::convert::Into<u64>>(mut self, v: std::option::Option<T>) -> Self {
        self.serial = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_date][DnsDomain::update_date].
    pub fn set_update_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.update_date = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_date][DnsDomain::update_date].
    pub fn set_or_clear_update_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: std::option::Option<T>) -> Self {
        self.update_date = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_records][DnsDomain::resource_records].
    pub fn set_resource_records<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::DnsDomainResourceRecord>,
    {
        use std::iter::Iterator;
        self.resource_records = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [account][DnsDomain::account].
    pub fn set_account<T: std::convert::Into<crate::model::Account>>(mut self, v: T) -> Self {
        self.account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [account][DnsDomain::account].
    pub fn set_or_clear_account<T: std::convert::Into<crate::model::Account>>(mut self, v: std::option::Option<T>) -> Self {
        self.account = v.map(|x| x.into());
        self
    }
}

impl Record for DnsDomain {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::DNS_DOMAIN
    }
}

/// A single DNS record in a [DnsDomain].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DnsDomainResourceRecord {
    pub id: std::option::Option<i64>,

    pub domain_id: std::option::Option<i64>,

    pub host: std::option::Option<std::string::String>,

    pub data: std::option::Option<std::string::String>,

    pub r#type: std::option::Option<std::string::String>,

    pub ttl: std::option::Option<i64>,

    pub mx_priority: std::option::Option<i64>,
}

impl DnsDomainResourceRecord {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][DnsDomainResourceRecord::id].
    pub fn set_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][DnsDomainResourceRecord::id].
    pub fn set_or_clear_id<T: std::convert::Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [domain_id][DnsDomainResourceRecord::domain_id].
    pub fn set_domain_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.domain_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [domain_id][DnsDomainResourceRecord::domain_id].
    pub fn set_or_clear_domain_id<T: std::convert::Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.domain_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [host][DnsDomainResourceRecord::host].
    pub fn set_host<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.host = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [host][DnsDomainResourceRecord::host].
    pub fn set_or_clear_host<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.host = v.map(|x| x.into());
        self
    }

    /// Sets the value of [data][DnsDomainResourceRecord::data].
    pub fn set_data<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.data = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [data][DnsDomainResourceRecord::data].
    pub fn set_or_clear_data<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.data = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][DnsDomainResourceRecord::r#type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [type][DnsDomainResourceRecord::r#type].
    pub fn set_or_clear_type<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ttl][DnsDomainResourceRecord::ttl].
    pub fn set_ttl<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.ttl = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ttl][DnsDomainResourceRecord::ttl].
    pub fn set_or_clear_ttl<T: std::convert::Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.ttl = v.map(|x| x.into());
        self
    }

    /// Sets the value of [mx_priority][DnsDomainResourceRecord::mx_priority].
    pub fn set_mx_priority<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.mx_priority = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [mx_priority][DnsDomainResourceRecord::mx_priority].
    pub fn set_or_clear_mx_priority<T: std::convert::Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.mx_priority = v.map(|x| x.into());
        self
    }
}

impl Record for DnsDomainResourceRecord {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::DNS_DOMAIN_RESOURCE_RECORD
    }
}

/// A support ticket.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Ticket {
    pub id: std::option::Option<i64>,

    pub title: std::option::Option<std::string::String>,

    pub status_id: std::option::Option<i64>,

    pub assigned_user_id: std::option::Option<i64>,

    pub create_date: std::option::Option<wkt::Timestamp>,

    pub last_edit_date: std::option::Option<wkt::Timestamp>,

    pub account: std::option::Option<crate::model::Account>,

    pub updates: std::option::Option<std::vec::Vec<crate::model::TicketUpdate>>,
}

impl Ticket {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Ticket::id].
    pub fn set_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][Ticket::id].
    pub fn set_or_clear_id<T: std::convert::Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [title][Ticket::title].
    pub fn set_title<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.title = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [title][Ticket::title].
    pub fn set_or_clear_title<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.title = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status_id][Ticket::status_id].
    pub fn set_status_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.status_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status_id][Ticket::status_id].
    pub fn set_or_clear_status_id<T: std::convert::Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.status_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [assigned_user_id][Ticket::assigned_user_id].
    pub fn set_assigned_user_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.assigned_user_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [assigned_user_id][Ticket::assigned_user_id].
    pub fn set_or_clear_assigned_user_id<T: std::convert::Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.assigned_user_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_date][Ticket::create_date].
    pub fn set_create_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_date = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [create_date][Ticket::create_date].
    pub fn set_or_clear_create_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: std::option::Option<T>) -> Self {
        self.create_date = v.map(|x| x.into());
        self
    }

    /// Sets the value of [last_edit_date][Ticket::last_edit_date].
    pub fn set_last_edit_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_edit_date = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [last_edit_date][Ticket::last_edit_date].
    pub fn set_or_clear_last_edit_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: std::option::Option<T>) -> Self {
        self.last_edit_date = v.map(|x| x.into());
        self
    }

    /// Sets the value of [account][Ticket::account].
    pub fn set_account<T: std::convert::Into<crate::model::Account>>(mut self, v: T) -> Self {
        self.account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [account][Ticket::account].
    pub fn set_or_clear_account<T: std::convert::Into<crate::model::Account>>(mut self, v: std::option::Option<T>) -> Self {
        self.account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [updates][Ticket::updates].
    pub fn set_updates<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::TicketUpdate>,
    {
        use std::iter::Iterator;
        self.updates = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl Record for Ticket {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::TICKET
    }
}

/// An update, or a reply, on a [Ticket].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct TicketUpdate {
    pub id: std::option::Option<i64>,

    pub ticket_id: std::option::Option<i64>,

    pub entry: std::option::Option<std::string::String>,

    pub create_date: std::option::Option<wkt::Timestamp>,
}

impl TicketUpdate {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][TicketUpdate::id].
    pub fn set_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][TicketUpdate::id].
    pub fn set_or_clear_id<T: std::convert::Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ticket_id][TicketUpdate::ticket_id].
    pub fn set_ticket_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.ticket_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ticket_id][TicketUpdate::ticket_id].
    pub fn set_or_clear_ticket_id<T: std::convert::Into<i64>>(mut self, v: std::option::Option<T>) -> Self {
        self.ticket_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [entry][TicketUpdate::entry].
    pub fn set_entry<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entry = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [entry][TicketUpdate::entry].
    pub fn set_or_clear_entry<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.entry = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_date][TicketUpdate::create_date].
    pub fn set_create_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_date = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [create_date][TicketUpdate::create_date].
    pub fn set_or_clear_create_date<T: std::convert::Into<wkt::Timestamp>>(mut self, v: std::option::Option<T>) -> Self {
        self.create_date = v.map(|x| x.into());
        self
    }
}

impl Record for TicketUpdate {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::TICKET_UPDATE
    }
}

/// A fault reported by the service.
///
/// Converts into the [ApiFault][gax::error::fault::ApiFault] carried by
/// errors.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ContainerException {
    /// The exception class, e.g. `SoftLayer_Exception_ObjectNotFound`.
    pub exception_class: std::option::Option<std::string::String>,

    pub exception_message: std::option::Option<std::string::String>,
}

impl ContainerException {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [exception_class][ContainerException::exception_class].
    pub fn set_exception_class<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.exception_class = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [exception_class][ContainerException::exception_class].
    pub fn set_or_clear_exception_class<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.exception_class = v.map(|x| x.into());
        self
    }

    /// Sets the value of [exception_message][ContainerException::exception_message].
    pub fn set_exception_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.exception_message = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [exception_message][ContainerException::exception_message].
    pub fn set_or_clear_exception_message<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.exception_message = v.map(|x| x.into());
        self
    }
}

impl Record for ContainerException {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::CONTAINER_EXCEPTION
    }
}

impl std::convert::From<ContainerException> for gax::error::fault::ApiFault {
    fn from(value: ContainerException) -> Self {
        gax::error::fault::ApiFault::default()
            .set_exception_class(value.exception_class.unwrap_or_default())
            .set_exception_message(value.exception_message.unwrap_or_default())
    }
}

/// A single result of a search.
///
/// The concrete type of the [resource][ContainerSearchResult::resource] is
/// named by [resource_type][ContainerSearchResult::resource_type].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ContainerSearchResult {
    pub relevance_score: std::option::Option<wkt::Decimal>,

    pub resource_type: std::option::Option<std::string::String>,

    pub resource: std::option::Option<crate::model::Resource>,

    pub matched_terms: std::option::Option<std::vec::Vec<std::string::String>>,
}

impl ContainerSearchResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [relevance_score][ContainerSearchResult::relevance_score].
    pub fn set_relevance_score<T: std::convert::Into<wkt::Decimal>>(mut self, v: T) -> Self {
        self.relevance_score = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [relevance_score][ContainerSearchResult::relevance_score].
    pub fn set_or_clear_relevance_score<T: std::convert::Into<wkt::Decimal>>(mut self, v: std::option::Option<T>) -> Self {
        self.relevance_score = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][ContainerSearchResult::resource_type].
    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][ContainerSearchResult::resource_type].
    pub fn set_or_clear_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.resource_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource][ContainerSearchResult::resource].
    pub fn set_resource<T: std::convert::Into<crate::model::Resource>>(mut self, v: T) -> Self {
        self.resource = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource][ContainerSearchResult::resource].
    pub fn set_or_clear_resource<T: std::convert::Into<crate::model::Resource>>(mut self, v: std::option::Option<T>) -> Self {
        self.resource = v.map(|x| x.into());
        self
    }

    /// Sets the value of [matched_terms][ContainerSearchResult::matched_terms].
    pub fn set_matched_terms<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.matched_terms = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl Record for ContainerSearchResult {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::CONTAINER_SEARCH_RESULT
    }
}

/// The fields shared by all the authentication requests.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ContainerAuthenticationRequestCommon {
    pub username: std::option::Option<std::string::String>,

    pub auth_token: std::option::Option<std::string::String>,
}

impl ContainerAuthenticationRequestCommon {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [username][ContainerAuthenticationRequestCommon::username].
    pub fn set_username<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.username = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [username][ContainerAuthenticationRequestCommon::username].
    pub fn set_or_clear_username<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.username = v.map(|x| x.into());
        self
    }

    /// Sets the value of [auth_token][ContainerAuthenticationRequestCommon::auth_token].
    pub fn set_auth_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.auth_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [auth_token][ContainerAuthenticationRequestCommon::auth_token].
    pub fn set_or_clear_auth_token<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.auth_token = v.map(|x| x.into());
        self
    }
}

impl Record for ContainerAuthenticationRequestCommon {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::CONTAINER_AUTHENTICATION_REQUEST_COMMON
    }
}

/// An authentication request using a password.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ContainerAuthenticationRequestNative {
    /// The fields inherited from [ContainerAuthenticationRequestCommon].
    #[serde(flatten)]
    pub base: crate::model::ContainerAuthenticationRequestCommon,

    pub password: std::option::Option<std::string::String>,
}

impl ContainerAuthenticationRequestNative {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of the inherited fields.
    pub fn set_base<T: std::convert::Into<crate::model::ContainerAuthenticationRequestCommon>>(mut self, v: T) -> Self {
        self.base = v.into();
        self
    }

    /// Sets the value of [password][ContainerAuthenticationRequestNative::password].
    pub fn set_password<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.password = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [password][ContainerAuthenticationRequestNative::password].
    pub fn set_or_clear_password<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.password = v.map(|x| x.into());
        self
    }
}

impl Record for ContainerAuthenticationRequestNative {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::CONTAINER_AUTHENTICATION_REQUEST_NATIVE
    }
}

/// An authentication request with an external second factor.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ContainerAuthenticationRequestNativeExternal {
    /// The fields inherited from [ContainerAuthenticationRequestNative].
    #[serde(flatten)]
    pub base: crate::model::ContainerAuthenticationRequestNative,

    pub vendor: std::option::Option<std::string::String>,
}

impl ContainerAuthenticationRequestNativeExternal {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of the inherited fields.
    pub fn set_base<T: std::convert::Into<crate::model::ContainerAuthenticationRequestNative>>(mut self, v: T) -> Self {
        self.base = v.into();
        self
    }

    /// Sets the value of [vendor][ContainerAuthenticationRequestNativeExternal::vendor].
    pub fn set_vendor<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.vendor = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vendor][ContainerAuthenticationRequestNativeExternal::vendor].
    pub fn set_or_clear_vendor<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.vendor = v.map(|x| x.into());
        self
    }
}

impl Record for ContainerAuthenticationRequestNativeExternal {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::CONTAINER_AUTHENTICATION_REQUEST_NATIVE_EXTERNAL
    }
}

/// An authentication request with a time-based one-time password.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ContainerAuthenticationRequestNativeExternalTotp {
    /// The fields inherited from [ContainerAuthenticationRequestNativeExternal].
    #[serde(flatten)]
    pub base: crate::model::ContainerAuthenticationRequestNativeExternal,

    pub security_code: std::option::Option<std::string::String>,
}

impl ContainerAuthenticationRequestNativeExternalTotp {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of the inherited fields.
    pub fn set_base<T: std::convert::Into<crate::model::ContainerAuthenticationRequestNativeExternal>>(mut self, v: T) -> Self {
        self.base = v.into();
        self
    }

    /// Sets the value of [security_code][ContainerAuthenticationRequestNativeExternalTotp::security_code].
    pub fn set_security_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.security_code = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [security_code][ContainerAuthenticationRequestNativeExternalTotp::security_code].
    pub fn set_or_clear_security_code<T: std::convert::Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
        self.security_code = v.map(|x| x.into());
        self
    }
}

impl Record for ContainerAuthenticationRequestNativeExternalTotp {
    fn shape() -> &'static RecordShape {
        &crate::registry::shapes::CONTAINER_AUTHENTICATION_REQUEST_NATIVE_EXTERNAL_TOTP
    }
}

/// A resource returned by a search.
///
/// The concrete type is named by the `complexType` key, or by the
/// `resourceType` field of the enclosing [ContainerSearchResult].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "complexType")]
#[non_exhaustive]
pub enum Resource {
    #[serde(rename = "SoftLayer_Hardware")]
    Hardware(crate::model::Hardware),
    #[serde(rename = "SoftLayer_Hardware_Server")]
    HardwareServer(crate::model::HardwareServer),
    #[serde(rename = "SoftLayer_Virtual_Guest")]
    VirtualGuest(crate::model::VirtualGuest),
    #[serde(rename = "SoftLayer_Dns_Domain")]
    DnsDomain(crate::model::DnsDomain),
    #[serde(rename = "SoftLayer_Ticket")]
    Ticket(crate::model::Ticket),
}

impl Resource {
    /// The canonical type name of the concrete value.
    pub fn typename(&self) -> &'static str {
        match self {
            Self::Hardware(_) => crate::model::Hardware::typename(),
            Self::HardwareServer(_) => crate::model::HardwareServer::typename(),
            Self::VirtualGuest(_) => crate::model::VirtualGuest::typename(),
            Self::DnsDomain(_) => crate::model::DnsDomain::typename(),
            Self::Ticket(_) => crate::model::Ticket::typename(),
        }
    }
}

impl Polymorphic for Resource {
    fn shape() -> &'static PolymorphicShape {
        &crate::registry::shapes::RESOURCE
    }
}

impl std::convert::From<crate::model::Hardware> for Resource {
    fn from(value: crate::model::Hardware) -> Self {
        Self::Hardware(value)
    }
}

impl std::convert::From<crate::model::HardwareServer> for Resource {
    fn from(value: crate::model::HardwareServer) -> Self {
        Self::HardwareServer(value)
    }
}

impl std::convert::From<crate::model::VirtualGuest> for Resource {
    fn from(value: crate::model::VirtualGuest) -> Self {
        Self::VirtualGuest(value)
    }
}

impl std::convert::From<crate::model::DnsDomain> for Resource {
    fn from(value: crate::model::DnsDomain) -> Self {
        Self::DnsDomain(value)
    }
}

impl std::convert::From<crate::model::Ticket> for Resource {
    fn from(value: crate::model::Ticket) -> Self {
        Self::Ticket(value)
    }
}
