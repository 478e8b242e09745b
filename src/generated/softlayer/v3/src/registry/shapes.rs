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

//! The shapes of the record types, used to validate masks and payloads.

use gax::registry::{FieldKind, FieldShape, PolymorphicShape, RecordShape};

pub static RESOURCE: PolymorphicShape = PolymorphicShape {
    name: "SoftLayer_Resource",
    hint: Some("resourceType"),
    variants: &[
        "SoftLayer_Hardware",
        "SoftLayer_Hardware_Server",
        "SoftLayer_Virtual_Guest",
        "SoftLayer_Dns_Domain",
        "SoftLayer_Ticket",
    ],
};

pub static ENTITY: RecordShape = RecordShape {
    name: "SoftLayer_Entity",
    parent: None,
    fields: &[],
};

pub static LOCATION: RecordShape = RecordShape {
    name: "SoftLayer_Location",
    parent: Some("SoftLayer_Entity"),
    fields: &[
        FieldShape::new("id", "id", FieldKind::Integer),
        FieldShape::new("name", "name", FieldKind::String),
        FieldShape::new("long_name", "longName", FieldKind::String),
        FieldShape::new("status_id", "statusId", FieldKind::Integer),
    ],
};

pub static ACCOUNT: RecordShape = RecordShape {
    name: "SoftLayer_Account",
    parent: Some("SoftLayer_Entity"),
    fields: &[
        FieldShape::new("id", "id", FieldKind::Integer),
        FieldShape::new("company_name", "companyName", FieldKind::String),
        FieldShape::new("first_name", "firstName", FieldKind::String),
        FieldShape::new("last_name", "lastName", FieldKind::String),
        FieldShape::new("email", "email", FieldKind::String),
        FieldShape::new("create_date", "createDate", FieldKind::Timestamp),
        FieldShape::new("hardware_count", "hardwareCount", FieldKind::Unsigned),
        FieldShape::new("virtual_guest_count", "virtualGuestCount", FieldKind::Unsigned),
        FieldShape::new("hardware", "hardware", FieldKind::Record("SoftLayer_Hardware")).repeated(),
        FieldShape::new("virtual_guests", "virtualGuests", FieldKind::Record("SoftLayer_Virtual_Guest")).repeated(),
        FieldShape::new("domains", "domains", FieldKind::Record("SoftLayer_Dns_Domain")).repeated(),
        FieldShape::new("invoices", "invoices", FieldKind::Record("SoftLayer_Billing_Invoice")).repeated(),
        FieldShape::new("open_tickets", "openTickets", FieldKind::Record("SoftLayer_Ticket")).repeated(),
    ],
};

pub static HARDWARE: RecordShape = RecordShape {
    name: "SoftLayer_Hardware",
    parent: Some("SoftLayer_Entity"),
    fields: &[
        FieldShape::new("id", "id", FieldKind::Integer),
        FieldShape::new("hostname", "hostname", FieldKind::String),
        FieldShape::new("domain", "domain", FieldKind::String),
        FieldShape::new("fully_qualified_domain_name", "fullyQualifiedDomainName", FieldKind::String),
        FieldShape::new("primary_ip_address", "primaryIpAddress", FieldKind::String),
        FieldShape::new("notes", "notes", FieldKind::String),
        FieldShape::new("serial_number", "serialNumber", FieldKind::String),
        FieldShape::new("provision_date", "provisionDate", FieldKind::Timestamp),
        FieldShape::new("datacenter", "datacenter", FieldKind::Record("SoftLayer_Location")),
        FieldShape::new("account", "account", FieldKind::Record("SoftLayer_Account")),
        FieldShape::new("billing_item", "billingItem", FieldKind::Record("SoftLayer_Billing_Item")),
    ],
};

pub static HARDWARE_SERVER: RecordShape = RecordShape {
    name: "SoftLayer_Hardware_Server",
    parent: Some("SoftLayer_Hardware"),
    fields: &[
        FieldShape::new("memory_capacity", "memoryCapacity", FieldKind::Unsigned),
        FieldShape::new("processor_physical_core_amount", "processorPhysicalCoreAmount", FieldKind::Unsigned),
        FieldShape::new("private_network_only_flag", "privateNetworkOnlyFlag", FieldKind::Bool).deprecated(),
    ],
};

pub static VIRTUAL_GUEST: RecordShape = RecordShape {
    name: "SoftLayer_Virtual_Guest",
    parent: Some("SoftLayer_Entity"),
    fields: &[
        FieldShape::new("id", "id", FieldKind::Integer),
        FieldShape::new("hostname", "hostname", FieldKind::String),
        FieldShape::new("domain", "domain", FieldKind::String),
        FieldShape::new("fully_qualified_domain_name", "fullyQualifiedDomainName", FieldKind::String),
        FieldShape::new("start_cpus", "startCpus", FieldKind::Unsigned),
        FieldShape::new("max_memory", "maxMemory", FieldKind::Unsigned),
        FieldShape::new("hourly_billing_flag", "hourlyBillingFlag", FieldKind::Bool),
        FieldShape::new("local_disk_flag", "localDiskFlag", FieldKind::Bool),
        FieldShape::new("dedicated_account_host_only_flag", "dedicatedAccountHostOnlyFlag", FieldKind::Bool),
        FieldShape::new("primary_ip_address", "primaryIpAddress", FieldKind::String),
        FieldShape::new("notes", "notes", FieldKind::String),
        FieldShape::new("create_date", "createDate", FieldKind::Timestamp),
        FieldShape::new("modify_date", "modifyDate", FieldKind::Timestamp),
        FieldShape::new("datacenter", "datacenter", FieldKind::Record("SoftLayer_Location")),
        FieldShape::new("power_state", "powerState", FieldKind::Record("SoftLayer_Virtual_Guest_Power_State")),
        FieldShape::new("billing_item", "billingItem", FieldKind::Record("SoftLayer_Billing_Item")),
        FieldShape::new("account", "account", FieldKind::Record("SoftLayer_Account")),
    ],
};

pub static VIRTUAL_GUEST_POWER_STATE: RecordShape = RecordShape {
    name: "SoftLayer_Virtual_Guest_Power_State",
    parent: Some("SoftLayer_Entity"),
    fields: &[
        FieldShape::new("key_name", "keyName", FieldKind::String),
        FieldShape::new("name", "name", FieldKind::String),
        FieldShape::new("description", "description", FieldKind::String),
    ],
};

pub static BILLING_ITEM: RecordShape = RecordShape {
    name: "SoftLayer_Billing_Item",
    parent: Some("SoftLayer_Entity"),
    fields: &[
        FieldShape::new("id", "id", FieldKind::Integer),
        FieldShape::new("description", "description", FieldKind::String),
        FieldShape::new("recurring_fee", "recurringFee", FieldKind::Decimal),
        FieldShape::new("hourly_recurring_fee", "hourlyRecurringFee", FieldKind::Decimal),
        FieldShape::new("create_date", "createDate", FieldKind::Timestamp),
        FieldShape::new("cancellation_date", "cancellationDate", FieldKind::Timestamp),
    ],
};

pub static BILLING_INVOICE: RecordShape = RecordShape {
    name: "SoftLayer_Billing_Invoice",
    parent: Some("SoftLayer_Entity"),
    fields: &[
        FieldShape::new("id", "id", FieldKind::Integer),
        FieldShape::new("type_code", "typeCode", FieldKind::String),
        FieldShape::new("status_code", "statusCode", FieldKind::String),
        FieldShape::new("invoice_total_amount", "invoiceTotalAmount", FieldKind::Decimal),
        FieldShape::new("create_date", "createDate", FieldKind::Timestamp),
        FieldShape::new("closed_date", "closedDate", FieldKind::Timestamp),
        FieldShape::new("account", "account", FieldKind::Record("SoftLayer_Account")),
    ],
};

pub static DNS_DOMAIN: RecordShape = RecordShape {
    name: "SoftLayer_Dns_Domain",
    parent: Some("SoftLayer_Entity"),
    fields: &[
        FieldShape::new("id", "id", FieldKind::Integer),
        FieldShape::new("name", "name", FieldKind::String),
        FieldShape::new("serial", "serial", FieldKind::Unsigned),
        FieldShape::new("update_date", "updateDate", FieldKind::Timestamp),
        FieldShape::new("resource_records", "resourceRecords", FieldKind::Record("SoftLayer_Dns_Domain_ResourceRecord")).repeated(),
        FieldShape::new("account", "account", FieldKind::Record("SoftLayer_Account")),
    ],
};

pub static DNS_DOMAIN_RESOURCE_RECORD: RecordShape = RecordShape {
    name: "SoftLayer_Dns_Domain_ResourceRecord",
    parent: Some("SoftLayer_Entity"),
    fields: &[
        FieldShape::new("id", "id", FieldKind::Integer),
        FieldShape::new("domain_id", "domainId", FieldKind::Integer),
        FieldShape::new("host", "host", FieldKind::String),
        FieldShape::new("data", "data", FieldKind::String),
        FieldShape::new("type", "type", FieldKind::String),
        FieldShape::new("ttl", "ttl", FieldKind::Integer),
        FieldShape::new("mx_priority", "mxPriority", FieldKind::Integer),
    ],
};

pub static TICKET: RecordShape = RecordShape {
    name: "SoftLayer_Ticket",
    parent: Some("SoftLayer_Entity"),
    fields: &[
        FieldShape::new("id", "id", FieldKind::Integer),
        FieldShape::new("title", "title", FieldKind::String),
        FieldShape::new("status_id", "statusId", FieldKind::Integer),
        FieldShape::new("assigned_user_id", "assignedUserId", FieldKind::Integer),
        FieldShape::new("create_date", "createDate", FieldKind::Timestamp),
        FieldShape::new("last_edit_date", "lastEditDate", FieldKind::Timestamp),
        FieldShape::new("account", "account", FieldKind::Record("SoftLayer_Account")),
        FieldShape::new("updates", "updates", FieldKind::Record("SoftLayer_Ticket_Update")).repeated(),
    ],
};

pub static TICKET_UPDATE: RecordShape = RecordShape {
    name: "SoftLayer_Ticket_Update",
    parent: Some("SoftLayer_Entity"),
    fields: &[
        FieldShape::new("id", "id", FieldKind::Integer),
        FieldShape::new("ticket_id", "ticketId", FieldKind::Integer),
        FieldShape::new("entry", "entry", FieldKind::String),
        FieldShape::new("create_date", "createDate", FieldKind::Timestamp),
    ],
};

pub static CONTAINER_EXCEPTION: RecordShape = RecordShape {
    name: "SoftLayer_Container_Exception",
    parent: None,
    fields: &[
        FieldShape::new("exception_class", "exceptionClass", FieldKind::String),
        FieldShape::new("exception_message", "exceptionMessage", FieldKind::String),
    ],
};

pub static CONTAINER_SEARCH_RESULT: RecordShape = RecordShape {
    name: "SoftLayer_Container_Search_Result",
    parent: Some("SoftLayer_Entity"),
    fields: &[
        FieldShape::new("relevance_score", "relevanceScore", FieldKind::Decimal),
        FieldShape::new("resource_type", "resourceType", FieldKind::String),
        FieldShape::new("resource", "resource", FieldKind::Polymorphic(&RESOURCE)),
        FieldShape::new("matched_terms", "matchedTerms", FieldKind::String).repeated(),
    ],
};

pub static CONTAINER_AUTHENTICATION_REQUEST_COMMON: RecordShape = RecordShape {
    name: "SoftLayer_Container_Authentication_Request_Common",
    parent: None,
    fields: &[
        FieldShape::new("username", "username", FieldKind::String),
        FieldShape::new("auth_token", "authToken", FieldKind::String),
    ],
};

pub static CONTAINER_AUTHENTICATION_REQUEST_NATIVE: RecordShape = RecordShape {
    name: "SoftLayer_Container_Authentication_Request_Native",
    parent: Some("SoftLayer_Container_Authentication_Request_Common"),
    fields: &[
        FieldShape::new("password", "password", FieldKind::String),
    ],
};

pub static CONTAINER_AUTHENTICATION_REQUEST_NATIVE_EXTERNAL: RecordShape = RecordShape {
    name: "SoftLayer_Container_Authentication_Request_Native_External",
    parent: Some("SoftLayer_Container_Authentication_Request_Native"),
    fields: &[
        FieldShape::new("vendor", "vendor", FieldKind::String),
    ],
};

pub static CONTAINER_AUTHENTICATION_REQUEST_NATIVE_EXTERNAL_TOTP: RecordShape = RecordShape {
    name: "SoftLayer_Container_Authentication_Request_Native_External_Totp",
    parent: Some("SoftLayer_Container_Authentication_Request_Native_External"),
    fields: &[
        FieldShape::new("security_code", "securityCode", FieldKind::String),
    ],
};

pub(crate) static ALL: &[&RecordShape] = &[
    &ENTITY,
    &LOCATION,
    &ACCOUNT,
    &HARDWARE,
    &HARDWARE_SERVER,
    &VIRTUAL_GUEST,
    &VIRTUAL_GUEST_POWER_STATE,
    &BILLING_ITEM,
    &BILLING_INVOICE,
    &DNS_DOMAIN,
    &DNS_DOMAIN_RESOURCE_RECORD,
    &TICKET,
    &TICKET_UPDATE,
    &CONTAINER_EXCEPTION,
    &CONTAINER_SEARCH_RESULT,
    &CONTAINER_AUTHENTICATION_REQUEST_COMMON,
    &CONTAINER_AUTHENTICATION_REQUEST_NATIVE,
    &CONTAINER_AUTHENTICATION_REQUEST_NATIVE_EXTERNAL,
    &CONTAINER_AUTHENTICATION_REQUEST_NATIVE_EXTERNAL_TOTP,
];
