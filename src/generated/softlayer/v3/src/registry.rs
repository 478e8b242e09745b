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

//! The registry of the record types in this crate.

use gax::registry::{RegistryError, TypeRegistry};
use std::sync::Arc;

pub(crate) mod shapes;

lazy_static::lazy_static! {
    static ref REGISTRY: std::result::Result<Arc<TypeRegistry>, RegistryError> = build();
}

fn build() -> std::result::Result<Arc<TypeRegistry>, RegistryError> {
    shapes::ALL
        .iter()
        .fold(TypeRegistry::builder(), |builder, shape| builder.register(*shape))
        .build()
        .map(Arc::new)
}

/// Returns the registry of all the record types in this crate.
///
/// The registry is built once, on first use, and shared afterwards.
///
/// # Example
/// ```
/// # use softlayer_v3::registry;
/// let registry = registry::registry()?;
/// assert!(registry.is_subtype("SoftLayer_Hardware_Server", "SoftLayer_Hardware"));
/// assert!(registry.contains("Virtual_Guest"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn registry() -> std::result::Result<Arc<TypeRegistry>, RegistryError> {
    REGISTRY.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::registry::Record;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds() -> anyhow::Result<()> {
        let registry = registry()?;
        assert_eq!(registry.names().count(), shapes::ALL.len());
        Ok(())
    }

    #[test]
    fn shared() -> anyhow::Result<()> {
        let a = registry()?;
        let b = registry()?;
        assert!(Arc::ptr_eq(&a, &b));
        Ok(())
    }

    #[test]
    fn inherited_fields() -> anyhow::Result<()> {
        let registry = registry()?;
        let server = registry
            .get(crate::model::HardwareServer::typename())
            .expect("servers are registered");
        let names = server
            .fields()
            .iter()
            .map(|f| f.wire_name)
            .collect::<Vec<_>>();
        assert_eq!(names[0], "id");
        assert!(names.contains(&"datacenter"), "{names:?}");
        assert!(names.contains(&"memoryCapacity"), "{names:?}");
        Ok(())
    }

    #[test]
    fn authentication_chain() -> anyhow::Result<()> {
        let registry = registry()?;
        let totp = "SoftLayer_Container_Authentication_Request_Native_External_Totp";
        for ancestor in [
            "SoftLayer_Container_Authentication_Request_Native_External",
            "SoftLayer_Container_Authentication_Request_Native",
            "SoftLayer_Container_Authentication_Request_Common",
        ] {
            assert!(registry.is_subtype(totp, ancestor), "{ancestor}");
        }
        assert!(!registry.is_subtype(totp, "SoftLayer_Entity"));
        let fields = registry.get(totp).expect("registered").fields();
        assert_eq!(
            fields.iter().map(|f| f.wire_name).collect::<Vec<_>>(),
            vec!["username", "authToken", "password", "vendor", "securityCode"]
        );
        Ok(())
    }

    #[test]
    fn entities() -> anyhow::Result<()> {
        let registry = registry()?;
        for name in [
            "Account",
            "Hardware",
            "Virtual_Guest",
            "Dns_Domain",
            "Ticket",
            "Container_Search_Result",
        ] {
            assert!(registry.is_subtype(name, "Entity"), "{name}");
        }
        Ok(())
    }

    #[test]
    fn container_exception() -> anyhow::Result<()> {
        let registry = registry()?;
        let ty = registry
            .get(crate::model::ContainerException::typename())
            .expect("faults are registered");
        assert_eq!(
            ty.fields().iter().map(|f| f.wire_name).collect::<Vec<_>>(),
            vec!["exceptionClass", "exceptionMessage"]
        );
        Ok(())
    }
}
