//! Permission models
//!
//! The wire shape (`granteeCapabilities`) is converted into [`Permission`],
//! which is what ends up in sidecar files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::IdRef;
use crate::error::ApiError;

/// Response from `.../{projects|workbooks}/{id}/permissions`
#[derive(Debug, Clone, Deserialize)]
pub struct PermissionsResponse {
    pub permissions: PermissionsBody,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsBody {
    #[serde(default)]
    pub grantee_capabilities: Vec<GranteeCapabilities>,
}

/// One grantee with its capabilities, as sent by the server
#[derive(Debug, Clone, Deserialize)]
pub struct GranteeCapabilities {
    #[serde(default)]
    pub user: Option<IdRef>,
    #[serde(default)]
    pub group: Option<IdRef>,
    #[serde(default)]
    pub capabilities: CapabilityList,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CapabilityList {
    #[serde(default)]
    pub capability: Vec<Capability>,
}

/// Named action with its mode ("Allow" or "Deny")
#[derive(Debug, Clone, Deserialize)]
pub struct Capability {
    pub name: String,
    pub mode: String,
}

/// User or group a permission entry applies to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Grantee {
    pub id: String,
    /// "user" or "group"
    pub tag_name: String,
}

/// Permission entry as written to sidecars.
///
/// Capabilities are kept in a `BTreeMap` so the serialized order is stable
/// between runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Permission {
    pub grantee: Grantee,
    pub capabilities: BTreeMap<String, String>,
}

impl TryFrom<GranteeCapabilities> for Permission {
    type Error = ApiError;

    fn try_from(rule: GranteeCapabilities) -> Result<Self, Self::Error> {
        let grantee = match (rule.user, rule.group) {
            (Some(user), _) => Grantee {
                id: user.id,
                tag_name: "user".into(),
            },
            (None, Some(group)) => Grantee {
                id: group.id,
                tag_name: "group".into(),
            },
            (None, None) => {
                return Err(ApiError::InvalidResponse(
                    "permission rule without user or group grantee".into(),
                ))
            }
        };

        let capabilities = rule
            .capabilities
            .capability
            .into_iter()
            .map(|c| (c.name, c.mode))
            .collect();

        Ok(Self {
            grantee,
            capabilities,
        })
    }
}

impl PermissionsResponse {
    /// Convert every rule, in server order
    pub fn into_permissions(self) -> Result<Vec<Permission>, ApiError> {
        self.permissions
            .grantee_capabilities
            .into_iter()
            .map(Permission::try_from)
            .collect()
    }
}
