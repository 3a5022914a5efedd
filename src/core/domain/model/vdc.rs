//! Domain models for virtual data centers (VDCs), the tenant-facing workload containers.

use crate::core::domain::model::director_site::ResourceGroupIdentity;
use crate::core::domain::value_object::serde_helpers::{lenient, lenient_option};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A VDC as returned by `/vdcs` and `/vdcs/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Vdc {
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_at: Option<DateTime<Utc>>,
    /// vCPU quota; absent for unlimited.
    #[serde(
        default,
        deserialize_with = "lenient_option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub cpu: Option<i64>,
    pub crn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Where the VDC is deployed.
    pub director_site: VdcDirectorSite,
    pub edges: Vec<Edge>,
    /// Why the VDC is in its current status, when the server reports it.
    pub status_reasons: Vec<StatusReason>,
    pub name: String,
    pub ordered_at: DateTime<Utc>,
    /// Cloud Director organization name.
    pub org_name: String,
    /// RAM quota in GB; absent for unlimited.
    #[serde(
        default,
        deserialize_with = "lenient_option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub ram: Option<i64>,
    /// Lifecycle status, see the `STATUS_*` constants.
    pub status: String,
    /// Tenancy model, see the `TYPE_*` constants.
    #[serde(rename = "type")]
    pub vdc_type: String,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub fast_provisioning_enabled: bool,
    /// Red Hat Enterprise Linux bring-your-own-license.
    #[serde(deserialize_with = "lenient::deserialize")]
    pub rhel_byol: bool,
    /// Windows bring-your-own-license.
    #[serde(deserialize_with = "lenient::deserialize")]
    pub windows_byol: bool,
}

impl Vdc {
    pub const STATUS_CREATING: &'static str = "creating";
    pub const STATUS_MODIFYING: &'static str = "modifying";
    pub const STATUS_READY_TO_USE: &'static str = "ready_to_use";
    pub const STATUS_FAILED: &'static str = "failed";
    pub const STATUS_DELETING: &'static str = "deleting";
    pub const STATUS_DELETED: &'static str = "deleted";

    pub const TYPE_SINGLE_TENANT: &'static str = "single_tenant";
    pub const TYPE_MULTITENANT: &'static str = "multitenant";
}

/// Response of `GET /vdcs`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VdcCollection {
    pub vdcs: Vec<Vdc>,
}

/// The director site and PVDC hosting a VDC.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VdcDirectorSite {
    pub id: String,
    pub pvdc: VdcPvdc,
    /// Cloud Director console URL.
    pub url: String,
}

/// The PVDC hosting a VDC.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VdcPvdc {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<VdcProviderType>,
}

/// Billing model selected for a VDC.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VdcProviderType {
    /// See the `PvdcProviderType::NAME_*` constants.
    pub name: String,
}

/// An NSX-T edge of a VDC.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Edge {
    pub id: String,
    pub public_ips: Vec<String>,
    /// Only set for performance edges, see the `SIZE_*` constants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// See the `STATUS_*` constants.
    pub status: String,
    /// See the `TYPE_*` constants.
    #[serde(rename = "type")]
    pub edge_type: String,
}

impl Edge {
    pub const SIZE_MEDIUM: &'static str = "medium";
    pub const SIZE_LARGE: &'static str = "large";
    pub const SIZE_EXTRA_LARGE: &'static str = "extra_large";

    pub const STATUS_CREATING: &'static str = "creating";
    pub const STATUS_READY_TO_USE: &'static str = "ready_to_use";
    pub const STATUS_DELETING: &'static str = "deleting";
    pub const STATUS_DELETED: &'static str = "deleted";

    /// Shares resources with other tenants.
    pub const TYPE_EFFICIENCY: &'static str = "efficiency";
    /// Dedicated resources.
    pub const TYPE_PERFORMANCE: &'static str = "performance";
}

/// Why a VDC could not reach the requested state.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatusReason {
    /// See the `CODE_*` constants.
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

impl StatusReason {
    // The misspelling is the wire value.
    pub const CODE_INSUFFICENT_CPU: &'static str = "insufficent_cpu";
    pub const CODE_INSUFFICENT_RAM: &'static str = "insufficent_ram";
    pub const CODE_INSUFFICENT_CPU_AND_RAM: &'static str = "insufficent_cpu_and_ram";
}

/// Director site and PVDC to deploy a new VDC on.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VdcDirectorSitePrototype {
    pub id: String,
    pub pvdc: DirectorSitePvdc,
}

impl VdcDirectorSitePrototype {
    pub fn new(id: impl Into<String>, pvdc: DirectorSitePvdc) -> Self {
        Self {
            id: id.into(),
            pvdc,
        }
    }
}

/// PVDC reference inside [`VdcDirectorSitePrototype`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DirectorSitePvdc {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<VdcProviderType>,
}

impl DirectorSitePvdc {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            provider_type: None,
        }
    }
}

/// Edge to create with a new VDC.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VdcEdgePrototype {
    /// Only for performance edges, see the `Edge::SIZE_*` constants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// See the `Edge::TYPE_*` constants.
    #[serde(rename = "type")]
    pub edge_type: String,
}

impl VdcEdgePrototype {
    pub fn new(edge_type: impl Into<String>) -> Self {
        Self {
            size: None,
            edge_type: edge_type.into(),
        }
    }
}

/// JSON body of `POST /vdcs`.
///
/// Optional fields that are `None` are omitted from the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VdcPrototype {
    pub name: String,
    pub director_site: VdcDirectorSitePrototype,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge: Option<VdcEdgePrototype>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast_provisioning_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rhel_byol: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows_byol: Option<bool>,
}
