//! Domain models for provider virtual data centers (PVDCs).

use crate::core::domain::model::cluster::{ClusterPrototype, ClusterSummary};
use serde::{Deserialize, Serialize};

/// A PVDC as returned by `/director_sites/{site_id}/pvdcs`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Pvdc {
    pub name: String,
    /// Physical data center hosting this PVDC (e.g. `dal10`).
    pub data_center_name: String,
    pub id: String,
    pub href: String,
    pub clusters: Vec<ClusterSummary>,
    /// Lifecycle status, see the `STATUS_*` constants.
    pub status: String,
    /// Billing models offered by this PVDC.
    pub provider_types: Vec<PvdcProviderType>,
}

impl Pvdc {
    pub const STATUS_CREATING: &'static str = "creating";
    pub const STATUS_READY_TO_USE: &'static str = "ready_to_use";
    pub const STATUS_UPDATING: &'static str = "updating";
    pub const STATUS_DELETING: &'static str = "deleting";
    pub const STATUS_DELETED: &'static str = "deleted";
}

/// Response of `GET /director_sites/{site_id}/pvdcs`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PvdcCollection {
    pub pvdcs: Vec<Pvdc>,
}

/// A billing model of a PVDC.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PvdcProviderType {
    /// See the `NAME_*` constants.
    pub name: String,
}

impl PvdcProviderType {
    pub const NAME_ON_DEMAND: &'static str = "on_demand";
    pub const NAME_RESERVED: &'static str = "reserved";
    pub const NAME_PAYGO: &'static str = "paygo";
}

/// A PVDC to create, either inside a new director site or in an existing one.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PvdcPrototype {
    pub name: String,
    pub data_center_name: String,
    pub clusters: Vec<ClusterPrototype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl PvdcPrototype {
    pub fn new(
        name: impl Into<String>,
        data_center_name: impl Into<String>,
        clusters: Vec<ClusterPrototype>,
    ) -> Self {
        Self {
            name: name.into(),
            data_center_name: data_center_name.into(),
            clusters,
            id: None,
        }
    }
}
