//! Read-only catalog records: regions, shared director sites and host profiles.

use crate::core::domain::model::pvdc::PvdcProviderType;
use crate::core::domain::value_object::serde_helpers::lenient;
use serde::{Deserialize, Serialize};

/// A region where director sites can be deployed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DirectorSiteRegion {
    /// Region name (e.g. `us-south`).
    pub name: String,
    /// Regional API endpoint.
    pub endpoint: String,
    /// Physical data centers available in this region.
    pub data_centers: Vec<DataCenterInfo>,
}

/// A physical data center within a region.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DataCenterInfo {
    /// Short name (e.g. `dal10`).
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Network uplink speed of the data center.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uplink_speed: Option<String>,
}

/// Response of `GET /director_site_regions`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DirectorSiteRegionCollection {
    pub director_site_regions: Vec<DirectorSiteRegion>,
}

/// A shared (multitenant) director site VDCs can be placed on.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MultitenantDirectorSite {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Region hosting the site.
    pub region: String,
    pub pvdcs: Vec<MultitenantPvdc>,
}

/// A PVDC of a multitenant director site.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MultitenantPvdc {
    pub id: String,
    pub name: String,
    pub data_center_name: String,
    pub provider_types: Vec<PvdcProviderType>,
}

/// Response of `GET /multitenant_director_sites`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MultitenantDirectorSiteCollection {
    pub multitenant_director_sites: Vec<MultitenantDirectorSite>,
}

/// A hardware SKU for cluster hosts.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DirectorSiteHostProfile {
    /// Profile identifier used as `host_profile` when creating clusters.
    pub id: String,
    /// Number of cores.
    #[serde(deserialize_with = "lenient::deserialize")]
    pub cpu: i64,
    /// Processor family (e.g. `Cascade Lake`).
    pub family: String,
    /// Processor model.
    pub processor: String,
    /// RAM in GB.
    #[serde(deserialize_with = "lenient::deserialize")]
    pub ram: i64,
    /// Number of processor sockets.
    #[serde(deserialize_with = "lenient::deserialize")]
    pub socket: i64,
    /// Clock speed.
    pub speed: String,
    pub manufacturer: String,
    /// Extra hardware features.
    pub features: Vec<String>,
}

/// Response of `GET /director_site_host_profiles`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DirectorSiteHostProfileCollection {
    pub director_site_host_profiles: Vec<DirectorSiteHostProfile>,
}
