//! Domain models for clusters, the compute capacity of a PVDC.

use crate::core::domain::model::director_site::DirectorSiteReference;
use crate::core::domain::value_object::serde_helpers::{lenient, lenient_option};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Smallest host count the service accepts for a cluster.
pub const MIN_HOST_COUNT: i64 = 2;
/// Largest host count the service accepts for a cluster.
pub const MAX_HOST_COUNT: i64 = 25;

/// A cluster as returned by `GET .../clusters/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Cluster {
    pub id: String,
    pub name: String,
    pub href: String,
    /// Number of hosts, between [`MIN_HOST_COUNT`] and [`MAX_HOST_COUNT`].
    #[serde(deserialize_with = "lenient::deserialize")]
    pub host_count: i64,
    /// Hardware SKU of the hosts (e.g. `BM_2S_20_CORES_192_GB`).
    pub host_profile: String,
    /// Always [`Cluster::STORAGE_TYPE_NFS`].
    pub storage_type: String,
    /// Always [`Cluster::BILLING_PLAN_MONTHLY`].
    pub billing_plan: String,
    pub data_center_name: String,
    pub ordered_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_at: Option<DateTime<Utc>>,
    /// Lifecycle status, see the `STATUS_*` constants.
    pub status: String,
    pub file_shares: FileShares,
    /// The director site this cluster belongs to.
    pub director_site: DirectorSiteReference,
}

impl Cluster {
    pub const STATUS_CREATING: &'static str = "creating";
    pub const STATUS_READY_TO_USE: &'static str = "ready_to_use";
    pub const STATUS_UPDATING: &'static str = "updating";
    pub const STATUS_DELETING: &'static str = "deleting";
    pub const STATUS_DELETED: &'static str = "deleted";

    pub const STORAGE_TYPE_NFS: &'static str = "nfs";
    pub const BILLING_PLAN_MONTHLY: &'static str = "monthly";
}

/// A cluster as embedded in PVDC listings and returned by cluster deletion.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClusterSummary {
    pub name: String,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub host_count: i64,
    pub host_profile: String,
    pub id: String,
    pub data_center_name: String,
    /// Lifecycle status, see the `Cluster::STATUS_*` constants.
    pub status: String,
    pub href: String,
    pub storage_type: String,
    pub file_shares: FileShares,
}

/// Response of `GET .../clusters`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClusterCollection {
    pub clusters: Vec<Cluster>,
}

/// Response of `PATCH .../clusters/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UpdateCluster {
    pub id: String,
    pub name: String,
    pub href: String,
    /// Lifecycle status, see the `Cluster::STATUS_*` constants.
    pub status: String,
    #[serde(
        default,
        deserialize_with = "lenient_option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub host_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_center_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_shares: Option<FileShares>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director_site: Option<DirectorSiteReference>,
}

/// NFS file share capacity per performance tier, in GiB.
///
/// Tiers are named by their IOPS-per-GB ratio. Unset tiers are omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileShares {
    /// 0.25 IOPS/GB tier.
    #[serde(
        rename = "STORAGE_POINT_TWO_FIVE_IOPS_GB",
        default,
        deserialize_with = "lenient_option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub storage_point_two_five_iops_gb: Option<i64>,
    /// 2 IOPS/GB tier.
    #[serde(
        rename = "STORAGE_TWO_IOPS_GB",
        default,
        deserialize_with = "lenient_option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub storage_two_iops_gb: Option<i64>,
    /// 4 IOPS/GB tier.
    #[serde(
        rename = "STORAGE_FOUR_IOPS_GB",
        default,
        deserialize_with = "lenient_option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub storage_four_iops_gb: Option<i64>,
    /// 10 IOPS/GB tier.
    #[serde(
        rename = "STORAGE_TEN_IOPS_GB",
        default,
        deserialize_with = "lenient_option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub storage_ten_iops_gb: Option<i64>,
}

impl FileShares {
    pub const STORAGE_POINT_TWO_FIVE_IOPS_GB: &'static str = "STORAGE_POINT_TWO_FIVE_IOPS_GB";
    pub const STORAGE_TWO_IOPS_GB: &'static str = "STORAGE_TWO_IOPS_GB";
    pub const STORAGE_FOUR_IOPS_GB: &'static str = "STORAGE_FOUR_IOPS_GB";
    pub const STORAGE_TEN_IOPS_GB: &'static str = "STORAGE_TEN_IOPS_GB";

    #[must_use]
    pub fn with_point_two_five_iops_gb(mut self, gib: i64) -> Self {
        self.storage_point_two_five_iops_gb = Some(gib);
        self
    }

    #[must_use]
    pub fn with_two_iops_gb(mut self, gib: i64) -> Self {
        self.storage_two_iops_gb = Some(gib);
        self
    }

    #[must_use]
    pub fn with_four_iops_gb(mut self, gib: i64) -> Self {
        self.storage_four_iops_gb = Some(gib);
        self
    }

    #[must_use]
    pub fn with_ten_iops_gb(mut self, gib: i64) -> Self {
        self.storage_ten_iops_gb = Some(gib);
        self
    }
}

/// A cluster to create, either inside a new PVDC or in an existing one.
///
/// `host_count` is sent as given; the service rejects values outside
/// [`MIN_HOST_COUNT`]..=[`MAX_HOST_COUNT`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClusterPrototype {
    pub name: String,
    pub host_count: i64,
    pub host_profile: String,
    pub file_shares: FileShares,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ClusterPrototype {
    pub fn new(
        name: impl Into<String>,
        host_count: i64,
        host_profile: impl Into<String>,
        file_shares: FileShares,
    ) -> Self {
        Self {
            name: name.into(),
            host_count,
            host_profile: host_profile.into(),
            file_shares,
            id: None,
        }
    }
}
