use super::{CallHeaders, require, require_path};
use crate::core::domain::error::ValidationError;
use crate::core::domain::model::{ClusterPrototype, FileShares, PatchMap};

/// Options for `list_director_sites_pvdcs_clusters`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDirectorSitesPvdcsClustersOptions {
    /// Director site identifier.
    pub site_id: String,
    /// PVDC identifier.
    pub pvdc_id: String,
    pub call_headers: CallHeaders,
}

impl ListDirectorSitesPvdcsClustersOptions {
    pub fn new(site_id: impl Into<String>, pvdc_id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            pvdc_id: pvdc_id.into(),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ValidationError> {
        require_path("site_id", &self.site_id)?;
        require_path("pvdc_id", &self.pvdc_id)
    }
}

/// Options for `create_director_sites_pvdcs_clusters`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateDirectorSitesPvdcsClustersOptions {
    /// Director site identifier.
    pub site_id: String,
    /// PVDC identifier.
    pub pvdc_id: String,
    /// Name of the cluster (required).
    pub name: Option<String>,
    /// Number of hosts (required). Sent as given.
    pub host_count: Option<i64>,
    /// Host profile identifier (required).
    pub host_profile: Option<String>,
    /// File share capacity per tier (required).
    pub file_shares: Option<FileShares>,
    pub call_headers: CallHeaders,
}

impl CreateDirectorSitesPvdcsClustersOptions {
    pub fn new(
        site_id: impl Into<String>,
        pvdc_id: impl Into<String>,
        name: impl Into<String>,
        host_count: i64,
        host_profile: impl Into<String>,
        file_shares: FileShares,
    ) -> Self {
        Self {
            site_id: site_id.into(),
            pvdc_id: pvdc_id.into(),
            name: Some(name.into()),
            host_count: Some(host_count),
            host_profile: Some(host_profile.into()),
            file_shares: Some(file_shares),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ValidationError> {
        require_path("site_id", &self.site_id)?;
        require_path("pvdc_id", &self.pvdc_id)?;
        require("name", &self.name)?;
        require("host_count", &self.host_count)?;
        require("host_profile", &self.host_profile)?;
        require("file_shares", &self.file_shares)?;
        Ok(())
    }

    pub(crate) fn to_prototype(&self) -> Result<ClusterPrototype, ValidationError> {
        Ok(ClusterPrototype::new(
            require("name", &self.name)?.clone(),
            *require("host_count", &self.host_count)?,
            require("host_profile", &self.host_profile)?.clone(),
            require("file_shares", &self.file_shares)?.clone(),
        ))
    }
}

/// Options for `get_director_instances_pvdcs_cluster`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDirectorInstancesPvdcsClusterOptions {
    /// Director site identifier.
    pub site_id: String,
    /// PVDC identifier.
    pub pvdc_id: String,
    /// Cluster identifier.
    pub id: String,
    pub call_headers: CallHeaders,
}

impl GetDirectorInstancesPvdcsClusterOptions {
    pub fn new(
        site_id: impl Into<String>,
        pvdc_id: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            site_id: site_id.into(),
            pvdc_id: pvdc_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ValidationError> {
        require_path("site_id", &self.site_id)?;
        require_path("pvdc_id", &self.pvdc_id)?;
        require_path("id", &self.id)
    }
}

/// Options for `delete_director_sites_pvdcs_cluster`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteDirectorSitesPvdcsClusterOptions {
    /// Director site identifier.
    pub site_id: String,
    /// PVDC identifier.
    pub pvdc_id: String,
    /// Cluster identifier.
    pub id: String,
    pub call_headers: CallHeaders,
}

impl DeleteDirectorSitesPvdcsClusterOptions {
    pub fn new(
        site_id: impl Into<String>,
        pvdc_id: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            site_id: site_id.into(),
            pvdc_id: pvdc_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ValidationError> {
        require_path("site_id", &self.site_id)?;
        require_path("pvdc_id", &self.pvdc_id)?;
        require_path("id", &self.id)
    }
}

/// Options for `update_director_sites_pvdcs_cluster`.
///
/// The body is a sparse map; build it with [`ClusterPatch::as_patch`](crate::ClusterPatch::as_patch)
/// or by hand when explicit `null`s are needed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDirectorSitesPvdcsClusterOptions {
    /// Director site identifier.
    pub site_id: String,
    /// PVDC identifier.
    pub pvdc_id: String,
    /// Cluster identifier.
    pub id: String,
    /// Merge-patch document (required).
    pub body: Option<PatchMap>,
    pub call_headers: CallHeaders,
}

impl UpdateDirectorSitesPvdcsClusterOptions {
    pub fn new(
        site_id: impl Into<String>,
        pvdc_id: impl Into<String>,
        id: impl Into<String>,
        body: PatchMap,
    ) -> Self {
        Self {
            site_id: site_id.into(),
            pvdc_id: pvdc_id.into(),
            id: id.into(),
            body: Some(body),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ValidationError> {
        require_path("site_id", &self.site_id)?;
        require_path("pvdc_id", &self.pvdc_id)?;
        require_path("id", &self.id)?;
        require("body", &self.body)?;
        Ok(())
    }

    pub(crate) fn patch(&self) -> Result<&PatchMap, ValidationError> {
        require("body", &self.body)
    }
}

super::impl_call_headers!(
    ListDirectorSitesPvdcsClustersOptions,
    CreateDirectorSitesPvdcsClustersOptions,
    GetDirectorInstancesPvdcsClusterOptions,
    DeleteDirectorSitesPvdcsClusterOptions,
    UpdateDirectorSitesPvdcsClusterOptions,
);
