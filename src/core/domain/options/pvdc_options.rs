use super::{CallHeaders, require, require_path};
use crate::core::domain::error::ValidationError;
use crate::core::domain::model::{ClusterPrototype, PvdcPrototype};

/// Options for `list_director_sites_pvdcs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDirectorSitesPvdcsOptions {
    /// Director site identifier.
    pub site_id: String,
    pub call_headers: CallHeaders,
}

impl ListDirectorSitesPvdcsOptions {
    pub fn new(site_id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ValidationError> {
        require_path("site_id", &self.site_id)
    }
}

/// Options for `create_director_sites_pvdcs`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateDirectorSitesPvdcsOptions {
    /// Director site identifier.
    pub site_id: String,
    /// Name of the PVDC (required).
    pub name: Option<String>,
    /// Physical data center to deploy in (required).
    pub data_center_name: Option<String>,
    /// Clusters to create with the PVDC (required).
    pub clusters: Option<Vec<ClusterPrototype>>,
    pub call_headers: CallHeaders,
}

impl CreateDirectorSitesPvdcsOptions {
    pub fn new(
        site_id: impl Into<String>,
        name: impl Into<String>,
        data_center_name: impl Into<String>,
        clusters: Vec<ClusterPrototype>,
    ) -> Self {
        Self {
            site_id: site_id.into(),
            name: Some(name.into()),
            data_center_name: Some(data_center_name.into()),
            clusters: Some(clusters),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ValidationError> {
        require_path("site_id", &self.site_id)?;
        require("name", &self.name)?;
        require("data_center_name", &self.data_center_name)?;
        require("clusters", &self.clusters)?;
        Ok(())
    }

    pub(crate) fn to_prototype(&self) -> Result<PvdcPrototype, ValidationError> {
        Ok(PvdcPrototype::new(
            require("name", &self.name)?.clone(),
            require("data_center_name", &self.data_center_name)?.clone(),
            require("clusters", &self.clusters)?.clone(),
        ))
    }
}

/// Options for `get_director_sites_pvdcs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDirectorSitesPvdcsOptions {
    /// Director site identifier.
    pub site_id: String,
    /// PVDC identifier.
    pub id: String,
    pub call_headers: CallHeaders,
}

impl GetDirectorSitesPvdcsOptions {
    pub fn new(site_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ValidationError> {
        require_path("site_id", &self.site_id)?;
        require_path("id", &self.id)
    }
}

super::impl_call_headers!(
    ListDirectorSitesPvdcsOptions,
    CreateDirectorSitesPvdcsOptions,
    GetDirectorSitesPvdcsOptions,
);
