use super::{CallHeaders, require, require_path};
use crate::core::domain::error::ValidationError;
use crate::core::domain::model::{
    DirectorSitePrototype, PvdcPrototype, ResourceGroupIdentity, ServiceIdentity,
};

/// Options for `create_director_sites`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateDirectorSitesOptions {
    /// Name of the director site (required).
    pub name: Option<String>,
    /// PVDCs to deploy with the site (required).
    pub pvdcs: Option<Vec<PvdcPrototype>>,
    pub resource_group: Option<ResourceGroupIdentity>,
    pub services: Option<Vec<ServiceIdentity>>,
    pub call_headers: CallHeaders,
}

impl CreateDirectorSitesOptions {
    pub fn new(name: impl Into<String>, pvdcs: Vec<PvdcPrototype>) -> Self {
        Self {
            name: Some(name.into()),
            pvdcs: Some(pvdcs),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_resource_group(mut self, resource_group: ResourceGroupIdentity) -> Self {
        self.resource_group = Some(resource_group);
        self
    }

    #[must_use]
    pub fn with_services(mut self, services: Vec<ServiceIdentity>) -> Self {
        self.services = Some(services);
        self
    }

    fn check(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("pvdcs", &self.pvdcs)?;
        Ok(())
    }

    pub(crate) fn to_prototype(&self) -> Result<DirectorSitePrototype, ValidationError> {
        Ok(DirectorSitePrototype {
            name: require("name", &self.name)?.clone(),
            pvdcs: require("pvdcs", &self.pvdcs)?.clone(),
            resource_group: self.resource_group.clone(),
            services: self.services.clone(),
        })
    }
}

/// Options for `list_director_sites`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDirectorSitesOptions {
    pub call_headers: CallHeaders,
}

impl ListDirectorSitesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Options for `get_director_site`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDirectorSiteOptions {
    /// Director site identifier.
    pub id: String,
    pub call_headers: CallHeaders,
}

impl GetDirectorSiteOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ValidationError> {
        require_path("id", &self.id)
    }
}

/// Options for `delete_director_site`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteDirectorSiteOptions {
    /// Director site identifier.
    pub id: String,
    pub call_headers: CallHeaders,
}

impl DeleteDirectorSiteOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ValidationError> {
        require_path("id", &self.id)
    }
}

super::impl_call_headers!(
    CreateDirectorSitesOptions,
    ListDirectorSitesOptions,
    GetDirectorSiteOptions,
    DeleteDirectorSiteOptions,
);
