use super::{CallHeaders, require, require_path};
use crate::core::domain::error::ValidationError;
use crate::core::domain::model::{
    PatchMap, ResourceGroupIdentity, VdcDirectorSitePrototype, VdcEdgePrototype, VdcPrototype,
};

/// Options for `list_vdcs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListVdcsOptions {
    pub call_headers: CallHeaders,
}

impl ListVdcsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Options for `create_vdc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateVdcOptions {
    /// Name of the VDC (required).
    pub name: Option<String>,
    /// Director site and PVDC to deploy on (required).
    pub director_site: Option<VdcDirectorSitePrototype>,
    pub edge: Option<VdcEdgePrototype>,
    pub fast_provisioning_enabled: Option<bool>,
    pub resource_group: Option<ResourceGroupIdentity>,
    /// vCPU quota; leave unset for unlimited.
    pub cpu: Option<i64>,
    /// RAM quota in GB; leave unset for unlimited.
    pub ram: Option<i64>,
    pub rhel_byol: Option<bool>,
    pub windows_byol: Option<bool>,
    pub call_headers: CallHeaders,
}

impl CreateVdcOptions {
    pub fn new(name: impl Into<String>, director_site: VdcDirectorSitePrototype) -> Self {
        Self {
            name: Some(name.into()),
            director_site: Some(director_site),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_edge(mut self, edge: VdcEdgePrototype) -> Self {
        self.edge = Some(edge);
        self
    }

    #[must_use]
    pub fn with_fast_provisioning_enabled(mut self, enabled: bool) -> Self {
        self.fast_provisioning_enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn with_resource_group(mut self, resource_group: ResourceGroupIdentity) -> Self {
        self.resource_group = Some(resource_group);
        self
    }

    #[must_use]
    pub fn with_cpu(mut self, cpu: i64) -> Self {
        self.cpu = Some(cpu);
        self
    }

    #[must_use]
    pub fn with_ram(mut self, ram: i64) -> Self {
        self.ram = Some(ram);
        self
    }

    #[must_use]
    pub fn with_rhel_byol(mut self, rhel_byol: bool) -> Self {
        self.rhel_byol = Some(rhel_byol);
        self
    }

    #[must_use]
    pub fn with_windows_byol(mut self, windows_byol: bool) -> Self {
        self.windows_byol = Some(windows_byol);
        self
    }

    fn check(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("director_site", &self.director_site)?;
        Ok(())
    }

    pub(crate) fn to_prototype(&self) -> Result<VdcPrototype, ValidationError> {
        Ok(VdcPrototype {
            name: require("name", &self.name)?.clone(),
            director_site: require("director_site", &self.director_site)?.clone(),
            edge: self.edge.clone(),
            fast_provisioning_enabled: self.fast_provisioning_enabled,
            resource_group: self.resource_group.clone(),
            cpu: self.cpu,
            ram: self.ram,
            rhel_byol: self.rhel_byol,
            windows_byol: self.windows_byol,
        })
    }
}

/// Options for `get_vdc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetVdcOptions {
    /// VDC identifier.
    pub id: String,
    pub call_headers: CallHeaders,
}

impl GetVdcOptions {
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

/// Options for `delete_vdc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteVdcOptions {
    /// VDC identifier.
    pub id: String,
    pub call_headers: CallHeaders,
}

impl DeleteVdcOptions {
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

/// Options for `update_vdc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateVdcOptions {
    /// VDC identifier.
    pub id: String,
    /// Merge-patch document (required), see [`VdcPatch`](crate::VdcPatch).
    pub body: Option<PatchMap>,
    pub call_headers: CallHeaders,
}

impl UpdateVdcOptions {
    pub fn new(id: impl Into<String>, body: PatchMap) -> Self {
        Self {
            id: id.into(),
            body: Some(body),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ValidationError> {
        require_path("id", &self.id)?;
        require("body", &self.body)?;
        Ok(())
    }

    pub(crate) fn patch(&self) -> Result<&PatchMap, ValidationError> {
        require("body", &self.body)
    }
}

super::impl_call_headers!(
    ListVdcsOptions,
    CreateVdcOptions,
    GetVdcOptions,
    DeleteVdcOptions,
    UpdateVdcOptions,
);
