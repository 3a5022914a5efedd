//! Domain models for director sites.
//!
//! A director site is a tenanted deployment of the VMware management plane. It owns
//! provider virtual data centers (PVDCs) and optional add-on services.

use crate::core::domain::model::pvdc::{Pvdc, PvdcPrototype};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A director site as returned by `/director_sites` and `/director_sites/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DirectorSite {
    /// Cloud resource name.
    pub crn: String,
    /// URL of this resource.
    pub href: String,
    /// Unique identifier.
    pub id: String,
    /// When the director site was ordered.
    pub ordered_at: DateTime<Utc>,
    /// When provisioning completed; absent while still creating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_at: Option<DateTime<Utc>>,
    /// Human-readable name.
    pub name: String,
    /// Lifecycle status, see the `STATUS_*` constants.
    pub status: String,
    /// Resource group owning the site.
    pub resource_group: ResourceGroupReference,
    /// Provider virtual data centers deployed in this site.
    pub pvdcs: Vec<Pvdc>,
    /// Tenancy model, see the `TYPE_*` constants.
    #[serde(rename = "type")]
    pub site_type: String,
    /// Add-on services deployed in this site.
    pub services: Vec<Service>,
    /// RHEL activation key for VMs in this site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rhel_vm_activation_key: Option<String>,
}

impl DirectorSite {
    pub const STATUS_CREATING: &'static str = "creating";
    pub const STATUS_READY_TO_USE: &'static str = "ready_to_use";
    pub const STATUS_UPDATING: &'static str = "updating";
    pub const STATUS_DELETING: &'static str = "deleting";
    pub const STATUS_DELETED: &'static str = "deleted";

    pub const TYPE_SINGLE_TENANT: &'static str = "single_tenant";
    pub const TYPE_MULTITENANT: &'static str = "multitenant";
}

/// Response of `GET /director_sites`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DirectorSiteCollection {
    pub director_sites: Vec<DirectorSite>,
}

/// An add-on service of a director site.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Service {
    /// Service kind, see the `NAME_*` constants.
    pub name: String,
    pub id: String,
    /// Lifecycle status, see the `STATUS_*` constants.
    pub status: String,
    pub ordered_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_at: Option<DateTime<Utc>>,
    /// Management console of the service, once available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_url: Option<String>,
}

impl Service {
    pub const NAME_VCDA: &'static str = "vcda";
    pub const NAME_VEEAM: &'static str = "veeam";

    pub const STATUS_CREATING: &'static str = "creating";
    pub const STATUS_READY_TO_USE: &'static str = "ready_to_use";
    pub const STATUS_UPDATING: &'static str = "updating";
    pub const STATUS_DELETING: &'static str = "deleting";
    pub const STATUS_DELETED: &'static str = "deleted";
}

/// The resource group a resource belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResourceGroupReference {
    pub id: String,
    pub name: String,
    pub crn: String,
}

/// Identifies a resource group in a create request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResourceGroupIdentity {
    pub id: String,
}

impl ResourceGroupIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Identifies an add-on service in a create request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceIdentity {
    /// Service kind, see [`Service::NAME_VCDA`] and [`Service::NAME_VEEAM`].
    pub name: String,
}

impl ServiceIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Lookup key of the director site a resource belongs to.
///
/// The server embeds a reference, not the site itself; fetch the site with
/// `get_director_site` when its details are needed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DirectorSiteReference {
    pub crn: String,
    pub href: String,
    pub id: String,
}

/// JSON body of `POST /director_sites`.
///
/// Optional fields that are `None` are omitted from the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorSitePrototype {
    pub name: String,
    pub pvdcs: Vec<PvdcPrototype>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceIdentity>>,
}
