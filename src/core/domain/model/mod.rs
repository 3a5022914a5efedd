pub mod catalog;
pub mod cluster;
pub mod detailed_response;
pub mod director_site;
pub mod patch;
pub mod pvdc;
pub mod vdc;

pub use catalog::{
    DataCenterInfo, DirectorSiteHostProfile, DirectorSiteHostProfileCollection,
    DirectorSiteRegion, DirectorSiteRegionCollection, MultitenantDirectorSite,
    MultitenantDirectorSiteCollection, MultitenantPvdc,
};
pub use cluster::{
    Cluster, ClusterCollection, ClusterPrototype, ClusterSummary, FileShares, MAX_HOST_COUNT,
    MIN_HOST_COUNT, UpdateCluster,
};
pub use detailed_response::{DetailedResponse, ResponseMetadata};
pub use director_site::{
    DirectorSite, DirectorSiteCollection, DirectorSitePrototype, DirectorSiteReference,
    ResourceGroupIdentity, ResourceGroupReference, Service, ServiceIdentity,
};
pub use patch::{ClusterPatch, PatchField, PatchMap, VdcPatch};
pub use pvdc::{Pvdc, PvdcCollection, PvdcPrototype, PvdcProviderType};
pub use vdc::{
    DirectorSitePvdc, Edge, StatusReason, Vdc, VdcCollection, VdcDirectorSite,
    VdcDirectorSitePrototype, VdcEdgePrototype, VdcPrototype, VdcProviderType, VdcPvdc,
};
