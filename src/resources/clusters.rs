use crate::{
    CancellationToken, Cluster, ClusterCollection, ClusterSummary,
    CreateDirectorSitesPvdcsClustersOptions, DeleteDirectorSitesPvdcsClusterOptions,
    DetailedResponse, GetDirectorInstancesPvdcsClusterOptions,
    ListDirectorSitesPvdcsClustersOptions, OperationOptions, UpdateCluster,
    UpdateDirectorSitesPvdcsClusterOptions, VmwareClient, VmwareResult,
    core::infrastructure::request_builder::OperationRequest,
};
use reqwest::Method;

const CLUSTERS_PATH: &str = "/director_sites/{site_id}/pvdcs/{pvdc_id}/clusters";
const CLUSTER_PATH: &str = "/director_sites/{site_id}/pvdcs/{pvdc_id}/clusters/{id}";

impl VmwareClient {
    /// Lists the clusters of a PVDC.
    pub async fn list_director_sites_pvdcs_clusters(
        &self,
        options: &ListDirectorSitesPvdcsClustersOptions,
    ) -> VmwareResult<DetailedResponse<ClusterCollection>> {
        self.list_director_sites_pvdcs_clusters_with(options, None)
            .await
    }

    pub async fn list_director_sites_pvdcs_clusters_with_cancellation(
        &self,
        options: &ListDirectorSitesPvdcsClustersOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<ClusterCollection>> {
        self.list_director_sites_pvdcs_clusters_with(options, Some(cancel))
            .await
    }

    async fn list_director_sites_pvdcs_clusters_with(
        &self,
        options: &ListDirectorSitesPvdcsClustersOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<ClusterCollection>> {
        options.validate()?;
        let request = OperationRequest::new(
            "ListDirectorSitesPvdcsClusters",
            Method::GET,
            CLUSTERS_PATH,
            &options.call_headers,
        )
        .path_param("site_id", &options.site_id)
        .path_param("pvdc_id", &options.pvdc_id);
        self.api_client.execute(request, cancel).await
    }

    /// Adds a cluster to a PVDC.
    ///
    /// `host_count` is sent as given; the service rejects counts outside
    /// [`MIN_HOST_COUNT`](crate::MIN_HOST_COUNT)..=[`MAX_HOST_COUNT`](crate::MAX_HOST_COUNT).
    ///
    /// # Errors
    /// Returns a validation error when a path parameter is empty or a body field is missing.
    pub async fn create_director_sites_pvdcs_clusters(
        &self,
        options: &CreateDirectorSitesPvdcsClustersOptions,
    ) -> VmwareResult<DetailedResponse<Cluster>> {
        self.create_director_sites_pvdcs_clusters_with(options, None)
            .await
    }

    pub async fn create_director_sites_pvdcs_clusters_with_cancellation(
        &self,
        options: &CreateDirectorSitesPvdcsClustersOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<Cluster>> {
        self.create_director_sites_pvdcs_clusters_with(options, Some(cancel))
            .await
    }

    async fn create_director_sites_pvdcs_clusters_with(
        &self,
        options: &CreateDirectorSitesPvdcsClustersOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<Cluster>> {
        options.validate()?;
        let request = OperationRequest::new(
            "CreateDirectorSitesPvdcsClusters",
            Method::POST,
            CLUSTERS_PATH,
            &options.call_headers,
        )
        .path_param("site_id", &options.site_id)
        .path_param("pvdc_id", &options.pvdc_id)
        .json_body(&options.to_prototype()?)?;
        self.api_client.execute(request, cancel).await
    }

    pub async fn get_director_instances_pvdcs_cluster(
        &self,
        options: &GetDirectorInstancesPvdcsClusterOptions,
    ) -> VmwareResult<DetailedResponse<Cluster>> {
        self.get_director_instances_pvdcs_cluster_with(options, None)
            .await
    }

    pub async fn get_director_instances_pvdcs_cluster_with_cancellation(
        &self,
        options: &GetDirectorInstancesPvdcsClusterOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<Cluster>> {
        self.get_director_instances_pvdcs_cluster_with(options, Some(cancel))
            .await
    }

    async fn get_director_instances_pvdcs_cluster_with(
        &self,
        options: &GetDirectorInstancesPvdcsClusterOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<Cluster>> {
        options.validate()?;
        let request = OperationRequest::new(
            "GetDirectorInstancesPvdcsCluster",
            Method::GET,
            CLUSTER_PATH,
            &options.call_headers,
        )
        .path_param("site_id", &options.site_id)
        .path_param("pvdc_id", &options.pvdc_id)
        .path_param("id", &options.id);
        self.api_client.execute(request, cancel).await
    }

    /// Deletes a cluster. Answers 202 with a summary of the cluster being removed.
    pub async fn delete_director_sites_pvdcs_cluster(
        &self,
        options: &DeleteDirectorSitesPvdcsClusterOptions,
    ) -> VmwareResult<DetailedResponse<ClusterSummary>> {
        self.delete_director_sites_pvdcs_cluster_with(options, None)
            .await
    }

    pub async fn delete_director_sites_pvdcs_cluster_with_cancellation(
        &self,
        options: &DeleteDirectorSitesPvdcsClusterOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<ClusterSummary>> {
        self.delete_director_sites_pvdcs_cluster_with(options, Some(cancel))
            .await
    }

    async fn delete_director_sites_pvdcs_cluster_with(
        &self,
        options: &DeleteDirectorSitesPvdcsClusterOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<ClusterSummary>> {
        options.validate()?;
        let request = OperationRequest::new(
            "DeleteDirectorSitesPvdcsCluster",
            Method::DELETE,
            CLUSTER_PATH,
            &options.call_headers,
        )
        .path_param("site_id", &options.site_id)
        .path_param("pvdc_id", &options.pvdc_id)
        .path_param("id", &options.id);
        self.api_client.execute(request, cancel).await
    }

    /// Resizes a cluster, either its host count or its file shares.
    ///
    /// The body is sent as `application/merge-patch+json`. The service
    /// rejects a patch changing both fields at once.
    pub async fn update_director_sites_pvdcs_cluster(
        &self,
        options: &UpdateDirectorSitesPvdcsClusterOptions,
    ) -> VmwareResult<DetailedResponse<UpdateCluster>> {
        self.update_director_sites_pvdcs_cluster_with(options, None)
            .await
    }

    pub async fn update_director_sites_pvdcs_cluster_with_cancellation(
        &self,
        options: &UpdateDirectorSitesPvdcsClusterOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<UpdateCluster>> {
        self.update_director_sites_pvdcs_cluster_with(options, Some(cancel))
            .await
    }

    async fn update_director_sites_pvdcs_cluster_with(
        &self,
        options: &UpdateDirectorSitesPvdcsClusterOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<UpdateCluster>> {
        options.validate()?;
        let request = OperationRequest::new(
            "UpdateDirectorSitesPvdcsCluster",
            Method::PATCH,
            CLUSTER_PATH,
            &options.call_headers,
        )
        .path_param("site_id", &options.site_id)
        .path_param("pvdc_id", &options.pvdc_id)
        .path_param("id", &options.id)
        .merge_patch_body(options.patch()?)?;
        self.api_client.execute(request, cancel).await
    }
}
