use crate::{
    CancellationToken, CreateDirectorSitesPvdcsOptions, DetailedResponse,
    GetDirectorSitesPvdcsOptions, ListDirectorSitesPvdcsOptions, OperationOptions, Pvdc,
    PvdcCollection, VmwareClient, VmwareResult,
    core::infrastructure::request_builder::OperationRequest,
};
use reqwest::Method;

impl VmwareClient {
    /// Lists the PVDCs of a director site.
    pub async fn list_director_sites_pvdcs(
        &self,
        options: &ListDirectorSitesPvdcsOptions,
    ) -> VmwareResult<DetailedResponse<PvdcCollection>> {
        self.list_director_sites_pvdcs_with(options, None).await
    }

    pub async fn list_director_sites_pvdcs_with_cancellation(
        &self,
        options: &ListDirectorSitesPvdcsOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<PvdcCollection>> {
        self.list_director_sites_pvdcs_with(options, Some(cancel))
            .await
    }

    async fn list_director_sites_pvdcs_with(
        &self,
        options: &ListDirectorSitesPvdcsOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<PvdcCollection>> {
        options.validate()?;
        let request = OperationRequest::new(
            "ListDirectorSitesPvdcs",
            Method::GET,
            "/director_sites/{site_id}/pvdcs",
            &options.call_headers,
        )
        .path_param("site_id", &options.site_id);
        self.api_client.execute(request, cancel).await
    }

    /// Adds a PVDC with its clusters to an existing director site.
    ///
    /// # Errors
    /// Returns a validation error when `site_id` is empty or a body field is missing.
    pub async fn create_director_sites_pvdcs(
        &self,
        options: &CreateDirectorSitesPvdcsOptions,
    ) -> VmwareResult<DetailedResponse<Pvdc>> {
        self.create_director_sites_pvdcs_with(options, None).await
    }

    pub async fn create_director_sites_pvdcs_with_cancellation(
        &self,
        options: &CreateDirectorSitesPvdcsOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<Pvdc>> {
        self.create_director_sites_pvdcs_with(options, Some(cancel))
            .await
    }

    async fn create_director_sites_pvdcs_with(
        &self,
        options: &CreateDirectorSitesPvdcsOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<Pvdc>> {
        options.validate()?;
        let request = OperationRequest::new(
            "CreateDirectorSitesPvdcs",
            Method::POST,
            "/director_sites/{site_id}/pvdcs",
            &options.call_headers,
        )
        .path_param("site_id", &options.site_id)
        .json_body(&options.to_prototype()?)?;
        self.api_client.execute(request, cancel).await
    }

    pub async fn get_director_sites_pvdcs(
        &self,
        options: &GetDirectorSitesPvdcsOptions,
    ) -> VmwareResult<DetailedResponse<Pvdc>> {
        self.get_director_sites_pvdcs_with(options, None).await
    }

    pub async fn get_director_sites_pvdcs_with_cancellation(
        &self,
        options: &GetDirectorSitesPvdcsOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<Pvdc>> {
        self.get_director_sites_pvdcs_with(options, Some(cancel))
            .await
    }

    async fn get_director_sites_pvdcs_with(
        &self,
        options: &GetDirectorSitesPvdcsOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<Pvdc>> {
        options.validate()?;
        let request = OperationRequest::new(
            "GetDirectorSitesPvdcs",
            Method::GET,
            "/director_sites/{site_id}/pvdcs/{id}",
            &options.call_headers,
        )
        .path_param("site_id", &options.site_id)
        .path_param("id", &options.id);
        self.api_client.execute(request, cancel).await
    }
}
