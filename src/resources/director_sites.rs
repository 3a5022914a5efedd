use crate::{
    CancellationToken, CreateDirectorSitesOptions, DeleteDirectorSiteOptions, DetailedResponse,
    DirectorSite, DirectorSiteCollection, GetDirectorSiteOptions, ListDirectorSitesOptions,
    OperationOptions, VmwareClient, VmwareResult,
    core::infrastructure::request_builder::OperationRequest,
};
use reqwest::Method;

impl VmwareClient {
    /// Orders a director site with its PVDCs and clusters.
    ///
    /// Answers 202 with the site in the `creating` state; poll
    /// [`get_director_site`](Self::get_director_site) to follow provisioning.
    ///
    /// # Errors
    /// Returns a validation error when `name` or `pvdcs` is missing.
    pub async fn create_director_sites(
        &self,
        options: &CreateDirectorSitesOptions,
    ) -> VmwareResult<DetailedResponse<DirectorSite>> {
        self.create_director_sites_with(options, None).await
    }

    pub async fn create_director_sites_with_cancellation(
        &self,
        options: &CreateDirectorSitesOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<DirectorSite>> {
        self.create_director_sites_with(options, Some(cancel)).await
    }

    async fn create_director_sites_with(
        &self,
        options: &CreateDirectorSitesOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<DirectorSite>> {
        options.validate()?;
        let request = OperationRequest::new(
            "CreateDirectorSites",
            Method::POST,
            "/director_sites",
            &options.call_headers,
        )
        .json_body(&options.to_prototype()?)?;
        self.api_client.execute(request, cancel).await
    }

    /// Lists the director sites of the account.
    pub async fn list_director_sites(
        &self,
        options: &ListDirectorSitesOptions,
    ) -> VmwareResult<DetailedResponse<DirectorSiteCollection>> {
        self.list_director_sites_with(options, None).await
    }

    pub async fn list_director_sites_with_cancellation(
        &self,
        options: &ListDirectorSitesOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<DirectorSiteCollection>> {
        self.list_director_sites_with(options, Some(cancel)).await
    }

    async fn list_director_sites_with(
        &self,
        options: &ListDirectorSitesOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<DirectorSiteCollection>> {
        options.validate()?;
        let request = OperationRequest::new(
            "ListDirectorSites",
            Method::GET,
            "/director_sites",
            &options.call_headers,
        );
        self.api_client.execute(request, cancel).await
    }

    /// Gets one director site.
    ///
    /// # Errors
    /// Returns a validation error when `id` is empty.
    pub async fn get_director_site(
        &self,
        options: &GetDirectorSiteOptions,
    ) -> VmwareResult<DetailedResponse<DirectorSite>> {
        self.get_director_site_with(options, None).await
    }

    pub async fn get_director_site_with_cancellation(
        &self,
        options: &GetDirectorSiteOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<DirectorSite>> {
        self.get_director_site_with(options, Some(cancel)).await
    }

    async fn get_director_site_with(
        &self,
        options: &GetDirectorSiteOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<DirectorSite>> {
        options.validate()?;
        let request = OperationRequest::new(
            "GetDirectorSite",
            Method::GET,
            "/director_sites/{id}",
            &options.call_headers,
        )
        .path_param("id", &options.id);
        self.api_client.execute(request, cancel).await
    }

    /// Deletes a director site with all of its PVDCs and clusters.
    ///
    /// Answers 202 with the site in the `deleting` state.
    ///
    /// # Errors
    /// Returns a validation error when `id` is empty.
    pub async fn delete_director_site(
        &self,
        options: &DeleteDirectorSiteOptions,
    ) -> VmwareResult<DetailedResponse<DirectorSite>> {
        self.delete_director_site_with(options, None).await
    }

    pub async fn delete_director_site_with_cancellation(
        &self,
        options: &DeleteDirectorSiteOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<DirectorSite>> {
        self.delete_director_site_with(options, Some(cancel)).await
    }

    async fn delete_director_site_with(
        &self,
        options: &DeleteDirectorSiteOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<DirectorSite>> {
        options.validate()?;
        let request = OperationRequest::new(
            "DeleteDirectorSite",
            Method::DELETE,
            "/director_sites/{id}",
            &options.call_headers,
        )
        .path_param("id", &options.id);
        self.api_client.execute(request, cancel).await
    }
}
