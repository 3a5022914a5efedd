use crate::{
    CancellationToken, CreateVdcOptions, DeleteVdcOptions, DetailedResponse, GetVdcOptions,
    ListVdcsOptions, OperationOptions, UpdateVdcOptions, Vdc, VdcCollection, VmwareClient,
    VmwareResult, core::infrastructure::request_builder::OperationRequest,
};
use reqwest::Method;

impl VmwareClient {
    /// Lists the VDCs of the account.
    pub async fn list_vdcs(
        &self,
        options: &ListVdcsOptions,
    ) -> VmwareResult<DetailedResponse<VdcCollection>> {
        self.list_vdcs_with(options, None).await
    }

    pub async fn list_vdcs_with_cancellation(
        &self,
        options: &ListVdcsOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<VdcCollection>> {
        self.list_vdcs_with(options, Some(cancel)).await
    }

    async fn list_vdcs_with(
        &self,
        options: &ListVdcsOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<VdcCollection>> {
        options.validate()?;
        let request = OperationRequest::new("ListVdcs", Method::GET, "/vdcs", &options.call_headers);
        self.api_client.execute(request, cancel).await
    }

    /// Creates a VDC on a director site PVDC.
    ///
    /// Answers 202 with the VDC in the `creating` state.
    ///
    /// # Errors
    /// Returns a validation error when `name` or `director_site` is missing.
    pub async fn create_vdc(
        &self,
        options: &CreateVdcOptions,
    ) -> VmwareResult<DetailedResponse<Vdc>> {
        self.create_vdc_with(options, None).await
    }

    pub async fn create_vdc_with_cancellation(
        &self,
        options: &CreateVdcOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<Vdc>> {
        self.create_vdc_with(options, Some(cancel)).await
    }

    async fn create_vdc_with(
        &self,
        options: &CreateVdcOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<Vdc>> {
        options.validate()?;
        let request = OperationRequest::new("CreateVdc", Method::POST, "/vdcs", &options.call_headers)
            .json_body(&options.to_prototype()?)?;
        self.api_client.execute(request, cancel).await
    }

    pub async fn get_vdc(&self, options: &GetVdcOptions) -> VmwareResult<DetailedResponse<Vdc>> {
        self.get_vdc_with(options, None).await
    }

    pub async fn get_vdc_with_cancellation(
        &self,
        options: &GetVdcOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<Vdc>> {
        self.get_vdc_with(options, Some(cancel)).await
    }

    async fn get_vdc_with(
        &self,
        options: &GetVdcOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<Vdc>> {
        options.validate()?;
        let request =
            OperationRequest::new("GetVdc", Method::GET, "/vdcs/{id}", &options.call_headers)
                .path_param("id", &options.id);
        self.api_client.execute(request, cancel).await
    }

    /// Deletes a VDC. Answers 202 with the VDC in the `deleting` state.
    pub async fn delete_vdc(
        &self,
        options: &DeleteVdcOptions,
    ) -> VmwareResult<DetailedResponse<Vdc>> {
        self.delete_vdc_with(options, None).await
    }

    pub async fn delete_vdc_with_cancellation(
        &self,
        options: &DeleteVdcOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<Vdc>> {
        self.delete_vdc_with(options, Some(cancel)).await
    }

    async fn delete_vdc_with(
        &self,
        options: &DeleteVdcOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<Vdc>> {
        options.validate()?;
        let request =
            OperationRequest::new("DeleteVdc", Method::DELETE, "/vdcs/{id}", &options.call_headers)
                .path_param("id", &options.id);
        self.api_client.execute(request, cancel).await
    }

    /// Changes the quotas or fast provisioning of a VDC.
    ///
    /// The body is sent as `application/merge-patch+json`, an empty map included.
    pub async fn update_vdc(
        &self,
        options: &UpdateVdcOptions,
    ) -> VmwareResult<DetailedResponse<Vdc>> {
        self.update_vdc_with(options, None).await
    }

    pub async fn update_vdc_with_cancellation(
        &self,
        options: &UpdateVdcOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<Vdc>> {
        self.update_vdc_with(options, Some(cancel)).await
    }

    async fn update_vdc_with(
        &self,
        options: &UpdateVdcOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<Vdc>> {
        options.validate()?;
        let request =
            OperationRequest::new("UpdateVdc", Method::PATCH, "/vdcs/{id}", &options.call_headers)
                .path_param("id", &options.id)
                .merge_patch_body(options.patch()?)?;
        self.api_client.execute(request, cancel).await
    }
}
