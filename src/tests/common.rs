//! Shared helpers for the wiremock driven tests.

use crate::{NoAuthAuthenticator, VmwareClient};
use serde_json::{Value, json};
use wiremock::MockServer;

pub(crate) fn create_test_client(mock_server: &MockServer) -> VmwareClient {
    VmwareClient::builder()
        .service_url(mock_server.uri())
        .authenticator(NoAuthAuthenticator)
        .build()
        .unwrap()
}

pub(crate) fn file_shares_json() -> Value {
    json!({"STORAGE_TWO_IOPS_GB": 24000})
}

pub(crate) fn cluster_summary_json(id: &str) -> Value {
    json!({
        "name": "cluster_1",
        "host_count": 2,
        "host_profile": "BM_2S_32_CORES_192_GB",
        "id": id,
        "data_center_name": "tok02",
        "status": "creating",
        "href": format!("https://api.us-south.vmware.cloud.ibm.com/v1/director_sites/s/pvdcs/p/clusters/{id}"),
        "storage_type": "nfs",
        "file_shares": file_shares_json()
    })
}

pub(crate) fn pvdc_json(id: &str) -> Value {
    json!({
        "name": "pvdc_1",
        "data_center_name": "tok02",
        "id": id,
        "href": format!("https://api.us-south.vmware.cloud.ibm.com/v1/director_sites/s/pvdcs/{id}"),
        "clusters": [cluster_summary_json("c")],
        "status": "creating",
        "provider_types": [{"name": "on_demand"}]
    })
}

pub(crate) fn director_site_json(id: &str, status: &str) -> Value {
    json!({
        "crn": format!("crn:v1:bluemix:public:vmware:us-south:a/123::director-site:{id}"),
        "href": format!("https://api.us-south.vmware.cloud.ibm.com/v1/director_sites/{id}"),
        "id": id,
        "ordered_at": "2024-03-01T12:00:00Z",
        "name": "sdk_test_4",
        "status": status,
        "resource_group": {
            "id": "rg-1",
            "name": "Default",
            "crn": "crn:v1:bluemix:public:resource-controller::a/123::resource-group:rg-1"
        },
        "pvdcs": [pvdc_json("p")],
        "type": "single_tenant",
        "services": []
    })
}

pub(crate) fn cluster_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "cluster_1",
        "href": format!("https://api.us-south.vmware.cloud.ibm.com/v1/director_sites/s/pvdcs/p/clusters/{id}"),
        "host_count": 2,
        "host_profile": "BM_2S_32_CORES_192_GB",
        "storage_type": "nfs",
        "billing_plan": "monthly",
        "data_center_name": "tok02",
        "ordered_at": "2024-03-01T12:00:00Z",
        "provisioned_at": "2024-03-01T15:30:00Z",
        "status": "ready_to_use",
        "file_shares": file_shares_json(),
        "director_site": {
            "crn": "crn:v1:bluemix:public:vmware:us-south:a/123::director-site:s",
            "href": "https://api.us-south.vmware.cloud.ibm.com/v1/director_sites/s",
            "id": "s"
        }
    })
}

pub(crate) fn vdc_json(id: &str, status: &str) -> Value {
    json!({
        "href": format!("https://api.us-south.vmware.cloud.ibm.com/v1/vdcs/{id}"),
        "id": id,
        "crn": format!("crn:v1:bluemix:public:vmware:us-south:a/123::vdc:{id}"),
        "director_site": {
            "id": "s",
            "pvdc": {"id": "p", "provider_type": {"name": "paygo"}},
            "url": "https://dirsite.example.com/tenant/vdc"
        },
        "edges": [{
            "id": "e-1",
            "public_ips": ["150.0.0.1"],
            "size": "medium",
            "status": "ready_to_use",
            "type": "performance"
        }],
        "status_reasons": [],
        "name": "sdk_vdc",
        "ordered_at": "2024-03-02T08:00:00Z",
        "org_name": "org-123",
        "status": status,
        "type": "multitenant",
        "fast_provisioning_enabled": false,
        "rhel_byol": false,
        "windows_byol": false
    })
}
