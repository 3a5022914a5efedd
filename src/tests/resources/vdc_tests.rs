use crate::tests::common::{create_test_client, vdc_json};
use crate::{
    CreateVdcOptions, DeleteVdcOptions, DirectorSitePvdc, Edge, GetVdcOptions, ListVdcsOptions,
    PatchField, PatchMap, ResourceGroupIdentity, UpdateVdcOptions, Vdc, VdcDirectorSitePrototype,
    VdcEdgePrototype, VdcPatch, VmwareError,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn director_site() -> VdcDirectorSitePrototype {
    VdcDirectorSitePrototype::new("s", DirectorSitePvdc::new("p"))
}

#[tokio::test]
async fn test_create_vdc_sends_required_fields_only() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/vdcs"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "name": "sdk_vdc",
            "director_site": {"id": "s", "pvdc": {"id": "p"}}
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(vdc_json("v-1", "creating")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .create_vdc(&CreateVdcOptions::new("sdk_vdc", director_site()))
        .await
        .unwrap();
    assert_eq!(response.status_code(), 202);
    let vdc = response.into_result().unwrap();
    assert_eq!(vdc.status, Vdc::STATUS_CREATING);
    assert!(vdc.cpu.is_none());
    assert_eq!(vdc.edges[0].edge_type, Edge::TYPE_PERFORMANCE);
}

#[tokio::test]
async fn test_create_vdc_with_optional_fields() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/vdcs"))
        .and(body_json(serde_json::json!({
            "name": "sdk_vdc",
            "director_site": {"id": "s", "pvdc": {"id": "p"}},
            "edge": {"type": "efficiency"},
            "fast_provisioning_enabled": true,
            "resource_group": {"id": "rg-1"},
            "cpu": 4,
            "ram": 16
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(vdc_json("v-1", "creating")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = CreateVdcOptions::new("sdk_vdc", director_site())
        .with_edge(VdcEdgePrototype::new(Edge::TYPE_EFFICIENCY))
        .with_fast_provisioning_enabled(true)
        .with_resource_group(ResourceGroupIdentity::new("rg-1"))
        .with_cpu(4)
        .with_ram(16);
    client.create_vdc(&options).await.unwrap();
}

#[tokio::test]
async fn test_create_vdc_without_director_site_is_rejected() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let options = CreateVdcOptions {
        name: Some("sdk_vdc".to_string()),
        ..Default::default()
    };
    let err = client.create_vdc(&options).await.unwrap_err();
    assert!(matches!(err, VmwareError::Validation { .. }));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_vdcs() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/vdcs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "vdcs": [vdc_json("v-1", "ready_to_use"), vdc_json("v-2", "failed")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let vdcs = client
        .list_vdcs(&ListVdcsOptions::new())
        .await
        .unwrap()
        .into_result()
        .unwrap()
        .vdcs;
    assert_eq!(vdcs.len(), 2);
    assert_eq!(vdcs[1].status, Vdc::STATUS_FAILED);
}

#[tokio::test]
async fn test_get_vdc_with_lenient_primitives() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let mut body = vdc_json("v-1", "ready_to_use");
    body["cpu"] = serde_json::json!("8");
    body["ram"] = serde_json::json!(32);
    body["fast_provisioning_enabled"] = serde_json::json!("true");
    body["status_reasons"] = serde_json::json!([{
        "code": "insufficent_cpu",
        "message": "Not enough CPU"
    }]);
    Mock::given(method("GET"))
        .and(path("/vdcs/v-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let vdc = client
        .get_vdc(&GetVdcOptions::new("v-1"))
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(vdc.cpu, Some(8));
    assert_eq!(vdc.ram, Some(32));
    assert!(vdc.fast_provisioning_enabled);
    assert_eq!(
        vdc.status_reasons[0].code,
        crate::StatusReason::CODE_INSUFFICENT_CPU
    );
}

#[tokio::test]
async fn test_delete_vdc() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("DELETE"))
        .and(path("/vdcs/v-1"))
        .respond_with(ResponseTemplate::new(202).set_body_json(vdc_json("v-1", "deleting")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .delete_vdc(&DeleteVdcOptions::new("v-1"))
        .await
        .unwrap();
    assert_eq!(response.status_code(), 202);
    assert_eq!(response.result().unwrap().status, Vdc::STATUS_DELETING);
}

#[tokio::test]
async fn test_update_vdc_with_empty_patch() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("PATCH"))
        .and(path("/vdcs/v-1"))
        .and(header("content-type", "application/merge-patch+json"))
        .and(body_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(202).set_body_json(vdc_json("v-1", "modifying")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .update_vdc(&UpdateVdcOptions::new("v-1", PatchMap::new()))
        .await
        .unwrap();
    assert_eq!(response.status_code(), 202);
    assert_eq!(response.result().unwrap().status, Vdc::STATUS_MODIFYING);
}

#[tokio::test]
async fn test_update_vdc_sends_nulls_for_cleared_fields() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("PATCH"))
        .and(path("/vdcs/v-1"))
        .and(body_json(serde_json::json!({"cpu": 16, "ram": null})))
        .respond_with(ResponseTemplate::new(202).set_body_json(vdc_json("v-1", "modifying")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let patch = VdcPatch {
        ram: PatchField::Null,
        ..VdcPatch::default().with_cpu(16)
    };
    client
        .update_vdc(&UpdateVdcOptions::new("v-1", patch.as_patch().unwrap()))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_vdc_empty_id_is_rejected() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let err = client
        .update_vdc(&UpdateVdcOptions::new("", PatchMap::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, VmwareError::Validation { .. }));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
