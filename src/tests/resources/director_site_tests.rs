use crate::tests::common::{create_test_client, director_site_json, file_shares_json};
use crate::{
    ClusterPrototype, CreateDirectorSitesOptions, DeleteDirectorSiteOptions, DirectorSite,
    FileShares, GetDirectorSiteOptions, ListDirectorSitesOptions, OperationOptions,
    PvdcPrototype, ResourceGroupIdentity, ServiceIdentity, ValidationError, VmwareError,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn minimal_site_options() -> CreateDirectorSitesOptions {
    let cluster = ClusterPrototype::new(
        "cluster_1",
        2,
        "BM_2S_32_CORES_192_GB",
        FileShares::default().with_two_iops_gb(24000),
    );
    CreateDirectorSitesOptions::new(
        "sdk_test_4",
        vec![PvdcPrototype::new("pvdc_1", "tok02", vec![cluster])],
    )
}

#[tokio::test]
async fn test_create_director_site_minimal_body() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/director_sites"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(serde_json::json!({
            "name": "sdk_test_4",
            "pvdcs": [{
                "name": "pvdc_1",
                "data_center_name": "tok02",
                "clusters": [{
                    "name": "cluster_1",
                    "host_count": 2,
                    "host_profile": "BM_2S_32_CORES_192_GB",
                    "file_shares": file_shares_json()
                }]
            }]
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(director_site_json("site-1", "creating")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .create_director_sites(&minimal_site_options())
        .await
        .unwrap();
    assert_eq!(response.status_code(), 202);

    let site = response.result().unwrap();
    assert_eq!(site.status, DirectorSite::STATUS_CREATING);
    assert!(!site.id.is_empty());
    assert_eq!(site.site_type, DirectorSite::TYPE_SINGLE_TENANT);
    assert_eq!(site.pvdcs[0].clusters[0].file_shares.storage_two_iops_gb, Some(24000));
    assert!(site.provisioned_at.is_none());
}

#[tokio::test]
async fn test_create_director_site_with_optional_fields() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/director_sites"))
        .and(body_json(serde_json::json!({
            "name": "sdk_test_4",
            "pvdcs": [{
                "name": "pvdc_1",
                "data_center_name": "tok02",
                "clusters": [{
                    "name": "cluster_1",
                    "host_count": 2,
                    "host_profile": "BM_2S_32_CORES_192_GB",
                    "file_shares": file_shares_json()
                }]
            }],
            "resource_group": {"id": "rg-1"},
            "services": [{"name": "veeam"}]
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(director_site_json("site-1", "creating")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = minimal_site_options()
        .with_resource_group(ResourceGroupIdentity::new("rg-1"))
        .with_services(vec![ServiceIdentity::new("veeam")]);
    client.create_director_sites(&options).await.unwrap();
}

#[tokio::test]
async fn test_create_director_site_missing_pvdcs_sends_nothing() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&mock_server)
        .await;

    let options = CreateDirectorSitesOptions {
        name: Some("sdk_test_4".to_string()),
        ..Default::default()
    };
    let err = client.create_director_sites(&options).await.unwrap_err();
    match err {
        VmwareError::Validation { source } => assert_eq!(source, ValidationError::missing("pvdcs")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_get_director_site() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites/site-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(director_site_json("site-1", "ready_to_use")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .get_director_site(&GetDirectorSiteOptions::new("site-1"))
        .await
        .unwrap();
    assert_eq!(response.status_code(), 200);
    let site = response.into_result().unwrap();
    assert!(
        [DirectorSite::STATUS_CREATING, DirectorSite::STATUS_READY_TO_USE]
            .contains(&site.status.as_str())
    );
}

#[tokio::test]
async fn test_get_director_site_is_repeatable() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites/site-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(director_site_json("site-1", "ready_to_use")))
        .expect(2)
        .mount(&mock_server)
        .await;

    let options = GetDirectorSiteOptions::new("site-1");
    let first = client.get_director_site(&options).await.unwrap();
    let second = client.get_director_site(&options).await.unwrap();
    assert_eq!(first.result(), second.result());
    assert_eq!(first.raw_body(), second.raw_body());
}

#[tokio::test]
async fn test_get_director_site_empty_id_sends_nothing() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = client
        .get_director_site(&GetDirectorSiteOptions::new(""))
        .await
        .unwrap_err();
    assert!(matches!(err, VmwareError::Validation { .. }));
}

#[tokio::test]
async fn test_get_director_site_id_is_path_encoded() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites/a%2Fb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(director_site_json("a/b", "ready_to_use")))
        .expect(1)
        .mount(&mock_server)
        .await;

    client
        .get_director_site(&GetDirectorSiteOptions::new("a/b"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_director_sites() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "director_sites": [
                director_site_json("site-1", "ready_to_use"),
                director_site_json("site-2", "creating")
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .list_director_sites(&ListDirectorSitesOptions::new())
        .await
        .unwrap();
    let sites = response.into_result().unwrap().director_sites;
    assert_eq!(sites.len(), 2);
    assert_eq!(sites[1].id, "site-2");
}

#[tokio::test]
async fn test_delete_director_site() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("DELETE"))
        .and(path("/director_sites/site-1"))
        .respond_with(ResponseTemplate::new(202).set_body_json(director_site_json("site-1", "deleting")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .delete_director_site(&DeleteDirectorSiteOptions::new("site-1"))
        .await
        .unwrap();
    assert_eq!(response.status_code(), 202);
    assert_eq!(response.result().unwrap().status, DirectorSite::STATUS_DELETING);
}

#[tokio::test]
async fn test_per_call_headers_win_over_defaults() {
    let mock_server = MockServer::start().await;
    let client = crate::VmwareClient::builder()
        .service_url(mock_server.uri())
        .authenticator(crate::NoAuthAuthenticator)
        .default_header("X-Team", "default")
        .unwrap()
        .default_header("X-Only-Default", "kept")
        .unwrap()
        .build()
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/director_sites"))
        .and(header("x-team", "per-call"))
        .and(header("x-only-default", "kept"))
        .and(header("accept-language", "en-US"))
        .and(header("x-global-transaction-id", "tx-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"director_sites": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = ListDirectorSitesOptions::new()
        .with_header("X-Team", "per-call")
        .with_accept_language("en-US")
        .with_x_global_transaction_id("tx-42");
    client.list_director_sites(&options).await.unwrap();
}

#[tokio::test]
async fn test_per_call_header_case_variants_send_last_value_once() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"director_sites": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = ListDirectorSitesOptions::new()
        .with_header("X-Team", "first")
        .with_header("x-team", "second");
    client.list_director_sites(&options).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let values: Vec<&str> = requests[0]
        .headers
        .get_all("x-team")
        .iter()
        .map(|value| value.to_str().unwrap())
        .collect();
    assert_eq!(values, vec!["second"]);
}

#[tokio::test]
async fn test_decode_error_on_missing_required_field() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let mut body = director_site_json("site-1", "ready_to_use");
    body.as_object_mut().unwrap().remove("resource_group");
    Mock::given(method("GET"))
        .and(path("/director_sites/site-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let err = client
        .get_director_site(&GetDirectorSiteOptions::new("site-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, VmwareError::Decode { .. }));
    assert_eq!(err.status_code(), Some(200));
    assert!(!err.metadata().unwrap().body().is_empty());
}

#[tokio::test]
async fn test_unknown_enum_values_are_kept() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites/site-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(director_site_json("site-1", "hibernating")))
        .mount(&mock_server)
        .await;

    let response = client
        .get_director_site(&GetDirectorSiteOptions::new("site-1"))
        .await
        .unwrap();
    assert_eq!(response.result().unwrap().status, "hibernating");
}

#[tokio::test]
async fn test_error_envelope_is_surfaced() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("x-global-transaction-id", "tx-echo")
                .set_body_json(serde_json::json!({
                    "errors": [{
                        "code": "director_site_not_found",
                        "message": "The director site was not found.",
                        "more_info": "https://cloud.ibm.com/docs/vmware-service"
                    }],
                    "trace": "trace-1"
                })),
        )
        .mount(&mock_server)
        .await;

    let err = client
        .get_director_site(&GetDirectorSiteOptions::new("missing"))
        .await
        .unwrap_err();
    match err {
        VmwareError::Api(api) => {
            assert_eq!(api.status_code, 404);
            assert_eq!(api.code.as_deref(), Some("director_site_not_found"));
            assert_eq!(api.message, "The director site was not found.");
            assert_eq!(
                api.more_info.as_deref(),
                Some("https://cloud.ibm.com/docs/vmware-service")
            );
            assert_eq!(api.trace.as_deref(), Some("trace-1"));
            assert_eq!(api.metadata.header("x-global-transaction-id"), Some("tx-echo"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_without_envelope_uses_reason_phrase() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
        .mount(&mock_server)
        .await;

    let err = client
        .list_director_sites(&ListDirectorSitesOptions::new())
        .await
        .unwrap_err();
    match &err {
        VmwareError::Api(api) => {
            assert_eq!(api.message, "Service Unavailable");
            assert_eq!(api.metadata.body(), b"<html>down</html>");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_retryable());
}
