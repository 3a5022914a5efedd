use crate::tests::common::{create_test_client, file_shares_json, pvdc_json};
use crate::{
    ClusterPrototype, CreateDirectorSitesPvdcsOptions, FileShares, GetDirectorSitesPvdcsOptions,
    ListDirectorSitesPvdcsOptions, Pvdc, PvdcProviderType, VmwareError,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

#[tokio::test]
async fn test_list_director_sites_pvdcs() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites/s/pvdcs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "pvdcs": [pvdc_json("p1"), pvdc_json("p2")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .list_director_sites_pvdcs(&ListDirectorSitesPvdcsOptions::new("s"))
        .await
        .unwrap();
    let pvdcs = response.into_result().unwrap().pvdcs;
    assert_eq!(pvdcs.len(), 2);
    assert_eq!(pvdcs[0].id, "p1");
    assert_eq!(pvdcs[0].provider_types[0].name, PvdcProviderType::NAME_ON_DEMAND);
    assert_eq!(pvdcs[0].clusters[0].id, "c");
}

#[tokio::test]
async fn test_create_director_sites_pvdcs() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/director_sites/s/pvdcs"))
        .and(body_json(serde_json::json!({
            "name": "pvdc_2",
            "data_center_name": "dal10",
            "clusters": [{
                "name": "cluster_2",
                "host_count": 3,
                "host_profile": "BM_2S_20_CORES_192_GB",
                "file_shares": file_shares_json()
            }]
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(pvdc_json("p2")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let cluster = ClusterPrototype::new(
        "cluster_2",
        3,
        "BM_2S_20_CORES_192_GB",
        FileShares::default().with_two_iops_gb(24000),
    );
    let options = CreateDirectorSitesPvdcsOptions::new("s", "pvdc_2", "dal10", vec![cluster]);
    let response = client.create_director_sites_pvdcs(&options).await.unwrap();
    assert_eq!(response.status_code(), 202);
    assert_eq!(response.result().unwrap().status, Pvdc::STATUS_CREATING);
}

#[tokio::test]
async fn test_get_director_sites_pvdcs() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites/s/pvdcs/p"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pvdc_json("p")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .get_director_sites_pvdcs(&GetDirectorSitesPvdcsOptions::new("s", "p"))
        .await
        .unwrap();
    let pvdc = response.into_result().unwrap();
    assert_eq!(pvdc.data_center_name, "tok02");
    assert_eq!(pvdc.clusters[0].file_shares.storage_two_iops_gb, Some(24000));
}

#[tokio::test]
async fn test_pvdc_operations_reject_empty_site_id() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = client
        .list_director_sites_pvdcs(&ListDirectorSitesPvdcsOptions::new(""))
        .await
        .unwrap_err();
    assert!(matches!(err, VmwareError::Validation { .. }));

    let err = client
        .get_director_sites_pvdcs(&GetDirectorSitesPvdcsOptions::new("s", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, VmwareError::Validation { .. }));
}

#[tokio::test]
async fn test_create_pvdc_without_clusters_is_rejected() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let options = CreateDirectorSitesPvdcsOptions {
        site_id: "s".to_string(),
        name: Some("pvdc_2".to_string()),
        data_center_name: Some("dal10".to_string()),
        ..Default::default()
    };
    let err = client.create_director_sites_pvdcs(&options).await.unwrap_err();
    assert!(matches!(err, VmwareError::Validation { .. }));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
