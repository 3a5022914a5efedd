use crate::tests::common::{cluster_json, cluster_summary_json, create_test_client};
use crate::{
    Cluster, ClusterPatch, CreateDirectorSitesPvdcsClustersOptions,
    DeleteDirectorSitesPvdcsClusterOptions, FileShares, GetDirectorInstancesPvdcsClusterOptions,
    ListDirectorSitesPvdcsClustersOptions, MAX_HOST_COUNT, UpdateDirectorSitesPvdcsClusterOptions,
    VmwareError,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn bad_request(code: &str, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(serde_json::json!({
        "errors": [{"code": code, "message": message}],
        "trace": "trace-400"
    }))
}

#[tokio::test]
async fn test_list_clusters() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites/s/pvdcs/p/clusters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "clusters": [cluster_json("c1"), cluster_json("c2")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .list_director_sites_pvdcs_clusters(&ListDirectorSitesPvdcsClustersOptions::new("s", "p"))
        .await
        .unwrap();
    let clusters = response.into_result().unwrap().clusters;
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[1].id, "c2");
    assert_eq!(clusters[0].director_site.id, "s");
}

#[tokio::test]
async fn test_create_cluster() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/director_sites/s/pvdcs/p/clusters"))
        .and(body_json(serde_json::json!({
            "name": "cluster_2",
            "host_count": 4,
            "host_profile": "BM_2S_20_CORES_192_GB",
            "file_shares": {"STORAGE_FOUR_IOPS_GB": 1000}
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(cluster_json("c2")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = CreateDirectorSitesPvdcsClustersOptions::new(
        "s",
        "p",
        "cluster_2",
        4,
        "BM_2S_20_CORES_192_GB",
        FileShares::default().with_four_iops_gb(1000),
    );
    let response = client
        .create_director_sites_pvdcs_clusters(&options)
        .await
        .unwrap();
    assert_eq!(response.status_code(), 202);
    assert_eq!(response.result().unwrap().id, "c2");
}

#[tokio::test]
async fn test_create_cluster_out_of_range_is_sent_and_rejected() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let host_count = MAX_HOST_COUNT + 15;
    Mock::given(method("POST"))
        .and(path("/director_sites/s/pvdcs/p/clusters"))
        .and(body_json(serde_json::json!({
            "name": "cluster_big",
            "host_count": host_count,
            "host_profile": "BM_2S_20_CORES_192_GB",
            "file_shares": {"STORAGE_TWO_IOPS_GB": 24000}
        })))
        .respond_with(bad_request(
            "invalid_host_count",
            "host_count must be between 2 and 25",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = CreateDirectorSitesPvdcsClustersOptions::new(
        "s",
        "p",
        "cluster_big",
        host_count,
        "BM_2S_20_CORES_192_GB",
        FileShares::default().with_two_iops_gb(24000),
    );
    let err = client
        .create_director_sites_pvdcs_clusters(&options)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(400));
    match err {
        VmwareError::Api(api) => assert_eq!(api.code.as_deref(), Some("invalid_host_count")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_get_cluster() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites/s/pvdcs/p/clusters/c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cluster_json("c")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .get_director_instances_pvdcs_cluster(&GetDirectorInstancesPvdcsClusterOptions::new(
            "s", "p", "c",
        ))
        .await
        .unwrap();
    let cluster = response.into_result().unwrap();
    assert_eq!(cluster.status, Cluster::STATUS_READY_TO_USE);
    assert_eq!(cluster.storage_type, Cluster::STORAGE_TYPE_NFS);
    assert_eq!(cluster.billing_plan, Cluster::BILLING_PLAN_MONTHLY);
    assert!(cluster.provisioned_at.is_some());
}

#[tokio::test]
async fn test_get_cluster_accepts_numeric_strings() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let mut body = cluster_json("c");
    body["host_count"] = serde_json::json!("3");
    body["file_shares"] = serde_json::json!({"STORAGE_TEN_IOPS_GB": "500"});
    Mock::given(method("GET"))
        .and(path("/director_sites/s/pvdcs/p/clusters/c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let cluster = client
        .get_director_instances_pvdcs_cluster(&GetDirectorInstancesPvdcsClusterOptions::new(
            "s", "p", "c",
        ))
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(cluster.host_count, 3);
    assert_eq!(cluster.file_shares.storage_ten_iops_gb, Some(500));
}

#[tokio::test]
async fn test_delete_cluster_returns_summary() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let mut summary = cluster_summary_json("c");
    summary["status"] = serde_json::json!("deleting");
    Mock::given(method("DELETE"))
        .and(path("/director_sites/s/pvdcs/p/clusters/c"))
        .respond_with(ResponseTemplate::new(202).set_body_json(summary))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .delete_director_sites_pvdcs_cluster(&DeleteDirectorSitesPvdcsClusterOptions::new(
            "s", "p", "c",
        ))
        .await
        .unwrap();
    assert_eq!(response.status_code(), 202);
    let summary = response.into_result().unwrap();
    assert_eq!(summary.id, "c");
    assert_eq!(summary.status, Cluster::STATUS_DELETING);
}

#[tokio::test]
async fn test_cluster_operations_reject_empty_pvdc_id() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = client
        .list_director_sites_pvdcs_clusters(&ListDirectorSitesPvdcsClustersOptions::new("s", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, VmwareError::Validation { .. }));

    let err = client
        .delete_director_sites_pvdcs_cluster(&DeleteDirectorSitesPvdcsClusterOptions::new(
            "s", "", "c",
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, VmwareError::Validation { .. }));

    let err = client
        .get_director_instances_pvdcs_cluster(&GetDirectorInstancesPvdcsClusterOptions::new(
            "", "p", "c",
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, VmwareError::Validation { .. }));
}

#[tokio::test]
async fn test_update_cluster_host_count() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("PATCH"))
        .and(path("/director_sites/s/pvdcs/p/clusters/c"))
        .and(header("content-type", "application/merge-patch+json"))
        .and(body_json(serde_json::json!({"host_count": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "c",
            "name": "cluster_1",
            "href": "https://api.us-south.vmware.cloud.ibm.com/v1/director_sites/s/pvdcs/p/clusters/c",
            "status": "updating",
            "host_count": 3
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let patch = ClusterPatch::default().with_host_count(3).as_patch().unwrap();
    let response = client
        .update_director_sites_pvdcs_cluster(&UpdateDirectorSitesPvdcsClusterOptions::new(
            "s", "p", "c", patch,
        ))
        .await
        .unwrap();
    let updated = response.into_result().unwrap();
    assert_eq!(updated.status, Cluster::STATUS_UPDATING);
    assert_eq!(updated.host_count, Some(3));
    assert!(updated.director_site.is_none());
}

#[tokio::test]
async fn test_update_cluster_with_both_fields_is_sent_and_rejected() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("PATCH"))
        .and(path("/director_sites/s/pvdcs/p/clusters/c"))
        .and(body_json(serde_json::json!({
            "host_count": 4,
            "file_shares": {"STORAGE_TWO_IOPS_GB": 100}
        })))
        .respond_with(bad_request(
            "invalid_patch",
            "file_shares and host_count cannot be changed together",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let patch = ClusterPatch::default()
        .with_host_count(4)
        .with_file_shares(FileShares::default().with_two_iops_gb(100))
        .as_patch()
        .unwrap();
    let err = client
        .update_director_sites_pvdcs_cluster(&UpdateDirectorSitesPvdcsClusterOptions::new(
            "s", "p", "c", patch,
        ))
        .await
        .unwrap_err();
    match err {
        VmwareError::Api(api) => {
            assert_eq!(api.status_code, 400);
            assert_eq!(
                api.message,
                "file_shares and host_count cannot be changed together"
            );
            assert_eq!(api.trace.as_deref(), Some("trace-400"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_update_cluster_without_body_is_rejected() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let options = UpdateDirectorSitesPvdcsClusterOptions {
        site_id: "s".to_string(),
        pvdc_id: "p".to_string(),
        id: "c".to_string(),
        ..Default::default()
    };
    let err = client
        .update_director_sites_pvdcs_cluster(&options)
        .await
        .unwrap_err();
    assert!(matches!(err, VmwareError::Validation { .. }));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cluster_operations_reject_dot_segments() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = client
        .delete_director_sites_pvdcs_cluster(&DeleteDirectorSitesPvdcsClusterOptions::new(
            "s", "..", "..",
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, VmwareError::Validation { .. }));

    let err = client
        .get_director_instances_pvdcs_cluster(&GetDirectorInstancesPvdcsClusterOptions::new(
            "s", "p", ".",
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, VmwareError::Validation { .. }));
}
