//! GHN client tests against a local mock server
//!
//! Run with: cargo test --test ghn_api_test

use serde_json::json;
use shipping_fee::providers::{GhnClient, ShippingGateway};
use shipping_fee::utils::constants::{
    GHN_AVAILABLE_SERVICES_PATH, GHN_CALCULATE_FEE_PATH, GHN_DISTRICT_PATH, GHN_PROVINCE_PATH,
    GHN_WARD_PATH, MSG_FEE_CALCULATION_SUCCESS, MSG_FEE_CALCULATION_SUCCESS_MOCK,
};
use shipping_fee::{ErrorCode, FeeRequest, GhnConfig, ShippingService};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_TOKEN: &str = "test-token";
const TEST_SHOP_ID: i64 = 885;

fn client_for(server: &MockServer) -> GhnClient {
    let config = GhnConfig::new(TEST_TOKEN, TEST_SHOP_ID, server.uri());
    GhnClient::new(&config).unwrap()
}

fn fee_request() -> FeeRequest {
    FeeRequest {
        from_district_id: Some(1454),
        to_district_id: Some(1442),
        to_ward_code: Some("21211".to_string()),
        weight: Some(1000),
        service_type_id: Some(2),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_fee_success_maps_breakdown() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GHN_CALCULATE_FEE_PATH))
        .and(header("token", TEST_TOKEN))
        .and(header("shopid", "885"))
        .and(body_json(json!({
            "from_district_id": 1454,
            "to_district_id": 1442,
            "to_ward_code": "21211",
            "weight": 1000,
            "service_type_id": 2
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "Success",
            "data": {
                "total": 36300,
                "service_fee": 36300,
                "insurance_fee": "0",
                "coupon_value": 0,
                "r2s_fee": 0
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fee = client_for(&server).calculate_fee(&fee_request()).await.unwrap();

    assert!(fee.success);
    assert_eq!(fee.message, MSG_FEE_CALCULATION_SUCCESS);
    assert_eq!(fee.total, 36300);
    assert_eq!(fee.service_fee, 36300);
    assert_eq!(fee.insurance_fee, 0);
    // Missing fields default to zero
    assert_eq!(fee.cod_fee, 0);
}

#[tokio::test]
async fn test_fee_rejection_with_http_400_is_domain_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GHN_CALCULATE_FEE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 400,
            "message": "Wrong ward code",
            "data": null
        })))
        .mount(&server)
        .await;

    let fee = client_for(&server).calculate_fee(&fee_request()).await.unwrap();

    assert!(!fee.success);
    assert_eq!(fee.message, "Wrong ward code");
    assert_eq!(fee.total, 0);
}

#[tokio::test]
async fn test_fee_unparsable_body_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GHN_CALCULATE_FEE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).calculate_fee(&fee_request()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::UpstreamInvalidResponse);
}

#[tokio::test]
async fn test_fee_server_error_with_envelope_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GHN_CALCULATE_FEE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": 500,
            "message": "Internal Server Error"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).calculate_fee(&fee_request()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::UpstreamServerError);
    assert!(err.code.is_upstream_unavailable());
}

#[tokio::test]
async fn test_fee_timeout_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GHN_CALCULATE_FEE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(3))
                .set_body_json(json!({"code": 200, "message": "Success", "data": {"total": 1}})),
        )
        .mount(&server)
        .await;

    let config = GhnConfig::new(TEST_TOKEN, TEST_SHOP_ID, server.uri())
        .with_timeout(Duration::from_millis(200));
    let client = GhnClient::new(&config).unwrap();

    let err = client.calculate_fee(&fee_request()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::UpstreamTimeout);
}

#[tokio::test]
async fn test_provinces_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GHN_PROVINCE_PATH))
        .and(header("token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "Success",
            "data": [
                {"ProvinceID": 201, "ProvinceName": "Hà Nội", "Code": "4"},
                {"ProvinceID": "202", "ProvinceName": "Hồ Chí Minh", "Code": 8}
            ]
        })))
        .mount(&server)
        .await;

    let provinces = client_for(&server).provinces().await.unwrap();

    assert_eq!(provinces.len(), 2);
    assert_eq!(provinces[0].province_id, 201);
    assert_eq!(provinces[0].province_name, "Hà Nội");
    assert_eq!(provinces[1].province_id, 202);
    assert_eq!(provinces[1].code, "8");
}

#[tokio::test]
async fn test_districts_and_wards_carry_parent_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GHN_DISTRICT_PATH))
        .and(query_param("province_id", "201"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "Success",
            "data": [{"DistrictID": 1442, "DistrictName": "Quận 1"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(GHN_WARD_PATH))
        .and(query_param("district_id", "1442"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "Success",
            "data": [
                {"WardCode": "21211", "WardName": "Phường Bến Nghé"},
                {"WardCode": 21212, "WardName": "Phường Bến Thành"}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let districts = client.districts(201).await.unwrap();
    assert_eq!(districts.len(), 1);
    assert_eq!(districts[0].id, 1442);
    assert_eq!(districts[0].province_id, 201);

    let wards = client.wards(1442).await.unwrap();
    assert_eq!(wards.len(), 2);
    assert_eq!(wards[0].ward_code, "21211");
    assert_eq!(wards[1].ward_code, "21212");
    assert!(wards.iter().all(|w| w.district_id == 1442));
}

#[tokio::test]
async fn test_null_data_is_empty_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GHN_WARD_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "Success",
            "data": null
        })))
        .mount(&server)
        .await;

    let wards = client_for(&server).wards(9999).await.unwrap();
    assert!(wards.is_empty());
}

#[tokio::test]
async fn test_available_services_sends_shop_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GHN_AVAILABLE_SERVICES_PATH))
        .and(body_json(json!({
            "shop_id": 885,
            "from_district": 1454,
            "to_district": 1442
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "Success",
            "data": [
                {"service_id": 53320, "short_name": "Chuẩn", "service_type_id": 2}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let services = client_for(&server)
        .available_services(Some(1454), 1442)
        .await
        .unwrap();

    assert_eq!(services.len(), 1);
    assert_eq!(services[0].service_id, 53320);
    assert_eq!(services[0].short_name, "Chuẩn");
    assert_eq!(services[0].service_type_id, 2);
}

#[tokio::test]
async fn test_listing_rejection_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GHN_PROVINCE_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 401,
            "message": "Token is not valid",
            "data": null
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).provinces().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::UpstreamRejected);
}

// ============================================
// Through the service: fallback behavior
// ============================================

#[tokio::test]
async fn test_service_falls_back_to_mock_on_listing_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GHN_PROVINCE_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 401,
            "message": "Token is not valid",
            "data": null
        })))
        .mount(&server)
        .await;

    let service = ShippingService::with_gateway(Arc::new(client_for(&server)));
    let provinces = service.provinces().await;

    assert_eq!(provinces.len(), 63);
}

#[tokio::test]
async fn test_service_falls_back_to_mock_on_malformed_fee() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GHN_CALCULATE_FEE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let service = ShippingService::with_gateway(Arc::new(client_for(&server)));
    let fee = service.calculate_fee(&fee_request()).await;

    assert!(fee.success);
    assert_eq!(fee.message, MSG_FEE_CALCULATION_SUCCESS_MOCK);
    // Different districts, 1000g: 15000 + 10000 + 20000
    assert_eq!(fee.total, 45_000);
}

#[tokio::test]
async fn test_service_falls_back_to_mock_on_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GHN_CALCULATE_FEE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": 500,
            "message": "Internal Server Error"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(GHN_WARD_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "code": 503,
            "message": "Service Unavailable",
            "data": []
        })))
        .mount(&server)
        .await;

    let service = ShippingService::with_gateway(Arc::new(client_for(&server)));

    let fee = service.calculate_fee(&fee_request()).await;
    assert!(fee.success);
    assert_eq!(fee.message, MSG_FEE_CALCULATION_SUCCESS_MOCK);
    assert_eq!(fee.total, 45_000);

    let wards = service.wards(1442).await;
    assert_eq!(wards.len(), 5);
    assert_eq!(wards[0].ward_code, "2442");
}

#[tokio::test]
async fn test_service_passes_through_fee_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GHN_CALCULATE_FEE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 400,
            "message": "Route not supported",
            "data": null
        })))
        .mount(&server)
        .await;

    let service = ShippingService::with_gateway(Arc::new(client_for(&server)));
    let fee = service.calculate_fee(&fee_request()).await;

    assert!(!fee.success);
    assert_eq!(fee.message, "Route not supported");
}

#[tokio::test]
async fn test_service_never_calls_upstream_for_invalid_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GHN_CALCULATE_FEE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = ShippingService::with_gateway(Arc::new(client_for(&server)));
    let req = FeeRequest {
        weight: Some(0),
        ..fee_request()
    };
    let fee = service.calculate_fee(&req).await;

    assert!(!fee.success);
    assert!(!fee.errors.is_empty());
}
