use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use attom_mcp_server::config::load_config_with;
use attom_mcp_server::server::{AppState, build_router};

const API_KEY: &str = "test_api_key";

fn app() -> Router {
    let config = load_config_with(|_| None).expect("default config");
    build_router(AppState::from_config(config).expect("demo state"))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("apikey", API_KEY)
        .body(Body::empty())
        .unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn missing_key_is_401() {
    let request = Request::builder()
        .uri("/propertyapi/v1.0.0/property/detail?AttomID=145423726")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], 401);
    assert_eq!(
        body["message"],
        "Missing API key. Please provide the 'apikey' header."
    );
}

#[tokio::test]
async fn unknown_key_is_403() {
    let request = Request::builder()
        .uri("/v4/school/profile?geoIdv4=9c6bded31fd0e089485f276acb947875")
        .header("apikey", "wrong")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 403);
}

#[tokio::test]
async fn padded_key_is_not_trimmed() {
    let request = Request::builder()
        .uri("/v4/school/profile?geoIdv4=9c6bded31fd0e089485f276acb947875")
        .header("apikey", " test_api_key ")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 403);
}

#[tokio::test]
async fn property_detail_returns_the_demo_property() {
    let (status, body) = send(get("/propertyapi/v1.0.0/property/detail?AttomID=145423726")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["attomId"], "145423726");
    assert!(body.get("code").is_none());
}

#[tokio::test]
async fn unknown_property_is_404() {
    let (status, body) = send(get("/propertyapi/v1.0.0/property/detail?AttomID=999999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Property with AttomID 999999 not found.");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn repeated_lookups_return_identical_envelopes() {
    let uri = "/propertyapi/v1.0.0/property/detail?AttomID=145423726";
    let first = send(get(uri)).await;
    let second = send(get(uri)).await;
    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(first, second);

    let uri = "/propertyapi/v1.0.0/property/detail?AttomID=999999";
    let first = send(get(uri)).await;
    let second = send(get(uri)).await;
    assert_eq!(first.0, StatusCode::NOT_FOUND);
    assert_eq!(first, second);
}

#[tokio::test]
async fn property_without_identifier_is_400() {
    let (status, body) = send(get("/propertyapi/v1.0.0/property/detail")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "At least one property identifier is required. Please provide AttomID, address, address1+address2, or fips+apn."
    );
}

#[tokio::test]
async fn property_detail_accepts_form_posts() {
    let request = Request::builder()
        .method("POST")
        .uri("/propertyapi/v1.0.0/property/detail")
        .header("apikey", API_KEY)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("AttomID=145423726"))
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["owner_name"], "JOHN DOE");
}

#[tokio::test]
async fn property_search_pages_criteria_results() {
    let (status, body) = send(get("/propertyapi/v1.0.0/property/id?page=2&pagesize=1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalRecords"], 2);
    assert_eq!(body["data"]["totalPages"], 2);
    assert_eq!(body["data"]["items"][0]["attomId"], "158832785");
}

#[tokio::test]
async fn poi_search_pages_results() {
    let (status, body) = send(get("/v4/neighborhood/poi?zipcode=92802&page=1&pageSize=10")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalPages"], 1);
    assert_eq!(body["data"]["items"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn poi_page_size_is_capped() {
    let (status, body) = send(get("/v4/neighborhood/poi?zipcode=92802&pageSize=501")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn malformed_query_values_are_400() {
    let (status, body) = send(get("/v4/school/search?geoIdv4=x&schoolType=College")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");

    let (status, _) = send(get("/areaapi/area/hierarchy/lookup?latitude=north&longitude=1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn hierarchy_needs_both_coordinates() {
    let (status, body) = send(get("/areaapi/area/hierarchy/lookup?latitude=33.8")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Location information is required. Please provide wktstring or latitude+longitude."
    );
}

#[tokio::test]
async fn location_lookup_accepts_either_geoid_casing() {
    let (status, body) = send(get(
        "/v4/location/lookup?geoidv4=07991e1ba28ff61117434d9a073c4360",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"][0]["name"], "ANAHEIM");
}

#[tokio::test]
async fn geoid_lookup_tolerates_an_extra_area_id() {
    let (status, body) = send(get("/areaapi/area/geoid/lookup?geoId=ST06&areaId=x")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"][0]["name"], "CALIFORNIA");
}

#[tokio::test]
async fn community_and_district_lookups() {
    let (status, body) = send(get(
        "/v4.0.0/neighborhood/community?geoIdv4=08f3762070941bf29ff66a3927612f05",
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "ANAHEIM RESORT");

    let (status, body) = send(get("/v4/school/district?geoIdv4=unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "School district with geoIdv4 unknown not found.");
}

#[tokio::test]
async fn public_routes_need_no_key() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let request = Request::builder()
        .uri("/.well-known/mcp.json")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoint"], "/api/mcp");
    assert_eq!(body["tools"].as_array().map(Vec::len), Some(47));
}

#[tokio::test]
async fn unknown_routes_are_404_envelopes() {
    let (status, body) = send(get("/v9/nothing/here")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Route not found");
}

#[tokio::test]
async fn unknown_routes_still_require_a_key() {
    let request = Request::builder()
        .uri("/v9/nothing/here")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 401);
}

#[tokio::test]
async fn wrong_method_is_a_405_envelope() {
    let request = Request::builder()
        .method("POST")
        .uri("/v4/school/profile?geoIdv4=x")
        .header("apikey", API_KEY)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body,
        json!({ "status": "error", "code": 405, "message": "Method not allowed" })
    );
}

#[tokio::test]
async fn mcp_endpoint_speaks_json_rpc() {
    let rpc = |body: &'static str| {
        Request::builder()
            .method("POST")
            .uri("/api/mcp")
            .header("apikey", API_KEY)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    };

    let (status, body) = send(rpc(
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"property_detail","arguments":{"attom_id":"145423726"}}}"#,
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["structuredContent"]["data"]["attomId"], "145423726");

    let (_, body) = send(rpc("{not json")).await;
    assert_eq!(body["error"]["code"], -32700);

    let request = Request::builder()
        .method("POST")
        .uri("/api/mcp")
        .header("apikey", API_KEY)
        .body(Body::from(vec![0xff, 0xfe, 0x7b]))
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["code"], -32700);

    let (status, _) = send(rpc(
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
    ))
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn repeated_tool_calls_return_identical_results() {
    let call = || {
        Request::builder()
            .method("POST")
            .uri("/api/mcp")
            .header("apikey", API_KEY)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"property_detail","arguments":{"attom_id":"145423726"}}}"#,
            ))
            .unwrap()
    };

    let first = send(call()).await;
    let second = send(call()).await;
    assert_eq!(first.1["result"]["structuredContent"]["status"], "success");
    assert_eq!(first, second);
}
