//! Dispute endpoint integration tests.

mod common;

use actix_web::{test, App};
use serde_json::{json, Value};

use agrimandi_api::routes;
use agrimandi_commons::Role;

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .configure(routes::configure_routes),
        )
        .await
    };
}

macro_rules! raise_dispute {
    ($app:expr, $user:expr, $reason:expr) => {{
        let req = test::TestRequest::post()
            .uri("/v1/api/disputes")
            .insert_header(common::bearer($user))
            .set_json(json!({"orderId": "order-1", "reason": $reason}))
            .to_request();
        let resp = test::call_service($app, req).await;
        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        body
    }};
}

#[actix_web::test]
async fn test_dispute_requires_order_and_reason() {
    let state = common::test_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/v1/api/disputes")
        .insert_header(common::bearer("buyer1"))
        .set_json(json!({"orderId": "order-1", "reason": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Order ID and reason required");
}

#[actix_web::test]
async fn test_dispute_opens_with_snapshot_name() {
    let state = common::test_state();
    common::seed_user(&state, "buyer1", "Ravi", Role::Buyer);
    let app = init_app!(state);

    let body = raise_dispute!(&app, "buyer1", "Late delivery");
    assert_eq!(body["dispute"]["status"], "open");
    assert_eq!(body["dispute"]["raisedByName"], "Ravi");
}

#[actix_web::test]
async fn test_non_admins_see_only_their_own_disputes() {
    let state = common::test_state();
    common::seed_user(&state, "admin1", "Admin", Role::Admin);
    let app = init_app!(state);

    raise_dispute!(&app, "buyer1", "Late delivery");
    raise_dispute!(&app, "buyer2", "Wrong grade");

    let req = test::TestRequest::get()
        .uri("/v1/api/disputes")
        .insert_header(common::bearer("buyer1"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let disputes = body["disputes"].as_array().unwrap();
    assert_eq!(disputes.len(), 1);
    assert_eq!(disputes[0]["raisedBy"], "buyer1");

    let req = test::TestRequest::get()
        .uri("/v1/api/disputes")
        .insert_header(common::bearer("admin1"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["disputes"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_only_admins_resolve_disputes() {
    let state = common::test_state();
    common::seed_user(&state, "admin1", "Admin", Role::Admin);
    let app = init_app!(state);

    let raised = raise_dispute!(&app, "buyer1", "Late delivery");
    let id = raised["dispute"]["id"].as_str().unwrap().to_string();
    let uri = format!("/v1/api/disputes/{}", id);

    // the raiser cannot resolve their own dispute
    let req = test::TestRequest::patch()
        .uri(&uri)
        .insert_header(common::bearer("buyer1"))
        .set_json(json!({"status": "resolved"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::patch()
        .uri(&uri)
        .insert_header(common::bearer("admin1"))
        .set_json(json!({"status": "resolved", "description": "refund issued"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["dispute"]["status"], "resolved");
    assert_eq!(body["dispute"]["description"], "refund issued");
}
