//! Admin endpoint integration tests.

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

#[actix_web::test]
async fn test_admin_routes_reject_non_admins() {
    let state = common::test_state();
    common::seed_user(&state, "buyer1", "Ravi", Role::Buyer);
    let app = init_app!(state);

    for uri in [
        "/v1/api/admin/users",
        "/v1/api/admin/listings",
        "/v1/api/admin/analytics",
    ] {
        // a caller with a non-admin profile
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(common::bearer("buyer1"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403, "{}", uri);

        // a caller with no profile at all
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(common::bearer("ghost"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403, "{}", uri);

        // no token
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401, "{}", uri);
    }
}

#[actix_web::test]
async fn test_admin_can_verify_users() {
    let state = common::test_state();
    common::seed_user(&state, "admin1", "Admin", Role::Admin);
    common::seed_user(&state, "sup1", "Asha", Role::Supplier);
    let app = init_app!(state);

    let req = test::TestRequest::patch()
        .uri("/v1/api/admin/users/sup1")
        .insert_header(common::bearer("admin1"))
        .set_json(json!({"verified": true}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["user"]["verified"], true);
    assert_eq!(body["user"]["role"], "supplier");

    let req = test::TestRequest::get()
        .uri("/v1/api/admin/users")
        .insert_header(common::bearer("admin1"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["users"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_admin_listings_include_every_status() {
    let state = common::test_state();
    common::seed_user(&state, "admin1", "Admin", Role::Admin);
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/v1/api/listings")
        .insert_header(common::bearer("sup1"))
        .set_json(json!({"crop": "Wheat", "mandi": "Azadpur", "quantity": 100, "pricePerUnit": 20.0}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let listing_id = body["listing"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/v1/api/listings/{}", listing_id))
        .insert_header(common::bearer("sup1"))
        .set_json(json!({"status": "closed"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    // public browse hides the closed listing, the admin view does not
    let req = test::TestRequest::get().uri("/v1/api/listings").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["listings"].as_array().unwrap().is_empty());

    let req = test::TestRequest::get()
        .uri("/v1/api/admin/listings")
        .insert_header(common::bearer("admin1"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let listings = body["listings"].as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["status"], "closed");
}

#[actix_web::test]
async fn test_seed_mandi_rates_is_admin_gated() {
    let state = common::test_state();
    common::seed_user(&state, "admin1", "Admin", Role::Admin);
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/v1/api/admin/seed-mandi-rates")
        .insert_header(common::bearer("nobody"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::post()
        .uri("/v1/api/admin/seed-mandi-rates")
        .insert_header(common::bearer("admin1"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 5);

    // public lookup sees the seeded rows
    let req = test::TestRequest::get()
        .uri("/v1/api/mandi-rates?crop=wheat")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let rates = body["rates"].as_array().unwrap();
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0]["govtRate"], 2125.0);
}

#[actix_web::test]
async fn test_reseeding_overwrites_instead_of_appending() {
    let state = common::test_state();
    common::seed_user(&state, "admin1", "Admin", Role::Admin);
    let app = init_app!(state);

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/v1/api/admin/seed-mandi-rates")
            .insert_header(common::bearer("admin1"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["count"], 5);
    }

    // fixed per-row ids make the second seed a key-for-key overwrite
    let req = test::TestRequest::get().uri("/v1/api/mandi-rates").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["rates"].as_array().unwrap().len(), 5);
}

#[actix_web::test]
async fn test_analytics_aggregates() {
    let state = common::test_state();
    common::seed_user(&state, "admin1", "Admin", Role::Admin);
    common::seed_user(&state, "sup1", "Asha", Role::Supplier);
    common::seed_user(&state, "buyer1", "Ravi", Role::Buyer);
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/v1/api/listings")
        .insert_header(common::bearer("sup1"))
        .set_json(json!({"crop": "Wheat", "mandi": "Azadpur", "quantity": 100, "pricePerUnit": 20.0}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let listing_id = body["listing"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/v1/api/orders")
        .insert_header(common::bearer("buyer1"))
        .set_json(json!({"listingId": listing_id, "quantity": 10}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get()
        .uri("/v1/api/admin/analytics")
        .insert_header(common::bearer("admin1"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let a = &body["analytics"];
    assert_eq!(a["totalUsers"], 3);
    assert_eq!(a["totalSuppliers"], 1);
    assert_eq!(a["totalBuyers"], 1);
    assert_eq!(a["totalListings"], 1);
    assert_eq!(a["activeListings"], 1);
    assert_eq!(a["totalOrders"], 1);
    assert_eq!(a["totalRevenue"], 200.0);
    assert_eq!(a["recentOrders"].as_array().unwrap().len(), 1);
}
