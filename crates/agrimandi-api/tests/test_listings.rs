//! Listing endpoint integration tests.

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

macro_rules! create_listing {
    ($app:expr, $user:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri("/v1/api/listings")
            .insert_header(common::bearer($user))
            .set_json($body)
            .to_request();
        let resp = test::call_service($app, req).await;
        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        body
    }};
}

#[actix_web::test]
async fn test_create_snapshots_supplier_profile() {
    let state = common::test_state();
    common::seed_user(&state, "sup1", "Asha Farms", Role::Supplier);
    let app = init_app!(state);

    let body: Value = create_listing!(
        &app,
        "sup1",
        json!({"crop": "Wheat", "mandi": "Azadpur Mandi", "quantity": 500, "pricePerUnit": 21.5})
    );

    let listing = &body["listing"];
    assert_eq!(listing["supplierId"], "sup1");
    assert_eq!(listing["supplierName"], "Asha Farms");
    assert_eq!(listing["status"], "published");
    assert_eq!(listing["grade"], "Standard");
    assert_eq!(listing["unit"], "kg");
}

#[actix_web::test]
async fn test_create_rejects_missing_fields() {
    let state = common::test_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/v1/api/listings")
        .insert_header(common::bearer("sup1"))
        .set_json(json!({"crop": "", "mandi": "Azadpur", "quantity": 10, "pricePerUnit": 5.0}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Required fields missing");
}

#[actix_web::test]
async fn test_browse_defaults_to_published_and_filters() {
    let state = common::test_state();
    let app = init_app!(state);

    create_listing!(
        &app,
        "sup1",
        json!({"crop": "Wheat", "mandi": "Azadpur Mandi", "quantity": 500, "pricePerUnit": 21.5})
    );
    create_listing!(
        &app,
        "sup1",
        json!({"crop": "Rice", "mandi": "Karnal Mandi", "quantity": 200, "pricePerUnit": 30.0})
    );

    let req = test::TestRequest::get()
        .uri("/v1/api/listings?crop=Wheat")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let listings = body["listings"].as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["crop"], "Wheat");

    // mandi filter is substring containment
    let req = test::TestRequest::get()
        .uri("/v1/api/listings?mandi=Karnal")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["listings"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_update_rejected_for_non_owner_and_record_unchanged() {
    let state = common::test_state();
    let app = init_app!(state);

    let created: Value = create_listing!(
        &app,
        "sup1",
        json!({"crop": "Wheat", "mandi": "Azadpur Mandi", "quantity": 500, "pricePerUnit": 21.5})
    );
    let id = created["listing"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/v1/api/listings/{}", id))
        .insert_header(common::bearer("intruder"))
        .set_json(json!({"pricePerUnit": 1.0}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::get()
        .uri(&format!("/v1/api/listings/{}", id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["listing"]["pricePerUnit"], 21.5);
}

#[actix_web::test]
async fn test_owner_can_update_and_delete() {
    let state = common::test_state();
    let app = init_app!(state);

    let created: Value = create_listing!(
        &app,
        "sup1",
        json!({"crop": "Wheat", "mandi": "Azadpur Mandi", "quantity": 500, "pricePerUnit": 21.5})
    );
    let id = created["listing"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/v1/api/listings/{}", id))
        .insert_header(common::bearer("sup1"))
        .set_json(json!({"pricePerUnit": 25.0, "status": "closed"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["listing"]["pricePerUnit"], 25.0);
    assert_eq!(body["listing"]["status"], "closed");

    let req = test::TestRequest::delete()
        .uri(&format!("/v1/api/listings/{}", id))
        .insert_header(common::bearer("sup1"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);

    let req = test::TestRequest::get()
        .uri(&format!("/v1/api/listings/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_supplier_listings_includes_all_statuses() {
    let state = common::test_state();
    let app = init_app!(state);

    let created: Value = create_listing!(
        &app,
        "sup1",
        json!({"crop": "Wheat", "mandi": "Azadpur Mandi", "quantity": 500, "pricePerUnit": 21.5})
    );
    let id = created["listing"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/v1/api/listings/{}", id))
        .insert_header(common::bearer("sup1"))
        .set_json(json!({"status": "closed"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/v1/api/suppliers/sup1/listings")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["listings"].as_array().unwrap().len(), 1);
}
