use actix_web::http::StatusCode;
use serde_json::json;

use crate::support::http::{delete, get, post};
use crate::support::{build_test_state, create_test_app, factory};

#[actix_web::test]
async fn product_belongs_to_store() {
    let state = build_test_state().await.unwrap();
    let store = factory::store(&state, "Watto's Parts").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = post(
        &app,
        &format!("/stores/{}/products", store.id),
        json!({"name": "Hyperdrive", "price": 1250.5}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Product created successfully");
    assert_eq!(body["product"]["store_id"], store.id);
    assert_eq!(body["product"]["price"], 1250.5);
    let product_id = body["product"]["id"].as_i64().unwrap();

    let (status, product) = get(&app, &format!("/products/{product_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["store_name"], "Watto's Parts");

    let (_, products) = get(&app, "/products").await;
    assert_eq!(products.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn product_for_missing_store_is_404() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = post(
        &app,
        "/stores/9/products",
        json!({"name": "Droid", "price": 10.0}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "STORE_NOT_FOUND");
}

#[actix_web::test]
async fn negative_price_is_rejected() {
    let state = build_test_state().await.unwrap();
    let store = factory::store(&state, "Jawa Sandcrawler").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = post(
        &app,
        &format!("/stores/{}/products", store.id),
        json!({"name": "R5-D4", "price": -1.0}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn store_with_products_cannot_be_deleted() {
    let state = build_test_state().await.unwrap();
    let store = factory::store(&state, "Mos Eisley Market").await;
    let product = factory::product(&state, store.id, "Blue milk", 2.0).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = delete(&app, &format!("/stores/{}", store.id)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "FK_VIOLATION");

    let (status, body) = delete(&app, &format!("/products/{}", product.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Product deleted");

    let (status, body) = delete(&app, &format!("/stores/{}", store.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Store deleted");
    assert_eq!(body["store"]["name"], "Mos Eisley Market");

    let (status, body) = get(&app, &format!("/stores/{}", store.id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "STORE_NOT_FOUND");
}
