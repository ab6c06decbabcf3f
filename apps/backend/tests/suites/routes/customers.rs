use actix_web::http::StatusCode;
use serde_json::json;

use crate::common::id_of;
use crate::support::http::{delete, get, post};
use crate::support::{build_test_state, create_test_app, factory};

#[actix_web::test]
async fn customer_lists_its_orders() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = post(&app, "/customers", json!({"name": "Greedo"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Customer created successfully");
    assert_eq!(body["customer"]["orders"], json!([]));
    let customer_id = id_of(&body, "customer");

    for (product, quantity) in [("Blaster", 1), ("Power cell", 6)] {
        let (status, body) = post(
            &app,
            &format!("/customers/{customer_id}/orders"),
            json!({"product": product, "quantity": quantity}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["msg"], "Order created successfully");
        assert_eq!(body["order"]["customer_id"], customer_id);
    }

    let (status, customer) = get(&app, &format!("/customers/{customer_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let orders = customer["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["product"], "Blaster");
    assert_eq!(orders[1]["quantity"], 6);
}

#[actix_web::test]
async fn non_positive_quantity_is_rejected() {
    let state = build_test_state().await.unwrap();
    let customer = factory::customer(&state, "Bossk").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    for quantity in [0, -3] {
        let (status, body) = post(
            &app,
            &format!("/customers/{}/orders", customer.id),
            json!({"product": "Thermal detonator", "quantity": quantity}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}

#[actix_web::test]
async fn order_for_missing_customer_is_404() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = post(
        &app,
        "/customers/5/orders",
        json!({"product": "Carbonite", "quantity": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "CUSTOMER_NOT_FOUND");
}

#[actix_web::test]
async fn customer_with_orders_is_protected() {
    let state = build_test_state().await.unwrap();
    let customer = factory::customer(&state, "Boba").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let (_, body) = post(
        &app,
        &format!("/customers/{}/orders", customer.id),
        json!({"product": "Slave I fuel", "quantity": 2}),
    )
    .await;
    let order_id = id_of(&body, "order");

    let (status, body) = delete(&app, &format!("/customers/{}", customer.id)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "FK_VIOLATION");

    let (status, order) = get(&app, &format!("/orders/{order_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["product"], "Slave I fuel");

    let (status, body) = delete(&app, &format!("/orders/{order_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Order deleted");

    let (status, body) = delete(&app, &format!("/customers/{}", customer.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Customer deleted");

    let (status, body) = get(&app, &format!("/orders/{order_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ORDER_NOT_FOUND");
}
