use actix_web::web;

pub mod customers;
pub mod favorites;
pub mod health;
pub mod members;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod stores;
pub mod students;
pub mod users;
pub mod validate;

/// Every route the API serves, in registration order. `GET /` renders it.
pub const ENDPOINTS: &[&str] = &[
    "GET /",
    "GET /health",
    "GET /users",
    "POST /users",
    "GET /users/{id}",
    "DELETE /users/{id}",
    "GET /users/{id}/favorites",
    "POST /users/{id}/people",
    "POST /users/{id}/planets",
    "GET /people",
    "POST /people",
    "GET /people/{id}",
    "DELETE /people/{id}",
    "GET /planets",
    "POST /planets",
    "GET /planets/{id}",
    "DELETE /planets/{id}",
    "GET /members",
    "POST /members",
    "GET /members/{id}",
    "DELETE /members/{id}",
    "POST /members/{id}/profile",
    "GET /stores",
    "POST /stores",
    "GET /stores/{id}",
    "DELETE /stores/{id}",
    "POST /stores/{id}/products",
    "GET /products",
    "GET /products/{id}",
    "DELETE /products/{id}",
    "GET /customers",
    "POST /customers",
    "GET /customers/{id}",
    "DELETE /customers/{id}",
    "POST /customers/{id}/orders",
    "GET /orders/{id}",
    "DELETE /orders/{id}",
    "GET /students",
    "POST /students",
    "GET /students/{id}",
    "DELETE /students/{id}",
    "POST /students/{id}/courses",
    "GET /courses",
    "POST /courses",
    "GET /courses/{id}",
    "DELETE /courses/{id}",
];

/// Registers every route. Shared by `main.rs` and the integration tests so
/// both serve the same surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(sitemap::configure_routes)
        .configure(health::configure_routes)
        .configure(users::configure_routes)
        .configure(favorites::configure_routes)
        .configure(people::configure_routes)
        .configure(planets::configure_routes)
        .configure(members::configure_routes)
        .configure(stores::configure_routes)
        .configure(customers::configure_routes)
        .configure(students::configure_routes);
}
