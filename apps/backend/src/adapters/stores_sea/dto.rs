//! DTOs for stores_sea adapter.

#[derive(Debug, Clone)]
pub struct StoreCreate {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub store_id: i64,
    pub name: String,
    pub price: f64,
}
