//! DTOs for customers_sea adapter.

#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: i64,
    pub product: String,
    pub quantity: i32,
}
