pub mod courses;
pub mod customers;
pub mod favorites;
pub mod inscriptions;
pub mod members;
pub mod orders;
pub mod people;
pub mod planets;
pub mod products;
pub mod profiles;
pub mod stores;
pub mod students;
pub mod users;

pub use courses::Entity as Courses;
pub use customers::Entity as Customers;
pub use favorites::Entity as Favorites;
pub use inscriptions::Entity as Inscriptions;
pub use members::Entity as Members;
pub use orders::Entity as Orders;
pub use people::Entity as People;
pub use planets::Entity as Planets;
pub use products::Entity as Products;
pub use profiles::Entity as Profiles;
pub use stores::Entity as Stores;
pub use students::Entity as Students;
pub use users::Entity as Users;
