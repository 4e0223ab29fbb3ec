pub mod admin;
pub mod hero;
pub mod navbar;
pub mod products;
