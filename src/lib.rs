pub mod address;
pub mod components;
pub mod error_reader;
pub mod navigation;
pub mod post;
pub mod routes;
