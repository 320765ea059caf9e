pub mod auth;
pub mod http_client;
pub mod renderer;
pub mod requests;
pub mod value_range_factory;
