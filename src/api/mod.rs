pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::build_router;

#[cfg(test)]
mod access_control_tests;
