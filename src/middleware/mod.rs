pub mod access;
pub mod cors;
pub mod http;
pub mod token_filter;
