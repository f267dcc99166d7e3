//! REST API layer

pub mod context;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod routes;
pub mod url;
