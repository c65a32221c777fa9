//! Data Transfer Objects for request/response serialization.

pub mod snippet_dto;

pub use snippet_dto::*;
