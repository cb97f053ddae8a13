//! DTO modules that bridge the façade services with the RPC surface.

pub mod user;
