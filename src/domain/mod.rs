//! Domain entities and query values shared by the provider and the façade.

pub mod user;
