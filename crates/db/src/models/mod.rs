//! Document structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` document struct matching the stored JSON
//! - A `Deserialize` create DTO (client-supplied ids are ignored)
//! - A `Deserialize` update DTO (all `Option` fields) merged onto the document

pub mod movie;
pub mod review;
pub mod user;
