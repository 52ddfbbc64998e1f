//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO as received from clients
//! - A validated insert struct the repository accepts

pub mod generated_prompt;
pub mod template;
