//! Domain logic for the couple photoshoot prompt builder.
//!
//! Pure code only: the option catalog, attribute validation, prompt
//! rendering, the randomizer and template rules. Persistence lives in
//! `duet-db`, HTTP in `duet-api`.

pub mod attributes;
pub mod catalog;
pub mod composer;
pub mod error;
pub mod randomizer;
pub mod template;
pub mod types;
