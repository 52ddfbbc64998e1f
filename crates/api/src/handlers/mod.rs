pub mod options;
pub mod prompts;
pub mod templates;
