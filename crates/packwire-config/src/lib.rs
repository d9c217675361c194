pub mod assembler;
pub mod config;
pub mod dev;
pub mod entry;
pub mod error;
pub mod mode;
pub mod output;
pub mod overrides;
pub mod pattern;
pub mod plugin;
pub mod rules;
pub mod validation;

// Re-export main types
pub use assembler::{ConfigAssembler, assemble, assemble_named};
pub use config::*;
pub use dev::*;
pub use entry::EntryGroup;
pub use error::*;
pub use mode::BuildMode;
pub use output::*;
pub use overrides::{ENV_PREFIX, OVERRIDES_FILE_NAME, Overrides};
pub use pattern::Pattern;
pub use plugin::*;
pub use rules::*;

// Re-export validation
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
