pub mod args;
pub mod emit;
pub mod error;
pub mod generator;
pub mod load;

// Re-export commonly used types
pub use args::Args;
pub use emit::{case_line, write_cases, write_function};
pub use error::{GenError, Result};
pub use generator::{GeneratorConfig, generate, generate_to, write_database};
pub use load::{load_database, parse_database};
pub use regcase_db::{RegisterDatabase, RegisterMap, RegisterMapping};
