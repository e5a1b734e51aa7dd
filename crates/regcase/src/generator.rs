//! One generator run: load a register database and emit C source for it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use regcase_db::RegisterDatabase;
use tracing::{info, instrument};

use crate::emit::{write_cases, write_function};
use crate::error::{GenError, Result};
use crate::load::load_database;

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Register database to read
    pub input: PathBuf,
    /// Wrap the cases in a lookup function with this name
    pub function: Option<String>,
    /// Output file (stdout when `None`)
    pub output: Option<PathBuf>,
}

/// Run the generator, writing to the configured output.
///
/// The database is fully loaded before the output file is created, so a
/// bad input leaves an existing output file untouched.
///
/// Returns the number of case lines emitted.
#[instrument(level = "debug", skip(config), fields(input = ?config.input))]
pub fn generate(config: &GeneratorConfig) -> Result<usize> {
    let db = load_database(&config.input)?;

    match &config.output {
        Some(path) => {
            info!("Writing output to {:?}", path);
            let file = File::create(path).map_err(|source| GenError::Create {
                path: path.clone(),
                source,
            })?;
            write_database(&db, config, BufWriter::new(file))
        }
        None => {
            let stdout = std::io::stdout();
            write_database(&db, config, BufWriter::new(stdout.lock()))
        }
    }
}

/// Run the generator, writing to `out`
pub fn generate_to<W: Write>(config: &GeneratorConfig, out: W) -> Result<usize> {
    let db = load_database(&config.input)?;
    write_database(&db, config, out)
}

/// Emit an already loaded database in the configured form
pub fn write_database<W: Write>(
    db: &RegisterDatabase,
    config: &GeneratorConfig,
    mut out: W,
) -> Result<usize> {
    let count = match &config.function {
        Some(name) => write_function(db, name, &mut out)?,
        None => write_cases(db, &mut out)?,
    };
    out.flush()?;

    Ok(count)
}
