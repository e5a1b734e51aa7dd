//! C source emission for register name lookups.
//!
//! Each record becomes one switch arm:
//!
//! ```text
//! case 0x2c8: return "mmVGT_PRIMITIVE_TYPE";
//! ```
//!
//! Names are copied verbatim. Addresses are printed as lowercase hex with a
//! `0x` prefix.

use std::io::Write;

use regcase_db::specs::output::{BODY_INDENT, CASE_INDENT};
use regcase_db::{RegisterDatabase, RegisterMapping};
use tracing::{debug, trace};

use crate::error::Result;

/// Format a single `case` line (without trailing newline)
pub fn case_line(mapping: &RegisterMapping) -> String {
    format!("case {:#x}: return \"{}\";", mapping.address(), mapping.name)
}

/// Write one `case` line per record, in input order.
///
/// Returns the number of lines written.
pub fn write_cases<W: Write>(db: &RegisterDatabase, out: &mut W) -> Result<usize> {
    write_lines(db, "", out)
}

/// Write a complete C lookup function wrapping the `case` lines.
///
/// Unknown registers fall through to `return NULL;`.
pub fn write_function<W: Write>(db: &RegisterDatabase, name: &str, out: &mut W) -> Result<usize> {
    debug!("Emitting lookup function {}", name);

    writeln!(out, "const char *{}(uint32_t reg)", name)?;
    writeln!(out, "{{")?;
    writeln!(out, "{}switch (reg) {{", BODY_INDENT)?;
    let count = write_lines(db, CASE_INDENT, out)?;
    writeln!(out, "{}}}", BODY_INDENT)?;
    writeln!(out, "{}return NULL;", BODY_INDENT)?;
    writeln!(out, "}}")?;

    Ok(count)
}

fn write_lines<W: Write>(db: &RegisterDatabase, indent: &str, out: &mut W) -> Result<usize> {
    for mapping in db.iter() {
        let line = case_line(mapping);
        trace!("{}", line);
        writeln!(out, "{}{}", indent, line)?;
    }
    debug!("Emitted {} case lines", db.len());
    Ok(db.len())
}
