use crate::GeneratorConfig;
use clap::Parser;
use regcase_db::specs::{input, output};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "regcase", about = "Generate C switch cases mapping GPU register addresses to names")]
pub struct Args {
    /// Register database JSON (mesa `src/amd/registers/*.json` layout)
    #[arg(default_value = input::DEFAULT_PATH)]
    pub input: PathBuf,

    /// Wrap the case lines in a complete C lookup function.
    /// The function name defaults to RadeonGetRegName; pass a different one
    /// as `--function=NAME`.
    #[arg(
        long,
        value_name = "NAME",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = output::DEFAULT_FUNCTION
    )]
    pub function: Option<String>,

    /// Write generated code to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.function {
            if !is_c_identifier(name) {
                return Err(format!("--function {:?} is not a valid C identifier", name));
            }
        }
        Ok(())
    }

    /// Convert Args to GeneratorConfig
    pub fn to_generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            input: self.input.clone(),
            function: self.function.clone(),
            output: self.output.clone(),
        }
    }
}

pub fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_fixed_input() {
        let args = Args::try_parse_from(["regcase"]).unwrap();
        assert_eq!(args.input, PathBuf::from(input::DEFAULT_PATH));
        assert_eq!(args.function, None);
        assert_eq!(args.output, None);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn bare_function_flag_uses_default_name() {
        let args = Args::try_parse_from(["regcase", "gfx10.json", "--function"]).unwrap();
        assert_eq!(args.input, PathBuf::from("gfx10.json"));
        assert_eq!(args.function.as_deref(), Some(output::DEFAULT_FUNCTION));
    }

    #[test]
    fn function_flag_does_not_take_input_path() {
        let args = Args::try_parse_from(["regcase", "--function", "gfx10.json"]).unwrap();
        assert_eq!(args.function.as_deref(), Some(output::DEFAULT_FUNCTION));
        assert_eq!(args.input, PathBuf::from("gfx10.json"));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn explicit_function_name() {
        let args = Args::try_parse_from(["regcase", "--function=GetRegName", "-o", "regs.inc"]).unwrap();
        let config = args.to_generator_config();
        assert_eq!(config.function.as_deref(), Some("GetRegName"));
        assert_eq!(config.output, Some(PathBuf::from("regs.inc")));
        assert_eq!(config.input, PathBuf::from(input::DEFAULT_PATH));
    }

    #[test]
    fn rejects_invalid_function_name() {
        let args = Args::try_parse_from(["regcase", "--function=2fast"]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn c_identifiers() {
        assert!(is_c_identifier("RadeonGetRegName"));
        assert!(is_c_identifier("_reg_name2"));
        assert!(!is_c_identifier(""));
        assert!(!is_c_identifier("get-reg"));
        assert!(!is_c_identifier("9lives"));
    }
}
