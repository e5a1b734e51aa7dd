//! # References
//! - <https://gitlab.freedesktop.org/mesa/mesa/-/tree/main/src/amd/registers>

/// Input locations
pub mod input {
    /// Register database read when no input path is given (GFX6 / Southern Islands)
    pub const DEFAULT_PATH: &str = "/boot/home/downloads/mesa-master/src/amd/registers/gfx6.json";
}

/// Generated C source
pub mod output {
    /// Lookup function the case lines are pasted into
    pub const DEFAULT_FUNCTION: &str = "RadeonGetRegName";

    /// Indentation of the `switch` and `return` statements in the function body
    pub const BODY_INDENT: &str = "\t";

    /// Indentation of a case line inside the generated function body
    pub const CASE_INDENT: &str = "\t\t";
}
