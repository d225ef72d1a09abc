//! Loaded kernel module listing via `lsmod`.

use crate::exec::{self, ExecError};

/// One data row of `lsmod` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedModule {
    /// Module name
    pub name: String,

    /// Module size in bytes
    pub size: u64,

    /// Modules depending on this one
    pub used_by: Vec<String>,
}

impl LoadedModule {
    /// Dependent modules joined for display, `-` when nothing uses this one.
    pub fn used_by_display(&self) -> String {
        if self.used_by.is_empty() {
            "-".to_string()
        } else {
            self.used_by.join(",")
        }
    }
}

/// Run `lsmod` once and parse every module row, keeping the command's
/// native output order. The first line is the column header and is skipped.
pub fn loaded_modules() -> Result<Vec<LoadedModule>, ExecError> {
    let stdout = exec::capture_stdout("lsmod", &[])?;
    Ok(parse_lsmod_output(&stdout))
}

fn parse_lsmod_output(output: &str) -> Vec<LoadedModule> {
    output.lines().skip(1).filter_map(parse_lsmod_line).collect()
}

/// Parse one `lsmod` data line: `name size used_count [users]`.
fn parse_lsmod_line(line: &str) -> Option<LoadedModule> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return None;
    }

    let name = parts[0].to_string();
    let size = parts[1].parse().unwrap_or(0);
    let used_by = parts[3..]
        .iter()
        .flat_map(|token| token.split(','))
        .filter(|user| !user.is_empty() && *user != "-")
        .map(str::to_string)
        .collect();

    Some(LoadedModule {
        name,
        size,
        used_by,
    })
}
