//! Environment configuration for the generator binary.
//!
//! Reads `TRIGRAM_BASE_PATH` and `TRIGRAM_OUTPUT`.

use std::path::PathBuf;

use crate::constants::DEFAULT_OUTPUT_PATH;
use crate::error::{TableError, TableResult};

/// Read `TRIGRAM_BASE_PATH` (default `"."`) and chdir into it so relative
/// output paths resolve against it.
pub fn init_base_path() -> TableResult<PathBuf> {
    let base_path = std::env::var("TRIGRAM_BASE_PATH").unwrap_or_else(|_| ".".to_string());
    let path = PathBuf::from(&base_path);
    std::env::set_current_dir(&path).map_err(|source| TableError::BasePath {
        path: path.clone(),
        source,
    })?;
    if let Ok(cwd) = std::env::current_dir() {
        tracing::debug!(base_path = %base_path, cwd = %cwd.display(), "working directory");
    }
    Ok(path)
}

/// Output path: explicit flag, else `TRIGRAM_OUTPUT`, else `table.json`.
pub fn output_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("TRIGRAM_OUTPUT").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_flag_wins() {
        let p = output_path(Some(PathBuf::from("out/custom.json")));
        assert_eq!(p, PathBuf::from("out/custom.json"));
    }
}
