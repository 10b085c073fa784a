/**
 * Validates the prefix data under /data and generates the table of bundled
 * files, which is included by src/prefix_data/bundled.rs
 */

use std::{
    env,
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

// same line rules as at runtime
#[allow(dead_code)]
#[path = "../src/prefix_data/prefix_file_reader.rs"]
mod prefix_file_reader;

use prefix_file_reader::{parse_entries, KeyKind, PrefixDataError};

const DATA_DIR: &str = "data";
const COUNTRIES_DIR: &str = "countries";

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("{path}: {source}")]
    InvalidData { path: String, source: PrefixDataError },

    #[error("Could not write generated table: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Checks every `key|value` line of a data file. Keys of country tables are
/// region codes, every other file is keyed by digit prefixes.
fn validate_data_file(path: &Path, relative: &str) -> Result<usize, BuildError> {
    let kind = if relative.starts_with(COUNTRIES_DIR) {
        KeyKind::Region
    } else {
        KeyKind::Prefix
    };
    let content = fs::read_to_string(path)?;
    let entries = parse_entries(&content, kind).map_err(|source| BuildError::InvalidData {
        path: relative.to_string(),
        source,
    })?;
    Ok(entries.len())
}

fn collect_data_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), BuildError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_data_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    Ok(())
}

fn main() -> Result<(), BuildError> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("set by cargo"));
    let data_root = manifest_dir.join(DATA_DIR);
    println!("cargo:rerun-if-changed={}", DATA_DIR);

    let mut files = Vec::new();
    collect_data_files(&data_root, &mut files)?;
    files.sort();

    let mut generated = String::from("pub(crate) static BUNDLED_FILES: &[(&str, &str)] = &[\n");
    for path in &files {
        let relative = path
            .strip_prefix(&data_root)
            .expect("collected under data root")
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let entries = validate_data_file(path, &relative)?;
        if entries == 0 {
            println!("cargo:warning=data file {} has no entries", relative);
        }
        writeln!(
            generated,
            "    ({:?}, include_str!({:?})),",
            relative,
            path.display().to_string()
        )?;
    }
    generated.push_str("];\n");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("set by cargo"));
    fs::write(out_dir.join("bundled_data.rs"), generated)?;
    Ok(())
}
