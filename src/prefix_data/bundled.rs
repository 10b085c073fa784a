// This module is generated by build/rust_build.rs from the files under /data
include!(concat!(env!("OUT_DIR"), "/bundled_data.rs"));

/// Contents of a bundled data file, by path relative to the data root.
pub(crate) fn bundled_file(relative: &str) -> Option<&'static str> {
    BUNDLED_FILES
        .iter()
        .find(|(path, _)| *path == relative)
        .map(|(_, content)| *content)
}
