mod bundled;
mod data_source;
mod prefix_data_provider;
pub(crate) mod prefix_file_reader;
pub(crate) mod prefix_map;
mod prefix_map_cache;

pub use data_source::DataSource;
pub use prefix_data_provider::PrefixDataProvider;
pub use prefix_file_reader::PrefixDataError;
