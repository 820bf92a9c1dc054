pub mod get_filter_options;

pub use get_filter_options::GetFilterOptions;
