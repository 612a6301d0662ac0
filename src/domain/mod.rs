// Domain layer - stat panel model and builder operations
pub mod error;
pub mod field_config;
pub mod params;
pub mod plugin_version;
pub mod ref_id;
pub mod stat_panel;
