// Infrastructure layer - configuration loading and output encoding
pub mod config;
pub mod json_output;
