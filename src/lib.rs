//! Builder for dashboard "stat" panel configuration objects.
//!
//! [`domain::stat_panel::StatPanel`] is the core: create one from
//! [`domain::params::StatPanelParams`], then extend it with the `add_*`
//! operations. The application and infrastructure layers load panel
//! definitions from a file and serialize the resulting panel list.
pub mod application;
pub mod domain;
pub mod infrastructure;
