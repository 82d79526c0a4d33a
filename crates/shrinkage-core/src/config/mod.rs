//! Configuration system for shrinkage.
//! TOML-based, every field optional with compiled defaults.

pub mod loader_config;
pub mod report_config;
pub mod shrinkage_config;

pub use loader_config::LoaderConfig;
pub use report_config::ReportConfig;
pub use shrinkage_config::ShrinkageConfig;
