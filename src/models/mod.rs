pub mod config;

pub use config::{AppConfig, DefaultsConfig, OutputConfig, RenderConfig};
