use crate::assets::AssetLoader;
use paint_grid::{GradientKind, GridBuilder, Rgb};
use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use std::str::FromStr;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Raster appearance
    pub render: RenderConfig,

    /// Output file locations
    pub output: OutputConfig,

    /// Values used when the CLI does not supply them
    pub defaults: DefaultsConfig,
}

/// Raster appearance shared by the labeled and plain images
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Pixel size of one grid cell
    pub cell_size: u32,

    /// Label font size in pixels
    pub font_size: u32,

    /// CSS font-family list for labels
    pub font_family: String,

    /// Grid line color
    #[serde(deserialize_with = "de_from_str")]
    pub border_color: Rgb,

    /// Label text color
    #[serde(deserialize_with = "de_from_str")]
    pub label_color: Rgb,

    /// Canvas color behind the cells
    #[serde(deserialize_with = "de_from_str")]
    pub background: Rgb,

    /// Re-compress PNGs with oxipng
    pub optimize: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: 60,
            font_size: 12,
            font_family: "Arial, sans-serif".to_string(),
            border_color: Rgb::BLACK,
            label_color: Rgb::BLACK,
            background: Rgb::WHITE,
            optimize: true,
        }
    }
}

/// Where exported files go
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory, created if missing
    pub dir: PathBuf,

    /// File name of the raster with grid lines and labels
    pub labeled: String,

    /// File name of the raster without grid lines or labels
    pub plain: String,

    /// File name of the JSON legend; `None` disables it
    pub legend: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            labeled: "pixel_art.png".to_string(),
            plain: "pixel_art_plain.png".to_string(),
            legend: Some("pixel_art_legend.json".to_string()),
        }
    }
}

/// Fallbacks for grid parameters the CLI leaves out
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DefaultsConfig {
    #[serde(deserialize_with = "de_from_str")]
    pub gradient: GradientKind,

    /// Palette entries generated per stop pair
    pub subdivisions: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            gradient: GradientKind::default(),
            subdivisions: GridBuilder::DEFAULT_SUBDIVISIONS,
        }
    }
}

/// Deserialize any `FromStr` type from a YAML string
fn de_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        source = %loader
                            .config_file()
                            .map(|p| p.display().to_string())
                            .unwrap_or_else(|| "embedded".to_string()),
                        cell_size = config.render.cell_size,
                        out_dir = %config.output.dir.display(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
