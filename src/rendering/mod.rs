pub mod grid_svg;
pub mod svg_to_png;

pub use grid_svg::{GridSvg, RenderOptions};
pub use svg_to_png::SvgRasterizer;
