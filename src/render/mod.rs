//! Frame snapshots to pixels: snapshot -> SVG document -> resvg raster.

pub mod raster;
pub mod svg;
