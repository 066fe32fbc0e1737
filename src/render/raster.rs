use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;

use crate::{
    card::FrameSnapshot,
    foundation::error::{KeepsakeError, KeepsakeResult},
    render::svg::snapshot_svg,
};

/// Largest raster edge we are willing to allocate.
const MAX_DIM: u32 = 16_384;

/// Straight-alpha RGBA8 image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RasterFrame {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn save_png(&self, path: &Path) -> KeepsakeResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Rasterizes snapshot SVGs with resvg. Holds the font database so text is shaped once
/// per process, not once per frame.
#[derive(Clone, Debug)]
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    /// Rasterizer using the fonts installed on the system.
    pub fn new() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Rasterizer with no fonts at all; text is dropped.
    pub fn without_fonts() -> Self {
        Self {
            fontdb: Arc::new(usvg::fontdb::Database::new()),
        }
    }

    #[tracing::instrument(level = "debug", skip(self, snap), fields(now = snap.now.0))]
    pub fn render_snapshot(&self, snap: &FrameSnapshot) -> KeepsakeResult<RasterFrame> {
        let svg = snapshot_svg(snap);
        self.render_svg(&svg)
    }

    pub fn render_svg(&self, svg: &str) -> KeepsakeResult<RasterFrame> {
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg.as_bytes(), &opts)
            .map_err(|e| KeepsakeError::render(format!("parse snapshot svg: {e}")))?;

        let size = tree.size();
        let width = to_px(size.width())?;
        let height = to_px(size.height())?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| KeepsakeError::render("failed to allocate pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        let mut data = pixmap.take();
        unpremultiply_rgba8_in_place(&mut data);
        Ok(RasterFrame {
            width,
            height,
            data,
        })
    }
}

fn to_px(v: f32) -> KeepsakeResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(KeepsakeError::render("svg has invalid width/height"));
    }
    let px = (v.ceil() as u32).max(1);
    if px > MAX_DIM {
        return Err(KeepsakeError::render(format!(
            "raster size too large: {px} (max {MAX_DIM})"
        )));
    }
    Ok(px)
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
