/// Listing cover images
///
/// Covers are drawn cell by cell on a tilted plane, so they are kept as a
/// small grid of colors rather than a GPU texture. Raster files are
/// decoded, cropped to the card's 4:3 aspect and downsampled; anything else
/// gets a generated placeholder.

use iced::Color;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::state::listing::{Listing, PLACEHOLDER_IMAGE};
use crate::state::settings::Settings;

/// Mosaic resolution of a cover (4:3)
pub const COVER_COLUMNS: u32 = 32;
pub const COVER_ROWS: u32 = 24;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {path}: {reason}")]
    Read { path: PathBuf, reason: String },
    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
}

/// Where a card's cover comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Placeholder,
    File(PathBuf),
}

impl ImageSource {
    /// Resolve a listing's image reference against the asset directory.
    ///
    /// Vector images and unresolvable references use the placeholder.
    pub fn resolve(listing: &Listing, settings: &Settings) -> Self {
        let reference = listing.image_or_placeholder();
        if reference == PLACEHOLDER_IMAGE || reference.to_ascii_lowercase().ends_with(".svg") {
            return ImageSource::Placeholder;
        }

        match settings.resolve_asset(reference) {
            Some(path) => ImageSource::File(path),
            None => {
                debug!("No asset directory for {}, using placeholder", reference);
                ImageSource::Placeholder
            }
        }
    }
}

/// Downsampled cover image
#[derive(Debug, Clone, PartialEq)]
pub struct CoverTexture {
    columns: u32,
    rows: u32,
    cells: Vec<Color>,
}

impl CoverTexture {
    /// Neutral gray gradient with a faint frame in the middle
    pub fn placeholder() -> Self {
        let mut cells = Vec::with_capacity((COVER_COLUMNS * COVER_ROWS) as usize);

        for row in 0..COVER_ROWS {
            for col in 0..COVER_COLUMNS {
                let u = col as f32 / (COVER_COLUMNS - 1) as f32;
                let v = row as f32 / (COVER_ROWS - 1) as f32;
                let mut shade = 0.90 - 0.08 * (u + v) / 2.0;

                // Picture glyph: a darker box in the center third
                let in_glyph = (0.38..=0.62).contains(&u) && (0.36..=0.64).contains(&v);
                if in_glyph {
                    shade -= 0.06;
                }

                cells.push(Color::from_rgb(shade, shade, shade + 0.01));
            }
        }

        Self {
            columns: COVER_COLUMNS,
            rows: COVER_ROWS,
            cells,
        }
    }

    /// Build a cover from encoded image bytes
    pub fn from_bytes(bytes: &[u8], path: &Path) -> Result<Self, AssetError> {
        let decoded = image::load_from_memory(bytes).map_err(|e| AssetError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        // Center crop to fill, the same way the card shows it
        let mosaic = decoded
            .resize_to_fill(COVER_COLUMNS, COVER_ROWS, FilterType::Lanczos3)
            .to_rgba8();

        let cells = mosaic
            .pixels()
            .map(|p| Color::from_rgba8(p[0], p[1], p[2], p[3] as f32 / 255.0))
            .collect();

        Ok(Self {
            columns: mosaic.width(),
            rows: mosaic.height(),
            cells,
        })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Color at normalized coordinates; out-of-range input clamps to the edge
    pub fn sample(&self, u: f32, v: f32) -> Color {
        if self.cells.is_empty() {
            return Color::from_rgb(0.9, 0.9, 0.9);
        }

        let col = ((u.clamp(0.0, 1.0) * self.columns as f32) as u32).min(self.columns - 1);
        let row = ((v.clamp(0.0, 1.0) * self.rows as f32) as u32).min(self.rows - 1);
        self.cells[(row * self.columns + col) as usize]
    }
}

/// Read and downsample a cover in the background
pub async fn load_cover(path: PathBuf) -> Result<CoverTexture, AssetError> {
    let bytes = tokio::fs::read(&path).await.map_err(|e| AssetError::Read {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let cover = CoverTexture::from_bytes(&bytes, &path)?;
    info!("🖼️  Loaded cover {}", path.display());
    Ok(cover)
}
