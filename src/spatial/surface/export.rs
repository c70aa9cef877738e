use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use serde::{Deserialize, Serialize};

use crate::core::PadError;

use super::*;

/// Quality a browser uses for `toDataURL("image/jpeg")` when none is given
pub const DEFAULT_JPEG_QUALITY: u8 = 92;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossless; keeps hard cell edges intact
    #[default]
    Png,
    /// Lossy; what `toDataURL("image/jpeg")` downloads
    Jpeg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

impl RasterSurface {
    pub fn export_image(&self, format: ExportFormat) -> Result<Vec<u8>, PadError> {
        self.export_image_with_quality(format, DEFAULT_JPEG_QUALITY)
    }

    /// Encode the pixels as they are right now. `jpeg_quality` is ignored for PNG.
    pub fn export_image_with_quality(
        &self,
        format: ExportFormat,
        jpeg_quality: u8,
    ) -> Result<Vec<u8>, PadError> {
        let rgb = self.rgb_bytes();
        let mut out = Vec::new();

        match format {
            ExportFormat::Png => {
                PngEncoder::new(&mut out).write_image(
                    &rgb,
                    self.width,
                    self.height,
                    ExtendedColorType::Rgb8,
                )?;
            }
            ExportFormat::Jpeg => {
                JpegEncoder::new_with_quality(&mut out, jpeg_quality.clamp(1, 100)).write_image(
                    &rgb,
                    self.width,
                    self.height,
                    ExtendedColorType::Rgb8,
                )?;
            }
        }

        log::debug!(
            "exported {}x{} surface as {} ({} bytes)",
            self.width,
            self.height,
            format.extension(),
            out.len()
        );
        Ok(out)
    }

    /// Tightly packed RGB, row-major
    #[cfg(not(feature = "parallel"))]
    pub fn rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.size * 3);
        for &p in &self.pixels {
            let c = Color::from_abgr(p);
            out.extend_from_slice(&[c.r, c.g, c.b]);
        }
        out
    }

    /// Tightly packed RGB, row-major
    #[cfg(feature = "parallel")]
    pub fn rgb_bytes(&self) -> Vec<u8> {
        use rayon::prelude::*;

        self.pixels
            .par_iter()
            .flat_map_iter(|&p| {
                let c = Color::from_abgr(p);
                [c.r, c.g, c.b]
            })
            .collect()
    }
}
