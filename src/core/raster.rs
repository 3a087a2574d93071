//! Graustufen-Rasterhintergrund (Base64/Data-URI kodiertes Bild).

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{GrayImage, ImageFormat};
use thiserror::Error;

/// Fehler beim Dekodieren oder Kodieren des Rasters
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Base64-Dekodierung fehlgeschlagen: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Bild-Dekodierung fehlgeschlagen: {0}")]
    Image(#[from] image::ImageError),
    #[error("Pixelpuffer passt nicht zu {width}x{height}")]
    BufferSize { width: u32, height: u32 },
}

/// Dekodiertes Graustufen-Raster
#[derive(Debug, Clone, PartialEq)]
pub struct RasterLayer {
    pub width: u32,
    pub height: u32,
    /// Luma8-Pixel zeilenweise
    pub pixels: Vec<u8>,
}

impl RasterLayer {
    /// Dekodiert Base64 (optional mit `data:`-Präfix) zu einem Graustufenbild.
    pub fn decode(data: &str) -> Result<Self, RasterError> {
        let payload = match data.split_once(";base64,") {
            Some((_, rest)) => rest,
            None => data,
        };
        let bytes = STANDARD.decode(payload.trim())?;
        let gray = image::load_from_memory(&bytes)?.to_luma8();
        Ok(Self {
            width: gray.width(),
            height: gray.height(),
            pixels: gray.into_raw(),
        })
    }

    /// Wie [`decode`](Self::decode), Fehler werden protokolliert und die Ebene bleibt leer.
    pub fn decode_or_blank(data: &str) -> Option<Self> {
        match Self::decode(data) {
            Ok(layer) => {
                log::info!("Raster dekodiert: {}x{}", layer.width, layer.height);
                Some(layer)
            }
            Err(e) => {
                log::error!("Raster konnte nicht dekodiert werden: {}", e);
                None
            }
        }
    }

    /// Kodiert das Raster als PNG-Data-URI.
    pub fn encode_png_data_uri(&self) -> Result<String, RasterError> {
        let image = GrayImage::from_raw(self.width, self.height, self.pixels.clone()).ok_or(
            RasterError::BufferSize {
                width: self.width,
                height: self.height,
            },
        )?;
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
    }
}
