use egui::ColorImage;
use image::imageops::FilterType;
use image::DynamicImage;
use std::path::{Path, PathBuf};

use crate::config::config::{FULL_MAX_HEIGHT, FULL_MAX_WIDTH, THUMBNAIL_EDGE};
use crate::core::image_format::ImageFormat;

/// Para qué se decodifica la imagen: el visor a tamaño completo o la
/// miniatura de la cuadrícula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTarget {
    FullSize,
    Thumbnail,
}

impl LoadTarget {
    fn resize(self, img: DynamicImage) -> DynamicImage {
        match self {
            // Limitar el tamaño de la textura; más allá no aporta en pantalla
            LoadTarget::FullSize => {
                if img.width() > FULL_MAX_WIDTH || img.height() > FULL_MAX_HEIGHT {
                    img.resize(FULL_MAX_WIDTH, FULL_MAX_HEIGHT, FilterType::Triangle)
                } else {
                    img
                }
            }
            LoadTarget::Thumbnail => img.thumbnail(THUMBNAIL_EDGE, THUMBNAIL_EDGE),
        }
    }
}

pub trait ImageLoader: Send + Sync {
    fn load(&self, path: &Path, target: LoadTarget) -> Result<ColorImage, LoadError>;
    fn supports_format(&self, format: ImageFormat) -> bool;
}

#[derive(Debug)]
pub enum LoadError {
    IoError(std::io::Error),
    DecodeError(String),
    FormatError(String),
    UnsupportedFormat,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::IoError(e) => write!(f, "Error de E/S: {}", e),
            LoadError::DecodeError(msg) => write!(f, "Error de decodificación: {}", msg),
            LoadError::FormatError(msg) => write!(f, "Error de formato: {}", msg),
            LoadError::UnsupportedFormat => write!(f, "Formato no soportado"),
        }
    }
}

impl std::error::Error for LoadError {}

pub struct RasterImageLoader;

impl ImageLoader for RasterImageLoader {
    fn load(&self, path: &Path, target: LoadTarget) -> Result<ColorImage, LoadError> {
        use image::ImageReader;

        let reader = ImageReader::open(path).map_err(LoadError::IoError)?;

        let reader = reader
            .with_guessed_format()
            .map_err(|e| LoadError::FormatError(e.to_string()))?;

        let img = reader
            .decode()
            .map_err(|e| LoadError::DecodeError(e.to_string()))?;

        let img = target.resize(img);

        let rgba_img = img.to_rgba8();
        let size = [rgba_img.width() as usize, rgba_img.height() as usize];
        let color_image = ColorImage::from_rgba_unmultiplied(size, rgba_img.as_raw());

        Ok(color_image)
    }

    fn supports_format(&self, format: ImageFormat) -> bool {
        // Todos los formatos activos son rasterizados
        matches!(
            format,
            ImageFormat::Jpeg
                | ImageFormat::Png
                | ImageFormat::Bmp
                | ImageFormat::Gif
                | ImageFormat::Tiff
                | ImageFormat::Webp
        )
    }
}

pub struct ImageLoaderFactory {
    // Arc para compartir la lista de cargadores entre hilos de trabajo
    loaders: std::sync::Arc<Vec<Box<dyn ImageLoader>>>,
}

impl ImageLoaderFactory {
    pub fn new() -> Self {
        Self {
            loaders: std::sync::Arc::new(vec![Box::new(RasterImageLoader)]),
        }
    }

    pub fn load_image(&self, path: PathBuf, target: LoadTarget) -> Option<(PathBuf, ColorImage)> {
        let format = ImageFormat::from_path(&path)?;

        for loader in self.loaders.iter() {
            if loader.supports_format(format) {
                match loader.load(&path, target) {
                    Ok(color_image) => return Some((path, color_image)),
                    Err(e) => {
                        eprintln!("Error cargando {}: {}", path.display(), e);
                        return None;
                    }
                }
            }
        }

        eprintln!(
            "Error cargando {}: {}",
            path.display(),
            LoadError::UnsupportedFormat
        );
        None
    }
}

impl Clone for ImageLoaderFactory {
    fn clone(&self) -> Self {
        Self {
            loaders: std::sync::Arc::clone(&self.loaders),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_test_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn loads_small_image_at_original_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_png(dir.path(), "chica.png", 4, 3);

        let loaded = RasterImageLoader.load(&path, LoadTarget::FullSize).unwrap();
        assert_eq!(loaded.size, [4, 3]);
    }

    #[test]
    fn thumbnail_target_bounds_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_png(dir.path(), "grande.png", 640, 480);

        let loaded = RasterImageLoader.load(&path, LoadTarget::Thumbnail).unwrap();
        assert!(loaded.size[0] <= THUMBNAIL_EDGE as usize);
        assert!(loaded.size[1] <= THUMBNAIL_EDGE as usize);
    }

    #[test]
    fn factory_skips_unsupported_extension() {
        let factory = ImageLoaderFactory::new();
        let result = factory.load_image(PathBuf::from("documento.pdf"), LoadTarget::FullSize);
        assert!(result.is_none());
    }

    #[test]
    fn factory_reports_missing_file_as_none() {
        let factory = ImageLoaderFactory::new();
        let result = factory.load_image(PathBuf::from("no_existe.png"), LoadTarget::FullSize);
        assert!(result.is_none());
    }
}
