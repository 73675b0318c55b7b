use std::fs;
use std::path::{Path, PathBuf};

use crate::core::gallery::GalleryItem;
use crate::core::image_format::ImageFormat;

pub struct FileManager;

impl FileManager {
    /// Recorre un directorio y construye las entradas de la galería en orden
    /// alfabético de ruta.
    pub fn scan_directory(dir: &Path) -> Result<Vec<GalleryItem>, std::io::Error> {
        let mut image_paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|e| e.path())
            .filter(|p| ImageFormat::is_supported(p))
            .collect();

        image_paths.sort();

        Ok(image_paths
            .into_iter()
            .map(|path| {
                let description = Self::describe_file(&path);
                GalleryItem::new(path, description)
            })
            .collect())
    }

    pub fn find_index_of_file(items: &[GalleryItem], target: &Path) -> Option<usize> {
        items.iter().position(|item| item.full_path() == target)
    }

    /// Texto descriptivo a partir del nombre del archivo: sin extensión y con
    /// los separadores habituales convertidos en espacios.
    pub fn describe_file(path: &Path) -> String {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .map(|stem| stem.replace(['_', '-'], " "))
            .unwrap_or_default()
    }

    pub fn get_supported_file_filter() -> (&'static str, Vec<&'static str>) {
        ("Imagen", ImageFormat::get_supported_extensions())
    }
}
