use std::path::{Path, PathBuf};

/// Una entrada de la galería: la imagen a resolución completa y su texto
/// descriptivo. El orden en que se crean define el orden de navegación y no
/// cambia durante la vida del controlador.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    full_path: PathBuf,
    description: String,
}

impl GalleryItem {
    pub fn new(full_path: PathBuf, description: String) -> Self {
        Self {
            full_path,
            description,
        }
    }

    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Lista ordenada e inmutable de entradas.
#[derive(Debug, Default)]
pub struct Gallery {
    items: Vec<GalleryItem>,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> GalleryItem {
        GalleryItem::new(PathBuf::from(name), name.to_string())
    }

    #[test]
    fn get_out_of_range_is_none() {
        let gallery = Gallery::new(vec![item("a.png"), item("b.png")]);
        assert_eq!(gallery.len(), 2);
        assert!(gallery.get(2).is_none());
        assert_eq!(gallery.get(1).unwrap().description(), "b.png");
    }

    #[test]
    fn empty_gallery() {
        let gallery = Gallery::default();
        assert!(gallery.is_empty());
        assert!(gallery.get(0).is_none());
    }
}
