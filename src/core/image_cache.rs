use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Caché acotada con expulsión de la entrada menos usada. Es genérica sobre
/// el valor guardado para poder compartirla entre las texturas del visor y
/// las miniaturas de la cuadrícula.
pub struct ImageCache<T> {
    entries: HashMap<PathBuf, T>,
    max_cache_size: usize,
    access_order: Vec<PathBuf>,
}

impl<T> ImageCache<T> {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_cache_size: max_size.max(1),
            access_order: Vec::new(),
        }
    }

    pub fn get(&mut self, path: &Path) -> Option<&T> {
        if let Some(value) = self.entries.get(path) {
            if let Some(pos) = self.access_order.iter().position(|p| p == path) {
                let path = self.access_order.remove(pos);
                self.access_order.push(path);
            }
            Some(value)
        } else {
            None
        }
    }

    pub fn insert(&mut self, path: PathBuf, value: T) {
        if self.entries.contains_key(&path) {
            // Reemplazo: solo refrescar el orden de acceso
            if let Some(pos) = self.access_order.iter().position(|p| p == &path) {
                let path = self.access_order.remove(pos);
                self.access_order.push(path);
            }
            self.entries.insert(path, value);
            return;
        }

        while self.entries.len() >= self.max_cache_size && !self.access_order.is_empty() {
            let oldest = self.access_order.remove(0);
            self.entries.remove(&oldest);
        }

        self.entries.insert(path.clone(), value);
        self.access_order.push(path);
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.access_order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str) -> PathBuf {
        PathBuf::from(name)
    }

    #[test]
    fn evicts_oldest_entry_when_full() {
        let mut cache: ImageCache<u32> = ImageCache::new(2);
        cache.insert(p("a"), 1);
        cache.insert(p("b"), 2);
        cache.insert(p("c"), 3);

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&p("a")));
        assert!(cache.contains(&p("b")));
        assert!(cache.contains(&p("c")));
    }

    #[test]
    fn get_refreshes_recency() {
        let mut cache: ImageCache<u32> = ImageCache::new(2);
        cache.insert(p("a"), 1);
        cache.insert(p("b"), 2);

        assert_eq!(cache.get(&p("a")), Some(&1));
        cache.insert(p("c"), 3);

        // "b" era la menos reciente tras consultar "a"
        assert!(cache.contains(&p("a")));
        assert!(!cache.contains(&p("b")));
    }

    #[test]
    fn reinsert_replaces_without_growing() {
        let mut cache: ImageCache<u32> = ImageCache::new(2);
        cache.insert(p("a"), 1);
        cache.insert(p("a"), 9);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&p("a")), Some(&9));
    }

    #[test]
    fn clear_empties_everything() {
        let mut cache: ImageCache<u32> = ImageCache::new(2);
        cache.insert(p("a"), 1);
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.get(&p("a")), None);
    }
}
