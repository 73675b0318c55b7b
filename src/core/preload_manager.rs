use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use egui::{ColorImage, Context, TextureHandle};
use rayon::prelude::*;

use crate::core::gallery::Gallery;
use crate::core::image_cache::ImageCache;
use crate::core::image_loader_factory::{ImageLoaderFactory, LoadTarget};

/// Carga imágenes en segundo plano y las entrega como texturas en el hilo de
/// la interfaz. Una instancia decodifica a tamaño completo para el visor y
/// otra en modo miniatura alimenta la cuadrícula.
pub struct PreloadManager {
    image_receiver: mpsc::Receiver<(PathBuf, ColorImage)>,
    image_sender: mpsc::Sender<(PathBuf, ColorImage)>,
    loading_paths: Arc<Mutex<HashSet<PathBuf>>>,
    preload_range: usize,
    target: LoadTarget,
    loader_factory: ImageLoaderFactory,
}

impl PreloadManager {
    pub fn new(preload_range: usize, target: LoadTarget) -> Self {
        let (sender, receiver) = mpsc::channel();

        Self {
            image_receiver: receiver,
            image_sender: sender,
            loading_paths: Arc::new(Mutex::new(HashSet::new())),
            preload_range,
            target,
            loader_factory: ImageLoaderFactory::new(),
        }
    }

    /// Carga la imagen actual y sus vecinas. La vecindad sigue la navegación
    /// circular de la galería: las vecinas de la primera imagen son la última
    /// y la segunda.
    pub fn preload_images_around_index(
        &self,
        gallery: &Gallery,
        current_index: usize,
        image_cache: &ImageCache<TextureHandle>,
    ) {
        if gallery.is_empty() {
            return;
        }

        let paths_to_load: Vec<PathBuf> = indices_around(current_index, self.preload_range, gallery.len())
            .into_iter()
            .filter_map(|index| gallery.get(index))
            .map(|item| item.full_path().to_path_buf())
            .filter(|path| !image_cache.contains(path))
            .collect();

        if !paths_to_load.is_empty() {
            self.spawn_loading_thread(paths_to_load);
        }
    }

    /// Encola todas las entradas que aún no tienen textura (miniaturas).
    pub fn preload_all(&self, gallery: &Gallery, image_cache: &ImageCache<TextureHandle>) {
        let paths_to_load: Vec<PathBuf> = gallery
            .items()
            .iter()
            .map(|item| item.full_path().to_path_buf())
            .filter(|path| !image_cache.contains(path))
            .collect();

        if !paths_to_load.is_empty() {
            self.spawn_loading_thread(paths_to_load);
        }
    }

    fn spawn_loading_thread(&self, paths: Vec<PathBuf>) {
        let sender = self.image_sender.clone();
        let loading_paths = Arc::clone(&self.loading_paths);
        let factory = self.loader_factory.clone();
        let target = self.target;

        thread::spawn(move || {
            paths
                .into_par_iter()
                .filter_map(|path| {
                    // Evitar cargas duplicadas de peticiones anteriores
                    {
                        let mut loading = loading_paths.lock().unwrap();
                        if loading.contains(&path) {
                            return None;
                        }
                        loading.insert(path.clone());
                    }

                    let result = factory.load_image(path.clone(), target);

                    {
                        let mut loading = loading_paths.lock().unwrap();
                        loading.remove(&path);
                    }

                    result
                })
                .for_each(|loaded_image| {
                    if sender.send(loaded_image).is_err() {
                        return; // El receptor se ha cerrado
                    }
                });
        });
    }

    /// Vuelca las imágenes decodificadas al caché de texturas. Debe llamarse
    /// desde el hilo de la interfaz en cada fotograma.
    pub fn process_loaded_images(
        &self,
        ctx: &Context,
        image_cache: &mut ImageCache<TextureHandle>,
    ) {
        while let Ok((path, color_image)) = self.image_receiver.try_recv() {
            let texture = ctx.load_texture(
                &format!("image_{}", path.display()),
                color_image,
                egui::TextureOptions::LINEAR,
            );
            image_cache.insert(path, texture);
        }
    }
}

/// Índices a precargar alrededor de `current`, con envoltura circular y la
/// imagen actual en primer lugar.
pub fn indices_around(current: usize, range: usize, len: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }

    let current = current.min(len - 1);
    let mut indices = vec![current];

    for offset in 1..=range {
        let next = (current + offset) % len;
        let prev = (current + len - (offset % len)) % len;
        for index in [next, prev] {
            if !indices.contains(&index) {
                indices.push(index);
            }
        }
    }

    indices
}
