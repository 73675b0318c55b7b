use std::path::{Path, PathBuf};

use egui::TextureHandle;
use rfd::FileDialog;

use crate::config::config::*;
use crate::core::file_manager::FileManager;
use crate::core::gallery::Gallery;
use crate::core::image_cache::ImageCache;
use crate::core::image_loader_factory::LoadTarget;
use crate::core::preload_manager::PreloadManager;
use crate::i18n::es::*;
use crate::ui::lightbox::{FocusRequest, LightboxController};

pub struct GalleryApp {
    gallery: Gallery,
    gallery_dir: Option<PathBuf>,
    lightbox: LightboxController,
    full_loader: PreloadManager,
    thumbnail_loader: PreloadManager,
    full_cache: ImageCache<TextureHandle>,
    thumbnail_cache: ImageCache<TextureHandle>,
    show_about: bool,
    // Id del botón de cerrar del último fotograma, destino del foco al abrir
    close_button_id: Option<egui::Id>,
}

impl Default for GalleryApp {
    fn default() -> Self {
        Self {
            gallery: Gallery::default(),
            gallery_dir: None,
            lightbox: LightboxController::new(),
            full_loader: PreloadManager::new(PRELOAD_RANGE, LoadTarget::FullSize),
            thumbnail_loader: PreloadManager::new(0, LoadTarget::Thumbnail),
            full_cache: ImageCache::new(FULL_CACHE_SIZE),
            thumbnail_cache: ImageCache::new(THUMBNAIL_CACHE_SIZE),
            show_about: false,
            close_button_id: None,
        }
    }
}

impl GalleryApp {
    fn load_gallery_from_file(&mut self, ctx: &egui::Context, path: &Path) {
        if let Some(parent) = path.parent() {
            match FileManager::scan_directory(parent) {
                Ok(items) => {
                    let gallery = Gallery::new(items);
                    self.full_cache.clear();
                    self.thumbnail_cache.clear();
                    self.lightbox.set_total_items(gallery.len());
                    self.thumbnail_loader
                        .preload_all(&gallery, &self.thumbnail_cache);
                    self.gallery_dir = Some(parent.to_path_buf());
                    self.gallery = gallery;

                    // Saltar directamente a la imagen elegida en el diálogo
                    if let Some(index) =
                        FileManager::find_index_of_file(self.gallery.items(), path)
                    {
                        self.open_lightbox(ctx, index, None);
                    }
                }
                Err(e) => {
                    eprintln!("Error escaneando directorio: {}", e);
                }
            }
        }
    }

    fn open_lightbox(
        &mut self,
        ctx: &egui::Context,
        index: usize,
        fallback_focus: Option<egui::Id>,
    ) {
        // El control con foco antes de abrir, para devolvérselo al cerrar
        let prior_focus = ctx.memory(|m| m.focused()).or(fallback_focus);
        self.lightbox.open(index, prior_focus);
        self.request_current_image();
    }

    fn step_lightbox(&mut self, delta: i64) {
        self.lightbox.step(delta);
        self.request_current_image();
    }

    fn request_current_image(&mut self) {
        if let Some(index) = self.lightbox.current_index() {
            self.full_loader
                .preload_images_around_index(&self.gallery, index, &self.full_cache);
        }
    }

    fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        use egui::{Key, Modifiers};

        if !self.lightbox.is_open() {
            return;
        }

        if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Escape)) {
            self.lightbox.close();
            return;
        }

        if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::ArrowLeft)) {
            self.step_lightbox(-1);
        }
        if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::ArrowRight)) {
            self.step_lightbox(1);
        }

        // '+' y '=' acercan; '-' y '_' alejan. egui entrega la variante con
        // Shift como la misma tecla lógica, así que se aceptan ambas.
        let zoom_in = ctx.input_mut(|i| {
            i.consume_key(Modifiers::NONE, Key::Plus)
                || i.consume_key(Modifiers::SHIFT, Key::Plus)
                || i.consume_key(Modifiers::NONE, Key::Equals)
        });
        if zoom_in {
            self.lightbox.zoom_in();
        }

        let zoom_out = ctx.input_mut(|i| {
            i.consume_key(Modifiers::NONE, Key::Minus)
                || i.consume_key(Modifiers::SHIFT, Key::Minus)
        });
        if zoom_out {
            self.lightbox.zoom_out();
        }
    }

    /// Aplica el movimiento de foco que dejó pendiente la última transición.
    /// Se ejecuta al principio del fotograma siguiente, cuando los controles
    /// del visor ya existen.
    fn apply_focus_request(&mut self, ctx: &egui::Context) {
        let Some(request) = self.lightbox.take_focus_request() else {
            return;
        };

        let target = match request {
            FocusRequest::DismissControl => self.close_button_id,
            FocusRequest::Restore(id) => Some(id),
        };

        // Sin destino (el control ya no existe) el foco se queda donde está
        if let Some(id) = target {
            ctx.memory_mut(|m| m.request_focus(id));
        }
    }

    fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.show_file_controls(ui, ctx);
                ui.separator();
                self.show_gallery_info(ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(format!("ℹ {}", BTN_ABOUT)).clicked() {
                        self.show_about = true;
                    }
                });
            });
        });
    }

    fn show_file_controls(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if ui.button(format!("📂 {}", BTN_OPEN)).clicked() {
            let (filter_name, extensions) = FileManager::get_supported_file_filter();
            if let Some(path) = FileDialog::new()
                .add_filter(filter_name, &extensions)
                .pick_file()
            {
                self.load_gallery_from_file(ctx, &path);
            }
        }
    }

    fn show_gallery_info(&self, ui: &mut egui::Ui) {
        if !self.gallery.is_empty() {
            ui.label(format!("{} {}", self.gallery.len(), TEXT_IMAGES));
            if let Some(dir) = &self.gallery_dir {
                if let Some(name) = dir.file_name() {
                    ui.label(name.to_string_lossy());
                }
            }
        }
    }

    fn show_main_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.gallery.is_empty() {
                self.show_placeholder_text(ui);
            } else {
                self.show_gallery_grid(ctx, ui);
            }
        });
    }

    fn show_placeholder_text(&self, ui: &mut egui::Ui) {
        ui.vertical_centered_justified(|ui| {
            ui.label("");
            ui.label("");
            if self.gallery_dir.is_some() {
                ui.label(TEXT_EMPTYDIR);
            } else {
                ui.label(TEXT_OPENIMG);
                ui.label(TEXT_CLICKTHUMB);
            }
        });
    }

    fn show_gallery_grid(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        // Mientras el visor está abierto el desplazamiento queda suspendido
        let scroll_enabled = !self.lightbox.scroll_locked();
        let mut clicked: Option<(usize, egui::Id)> = None;

        egui::ScrollArea::vertical()
            .enable_scrolling(scroll_enabled)
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    let size = egui::Vec2::splat(THUMBNAIL_DISPLAY_SIZE);
                    for (index, item) in self.gallery.items().iter().enumerate() {
                        let response = if let Some(texture) =
                            self.thumbnail_cache.get(item.full_path())
                        {
                            let image =
                                egui::Image::from_texture(texture).fit_to_exact_size(size);
                            ui.add(egui::ImageButton::new(image))
                        } else {
                            // Hueco mientras llega la miniatura
                            let (rect, response) =
                                ui.allocate_exact_size(size, egui::Sense::click());
                            ui.painter().rect_filled(
                                rect,
                                egui::CornerRadius::same(4),
                                ui.visuals().faint_bg_color,
                            );
                            response
                        };

                        let response = response.on_hover_text(item.description());
                        if response.clicked() {
                            clicked = Some((index, response.id));
                        }
                    }
                });
            });

        if let Some((index, id)) = clicked {
            self.open_lightbox(ctx, index, Some(id));
        }
    }

    fn show_lightbox(&mut self, ctx: &egui::Context) {
        let item = self
            .lightbox
            .current_index()
            .and_then(|index| self.gallery.get(index).map(|item| (index, item)));

        let Some((index, item)) = item else {
            self.close_button_id = None;
            return;
        };
        let full_path = item.full_path().to_path_buf();
        let description = item.description().to_string();
        let total = self.gallery.len();
        let screen_rect = ctx.screen_rect();

        egui::Area::new(egui::Id::new("lightbox_backdrop"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen_rect.min)
            .show(ctx, |ui| {
                let backdrop = ui.allocate_rect(screen_rect, egui::Sense::click());
                ui.painter().rect_filled(
                    screen_rect,
                    egui::CornerRadius::ZERO,
                    egui::Color32::from_black_alpha(217),
                );

                let mut image_rect = None;
                if let Some(texture) = self.full_cache.get(&full_path) {
                    let available = screen_rect.size() * 0.84;
                    let image_size = texture.size_vec2();
                    let fit = (available.x / image_size.x)
                        .min(available.y / image_size.y)
                        .min(1.0);

                    // Con zoom identidad la imagen se queda en su tamaño ajustado
                    let zoom = self.lightbox.zoom();
                    let scale = if zoom.is_identity() {
                        fit
                    } else {
                        fit * zoom.value()
                    };

                    let final_size = image_size * scale;
                    let rect = egui::Rect::from_center_size(screen_rect.center(), final_size);
                    egui::Image::from_texture(texture)
                        .fit_to_exact_size(final_size)
                        .paint_at(ui, rect);
                    image_rect = Some(rect);
                } else {
                    ui.painter().text(
                        screen_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        TEXT_LOADINGIMG,
                        egui::FontId::proportional(18.0),
                        egui::Color32::WHITE,
                    );
                }

                ui.painter().text(
                    egui::pos2(screen_rect.center().x, screen_rect.max.y - 96.0),
                    egui::Align2::CENTER_CENTER,
                    &description,
                    egui::FontId::proportional(16.0),
                    egui::Color32::WHITE,
                );
                ui.painter().text(
                    egui::pos2(screen_rect.center().x, screen_rect.max.y - 72.0),
                    egui::Align2::CENTER_CENTER,
                    format!("{} / {}", index + 1, total),
                    egui::FontId::proportional(13.0),
                    egui::Color32::GRAY,
                );

                // Clic fuera de la imagen cierra el visor
                if backdrop.clicked() {
                    let over_image = backdrop
                        .interact_pointer_pos()
                        .zip(image_rect)
                        .map_or(false, |(pos, rect)| rect.contains(pos));
                    if !over_image {
                        self.lightbox.close();
                    }
                }
            });

        if !self.lightbox.is_open() {
            self.close_button_id = None;
            return;
        }

        egui::Area::new(egui::Id::new("lightbox_close"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
            .show(ctx, |ui| {
                let response = ui.button(format!("✖ {}", BTN_CLOSE));
                self.close_button_id = Some(response.id);
                if response.clicked() {
                    self.lightbox.close();
                }
            });

        egui::Area::new(egui::Id::new("lightbox_controls"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -16.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button(format!("⬅ {}", BTN_PREV)).clicked() {
                        self.step_lightbox(-1);
                    }

                    let can_zoom_out = self.lightbox.can_zoom_out();
                    if ui
                        .add_enabled(
                            can_zoom_out,
                            egui::Button::new(format!("➖ {}", BTN_ZOOM_OUT)),
                        )
                        .clicked()
                    {
                        self.lightbox.zoom_out();
                    }

                    let can_zoom_in = self.lightbox.can_zoom_in();
                    if ui
                        .add_enabled(
                            can_zoom_in,
                            egui::Button::new(format!("➕ {}", BTN_ZOOM_IN)),
                        )
                        .clicked()
                    {
                        self.lightbox.zoom_in();
                    }

                    if ui.button(format!("{} ➡", BTN_NEXT)).clicked() {
                        self.step_lightbox(1);
                    }
                });
            });
    }

    fn show_about_dialog(&mut self, ctx: &egui::Context) {
        if self.show_about {
            egui::Window::new(BTN_ABOUT)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .min_width(300.0)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(10.0);
                        ui.label(APP_NAME);
                        ui.label(format!("v{}", APP_VERSION));
                        ui.label(format!("{}{}", TEXT_AUTHOR, APP_AUTHOR));
                        ui.label(TEXT_LICENSE);
                        ui.label(TEXT_INFOAPP);
                        ui.add_space(10.0);
                    });

                    ui.with_layout(egui::Layout::bottom_up(egui::Align::RIGHT), |ui| {
                        if ui.button(BTN_CLOSE).clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        self.handle_keyboard_input(ctx);

        // Texturas llegadas de los hilos de carga
        self.full_loader
            .process_loaded_images(ctx, &mut self.full_cache);
        self.thumbnail_loader
            .process_loaded_images(ctx, &mut self.thumbnail_cache);

        self.apply_focus_request(ctx);

        self.show_toolbar(ctx);
        self.show_about_dialog(ctx);
        self.show_main_content(ctx);
        self.show_lightbox(ctx);
    }
}
