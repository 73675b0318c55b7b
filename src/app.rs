use crate::config::config::*;
use crate::ui::viewer::GalleryApp;

pub fn run() {
    // Grupo de hilos para decodificar imágenes; se reserva un núcleo para la interfaz
    let _ = rayon::ThreadPoolBuilder::new()
        .num_threads(num_cpus::get().saturating_sub(1).max(1))
        .build_global();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        APP_NAME,
        options,
        Box::new(|_cc| Ok(Box::new(GalleryApp::default()))),
    );

    // Manejo de errores silencioso en release
    if let Err(_e) = result {
        #[cfg(debug_assertions)]
        eprintln!("Error al iniciar la aplicación: {}", _e);

        // En release, salimos silenciosamente
        #[cfg(not(debug_assertions))]
        std::process::exit(1);
    }
}
