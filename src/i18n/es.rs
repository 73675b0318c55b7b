pub const BTN_OPEN: &str = "Abrir imagen";
pub const BTN_PREV: &str = "Anterior";
pub const BTN_NEXT: &str = "Siguiente";
pub const BTN_CLOSE: &str = "Cerrar";
pub const BTN_ZOOM_IN: &str = "Acercar";
pub const BTN_ZOOM_OUT: &str = "Alejar";
pub const BTN_ABOUT: &str = "Acerca de";

pub const TEXT_OPENIMG: &str = "Abre una imagen para ver su carpeta como galería";
pub const TEXT_CLICKTHUMB: &str = "Haz clic en una miniatura para verla en grande";
pub const TEXT_EMPTYDIR: &str = "La carpeta no contiene imágenes compatibles";
pub const TEXT_LOADINGIMG: &str = "Cargando imagen...";
pub const TEXT_IMAGES: &str = "imágenes";
pub const TEXT_AUTHOR: &str = "Autor: ";
pub const TEXT_LICENSE: &str = "Licencia MIT";
pub const TEXT_INFOAPP: &str = "Galería de miniaturas con visor lightbox";
