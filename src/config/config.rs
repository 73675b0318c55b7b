pub const APP_NAME: &str = "Galería de Imágenes";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_AUTHOR: &str = "thepuag";

// Límites del zoom del lightbox; el paso produce 7 niveles alcanzables (1.0 a 2.5)
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 2.5;
pub const ZOOM_STEP: f32 = 0.25;
// Un zoom tan cercano a 1.0 se trata como identidad y no se aplica escala
pub const ZOOM_IDENTITY_EPSILON: f32 = 0.001;

// Las imágenes a pantalla completa se limitan a este tamaño al decodificar
pub const FULL_MAX_WIDTH: u32 = 1920;
pub const FULL_MAX_HEIGHT: u32 = 1080;

// Miniaturas: lado máximo al decodificar y tamaño en pantalla
pub const THUMBNAIL_EDGE: u32 = 256;
pub const THUMBNAIL_DISPLAY_SIZE: f32 = 128.0;

// Cuántas imágenes vecinas se precargan alrededor de la actual
pub const PRELOAD_RANGE: usize = 1;
pub const FULL_CACHE_SIZE: usize = 8;
pub const THUMBNAIL_CACHE_SIZE: usize = 1024;
