use crate::config::config::{MAX_ZOOM, MIN_ZOOM, ZOOM_IDENTITY_EPSILON, ZOOM_STEP};

/// Nivel de zoom del lightbox, siempre dentro de `[MIN_ZOOM, MAX_ZOOM]`.
/// Construirlo ya recorta el valor, así que no hace falta volver a comprobar
/// los límites en los puntos de uso.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevel(f32);

impl ZoomLevel {
    pub fn new(value: f32) -> Self {
        let value = if value.is_finite() { value } else { MIN_ZOOM };
        Self(value.clamp(MIN_ZOOM, MAX_ZOOM))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM
    }

    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM
    }

    /// Un valor casi exactamente 1.0 se dibuja sin escala.
    pub fn is_identity(self) -> bool {
        (self.0 - 1.0).abs() < ZOOM_IDENTITY_EPSILON
    }

    pub fn zoom_in(self) -> Self {
        Self::new(self.0 + ZOOM_STEP)
    }

    pub fn zoom_out(self) -> Self {
        Self::new(self.0 - ZOOM_STEP)
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(MIN_ZOOM)
    }
}
