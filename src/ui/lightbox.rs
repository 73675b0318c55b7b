use egui::Id;

use crate::ui::navigation_manager::NavigationManager;
use crate::ui::zoom::ZoomLevel;

/// Movimiento de foco pendiente. Se aplica en el siguiente fotograma para no
/// pelear con el manejo de foco propio de egui durante la transición.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest {
    /// Llevar el foco al botón de cerrar del lightbox
    DismissControl,
    /// Devolver el foco al control que lo tenía antes de abrir
    Restore(Id),
}

/// Máquina de estados del lightbox: cerrado o abierto sobre una entrada de la
/// galería, con zoom acotado. Todas las operaciones degradan a no-op ante
/// entradas inválidas (galería vacía, pasos con el visor cerrado) en lugar de
/// fallar: es un componente de interfaz.
pub struct LightboxController {
    navigation: NavigationManager,
    zoom: ZoomLevel,
    prior_focus: Option<Id>,
    pending_focus: Option<FocusRequest>,
}

impl LightboxController {
    pub fn new() -> Self {
        Self {
            navigation: NavigationManager::new(),
            zoom: ZoomLevel::default(),
            prior_focus: None,
            pending_focus: None,
        }
    }

    /// Reinicia el controlador para una galería con `total` entradas. El
    /// visor queda cerrado.
    pub fn set_total_items(&mut self, total: usize) {
        self.navigation.set_total(total);
        self.zoom = ZoomLevel::default();
        self.prior_focus = None;
        self.pending_focus = None;
    }

    pub fn is_open(&self) -> bool {
        self.navigation.current_index().is_some()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.navigation.current_index()
    }

    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn can_zoom_in(&self) -> bool {
        !self.zoom.is_max()
    }

    pub fn can_zoom_out(&self) -> bool {
        !self.zoom.is_min()
    }

    /// El desplazamiento de la página queda suspendido mientras el visor está
    /// abierto.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Abre el visor sobre `index` (un índice fuera de rango se ajusta).
    /// `prior_focus` es el control que tenía el foco, para restaurarlo al
    /// cerrar. Con la galería vacía, o ya abierto, no hace nada.
    pub fn open(&mut self, index: usize, prior_focus: Option<Id>) {
        if self.is_open() || self.navigation.is_empty() {
            return;
        }

        self.prior_focus = prior_focus;
        if self.navigation.open_at(index).is_some() {
            self.display_item();
            self.pending_focus = Some(FocusRequest::DismissControl);
        }
    }

    /// Cierra el visor y deja pendiente la devolución del foco. Cerrar dos
    /// veces es idempotente.
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }

        self.navigation.clear();
        self.zoom = ZoomLevel::default();
        self.pending_focus = self.prior_focus.take().map(FocusRequest::Restore);
    }

    /// Pasa a la imagen vecina con envoltura circular. Cerrado, no hace nada.
    pub fn step(&mut self, delta: i64) {
        if !self.is_open() {
            return;
        }

        if self.navigation.step(delta).is_some() {
            self.display_item();
        }
    }

    // Cada imagen recién mostrada comienza sin zoom
    fn display_item(&mut self) {
        self.zoom = ZoomLevel::default();
    }

    /// Fija el zoom, recortado a los límites. Cerrado, no hace nada.
    pub fn set_zoom(&mut self, requested: f32) {
        if !self.is_open() {
            return;
        }
        self.zoom = ZoomLevel::new(requested);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom.zoom_in().value());
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom.zoom_out().value());
    }

    /// Retira el movimiento de foco pendiente, si lo hay. La vista lo aplica
    /// en el fotograma siguiente a la transición.
    pub fn take_focus_request(&mut self) -> Option<FocusRequest> {
        self.pending_focus.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(total: usize) -> LightboxController {
        let mut controller = LightboxController::new();
        controller.set_total_items(total);
        controller
    }

    #[test]
    fn starts_closed_with_identity_zoom() {
        let controller = controller(4);
        assert!(!controller.is_open());
        assert_eq!(controller.current_index(), None);
        assert_eq!(controller.zoom().value(), 1.0);
        assert!(!controller.scroll_locked());
    }

    #[test]
    fn open_on_empty_gallery_is_a_noop() {
        let mut controller = controller(0);
        controller.open(0, None);
        assert!(!controller.is_open());
        assert_eq!(controller.take_focus_request(), None);
    }

    #[test]
    fn open_normalizes_out_of_range_index() {
        let mut controller = controller(4);
        controller.open(7, None);
        assert_eq!(controller.current_index(), Some(0));
    }

    #[test]
    fn open_requests_focus_on_dismiss_control() {
        let mut controller = controller(4);
        controller.open(2, Some(Id::new("miniatura-2")));
        assert!(controller.is_open());
        assert!(controller.scroll_locked());
        assert_eq!(
            controller.take_focus_request(),
            Some(FocusRequest::DismissControl)
        );
        // Solo se entrega una vez
        assert_eq!(controller.take_focus_request(), None);
    }

    #[test]
    fn close_restores_prior_focus_and_resets_state() {
        let thumb = Id::new("miniatura-1");
        let mut controller = controller(4);
        controller.open(1, Some(thumb));
        controller.set_zoom(2.0);
        controller.close();

        assert!(!controller.is_open());
        assert_eq!(controller.current_index(), None);
        assert_eq!(controller.zoom().value(), 1.0);
        assert!(!controller.scroll_locked());
        assert_eq!(
            controller.take_focus_request(),
            Some(FocusRequest::Restore(thumb))
        );
    }

    #[test]
    fn close_is_idempotent() {
        let mut controller = controller(4);
        controller.open(1, Some(Id::new("miniatura-1")));
        controller.close();
        let _ = controller.take_focus_request();

        controller.close();
        assert!(!controller.is_open());
        assert_eq!(controller.current_index(), None);
        assert_eq!(controller.zoom().value(), 1.0);
        assert_eq!(controller.take_focus_request(), None);
    }

    #[test]
    fn step_while_closed_has_no_effect() {
        let mut controller = controller(4);
        controller.step(1);
        assert!(!controller.is_open());
        assert_eq!(controller.current_index(), None);
    }

    #[test]
    fn step_wraps_in_both_directions() {
        // Galería de 4: A, B, C, D
        let mut controller = controller(4);
        controller.open(0, None);
        assert_eq!(controller.current_index(), Some(0));

        controller.step(-1);
        assert_eq!(controller.current_index(), Some(3));

        controller.step(1);
        assert_eq!(controller.current_index(), Some(0));
        controller.step(1);
        assert_eq!(controller.current_index(), Some(1));
    }

    #[test]
    fn stepping_n_times_closes_the_cycle() {
        let mut controller = controller(5);
        controller.open(2, None);
        for _ in 0..5 {
            controller.step(1);
        }
        assert_eq!(controller.current_index(), Some(2));
        for _ in 0..5 {
            controller.step(-1);
        }
        assert_eq!(controller.current_index(), Some(2));
    }

    #[test]
    fn displaying_a_new_item_resets_zoom() {
        let mut controller = controller(4);
        controller.open(0, None);
        controller.set_zoom(2.0);
        controller.step(1);
        assert_eq!(controller.zoom().value(), 1.0);
    }

    #[test]
    fn zoom_steps_accumulate_and_saturate() {
        let mut controller = controller(4);
        controller.open(0, None);

        controller.zoom_in();
        controller.zoom_in();
        controller.zoom_in();
        assert_eq!(controller.zoom().value(), 1.75);
        assert!(controller.can_zoom_in());
        assert!(controller.can_zoom_out());

        while controller.can_zoom_out() {
            controller.zoom_out();
        }
        assert_eq!(controller.zoom().value(), 1.0);
        assert!(!controller.can_zoom_out());
        assert!(controller.can_zoom_in());
    }

    #[test]
    fn set_zoom_clamps_and_disables_the_boundary_control() {
        let mut controller = controller(4);
        controller.open(0, None);

        controller.set_zoom(10.0);
        assert_eq!(controller.zoom().value(), 2.5);
        assert!(!controller.can_zoom_in());

        controller.set_zoom(-5.0);
        assert_eq!(controller.zoom().value(), 1.0);
        assert!(!controller.can_zoom_out());
    }

    #[test]
    fn zoom_while_closed_has_no_effect() {
        let mut controller = controller(4);
        controller.set_zoom(2.0);
        controller.zoom_in();
        assert_eq!(controller.zoom().value(), 1.0);
    }

    #[test]
    fn reopening_captures_a_new_focus_target() {
        let first = Id::new("miniatura-0");
        let second = Id::new("miniatura-3");
        let mut controller = controller(4);

        controller.open(0, Some(first));
        controller.close();
        assert_eq!(
            controller.take_focus_request(),
            Some(FocusRequest::Restore(first))
        );

        controller.open(3, Some(second));
        let _ = controller.take_focus_request();
        controller.close();
        assert_eq!(
            controller.take_focus_request(),
            Some(FocusRequest::Restore(second))
        );
    }

    #[test]
    fn open_while_open_keeps_the_current_item() {
        let mut controller = controller(4);
        controller.open(1, None);
        let _ = controller.take_focus_request();

        controller.open(3, Some(Id::new("otra")));
        assert_eq!(controller.current_index(), Some(1));
        assert_eq!(controller.take_focus_request(), None);
    }
}
