/// Lleva la cuenta de la posición dentro de la galería. La navegación es
/// circular: avanzar desde la última imagen vuelve a la primera y retroceder
/// desde la primera salta a la última.
pub struct NavigationManager {
    total_items: usize,
    current_index: Option<usize>,
}

impl NavigationManager {
    pub fn new() -> Self {
        Self {
            total_items: 0,
            current_index: None,
        }
    }

    /// Fija el número de entradas y descarta la posición actual.
    pub fn set_total(&mut self, total: usize) {
        self.total_items = total;
        self.current_index = None;
    }

    /// Entra en la galería por `index`, ajustando un índice fuera de rango
    /// con la misma regla de envoltura que `step`.
    pub fn open_at(&mut self, index: usize) -> Option<usize> {
        if self.total_items == 0 {
            return None;
        }
        let index = wrap_index(index as i64, self.total_items);
        self.current_index = Some(index);
        self.current_index
    }

    /// Avanza `delta` posiciones con envoltura circular. Sin posición actual
    /// no hace nada.
    pub fn step(&mut self, delta: i64) -> Option<usize> {
        let current = self.current_index?;
        let next = wrap_index(current as i64 + delta, self.total_items);
        self.current_index = Some(next);
        self.current_index
    }

    pub fn clear(&mut self) {
        self.current_index = None;
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

/// Envuelve un índice al rango `[0, len)`: por debajo de cero salta al final
/// y en `len` o más vuelve al principio. Una sola envoltura hacia el borde
/// más cercano, suficiente para pasos de ±1 y estable para saltos mayores.
pub fn wrap_index(index: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if index < 0 {
        len - 1
    } else if index >= len as i64 {
        0
    } else {
        index as usize
    }
}
