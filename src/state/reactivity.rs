// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

/// Estado reactivo con sistema de notificaciones.
///
/// Los clones comparten valor y subscribers. Cada subscriber recibe una
/// copia del valor ya actualizado, así que puede volver a leer o escribir el
/// estado sin chocar con un borrow activo.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback<T>>>>,
}

impl<T: Clone + 'static> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Copia del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Leer sin clonar
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&*self.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&T) + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Notificar a todos los subscribers
    fn notify(&self) {
        let snapshot = self.get();
        let callbacks: Vec<Callback<T>> = self.subscribers.borrow().clone();
        for callback in callbacks {
            callback(&snapshot);
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(1);
        let clone = state.clone();
        let seen = Rc::new(Cell::new(0));

        let seen_clone = Rc::clone(&seen);
        clone.subscribe(move |v| seen_clone.set(*v));

        state.set(5);
        assert_eq!(clone.get(), 5);
        assert_eq!(seen.get(), 5);
        assert_eq!(state.subscriber_count(), 1);
    }

    #[test]
    fn subscriber_may_write_back_without_panicking() {
        let state = ReactiveState::new(0u32);
        let writer = state.clone();
        state.subscribe(move |v| {
            if *v == 1 {
                writer.set(2);
            }
        });

        state.update(|v| *v += 1);
        assert_eq!(state.get(), 2);
    }
}
