// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Lista compartida de subscribers; los clones notifican a los mismos callbacks
#[derive(Clone, Default)]
pub struct Notifier {
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify(&self) {
        // Copia para que un callback pueda suscribir sin conflicto de borrow
        let callbacks: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_subscribers() {
        let notifier = Notifier::new();
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        notifier.subscribe(move || count_clone.set(count_clone.get() + 1));

        notifier.clone().notify();
        notifier.notify();
        assert_eq!(count.get(), 2);
    }
}
