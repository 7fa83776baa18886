// ============================================================================
// ALERTS - Cola declarativa de alertas transitorias
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Alert, AlertId, AlertKind};
use crate::state::Notifier;
use crate::utils::{now_ms, Scheduler};

#[derive(Default)]
struct AlertList {
    next_id: u64,
    alerts: Vec<Alert>,
}

/// Alertas activas de una vista, en orden de aparición.
/// Cada alerta se elimina sola tras `duration_ms` o al descartarla.
#[derive(Clone)]
pub struct AlertQueue {
    inner: Rc<RefCell<AlertList>>,
    duration_ms: u32,
    scheduler: Rc<dyn Scheduler>,
    notifier: Notifier,
}

impl AlertQueue {
    pub fn new(duration_ms: u32, scheduler: Rc<dyn Scheduler>, notifier: Notifier) -> Self {
        Self {
            inner: Rc::new(RefCell::new(AlertList::default())),
            duration_ms,
            scheduler,
            notifier,
        }
    }

    pub fn raise(&self, message: impl Into<String>, kind: AlertKind) -> AlertId {
        self.raise_at(message, kind, now_ms())
    }

    /// Agrega la alerta y programa su eliminación
    pub fn raise_at(&self, message: impl Into<String>, kind: AlertKind, now_ms: i64) -> AlertId {
        let id = {
            let mut list = self.inner.borrow_mut();
            list.next_id += 1;
            let id = AlertId(list.next_id);
            list.alerts.push(Alert {
                id,
                message: message.into(),
                kind,
                expires_at_ms: now_ms + i64::from(self.duration_ms),
            });
            id
        };

        let queue = self.clone();
        self.scheduler.schedule(
            self.duration_ms,
            Box::new(move || {
                if queue.dismiss(id) {
                    log::debug!("⏱️ [ALERT] Alerta {:?} expirada", id);
                }
            }),
        );
        self.notifier.notify();
        id
    }

    /// Descarta una alerta; `false` si ya no estaba
    pub fn dismiss(&self, id: AlertId) -> bool {
        let removed = {
            let mut list = self.inner.borrow_mut();
            let before = list.alerts.len();
            list.alerts.retain(|alert| alert.id != id);
            list.alerts.len() != before
        };
        if removed {
            self.notifier.notify();
        }
        removed
    }

    /// Elimina las alertas vencidas en `now_ms`; devuelve cuántas salieron
    pub fn expire_due(&self, now_ms: i64) -> usize {
        let removed = {
            let mut list = self.inner.borrow_mut();
            let before = list.alerts.len();
            list.alerts.retain(|alert| alert.expires_at_ms > now_ms);
            before - list.alerts.len()
        };
        if removed > 0 {
            self.notifier.notify();
        }
        removed
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.inner.borrow().alerts.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
