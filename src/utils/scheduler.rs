use gloo_timers::callback::Timeout;

/// Programa tareas diferidas de un solo disparo
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Timers del navegador (`setTimeout`) vía gloo-timers
#[derive(Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        // El timeout se suelta: no hay cancelación, la tarea tolera que el estado ya no exista
        Timeout::new(delay_ms, task).forget();
    }
}
