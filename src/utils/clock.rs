use std::{cell::Cell, rc::Rc};

use chrono::{DateTime, Duration, Utc};

/// Fuente de tiempo del simulador.
///
/// La sesion nunca consulta el reloj del sistema directamente, asi los tests pueden
/// avanzar el tiempo a mano.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reloj de pared, el que usa la aplicacion.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Reloj que solo avanza cuando se lo pide.
///
/// Los clones comparten el mismo instante: un test se queda con un clon y le pasa
/// el otro a la sesion.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> ManualClock {
        ManualClock {
            current: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance(&self, delta: Duration) {
        self.current.set(self.current.get() + delta);
    }

    pub fn advance_millis(&self, millis: i64) {
        self.advance(Duration::milliseconds(millis));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        ManualClock::new(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.current.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_01_manual_clock_only_moves_when_told() {
        let clock = ManualClock::default();
        let start = clock.now();
        assert_eq!(clock.now(), start);

        clock.advance_millis(1500);
        assert_eq!(
            clock.now().signed_duration_since(start).num_milliseconds(),
            1500
        );
    }

    #[test]
    fn test_02_clones_share_the_same_instant() {
        let clock = ManualClock::default();
        let handle = clock.clone();

        handle.advance_millis(250);
        assert_eq!(clock.now(), handle.now());
    }
}
