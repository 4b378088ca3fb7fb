use chrono::{DateTime, Duration, Utc};

/// Timer periodico sin hilos.
///
/// Mientras esta armado acumula un tick por cada periodo transcurrido desde que se armo.
/// Quien lo usa lo consulta con `due_ticks` cada vez que tiene el control (un frame de
/// la UI, o un paso del reloj en los tests).
#[derive(Debug, Clone)]
pub struct TickTimer {
    period: Duration,
    next_due: Option<DateTime<Utc>>,
}

impl TickTimer {
    pub fn new(period: Duration) -> TickTimer {
        TickTimer {
            period,
            next_due: None,
        }
    }

    /// Arma el timer: el primer tick vence un periodo despues de `now`.
    /// Si ya estaba armado, vuelve a empezar la cuenta. Si el vencimiento no entra en
    /// el rango de fechas, el timer queda desarmado.
    pub fn arm(&mut self, now: DateTime<Utc>) {
        self.next_due = now.checked_add_signed(self.period);
    }

    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Devuelve cuantos ticks vencieron hasta `now` y los consume.
    pub fn due_ticks(&mut self, now: DateTime<Utc>) -> u64 {
        let mut fired = 0;
        while let Some(next_due) = self.next_due {
            if next_due > now {
                break;
            }
            fired += 1;
            self.next_due = next_due.checked_add_signed(self.period);
        }
        fired
    }

    /// Tiempo que falta para el proximo tick, si el timer esta armado.
    pub fn time_until_next(&self, now: DateTime<Utc>) -> Option<std::time::Duration> {
        self.next_due.map(|next_due| {
            next_due
                .signed_duration_since(now)
                .to_std()
                .unwrap_or(std::time::Duration::ZERO)
        })
    }
}
