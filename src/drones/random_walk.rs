use rand::Rng;

use crate::utils::coordinate::Coordinate;

/// Regla de movimiento del Drone: en cada paso la latitud y la longitud se desplazan,
/// cada una por separado, un offset uniforme en [-step_span / 2, step_span / 2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomWalk {
    step_span: f64,
    clamp_to_geographic_range: bool,
}

impl RandomWalk {
    pub fn new(step_span: f64, clamp_to_geographic_range: bool) -> RandomWalk {
        RandomWalk {
            step_span,
            clamp_to_geographic_range,
        }
    }

    pub fn next_position<R: Rng + ?Sized>(&self, from: Coordinate, rng: &mut R) -> Coordinate {
        let delta_lat = (rng.gen::<f64>() - 0.5) * self.step_span;
        let delta_long = (rng.gen::<f64>() - 0.5) * self.step_span;
        let next = from.offset_by(delta_lat, delta_long);

        if self.clamp_to_geographic_range {
            next.clamped_to_geographic_range()
        } else {
            next
        }
    }
}
