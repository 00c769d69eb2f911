//! Idle fallback: a gentle breathing oscillation for the expansion scale.

/// Amplitude of the breathing oscillation around the resting scale.
const BREATH_AMPLITUDE: f32 = 0.1;

/// Expansion scale used whenever no control signal is active.
///
/// Bounded to [0.9, 1.1] for any elapsed time, so a field that loses its
/// tracker keeps breathing instead of freezing.
pub fn idle_scale(elapsed: f32) -> f32 {
    1.0 + BREATH_AMPLITUDE * elapsed.sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_scale_bounded() {
        let mut t = -50.0_f32;
        while t < 50.0 {
            let scale = idle_scale(t);
            assert!((0.9..=1.1).contains(&scale), "scale {scale} at t={t}");
            t += 0.01;
        }
    }

    #[test]
    fn test_idle_scale_breathes() {
        assert_eq!(idle_scale(0.0), 1.0);
        assert!((idle_scale(std::f32::consts::FRAC_PI_2) - 1.1).abs() < 1e-6);
        assert!((idle_scale(3.0 * std::f32::consts::FRAC_PI_2) - 0.9).abs() < 1e-6);
    }
}
