//! Exponential Moving Average (EMA) series.

/// EMA series seeded with the first value.
///
/// The returned series is aligned with `values`: element `i` is the EMA after
/// `values[i]`. Seeding with a plain value (rather than an SMA of the first
/// window) means a steady trend still shows up as a widening gap between a
/// fast and a slow EMA.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };
    if period == 0 {
        return Vec::new();
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut ema = Vec::with_capacity(values.len());

    let mut current = first;
    ema.push(current);

    for value in &values[1..] {
        current = (value - current) * multiplier + current;
        ema.push(current);
    }

    ema
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ema_seeded_with_first_value() {
        let ema = ema_series(&[2.0, 4.0, 6.0], 3);
        assert_eq!(ema, vec![2.0, 3.0, 4.5]);
    }

    #[test]
    fn test_ema_length() {
        let values: Vec<f64> = (0..30).map(|i| i as f64).collect();
        assert_eq!(ema_series(&values, 12).len(), 30);
        assert!(ema_series(&[], 12).is_empty());
        assert!(ema_series(&values, 0).is_empty());
    }

    #[test]
    fn test_ema_constant_series() {
        let ema = ema_series(&[5.0; 20], 9);
        assert!(ema.iter().all(|v| (*v - 5.0).abs() < 1e-12));
    }

    #[test]
    fn test_ema_tracks_upward_move() {
        let mut values = vec![10.0; 10];
        values.push(20.0);
        let ema = ema_series(&values, 3);
        let last = *ema.last().unwrap();
        assert!(last > 10.0 && last < 20.0);
    }

    #[test]
    fn test_ema_lag_grows_on_a_ramp() {
        let values: Vec<f64> = (0..40).map(|i| i as f64).collect();
        let ema = ema_series(&values, 9);
        let lag = |i: usize| values[i] - ema[i];
        assert!(lag(10) < lag(20));
        assert!(lag(20) < lag(39));
    }
}
