//! Денежная арифметика форм.

/// Округление до копеек (второго знака)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Отрицательный ввод количеств и цен приводится к нулю
pub fn zero_floor(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_cuts_to_kopecks() {
        assert_eq!(round2(1234.5678), 1234.57);
        assert_eq!(round2(0.1 + 0.2), 0.3);
        assert_eq!(round2(15000.0), 15000.0);
    }

    #[test]
    fn zero_floor_clamps_negative_only() {
        assert_eq!(zero_floor(-5.0), 0.0);
        assert_eq!(zero_floor(0.0), 0.0);
        assert_eq!(zero_floor(4.5), 4.5);
    }
}
