//! Semitone stepper: the bounded "transponer semitonos" control shown next
//! to a song. Transposition itself accepts any offset; the stepper only keeps
//! what the user picks inside a range.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransposeRange {
    pub min: i32,
    pub max: i32,
}

impl Default for TransposeRange {
    fn default() -> Self {
        TransposeRange::GUITAR
    }
}

impl TransposeRange {
    /// Half an octave either way, enough for a capo-free guitar.
    pub const GUITAR: TransposeRange = TransposeRange { min: -6, max: 6 };
    /// Every distinct transposition in both directions.
    pub const FULL: TransposeRange = TransposeRange { min: -11, max: 11 };

    pub fn new(min: i32, max: i32) -> Self {
        TransposeRange {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    /// Apply one press of the +/- buttons.
    ///
    /// ```
    /// use cancionero::TransposeRange;
    ///
    /// let range = TransposeRange::default();
    /// assert_eq!(range.step(5, 1), 6);
    /// assert_eq!(range.step(6, 1), 6);
    /// assert_eq!(range.step(-6, -1), -6);
    /// ```
    pub fn step(&self, value: i32, delta: i32) -> i32 {
        self.clamp(value.saturating_add(delta))
    }

    pub fn can_step_down(&self, value: i32) -> bool {
        value > self.min
    }

    pub fn can_step_up(&self, value: i32) -> bool {
        value < self.max
    }
}

/// Signed label for an offset: `+2`, `0`, `-3`.
pub fn format_offset(semitones: i32) -> String {
    if semitones > 0 {
        format!("+{}", semitones)
    } else {
        semitones.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range() {
        let range = TransposeRange::default();
        assert_eq!(range, TransposeRange { min: -6, max: 6 });
        assert!(range.contains(0));
        assert!(range.contains(-6));
        assert!(!range.contains(7));
    }

    #[test]
    fn test_new_orders_bounds() {
        assert_eq!(TransposeRange::new(11, -11), TransposeRange::FULL);
    }

    #[test]
    fn test_clamp_and_step() {
        let range = TransposeRange::GUITAR;
        assert_eq!(range.clamp(9), 6);
        assert_eq!(range.clamp(-9), -6);
        assert_eq!(range.step(0, -1), -1);
        assert_eq!(range.step(i32::MAX, 1), 6);
        assert_eq!(range.step(i32::MIN, -1), -6);
    }

    #[test]
    fn test_buttons_disable_at_bounds() {
        let range = TransposeRange::GUITAR;
        assert!(!range.can_step_down(-6));
        assert!(range.can_step_up(-6));
        assert!(range.can_step_down(6));
        assert!(!range.can_step_up(6));
    }

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(2), "+2");
        assert_eq!(format_offset(0), "0");
        assert_eq!(format_offset(-3), "-3");
    }

    #[test]
    fn test_range_from_json() {
        let range: TransposeRange = serde_json::from_str(r#"{"min":-11,"max":11}"#).unwrap();
        assert_eq!(range, TransposeRange::FULL);
    }
}
