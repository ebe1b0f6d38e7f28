// SPDX-License-Identifier: MPL-2.0
//! Portfolio newtypes.

/// Skill proficiency, guaranteed to be within 0–100 percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Proficiency(u8);

impl Proficiency {
    /// Upper bound in percent.
    pub const MAX: u8 = 100;

    /// Creates a proficiency, clamping the value to the valid range.
    #[must_use]
    pub const fn new(percent: u8) -> Self {
        if percent > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(percent)
        }
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the proficiency as a fraction (e.g., 90% → 0.9).
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        f32::from(self.0) / f32::from(Self::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_above_max() {
        assert_eq!(Proficiency::new(150).value(), 100);
        assert_eq!(Proficiency::new(100).value(), 100);
        assert_eq!(Proficiency::new(0).value(), 0);
    }

    #[test]
    fn as_fraction_maps_percent() {
        assert!((Proficiency::new(90).as_fraction() - 0.9).abs() < f32::EPSILON);
        assert_eq!(Proficiency::new(0).as_fraction(), 0.0);
        assert_eq!(Proficiency::new(100).as_fraction(), 1.0);
    }
}
