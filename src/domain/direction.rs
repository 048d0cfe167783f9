//! Reading direction and semantic (logical) direction.
//!
//! A horizontal drag has a visual sign (left/right on screen) and a logical
//! meaning (forward/back through content). The two only agree in LTR; in RTL
//! the sign is inverted before it is interpreted.

use serde::{Deserialize, Serialize};

/// Primary language subtags whose script is written right-to-left.
pub const RTL_LANGUAGES: &[&str] = &[
    "he", "iw", "ar", "fa", "ur", "yi", "ji", "ps", "sd", "ug", "dv", "ckb",
];

/// Layout direction of the host UI. Set once at startup and passed explicitly
/// to every classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingDirection {
    #[default]
    Ltr,
    Rtl,
}

impl ReadingDirection {
    pub fn from_rtl_flag(rtl: bool) -> Self {
        if rtl {
            Self::Rtl
        } else {
            Self::Ltr
        }
    }

    /// Decide the direction from a BCP 47 style locale tag (`he-IL`, `ar_EG`,
    /// `en`). Only the primary subtag is inspected.
    pub fn from_locale(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or("");
        let is_rtl = RTL_LANGUAGES
            .iter()
            .any(|lang| lang.eq_ignore_ascii_case(primary));
        Self::from_rtl_flag(is_rtl)
    }

    pub fn is_rtl(self) -> bool {
        self == Self::Rtl
    }

    /// Multiplier applied to raw horizontal translations.
    pub fn sign(self) -> f64 {
        match self {
            Self::Ltr => 1.0,
            Self::Rtl => -1.0,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Self::Ltr => Self::Rtl,
            Self::Rtl => Self::Ltr,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Logical navigation intent, independent of screen left/right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticDirection {
    Advance,
    Retreat,
}

impl SemanticDirection {
    /// Signed code used across the wasm boundary (1 / -1).
    pub fn code(self) -> i8 {
        match self {
            Self::Advance => 1,
            Self::Retreat => -1,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Advance => Self::Retreat,
            Self::Retreat => Self::Advance,
        }
    }

    /// Move a pager/carousel index one step, clamped to `[0, len - 1]`.
    pub fn step_index(self, current: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let last = len - 1;
        let current = current.min(last);
        match self {
            Self::Advance => (current + 1).min(last),
            Self::Retreat => current.saturating_sub(1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Advance => "advance",
            Self::Retreat => "retreat",
        }
    }
}

/// Raw translation corrected for the reading direction.
#[inline]
pub fn effective_translation(translation_x: f64, direction: ReadingDirection) -> f64 {
    translation_x * direction.sign()
}

/// `Advance` when the direction-corrected translation is positive,
/// `Retreat` otherwise (zero and NaN included).
#[inline]
pub fn map_direction(translation_x: f64, direction: ReadingDirection) -> SemanticDirection {
    if effective_translation(translation_x, direction) > 0.0 {
        SemanticDirection::Advance
    } else {
        SemanticDirection::Retreat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ltr_keeps_the_visual_sign() {
        assert_eq!(map_direction(42.0, ReadingDirection::Ltr), SemanticDirection::Advance);
        assert_eq!(map_direction(-42.0, ReadingDirection::Ltr), SemanticDirection::Retreat);
    }

    #[test]
    fn rtl_inverts_the_visual_sign() {
        assert_eq!(map_direction(42.0, ReadingDirection::Rtl), SemanticDirection::Retreat);
        assert_eq!(map_direction(-42.0, ReadingDirection::Rtl), SemanticDirection::Advance);
    }

    #[test]
    fn zero_and_nan_map_to_retreat() {
        for dir in [ReadingDirection::Ltr, ReadingDirection::Rtl] {
            assert_eq!(map_direction(0.0, dir), SemanticDirection::Retreat);
            assert_eq!(map_direction(f64::NAN, dir), SemanticDirection::Retreat);
        }
    }

    #[test]
    fn locale_bootstrap() {
        assert_eq!(ReadingDirection::from_locale("he-IL"), ReadingDirection::Rtl);
        assert_eq!(ReadingDirection::from_locale("iw"), ReadingDirection::Rtl);
        assert_eq!(ReadingDirection::from_locale("AR_eg"), ReadingDirection::Rtl);
        assert_eq!(ReadingDirection::from_locale("ckb-IQ"), ReadingDirection::Rtl);
        assert_eq!(ReadingDirection::from_locale("en-US"), ReadingDirection::Ltr);
        assert_eq!(ReadingDirection::from_locale("hex"), ReadingDirection::Ltr);
        assert_eq!(ReadingDirection::from_locale(""), ReadingDirection::Ltr);
    }

    #[test]
    fn step_index_clamps_at_both_ends() {
        assert_eq!(SemanticDirection::Advance.step_index(0, 3), 1);
        assert_eq!(SemanticDirection::Advance.step_index(2, 3), 2);
        assert_eq!(SemanticDirection::Retreat.step_index(0, 3), 0);
        assert_eq!(SemanticDirection::Retreat.step_index(2, 3), 1);
        // Out-of-range current snaps to the last page first.
        assert_eq!(SemanticDirection::Retreat.step_index(10, 3), 1);
        assert_eq!(SemanticDirection::Advance.step_index(5, 0), 0);
    }
}
