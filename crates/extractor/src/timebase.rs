//! Tick/frame/second conversions.
//!
//! The host measures time in ticks. Ticks-per-second is a fixed constant;
//! ticks-per-frame (the sequence time base) varies per sequence.

use cutlist_audit_model::FrameNumber;

/// Host ticks in one second.
pub const TICKS_PER_SECOND: f64 = 254_016_000_000.0;

/// Frame rate assumed when the sequence time base is unusable.
pub const FALLBACK_FPS: f64 = 24.0;

/// Resolved time base of a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBase {
    ticks_per_frame: f64,
    is_fallback: bool,
}

impl TimeBase {
    /// Resolve from the host's raw ticks-per-frame value.
    ///
    /// Missing, unparseable, zero, negative, or non-finite values fall back
    /// to [`FALLBACK_FPS`].
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.and_then(parse_ticks) {
            Some(ticks) if ticks.is_finite() && ticks > 0.0 => Self {
                ticks_per_frame: ticks,
                is_fallback: false,
            },
            _ => Self::fallback(),
        }
    }

    pub fn fallback() -> Self {
        Self {
            ticks_per_frame: round_half_up(TICKS_PER_SECOND / FALLBACK_FPS),
            is_fallback: true,
        }
    }

    pub fn ticks_per_frame(&self) -> f64 {
        self.ticks_per_frame
    }

    /// Whether the fallback rate was used.
    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    /// Frames per second.
    pub fn frame_rate(&self) -> f64 {
        TICKS_PER_SECOND / self.ticks_per_frame
    }

    pub fn ticks_to_frames(&self, ticks: f64) -> FrameNumber {
        round_half_up(ticks / self.ticks_per_frame) as FrameNumber
    }

    pub fn seconds_to_frames(&self, seconds: f64) -> FrameNumber {
        round_half_up(seconds * self.frame_rate()) as FrameNumber
    }
}

/// Parse a tick count the way the host runtime coerces strings to numbers:
/// surrounding whitespace is ignored and an empty string is zero.
pub fn parse_ticks(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok()
}

/// Round to the nearest integer, halves toward positive infinity.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rates() {
        let tb = TimeBase::resolve(Some("10584000000"));
        assert!(!tb.is_fallback());
        assert!((tb.frame_rate() - 24.0).abs() < 1e-9);

        let tb = TimeBase::resolve(Some("8467200000"));
        assert!((tb.frame_rate() - 30.0).abs() < 1e-9);

        let tb = TimeBase::resolve(Some("10594584000"));
        assert!((tb.frame_rate() - 23.976).abs() < 1e-3);
    }

    #[test]
    fn test_fallback_cases() {
        for raw in [None, Some(""), Some("0"), Some("-5"), Some("abc"), Some("inf"), Some("NaN")] {
            let tb = TimeBase::resolve(raw);
            assert!(tb.is_fallback(), "{raw:?}");
            assert_eq!(tb.ticks_per_frame(), 10_584_000_000.0);
            assert!((tb.frame_rate() - 24.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let tb = TimeBase::resolve(Some("  10584000000 \n"));
        assert!(!tb.is_fallback());
    }

    #[test]
    fn test_ticks_to_frames() {
        let tb = TimeBase::resolve(Some("10584000000"));
        assert_eq!(tb.ticks_to_frames(15_240_960_000_000.0), 1440);
        assert_eq!(tb.ticks_to_frames(0.0), 0);
        assert_eq!(tb.ticks_to_frames(5_292_000_000.0), 1);
    }

    #[test]
    fn test_seconds_to_frames() {
        let tb = TimeBase::resolve(Some("10584000000"));
        assert_eq!(tb.seconds_to_frames(0.0), 0);
        assert_eq!(tb.seconds_to_frames(1.0), 24);
        assert_eq!(tb.seconds_to_frames(54.1667), 1300);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.4), 2.0);
    }
}
