use crate::foundation::error::{UnwrappedError, UnwrappedResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Absolute frame on the timeline.
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Half-open frame interval `[start, end)`.
pub struct FrameRange {
    /// First frame inside the range.
    pub start: FrameIndex,
    /// First frame past the range.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> UnwrappedResult<Self> {
        if start.0 > end.0 {
            return Err(UnwrappedError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Range of `len` frames starting at `start`.
    pub fn with_len(start: FrameIndex, len: u64) -> Self {
        Self {
            start,
            end: FrameIndex(start.0.saturating_add(len)),
        }
    }

    /// Number of frames covered.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// `true` when the range covers no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// `true` when `f` lies in `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Number of frames shared with `other`.
    pub fn overlap_frames(self, other: FrameRange) -> u64 {
        let start = self.start.0.max(other.start.0);
        let end = self.end.0.min(other.end.0);
        end.saturating_sub(start)
    }

    /// Move both ends by `delta`, saturating at frame 0.
    pub fn shift(self, delta: i64) -> Self {
        Self {
            start: FrameIndex(shift_frame(self.start.0, delta)),
            end: FrameIndex(shift_frame(self.end.0, delta)),
        }
    }
}

pub(crate) fn shift_frame(v: u64, delta: i64) -> u64 {
    if delta >= 0 {
        v.saturating_add(delta as u64)
    } else {
        v.saturating_sub(delta.unsigned_abs())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Rational frame rate `num / den`.
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds); must be > 0.
    pub den: u32,
}

/// Frame rate of the rendered video.
pub const VIDEO_FPS: Fps = Fps { num: 30, den: 1 };

impl Fps {
    /// Build a frame rate, rejecting zero numerator or denominator.
    pub fn new(num: u32, den: u32) -> UnwrappedResult<Self> {
        if den == 0 {
            return Err(UnwrappedError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(UnwrappedError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Whole frames spanned by `secs` seconds (floored; exact for integer rates).
    pub fn frames_for_secs(self, secs: u64) -> u64 {
        if self.den == 0 {
            return 0;
        }
        let frames = u128::from(secs) * u128::from(self.num) / u128::from(self.den);
        u64::try_from(frames).unwrap_or(u64::MAX)
    }

    /// Duration of `frames` frames in seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        if self.num == 0 || self.den == 0 {
            return 0.0;
        }
        (frames as f64) / self.as_f64()
    }
}

impl Default for Fps {
    fn default() -> Self {
        VIDEO_FPS
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
