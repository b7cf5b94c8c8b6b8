use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::core::{Fps, VIDEO_FPS};
use crate::foundation::error::{UnwrappedError, UnwrappedResult};

/// Opening scene length in frames.
pub const OPENING_SCENE_LENGTH: u64 = 130;
/// Issues scene length in frames (6 s).
pub const ISSUES_SCENE: u64 = 6 * 30;
/// Pull requests scene length in frames (8 s).
pub const PULL_REQUESTS_SCENE: u64 = 8 * 30;
/// Contributions scene length in frames (7 s).
pub const CONTRIBUTIONS_SCENE: u64 = 7 * 30;
/// Landing scene length in frames (7 s).
pub const LANDING_SCENE: u64 = 7 * 30;
/// Stars and productivity scene length in frames.
pub const STARS_AND_PRODUCTIVITY: u64 = 400;
/// Frames the issues scene starts before the planets scene ends.
pub const TOP_LANGUAGES_EXIT_DURATION: u64 = 15;
/// Frames the stars scene starts before the issues scene ends.
pub const ISSUES_EXIT_DURATION: u64 = 20;
/// Soundtrack played under the whole video.
pub const SOUNDTRACK: &str = "smartsound-wired.mp3";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// When the planets exit overlap is applied to the issues scene.
pub enum OverlapPolicy {
    /// Always shift the issues scene back, even without a planets scene before it.
    ///
    /// Without planets the issues scene then overlaps the opening scene's tail.
    #[default]
    Always,
    /// Shift the issues scene back only when the planets scene precedes it.
    WhenAdjacent,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Scene lengths and overlaps for one video.
///
/// Lengths given in seconds are converted with [`TimelineConfig::fps`]; fields ending in
/// `_frames` are used as-is. Every field has a default, so a JSON override may name only
/// the fields it changes.
pub struct TimelineConfig {
    /// Frame rate of the video.
    pub fps: Fps,
    /// Opening scene length.
    pub opening_frames: u64,
    /// Issues scene length.
    pub issues_secs: u64,
    /// Pull requests scene length.
    pub pull_requests_secs: u64,
    /// Contributions scene length.
    pub contributions_secs: u64,
    /// Landing scene length.
    pub landing_secs: u64,
    /// Stars and productivity scene length.
    pub stars_and_productivity_frames: u64,
    /// Overlap between the planets and issues scenes.
    pub top_languages_exit_frames: u64,
    /// Overlap between the issues and stars scenes.
    pub issues_exit_frames: u64,
    /// Where the planets exit overlap applies.
    pub overlap_policy: OverlapPolicy,
    /// Static path of the soundtrack.
    pub soundtrack: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            fps: VIDEO_FPS,
            opening_frames: OPENING_SCENE_LENGTH,
            issues_secs: 6,
            pull_requests_secs: 8,
            contributions_secs: 7,
            landing_secs: 7,
            stars_and_productivity_frames: STARS_AND_PRODUCTIVITY,
            top_languages_exit_frames: TOP_LANGUAGES_EXIT_DURATION,
            issues_exit_frames: ISSUES_EXIT_DURATION,
            overlap_policy: OverlapPolicy::Always,
            soundtrack: SOUNDTRACK.to_string(),
        }
    }
}

impl TimelineConfig {
    /// Default config with a different overlap policy.
    pub fn with_policy(policy: OverlapPolicy) -> Self {
        Self {
            overlap_policy: policy,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> UnwrappedResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| UnwrappedError::validation(format!("parse timeline config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a (possibly partial) config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> UnwrappedResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            UnwrappedError::validation(format!("open timeline config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Opening scene length in frames.
    pub fn opening_frames(&self) -> u64 {
        self.opening_frames
    }

    /// Issues scene length in frames.
    pub fn issues_frames(&self) -> u64 {
        self.fps.frames_for_secs(self.issues_secs)
    }

    /// Pull requests scene length in frames.
    pub fn pull_requests_frames(&self) -> u64 {
        self.fps.frames_for_secs(self.pull_requests_secs)
    }

    /// Contributions scene length in frames.
    pub fn contributions_frames(&self) -> u64 {
        self.fps.frames_for_secs(self.contributions_secs)
    }

    /// Landing scene length in frames.
    pub fn landing_frames(&self) -> u64 {
        self.fps.frames_for_secs(self.landing_secs)
    }

    /// Stars and productivity scene length in frames.
    pub fn stars_and_productivity_frames(&self) -> u64 {
        self.stars_and_productivity_frames
    }

    /// Sum of every scene length except the planets scene.
    pub fn fixed_frames(&self) -> u64 {
        [
            self.opening_frames(),
            self.issues_frames(),
            self.stars_and_productivity_frames(),
            self.pull_requests_frames(),
            self.contributions_frames(),
            self.landing_frames(),
        ]
        .into_iter()
        .fold(0u64, u64::saturating_add)
    }

    /// Check lengths and overlaps for consistency.
    pub fn validate(&self) -> UnwrappedResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(UnwrappedError::validation("fps must have num>0 and den>0"));
        }

        for (name, frames) in [
            ("opening", self.opening_frames()),
            ("issues", self.issues_frames()),
            ("pull_requests", self.pull_requests_frames()),
            ("contributions", self.contributions_frames()),
            ("landing", self.landing_frames()),
            ("stars_and_productivity", self.stars_and_productivity_frames()),
        ] {
            if frames == 0 {
                return Err(UnwrappedError::validation(format!(
                    "{name} scene length must be > 0 frames"
                )));
            }
        }

        // Under `Always` the planets overlap can land on the opening scene.
        if self.top_languages_exit_frames > self.opening_frames() {
            return Err(UnwrappedError::validation(
                "top_languages_exit_frames must be <= opening_frames",
            ));
        }
        if self.issues_exit_frames > self.issues_frames() {
            return Err(UnwrappedError::validation(
                "issues_exit_frames must be <= the issues scene length",
            ));
        }
        if self.soundtrack.trim().is_empty() {
            return Err(UnwrappedError::validation("soundtrack must be non-empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/config.rs"]
mod tests;
