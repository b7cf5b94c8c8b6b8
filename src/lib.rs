//! Unwrapped plans the timeline of a data-driven year-in-review video.
//!
//! The video is a fixed series of scenes (opening, top-languages planets, issues,
//! stars and productivity, pull requests, contributions, landing). Given one
//! [`UnwrappedProps`] record the crate decides which scenes exist, where each one starts,
//! how long each lasts and how long the whole video is, all in frames.
//!
//! # Pipeline overview
//!
//! 1. **Compose**: `UnwrappedProps + TimelineConfig -> Vec<SceneSpec>` ([`compose_series`])
//! 2. **Place**: `Vec<SceneSpec> -> Timeline` ([`Timeline::from_series`])
//! 3. **Measure**: `Timeline -> u64` frames ([`calculate_duration`])
//!
//! Rendering, encoding and audio muxing belong to the host renderer. Planning is pure and
//! deterministic, and it accepts any record: missing or unusable languages drop the
//! planets scene instead of failing.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod props;
mod timeline;

pub use foundation::core::{Fps, FrameIndex, FrameRange, VIDEO_FPS};
pub use foundation::error::{UnwrappedError, UnwrappedResult};
pub use props::model::{
    Corner, LanguageStat, MAX_PLANETS, Planet, ProductivityPoint, UnwrappedProps, Weekday,
};
pub use timeline::config::{
    CONTRIBUTIONS_SCENE, ISSUES_EXIT_DURATION, ISSUES_SCENE, LANDING_SCENE,
    OPENING_SCENE_LENGTH, OverlapPolicy, PULL_REQUESTS_SCENE, SOUNDTRACK,
    STARS_AND_PRODUCTIVITY, TOP_LANGUAGES_EXIT_DURATION, TimelineConfig,
};
pub use timeline::plan::{
    CompositionMetadata, PlacedScene, Timeline, calculate_duration, calculate_duration_with,
    calculate_metadata, compose_series, plan_timeline,
};
pub use timeline::planets::{PlanetDurations, PlanetTiming};
pub use timeline::scene::{SceneId, SceneProps, SceneSpec};
