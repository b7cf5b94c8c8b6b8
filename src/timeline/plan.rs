use serde::Serialize;

use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::foundation::error::{UnwrappedError, UnwrappedResult};
use crate::props::model::UnwrappedProps;
use crate::timeline::config::{OverlapPolicy, TimelineConfig};
use crate::timeline::planets::{PlanetDurations, PlanetTiming};
use crate::timeline::scene::{SceneId, SceneProps, SceneSpec};

/// Build the ordered scene series for one video.
///
/// This is the only place that decides which scenes exist. The planets scene is left out
/// entirely when there are no usable languages.
pub fn compose_series(
    props: &UnwrappedProps,
    config: &TimelineConfig,
    planets: &dyn PlanetDurations,
) -> Vec<SceneSpec> {
    let mut series = Vec::with_capacity(7);
    series.push(SceneSpec::new(config.opening_frames(), SceneProps::Opening));

    // The collaborator sees every usable language; the scene props cap what is shown.
    let languages = props.planet_languages();
    let planets_present = if languages.is_empty() {
        tracing::debug!("no usable top languages, planets scene omitted");
        false
    } else {
        let frames = planets.duration_of_all_planets(&languages, config.fps);
        series.push(SceneSpec::new(
            frames,
            SceneProps::top_languages(props, languages),
        ));
        true
    };

    let issues = SceneSpec::new(config.issues_frames(), SceneProps::issues(props));
    let issues = match config.overlap_policy {
        OverlapPolicy::Always => issues.overlapping(config.top_languages_exit_frames),
        OverlapPolicy::WhenAdjacent if planets_present => {
            issues.overlapping(config.top_languages_exit_frames)
        }
        OverlapPolicy::WhenAdjacent => issues,
    };
    series.push(issues);

    series.push(
        SceneSpec::new(
            config.stars_and_productivity_frames(),
            SceneProps::stars_and_productivity(props),
        )
        .overlapping(config.issues_exit_frames),
    );
    series.push(SceneSpec::new(
        config.pull_requests_frames(),
        SceneProps::pull_requests(props),
    ));
    series.push(SceneSpec::new(
        config.contributions_frames(),
        SceneProps::Contributions,
    ));
    series.push(SceneSpec::new(
        config.landing_frames(),
        SceneProps::landing(props),
    ));

    series
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// A scene with its absolute position on the timeline.
pub struct PlacedScene {
    /// Scene id.
    pub id: SceneId,
    /// Offset the series entry asked for.
    pub offset_frames: i64,
    /// Frames the scene occupies.
    pub range: FrameRange,
    /// What the scene shows.
    pub props: SceneProps,
}

impl PlacedScene {
    /// Scene length in frames.
    pub fn duration_frames(&self) -> u64 {
        self.range.len_frames()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Fully placed video timeline.
pub struct Timeline {
    /// Frame rate.
    pub fps: Fps,
    /// Soundtrack asset played from frame 0.
    pub soundtrack: String,
    /// Scenes in series order.
    pub scenes: Vec<PlacedScene>,
    duration_frames: u64,
}

impl Timeline {
    /// Place a series back to back.
    ///
    /// Each entry starts at the previous entry's end plus its offset, clamped at frame 0;
    /// the video ends where the last entry ends.
    pub fn from_series(fps: Fps, soundtrack: impl Into<String>, series: Vec<SceneSpec>) -> Self {
        let mut cursor = 0u64;
        let mut scenes = Vec::with_capacity(series.len());

        for entry in series {
            let id = entry.id();
            let start = shift_clamped(cursor, entry.offset_frames, id);
            let range = FrameRange::with_len(FrameIndex(start), entry.duration_frames);
            tracing::debug!(
                scene = id.as_str(),
                start = range.start.0,
                end = range.end.0,
                offset = entry.offset_frames,
                "placed scene"
            );
            cursor = range.end.0;
            scenes.push(PlacedScene {
                id,
                offset_frames: entry.offset_frames,
                range,
                props: entry.props,
            });
        }

        Self {
            fps,
            soundtrack: soundtrack.into(),
            scenes,
            duration_frames: cursor,
        }
    }

    /// Place a series, failing instead of clamping when an entry would start before frame 0.
    pub fn from_series_strict(
        fps: Fps,
        soundtrack: impl Into<String>,
        series: Vec<SceneSpec>,
    ) -> UnwrappedResult<Self> {
        let mut cursor = 0i128;
        for entry in &series {
            let start = cursor + i128::from(entry.offset_frames);
            if start < 0 {
                return Err(UnwrappedError::timeline(format!(
                    "scene '{}' would start {} frames before frame 0",
                    entry.id(),
                    -start
                )));
            }
            cursor = start + i128::from(entry.duration_frames);
        }
        Ok(Self::from_series(fps, soundtrack, series))
    }

    /// Total length in frames.
    pub fn duration_frames(&self) -> u64 {
        self.duration_frames
    }

    /// Total length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration_frames)
    }

    /// Look up a scene by id.
    pub fn scene(&self, id: SceneId) -> Option<&PlacedScene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    /// `true` when the scene is part of this video.
    pub fn contains_scene(&self, id: SceneId) -> bool {
        self.scene(id).is_some()
    }

    /// Scenes visible at `frame`, in series order. Two during an overlap.
    pub fn active_at(&self, frame: FrameIndex) -> Vec<&PlacedScene> {
        self.scenes
            .iter()
            .filter(|s| s.range.contains(frame))
            .collect()
    }

    /// Serialize the placed timeline as pretty JSON.
    pub fn to_json_pretty(&self) -> UnwrappedResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| UnwrappedError::serde(e.to_string()))
    }
}

fn shift_clamped(cursor: u64, offset: i64, id: SceneId) -> u64 {
    if offset < 0 && offset.unsigned_abs() > cursor {
        tracing::warn!(
            scene = id.as_str(),
            cursor,
            offset,
            "scene offset reaches before frame 0, clamping"
        );
        return 0;
    }
    crate::foundation::core::shift_frame(cursor, offset)
}

/// Place every scene for `props`.
#[tracing::instrument(skip(props, config, planets), fields(login = %props.login))]
pub fn plan_timeline(
    props: &UnwrappedProps,
    config: &TimelineConfig,
    planets: &dyn PlanetDurations,
) -> Timeline {
    let series = compose_series(props, config, planets);
    Timeline::from_series(config.fps, config.soundtrack.clone(), series)
}

/// Total video length in frames with the default config and planet timing.
pub fn calculate_duration(props: &UnwrappedProps) -> u64 {
    calculate_duration_with(props, &TimelineConfig::default(), &PlanetTiming::default())
}

/// Total video length in frames.
///
/// Pure and total: any record yields a length, and the same record always yields the
/// same one.
#[tracing::instrument(skip(props, config, planets), fields(login = %props.login))]
pub fn calculate_duration_with(
    props: &UnwrappedProps,
    config: &TimelineConfig,
    planets: &dyn PlanetDurations,
) -> u64 {
    let series = compose_series(props, config, planets);
    let timeline = Timeline::from_series(config.fps, config.soundtrack.as_str(), series);
    timeline.duration_frames()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Render metadata handed to the host renderer before rendering starts.
pub struct CompositionMetadata {
    /// Total length in frames.
    pub duration_in_frames: u64,
    /// Frame rate.
    pub fps: Fps,
}

/// Metadata hook: computes the render length for `props`.
pub fn calculate_metadata(props: &UnwrappedProps) -> CompositionMetadata {
    let config = TimelineConfig::default();
    CompositionMetadata {
        duration_in_frames: calculate_duration_with(props, &config, &PlanetTiming::default()),
        fps: config.fps,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/plan.rs"]
mod tests;
