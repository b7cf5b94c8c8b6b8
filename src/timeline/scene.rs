use serde::Serialize;

use crate::props::model::{
    Corner, LanguageStat, MAX_PLANETS, Planet, ProductivityPoint, UnwrappedProps, Weekday,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
/// Scenes of the video, in playback order.
pub enum SceneId {
    /// Opening title.
    Opening,
    /// Planets visualization of the top languages.
    TopLanguages,
    /// Issues counter.
    Issues,
    /// Stars and productivity chart.
    StarsAndProductivity,
    /// Pull requests counter.
    PullRequests,
    /// Contributions graph.
    Contributions,
    /// Closing scene.
    Landing,
}

impl SceneId {
    /// Stable snake_case id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Opening => "opening",
            Self::TopLanguages => "top_languages",
            Self::Issues => "issues",
            Self::StarsAndProductivity => "stars_and_productivity",
            Self::PullRequests => "pull_requests",
            Self::Contributions => "contributions",
            Self::Landing => "landing",
        }
    }
}

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "scene", rename_all = "snake_case")]
/// The input fields each scene displays.
pub enum SceneProps {
    /// Opening title; no data.
    Opening,
    /// Planets scene.
    TopLanguages {
        /// Corner the planets fly in from.
        corner: Corner,
        /// Languages shown, at most [`crate::MAX_PLANETS`].
        languages: Vec<LanguageStat>,
        /// Draw the guide line.
        show_helper_line: bool,
        /// User login.
        login: String,
    },
    /// Issues counter.
    Issues {
        /// Issues opened.
        open_issues: u64,
        /// Issues closed.
        closed_issues: u64,
    },
    /// Stars and productivity chart.
    StarsAndProductivity {
        /// Stars given.
        stars_given: u64,
        /// Most productive weekday.
        top_weekday: Weekday,
        /// Most productive hour.
        top_hour: u8,
        /// Chart samples.
        graph_data: Vec<ProductivityPoint>,
        /// Draw the chart background.
        show_background: bool,
        /// Draw the hit window.
        show_hit_window: bool,
        /// Draw the cockpit overlay.
        show_cockpit: bool,
        /// Draw the chart dots.
        show_dots: bool,
    },
    /// Pull requests counter.
    PullRequests {
        /// Pull requests opened.
        total_pull_requests: u64,
    },
    /// Contributions graph; no data.
    Contributions,
    /// Closing scene.
    Landing {
        /// Planet tier to land on.
        planet: Planet,
    },
}

impl SceneProps {
    /// Which scene these props belong to.
    pub fn scene_id(&self) -> SceneId {
        match self {
            Self::Opening => SceneId::Opening,
            Self::TopLanguages { .. } => SceneId::TopLanguages,
            Self::Issues { .. } => SceneId::Issues,
            Self::StarsAndProductivity { .. } => SceneId::StarsAndProductivity,
            Self::PullRequests { .. } => SceneId::PullRequests,
            Self::Contributions => SceneId::Contributions,
            Self::Landing { .. } => SceneId::Landing,
        }
    }

    pub(crate) fn top_languages(props: &UnwrappedProps, languages: Vec<LanguageStat>) -> Self {
        Self::TopLanguages {
            corner: props.corner,
            languages: languages.into_iter().take(MAX_PLANETS).collect(),
            show_helper_line: props.show_helper_line,
            login: props.login.clone(),
        }
    }

    pub(crate) fn issues(props: &UnwrappedProps) -> Self {
        Self::Issues {
            open_issues: props.issues_opened,
            closed_issues: props.issues_closed,
        }
    }

    pub(crate) fn stars_and_productivity(props: &UnwrappedProps) -> Self {
        Self::StarsAndProductivity {
            stars_given: props.stars_given,
            top_weekday: props.top_weekday,
            top_hour: props.top_hour,
            graph_data: props.graph_data.clone(),
            show_background: false,
            show_hit_window: false,
            show_cockpit: true,
            show_dots: false,
        }
    }

    pub(crate) fn pull_requests(props: &UnwrappedProps) -> Self {
        Self::PullRequests {
            total_pull_requests: props.total_pull_requests,
        }
    }

    pub(crate) fn landing(props: &UnwrappedProps) -> Self {
        Self::Landing {
            planet: props.planet,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// One entry of the scene series before placement.
pub struct SceneSpec {
    /// Length in frames.
    pub duration_frames: u64,
    /// Shift relative to the end of the previous scene; negative means overlap.
    pub offset_frames: i64,
    /// What the scene shows.
    pub props: SceneProps,
}

impl SceneSpec {
    /// Entry that starts right after its predecessor.
    pub fn new(duration_frames: u64, props: SceneProps) -> Self {
        Self {
            duration_frames,
            offset_frames: 0,
            props,
        }
    }

    /// Start `frames` frames before the predecessor ends.
    pub fn overlapping(mut self, frames: u64) -> Self {
        self.offset_frames = -i64::try_from(frames).unwrap_or(i64::MAX);
        self
    }

    /// Scene this entry places.
    pub fn id(&self) -> SceneId {
        self.props.scene_id()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scene.rs"]
mod tests;
