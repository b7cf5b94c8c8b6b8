use serde::{Deserialize, Serialize};

use crate::foundation::core::Fps;
use crate::props::model::{LanguageStat, MAX_PLANETS};

/// Length of the planets scene for a given language list.
///
/// The timeline treats implementations as a black box. They must return 0 for an empty
/// list and should never shrink when a language is appended.
pub trait PlanetDurations {
    /// Planets scene length in frames.
    fn duration_of_all_planets(&self, languages: &[LanguageStat], fps: Fps) -> u64;
}

impl<F> PlanetDurations for F
where
    F: Fn(&[LanguageStat], Fps) -> u64,
{
    fn duration_of_all_planets(&self, languages: &[LanguageStat], fps: Fps) -> u64 {
        self(languages, fps)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Default planets scene timing: a title card, the main planet, then one short shot per
/// further language.
pub struct PlanetTiming {
    /// Title card length in seconds.
    pub title_secs: u64,
    /// Main (top language) planet length in seconds.
    pub main_planet_secs: u64,
    /// Length of each further planet in seconds.
    pub extra_planet_secs: u64,
}

impl Default for PlanetTiming {
    fn default() -> Self {
        Self {
            title_secs: 2,
            main_planet_secs: 3,
            extra_planet_secs: 2,
        }
    }
}

impl PlanetDurations for PlanetTiming {
    fn duration_of_all_planets(&self, languages: &[LanguageStat], fps: Fps) -> u64 {
        let n = languages.len().min(MAX_PLANETS) as u64;
        if n == 0 {
            return 0;
        }
        let secs = self.title_secs + self.main_planet_secs + (n - 1) * self.extra_planet_secs;
        fps.frames_for_secs(secs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/planets.rs"]
mod tests;
