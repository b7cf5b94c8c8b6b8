use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{UnwrappedError, UnwrappedResult};

/// Most languages the planets scene can show.
pub const MAX_PLANETS: usize = 3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Input record for one video render.
///
/// Only `top_languages` affects timing. Every other field is routed to the scene that
/// displays it (see [`crate::SceneProps`]).
pub struct UnwrappedProps {
    /// Screen corner the planets scene flies in from.
    pub corner: Corner,
    /// Ranked language breakdown; `None` or empty drops the planets scene.
    #[serde(default)]
    pub top_languages: Option<Vec<LanguageStat>>,
    /// Draw the planets scene guide line.
    #[serde(default)]
    pub show_helper_line: bool,
    /// GitHub login of the user.
    pub login: String,
    /// Planet shown on the landing scene.
    pub planet: Planet,
    /// Stars given during the year.
    pub stars_given: u64,
    /// Issues closed during the year.
    pub issues_closed: u64,
    /// Issues opened during the year.
    pub issues_opened: u64,
    /// Most productive weekday.
    pub top_weekday: Weekday,
    /// Pull requests opened during the year.
    pub total_pull_requests: u64,
    /// Most productive hour of the day (0..=23).
    pub top_hour: u8,
    /// Productivity series for the stars chart.
    #[serde(default)]
    pub graph_data: Vec<ProductivityPoint>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Screen corner.
pub enum Corner {
    /// Top left.
    TopLeft,
    /// Top right.
    TopRight,
    /// Bottom left.
    BottomLeft,
    /// Bottom right.
    BottomRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Landing planet tier.
pub enum Planet {
    /// Entry tier.
    Ice,
    /// Middle tier.
    Silver,
    /// Top tier.
    Gold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Day of week, Monday = `"1"`.
pub enum Weekday {
    /// Monday.
    #[serde(rename = "1", alias = "monday")]
    Monday,
    /// Tuesday.
    #[serde(rename = "2", alias = "tuesday")]
    Tuesday,
    /// Wednesday.
    #[serde(rename = "3", alias = "wednesday")]
    Wednesday,
    /// Thursday.
    #[serde(rename = "4", alias = "thursday")]
    Thursday,
    /// Friday.
    #[serde(rename = "5", alias = "friday")]
    Friday,
    /// Saturday.
    #[serde(rename = "6", alias = "saturday")]
    Saturday,
    /// Sunday.
    #[serde(rename = "7", alias = "sunday")]
    Sunday,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// One ranked language with its byte count or percentage.
pub struct LanguageStat {
    /// Language display name.
    pub name: String,
    /// Byte count or percentage; only the ranking matters for timing.
    pub value: f64,
}

impl LanguageStat {
    /// Build a language entry.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    fn is_usable(&self) -> bool {
        !self.name.trim().is_empty() && self.value.is_finite() && self.value >= 0.0
    }
}

impl<'de> Deserialize<'de> for LanguageStat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Pair(String, f64),
            Obj {
                name: String,
                #[serde(alias = "percentage", alias = "bytes")]
                value: f64,
            },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Pair(name, value) => Ok(Self { name, value }),
            Repr::Obj { name, value } => Ok(Self { name, value }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
/// One sample of the productivity chart.
pub struct ProductivityPoint {
    /// Bucket index (hour or day, as chosen by the data source).
    pub time: u32,
    /// Activity in the bucket.
    pub productivity: f64,
}

impl UnwrappedProps {
    /// Parse props from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> UnwrappedResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| UnwrappedError::validation(format!("parse props JSON: {e}")))
    }

    /// Parse props from a JSON string.
    pub fn from_json_str(s: &str) -> UnwrappedResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| UnwrappedError::validation(format!("parse props JSON: {e}")))
    }

    /// Parse props from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> UnwrappedResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            UnwrappedError::validation(format!("open props JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize props back to JSON.
    pub fn to_json_string(&self) -> UnwrappedResult<String> {
        serde_json::to_string(self).map_err(|e| UnwrappedError::serde(e.to_string()))
    }

    /// Check the record against the input schema.
    ///
    /// Planning never calls this; it tolerates records that fail here.
    pub fn validate(&self) -> UnwrappedResult<()> {
        if self.login.trim().is_empty() {
            return Err(UnwrappedError::validation("login must be non-empty"));
        }
        if self.top_hour > 23 {
            return Err(UnwrappedError::validation(format!(
                "topHour must be in 0..=23 (got {})",
                self.top_hour
            )));
        }

        for (i, lang) in self.top_languages.iter().flatten().enumerate() {
            if lang.name.trim().is_empty() {
                return Err(UnwrappedError::validation(format!(
                    "topLanguages[{i}].name must be non-empty"
                )));
            }
            if !lang.value.is_finite() || lang.value < 0.0 {
                return Err(UnwrappedError::validation(format!(
                    "topLanguages[{i}].value must be finite and >= 0"
                )));
            }
        }

        for (i, p) in self.graph_data.iter().enumerate() {
            if !p.productivity.is_finite() || p.productivity < 0.0 {
                return Err(UnwrappedError::validation(format!(
                    "graphData[{i}].productivity must be finite and >= 0"
                )));
            }
        }

        Ok(())
    }

    /// Usable languages, in input order.
    ///
    /// Unusable entries (blank name, negative or non-finite value) are skipped. Empty means
    /// no planets scene. The list is not capped; the planets scene shows at most
    /// [`MAX_PLANETS`] of them.
    pub fn planet_languages(&self) -> Vec<LanguageStat> {
        self.top_languages
            .iter()
            .flatten()
            .filter(|l| l.is_usable())
            .cloned()
            .collect()
    }

    /// `true` when the planets scene is part of the video.
    pub fn has_planets(&self) -> bool {
        !self.planet_languages().is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/props/model.rs"]
mod tests;
