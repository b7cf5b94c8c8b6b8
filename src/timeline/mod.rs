//! Scene series, overlaps and placement on the frame timeline.

pub(crate) mod config;
pub(crate) mod plan;
pub(crate) mod planets;
pub(crate) mod scene;
