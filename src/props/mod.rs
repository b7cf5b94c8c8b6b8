//! Input record for one video render.

pub(crate) mod model;
