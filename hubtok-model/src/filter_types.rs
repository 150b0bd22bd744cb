//! Presentation-facing enums shared between the core and renderers.

use std::fmt;

/// Sort orders the presentation layer can request from the upstream listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiSort {
    /// Upstream trending score, descending.
    Trending,
    /// Like count, descending.
    MostLikes,
    /// Download count, descending.
    MostDownloads,
    /// Creation date, newest first.
    Newest,
}

impl UiSort {
    /// Every sort order, for populating a selection control.
    pub fn all() -> &'static [UiSort] {
        use UiSort::*;
        &[Trending, MostLikes, MostDownloads, Newest]
    }

    /// Value of the upstream `sort` query parameter.
    pub fn api_name(&self) -> &'static str {
        match self {
            UiSort::Trending => "trendingScore",
            UiSort::MostLikes => "likes",
            UiSort::MostDownloads => "downloads",
            UiSort::Newest => "createdAt",
        }
    }

    /// Human-readable label for selection controls.
    pub fn label(&self) -> &'static str {
        match self {
            UiSort::Trending => "Trending",
            UiSort::MostLikes => "Most Likes",
            UiSort::MostDownloads => "Most Downloads",
            UiSort::Newest => "Newest",
        }
    }
}

impl fmt::Display for UiSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
