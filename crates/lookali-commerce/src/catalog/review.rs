//! Reviews, star breakdowns and review submission.

use crate::error::CommerceError;
use crate::ids::ReviewId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Message shown when a review is submitted without stars or text.
pub const REVIEW_INCOMPLETE_MESSAGE: &str = "Por favor, adicione uma avaliação e um comentário.";

/// Message shown after a review is accepted.
pub const REVIEW_THANKS_MESSAGE: &str = "Obrigado pela sua avaliação!";

/// A customer review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub author: String,
    pub rating: f64,
    pub text: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Name of the reviewed product or service.
    pub product_name: String,
    #[serde(default)]
    pub likes: Option<u32>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Review {
    /// Whether the review has photos attached.
    pub fn has_photos(&self) -> bool {
        !self.images.is_empty()
    }
}

/// Static count of reviews per star value (1-5).
///
/// The counts are catalog data; they are not derived from any review list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewBreakdown {
    counts: BTreeMap<u8, u32>,
}

/// One bar of the breakdown chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub star: u8,
    pub count: u32,
    pub percentage: f64,
    /// Percentage rounded for display.
    pub rounded: u32,
}

impl ReviewBreakdown {
    /// Build a breakdown from `(star, count)` pairs.
    pub fn from_counts(counts: impl IntoIterator<Item = (u8, u32)>) -> Self {
        Self {
            counts: counts.into_iter().collect(),
        }
    }

    /// Count for one star value.
    pub fn count(&self, star: u8) -> u32 {
        self.counts.get(&star).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Share of reviews with the given star value, 0-100.
    ///
    /// An empty breakdown yields 0 for every star.
    pub fn percentage(&self, star: u8) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(star) as f64 / total as f64 * 100.0
    }

    /// Rows for stars 5 down to 1.
    pub fn rows(&self) -> Vec<BreakdownRow> {
        (1..=5u8)
            .rev()
            .map(|star| {
                let percentage = self.percentage(star);
                BreakdownRow {
                    star,
                    count: self.count(star),
                    percentage,
                    rounded: percentage.round() as u32,
                }
            })
            .collect()
    }
}

/// Review ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewSort {
    /// Newest first.
    #[default]
    Recent,
    /// Highest rating first.
    Highest,
    /// Lowest rating first.
    Lowest,
}

impl ReviewSort {
    /// Parse a sort key; anything unrecognized means `Recent`.
    pub fn parse(s: &str) -> Self {
        match s {
            "highest" | "highest_rating" => ReviewSort::Highest,
            "lowest" | "lowest_rating" => ReviewSort::Lowest,
            _ => ReviewSort::Recent,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewSort::Recent => "Mais Recente",
            ReviewSort::Highest => "Maior Avaliação",
            ReviewSort::Lowest => "Menor Avaliação",
        }
    }
}

/// Review list query used on detail and profile pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewQuery {
    pub sort: ReviewSort,
    /// Keep only reviews whose rounded rating equals this star value.
    pub stars: Option<u8>,
    /// Keep only reviews with photos.
    pub with_photos_only: bool,
}

impl ReviewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sorted_by(mut self, sort: ReviewSort) -> Self {
        self.sort = sort;
        self
    }

    /// Restrict to one star value; 0 means all stars.
    pub fn with_stars(mut self, stars: u8) -> Self {
        self.stars = (stars > 0).then_some(stars);
        self
    }

    pub fn with_photos_only(mut self) -> Self {
        self.with_photos_only = true;
        self
    }

    /// Apply the query to a review list.
    pub fn apply<'a>(&self, reviews: &'a [Review]) -> Vec<&'a Review> {
        let mut out: Vec<&Review> = reviews
            .iter()
            .filter(|r| self.stars.map_or(true, |s| r.rating.round() as u8 == s))
            .filter(|r| !self.with_photos_only || r.has_photos())
            .collect();

        match self.sort {
            ReviewSort::Recent => out.sort_by(|a, b| b.date.cmp(&a.date)),
            ReviewSort::Highest => out.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            ReviewSort::Lowest => out.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
        }
        out
    }
}

/// A review being written by the shopper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    /// Stars selected, 0 when none.
    pub rating: u8,
    pub text: String,
}

impl ReviewDraft {
    pub fn new(rating: u8, text: impl Into<String>) -> Self {
        Self {
            rating,
            text: text.into(),
        }
    }

    /// Check the draft can be submitted.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.rating == 0 || self.rating > 5 || self.text.trim().is_empty() {
            tracing::warn!(rating = self.rating, "rejected incomplete review");
            return Err(CommerceError::Validation(REVIEW_INCOMPLETE_MESSAGE.to_string()));
        }
        Ok(())
    }
}

/// Fill fraction (0.0-1.0) of the star at `position` (0-based) for a rating.
pub fn star_fill(rating: f64, position: u8) -> f64 {
    (rating - position as f64).clamp(0.0, 1.0)
}
