use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod entry;
pub mod source;
pub mod work;

pub use entry::{RankField, RankedListEntry};
pub use source::{find_source, registry, AwardType, SourceId, SourceKind, SourceList};
pub use work::{MergedWork, SourceRank};

/// Result ordering for recommendation queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    #[default]
    Rank,
    YearDesc,
    YearAsc,
    TitleAsc,
}

// ============================================================================
// Request Types
// ============================================================================

/// Filter selection for the recommendation view
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RecommendationQueryBody")]
pub struct RecommendationQuery {
    /// Required source lists; the first one drives rank sorting
    pub sources: Vec<SourceId>,
    /// Selected award options per award type
    pub awards: BTreeMap<AwardType, Vec<String>>,
    /// Unrecognized award types that came with selected options; these match no work
    pub unknown_award_types: Vec<String>,
    pub genres: Vec<String>,
    pub sort: SortOption,
    /// Number of page increments revealed so far
    pub pages: Option<usize>,
    /// Locale used to translate award names in the response
    pub locale: Option<String>,
}

/// Wire shape of a recommendation query, with award types as free-form keys
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecommendationQueryBody {
    sources: Vec<SourceId>,
    awards: BTreeMap<String, Vec<String>>,
    genres: Vec<String>,
    sort: SortOption,
    pages: Option<usize>,
    locale: Option<String>,
}

impl From<RecommendationQueryBody> for RecommendationQuery {
    fn from(body: RecommendationQueryBody) -> Self {
        let mut awards = BTreeMap::new();
        let mut unknown_award_types = Vec::new();

        for (key, options) in body.awards {
            match key.parse::<AwardType>() {
                Ok(award_type) => {
                    awards.insert(award_type, options);
                }
                Err(_) if !options.is_empty() => unknown_award_types.push(key),
                Err(_) => {}
            }
        }

        Self {
            sources: body.sources,
            awards,
            unknown_award_types,
            genres: body.genres,
            sort: body.sort,
            pages: body.pages,
            locale: body.locale,
        }
    }
}

impl RecommendationQuery {
    /// Source used as the primary rank key
    pub fn primary_source(&self) -> Option<&SourceId> {
        self.sources.first()
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// One revealed page of sorted results
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationPage {
    pub total: usize,
    pub shown: usize,
    pub has_more: bool,
    pub works: Vec<MergedWork>,
}

/// Registry entry with dataset statistics
#[derive(Debug, Clone, Serialize)]
pub struct ListSummary {
    #[serde(flatten)]
    pub list: SourceList,
    pub entry_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListsResponse {
    pub lists: Vec<ListSummary>,
    pub loaded_at: DateTime<Utc>,
}

/// A source list with one revealed page of its works
#[derive(Debug, Clone, Serialize)]
pub struct ListDetail {
    pub list: SourceList,
    #[serde(flatten)]
    pub page: RecommendationPage,
}

/// Award type with the option labels a client can select
#[derive(Debug, Clone, Serialize)]
pub struct AwardCategory {
    pub award_type: AwardType,
    pub name: &'static str,
    pub options: Vec<&'static str>,
}

/// "Ranked #N on List X" badge for a detail page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingBadge {
    pub source: SourceId,
    pub name: String,
    pub rank: SourceRank,
}
