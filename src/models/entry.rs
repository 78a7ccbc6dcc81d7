use serde::{Deserialize, Deserializer, Serialize};

/// Rank column of a dataset entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RankField {
    Position(u32),
    /// Shares the rank of the closest preceding untied entry of the same year
    Tied,
    Other(String),
}

impl RankField {
    pub fn position(&self) -> Option<u32> {
        match self {
            RankField::Position(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_tied(&self) -> bool {
        matches!(self, RankField::Tied)
    }
}

impl<'de> Deserialize<'de> for RankField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Float(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => u32::try_from(n)
                .map(RankField::Position)
                .unwrap_or_else(|_| RankField::Other(n.to_string())),
            Raw::Float(f) if f >= 0.0 && f <= f64::from(u32::MAX) => RankField::Position(f as u32),
            Raw::Float(f) => RankField::Other(f.to_string()),
            Raw::Text(text) => {
                let trimmed = text.trim();
                if trimmed.eq_ignore_ascii_case("tied") {
                    RankField::Tied
                } else if let Ok(n) = trimmed.trim_start_matches('#').parse::<u32>() {
                    RankField::Position(n)
                } else {
                    RankField::Other(text)
                }
            }
        })
    }
}

/// One row of a ranked list or award dataset.
///
/// Ranked lists use `rank`/`title`/`year`/`tmdb_id`/`genres`; award lists use
/// `Award`/`Film`/`Year`/`tmdb_id` and optionally `name`. Both shapes land here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RankedListEntry {
    #[serde(default, deserialize_with = "deserialize_tmdb_id")]
    pub tmdb_id: Option<u64>,
    #[serde(default, alias = "Film")]
    pub title: String,
    #[serde(default, alias = "Year", deserialize_with = "deserialize_year")]
    pub year: String,
    #[serde(default)]
    pub rank: Option<RankField>,
    #[serde(default, deserialize_with = "deserialize_genres")]
    pub genres: Vec<String>,
    #[serde(default, alias = "Award")]
    pub award: Option<String>,
    #[serde(default, alias = "name")]
    pub person: Option<String>,
}

impl RankedListEntry {
    /// Leading four-digit year, e.g. `"1994/95"` -> 1994, `"2020s"` -> 2020
    pub fn year_number(&self) -> Option<u32> {
        leading_year(&self.year)
    }
}

pub(crate) fn leading_year(year: &str) -> Option<u32> {
    let digits: String = year
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.len() >= 4 {
        digits[..4].parse().ok()
    } else {
        None
    }
}

fn deserialize_tmdb_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(id)) if id > 0 => Some(id),
        Some(Raw::Text(text)) => text.trim().parse().ok().filter(|id| *id > 0),
        _ => None,
    })
}

fn deserialize_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(year)) => year.to_string(),
        Some(Raw::Text(year)) => year,
        None => String::new(),
    })
}

// Some sources store genres as a single comma-separated string
fn deserialize_genres<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::List(genres)) => genres,
        Some(Raw::Joined(joined)) => joined
            .split(',')
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty())
            .collect(),
        None => Vec::new(),
    })
}
