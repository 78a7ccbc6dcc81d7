use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::error::AppError;

/// Identifier of a curated source list (also the dataset file stem)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Festival or ceremony whose award names can be filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardType {
    Oscar,
    Cannes,
    Venice,
    Berlinale,
    GoldenGlobe,
    Bafta,
}

impl AwardType {
    pub const ALL: [AwardType; 6] = [
        AwardType::Oscar,
        AwardType::Cannes,
        AwardType::Venice,
        AwardType::Berlinale,
        AwardType::GoldenGlobe,
        AwardType::Bafta,
    ];

    /// Wire name, as used for award keys in queries
    pub fn key(&self) -> &'static str {
        match self {
            AwardType::Oscar => "oscar",
            AwardType::Cannes => "cannes",
            AwardType::Venice => "venice",
            AwardType::Berlinale => "berlinale",
            AwardType::GoldenGlobe => "golden_globe",
            AwardType::Bafta => "bafta",
        }
    }

    /// The award source whose recorded names are matched for this type
    pub fn source_id(&self) -> SourceId {
        let id = match self {
            AwardType::Oscar => "oscars",
            AwardType::Cannes => "cannes",
            AwardType::Venice => "venice",
            AwardType::Berlinale => "berlinale",
            AwardType::GoldenGlobe => "golden-globes",
            AwardType::Bafta => "bafta",
        };
        SourceId::new(id)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AwardType::Oscar => "Academy Awards",
            AwardType::Cannes => "Cannes Film Festival",
            AwardType::Venice => "Venice Film Festival",
            AwardType::Berlinale => "Berlin International Film Festival",
            AwardType::GoldenGlobe => "Golden Globe Awards",
            AwardType::Bafta => "BAFTA Film Awards",
        }
    }
}

impl FromStr for AwardType {
    type Err = AppError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        AwardType::ALL
            .into_iter()
            .find(|award_type| award_type.key() == key.trim())
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown award type: {}", key)))
    }
}

/// How a source's entries are interpreted during the merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "award", rename_all = "snake_case")]
pub enum SourceKind {
    /// Plain ranked list, rank (or year) stored as a number
    Ranked,
    /// Yearly list where "Tied" ranks inherit the preceding rank of the same year
    TiedRanked,
    /// Award corpus; entries carry award names
    Award(AwardType),
}

/// A registered source list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceList {
    pub id: SourceId,
    pub name: String,
    pub kind: SourceKind,
}

impl SourceList {
    pub fn new(id: &str, name: &str, kind: SourceKind) -> Self {
        Self {
            id: SourceId::new(id),
            name: name.to_string(),
            kind,
        }
    }
}

/// All source lists known to the engine, in merge order
pub fn registry() -> Vec<SourceList> {
    let mut lists = vec![
        SourceList::new("imdb-top-250", "IMDb Top 250", SourceKind::Ranked),
        SourceList::new(
            "letterboxd-top-250",
            "Letterboxd Top 250 Narrative Features",
            SourceKind::Ranked,
        ),
        SourceList::new(
            "sight-and-sound-2022",
            "Sight and Sound Greatest Films of All Time (2022)",
            SourceKind::Ranked,
        ),
        SourceList::new("afi-100", "AFI's 100 Years...100 Movies", SourceKind::Ranked),
        SourceList::new(
            "cahiers-top-ten",
            "Cahiers du Cinéma Annual Top Ten",
            SourceKind::TiedRanked,
        ),
    ];

    lists.extend(AwardType::ALL.iter().map(|award_type| SourceList {
        id: award_type.source_id(),
        name: award_type.display_name().to_string(),
        kind: SourceKind::Award(*award_type),
    }));

    lists
}

/// Looks up a registered source list by id
pub fn find_source(id: &SourceId) -> Option<SourceList> {
    registry().into_iter().find(|list| &list.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_ids_are_unique() {
        let lists = registry();
        let mut ids: Vec<&SourceId> = lists.iter().map(|l| &l.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), lists.len());
    }

    #[test]
    fn test_every_award_type_has_a_source() {
        for award_type in AwardType::ALL {
            let source = find_source(&award_type.source_id()).unwrap();
            assert_eq!(source.kind, SourceKind::Award(award_type));
        }
    }

    #[test]
    fn test_award_type_keys_match_wire_names() {
        for award_type in AwardType::ALL {
            assert_eq!(
                serde_json::to_value(award_type).unwrap(),
                serde_json::json!(award_type.key())
            );
            assert_eq!(award_type.key().parse::<AwardType>().unwrap(), award_type);
        }
        assert!("emmy".parse::<AwardType>().is_err());
    }

    #[test]
    fn test_single_tied_ranked_source() {
        let tied: Vec<SourceList> = registry()
            .into_iter()
            .filter(|l| l.kind == SourceKind::TiedRanked)
            .collect();
        assert_eq!(tied.len(), 1);
        assert_eq!(tied[0].id.as_str(), "cahiers-top-ten");
    }

    #[test]
    fn test_award_type_serde() {
        let json = serde_json::to_string(&AwardType::GoldenGlobe).unwrap();
        assert_eq!(json, "\"golden_globe\"");
        let parsed: AwardType = serde_json::from_str("\"oscar\"").unwrap();
        assert_eq!(parsed, AwardType::Oscar);
    }

    #[test]
    fn test_source_id_is_transparent() {
        let id: SourceId = serde_json::from_str("\"afi-100\"").unwrap();
        assert_eq!(id, SourceId::from("afi-100"));
        assert_eq!(format!("{}", id), "afi-100");
    }
}
