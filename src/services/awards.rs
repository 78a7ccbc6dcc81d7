//! Award option classifier
//!
//! Recorded award names vary between ceremonies and decades ("Outstanding
//! Picture", "Best Motion Picture - Drama", "Volpi Cup for Best Actress"), so a
//! user-facing option is matched with keyword rules instead of exact strings.

use crate::models::{AwardCategory, AwardType};

/// Keyword rule over a lowercased award name
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    /// At least one must appear (ignored when empty)
    pub any_of: &'static [&'static str],
    /// All must appear
    pub all_of: &'static [&'static str],
    /// None may appear
    pub none_of: &'static [&'static str],
}

impl Matcher {
    const fn any(any_of: &'static [&'static str]) -> Self {
        Self {
            any_of,
            all_of: &[],
            none_of: &[],
        }
    }

    const fn all(all_of: &'static [&'static str]) -> Self {
        Self {
            any_of: &[],
            all_of,
            none_of: &[],
        }
    }

    const fn excluding(self, none_of: &'static [&'static str]) -> Self {
        Self { none_of, ..self }
    }

    pub fn matches(&self, award: &str) -> bool {
        let award = award.to_lowercase();
        (self.any_of.is_empty() || self.any_of.iter().any(|k| award.contains(k)))
            && self.all_of.iter().all(|k| award.contains(k))
            && !self.none_of.iter().any(|k| award.contains(k))
    }
}

/// A selectable award option
#[derive(Debug, Clone, Copy)]
pub struct AwardOption {
    pub label: &'static str,
    pub matcher: Matcher,
}

const fn option(label: &'static str, matcher: Matcher) -> AwardOption {
    AwardOption { label, matcher }
}

const ACTOR: Matcher = Matcher::all(&["actor"]).excluding(&["supporting"]);
const ACTRESS: Matcher = Matcher::all(&["actress"]).excluding(&["supporting"]);
const SUPPORTING_ACTOR: Matcher = Matcher::all(&["supporting", "actor"]);
const SUPPORTING_ACTRESS: Matcher = Matcher::all(&["supporting", "actress"]);
const DIRECTOR: Matcher = Matcher::any(&["director", "directing"]);

const OSCAR_OPTIONS: &[AwardOption] = &[
    option(
        "Best Picture",
        Matcher::any(&[
            "best picture",
            "outstanding picture",
            "outstanding production",
            "outstanding motion picture",
            "best motion picture",
        ]),
    ),
    option("Director", DIRECTOR),
    option("Actor", ACTOR),
    option("Actress", ACTRESS),
    option("Supporting Actor", SUPPORTING_ACTOR),
    option("Supporting Actress", SUPPORTING_ACTRESS),
    option(
        "Original Screenplay",
        Matcher::any(&["original screenplay", "writing (original", "original story"]),
    ),
    option(
        "Adapted Screenplay",
        Matcher::any(&["adapted screenplay", "writing (adapted", "based on material"]),
    ),
    option(
        "International Feature",
        Matcher::any(&["international feature", "foreign language"]),
    ),
    option("Animated Feature", Matcher::all(&["animated feature"])),
    option("Documentary", Matcher::all(&["documentary"]).excluding(&["short"])),
    option("Cinematography", Matcher::all(&["cinematography"])),
    option("Film Editing", Matcher::all(&["editing"]).excluding(&["sound"])),
    option(
        "Original Score",
        Matcher::any(&["original score", "music (score", "scoring"]).excluding(&["song"]),
    ),
];

const CANNES_OPTIONS: &[AwardOption] = &[
    option("Palme d'Or", Matcher::any(&["palme d'or", "palme d’or", "grand prix du festival"])),
    option("Grand Prix", Matcher::any(&["grand prix"]).excluding(&["du festival"])),
    option("Jury Prize", Matcher::all(&["jury prize"]).excluding(&["grand"])),
    option("Best Director", DIRECTOR),
    option("Best Actor", ACTOR),
    option("Best Actress", ACTRESS),
    option("Best Screenplay", Matcher::any(&["screenplay"])),
    option("Caméra d'Or", Matcher::any(&["caméra d'or", "camera d'or", "caméra d’or"])),
];

const VENICE_OPTIONS: &[AwardOption] = &[
    option("Golden Lion", Matcher::all(&["golden lion"])),
    option(
        "Grand Jury Prize",
        Matcher::any(&["grand jury prize", "silver lion – grand jury", "silver lion - grand jury"]),
    ),
    option("Silver Lion", Matcher::all(&["silver lion"])),
    option("Special Jury Prize", Matcher::all(&["special jury prize"])),
    option("Volpi Cup Best Actor", Matcher::all(&["volpi", "actor"])),
    option("Volpi Cup Best Actress", Matcher::all(&["volpi", "actress"])),
    option("Best Screenplay", Matcher::all(&["screenplay"])),
];

const BERLINALE_OPTIONS: &[AwardOption] = &[
    option("Golden Bear", Matcher::all(&["golden bear"]).excluding(&["honorary"])),
    option(
        "Grand Jury Prize",
        Matcher::any(&["grand jury prize", "jury grand prix"]),
    ),
    option("Best Director", DIRECTOR),
    option("Best Actor", ACTOR),
    option("Best Actress", ACTRESS),
    option(
        "Best Leading Performance",
        Matcher::any(&["leading performance", "best actor", "best actress"]),
    ),
    option("Best Screenplay", Matcher::all(&["screenplay"])),
];

const GOLDEN_GLOBE_OPTIONS: &[AwardOption] = &[
    option(
        "Best Motion Picture – Drama",
        Matcher::all(&["motion picture", "drama"]).excluding(&["actor", "actress"]),
    ),
    option(
        "Best Motion Picture – Musical or Comedy",
        Matcher::any(&["musical or comedy", "comedy or musical"]).excluding(&["actor", "actress"]),
    ),
    option("Best Director", DIRECTOR),
    option("Actor", ACTOR),
    option("Actress", ACTRESS),
    option("Supporting Actor", SUPPORTING_ACTOR),
    option("Supporting Actress", SUPPORTING_ACTRESS),
    option("Best Screenplay", Matcher::all(&["screenplay"])),
    option(
        "Foreign Language Film",
        Matcher::any(&["foreign language", "non-english language"]),
    ),
];

const BAFTA_OPTIONS: &[AwardOption] = &[
    option(
        "Best Film",
        Matcher::any(&["best film", "film from any source"])
            .excluding(&["british", "foreign", "not in the english"]),
    ),
    option(
        "Outstanding British Film",
        Matcher::any(&["outstanding british film", "best british film"]),
    ),
    option("Director", DIRECTOR),
    option("Actor", ACTOR),
    option("Actress", ACTRESS),
    option("Supporting Actor", SUPPORTING_ACTOR),
    option("Supporting Actress", SUPPORTING_ACTRESS),
    option(
        "Film Not in the English Language",
        Matcher::any(&["not in the english language", "foreign language"]),
    ),
];

/// Options offered for an award type, in display order
pub fn options_for(award_type: AwardType) -> &'static [AwardOption] {
    match award_type {
        AwardType::Oscar => OSCAR_OPTIONS,
        AwardType::Cannes => CANNES_OPTIONS,
        AwardType::Venice => VENICE_OPTIONS,
        AwardType::Berlinale => BERLINALE_OPTIONS,
        AwardType::GoldenGlobe => GOLDEN_GLOBE_OPTIONS,
        AwardType::Bafta => BAFTA_OPTIONS,
    }
}

/// Whether a recorded award name satisfies an option; unknown options never match
pub fn award_matches(award_type: AwardType, option_label: &str, award: &str) -> bool {
    options_for(award_type)
        .iter()
        .find(|o| o.label == option_label)
        .is_some_and(|o| o.matcher.matches(award))
}

/// Award types and their option labels for client dropdowns
pub fn categories() -> Vec<AwardCategory> {
    AwardType::ALL
        .iter()
        .map(|award_type| AwardCategory {
            award_type: *award_type,
            name: award_type.display_name(),
            options: options_for(*award_type).iter().map(|o| o.label).collect(),
        })
        .collect()
}
