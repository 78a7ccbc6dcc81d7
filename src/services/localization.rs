//! Display translations for award names.
//!
//! Lookups are literal: `zh-TW` does not fall back to `zh`. Anything without an
//! exact entry is shown in English, the language the datasets are written in.

use crate::models::MergedWork;

type Translations = &'static [(&'static str, &'static str)];

const AWARD_TRANSLATIONS: &[(&str, Translations)] = &[
    (
        "Best Picture",
        &[
            ("fr", "Meilleur film"),
            ("es", "Mejor película"),
            ("de", "Bester Film"),
            ("ja", "作品賞"),
            ("zh", "最佳影片"),
        ],
    ),
    (
        "Best Director",
        &[
            ("fr", "Meilleur réalisateur"),
            ("es", "Mejor director"),
            ("de", "Beste Regie"),
            ("ja", "監督賞"),
            ("zh", "最佳导演"),
        ],
    ),
    (
        "Best Actor",
        &[
            ("fr", "Meilleur acteur"),
            ("es", "Mejor actor"),
            ("de", "Bester Hauptdarsteller"),
            ("ja", "主演男優賞"),
            ("zh", "最佳男主角"),
        ],
    ),
    (
        "Best Actress",
        &[
            ("fr", "Meilleure actrice"),
            ("es", "Mejor actriz"),
            ("de", "Beste Hauptdarstellerin"),
            ("ja", "主演女優賞"),
            ("zh", "最佳女主角"),
        ],
    ),
    (
        "Best Supporting Actor",
        &[
            ("fr", "Meilleur acteur dans un second rôle"),
            ("es", "Mejor actor de reparto"),
            ("de", "Bester Nebendarsteller"),
            ("ja", "助演男優賞"),
            ("zh", "最佳男配角"),
        ],
    ),
    (
        "Best Supporting Actress",
        &[
            ("fr", "Meilleure actrice dans un second rôle"),
            ("es", "Mejor actriz de reparto"),
            ("de", "Beste Nebendarstellerin"),
            ("ja", "助演女優賞"),
            ("zh", "最佳女配角"),
        ],
    ),
    (
        "Best Original Screenplay",
        &[
            ("fr", "Meilleur scénario original"),
            ("es", "Mejor guion original"),
            ("de", "Bestes Originaldrehbuch"),
            ("ja", "脚本賞"),
            ("zh", "最佳原创剧本"),
        ],
    ),
    (
        "Best Adapted Screenplay",
        &[
            ("fr", "Meilleur scénario adapté"),
            ("es", "Mejor guion adaptado"),
            ("de", "Bestes adaptiertes Drehbuch"),
            ("ja", "脚色賞"),
            ("zh", "最佳改编剧本"),
        ],
    ),
    (
        "Best International Feature Film",
        &[
            ("fr", "Meilleur film international"),
            ("es", "Mejor película internacional"),
            ("de", "Bester internationaler Film"),
            ("ja", "国際長編映画賞"),
            ("zh", "最佳国际影片"),
        ],
    ),
    (
        "Best Animated Feature",
        &[
            ("fr", "Meilleur film d'animation"),
            ("es", "Mejor película de animación"),
            ("de", "Bester Animationsfilm"),
            ("ja", "長編アニメ映画賞"),
            ("zh", "最佳动画长片"),
        ],
    ),
    (
        "Best Cinematography",
        &[
            ("fr", "Meilleure photographie"),
            ("es", "Mejor fotografía"),
            ("de", "Beste Kamera"),
            ("ja", "撮影賞"),
            ("zh", "最佳摄影"),
        ],
    ),
    (
        "Palme d'Or",
        &[
            ("es", "Palma de Oro"),
            ("de", "Goldene Palme"),
            ("ja", "パルム・ドール"),
            ("zh", "金棕榈奖"),
        ],
    ),
    (
        "Grand Prix",
        &[
            ("fr", "Grand Prix"),
            ("es", "Gran Premio"),
            ("de", "Großer Preis der Jury"),
            ("ja", "グランプリ"),
            ("zh", "评审团大奖"),
        ],
    ),
    (
        "Golden Lion",
        &[
            ("fr", "Lion d'or"),
            ("es", "León de Oro"),
            ("de", "Goldener Löwe"),
            ("ja", "金獅子賞"),
            ("zh", "金狮奖"),
        ],
    ),
    (
        "Golden Bear",
        &[
            ("fr", "Ours d'or"),
            ("es", "Oso de Oro"),
            ("de", "Goldener Bär"),
            ("ja", "金熊賞"),
            ("zh", "金熊奖"),
        ],
    ),
];

/// Translated award name for `locale`, or the English name
pub fn localize_award(award: &str, locale: &str) -> String {
    AWARD_TRANSLATIONS
        .iter()
        .find(|(name, _)| *name == award)
        .and_then(|(_, translations)| {
            translations
                .iter()
                .find(|(lang, _)| *lang == locale)
                .map(|(_, translated)| *translated)
        })
        .unwrap_or(award)
        .to_string()
}

/// Copy of the work with every recorded award name translated
pub fn localize_work(work: &MergedWork, locale: &str) -> MergedWork {
    let mut localized = work.clone();
    for awards in localized.awards.values_mut() {
        for award in awards.iter_mut() {
            *award = localize_award(award, locale);
        }
    }
    localized
}
