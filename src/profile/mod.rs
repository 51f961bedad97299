//! Profile model: typed, normalized assessment data across frameworks.
//! All invariants (score clamping, rank bijection) hold by construction.

pub mod coerce;
pub mod derive;
pub mod validate;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of frameworks that count toward profile completeness.
/// Enneagram is recorded but excluded, matching the assessment UI.
pub const RECOGNIZED_FRAMEWORKS: usize = 7;

/// One of the five Big Five traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigFiveTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl BigFiveTrait {
    pub const ALL: [BigFiveTrait; 5] = [
        BigFiveTrait::Openness,
        BigFiveTrait::Conscientiousness,
        BigFiveTrait::Extraversion,
        BigFiveTrait::Agreeableness,
        BigFiveTrait::Neuroticism,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BigFiveTrait::Openness => "openness",
            BigFiveTrait::Conscientiousness => "conscientiousness",
            BigFiveTrait::Extraversion => "extraversion",
            BigFiveTrait::Agreeableness => "agreeableness",
            BigFiveTrait::Neuroticism => "neuroticism",
        }
    }
}

/// Big Five scores, each clamped to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BigFiveScores {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

impl BigFiveScores {
    /// Build scores from raw values, clamping each into 0..=100.
    pub fn clamped(
        openness: i64,
        conscientiousness: i64,
        extraversion: i64,
        agreeableness: i64,
        neuroticism: i64,
    ) -> Self {
        let clamp = |v: i64| v.clamp(0, 100) as u8;
        Self {
            openness: clamp(openness),
            conscientiousness: clamp(conscientiousness),
            extraversion: clamp(extraversion),
            agreeableness: clamp(agreeableness),
            neuroticism: clamp(neuroticism),
        }
    }

    pub fn score(&self, t: BigFiveTrait) -> u8 {
        match t {
            BigFiveTrait::Openness => self.openness,
            BigFiveTrait::Conscientiousness => self.conscientiousness,
            BigFiveTrait::Extraversion => self.extraversion,
            BigFiveTrait::Agreeableness => self.agreeableness,
            BigFiveTrait::Neuroticism => self.neuroticism,
        }
    }
}

/// One of the 16 MBTI codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mbti {
    Intj,
    Intp,
    Entj,
    Entp,
    Infj,
    Infp,
    Enfj,
    Enfp,
    Istj,
    Isfj,
    Estj,
    Esfj,
    Istp,
    Isfp,
    Estp,
    Esfp,
}

impl Mbti {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mbti::Intj => "INTJ",
            Mbti::Intp => "INTP",
            Mbti::Entj => "ENTJ",
            Mbti::Entp => "ENTP",
            Mbti::Infj => "INFJ",
            Mbti::Infp => "INFP",
            Mbti::Enfj => "ENFJ",
            Mbti::Enfp => "ENFP",
            Mbti::Istj => "ISTJ",
            Mbti::Isfj => "ISFJ",
            Mbti::Estj => "ESTJ",
            Mbti::Esfj => "ESFJ",
            Mbti::Istp => "ISTP",
            Mbti::Isfp => "ISFP",
            Mbti::Estp => "ESTP",
            Mbti::Esfp => "ESFP",
        }
    }

    /// Parse any-case input ("enfp", " ENFP ") into a code.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "INTJ" => Some(Mbti::Intj),
            "INTP" => Some(Mbti::Intp),
            "ENTJ" => Some(Mbti::Entj),
            "ENTP" => Some(Mbti::Entp),
            "INFJ" => Some(Mbti::Infj),
            "INFP" => Some(Mbti::Infp),
            "ENFJ" => Some(Mbti::Enfj),
            "ENFP" => Some(Mbti::Enfp),
            "ISTJ" => Some(Mbti::Istj),
            "ISFJ" => Some(Mbti::Isfj),
            "ESTJ" => Some(Mbti::Estj),
            "ESFJ" => Some(Mbti::Esfj),
            "ISTP" => Some(Mbti::Istp),
            "ISFP" => Some(Mbti::Isfp),
            "ESTP" => Some(Mbti::Estp),
            "ESFP" => Some(Mbti::Esfp),
            _ => None,
        }
    }

    pub fn is_extraverted(&self) -> bool {
        self.as_str().starts_with('E')
    }

    /// Whether the code carries the given dimension letter (e.g. 'N', 'F').
    pub fn has_letter(&self, letter: char) -> bool {
        self.as_str().contains(letter)
    }
}

/// Adult attachment style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentStyle {
    Secure,
    Anxious,
    Avoidant,
    FearfulAvoidant,
}

impl AttachmentStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentStyle::Secure => "secure",
            AttachmentStyle::Anxious => "anxious",
            AttachmentStyle::Avoidant => "avoidant",
            AttachmentStyle::FearfulAvoidant => "fearful-avoidant",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "secure" => Some(AttachmentStyle::Secure),
            "anxious" => Some(AttachmentStyle::Anxious),
            "avoidant" => Some(AttachmentStyle::Avoidant),
            "fearful-avoidant" => Some(AttachmentStyle::FearfulAvoidant),
            _ => None,
        }
    }

    pub fn is_secure(&self) -> bool {
        matches!(self, AttachmentStyle::Secure)
    }
}

/// One of the five love languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoveLanguage {
    WordsOfAffirmation,
    QualityTime,
    ActsOfService,
    PhysicalTouch,
    Gifts,
}

impl LoveLanguage {
    pub const ALL: [LoveLanguage; 5] = [
        LoveLanguage::WordsOfAffirmation,
        LoveLanguage::QualityTime,
        LoveLanguage::ActsOfService,
        LoveLanguage::PhysicalTouch,
        LoveLanguage::Gifts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoveLanguage::WordsOfAffirmation => "words-of-affirmation",
            LoveLanguage::QualityTime => "quality-time",
            LoveLanguage::ActsOfService => "acts-of-service",
            LoveLanguage::PhysicalTouch => "physical-touch",
            LoveLanguage::Gifts => "gifts",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "words-of-affirmation" => Some(LoveLanguage::WordsOfAffirmation),
            "quality-time" => Some(LoveLanguage::QualityTime),
            "acts-of-service" => Some(LoveLanguage::ActsOfService),
            "physical-touch" => Some(LoveLanguage::PhysicalTouch),
            "gifts" => Some(LoveLanguage::Gifts),
            _ => None,
        }
    }
}

/// Why a set of love-language entries does not form a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankingError {
    #[error("expected 5 love languages, got {0}")]
    WrongCount(usize),
    #[error("rank {0} is outside 1..=5")]
    RankOutOfRange(u8),
    #[error("rank {0} appears more than once")]
    DuplicateRank(u8),
    #[error("love language '{}' appears more than once", .0.as_str())]
    DuplicateType(LoveLanguage),
}

/// A total order over the five love languages: index 0 holds rank 1.
/// Construction enforces the type/rank bijection; partial or duplicated
/// data never becomes a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoveLanguageRanking {
    order: [LoveLanguage; 5],
}

impl LoveLanguageRanking {
    pub fn from_entries(
        entries: &[(LoveLanguage, u8)],
    ) -> std::result::Result<Self, RankingError> {
        if entries.len() != 5 {
            return Err(RankingError::WrongCount(entries.len()));
        }
        let mut order = [None; 5];
        let mut seen_types: Vec<LoveLanguage> = Vec::with_capacity(5);
        for &(language, rank) in entries {
            if !(1..=5).contains(&rank) {
                return Err(RankingError::RankOutOfRange(rank));
            }
            if seen_types.contains(&language) {
                return Err(RankingError::DuplicateType(language));
            }
            seen_types.push(language);
            let slot = &mut order[(rank - 1) as usize];
            if slot.is_some() {
                return Err(RankingError::DuplicateRank(rank));
            }
            *slot = Some(language);
        }
        // len == 5, no duplicate rank, no duplicate type: every slot is filled
        let order = order.map(|slot| slot.unwrap_or(LoveLanguage::WordsOfAffirmation));
        Ok(Self { order })
    }

    /// The rank-1 language.
    pub fn primary(&self) -> LoveLanguage {
        self.order[0]
    }

    pub fn rank_of(&self, language: LoveLanguage) -> u8 {
        self.order
            .iter()
            .position(|l| *l == language)
            .map(|i| (i + 1) as u8)
            .unwrap_or(5)
    }

    /// Entries in rank order, rank 1 first.
    pub fn entries(&self) -> [(LoveLanguage, u8); 5] {
        [
            (self.order[0], 1),
            (self.order[1], 2),
            (self.order[2], 3),
            (self.order[3], 4),
            (self.order[4], 5),
        ]
    }
}

/// Western zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "aries" => Some(ZodiacSign::Aries),
            "taurus" => Some(ZodiacSign::Taurus),
            "gemini" => Some(ZodiacSign::Gemini),
            "cancer" => Some(ZodiacSign::Cancer),
            "leo" => Some(ZodiacSign::Leo),
            "virgo" => Some(ZodiacSign::Virgo),
            "libra" => Some(ZodiacSign::Libra),
            "scorpio" => Some(ZodiacSign::Scorpio),
            "sagittarius" => Some(ZodiacSign::Sagittarius),
            "capricorn" => Some(ZodiacSign::Capricorn),
            "aquarius" => Some(ZodiacSign::Aquarius),
            "pisces" => Some(ZodiacSign::Pisces),
            _ => None,
        }
    }
}

/// Sun placement plus optional moon/rising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZodiacPlacements {
    pub sun: ZodiacSign,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moon: Option<ZodiacSign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rising: Option<ZodiacSign>,
}

/// Chinese zodiac animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChineseZodiacAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ChineseZodiacAnimal {
    pub const CYCLE: [ChineseZodiacAnimal; 12] = [
        ChineseZodiacAnimal::Rat,
        ChineseZodiacAnimal::Ox,
        ChineseZodiacAnimal::Tiger,
        ChineseZodiacAnimal::Rabbit,
        ChineseZodiacAnimal::Dragon,
        ChineseZodiacAnimal::Snake,
        ChineseZodiacAnimal::Horse,
        ChineseZodiacAnimal::Goat,
        ChineseZodiacAnimal::Monkey,
        ChineseZodiacAnimal::Rooster,
        ChineseZodiacAnimal::Dog,
        ChineseZodiacAnimal::Pig,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChineseZodiacAnimal::Rat => "rat",
            ChineseZodiacAnimal::Ox => "ox",
            ChineseZodiacAnimal::Tiger => "tiger",
            ChineseZodiacAnimal::Rabbit => "rabbit",
            ChineseZodiacAnimal::Dragon => "dragon",
            ChineseZodiacAnimal::Snake => "snake",
            ChineseZodiacAnimal::Horse => "horse",
            ChineseZodiacAnimal::Goat => "goat",
            ChineseZodiacAnimal::Monkey => "monkey",
            ChineseZodiacAnimal::Rooster => "rooster",
            ChineseZodiacAnimal::Dog => "dog",
            ChineseZodiacAnimal::Pig => "pig",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::CYCLE
            .iter()
            .copied()
            .find(|a| a.as_str() == s.trim().to_lowercase())
    }
}

/// Chinese zodiac element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChineseZodiacElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl ChineseZodiacElement {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChineseZodiacElement::Wood => "wood",
            ChineseZodiacElement::Fire => "fire",
            ChineseZodiacElement::Earth => "earth",
            ChineseZodiacElement::Metal => "metal",
            ChineseZodiacElement::Water => "water",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "wood" => Some(ChineseZodiacElement::Wood),
            "fire" => Some(ChineseZodiacElement::Fire),
            "earth" => Some(ChineseZodiacElement::Earth),
            "metal" => Some(ChineseZodiacElement::Metal),
            "water" => Some(ChineseZodiacElement::Water),
            _ => None,
        }
    }
}

/// Chinese zodiac placement: animal, element, birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChineseZodiac {
    pub animal: ChineseZodiacAnimal,
    pub element: ChineseZodiacElement,
    #[serde(deserialize_with = "coerce::lenient_year")]
    pub year: i32,
}

/// Human Design energy type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanDesignKind {
    Manifestor,
    Generator,
    ManifestingGenerator,
    Projector,
    Reflector,
}

impl HumanDesignKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HumanDesignKind::Manifestor => "manifestor",
            HumanDesignKind::Generator => "generator",
            HumanDesignKind::ManifestingGenerator => "manifesting-generator",
            HumanDesignKind::Projector => "projector",
            HumanDesignKind::Reflector => "reflector",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "manifestor" => Some(HumanDesignKind::Manifestor),
            "generator" => Some(HumanDesignKind::Generator),
            "manifesting-generator" => Some(HumanDesignKind::ManifestingGenerator),
            "projector" => Some(HumanDesignKind::Projector),
            "reflector" => Some(HumanDesignKind::Reflector),
            _ => None,
        }
    }
}

/// Human Design placement: type plus optional authority and profile line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanDesign {
    #[serde(rename = "type")]
    pub kind: HumanDesignKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

/// Enneagram type, 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Enneagram(u8);

impl Enneagram {
    pub fn new(digit: u8) -> Option<Self> {
        (1..=9).contains(&digit).then_some(Self(digit))
    }

    pub fn digit(&self) -> u8 {
        self.0
    }
}

/// Tag for the framework(s) an insight or pattern draws on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Framework {
    BigFive,
    Mbti,
    Zodiac,
    ChineseZodiac,
    HumanDesign,
    AttachmentStyle,
    LoveLanguages,
    Enneagram,
    General,
}

impl Framework {
    /// The seven frameworks counted toward completeness.
    pub const RECOGNIZED: [Framework; RECOGNIZED_FRAMEWORKS] = [
        Framework::BigFive,
        Framework::Mbti,
        Framework::Zodiac,
        Framework::ChineseZodiac,
        Framework::HumanDesign,
        Framework::AttachmentStyle,
        Framework::LoveLanguages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::BigFive => "bigFive",
            Framework::Mbti => "mbti",
            Framework::Zodiac => "zodiac",
            Framework::ChineseZodiac => "chineseZodiac",
            Framework::HumanDesign => "humanDesign",
            Framework::AttachmentStyle => "attachmentStyle",
            Framework::LoveLanguages => "loveLanguages",
            Framework::Enneagram => "enneagram",
            Framework::General => "general",
        }
    }
}

/// A user's assessment record. Every framework is optional; absent data
/// simply narrows which rules can fire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "timestamp", default = "Utc::now")]
    pub recorded_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "coerce::forgiving", skip_serializing_if = "Option::is_none")]
    pub big_five: Option<BigFiveScores>,
    #[serde(default, deserialize_with = "coerce::forgiving", skip_serializing_if = "Option::is_none")]
    pub mbti: Option<Mbti>,
    #[serde(default, deserialize_with = "coerce::forgiving", skip_serializing_if = "Option::is_none")]
    pub zodiac: Option<ZodiacPlacements>,
    #[serde(default, deserialize_with = "coerce::forgiving", skip_serializing_if = "Option::is_none")]
    pub chinese_zodiac: Option<ChineseZodiac>,
    #[serde(default, deserialize_with = "coerce::forgiving", skip_serializing_if = "Option::is_none")]
    pub human_design: Option<HumanDesign>,
    #[serde(default, deserialize_with = "coerce::forgiving", skip_serializing_if = "Option::is_none")]
    pub attachment_style: Option<AttachmentStyle>,
    #[serde(default, deserialize_with = "coerce::forgiving", skip_serializing_if = "Option::is_none")]
    pub love_languages: Option<LoveLanguageRanking>,
    #[serde(default, deserialize_with = "coerce::forgiving", skip_serializing_if = "Option::is_none")]
    pub enneagram: Option<Enneagram>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            user_id: None,
            recorded_at: Utc::now(),
            big_five: None,
            mbti: None,
            zodiac: None,
            chinese_zodiac: None,
            human_design: None,
            attachment_style: None,
            love_languages: None,
            enneagram: None,
        }
    }
}

impl Profile {
    fn has(&self, framework: Framework) -> bool {
        match framework {
            Framework::BigFive => self.big_five.is_some(),
            Framework::Mbti => self.mbti.is_some(),
            Framework::Zodiac => self.zodiac.is_some(),
            Framework::ChineseZodiac => self.chinese_zodiac.is_some(),
            Framework::HumanDesign => self.human_design.is_some(),
            Framework::AttachmentStyle => self.attachment_style.is_some(),
            Framework::LoveLanguages => self.love_languages.is_some(),
            Framework::Enneagram => self.enneagram.is_some(),
            Framework::General => false,
        }
    }

    /// Recognized frameworks with data present.
    pub fn populated(&self) -> Vec<Framework> {
        Framework::RECOGNIZED
            .iter()
            .copied()
            .filter(|f| self.has(*f))
            .collect()
    }

    /// Percentage of recognized frameworks populated, rounded.
    pub fn completeness(&self) -> u8 {
        let populated = self.populated().len();
        ((populated as f64 / RECOGNIZED_FRAMEWORKS as f64) * 100.0).round() as u8
    }

    /// True when any framework at all (enneagram included) carries data.
    pub fn has_any_data(&self) -> bool {
        !self.populated().is_empty() || self.enneagram.is_some()
    }

    pub fn trait_score(&self, t: BigFiveTrait) -> Option<u8> {
        self.big_five.map(|scores| scores.score(t))
    }

    pub fn primary_love_language(&self) -> Option<LoveLanguage> {
        self.love_languages.map(|r| r.primary())
    }

    /// Parse a profile from a JSON document, coercing what it can and
    /// dropping what it can't.
    pub fn from_json(raw: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Same as [`Profile::from_json`] for an already-parsed value.
    pub fn from_value(value: serde_json::Value) -> crate::error::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_five_clamping() {
        let scores = BigFiveScores::clamped(150, -10, 50, 100, 0);
        assert_eq!(scores.openness, 100);
        assert_eq!(scores.conscientiousness, 0);
        assert_eq!(scores.extraversion, 50);
        assert_eq!(scores.agreeableness, 100);
        assert_eq!(scores.neuroticism, 0);
    }

    #[test]
    fn test_mbti_parse_any_case() {
        assert_eq!(Mbti::parse("enfp"), Some(Mbti::Enfp));
        assert_eq!(Mbti::parse(" INTJ "), Some(Mbti::Intj));
        assert_eq!(Mbti::parse("ABCD"), None);
        assert_eq!(Mbti::parse("ENF"), None);
    }

    #[test]
    fn test_mbti_letters() {
        assert!(Mbti::Enfp.is_extraverted());
        assert!(!Mbti::Infj.is_extraverted());
        assert!(Mbti::Infj.has_letter('N'));
        assert!(Mbti::Istp.has_letter('T'));
        assert!(!Mbti::Istp.has_letter('F'));
    }

    #[test]
    fn test_ranking_bijection() {
        let entries = [
            (LoveLanguage::QualityTime, 1),
            (LoveLanguage::WordsOfAffirmation, 2),
            (LoveLanguage::PhysicalTouch, 3),
            (LoveLanguage::ActsOfService, 4),
            (LoveLanguage::Gifts, 5),
        ];
        let ranking = LoveLanguageRanking::from_entries(&entries).unwrap();
        assert_eq!(ranking.primary(), LoveLanguage::QualityTime);
        assert_eq!(ranking.rank_of(LoveLanguage::Gifts), 5);
    }

    #[test]
    fn test_ranking_rejects_duplicate_rank() {
        let entries = [
            (LoveLanguage::QualityTime, 1),
            (LoveLanguage::WordsOfAffirmation, 1),
            (LoveLanguage::PhysicalTouch, 3),
            (LoveLanguage::ActsOfService, 4),
            (LoveLanguage::Gifts, 5),
        ];
        assert_eq!(
            LoveLanguageRanking::from_entries(&entries),
            Err(RankingError::DuplicateRank(1))
        );
    }

    #[test]
    fn test_ranking_rejects_duplicate_type() {
        let entries = [
            (LoveLanguage::QualityTime, 1),
            (LoveLanguage::QualityTime, 2),
            (LoveLanguage::PhysicalTouch, 3),
            (LoveLanguage::ActsOfService, 4),
            (LoveLanguage::Gifts, 5),
        ];
        assert_eq!(
            LoveLanguageRanking::from_entries(&entries),
            Err(RankingError::DuplicateType(LoveLanguage::QualityTime))
        );
    }

    #[test]
    fn test_ranking_rejects_partial() {
        let entries = [(LoveLanguage::QualityTime, 1)];
        assert_eq!(
            LoveLanguageRanking::from_entries(&entries),
            Err(RankingError::WrongCount(1))
        );
    }

    #[test]
    fn test_completeness_counts_seven_frameworks() {
        let mut profile = Profile::default();
        assert_eq!(profile.completeness(), 0);
        profile.big_five = Some(BigFiveScores::clamped(50, 50, 50, 50, 50));
        profile.mbti = Some(Mbti::Enfp);
        profile.attachment_style = Some(AttachmentStyle::Secure);
        // 3 of 7 -> 43
        assert_eq!(profile.completeness(), 43);
    }

    #[test]
    fn test_enneagram_outside_completeness() {
        let mut profile = Profile::default();
        profile.enneagram = Enneagram::new(4);
        assert_eq!(profile.completeness(), 0);
        assert!(profile.has_any_data());
    }

    #[test]
    fn test_enneagram_range() {
        assert!(Enneagram::new(0).is_none());
        assert!(Enneagram::new(10).is_none());
        assert_eq!(Enneagram::new(9).map(|e| e.digit()), Some(9));
    }
}
