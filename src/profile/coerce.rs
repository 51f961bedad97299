//! Forgiving deserialization for user-shaped profile input.
//!
//! Assessment data arrives from web forms and device storage in loose
//! shapes: numeric strings, mixed case, out-of-range scores. Each
//! framework field coerces what it can and degrades to absent (with a
//! warning) instead of failing the whole profile.

use serde::de::{DeserializeOwned, Error as DeError};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{
    AttachmentStyle, BigFiveScores, ChineseZodiacAnimal, ChineseZodiacElement, Enneagram,
    Framework, LoveLanguage, LoveLanguageRanking, Mbti, ZodiacSign,
};

/// Deserialize an optional framework field, treating malformed data as
/// absent rather than an error. Rule evaluation then simply skips the
/// framework (a single bad field must not sink the whole analysis).
pub fn forgiving<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(value) = value else { return Ok(None) };
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value::<T>(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            tracing::warn!("discarding malformed framework data: {}", err);
            Ok(None)
        }
    }
}

/// Numeric or numeric-string value, rounded and clamped into 0..=100.
fn lenient_score(value: &Value) -> Option<u8> {
    let raw = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !raw.is_finite() {
        return None;
    }
    Some(raw.round().clamp(0.0, 100.0) as u8)
}

/// Numeric or numeric-string rank, rounded and clamped into 1..=5.
fn lenient_rank(value: &Value) -> Option<u8> {
    let raw = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !raw.is_finite() {
        return None;
    }
    Some(raw.round().clamp(1.0, 5.0) as u8)
}

/// Birth year as a number or numeric string. Range checks are the
/// validation layer's concern, not coercion's.
pub fn lenient_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let year = match &value {
        Value::Number(n) => n.as_f64().map(|f| f.round() as i32),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    };
    year.ok_or_else(|| D::Error::custom(format!("invalid year: {value}")))
}

fn parse_str_enum<'de, D, T>(
    deserializer: D,
    what: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).ok_or_else(|| D::Error::custom(format!("unknown {what}: '{s}'")))
}

impl Serialize for Mbti {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Mbti {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        parse_str_enum(deserializer, "MBTI code", Mbti::parse)
    }
}

impl Serialize for AttachmentStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AttachmentStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        parse_str_enum(deserializer, "attachment style", AttachmentStyle::parse)
    }
}

impl Serialize for LoveLanguage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LoveLanguage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        parse_str_enum(deserializer, "love language", LoveLanguage::parse)
    }
}

impl Serialize for ZodiacSign {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ZodiacSign {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        parse_str_enum(deserializer, "zodiac sign", ZodiacSign::parse)
    }
}

impl Serialize for ChineseZodiacAnimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChineseZodiacAnimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        parse_str_enum(deserializer, "chinese zodiac animal", ChineseZodiacAnimal::parse)
    }
}

impl Serialize for ChineseZodiacElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChineseZodiacElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        parse_str_enum(
            deserializer,
            "chinese zodiac element",
            ChineseZodiacElement::parse,
        )
    }
}

impl Serialize for super::HumanDesignKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for super::HumanDesignKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        parse_str_enum(deserializer, "human design type", super::HumanDesignKind::parse)
    }
}

impl Serialize for Framework {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Framework {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let parsed = match s.as_str() {
            "bigFive" => Framework::BigFive,
            "mbti" => Framework::Mbti,
            "zodiac" => Framework::Zodiac,
            "chineseZodiac" => Framework::ChineseZodiac,
            "humanDesign" => Framework::HumanDesign,
            "attachmentStyle" => Framework::AttachmentStyle,
            "loveLanguages" => Framework::LoveLanguages,
            "enneagram" => Framework::Enneagram,
            "general" => Framework::General,
            _ => return Err(D::Error::custom(format!("unknown framework: '{s}'"))),
        };
        Ok(parsed)
    }
}

impl<'de> Deserialize<'de> for BigFiveScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let map = value
            .as_object()
            .ok_or_else(|| D::Error::custom("big five scores must be an object"))?;
        let score = |name: &str| -> Result<u8, D::Error> {
            map.get(name)
                .and_then(lenient_score)
                .ok_or_else(|| D::Error::custom(format!("missing or invalid trait score: {name}")))
        };
        Ok(BigFiveScores {
            openness: score("openness")?,
            conscientiousness: score("conscientiousness")?,
            extraversion: score("extraversion")?,
            agreeableness: score("agreeableness")?,
            neuroticism: score("neuroticism")?,
        })
    }
}

impl Serialize for LoveLanguageRanking {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry {
            #[serde(rename = "type")]
            language: &'static str,
            rank: u8,
        }
        let mut seq = serializer.serialize_seq(Some(5))?;
        for (language, rank) in self.entries() {
            seq.serialize_element(&Entry {
                language: language.as_str(),
                rank,
            })?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for LoveLanguageRanking {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<Value>::deserialize(deserializer)?;
        let mut entries = Vec::with_capacity(raw.len());
        for item in &raw {
            let obj = item
                .as_object()
                .ok_or_else(|| D::Error::custom("love language entry must be an object"))?;
            let language = obj
                .get("type")
                .and_then(Value::as_str)
                .and_then(LoveLanguage::parse)
                .ok_or_else(|| D::Error::custom("missing or invalid love language type"))?;
            let rank = obj
                .get("rank")
                .and_then(lenient_rank)
                .ok_or_else(|| D::Error::custom("missing or invalid love language rank"))?;
            entries.push((language, rank));
        }
        LoveLanguageRanking::from_entries(&entries).map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Enneagram {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let digit = match &value {
            Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).map(|f| f.round()),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        digit
            .filter(|d| (1.0..=9.0).contains(d))
            .and_then(|d| Enneagram::new(d as u8))
            .ok_or_else(|| D::Error::custom(format!("enneagram type must be 1-9, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::super::Profile;
    use super::*;

    #[test]
    fn test_scores_clamped_on_deserialize() {
        let profile: Profile = serde_json::from_value(serde_json::json!({
            "bigFive": {
                "openness": 150,
                "conscientiousness": -10,
                "extraversion": "70",
                "agreeableness": 50.4,
                "neuroticism": 75
            }
        }))
        .unwrap();
        let scores = profile.big_five.unwrap();
        assert_eq!(scores.openness, 100);
        assert_eq!(scores.conscientiousness, 0);
        assert_eq!(scores.extraversion, 70);
        assert_eq!(scores.agreeableness, 50);
    }

    #[test]
    fn test_partial_big_five_degrades_to_absent() {
        let profile: Profile = serde_json::from_value(serde_json::json!({
            "bigFive": { "openness": 80 },
            "mbti": "enfp"
        }))
        .unwrap();
        assert!(profile.big_five.is_none());
        assert_eq!(profile.mbti, Some(Mbti::Enfp));
    }

    #[test]
    fn test_nan_trait_degrades_to_absent() {
        let profile: Profile = serde_json::from_value(serde_json::json!({
            "bigFive": {
                "openness": "not-a-number",
                "conscientiousness": 30,
                "extraversion": 70,
                "agreeableness": 50,
                "neuroticism": 75
            }
        }))
        .unwrap();
        assert!(profile.big_five.is_none());
    }

    #[test]
    fn test_invalid_mbti_degrades_to_absent() {
        let profile: Profile =
            serde_json::from_value(serde_json::json!({ "mbti": "XXXX" })).unwrap();
        assert!(profile.mbti.is_none());
    }

    #[test]
    fn test_duplicate_rank_degrades_to_absent() {
        let profile: Profile = serde_json::from_value(serde_json::json!({
            "loveLanguages": [
                { "type": "quality-time", "rank": 1 },
                { "type": "words-of-affirmation", "rank": 1 },
                { "type": "physical-touch", "rank": 3 },
                { "type": "acts-of-service", "rank": 4 },
                { "type": "gifts", "rank": 5 }
            ]
        }))
        .unwrap();
        assert!(profile.love_languages.is_none());
    }

    #[test]
    fn test_ranking_roundtrip_with_string_ranks() {
        let profile: Profile = serde_json::from_value(serde_json::json!({
            "loveLanguages": [
                { "type": "quality-time", "rank": "1" },
                { "type": "words-of-affirmation", "rank": 2 },
                { "type": "physical-touch", "rank": 3 },
                { "type": "acts-of-service", "rank": 4 },
                { "type": "gifts", "rank": 5 }
            ]
        }))
        .unwrap();
        assert_eq!(
            profile.primary_love_language(),
            Some(LoveLanguage::QualityTime)
        );
    }

    #[test]
    fn test_case_insensitive_attachment() {
        let profile: Profile = serde_json::from_value(serde_json::json!({
            "attachmentStyle": "Fearful-Avoidant"
        }))
        .unwrap();
        assert_eq!(
            profile.attachment_style,
            Some(AttachmentStyle::FearfulAvoidant)
        );
    }

    #[test]
    fn test_enneagram_lenient() {
        let profile: Profile =
            serde_json::from_value(serde_json::json!({ "enneagram": "4" })).unwrap();
        assert_eq!(profile.enneagram.map(|e| e.digit()), Some(4));
        let profile: Profile =
            serde_json::from_value(serde_json::json!({ "enneagram": 12 })).unwrap();
        assert!(profile.enneagram.is_none());
    }
}
