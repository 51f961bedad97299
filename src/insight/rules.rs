//! The rule vocabulary: conditions over a profile, static templates,
//! and the pairing of the two into weighted, prioritized rules.
//!
//! Tables stay pure data so each rule can be unit-tested in isolation
//! and new frameworks slot in without touching engine control flow.

use crate::profile::{
    AttachmentStyle, BigFiveTrait, Framework, HumanDesignKind, LoveLanguage, Mbti, Profile,
};

/// A predicate over a profile. Absent frameworks never match, so a
/// malformed (hence dropped) field silently narrows the candidate set
/// instead of failing the call.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    /// Trait score strictly above the cutoff.
    TraitAbove(BigFiveTrait, u8),
    /// Trait score strictly below the cutoff.
    TraitBelow(BigFiveTrait, u8),
    AttachmentIs(AttachmentStyle),
    /// Any attachment style other than secure.
    AttachmentInsecure,
    MbtiStartsWith(char),
    MbtiHasLetter(char),
    MbtiOneOf(&'static [Mbti]),
    PrimaryLoveLanguage(LoveLanguage),
    HumanDesignIs(HumanDesignKind),
    /// Cross-framework conjunction.
    AllOf(&'static [Condition]),
}

impl Condition {
    pub fn matches(&self, profile: &Profile) -> bool {
        match self {
            Condition::TraitAbove(t, cutoff) => {
                profile.trait_score(*t).is_some_and(|s| s > *cutoff)
            }
            Condition::TraitBelow(t, cutoff) => {
                profile.trait_score(*t).is_some_and(|s| s < *cutoff)
            }
            Condition::AttachmentIs(style) => profile.attachment_style == Some(*style),
            Condition::AttachmentInsecure => profile
                .attachment_style
                .is_some_and(|style| !style.is_secure()),
            Condition::MbtiStartsWith(letter) => profile
                .mbti
                .is_some_and(|m| m.as_str().starts_with(*letter)),
            Condition::MbtiHasLetter(letter) => {
                profile.mbti.is_some_and(|m| m.has_letter(*letter))
            }
            Condition::MbtiOneOf(codes) => profile.mbti.is_some_and(|m| codes.contains(&m)),
            Condition::PrimaryLoveLanguage(language) => {
                profile.primary_love_language() == Some(*language)
            }
            Condition::HumanDesignIs(kind) => {
                profile.human_design.as_ref().is_some_and(|hd| hd.kind == *kind)
            }
            Condition::AllOf(conditions) => conditions.iter().all(|c| c.matches(profile)),
        }
    }
}

/// Static insight text plus the base confidence the rule carries.
/// Bodies may hold `{mbti}` / `{attachment}` placeholders.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub title: &'static str,
    pub description: &'static str,
    pub explanation: &'static str,
    pub actionable: &'static str,
    pub confidence: f64,
}

/// One library entry: when `condition` holds, `template` becomes a
/// candidate at the given weight inside its priority group.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub condition: Condition,
    pub template: Template,
    pub weight: f64,
    /// Rule-group rank: 1 attachment, 2 Big Five / cross-framework,
    /// 3 MBTI, 4 love languages.
    pub priority: u8,
    pub sources: &'static [Framework],
}

/// Fill template placeholders from the profile.
pub fn render(text: &str, profile: &Profile) -> String {
    let mut out = text.to_string();
    if out.contains("{mbti}") {
        let code = profile.mbti.map(|m| m.as_str()).unwrap_or("your type");
        out = out.replace("{mbti}", code);
    }
    if out.contains("{attachment}") {
        let style = profile
            .attachment_style
            .map(|s| s.as_str())
            .unwrap_or("your");
        out = out.replace("{attachment}", style);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::BigFiveScores;

    fn profile_with_scores(neuroticism: u8) -> Profile {
        Profile {
            big_five: Some(BigFiveScores::clamped(50, 50, 50, 50, neuroticism as i64)),
            ..Profile::default()
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        let profile = profile_with_scores(70);
        assert!(!Condition::TraitAbove(BigFiveTrait::Neuroticism, 70).matches(&profile));
        let profile = profile_with_scores(71);
        assert!(Condition::TraitAbove(BigFiveTrait::Neuroticism, 70).matches(&profile));
    }

    #[test]
    fn test_absent_framework_never_matches() {
        let profile = Profile::default();
        assert!(!Condition::TraitAbove(BigFiveTrait::Openness, 0).matches(&profile));
        assert!(!Condition::MbtiStartsWith('E').matches(&profile));
        assert!(!Condition::AttachmentInsecure.matches(&profile));
        assert!(!Condition::PrimaryLoveLanguage(LoveLanguage::Gifts).matches(&profile));
    }

    #[test]
    fn test_conjunction() {
        let mut profile = profile_with_scores(75);
        profile.attachment_style = Some(AttachmentStyle::Anxious);
        let compounded = Condition::AllOf(&[
            Condition::AttachmentIs(AttachmentStyle::Anxious),
            Condition::TraitAbove(BigFiveTrait::Neuroticism, 70),
        ]);
        assert!(compounded.matches(&profile));
        profile.attachment_style = Some(AttachmentStyle::Secure);
        assert!(!compounded.matches(&profile));
    }

    #[test]
    fn test_mbti_one_of() {
        let mut profile = Profile::default();
        profile.mbti = Some(Mbti::Infj);
        let rare = Condition::MbtiOneOf(&[Mbti::Infj, Mbti::Intj]);
        assert!(rare.matches(&profile));
        profile.mbti = Some(Mbti::Esfp);
        assert!(!rare.matches(&profile));
    }

    #[test]
    fn test_render_placeholders() {
        let mut profile = Profile::default();
        profile.mbti = Some(Mbti::Infj);
        profile.attachment_style = Some(AttachmentStyle::Anxious);
        assert_eq!(
            render("{mbti} is one of the rarest types", &profile),
            "INFJ is one of the rarest types"
        );
        assert_eq!(
            render("{attachment} attachment - relationship work", &profile),
            "anxious attachment - relationship work"
        );
        assert_eq!(render("no placeholders here", &profile), "no placeholders here");
    }
}
