//! Self-improvement rule table: growth opportunities, compounded
//! sensitivities, and cross-framework contradictions.

use crate::insight::rules::{Condition, Rule, Template};
use crate::profile::{AttachmentStyle, BigFiveTrait, Framework, HumanDesignKind};

pub static RULES: &[Rule] = &[
    Rule {
        condition: Condition::AttachmentIs(AttachmentStyle::Anxious),
        template: Template {
            title: "Building Emotional Self-Reliance",
            description: "Your anxious attachment style suggests you may seek excessive reassurance in relationships",
            explanation: "Anxious attachment often develops from inconsistent caregiving in childhood. This pattern can lead to relationship anxiety and fear of abandonment. The good news is that attachment styles can evolve with awareness and practice.",
            actionable: "Practice self-soothing techniques when feeling anxious. Start a daily journaling practice to identify triggers. Consider therapy focused on attachment work, particularly EMDR or somatic experiencing.",
            confidence: 0.85,
        },
        weight: 0.4,
        priority: 1,
        sources: &[Framework::AttachmentStyle],
    },
    Rule {
        condition: Condition::AttachmentIs(AttachmentStyle::Avoidant),
        template: Template {
            title: "Embracing Emotional Vulnerability",
            description: "Your avoidant attachment style indicates you may struggle with emotional intimacy",
            explanation: "Avoidant attachment typically forms as a protective mechanism when emotional needs were dismissed or overwhelming. While independence is valuable, deep connections require vulnerability.",
            actionable: "Start small by sharing one feeling daily with someone you trust. Practice staying present during emotional conversations instead of withdrawing. Explore therapy to understand your emotional patterns.",
            confidence: 0.85,
        },
        weight: 0.4,
        priority: 1,
        sources: &[Framework::AttachmentStyle],
    },
    Rule {
        condition: Condition::AttachmentIs(AttachmentStyle::FearfulAvoidant),
        template: Template {
            title: "Navigating the Push-Pull Dynamic",
            description: "Your fearful-avoidant attachment creates a challenging push-pull pattern in relationships",
            explanation: "Fearful-avoidant attachment combines both anxious and avoidant patterns, creating internal conflict between wanting closeness and fearing it. This is often the result of trauma or highly inconsistent caregiving.",
            actionable: "Work with a trauma-informed therapist who specializes in attachment. Practice grounding techniques when feeling overwhelmed. Build awareness of your push-pull patterns through mindful observation.",
            confidence: 0.9,
        },
        weight: 0.4,
        priority: 1,
        sources: &[Framework::AttachmentStyle],
    },
    Rule {
        condition: Condition::AllOf(&[
            Condition::AttachmentIs(AttachmentStyle::Anxious),
            Condition::TraitAbove(BigFiveTrait::Neuroticism, 70),
        ]),
        template: Template {
            title: "Managing Heightened Emotional Sensitivity",
            description: "Your combination of anxious attachment and high neuroticism creates intense emotional experiences",
            explanation: "When anxious attachment combines with high neuroticism, emotional reactions can feel overwhelming. This isn't a flaw - it's heightened sensitivity that needs specific tools to manage effectively.",
            actionable: "Develop a daily mindfulness practice (even 5 minutes helps). Learn the \"RAIN\" technique (Recognize, Allow, Investigate, Nurture) for intense emotions. Consider medication evaluation with a psychiatrist if anxiety is debilitating.",
            confidence: 0.88,
        },
        weight: 0.45,
        priority: 1,
        sources: &[Framework::AttachmentStyle, Framework::BigFive],
    },
    Rule {
        condition: Condition::TraitBelow(BigFiveTrait::Conscientiousness, 40),
        template: Template {
            title: "Building Sustainable Organization Systems",
            description: "Your lower conscientiousness score suggests organization and follow-through may be challenging",
            explanation: "Low conscientiousness isn't about being lazy - it often means you're more spontaneous and flexible. However, modern life requires some structure. The key is building systems that work with your natural tendencies, not against them.",
            actionable: "Use external systems instead of willpower: set phone reminders, use habit-stacking (attach new habits to existing ones), and create visible cues. Start with ONE small habit and build from there. Consider body-doubling or accountability partners.",
            confidence: 0.75,
        },
        weight: 0.3,
        priority: 2,
        sources: &[Framework::BigFive],
    },
    Rule {
        condition: Condition::TraitAbove(BigFiveTrait::Neuroticism, 70),
        template: Template {
            title: "Developing Emotional Regulation Skills",
            description: "Your high neuroticism score indicates you experience emotions intensely and frequently",
            explanation: "High neuroticism means your emotional system is highly responsive - you feel things deeply. While this can be exhausting, it also means you're capable of profound empathy and awareness. The goal isn't to feel less, but to regulate more effectively.",
            actionable: "Learn and practice emotional regulation techniques: box breathing (4-4-4-4), progressive muscle relaxation, or the 5-4-3-2-1 grounding technique. Regular exercise significantly reduces neuroticism. Consider CBT or DBT therapy.",
            confidence: 0.8,
        },
        weight: 0.32,
        priority: 2,
        sources: &[Framework::BigFive],
    },
    Rule {
        condition: Condition::TraitBelow(BigFiveTrait::Agreeableness, 40),
        template: Template {
            title: "Balancing Assertiveness with Collaboration",
            description: "Your lower agreeableness suggests you prioritize honesty and independence over harmony",
            explanation: "Low agreeableness isn't about being mean - it often indicates strong boundaries and directness. However, relationships require some compromise and empathy. You can maintain your authenticity while developing collaborative skills.",
            actionable: "Practice perspective-taking: before responding, ask \"What might they be feeling?\" Use \"I\" statements to express disagreement without attacking. Recognize when to prioritize the relationship over being right.",
            confidence: 0.72,
        },
        weight: 0.28,
        priority: 2,
        sources: &[Framework::BigFive],
    },
    Rule {
        condition: Condition::TraitBelow(BigFiveTrait::Extraversion, 30),
        template: Template {
            title: "Managing Social Energy Strategically",
            description: "Your low extraversion means social interaction drains rather than energizes you",
            explanation: "Being introverted in an extraverted world can feel exhausting. The key is honoring your need for solitude while maintaining necessary social connections. You don't need to become extraverted - you need strategies that work for your energy system.",
            actionable: "Schedule recovery time after social events. Communicate your needs clearly (\"I need to recharge alone\"). Choose quality over quantity in friendships. Find social activities that align with your interests rather than forcing small talk.",
            confidence: 0.7,
        },
        weight: 0.25,
        priority: 3,
        sources: &[Framework::BigFive],
    },
    Rule {
        condition: Condition::AllOf(&[
            Condition::MbtiStartsWith('E'),
            Condition::TraitBelow(BigFiveTrait::Extraversion, 40),
        ]),
        template: Template {
            title: "Understanding Your Social Energy Paradox",
            description: "Your MBTI suggests extraversion, but your Big Five score indicates introversion",
            explanation: "This contradiction often means you enjoy social interaction in specific contexts (like discussing ideas) but find general socializing draining. You might be a \"social introvert\" or have developed extraverted behaviors that don't match your natural energy patterns.",
            actionable: "Identify which social situations energize vs. drain you. Honor your need for alone time even if you seem outgoing. Choose social activities that align with your interests and values rather than forcing yourself into typical \"extraverted\" activities.",
            confidence: 0.7,
        },
        weight: 0.3,
        priority: 2,
        sources: &[Framework::Mbti, Framework::BigFive],
    },
    Rule {
        condition: Condition::AllOf(&[
            Condition::MbtiStartsWith('I'),
            Condition::TraitAbove(BigFiveTrait::Extraversion, 60),
        ]),
        template: Template {
            title: "Reconciling Your Social Identity",
            description: "Your MBTI suggests introversion, but your Big Five score indicates extraversion",
            explanation: "This pattern might indicate you've identified as introverted due to social anxiety or past experiences, but you actually gain energy from social interaction. Or you might be an \"extraverted introvert\" who needs people but in specific ways.",
            actionable: "Experiment with different types of social engagement. Notice when you feel energized vs. drained. Consider whether social anxiety or past experiences have shaped your self-perception. You might benefit from gradually expanding your social comfort zone.",
            confidence: 0.68,
        },
        weight: 0.28,
        priority: 2,
        sources: &[Framework::Mbti, Framework::BigFive],
    },
    Rule {
        condition: Condition::AllOf(&[
            Condition::HumanDesignIs(HumanDesignKind::Projector),
            Condition::TraitBelow(BigFiveTrait::Conscientiousness, 40),
        ]),
        template: Template {
            title: "Creating Systems for Your Projector Energy",
            description: "As a Projector with low conscientiousness, you need external structure to thrive",
            explanation: "Projectors aren't designed to work like Generators - you need rest and recognition. Combined with low conscientiousness, traditional productivity advice won't work. You need systems designed for your specific energy type.",
            actionable: "Work in focused bursts with significant rest between. Wait for invitations and recognition before offering guidance. Create visual systems and external accountability. Your value is in insight, not constant output.",
            confidence: 0.73,
        },
        weight: 0.3,
        priority: 2,
        sources: &[Framework::HumanDesign, Framework::BigFive],
    },
];

/// Emitted when no growth rule fires but the profile carries data.
pub static FALLBACK: Template = Template {
    title: "Keep Building Self-Awareness",
    description: "Your profile doesn't flag a specific growth area yet, which is itself worth exploring",
    explanation: "Growth insights sharpen as more frameworks are completed. With the data so far, no single pattern stands out as a development priority - that usually means either balanced traits or incomplete data.",
    actionable: "Complete the attachment style and Big Five assessments if you haven't. Revisit your answers honestly - extreme answers often reveal more than safe middle ones.",
    confidence: 0.3,
};
