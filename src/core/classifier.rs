//! Keyword-rule classification of contact-message subjects.
//!
//! A [`RuleTable`] is an ordered list of `(keywords, label)` pairs plus a
//! default label. Evaluation lower-cases the input and returns the label of
//! the first rule with any keyword occurring as a substring; rule order is
//! the tie-break.

use crate::domain::model::{ContactMessage, PracticeArea, UrgencyLevel};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<L> {
    keywords: Vec<String>,
    label: L,
}

impl<L: Copy> Rule<L> {
    pub fn new<I, S>(label: L, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().to_lowercase())
                .collect(),
            label,
        }
    }

    pub fn label(&self) -> L {
        self.label
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// `lowered` must already be lower-cased.
    fn matches(&self, lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable<L> {
    rules: Vec<Rule<L>>,
    default: L,
}

pub type UrgencyRules = RuleTable<UrgencyLevel>;
pub type PracticeAreaRules = RuleTable<PracticeArea>;

impl<L: Copy + std::fmt::Debug> RuleTable<L> {
    pub fn new(rules: Vec<Rule<L>>, default: L) -> Self {
        Self { rules, default }
    }

    pub fn rules(&self) -> &[Rule<L>] {
        &self.rules
    }

    pub fn default_label(&self) -> L {
        self.default
    }

    pub fn classify(&self, text: &str) -> L {
        let lowered = text.to_lowercase();
        match self
            .rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(&lowered))
        {
            Some((index, rule)) => {
                tracing::trace!(rule = index, label = ?rule.label, "keyword rule matched");
                rule.label
            }
            None => self.default,
        }
    }
}

impl Default for UrgencyRules {
    fn default() -> Self {
        RuleTable::new(
            vec![
                Rule::new(
                    UrgencyLevel::Urgent,
                    ["urgent", "emergency", "arrest", "deadline", "tomorrow"],
                ),
                Rule::new(
                    UrgencyLevel::High,
                    ["judicial", "process", "hearing", "attorney"],
                ),
            ],
            UrgencyLevel::Normal,
        )
    }
}

impl Default for PracticeAreaRules {
    fn default() -> Self {
        RuleTable::new(
            vec![
                Rule::new(PracticeArea::Civil, ["civil", "contract", "damages"]),
                Rule::new(
                    PracticeArea::Business,
                    ["business", "commercial", "corporate"],
                ),
                Rule::new(PracticeArea::Family, ["family", "divorce", "alimony"]),
                Rule::new(
                    PracticeArea::Health,
                    ["health", "insurance", "medical", "medicare"],
                ),
                Rule::new(
                    PracticeArea::Labor,
                    ["labor", "employment", "termination"],
                ),
                Rule::new(
                    PracticeArea::Tax,
                    ["tax", "fiscal", "taxation", "tax execution"],
                ),
            ],
            PracticeArea::GeneralConsultation,
        )
    }
}

/// Both labels attached to an outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub urgency_level: UrgencyLevel,
    pub practice_area: PracticeArea,
}

#[derive(Debug, Clone, Default)]
pub struct Classifier {
    urgency: UrgencyRules,
    practice_area: PracticeAreaRules,
}

impl Classifier {
    pub fn new(urgency: UrgencyRules, practice_area: PracticeAreaRules) -> Self {
        Self {
            urgency,
            practice_area,
        }
    }

    pub fn classify_urgency(&self, subject: &str) -> UrgencyLevel {
        self.urgency.classify(subject)
    }

    pub fn classify_practice_area(&self, subject: &str) -> PracticeArea {
        self.practice_area.classify(subject)
    }

    pub fn classify(&self, message: &ContactMessage) -> Classification {
        let classification = Classification {
            urgency_level: self.classify_urgency(&message.subject),
            practice_area: self.classify_practice_area(&message.subject),
        };
        tracing::debug!(
            urgency = %classification.urgency_level,
            practice_area = %classification.practice_area,
            "classified contact message"
        );
        classification
    }
}

/// Urgency under the built-in rule table.
pub fn classify_urgency(subject: &str) -> UrgencyLevel {
    UrgencyRules::default().classify(subject)
}

/// Practice area under the built-in rule table.
pub fn classify_practice_area(subject: &str) -> PracticeArea {
    PracticeAreaRules::default().classify(subject)
}
