use crate::core::classifier::{PracticeAreaRules, UrgencyRules};
use crate::domain::model::ServiceEntry;

/// Source of the immutable data the core runs over.
pub trait CatalogProvider: Send + Sync {
    fn services(&self) -> &[ServiceEntry];
    fn urgency_rules(&self) -> UrgencyRules;
    fn practice_area_rules(&self) -> PracticeAreaRules;
}
