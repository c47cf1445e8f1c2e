use crate::core::catalog::Catalog;
use crate::core::classifier::{Classifier, PracticeAreaRules, Rule, RuleTable, UrgencyRules};
use crate::core::submission::SubmissionSettings;
use crate::domain::model::{PracticeArea, ServiceEntry, UrgencyLevel};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

const BUILTIN_CATALOG: &str = include_str!("../../config/catalog.toml");

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub catalog: CatalogInfo,
    pub submission: SubmissionSettings,
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
    pub urgency_rules: Option<Vec<RuleConfig<UrgencyLevel>>>,
    pub practice_area_rules: Option<Vec<RuleConfig<PracticeArea>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub name: String,
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig<L> {
    pub label: L,
    pub keywords: Vec<String>,
}

impl CatalogConfig {
    /// Loads and parses a catalog file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let config: Self = toml::from_str(&processed_content)?;
        tracing::debug!(
            catalog = %config.catalog.name,
            services = config.services.len(),
            "parsed catalog configuration"
        );
        Ok(config)
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Expands `${VAR}` from the environment. Unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.services.clone())
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.urgency_rules(), self.practice_area_rules())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("catalog.name", &self.catalog.name)?;
        validation::validate_email("submission.recipient", &self.submission.recipient)?;

        for service in &self.services {
            validation::validate_non_empty_string("services.id", &service.id)?;
            validation::validate_non_empty_string(
                &format!("services[{}].title", service.id),
                &service.title,
            )?;
        }
        validation::validate_unique("services.id", self.services.iter().map(|s| s.id.as_str()))?;

        if let Some(rules) = &self.urgency_rules {
            validate_rules("urgency_rules", rules)?;
        }
        if let Some(rules) = &self.practice_area_rules {
            validate_rules("practice_area_rules", rules)?;
        }

        Ok(())
    }
}

fn validate_rules<L>(field_name: &str, rules: &[RuleConfig<L>]) -> Result<()> {
    for (index, rule) in rules.iter().enumerate() {
        let field = format!("{}[{}].keywords", field_name, index);
        validation::validate_non_empty_list(&field, &rule.keywords)?;
        for keyword in &rule.keywords {
            // an empty keyword would match every subject
            validation::validate_non_empty_string(&field, keyword)?;
        }
    }
    Ok(())
}

fn build_table<L: Copy + std::fmt::Debug>(rules: &[RuleConfig<L>], default: L) -> RuleTable<L> {
    RuleTable::new(
        rules
            .iter()
            .map(|rule| Rule::new(rule.label, &rule.keywords))
            .collect(),
        default,
    )
}

impl CatalogProvider for CatalogConfig {
    fn services(&self) -> &[ServiceEntry] {
        &self.services
    }

    fn urgency_rules(&self) -> UrgencyRules {
        match &self.urgency_rules {
            Some(rules) => build_table(rules, UrgencyLevel::Normal),
            None => UrgencyRules::default(),
        }
    }

    fn practice_area_rules(&self) -> PracticeAreaRules {
        match &self.practice_area_rules {
            Some(rules) => build_table(rules, PracticeArea::GeneralConsultation),
            None => PracticeAreaRules::default(),
        }
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ServiceCategory;
    use crate::utils::error::LawdeskError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"
[catalog]
name = "test-catalog"

[submission]
recipient = "desk@example.com"

[[services]]
id = "civil-law"
title = "Civil Law"
description = "Civil matters"
features = ["Contracts"]
category = "civil"
"#;

    #[test]
    fn test_parse_minimal_config() {
        let config = CatalogConfig::from_toml_str(MINIMAL).unwrap();

        assert_eq!(config.catalog.name, "test-catalog");
        assert_eq!(config.submission.source, "Website - Contact Form");
        assert_eq!(config.services.len(), 1);
        assert_eq!(config.services[0].category, ServiceCategory::Civil);
        assert!(config.validate().is_ok());
        // rule tables fall back to the built-ins
        assert_eq!(config.urgency_rules(), UrgencyRules::default());
        assert_eq!(config.practice_area_rules(), PracticeAreaRules::default());
    }

    #[test]
    fn test_builtin_catalog_matches_default_rules() {
        let config = CatalogConfig::builtin().unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.services.len(), 6);
        assert_eq!(config.urgency_rules(), UrgencyRules::default());
        assert_eq!(config.practice_area_rules(), PracticeAreaRules::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LAWDESK_TEST_RECIPIENT", "intake@example.com");

        let content = MINIMAL.replace("desk@example.com", "${LAWDESK_TEST_RECIPIENT}");
        let config = CatalogConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.submission.recipient, "intake@example.com");

        std::env::remove_var("LAWDESK_TEST_RECIPIENT");
    }

    #[test]
    fn test_unknown_env_var_is_left_verbatim() {
        let content = MINIMAL.replace("test-catalog", "${LAWDESK_TEST_UNSET_VAR}");
        let config = CatalogConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.catalog.name, "${LAWDESK_TEST_UNSET_VAR}");
    }

    #[test]
    fn test_unknown_category_is_rejected_at_parse_time() {
        let content = MINIMAL.replace("category = \"civil\"", "category = \"maritime\"");
        let err = CatalogConfig::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, LawdeskError::TomlError(_)));
    }

    #[test]
    fn test_duplicate_ids_fail_validation() {
        let content = format!(
            "{}\n[[services]]\nid = \"civil-law\"\ntitle = \"Again\"\ndescription = \"\"\ncategory = \"family\"\n",
            MINIMAL
        );
        let config = CatalogConfig::from_toml_str(&content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_keyword_fails_validation() {
        let content = format!(
            "{}\n[[urgency_rules]]\nlabel = \"HIGH\"\nkeywords = [\"\"]\n",
            MINIMAL
        );
        let config = CatalogConfig::from_toml_str(&content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_custom_rule_order_is_preserved() {
        let content = format!(
            r#"{}
[[practice_area_rules]]
label = "tax"
keywords = ["TAX"]

[[practice_area_rules]]
label = "business"
keywords = ["business"]
"#,
            MINIMAL
        );
        let config = CatalogConfig::from_toml_str(&content).unwrap();
        let classifier = config.classifier();
        assert_eq!(
            classifier.classify_practice_area("business tax question"),
            PracticeArea::Tax
        );
        assert_eq!(
            classifier.classify_practice_area("divorce"),
            PracticeArea::GeneralConsultation
        );
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(MINIMAL.as_bytes()).unwrap();

        let config = CatalogConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.catalog().len(), 1);
    }
}
