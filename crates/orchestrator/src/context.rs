//! Organisational context supplied with a chat request, and its rendering
//! into the system prompt.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::prompts::{PromptMode, TAILOR_INSTRUCTION};

/// Number of documents listed by title in the context block.
const MAX_LISTED_DOCUMENTS: usize = 3;

/// Caller-supplied context about the requesting organisation.
///
/// Every field is optional and unknown top-level keys are ignored. Empty
/// strings, lists and maps render nothing. A `company_context` object counts
/// as supplied whenever it has at least one key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatContext {
    #[serde(default)]
    pub company_context: Option<CompanyContext>,
    #[serde(default)]
    pub compliance_status: Option<IndexMap<String, ComplianceStatus>>,
    #[serde(default)]
    pub user_role: Option<String>,
}

/// Company profile.
///
/// Keys other than the three rendered ones are kept in `extra`, as are
/// rendered keys sent as `null`, so they still mark the profile as supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct CompanyContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frameworks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_documents: Option<Vec<DocumentRef>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for CompanyContext {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            industry: take_field(&mut map, "industry")?,
            frameworks: take_field(&mut map, "frameworks")?,
            relevant_documents: take_field(&mut map, "relevant_documents")?,
            extra: map,
        })
    }
}

/// Remove and parse `key`. A `null` value is left in `map`.
fn take_field<T: DeserializeOwned>(
    map: &mut Map<String, Value>,
    key: &str,
) -> Result<Option<T>, serde_json::Error> {
    match map.remove(key) {
        None => Ok(None),
        Some(Value::Null) => {
            map.insert(key.to_string(), Value::Null);
            Ok(None)
        }
        Some(value) => serde_json::from_value(value).map(Some),
    }
}

/// A document the company has on file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentRef {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type")]
    pub doc_type: Option<String>,
}

/// Control implementation progress for one framework.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceStatus {
    #[serde(default)]
    pub implemented: u32,
    #[serde(default)]
    pub total: u32,
}

impl ComplianceStatus {
    /// Completion percentage; 0 when there are no controls.
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            f64::from(self.implemented) / f64::from(self.total) * 100.0
        } else {
            0.0
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn non_empty_list<T>(value: &Option<Vec<T>>) -> Option<&[T]> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl CompanyContext {
    /// True when the object had no keys at all.
    pub fn is_empty(&self) -> bool {
        self.industry.is_none()
            && self.frameworks.is_none()
            && self.relevant_documents.is_none()
            && self.extra.is_empty()
    }
}

impl ChatContext {
    /// Company context, if a non-empty object was supplied.
    pub fn company(&self) -> Option<&CompanyContext> {
        self.company_context.as_ref().filter(|c| !c.is_empty())
    }

    /// Whether company context is present (drives the confidence bonus).
    pub fn has_company_context(&self) -> bool {
        self.company().is_some()
    }

    /// Render the context block appended to the system prompt.
    ///
    /// Returns an empty string when nothing renders.
    pub fn render(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(company) = self.company() {
            parts.push("Company Context:".to_string());

            if let Some(industry) = non_empty(&company.industry) {
                parts.push(format!("- Industry: {}", industry));
            }

            if let Some(frameworks) = non_empty_list(&company.frameworks) {
                parts.push(format!(
                    "- Active Compliance Frameworks: {}",
                    frameworks.join(", ")
                ));
            }

            if let Some(documents) = non_empty_list(&company.relevant_documents) {
                parts.push(format!(
                    "- Available Documents: {} security documents",
                    documents.len()
                ));
                for doc in documents.iter().take(MAX_LISTED_DOCUMENTS) {
                    parts.push(format!(
                        "  • {} ({})",
                        doc.title.as_deref().unwrap_or("Untitled"),
                        doc.doc_type.as_deref().unwrap_or("unknown")
                    ));
                }
            }
        }

        if let Some(status) = self.compliance_status.as_ref().filter(|s| !s.is_empty()) {
            parts.push("\nCompliance Status:".to_string());
            for (framework, progress) in status {
                parts.push(format!(
                    "- {}: {}/{} controls ({:.0}% complete)",
                    framework,
                    progress.implemented,
                    progress.total,
                    progress.percentage()
                ));
            }
        }

        if let Some(role) = non_empty(&self.user_role) {
            parts.push(format!("\nUser Role: {}", role));
        }

        parts.join("\n")
    }
}

/// Compose the full system prompt for `mode`, appending the rendered
/// context block and the tailoring instruction when there is any context.
pub fn compose_system_prompt(mode: PromptMode, context: Option<&ChatContext>) -> String {
    let base = mode.system_prompt();
    let block = context.map(ChatContext::render).unwrap_or_default();

    if block.is_empty() {
        base.to_string()
    } else {
        format!("{}\n\n{}\n\n{}", base, block, TAILOR_INSTRUCTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context(value: serde_json::Value) -> ChatContext {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_no_context_is_base_prompt() {
        let prompt = compose_system_prompt(PromptMode::General, None);
        assert_eq!(prompt, PromptMode::General.system_prompt());
    }

    #[test]
    fn test_empty_context_is_base_prompt() {
        let empty = context(json!({}));
        assert_eq!(empty.render(), "");
        assert_eq!(
            compose_system_prompt(PromptMode::General, Some(&empty)),
            PromptMode::General.system_prompt()
        );
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let blank = context(json!({
            "company_context": {},
            "compliance_status": {},
            "user_role": "",
            "unrelated": {"ignored": true}
        }));
        assert_eq!(
            compose_system_prompt(PromptMode::General, Some(&blank)),
            PromptMode::General.system_prompt()
        );
        assert!(!blank.has_company_context());
    }

    #[test]
    fn test_company_context_with_empty_lists_keeps_header() {
        // Shape sent by the web client before any profile data exists.
        let ctx = context(json!({
            "company_context": {"industry": null, "frameworks": [], "relevant_documents": []}
        }));

        assert!(ctx.has_company_context());
        assert_eq!(ctx.render(), "Company Context:");
        let prompt = compose_system_prompt(PromptMode::General, Some(&ctx));
        assert!(prompt.ends_with(
            "\n\nCompany Context:\n\nPlease tailor your response to this specific organizational context."
        ));
    }

    #[test]
    fn test_unknown_company_keys_count_as_supplied() {
        let ctx = context(json!({"company_context": {"size": "50-200"}}));

        assert!(ctx.has_company_context());
        assert_eq!(ctx.render(), "Company Context:");
        let company = ctx.company().unwrap();
        assert_eq!(company.extra["size"], "50-200");
    }

    #[test]
    fn test_null_only_company_key_counts_as_supplied() {
        let ctx = context(json!({"company_context": {"industry": null}}));
        assert!(ctx.has_company_context());
        assert_eq!(ctx.render(), "Company Context:");
    }

    #[test]
    fn test_company_context_wrong_type_is_rejected() {
        let result =
            serde_json::from_value::<ChatContext>(json!({"company_context": {"frameworks": "NIST"}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_full_context_rendering() {
        let ctx = context(json!({
            "company_context": {
                "industry": "Healthcare",
                "frameworks": ["HIPAA", "SOC 2"],
                "relevant_documents": [
                    {"title": "Access Control Policy", "type": "policy"},
                    {"title": "IR Plan"},
                    {"type": "procedure"},
                    {"title": "Fourth", "type": "policy"}
                ]
            },
            "compliance_status": {
                "HIPAA": {"implemented": 30, "total": 40},
                "SOC2": {"implemented": 1, "total": 3}
            },
            "user_role": "IT Manager"
        }));

        let expected = [
            "Company Context:",
            "- Industry: Healthcare",
            "- Active Compliance Frameworks: HIPAA, SOC 2",
            "- Available Documents: 4 security documents",
            "  • Access Control Policy (policy)",
            "  • IR Plan (unknown)",
            "  • Untitled (procedure)",
            "\nCompliance Status:",
            "- HIPAA: 30/40 controls (75% complete)",
            "- SOC2: 1/3 controls (33% complete)",
            "\nUser Role: IT Manager",
        ]
        .join("\n");

        assert_eq!(ctx.render(), expected);
        assert!(!ctx.render().contains("Fourth"));
    }

    #[test]
    fn test_compose_appends_tailor_instruction() {
        let ctx = context(json!({"user_role": "CEO"}));
        let prompt = compose_system_prompt(PromptMode::General, Some(&ctx));

        assert!(prompt.starts_with(PromptMode::General.system_prompt()));
        assert!(prompt.ends_with(
            "\n\n\nUser Role: CEO\n\nPlease tailor your response to this specific organizational context."
        ));
    }

    #[test]
    fn test_zero_total_renders_zero_percent() {
        let ctx = context(json!({
            "compliance_status": {"NIST": {"implemented": 0, "total": 0}}
        }));
        assert!(ctx.render().contains("- NIST: 0/0 controls (0% complete)"));
    }

    #[test]
    fn test_missing_counts_default_to_zero() {
        let ctx = context(json!({"compliance_status": {"CMMC": {}}}));
        assert!(ctx.render().contains("- CMMC: 0/0 controls (0% complete)"));
    }

    #[test]
    fn test_compliance_status_keeps_caller_order() {
        // Parsed from text: a `serde_json::Value` object would sort its keys.
        let ctx: ChatContext = serde_json::from_str(
            r#"{
                "compliance_status": {
                    "SOC2": {"implemented": 5, "total": 10},
                    "GDPR": {"implemented": 10, "total": 10},
                    "CMMC": {"implemented": 0, "total": 4}
                }
            }"#,
        )
        .unwrap();
        let rendered = ctx.render();
        let soc2 = rendered.find("SOC2").unwrap();
        let gdpr = rendered.find("GDPR").unwrap();
        let cmmc = rendered.find("CMMC").unwrap();
        assert!(soc2 < gdpr && gdpr < cmmc);
        assert!(rendered.contains("- GDPR: 10/10 controls (100% complete)"));
    }

    #[test]
    fn test_company_header_without_other_company_fields() {
        let ctx = context(json!({"company_context": {"industry": "Finance"}}));
        assert_eq!(ctx.render(), "Company Context:\n- Industry: Finance");
        assert!(ctx.has_company_context());
    }

    #[test]
    fn test_percentage() {
        let status = ComplianceStatus {
            implemented: 2,
            total: 8,
        };
        assert_eq!(status.percentage(), 25.0);
        assert_eq!(ComplianceStatus::default().percentage(), 0.0);
    }
}
