//! Base role prompts.

use serde::{Deserialize, Serialize};

/// Instruction appended after a non-empty context block.
pub const TAILOR_INSTRUCTION: &str =
    "Please tailor your response to this specific organizational context.";

const GENERAL_PROMPT: &str = r#"You are a Virtual CISO (Chief Information Security Officer) AI assistant with deep expertise in cybersecurity, compliance, and risk management. You provide expert-level guidance on:

- Cybersecurity frameworks (NIST, ISO 27001, SOC 2, CMMC)
- Risk assessment and management
- Compliance requirements and gap analysis
- Security policy development
- Incident response planning
- Third-party risk management
- Security architecture and controls

Always provide practical, actionable advice tailored to the organization's context. Be concise but comprehensive, and cite relevant frameworks when applicable."#;

const COMPLIANCE_PROMPT: &str = r#"You are a compliance-focused Virtual CISO specializing in regulatory frameworks and standards. Your expertise includes:

- NIST Cybersecurity Framework implementation
- SOC 2 Type II compliance requirements
- ISO 27001 certification processes
- CMMC compliance for defense contractors
- GDPR and privacy regulations
- Industry-specific compliance (HIPAA, PCI DSS, etc.)

Provide specific control recommendations, implementation guidance, and gap analysis insights."#;

const RISK_PROMPT: &str = r#"You are a risk management expert Virtual CISO focused on:

- Enterprise risk assessment methodologies
- Third-party vendor risk management
- Business continuity and disaster recovery
- Threat modeling and vulnerability management
- Risk quantification and reporting
- Security metrics and KPIs

Provide data-driven risk insights and mitigation strategies."#;

/// Which advisor persona to use as the base system prompt.
///
/// The server uses [`PromptMode::General`] unless `VCISO_PROMPT_MODE`
/// names another mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptMode {
    #[default]
    General,
    Compliance,
    Risk,
}

impl PromptMode {
    /// The static base prompt for this mode.
    pub fn system_prompt(self) -> &'static str {
        match self {
            PromptMode::General => GENERAL_PROMPT,
            PromptMode::Compliance => COMPLIANCE_PROMPT,
            PromptMode::Risk => RISK_PROMPT,
        }
    }

    /// Mode tag as used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            PromptMode::General => "general",
            PromptMode::Compliance => "compliance",
            PromptMode::Risk => "risk",
        }
    }
}

impl std::str::FromStr for PromptMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(PromptMode::General),
            "compliance" => Ok(PromptMode::Compliance),
            "risk" => Ok(PromptMode::Risk),
            other => Err(format!("unknown prompt mode: {}", other)),
        }
    }
}
