//! Keyword-based compliance framework tagging.

/// Framework name and the lower-case keywords that indicate it.
///
/// Order matters: tags are reported in table order.
pub const FRAMEWORK_KEYWORDS: &[(&str, &[&str])] = &[
    ("NIST", &["nist", "cybersecurity framework", "csf"]),
    ("SOC2", &["soc 2", "soc2", "service organization control"]),
    (
        "ISO27001",
        &["iso 27001", "iso27001", "information security management"],
    ),
    ("CMMC", &["cmmc", "cybersecurity maturity model"]),
    ("GDPR", &["gdpr", "general data protection regulation"]),
    ("HIPAA", &["hipaa", "health insurance portability"]),
    ("PCI DSS", &["pci dss", "payment card industry"]),
];

/// Frameworks mentioned anywhere in `text`, case-insensitively.
pub fn detect_frameworks(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();

    FRAMEWORK_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(framework, _)| framework.to_string())
        .collect()
}
