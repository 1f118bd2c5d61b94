//! Document analysis instruction template.

use crate::types::DocumentAnalysisRequest;

/// Build the five-part analysis instruction for a document.
pub fn build_analysis_prompt(request: &DocumentAnalysisRequest) -> String {
    format!(
        "Analyze the following {document_type} document for cybersecurity and compliance insights:

Document Content:
{content}

Please provide:
1. A concise summary of the document's security relevance
2. Compliance framework mappings for: {frameworks}
3. Identified security controls and requirements
4. Potential gaps or recommendations
5. Risk level assessment

Format your response as structured analysis.",
        document_type = request.document_type,
        content = request.document_content,
        frameworks = request.frameworks.join(", "),
    )
}
