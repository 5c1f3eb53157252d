// ============================================================================
// File: src/prompt.rs
// Prompt template assembly
// ============================================================================

use crate::request::GenerationRequest;

/// Substitution used when no specific focus was provided.
const NO_FOCUS: &str = "No specific focus";

/// Builds the instruction prompt for one generation call. Pure and
/// deterministic: field text is substituted verbatim, with fixed fallback
/// phrases for the optional focus and the two toggles.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let focus = request.focus.as_deref().unwrap_or(NO_FOCUS);
    let trends = if request.trends {
        "Yes, focus on current trends"
    } else {
        "No specific trend focus"
    };
    let interdis = if request.interdisciplinary {
        "Yes, include interdisciplinary approaches"
    } else {
        "Focus on single discipline"
    };

    format!(
        "You are an expert research advisor with deep knowledge across multiple academic disciplines.\n\
        \n\
        Research Interest: {interest}\n\
        Specific Focus: {focus}\n\
        Academic Level: {level}\n\
        Current Trends Focus: {trends}\n\
        Interdisciplinary Approach: {interdis}\n\
        \n\
        Generate {count} compelling and feasible research paper topics. For each topic:\n\
        1. Provide a clear, concise title\n\
        2. Write a brief description (2-3 sentences) explaining the research gap and significance\n\
        3. Suggest potential research methodologies\n\
        4. Indicate expected impact and relevance\n\
        \n\
        Format your response as follows for each topic:\n\
        \n\
        **Topic 1: [Title]**\n\
        **Description:** [Description]\n\
        **Methodology:** [Suggested methods]\n\
        **Impact:** [Expected impact and relevance]\n\
        \n\
        ---\n\
        \n\
        Make sure the topics are:\n\
        - Original and innovative\n\
        - Feasible within the academic level specified\n\
        - Relevant to current research needs\n\
        - Clear and well-defined\n\
        - Number each topic sequentially (Topic 1, Topic 2, etc.)",
        interest = request.interest,
        focus = focus,
        level = request.level,
        trends = trends,
        interdis = interdis,
        count = request.count,
    )
}
