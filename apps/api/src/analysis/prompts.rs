// All LLM prompt builders for the analysis module, one per call site.
// Each call site differs only in prompt text and token budget.

pub const SUMMARY_MAX_TOKENS: u32 = 500;
pub const SKILL_GAPS_MAX_TOKENS: u32 = 400;
pub const ROADMAP_MAX_TOKENS: u32 = 400;
pub const KEYWORDS_MAX_TOKENS: u32 = 100;

pub fn summary_prompt(resume_text: &str) -> String {
    format!(
        "Summarize this resume highlighting skills, education, and experience:\n\n{resume_text}"
    )
}

pub fn skill_gaps_prompt(resume_text: &str) -> String {
    format!(
        "Analyze this resume and highlight missing skills, certifications, and experiences:\n\n{resume_text}"
    )
}

pub fn roadmap_prompt(resume_text: &str) -> String {
    format!(
        "Based on this resume, suggest a roadmap to improve career prospects (skills, certifications, industry exposure):\n\n{resume_text}"
    )
}

/// Keyword extraction works from the summary, not the raw resume text.
pub fn keywords_prompt(summary: &str) -> String {
    format!(
        "Based on this resume summary, suggest the best job titles and keywords (comma-separated):\n\n{summary}"
    )
}
