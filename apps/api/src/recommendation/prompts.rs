// LLM prompt for profile analysis.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{COUNSELOR_PERSONA, JSON_ARRAY_ONLY};
use crate::recommendation::models::UserProfile;

/// Industries called out as hot regardless of the profile.
const HOT_INDUSTRIES: &str = "AI/ML, Cloud Computing, Cybersecurity, Data Science, Web Development";

/// Shown in place of an empty `preferred_industries` list.
const OPEN_TO_ALL: &str = "Open to all";

/// Task rules for the analysis prompt.
const ANALYSIS_TASK: &str = "TASK:
Provide 3-5 career recommendations that:
1. Match user's interests and skills
2. Are in-demand in current market (Feb 2025)
3. Have clear growth potential
4. Include realistic skill gaps
5. Provide actionable learning roadmaps";

/// Output schema. Keys and their order mirror `CareerRecommendation` exactly;
/// the response parser matches by name.
const RECOMMENDATION_SCHEMA: &str = r#"FORMAT YOUR RESPONSE AS JSON:
[
  {
    "title": "Career Title",
    "match_score": 85,
    "reason": "Why this career fits the user",
    "required_skills": ["skill1", "skill2", "skill3"],
    "average_salary": "$XX,000 - $XX,000",
    "growth_outlook": "High/Medium/Low with explanation",
    "learning_roadmap": ["Step 1", "Step 2", "Step 3"]
  }
]"#;

/// Builds the analysis prompt for a profile and the current trending-skill context.
///
/// Pure and deterministic: the same inputs always produce the same text.
pub fn build_analysis_prompt(profile: &UserProfile, trending_skills: &[String]) -> String {
    let preferred_industries = if profile.preferred_industries.is_empty() {
        OPEN_TO_ALL.to_string()
    } else {
        profile.preferred_industries.join(", ")
    };

    format!(
        "{COUNSELOR_PERSONA}

USER PROFILE:
- Name: {name}
- Current Role: {current_role}
- Education: {education}
- Interests: {interests}
- Current Skills: {skills}
- Experience: {experience} years
- Preferred Industries: {preferred_industries}
- Location: {location}

REAL-TIME MARKET DATA (Feb 2025):
- Trending Skills: {trending}
- Hot Industries: {HOT_INDUSTRIES}

{ANALYSIS_TASK}

{RECOMMENDATION_SCHEMA}

{JSON_ARRAY_ONLY}",
        name = profile.name,
        current_role = profile.current_role,
        education = profile.education,
        interests = profile.interests.join(", "),
        skills = profile.skills.join(", "),
        experience = profile.experience_years,
        location = profile.location,
        trending = trending_skills.join(", "),
    )
}
