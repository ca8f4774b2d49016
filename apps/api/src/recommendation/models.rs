use serde::{Deserialize, Serialize};

/// Maximum number of recommendations returned for a single profile.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Structured background of the person asking for guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default = "default_current_role")]
    pub current_role: String,
    pub education: String,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub preferred_industries: Vec<String>,
    #[serde(default = "default_location")]
    pub location: String,
}

fn default_current_role() -> String {
    "Student".to_string()
}

fn default_location() -> String {
    "Remote".to_string()
}

/// A single career suggestion. Field names are part of the model contract:
/// the prompt asks for exactly these keys and the parser matches on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub title: String,
    pub match_score: i32, // 0 – 100 by convention, not enforced
    pub reason: String,
    pub required_skills: Vec<String>,
    pub average_salary: String,
    pub growth_outlook: String,
    pub learning_roadmap: Vec<String>,
}

/// Which path produced a recommendation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Ai,
    Fallback,
}

/// Ordered, non-empty result of a resolution, capped at `MAX_RECOMMENDATIONS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationSet {
    pub recommendations: Vec<CareerRecommendation>,
    pub source: RecommendationSource,
}

impl RecommendationSet {
    pub fn new(
        mut recommendations: Vec<CareerRecommendation>,
        source: RecommendationSource,
    ) -> Self {
        recommendations.truncate(MAX_RECOMMENDATIONS);
        Self {
            recommendations,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn recommendation(title: &str) -> CareerRecommendation {
        CareerRecommendation {
            title: title.to_string(),
            match_score: 70,
            reason: "Because".to_string(),
            required_skills: vec![],
            average_salary: "$1 - $2".to_string(),
            growth_outlook: "High".to_string(),
            learning_roadmap: vec![],
        }
    }

    #[test]
    fn test_profile_defaults_applied_when_fields_omitted() {
        let profile: UserProfile = serde_json::from_value(json!({
            "name": "Jane Doe",
            "education": "Business Administration",
            "interests": ["data", "analytics"],
            "skills": ["Excel"],
            "experience_years": 1
        }))
        .unwrap();

        assert_eq!(profile.current_role, "Student");
        assert_eq!(profile.location, "Remote");
        assert!(profile.preferred_industries.is_empty());
        assert_eq!(profile.experience_years, 1);
    }

    #[test]
    fn test_profile_requires_education() {
        let result: Result<UserProfile, _> = serde_json::from_value(json!({
            "name": "No Education",
            "interests": [],
            "skills": []
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_profile_rejects_negative_experience() {
        let result: Result<UserProfile, _> = serde_json::from_value(json!({
            "name": "Time Traveller",
            "education": "History",
            "interests": [],
            "skills": [],
            "experience_years": -2
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_recommendation_set_truncates_to_three() {
        let set = RecommendationSet::new(
            vec![
                recommendation("A"),
                recommendation("B"),
                recommendation("C"),
                recommendation("D"),
            ],
            RecommendationSource::Ai,
        );
        assert_eq!(set.recommendations.len(), 3);
        assert_eq!(set.recommendations[2].title, "C");
    }
}
