//! Fallback generator: rule-based recommendations used whenever the AI path is
//! unavailable or fails.
//!
//! Algorithm:
//! 1. Lowercase `profile.interests` and join them with spaces.
//! 2. Substring-test every rule in declaration order. Rules are independent, so a
//!    profile can match several and accumulate several careers.
//! 3. No match → the generic `FULL_STACK_DEVELOPER` entry.
//! 4. Keep the first `MAX_RECOMMENDATIONS`.
//!
//! Every career record is a fixed literal; only the matching decision depends on the
//! profile.

use crate::recommendation::models::{CareerRecommendation, UserProfile, MAX_RECOMMENDATIONS};

/// A career record stored as static data.
#[derive(Debug)]
pub struct CareerTemplate {
    pub title: &'static str,
    pub match_score: i32,
    pub reason: &'static str,
    pub required_skills: &'static [&'static str],
    pub average_salary: &'static str,
    pub growth_outlook: &'static str,
    pub learning_roadmap: &'static [&'static str],
}

impl CareerTemplate {
    pub fn to_recommendation(&self) -> CareerRecommendation {
        CareerRecommendation {
            title: self.title.to_string(),
            match_score: self.match_score,
            reason: self.reason.to_string(),
            required_skills: to_owned_list(self.required_skills),
            average_salary: self.average_salary.to_string(),
            growth_outlook: self.growth_outlook.to_string(),
            learning_roadmap: to_owned_list(self.learning_roadmap),
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Keyword category → career.
#[derive(Debug)]
pub struct FallbackRule {
    pub keywords: &'static [&'static str],
    pub career: CareerTemplate,
}

impl FallbackRule {
    fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|k| haystack.contains(k))
    }
}

/// Rule table, evaluated in order. Order is also the output priority.
pub const RULES: &[FallbackRule] = &[
    FallbackRule {
        keywords: &["coding", "programming", "software", "technology", "ai", "data"],
        career: CareerTemplate {
            title: "Software Developer",
            match_score: 85,
            reason: "Your interest in technology and coding aligns well with software development. High demand in 2025.",
            required_skills: &["Python", "JavaScript", "Git", "Problem Solving", "Data Structures"],
            average_salary: "$70,000 - $120,000",
            growth_outlook: "High - 22% growth projected through 2030",
            learning_roadmap: &[
                "Master a programming language (Python or JavaScript)",
                "Learn data structures and algorithms",
                "Build 3-5 portfolio projects",
                "Contribute to open source projects",
                "Apply for junior developer positions",
            ],
        },
    },
    FallbackRule {
        keywords: &["data", "analytics", "statistics", "numbers"],
        career: CareerTemplate {
            title: "Data Analyst",
            match_score: 80,
            reason: "Your analytical interests match well with data analysis. Growing field with high demand.",
            required_skills: &["SQL", "Excel", "Python", "Tableau", "Statistics"],
            average_salary: "$60,000 - $95,000",
            growth_outlook: "High - 25% growth expected in data careers",
            learning_roadmap: &[
                "Learn SQL and Excel for data manipulation",
                "Master Python for data analysis (Pandas, NumPy)",
                "Study statistics and data visualization",
                "Complete data analysis projects",
                "Get certified (Google Data Analytics or similar)",
            ],
        },
    },
    FallbackRule {
        keywords: &["design", "creative", "art", "ui", "ux"],
        career: CareerTemplate {
            title: "UI/UX Designer",
            match_score: 78,
            reason: "Your creative interests align with user experience design. High demand for digital products.",
            required_skills: &[
                "Figma",
                "User Research",
                "Wireframing",
                "Prototyping",
                "Design Thinking",
            ],
            average_salary: "$65,000 - $110,000",
            growth_outlook: "Medium-High - Digital transformation driving demand",
            learning_roadmap: &[
                "Learn design fundamentals and color theory",
                "Master Figma or Adobe XD",
                "Study user research methods",
                "Build portfolio with 5+ case studies",
                "Network with designers and apply for roles",
            ],
        },
    },
    FallbackRule {
        keywords: &["business", "management", "leadership", "strategy"],
        career: CareerTemplate {
            title: "Product Manager",
            match_score: 75,
            reason: "Your business acumen fits product management. Bridge between tech and business.",
            required_skills: &[
                "Product Strategy",
                "Agile",
                "Communication",
                "Data Analysis",
                "Market Research",
            ],
            average_salary: "$80,000 - $140,000",
            growth_outlook: "High - Product-led companies need PMs",
            learning_roadmap: &[
                "Learn product management fundamentals",
                "Understand Agile and Scrum methodologies",
                "Develop technical literacy",
                "Work on side projects as PM",
                "Get Product Manager certification",
            ],
        },
    },
];

/// Emitted when no rule matches.
pub const FULL_STACK_DEVELOPER: CareerTemplate = CareerTemplate {
    title: "Full-Stack Developer",
    match_score: 70,
    reason: "Versatile career path with high demand across industries. Great starting point for tech careers.",
    required_skills: &["HTML/CSS", "JavaScript", "React", "Node.js", "Databases"],
    average_salary: "$75,000 - $125,000",
    growth_outlook: "High - Continuous demand for web developers",
    learning_roadmap: &[
        "Learn HTML, CSS, JavaScript basics",
        "Master React for frontend development",
        "Learn Node.js for backend",
        "Understand databases (SQL and NoSQL)",
        "Build full-stack projects and deploy them",
    ],
};

/// Generates rule-based recommendations. Total: always returns 1..=3 entries.
pub fn generate_fallback(profile: &UserProfile) -> Vec<CareerRecommendation> {
    let haystack = profile
        .interests
        .iter()
        .map(|i| i.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let mut recommendations: Vec<CareerRecommendation> = RULES
        .iter()
        .filter(|rule| rule.matches(&haystack))
        .map(|rule| rule.career.to_recommendation())
        .collect();

    if recommendations.is_empty() {
        recommendations.push(FULL_STACK_DEVELOPER.to_recommendation());
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
