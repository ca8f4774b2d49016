//! Market data: trending skills per industry and a job-market snapshot per role.
//!
//! `StaticMarketData` serves curated tables and stands in for a live feed.
//! `AppState` and the resolver hold an `Arc<dyn MarketDataProvider>`, so a live
//! provider can replace it without touching callers.

use serde::{Deserialize, Serialize};

pub mod handlers;

/// Industry used when the caller does not name one, and for unknown names.
pub const DEFAULT_INDUSTRY: &str = "technology";

/// Job-market snapshot for a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMarketData {
    pub demand: String,
    pub salary_range: String,
    pub growth_rate: String,
    pub open_positions: String,
    pub competition: String,
    pub remote_availability: String,
}

pub trait MarketDataProvider: Send + Sync {
    /// Trending skills for `industry`. Case-insensitive; unknown industries get the
    /// `DEFAULT_INDUSTRY` list.
    fn trending_skills(&self, industry: &str) -> Vec<String>;

    fn job_market_data(&self, role: &str) -> JobMarketData;
}

const TRENDING_SKILLS: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "Python",
            "JavaScript",
            "React",
            "Node.js",
            "AWS",
            "Docker",
            "Kubernetes",
            "AI/ML",
            "Data Science",
            "DevOps",
            "Cloud Computing",
            "Cybersecurity",
        ],
    ),
    (
        "data",
        &[
            "Python",
            "SQL",
            "Tableau",
            "Power BI",
            "Excel",
            "Machine Learning",
            "Statistics",
            "R",
            "Big Data",
            "Apache Spark",
            "ETL",
            "Data Warehousing",
        ],
    ),
    (
        "design",
        &[
            "Figma",
            "Adobe XD",
            "UI/UX Design",
            "Prototyping",
            "User Research",
            "Wireframing",
            "Design Systems",
            "Accessibility",
            "Motion Design",
            "Sketch",
        ],
    ),
    (
        "business",
        &[
            "Data Analysis",
            "Excel",
            "Project Management",
            "Agile",
            "Scrum",
            "Communication",
            "Leadership",
            "Strategy",
            "Finance",
            "Marketing Analytics",
        ],
    ),
];

/// Curated, in-process market data.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMarketData;

impl StaticMarketData {
    fn lookup(industry: &str) -> Option<&'static [&'static str]> {
        TRENDING_SKILLS
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(industry))
            .map(|(_, skills)| *skills)
    }
}

impl MarketDataProvider for StaticMarketData {
    fn trending_skills(&self, industry: &str) -> Vec<String> {
        Self::lookup(industry)
            .or_else(|| Self::lookup(DEFAULT_INDUSTRY))
            .unwrap_or_default()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn job_market_data(&self, _role: &str) -> JobMarketData {
        // Same snapshot for every role until a live source is wired in.
        JobMarketData {
            demand: "High".to_string(),
            salary_range: "$60,000 - $120,000".to_string(),
            growth_rate: "15% (Above Average)".to_string(),
            open_positions: "50,000+".to_string(),
            competition: "Moderate".to_string(),
            remote_availability: "High".to_string(),
        }
    }
}
