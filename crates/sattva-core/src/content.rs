//! Static support-resource and article content.

use once_cell::sync::Lazy;
use strum::Display;

/// Category a support resource belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResourceCategory {
    Crisis,
    National,
    Therapy,
    Local,
}

/// One entry in the support-resource directory.
#[derive(Debug, Clone)]
pub struct Resource {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ResourceCategory,
    pub phone: Option<&'static str>,
    pub website: &'static str,
    /// Crisis lines worth surfacing first.
    pub urgent: bool,
}

/// One article in the explore view.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub category: &'static str,
}

/// Trusted organizations and crisis lines, urgent entries first.
pub static RESOURCES: Lazy<Vec<Resource>> = Lazy::new(|| {
    vec![
        Resource {
            id: "c1",
            name: "988 Suicide & Crisis Lifeline",
            description: "Free, confidential 24/7 support for people in distress, prevention and crisis resources.",
            category: ResourceCategory::Crisis,
            phone: Some("988"),
            website: "https://988lifeline.org",
            urgent: true,
        },
        Resource {
            id: "c2",
            name: "Crisis Text Line",
            description: "Text HOME to 741741 to connect with a Volunteer Crisis Counselor.",
            category: ResourceCategory::Crisis,
            phone: Some("741741"),
            website: "https://www.crisistextline.org",
            urgent: true,
        },
        Resource {
            id: "n1",
            name: "NAMI (National Alliance on Mental Illness)",
            description: "The nation's largest grassroots mental health organization dedicated to building better lives.",
            category: ResourceCategory::National,
            phone: Some("1-800-950-NAMI"),
            website: "https://www.nami.org",
            urgent: false,
        },
        Resource {
            id: "n2",
            name: "Mental Health America (MHA)",
            description: "Leading community-based nonprofit dedicated to addressing the needs of those living with mental illness.",
            category: ResourceCategory::National,
            phone: None,
            website: "https://mhanational.org",
            urgent: false,
        },
        Resource {
            id: "t1",
            name: "Psychology Today Therapist Finder",
            description: "Comprehensive directory to find therapists, teletherapy, psychiatrists, and treatment centers.",
            category: ResourceCategory::Therapy,
            phone: None,
            website: "https://www.psychologytoday.com/us/therapists",
            urgent: false,
        },
        Resource {
            id: "t2",
            name: "Zocdoc",
            description: "Find and book top-rated local doctors and specialists, including mental health professionals.",
            category: ResourceCategory::Therapy,
            phone: None,
            website: "https://www.zocdoc.com",
            urgent: false,
        },
        Resource {
            id: "l1",
            name: "SAMHSA Treatment Locator",
            description: "Confidential and anonymous source of information for persons seeking treatment facilities.",
            category: ResourceCategory::Local,
            phone: Some("1-800-662-HELP"),
            website: "https://findtreatment.gov",
            urgent: false,
        },
    ]
});

/// Explore-view articles.
pub static ARTICLES: Lazy<Vec<Article>> = Lazy::new(|| {
    vec![
        Article {
            id: "1",
            title: "Understanding Anxiety",
            summary: "A deep dive into the physical and mental symptoms of anxiety and how to manage them.",
            category: "Education",
        },
        Article {
            id: "2",
            title: "The Power of Mindfulness",
            summary: "Simple techniques to bring mindfulness into your daily routine for better mental clarity.",
            category: "Wellness",
        },
        Article {
            id: "3",
            title: "Building Resilience",
            summary: "How to bounce back from life challenges and strengthen your psychological core.",
            category: "Growth",
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_shape() {
        assert_eq!(RESOURCES.len(), 7);
        assert_eq!(ARTICLES.len(), 3);
    }

    #[test]
    fn test_urgent_resources_are_crisis_lines() {
        for resource in RESOURCES.iter().filter(|r| r.urgent) {
            assert_eq!(resource.category, ResourceCategory::Crisis);
            assert!(resource.phone.is_some());
        }
    }
}
