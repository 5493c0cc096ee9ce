//! AI assistant content
//!
//! The assistant panels show canned content. A remote summary service can be
//! queried through [`crate::infrastructure::ai_client::AiClient`]; its wire
//! types live here so that messages can carry them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSummaryRequest {
    pub book_id: String,
    pub chapter: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSummaryResponse {
    pub summary: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterSummary {
    pub chapter: u32,
    pub title: &'static str,
    pub summary: &'static str,
    pub key_points: [&'static str; 3],
}

pub const SUMMARIES: [ChapterSummary; 2] = [
    ChapterSummary {
        chapter: 1,
        title: "Introduction to Digital Art",
        summary: "The chapter lays the groundwork for competing in the digital world, comparing traditional strategies with the new realities of the technology ecosystem. It stresses adapting quickly and knowing the digital terrain.",
        key_points: [
            "The digital terrain is a complex, changing ecosystem",
            "Speed of adaptation is crucial for success",
            "Traditional strategies must evolve",
        ],
    },
    ChapterSummary {
        chapter: 2,
        title: "Fundamental Principles",
        summary: "Explores the basic principles behind success in a digital environment, including data management, automation and decisions based on intelligently processed information.",
        key_points: [
            "Data is the oil of the 21st century",
            "Automation amplifies human abilities",
            "Processed information is real power",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Concept {
    pub id: u32,
    pub name: &'static str,
    pub connections: &'static [u32],
}

pub const CONCEPTS: [Concept; 5] = [
    Concept {
        id: 1,
        name: "Digital Warfare",
        connections: &[2, 3, 4],
    },
    Concept {
        id: 2,
        name: "Data and Information",
        connections: &[1, 5],
    },
    Concept {
        id: 3,
        name: "Automation",
        connections: &[1, 4],
    },
    Concept {
        id: 4,
        name: "Rapid Adaptation",
        connections: &[1, 3],
    },
    Concept {
        id: 5,
        name: "Artificial Intelligence",
        connections: &[2, 3],
    },
];

pub const RELATIONSHIPS: [&str; 3] = [
    "Digital Warfare builds on Data and Information",
    "Automation requires Rapid Adaptation",
    "Artificial Intelligence processes Data and Information",
];

pub fn concept_name(id: u32) -> Option<&'static str> {
    CONCEPTS
        .iter()
        .find(|concept| concept.id == id)
        .map(|concept| concept.name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub title: &'static str,
    pub author: &'static str,
    /// Match score in percent
    pub score: u8,
}

pub const SIMILAR: [Recommendation; 3] = [
    Recommendation {
        title: "Advanced Digital Strategy",
        author: "Carmen Rivera",
        score: 92,
    },
    Recommendation {
        title: "The Future of Business",
        author: "Alex Thompson",
        score: 89,
    },
    Recommendation {
        title: "Disruptive Innovation",
        author: "María González",
        score: 85,
    },
];

pub const COMPLEMENTARY: [Recommendation; 2] = [
    Recommendation {
        title: "Psychology of the Digital Consumer",
        author: "Dr. Luis Morales",
        score: 78,
    },
    Recommendation {
        title: "Ethics in the Digital Age",
        author: "Sofia Alonso",
        score: 74,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case() -> color_eyre::Result<()> {
        let request = AiSummaryRequest {
            book_id: "1".into(),
            chapter: 2,
        };
        let json = serde_json::to_string(&request)?;
        assert_eq!(json, r#"{"bookId":"1","chapter":2}"#);
        Ok(())
    }

    #[test]
    fn test_response_parses_timestamp() -> color_eyre::Result<()> {
        let response: AiSummaryResponse = serde_json::from_str(
            r#"{"summary":"short","generatedAt":"2025-01-02T03:04:05Z"}"#,
        )?;
        assert_eq!(response.summary, "short");
        assert_eq!(response.generated_at.to_rfc3339(), "2025-01-02T03:04:05+00:00");
        Ok(())
    }

    #[test]
    fn test_concept_connections_resolve() {
        for concept in CONCEPTS.iter() {
            for id in concept.connections {
                assert!(concept_name(*id).is_some(), "dangling concept {id}");
            }
        }
    }
}
