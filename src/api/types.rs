// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::generators::StrengthScore;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the server is up
    pub status: String,
    /// Crate version
    pub version: String,
}

// Generator types
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct PasswordGenerationRequest {
    /// Password length, clamped to 8-32. A number or numeric string; anything
    /// else means 16, and a missing length means the server default.
    #[schema(value_type = Option<i64>, example = 16)]
    pub length: Option<serde_json::Value>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include numbers (default: true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Password strength score and tier
    pub strength: Option<StrengthScore>,
    /// False when the password came from the non-cryptographic fallback
    pub secure: bool,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Password strength score and tier
    pub strength: StrengthScore,
    /// Tier label as shown to the user
    pub label: String,
    /// Feedback and suggestions for improvement
    pub feedback: Vec<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

// Education types
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct EducationTopic {
    /// Topic ID
    pub id: String,
    /// Topic title
    pub title: String,
    /// Topic description
    pub description: String,
    /// Topic category
    pub category: String,
    /// Topic difficulty level ("beginner", "intermediate", "advanced")
    pub difficulty: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TopicContent {
    /// Topic ID
    pub id: String,
    /// Topic title
    pub title: String,
    /// Markdown content
    pub content: String,
    /// Topic category
    pub category: String,
    /// Topic difficulty level
    pub difficulty: String,
    /// IDs of related topics
    pub related_topics: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TopicListResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// List of education topics
    pub topics: Vec<EducationTopic>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TopicContentResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Topic content
    pub topic: Option<TopicContent>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TipsResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Security tips in rotation order
    pub tips: Vec<String>,
}
