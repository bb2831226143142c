use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ApiError;

// Placeholder artwork applied when an admin does not supply imagery.
pub const DEFAULT_MODULE_THUMBNAIL: &str = "https://via.placeholder.com/400x300";
pub const DEFAULT_PROJECT_IMAGE: &str = "https://via.placeholder.com/400x300";
pub const DEFAULT_RESOURCE_THUMBNAIL: &str = "https://via.placeholder.com/300x200";

// --- Closed Vocabularies ---

// These enums are stored as plain TEXT in Postgres (kebab-case values) and
// double as the wire vocabulary: a payload or query string carrying a value
// outside the list is rejected at deserialization time.

/// ModuleCategory
///
/// The sustainability topics a learning module can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type, Default)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "text", rename_all = "kebab-case")]
pub enum ModuleCategory {
    #[default]
    RenewableEnergy,
    WasteReduction,
    WaterConservation,
    EcoLifestyle,
    Transportation,
    FoodSustainability,
}

/// Difficulty
///
/// Learning-curve rating for modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type, Default)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "text", rename_all = "kebab-case")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// ProjectCategory
///
/// The hands-on domains a DIY project can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type, Default)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "text", rename_all = "kebab-case")]
pub enum ProjectCategory {
    Recycling,
    Upcycling,
    Gardening,
    Energy,
    Water,
    Composting,
    #[default]
    Other,
}

/// ProjectDifficulty
///
/// Effort rating for DIY projects. Deliberately a separate scale from the
/// module `Difficulty` (easy/medium/hard versus beginner/intermediate/advanced).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type, Default)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "text", rename_all = "kebab-case")]
pub enum ProjectDifficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// ResourceType
///
/// The media/content kind of a library resource. Also reused for the
/// `ResourceLink` entries embedded in modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type, Default)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "text", rename_all = "kebab-case")]
pub enum ResourceType {
    #[default]
    Article,
    Video,
    Pdf,
    Infographic,
    Tool,
    Calculator,
    Guide,
}

/// ResourceCategory
///
/// Module categories plus a catch-all `general` bucket for cross-topic material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type, Default)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "text", rename_all = "kebab-case")]
pub enum ResourceCategory {
    RenewableEnergy,
    WasteReduction,
    WaterConservation,
    EcoLifestyle,
    Transportation,
    FoodSustainability,
    #[default]
    General,
}

// --- Embedded Content Blocks (JSONB) ---

/// ResourceLink
///
/// A curated further-reading link attached to a module. Stored inside the
/// module row as part of a JSONB array.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ResourceLink {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub link_type: ResourceType,
}

/// QuizQuestion
///
/// A single multiple-choice question in a module's optional quiz.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: i32,
    pub explanation: Option<String>,
}

/// Material
///
/// One item on a DIY project's shopping list.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct Material {
    pub name: String,
    /// Free-form amount, e.g. "2" or "500 ml".
    pub quantity: Option<String>,
    /// Marks nice-to-have materials the build can proceed without.
    #[serde(default)]
    pub optional: bool,
}

/// ProjectStep
///
/// One ordered instruction in a DIY project build guide.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ProjectStep {
    pub step_number: i32,
    pub instruction: String,
    pub image: Option<String>,
    pub tip: Option<String>,
}

// --- Core Application Schemas (Mapped to Database) ---

/// User
///
/// The canonical identity + progress record stored in the `users` table.
/// The primary key mirrors the UUID issued by the external auth provider;
/// no credentials are ever stored here.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    // The RBAC field: 'user' or 'admin'.
    pub role: String,
    // Gamification accumulators, credited on module/project completion.
    pub points: i32,
    /// Estimated kg CO2 the user's completed content has saved.
    pub carbon_footprint_reduction: f64,
    // Earned badge names. Reserved for the rewards roadmap; read-only today.
    pub badges: Vec<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// Module
///
/// A guided learning unit from the `modules` table. The `resources` and
/// `quiz` blocks live in JSONB columns; `created_by_name` is joined in from
/// `users` for display.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Module {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: ModuleCategory,
    pub difficulty: Difficulty,
    // Estimated completion time in minutes.
    pub duration: i32,
    // The lesson body itself.
    pub content: String,
    pub video_url: Option<String>,
    #[sqlx(json)]
    pub resources: Vec<ResourceLink>,
    #[sqlx(json)]
    pub quiz: Vec<QuizQuestion>,
    // Reward credited to the user on completion.
    pub points: i32,
    /// Estimated kg CO2 saved per year by applying the module's content.
    pub carbon_impact: f64,
    pub thumbnail: String,
    // Controls listing visibility. Unpublished modules stay reachable by ID.
    pub published: bool,
    // Weak reference to the authoring admin; NULL survives account deletion.
    pub created_by: Option<Uuid>,
    // Loaded via a JOIN in the repository query.
    #[sqlx(default)]
    pub created_by_name: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Project
///
/// A DIY build from the `projects` table. `likes` and `completions` are
/// derived counts over the membership tables (`project_likes`,
/// `project_completions`), never stored columns, so they cannot drift.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub difficulty: ProjectDifficulty,
    // Estimated build time in minutes.
    pub time_required: i32,
    #[sqlx(json)]
    pub materials: Vec<Material>,
    #[sqlx(json)]
    pub steps: Vec<ProjectStep>,
    pub images: Vec<String>,
    pub main_image: String,
    pub video_tutorial: Option<String>,
    /// Free-form cost range, e.g. "$10-20".
    pub estimated_cost: Option<String>,
    pub tags: Vec<String>,
    pub points: i32,
    pub carbon_impact: f64,
    pub published: bool,
    pub created_by: Option<Uuid>,
    #[sqlx(default)]
    pub created_by_name: Option<String>,
    // Derived counters (see struct docs).
    #[sqlx(default)]
    pub likes: i64,
    #[sqlx(default)]
    pub completions: i64,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Resource
///
/// A library item from the `resources` table: an external link, a hosted
/// file, or inline content. Reading a resource by ID bumps `views`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Resource {
    pub id: Uuid,
    pub title: String,
    pub description: String,

    /// Maps SQL column "type" to Rust field "resource_type".
    /// This renaming is necessary because `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub resource_type: ResourceType,

    pub category: ResourceCategory,
    pub url: Option<String>,
    pub file_url: Option<String>,
    pub thumbnail: String,
    // Inline body for resources hosted directly on the platform.
    pub content: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
    pub views: i64,
    // Carried for parity with views; nothing increments it yet.
    pub downloads: i64,
    pub created_by: Option<Uuid>,
    #[sqlx(default)]
    pub created_by_name: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

// --- Request Payloads (Input Schemas) ---

/// RegisterUserRequest
///
/// Input payload for the public registration endpoint (POST /api/auth/register).
/// Note: The password is only passed through to the external auth provider and never
/// persisted or logged internally by this application.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// CreateModuleRequest
///
/// Input payload for authoring a new module (POST /api/modules).
/// Optional fields fall back to the platform defaults (10 points, beginner
/// difficulty, placeholder thumbnail, published).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct CreateModuleRequest {
    pub title: String,
    pub description: String,
    pub category: ModuleCategory,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub duration: i32,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub resources: Vec<ResourceLink>,
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
    #[serde(default = "default_module_points")]
    pub points: i32,
    #[serde(default)]
    pub carbon_impact: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default = "default_true")]
    pub published: bool,
}

/// UpdateModuleRequest
///
/// Partial update payload for modifying an existing module (PUT /api/modules/{id}).
///
/// *Optimization*: Uses `Option<T>` for all fields and `#[serde(skip_serializing_if = "Option::is_none")]`
/// to efficiently handle partial updates, ensuring only provided fields are included in the JSON payload.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateModuleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ModuleCategory>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ResourceLink>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Vec<QuizQuestion>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbon_impact: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

/// CreateProjectRequest
///
/// Input payload for authoring a new DIY project (POST /api/projects).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    #[serde(default)]
    pub difficulty: ProjectDifficulty,
    pub time_required: i32,
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub steps: Vec<ProjectStep>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_tutorial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_project_points")]
    pub points: i32,
    #[serde(default)]
    pub carbon_impact: f64,
    #[serde(default = "default_true")]
    pub published: bool,
}

/// UpdateProjectRequest
///
/// Partial update payload for modifying an existing project (PUT /api/projects/{id}).
/// Same Option-per-field convention as `UpdateModuleRequest`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateProjectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ProjectCategory>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<ProjectDifficulty>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_required: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials: Option<Vec<Material>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<ProjectStep>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_tutorial: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbon_impact: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

/// CreateResourceRequest
///
/// Input payload for adding a library resource (POST /api/resources).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct CreateResourceRequest {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub category: ResourceCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_true")]
    pub published: bool,
}

/// UpdateResourceRequest
///
/// Partial update payload for modifying a library resource (PUT /api/resources/{id}).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ResourceCategory>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

// --- Progress & Profile Schemas (Output) ---

/// ProgressSummary
///
/// The gamified progress block embedded in the profile response.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ProgressSummary {
    pub points: i32,
    pub carbon_footprint_reduction: f64,
    pub badges: Vec<String>,
    pub completed_modules: Vec<Uuid>,
    pub completed_projects: Vec<Uuid>,
}

/// UserProfile
///
/// Output schema for the authenticated user's profile (GET /api/auth/me).
/// Identity fields plus the assembled `ProgressSummary`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    // Dynamic URL for a profile image/avatar.
    pub avatar_url: Option<String>,
    pub progress: ProgressSummary,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// UserProgressRow
///
/// Raw Database Row (Internal Use). The flat shape returned by the profile
/// query (user columns plus two aggregated UUID arrays), transformed into
/// `UserProfile` by the repository before leaving the persistence layer.
#[derive(Debug, Clone, FromRow, Default)]
pub struct UserProgressRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub points: i32,
    pub carbon_footprint_reduction: f64,
    pub badges: Vec<String>,
    pub completed_modules: Vec<Uuid>,
    pub completed_projects: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// CompletionReward
///
/// Output schema for a successful completion (POST /api/{kind}/{id}/complete).
/// `total_points` reflects the user's balance after crediting.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct CompletionReward {
    pub points_earned: i32,
    pub carbon_reduced: f64,
    pub total_points: i32,
}

/// LikeResult
///
/// Output schema for a successful like (POST /api/projects/{id}/like),
/// carrying the project's like count after the insert.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct LikeResult {
    pub likes: i64,
}

// --- Response Envelope ---

/// ApiResponse
///
/// The uniform JSON envelope every endpoint responds with: `success` is
/// always present; `message`, `count`, and `data` are serialized only when
/// set. List endpoints populate `count`, mutations populate `message`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Success envelope carrying only a payload (single-record reads).
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data: Some(data),
        }
    }

    /// Success envelope carrying a payload and a human-readable message
    /// (creates, updates, completions).
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            count: None,
            data: Some(data),
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Success envelope for list endpoints; `count` mirrors the item total.
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            message: None,
            count: Some(items.len()),
            data: Some(items),
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope with no payload (deletes).
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            count: None,
            data: None,
        }
    }

    /// Failure envelope. Used by the `ApiError` responder.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            count: None,
            data: None,
        }
    }
}

// --- Payload Validation ---

// Required-string checks mirroring the declarative schema the content was
// originally authored against. Types and closed enums cover everything else.

fn require(value: &str, message: &'static str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(message.to_string()));
    }
    Ok(())
}

fn require_quiz(quiz: &[QuizQuestion]) -> Result<(), ApiError> {
    for q in quiz {
        require(&q.question, "Please provide text for every quiz question")?;
    }
    Ok(())
}

impl RegisterUserRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.trim().is_empty()
        {
            return Err(ApiError::Validation(
                "Please provide name, email and password".to_string(),
            ));
        }
        Ok(())
    }
}

impl CreateModuleRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&self.title, "Please provide a title")?;
        require(&self.description, "Please provide a description")?;
        require(&self.content, "Please provide the module content")?;
        require_quiz(&self.quiz)
    }
}

impl UpdateModuleRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(title) = &self.title {
            require(title, "Please provide a title")?;
        }
        if let Some(description) = &self.description {
            require(description, "Please provide a description")?;
        }
        if let Some(content) = &self.content {
            require(content, "Please provide the module content")?;
        }
        if let Some(quiz) = &self.quiz {
            require_quiz(quiz)?;
        }
        Ok(())
    }
}

impl CreateProjectRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&self.title, "Please provide a title")?;
        require(&self.description, "Please provide a description")
    }
}

impl UpdateProjectRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(title) = &self.title {
            require(title, "Please provide a title")?;
        }
        if let Some(description) = &self.description {
            require(description, "Please provide a description")?;
        }
        Ok(())
    }
}

impl CreateResourceRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&self.title, "Please provide a title")?;
        require(&self.description, "Please provide a description")
    }
}

impl UpdateResourceRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(title) = &self.title {
            require(title, "Please provide a title")?;
        }
        if let Some(description) = &self.description {
            require(description, "Please provide a description")?;
        }
        Ok(())
    }
}

// --- Serde Defaults ---

fn default_module_points() -> i32 {
    10
}

fn default_project_points() -> i32 {
    15
}

fn default_true() -> bool {
    true
}
