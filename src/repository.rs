use crate::models::{
    CompletionReward, CreateModuleRequest, CreateProjectRequest, CreateResourceRequest,
    DEFAULT_MODULE_THUMBNAIL, DEFAULT_PROJECT_IMAGE, DEFAULT_RESOURCE_THUMBNAIL, Difficulty,
    Module, ModuleCategory, ProgressSummary, Project, ProjectCategory, ProjectDifficulty,
    Resource, ResourceCategory, ResourceType, UpdateModuleRequest, UpdateProjectRequest,
    UpdateResourceRequest, User, UserProfile, UserProgressRow,
};
use async_trait::async_trait;
use sqlx::{PgPool, query_builder::QueryBuilder, types::Json};
use std::sync::Arc;
use uuid::Uuid;

/// Repository Trait
///
/// Defines the abstract contract for all persistence operations. This is the core
/// of the Repository Abstraction pattern, allowing the handlers to interact with
/// the data layer without knowing the specific implementation (Postgres, Mock, etc.).
///
/// **Send + Sync + async_trait** are required to make the trait object (`Arc<dyn Repository>`)
/// safely shareable and usable across Axum's asynchronous task boundaries.
///
/// Every method returns `sqlx::Result` so storage failures surface to the caller
/// instead of being silently absorbed by the persistence layer.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Learning Modules ---
    // Public listing with filtering. Must enforce published = true.
    async fn list_modules(
        &self,
        category: Option<ModuleCategory>,
        difficulty: Option<Difficulty>,
        search: Option<String>,
    ) -> sqlx::Result<Vec<Module>>;
    // Retrieval by ID. Deliberately ignores the published flag so direct links keep working.
    async fn get_module(&self, id: Uuid) -> sqlx::Result<Option<Module>>;
    async fn create_module(&self, req: CreateModuleRequest, created_by: Uuid)
    -> sqlx::Result<Module>;
    // Partial update. Uses COALESCE so absent fields keep their stored value.
    async fn update_module(
        &self,
        id: Uuid,
        req: UpdateModuleRequest,
    ) -> sqlx::Result<Option<Module>>;
    // Returns true if a row was deleted.
    async fn delete_module(&self, id: Uuid) -> sqlx::Result<bool>;
    // First-time completion credits the reward atomically; a repeat returns Ok(None).
    async fn complete_module(
        &self,
        user_id: Uuid,
        module_id: Uuid,
        points: i32,
        carbon_impact: f64,
    ) -> sqlx::Result<Option<CompletionReward>>;

    // --- DIY Projects ---
    async fn list_projects(
        &self,
        category: Option<ProjectCategory>,
        difficulty: Option<ProjectDifficulty>,
        search: Option<String>,
    ) -> sqlx::Result<Vec<Project>>;
    async fn get_project(&self, id: Uuid) -> sqlx::Result<Option<Project>>;
    async fn create_project(
        &self,
        req: CreateProjectRequest,
        created_by: Uuid,
    ) -> sqlx::Result<Project>;
    async fn update_project(
        &self,
        id: Uuid,
        req: UpdateProjectRequest,
    ) -> sqlx::Result<Option<Project>>;
    async fn delete_project(&self, id: Uuid) -> sqlx::Result<bool>;
    async fn complete_project(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        points: i32,
        carbon_impact: f64,
    ) -> sqlx::Result<Option<CompletionReward>>;
    // One like per user per project. Ok(Some(count)) on insert, Ok(None) on a repeat.
    async fn like_project(&self, user_id: Uuid, project_id: Uuid) -> sqlx::Result<Option<i64>>;

    // --- Resource Library ---
    async fn list_resources(
        &self,
        category: Option<ResourceCategory>,
        resource_type: Option<ResourceType>,
        search: Option<String>,
    ) -> sqlx::Result<Vec<Resource>>;
    // Retrieval by ID with a view-count bump folded into the same statement.
    async fn view_resource(&self, id: Uuid) -> sqlx::Result<Option<Resource>>;
    async fn create_resource(
        &self,
        req: CreateResourceRequest,
        created_by: Uuid,
    ) -> sqlx::Result<Resource>;
    async fn update_resource(
        &self,
        id: Uuid,
        req: UpdateResourceRequest,
    ) -> sqlx::Result<Option<Resource>>;
    async fn delete_resource(&self, id: Uuid) -> sqlx::Result<bool>;

    // --- Users & Progress ---
    // Identity lookup used by the AuthUser extractor on every authenticated request.
    async fn find_user(&self, id: Uuid) -> sqlx::Result<Option<User>>;
    // Mirrors a provider-issued identity into the local users table.
    async fn create_user(
        &self,
        id: Uuid,
        name: String,
        email: String,
        role: String,
    ) -> sqlx::Result<User>;
    // Full profile with the aggregated completion sets for GET /api/auth/me.
    async fn get_profile(&self, id: Uuid) -> sqlx::Result<Option<UserProfile>>;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer access across the application state.
pub type RepositoryState = Arc<dyn Repository>;

/// PostgresRepository
///
/// The concrete implementation of the `Repository` trait, backed by the PostgreSQL database.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for PostgresRepository {
    /// list_modules
    ///
    /// Implements flexible search/filtering using QueryBuilder for safe parameterization,
    /// adhering to the **"No SQL Injection Risk"** mandate.
    /// **Visibility**: Strictly enforces `WHERE published = true` in the base query.
    async fn list_modules(
        &self,
        category: Option<ModuleCategory>,
        difficulty: Option<Difficulty>,
        search: Option<String>,
    ) -> sqlx::Result<Vec<Module>> {
        let mut builder: QueryBuilder<sqlx::Postgres> = QueryBuilder::new(
            r#"
            SELECT
                m.id, m.title, m.description, m.category, m.difficulty,
                m.duration, m.content, m.video_url, m.resources, m.quiz,
                m.points, m.carbon_impact, m.thumbnail, m.published,
                m.created_by, u.name AS created_by_name, m.created_at, m.updated_at
            FROM modules m
            LEFT JOIN users u ON m.created_by = u.id
            WHERE m.published = true
            "#,
        );

        if let Some(c) = category {
            builder.push(" AND m.category = ");
            builder.push_bind(c);
        }

        if let Some(d) = difficulty {
            builder.push(" AND m.difficulty = ");
            builder.push_bind(d);
        }

        if let Some(s) = search {
            // Case-insensitive search across title and description fields.
            let search_pattern = format!("%{}%", s);
            builder.push(" AND (m.title ILIKE ");
            builder.push_bind(search_pattern.clone());
            builder.push(" OR m.description ILIKE ");
            builder.push_bind(search_pattern);
            builder.push(")");
        }

        builder.push(" ORDER BY m.created_at DESC");

        builder.build_query_as::<Module>().fetch_all(&self.pool).await
    }

    /// get_module
    ///
    /// Simple retrieval of any module by ID, joined with `users` for the author name.
    /// **Note**: Does *not* include the `published = true` restriction, so a direct
    /// link to an unpublished module still resolves.
    async fn get_module(&self, id: Uuid) -> sqlx::Result<Option<Module>> {
        sqlx::query_as::<_, Module>(
            r#"
            SELECT
                m.id, m.title, m.description, m.category, m.difficulty,
                m.duration, m.content, m.video_url, m.resources, m.quiz,
                m.points, m.carbon_impact, m.thumbnail, m.published,
                m.created_by, u.name AS created_by_name, m.created_at, m.updated_at
            FROM modules m
            LEFT JOIN users u ON m.created_by = u.id
            WHERE m.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// create_module
    ///
    /// Inserts a new module and immediately joins with `users` to return the enriched
    /// `Module` model, including the author's display name.
    async fn create_module(
        &self,
        req: CreateModuleRequest,
        created_by: Uuid,
    ) -> sqlx::Result<Module> {
        let new_id = Uuid::new_v4();
        let thumbnail = req
            .thumbnail
            .unwrap_or_else(|| DEFAULT_MODULE_THUMBNAIL.to_string());

        // Uses a CTE (Common Table Expression) to perform the insert and subsequent join in one query.
        sqlx::query_as::<_, Module>(
            r#"
            WITH inserted AS (
                INSERT INTO modules (id, title, description, category, difficulty, duration,
                                     content, video_url, resources, quiz, points, carbon_impact,
                                     thumbnail, published, created_by, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, NOW(), NOW())
                RETURNING id, title, description, category, difficulty, duration, content,
                          video_url, resources, quiz, points, carbon_impact, thumbnail,
                          published, created_by, created_at, updated_at
            )
            SELECT
                i.id, i.title, i.description, i.category, i.difficulty,
                i.duration, i.content, i.video_url, i.resources, i.quiz,
                i.points, i.carbon_impact, i.thumbnail, i.published,
                i.created_by, u.name AS created_by_name, i.created_at, i.updated_at
            FROM inserted i
            LEFT JOIN users u ON i.created_by = u.id
            "#,
        )
        .bind(new_id)
        .bind(req.title)
        .bind(req.description)
        .bind(req.category)
        .bind(req.difficulty)
        .bind(req.duration)
        .bind(req.content)
        .bind(req.video_url)
        .bind(Json(req.resources))
        .bind(Json(req.quiz))
        .bind(req.points)
        .bind(req.carbon_impact)
        .bind(thumbnail)
        .bind(req.published)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await
    }

    /// update_module
    ///
    /// Uses the PostgreSQL `COALESCE` function to efficiently handle `Option<T>` fields,
    /// only updating a column if the corresponding field in `req` is `Some`.
    async fn update_module(
        &self,
        id: Uuid,
        req: UpdateModuleRequest,
    ) -> sqlx::Result<Option<Module>> {
        sqlx::query_as::<_, Module>(
            r#"
            WITH updated AS (
                UPDATE modules
                SET title = COALESCE($2, title),
                    description = COALESCE($3, description),
                    category = COALESCE($4, category),
                    difficulty = COALESCE($5, difficulty),
                    duration = COALESCE($6, duration),
                    content = COALESCE($7, content),
                    video_url = COALESCE($8, video_url),
                    resources = COALESCE($9, resources),
                    quiz = COALESCE($10, quiz),
                    points = COALESCE($11, points),
                    carbon_impact = COALESCE($12, carbon_impact),
                    thumbnail = COALESCE($13, thumbnail),
                    published = COALESCE($14, published),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING id, title, description, category, difficulty, duration, content,
                          video_url, resources, quiz, points, carbon_impact, thumbnail,
                          published, created_by, created_at, updated_at
            )
            SELECT
                i.id, i.title, i.description, i.category, i.difficulty,
                i.duration, i.content, i.video_url, i.resources, i.quiz,
                i.points, i.carbon_impact, i.thumbnail, i.published,
                i.created_by, u.name AS created_by_name, i.created_at, i.updated_at
            FROM updated i
            LEFT JOIN users u ON i.created_by = u.id
            "#,
        )
        .bind(id)
        .bind(req.title)
        .bind(req.description)
        .bind(req.category)
        .bind(req.difficulty)
        .bind(req.duration)
        .bind(req.content)
        .bind(req.video_url)
        .bind(req.resources.map(Json))
        .bind(req.quiz.map(Json))
        .bind(req.points)
        .bind(req.carbon_impact)
        .bind(req.thumbnail)
        .bind(req.published)
        .fetch_optional(&self.pool)
        .await
    }

    /// delete_module
    ///
    /// Deletes a module by ID. Completion records cascade away with the row while the
    /// points already credited to users remain untouched.
    async fn delete_module(&self, id: Uuid) -> sqlx::Result<bool> {
        let res = sqlx::query("DELETE FROM modules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    /// complete_module
    ///
    /// Records a completion and credits the reward in a **single atomic statement**:
    /// the CTE inserts into `module_completions` with `ON CONFLICT DO NOTHING`, and the
    /// outer UPDATE only runs when that insert produced a row. A repeat completion
    /// therefore yields zero rows and `Ok(None)`, with no accumulator drift.
    async fn complete_module(
        &self,
        user_id: Uuid,
        module_id: Uuid,
        points: i32,
        carbon_impact: f64,
    ) -> sqlx::Result<Option<CompletionReward>> {
        sqlx::query_as::<_, CompletionReward>(
            r#"
            WITH credited AS (
                INSERT INTO module_completions (user_id, module_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                RETURNING module_id
            )
            UPDATE users u
            SET points = u.points + $3,
                carbon_footprint_reduction = u.carbon_footprint_reduction + $4
            FROM credited
            WHERE u.id = $1
            RETURNING $3::INT AS points_earned, $4::DOUBLE PRECISION AS carbon_reduced,
                      u.points AS total_points
            "#,
        )
        .bind(user_id)
        .bind(module_id)
        .bind(points)
        .bind(carbon_impact)
        .fetch_optional(&self.pool)
        .await
    }

    /// list_projects
    ///
    /// Same QueryBuilder filtering pattern as `list_modules`, with the derived `likes`
    /// and `completions` counters computed over the membership tables.
    /// **Visibility**: Strictly enforces `WHERE published = true` in the base query.
    async fn list_projects(
        &self,
        category: Option<ProjectCategory>,
        difficulty: Option<ProjectDifficulty>,
        search: Option<String>,
    ) -> sqlx::Result<Vec<Project>> {
        let mut builder: QueryBuilder<sqlx::Postgres> = QueryBuilder::new(
            r#"
            SELECT
                p.id, p.title, p.description, p.category, p.difficulty,
                p.time_required, p.materials, p.steps, p.images, p.main_image,
                p.video_tutorial, p.estimated_cost, p.tags, p.points, p.carbon_impact,
                p.published, p.created_by, u.name AS created_by_name,
                (SELECT COUNT(*) FROM project_likes l WHERE l.project_id = p.id) AS likes,
                (SELECT COUNT(*) FROM project_completions c WHERE c.project_id = p.id) AS completions,
                p.created_at, p.updated_at
            FROM projects p
            LEFT JOIN users u ON p.created_by = u.id
            WHERE p.published = true
            "#,
        );

        if let Some(c) = category {
            builder.push(" AND p.category = ");
            builder.push_bind(c);
        }

        if let Some(d) = difficulty {
            builder.push(" AND p.difficulty = ");
            builder.push_bind(d);
        }

        if let Some(s) = search {
            let search_pattern = format!("%{}%", s);
            builder.push(" AND (p.title ILIKE ");
            builder.push_bind(search_pattern.clone());
            builder.push(" OR p.description ILIKE ");
            builder.push_bind(search_pattern);
            builder.push(")");
        }

        builder.push(" ORDER BY p.created_at DESC");

        builder.build_query_as::<Project>().fetch_all(&self.pool).await
    }

    /// get_project
    ///
    /// Retrieval of any project by ID with the author join and derived counters.
    /// No visibility check, matching `get_module`.
    async fn get_project(&self, id: Uuid) -> sqlx::Result<Option<Project>> {
        sqlx::query_as::<_, Project>(
            r#"
            SELECT
                p.id, p.title, p.description, p.category, p.difficulty,
                p.time_required, p.materials, p.steps, p.images, p.main_image,
                p.video_tutorial, p.estimated_cost, p.tags, p.points, p.carbon_impact,
                p.published, p.created_by, u.name AS created_by_name,
                (SELECT COUNT(*) FROM project_likes l WHERE l.project_id = p.id) AS likes,
                (SELECT COUNT(*) FROM project_completions c WHERE c.project_id = p.id) AS completions,
                p.created_at, p.updated_at
            FROM projects p
            LEFT JOIN users u ON p.created_by = u.id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// create_project
    ///
    /// Inserts a new project via the same insert-then-join CTE shape as `create_module`.
    /// The derived counters are selected too so the returned record has the full shape
    /// (both are necessarily zero for a fresh row).
    async fn create_project(
        &self,
        req: CreateProjectRequest,
        created_by: Uuid,
    ) -> sqlx::Result<Project> {
        let new_id = Uuid::new_v4();
        let main_image = req
            .main_image
            .unwrap_or_else(|| DEFAULT_PROJECT_IMAGE.to_string());

        sqlx::query_as::<_, Project>(
            r#"
            WITH inserted AS (
                INSERT INTO projects (id, title, description, category, difficulty, time_required,
                                      materials, steps, images, main_image, video_tutorial,
                                      estimated_cost, tags, points, carbon_impact, published,
                                      created_by, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17,
                        NOW(), NOW())
                RETURNING id, title, description, category, difficulty, time_required, materials,
                          steps, images, main_image, video_tutorial, estimated_cost, tags, points,
                          carbon_impact, published, created_by, created_at, updated_at
            )
            SELECT
                i.id, i.title, i.description, i.category, i.difficulty,
                i.time_required, i.materials, i.steps, i.images, i.main_image,
                i.video_tutorial, i.estimated_cost, i.tags, i.points, i.carbon_impact,
                i.published, i.created_by, u.name AS created_by_name,
                (SELECT COUNT(*) FROM project_likes l WHERE l.project_id = i.id) AS likes,
                (SELECT COUNT(*) FROM project_completions c WHERE c.project_id = i.id) AS completions,
                i.created_at, i.updated_at
            FROM inserted i
            LEFT JOIN users u ON i.created_by = u.id
            "#,
        )
        .bind(new_id)
        .bind(req.title)
        .bind(req.description)
        .bind(req.category)
        .bind(req.difficulty)
        .bind(req.time_required)
        .bind(Json(req.materials))
        .bind(Json(req.steps))
        .bind(req.images)
        .bind(main_image)
        .bind(req.video_tutorial)
        .bind(req.estimated_cost)
        .bind(req.tags)
        .bind(req.points)
        .bind(req.carbon_impact)
        .bind(req.published)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await
    }

    /// update_project
    ///
    /// COALESCE partial update, same convention as `update_module`.
    async fn update_project(
        &self,
        id: Uuid,
        req: UpdateProjectRequest,
    ) -> sqlx::Result<Option<Project>> {
        sqlx::query_as::<_, Project>(
            r#"
            WITH updated AS (
                UPDATE projects
                SET title = COALESCE($2, title),
                    description = COALESCE($3, description),
                    category = COALESCE($4, category),
                    difficulty = COALESCE($5, difficulty),
                    time_required = COALESCE($6, time_required),
                    materials = COALESCE($7, materials),
                    steps = COALESCE($8, steps),
                    images = COALESCE($9, images),
                    main_image = COALESCE($10, main_image),
                    video_tutorial = COALESCE($11, video_tutorial),
                    estimated_cost = COALESCE($12, estimated_cost),
                    tags = COALESCE($13, tags),
                    points = COALESCE($14, points),
                    carbon_impact = COALESCE($15, carbon_impact),
                    published = COALESCE($16, published),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING id, title, description, category, difficulty, time_required, materials,
                          steps, images, main_image, video_tutorial, estimated_cost, tags, points,
                          carbon_impact, published, created_by, created_at, updated_at
            )
            SELECT
                i.id, i.title, i.description, i.category, i.difficulty,
                i.time_required, i.materials, i.steps, i.images, i.main_image,
                i.video_tutorial, i.estimated_cost, i.tags, i.points, i.carbon_impact,
                i.published, i.created_by, u.name AS created_by_name,
                (SELECT COUNT(*) FROM project_likes l WHERE l.project_id = i.id) AS likes,
                (SELECT COUNT(*) FROM project_completions c WHERE c.project_id = i.id) AS completions,
                i.created_at, i.updated_at
            FROM updated i
            LEFT JOIN users u ON i.created_by = u.id
            "#,
        )
        .bind(id)
        .bind(req.title)
        .bind(req.description)
        .bind(req.category)
        .bind(req.difficulty)
        .bind(req.time_required)
        .bind(req.materials.map(Json))
        .bind(req.steps.map(Json))
        .bind(req.images)
        .bind(req.main_image)
        .bind(req.video_tutorial)
        .bind(req.estimated_cost)
        .bind(req.tags)
        .bind(req.points)
        .bind(req.carbon_impact)
        .bind(req.published)
        .fetch_optional(&self.pool)
        .await
    }

    /// delete_project
    ///
    /// Deletes a project by ID. Likes and completion records cascade away with the row.
    async fn delete_project(&self, id: Uuid) -> sqlx::Result<bool> {
        let res = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    /// complete_project
    ///
    /// Identical atomic shape to `complete_module`, writing to `project_completions`.
    /// The project's public completion count is derived from that table, so crediting
    /// the user and bumping the counter are the same write.
    async fn complete_project(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        points: i32,
        carbon_impact: f64,
    ) -> sqlx::Result<Option<CompletionReward>> {
        sqlx::query_as::<_, CompletionReward>(
            r#"
            WITH credited AS (
                INSERT INTO project_completions (user_id, project_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                RETURNING project_id
            )
            UPDATE users u
            SET points = u.points + $3,
                carbon_footprint_reduction = u.carbon_footprint_reduction + $4
            FROM credited
            WHERE u.id = $1
            RETURNING $3::INT AS points_earned, $4::DOUBLE PRECISION AS carbon_reduced,
                      u.points AS total_points
            "#,
        )
        .bind(user_id)
        .bind(project_id)
        .bind(points)
        .bind(carbon_impact)
        .fetch_optional(&self.pool)
        .await
    }

    /// like_project
    ///
    /// Inserts a project like. Uses `ON CONFLICT DO NOTHING` so each user counts at
    /// most once; zero affected rows means this user already liked the project and
    /// the method reports `Ok(None)` without recounting.
    async fn like_project(&self, user_id: Uuid, project_id: Uuid) -> sqlx::Result<Option<i64>> {
        let inserted =
            sqlx::query("INSERT INTO project_likes (user_id, project_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
                .bind(user_id)
                .bind(project_id)
                .execute(&self.pool)
                .await?;

        if inserted.rows_affected() == 0 {
            return Ok(None);
        }

        let likes =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM project_likes WHERE project_id = $1")
                .bind(project_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(Some(likes))
    }

    /// list_resources
    ///
    /// QueryBuilder filtering over category, media type, and a title/description search.
    /// **Visibility**: Strictly enforces `WHERE published = true` in the base query.
    async fn list_resources(
        &self,
        category: Option<ResourceCategory>,
        resource_type: Option<ResourceType>,
        search: Option<String>,
    ) -> sqlx::Result<Vec<Resource>> {
        let mut builder: QueryBuilder<sqlx::Postgres> = QueryBuilder::new(
            r#"
            SELECT
                r.id, r.title, r.description, r.type, r.category, r.url, r.file_url,
                r.thumbnail, r.content, r.tags, r.published, r.views, r.downloads,
                r.created_by, u.name AS created_by_name, r.created_at, r.updated_at
            FROM resources r
            LEFT JOIN users u ON r.created_by = u.id
            WHERE r.published = true
            "#,
        );

        if let Some(c) = category {
            builder.push(" AND r.category = ");
            builder.push_bind(c);
        }

        if let Some(t) = resource_type {
            builder.push(" AND r.type = ");
            builder.push_bind(t);
        }

        if let Some(s) = search {
            let search_pattern = format!("%{}%", s);
            builder.push(" AND (r.title ILIKE ");
            builder.push_bind(search_pattern.clone());
            builder.push(" OR r.description ILIKE ");
            builder.push_bind(search_pattern);
            builder.push(")");
        }

        builder.push(" ORDER BY r.created_at DESC");

        builder.build_query_as::<Resource>().fetch_all(&self.pool).await
    }

    /// view_resource
    ///
    /// Retrieval by ID with the `views` increment folded into the same statement:
    /// the CTE performs the bump and the outer SELECT joins the author name onto the
    /// updated row. A missing ID updates nothing and yields `Ok(None)`.
    async fn view_resource(&self, id: Uuid) -> sqlx::Result<Option<Resource>> {
        sqlx::query_as::<_, Resource>(
            r#"
            WITH bumped AS (
                UPDATE resources
                SET views = views + 1
                WHERE id = $1
                RETURNING id, title, description, type, category, url, file_url, thumbnail,
                          content, tags, published, views, downloads, created_by,
                          created_at, updated_at
            )
            SELECT
                b.id, b.title, b.description, b.type, b.category, b.url, b.file_url,
                b.thumbnail, b.content, b.tags, b.published, b.views, b.downloads,
                b.created_by, u.name AS created_by_name, b.created_at, b.updated_at
            FROM bumped b
            LEFT JOIN users u ON b.created_by = u.id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// create_resource
    ///
    /// Insert-then-join CTE, same shape as `create_module`. The `views` and `downloads`
    /// counters start from their column defaults.
    async fn create_resource(
        &self,
        req: CreateResourceRequest,
        created_by: Uuid,
    ) -> sqlx::Result<Resource> {
        let new_id = Uuid::new_v4();
        let thumbnail = req
            .thumbnail
            .unwrap_or_else(|| DEFAULT_RESOURCE_THUMBNAIL.to_string());

        sqlx::query_as::<_, Resource>(
            r#"
            WITH inserted AS (
                INSERT INTO resources (id, title, description, type, category, url, file_url,
                                       thumbnail, content, tags, published, created_by,
                                       created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, NOW(), NOW())
                RETURNING id, title, description, type, category, url, file_url, thumbnail,
                          content, tags, published, views, downloads, created_by,
                          created_at, updated_at
            )
            SELECT
                i.id, i.title, i.description, i.type, i.category, i.url, i.file_url,
                i.thumbnail, i.content, i.tags, i.published, i.views, i.downloads,
                i.created_by, u.name AS created_by_name, i.created_at, i.updated_at
            FROM inserted i
            LEFT JOIN users u ON i.created_by = u.id
            "#,
        )
        .bind(new_id)
        .bind(req.title)
        .bind(req.description)
        .bind(req.resource_type)
        .bind(req.category)
        .bind(req.url)
        .bind(req.file_url)
        .bind(thumbnail)
        .bind(req.content)
        .bind(req.tags)
        .bind(req.published)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await
    }

    /// update_resource
    ///
    /// COALESCE partial update, same convention as `update_module`.
    async fn update_resource(
        &self,
        id: Uuid,
        req: UpdateResourceRequest,
    ) -> sqlx::Result<Option<Resource>> {
        sqlx::query_as::<_, Resource>(
            r#"
            WITH updated AS (
                UPDATE resources
                SET title = COALESCE($2, title),
                    description = COALESCE($3, description),
                    type = COALESCE($4, type),
                    category = COALESCE($5, category),
                    url = COALESCE($6, url),
                    file_url = COALESCE($7, file_url),
                    thumbnail = COALESCE($8, thumbnail),
                    content = COALESCE($9, content),
                    tags = COALESCE($10, tags),
                    published = COALESCE($11, published),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING id, title, description, type, category, url, file_url, thumbnail,
                          content, tags, published, views, downloads, created_by,
                          created_at, updated_at
            )
            SELECT
                i.id, i.title, i.description, i.type, i.category, i.url, i.file_url,
                i.thumbnail, i.content, i.tags, i.published, i.views, i.downloads,
                i.created_by, u.name AS created_by_name, i.created_at, i.updated_at
            FROM updated i
            LEFT JOIN users u ON i.created_by = u.id
            "#,
        )
        .bind(id)
        .bind(req.title)
        .bind(req.description)
        .bind(req.resource_type)
        .bind(req.category)
        .bind(req.url)
        .bind(req.file_url)
        .bind(req.thumbnail)
        .bind(req.content)
        .bind(req.tags)
        .bind(req.published)
        .fetch_optional(&self.pool)
        .await
    }

    /// delete_resource
    ///
    /// Deletes a resource by ID.
    async fn delete_resource(&self, id: Uuid) -> sqlx::Result<bool> {
        let res = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    /// find_user
    ///
    /// Retrieves identity and progress data (ID, role, accumulators) needed for
    /// authentication and authorization.
    async fn find_user(&self, id: Uuid) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, role, points, carbon_footprint_reduction, badges, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// create_user
    ///
    /// Creates the mirroring user record after external auth success. The gamification
    /// accumulators start from their column defaults (zero points, empty badge list).
    /// A duplicate email surfaces as a unique violation for the handler to translate.
    async fn create_user(
        &self,
        id: Uuid,
        name: String,
        email: String,
        role: String,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, role, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, name, email, role, points, carbon_footprint_reduction, badges, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(role)
        .fetch_one(&self.pool)
        .await
    }

    /// get_profile
    ///
    /// Compiles the full profile in a single call: user columns plus the completed-item
    /// ID sets aggregated from the membership tables, ordered by completion time.
    /// The flat row is reshaped into the nested `UserProfile` before returning.
    async fn get_profile(&self, id: Uuid) -> sqlx::Result<Option<UserProfile>> {
        let row = sqlx::query_as::<_, UserProgressRow>(
            r#"
            SELECT
                u.id, u.name, u.email, u.role, u.points, u.carbon_footprint_reduction, u.badges,
                ARRAY(SELECT mc.module_id FROM module_completions mc
                      WHERE mc.user_id = u.id ORDER BY mc.completed_at) AS completed_modules,
                ARRAY(SELECT pc.project_id FROM project_completions pc
                      WHERE pc.user_id = u.id ORDER BY pc.completed_at) AS completed_projects,
                u.created_at
            FROM users u
            WHERE u.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| UserProfile {
            id: r.id,
            name: r.name,
            email: r.email,
            role: r.role,
            // Using a DiceBear API for stable, unique avatar generation based on UUID.
            avatar_url: Some(format!(
                "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
                r.id
            )),
            progress: ProgressSummary {
                points: r.points,
                carbon_footprint_reduction: r.carbon_footprint_reduction,
                badges: r.badges,
                completed_modules: r.completed_modules,
                completed_projects: r.completed_projects,
            },
            created_at: r.created_at,
        }))
    }
}
