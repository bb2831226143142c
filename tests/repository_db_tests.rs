//! Repository tests against a live Postgres.
//!
//! Ignored by default so the suite passes without infrastructure. Run them
//! with a reachable DATABASE_URL:
//!
//! ```sh
//! cargo test --test repository_db_tests -- --ignored
//! ```

use dotenv; // Added import for dotenv
use eco_learn::{
    models::{
        CreateModuleRequest, CreateProjectRequest, CreateResourceRequest, DEFAULT_MODULE_THUMBNAIL,
        Difficulty, ModuleCategory, ProjectCategory, ProjectDifficulty, ResourceCategory,
        ResourceType, UpdateModuleRequest, User,
    },
    repository::{PostgresRepository, Repository},
};
use sqlx::PgPool;
use tokio::test;
use uuid::Uuid;

// --- Test Context and Setup ---

/// A simple structure to hold the database pool for testing
struct DbTestContext {
    pool: PgPool,
}

impl DbTestContext {
    async fn setup() -> Self {
        dotenv::dotenv().ok();

        let db_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set to run integration tests");

        let pool = PgPool::connect(&db_url)
            .await
            .expect("Failed to connect to database for integration tests.");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run database migrations.");

        DbTestContext { pool }
    }

    fn repository(&self) -> PostgresRepository {
        PostgresRepository::new(self.pool.clone())
    }
}

// --- Test Data Helpers ---

/// Inserts a user with a unique email so repeated runs never collide.
async fn create_test_user(repo: &PostgresRepository, role: &str) -> User {
    let id = Uuid::new_v4();
    let email = format!("{}-{}@test.com", role, id);

    repo.create_user(id, format!("Test {}", role), email, role.to_string())
        .await
        .expect("Failed to create test user")
}

fn module_request(title: &str, category: ModuleCategory, published: bool) -> CreateModuleRequest {
    CreateModuleRequest {
        title: title.to_string(),
        description: "Hands-on guidance for cutting household impact".to_string(),
        category,
        difficulty: Difficulty::Beginner,
        duration: 30,
        content: "Lesson body.".to_string(),
        video_url: None,
        resources: vec![],
        quiz: vec![],
        points: 10,
        carbon_impact: 5.0,
        thumbnail: None,
        published,
    }
}

fn project_request(title: &str) -> CreateProjectRequest {
    CreateProjectRequest {
        title: title.to_string(),
        description: "A weekend build".to_string(),
        category: ProjectCategory::Water,
        difficulty: ProjectDifficulty::Easy,
        time_required: 60,
        materials: vec![],
        steps: vec![],
        images: vec![],
        main_image: None,
        video_tutorial: None,
        estimated_cost: None,
        tags: vec![],
        points: 20,
        carbon_impact: 15.0,
        published: true,
    }
}

fn resource_request(title: &str) -> CreateResourceRequest {
    CreateResourceRequest {
        title: title.to_string(),
        description: "Reference material".to_string(),
        resource_type: ResourceType::Guide,
        category: ResourceCategory::General,
        url: Some("https://example.com/guide".to_string()),
        file_url: None,
        thumbnail: None,
        content: None,
        tags: vec![],
        published: true,
    }
}

// --- Tests ---

#[test]
#[ignore = "requires a running Postgres"]
async fn test_create_and_get_module() {
    let ctx = DbTestContext::setup().await;
    let repo = ctx.repository();
    let admin = create_test_user(&repo, "admin").await;

    let req = module_request("Solar Basics", ModuleCategory::RenewableEnergy, true);

    // 1. Test Create
    let created = repo
        .create_module(req.clone(), admin.id)
        .await
        .expect("create_module failed");
    assert_eq!(created.title, req.title);
    assert_eq!(created.points, 10);
    assert_eq!(created.created_by, Some(admin.id));
    // The author name is joined back in the insert statement itself
    assert_eq!(created.created_by_name.as_deref(), Some(admin.name.as_str()));
    // No thumbnail supplied, so the placeholder applies
    assert_eq!(created.thumbnail, DEFAULT_MODULE_THUMBNAIL);

    // 2. Test Get
    let fetched = repo.get_module(created.id).await.expect("get_module failed");
    assert!(fetched.is_some());
    assert_eq!(fetched.unwrap().title, req.title);
}

#[test]
#[ignore = "requires a running Postgres"]
async fn test_list_modules_visibility_and_filters() {
    let ctx = DbTestContext::setup().await;
    let repo = ctx.repository();
    let admin = create_test_user(&repo, "admin").await;

    repo.create_module(
        module_request("Solar Basics", ModuleCategory::RenewableEnergy, true),
        admin.id,
    )
    .await
    .unwrap();
    repo.create_module(
        module_request("Compost Basics", ModuleCategory::WasteReduction, true),
        admin.id,
    )
    .await
    .unwrap();
    let draft = repo
        .create_module(
            module_request("Hidden Draft", ModuleCategory::RenewableEnergy, false),
            admin.id,
        )
        .await
        .unwrap();

    // Test 1: No filter (Should only return published modules)
    let all_modules = repo.list_modules(None, None, None).await.unwrap();
    let ours: Vec<_> = all_modules
        .iter()
        .filter(|m| m.created_by == Some(admin.id))
        .collect();
    assert_eq!(ours.len(), 2, "The draft must stay out of the listing");

    // Test 2: Filter by category
    let energy = repo
        .list_modules(Some(ModuleCategory::RenewableEnergy), None, None)
        .await
        .unwrap();
    let ours: Vec<_> = energy
        .iter()
        .filter(|m| m.created_by == Some(admin.id))
        .collect();
    assert_eq!(ours.len(), 1);
    assert_eq!(ours[0].title, "Solar Basics");

    // Test 3: Case-insensitive search over title/description
    let found = repo
        .list_modules(None, None, Some("solar".to_string()))
        .await
        .unwrap();
    assert!(
        found
            .iter()
            .any(|m| m.created_by == Some(admin.id) && m.title == "Solar Basics")
    );

    // Test 4: A direct fetch still resolves the draft
    let fetched_draft = repo.get_module(draft.id).await.unwrap();
    assert!(fetched_draft.is_some());
    assert!(!fetched_draft.unwrap().published);
}

#[test]
#[ignore = "requires a running Postgres"]
async fn test_update_module_partial() {
    let ctx = DbTestContext::setup().await;
    let repo = ctx.repository();
    let admin = create_test_user(&repo, "admin").await;

    let module = repo
        .create_module(
            module_request("To Update", ModuleCategory::EcoLifestyle, true),
            admin.id,
        )
        .await
        .unwrap();

    // Only the title is supplied; COALESCE must keep every other column
    let update_req = UpdateModuleRequest {
        title: Some("New Title".to_string()),
        ..UpdateModuleRequest::default()
    };
    let updated = repo
        .update_module(module.id, update_req.clone())
        .await
        .unwrap()
        .expect("update should find the module");
    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.duration, module.duration);
    assert_eq!(updated.points, module.points);
    assert!(updated.updated_at >= module.updated_at);

    // A missing ID updates nothing
    let missing = repo.update_module(Uuid::new_v4(), update_req).await.unwrap();
    assert!(missing.is_none());
}

#[test]
#[ignore = "requires a running Postgres"]
async fn test_delete_module() {
    let ctx = DbTestContext::setup().await;
    let repo = ctx.repository();
    let admin = create_test_user(&repo, "admin").await;

    let module = repo
        .create_module(
            module_request("To Delete", ModuleCategory::Transportation, true),
            admin.id,
        )
        .await
        .unwrap();

    assert!(repo.delete_module(module.id).await.unwrap());
    assert!(repo.get_module(module.id).await.unwrap().is_none());
    // A second delete affects no rows
    assert!(!repo.delete_module(module.id).await.unwrap());
}

#[test]
#[ignore = "requires a running Postgres"]
async fn test_complete_module_credits_once() {
    let ctx = DbTestContext::setup().await;
    let repo = ctx.repository();
    let admin = create_test_user(&repo, "admin").await;
    let learner = create_test_user(&repo, "user").await;

    let module = repo
        .create_module(
            module_request("Completable", ModuleCategory::WaterConservation, true),
            admin.id,
        )
        .await
        .unwrap();

    // 1. First completion credits the reward
    let reward = repo
        .complete_module(learner.id, module.id, module.points, module.carbon_impact)
        .await
        .unwrap()
        .expect("first completion should credit a reward");
    assert_eq!(reward.points_earned, 10);
    assert_eq!(reward.carbon_reduced, 5.0);
    assert_eq!(reward.total_points, 10, "A fresh user starts from zero");

    // 2. A repeat changes nothing
    let repeat = repo
        .complete_module(learner.id, module.id, module.points, module.carbon_impact)
        .await
        .unwrap();
    assert!(repeat.is_none());

    let after = repo.find_user(learner.id).await.unwrap().unwrap();
    assert_eq!(after.points, 10);
    assert_eq!(after.carbon_footprint_reduction, 5.0);
}

#[test]
#[ignore = "requires a running Postgres"]
async fn test_like_project_once_per_user() {
    let ctx = DbTestContext::setup().await;
    let repo = ctx.repository();
    let admin = create_test_user(&repo, "admin").await;
    let learner = create_test_user(&repo, "user").await;

    let project = repo
        .create_project(project_request("Likeable"), admin.id)
        .await
        .unwrap();

    let likes = repo.like_project(learner.id, project.id).await.unwrap();
    assert_eq!(likes, Some(1));

    // Same user again: no new row, no recount
    let repeat = repo.like_project(learner.id, project.id).await.unwrap();
    assert!(repeat.is_none());

    // The derived counter on the project row reflects the single like
    let fetched = repo.get_project(project.id).await.unwrap().unwrap();
    assert_eq!(fetched.likes, 1);
}

#[test]
#[ignore = "requires a running Postgres"]
async fn test_view_resource_bumps_views() {
    let ctx = DbTestContext::setup().await;
    let repo = ctx.repository();
    let admin = create_test_user(&repo, "admin").await;

    let resource = repo
        .create_resource(resource_request("Viewable"), admin.id)
        .await
        .unwrap();
    assert_eq!(resource.views, 0);

    let first = repo.view_resource(resource.id).await.unwrap().unwrap();
    assert_eq!(first.views, 1);

    let second = repo.view_resource(resource.id).await.unwrap().unwrap();
    assert_eq!(second.views, 2);

    // A missing ID bumps nothing
    let missing = repo.view_resource(Uuid::new_v4()).await.unwrap();
    assert!(missing.is_none());
}

#[test]
#[ignore = "requires a running Postgres"]
async fn test_profile_aggregates_progress() {
    let ctx = DbTestContext::setup().await;
    let repo = ctx.repository();
    let admin = create_test_user(&repo, "admin").await;
    let learner = create_test_user(&repo, "user").await;

    let module = repo
        .create_module(
            module_request("Progress Module", ModuleCategory::FoodSustainability, true),
            admin.id,
        )
        .await
        .unwrap();
    let project = repo
        .create_project(project_request("Progress Project"), admin.id)
        .await
        .unwrap();

    repo.complete_module(learner.id, module.id, module.points, module.carbon_impact)
        .await
        .unwrap()
        .expect("module completion");
    repo.complete_project(learner.id, project.id, project.points, project.carbon_impact)
        .await
        .unwrap()
        .expect("project completion");

    let profile = repo.get_profile(learner.id).await.unwrap().unwrap();
    assert_eq!(profile.progress.points, 30);
    assert_eq!(profile.progress.carbon_footprint_reduction, 20.0);
    assert!(profile.progress.completed_modules.contains(&module.id));
    assert!(profile.progress.completed_projects.contains(&project.id));
    assert!(
        profile
            .avatar_url
            .as_deref()
            .is_some_and(|url| url.contains("dicebear"))
    );
}

#[test]
#[ignore = "requires a running Postgres"]
async fn test_duplicate_email_is_rejected() {
    let ctx = DbTestContext::setup().await;
    let repo = ctx.repository();

    let email = format!("dup-{}@test.com", Uuid::new_v4());
    repo.create_user(
        Uuid::new_v4(),
        "First".to_string(),
        email.clone(),
        "user".to_string(),
    )
    .await
    .expect("first insert should succeed");

    let second = repo
        .create_user(Uuid::new_v4(), "Second".to_string(), email, "user".to_string())
        .await;

    let err = second.expect_err("second insert must hit the unique email constraint");
    assert!(
        err.as_database_error()
            .is_some_and(|db| db.is_unique_violation())
    );
}
