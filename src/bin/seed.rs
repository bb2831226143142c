use eco_learn::{
    config::AppConfig,
    models::{
        CreateModuleRequest, CreateProjectRequest, CreateResourceRequest, Difficulty, Material,
        ModuleCategory, ProjectCategory, ProjectDifficulty, ProjectStep, QuizQuestion,
        ResourceCategory, ResourceType,
    },
    repository::{PostgresRepository, Repository},
};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::{Uuid, uuid};

// Stable identities for the seeded accounts so the Local `x-user-id` bypass
// works out of the box. Passwords live with the auth provider, not here.
const ADMIN_ID: Uuid = uuid!("11111111-1111-1111-1111-111111111111");
const DEMO_USER_ID: Uuid = uuid!("22222222-2222-2222-2222-222222222222");

/// seed
///
/// Development utility that resets the database and loads a demo dataset:
/// two accounts (one admin, one regular user) and a starter catalogue of
/// modules, projects, and resources. Destructive; never point it at
/// production data.
#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.db_url)
        .await
        .expect("FATAL: Failed to connect to Postgres. Check DATABASE_URL.");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("FATAL: Failed to run database migrations.");

    let repo = PostgresRepository::new(pool.clone());

    // Clear existing data. The membership tables are listed explicitly even
    // though the FK cascades would empty them, so the statement reads as the
    // full inventory of what gets wiped.
    sqlx::query(
        "TRUNCATE module_completions, project_completions, project_likes, \
         modules, projects, resources, users",
    )
    .execute(&pool)
    .await
    .expect("Failed to clear existing data");
    tracing::info!("Cleared existing data");

    let admin = repo
        .create_user(
            ADMIN_ID,
            "Admin User".to_string(),
            "admin@sustainable.com".to_string(),
            "admin".to_string(),
        )
        .await
        .expect("Failed to create admin user");
    let demo_user = repo
        .create_user(
            DEMO_USER_ID,
            "John Doe".to_string(),
            "user@sustainable.com".to_string(),
            "user".to_string(),
        )
        .await
        .expect("Failed to create demo user");
    tracing::info!("Users created");

    let modules = sample_modules();
    let module_count = modules.len();
    for module in modules {
        repo.create_module(module, admin.id)
            .await
            .expect("Failed to seed module");
    }
    tracing::info!("Modules created");

    let projects = sample_projects();
    let project_count = projects.len();
    for project in projects {
        repo.create_project(project, admin.id)
            .await
            .expect("Failed to seed project");
    }
    tracing::info!("Projects created");

    let resources = sample_resources();
    let resource_count = resources.len();
    for resource in resources {
        repo.create_resource(resource, admin.id)
            .await
            .expect("Failed to seed resource");
    }
    tracing::info!("Resources created");

    tracing::info!(
        modules = module_count,
        projects = project_count,
        resources = resource_count,
        "Database seeded successfully"
    );
    tracing::info!(
        "Local x-user-id bypass: admin {} / user {}",
        admin.id,
        demo_user.id
    );
}

fn sample_modules() -> Vec<CreateModuleRequest> {
    vec![
        CreateModuleRequest {
            title: "Introduction to Solar Energy".to_string(),
            description: "Learn the basics of solar energy and how it works".to_string(),
            category: ModuleCategory::RenewableEnergy,
            difficulty: Difficulty::Beginner,
            duration: 30,
            content: "Solar energy is power obtained by harnessing the energy of the sun's rays. \
                      This renewable energy source has become increasingly popular as technology \
                      has advanced and costs have decreased. In this module, you'll learn about \
                      photovoltaic cells, solar panels, and how solar energy systems work."
                .to_string(),
            video_url: Some("https://www.youtube.com/watch?v=example".to_string()),
            resources: vec![],
            quiz: vec![
                QuizQuestion {
                    question: "What is the main component of a solar panel?".to_string(),
                    options: vec![
                        "Photovoltaic cells".to_string(),
                        "Batteries".to_string(),
                        "Mirrors".to_string(),
                        "Wind turbines".to_string(),
                    ],
                    correct_answer: 0,
                    explanation: Some(
                        "Photovoltaic cells convert sunlight directly into electricity."
                            .to_string(),
                    ),
                },
                QuizQuestion {
                    question: "Is solar energy renewable?".to_string(),
                    options: vec![
                        "No".to_string(),
                        "Yes".to_string(),
                        "Sometimes".to_string(),
                        "Only in summer".to_string(),
                    ],
                    correct_answer: 1,
                    explanation: Some(
                        "Solar energy is completely renewable as the sun will continue to shine \
                         for billions of years."
                            .to_string(),
                    ),
                },
            ],
            points: 10,
            carbon_impact: 5.0,
            thumbnail: None,
            published: true,
        },
        CreateModuleRequest {
            title: "Wind Power Fundamentals".to_string(),
            description: "Discover how wind turbines generate clean electricity".to_string(),
            category: ModuleCategory::RenewableEnergy,
            difficulty: Difficulty::Beginner,
            duration: 25,
            content: "Wind power harnesses the kinetic energy of moving air to generate \
                      electricity. Modern wind turbines are engineering marvels that can power \
                      thousands of homes. Learn about wind turbine components, offshore vs \
                      onshore wind farms, and the future of wind energy."
                .to_string(),
            video_url: None,
            resources: vec![],
            quiz: vec![],
            points: 10,
            carbon_impact: 4.0,
            thumbnail: None,
            published: true,
        },
        CreateModuleRequest {
            title: "Zero Waste Living".to_string(),
            description: "Practical strategies to reduce your waste footprint".to_string(),
            category: ModuleCategory::WasteReduction,
            difficulty: Difficulty::Intermediate,
            duration: 40,
            content: "Zero waste living is about reducing what we need, reusing what we can, and \
                      recycling what we must. This module covers the 5 Rs: Refuse, Reduce, \
                      Reuse, Recycle, and Rot. Learn practical tips for everyday life."
                .to_string(),
            video_url: None,
            resources: vec![],
            quiz: vec![],
            points: 15,
            carbon_impact: 8.0,
            thumbnail: None,
            published: true,
        },
        CreateModuleRequest {
            title: "Water Conservation at Home".to_string(),
            description: "Simple ways to save water in your daily routine".to_string(),
            category: ModuleCategory::WaterConservation,
            difficulty: Difficulty::Beginner,
            duration: 30,
            content: "Water is our most precious resource. Learn practical techniques to reduce \
                      water consumption at home, from fixing leaks to choosing water-efficient \
                      appliances."
                .to_string(),
            video_url: None,
            resources: vec![],
            quiz: vec![],
            points: 10,
            carbon_impact: 3.0,
            thumbnail: None,
            published: true,
        },
        CreateModuleRequest {
            title: "Sustainable Transportation".to_string(),
            description: "Reduce your carbon footprint through smart travel choices".to_string(),
            category: ModuleCategory::Transportation,
            difficulty: Difficulty::Intermediate,
            duration: 35,
            content: "Transportation is a major contributor to carbon emissions. Explore \
                      alternatives like cycling, public transit, carpooling, and electric \
                      vehicles. Learn how your travel choices impact the environment."
                .to_string(),
            video_url: None,
            resources: vec![],
            quiz: vec![],
            points: 15,
            carbon_impact: 10.0,
            thumbnail: None,
            published: true,
        },
    ]
}

fn sample_projects() -> Vec<CreateProjectRequest> {
    vec![
        CreateProjectRequest {
            title: "Build a Rain Barrel".to_string(),
            description: "Collect rainwater for gardening and reduce water bills".to_string(),
            category: ProjectCategory::Water,
            difficulty: ProjectDifficulty::Medium,
            time_required: 120,
            materials: vec![
                Material {
                    name: "Large barrel (55 gallon)".to_string(),
                    quantity: Some("1".to_string()),
                    optional: false,
                },
                Material {
                    name: "Spigot".to_string(),
                    quantity: Some("1".to_string()),
                    optional: false,
                },
                Material {
                    name: "Screen mesh".to_string(),
                    quantity: Some("1 sq ft".to_string()),
                    optional: false,
                },
                Material {
                    name: "Drill with bits".to_string(),
                    quantity: Some("1".to_string()),
                    optional: false,
                },
                Material {
                    name: "Silicone sealant".to_string(),
                    quantity: Some("1 tube".to_string()),
                    optional: false,
                },
            ],
            steps: vec![
                ProjectStep {
                    step_number: 1,
                    instruction: "Clean the barrel thoroughly with soap and water".to_string(),
                    image: None,
                    tip: Some("Make sure the barrel is food-grade if possible".to_string()),
                },
                ProjectStep {
                    step_number: 2,
                    instruction: "Drill a hole near the bottom for the spigot".to_string(),
                    image: None,
                    tip: Some(
                        "Position it high enough to fit a watering can underneath".to_string(),
                    ),
                },
                ProjectStep {
                    step_number: 3,
                    instruction: "Install the spigot using silicone sealant for a watertight seal"
                        .to_string(),
                    image: None,
                    tip: Some("Let the sealant dry for 24 hours before use".to_string()),
                },
                ProjectStep {
                    step_number: 4,
                    instruction:
                        "Cut a hole in the top and install screen mesh to keep debris out"
                            .to_string(),
                    image: None,
                    tip: Some(
                        "The mesh prevents mosquitoes from breeding in the water".to_string(),
                    ),
                },
            ],
            images: vec![],
            main_image: None,
            video_tutorial: None,
            estimated_cost: Some("$30-50".to_string()),
            tags: vec![
                "water conservation".to_string(),
                "gardening".to_string(),
                "diy".to_string(),
            ],
            points: 20,
            carbon_impact: 15.0,
            published: true,
        },
        CreateProjectRequest {
            title: "DIY Beeswax Food Wraps".to_string(),
            description: "Replace plastic wrap with reusable, eco-friendly alternative".to_string(),
            category: ProjectCategory::Recycling,
            difficulty: ProjectDifficulty::Easy,
            time_required: 30,
            materials: vec![
                Material {
                    name: "Cotton fabric".to_string(),
                    quantity: Some("Various sizes".to_string()),
                    optional: false,
                },
                Material {
                    name: "Beeswax pellets".to_string(),
                    quantity: Some("2 cups".to_string()),
                    optional: false,
                },
                Material {
                    name: "Parchment paper".to_string(),
                    quantity: Some("1 roll".to_string()),
                    optional: false,
                },
                Material {
                    name: "Baking sheet".to_string(),
                    quantity: Some("1".to_string()),
                    optional: false,
                },
                Material {
                    name: "Paintbrush".to_string(),
                    quantity: Some("1".to_string()),
                    optional: false,
                },
            ],
            steps: vec![
                ProjectStep {
                    step_number: 1,
                    instruction: "Cut cotton fabric into desired sizes".to_string(),
                    image: None,
                    tip: Some("Common sizes: 8x8\", 10x10\", 12x12\"".to_string()),
                },
                ProjectStep {
                    step_number: 2,
                    instruction: "Place fabric on parchment paper on baking sheet".to_string(),
                    image: None,
                    tip: Some("Preheat oven to 185F (85C)".to_string()),
                },
                ProjectStep {
                    step_number: 3,
                    instruction: "Sprinkle beeswax pellets evenly over fabric".to_string(),
                    image: None,
                    tip: Some("Use about 1-2 tablespoons per wrap".to_string()),
                },
                ProjectStep {
                    step_number: 4,
                    instruction: "Place in oven until wax melts (about 5 minutes)".to_string(),
                    image: None,
                    tip: Some("Watch carefully to avoid overheating".to_string()),
                },
                ProjectStep {
                    step_number: 5,
                    instruction: "Remove and hang to dry for 1-2 minutes".to_string(),
                    image: None,
                    tip: Some("Wraps will be ready to use once cooled".to_string()),
                },
            ],
            images: vec![],
            main_image: None,
            video_tutorial: None,
            estimated_cost: Some("$15-25".to_string()),
            tags: vec![
                "zero waste".to_string(),
                "kitchen".to_string(),
                "reusable".to_string(),
            ],
            points: 15,
            carbon_impact: 8.0,
            published: true,
        },
        CreateProjectRequest {
            title: "Create a Vertical Garden".to_string(),
            description: "Grow your own herbs and vegetables in small spaces".to_string(),
            category: ProjectCategory::Gardening,
            difficulty: ProjectDifficulty::Medium,
            time_required: 180,
            materials: vec![
                Material {
                    name: "Wooden pallets".to_string(),
                    quantity: Some("1-2".to_string()),
                    optional: false,
                },
                Material {
                    name: "Landscape fabric".to_string(),
                    quantity: Some("2 yards".to_string()),
                    optional: false,
                },
                Material {
                    name: "Staple gun".to_string(),
                    quantity: Some("1".to_string()),
                    optional: false,
                },
                Material {
                    name: "Potting soil".to_string(),
                    quantity: Some("1 bag".to_string()),
                    optional: false,
                },
                Material {
                    name: "Plants or seeds".to_string(),
                    quantity: Some("Various".to_string()),
                    optional: false,
                },
            ],
            steps: vec![
                ProjectStep {
                    step_number: 1,
                    instruction: "Sand and treat the pallet if needed".to_string(),
                    image: None,
                    tip: Some(
                        "Use pallets marked \"HT\" (heat-treated) not \"MB\" (chemical-treated)"
                            .to_string(),
                    ),
                },
                ProjectStep {
                    step_number: 2,
                    instruction: "Attach landscape fabric to back and bottom".to_string(),
                    image: None,
                    tip: Some("This creates pockets to hold soil".to_string()),
                },
                ProjectStep {
                    step_number: 3,
                    instruction: "Fill pockets with potting soil".to_string(),
                    image: None,
                    tip: Some("Leave space for plant roots".to_string()),
                },
                ProjectStep {
                    step_number: 4,
                    instruction: "Plant herbs, vegetables, or flowers".to_string(),
                    image: None,
                    tip: Some("Choose plants with similar water and light needs".to_string()),
                },
            ],
            images: vec![],
            main_image: None,
            video_tutorial: None,
            estimated_cost: Some("$20-40".to_string()),
            tags: vec![
                "gardening".to_string(),
                "food".to_string(),
                "upcycling".to_string(),
            ],
            points: 25,
            carbon_impact: 12.0,
            published: true,
        },
    ]
}

fn sample_resources() -> Vec<CreateResourceRequest> {
    vec![
        CreateResourceRequest {
            title: "Complete Guide to Solar Panel Installation".to_string(),
            description: "Everything you need to know about installing solar panels".to_string(),
            resource_type: ResourceType::Guide,
            category: ResourceCategory::RenewableEnergy,
            url: None,
            file_url: None,
            thumbnail: None,
            content: Some(
                "Comprehensive guide covering costs, permits, installation process, and \
                 maintenance of residential solar systems."
                    .to_string(),
            ),
            tags: vec![
                "solar".to_string(),
                "renewable energy".to_string(),
                "installation".to_string(),
            ],
            published: true,
        },
        CreateResourceRequest {
            title: "Carbon Footprint Calculator".to_string(),
            description: "Calculate your personal carbon footprint".to_string(),
            resource_type: ResourceType::Calculator,
            category: ResourceCategory::General,
            url: Some("https://calculator.carbonfootprint.com/".to_string()),
            file_url: None,
            thumbnail: None,
            content: Some(
                "Interactive tool to measure your carbon emissions from daily activities."
                    .to_string(),
            ),
            tags: vec![
                "carbon".to_string(),
                "calculator".to_string(),
                "measurement".to_string(),
            ],
            published: true,
        },
        CreateResourceRequest {
            title: "Plastic-Free Living Checklist".to_string(),
            description: "Step-by-step guide to reducing plastic use".to_string(),
            resource_type: ResourceType::Guide,
            category: ResourceCategory::WasteReduction,
            url: None,
            file_url: None,
            thumbnail: None,
            content: Some(
                "Practical checklist for eliminating single-use plastics from your life."
                    .to_string(),
            ),
            tags: vec![
                "plastic-free".to_string(),
                "zero waste".to_string(),
                "checklist".to_string(),
            ],
            published: true,
        },
        CreateResourceRequest {
            title: "Sustainable Fashion Guide".to_string(),
            description: "Make eco-friendly clothing choices".to_string(),
            resource_type: ResourceType::Article,
            category: ResourceCategory::EcoLifestyle,
            url: None,
            file_url: None,
            thumbnail: None,
            content: Some(
                "Learn about sustainable fabrics, ethical brands, and how to build a minimalist \
                 wardrobe."
                    .to_string(),
            ),
            tags: vec![
                "fashion".to_string(),
                "sustainable".to_string(),
                "clothing".to_string(),
            ],
            published: true,
        },
    ]
}
