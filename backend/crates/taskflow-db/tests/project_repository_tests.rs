mod common;

use common::{create_test_pool, create_test_project, create_test_project_at};

use taskflow_core::ProjectId;
use taskflow_db::ProjectRepository;

use chrono::{Duration, Utc};
use googletest::prelude::*;

#[tokio::test]
async fn given_valid_project_when_created_then_can_be_found_by_id() {
    // Given: A test database
    let pool = create_test_pool().await;
    let project = create_test_project("Alpha");
    let repo = ProjectRepository::new(pool.clone());

    // When: Creating the project
    repo.create(&project).await.unwrap();

    // Then: Finding by ID returns the project
    let result = repo.find_by_id(project.id).await.unwrap();

    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.id, eq(project.id));
    assert_that!(found.name, eq(&project.name));
    assert_that!(found.description, eq(&project.description));
    // Stored at microsecond precision
    assert_that!(
        found.created_at.timestamp_micros(),
        eq(project.created_at.timestamp_micros())
    );
}

#[tokio::test]
async fn given_empty_database_when_finding_nonexistent_id_then_returns_none() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);

    // When: Finding a project that doesn't exist
    let nonexistent_id = ProjectId::generate();
    let result = repo.find_by_id(nonexistent_id).await.unwrap();

    // Then: Returns None
    assert_that!(result, none());
}

#[tokio::test]
async fn given_existing_project_when_updated_then_changes_are_persisted() {
    // Given: A project exists in the database
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());
    let mut project = create_test_project("Alpha");
    repo.create(&project).await.unwrap();

    // When: Updating name and description
    project.name = "Alpha Renamed".to_string();
    project.description = Some("reworked".to_string());
    repo.update(&project).await.unwrap();

    // Then: The changes are persisted
    let found = repo.find_by_id(project.id).await.unwrap().unwrap();
    assert_that!(found.name.as_str(), eq("Alpha Renamed"));
    assert_that!(found.description.as_deref(), some(eq("reworked")));
}

#[tokio::test]
async fn given_existing_project_when_description_cleared_then_none_is_persisted() {
    // Given: A project with a description
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());
    let mut project = create_test_project("Alpha");
    repo.create(&project).await.unwrap();

    // When: Clearing the description
    project.description = None;
    repo.update(&project).await.unwrap();

    // Then: The stored description is NULL
    let found = repo.find_by_id(project.id).await.unwrap().unwrap();
    assert_that!(found.description, none());
}

#[tokio::test]
async fn given_existing_project_when_deleted_then_gone_for_good() {
    // Given: A project exists in the database
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());
    let project = create_test_project("Alpha");
    repo.create(&project).await.unwrap();

    // When: Deleting it
    let deleted = repo.delete(project.id).await.unwrap();

    // Then: The delete was real and the row is unreachable
    assert_that!(deleted, eq(true));
    assert_that!(repo.find_by_id(project.id).await.unwrap(), none());
    assert_that!(repo.find_all().await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_missing_project_when_deleted_then_reports_no_op() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);

    // When: Deleting an id that was never created
    let deleted = repo.delete(ProjectId::generate()).await.unwrap();

    // Then: No row was removed
    assert_that!(deleted, eq(false));
}

#[tokio::test]
async fn given_multiple_projects_when_finding_all_then_newest_first() {
    // Given: Three projects created at distinct times
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());

    let base = Utc::now();
    let oldest = create_test_project_at("Oldest", base - Duration::minutes(2));
    let middle = create_test_project_at("Middle", base - Duration::minutes(1));
    let newest = create_test_project_at("Newest", base);

    // Inserted out of order on purpose
    repo.create(&middle).await.unwrap();
    repo.create(&newest).await.unwrap();
    repo.create(&oldest).await.unwrap();

    // When: Listing
    let projects = repo.find_all().await.unwrap();

    // Then: Ordered by created_at descending
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_that!(names, eq(&vec!["Newest", "Middle", "Oldest"]));
}

#[tokio::test]
async fn given_equal_timestamps_when_finding_all_then_later_insert_wins() {
    // Given: Two projects sharing one creation timestamp
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());

    let ts = Utc::now();
    let first = create_test_project_at("First", ts);
    let second = create_test_project_at("Second", ts);

    repo.create(&first).await.unwrap();
    repo.create(&second).await.unwrap();

    // When: Listing
    let projects = repo.find_all().await.unwrap();

    // Then: Insertion order breaks the tie, newest insert first
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_that!(names, eq(&vec!["Second", "First"]));
}

#[tokio::test]
async fn given_empty_database_when_finding_all_then_returns_empty_vec() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);

    // When: Finding all projects
    let projects = repo.find_all().await.unwrap();

    // Then: Returns empty vector
    assert_that!(projects, is_empty());
}
