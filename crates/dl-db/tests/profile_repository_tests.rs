mod common;

use common::{
    create_test_education, create_test_experience, create_test_pool, create_test_profile,
    create_test_user,
};

use dl_core::{collection, SocialLinks};
use dl_db::{ProfileRepository, UserRepository};

use chrono::Utc;
use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_profile_when_created_then_can_be_found_by_user() {
    let pool = create_test_pool().await;
    let user = create_test_user("Alice");
    UserRepository::new(pool.clone()).create(&user).await.unwrap();

    let repo = ProfileRepository::new(pool);
    let profile = create_test_profile(user.id);

    repo.create(&profile).await.unwrap();

    let found = repo.find_by_user(user.id).await.unwrap().unwrap();
    assert_that!(found.user_id, eq(user.id));
    assert_that!(found.status.as_deref(), eq(profile.status.as_deref()));
    assert_that!(found.skills, len(eq(2)));
    assert_that!(found.skills[0], eq("go"));
    assert_that!(found.skills[1], eq("rust"));
}

#[tokio::test]
async fn given_empty_database_when_finding_profile_then_returns_none() {
    let pool = create_test_pool().await;
    let repo = ProfileRepository::new(pool);

    let result = repo.find_by_user(Uuid::new_v4()).await.unwrap();

    assert_that!(result, none());
}

#[tokio::test]
async fn given_embedded_collections_when_written_back_then_round_trip_whole() {
    let pool = create_test_pool().await;
    let user = create_test_user("Bob");
    UserRepository::new(pool.clone()).create(&user).await.unwrap();

    let repo = ProfileRepository::new(pool);
    let mut profile = create_test_profile(user.id);
    repo.create(&profile).await.unwrap();

    collection::insert_front(&mut profile.experience, create_test_experience("Backend Dev"));
    collection::insert_front(&mut profile.experience, create_test_experience("Staff Engineer"));
    collection::insert_front(&mut profile.education, create_test_education("MIT"));
    profile.social = SocialLinks {
        twitter: Some("https://twitter.com/bob".to_string()),
        ..SocialLinks::default()
    };
    profile.updated_at = Utc::now();
    repo.update(&profile).await.unwrap();

    let found = repo.find_by_user(user.id).await.unwrap().unwrap();
    assert_that!(found.experience, len(eq(2)));
    assert_that!(found.experience[0].title, eq("Staff Engineer"));
    assert_that!(found.experience[1].title, eq("Backend Dev"));
    assert_that!(found.education, len(eq(1)));
    assert_that!(
        found.social.twitter.as_deref(),
        eq(Some("https://twitter.com/bob"))
    );
}

#[tokio::test]
async fn given_several_profiles_when_listing_then_all_are_returned() {
    let pool = create_test_pool().await;
    let users_repo = UserRepository::new(pool.clone());
    let repo = ProfileRepository::new(pool);

    for name in ["Alice", "Bob", "Carol"] {
        let user = create_test_user(name);
        users_repo.create(&user).await.unwrap();
        repo.create(&create_test_profile(user.id)).await.unwrap();
    }

    let profiles = repo.find_all().await.unwrap();

    assert_that!(profiles, len(eq(3)));
}

#[tokio::test]
async fn given_existing_profile_when_deleted_by_user_then_not_found() {
    let pool = create_test_pool().await;
    let user = create_test_user("Dave");
    UserRepository::new(pool.clone()).create(&user).await.unwrap();

    let repo = ProfileRepository::new(pool);
    repo.create(&create_test_profile(user.id)).await.unwrap();

    repo.delete_by_user(user.id).await.unwrap();

    let result = repo.find_by_user(user.id).await.unwrap();
    assert_that!(result, none());
}
