mod common;

use common::{create_test_pool, create_test_post, create_test_user};

use dl_core::{collection, Comment};
use dl_db::{PostRepository, UserRepository};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_post_when_created_then_can_be_found_by_id() {
    let pool = create_test_pool().await;
    let user = create_test_user("Alice");
    UserRepository::new(pool.clone()).create(&user).await.unwrap();

    let repo = PostRepository::new(pool);
    let post = create_test_post(&user, "hello");

    repo.create(&post).await.unwrap();

    let found = repo.find_by_id(post.id).await.unwrap().unwrap();
    assert_that!(found.id, eq(post.id));
    assert_that!(found.text, eq("hello"));
    assert_that!(found.author_name, eq(user.name.as_str()));
    assert_that!(found.author_avatar, eq(user.avatar.as_str()));
    assert_that!(found.likes, is_empty());
    assert_that!(found.comments, is_empty());
}

#[tokio::test]
async fn given_empty_database_when_finding_nonexistent_id_then_returns_none() {
    let pool = create_test_pool().await;
    let repo = PostRepository::new(pool);

    let result = repo.find_by_id(Uuid::new_v4()).await.unwrap();

    assert_that!(result, none());
}

#[tokio::test]
async fn given_sequential_posts_when_listing_then_newest_is_first() {
    let pool = create_test_pool().await;
    let user = create_test_user("Bob");
    UserRepository::new(pool.clone()).create(&user).await.unwrap();

    let repo = PostRepository::new(pool);
    for text in ["first", "second", "third"] {
        repo.create(&create_test_post(&user, text)).await.unwrap();
    }

    let posts = repo.find_all().await.unwrap();

    let texts: Vec<&str> = posts.iter().map(|p| p.text.as_str()).collect();
    assert_that!(texts, eq(&vec!["third", "second", "first"]));
}

#[tokio::test]
async fn given_likes_and_comments_when_written_back_then_round_trip_whole() {
    let pool = create_test_pool().await;
    let author = create_test_user("Carol");
    let commenter = create_test_user("Dan");
    let users = UserRepository::new(pool.clone());
    users.create(&author).await.unwrap();
    users.create(&commenter).await.unwrap();

    let repo = PostRepository::new(pool);
    let mut post = create_test_post(&author, "hello");
    repo.create(&post).await.unwrap();

    collection::add_member(&mut post.likes, commenter.id).unwrap();
    collection::insert_front(&mut post.comments, Comment::new(&commenter, "nice".to_string()));
    repo.update(&post).await.unwrap();

    let found = repo.find_by_id(post.id).await.unwrap().unwrap();
    assert_that!(found.likes, len(eq(1)));
    assert_that!(found.likes[0], eq(commenter.id));
    assert_that!(found.comments, len(eq(1)));
    assert_that!(found.comments[0].text, eq("nice"));
    assert_that!(found.comments[0].user_id, eq(commenter.id));
}

#[tokio::test]
async fn given_existing_post_when_deleted_then_not_found_by_id() {
    let pool = create_test_pool().await;
    let user = create_test_user("Erin");
    UserRepository::new(pool.clone()).create(&user).await.unwrap();

    let repo = PostRepository::new(pool);
    let post = create_test_post(&user, "bye");
    repo.create(&post).await.unwrap();

    repo.delete(post.id).await.unwrap();

    let result = repo.find_by_id(post.id).await.unwrap();
    assert_that!(result, none());
}

#[tokio::test]
async fn given_posts_from_two_users_when_deleting_by_user_then_only_theirs_go() {
    let pool = create_test_pool().await;
    let alice = create_test_user("Alice");
    let bob = create_test_user("Bob");
    let users = UserRepository::new(pool.clone());
    users.create(&alice).await.unwrap();
    users.create(&bob).await.unwrap();

    let repo = PostRepository::new(pool);
    repo.create(&create_test_post(&alice, "a1")).await.unwrap();
    repo.create(&create_test_post(&alice, "a2")).await.unwrap();
    repo.create(&create_test_post(&bob, "b1")).await.unwrap();

    let removed = repo.delete_by_user(alice.id).await.unwrap();

    assert_that!(removed, eq(2));
    let remaining = repo.find_all().await.unwrap();
    assert_that!(remaining, len(eq(1)));
    assert_that!(remaining[0].text, eq("b1"));
}
