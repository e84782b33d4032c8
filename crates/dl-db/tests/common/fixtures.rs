use dl_core::{Education, Experience, Post, Profile, User};

use chrono::NaiveDate;
use uuid::Uuid;

pub fn create_test_user(name: &str) -> User {
    User::new(
        name.to_string(),
        format!("{}-{}@example.com", name.to_lowercase(), Uuid::new_v4()),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
    )
}

pub fn create_test_profile(user_id: Uuid) -> Profile {
    let mut profile = Profile::new(user_id);
    profile.status = Some("Developer".to_string());
    profile.skills = vec!["go".to_string(), "rust".to_string()];
    profile
}

pub fn create_test_experience(title: &str) -> Experience {
    Experience::new(
        title.to_string(),
        "Acme".to_string(),
        Some("Remote".to_string()),
        NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        None,
        true,
        None,
    )
}

pub fn create_test_education(school: &str) -> Education {
    Education::new(
        school.to_string(),
        "BSc".to_string(),
        "Computer Science".to_string(),
        NaiveDate::from_ymd_opt(2016, 9, 1).unwrap(),
        Some(NaiveDate::from_ymd_opt(2020, 6, 30).unwrap()),
        false,
        None,
    )
}

pub fn create_test_post(author: &User, text: &str) -> Post {
    Post::new(author, text.to_string())
}
