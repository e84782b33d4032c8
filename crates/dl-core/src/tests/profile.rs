use crate::models::profile::{parse_skills, Profile, ProfileUpdate};
use crate::{Experience, SocialLinks};

use chrono::NaiveDate;
use uuid::Uuid;

#[test]
fn given_comma_separated_skills_when_parsed_then_trimmed_in_order() {
    assert_eq!(parse_skills("go,rust"), vec!["go", "rust"]);
    assert_eq!(
        parse_skills(" HTML , CSS,JavaScript "),
        vec!["HTML", "CSS", "JavaScript"]
    );
    assert_eq!(parse_skills("solo"), vec!["solo"]);
}

#[test]
fn given_empty_segments_when_parsed_then_dropped() {
    assert_eq!(parse_skills("go,,rust,"), vec!["go", "rust"]);
    assert!(parse_skills("").is_empty());
    assert!(parse_skills(" , ").is_empty());
}

#[test]
fn given_partial_update_when_applied_then_absent_fields_keep_prior_values() {
    let mut profile = Profile::new(Uuid::new_v4());
    profile.apply(ProfileUpdate {
        status: Some("Dev".to_string()),
        skills: Some(vec!["go".to_string(), "rust".to_string()]),
        ..ProfileUpdate::default()
    });

    profile.apply(ProfileUpdate {
        bio: Some("hi".to_string()),
        ..ProfileUpdate::default()
    });

    assert_eq!(profile.status.as_deref(), Some("Dev"));
    assert_eq!(profile.skills, vec!["go", "rust"]);
    assert_eq!(profile.bio.as_deref(), Some("hi"));
}

#[test]
fn given_supplied_social_links_when_applied_then_link_set_is_replaced() {
    let mut profile = Profile::new(Uuid::new_v4());
    profile.apply(ProfileUpdate {
        social: Some(SocialLinks {
            twitter: Some("https://twitter.com/dev".to_string()),
            ..SocialLinks::default()
        }),
        ..ProfileUpdate::default()
    });

    profile.apply(ProfileUpdate {
        social: Some(SocialLinks {
            youtube: Some("https://youtube.com/dev".to_string()),
            ..SocialLinks::default()
        }),
        ..ProfileUpdate::default()
    });

    assert_eq!(
        profile.social.youtube.as_deref(),
        Some("https://youtube.com/dev")
    );
    assert!(profile.social.twitter.is_none());
}

#[test]
fn given_no_social_links_when_applied_then_prior_links_are_kept() {
    let mut profile = Profile::new(Uuid::new_v4());
    profile.apply(ProfileUpdate {
        social: Some(SocialLinks {
            twitter: Some("https://twitter.com/dev".to_string()),
            ..SocialLinks::default()
        }),
        ..ProfileUpdate::default()
    });

    profile.apply(ProfileUpdate {
        bio: Some("hi".to_string()),
        ..ProfileUpdate::default()
    });

    assert_eq!(
        profile.social.twitter.as_deref(),
        Some("https://twitter.com/dev")
    );
}

#[test]
fn given_current_position_when_created_then_end_date_is_dropped() {
    let from = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    let entry = Experience::new(
        "Engineer".to_string(),
        "Acme".to_string(),
        None,
        from,
        Some(to),
        true,
        None,
    );

    assert!(entry.current);
    assert!(entry.to.is_none());
}
