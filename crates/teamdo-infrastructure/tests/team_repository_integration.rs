use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use teamdo_domain::day_start::{DayStart, DayStartRepository};
use teamdo_domain::shared::DomainError;
use teamdo_domain::team::{InviteCode, Team, TeamRepository};
use teamdo_domain::template::{TemplateRepository, TodoTemplate};
use teamdo_domain::user::UserRepository;
use teamdo_infrastructure::persistence::repositories::{
    SqliteDayStartRepository, SqliteTeamRepository, SqliteTemplateRepository,
    SqliteUserRepository,
};


#[tokio::test]
async fn team_repo_find_by_invite_code_and_webhook() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteTeamRepository::new(Arc::new(pool.clone()));

    let mut team = Team::new("Platform".to_string()).unwrap();
    team.set_webhook("https://hooks.slack.com/services/T0/B0/xyz")
        .unwrap();
    repo.save(&team).await.expect("save team");

    let found = repo
        .find_by_invite_code(team.invite_code())
        .await
        .unwrap()
        .expect("found by code");
    assert_eq!(found.id(), team.id());
    assert_eq!(
        found.webhook_url().map(|w| w.as_str()),
        Some("https://hooks.slack.com/services/T0/B0/xyz")
    );

    let unknown = InviteCode::parse("NOPE1234").unwrap();
    assert!(repo.find_by_invite_code(&unknown).await.unwrap().is_none());

    team.set_webhook("").unwrap();
    repo.save(&team).await.unwrap();
    let cleared = repo.find_by_id(team.id()).await.unwrap().unwrap();
    assert!(cleared.webhook_url().is_none());
}

#[tokio::test]
async fn team_repo_rejects_duplicate_invite_code() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteTeamRepository::new(Arc::new(pool.clone()));

    let first = Team::new("One".to_string()).unwrap();
    repo.save(&first).await.unwrap();

    let clash = Team::restore(
        Team::new("Two".to_string()).unwrap().id().clone(),
        "Two".to_string(),
        first.invite_code().clone(),
        None,
        Utc::now(),
    );
    let result = repo.save(&clash).await;

    assert!(matches!(result, Err(DomainError::Conflict(_))));
}

#[tokio::test]
async fn user_repo_members_and_leave() {
    let pool = test_helpers::setup_in_memory_db().await;
    let (team, alice) = test_helpers::seed_member(&pool, "alice@example.com", Some("Alice")).await;
    let bob = test_helpers::add_member(&pool, &team, "bob@example.com", None).await;
    let repo = SqliteUserRepository::new(Arc::new(pool.clone()));

    let members = repo.find_by_team(team.id()).await.unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].id(), alice.id());

    let by_email = repo.find_by_email("bob@example.com").await.unwrap().unwrap();
    assert_eq!(by_email.id(), bob.id());
    assert!(by_email.name().is_none());

    let mut leaving = by_email;
    leaving.leave_team().unwrap();
    repo.save(&leaving).await.unwrap();

    assert_eq!(repo.find_by_team(team.id()).await.unwrap().len(), 1);
    assert!(repo
        .find_by_id(bob.id())
        .await
        .unwrap()
        .unwrap()
        .team_id()
        .is_none());
}

#[tokio::test]
async fn day_start_repo_is_unique_per_user_and_day() {
    let pool = test_helpers::setup_in_memory_db().await;
    let (team, alice) = test_helpers::seed_member(&pool, "alice@example.com", None).await;
    let bob = test_helpers::add_member(&pool, &team, "bob@example.com", None).await;
    let repo = SqliteDayStartRepository::new(Arc::new(pool.clone()));
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    assert!(repo.find(alice.id(), today).await.unwrap().is_none());

    let start = DayStart::new(alice.id().clone(), today, Utc::now());
    repo.create(&start).await.expect("first start");

    let again = repo
        .create(&DayStart::new(alice.id().clone(), today, Utc::now()))
        .await;
    assert!(matches!(again, Err(DomainError::Conflict(_))));

    let found = repo.find(alice.id(), today).await.unwrap().unwrap();
    assert_eq!(found.date(), today);

    let starts = repo
        .find_for_users_on(&[alice.id().clone(), bob.id().clone()], today)
        .await
        .unwrap();
    assert_eq!(starts.len(), 1);
    assert!(repo.find_for_users_on(&[], today).await.unwrap().is_empty());
}

#[tokio::test]
async fn template_repo_lists_newest_first() {
    let pool = test_helpers::setup_in_memory_db().await;
    let (_team, user) = test_helpers::seed_member(&pool, "alice@example.com", None).await;
    let repo = SqliteTemplateRepository::new(Arc::new(pool.clone()));

    let first = TodoTemplate::new(user.id().clone(), "Standup").unwrap();
    repo.save(&first).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    let second = TodoTemplate::new(user.id().clone(), "Code review").unwrap();
    repo.save(&second).await.unwrap();

    let listed = repo.find_by_owner(user.id()).await.unwrap();
    assert_eq!(listed[0].content(), "Code review");
    assert_eq!(listed[1].content(), "Standup");

    repo.delete(first.id()).await.unwrap();
    assert!(repo.find_by_id(first.id()).await.unwrap().is_none());
    assert_eq!(repo.find_by_owner(user.id()).await.unwrap().len(), 1);
}
