use chrono::{Local, NaiveDate};
use mockall::mock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::day_start_commands::*;
use crate::application::commands::handlers::*;
use crate::application::commands::task_commands::*;
use crate::application::commands::team_commands::*;
use crate::application::commands::template_commands::*;
use crate::application::commands::user_commands::*;
use crate::application::services::NotificationService;
use teamdo_domain::day_start::{DayStart, DayStartRepository};
use teamdo_domain::notification::{
    NotificationMessage, NotificationSender, NotificationSenderFactory,
};
use teamdo_domain::shared::{DomainError, TaskId, TeamId, TemplateId, UserId};
use teamdo_domain::task::{CarryOverCommit, Task, TaskRepository};
use teamdo_domain::team::{InviteCode, Team, TeamRepository, WebhookUrl};
use teamdo_domain::template::{TemplateRepository, TodoTemplate};
use teamdo_domain::user::{User, UserRepository};

// Mock repositories and services for testing

struct MockUserRepository {
    users: tokio::sync::RwLock<HashMap<String, User>>,
}

impl MockUserRepository {
    fn new() -> Self {
        Self {
            users: tokio::sync::RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for MockUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        users.insert(user.id().as_str().to_string(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id.as_str()).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email() == email).cloned())
    }

    async fn find_by_team(&self, team_id: &TeamId) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        let mut members: Vec<User> = users
            .values()
            .filter(|u| u.team_id() == Some(team_id))
            .cloned()
            .collect();
        members.sort_by_key(|u| u.created_at());
        Ok(members)
    }
}

/// Reads pass through; every save fails.
struct ReadOnlyUserRepository {
    inner: Arc<MockUserRepository>,
}

#[async_trait::async_trait]
impl UserRepository for ReadOnlyUserRepository {
    async fn save(&self, _user: &User) -> Result<(), DomainError> {
        Err(DomainError::Repository("database is locked".to_string()))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.inner.find_by_email(email).await
    }

    async fn find_by_team(&self, team_id: &TeamId) -> Result<Vec<User>, DomainError> {
        self.inner.find_by_team(team_id).await
    }
}

struct MockTeamRepository {
    teams: tokio::sync::RwLock<HashMap<String, Team>>,
}

impl MockTeamRepository {
    fn new() -> Self {
        Self {
            teams: tokio::sync::RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl TeamRepository for MockTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), DomainError> {
        let mut teams = self.teams.write().await;
        let taken = teams
            .values()
            .any(|t| t.id() != team.id() && t.invite_code() == team.invite_code());
        if taken {
            return Err(DomainError::Conflict("invite code taken".to_string()));
        }
        teams.insert(team.id().as_str().to_string(), team.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.get(id.as_str()).cloned())
    }

    async fn find_by_invite_code(&self, code: &InviteCode) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.values().find(|t| t.invite_code() == code).cloned())
    }
}

/// Insertion-ordered so "oldest first" holds without timestamps.
struct MockTaskRepository {
    tasks: tokio::sync::RwLock<Vec<Task>>,
}

impl MockTaskRepository {
    fn new() -> Self {
        Self {
            tasks: tokio::sync::RwLock::new(Vec::new()),
        }
    }

    async fn count(&self) -> usize {
        self.tasks.read().await.len()
    }

    async fn filtered<F>(&self, keep: F) -> Vec<Task>
    where
        F: Fn(&Task) -> bool,
    {
        self.tasks
            .read()
            .await
            .iter()
            .filter(|t| keep(t))
            .cloned()
            .collect()
    }
}

fn by_priority(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(|a, b| b.priority().cmp(&a.priority()));
    tasks
}

#[async_trait::async_trait]
impl TaskRepository for MockTaskRepository {
    async fn save(&self, task: &Task) -> Result<(), DomainError> {
        let mut tasks = self.tasks.write().await;
        match tasks.iter_mut().find(|t| t.id() == task.id()) {
            Some(existing) => *existing = task.clone(),
            None => tasks.push(task.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, DomainError> {
        let tasks = self.tasks.read().await;
        Ok(tasks.iter().find(|t| t.id() == id).cloned())
    }

    async fn delete(&self, id: &TaskId) -> Result<(), DomainError> {
        self.tasks.write().await.retain(|t| t.id() != id);
        Ok(())
    }

    async fn delete_by_owner(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|t| !t.is_owned_by(user_id));
        Ok((before - tasks.len()) as u64)
    }

    async fn find_by_owner_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<Task>, DomainError> {
        Ok(by_priority(
            self.filtered(|t| t.is_owned_by(user_id) && t.date() == Some(date))
                .await,
        ))
    }

    async fn find_backlog(&self, user_id: &UserId) -> Result<Vec<Task>, DomainError> {
        Ok(by_priority(
            self.filtered(|t| t.is_owned_by(user_id) && t.is_backlog())
                .await,
        ))
    }

    async fn find_by_owner_in_range(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Task>, DomainError> {
        Ok(self
            .filtered(|t| {
                t.is_owned_by(user_id) && t.date().is_some_and(|d| d >= start && d <= end)
            })
            .await)
    }

    async fn find_by_team_in_range(
        &self,
        team_id: &TeamId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Task>, DomainError> {
        Ok(self
            .filtered(|t| t.team_id() == team_id && t.date().is_some_and(|d| d >= start && d <= end))
            .await)
    }

    async fn find_incomplete_on(&self, date: NaiveDate) -> Result<Vec<Task>, DomainError> {
        Ok(self
            .filtered(|t| t.is_carry_over_candidate(date))
            .await)
    }

    async fn exists_with_content(
        &self,
        user_id: &UserId,
        content: &str,
        date: NaiveDate,
    ) -> Result<bool, DomainError> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .iter()
            .any(|t| t.is_owned_by(user_id) && t.content() == content && t.date() == Some(date)))
    }

    async fn search_by_owner(
        &self,
        user_id: &UserId,
        query: &str,
        since: NaiveDate,
        limit: u32,
    ) -> Result<Vec<Task>, DomainError> {
        let needle = query.to_lowercase();
        let mut found = self
            .filtered(|t| {
                t.is_owned_by(user_id)
                    && t.date().is_some_and(|d| d >= since)
                    && t.content().to_lowercase().contains(&needle)
            })
            .await;
        found.sort_by(|a, b| b.date().cmp(&a.date()));
        found.truncate(limit as usize);
        Ok(found)
    }

    async fn commit_carry_over(
        &self,
        source: &Task,
        replacement: Option<&Task>,
    ) -> Result<CarryOverCommit, DomainError> {
        self.save(source).await?;
        match replacement {
            Some(task) => {
                self.save(task).await?;
                Ok(CarryOverCommit::Carried)
            }
            None => Ok(CarryOverCommit::ClosedAsDuplicate),
        }
    }
}

struct MockDayStartRepository {
    starts: tokio::sync::RwLock<Vec<DayStart>>,
}

impl MockDayStartRepository {
    fn new() -> Self {
        Self {
            starts: tokio::sync::RwLock::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl DayStartRepository for MockDayStartRepository {
    async fn find(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<DayStart>, DomainError> {
        let starts = self.starts.read().await;
        Ok(starts
            .iter()
            .find(|d| d.user_id() == user_id && d.date() == date)
            .cloned())
    }

    async fn find_for_users_on(
        &self,
        user_ids: &[UserId],
        date: NaiveDate,
    ) -> Result<Vec<DayStart>, DomainError> {
        let starts = self.starts.read().await;
        Ok(starts
            .iter()
            .filter(|d| d.date() == date && user_ids.contains(d.user_id()))
            .cloned()
            .collect())
    }

    async fn create(&self, day_start: &DayStart) -> Result<(), DomainError> {
        let mut starts = self.starts.write().await;
        if starts
            .iter()
            .any(|d| d.user_id() == day_start.user_id() && d.date() == day_start.date())
        {
            return Err(DomainError::Conflict("already started".to_string()));
        }
        starts.push(day_start.clone());
        Ok(())
    }
}

struct MockTemplateRepository {
    templates: tokio::sync::RwLock<HashMap<String, TodoTemplate>>,
}

impl MockTemplateRepository {
    fn new() -> Self {
        Self {
            templates: tokio::sync::RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl TemplateRepository for MockTemplateRepository {
    async fn save(&self, template: &TodoTemplate) -> Result<(), DomainError> {
        let mut templates = self.templates.write().await;
        templates.insert(template.id().as_str().to_string(), template.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TemplateId) -> Result<Option<TodoTemplate>, DomainError> {
        let templates = self.templates.read().await;
        Ok(templates.get(id.as_str()).cloned())
    }

    async fn find_by_owner(&self, user_id: &UserId) -> Result<Vec<TodoTemplate>, DomainError> {
        let templates = self.templates.read().await;
        let mut owned: Vec<TodoTemplate> = templates
            .values()
            .filter(|t| t.user_id() == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|t| std::cmp::Reverse(t.created_at()));
        Ok(owned)
    }

    async fn delete(&self, id: &TemplateId) -> Result<(), DomainError> {
        self.templates.write().await.remove(id.as_str());
        Ok(())
    }
}

mock! {
    Sender {}

    #[async_trait::async_trait]
    impl NotificationSender for Sender {
        async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError>;
    }
}

mock! {
    SenderFactory {}

    impl NotificationSenderFactory for SenderFactory {
        fn create(&self, webhook: &WebhookUrl) -> Result<Box<dyn NotificationSender>, DomainError>;
    }
}

// Fixtures

struct Fixture {
    users: Arc<MockUserRepository>,
    teams: Arc<MockTeamRepository>,
    tasks: Arc<MockTaskRepository>,
    day_starts: Arc<MockDayStartRepository>,
    templates: Arc<MockTemplateRepository>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            teams: Arc::new(MockTeamRepository::new()),
            tasks: Arc::new(MockTaskRepository::new()),
            day_starts: Arc::new(MockDayStartRepository::new()),
            templates: Arc::new(MockTemplateRepository::new()),
        }
    }

    async fn register(&self, email: &str, name: Option<&str>) -> User {
        let user = User::new(email.to_string(), name.map(str::to_string)).unwrap();
        self.users.save(&user).await.unwrap();
        user
    }

    /// A user who already belongs to a fresh team, optionally with a webhook.
    async fn member_of_new_team(&self, email: &str, webhook: Option<&str>) -> (User, Team) {
        let mut team = Team::new("Team A".to_string()).unwrap();
        if let Some(url) = webhook {
            team.set_webhook(url).unwrap();
        }
        self.teams.save(&team).await.unwrap();

        let mut user = User::new(email.to_string(), Some("Alice".to_string())).unwrap();
        user.join_team(team.id().clone()).unwrap();
        self.users.save(&user).await.unwrap();
        (user, team)
    }

    async fn add_task(&self, user: &User, content: &str, date: Option<NaiveDate>) -> Task {
        let task = Task::new(
            user.id().clone(),
            user.team_id().unwrap().clone(),
            content.to_string(),
            date,
        )
        .unwrap();
        self.tasks.save(&task).await.unwrap();
        task
    }

    fn create_task_handler(&self) -> CreateTaskCommandHandler {
        CreateTaskCommandHandler::new(self.users.clone(), self.tasks.clone())
    }

    fn update_task_handler(&self) -> UpdateTaskCommandHandler {
        UpdateTaskCommandHandler::new(self.users.clone(), self.tasks.clone())
    }

    fn start_day_handler(&self, factory: MockSenderFactory) -> StartDayCommandHandler {
        StartDayCommandHandler::new(
            self.users.clone(),
            self.teams.clone(),
            self.tasks.clone(),
            self.day_starts.clone(),
            Arc::new(NotificationService::new(Arc::new(factory))),
        )
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

const SLACK_URL: &str = "https://hooks.slack.com/services/T000/B000/XXXX";

// Tests

#[tokio::test]
async fn test_register_user_rejects_duplicate_email() {
    let fx = Fixture::new();
    let handler = RegisterUserCommandHandler::new(fx.users.clone());

    let user = handler
        .handle(RegisterUserCommand {
            email: "alice@example.com".to_string(),
            name: Some("Alice".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(user.email, "alice@example.com");
    assert!(user.team_id.is_none());

    let result = handler
        .handle(RegisterUserCommand {
            email: " alice@example.com ".to_string(),
            name: None,
        })
        .await;
    assert!(matches!(result, Err(DomainError::Conflict(_))));
}

#[tokio::test]
async fn test_create_task_defaults_to_today() {
    let fx = Fixture::new();
    let (user, _) = fx.member_of_new_team("alice@example.com", None).await;

    let task = fx
        .create_task_handler()
        .handle(CreateTaskCommand {
            caller_id: user.id().as_str().to_string(),
            content: "  Write report  ".to_string(),
            date: None,
            backlog: false,
        })
        .await
        .unwrap();

    assert_eq!(task.content, "Write report");
    assert_eq!(task.date, Some(today().format("%Y-%m-%d").to_string()));
    assert!(!task.completed);
    assert_eq!(task.carry_over_count, 0);
    assert_eq!(task.priority, 0);
}

#[tokio::test]
async fn test_create_task_in_backlog_and_on_explicit_date() {
    let fx = Fixture::new();
    let (user, _) = fx.member_of_new_team("alice@example.com", None).await;
    let handler = fx.create_task_handler();

    let backlog = handler
        .handle(CreateTaskCommand {
            caller_id: user.id().as_str().to_string(),
            content: "Someday".to_string(),
            date: Some("2024-06-15".to_string()),
            backlog: true,
        })
        .await
        .unwrap();
    assert!(backlog.date.is_none());

    let dated = handler
        .handle(CreateTaskCommand {
            caller_id: user.id().as_str().to_string(),
            content: "Plan sprint".to_string(),
            date: Some("2024-06-15".to_string()),
            backlog: false,
        })
        .await
        .unwrap();
    assert_eq!(dated.date.as_deref(), Some("2024-06-15"));
}

#[tokio::test]
async fn test_create_task_validation_and_membership() {
    let fx = Fixture::new();
    let (member, _) = fx.member_of_new_team("alice@example.com", None).await;
    let loner = fx.register("bob@example.com", None).await;
    let handler = fx.create_task_handler();

    let blank = handler
        .handle(CreateTaskCommand {
            caller_id: member.id().as_str().to_string(),
            content: "   ".to_string(),
            date: None,
            backlog: false,
        })
        .await;
    assert!(matches!(blank, Err(DomainError::Validation(_))));

    let no_team = handler
        .handle(CreateTaskCommand {
            caller_id: loner.id().as_str().to_string(),
            content: "Something".to_string(),
            date: None,
            backlog: false,
        })
        .await;
    assert!(matches!(no_team, Err(DomainError::NotInTeam(_))));

    let unknown = handler
        .handle(CreateTaskCommand {
            caller_id: "ghost".to_string(),
            content: "Something".to_string(),
            date: None,
            backlog: false,
        })
        .await;
    assert!(matches!(unknown, Err(DomainError::Unauthorized(_))));

    assert_eq!(fx.tasks.count().await, 0);
}

#[tokio::test]
async fn test_update_task_toggles_completion_and_moves() {
    let fx = Fixture::new();
    let (user, _) = fx.member_of_new_team("alice@example.com", None).await;
    let task = fx.add_task(&user, "Write report", Some(today())).await;
    let handler = fx.update_task_handler();

    let done = handler
        .handle(UpdateTaskCommand {
            caller_id: user.id().as_str().to_string(),
            task_id: task.id().as_str().to_string(),
            patch: TaskPatch {
                completed: Some(true),
                priority: Some(2),
                ..Default::default()
            },
        })
        .await
        .unwrap();
    assert!(done.completed);
    assert!(done.completed_at.is_some());
    assert_eq!(done.priority, 2);

    let reopened = handler
        .handle(UpdateTaskCommand {
            caller_id: user.id().as_str().to_string(),
            task_id: task.id().as_str().to_string(),
            patch: TaskPatch {
                completed: Some(false),
                date: Some(TaskDateChange::Backlog),
                ..Default::default()
            },
        })
        .await
        .unwrap();
    assert!(!reopened.completed);
    assert!(reopened.completed_at.is_none());
    assert!(reopened.date.is_none());

    let stored = fx.tasks.find_by_id(task.id()).await.unwrap().unwrap();
    assert!(stored.is_backlog());
}

#[tokio::test]
async fn test_update_task_rejects_other_owner_and_missing_task() {
    let fx = Fixture::new();
    let (owner, team) = fx.member_of_new_team("alice@example.com", None).await;
    let mut intruder = User::new("mallory@example.com".to_string(), None).unwrap();
    intruder.join_team(team.id().clone()).unwrap();
    fx.users.save(&intruder).await.unwrap();

    let task = fx.add_task(&owner, "Private", Some(today())).await;
    let handler = fx.update_task_handler();

    let forbidden = handler
        .handle(UpdateTaskCommand {
            caller_id: intruder.id().as_str().to_string(),
            task_id: task.id().as_str().to_string(),
            patch: TaskPatch {
                content: Some("Hijacked".to_string()),
                ..Default::default()
            },
        })
        .await;
    assert!(matches!(forbidden, Err(DomainError::Forbidden(_))));

    let missing = handler
        .handle(UpdateTaskCommand {
            caller_id: owner.id().as_str().to_string(),
            task_id: "nope".to_string(),
            patch: TaskPatch::default(),
        })
        .await;
    assert!(matches!(missing, Err(DomainError::TaskNotFound(_))));

    let delete = DeleteTaskCommandHandler::new(fx.users.clone(), fx.tasks.clone())
        .handle(DeleteTaskCommand {
            caller_id: intruder.id().as_str().to_string(),
            task_id: task.id().as_str().to_string(),
        })
        .await;
    assert!(matches!(delete, Err(DomainError::Forbidden(_))));
    assert_eq!(fx.tasks.count().await, 1);
}

#[tokio::test]
async fn test_create_team_generates_code_and_joins_creator() {
    let fx = Fixture::new();
    let user = fx.register("alice@example.com", Some("Alice")).await;
    let handler = CreateTeamCommandHandler::new(fx.users.clone(), fx.teams.clone());

    let team = handler
        .handle(CreateTeamCommand {
            caller_id: user.id().as_str().to_string(),
            name: "Platform".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(team.name, "Platform");
    assert_eq!(team.invite_code.len(), 8);
    assert!(team.invite_code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(team.members.len(), 1);

    let stored = fx.users.find_by_id(user.id()).await.unwrap().unwrap();
    assert_eq!(stored.team_id().map(|t| t.as_str()), Some(team.id.as_str()));

    let again = handler
        .handle(CreateTeamCommand {
            caller_id: user.id().as_str().to_string(),
            name: "Second".to_string(),
        })
        .await;
    assert!(matches!(again, Err(DomainError::Conflict(_))));
}

#[tokio::test]
async fn test_join_team_by_invite_code() {
    let fx = Fixture::new();
    let (_, team) = fx.member_of_new_team("alice@example.com", None).await;
    let bob = fx.register("bob@example.com", Some("Bob")).await;
    let handler = JoinTeamCommandHandler::new(fx.users.clone(), fx.teams.clone());

    let malformed = handler
        .handle(JoinTeamCommand {
            caller_id: bob.id().as_str().to_string(),
            invite_code: "no!".to_string(),
        })
        .await;
    assert!(matches!(malformed, Err(DomainError::Validation(_))));

    let unknown = handler
        .handle(JoinTeamCommand {
            caller_id: bob.id().as_str().to_string(),
            invite_code: "ZZZZZZZZ".to_string(),
        })
        .await;
    assert!(matches!(unknown, Err(DomainError::NotFound(_))));

    let joined = handler
        .handle(JoinTeamCommand {
            caller_id: bob.id().as_str().to_string(),
            invite_code: team.invite_code().as_str().to_string(),
        })
        .await
        .unwrap();
    assert_eq!(joined.id, team.id().as_str());
    assert_eq!(joined.members.len(), 2);

    let twice = handler
        .handle(JoinTeamCommand {
            caller_id: bob.id().as_str().to_string(),
            invite_code: team.invite_code().as_str().to_string(),
        })
        .await;
    assert!(matches!(twice, Err(DomainError::Conflict(_))));
}

#[tokio::test]
async fn test_leave_team_deletes_callers_tasks() {
    let fx = Fixture::new();
    let (alice, team) = fx.member_of_new_team("alice@example.com", None).await;
    let mut bob = User::new("bob@example.com".to_string(), None).unwrap();
    bob.join_team(team.id().clone()).unwrap();
    fx.users.save(&bob).await.unwrap();

    fx.add_task(&alice, "Mine today", Some(today())).await;
    fx.add_task(&alice, "Mine later", None).await;
    fx.add_task(&bob, "Bob's", Some(today())).await;

    let handler = LeaveTeamCommandHandler::new(fx.users.clone(), fx.tasks.clone());
    let result = handler
        .handle(LeaveTeamCommand {
            caller_id: alice.id().as_str().to_string(),
        })
        .await
        .unwrap();

    assert_eq!(result.deleted_tasks, 2);
    assert_eq!(result.team_id, team.id().as_str());
    assert_eq!(fx.tasks.count().await, 1);

    let stored = fx.users.find_by_id(alice.id()).await.unwrap().unwrap();
    assert!(stored.team_id().is_none());

    let again = handler
        .handle(LeaveTeamCommand {
            caller_id: alice.id().as_str().to_string(),
        })
        .await;
    assert!(matches!(again, Err(DomainError::NotInTeam(_))));
}

#[tokio::test]
async fn test_leave_team_keeps_tasks_when_membership_save_fails() {
    let fx = Fixture::new();
    let (alice, team) = fx.member_of_new_team("alice@example.com", None).await;
    fx.add_task(&alice, "Mine today", Some(today())).await;
    fx.add_task(&alice, "Mine later", None).await;

    let users = Arc::new(ReadOnlyUserRepository {
        inner: fx.users.clone(),
    });
    let handler = LeaveTeamCommandHandler::new(users, fx.tasks.clone());
    let result = handler
        .handle(LeaveTeamCommand {
            caller_id: alice.id().as_str().to_string(),
        })
        .await;

    assert!(matches!(result, Err(DomainError::Repository(_))));
    assert_eq!(fx.tasks.count().await, 2);
    let stored = fx.users.find_by_id(alice.id()).await.unwrap().unwrap();
    assert_eq!(stored.team_id(), Some(team.id()));
}

#[tokio::test]
async fn test_update_team_settings_webhook() {
    let fx = Fixture::new();
    let (user, team) = fx.member_of_new_team("alice@example.com", None).await;
    let handler = UpdateTeamSettingsCommandHandler::new(fx.users.clone(), fx.teams.clone());
    let caller_id = user.id().as_str().to_string();

    let rejected = handler
        .handle(UpdateTeamSettingsCommand {
            caller_id: caller_id.clone(),
            name: None,
            webhook_url: Some("https://example.com/hook".to_string()),
        })
        .await;
    assert!(matches!(rejected, Err(DomainError::Validation(_))));

    let updated = handler
        .handle(UpdateTeamSettingsCommand {
            caller_id: caller_id.clone(),
            name: Some("Renamed".to_string()),
            webhook_url: Some(SLACK_URL.to_string()),
        })
        .await
        .unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.webhook_url.as_deref(), Some(SLACK_URL));

    let cleared = handler
        .handle(UpdateTeamSettingsCommand {
            caller_id,
            name: None,
            webhook_url: Some(String::new()),
        })
        .await
        .unwrap();
    assert!(cleared.webhook_url.is_none());

    let stored = fx.teams.find_by_id(team.id()).await.unwrap().unwrap();
    assert_eq!(stored.name(), "Renamed");
    assert!(stored.webhook_url().is_none());
}

#[tokio::test]
async fn test_start_day_without_webhook() {
    let fx = Fixture::new();
    let (user, _) = fx.member_of_new_team("alice@example.com", None).await;
    fx.add_task(&user, "Write report", Some(today())).await;
    fx.add_task(&user, "Review PR", Some(today())).await;

    let mut factory = MockSenderFactory::new();
    factory.expect_create().never();
    let handler = fx.start_day_handler(factory);

    let result = handler
        .handle(StartDayCommand {
            caller_id: user.id().as_str().to_string(),
        })
        .await
        .unwrap();

    assert_eq!(result.todo_count, 2);
    assert!(!result.notified);
    assert!(fx.day_starts.find(user.id(), today()).await.unwrap().is_some());

    let again = handler
        .handle(StartDayCommand {
            caller_id: user.id().as_str().to_string(),
        })
        .await;
    assert!(matches!(again, Err(DomainError::Conflict(_))));
}

#[tokio::test]
async fn test_start_day_posts_to_webhook() {
    let fx = Fixture::new();
    let (user, _) = fx.member_of_new_team("alice@example.com", Some(SLACK_URL)).await;
    let mut urgent = fx.add_task(&user, "Fix outage", Some(today())).await;
    urgent.set_priority(5);
    fx.tasks.save(&urgent).await.unwrap();
    fx.add_task(&user, "Write report", Some(today())).await;

    let mut factory = MockSenderFactory::new();
    factory
        .expect_create()
        .withf(|webhook| webhook.as_str() == SLACK_URL)
        .times(1)
        .returning(|_| {
            let mut sender = MockSender::new();
            sender
                .expect_send()
                .withf(|message| {
                    message.title.contains("Alice")
                        && message.items == vec!["Fix outage".to_string(), "Write report".to_string()]
                        && message.footer.as_deref() == Some("2 task(s) in total")
                })
                .times(1)
                .returning(|_| Ok(()));
            Ok(Box::new(sender))
        });

    let result = fx
        .start_day_handler(factory)
        .handle(StartDayCommand {
            caller_id: user.id().as_str().to_string(),
        })
        .await
        .unwrap();

    assert!(result.notified);
    assert_eq!(result.todo_count, 2);
}

#[tokio::test]
async fn test_start_day_survives_delivery_failure() {
    let fx = Fixture::new();
    let (user, _) = fx.member_of_new_team("alice@example.com", Some(SLACK_URL)).await;

    let mut factory = MockSenderFactory::new();
    factory.expect_create().times(1).returning(|_| {
        let mut sender = MockSender::new();
        sender
            .expect_send()
            .withf(|message| {
                message.items.is_empty()
                    && message.empty_placeholder.as_deref() == Some("No tasks registered for today")
            })
            .returning(|_| Err(DomainError::Infrastructure("HTTP 500".to_string())));
        Ok(Box::new(sender))
    });

    let result = fx
        .start_day_handler(factory)
        .handle(StartDayCommand {
            caller_id: user.id().as_str().to_string(),
        })
        .await
        .unwrap();

    assert!(!result.notified);
    assert_eq!(result.todo_count, 0);
    assert!(fx.day_starts.find(user.id(), today()).await.unwrap().is_some());
}

#[tokio::test]
async fn test_start_day_requires_team() {
    let fx = Fixture::new();
    let loner = fx.register("bob@example.com", None).await;
    let mut factory = MockSenderFactory::new();
    factory.expect_create().never();

    let result = fx
        .start_day_handler(factory)
        .handle(StartDayCommand {
            caller_id: loner.id().as_str().to_string(),
        })
        .await;

    assert!(matches!(result, Err(DomainError::NotInTeam(_))));
}

#[tokio::test]
async fn test_template_lifecycle_and_ownership() {
    let fx = Fixture::new();
    let alice = fx.register("alice@example.com", None).await;
    let bob = fx.register("bob@example.com", None).await;
    let create = CreateTemplateCommandHandler::new(fx.users.clone(), fx.templates.clone());
    let delete = DeleteTemplateCommandHandler::new(fx.users.clone(), fx.templates.clone());

    let blank = create
        .handle(CreateTemplateCommand {
            caller_id: alice.id().as_str().to_string(),
            content: "  ".to_string(),
        })
        .await;
    assert!(matches!(blank, Err(DomainError::Validation(_))));

    let template = create
        .handle(CreateTemplateCommand {
            caller_id: alice.id().as_str().to_string(),
            content: " Daily standup ".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(template.content, "Daily standup");

    let not_owner = delete
        .handle(DeleteTemplateCommand {
            caller_id: bob.id().as_str().to_string(),
            template_id: template.id.clone(),
        })
        .await;
    assert!(matches!(not_owner, Err(DomainError::NotFound(_))));

    delete
        .handle(DeleteTemplateCommand {
            caller_id: alice.id().as_str().to_string(),
            template_id: template.id.clone(),
        })
        .await
        .unwrap();
    assert!(fx
        .templates
        .find_by_owner(alice.id())
        .await
        .unwrap()
        .is_empty());
}
