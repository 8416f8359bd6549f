use std::sync::Arc;

use inoxviet_core::{AppError, AppResult, RecordId};
use inoxviet_domain::{AdminUser, Agent, EmailAddress, UserRole};

use crate::content_service::active_label;
use crate::{AuditService, RecordRepository, RecordService, RequestContext};


/// Application service for distribution agents and back-office accounts.
#[derive(Clone)]
pub struct DirectoryService {
    agents: RecordService<Agent>,
    users: RecordService<AdminUser>,
}

impl DirectoryService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        agent_repository: Arc<dyn RecordRepository<Agent>>,
        user_repository: Arc<dyn RecordRepository<AdminUser>>,
        audit_service: AuditService,
    ) -> Self {
        Self {
            agents: RecordService::new(agent_repository, audit_service.clone()),
            users: RecordService::new(user_repository, audit_service),
        }
    }

    /// Agent collection.
    #[must_use]
    pub fn agents(&self) -> &RecordService<Agent> {
        &self.agents
    }

    /// Account collection.
    #[must_use]
    pub fn users(&self) -> &RecordService<AdminUser> {
        &self.users
    }

    /// Lists agents shown on the public site, optionally for one region.
    pub async fn active_agents(&self, region: Option<&str>) -> AppResult<Vec<Agent>> {
        let mut agents: Vec<Agent> = self
            .agents
            .list()
            .await?
            .into_iter()
            .filter(|agent| agent.active)
            .filter(|agent| {
                region.is_none_or(|region| {
                    agent
                        .region
                        .as_deref()
                        .is_some_and(|value| value.eq_ignore_ascii_case(region))
                })
            })
            .collect();
        agents.sort_by(|left, right| left.name.cmp(&right.name));
        Ok(agents)
    }

    /// Lists or hides an agent.
    pub async fn set_agent_active(
        &self,
        context: &RequestContext,
        agent_id: RecordId,
        active: bool,
    ) -> AppResult<Agent> {
        self.agents
            .change_state(context, agent_id, |agent| {
                agent.active = active;
                active_label(active)
            })
            .await
    }

    /// Creates an account with an email not used by any other account.
    pub async fn create_user(
        &self,
        context: &RequestContext,
        mut user: AdminUser,
    ) -> AppResult<AdminUser> {
        user.email = self.unique_email(&user).await?;
        self.users.create(context, user).await
    }

    /// Replaces an account, keeping emails unique.
    pub async fn update_user(
        &self,
        context: &RequestContext,
        mut user: AdminUser,
    ) -> AppResult<AdminUser> {
        user.email = self.unique_email(&user).await?;
        self.users.update(context, user).await
    }

    /// Enables or disables an account.
    pub async fn set_user_active(
        &self,
        context: &RequestContext,
        user_id: RecordId,
        active: bool,
    ) -> AppResult<AdminUser> {
        self.ensure_not_self(context, user_id, active).await?;
        self.users
            .change_state(context, user_id, |user| {
                user.active = active;
                active_label(active)
            })
            .await
    }

    /// Changes an account's role.
    pub async fn set_user_role(
        &self,
        context: &RequestContext,
        user_id: RecordId,
        role: UserRole,
    ) -> AppResult<AdminUser> {
        self.users
            .change_state(context, user_id, |user| {
                user.role = role;
                format!("vai trò {}", role.as_str())
            })
            .await
    }

    async fn unique_email(&self, user: &AdminUser) -> AppResult<String> {
        let email = EmailAddress::new(user.email.as_str())?;
        let taken = self
            .users
            .list()
            .await?
            .into_iter()
            .any(|existing| existing.id != user.id && existing.email == email.as_str());
        if taken {
            return Err(AppError::Conflict(format!(
                "email '{}' is already used by another account",
                email.as_str()
            )));
        }

        Ok(email.into())
    }

    async fn ensure_not_self(
        &self,
        context: &RequestContext,
        user_id: RecordId,
        active: bool,
    ) -> AppResult<()> {
        if active {
            return Ok(());
        }

        let actor = context.require_actor()?;
        let target = self.users.get(user_id).await?;
        if actor.email() == Some(target.email.as_str()) {
            return Err(AppError::Forbidden(
                "administrators cannot disable their own account".to_owned(),
            ));
        }

        Ok(())
    }
}
