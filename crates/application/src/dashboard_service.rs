use inoxviet_core::AppResult;
use inoxviet_domain::{ContactStatusCounts, DashboardSummary};

use crate::{
    AuditLogQuery, AuditService, CatalogService, ContactService, ContentService,
    DirectoryService, RequestContext,
};

/// Number of audit entries shown on the dashboard.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Read-only aggregation for the back-office landing page.
#[derive(Clone)]
pub struct DashboardService {
    catalog: CatalogService,
    content: ContentService,
    contacts: ContactService,
    directory: DirectoryService,
    audit_service: AuditService,
}

impl DashboardService {
    /// Creates a new service from the collection services it reads.
    #[must_use]
    pub fn new(
        catalog: CatalogService,
        content: ContentService,
        contacts: ContactService,
        directory: DirectoryService,
        audit_service: AuditService,
    ) -> Self {
        Self {
            catalog,
            content,
            contacts,
            directory,
            audit_service,
        }
    }

    /// Counts collections and fetches the newest activity.
    pub async fn summary(&self, context: &RequestContext) -> AppResult<DashboardSummary> {
        context.require_actor()?;

        let contacts = self.contacts.list(None).await?;
        let recent_activity = self
            .audit_service
            .list(AuditLogQuery {
                limit: Some(RECENT_ACTIVITY_LIMIT),
                ..AuditLogQuery::default()
            })
            .await?;

        Ok(DashboardSummary {
            product_count: self.catalog.products().list().await?.len(),
            category_count: self.catalog.categories().list().await?.len(),
            post_count: self.content.posts().list().await?.len(),
            agent_count: self.directory.agents().list().await?.len(),
            contacts: ContactStatusCounts::from_contacts(&contacts),
            recent_activity,
        })
    }
}
