use inoxviet_domain::{
    AuditAction, AuditCategory, AuditSeverity, Contact, Record, RecordKind,
};

use crate::{AuditRecord, RequestContext};

use super::AuditService;

impl AuditService {
    /// Records a successful sign-in.
    pub async fn login_succeeded(&self, context: &RequestContext, email: &str) {
        self.record(
            AuditRecord::new(
                AuditAction::LoginSucceeded.as_str(),
                AuditCategory::Auth,
                AuditSeverity::Success,
                format!("Đăng nhập thành công: {email}"),
            )
            .with_context(context),
        )
        .await;
    }

    /// Records a rejected sign-in. Nobody is authenticated, so the attempted
    /// email goes into the actor description.
    pub async fn login_failed(&self, context: &RequestContext, email: &str, reason: &str) {
        self.record(
            AuditRecord::new(
                AuditAction::LoginFailed.as_str(),
                AuditCategory::Auth,
                AuditSeverity::Error,
                format!("Đăng nhập thất bại: {email} ({reason})"),
            )
            .with_context(context)
            .with_actor_details(email),
        )
        .await;
    }

    /// Records a sign-out.
    pub async fn logged_out(&self, context: &RequestContext) {
        let who = context
            .actor()
            .map_or_else(String::new, |actor| actor.display_name().to_owned());
        self.record(
            AuditRecord::new(
                AuditAction::LoggedOut.as_str(),
                AuditCategory::Auth,
                AuditSeverity::Information,
                format!("Đăng xuất: {who}"),
            )
            .with_context(context),
        )
        .await;
    }

    /// Records the creation of a collection record.
    pub async fn record_created<T: Record>(&self, context: &RequestContext, record: &T) {
        self.record(mutation(context, T::KIND, "create", AuditSeverity::Success, "Thêm", record.label()))
            .await;
    }

    /// Records an edit of a collection record.
    pub async fn record_updated<T: Record>(&self, context: &RequestContext, record: &T) {
        self.record(mutation(
            context,
            T::KIND,
            "update",
            AuditSeverity::Success,
            "Cập nhật",
            record.label(),
        ))
        .await;
    }

    /// Records the deletion of a collection record.
    pub async fn record_deleted<T: Record>(&self, context: &RequestContext, record: &T) {
        self.record(mutation(context, T::KIND, "delete", AuditSeverity::Warning, "Xóa", record.label()))
            .await;
    }

    /// Records a status, visibility or flag change.
    pub async fn status_changed<T: Record>(
        &self,
        context: &RequestContext,
        record: &T,
        new_state: &str,
    ) {
        let kind = T::KIND;
        self.record(
            AuditRecord::new(
                format!("{}.status", kind.action_prefix()),
                kind.audit_category(),
                AuditSeverity::Information,
                format!(
                    "Đổi trạng thái {} {}: {new_state}",
                    kind.noun(),
                    record.label()
                ),
            )
            .with_context(context),
        )
        .await;
    }

    /// Records a public contact form submission.
    pub async fn contact_submitted(&self, context: &RequestContext, contact: &Contact) {
        let subject = contact.subject.as_deref().unwrap_or("không tiêu đề");
        self.record(
            AuditRecord::new(
                AuditAction::ContactSubmitted.as_str(),
                AuditCategory::Content,
                AuditSeverity::Information,
                format!("Liên hệ mới từ {}: {subject}", contact.full_name.trim()),
            )
            .with_context(context)
            .with_actor_details(contact.sender_description()),
        )
        .await;
    }

    /// Records a site settings change.
    pub async fn settings_updated(&self, context: &RequestContext) {
        self.record(
            AuditRecord::new(
                AuditAction::SettingsUpdated.as_str(),
                AuditCategory::System,
                AuditSeverity::Success,
                "Cập nhật cài đặt website",
            )
            .with_context(context),
        )
        .await;
    }

    /// Records a chat prompt configuration change.
    pub async fn chat_prompt_updated(&self, context: &RequestContext) {
        self.record(
            AuditRecord::new(
                AuditAction::ChatPromptUpdated.as_str(),
                AuditCategory::System,
                AuditSeverity::Success,
                "Cập nhật cấu hình trợ lý chat",
            )
            .with_context(context),
        )
        .await;
    }
}

fn mutation(
    context: &RequestContext,
    kind: RecordKind,
    verb_code: &str,
    severity: AuditSeverity,
    verb: &str,
    label: &str,
) -> AuditRecord {
    AuditRecord::new(
        format!("{}.{verb_code}", kind.action_prefix()),
        kind.audit_category(),
        severity,
        format!("{verb} {}: {label}", kind.noun()),
    )
    .with_context(context)
}
