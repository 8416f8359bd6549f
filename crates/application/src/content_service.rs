use std::sync::Arc;

use chrono::Utc;
use inoxviet_core::{AppError, AppResult, RecordId};
use inoxviet_domain::{
    ArticleView, NewsArticle, PublishStatus, Slider, Tag, project_articles,
};

use crate::{AuditService, RecordRepository, RecordService, RequestContext};


/// Application service for news articles, tags and home page sliders.
#[derive(Clone)]
pub struct ContentService {
    posts: RecordService<NewsArticle>,
    tags: RecordService<Tag>,
    sliders: RecordService<Slider>,
}

impl ContentService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        post_repository: Arc<dyn RecordRepository<NewsArticle>>,
        tag_repository: Arc<dyn RecordRepository<Tag>>,
        slider_repository: Arc<dyn RecordRepository<Slider>>,
        audit_service: AuditService,
    ) -> Self {
        Self {
            posts: RecordService::new(post_repository, audit_service.clone()),
            tags: RecordService::new(tag_repository, audit_service.clone()),
            sliders: RecordService::new(slider_repository, audit_service),
        }
    }

    /// Article collection.
    #[must_use]
    pub fn posts(&self) -> &RecordService<NewsArticle> {
        &self.posts
    }

    /// Tag collection.
    #[must_use]
    pub fn tags(&self) -> &RecordService<Tag> {
        &self.tags
    }

    /// Slider collection.
    #[must_use]
    pub fn sliders(&self) -> &RecordService<Slider> {
        &self.sliders
    }

    /// Creates an article whose tags all exist.
    pub async fn create_post(
        &self,
        context: &RequestContext,
        mut post: NewsArticle,
    ) -> AppResult<NewsArticle> {
        self.ensure_tags_exist(&post.tag_ids).await?;
        stamp_publication(&mut post);
        self.posts.create(context, post).await
    }

    /// Replaces an article whose tags all exist.
    pub async fn update_post(
        &self,
        context: &RequestContext,
        mut post: NewsArticle,
    ) -> AppResult<NewsArticle> {
        self.ensure_tags_exist(&post.tag_ids).await?;
        stamp_publication(&mut post);
        self.posts.update(context, post).await
    }

    /// Changes article visibility. The first publish sets `published_at`.
    pub async fn set_post_status(
        &self,
        context: &RequestContext,
        post_id: RecordId,
        status: PublishStatus,
    ) -> AppResult<NewsArticle> {
        self.posts
            .change_state(context, post_id, |post| {
                post.status = status;
                stamp_publication(post);
                status.label().to_owned()
            })
            .await
    }

    /// Enables or disables a home page banner.
    pub async fn set_slider_active(
        &self,
        context: &RequestContext,
        slider_id: RecordId,
        active: bool,
    ) -> AppResult<Slider> {
        self.sliders
            .change_state(context, slider_id, |slider| {
                slider.active = active;
                active_label(active)
            })
            .await
    }

    /// Returns published articles, newest first, joined with tag names.
    pub async fn public_news(&self, tag_slug: Option<&str>) -> AppResult<Vec<ArticleView>> {
        let tags = self.tags.list().await?;
        let tag_filter = match tag_slug {
            Some(slug) => Some(
                tags.iter()
                    .find(|tag| tag.slug == slug)
                    .map(|tag| tag.id)
                    .ok_or_else(|| AppError::NotFound(format!("tag '{slug}' does not exist")))?,
            ),
            None => None,
        };

        let mut posts: Vec<NewsArticle> = self
            .posts
            .list()
            .await?
            .into_iter()
            .filter(|post| post.status == PublishStatus::Published)
            .filter(|post| tag_filter.is_none_or(|tag_id| post.tag_ids.contains(&tag_id)))
            .collect();
        posts.sort_by(|left, right| right.published_at.cmp(&left.published_at));

        Ok(project_articles(posts, &tags))
    }

    /// Returns one published article by slug.
    pub async fn public_article(&self, slug: &str) -> AppResult<ArticleView> {
        self.public_news(None)
            .await?
            .into_iter()
            .find(|view| view.article.slug == slug)
            .ok_or_else(|| AppError::NotFound(format!("post '{slug}' does not exist")))
    }

    /// Returns active sliders in display order.
    pub async fn active_sliders(&self) -> AppResult<Vec<Slider>> {
        let mut sliders: Vec<Slider> = self
            .sliders
            .list()
            .await?
            .into_iter()
            .filter(|slider| slider.active)
            .collect();
        sliders.sort_by_key(|slider| slider.position);
        Ok(sliders)
    }

    async fn ensure_tags_exist(&self, tag_ids: &[RecordId]) -> AppResult<()> {
        if tag_ids.is_empty() {
            return Ok(());
        }

        let tags = self.tags.list().await?;
        if let Some(missing) = tag_ids
            .iter()
            .find(|tag_id| !tags.iter().any(|tag| tag.id == **tag_id))
        {
            return Err(AppError::Validation(format!("tag '{missing}' does not exist")));
        }

        Ok(())
    }
}

fn stamp_publication(post: &mut NewsArticle) {
    if post.status == PublishStatus::Published && post.published_at.is_none() {
        post.published_at = Some(Utc::now());
    }
}

pub(crate) fn active_label(active: bool) -> String {
    if active {
        "đang hoạt động".to_owned()
    } else {
        "ngừng hoạt động".to_owned()
    }
}
