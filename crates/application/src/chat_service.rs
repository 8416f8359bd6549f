use std::sync::Arc;

use inoxviet_core::{AppError, AppResult};
use inoxviet_domain::{Agent, ProductView, SiteSettings};
use tracing::debug;

use crate::{
    CatalogService, ChatCompletionClient, ChatCompletionRequest, ChatTurn, DirectoryService,
    SettingsService,
};

#[cfg(test)]
mod tests;

/// Sales assistant that answers visitor questions through an external
/// completion endpoint.
#[derive(Clone)]
pub struct ChatService {
    catalog: CatalogService,
    directory: DirectoryService,
    settings: SettingsService,
    client: Option<Arc<dyn ChatCompletionClient>>,
    history_limit: usize,
}

impl ChatService {
    /// Creates a new service. Without a client every reply is rejected.
    #[must_use]
    pub fn new(
        catalog: CatalogService,
        directory: DirectoryService,
        settings: SettingsService,
        client: Option<Arc<dyn ChatCompletionClient>>,
        history_limit: usize,
    ) -> Self {
        Self {
            catalog,
            directory,
            settings,
            client,
            history_limit,
        }
    }

    /// Builds the system prompt from the saved configuration and live data.
    pub async fn compose_prompt(&self) -> AppResult<String> {
        let config = self.settings.chat_prompt_config().await?;
        let site = self.settings.site_settings().await?;

        let mut prompt = config.system_prompt.trim().to_owned();
        push_company(&mut prompt, &site);

        if config.include_products {
            let products = self.catalog.public_products(None).await?;
            push_products(&mut prompt, &products, config.max_products);
        }

        if config.include_agents {
            let agents = self.directory.active_agents(None).await?;
            push_agents(&mut prompt, &agents);
        }

        Ok(prompt)
    }

    /// Answers one visitor message, keeping only the newest history turns.
    pub async fn reply(&self, message: &str, history: Vec<ChatTurn>) -> AppResult<String> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::Validation("message must not be empty".to_owned()));
        }

        let Some(client) = &self.client else {
            return Err(AppError::Validation(
                "chat assistant is not configured".to_owned(),
            ));
        };

        let skip = history.len().saturating_sub(self.history_limit);
        let history: Vec<ChatTurn> = history
            .into_iter()
            .skip(skip)
            .filter(|turn| !turn.content.trim().is_empty())
            .collect();

        let system_prompt = self.compose_prompt().await?;
        debug!(
            history = history.len(),
            prompt_chars = system_prompt.chars().count(),
            "sending chat completion request"
        );

        client
            .complete(ChatCompletionRequest {
                system_prompt,
                message: message.to_owned(),
                history,
            })
            .await
    }
}

fn push_company(prompt: &mut String, site: &SiteSettings) {
    prompt.push_str(&format!(
        "\n\nThông tin công ty:\n- Tên: {}\n- Hotline: {}\n- Email: {}\n- Địa chỉ: {}",
        site.company_name, site.hotline, site.email, site.address
    ));
}

fn push_products(prompt: &mut String, products: &[ProductView], limit: usize) {
    if products.is_empty() || limit == 0 {
        return;
    }

    prompt.push_str("\n\nSản phẩm đang bán:");
    for view in products.iter().take(limit) {
        prompt.push('\n');
        prompt.push_str(&product_line(view));
    }
}

fn product_line(view: &ProductView) -> String {
    let product = &view.product;
    let name = match &view.category_name {
        Some(category) => format!("- {} ({category})", product.name),
        None => format!("- {}", product.name),
    };
    let price = match (product.price, product.unit.as_deref()) {
        (Some(price), Some(unit)) => format!("{} đ/{unit}", format_price(price)),
        (Some(price), None) => format!("{} đ", format_price(price)),
        (None, _) => "giá liên hệ".to_owned(),
    };
    format!("{name}: {price}")
}

fn push_agents(prompt: &mut String, agents: &[Agent]) {
    if agents.is_empty() {
        return;
    }

    prompt.push_str("\n\nHệ thống đại lý:");
    for agent in agents {
        prompt.push_str(&format!(
            "\n- {}, {}, {}",
            agent.name, agent.address, agent.phone
        ));
    }
}

/// Groups thousands with dots, e.g. `1.250.000`.
fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}
