use inoxviet_core::AppResult;
use serde::{Deserialize, Serialize};

use crate::record::{optional_text, require_text};
use crate::{EmailAddress, validate_phone};

/// Company details shown in the site header and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Legal company name.
    pub company_name: String,
    /// Sales hotline.
    pub hotline: String,
    /// Sales email.
    pub email: String,
    /// Head office address.
    pub address: String,
    /// Facebook page.
    #[serde(default)]
    pub facebook_url: Option<String>,
    /// Zalo official account.
    #[serde(default)]
    pub zalo_url: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            company_name: "Công ty Inox Việt".to_owned(),
            hotline: "0900 000 000".to_owned(),
            email: "lienhe@inoxviet.vn".to_owned(),
            address: "Việt Nam".to_owned(),
            facebook_url: None,
            zalo_url: None,
        }
    }
}

impl SiteSettings {
    /// Checks required fields.
    pub fn validate(&self) -> AppResult<()> {
        require_text("company name", &self.company_name)?;
        require_text("address", &self.address)?;
        validate_phone(&self.hotline)?;
        EmailAddress::new(self.email.as_str())?;
        optional_text("facebook url", self.facebook_url.as_deref())?;
        optional_text("zalo url", self.zalo_url.as_deref())
    }
}

/// Configuration of the chat assistant's system prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPromptConfig {
    /// Instructions placed at the top of every prompt.
    pub system_prompt: String,
    /// Append the published product list.
    #[serde(default = "default_true")]
    pub include_products: bool,
    /// Append the active agent list.
    #[serde(default = "default_true")]
    pub include_agents: bool,
    /// Upper bound of products listed in the prompt.
    #[serde(default = "default_max_products")]
    pub max_products: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_products() -> usize {
    50
}

impl Default for ChatPromptConfig {
    fn default() -> Self {
        Self {
            system_prompt: "Bạn là trợ lý tư vấn bán hàng của công ty phân phối inox và thép. \
                Trả lời ngắn gọn, lịch sự bằng tiếng Việt và chỉ dựa trên thông tin được cung cấp."
                .to_owned(),
            include_products: true,
            include_agents: true,
            max_products: default_max_products(),
        }
    }
}

impl ChatPromptConfig {
    /// Checks required fields.
    pub fn validate(&self) -> AppResult<()> {
        require_text("system prompt", &self.system_prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChatPromptConfig, SiteSettings};

    #[test]
    fn defaults_are_valid() {
        assert!(SiteSettings::default().validate().is_ok());
        assert!(ChatPromptConfig::default().validate().is_ok());
    }

    #[test]
    fn blank_system_prompt_is_rejected() {
        let config = ChatPromptConfig {
            system_prompt: "\n".to_owned(),
            ..ChatPromptConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
