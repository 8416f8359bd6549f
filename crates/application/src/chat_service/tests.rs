use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use inoxviet_core::{AppError, AppResult, RecordId};
use inoxviet_domain::{Agent, Category, ChatPromptConfig, Product, ProductView, PublishStatus};

use crate::test_support::{
    FakeAuditLogRepository, FakeRecordRepository, FakeSettingsRepository, admin_context,
};
use crate::{
    AuditService, CatalogService, ChatCompletionClient, ChatCompletionRequest, ChatRole,
    ChatTurn, DirectoryService, SettingsService,
};

use super::{ChatService, format_price, product_line};

#[derive(Default)]
struct RecordingClient {
    requests: Mutex<Vec<ChatCompletionRequest>>,
}

#[async_trait]
impl ChatCompletionClient for RecordingClient {
    async fn complete(&self, request: ChatCompletionRequest) -> AppResult<String> {
        self.requests.lock().await.push(request);
        Ok("Dạ, sản phẩm còn hàng ạ.".to_owned())
    }
}

struct Fixture {
    service: ChatService,
    settings: SettingsService,
    client: Arc<RecordingClient>,
}

fn product(name: &str, category_id: RecordId, price: Option<u64>) -> Product {
    Product {
        id: RecordId::new(),
        name: name.to_owned(),
        slug: String::new(),
        category_id,
        sku: None,
        price,
        unit: Some("tấm".to_owned()),
        summary: None,
        description: None,
        image_urls: Vec::new(),
        featured: false,
        status: PublishStatus::Published,
    }
}

async fn fixture(history_limit: usize) -> Fixture {
    let audit_service = AuditService::new(Arc::new(FakeAuditLogRepository::default()));
    let catalog = CatalogService::new(
        Arc::new(FakeRecordRepository::default()),
        Arc::new(FakeRecordRepository::default()),
        audit_service.clone(),
    );
    let directory = DirectoryService::new(
        Arc::new(FakeRecordRepository::default()),
        Arc::new(FakeRecordRepository::default()),
        audit_service.clone(),
    );
    let settings = SettingsService::new(Arc::new(FakeSettingsRepository::default()), audit_service);

    let context = admin_context();
    let category = Category {
        id: RecordId::new(),
        name: "Tấm inox".to_owned(),
        slug: String::new(),
        description: None,
        status: PublishStatus::Published,
    };
    assert!(catalog.categories().create(&context, category.clone()).await.is_ok());

    let mut hidden = product("Tấm inox 201", category.id, Some(450_000));
    hidden.status = PublishStatus::Hidden;
    for value in [
        product("Tấm inox 304", category.id, Some(1_250_000)),
        product("Tấm inox 316", category.id, None),
        hidden,
    ] {
        assert!(catalog.create_product(&context, value).await.is_ok());
    }

    let agent = Agent {
        id: RecordId::new(),
        name: "Đại lý Bình Dương".to_owned(),
        region: Some("Miền Nam".to_owned()),
        address: "12 Đại lộ Bình Dương".to_owned(),
        phone: "0274 123 4567".to_owned(),
        email: None,
        active: true,
    };
    assert!(directory.agents().create(&context, agent).await.is_ok());

    let client = Arc::new(RecordingClient::default());
    let service = ChatService::new(
        catalog,
        directory,
        settings.clone(),
        Some(client.clone()),
        history_limit,
    );

    Fixture {
        service,
        settings,
        client,
    }
}

fn turn(role: ChatRole, content: &str) -> ChatTurn {
    ChatTurn {
        role,
        content: content.to_owned(),
    }
}

#[test]
fn prices_are_grouped_by_thousands() {
    assert_eq!(format_price(0), "0");
    assert_eq!(format_price(999), "999");
    assert_eq!(format_price(1_000), "1.000");
    assert_eq!(format_price(1_250_000), "1.250.000");
}

#[test]
fn product_lines_omit_missing_category_and_unit() {
    let mut sheet = product("Cuộn inox 430", RecordId::new(), Some(38_500));
    sheet.unit = None;
    let orphan = ProductView {
        product: sheet,
        category_name: None,
    };
    assert_eq!(product_line(&orphan), "- Cuộn inox 430: 38.500 đ");

    let listed = ProductView {
        product: product("Ống inox 304", RecordId::new(), Some(120_000)),
        category_name: Some("Ống inox".to_owned()),
    };
    assert_eq!(product_line(&listed), "- Ống inox 304 (Ống inox): 120.000 đ/tấm");
}

#[tokio::test]
async fn prompt_lists_published_products_and_active_agents() {
    let fixture = fixture(10).await;

    let prompt = fixture.service.compose_prompt().await.unwrap_or_default();

    assert!(prompt.starts_with(ChatPromptConfig::default().system_prompt.as_str()));
    assert!(prompt.contains("- Tấm inox 304 (Tấm inox): 1.250.000 đ/tấm"));
    assert!(prompt.contains("- Tấm inox 316 (Tấm inox): giá liên hệ"));
    assert!(!prompt.contains("Tấm inox 201"));
    assert!(prompt.contains("- Đại lý Bình Dương, 12 Đại lộ Bình Dương, 0274 123 4567"));
}

#[tokio::test]
async fn prompt_sections_follow_configuration() {
    let fixture = fixture(10).await;
    let config = ChatPromptConfig {
        system_prompt: "Chỉ trả lời về giá.".to_owned(),
        include_products: true,
        include_agents: false,
        max_products: 1,
    };
    let saved = fixture
        .settings
        .save_chat_prompt_config(&admin_context(), config)
        .await;
    assert!(saved.is_ok());

    let prompt = fixture.service.compose_prompt().await.unwrap_or_default();

    assert!(prompt.starts_with("Chỉ trả lời về giá."));
    assert_eq!(prompt.matches("\n- Tấm inox 3").count(), 1);
    assert!(!prompt.contains("Hệ thống đại lý"));
}

#[tokio::test]
async fn reply_keeps_only_the_newest_history_turns() {
    let fixture = fixture(2).await;
    let history = vec![
        turn(ChatRole::User, "Chào shop"),
        turn(ChatRole::Assistant, "Chào anh"),
        turn(ChatRole::User, "Inox 304 giá bao nhiêu?"),
    ];

    let reply = fixture.service.reply("  Còn hàng không?  ", history).await;
    assert!(matches!(reply, Ok(text) if text.starts_with("Dạ")));

    let requests = fixture.client.requests.lock().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].message, "Còn hàng không?");
    assert_eq!(
        requests[0].history,
        vec![
            turn(ChatRole::Assistant, "Chào anh"),
            turn(ChatRole::User, "Inox 304 giá bao nhiêu?"),
        ]
    );
    assert!(requests[0].system_prompt.contains("Tấm inox 304"));
}

#[tokio::test]
async fn empty_messages_are_rejected_before_calling_the_endpoint() {
    let fixture = fixture(10).await;

    let reply = fixture.service.reply("   ", Vec::new()).await;

    assert!(matches!(reply, Err(AppError::Validation(_))));
    assert!(fixture.client.requests.lock().await.is_empty());
}

#[tokio::test]
async fn missing_endpoint_is_reported_as_not_configured() {
    let audit_service = AuditService::new(Arc::new(FakeAuditLogRepository::default()));
    let service = ChatService::new(
        CatalogService::new(
            Arc::new(FakeRecordRepository::default()),
            Arc::new(FakeRecordRepository::default()),
            audit_service.clone(),
        ),
        DirectoryService::new(
            Arc::new(FakeRecordRepository::default()),
            Arc::new(FakeRecordRepository::default()),
            audit_service.clone(),
        ),
        SettingsService::new(Arc::new(FakeSettingsRepository::default()), audit_service),
        None,
        10,
    );

    let reply = service.reply("Xin chào", Vec::new()).await;

    assert!(matches!(reply, Err(AppError::Validation(message)) if message.contains("not configured")));
}
