use std::sync::Arc;

use inoxviet_core::{AppError, RecordId};
use inoxviet_domain::{Category, Product, PublishStatus};

use crate::test_support::{FakeAuditLogRepository, FakeRecordRepository, admin_context};
use crate::{AuditLogQuery, AuditService};

use super::CatalogService;

fn category(name: &str, status: PublishStatus) -> Category {
    Category {
        id: RecordId::new(),
        name: name.to_owned(),
        slug: String::new(),
        description: None,
        status,
    }
}

fn product(name: &str, category_id: RecordId) -> Product {
    Product {
        id: RecordId::new(),
        name: name.to_owned(),
        slug: String::new(),
        category_id,
        sku: None,
        price: Some(980_000),
        unit: Some("tấm".to_owned()),
        summary: None,
        description: None,
        image_urls: Vec::new(),
        featured: false,
        status: PublishStatus::Published,
    }
}

struct Fixture {
    service: CatalogService,
    audit_service: AuditService,
    sheets: Category,
    hidden: Category,
}

async fn fixture() -> Fixture {
    let sheets = category("Tấm inox", PublishStatus::Published);
    let hidden = category("Hàng thanh lý", PublishStatus::Hidden);
    let audit_service = AuditService::new(Arc::new(FakeAuditLogRepository::default()));
    let service = CatalogService::new(
        Arc::new(FakeRecordRepository::default()),
        Arc::new(FakeRecordRepository::default()),
        audit_service.clone(),
    );

    let context = admin_context();
    for value in [&sheets, &hidden] {
        let created = service.categories().create(&context, value.clone()).await;
        assert!(created.is_ok());
    }

    Fixture {
        service,
        audit_service,
        sheets,
        hidden,
    }
}

#[tokio::test]
async fn product_needs_an_existing_category() {
    let fixture = fixture().await;

    let result = fixture
        .service
        .create_product(&admin_context(), product("Tấm inox 304", RecordId::new()))
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn category_with_products_cannot_be_deleted() {
    let fixture = fixture().await;
    let context = admin_context();
    let created = fixture
        .service
        .create_product(&context, product("Tấm inox 304", fixture.sheets.id))
        .await;
    assert!(created.is_ok());

    let result = fixture.service.delete_category(&context, fixture.sheets.id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let result = fixture.service.delete_category(&context, fixture.hidden.id).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn public_catalog_hides_unpublished_products_and_categories() {
    let fixture = fixture().await;
    let context = admin_context();
    let visible = fixture
        .service
        .create_product(&context, product("Tấm inox 304", fixture.sheets.id))
        .await;
    let Ok(draft) = fixture
        .service
        .create_product(&context, product("Tấm inox 316", fixture.sheets.id))
        .await
    else {
        panic!("product should be created");
    };
    let in_hidden_category = fixture
        .service
        .create_product(&context, product("Ống inox cũ", fixture.hidden.id))
        .await;
    assert!(visible.is_ok());
    assert!(in_hidden_category.is_ok());

    let changed = fixture
        .service
        .set_product_status(&context, draft.id, PublishStatus::Draft)
        .await;
    assert!(changed.is_ok());

    let public = fixture.service.public_products(None).await.unwrap_or_default();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].product.slug, "tam-inox-304");
    assert_eq!(public[0].category_name.as_deref(), Some("Tấm inox"));

    let by_slug = fixture.service.public_product("tam-inox-316").await;
    assert!(matches!(by_slug, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn toggle_featured_flips_and_audits() {
    let fixture = fixture().await;
    let context = admin_context();
    let Ok(created) = fixture
        .service
        .create_product(&context, product("Cuộn inox 201", fixture.sheets.id))
        .await
    else {
        panic!("product should be created");
    };

    let toggled = fixture.service.toggle_featured(&context, created.id).await;
    assert!(matches!(toggled, Ok(product) if product.featured));

    let entries = fixture
        .audit_service
        .list(AuditLogQuery::default())
        .await
        .unwrap_or_default();
    assert_eq!(entries[0].action, "product.status");
    assert_eq!(entries[0].details, "Đổi trạng thái sản phẩm Cuộn inox 201: nổi bật");
}
