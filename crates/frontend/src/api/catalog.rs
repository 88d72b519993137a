//! Загрузка справочников и накладных-оснований.

use super::get_json;
use crate::shared::api_utils::api_base;
use contracts::domain::a001_partner::Partner;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_warehouse::Warehouse;
use contracts::domain::a004_sales_invoice::SalesInvoice;
use contracts::domain::a005_purchase_invoice::PurchaseInvoice;
use editor::catalog::Catalog;

pub async fn fetch_partners() -> Result<Vec<Partner>, String> {
    get_json(&format!("{}/api/partners", api_base())).await
}

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    get_json(&format!("{}/api/products", api_base())).await
}

pub async fn fetch_warehouses() -> Result<Vec<Warehouse>, String> {
    get_json(&format!("{}/api/warehouses", api_base())).await
}

/// Накладные-основания для возвратов от покупателей
pub async fn fetch_sales_invoices() -> Result<Vec<SalesInvoice>, String> {
    get_json(&format!("{}/api/sales-invoices", api_base())).await
}

/// Накладные-основания для возвратов поставщикам
pub async fn fetch_purchase_invoices() -> Result<Vec<PurchaseInvoice>, String> {
    get_json(&format!("{}/api/purchase-invoices", api_base())).await
}

/// Снимок справочников. Журнал запрашивает его при монтировании и
/// отдаёт каждому редактору свою копию.
pub async fn load_catalog() -> Result<Catalog, String> {
    let partners = fetch_partners().await?;
    let products = fetch_products().await?;
    let warehouses = fetch_warehouses().await?;
    Ok(Catalog::new(partners, products, warehouses))
}
