//! Renderer - Projects the catalog into HTML cards, detail views and the admin panel.
//!
//! Rendering is a pure function of its inputs; the output is a disposable
//! snapshot. All interpolated text is HTML-escaped.

use crate::{
    core::{
        admin::{AdminController, AdminTab, ProductForm, UploadState},
        extractor::OcrWord,
        filter::{ALL, CatalogFilter, Criterion},
        messaging::MessageTemplate,
        notice::Notice,
    },
    entities::{DeliveryOptions, ProductModel, StockStatus},
};
use std::fmt::Write;

/// Escapes text for HTML element content and quoted attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats an integer with comma thousands separators (`85000` → `85,000`).
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Naira price label (`₦85,000`).
#[must_use]
pub fn price_label(price_ngn: i64) -> String {
    format!("₦{}", group_thousands(price_ngn))
}

/// Labels of the allowed payment arrangements, in display order.
#[must_use]
pub fn delivery_labels(options: &DeliveryOptions) -> Vec<&'static str> {
    let mut labels = Vec::new();
    if options.pay_on_delivery {
        labels.push("Pay on Delivery");
    }
    if options.pay_before_delivery {
        labels.push("Full Prepayment");
    }
    if options.deposit_50 {
        labels.push("50% Deposit");
    }
    labels
}

/// Capacity buckets offered by the filter, taken from `DT-<bucket>` model codes.
#[must_use]
pub fn capacity_buckets(products: &[ProductModel]) -> Vec<String> {
    let mut buckets: Vec<String> = Vec::new();
    for bucket in products.iter().filter_map(|p| p.model.strip_prefix("DT-")) {
        if !bucket.is_empty() && !buckets.iter().any(|b| b == bucket) {
            buckets.push(bucket.to_string());
        }
    }
    buckets
}

/// One overlay rectangle, in percent of the uploaded image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    /// Left offset
    pub left: f64,
    /// Top offset
    pub top: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

/// Overlay rectangles for recognised words.
#[must_use]
pub fn highlights(words: &[OcrWord]) -> Vec<Highlight> {
    words
        .iter()
        .map(|word| Highlight {
            left: word.bbox.x0,
            top: word.bbox.y0,
            width: word.bbox.width(),
            height: word.bbox.height(),
        })
        .collect()
}

fn solar_summary(product: &ProductModel) -> String {
    format!(
        "{} x {}W",
        product.specs.solar_panel_count, product.specs.each_panel_watt
    )
}

fn stock_badge(status: StockStatus) -> String {
    format!(
        r#"<span class="stock-badge stock-{}">{}</span>"#,
        status.as_str(),
        status.label()
    )
}

/// HTML renderer bound to deployment settings.
#[derive(Clone, Debug)]
pub struct Renderer {
    placeholder_image: String,
}

impl Renderer {
    /// Creates a renderer using `placeholder_image` for products without images.
    #[must_use]
    pub const fn new(placeholder_image: String) -> Self {
        Self { placeholder_image }
    }

    fn image_tag(&self, product: &ProductModel, class: &str) -> String {
        format!(
            r#"<img src="{}" alt="{}" class="{class}" loading="lazy">"#,
            escape_html(product.primary_image(&self.placeholder_image)),
            escape_html(&product.title),
        )
    }

    /// One product card. `query` is appended to the details link so the
    /// active filter survives opening a product.
    #[must_use]
    pub fn card(&self, product: &ProductModel, query: &str) -> String {
        let id = escape_html(&product.id);
        let query = escape_html(query);
        let solar_badge = if product.specs.solar_panel_count > 0 {
            format!(
                r#"<span class="stock-badge solar-badge">{} Solar</span>"#,
                product.specs.solar_panel_count
            )
        } else {
            String::new()
        };

        format!(
            r#"<div class="product-card" data-product-id="{id}">
{image}
<div class="product-info">
<div class="product-header"><h3 class="product-title">{title}</h3><div>{badge}{solar_badge}</div></div>
<div class="product-price">{price}</div>
<p class="product-description">{description}</p>
<div class="product-specs">
<div class="spec-item"><span>Capacity:</span><span>{capacity}Wh</span></div>
<div class="spec-item"><span>AC Output:</span><span>{ac}W</span></div>
<div class="spec-item"><span>Solar Panels:</span><span>{solar}</span></div>
</div>
<div class="product-actions">
<a class="btn btn-primary view-details" href="/products/{id}{query}">View Details</a>
<form method="post" action="/products/{id}/quick-request" target="_blank"><button class="btn btn-secondary quick-request">Quick Request</button></form>
</div>
</div>
</div>"#,
            image = self.image_tag(product, "product-image"),
            title = escape_html(&product.title),
            badge = stock_badge(product.status),
            price = price_label(product.price_ngn),
            description = escape_html(&product.short_description),
            capacity = product.specs.battery_capacity_wh,
            ac = product.specs.ac_output_watts,
            solar = solar_summary(product),
        )
    }

    /// The product grid.
    #[must_use]
    pub fn grid(&self, products: &[&ProductModel], query: &str) -> String {
        let mut html = String::from(r#"<div id="products-grid" class="products-grid">"#);
        if products.is_empty() {
            html.push_str(r#"<p class="no-results">No products match the selected filters.</p>"#);
        }
        for product in products {
            html.push_str(&self.card(product, query));
        }
        html.push_str("</div>");
        html
    }

    /// The detail view. Template buttons and the custom message share one
    /// form so the name and phone typed once go with either.
    #[must_use]
    pub fn detail(&self, product: &ProductModel, query: &str) -> String {
        let id = escape_html(&product.id);
        let specs = &product.specs;
        let spec_rows = [
            ("Battery Capacity", format!("{}Wh", specs.battery_capacity_wh)),
            ("AC Output", format!("{}W", specs.ac_output_watts)),
            ("Output Voltage", specs.output_voltage.clone()),
            ("Inverter Type", specs.inverter_type.clone()),
            ("Solar Panels", solar_summary(product)),
            (
                "Charge Controller",
                specs
                    .charge_controller
                    .clone()
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
            ("Weight", format!("{}kg", specs.weight_kg)),
            ("Dimensions", specs.dimensions_cm.clone()),
        ];

        let mut html = String::new();
        let _ = write!(
            html,
            r#"<div id="product-modal" class="modal"><div class="product-detail">
<div class="product-gallery">{image}</div>
<div class="product-detail-info">
<h2>{title}</h2>
<div class="product-price-large">{price}</div>
<div class="stock-status">{badge}<span class="stock-count">{stock} units available</span></div>
<p>{description}</p>
<div class="specs-detailed"><h4>Specifications</h4><div class="specs-grid">"#,
            image = self.image_tag(product, "main-product-image"),
            title = escape_html(&product.title),
            price = price_label(product.price_ngn),
            badge = stock_badge(product.status),
            stock = product.stock_count,
            description = escape_html(&product.short_description),
        );
        for (label, value) in spec_rows {
            let _ = write!(
                html,
                r#"<div class="spec-item-detailed"><strong>{label}</strong><span>{}</span></div>"#,
                escape_html(&value)
            );
        }
        let _ = write!(
            html,
            r#"</div></div>
<div class="delivery-options"><h4>Delivery &amp; Payment Options</h4><p>Available options: {}</p></div>
<form id="product-message-form" method="post" action="/products/{id}/message" target="_blank">
<div class="customer-contact">
<input type="text" id="customer-name" name="name" placeholder="Your Name">
<input type="tel" id="customer-phone" name="phone" placeholder="Your Phone">
</div>
<div class="message-templates"><h4>Quick Message Templates</h4>"#,
            delivery_labels(&product.delivery_options).join(", ")
        );
        for template in MessageTemplate::all() {
            let _ = write!(
                html,
                r#"<button class="template-btn" data-template="{n}" formaction="/products/{id}/templates/{n}">{text}</button>"#,
                n = template.number(),
                text = escape_html(&template.render(product)),
            );
        }
        let _ = write!(
            html,
            r#"</div>
<div class="custom-message"><h4>Custom Message</h4>
<textarea id="custom-message-text" name="message" placeholder="Your custom message..."></textarea>
<button class="btn btn-primary" id="send-custom-message">Send via WhatsApp</button>
</div></form>
</div></div><a class="close-modal" href="/{}">&times;</a></div>"#,
            escape_html(query)
        );
        html
    }

    fn select(name: &str, options: &[(String, String)], selected: &str) -> String {
        let mut html = format!(r#"<select id="{name}-filter" name="{name}">"#);
        for (value, label) in options {
            let marker = if value == selected { " selected" } else { "" };
            let _ = write!(
                html,
                r#"<option value="{}"{marker}>{}</option>"#,
                escape_html(value),
                escape_html(label)
            );
        }
        html.push_str("</select>");
        html
    }

    /// The filter form with the active values selected.
    #[must_use]
    pub fn filter_form(&self, filter: &CatalogFilter, buckets: &[String]) -> String {
        fn selected<T: ToString>(criterion: &Criterion<T>) -> String {
            match criterion {
                Criterion::All => ALL.to_string(),
                Criterion::Only(value) => value.to_string(),
            }
        }

        let all = || (ALL.to_string(), "All".to_string());
        let mut capacity = vec![all()];
        capacity.extend(buckets.iter().map(|b| (b.clone(), format!("{b}Wh"))));
        let solar = vec![
            all(),
            ("0".to_string(), "No Solar".to_string()),
            ("1".to_string(), "1 Panel".to_string()),
            ("2".to_string(), "2 Panels".to_string()),
        ];
        let mut stock = vec![all()];
        stock.extend(
            [
                StockStatus::InStock,
                StockStatus::LowStock,
                StockStatus::OutOfStock,
            ]
            .map(|s| (s.as_str().to_string(), s.label().to_string())),
        );

        format!(
            r#"<form class="filters" method="get" action="/">{}{}{}<button class="btn">Filter</button></form>"#,
            Self::select("capacity", &capacity, &selected(&filter.capacity)),
            Self::select("solar", &solar, &selected(&filter.solar_panels)),
            Self::select("stock", &stock, &selected(&filter.stock)),
        )
    }

    /// Notification banner for `notices`; empty when there are none.
    #[must_use]
    pub fn notices(&self, notices: &[Notice]) -> String {
        if notices.is_empty() {
            return String::new();
        }
        let mut html = String::from(r#"<div id="message-sent" class="notification">"#);
        for notice in notices {
            let _ = write!(html, "<p>{}</p>", escape_html(&notice.to_string()));
        }
        html.push_str("</div>");
        html
    }

    fn product_form(form: &ProductForm, editing: bool) -> String {
        let field = |id: &str, name: &str, label: &str, value: &str| {
            format!(
                r#"<label for="{id}">{label}</label><input id="{id}" name="{name}" value="{}">"#,
                escape_html(value)
            )
        };
        let mut status_options = String::new();
        for status in [
            StockStatus::InStock,
            StockStatus::LowStock,
            StockStatus::OutOfStock,
        ] {
            let marker = if form.status == status.as_str() {
                " selected"
            } else {
                ""
            };
            let _ = write!(
                status_options,
                r#"<option value="{}"{marker}>{}</option>"#,
                status.as_str(),
                status.label()
            );
        }
        let cancel = if editing {
            r#"<button class="btn btn-secondary" formaction="/admin/draft/cancel">Cancel Edit</button>"#
        } else {
            ""
        };

        format!(
            r#"<form id="product-form" method="post" action="/admin/products">
{}{}{}
<label for="stock-status">Status</label><select id="stock-status" name="status">{status_options}</select>
{}{}{}{}{}
<button class="btn btn-primary">{}</button>{cancel}
</form>"#,
            field("product-model", "model", "Model", &form.model),
            field("product-title", "title", "Title", &form.title),
            field("product-price", "price", "Price (NGN)", &form.price),
            field("battery-capacity", "battery_capacity", "Battery (Wh)", &form.battery_capacity),
            field("ac-output", "ac_output", "AC Output (W)", &form.ac_output),
            field("solar-count", "solar_count", "Solar Panels", &form.solar_count),
            field("panel-wattage", "panel_wattage", "Panel Wattage (W)", &form.panel_wattage),
            field(
                "charge-controller",
                "charge_controller",
                "Charge Controller",
                &form.charge_controller
            ),
            if editing { "Save Changes" } else { "Add Product" },
        )
    }

    fn upload_area(upload: &UploadState) -> String {
        match upload {
            UploadState::Idle => r#"<div id="upload-area" class="upload-placeholder">
<p>Drag &amp; drop product images here</p><p>or</p>
<form method="post" action="/admin/ocr" enctype="multipart/form-data"><input type="file" id="product-images" name="image" accept="image/*" required><button class="btn btn-primary" id="select-images-btn">Select Images</button></form>
</div>"#
                .to_string(),
            UploadState::Processing => {
                r#"<div id="upload-area"><p>Processing image with OCR... <span class="spinner"></span></p></div>"#
                    .to_string()
            }
            UploadState::Failed { message } => format!(
                r#"<div id="upload-area"><p>Error processing image: {}</p>
<form method="post" action="/admin/ocr/reset"><button class="btn btn-primary">Try Again</button></form></div>"#,
                escape_html(message)
            ),
            UploadState::Ready { words, .. } => {
                let mut overlay = String::new();
                for h in highlights(words) {
                    let _ = write!(
                        overlay,
                        r#"<div class="ocr-highlight" style="left: {}%; top: {}%; width: {}%; height: {}%"></div>"#,
                        h.left, h.top, h.width, h.height
                    );
                }
                format!(
                    r#"<div id="ocr-results"><div id="ocr-overlay">{overlay}</div>
<form method="post" action="/admin/ocr/reset"><button class="btn btn-secondary">Upload Another</button></form></div>"#
                )
            }
        }
    }

    fn admin_list(products: &[ProductModel]) -> String {
        let mut html = String::from(r#"<div id="admin-products-list">"#);
        for product in products {
            let id = escape_html(&product.id);
            let _ = write!(
                html,
                r#"<div class="admin-product-item"><div class="product-info">
<h4>{title}</h4><p>{price} • {stock}</p>
<p>Battery: {wh}Wh • Solar: {n}x{w}W</p></div>
<div class="product-actions">
<form method="post" action="/admin/products/{id}/edit"><button class="btn btn-secondary">Edit</button></form>
<form method="post" action="/admin/products/{id}/delete" onsubmit="return confirm('Are you sure you want to delete this product?')"><input type="hidden" name="confirm" value="true"><button class="btn btn-error">Delete</button></form>
</div></div>"#,
                title = escape_html(&product.title),
                price = price_label(product.price_ngn),
                stock = product.status.label(),
                wh = product.specs.battery_capacity_wh,
                n = product.specs.solar_panel_count,
                w = product.specs.each_panel_watt,
            );
        }
        html.push_str("</div>");
        html
    }

    /// The admin panel with its active tab.
    #[must_use]
    pub fn admin_panel(&self, admin: &AdminController, products: &[ProductModel]) -> String {
        let tab_class = |tab: AdminTab| {
            if admin.tab() == tab {
                "tab-content active"
            } else {
                "tab-content"
            }
        };
        format!(
            r#"<section id="admin" class="admin-section">
<div class="admin-tabs"><a class="tab-btn" data-tab="upload" href="/admin?tab=upload">Upload</a><a class="tab-btn" data-tab="manage" href="/admin?tab=manage">Manage</a></div>
<div id="upload-tab" class="{upload_class}">{upload}{form}</div>
<div id="manage-tab" class="{manage_class}">{list}
<a class="btn" id="export-json" href="/admin/export">Export JSON</a>
<form method="post" action="/admin/import" enctype="multipart/form-data"><input type="file" id="json-file" name="catalog" accept=".json" required><button class="btn" id="import-json">Import JSON</button></form>
</div>
</section>"#,
            upload_class = tab_class(AdminTab::Upload),
            manage_class = tab_class(AdminTab::Manage),
            upload = Self::upload_area(admin.upload()),
            form = Self::product_form(admin.form(), admin.draft().is_some()),
            list = Self::admin_list(products),
        )
    }

    /// The general inquiry form and floating contact button.
    #[must_use]
    pub fn inquiry_section(&self) -> String {
        r#"<section id="contact"><form id="general-inquiry-form" method="post" action="/inquiry" target="_blank">
<input id="inquiry-name" name="name" placeholder="Your Name">
<input id="inquiry-phone" name="phone" placeholder="Your Phone">
<input id="inquiry-product" name="product" placeholder="Product of interest">
<textarea id="inquiry-message" name="message" placeholder="Your message"></textarea>
<button class="btn btn-primary">Send Inquiry</button></form></section>
<a id="whatsapp-general" class="whatsapp-float" href="/contact" target="_blank">WhatsApp</a>"#
            .to_string()
    }

    /// Wraps `body` in the page document.
    #[must_use]
    pub fn document(&self, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1">
<title>DEETREM Power Stations</title><link rel="stylesheet" href="/styles.css"></head>
<body><nav class="nav-menu"><a class="nav-link" href="/">Products</a><a class="nav-link" href="/#contact">Contact</a><a class="nav-link admin-btn" href="/admin">Admin</a></nav>
<main>{body}</main></body></html>"#
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::{defaults::default_products, extractor::BoundingBox};

    fn renderer() -> Renderer {
        Renderer::new("assets/products/placeholder.webp".to_string())
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(85_000), "85,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-1_000), "-1,000");
        assert_eq!(price_label(450_000), "₦450,000");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b a="1">'x' & y</b>"#),
            "&lt;b a=&quot;1&quot;&gt;&#39;x&#39; &amp; y&lt;/b&gt;"
        );
    }

    #[test]
    fn test_delivery_labels() {
        assert_eq!(
            delivery_labels(&DeliveryOptions::all()),
            ["Pay on Delivery", "Full Prepayment", "50% Deposit"]
        );
        assert!(delivery_labels(&DeliveryOptions::default()).is_empty());
    }

    #[test]
    fn test_capacity_buckets_in_catalog_order() {
        assert_eq!(
            capacity_buckets(&default_products()),
            ["300", "500", "700", "1000", "2000"]
        );
    }

    #[test]
    fn test_card_shows_solar_badge_only_with_panels() {
        let products = default_products();
        let dt300 = renderer().card(&products[0], "");
        assert!(!dt300.contains("solar-badge"));
        assert!(dt300.contains("₦85,000"));
        assert!(dt300.contains("0 x 0W"));

        let dt1000 = renderer().card(&products[3], "");
        assert!(dt1000.contains("2 Solar"));
        assert!(dt1000.contains("Low Stock"));
    }

    #[test]
    fn test_card_uses_placeholder_and_escapes() {
        let product = ProductModel {
            id: "x".to_string(),
            title: "<script>alert(1)</script>".to_string(),
            ..Default::default()
        };
        let html = renderer().card(&product, "");
        assert!(html.contains("assets/products/placeholder.webp"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_detail_view() {
        let products = default_products();
        let html = renderer().detail(&products[0], "");
        assert!(html.contains("25 units available"));
        assert!(html.contains("N/A"));
        assert!(html.contains("3.5kg"));
        assert!(html.contains("Pay on Delivery, Full Prepayment, 50% Deposit"));
        assert!(html.contains("/products/dt-300/templates/3"));

        let html = renderer().detail(&products[4], "");
        assert!(html.contains("Available options: Full Prepayment, 50% Deposit"));
        assert!(html.contains("50A"));
    }

    #[test]
    fn test_templates_share_the_visible_contact_fields() {
        let products = default_products();
        let html = renderer().detail(&products[0], "");
        assert!(!html.contains(r#"type="hidden""#));
        assert_eq!(html.matches(r#"name="name""#).count(), 1);
        assert_eq!(html.matches(r#"name="phone""#).count(), 1);

        // Every template button submits the one form holding the contact fields
        let (form, _) = html
            .split_once(r#"<form id="product-message-form""#)
            .map(|(_, rest)| rest.split_once("</form>").unwrap())
            .unwrap();
        assert!(form.contains(r#"id="customer-name" name="name""#));
        for n in 1..=3 {
            let action = format!(r#"formaction="/products/dt-300/templates/{n}""#);
            assert!(form.contains(&action));
        }
        assert!(form.contains(r#"name="message""#));
    }

    #[test]
    fn test_messaging_forms_open_a_new_tab() {
        let products = default_products();
        let r = renderer();
        let card = r.card(&products[0], "");
        assert!(card.contains(
            r#"<form method="post" action="/products/dt-300/quick-request" target="_blank">"#
        ));
        let detail = r.detail(&products[0], "");
        assert!(detail.contains(r#"action="/products/dt-300/message" target="_blank">"#));
        let inquiry = r.inquiry_section();
        assert!(inquiry.contains(r#"action="/inquiry" target="_blank">"#));
    }

    #[test]
    fn test_upload_forms_are_multipart() {
        let products = default_products();
        let admin = AdminController::new("assets/products/placeholder.webp".to_string());
        let html = renderer().admin_panel(&admin, &products);
        assert!(html.contains(
            r#"<form method="post" action="/admin/ocr" enctype="multipart/form-data"><input type="file" id="product-images" name="image""#
        ));
        assert!(html.contains(
            r#"<form method="post" action="/admin/import" enctype="multipart/form-data"><input type="file" id="json-file" name="catalog""#
        ));
    }

    #[test]
    fn test_details_links_keep_the_filter() {
        let products = default_products();
        let r = renderer();
        let query = "?capacity=all&solar=2&stock=all";
        let card = r.card(&products[3], query);
        assert!(
            card.contains(r#"href="/products/dt-1000?capacity=all&amp;solar=2&amp;stock=all""#)
        );
        let detail = r.detail(&products[3], query);
        assert!(detail.contains(
            r#"class="close-modal" href="/?capacity=all&amp;solar=2&amp;stock=all""#
        ));
        let card = r.card(&products[3], "");
        assert!(card.contains(r#"href="/products/dt-1000""#));
    }

    #[test]
    fn test_empty_grid_message() {
        assert!(renderer().grid(&[], "").contains("No products match"));
    }

    #[test]
    fn test_filter_form_marks_selection() {
        let filter = CatalogFilter {
            stock: Criterion::Only(StockStatus::LowStock),
            ..Default::default()
        };
        let html = renderer().filter_form(&filter, &["500".to_string()]);
        assert!(html.contains(r#"<option value="low_stock" selected>"#));
        assert!(html.contains(r#"<option value="500">500Wh</option>"#));
        assert!(html.contains(r#"<option value="all" selected>"#));
    }

    #[test]
    fn test_highlights_from_word_boxes() {
        let words = vec![OcrWord {
            text: "500Wh".to_string(),
            bbox: BoundingBox {
                x0: 10.0,
                y0: 5.0,
                x1: 30.0,
                y1: 15.0,
            },
        }];
        let boxes = highlights(&words);
        assert_eq!(
            boxes,
            [Highlight {
                left: 10.0,
                top: 5.0,
                width: 20.0,
                height: 10.0
            }]
        );
    }

    #[test]
    fn test_notices_banner() {
        assert!(renderer().notices(&[]).is_empty());
        let html = renderer().notices(&[Notice::info("Product added successfully!")]);
        assert!(html.contains("<p>Product added successfully!</p>"));
    }
}
