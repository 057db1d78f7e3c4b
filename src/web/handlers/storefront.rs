//! Shopper-facing handlers: browsing, details and messaging.

use crate::{
    core::{
        events::{UiEvent, UiOutcome},
        filter::CatalogFilter,
        messaging::{CustomerContact, GeneralInquiry, MessageTemplate},
    },
    errors::Result,
    web::AppState,
};
use axum::{
    Form,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::debug;

/// Query string of the storefront page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BrowseQuery {
    /// Capacity bucket or `all`
    pub capacity: Option<String>,
    /// Solar panel count or `all`
    pub solar: Option<String>,
    /// Stock status or `all`
    pub stock: Option<String>,
    /// `true` opens the admin panel
    pub admin: Option<String>,
}

/// Optional contact fields sent with template and custom messages.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MessageForm {
    /// Customer name
    pub name: Option<String>,
    /// Customer phone
    pub phone: Option<String>,
    /// Custom message body; unused by templates
    pub message: String,
}

impl MessageForm {
    fn contact(&self) -> CustomerContact {
        CustomerContact::new(self.name.as_deref(), self.phone.as_deref())
    }
}

/// General inquiry form fields.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InquiryForm {
    /// Customer name
    pub name: String,
    /// Customer phone
    pub phone: String,
    /// Product of interest
    pub product: String,
    /// Inquiry text
    pub message: String,
}

/// `GET /` - the filtered storefront, optionally with the admin panel.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Result<UiOutcome> {
    let filter = CatalogFilter::from_raw(
        query.capacity.as_deref(),
        query.solar.as_deref(),
        query.stock.as_deref(),
    )?;
    let show_admin = query.admin.as_deref() == Some("true");
    state
        .dispatch(UiEvent::FilterChanged { filter, show_admin })
        .await
}

/// `GET /products/{id}` - the detail view over the grid, keeping the filter
/// carried in the query string.
pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<BrowseQuery>,
) -> Result<UiOutcome> {
    let filter = CatalogFilter::from_raw(
        query.capacity.as_deref(),
        query.solar.as_deref(),
        query.stock.as_deref(),
    )?;
    state.dispatch(UiEvent::ViewDetails { id, filter }).await
}

/// `POST /products/{id}/quick-request`
pub async fn quick_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<UiOutcome> {
    state.dispatch(UiEvent::QuickRequest { id }).await
}

/// `POST /products/{id}/templates/{number}`
///
/// Unknown template numbers are ignored like stale ids.
pub async fn template_message(
    State(state): State<AppState>,
    Path((id, number)): Path<(String, u8)>,
    Form(form): Form<MessageForm>,
) -> Result<UiOutcome> {
    let Some(template) = MessageTemplate::from_number(number) else {
        debug!("Ignoring unknown template {number}");
        return Ok(UiOutcome::NoOp);
    };
    state
        .dispatch(UiEvent::TemplateMessage {
            id,
            template,
            contact: form.contact(),
        })
        .await
}

/// `POST /products/{id}/message`
pub async fn custom_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<MessageForm>,
) -> Result<UiOutcome> {
    let contact = form.contact();
    state
        .dispatch(UiEvent::CustomMessage {
            id,
            body: form.message,
            contact,
        })
        .await
}

/// `POST /inquiry`
pub async fn inquiry(
    State(state): State<AppState>,
    Form(form): Form<InquiryForm>,
) -> Result<UiOutcome> {
    state
        .dispatch(UiEvent::GeneralInquiry(GeneralInquiry {
            name: form.name,
            phone: form.phone,
            product: form.product,
            message: form.message,
        }))
        .await
}

/// `GET /contact` - the floating contact button.
pub async fn contact(State(state): State<AppState>) -> Result<UiOutcome> {
    state.dispatch(UiEvent::ContactButton).await
}
