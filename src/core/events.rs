//! UI events - Every user action and the application state it runs against.
//!
//! [`AppContext`] owns the page memory of one storefront session: the catalog,
//! the admin controller and the collaborators that turn state into output.
//! [`AppContext::dispatch`] is a plain table from [`UiEvent`] to handler.
//! OCR intake is the only asynchronous path and lives in [`process_upload`] so
//! the recognition runs without holding the context lock.

use crate::{
    config::AppConfig,
    core::{
        admin::{AdminController, AdminTab, CatalogExport, ProductForm},
        catalog::CatalogStore,
        filter::CatalogFilter,
        messaging::{
            CONTACT_GREETING, ComposeIntent, CustomerContact, GeneralInquiry, MessageTemplate,
            MessagingComposer, custom_message, inquiry_message, quick_request_message,
            template_message,
        },
        notice::Notice,
        ocr::OcrEngine,
        render::{Renderer, capacity_buckets},
    },
    entities::ProductModel,
    errors::{Error, Result},
};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};

/// A user action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// Filter controls changed; `show_admin` also opens the admin panel
    FilterChanged {
        /// New filter
        filter: CatalogFilter,
        /// Open the admin panel on the upload tab
        show_admin: bool,
    },
    /// "View Details" on a card
    ViewDetails {
        /// Product id
        id: String,
        /// Filter active when the product was opened; the grid keeps it
        filter: CatalogFilter,
    },
    /// "Quick Request" on a card
    QuickRequest {
        /// Product id
        id: String,
    },
    /// One of the detail view's template buttons
    TemplateMessage {
        /// Product id
        id: String,
        /// Chosen template
        template: MessageTemplate,
        /// Optional contact details
        contact: CustomerContact,
    },
    /// The detail view's custom message form
    CustomMessage {
        /// Product id
        id: String,
        /// Message body
        body: String,
        /// Optional contact details
        contact: CustomerContact,
    },
    /// The general inquiry form
    GeneralInquiry(GeneralInquiry),
    /// The floating contact button
    ContactButton,
    /// Open the admin panel
    ShowAdmin {
        /// Tab to show; upload when absent
        tab: Option<AdminTab>,
    },
    /// Submit the product form (create, or commit the pending edit)
    SubmitProductForm(ProductForm),
    /// "Edit" on an admin list row
    BeginEdit {
        /// Product id
        id: String,
    },
    /// Abandon the pending edit
    CancelEdit,
    /// "Delete" on an admin list row
    DeleteProduct {
        /// Product id
        id: String,
        /// The user answered the confirmation prompt with yes
        confirmed: bool,
    },
    /// Download the catalog
    ExportCatalog,
    /// Replace the catalog from an uploaded document
    ImportCatalog {
        /// Raw JSON text
        document: String,
    },
    /// "Try Again" in the upload area
    ResetUpload,
}

/// What the web layer should do after an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiOutcome {
    /// Show this page
    Page {
        /// Full HTML document
        html: String,
    },
    /// Open the deep link in a new browsing context
    Compose(ComposeIntent),
    /// Offer a file download
    Download {
        /// The document
        export: CatalogExport,
        /// Confirmation to show
        notice: Notice,
    },
    /// Nothing happened (stale id, declined confirmation)
    NoOp,
}

/// Session state shared by every handler.
#[derive(Debug)]
pub struct AppContext {
    /// Source of truth for products
    pub catalog: CatalogStore,
    /// Admin panel state
    pub admin: AdminController,
    composer: MessagingComposer,
    renderer: Renderer,
    export_file_name: String,
}

impl AppContext {
    /// Creates a context over `catalog` using the deployment settings in `config`.
    #[must_use]
    pub fn new(catalog: CatalogStore, config: &AppConfig) -> Self {
        Self {
            catalog,
            admin: AdminController::new(config.catalog.placeholder_image.clone()),
            composer: MessagingComposer::new(&config.messaging),
            renderer: Renderer::new(config.catalog.placeholder_image.clone()),
            export_file_name: config.catalog.export_file_name.clone(),
        }
    }

    /// Renders the storefront page.
    ///
    /// The grid shows `filter` applied to the catalog; `detail` and the admin
    /// panel are included when requested.
    #[must_use]
    pub fn render_page(
        &self,
        filter: &CatalogFilter,
        detail: Option<&ProductModel>,
        show_admin: bool,
        notices: &[Notice],
    ) -> String {
        let products = self.catalog.products();
        let mut body = self.renderer.notices(notices);
        body.push_str(
            &self
                .renderer
                .filter_form(filter, &capacity_buckets(products)),
        );
        let query = filter.query_string();
        body.push_str(&self.renderer.grid(&filter.apply(products), &query));
        if let Some(product) = detail {
            body.push_str(&self.renderer.detail(product, &query));
        }
        if show_admin {
            body.push_str(&self.renderer.admin_panel(&self.admin, products));
        }
        body.push_str(&self.renderer.inquiry_section());
        self.renderer.document(&body)
    }

    /// The unfiltered page with the admin panel open.
    #[must_use]
    pub fn admin_page(&self, notices: &[Notice]) -> UiOutcome {
        UiOutcome::Page {
            html: self.render_page(&CatalogFilter::default(), None, true, notices),
        }
    }

    fn compose_for(
        &self,
        id: &str,
        build: impl FnOnce(&ProductModel) -> Result<String>,
    ) -> Result<UiOutcome> {
        match self.catalog.get(id) {
            Some(product) => {
                let message = build(product)?;
                Ok(UiOutcome::Compose(self.composer.compose(&message)))
            }
            None => {
                debug!("Ignoring action on unknown product {id}");
                Ok(UiOutcome::NoOp)
            }
        }
    }

    /// Runs the handler for `event`.
    ///
    /// # Errors
    /// Returns validation errors from the product form, [`Error::EmptyMessage`]
    /// for a blank custom message, [`Error::Import`] for a malformed import and
    /// [`Error::Json`] if an export cannot be serialised.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<UiOutcome> {
        match event {
            UiEvent::FilterChanged { filter, show_admin } => {
                if show_admin {
                    self.admin.set_tab(AdminTab::Upload);
                }
                Ok(UiOutcome::Page {
                    html: self.render_page(&filter, None, show_admin, &[]),
                })
            }
            UiEvent::ViewDetails { id, filter } => {
                Ok(self.catalog.get(&id).map_or(UiOutcome::NoOp, |p| {
                    UiOutcome::Page {
                        html: self.render_page(&filter, Some(p), false, &[]),
                    }
                }))
            }
            UiEvent::QuickRequest { id } => {
                self.compose_for(&id, |p| Ok(quick_request_message(p)))
            }
            UiEvent::TemplateMessage {
                id,
                template,
                contact,
            } => self.compose_for(&id, |p| Ok(template_message(p, template, &contact))),
            UiEvent::CustomMessage { id, body, contact } => {
                self.compose_for(&id, |p| custom_message(p, &body, &contact))
            }
            UiEvent::GeneralInquiry(inquiry) => Ok(UiOutcome::Compose(
                self.composer.compose(&inquiry_message(&inquiry)),
            )),
            UiEvent::ContactButton => {
                Ok(UiOutcome::Compose(self.composer.compose(CONTACT_GREETING)))
            }
            UiEvent::ShowAdmin { tab } => {
                self.admin.set_tab(tab.unwrap_or_default());
                Ok(self.admin_page(&[]))
            }
            UiEvent::SubmitProductForm(form) => {
                let outcome = self.admin.submit(&mut self.catalog, form, Utc::now())?;
                Ok(self.admin_page(&[outcome.notice()]))
            }
            UiEvent::BeginEdit { id } => {
                if self.admin.begin_edit(&self.catalog, &id) {
                    Ok(self.admin_page(&[]))
                } else {
                    Ok(UiOutcome::NoOp)
                }
            }
            UiEvent::CancelEdit => {
                self.admin.cancel_edit();
                Ok(self.admin_page(&[]))
            }
            UiEvent::DeleteProduct { id, confirmed } => {
                if self.admin.delete(&mut self.catalog, &id, confirmed) {
                    Ok(self.admin_page(&[Notice::info("Product deleted successfully!")]))
                } else {
                    Ok(UiOutcome::NoOp)
                }
            }
            UiEvent::ExportCatalog => {
                let export = self.admin.export(&self.catalog, &self.export_file_name)?;
                let notice = Notice::info(format!("{} downloaded successfully!", export.file_name));
                Ok(UiOutcome::Download { export, notice })
            }
            UiEvent::ImportCatalog { document } => {
                self.admin.import(&mut self.catalog, &document)?;
                Ok(self.admin_page(&[Notice::info("Products imported successfully!")]))
            }
            UiEvent::ResetUpload => {
                self.admin.reset_upload();
                Ok(self.admin_page(&[]))
            }
        }
    }
}

/// Runs OCR intake for `image` and returns the refreshed admin page.
///
/// The context is locked only to mark the upload busy and to record the
/// result. Recognition runs on its own task, so the upload area still leaves
/// the busy state if the caller goes away mid-recognition.
///
/// # Errors
/// Returns [`Error::OcrBusy`] when another recognition is running. Engine
/// failures are not errors here; they put the upload area into its failed state.
#[instrument(skip(ctx, engine, image), fields(bytes = image.len()))]
pub async fn process_upload(
    ctx: Arc<RwLock<AppContext>>,
    engine: Arc<dyn OcrEngine>,
    image: Vec<u8>,
) -> Result<UiOutcome> {
    ctx.write().await.admin.begin_ocr()?;
    info!("Processing image with OCR");

    let task_ctx = Arc::clone(&ctx);
    let recognition = tokio::spawn(async move {
        let result = engine.recognize(&image).await;
        task_ctx.write().await.admin.finish_ocr(result);
    });

    if let Err(e) = recognition.await {
        error!("OCR task failed: {e}");
        ctx.write().await.admin.finish_ocr(Err(Error::Ocr {
            message: e.to_string(),
        }));
    }

    Ok(ctx.read().await.admin_page(&[]))
}
