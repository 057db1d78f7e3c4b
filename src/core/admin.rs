//! Admin controller - Create, edit, delete, import and export catalog products.
//!
//! Edits are staged: [`AdminController::begin_edit`] loads a product into the
//! form and records a draft, and the catalog entry is only replaced when the
//! form is submitted. Abandoning the edit leaves the original product intact.
//!
//! OCR intake is tracked by [`UploadState`]. While a recognition is in flight a
//! second upload is rejected with [`Error::OcrBusy`].

use crate::{
    core::{
        catalog::CatalogStore,
        extractor::{ExtractedSpecs, OcrWord, extract_specs},
        notice::Notice,
        ocr::OcrOutput,
    },
    entities::{DeliveryOptions, ProductModel, Specs, StockStatus},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::str::FromStr;
use tracing::{info, warn};

/// JSON content type used for catalog downloads.
pub const JSON_CONTENT_TYPE: &str = "application/json";

const DEFAULT_CURRENCY: &str = "NGN";
const DEFAULT_DESCRIPTION: &str = "Power station with solar compatibility";
const DEFAULT_OUTPUT_VOLTAGE: &str = "220-240V";
const DEFAULT_INVERTER: &str = "Pure sine wave";
const DEFAULT_PORTS: [&str; 4] = ["AC", "USB-C", "USB-A", "12V DC"];

/// Admin panel tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    /// Image upload and product form
    #[default]
    Upload,
    /// Product list, export and import
    Manage,
}

impl FromStr for AdminTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "upload" => Ok(Self::Upload),
            "manage" => Ok(Self::Manage),
            other => Err(Error::InvalidField {
                field: "tab",
                value: other.to_string(),
            }),
        }
    }
}

/// Raw values of the product form, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    /// Model code, required
    pub model: String,
    /// Display title, required
    pub title: String,
    /// Price in whole naira, required
    pub price: String,
    /// Stock status wire value, required
    pub status: String,
    /// Battery capacity (Wh)
    pub battery_capacity: String,
    /// AC output (W)
    pub ac_output: String,
    /// Solar panel count
    pub solar_count: String,
    /// Per-panel wattage
    pub panel_wattage: String,
    /// Charge controller rating; blank means none
    pub charge_controller: String,
}

/// Zero renders as an empty field.
fn blank_if_zero(value: u32) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// Leading decimal digits of `raw`, or 0 when there are none.
fn lenient_u32(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    match &trimmed[..end] {
        "" => 0,
        digits => digits.parse().unwrap_or(u32::MAX),
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::MissingField { field })
    } else {
        Ok(trimmed)
    }
}

struct ValidatedForm {
    model: String,
    title: String,
    price_ngn: i64,
    status: StockStatus,
    battery_capacity_wh: u32,
    ac_output_watts: u32,
    solar_panel_count: u32,
    each_panel_watt: u32,
    charge_controller: Option<String>,
}

impl ValidatedForm {
    fn apply_to(self, product: &mut ProductModel) {
        product.model = self.model;
        product.title = self.title;
        product.price_ngn = self.price_ngn;
        product.status = self.status;
        product.specs.battery_capacity_wh = self.battery_capacity_wh;
        product.specs.ac_output_watts = self.ac_output_watts;
        product.specs.solar_panel_count = self.solar_panel_count;
        product.specs.each_panel_watt = self.each_panel_watt;
        product.specs.charge_controller = self.charge_controller;
    }
}

impl ProductForm {
    /// Form pre-filled from an existing product.
    #[must_use]
    pub fn from_product(product: &ProductModel) -> Self {
        Self {
            model: product.model.clone(),
            title: product.title.clone(),
            price: product.price_ngn.to_string(),
            status: product.status.as_str().to_string(),
            battery_capacity: product.specs.battery_capacity_wh.to_string(),
            ac_output: product.specs.ac_output_watts.to_string(),
            solar_count: product.specs.solar_panel_count.to_string(),
            panel_wattage: product.specs.each_panel_watt.to_string(),
            charge_controller: product.specs.charge_controller.clone().unwrap_or_default(),
        }
    }

    /// Copies an OCR guess into the spec fields; zero values leave the field blank.
    pub fn apply_extracted(&mut self, specs: &ExtractedSpecs) {
        self.battery_capacity = blank_if_zero(specs.battery_capacity_wh);
        self.ac_output = blank_if_zero(specs.ac_output_watts);
        self.solar_count = blank_if_zero(specs.solar_panel_count);
        self.panel_wattage = blank_if_zero(specs.each_panel_watt);
        self.charge_controller = specs.charge_controller.clone().unwrap_or_default();
    }

    fn validate(&self) -> Result<ValidatedForm> {
        let model = required("model", &self.model)?;
        let title = required("title", &self.title)?;
        let price = required("price", &self.price)?;
        let status = required("status", &self.status)?;

        let price_ngn = price.parse::<i64>().map_err(|_| Error::InvalidField {
            field: "price",
            value: price.to_string(),
        })?;
        let status = status.parse::<StockStatus>().map_err(|value| Error::InvalidField {
            field: "status",
            value,
        })?;
        let charge_controller = match self.charge_controller.trim() {
            "" => None,
            rating => Some(rating.to_string()),
        };

        Ok(ValidatedForm {
            model: model.to_string(),
            title: title.to_string(),
            price_ngn,
            status,
            battery_capacity_wh: lenient_u32(&self.battery_capacity),
            ac_output_watts: lenient_u32(&self.ac_output),
            solar_panel_count: lenient_u32(&self.solar_count),
            each_panel_watt: lenient_u32(&self.panel_wattage),
            charge_controller,
        })
    }
}

/// State of the OCR upload area.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UploadState {
    /// Waiting for an image
    #[default]
    Idle,
    /// A recognition is running
    Processing,
    /// Recognition finished and the form was pre-filled
    Ready {
        /// Recognised text
        text: String,
        /// The extracted guess
        specs: ExtractedSpecs,
        /// Words for the highlight overlay
        words: Vec<OcrWord>,
    },
    /// Recognition failed; the form was left as it was
    Failed {
        /// Engine error
        message: String,
    },
}

/// An edit in progress; the original product stays in the catalog until commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditDraft {
    /// Id of the product being edited
    pub original_id: String,
}

/// Result of a successful form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new product was appended
    Created {
        /// Assigned id
        id: String,
    },
    /// The drafted product was replaced in place
    Updated {
        /// Unchanged id
        id: String,
    },
}

impl SubmitOutcome {
    /// Confirmation to show the user.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::Created { .. } => Notice::info("Product added successfully!"),
            Self::Updated { .. } => Notice::info("Product updated successfully!"),
        }
    }
}

/// A downloadable catalog document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogExport {
    /// Suggested file name
    pub file_name: String,
    /// MIME type
    pub content_type: &'static str,
    /// Pretty-printed JSON array of products
    pub body: String,
}

/// Builds a `dt-<millis>` id that is not yet used in `catalog`.
#[must_use]
pub fn fresh_product_id(catalog: &CatalogStore, now: DateTime<Utc>) -> String {
    let mut millis = now.timestamp_millis();
    loop {
        let id = format!("dt-{millis}");
        if !catalog.contains(&id) {
            return id;
        }
        millis += 1;
    }
}

/// Admin panel state and operations over a [`CatalogStore`].
#[derive(Clone, Debug)]
pub struct AdminController {
    tab: AdminTab,
    form: ProductForm,
    draft: Option<EditDraft>,
    upload: UploadState,
    placeholder_image: String,
}

impl AdminController {
    /// Creates an idle controller; new products get `placeholder_image` as their image.
    #[must_use]
    pub fn new(placeholder_image: String) -> Self {
        Self {
            tab: AdminTab::Upload,
            form: ProductForm::default(),
            draft: None,
            upload: UploadState::Idle,
            placeholder_image,
        }
    }

    /// Active tab.
    #[must_use]
    pub const fn tab(&self) -> AdminTab {
        self.tab
    }

    /// Switches tabs.
    pub fn set_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
    }

    /// Current form values.
    #[must_use]
    pub const fn form(&self) -> &ProductForm {
        &self.form
    }

    /// Edit in progress, if any.
    #[must_use]
    pub const fn draft(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    /// Upload area state.
    #[must_use]
    pub const fn upload(&self) -> &UploadState {
        &self.upload
    }

    /// True while an OCR recognition is running.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self.upload, UploadState::Processing)
    }

    fn new_product(&self, id: String, now: DateTime<Utc>) -> ProductModel {
        ProductModel {
            id,
            currency: DEFAULT_CURRENCY.to_string(),
            stock_count: 0,
            short_description: DEFAULT_DESCRIPTION.to_string(),
            specs: Specs {
                output_voltage: DEFAULT_OUTPUT_VOLTAGE.to_string(),
                inverter_type: DEFAULT_INVERTER.to_string(),
                ports: DEFAULT_PORTS.iter().map(|p| (*p).to_string()).collect(),
                ..Specs::default()
            },
            delivery_options: DeliveryOptions::all(),
            images: vec![self.placeholder_image.clone()],
            created_at: Some(now),
            ..ProductModel::default()
        }
    }

    /// Submits `form`: commits the pending edit, or creates a new product.
    ///
    /// On success the form is cleared and the manage tab is shown. When the
    /// drafted product no longer exists (deleted or replaced by an import in the
    /// meantime) the submission creates a new product instead.
    ///
    /// # Errors
    /// Returns [`Error::MissingField`] or [`Error::InvalidField`] when the form
    /// does not validate; the catalog, form and draft are then unchanged.
    pub fn submit(
        &mut self,
        catalog: &mut CatalogStore,
        form: ProductForm,
        now: DateTime<Utc>,
    ) -> Result<SubmitOutcome> {
        let validated = match form.validate() {
            Ok(validated) => validated,
            Err(e) => {
                self.form = form;
                return Err(e);
            }
        };

        let original = self
            .draft
            .take()
            .and_then(|draft| catalog.get(&draft.original_id).cloned());

        let outcome = if let Some(mut product) = original {
            validated.apply_to(&mut product);
            let id = product.id.clone();
            catalog.replace(product);
            info!("Updated product {id}");
            SubmitOutcome::Updated { id }
        } else {
            let id = fresh_product_id(catalog, now);
            let mut product = self.new_product(id.clone(), now);
            validated.apply_to(&mut product);
            catalog.push(product);
            info!("Created product {id}");
            SubmitOutcome::Created { id }
        };

        self.form = ProductForm::default();
        self.tab = AdminTab::Manage;
        Ok(outcome)
    }

    /// Loads product `id` into the form and starts a draft.
    ///
    /// Returns false, changing nothing, when `id` is stale.
    pub fn begin_edit(&mut self, catalog: &CatalogStore, id: &str) -> bool {
        let Some(product) = catalog.get(id) else {
            return false;
        };
        self.form = ProductForm::from_product(product);
        self.draft = Some(EditDraft {
            original_id: id.to_string(),
        });
        self.tab = AdminTab::Upload;
        info!("Editing product {id}");
        true
    }

    /// Abandons the draft; the original product is untouched.
    pub fn cancel_edit(&mut self) {
        if let Some(draft) = self.draft.take() {
            info!("Abandoned edit of product {}", draft.original_id);
        }
        self.form = ProductForm::default();
    }

    /// Removes product `id` when `confirmed`.
    ///
    /// Returns true when a product was removed. Unconfirmed requests and stale
    /// ids change nothing.
    pub fn delete(&mut self, catalog: &mut CatalogStore, id: &str, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        if !catalog.remove(id) {
            return false;
        }
        if self.draft.as_ref().is_some_and(|d| d.original_id == id) {
            self.cancel_edit();
        }
        self.tab = AdminTab::Manage;
        info!("Deleted product {id}");
        true
    }

    /// Serialises the whole catalog as a pretty-printed JSON download.
    ///
    /// # Errors
    /// Returns [`Error::Json`] if serialisation fails.
    pub fn export(&self, catalog: &CatalogStore, file_name: &str) -> Result<CatalogExport> {
        let body = serde_json::to_string_pretty(catalog.products())?;
        info!("Exported {} products", catalog.len());
        Ok(CatalogExport {
            file_name: file_name.to_string(),
            content_type: JSON_CONTENT_TYPE,
            body,
        })
    }

    /// Replaces the whole catalog with the products in `document`.
    ///
    /// The document is parsed before anything changes; a pending draft is
    /// discarded. Returns the number of imported products.
    ///
    /// # Errors
    /// Returns [`Error::Import`] when `document` is not a catalog array; the
    /// catalog is then unchanged.
    pub fn import(&mut self, catalog: &mut CatalogStore, document: &str) -> Result<usize> {
        let products: Vec<ProductModel> = serde_json::from_str(document).map_err(|e| {
            warn!("Rejected catalog import: {e}");
            Error::Import {
                message: e.to_string(),
            }
        })?;
        let count = products.len();
        catalog.replace_all(products);
        if self.draft.is_some() {
            self.cancel_edit();
        }
        self.tab = AdminTab::Manage;
        info!("Imported {count} products");
        Ok(count)
    }

    /// Marks a recognition as started.
    ///
    /// # Errors
    /// Returns [`Error::OcrBusy`] when one is already running.
    pub fn begin_ocr(&mut self) -> Result<()> {
        if self.is_busy() {
            return Err(Error::OcrBusy);
        }
        self.upload = UploadState::Processing;
        self.tab = AdminTab::Upload;
        Ok(())
    }

    /// Records the recognition result; success pre-fills the form's spec fields.
    pub fn finish_ocr(&mut self, result: Result<OcrOutput>) {
        match result {
            Ok(output) => {
                let specs = extract_specs(&output.text, &output.words);
                self.form.apply_extracted(&specs);
                info!(
                    "OCR finished with {} words: {:?}",
                    output.words.len(),
                    specs
                );
                self.upload = UploadState::Ready {
                    text: output.text,
                    specs,
                    words: output.words,
                };
            }
            Err(e) => {
                warn!("OCR Error: {e}");
                let message = match e {
                    Error::Ocr { message } => message,
                    other => other.to_string(),
                };
                self.upload = UploadState::Failed { message };
            }
        }
    }

    /// Returns the upload area to its idle state ("Try Again").
    ///
    /// Ignored while a recognition is running.
    pub fn reset_upload(&mut self) {
        if !self.is_busy() {
            self.upload = UploadState::Idle;
        }
    }
}
