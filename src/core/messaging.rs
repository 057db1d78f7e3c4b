//! Messaging composer - Builds the deep link that opens a pre-filled chat.
//!
//! Every outgoing message, whatever template produced it, goes through
//! [`MessagingComposer::compose`]: markup is stripped, the text is bounded to the
//! configured length and percent-encoded into the destination URL.

use crate::{
    config::MessagingConfig,
    core::{notice::Notice, render::group_thousands},
    entities::ProductModel,
    errors::{Error, Result},
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info};

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("invalid markup tag pattern"));

/// Characters left unescaped in a query component, as browsers' `encodeURIComponent`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const ELLIPSIS: &str = "...";

/// Default customer name used by the storefront forms; never echoed into messages.
pub const ANONYMOUS_CUSTOMER: &str = "Customer";

/// Message that opens the floating contact button.
pub const CONTACT_GREETING: &str = "Hello, I want to learn about DEETREM Power Stations.";

/// A sanitised message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sanitized {
    /// Text that will be sent
    pub text: String,
    /// True when the text was cut to the length limit
    pub truncated: bool,
}

/// A ready-to-open deep link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposeIntent {
    /// Destination URL with the encoded message in its query
    pub url: String,
    /// The sanitised message carried by `url`
    pub message: String,
    /// Side-channel notices; truncation appears at most once
    pub notices: Vec<Notice>,
}

/// Optional contact details appended to product messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerContact {
    /// Customer name; blank or `"Customer"` is not appended
    pub name: String,
    /// Customer phone; blank is not appended
    pub phone: String,
}

impl CustomerContact {
    /// Builds contact details from optional form values.
    #[must_use]
    pub fn new(name: Option<&str>, phone: Option<&str>) -> Self {
        Self {
            name: name.unwrap_or_default().to_string(),
            phone: phone.unwrap_or_default().to_string(),
        }
    }

    fn append_to(&self, message: &mut String) {
        if !self.name.is_empty() && self.name != ANONYMOUS_CUSTOMER {
            message.push_str(" Name: ");
            message.push_str(&self.name);
        }
        if !self.phone.is_empty() {
            message.push_str(" Phone: ");
            message.push_str(&self.phone);
        }
    }
}

/// The pre-written product messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageTemplate {
    /// Availability, price and delivery time
    Availability,
    /// The product with its solar panel bundle
    SolarBundle,
    /// Purchase of one unit with a delivery address placeholder
    Purchase,
}

impl MessageTemplate {
    /// Looks a template up by its 1-based button number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Availability),
            2 => Some(Self::SolarBundle),
            3 => Some(Self::Purchase),
            _ => None,
        }
    }

    /// 1-based button number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Availability => 1,
            Self::SolarBundle => 2,
            Self::Purchase => 3,
        }
    }

    /// All templates in button order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Availability, Self::SolarBundle, Self::Purchase]
    }

    /// Template text for `product`.
    #[must_use]
    pub fn render(self, product: &ProductModel) -> String {
        let model = &product.model;
        match self {
            Self::Availability => format!(
                "Hi, I'm interested in the DEETREM {model}. Is it available? Price and delivery time?"
            ),
            Self::SolarBundle => format!(
                "Hello, I want the DEETREM {model} with {}x{} panels. What are the payment options?",
                product.specs.solar_panel_count, product.specs.each_panel_watt
            ),
            Self::Purchase => format!(
                "Hi, I'd like to buy 1 × {model}. My delivery address: [Your Address]. How do I pay?"
            ),
        }
    }
}

/// Fields of the general inquiry form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneralInquiry {
    /// Customer name
    pub name: String,
    /// Customer phone
    pub phone: String,
    /// Product of interest, free text
    pub product: String,
    /// Inquiry body
    pub message: String,
}

/// Removes tags and bounds the message to `max_length` characters.
///
/// Over-long text keeps its first `max_length - 3` characters followed by `...`.
/// Limits below three leave only as much of the ellipsis as fits.
#[must_use]
pub fn sanitize(message: &str, max_length: usize) -> Sanitized {
    let stripped = MARKUP_TAG.replace_all(message, "");
    if stripped.chars().count() <= max_length {
        return Sanitized {
            text: stripped.into_owned(),
            truncated: false,
        };
    }

    let keep = max_length.saturating_sub(ELLIPSIS.len());
    let mut text: String = stripped.chars().take(keep).collect();
    text.push_str(&ELLIPSIS[..ELLIPSIS.len().min(max_length)]);
    Sanitized {
        text,
        truncated: true,
    }
}

/// Percent-encodes `text` for a URL query component.
#[must_use]
pub fn encode_query_component(text: &str) -> String {
    utf8_percent_encode(text, QUERY_COMPONENT).to_string()
}

/// Quick-request text used by the card button.
#[must_use]
pub fn quick_request_message(product: &ProductModel) -> String {
    format!(
        "Hi, I'm interested in the DEETREM {}. Is it available? Price: NGN {}.",
        product.model,
        group_thousands(product.price_ngn)
    )
}

/// Template text with the customer's contact details appended.
#[must_use]
pub fn template_message(
    product: &ProductModel,
    template: MessageTemplate,
    contact: &CustomerContact,
) -> String {
    let mut message = template.render(product);
    contact.append_to(&mut message);
    message
}

/// Customer-authored text about `product` with contact details appended.
///
/// # Errors
/// Returns [`Error::EmptyMessage`] when `body` is blank.
pub fn custom_message(
    product: &ProductModel,
    body: &str,
    contact: &CustomerContact,
) -> Result<String> {
    if body.trim().is_empty() {
        return Err(Error::EmptyMessage);
    }
    let mut message = format!("Regarding DEETREM {}: {body}", product.model);
    contact.append_to(&mut message);
    Ok(message)
}

/// Text of the general inquiry form.
#[must_use]
pub fn inquiry_message(inquiry: &GeneralInquiry) -> String {
    let mut message = format!("New Inquiry: {}", inquiry.message);
    if !inquiry.product.is_empty() {
        message.push_str(&format!(" (Product: {})", inquiry.product));
    }
    if !inquiry.name.is_empty() {
        message.push_str(&format!(" - Name: {}", inquiry.name));
    }
    if !inquiry.phone.is_empty() {
        message.push_str(&format!(" - Phone: {}", inquiry.phone));
    }
    message
}

/// Turns messages into deep links to the fixed destination.
#[derive(Clone, Debug)]
pub struct MessagingComposer {
    base_url: String,
    destination: String,
    max_length: usize,
}

impl MessagingComposer {
    /// Creates a composer from the `[messaging]` settings.
    #[must_use]
    pub fn new(config: &MessagingConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            destination: config.destination.clone(),
            max_length: config.max_length,
        }
    }

    /// Sanitises `message` and builds the deep link.
    #[must_use]
    pub fn compose(&self, message: &str) -> ComposeIntent {
        let sanitized = sanitize(message, self.max_length);
        let mut notices = Vec::new();
        if sanitized.truncated {
            info!("Outgoing message truncated to {} characters", self.max_length);
            notices.push(Notice::Truncated {
                limit: self.max_length,
            });
        }
        notices.push(Notice::MessageSent);

        let url = format!(
            "{}/{}?text={}",
            self.base_url,
            self.destination,
            encode_query_component(&sanitized.text)
        );
        debug!(
            "Composed deep link ({} chars message)",
            sanitized.text.chars().count()
        );

        ComposeIntent {
            url,
            message: sanitized.text,
            notices,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::defaults::default_products;

    fn composer() -> MessagingComposer {
        MessagingComposer::new(&MessagingConfig::default())
    }

    fn dt1000() -> ProductModel {
        default_products()
            .into_iter()
            .find(|p| p.id == "dt-1000")
            .unwrap()
    }

    #[test]
    fn test_sanitize_strips_tags() {
        let result = sanitize("Hi <b>there</b><script>x</script>!", 600);
        assert_eq!(result.text, "Hi therex!");
        assert!(!result.truncated);
    }

    #[test]
    fn test_sanitize_truncates_to_exact_limit() {
        let long = "a".repeat(601);
        let result = sanitize(&long, 600);
        assert!(result.truncated);
        assert_eq!(result.text.chars().count(), 600);
        assert!(result.text.ends_with("..."));
        assert_eq!(&result.text[..597], "a".repeat(597));

        let exact = "b".repeat(600);
        assert!(!sanitize(&exact, 600).truncated);
    }

    #[test]
    fn test_tiny_limits_never_exceed_max_length() {
        for max_length in 0..=3 {
            let result = sanitize("hello", max_length);
            assert!(result.truncated);
            assert_eq!(result.text.chars().count(), max_length);
        }
        assert_eq!(sanitize("hello", 2).text, "..");
        assert_eq!(sanitize("hello", 0).text, "");
        assert_eq!(sanitize("hello", 4).text, "h...");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let long = "₦".repeat(700);
        let result = sanitize(&long, 600);
        assert_eq!(result.text.chars().count(), 600);
    }

    #[test]
    fn test_truncation_notice_fires_once() {
        let intent = composer().compose(&"x".repeat(5000));
        let truncations = intent
            .notices
            .iter()
            .filter(|n| matches!(n, Notice::Truncated { .. }))
            .count();
        assert_eq!(truncations, 1);
        assert_eq!(intent.message.chars().count(), 600);
        assert_eq!(
            intent.notices[0].to_string(),
            "Message was truncated to 600 characters."
        );
    }

    #[test]
    fn test_short_message_has_no_truncation_notice() {
        let intent = composer().compose("hello");
        assert_eq!(intent.notices, vec![Notice::MessageSent]);
    }

    #[test]
    fn test_deep_link_encoding() {
        let intent = composer().compose("Hi, I'd like 1 × DT-500 (now)!");
        assert_eq!(
            intent.url,
            "https://wa.me/2348112023440?text=Hi%2C%20I'd%20like%201%20%C3%97%20DT-500%20(now)!"
        );
    }

    #[test]
    fn test_templates() {
        let product = dt1000();
        assert_eq!(
            MessageTemplate::Availability.render(&product),
            "Hi, I'm interested in the DEETREM DT-1000. Is it available? Price and delivery time?"
        );
        assert_eq!(
            MessageTemplate::SolarBundle.render(&product),
            "Hello, I want the DEETREM DT-1000 with 2x200 panels. What are the payment options?"
        );
        assert_eq!(
            MessageTemplate::Purchase.render(&product),
            "Hi, I'd like to buy 1 × DT-1000. My delivery address: [Your Address]. How do I pay?"
        );
        assert_eq!(MessageTemplate::from_number(4), None);
        for template in MessageTemplate::all() {
            assert_eq!(
                MessageTemplate::from_number(template.number()),
                Some(template)
            );
        }
    }

    #[test]
    fn test_contact_suffix_rules() {
        let product = dt1000();
        let anonymous = CustomerContact::new(Some("Customer"), Some(""));
        assert_eq!(
            template_message(&product, MessageTemplate::Availability, &anonymous),
            MessageTemplate::Availability.render(&product)
        );

        let named = CustomerContact::new(Some("Ada"), Some("0803"));
        assert!(
            template_message(&product, MessageTemplate::Purchase, &named)
                .ends_with("How do I pay? Name: Ada Phone: 0803")
        );
    }

    #[test]
    fn test_custom_message() {
        let product = dt1000();
        let contact = CustomerContact::new(None, Some("0803"));
        assert_eq!(
            custom_message(&product, "Do you deliver to Abuja?", &contact).unwrap(),
            "Regarding DEETREM DT-1000: Do you deliver to Abuja? Phone: 0803"
        );
        assert!(matches!(
            custom_message(&product, "   ", &contact),
            Err(Error::EmptyMessage)
        ));
    }

    #[test]
    fn test_quick_request_groups_price() {
        assert_eq!(
            quick_request_message(&dt1000()),
            "Hi, I'm interested in the DEETREM DT-1000. Is it available? Price: NGN 280,000."
        );
    }

    #[test]
    fn test_inquiry_message() {
        let inquiry = GeneralInquiry {
            name: "Ada".to_string(),
            phone: String::new(),
            product: "DT-700".to_string(),
            message: "Bulk order?".to_string(),
        };
        assert_eq!(
            inquiry_message(&inquiry),
            "New Inquiry: Bulk order? (Product: DT-700) - Name: Ada"
        );
    }
}
