//! Spec extractor - Turns OCR output into a best-effort specification guess.
//!
//! Every rule runs on every call; a missing value is zero or `None`, never an
//! error. Rules, in order:
//!
//! 1. battery capacity from the first `<n> Wh` (also `Whr`, `W•h`)
//! 2. AC output from the first `<n> W` (optionally `AC`/`output`); this also
//!    matches a `Wh` figure when it comes first in the text
//! 3. panel configuration from the first `<n> x <m> W`, else from the phrases
//!    "2 solar"/"2 panels"/"two panels" (2 × 200 W) or "1 solar"/"1 panel"/"one panel" (1 × 200 W)
//! 4. charge controller derived from the panel count: 2 ⇒ 50A, 1 ⇒ 40A, otherwise none
//! 5. when rule 1 found nothing, capacity = first `<n> Ah` × first `<n> V`

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static BATTERY_WH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*(?:Wh|Whr|W•h)").expect("invalid battery capacity pattern")
});

static AC_OUTPUT_W: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*(?:W|Watt|Watts)(?:\s*AC|\s*output)?")
        .expect("invalid AC output pattern")
});

static PANEL_CONFIG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*x\s*([0-9]+)\s*W").expect("invalid panel configuration pattern")
});

static AMP_HOURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\s*Ah").expect("invalid amp-hour pattern"));

static VOLTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\s*V").expect("invalid voltage pattern"));

const TWO_PANEL_PHRASES: [&str; 3] = ["2 solar", "2 panels", "two panels"];
const ONE_PANEL_PHRASES: [&str; 3] = ["1 solar", "1 panel", "one panel"];
const ASSUMED_PANEL_WATT: u32 = 200;

/// Word box normalised to the page, in percent (0–100).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x0: f64,
    /// Top edge
    pub y0: f64,
    /// Right edge
    pub x1: f64,
    /// Bottom edge
    pub y1: f64,
}

impl BoundingBox {
    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// One recognised word.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrWord {
    /// Recognised characters
    pub text: String,
    /// Location on the page
    pub bbox: BoundingBox,
}

/// Specification fields the extractor can guess.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedSpecs {
    /// Battery capacity in Wh, 0 when not found
    pub battery_capacity_wh: u32,
    /// AC output in W, 0 when not found
    pub ac_output_watts: u32,
    /// Panel count, 0 when not found
    pub solar_panel_count: u32,
    /// Per-panel wattage, 0 when not found
    pub each_panel_watt: u32,
    /// Derived from the panel count
    pub charge_controller: Option<String>,
}

/// Digits only reach here; anything too long for `u32` saturates.
fn capture_u32(caps: &regex::Captures<'_>, group: usize) -> u32 {
    caps.get(group)
        .map_or(0, |m| m.as_str().parse().unwrap_or(u32::MAX))
}

fn first_number(pattern: &Regex, text: &str) -> Option<u32> {
    pattern.captures(text).map(|caps| capture_u32(&caps, 1))
}

fn panel_configuration(text: &str) -> (u32, u32) {
    if let Some(caps) = PANEL_CONFIG.captures(text) {
        return (capture_u32(&caps, 1), capture_u32(&caps, 2));
    }
    let lower = text.to_lowercase();
    if TWO_PANEL_PHRASES.iter().any(|p| lower.contains(p)) {
        (2, ASSUMED_PANEL_WATT)
    } else if ONE_PANEL_PHRASES.iter().any(|p| lower.contains(p)) {
        (1, ASSUMED_PANEL_WATT)
    } else {
        (0, 0)
    }
}

/// Charge controller rating implied by a panel count.
#[must_use]
pub fn charge_controller_for(panel_count: u32) -> Option<String> {
    match panel_count {
        2 => Some("50A".to_string()),
        1 => Some("40A".to_string()),
        _ => None,
    }
}

/// Extracts a specification guess from recognised text.
///
/// `words` carries the per-word boxes from the same recognition; the rules
/// work on `text` alone and the boxes are only used for highlighting.
#[must_use]
pub fn extract_specs(text: &str, _words: &[OcrWord]) -> ExtractedSpecs {
    let direct_capacity = first_number(&BATTERY_WH, text);
    let ac_output_watts = first_number(&AC_OUTPUT_W, text).unwrap_or(0);
    let (solar_panel_count, each_panel_watt) = panel_configuration(text);
    let charge_controller = charge_controller_for(solar_panel_count);

    let battery_capacity_wh = direct_capacity.unwrap_or_else(|| {
        match (first_number(&AMP_HOURS, text), first_number(&VOLTS, text)) {
            (Some(amp_hours), Some(volts)) => amp_hours.saturating_mul(volts),
            _ => 0,
        }
    });

    ExtractedSpecs {
        battery_capacity_wh,
        ac_output_watts,
        solar_panel_count,
        each_panel_watt,
        charge_controller,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> ExtractedSpecs {
        extract_specs(text, &[])
    }

    #[test]
    fn test_direct_watt_hours() {
        let specs = extract("Capacity 518 Wh, battery 40Ah 12V");
        assert_eq!(specs.battery_capacity_wh, 518);
    }

    #[test]
    fn test_watt_hour_variants() {
        assert_eq!(extract("1024whr").battery_capacity_wh, 1024);
        assert_eq!(extract("300 W•h").battery_capacity_wh, 300);
        assert_eq!(extract("700 WH LiFePO4").battery_capacity_wh, 700);
    }

    #[test]
    fn test_ac_output_shares_first_watt_figure() {
        // The first "<n> W" is the Wh figure; the ambiguity is kept.
        let specs = extract("500Wh capacity, 300W AC output");
        assert_eq!(specs.battery_capacity_wh, 500);
        assert_eq!(specs.ac_output_watts, 500);

        let specs = extract("Rated 1200 W output, 1000Wh");
        assert_eq!(specs.ac_output_watts, 1200);
        assert_eq!(specs.battery_capacity_wh, 1000);
    }

    #[test]
    fn test_panel_configuration_and_controller() {
        let specs = extract("Bundle: 2 x 200W panels");
        assert_eq!((specs.solar_panel_count, specs.each_panel_watt), (2, 200));
        assert_eq!(specs.charge_controller.as_deref(), Some("50A"));

        let specs = extract("1x100 W mono");
        assert_eq!((specs.solar_panel_count, specs.each_panel_watt), (1, 100));
        assert_eq!(specs.charge_controller.as_deref(), Some("40A"));

        let specs = extract("3 X 150W");
        assert_eq!((specs.solar_panel_count, specs.each_panel_watt), (3, 150));
        assert_eq!(specs.charge_controller, None);

        let specs = extract("0 x 0 W");
        assert_eq!(specs.solar_panel_count, 0);
        assert_eq!(specs.charge_controller, None);
    }

    #[test]
    fn test_panel_phrases() {
        let specs = extract("Comes with Two Panels for off-grid use");
        assert_eq!((specs.solar_panel_count, specs.each_panel_watt), (2, 200));
        assert_eq!(specs.charge_controller.as_deref(), Some("50A"));

        let specs = extract("includes 1 solar kit");
        assert_eq!((specs.solar_panel_count, specs.each_panel_watt), (1, 200));
        assert_eq!(specs.charge_controller.as_deref(), Some("40A"));
    }

    #[test]
    fn test_controller_is_never_scanned() {
        let specs = extract("MPPT controller 60A");
        assert_eq!(specs.solar_panel_count, 0);
        assert_eq!(specs.charge_controller, None);
    }

    #[test]
    fn test_amp_hour_fallback() {
        let specs = extract("LiFePO4 100Ah 12V pack");
        assert_eq!(specs.battery_capacity_wh, 1200);

        // First voltage figure wins, even the fractional tail of "12.8V".
        assert_eq!(extract("100Ah 12.8V").battery_capacity_wh, 800);

        // Only the voltage is present: no capacity.
        assert_eq!(extract("Output 220V").battery_capacity_wh, 0);
    }

    #[test]
    fn test_rules_run_independently() {
        let specs = extract("640Wh 50Ah 12V 600W AC 2 x 100W");
        assert_eq!(specs.battery_capacity_wh, 640);
        assert_eq!(specs.ac_output_watts, 640);
        assert_eq!((specs.solar_panel_count, specs.each_panel_watt), (2, 100));
        assert_eq!(specs.charge_controller.as_deref(), Some("50A"));
    }

    #[test]
    fn test_empty_text_is_all_zero() {
        assert_eq!(extract(""), ExtractedSpecs::default());
        assert_eq!(extract("no numbers here").battery_capacity_wh, 0);
    }

    #[test]
    fn test_oversized_numbers_saturate() {
        let specs = extract("99999999999 Wh");
        assert_eq!(specs.battery_capacity_wh, u32::MAX);
        assert_eq!(extract("99999Ah 99999V").battery_capacity_wh, u32::MAX);
    }

    #[test]
    fn test_bounding_box_extent() {
        let bbox = BoundingBox {
            x0: 10.0,
            y0: 20.0,
            x1: 35.0,
            y1: 30.0,
        };
        assert!((bbox.width() - 25.0).abs() < f64::EPSILON);
        assert!((bbox.height() - 10.0).abs() < f64::EPSILON);
    }
}
