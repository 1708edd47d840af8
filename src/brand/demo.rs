// Demo brand data served when `[seed] demo_data` is enabled.

use serde_json::json;

use super::{AccessibilityTargets, BrandProfile, Tone, Typography};
use crate::guidance::GuidanceInput;

pub const DEMO_BRAND_ID: &str = "acme";

pub fn acme_profile() -> BrandProfile {
    let colors = json!({
        "primary": {"600": "#3366FF", "700": "#254EDB"},
        "neutral": {}
    });

    BrandProfile {
        brand_id: DEMO_BRAND_ID.to_string(),
        typography: Typography {
            scale: ["12", "14", "16", "20", "24"].map(String::from).to_vec(),
            font_family: "Inter".into(),
        },
        colors: colors.as_object().cloned().unwrap_or_default(),
        spacing: vec![4, 8, 12, 16, 24, 32],
        a11y: AccessibilityTargets {
            wcag: "2.2".into(),
            min_contrast: 4.5,
            tap_target: 44,
        },
        tone: Tone {
            style: "confident, concise, friendly".into(),
            do_nots: vec!["jargon".into()],
        },
        token_allowlist: vec!["{brand.*}".into()],
    }
}

pub fn acme_guidance() -> Vec<GuidanceInput> {
    vec![
        GuidanceInput::new(
            "g1",
            DEMO_BRAND_ID,
            "Buttons use primary 600 on light scheme and 700 on hover",
        ),
        GuidanceInput::new(
            "g2",
            DEMO_BRAND_ID,
            "Use Inter typography and spacing scale 4,8,12,16",
        ),
    ]
}
