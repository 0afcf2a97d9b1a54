//! Record → display text. Both renderers are total: missing data drops a line, never fails.

use crate::models::{NamedItem, StoreRecord, StrainRecord};

const STAR: &str = "⭐";
const POSITIVE: &str = "👍";
const NEGATIVE: &str = "👎";
const SYMPTOMS: &str = "🏥";
const MAX_STARS: usize = 5;

/// Store features and their glyphs, in display order.
fn store_features(store: &StoreRecord) -> [(bool, &'static str); 5] {
    [
        (store.delivery, "🚚"),
        (store.storefront, "💵"),
        (store.credit_cards, "💳"),
        (store.atm, "🏧"),
        (store.medical, "🏥"),
    ]
}

/// Stars shown for a 0–10 rating: `ceil(rating / 2)`, at most five.
pub fn star_count(rating: f64) -> usize {
    if !rating.is_finite() || rating <= 0.0 {
        return 0;
    }
    ((rating / 2.0).ceil() as usize).min(MAX_STARS)
}

fn join_names(items: &[NamedItem]) -> String {
    items
        .iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders a strain as:
///
/// ```text
/// Blue Dream (Hybrid)
///      ⭐⭐⭐⭐
/// 👍 Happy
/// 👎 Dry Mouth
/// 🏥 Stress
/// https://www.leafly.com/hybrid/blue-dream
/// ```
///
/// The rating, positive, negative and symptom lines are left out when empty.
pub fn format_strain(strain: &StrainRecord) -> String {
    let mut lines = vec![format!("{} ({})", strain.name, strain.category)];

    let stars = STAR.repeat(star_count(strain.rating));
    if !stars.is_empty() {
        lines.push(format!("     {}", stars));
    }

    for (glyph, items) in [
        (POSITIVE, &strain.tags),
        (NEGATIVE, &strain.negative_effects),
        (SYMPTOMS, &strain.symptoms),
    ] {
        let names = join_names(items);
        if !names.is_empty() {
            lines.push(format!("{} {}", glyph, names));
        }
    }

    lines.push(strain.permalink.clone());
    lines.join("\n")
}

/// Renders a store as a fixed five-line card; the feature glyphs go in parentheses after the name.
pub fn format_store(store: &StoreRecord) -> String {
    let glyphs: String = store_features(store)
        .into_iter()
        .filter_map(|(has, glyph)| has.then_some(glyph))
        .collect();

    format!(
        "{} ({})\n{}\n{}\n{}\n{}",
        store.name, glyphs, store.location_label, store.address, store.phone, store.hours
    )
}
