//! Model catalog resolution.
//!
//! Listing failures never propagate: any error, and any listing that yields
//! no generation-capable model, falls back to a fixed list of known-good ids.

use tracing::debug;

use crate::api::{ChatApi, ModelInfo};

/// Preferred ids, listed first in this order when present. Doubles as the
/// fallback list when the remote listing is unavailable.
pub const PREFERRED_MODELS: [&str; 4] = [
    "gemini-2.5-flash",
    "gemini-2.5-flash-lite",
    "gemini-2.5-pro",
    "gemini-flash-latest",
];

pub fn fallback_models() -> Vec<String> {
    PREFERRED_MODELS.iter().map(|id| id.to_string()).collect()
}

/// Filter a listing to generation-capable models and order it: preferred ids
/// first in their fixed order, everything else afterward in listing order.
pub fn order_models(models: &[ModelInfo]) -> Vec<String> {
    let capable: Vec<&str> = models
        .iter()
        .filter(|model| model.supports_generation())
        .map(|model| model.id())
        .collect();

    let mut ordered: Vec<String> = PREFERRED_MODELS
        .iter()
        .filter(|preferred| capable.contains(preferred))
        .map(|id| id.to_string())
        .collect();
    ordered.extend(
        capable
            .iter()
            .filter(|id| !PREFERRED_MODELS.contains(id))
            .map(|id| id.to_string()),
    );
    ordered
}

/// Resolve the selectable model ids. Total: never returns an error and never
/// returns an empty list.
pub async fn resolve_models(api: &dyn ChatApi) -> Vec<String> {
    match api.list_models().await {
        Ok(models) => {
            let ordered = order_models(&models);
            if ordered.is_empty() {
                debug!("model listing had no generation-capable models, using fallback");
                fallback_models()
            } else {
                ordered
            }
        }
        Err(e) => {
            debug!(error = %e, "model listing failed, using fallback");
            fallback_models()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::StubApi;

    fn model(name: &str, methods: &[&str]) -> ModelInfo {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "supportedGenerationMethods": methods,
        }))
        .unwrap()
    }

    #[test]
    fn preferred_ids_come_first_in_fixed_order() {
        let listing = vec![
            model("models/gemini-exp-1206", &["generateContent"]),
            model("models/gemini-2.5-pro", &["generateContent"]),
            model("models/gemini-2.5-flash", &["generateContent"]),
            model("models/gemini-other", &["generateContent"]),
        ];
        let ordered = order_models(&listing);
        assert_eq!(
            ordered,
            vec![
                "gemini-2.5-flash",
                "gemini-2.5-pro",
                "gemini-exp-1206",
                "gemini-other",
            ]
        );
    }

    #[test]
    fn non_generative_models_are_filtered() {
        let listing = vec![
            model("models/embedding-001", &["embedContent"]),
            model("models/gemini-2.5-flash", &["generateContent"]),
        ];
        assert_eq!(order_models(&listing), vec!["gemini-2.5-flash"]);
    }

    #[tokio::test]
    async fn listing_failure_yields_fallback_exactly() {
        let api = StubApi::failing("network down");
        assert_eq!(resolve_models(&api).await, fallback_models());
    }

    #[tokio::test]
    async fn empty_listing_yields_fallback() {
        let api = StubApi::with_models(Vec::new());
        assert_eq!(resolve_models(&api).await, fallback_models());
    }

    #[tokio::test]
    async fn capable_listing_is_ordered() {
        let api = StubApi::with_models(vec![
            model("models/gemini-zebra", &["generateContent"]),
            model("models/gemini-flash-latest", &["generateContent"]),
        ]);
        assert_eq!(
            resolve_models(&api).await,
            vec!["gemini-flash-latest", "gemini-zebra"]
        );
    }
}
