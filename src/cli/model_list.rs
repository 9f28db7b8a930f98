//! Model listing mode (`-m` with no value).

use std::collections::HashMap;
use std::error::Error;

use crate::api::{ChatApi, GeminiClient};
use crate::auth::Credentials;
use crate::core::catalog::{fallback_models, order_models};

pub async fn list_models(credentials: Credentials) -> Result<(), Box<dyn Error>> {
    let client = GeminiClient::new(credentials);

    println!("🤖 Available Gemini Models");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();

    match client.list_models().await {
        Ok(models) => {
            let display_names: HashMap<String, String> = models
                .iter()
                .filter_map(|model| {
                    model
                        .display_name
                        .clone()
                        .map(|name| (model.id().to_string(), name))
                })
                .collect();

            let ordered = order_models(&models);
            if ordered.is_empty() {
                println!("No generation-capable models found; using the fallback list:");
                println!();
                print_ids(&fallback_models(), &display_names);
            } else {
                println!("Found {} models (preferred first):", ordered.len());
                println!();
                print_ids(&ordered, &display_names);
            }
        }
        Err(e) => {
            eprintln!("⚠️  Model listing failed ({e}); showing the fallback list.");
            println!();
            print_ids(&fallback_models(), &HashMap::new());
        }
    }

    Ok(())
}

fn print_ids(ids: &[String], display_names: &HashMap<String, String>) {
    for id in ids {
        println!("  • {id}");
        if let Some(name) = display_names.get(id) {
            if !name.is_empty() && name != id {
                println!("    Name: {name}");
            }
        }
        println!();
    }
}
