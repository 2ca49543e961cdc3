use anyhow::Result;
use extraction_client::{ClientConfig, ExtractionClient, ExtractionRequest};

/// Extract every URL given on the command line against the configured backend
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = ClientConfig::from_env()?;
    let client = ExtractionClient::new(&config)?;

    let urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        anyhow::bail!("usage: extract_demo <url> [<url> ...]");
    }

    let user_id = std::env::var("EXTRACT_USER_ID").ok();

    for url in urls {
        let mut request = ExtractionRequest::new(&url);
        if let Some(user_id) = &user_id {
            request = request.with_user(user_id);
        }

        match client.extract(request).await {
            Ok(result) => {
                println!("# {}\n({})\n", result.title, result.source_url);
                println!("{}\n", result.content);
            }
            Err(protected) => {
                println!("{url} is protected ({})", protected.protection_type);
                println!("  {protected}");
                if protected.upgrade_required {
                    println!("  Upgrade to {} to read this site.", protected.required_tier);
                }
            }
        }
    }

    Ok(())
}
