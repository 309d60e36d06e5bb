//! Look up CNPJs or CPFs and print the dataset as JSON.
//!
//! ```sh
//! NEURONLAB_AUTH_TOKEN=... NEURONLAB_URL=https://... \
//!     cargo run --example lookup -- cnpj 11222333000181 19131243000197
//! cargo run --example lookup -- cpf --score 12345678909
//! ```

use neuronlab_sdk::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neuronlab_sdk=info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let document_type: DocumentType = args.next().unwrap_or_else(|| "cnpj".to_string()).parse()?;

    let mut use_score = false;
    let mut documents = Vec::new();
    for arg in args {
        if arg == "--score" {
            use_score = true;
        } else {
            documents.push(arg);
        }
    }

    let config = ClientConfig::from_env()?;
    let client = NeuronLabApiClient::from_config(&config)?;

    let request = DocumentBatchRequest::new(document_type, documents)?;
    let result = if use_score {
        client.with_score_enrichment().fetch_documents(request).await
    } else {
        client.fetch_documents(request).await
    };

    match result {
        Ok(dataset) => {
            println!(
                "{} {}(s) returned",
                dataset.total_documents(document_type).unwrap_or(0),
                document_type
            );
            println!("{}", serde_json::to_string_pretty(&dataset)?);
        }
        Err(err) => {
            eprintln!("Lookup failed ({:?}): {}", err.kind(), err);
            if let Some(payload) = err.payload() {
                eprintln!("  request: {}", payload);
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
