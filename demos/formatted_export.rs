//! Export formatted records for a date range.
//!
//! ```sh
//! cargo run --example formatted_export -- cpf 2024-01-01 2024-01-31
//! ```

use chrono::NaiveDate;
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
    let start_date = args.next().map(|d| d.parse::<NaiveDate>()).transpose()?;
    let end_date = args.next().map(|d| d.parse::<NaiveDate>()).transpose()?;

    let config = ClientConfig::from_env()?;
    let client = NeuronLabApiClient::from_config(&config)?;

    let records = client
        .fetch_formatted(FormattedExportParams {
            document_type,
            start_date,
            end_date,
        })
        .await?;

    println!("{} record(s)", records.len());
    for record in &records {
        println!("{}", serde_json::to_string(record)?);
    }

    Ok(())
}
