use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ludogen_core::GeneratorConfig;
use ludogen_export::export_dataset;
use ludogen_generate::GenerationEngine;
use ludogen_mongo::{DATABASE_NAME, connect, create_indexes, sample_schema, upload_dataset};
use ludogen_secure::FieldCipher;

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Core(#[from] ludogen_core::Error),
    #[error("crypto error: {0}")]
    Crypto(#[from] ludogen_secure::CryptoError),
    #[error("generation error: {0}")]
    Generation(#[from] ludogen_generate::GenerationError),
    #[error("export error: {0}")]
    Export(#[from] ludogen_export::ExportError),
    #[error("mongodb error: {0}")]
    Mongo(#[from] ludogen_mongo::MongoError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "ludogen",
    version,
    about = "Generate a secure mock video-game dataset, export table files, and optionally upload to MongoDB"
)]
struct Cli {
    /// Directory where generated table files are written.
    #[arg(long, default_value = "secure_output_data")]
    output_dir: PathBuf,
    /// Optional TOML file overriding generation counts and ranges.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the data rng; omit for an entropy-seeded run.
    #[arg(long)]
    seed: Option<u64>,
    /// Drop the MongoDB database before uploading (start fresh).
    #[arg(long)]
    drop_database: bool,
    /// Upload all generated collections to MongoDB.
    #[arg(long)]
    upload: bool,
    /// Skip writing table files (generate in memory only).
    #[arg(long)]
    skip_export: bool,
    /// Do not create MongoDB indexes after uploading.
    #[arg(long)]
    no_indexes: bool,
    /// Documents sampled per collection for the post-upload schema report.
    #[arg(long, default_value_t = 2)]
    schema_sample_size: i64,
    /// Base64-encoded 32-byte symmetric key for field encryption.
    #[arg(long, env = "ENCRYPTION_KEY", hide_env_values = true)]
    encryption_key: String,
    /// MongoDB connection string; required with --upload.
    #[arg(long, env = "MONGO_URI", hide_env_values = true)]
    mongo_uri: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    run(Cli::parse()).await
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // Secrets and connectivity resolve before any generation happens, so a
    // missing key or unreachable database aborts the run up front.
    let cipher = FieldCipher::from_base64_key(&cli.encryption_key)?;
    let config = match &cli.config {
        Some(path) => GeneratorConfig::from_toml_path(path)?,
        None => GeneratorConfig::default(),
    };

    let db = if cli.upload {
        let uri = cli.mongo_uri.as_deref().ok_or_else(|| {
            CliError::InvalidConfig("MONGO_URI must be set when --upload is requested".to_string())
        })?;
        Some(connect(uri, DATABASE_NAME, cli.drop_database).await?)
    } else {
        None
    };

    let engine = GenerationEngine::new(config, cipher)?;
    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };
    let (dataset, report) = engine.run(&mut rng)?;

    if cli.skip_export {
        info!("table export skipped");
    } else {
        let export = export_dataset(&cli.output_dir, &dataset, &report)?;
        info!(
            dir = %cli.output_dir.display(),
            tables = export.tables_written,
            bytes = export.bytes_written,
            "table files written"
        );
    }

    if let Some(db) = db {
        upload_dataset(&db, &dataset).await?;
        if !cli.no_indexes {
            create_indexes(&db).await?;
        }
        for schema in sample_schema(&db, cli.schema_sample_size).await? {
            for (field, types) in &schema.fields {
                info!(
                    collection = %schema.collection,
                    field = %field,
                    types = ?types,
                    "schema sample"
                );
            }
        }
        info!("data uploaded to MongoDB");
    }

    info!("data generation pipeline complete");
    Ok(())
}
