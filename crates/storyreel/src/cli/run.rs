//! Command handlers.

use crate::cli::Commands;
use std::path::Path;
use std::sync::Arc;
use storyreel::{
    FileSystemStorage, OpenAiClient, StoryService, StorySetup, StoryreelConfig, serve,
};
use tracing::{debug, info};

/// Build the story service from configuration.
pub fn build_service(config: &StoryreelConfig) -> Result<StoryService, Box<dyn std::error::Error>> {
    let store = Arc::new(FileSystemStorage::new(&config.storage.root)?);
    let client = Arc::new(OpenAiClient::new(config.model_config())?);
    info!(root = %config.storage.root.display(), "Using data root");
    Ok(StoryService::new(store, client, config.slides.clone()))
}

/// Parse a story setup given inline or as a file path.
pub fn read_setup(setup: &str) -> Result<StorySetup, Box<dyn std::error::Error>> {
    let trimmed = setup.trim_start();
    let text = if trimmed.starts_with('{') {
        setup.to_string()
    } else {
        debug!(path = %setup, "Reading story setup file");
        std::fs::read_to_string(Path::new(setup))?
    };
    Ok(serde_json::from_str(&text)?)
}

/// Execute one command.
pub async fn run_command(
    command: Commands,
    config: StoryreelConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let service = build_service(&config)?;

    match command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            serve(&bind, Arc::new(service)).await?;
        }

        Commands::New { setup } => {
            let filename = service.create_story(read_setup(&setup)?).await?;
            println!("{}", filename);
        }

        Commands::Continue { filename, prompt } => {
            let generated = service
                .generate_chapter(&filename, prompt.as_deref())
                .await?;
            println!("Chapter {}\n", generated.chapter_number());
            println!("{}\n", generated.content());
            println!("Summary: {}", generated.summary());
        }

        Commands::Show { filename } => {
            let story = service.get_story(&filename).await?;
            println!("{}", serde_json::to_string_pretty(&story)?);
        }

        Commands::List => {
            for filename in service.list_stories().await? {
                println!("{}", filename);
            }
        }

        Commands::Slides { filename, chapter } => {
            for path in service.generate_slides(&filename, chapter).await? {
                println!("{}", config.storage.root.join(&path).display());
            }
        }
    }

    Ok(())
}
