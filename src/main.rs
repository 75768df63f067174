// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion2moment::{
    deliver, moment_path, publish_moments, query_published_pages, AppError, CommandLineInput,
    DeliveryTarget, MomentComposer, MomentDelivery, MomentDocument, MomentSource,
    MomentTemplate, NotionHttpClient, OutputPlan, OutputReport, Page, PageProcessor,
    PipelineConfig,
};
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("notion2moment.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(log_level)))
                .build("stdout", Box::new(stdout_appender)),
        )
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(LevelFilter::Debug),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Publishes every selected row into the configured output directory.
async fn execute_pipeline(config: &PipelineConfig) -> Result<(), AppError> {
    let pipeline = NotionToMoment::new(config)?;
    let written = publish_moments(&pipeline).await?;

    log::info!(
        "Published {} moment(s) to {}",
        written,
        config.output_dir.display()
    );
    Ok(())
}

/// Orchestrates listing, rendering and writing of moments.
struct NotionToMoment<'a> {
    config: &'a PipelineConfig,
    client: NotionHttpClient,
    template: MomentTemplate,
}

impl<'a> NotionToMoment<'a> {
    fn new(config: &'a PipelineConfig) -> Result<Self, AppError> {
        Ok(Self {
            config,
            client: NotionHttpClient::new(&config.api_key)?,
            template: MomentTemplate::new()?,
        })
    }
}

fn ensure_delivered(report: OutputReport) -> Result<(), AppError> {
    if report.is_success() {
        Ok(())
    } else {
        Err(AppError::DeliveryFailed {
            failures: report.failed.iter().map(|f| f.error.clone()).collect(),
        })
    }
}

#[async_trait::async_trait]
impl MomentSource for NotionToMoment<'_> {
    async fn published_pages(&self) -> Result<Vec<Page>, AppError> {
        log::info!("Querying published pages of database {}", self.config.database_id);
        query_published_pages(&self.client, &self.config.database_id).await
    }
}

#[async_trait::async_trait]
impl MomentComposer for NotionToMoment<'_> {
    async fn compose(&self, page: &Page) -> Result<MomentDocument, AppError> {
        let processor = PageProcessor::new(page, &self.client)?;
        log::info!(
            "Processing page {} ({})",
            page.id,
            processor.properties().created_time
        );
        processor.process(&self.template).await
    }
}

impl MomentDelivery for NotionToMoment<'_> {
    fn prepare(&self) -> Result<(), AppError> {
        let plan = OutputPlan::new().with_operation(DeliveryTarget::CreateDirectory {
            path: self.config.output_dir.clone(),
        });
        ensure_delivered(deliver(plan)?)
    }

    fn deliver(&self, document: &MomentDocument) -> Result<OutputReport, AppError> {
        let plan = OutputPlan::new().with_operation(DeliveryTarget::WriteFile {
            path: moment_path(&self.config.output_dir, &document.file_name),
            content: document.content.clone(),
        });

        let report = deliver(plan)?;
        ensure_delivered(report.clone())?;
        Ok(report)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = PipelineConfig::resolve(cli)?;

    execute_pipeline(&config).await?;

    Ok(())
}
