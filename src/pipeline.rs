// src/pipeline.rs
//! Pipeline capability traits: the three stages of publishing moments.
//!
//! Each trait describes a single capability, enabling testing each stage in isolation.

use crate::error::AppError;
use crate::model::Page;
use crate::output::OutputReport;
use crate::processor::MomentDocument;

/// Lists the database rows selected for publishing.
#[async_trait::async_trait]
pub trait MomentSource {
    async fn published_pages(&self) -> Result<Vec<Page>, AppError>;
}

/// Turns one row into a rendered moment.
#[async_trait::async_trait]
pub trait MomentComposer {
    async fn compose(&self, page: &Page) -> Result<MomentDocument, AppError>;
}

/// Writes rendered moments to their destination.
pub trait MomentDelivery {
    /// Makes the destination ready; runs before anything is fetched.
    fn prepare(&self) -> Result<(), AppError>;

    fn deliver(&self, document: &MomentDocument) -> Result<OutputReport, AppError>;
}

/// Runs one publishing pass: prepare the destination, list the rows, then
/// compose and deliver them one at a time. The first failure ends the pass.
///
/// Returns the number of files written.
pub async fn publish_moments<P>(pipeline: &P) -> Result<usize, AppError>
where
    P: MomentSource + MomentComposer + MomentDelivery + Sync,
{
    pipeline.prepare()?;

    let pages = pipeline.published_pages().await?;
    println!("total num of pages: {}", pages.len());

    let mut written = 0;
    for page in &pages {
        let document = pipeline.compose(page).await?;
        written += pipeline.deliver(&document)?.written_files().count();
    }

    Ok(written)
}
