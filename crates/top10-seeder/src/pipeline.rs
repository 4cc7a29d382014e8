//! Seeding orchestrator
//!
//! Walks the catalog in order and, for each place, resolves a title, pulls the
//! summary, downloads the hero image and builds the record. Destinations are
//! processed one after another; the seed script is emitted once at the end.
//! A fatal stage stops the walk before anything is written.

use crate::catalog::Catalog;
use crate::config::SeederConfig;
use crate::error::{Result, SeedError};
use crate::fetcher::Fetcher;
use crate::images::ImageMaterializer;
use crate::record::{hero_filename, split_place, RecordBuilder};
use crate::seed::{render_script, SeedEmitter, SeedOutcome};
use crate::stage::{Stage, StageOutcome};
use crate::store;
use crate::wiki::{SummaryExtractor, TitleResolver};
use sqlx::SqlitePool;
use std::time::Instant;
use top10_common::DestinationRecord;
use tracing::{debug, info, info_span, Instrument};

pub struct Pipeline {
    catalog: Catalog,
    resolver: TitleResolver,
    extractor: SummaryExtractor,
    materializer: ImageMaterializer,
    builder: RecordBuilder,
    emitter: SeedEmitter,
    fetch_images: bool,
}

impl Pipeline {
    pub fn new(
        catalog: Catalog,
        resolver: TitleResolver,
        extractor: SummaryExtractor,
        materializer: ImageMaterializer,
        emitter: SeedEmitter,
    ) -> Self {
        let builder = RecordBuilder::new(catalog.defaults.clone());
        Self {
            catalog,
            resolver,
            extractor,
            materializer,
            builder,
            emitter,
            fetch_images: true,
        }
    }

    /// Wire every stage from one configuration. No store is attached.
    pub fn from_config(config: &SeederConfig) -> Result<Self> {
        config.validate().map_err(SeedError::config)?;

        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin(),
        };
        catalog.validate()?;

        let fetcher = Fetcher::new(config)?;

        Ok(Self::new(
            catalog,
            TitleResolver::new(fetcher.clone(), config.search_url.as_str()),
            SummaryExtractor::new(fetcher.clone(), config.summary_url.as_str()),
            ImageMaterializer::new(fetcher, &config.image_dir),
            SeedEmitter::new(&config.script_path),
        ))
    }

    /// [`Pipeline::from_config`] plus a pool on `config.database_url`
    pub async fn connect(config: &SeederConfig) -> Result<Self> {
        let pipeline = Self::from_config(config)?;
        let pool = store::connect(&config.database_url).await?;
        Ok(pipeline.with_store(pool))
    }

    pub fn with_store(mut self, pool: SqlitePool) -> Self {
        self.emitter = SeedEmitter::new(self.emitter.script_path()).with_store(pool);
        self
    }

    /// Leave hero images alone; records still get their `hero_image` name
    pub fn without_images(mut self) -> Self {
        self.fetch_images = false;
        self
    }

    /// Run every stage for a single place
    pub async fn process(&self, id: i64, place: &str) -> Result<DestinationRecord> {
        let resolved = self.resolver.resolve(place).await;
        let resolved = StageOutcome::from_result(Stage::ResolveTitle, resolved)
            .into_result()
            .map_err(|e| SeedError::fetch(place, e))?
            .flatten();
        let title = resolved.unwrap_or_else(|| place.to_string());
        debug!(title = %title, "Title resolved");

        let summary = self.extractor.summarize(&title).await;

        let (name, _) = split_place(place);
        let image = if self.fetch_images {
            let thumbnail = summary.as_ref().and_then(|s| s.thumbnail_url.as_deref());
            self.materializer.materialize(thumbnail, &hero_filename(&name)).await
        } else {
            StageOutcome::Skipped("images disabled")
        };
        debug!(status = image.status(), "Image stage finished");

        let record = self.builder.build(place, summary.as_ref(), id);
        info!(name = %record.name, region = %record.region, "Record built");
        Ok(record)
    }

    /// One record per catalog place, ids starting at 1, in catalog order.
    ///
    /// Places are processed one at a time; the first fatal error ends the
    /// walk and later places are never fetched.
    pub async fn collect_records(&self) -> Result<Vec<DestinationRecord>> {
        let mut records = Vec::with_capacity(self.catalog.len());

        for (index, place) in self.catalog.places.iter().enumerate() {
            let id = index as i64 + 1;
            let span = info_span!("destination", id, place = %place);
            records.push(self.process(id, place).instrument(span).await?);
        }

        Ok(records)
    }

    /// Seed script for the current catalog, without writing anything
    pub async fn render(&self) -> Result<String> {
        let records = self.collect_records().await?;
        Ok(render_script(&records))
    }

    /// Full run: build every record, then emit and apply the script once
    pub async fn run(&self) -> Result<SeedOutcome> {
        let started = Instant::now();
        info!(places = self.catalog.len(), "Seeding run started");

        let records = self.collect_records().await?;
        let outcome = self.emitter.emit(&records).await?;

        info!(
            records = outcome.records,
            applied = outcome.applied,
            script = %outcome.script_path.display(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Seeding run complete"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send<T: Send>(_: T) {}

    #[test]
    fn test_run_future_is_send() {
        let pipeline = Pipeline::from_config(&SeederConfig::default()).unwrap();
        assert_send(pipeline.run());
        assert_send(pipeline.render());
    }

    #[test]
    fn test_unreadable_catalog_is_rejected() {
        let config = SeederConfig::builder()
            .catalog_path("/nonexistent/catalog.json")
            .build();
        assert!(matches!(Pipeline::from_config(&config), Err(SeedError::Io(_))));
    }
}
