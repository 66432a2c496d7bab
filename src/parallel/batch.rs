use rayon::prelude::*;
use serde::{Serialize, Deserialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use crate::concordance::results::ConcordanceResult;
use crate::core::concordancer::Concordancer;
use crate::core::error::Result;
use crate::corpus::provider::TextProvider;

/// Concordance of one corpus within a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    pub source: String,
    pub result: ConcordanceResult,
}

/// One exported table row: a single concordance line from a single source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRow {
    pub source: String,
    pub query: String,
    pub line: String,
}

/// Multi-corpus concordance runner.
pub struct BatchConcordancer {
    pub workers: usize,
    pub progress: Arc<AtomicUsize>,
}

impl BatchConcordancer {
    pub fn new(workers: usize) -> Self {
        // Set number of threads for rayon
        rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build_global()
            .ok();

        BatchConcordancer {
            workers,
            progress: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_default_workers() -> Self {
        BatchConcordancer::new(num_cpus::get())
    }

    /// Sources processed so far in the current run
    pub fn get_progress(&self) -> usize {
        self.progress.load(Ordering::Relaxed)
    }

    /// Run one query against every (name, text) pair. Entries come back in
    /// input order; a single invalid source fails the whole batch.
    pub fn run(
        &self,
        concordancer: &Concordancer,
        sources: &[(String, String)],
        query: &str,
        width: usize,
        max_lines: usize,
    ) -> Result<Vec<BatchEntry>> {
        self.progress.store(0, Ordering::Relaxed);
        let total = sources.len();

        let entries: Vec<Result<BatchEntry>> = sources
            .par_iter()
            .map(|(name, text)| {
                let result = concordancer.concordance_with(text, query, width, max_lines)?;
                let done = self.progress.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::debug!("batch progress: {}/{} ({})", done, total, name);
                Ok(BatchEntry {
                    source: name.clone(),
                    result,
                })
            })
            .collect();

        entries.into_iter().collect()
    }

    /// Fetch the named texts from a provider, then run.
    pub fn run_from_provider(
        &self,
        concordancer: &Concordancer,
        provider: &dyn TextProvider,
        names: &[String],
        query: &str,
        width: usize,
        max_lines: usize,
    ) -> Result<Vec<BatchEntry>> {
        let sources: Vec<(String, String)> = names
            .iter()
            .map(|name| Ok((name.clone(), provider.fetch(name)?)))
            .collect::<Result<_>>()?;

        self.run(concordancer, &sources, query, width, max_lines)
    }
}

/// Flatten batch entries into one row per concordance line, preserving
/// entry order. This is the shape tabular exports consume.
pub fn rows(entries: &[BatchEntry]) -> Vec<BatchRow> {
    entries
        .iter()
        .flat_map(|entry| {
            let query = entry.result.query.join(" ");
            entry.result.lines.iter().map(move |line| BatchRow {
                source: entry.source.clone(),
                query: query.clone(),
                line: line.line.clone(),
            })
        })
        .collect()
}
