/// Cross-Corpus Comparison Demo
///
/// Runs one query against several corpora:
/// - per-corpus frequencies, the data behind a comparison chart
/// - a parallel batch run flattened into CSV rows

use kwic::core::concordancer::Concordancer;
use kwic::corpus::frequency::compare_frequencies;
use kwic::corpus::provider::{InMemoryProvider, TextProvider};
use kwic::export;
use kwic::parallel::batch::{rows, BatchConcordancer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("\n=== cross-corpus comparison demo ===\n");

    let provider = InMemoryProvider::new()
        .with_text(
            "othello",
            "O, beware, my lord, of jealousy! Think'st thou I'd make a life of \
             jealousy, to follow still the changes of the moon with fresh \
             suspicions? Trifles light as air are to the jealous confirmations \
             strong as proofs of holy writ.",
        )
        .with_text(
            "king_lear",
            "Nothing will come of nothing: speak again. How sharper than a \
             serpent's tooth it is to have a thankless child!",
        )
        .with_text(
            "romeo_and_juliet",
            "But, soft! what light through yonder window breaks? It is the east, \
             and Juliet is the sun.",
        );

    let kwic = Concordancer::default();
    let names = provider.names();

    // Frequency comparison, one point per corpus
    println!("frequency of 'jealousy' per corpus:");
    let points = compare_frequencies(&kwic, &provider, &names, "jealousy")?;
    for point in &points {
        println!("  {:<18} {}", point.corpus, point.count);
    }
    println!();

    // Batch concordance over every corpus, flattened for tabular export
    println!("batch concordance of 'the':");
    let batch = BatchConcordancer::with_default_workers();
    let entries = batch.run_from_provider(&kwic, &provider, &names, "the", 50, 5)?;
    for entry in &entries {
        println!("  {}: {} occurrence(s)", entry.source, entry.result.total_count);
    }
    println!();

    println!("--- csv ---\n{}", export::rows_to_csv(&rows(&entries)));

    Ok(())
}
