/// Basic KWIC Demo
///
/// Walks through the core pipeline on a single text:
/// - tokenize a raw string
/// - build a concordance for a word and a phrase
/// - export the lines as plain text and JSON

use kwic::core::concordancer::Concordancer;
use kwic::export;

const SAMPLE: &str = "\
O, beware, my lord, of jealousy! It is the green-eyed monster which doth mock \
the meat it feeds on. That cuckold lives in bliss who, certain of his fate, \
loves not his wronger; but, O, what damned minutes tells he o'er who dotes, \
yet doubts, suspects, yet strongly loves! Poor and content is rich, and rich \
enough; but riches fineless is as poor as winter to him that ever fears he \
shall be poor. Good heaven, the souls of all my tribe defend from jealousy!";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("\n=== KWIC concordance demo ===\n");

    let kwic = Concordancer::default();

    // Step 1: tokenize
    let tokens = kwic.tokenize(SAMPLE);
    println!("Step 1: tokenized {} tokens", tokens.len());
    let preview: Vec<&str> = tokens.iter().take(10).map(|t| t.text.as_str()).collect();
    println!("  first tokens: {:?}\n", preview);

    // Step 2: single-word concordance
    println!("Step 2: concordance of 'jealousy'");
    let result = kwic.concordance(SAMPLE, "jealousy")?;
    println!("  {} occurrence(s)", result.total_count);
    for line in &result.lines {
        println!("  {}", line.line);
    }
    println!();

    // Step 3: phrase concordance
    println!("Step 3: concordance of the phrase 'rich enough'");
    let phrase = kwic.concordance_with(SAMPLE, "rich enough", 60, 5)?;
    println!("  {} occurrence(s)", phrase.total_count);
    for line in &phrase.lines {
        println!("  [{}] {}", line.start, line.line);
    }
    println!();

    // Step 4: export
    println!("Step 4: export");
    println!("--- plain text ---\n{}", export::to_plain_text(&result));
    println!("--- json ---\n{}", export::to_json(&result)?);

    Ok(())
}
