use crate::concordance::results::FrequencyPoint;
use crate::core::concordancer::Concordancer;
use crate::core::error::Result;
use crate::corpus::provider::TextProvider;

/// Frequency of one query across several corpora, in the order the names
/// were given. Chart collaborators plot the points as-is.
pub fn compare_frequencies(
    concordancer: &Concordancer,
    provider: &dyn TextProvider,
    names: &[String],
    query: &str,
) -> Result<Vec<FrequencyPoint>> {
    let mut points = Vec::with_capacity(names.len());
    for name in names {
        let text = provider.fetch(name)?;
        let count = concordancer.frequency(&text, query)?;
        points.push(FrequencyPoint {
            corpus: name.clone(),
            count,
        });
    }
    Ok(points)
}
