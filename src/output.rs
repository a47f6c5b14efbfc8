use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::classifier::Classifier;
use crate::extractor::Facility;

/// Final per-facility record, one object in the stdout JSON array.
#[derive(Debug, Serialize)]
pub struct FacilityRecord {
    pub business_name: String,
    pub last_update_date: String,
    pub street_address: String,
    pub materials_category: Vec<String>,
    pub materials_accepted: Vec<String>,
}

/// Classify each facility in extraction order and build the output records.
/// `delay` is inserted between facilities to bound the local CPU burst.
pub async fn build_records(
    facilities: Vec<Facility>,
    classifier: &Classifier<'_>,
    delay: Duration,
) -> Result<Vec<FacilityRecord>> {
    let total = facilities.len();
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len}")?
            .progress_chars("=> "),
    );

    let mut records = Vec::with_capacity(total);
    for (i, facility) in facilities.into_iter().enumerate() {
        let classification = classifier.classify(&facility.raw_materials)?;
        records.push(FacilityRecord {
            business_name: facility.business_name,
            last_update_date: facility.last_update_date,
            street_address: facility.street_address,
            materials_category: classification
                .categories
                .iter()
                .map(|cat| cat.to_string())
                .collect(),
            materials_accepted: classification
                .items
                .iter()
                .map(|item| item.to_string())
                .collect(),
        });
        pb.inc(1);

        if i + 1 < total && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
    pb.finish_and_clear();

    Ok(records)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Embedder;
    use crate::extractor::extract_facilities;

    /// Keyword-axis embedder; enough semantics for end-to-end assertions.
    struct FakeEmbedder;

    impl Embedder for FakeEmbedder {
        fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
            Ok(texts
                .iter()
                .map(|text| {
                    let lower = text.to_lowercase();
                    let mut vec = vec![0.0; 2];
                    if lower.contains("laptop") {
                        vec[0] = 1.0;
                    }
                    if lower.contains("phone") {
                        vec[1] = 1.0;
                    }
                    vec
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn fixture_end_to_end() {
        let html = std::fs::read_to_string("tests/fixtures/results_two_entries.html").unwrap();
        let facilities = extract_facilities(&html, 3);
        assert_eq!(facilities.len(), 2);

        let embedder = FakeEmbedder;
        let classifier = Classifier::new(&embedder, 3, 0.6).unwrap();
        let records = build_records(facilities, &classifier, Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(records.len(), 2);

        // "Old laptops, cell phones" must resolve to Electronics items
        let first = &records[0];
        assert!(first.materials_category.contains(&"Electronics".to_string()));
        assert!(first
            .materials_accepted
            .contains(&"Computers, Laptops, Tablets".to_string()));
        assert!(first
            .materials_accepted
            .contains(&"Cell Phones, Smartphones".to_string()));

        // Empty materials text yields two empty arrays
        let second = &records[1];
        assert!(second.materials_category.is_empty());
        assert!(second.materials_accepted.is_empty());
    }

    #[tokio::test]
    async fn records_serialize_with_expected_keys() {
        let html = std::fs::read_to_string("tests/fixtures/results_two_entries.html").unwrap();
        let facilities = extract_facilities(&html, 1);

        let embedder = FakeEmbedder;
        let classifier = Classifier::new(&embedder, 3, 0.6).unwrap();
        let records = build_records(facilities, &classifier, Duration::ZERO)
            .await
            .unwrap();

        let json = serde_json::to_string_pretty(&records).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = &parsed.as_array().unwrap()[0];

        for key in [
            "business_name",
            "last_update_date",
            "street_address",
            "materials_category",
            "materials_accepted",
        ] {
            assert!(obj.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(obj["business_name"], "Green Earth Electronics Recycling");
        assert_eq!(obj["last_update_date"], "Jan 15, 2024");
    }
}
