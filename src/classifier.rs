use std::collections::BTreeSet;

use anyhow::{Context, Result};
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::info;

use crate::taxonomy::{Category, MASTER_ITEMS};

/// Narrow seam over the embedding backend so the matching logic can be
/// exercised with deterministic vectors.
pub trait Embedder {
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>>;
}

/// all-MiniLM-L6-v2 via fastembed (ONNX runtime), 384-dimensional.
pub struct MiniLmEmbedder {
    model: TextEmbedding,
}

impl MiniLmEmbedder {
    pub fn new() -> Result<Self> {
        info!("Loading embedding model (all-MiniLM-L6-v2)...");
        let model = TextEmbedding::try_new(
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false),
        )
        .context("Failed to load embedding model")?;
        Ok(Self { model })
    }
}

impl Embedder for MiniLmEmbedder {
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        self.model
            .embed(texts.to_vec(), None)
            .map_err(|e| anyhow::anyhow!("Embedding failed: {}", e))
    }
}

/// Result of classifying one facility's raw materials text. Both sets are
/// unordered; consumers must not read meaning into iteration order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Classification {
    pub categories: BTreeSet<Category>,
    pub items: BTreeSet<&'static str>,
}

/// Maps free-text "materials accepted" lines onto the canonical taxonomy by
/// cosine similarity: per line, the top-K nearest item labels are kept if
/// their similarity clears the threshold.
pub struct Classifier<'a> {
    embedder: &'a dyn Embedder,
    item_embeddings: Vec<Vec<f32>>,
    top_k: usize,
    threshold: f32,
}

impl<'a> Classifier<'a> {
    /// Embeds all 40 canonical item labels up front; the matrix is reused
    /// for every facility in the run.
    pub fn new(embedder: &'a dyn Embedder, top_k: usize, threshold: f32) -> Result<Self> {
        let labels: Vec<&str> = MASTER_ITEMS.iter().map(|(item, _)| *item).collect();
        let item_embeddings = embedder
            .embed(&labels)
            .context("Failed to embed canonical item labels")?;
        Ok(Self {
            embedder,
            item_embeddings,
            top_k,
            threshold,
        })
    }

    pub fn classify(&self, raw_materials: &str) -> Result<Classification> {
        let mut result = Classification::default();
        if raw_materials.trim().is_empty() {
            return Ok(result);
        }

        // Newlines are the only delimiter; comma-separated lists on one line
        // are matched as a whole.
        let lines = raw_materials
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty());

        for line in lines {
            let embedded = self.embedder.embed(&[line])?;
            let query = &embedded[0];

            let mut ranked: Vec<(usize, f32)> = self
                .item_embeddings
                .iter()
                .enumerate()
                .map(|(idx, item_vec)| (idx, cosine_similarity(query, item_vec)))
                .collect();
            ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

            for &(idx, score) in ranked.iter().take(self.top_k) {
                if score >= self.threshold {
                    let (item, category) = MASTER_ITEMS[idx];
                    result.items.insert(item);
                    result.categories.insert(category);
                }
            }
        }

        Ok(result)
    }
}

/// Cosine similarity on [-1, 1]; zero-magnitude vectors compare as 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

// ── Tests ──
