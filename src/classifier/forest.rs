use crate::error::{Result, SoilSenseError};
use crate::models::{ClassProbabilities, SoilParameter};
use serde::Deserialize;
use std::path::Path;

/// One node of a flattened decision tree.
///
/// Split nodes carry `feature`/`threshold`/`left`/`right`; a sample with
/// `value <= threshold` descends left. Leaves have `feature == -1` and a
/// `proba` row in class order [not_fertile, fertile].
#[derive(Debug, Clone, Deserialize)]
pub struct TreeNode {
    pub feature: i32,
    #[serde(default)]
    pub threshold: f64,
    #[serde(default = "no_child")]
    pub left: i32,
    #[serde(default = "no_child")]
    pub right: i32,
    #[serde(default)]
    pub proba: Option<[f64; 2]>,
}

fn no_child() -> i32 {
    -1
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.feature < 0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walks the tree from the root. Assumes the structure was validated at
    /// load time, so traversal always reaches a leaf.
    fn leaf_distribution(&self, features: &[f64; SoilParameter::COUNT]) -> [f64; 2] {
        let mut index = 0usize;
        loop {
            let node = &self.nodes[index];
            if node.is_leaf() {
                return node.proba.unwrap_or([0.5, 0.5]);
            }
            index = if features[node.feature as usize] <= node.threshold {
                node.left as usize
            } else {
                node.right as usize
            };
        }
    }

    fn validate(&self, tree_index: usize, n_features: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(SoilSenseError::InvalidModel(format!(
                "tree {} has no nodes",
                tree_index
            )));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if node.is_leaf() {
                let proba = node.proba.ok_or_else(|| {
                    SoilSenseError::InvalidModel(format!(
                        "tree {} node {} is a leaf without probabilities",
                        tree_index, i
                    ))
                })?;
                let sum: f64 = proba.iter().sum();
                if proba.iter().any(|p| !p.is_finite() || *p < 0.0) || sum <= 0.0 {
                    return Err(SoilSenseError::InvalidModel(format!(
                        "tree {} node {} has an invalid probability row",
                        tree_index, i
                    )));
                }
            } else {
                if node.feature as usize >= n_features {
                    return Err(SoilSenseError::InvalidModel(format!(
                        "tree {} node {} splits on feature {} of {}",
                        tree_index, i, node.feature, n_features
                    )));
                }
                if !node.threshold.is_finite() {
                    return Err(SoilSenseError::InvalidModel(format!(
                        "tree {} node {} has a non-finite threshold",
                        tree_index, i
                    )));
                }
                // Children must point strictly forward; this is what makes
                // traversal provably terminate.
                for child in [node.left, node.right] {
                    if child <= i as i32 || child as usize >= self.nodes.len() {
                        return Err(SoilSenseError::InvalidModel(format!(
                            "tree {} node {} has out-of-order child {}",
                            tree_index, i, child
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Normalizes every leaf probability row in place.
    fn normalize_leaves(&mut self) {
        for node in &mut self.nodes {
            if let Some(proba) = node.proba.as_mut() {
                let sum: f64 = proba.iter().sum();
                if sum > 0.0 {
                    proba[0] /= sum;
                    proba[1] /= sum;
                }
            }
        }
    }
}

/// Random forest deserialized from the trained-model artifact.
///
/// The artifact is a JSON document; its structure is checked once at load
/// time so that inference itself cannot fail or loop.
#[derive(Debug, Clone, Deserialize)]
pub struct ForestModel {
    pub n_features: usize,
    pub trees: Vec<DecisionTree>,
}

impl ForestModel {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let mut model: ForestModel = serde_json::from_str(data)?;
        model.check()?;
        for tree in &mut model.trees {
            tree.normalize_leaves();
        }
        Ok(model)
    }

    fn check(&self) -> Result<()> {
        if self.n_features != SoilParameter::COUNT {
            return Err(SoilSenseError::InvalidModel(format!(
                "model expects {} features, engine supplies {}",
                self.n_features,
                SoilParameter::COUNT
            )));
        }
        if self.trees.is_empty() {
            return Err(SoilSenseError::InvalidModel(
                "forest contains no trees".to_string(),
            ));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i, self.n_features)?;
        }
        Ok(())
    }

    /// Mean of the leaf distributions across all trees.
    pub fn predict_proba(&self, features: &[f64; SoilParameter::COUNT]) -> ClassProbabilities {
        let mut total = [0.0f64; 2];
        for tree in &self.trees {
            let leaf = tree.leaf_distribution(features);
            total[0] += leaf[0];
            total[1] += leaf[1];
        }
        let n = self.trees.len() as f64;
        ClassProbabilities::new(total[0] / n, total[1] / n)
    }
}
