//! Labeled tree projection and output rendering

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::labeling::{Labeling, Outcome};
use crate::tree::{NodeIndex, Tree};

/// File the CLI writes a successful labeling to
pub const OUTPUT_FILE: &str = "graceful_tree_output.txt";

/// Printed when the search proves no labeling exists
pub const UNSATISFIABLE_NOTICE: &str =
    "It is not possible to create a Graceful Tree with the given structure.";

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A node name paired with its label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledNode {
    pub name: String,
    pub label: u32,
}

impl fmt::Display for LabeledNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.label)
    }
}

/// One output line: a node and its children, each with a label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledRecord {
    pub node: LabeledNode,
    pub children: Vec<LabeledNode>,
}

/// The tree with every node labeled, in the original record order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledTree {
    records: Vec<LabeledRecord>,
}

impl LabeledTree {
    /// Pair each node and each child reference with its label
    pub fn project(tree: &Tree, labeling: &Labeling) -> Self {
        let labeled = |node: NodeIndex| LabeledNode {
            name: tree.name(node).to_string(),
            label: labeling.label_of(node),
        };

        let records = tree
            .nodes()
            .map(|node| LabeledRecord {
                node: labeled(node),
                children: tree.children(node).iter().map(|&c| labeled(c)).collect(),
            })
            .collect();

        Self { records }
    }

    pub fn records(&self) -> &[LabeledRecord] {
        &self.records
    }

    pub fn label_of(&self, name: &str) -> Option<u32> {
        self.records
            .iter()
            .find(|record| record.node.name == name)
            .map(|record| record.node.label)
    }

    /// `(name, label)` for every node in record order
    pub fn labels(&self) -> Vec<(String, u32)> {
        self.records
            .iter()
            .map(|record| (record.node.name.clone(), record.node.label))
            .collect()
    }
}

impl fmt::Display for LabeledTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            write!(f, "{}", record.node)?;
            for child in &record.children {
                write!(f, " {child}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render an outcome as the text a user would see
pub fn render_to_string(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Labeled(tree) => tree.to_string(),
        Outcome::Unsatisfiable => format!("{UNSATISFIABLE_NOTICE}\n"),
        Outcome::BudgetExhausted { steps } => {
            format!("Search stopped after {steps} steps without finding a labeling.\n")
        }
        Outcome::InvalidStructure(e) => format!("Invalid tree: {e}\n"),
    }
}

/// Write a labeled tree to a file
pub fn write_labeled_tree(tree: &LabeledTree, output_path: &Path) -> Result<(), OutputError> {
    let content = tree.to_string();

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(output_path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}
