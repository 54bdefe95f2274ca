//! # Link Table
//!
//! Collects every link reference definition up front, so references can be
//! validated even when they appear before their definition.

pub mod label;

use std::collections::HashMap;

use crate::parsing::{
    blocks::{BlockKind, BlockNode},
    rope::span::Span,
};

pub use label::normalize_label;

/// A definition as found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDefinition {
    /// Label as written, before normalization.
    pub label: String,
    pub destination: String,
    pub title: Option<String>,
    /// Span of the definition line.
    pub span: Span,
}

/// Normalized label to first-seen definition.
#[derive(Debug, Default)]
pub struct LinkTable {
    defs: HashMap<String, LinkDefinition>,
    /// Normalized labels in definition order.
    order: Vec<String>,
    duplicates: Vec<LinkDefinition>,
}

impl LinkTable {
    /// Scans the blocks once; the first definition of a label wins.
    pub fn build(blocks: &[BlockNode]) -> Self {
        let mut table = Self::default();
        for b in blocks {
            let BlockKind::LinkRefDef {
                label,
                destination,
                title,
            } = &b.kind
            else {
                continue;
            };

            let def = LinkDefinition {
                label: label.clone(),
                destination: destination.clone(),
                title: title.clone(),
                span: b.span,
            };
            let key = normalize_label(label);
            if table.defs.contains_key(&key) {
                log::debug!("duplicate link definition [{label}] at byte {}", b.span.start);
                table.duplicates.push(def);
            } else {
                table.order.push(key.clone());
                table.defs.insert(key, def);
            }
        }
        table
    }

    /// Looks up an already normalized label.
    pub fn get(&self, normalized: &str) -> Option<&LinkDefinition> {
        self.defs.get(normalized)
    }

    /// Normalizes `label` and looks it up.
    pub fn resolve(&self, label: &str) -> Option<&LinkDefinition> {
        self.get(&normalize_label(label))
    }

    /// Normalized labels in the order they were first defined.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Later definitions whose label was already taken.
    pub fn duplicates(&self) -> &[LinkDefinition] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
