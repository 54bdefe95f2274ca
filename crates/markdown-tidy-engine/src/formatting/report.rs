use std::collections::HashSet;

use crate::parsing::{
    inline::{InlineNode, ReferenceForm},
    links::LinkTable,
};

/// What the link scan found, for drivers that want to warn without
/// re-parsing the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Normalized labels of `[text][label]` and `[text][]` references with no
    /// definition, in order of first use.
    pub unresolved: Vec<String>,
    /// Normalized labels defined but never referenced, in definition order.
    pub unused_definitions: Vec<String>,
    /// Labels (as written) of definitions shadowed by an earlier one.
    pub duplicate_definitions: Vec<String>,
}

impl LinkReport {
    /// Shortcut references (`[text]`) that resolve count as uses; unresolved
    /// ones are ordinary bracketed prose and are not reported.
    pub fn build<'a>(links: &LinkTable, inlines: impl IntoIterator<Item = &'a [InlineNode]>) -> Self {
        let mut used = HashSet::new();
        let mut seen = HashSet::new();
        let mut unresolved: Vec<String> = Vec::new();

        for node in inlines.into_iter().flatten() {
            let InlineNode::LinkReference {
                label,
                form,
                resolved,
                ..
            } = node
            else {
                continue;
            };
            if *resolved {
                used.insert(label.as_str());
            } else if *form != ReferenceForm::Shortcut && seen.insert(label.as_str()) {
                unresolved.push(label.clone());
            }
        }

        let unused_definitions = links
            .labels()
            .filter(|l| !used.contains(*l))
            .map(str::to_string)
            .collect();

        let duplicate_definitions = links
            .duplicates()
            .iter()
            .map(|d| d.label.clone())
            .collect();

        Self {
            unresolved,
            unused_definitions,
            duplicate_definitions,
        }
    }

    /// Nothing worth warning about.
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
            && self.unused_definitions.is_empty()
            && self.duplicate_definitions.is_empty()
    }
}
