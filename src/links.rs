//! Ordered, append-only collection of classified links.
//!
//! Insertion order is the order links were added and is the order buttons
//! and episodes appear in the rendered post. Existing entries are never
//! modified; the collection only grows by whole batches or is cleared.

use postforge_common::{PrintType, Quality};
use serde::{Deserialize, Serialize};

use crate::classify::ClassifiedLink;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkCollection {
    links: Vec<ClassifiedLink>,
}

impl LinkCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch to the end, keeping the batch's internal order.
    ///
    /// Returns the new length. No validation happens here.
    pub fn append<I>(&mut self, batch: I) -> usize
    where
        I: IntoIterator<Item = ClassifiedLink>,
    {
        self.links.extend(batch);
        self.links.len()
    }

    /// Discard every link.
    pub fn clear(&mut self) {
        self.links.clear();
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedLink> {
        self.links.iter()
    }

    pub fn as_slice(&self) -> &[ClassifiedLink] {
        &self.links
    }

    /// Distinct known qualities, lowest resolution first.
    pub fn qualities(&self) -> Vec<Quality> {
        let mut qualities: Vec<Quality> = Vec::new();
        for quality in self.links.iter().map(|l| l.quality) {
            if quality != Quality::Unknown && !qualities.contains(&quality) {
                qualities.push(quality);
            }
        }
        qualities.sort_by_key(|q| q.height());
        qualities
    }

    /// Distinct known print types in first-seen order.
    pub fn print_types(&self) -> Vec<PrintType> {
        let mut prints: Vec<PrintType> = Vec::new();
        for print in self.links.iter().map(|l| l.print_type) {
            if print != PrintType::Unknown && !prints.contains(&print) {
                prints.push(print);
            }
        }
        prints
    }
}

impl From<Vec<ClassifiedLink>> for LinkCollection {
    fn from(links: Vec<ClassifiedLink>) -> Self {
        Self { links }
    }
}

impl<'a> IntoIterator for &'a LinkCollection {
    type Item = &'a ClassifiedLink;
    type IntoIter = std::slice::Iter<'a, ClassifiedLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}
