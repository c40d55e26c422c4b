//! Explicit tagged variants for the unions that the wire format discriminates
//! by presence.
//!
//! A [`VariantSlot`] holds the selected tag together with every candidate
//! payload that was seen. Only the candidate matching the tag is valid; any
//! other candidate is an orphan and is reported by validation.

use std::collections::BTreeMap;
use std::fmt;

/// A union arm that knows its own tag and how to start empty.
pub trait Tagged: Clone {
    type Tag: Copy + Ord + fmt::Debug + fmt::Display;

    fn tag(&self) -> Self::Tag;

    fn empty(tag: Self::Tag) -> Self;
}

/// Pick the candidate for `discriminator`, or `default` with an empty payload.
pub fn resolve<V: Tagged>(
    discriminator: V::Tag,
    candidates: &BTreeMap<V::Tag, V>,
    default: V::Tag,
) -> (V::Tag, V) {
    match candidates.get(&discriminator) {
        Some(payload) => (discriminator, payload.clone()),
        None => (default, V::empty(default)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariantSlot<V: Tagged> {
    active: V::Tag,
    candidates: BTreeMap<V::Tag, V>,
}

impl<V: Tagged> VariantSlot<V> {
    /// A slot carrying only the empty payload of `active`.
    pub fn new(active: V::Tag) -> Self {
        Self::with_candidates(active, [V::empty(active)])
    }

    /// Later candidates with the same tag replace earlier ones.
    pub fn with_candidates(active: V::Tag, candidates: impl IntoIterator<Item = V>) -> Self {
        Self {
            active,
            candidates: candidates.into_iter().map(|v| (v.tag(), v)).collect(),
        }
    }

    pub fn active(&self) -> V::Tag {
        self.active
    }

    pub fn contains(&self, tag: V::Tag) -> bool {
        self.candidates.contains_key(&tag)
    }

    pub fn get(&self, tag: V::Tag) -> Option<&V> {
        self.candidates.get(&tag)
    }

    pub fn insert(&mut self, payload: V) {
        self.candidates.insert(payload.tag(), payload);
    }

    pub fn candidates(&self) -> impl Iterator<Item = &V> {
        self.candidates.values()
    }

    /// Tags with a payload that does not match the active tag.
    pub fn orphans(&self) -> Vec<V::Tag> {
        self.candidates
            .keys()
            .copied()
            .filter(|tag| *tag != self.active)
            .collect()
    }

    pub fn resolve(&self, default: V::Tag) -> (V::Tag, V) {
        resolve(self.active, &self.candidates, default)
    }

    /// Select `tag`. Every other payload is discarded; a new tag starts empty.
    pub fn on_discriminator_change(&mut self, tag: V::Tag) {
        if tag == self.active && self.contains(tag) {
            self.candidates.retain(|t, _| *t == tag);
            return;
        }
        self.active = tag;
        self.candidates.clear();
        self.candidates.insert(tag, V::empty(tag));
    }
}
