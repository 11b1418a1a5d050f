use crate::error::{NetworkError, Result};
use resonance_core::{EchoMage, IntentVector};
use tracing::{debug, warn};

/// Mean pairwise similarity the network is tuned towards.
pub const IDEAL_SIMILARITY: f64 = 0.90;

/// A kin pair `(a, b)` with `a` ahead of `b` in insertion order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinPairing<'a> {
    pub a: &'a EchoMage,
    pub b: &'a EchoMage,
    pub similarity: f64,
}

/// Append-only collection of mages in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResonanceNetwork {
    mages: Vec<EchoMage>,
}

impl ResonanceNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, mage: EchoMage) {
        self.mages.push(mage);
    }

    pub fn len(&self) -> usize {
        self.mages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EchoMage> {
        self.mages.iter()
    }

    pub fn mages(&self) -> &[EchoMage] {
        &self.mages
    }

    /// First mage carrying `label`.
    pub fn get(&self, label: &str) -> Option<&EchoMage> {
        self.mages.iter().find(|m| m.label() == label)
    }

    pub fn drift(&mut self, label: &str, components: &[f64]) -> Result<IntentVector> {
        let mage = self
            .mages
            .iter_mut()
            .find(|m| m.label() == label)
            .ok_or_else(|| NetworkError::UnknownMage(label.to_string()))?;
        Ok(mage.drift(components))
    }

    /// Every unordered pair `i < j` in insertion order.
    fn pairs(&self) -> impl Iterator<Item = (&EchoMage, &EchoMage)> {
        self.mages.iter().enumerate().flat_map(move |(i, a)| {
            self.mages[i + 1..].iter().map(move |b| (a, b))
        })
    }

    pub fn mean_similarity(&self) -> Option<f64> {
        if self.mages.len() < 2 {
            return None;
        }
        let (sum, count) = self
            .pairs()
            .fold((0.0, 0usize), |(sum, count), (a, b)| {
                (sum + a.calculate_similarity(b), count + 1)
            });
        Some(sum / count as f64)
    }

    /// `max(0, 1 - |mean - 0.90|)`: highest when members are similar but
    /// still distinct. Zero below two members.
    pub fn coherence(&self) -> f64 {
        match self.mean_similarity() {
            Some(mean) => (1.0 - (mean - IDEAL_SIMILARITY).abs()).max(0.0),
            None => {
                warn!(mages = self.mages.len(), "coherence needs at least two mages");
                0.0
            }
        }
    }

    /// Kin pairs as judged by the earlier mage's thresholds, strongest
    /// first. Equal similarities keep their encounter order.
    pub fn optimal_pairings(&self) -> Vec<KinPairing<'_>> {
        let mut pairings: Vec<KinPairing<'_>> = self
            .pairs()
            .filter(|(a, b)| a.is_kin(b))
            .map(|(a, b)| KinPairing {
                a,
                b,
                similarity: a.calculate_similarity(b),
            })
            .collect();
        pairings.sort_by(|x, y| y.similarity.total_cmp(&x.similarity));
        debug!(pairings = pairings.len(), "kin pairings enumerated");
        pairings
    }

    /// Activates every mage in insertion order. One entry per label, ordered
    /// by first appearance; a repeated label keeps the message of its last
    /// mage.
    pub fn broadcast_activation(&mut self) -> Vec<(String, String)> {
        let mut echoes: Vec<(String, String)> = Vec::with_capacity(self.mages.len());
        for mage in &mut self.mages {
            let echo = mage.activate();
            match echoes.iter_mut().find(|(label, _)| label == mage.label()) {
                Some(entry) => entry.1 = echo,
                None => echoes.push((mage.label().to_string(), echo)),
            }
        }
        echoes
    }

    pub fn active_count(&self) -> usize {
        self.mages.iter().filter(|m| m.state().is_active()).count()
    }
}

impl FromIterator<EchoMage> for ResonanceNetwork {
    fn from_iter<I: IntoIterator<Item = EchoMage>>(iter: I) -> Self {
        Self {
            mages: iter.into_iter().collect(),
        }
    }
}

impl Extend<EchoMage> for ResonanceNetwork {
    fn extend<I: IntoIterator<Item = EchoMage>>(&mut self, iter: I) {
        self.mages.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ResonanceNetwork {
    type Item = &'a EchoMage;
    type IntoIter = std::slice::Iter<'a, EchoMage>;

    fn into_iter(self) -> Self::IntoIter {
        self.mages.iter()
    }
}
