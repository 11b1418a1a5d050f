use serde::{Deserialize, Serialize};

/// Three-component intent vector: where an entity is, where it has been,
/// and where it is going.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentVector {
    pub present: f64,
    pub sequence: f64,
    pub future: f64,
}

impl IntentVector {
    pub const ZERO: IntentVector = IntentVector {
        present: 0.0,
        sequence: 0.0,
        future: 0.0,
    };

    pub fn new(present: f64, sequence: f64, future: f64) -> Self {
        Self {
            present,
            sequence,
            future,
        }
    }

    /// Builds a vector from loose components. Missing components are zero,
    /// anything past the third is ignored.
    pub fn from_components(components: &[f64]) -> Self {
        let at = |i: usize| components.get(i).copied().unwrap_or(0.0);
        Self::new(at(0), at(1), at(2))
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.present, self.sequence, self.future]
    }

    pub fn dot(self, other: IntentVector) -> f64 {
        self.present * other.present
            + self.sequence * other.sequence
            + self.future * other.future
    }

    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit direction. The zero vector stays zero.
    pub fn normalize(self) -> IntentVector {
        let norm = self.magnitude();
        if norm == 0.0 {
            return IntentVector::ZERO;
        }
        Self::new(
            self.present / norm,
            self.sequence / norm,
            self.future / norm,
        )
    }

    pub fn distance(self, other: IntentVector) -> f64 {
        let dp = self.present - other.present;
        let ds = self.sequence - other.sequence;
        let df = self.future - other.future;
        (dp * dp + ds * ds + df * df).sqrt()
    }

    /// Cosine similarity in `[-1, 1]`, or `0.0` when either side has zero
    /// magnitude.
    pub fn cosine_similarity(self, other: IntentVector) -> f64 {
        let norm_a = self.magnitude();
        let norm_b = other.magnitude();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        (self.dot(other) / (norm_a * norm_b)).clamp(-1.0, 1.0)
    }
}

impl From<[f64; 3]> for IntentVector {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}
