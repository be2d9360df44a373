//! Host-side view of a sampled path, in the order an animation walks it.

/// Flattened x/y sample vectors of a [`PathBuffer`](crate::path::PathBuffer).
///
/// Sample `k` belongs to segment `k / resolution` at parameter
/// `(k % resolution) / resolution`. A marker walking the path advances one
/// index per tick and is done when it reaches [`len`](Self::len).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathTrack {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl PathTrack {
    pub(crate) fn from_parts(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        debug_assert_eq!(xs.len(), ys.len(), "x and y paths differ in length");
        Self { xs, ys }
    }

    /// Number of samples along the path.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the track holds no samples.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The x path.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The y path.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Sampled position at index `k`.
    pub fn point(&self, k: usize) -> Option<[f64; 2]> {
        Some([*self.xs.get(k)?, *self.ys.get(k)?])
    }

    /// Grid cell `(column, row)` at index `k`, truncating toward zero.
    ///
    /// Negative coordinates saturate to 0.
    pub fn cell(&self, k: usize) -> Option<(usize, usize)> {
        let [x, y] = self.point(k)?;
        Some((x as usize, y as usize))
    }

    /// Iterate over sampled positions in walking order.
    pub fn iter(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.xs.iter().zip(&self.ys).map(|(&x, &y)| [x, y])
    }
}
