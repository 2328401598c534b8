//! Radius table construction.
//!
//! For every center `i` of a [`CenteredSequence`], the table holds the largest
//! `r` such that positions `i - r ..= i + r` read the same in both directions.
//!
//! The sweep keeps the palindrome reaching furthest to the right seen so far
//! (`center`, `right_edge`). A new center inside that palindrome starts from
//! its mirror image's radius, clipped to the edge, so only positions beyond
//! `right_edge` are ever compared. Every successful comparison (extension)
//! pushes `right_edge` forward by one, and `right_edge` never moves back, so
//! extensions are bounded by the sequence length. Each center adds at most
//! one failing comparison.

use std::ops::Index;

use crate::traits::CenteredSequence;

/// Maximal palindrome radius around every center of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadiusTable {
    radii: Vec<usize>,
}

impl RadiusTable {
    /// Run the sweep over `seq`.
    ///
    /// Runtime: O(L) amortized; space: O(L) for the table itself.
    pub fn build<S>(seq: &S) -> Self
    where
        S: CenteredSequence + ?Sized,
    {
        let len = seq.len();
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("build_radius_table", len);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut radii = vec![0usize; len];
        let mut center = 0usize;
        let mut right_edge = 0usize;
        #[cfg(feature = "tracing")]
        let mut extensions = 0usize;

        for i in 0..len {
            let mut r = if i < right_edge {
                let mirror = 2 * center - i;
                (right_edge - i).min(radii[mirror])
            } else {
                0
            };

            while r < i && i + r + 1 < len && seq.mirrors(i - r - 1, i + r + 1) {
                r += 1;
                #[cfg(feature = "tracing")]
                {
                    extensions += 1;
                }
            }
            radii[i] = r;

            if i + r > right_edge {
                center = i;
                right_edge = i + r;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(extensions, "radius sweep finished");

        Self { radii }
    }

    /// Number of centers, equal to the length of the swept sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    #[inline]
    pub fn get(&self, center: usize) -> Option<usize> {
        self.radii.get(center).copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.radii
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.radii.iter().copied()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.radii
    }
}

impl Index<usize> for RadiusTable {
    type Output = usize;

    fn index(&self, center: usize) -> &usize {
        &self.radii[center]
    }
}
