//! Provides `Histogram`, a label counter with plurality and
//! proportion queries.
use crate::error::ClassifierError;

use std::collections::HashMap;
use std::hash::Hash;


/// Counts the occurrences of labels.
///
/// Labels are kept in the order they were first bumped,
/// so that [`Histogram::plurality_winner`] breaks ties deterministically:
/// among the labels sharing the greatest count,
/// the one bumped first wins.
///
/// # Example
/// ```
/// use miniclassifiers::Histogram;
///
/// let histogram = "RGRBRG".chars().collect::<Histogram<char>>();
/// assert_eq!(histogram.plurality_winner(), Ok(&'R'));
/// assert_eq!(histogram.portion_for(&'B'), 1f64 / 6f64);
/// ```
#[derive(Debug, Clone)]
pub struct Histogram<L> {
    index: HashMap<L, usize>,
    counts: Vec<(L, usize)>,
    total: usize,
}


impl<L> Histogram<L>
    where L: Eq + Hash + Clone,
{
    /// Construct an empty histogram.
    #[inline]
    pub fn new() -> Self {
        Self { index: HashMap::new(), counts: Vec::new(), total: 0 }
    }


    /// Increments the count for `label`.
    pub fn bump(&mut self, label: L) {
        match self.index.get(&label) {
            Some(&i) => { self.counts[i].1 += 1; },
            None => {
                self.index.insert(label.clone(), self.counts.len());
                self.counts.push((label, 1));
            },
        }
        self.total += 1;
    }


    /// Returns the number of times `label` was bumped.
    #[inline]
    pub fn count(&self, label: &L) -> usize {
        self.index.get(label)
            .map(|&i| self.counts[i].1)
            .unwrap_or(0)
    }


    /// Returns `count(label) / total`, or `0` if nothing is counted.
    #[inline]
    pub fn portion_for(&self, label: &L) -> f64 {
        if self.total == 0 { return 0f64; }
        self.count(label) as f64 / self.total as f64
    }


    /// Returns the label with the greatest count.
    pub fn plurality_winner(&self) -> Result<&L, ClassifierError> {
        self.counts.iter()
            .reduce(|best, item| if item.1 > best.1 { item } else { best })
            .map(|(label, _)| label)
            .ok_or(ClassifierError::EmptyHistogram)
    }
}


impl<L> Histogram<L> {
    /// Returns the sum of all counts.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }


    /// Returns the number of distinct labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }


    /// Returns `true` if no label has been counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }


    /// Iterates over `(label, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&L, usize)> {
        self.counts.iter()
            .map(|(label, count)| (label, *count))
    }
}


impl<L> Default for Histogram<L>
    where L: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}


impl<L> Extend<L> for Histogram<L>
    where L: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = L>>(&mut self, iter: I) {
        iter.into_iter()
            .for_each(|label| self.bump(label));
    }
}


impl<L> FromIterator<L> for Histogram<L>
    where L: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        let mut histogram = Self::new();
        histogram.extend(iter);
        histogram
    }
}
