use crate::pull::{Pull, Reset};

/// An N×M key/value projecting pull. See [`Pull::multi_key_values`].
///
/// Structurally a sibling of [`Flat`](super::Flat), but the pending state is a cross product
/// rather than a flat sub-sequence: for each upstream element the key extractor and value
/// extractor each run once, and every key is paired with every value before the next element is
/// pulled.
pub struct MultiKeyValues<P, FK, FV, K, V> {
    pub(crate) source: P,
    pub(crate) keys: FK,
    pub(crate) values: FV,
    pub(crate) pending: Option<CrossProduct<K, V>>,
}

impl<P, FK, FV, K, V> MultiKeyValues<P, FK, FV, K, V> {
    pub(crate) const fn new(source: P, keys: FK, values: FV) -> MultiKeyValues<P, FK, FV, K, V> {
        MultiKeyValues {
            source,
            keys,
            values,
            pending: None,
        }
    }
}

impl<P, FK, FV, K, V> Pull for MultiKeyValues<P, FK, FV, K, V>
where
    P: Pull,
    K: Clone,
    V: Clone,
    FK: FnMut(&P::Item) -> Vec<K>,
    FV: FnMut(&P::Item) -> Vec<V>,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        loop {
            if let Some(product) = &mut self.pending {
                if let Some(pair) = product.next() {
                    return Some(pair);
                }
                self.pending = None;
            }

            let item = self.source.next()?;
            self.pending = Some(CrossProduct {
                keys: (self.keys)(&item),
                values: (self.values)(&item),
                key_at: 0,
                value_at: 0,
            });
        }
    }
}

impl<P: Reset, FK, FV, K, V> Reset for MultiKeyValues<P, FK, FV, K, V> {
    fn reset(&mut self) {
        self.pending = None;
        self.source.reset();
    }
}

/// The nested double cursor for one upstream element: key index outer, value index inner.
pub(crate) struct CrossProduct<K, V> {
    pub(crate) keys: Vec<K>,
    pub(crate) values: Vec<V>,
    pub(crate) key_at: usize,
    pub(crate) value_at: usize,
}

impl<K: Clone, V: Clone> CrossProduct<K, V> {
    fn next(&mut self) -> Option<(K, V)> {
        let key = self.keys.get(self.key_at)?;
        let value = self.values.get(self.value_at)?;
        let pair = (key.clone(), value.clone());

        self.value_at += 1;
        if self.value_at == self.values.len() {
            self.value_at = 0;
            self.key_at += 1;
        }

        Some(pair)
    }
}
