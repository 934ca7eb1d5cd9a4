use std::collections::HashMap;
use std::collections::hash_map;
use std::hash::{BuildHasher, Hash, RandomState};

use crate::pull::slice::SlicePull;
use crate::pull::{Pull, Reset};

/// A pull cursor over a borrowed map's entries, in the host map's own (unspecified) order.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use loop_lib::pull::Pull;
/// use loop_lib::pull::map::MapPull;
///
/// let map = HashMap::from([("one", 1), ("two", 2)]);
/// let mut sums = MapPull::new(&map).convert(|(_, v)| *v).to_vec();
/// sums.sort();
/// assert_eq!(sums, [1, 2]);
/// ```
pub struct MapPull<'a, K, V, S = RandomState> {
    pub(crate) map: &'a HashMap<K, V, S>,
    pub(crate) entries: hash_map::Iter<'a, K, V>,
}

impl<'a, K, V, S> MapPull<'a, K, V, S> {
    /// Creates a cursor over all entries of `map`.
    pub fn new(map: &'a HashMap<K, V, S>) -> MapPull<'a, K, V, S> {
        MapPull {
            map,
            entries: map.iter(),
        }
    }

    /// Returns the total number of entries in the underlying map.
    pub fn cap(&self) -> usize {
        self.map.len()
    }

    /// Projects this cursor down to keys only.
    pub fn keys(self) -> Keys<Self> {
        Keys(self)
    }

    /// Projects this cursor down to values only.
    pub fn values(self) -> Values<Self> {
        Values(self)
    }
}

impl<'a, K, V, S> Pull for MapPull<'a, K, V, S> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        self.entries.next()
    }
}

impl<K, V, S> Reset for MapPull<'_, K, V, S> {
    fn reset(&mut self) {
        self.entries = self.map.iter();
    }
}

impl<'a, K, V, S> From<&'a HashMap<K, V, S>> for MapPull<'a, K, V, S> {
    fn from(map: &'a HashMap<K, V, S>) -> MapPull<'a, K, V, S> {
        MapPull::new(map)
    }
}

/// A pull cursor over a borrowed map's entries in the order of a caller-supplied key slice.
///
/// The key slice and the map are maintained separately by the caller, and keeping them in sync
/// is the caller's contract: a key present in the slice but absent from the map is skipped, not
/// reported. [`cap`](OrderedMapPull::cap) is the key slice's length, so a collected cursor can
/// be shorter than its `cap` when the two have drifted.
pub struct OrderedMapPull<'a, K, V, S = RandomState> {
    pub(crate) keys: SlicePull<'a, K>,
    pub(crate) map: &'a HashMap<K, V, S>,
}

impl<'a, K, V, S> OrderedMapPull<'a, K, V, S> {
    /// Creates a cursor that replays `keys` against `map`.
    pub const fn new(keys: &'a [K], map: &'a HashMap<K, V, S>) -> OrderedMapPull<'a, K, V, S> {
        OrderedMapPull {
            keys: SlicePull::new(keys),
            map,
        }
    }

    /// Returns the length of the key slice driving this cursor.
    pub const fn cap(&self) -> usize {
        self.keys.cap()
    }

    /// Projects this cursor down to keys only.
    pub fn keys(self) -> Keys<Self> {
        Keys(self)
    }

    /// Projects this cursor down to values only.
    pub fn values(self) -> Values<Self> {
        Values(self)
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> Pull for OrderedMapPull<'a, K, V, S> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        loop {
            let key = self.keys.next()?;
            if let Some(value) = self.map.get(key) {
                return Some((key, value));
            }
        }
    }
}

impl<K, V, S> Reset for OrderedMapPull<'_, K, V, S> {
    fn reset(&mut self) {
        self.keys.reset();
    }
}

/// Projection of an entry pull down to its keys. See [`MapPull::keys`].
pub struct Keys<P>(pub(crate) P);

impl<'a, K: 'a, V: 'a, P> Pull for Keys<P>
where
    P: Pull<Item = (&'a K, &'a V)>,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.0.next().map(|entry| entry.0)
    }
}

impl<P: Reset> Reset for Keys<P> {
    fn reset(&mut self) {
        self.0.reset();
    }
}

/// Projection of an entry pull down to its values. See [`MapPull::values`].
pub struct Values<P>(pub(crate) P);

impl<'a, K: 'a, V: 'a, P> Pull for Values<P>
where
    P: Pull<Item = (&'a K, &'a V)>,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.0.next().map(|entry| entry.1)
    }
}

impl<P: Reset> Reset for Values<P> {
    fn reset(&mut self) {
        self.0.reset();
    }
}
