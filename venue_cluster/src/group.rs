// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::hash_map::Entry;
use hashbrown::{DefaultHashBuilder, HashMap};
use smallvec::{SmallVec, smallvec};

use crate::location::{LatLng, Located};

/// Most places host a handful of events; keep those members inline.
type Members = SmallVec<[usize; 4]>;

/// One group produced by [`group_by_key`]: a key, the value captured from the
/// first member, and the member indices in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct Group<K, V> {
    key: K,
    value: V,
    members: Members,
}

impl<K, V> Group<K, V> {
    /// The grouping key.
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value the key function returned for the first member.
    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Indices of the members in the grouped slice, in input order.
    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Number of members. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; a group exists only once it has a member.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Resolves the member indices against the slice that was grouped.
    ///
    /// Indices past the end of `source` are skipped, so passing a different
    /// slice cannot panic, only yield fewer items.
    pub fn items_in<'a, T>(&'a self, source: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        self.members.iter().filter_map(|&index| source.get(index))
    }
}

/// Ordered mapping from key to [`Group`], built by [`group_by_key`].
///
/// Iteration follows the order in which each key was first seen. That order is
/// meant for display grouping; it is not a stable identity across rebuilds.
#[derive(Clone, Debug)]
pub struct Grouping<K, V> {
    groups: Vec<Group<K, V>>,
    index: HashMap<K, usize, DefaultHashBuilder>,
}

impl<K, V> Default for Grouping<K, V> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::with_hasher(DefaultHashBuilder::default()),
        }
    }
}

impl<K, V> Grouping<K, V> {
    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if nothing was grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of grouped items across all groups.
    ///
    /// Items whose key function returned `None` are not counted.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// All groups in first-occurrence order.
    #[must_use]
    pub fn groups(&self) -> &[Group<K, V>] {
        &self.groups
    }

    /// Iterates groups in first-occurrence order.
    pub fn iter(&self) -> core::slice::Iter<'_, Group<K, V>> {
        self.groups.iter()
    }

    /// Iterates keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.groups.iter().map(Group::key)
    }
}

impl<K, V> Grouping<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Looks up the group for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&Group<K, V>> {
        self.index.get(key).map(|&slot| &self.groups[slot])
    }

    /// Returns `true` if some item was grouped under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn push(&mut self, key: K, value: V, member: usize) {
        match self.index.entry(key) {
            Entry::Occupied(entry) => self.groups[*entry.get()].members.push(member),
            Entry::Vacant(entry) => {
                let slot = self.groups.len();
                self.groups.push(Group {
                    key: entry.key().clone(),
                    value,
                    members: smallvec![member],
                });
                entry.insert(slot);
            }
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Grouping<K, V> {
    fn eq(&self, other: &Self) -> bool {
        // The index is derived from `groups`, so comparing groups is enough.
        self.groups == other.groups
    }
}

impl<'a, K, V> IntoIterator for &'a Grouping<K, V> {
    type Item = &'a Group<K, V>;
    type IntoIter = core::slice::Iter<'a, Group<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Groups `items` by the key `key_fn` extracts, preserving input order.
///
/// `key_fn` returns `Some((key, value))` to place an item in the group for
/// `key`, or `None` to leave it out. The `value` of the first item seen for a
/// key is kept on the group; later values for the same key are dropped.
///
/// ```rust
/// use venue_cluster::group_by_key;
///
/// let words = ["apple", "avocado", "", "banana", "apricot"];
/// let by_initial = group_by_key(&words, |w| w.chars().next().map(|c| (c, ())));
///
/// assert_eq!(by_initial.len(), 2);
/// assert_eq!(by_initial.get(&'a').unwrap().members(), &[0, 1, 4]);
/// assert_eq!(by_initial.member_count(), 4);
/// ```
pub fn group_by_key<T, K, V, F>(items: &[T], mut key_fn: F) -> Grouping<K, V>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> Option<(K, V)>,
{
    items
        .iter()
        .enumerate()
        .fold(Grouping::default(), |mut grouping, (member, item)| {
            if let Some((key, value)) = key_fn(item) {
                grouping.push(key, value, member);
            }
            grouping
        })
}

/// Events sharing one location, with that location's position.
pub type LocationCluster<K> = Group<K, LatLng>;

/// Location clusters keyed by location id, in first-occurrence order.
pub type LocationClusters<K> = Grouping<K, LatLng>;

impl<K> Group<K, LatLng> {
    /// Id of the location every member shares.
    #[must_use]
    pub fn location_id(&self) -> &K {
        &self.key
    }

    /// Position of the location.
    #[must_use]
    pub fn position(&self) -> LatLng {
        self.value
    }

    /// The member events, resolved against the slice passed to [`aggregate`].
    pub fn events<'a, E>(&'a self, source: &'a [E]) -> impl Iterator<Item = &'a E> + 'a {
        self.items_in(source)
    }
}

impl<K> Grouping<K, LatLng> {
    /// Iterates the representative position of each cluster.
    pub fn positions(&self) -> impl Iterator<Item = LatLng> + '_ {
        self.groups.iter().map(|cluster| cluster.value)
    }
}

/// Groups events by location id, dropping events that have no location.
///
/// Within a cluster, events keep their relative input order. Every event with
/// a location lands in exactly one cluster, so
/// `clusters.member_count() + events_without_location == events.len()`.
pub fn aggregate<E: Located>(events: &[E]) -> LocationClusters<E::LocationId> {
    group_by_key(events, |event| {
        event
            .location()
            .map(|location| (location.id.clone(), location.position))
    })
}
