//! Registry of committed shapes: ordered storage, visibility, hit testing.

use super::shape::Shape;
use crate::geom::Point;

/// Stable handle for a committed shape.
///
/// Assigned monotonically at commit time and never reused for the lifetime
/// of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u64);

/// A committed shape together with its registry bookkeeping.
#[derive(Debug, Clone)]
struct Entry {
    id: ShapeId,
    shape: Shape,
    /// Hidden entries stay registered but are skipped by hit testing.
    visible: bool,
}

/// Ordered collection of committed annotation shapes.
///
/// Insertion order is preserved and defines both the z-order and the
/// tie-break for overlapping hit tests: the most recently committed shape is
/// topmost. Shapes enter only through [`ShapeRegistry::commit`] and are
/// immutable afterwards; visibility is the one mutable bit, so a shape can
/// be excluded from hit testing without being removed.
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    entries: Vec<Entry>,
    next_id: u64,
}

impl ShapeRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a finished shape, appending it on top of the z-order.
    ///
    /// Returns the stable handle assigned to the shape.
    pub fn commit(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        log::debug!("Committed shape {:?}: {:?}", id, shape);
        self.entries.push(Entry {
            id,
            shape,
            visible: true,
        });
        id
    }

    /// Returns the shape for `id`, if it is registered.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.shape)
    }

    /// Iterates `(handle, shape)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.entries.iter().map(|entry| (entry.id, &entry.shape))
    }

    /// Number of committed shapes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no shape has been committed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shows or hides a shape without removing it.
    ///
    /// Hidden shapes are skipped by [`ShapeRegistry::hits_at`]. Returns
    /// false if `id` is not registered.
    pub fn set_visible(&mut self, id: ShapeId, visible: bool) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Returns all visible shapes containing `p`, topmost first.
    ///
    /// Iterates in reverse insertion order so the most recently committed
    /// match comes first; callers take the first element for "select
    /// topmost" or the whole list to inspect overlapping annotations.
    pub fn hits_at(&self, p: Point) -> Vec<(ShapeId, &Shape)> {
        self.entries
            .iter()
            .rev()
            .filter(|entry| entry.visible && entry.shape.contains(p))
            .map(|entry| (entry.id, &entry.shape))
            .collect()
    }
}
