use glam::Vec2;
use std::collections::HashMap;

/// An entry in the spatial hash grid.
#[derive(Debug, Clone)]
struct SpatialHashEntry<T> {
    position: Vec2,
    data: T,
}

/// A uniform spatial hash grid for broad-phase collision detection.
///
/// Divides the plane into square cells of a fixed size and maps entries to
/// cells by flooring their coordinates. Entries sharing a cell are candidate
/// pairs; entries in different cells are never paired, even when they sit
/// close to a shared cell boundary. That miss is an accepted approximation:
/// pick a cell size safely larger than twice the typical object diameter and
/// treat it as a tunable, not a guarantee of exhaustive detection.
///
/// A fresh grid is built for every detection pass; there is no incremental
/// update.
///
/// # Type Parameters
///
/// * `T` - The type of data associated with each entry.
///
/// # Example
///
/// ```
/// use ricochet_spatial::SpatialHash;
/// use glam::Vec2;
///
/// let mut hash = SpatialHash::new(10.0); // 10 unit cell size
///
/// hash.insert(Vec2::new(5.0, 5.0), "A");
/// hash.insert(Vec2::new(15.0, 5.0), "B"); // different cell
/// hash.insert(Vec2::new(5.5, 5.5), "C"); // same cell as A
///
/// let pairs: Vec<_> = hash.cell_pairs().collect();
/// assert_eq!(pairs.len(), 1); // only (A, C)
/// ```
#[derive(Debug)]
pub struct SpatialHash<T> {
    cell_size: f32,
    inv_cell_size: f32,
    cells: HashMap<(i32, i32), Vec<SpatialHashEntry<T>>>,
}

impl<T> SpatialHash<T> {
    /// Creates a new spatial hash with the given cell size.
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            inv_cell_size: 1.0 / cell_size,
            cells: HashMap::new(),
        }
    }

    /// Returns the cell size.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    fn cell_key(&self, position: Vec2) -> (i32, i32) {
        (
            (position.x * self.inv_cell_size).floor() as i32,
            (position.y * self.inv_cell_size).floor() as i32,
        )
    }

    /// Inserts an entry at the given position.
    pub fn insert(&mut self, position: Vec2, data: T) {
        let key = self.cell_key(position);
        self.cells
            .entry(key)
            .or_default()
            .push(SpatialHashEntry { position, data });
    }

    /// Yields every unordered pair of entries that share a cell.
    ///
    /// Within a cell, pairs come out in insertion order, which keeps
    /// tie-breaking deterministic for a single detection pass. The sequence
    /// is finite and consumed once; build a fresh grid for the next pass.
    pub fn cell_pairs(&self) -> impl Iterator<Item = (&T, &T)> {
        let mut pairs = Vec::new();
        for entries in self.cells.values() {
            for i in 0..entries.len() {
                for j in (i + 1)..entries.len() {
                    pairs.push((&entries[i].data, &entries[j].data));
                }
            }
        }
        pairs.into_iter()
    }

    /// Queries all entries within the given radius of a position.
    pub fn query_radius(&self, position: Vec2, radius: f32) -> impl Iterator<Item = (Vec2, &T)> {
        let radius_sq = radius * radius;
        let (cx, cy) = self.cell_key(position);
        let cell_radius = (radius * self.inv_cell_size).ceil() as i32;

        let mut results = Vec::new();

        for dx in -cell_radius..=cell_radius {
            for dy in -cell_radius..=cell_radius {
                let key = (cx + dx, cy + dy);
                if let Some(entries) = self.cells.get(&key) {
                    for e in entries {
                        if e.position.distance_squared(position) <= radius_sq {
                            results.push((e.position, &e.data));
                        }
                    }
                }
            }
        }

        results.into_iter()
    }

    /// Returns the total number of entries.
    pub fn len(&self) -> usize {
        self.cells.values().map(|v| v.len()).sum()
    }

    /// Returns `true` if empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Clears all entries.
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
