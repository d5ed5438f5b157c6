use glam::IVec2;
use strum_macros::Display;
use tracing::debug;

use crate::constants::score;
use crate::map::Grid;
use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ItemKind {
    Pellet,
    PowerPellet,
}

impl ItemKind {
    pub fn score(self) -> u32 {
        match self {
            ItemKind::Pellet => score::PELLET,
            ItemKind::PowerPellet => score::POWER_PELLET,
        }
    }
}

/// Placement probabilities for [`Collectibles::populate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Densities {
    pub power_pellet: f64,
    pub pellet: f64,
}

/// Both collectible collections. A cell holds at most one collectible of either kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collectibles {
    pellets: Vec<IVec2>,
    power_pellets: Vec<IVec2>,
}

impl Collectibles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Randomly scatters collectibles over the open cells of `grid`.
    ///
    /// Cells within `safe_radius` of `start` on both axes are skipped. Each remaining
    /// cell gets a power pellet with `densities.power_pellet`, otherwise an ordinary
    /// pellet with `densities.pellet`. If nothing was placed, a single pellet goes on
    /// the first eligible cell so the level can still be completed.
    pub fn populate(grid: &Grid, start: IVec2, safe_radius: i32, densities: Densities, rng: &mut dyn RandomSource) -> Self {
        let mut items = Self::new();
        let mut first_eligible = None;

        for cell in grid.open_cells() {
            let offset = (cell - start).abs();
            if offset.x <= safe_radius && offset.y <= safe_radius {
                continue;
            }
            first_eligible.get_or_insert(cell);

            if rng.chance(densities.power_pellet) {
                items.power_pellets.push(cell);
            } else if rng.chance(densities.pellet) {
                items.pellets.push(cell);
            }
        }

        if items.is_empty() {
            if let Some(cell) = first_eligible {
                items.pellets.push(cell);
            }
        }

        debug!(
            pellets = items.pellets.len(),
            power_pellets = items.power_pellets.len(),
            "Collectibles placed"
        );
        items
    }

    /// Places a collectible. Returns `false` if the cell is already taken.
    pub fn place(&mut self, kind: ItemKind, cell: IVec2) -> bool {
        if self.at(cell).is_some() {
            return false;
        }
        self.list_mut(kind).push(cell);
        true
    }

    /// Removes the collectible of `kind` at `cell`, if there is one.
    pub fn take(&mut self, kind: ItemKind, cell: IVec2) -> bool {
        let list = self.list_mut(kind);
        match list.iter().position(|&c| c == cell) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }

    /// The kind of collectible at `cell`, if any.
    pub fn at(&self, cell: IVec2) -> Option<ItemKind> {
        if self.pellets.contains(&cell) {
            Some(ItemKind::Pellet)
        } else if self.power_pellets.contains(&cell) {
            Some(ItemKind::PowerPellet)
        } else {
            None
        }
    }

    pub fn pellets(&self) -> &[IVec2] {
        &self.pellets
    }

    pub fn power_pellets(&self) -> &[IVec2] {
        &self.power_pellets
    }

    pub fn len(&self) -> usize {
        self.pellets.len() + self.power_pellets.len()
    }

    /// True once both collections are empty.
    pub fn is_empty(&self) -> bool {
        self.pellets.is_empty() && self.power_pellets.is_empty()
    }

    fn list_mut(&mut self, kind: ItemKind) -> &mut Vec<IVec2> {
        match kind {
            ItemKind::Pellet => &mut self.pellets,
            ItemKind::PowerPellet => &mut self.power_pellets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_scores() {
        assert_eq!(ItemKind::Pellet.score(), 10);
        assert_eq!(ItemKind::PowerPellet.score(), 50);
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut items = Collectibles::new();
        assert!(items.place(ItemKind::Pellet, IVec2::new(3, 3)));
        assert!(!items.place(ItemKind::PowerPellet, IVec2::new(3, 3)));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_take_only_matching_kind() {
        let mut items = Collectibles::new();
        items.place(ItemKind::PowerPellet, IVec2::new(2, 2));
        assert!(!items.take(ItemKind::Pellet, IVec2::new(2, 2)));
        assert!(items.take(ItemKind::PowerPellet, IVec2::new(2, 2)));
        assert!(items.is_empty());
    }
}
