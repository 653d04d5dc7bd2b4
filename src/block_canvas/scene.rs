use super::geometry::{Point, Viewport};
use super::placement::random_position;
use dioxus::logger::tracing::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(pub usize);

impl BlockId {
    pub const ROOT: BlockId = BlockId(0);
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub position: Point,
    pub parent_id: Option<BlockId>,
}

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("block {0} does not exist")]
    UnknownParent(BlockId),
}

/// The authoritative, append-only list of blocks.
///
/// Ids equal the index of the block in `blocks`: a block is only ever appended
/// with `id = blocks.len()` and nothing is removed.
pub struct SceneModel {
    blocks: Vec<Block>,
    padding: f64,
    rng: SmallRng,
}

impl SceneModel {
    /// Starts a scene holding only the root block.
    pub fn new(viewport: Viewport, padding: f64) -> Self {
        Self::with_rng(SmallRng::from_entropy(), viewport, padding)
    }

    #[cfg(test)]
    pub fn with_seed(seed: u64, viewport: Viewport, padding: f64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed), viewport, padding)
    }

    fn with_rng(mut rng: SmallRng, viewport: Viewport, padding: f64) -> Self {
        let root = Block {
            id: BlockId::ROOT,
            position: random_position(&mut rng, viewport, padding),
            parent_id: None,
        };
        info!("root block placed at ({}, {})", root.position.x, root.position.y);
        Self {
            blocks: vec![root],
            padding,
            rng,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id.0)
    }

    pub fn parent_position(&self, id: BlockId) -> Option<Point> {
        let parent = self.get(id)?.parent_id?;
        self.get(parent).map(|b| b.position)
    }

    /// Appends a child of `parent_id` at a random spot in `viewport`.
    ///
    /// `hint` is the parent's position as the caller saw it; placement ignores it.
    pub fn create_child_block(
        &mut self,
        parent_id: BlockId,
        hint: Point,
        viewport: Viewport,
    ) -> Result<BlockId, SceneError> {
        if self.get(parent_id).is_none() {
            return Err(SceneError::UnknownParent(parent_id));
        }
        let id = BlockId(self.blocks.len());
        let position = random_position(&mut self.rng, viewport, self.padding);
        debug!("add child of {parent_id} (hint at {}, {})", hint.x, hint.y);
        self.blocks.push(Block {
            id,
            position,
            parent_id: Some(parent_id),
        });
        info!("block {id} created under {parent_id}");
        Ok(id)
    }

    /// Moves block `id`. Returns `false`, changing nothing, if there is no such block.
    pub fn update_block_position(&mut self, id: BlockId, position: Point) -> bool {
        match self.blocks.get_mut(id.0) {
            Some(block) => {
                block.position = position;
                true
            }
            None => {
                warn!("position update for unknown block {id}");
                false
            }
        }
    }
}
