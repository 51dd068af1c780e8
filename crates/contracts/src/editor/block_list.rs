use serde::{Deserialize, Serialize};

use super::block::{BlockKind, BlockStyle, ContentBlock};

/// Explicit drag state. The view layer forwards DOM drag events to the
/// transitions below instead of carrying reorder logic in callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        active_id: String,
    },
}

/// Ordered list of content blocks plus the in-flight drag, the single
/// source of truth for the block builder.
///
/// Every mutating transition returns whether the list changed so the owner
/// can republish the whole ordered list (and re-arm auto-save) only when
/// something actually moved.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockList {
    blocks: Vec<ContentBlock>,
    #[serde(skip)]
    drag: DragState,
}

impl BlockList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_blocks(blocks: Vec<ContentBlock>) -> Self {
        Self {
            blocks,
            drag: DragState::Idle,
        }
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn to_vec(&self) -> Vec<ContentBlock> {
        self.blocks.clone()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn dragging_id(&self) -> Option<&str> {
        match &self.drag {
            DragState::Dragging { active_id } => Some(active_id),
            DragState::Idle => None,
        }
    }

    /// Append a new block of the given kind; returns its id.
    pub fn add(&mut self, kind: BlockKind) -> String {
        let block = ContentBlock::new(kind);
        let id = block.id.clone();
        self.blocks.push(block);
        id
    }

    /// Remove by id. No-op when the id is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|b| b.id != id);
        self.blocks.len() != before
    }

    /// Replace the matching block's content, last write wins.
    pub fn update_content(&mut self, id: &str, content: String) -> bool {
        match self.index_of(id) {
            Some(i) => {
                self.blocks[i].content = content;
                true
            }
            None => false,
        }
    }

    /// Replace the matching block's style, last write wins.
    pub fn update_style(&mut self, id: &str, style: BlockStyle) -> bool {
        match self.index_of(id) {
            Some(i) => {
                self.blocks[i].style = Some(style);
                true
            }
            None => false,
        }
    }

    /// Enter the dragging state. No-op when the id does not resolve.
    pub fn begin_drag(&mut self, id: &str) -> bool {
        if self.index_of(id).is_some() {
            self.drag = DragState::Dragging {
                active_id: id.to_string(),
            };
            true
        } else {
            false
        }
    }

    /// Drop the active block onto `over_id`: the active block moves to the
    /// over block's position and the others shift (array-move, not swap).
    /// Always returns to `Idle`; returns whether the order changed.
    pub fn drop_on(&mut self, over_id: &str) -> bool {
        let active_id = match std::mem::take(&mut self.drag) {
            DragState::Dragging { active_id } => active_id,
            DragState::Idle => return false,
        };
        let (from, to) = match (self.index_of(&active_id), self.index_of(over_id)) {
            (Some(from), Some(to)) if from != to => (from, to),
            _ => return false,
        };
        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        true
    }

    /// Abort the drag, order untouched.
    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(n: usize) -> BlockList {
        let mut list = BlockList::new();
        for _ in 0..n {
            list.add(BlockKind::Text);
        }
        list
    }

    fn ids(list: &BlockList) -> Vec<String> {
        list.blocks().iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let list = list_of(50);
        let mut seen = ids(&list);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 50);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = list_of(3);
        let before = ids(&list);
        assert!(!list.remove("no-such-id"));
        assert_eq!(ids(&list), before);
    }

    #[test]
    fn test_update_content_last_write_wins() {
        let mut list = BlockList::new();
        let id = list.add(BlockKind::Heading);
        assert!(list.update_content(&id, "first".into()));
        assert!(list.update_content(&id, "second".into()));
        assert_eq!(list.get(&id).unwrap().content, "second");
    }

    #[test]
    fn test_drop_moves_block_with_array_move_semantics() {
        let mut list = list_of(4);
        let before = ids(&list);

        // move index 2 to index 0
        assert!(list.begin_drag(&before[2]));
        assert!(list.drop_on(&before[0]));

        let after = ids(&list);
        assert_eq!(
            after,
            vec![
                before[2].clone(),
                before[0].clone(),
                before[1].clone(),
                before[3].clone()
            ]
        );
        // no duplication or loss
        let mut sorted_before = before.clone();
        let mut sorted_after = after.clone();
        sorted_before.sort();
        sorted_after.sort();
        assert_eq!(sorted_before, sorted_after);
        assert_eq!(list.drag_state(), &DragState::Idle);
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let mut list = list_of(3);
        let before = ids(&list);
        list.begin_drag(&before[1]);
        assert!(!list.drop_on(&before[1]));
        assert_eq!(ids(&list), before);
        assert_eq!(list.drag_state(), &DragState::Idle);
    }

    #[test]
    fn test_drop_without_begin_is_noop() {
        let mut list = list_of(2);
        let before = ids(&list);
        assert!(!list.drop_on(&before[0]));
        assert_eq!(ids(&list), before);
    }

    #[test]
    fn test_cancel_leaves_order_untouched() {
        let mut list = list_of(3);
        let before = ids(&list);
        list.begin_drag(&before[0]);
        list.cancel_drag();
        assert_eq!(ids(&list), before);
        assert_eq!(list.drag_state(), &DragState::Idle);
    }

    #[test]
    fn test_begin_drag_unknown_id_stays_idle() {
        let mut list = list_of(2);
        assert!(!list.begin_drag("ghost"));
        assert_eq!(list.drag_state(), &DragState::Idle);
    }
}
