//! Drag-and-drop reconciliation
//!
//! One pass per frame: start drags for pressed pointers without a
//! target, reposition active targets, drop on release, and refresh the
//! cursor affordance. The draggable set is insertion-ordered and doubles
//! as z-order priority; selection scans it topmost first.

use tracing::debug;

use super::events::Cursor;
use super::pointer::Pointer;
use crate::scene::{NodeId, Stage};

/// One entry in the draggable set
#[derive(Debug, Clone, Copy)]
pub struct Draggable {
    /// The registered node
    pub node: NodeId,
    /// Entries stay registered while disabled, but are skipped by
    /// selection and the cursor pass
    pub enabled: bool,
}

/// Runs the drag-and-drop pass for every pointer
pub(crate) fn update_drag_and_drop(
    pointers: &mut [Pointer],
    draggables: &mut Vec<Draggable>,
    stage: &mut dyn Stage,
) {
    for pointer in pointers.iter_mut() {
        if pointer.is_down {
            if pointer.drag_target.is_none() {
                // Scan from the top of the stack down; the first hit wins
                for index in (0..draggables.len()).rev() {
                    let entry = draggables[index];
                    if entry.enabled && pointer.hit_test(stage, entry.node) {
                        let global = stage.global_position(entry.node);
                        pointer.drag_offset = [
                            pointer.x() - global[0],
                            pointer.y() - global[1],
                        ];
                        pointer.drag_target = Some(entry.node);

                        // Promote the node above its siblings and to the
                        // top of the draggable stack
                        stage.bring_to_front(entry.node);
                        let entry = draggables.remove(index);
                        draggables.push(entry);

                        debug!(node = ?entry.node, "drag started");
                        break;
                    }
                }
            } else if let Some(target) = pointer.drag_target {
                stage.set_position(
                    target,
                    [
                        pointer.x() - pointer.drag_offset[0],
                        pointer.y() - pointer.drag_offset[1],
                    ],
                );
            }
        }

        if pointer.is_up && pointer.drag_target.take().is_some() {
            debug!("drag dropped");
        }

        // Hand icon over the first draggable under the pointer
        for entry in draggables.iter() {
            if entry.enabled && pointer.hit_test(stage, entry.node) {
                if pointer.visible() {
                    pointer.set_cursor(Cursor::Pointer);
                }
                break;
            } else if pointer.visible() {
                pointer.set_cursor(Cursor::Default);
            }
        }
    }
}
