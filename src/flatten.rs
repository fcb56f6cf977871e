//! Flattening pass: owned build tree to contiguous arena.
//!
//! Nodes are emitted in pre-order and each node's own elements are appended
//! before any descendant's, so the subtree of a node always occupies the
//! element range `[start, start + total)`.

use tracing::debug_span;

use crate::build::BuildNode;
use crate::quadtree::{Node, NodeId};

/// Output of [`flatten`]: the element array and the node-record array.
#[derive(Debug)]
pub(crate) struct Flattened<T> {
    pub(crate) elements: Vec<T>,
    pub(crate) nodes: Vec<Node>,
}

/// Consumes the build tree, moving every element into one array.
pub(crate) fn flatten<T>(root: BuildNode<T>, element_count: usize, node_count: usize) -> Flattened<T> {
    let _span = debug_span!("quadtree_flatten", nodes = node_count).entered();
    let mut out = Flattened {
        elements: Vec::with_capacity(element_count),
        nodes: Vec::with_capacity(node_count),
    };
    let _root = emit(root, &mut out);
    debug_assert_eq!(out.nodes.len(), node_count, "node count mismatch");
    out
}

/// Emits `node` and its subtree, returning the node's index.
fn emit<T>(node: BuildNode<T>, out: &mut Flattened<T>) -> NodeId {
    let BuildNode { region, elements, children } = node;

    let id = NodeId::from_index(out.nodes.len());
    let start = out.elements.len();
    let own = elements.len();
    out.nodes.push(Node {
        region,
        start,
        own,
        total: 0,
        children: [None; 4],
    });
    out.elements.extend(elements);

    let mut slots = [None; 4];
    for (slot, child) in slots.iter_mut().zip(children) {
        if let Some(child) = child {
            *slot = Some(emit(*child, out));
        }
    }

    let record = &mut out.nodes[id.index()];
    record.children = slots;
    record.total = out.elements.len() - start;
    debug_assert!(record.total >= own, "subtree total below own count");
    id
}
