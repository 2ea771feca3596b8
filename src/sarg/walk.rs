use super::SargNode;

/// Decision returned by a walk visitor for the node it was handed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkControl {
    /// Descend into the node's children.
    Continue,
    /// Skip the node's children.
    Stop,
}

/// Visits `node` and its descendants in pre-order, left before right.
///
/// Children of a node are skipped when `visit` returns [`WalkControl::Stop`]
/// for it. Traversal uses an explicit stack, so tree depth is not limited by
/// the call stack.
pub fn walk<'a, F>(node: &'a SargNode, mut visit: F)
where
    F: FnMut(&'a SargNode) -> WalkControl,
{
    let mut pending = vec![node];
    while let Some(current) = pending.pop() {
        if visit(current) == WalkControl::Stop {
            continue;
        }
        if let Some(right) = current.right() {
            pending.push(right);
        }
        if let Some(left) = current.left() {
            pending.push(left);
        }
    }
}
