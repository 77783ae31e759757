//! Depth-first traversal with entry and exit callbacks.

use crate::node::Node;

/// Callbacks invoked by [`traverse`].
///
/// `enter` runs before a node's children are visited and `exit` after them.
/// `depth` is 0 for the traversal root and grows by one per nesting level.
pub trait Visitor {
    fn enter(&mut self, node: &Node, depth: usize);

    fn exit(&mut self, node: &Node, depth: usize);
}

enum Step<'a> {
    Enter(&'a Node, usize),
    Exit(&'a Node, usize),
}

/// Visit `root` and all of its descendants in document order.
///
/// Every node gets exactly one `enter` and one `exit` call. The walk uses an
/// explicit stack, so nesting depth is not limited by the call stack.
pub fn traverse<V: Visitor + ?Sized>(root: &Node, visitor: &mut V) {
    let mut stack = vec![Step::Enter(root, 0)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(node, depth) => {
                visitor.enter(node, depth);
                stack.push(Step::Exit(node, depth));
                for child in node.children().rev() {
                    stack.push(Step::Enter(child, depth + 1));
                }
            }
            Step::Exit(node, depth) => visitor.exit(node, depth),
        }
    }
}
