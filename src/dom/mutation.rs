//! Tree mutation aliases

use web_sys::Node;

use crate::dom::{DomError, DomResult};

/// Append `child` to `parent`, or insert it right before `before` when given.
pub fn add(parent: &Node, child: &Node, before: Option<&Node>) -> DomResult<()> {
    match before {
        None => parent.append_child(child)?,
        Some(reference) => parent.insert_before(child, Some(reference))?,
    };
    Ok(())
}

/// Detach `node` from its parent. `None` is a no-op.
pub fn remove(node: Option<&Node>) -> DomResult<()> {
    let Some(node) = node else {
        log::trace!("remove called without a node, nothing to do");
        return Ok(());
    };

    let parent = node.parent_node().ok_or(DomError::NoParent)?;
    parent.remove_child(node)?;
    Ok(())
}
