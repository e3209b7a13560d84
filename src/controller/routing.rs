use crate::types::{SwatchAction, SwatchIndex};

/// An element of the markup a click can land on.
pub trait MarkupNode: Sized {
    fn parent(&self) -> Option<Self>;

    /// The raw `type` marker, if the element carries one.
    fn action_type(&self) -> Option<String>;

    /// Set when the element is itself a swatch column.
    fn swatch_index(&self) -> Option<SwatchIndex>;
}

/// Resolves a click target to the swatch and action it asks for.
///
/// The nearest ancestor (or the target itself) carrying a `type` marker picks
/// the action, and the column containing it picks the swatch. A click on a
/// lock icon and on the button wrapping it therefore resolve the same way.
pub fn resolve_click<N: MarkupNode>(target: N) -> Option<(SwatchIndex, SwatchAction)> {
    let mut action = None;
    let mut current = Some(target);
    while let Some(node) = current {
        if action.is_none() {
            if let Some(kind) = node.action_type() {
                action = Some(SwatchAction::from_type(&kind)?);
            }
        }
        if let Some(index) = node.swatch_index() {
            return action.map(|action| (index, action));
        }
        current = node.parent();
    }
    None
}
