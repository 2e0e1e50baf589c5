//! Accessible Name Computation
//!
//! Precedence, first match wins:
//! 1. `aria-labelledby` - text of the referenced elements, joined by spaces.
//!    An attribute that resolves to nothing falls through to the next tier.
//! 2. `aria-label`
//! 3. `alt` on images (an empty `alt` is a decorative image: empty name)
//! 4. Child content, recursing through the same tiers per child element

use crate::source::{ChildNode, NameSource};

/// Referenced-label attribute
pub const ARIA_LABELLEDBY: &str = "aria-labelledby";
/// Inline label attribute
pub const ARIA_LABEL: &str = "aria-label";
/// Image alternative text attribute
pub const ALT: &str = "alt";

/// Where a label is being computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// The element whose name was asked for: `aria-label` is trimmed
    Root,
    /// A descendant during content composition: `aria-label` is used raw
    Content,
}

/// Compute the accessible name of `element`
///
/// Never fails: an element with no labels and no text yields an empty string.
pub fn accessible_name<S>(source: &S, element: S::Element) -> String
where
    S: NameSource + ?Sized,
{
    if let Some(name) = explicit_label(source, element, Scope::Root) {
        return name;
    }
    name_from_contents(source, element).trim().to_string()
}

/// Tiers 1 and 2
fn explicit_label<S>(source: &S, element: S::Element, scope: Scope) -> Option<String>
where
    S: NameSource + ?Sized,
{
    if let Some(name) = labelled_by(source, element) {
        return Some(name);
    }

    let label = source.attribute(element, ARIA_LABEL).filter(|v| !v.is_empty())?;
    Some(match scope {
        Scope::Root => label.trim().to_string(),
        Scope::Content => label.to_string(),
    })
}

fn labelled_by<S>(source: &S, element: S::Element) -> Option<String>
where
    S: NameSource + ?Sized,
{
    let ids = source.attribute(element, ARIA_LABELLEDBY).filter(|v| !v.is_empty())?;

    let names: Vec<String> = ids.split_whitespace()
        .filter_map(|id| source.element_by_id(id))
        .map(|label| source.text_content(label).trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        tracing::trace!(ids, "aria-labelledby resolved to nothing");
        None
    } else {
        Some(names.join(" "))
    }
}

/// Tiers 1-3 for a descendant; `None` means its children are read instead
fn child_label<S>(source: &S, element: S::Element) -> Option<String>
where
    S: NameSource + ?Sized,
{
    if let Some(label) = explicit_label(source, element, Scope::Content) {
        return Some(label);
    }
    if source.is_image(element) {
        return source.attribute(element, ALT).map(str::to_string);
    }
    None
}

/// Tier 4, untrimmed
///
/// Labels of descendants are prefixed with a space when non-empty; plain
/// descendant content is spliced in as-is. Walks with an explicit stack so
/// deep nesting cannot exhaust the call stack.
fn name_from_contents<S>(source: &S, element: S::Element) -> String
where
    S: NameSource + ?Sized,
{
    let mut name = String::new();
    let mut pending: Vec<ChildNode<'_, S::Element>> = source.child_nodes(element);
    pending.reverse();

    while let Some(child) = pending.pop() {
        match child {
            ChildNode::Text(text) => name.push_str(text),
            ChildNode::Element(child) => match child_label(source, child) {
                Some(label) => {
                    if !label.is_empty() {
                        name.push(' ');
                        name.push_str(&label);
                    }
                }
                None => pending.extend(source.child_nodes(child).into_iter().rev()),
            },
        }
    }

    name
}
