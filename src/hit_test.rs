//! Caret hit-testing: screen point to character offset
//!
//! Delegates to the host's caret-from-point primitive and converts the
//! resulting (node, node-local offset) pair to an absolute character
//! offset within the lyrics container. Best-effort by design: a missing
//! API, a point outside the container, or a hit on foreign markup all
//! yield `None` rather than an error.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Node};

/// Character index under a viewport point, or `None` if indeterminate
///
/// Primary primitive is `Document.caretPositionFromPoint`; hosts without
/// it (WebKit) fall back to the non-standard `caretRangeFromPoint`. When
/// neither resolves, the gesture hits no character.
pub fn hit_test(container: &Element, x: f32, y: f32) -> Option<u32> {
    let document = container.owner_document()?;
    let (node, offset) = caret_at_point(&document, x, y)?;
    let container_node: &Node = container.as_ref();
    if !container_node.contains(Some(&node)) {
        return None;
    }
    let preceding = chars_before_node(container_node, &node)?;
    Some(preceding + offset)
}

fn caret_at_point(document: &Document, x: f32, y: f32) -> Option<(Node, u32)> {
    if let Some(caret) = document.caret_position_from_point(x, y) {
        let node = caret.offset_node()?;
        return Some((node, caret.offset()));
    }
    caret_range_fallback(document, x, y)
}

/// WebKit fallback: `caretRangeFromPoint`, reached through Reflect since
/// it is not in the standard bindings
fn caret_range_fallback(document: &Document, x: f32, y: f32) -> Option<(Node, u32)> {
    let doc_js: &JsValue = document.as_ref();
    let func = js_sys::Reflect::get(doc_js, &JsValue::from_str("caretRangeFromPoint")).ok()?;
    let func: js_sys::Function = func.dyn_into().ok()?;
    let range = func
        .call2(
            doc_js,
            &JsValue::from_f64(f64::from(x)),
            &JsValue::from_f64(f64::from(y)),
        )
        .ok()?;
    if range.is_null() || range.is_undefined() {
        return None;
    }
    let node = js_sys::Reflect::get(&range, &JsValue::from_str("startContainer"))
        .ok()?
        .dyn_into::<Node>()
        .ok()?;
    let offset = js_sys::Reflect::get(&range, &JsValue::from_str("startOffset"))
        .ok()?
        .as_f64()? as u32;
    Some((node, offset))
}

/// Characters of text content preceding `target` within `root`
///
/// Depth-first walk over the node tree, summing text-node lengths until
/// the target is reached. `None` if the target is not under `root`.
fn chars_before_node(root: &Node, target: &Node) -> Option<u32> {
    let mut count: u32 = 0;
    if walk(root, target, &mut count) {
        Some(count)
    } else {
        None
    }
}

fn walk(node: &Node, target: &Node, count: &mut u32) -> bool {
    if node.is_same_node(Some(target)) {
        return true;
    }
    if node.node_type() == Node::TEXT_NODE {
        if let Some(text) = node.text_content() {
            *count += text.chars().count() as u32;
        }
        return false;
    }
    let children = node.child_nodes();
    for i in 0..children.length() {
        if let Some(child) = children.item(i) {
            if walk(&child, target, count) {
                return true;
            }
        }
    }
    false
}
