//! DOM focus helpers for windows and the start menu.

use wasm_bindgen::JsCast;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

fn active_element_id() -> String {
    document()
        .and_then(|document| document.active_element())
        .map(|element| element.id())
        .unwrap_or_default()
}

/// Focuses an element by id and reports whether a focusable HTML element was found.
pub(crate) fn focus_element_by_id(id: &str) -> bool {
    let Some(element) = document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return false;
    };
    let _ = element.focus();
    true
}

fn menu_items(menu_id: &str) -> Vec<web_sys::HtmlElement> {
    let Some(nodes) = document()
        .and_then(|document| document.get_element_by_id(menu_id))
        .and_then(|menu| menu.query_selector_all(r#"[role="menuitem"]"#).ok())
    else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .filter(|item| item.get_attribute("aria-disabled").as_deref() != Some("true"))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuStep {
    Next,
    Previous,
    First,
    Last,
}

/// Index reached from `current` by `step` in a list of `len` items, wrapping at both ends.
fn step_index(current: Option<usize>, len: usize, step: MenuStep) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.unwrap_or(0);
    Some(match step {
        MenuStep::Next => (current + 1) % len,
        MenuStep::Previous => (current + len - 1) % len,
        MenuStep::First => 0,
        MenuStep::Last => len - 1,
    })
}

fn move_menu_focus(menu_id: &str, step: MenuStep) -> bool {
    let items = menu_items(menu_id);
    let active_id = active_element_id();
    let current = items
        .iter()
        .position(|item| !active_id.is_empty() && item.id() == active_id);
    let Some(target) = step_index(current, items.len(), step) else {
        return false;
    };
    let _ = items[target].focus();
    true
}

pub(super) fn focus_first_menu_item(menu_id: &str) -> bool {
    move_menu_focus(menu_id, MenuStep::First)
}

/// Arrow/Home/End navigation inside a menu; prevents default when handled.
pub(super) fn handle_menu_roving_keydown(ev: &web_sys::KeyboardEvent, menu_id: &str) -> bool {
    let step = match ev.key().as_str() {
        "ArrowDown" => MenuStep::Next,
        "ArrowUp" => MenuStep::Previous,
        "Home" => MenuStep::First,
        "End" => MenuStep::Last,
        _ => return false,
    };

    let handled = move_menu_focus(menu_id, step);
    if handled {
        ev.prevent_default();
        ev.stop_propagation();
    }
    handled
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn menu_steps_wrap_around() {
        assert_eq!(step_index(Some(2), 3, MenuStep::Next), Some(0));
        assert_eq!(step_index(Some(0), 3, MenuStep::Previous), Some(2));
        assert_eq!(step_index(None, 3, MenuStep::Last), Some(2));
        assert_eq!(step_index(None, 0, MenuStep::First), None);
    }
}
