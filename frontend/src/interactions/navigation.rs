use crate::page::effects::{Effect, Target, ACTIVE_CLASS};

/// Layout of a `section[id]` as read on the current scroll tick.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGeometry {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

pub fn toggle_menu() -> Vec<Effect> {
    vec![
        Effect::ToggleClass(Target::Hamburger, ACTIVE_CLASS),
        Effect::ToggleClass(Target::NavMenu, ACTIVE_CLASS),
    ]
}

/// Any nav link click closes the mobile menu, open or not.
pub fn close_menu() -> Vec<Effect> {
    vec![
        Effect::RemoveClass(Target::Hamburger, ACTIVE_CLASS),
        Effect::RemoveClass(Target::NavMenu, ACTIVE_CLASS),
    ]
}

/// Selector an in-page anchor points at, if it points anywhere. A bare `#`
/// has no target.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// Smooth scroll that lands the target just below the fixed header.
pub fn scroll_to_anchor(target_offset_top: Option<f64>, header_offset: f64) -> Vec<Effect> {
    match target_offset_top {
        Some(top) => vec![Effect::ScrollTo {
            top: top - header_offset,
        }],
        None => Vec::new(),
    }
}

/// Marks the nav link of every section whose shifted range contains the
/// scroll position and clears the rest. Each section is judged on its own.
pub fn highlight_active_links(
    scroll_y: f64,
    sections: &[SectionGeometry],
    section_offset: f64,
) -> Vec<Effect> {
    sections
        .iter()
        .map(|section| {
            let top = section.offset_top - section_offset;
            let target = Target::NavLinkFor(section.id.clone());
            if scroll_y >= top && scroll_y < top + section.height {
                Effect::AddClass(target, ACTIVE_CLASS)
            } else {
                Effect::RemoveClass(target, ACTIVE_CLASS)
            }
        })
        .collect()
}
