use crate::config::PageConfig;
use crate::interactions::navigation::{self, SectionGeometry};
use crate::page::effects::{Effect, Target, ACTIVE_CLASS, SHADOW_RESTING, SHADOW_SCROLLED};

/// Everything the scroll-driven behaviors read, taken fresh on each event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// Viewport-relative top of each revealable, in document order.
    pub revealable_tops: Vec<f64>,
    pub sections: Vec<SectionGeometry>,
}

/// Reveals every element whose top has crossed above the threshold line.
/// Only ever adds the class: a revealed element stays revealed.
pub fn reveal(viewport_height: f64, revealable_tops: &[f64], threshold: f64) -> Vec<Effect> {
    let line = viewport_height - threshold;
    revealable_tops
        .iter()
        .enumerate()
        .filter(|(_, top)| **top < line)
        .map(|(index, _)| Effect::AddClass(Target::Revealable(index), ACTIVE_CLASS))
        .collect()
}

pub fn navbar_shadow(scroll_y: f64, shadow_after: f64) -> Effect {
    let shadow = if scroll_y > shadow_after {
        SHADOW_SCROLLED
    } else {
        SHADOW_RESTING
    };
    Effect::style(Target::Navbar, "box-shadow", shadow)
}

pub fn back_to_top_visibility(scroll_y: f64, visible_after: f64) -> Vec<Effect> {
    let (opacity, pointer_events) = if scroll_y > visible_after {
        ("1", "auto")
    } else {
        ("0", "none")
    };
    vec![
        Effect::style(Target::BackToTop, "opacity", opacity),
        Effect::style(Target::BackToTop, "pointer-events", pointer_events),
    ]
}

/// Hidden and unclickable until the first scroll says otherwise.
pub fn back_to_top_initial() -> Vec<Effect> {
    vec![
        Effect::style(Target::BackToTop, "opacity", "0"),
        Effect::style(Target::BackToTop, "pointer-events", "none"),
        Effect::style(Target::BackToTop, "transition", "opacity 0.3s ease"),
    ]
}

/// Whether `load` has already fired by the time listeners are attached, so
/// the load-time tick has to run right away instead.
pub fn initial_tick_needed(ready_state: &str) -> bool {
    ready_state == "complete"
}

pub fn scroll_to_top() -> Vec<Effect> {
    vec![Effect::ScrollTo { top: 0.0 }]
}

/// One scroll tick. Recomputes every scroll-derived flag from the snapshot,
/// with no throttling and nothing carried over from earlier ticks.
pub fn on_scroll(snapshot: &ScrollSnapshot, config: &PageConfig) -> Vec<Effect> {
    let mut effects = reveal(
        snapshot.viewport_height,
        &snapshot.revealable_tops,
        config.reveal_threshold,
    );
    effects.push(navbar_shadow(snapshot.scroll_y, config.navbar_shadow_after));
    effects.extend(back_to_top_visibility(
        snapshot.scroll_y,
        config.back_to_top_after,
    ));
    effects.extend(navigation::highlight_active_links(
        snapshot.scroll_y,
        &snapshot.sections,
        config.section_offset,
    ));
    effects
}
