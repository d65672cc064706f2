use crate::contact::validation::Field;

pub const ACTIVE_CLASS: &str = "active";

pub const SHADOW_SCROLLED: &str = "0 4px 20px rgba(0, 0, 0, 0.5)";
pub const SHADOW_RESTING: &str = "0 2px 10px rgba(0, 0, 0, 0.3)";

pub const ERROR_BORDER: &str = "#ff4444";
pub const NEUTRAL_BORDER: &str = "rgba(0, 212, 255, 0.2)";

/// Element an effect lands on. Revealables are indexed in document order as
/// captured at startup; nav links are resolved by the section they point at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Hamburger,
    NavMenu,
    Navbar,
    BackToTop,
    SuccessMessage,
    Field(Field),
    FieldError(Field),
    Revealable(usize),
    NavLinkFor(String),
}

/// A single DOM mutation. Behaviors return these instead of touching the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    AddClass(Target, &'static str),
    RemoveClass(Target, &'static str),
    ToggleClass(Target, &'static str),
    SetStyle {
        target: Target,
        property: &'static str,
        value: &'static str,
    },
    SetText(Target, String),
    ScrollTo { top: f64 },
    ResetForm,
    Alert(String),
    /// One-shot `display: none` after a delay. Never cancelled.
    HideAfter { target: Target, delay_ms: u32 },
}

impl Effect {
    pub fn style(target: Target, property: &'static str, value: &'static str) -> Self {
        Effect::SetStyle {
            target,
            property,
            value,
        }
    }
}

/// Anything effects can be applied to: the live document, or a fake in tests.
pub trait Surface {
    fn apply(&self, effect: &Effect);

    fn apply_all(&self, effects: &[Effect]) {
        for effect in effects {
            self.apply(effect);
        }
    }
}

#[cfg(test)]
pub mod fake {
    use super::{Effect, Surface, Target};
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    /// In-memory page: class sets and inline styles per target, plus a log of
    /// the side effects that have no state (alerts, scrolls, resets, timers).
    #[derive(Default)]
    pub struct FakePage {
        classes: RefCell<HashMap<Target, HashSet<&'static str>>>,
        styles: RefCell<HashMap<(Target, &'static str), &'static str>>,
        texts: RefCell<HashMap<Target, String>>,
        pub alerts: RefCell<Vec<String>>,
        pub scrolls: RefCell<Vec<f64>>,
        pub resets: RefCell<usize>,
        pub timers: RefCell<Vec<(Target, u32)>>,
    }

    impl FakePage {
        pub fn with_class(self, target: Target, class: &'static str) -> Self {
            self.classes
                .borrow_mut()
                .entry(target)
                .or_default()
                .insert(class);
            self
        }

        pub fn has_class(&self, target: &Target, class: &str) -> bool {
            self.classes
                .borrow()
                .get(target)
                .map_or(false, |set| set.contains(class))
        }

        pub fn style(&self, target: Target, property: &'static str) -> Option<&'static str> {
            self.styles.borrow().get(&(target, property)).copied()
        }

        pub fn text(&self, target: &Target) -> Option<String> {
            self.texts.borrow().get(target).cloned()
        }
    }

    impl Surface for FakePage {
        fn apply(&self, effect: &Effect) {
            match effect {
                Effect::AddClass(target, class) => {
                    self.classes
                        .borrow_mut()
                        .entry(target.clone())
                        .or_default()
                        .insert(*class);
                }
                Effect::RemoveClass(target, class) => {
                    if let Some(set) = self.classes.borrow_mut().get_mut(target) {
                        set.remove(class);
                    }
                }
                Effect::ToggleClass(target, class) => {
                    let mut classes = self.classes.borrow_mut();
                    let set = classes.entry(target.clone()).or_default();
                    if !set.remove(class) {
                        set.insert(*class);
                    }
                }
                Effect::SetStyle {
                    target,
                    property,
                    value,
                } => {
                    self.styles
                        .borrow_mut()
                        .insert((target.clone(), *property), *value);
                }
                Effect::SetText(target, text) => {
                    self.texts.borrow_mut().insert(target.clone(), text.clone());
                }
                Effect::ScrollTo { top } => self.scrolls.borrow_mut().push(*top),
                Effect::ResetForm => *self.resets.borrow_mut() += 1,
                Effect::Alert(message) => self.alerts.borrow_mut().push(message.clone()),
                Effect::HideAfter { target, delay_ms } => {
                    self.timers.borrow_mut().push((target.clone(), *delay_ms))
                }
            }
        }
    }
}
