use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::config::PageConfig;
use crate::contact::validation::{Field, FieldValues};
use crate::error::PageError;
use crate::interactions::navigation::{anchor_target, SectionGeometry};
use crate::interactions::scroll::ScrollSnapshot;
use crate::page::effects::{Effect, Surface, Target};

/// Contact inputs are plain inputs except the message, which is usually a textarea.
pub enum FieldInput {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl FieldInput {
    fn from_element(id: &str, element: Element) -> Result<Self, PageError> {
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Ok(FieldInput::Input(input)),
            Err(element) => element
                .dyn_into::<HtmlTextAreaElement>()
                .map(FieldInput::TextArea)
                .map_err(|_| PageError::WrongElementType {
                    id: id.to_string(),
                    expected: "text input or textarea",
                }),
        }
    }

    pub fn value(&self) -> String {
        match self {
            FieldInput::Input(input) => input.value(),
            FieldInput::TextArea(area) => area.value(),
        }
    }

    pub fn element(&self) -> &HtmlElement {
        match self {
            FieldInput::Input(input) => input,
            FieldInput::TextArea(area) => area,
        }
    }
}

pub struct FieldHandles {
    pub input: FieldInput,
    pub error: HtmlElement,
}

/// Every element the page behaviors touch, looked up once at startup.
pub struct PageElements {
    window: Window,
    document: Document,
    config: PageConfig,
    pub hamburger: HtmlElement,
    pub nav_menu: HtmlElement,
    pub navbar: HtmlElement,
    pub back_to_top: HtmlElement,
    pub contact_form: HtmlFormElement,
    pub success_message: HtmlElement,
    name: FieldHandles,
    email: FieldHandles,
    message: FieldHandles,
    pub nav_links: Vec<Element>,
    pub anchors: Vec<Element>,
    revealables: Vec<Element>,
    sections: Vec<HtmlElement>,
}

fn by_id<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T, PageError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| PageError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}

fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, PageError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

fn field_handles(document: &Document, config: &PageConfig, field: Field) -> Result<FieldHandles, PageError> {
    let id = config.ids.field(field);
    let input = document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(id.to_string()))?;
    Ok(FieldHandles {
        input: FieldInput::from_element(id, input)?,
        error: by_id(document, &config.ids.field_error(field), "HTML element")?,
    })
}

fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => html.style().set_property(property, value),
        None => Ok(()),
    }
}

impl PageElements {
    pub fn lookup(window: Window, document: Document, config: PageConfig) -> Result<Self, PageError> {
        let ids = &config.ids;
        let selectors = &config.selectors;
        Ok(Self {
            hamburger: by_id(&document, &ids.hamburger, "HTML element")?,
            nav_menu: by_id(&document, &ids.nav_menu, "HTML element")?,
            navbar: by_id(&document, &ids.navbar, "HTML element")?,
            back_to_top: by_id(&document, &ids.back_to_top, "HTML element")?,
            contact_form: by_id(&document, &ids.contact_form, "form")?,
            success_message: by_id(&document, &ids.success_message, "HTML element")?,
            name: field_handles(&document, &config, Field::Name)?,
            email: field_handles(&document, &config, Field::Email)?,
            message: field_handles(&document, &config, Field::Message)?,
            nav_links: query_all(&document, &selectors.nav_link)?,
            anchors: query_all(&document, &selectors.anchor)?,
            revealables: query_all(&document, &selectors.revealable)?,
            sections: query_all(&document, &selectors.section)?,
            window,
            document,
            config,
        })
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn ready_state(&self) -> String {
        self.document.ready_state()
    }

    pub fn revealable_count(&self) -> usize {
        self.revealables.len()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn field(&self, field: Field) -> &FieldHandles {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn field_values(&self) -> FieldValues {
        FieldValues {
            name: self.name.input.value(),
            email: self.email.input.value(),
            message: self.message.input.value(),
        }
    }

    pub fn scroll_snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            scroll_y: self.window.scroll_y().unwrap_or(0.0),
            viewport_height: self
                .window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0),
            revealable_tops: self
                .revealables
                .iter()
                .map(|el| el.get_bounding_client_rect().top())
                .collect(),
            sections: self
                .sections
                .iter()
                .map(|section| SectionGeometry {
                    id: section.id(),
                    offset_top: section.offset_top() as f64,
                    height: section.offset_height() as f64,
                })
                .collect(),
        }
    }

    /// Document offset of the element an in-page href points at. Bare `#`,
    /// selectors the browser rejects and missing targets all give `None`.
    pub fn anchor_offset(&self, href: &str) -> Option<f64> {
        let selector = anchor_target(href)?;
        self.document
            .query_selector(selector)
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()
            .map(|el| el.offset_top() as f64)
    }

    fn resolve(&self, target: &Target) -> Option<Element> {
        let element: Element = match target {
            Target::Hamburger => self.hamburger.clone().into(),
            Target::NavMenu => self.nav_menu.clone().into(),
            Target::Navbar => self.navbar.clone().into(),
            Target::BackToTop => self.back_to_top.clone().into(),
            Target::SuccessMessage => self.success_message.clone().into(),
            Target::Field(field) => self.field(*field).input.element().clone().into(),
            Target::FieldError(field) => self.field(*field).error.clone().into(),
            Target::Revealable(index) => return self.revealables.get(*index).cloned(),
            Target::NavLinkFor(section_id) => {
                let selector = self.config.selectors.nav_link_for(section_id);
                return self.document.query_selector(&selector).ok().flatten();
            }
        };
        Some(element)
    }

    fn try_apply(&self, effect: &Effect) -> Result<(), JsValue> {
        match effect {
            Effect::AddClass(target, class) => {
                if let Some(el) = self.resolve(target) {
                    el.class_list().add_1(class)?;
                }
            }
            Effect::RemoveClass(target, class) => {
                if let Some(el) = self.resolve(target) {
                    el.class_list().remove_1(class)?;
                }
            }
            Effect::ToggleClass(target, class) => {
                if let Some(el) = self.resolve(target) {
                    el.class_list().toggle(class)?;
                }
            }
            Effect::SetStyle {
                target,
                property,
                value,
            } => {
                if let Some(el) = self.resolve(target) {
                    set_style(&el, property, value)?;
                }
            }
            Effect::SetText(target, text) => {
                if let Some(el) = self.resolve(target) {
                    el.set_text_content(Some(text.as_str()));
                }
            }
            Effect::ScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(*top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            Effect::ResetForm => self.contact_form.reset(),
            Effect::Alert(message) => self.window.alert_with_message(message)?,
            Effect::HideAfter { target, delay_ms } => {
                if let Some(el) = self.resolve(target) {
                    Timeout::new(*delay_ms, move || {
                        let _ = set_style(&el, "display", "none");
                    })
                    .forget();
                }
            }
        }
        Ok(())
    }
}

impl Surface for PageElements {
    fn apply(&self, effect: &Effect) {
        if let Err(e) = self.try_apply(effect) {
            warn!("Failed to apply {:?}: {:?}", effect, e);
        }
    }
}
