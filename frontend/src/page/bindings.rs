use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, EventTarget};

use crate::config::{PageConfig, CONFIG_ELEMENT_ID};
use crate::contact::submission::{self, HttpFormTransport};
use crate::contact::validation::{self, Field};
use crate::error::PageError;
use crate::interactions::{navigation, scroll};
use crate::page::effects::Surface;
use crate::page::elements::PageElements;

/// Registers a listener for the lifetime of the page. Listeners are never
/// removed, so the closure is leaked on purpose.
fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn load_config(document: &Document) -> Result<PageConfig, PageError> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(raw) if !raw.trim().is_empty() => {
            debug!("Applying page config overrides");
            PageConfig::from_json(&raw)
        }
        _ => Ok(PageConfig::default()),
    }
}

/// Looks up every required element and binds all page behaviors. Any missing
/// element aborts before a single listener is attached.
pub fn start() -> Result<(), PageError> {
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let document = window.document().ok_or(PageError::NoDocument)?;
    let config = load_config(&document)?;
    let page = Rc::new(PageElements::lookup(window, document, config)?);

    bind_menu(&page)?;
    bind_anchors(&page)?;
    bind_scroll(&page)?;
    bind_fields(&page)?;
    bind_submit(&page)?;
    bind_back_to_top(&page)?;

    // The wasm module can finish instantiating after `load` already fired.
    let ready_state = page.ready_state();
    if scroll::initial_tick_needed(&ready_state) {
        debug!("Document already {}, running initial scroll tick", ready_state);
        scroll_tick(&page);
    }

    info!(
        "Landing page bound: {} nav links, {} anchors, {} revealables, {} sections",
        page.nav_links.len(),
        page.anchors.len(),
        page.revealable_count(),
        page.section_count()
    );
    Ok(())
}

fn bind_menu(page: &Rc<PageElements>) -> Result<(), PageError> {
    let page_ref = page.clone();
    listen(&page.hamburger, "click", move |_| {
        debug!("Toggling mobile menu");
        page_ref.apply_all(&navigation::toggle_menu());
    })?;

    for link in &page.nav_links {
        let page = page.clone();
        listen(link, "click", move |_| {
            page.apply_all(&navigation::close_menu());
        })?;
    }
    Ok(())
}

fn bind_anchors(page: &Rc<PageElements>) -> Result<(), PageError> {
    for anchor in &page.anchors {
        let page = page.clone();
        let anchor_el = anchor.clone();
        listen(anchor, "click", move |e: Event| {
            e.prevent_default();
            let href = anchor_el.get_attribute("href").unwrap_or_default();
            let offset = page.anchor_offset(&href);
            if offset.is_none() {
                debug!("No scroll target for {:?}", href);
            }
            page.apply_all(&navigation::scroll_to_anchor(
                offset,
                page.config().header_offset,
            ));
        })?;
    }
    Ok(())
}

fn scroll_tick(page: &PageElements) {
    page.apply_all(&scroll::on_scroll(&page.scroll_snapshot(), page.config()));
}

fn bind_scroll(page: &Rc<PageElements>) -> Result<(), PageError> {
    for event in ["load", "scroll"] {
        let page_ref = page.clone();
        listen(page.window(), event, move |_| scroll_tick(&page_ref))?;
    }
    Ok(())
}

fn bind_fields(page: &Rc<PageElements>) -> Result<(), PageError> {
    for field in Field::ALL {
        let input = page.field(field).input.element();
        {
            let page = page.clone();
            listen(input, "blur", move |_| {
                let value = page.field(field).input.value();
                let effects = validation::on_blur(field, &value);
                debug!("{:?} validated on blur", field);
                page.apply_all(&effects);
            })?;
        }
        {
            let page = page.clone();
            listen(input, "input", move |_| {
                let value = page.field(field).input.value();
                page.apply_all(&validation::on_input(field, &value));
            })?;
        }
    }
    Ok(())
}

fn bind_submit(page: &Rc<PageElements>) -> Result<(), PageError> {
    let page_ref = page.clone();
    listen(&page.contact_form, "submit", move |e: Event| {
        e.prevent_default();

        let page = page_ref.clone();
        let values = page.field_values();
        let transport = HttpFormTransport::new(page.contact_form.clone());
        let action = page.contact_form.action();
        spawn_local(async move {
            let hide_ms = page.config().success_hide_ms;
            let sent =
                submission::submit_contact(&transport, &*page, &action, &values, hide_ms)
                    .await;
            if !sent {
                debug!("Contact form has invalid fields, not sending");
            }
        });
    })
}

fn bind_back_to_top(page: &Rc<PageElements>) -> Result<(), PageError> {
    page.apply_all(&scroll::back_to_top_initial());

    let page_ref = page.clone();
    listen(&page.back_to_top, "click", move |_| {
        page_ref.apply_all(&scroll::scroll_to_top());
    })
}
