// app/ui/src/views.rs
//
// Static markup of the greeting page and the two text bindings.
//
use session::Message;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};
use wasm_bindgen_futures::spawn_local;

use crate::bridge;
use crate::state::{dispatch, js_error_text, AppState};

pub const UPDATE_TEXT_ID: &str = "update-text";
pub const GREET_MSG_ID: &str = "greet-msg";
pub const GREET_INPUT_ID: &str = "greet-input";
pub const GREET_FORM_ID: &str = "greet-form";

/// (href, image src, css class, alt)
pub const LOGO_LINKS: [(&str, &str, &str, &str); 3] = [
    ("https://vitejs.dev", "/vite.svg", "logo vite", "Vite logo"),
    ("https://tauri.app", "/tauri.svg", "logo tauri", "Tauri logo"),
    ("https://solidjs.com", "/solid.svg", "logo solid", "Solid logo"),
];

pub fn create_page(document: &Document) -> Result<(), JsValue> {
    let container = document.create_element("div")?;
    container.set_class_name("container");

    let title = document.create_element("h1")?;
    title.set_text_content(Some("Welcome to Tauri!"));
    container.append_child(&title)?;

    let logo_row = create_logo_row(document)?;
    container.append_child(&logo_row)?;

    let hint = document.create_element("p")?;
    hint.set_text_content(Some("Click on the Tauri, Vite, and Solid logos to learn more."));
    container.append_child(&hint)?;

    let greet_form = create_greet_form(document)?;
    container.append_child(&greet_form)?;

    let update_text = document.create_element("p")?;
    update_text.set_id(UPDATE_TEXT_ID);
    container.append_child(&update_text)?;

    let greet_msg = document.create_element("p")?;
    greet_msg.set_id(GREET_MSG_ID);
    container.append_child(&greet_msg)?;

    let body = document.body().ok_or(JsValue::from_str("No body found"))?;
    body.append_child(&container)?;

    Ok(())
}

fn create_logo_row(document: &Document) -> Result<Element, JsValue> {
    let row = document.create_element("div")?;
    row.set_class_name("row");

    for (href, src, class, alt) in LOGO_LINKS {
        let link = document.create_element("a")?;
        link.set_attribute("href", href)?;
        link.set_attribute("target", "_blank")?;

        let img = document.create_element("img")?;
        img.set_attribute("src", src)?;
        img.set_class_name(class);
        img.set_attribute("alt", alt)?;
        link.append_child(&img)?;

        // The webview ignores _blank; hand the URL to the system browser.
        let click = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            e.prevent_default();
            spawn_local(async move {
                if let Err(err) = bridge::open_external(href).await {
                    web_sys::console::warn_1(&format!("open {} failed: {}", href, js_error_text(&err)).into());
                }
            });
        }) as Box<dyn FnMut(_)>);
        link.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();

        row.append_child(&link)?;
    }

    Ok(row)
}

fn create_greet_form(document: &Document) -> Result<Element, JsValue> {
    let form = document.create_element("form")?;
    form.set_id(GREET_FORM_ID);
    form.set_class_name("row");

    let input = document.create_element("input")?;
    input.set_id(GREET_INPUT_ID);
    input.set_attribute("placeholder", "Enter a name...")?;

    let button = document.create_element("button")?;
    button.set_attribute("type", "submit")?;
    button.set_text_content(Some("Greet"));

    {
        let change = Closure::wrap(Box::new(move |e: web_sys::Event| {
            if let Some(input) = e
                .current_target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                dispatch(Message::NameChanged(input.value()));
            }
        }) as Box<dyn FnMut(_)>);
        input.add_event_listener_with_callback("change", change.as_ref().unchecked_ref())?;
        change.forget();
    }

    {
        let submit = Closure::wrap(Box::new(move |e: web_sys::Event| {
            e.prevent_default();
            dispatch(Message::Submit);
        }) as Box<dyn FnMut(_)>);
        form.add_event_listener_with_callback("submit", submit.as_ref().unchecked_ref())?;
        submit.forget();
    }

    form.append_child(&input)?;
    form.append_child(&button)?;

    Ok(form)
}

/// Write cells whose version moved since the last render.
pub fn refresh_bindings(state: &mut AppState) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(JsValue::from_str("No document"))?;

    if state.view.update.version() != state.rendered_update {
        set_text(&document, UPDATE_TEXT_ID, state.view.update.get())?;
        state.rendered_update = state.view.update.version();
    }

    if state.view.greeting.version() != state.rendered_greeting {
        set_text(&document, GREET_MSG_ID, state.view.greeting.get())?;
        state.rendered_greeting = state.view.greeting.version();
    }

    Ok(())
}

fn set_text(document: &Document, id: &str, text: &str) -> Result<(), JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{} not mounted", id)))?;
    element.set_text_content(Some(text));
    Ok(())
}
