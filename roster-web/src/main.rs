//! Activity Roster browser frontend
//!
//! Binds the page shell in `index.html` to the roster client: one full
//! render on load, then targeted patches for every signup and removal.

mod config;
mod dom;
mod logging;
mod timer;

use std::rc::Rc;

use activity_roster::{AppController, HttpActivityApi, Shell};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement};

use dom::DomSurface;
use timer::GlooTimer;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load();
    let level = config.log_level().unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("{}; using info", e).into());
        tracing::Level::INFO
    });
    logging::init(level);

    if let Err(e) = start(&config) {
        web_sys::console::error_1(&e);
    }
}

fn start(config: &activity_roster::ClientConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let surface = Rc::new(DomSurface::new(document));
    let shell = Shell {
        roster: surface.element_by_id("activities-list")?,
        select: surface.element_by_id("activity")?,
        form: surface.element_by_id("signup-form")?,
        banner: surface.element_by_id("message")?,
    };
    let email = surface
        .element_by_id("email")?
        .dyn_into::<HtmlInputElement>()?;
    let select = shell.select.clone().dyn_into::<HtmlSelectElement>()?;
    let form = shell.form.clone();

    tracing::info!(base_url = %config.api.base_url, "Starting activity roster");

    let app = Rc::new(AppController::new(
        surface,
        shell,
        Rc::new(HttpActivityApi::new(&config.api.base_url)),
        Rc::new(GlooTimer),
        config,
    ));

    let submit_app = Rc::clone(&app);
    let on_submit = Closure::wrap(Box::new(move |ev: Event| {
        ev.prevent_default();
        let app = Rc::clone(&submit_app);
        let activity = select.value();
        let email = email.value();
        spawn_local(async move {
            // failures are already on the banner
            let _ = app.submit(&activity, &email).await;
        });
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    spawn_local(async move {
        let _ = app.load().await;
    });

    Ok(())
}
