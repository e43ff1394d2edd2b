use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::HttpTextResponse;

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window unavailable".to_string())
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

/// Window event registration that stays active until [`Self::remove`] is called.
pub(crate) struct LocationEventListener {
    window: web_sys::Window,
    names: Vec<&'static str>,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl std::fmt::Debug for LocationEventListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationEventListener")
            .field("names", &self.names)
            .finish()
    }
}

impl LocationEventListener {
    pub(crate) fn remove(self) {
        for name in &self.names {
            let _ = self
                .window
                .remove_event_listener_with_callback(name, self.closure.as_ref().unchecked_ref());
        }
    }
}

pub(crate) fn current_pathname() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

pub(crate) fn push_history_state(path: &str) -> Result<(), String> {
    window()?
        .history()
        .map_err(js_error_to_string)?
        .push_state_with_url(&JsValue::from_str(""), "", Some(path))
        .map_err(js_error_to_string)
}

pub(crate) fn dispatch_window_event(name: &str) -> Result<(), String> {
    let event = web_sys::Event::new(name).map_err(js_error_to_string)?;
    window()?
        .dispatch_event(&event)
        .map(|_| ())
        .map_err(js_error_to_string)
}

pub(crate) fn listen_window_events(
    names: &[&'static str],
    callback: Rc<dyn Fn()>,
) -> Result<LocationEventListener, String> {
    let window = window()?;
    let closure = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| callback()));
    for name in names {
        window
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            .map_err(js_error_to_string)?;
    }
    Ok(LocationEventListener {
        window,
        names: names.to_vec(),
        closure,
    })
}

pub(crate) async fn fetch_text(url: &str) -> Result<HttpTextResponse, String> {
    let response = JsFuture::from(window()?.fetch_with_str(url))
        .await
        .map_err(js_error_to_string)?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "fetch did not resolve to a Response".to_string())?;

    let status = response.status();
    let ok = response.ok();
    if !ok {
        return Ok(HttpTextResponse {
            status,
            ok,
            body: String::new(),
        });
    }

    let body = JsFuture::from(response.text().map_err(js_error_to_string)?)
        .await
        .map_err(js_error_to_string)?
        .as_string()
        .unwrap_or_default();
    Ok(HttpTextResponse { status, ok, body })
}

pub(crate) fn load_local_storage(key: &str) -> Result<Option<String>, String> {
    let Some(storage) = window()?.local_storage().map_err(js_error_to_string)? else {
        return Ok(None);
    };
    storage.get_item(key).map_err(js_error_to_string)
}
