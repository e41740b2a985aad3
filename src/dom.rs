use crate::effects::{EyeGeometry, TransformTarget};
use crate::gaze::EyeRect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// A `.pupil` element together with the eye (its parent) it looks out of.
#[derive(Clone)]
pub struct DomPupil {
    pub pupil: web::HtmlElement,
    pub eye: web::Element,
}

impl TransformTarget for web::HtmlElement {
    #[inline]
    fn set_transform(&self, css: &str) {
        _ = self.style().set_property("transform", css);
    }
}

impl TransformTarget for DomPupil {
    #[inline]
    fn set_transform(&self, css: &str) {
        self.pupil.set_transform(css);
    }
}

impl EyeGeometry for DomPupil {
    fn eye_rect(&self) -> Option<EyeRect> {
        if !self.eye.is_connected() {
            return None;
        }
        let rect = self.eye.get_bounding_client_rect();
        Some(EyeRect::new(
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
        ))
    }
}

/// Resolve once the document has been parsed (`DOMContentLoaded`), or
/// immediately if that already happened.
pub async fn when_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let on_ready = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        _ = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

fn query_html_elements(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {selector:?}: {:?}", e))?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        let Some(node) = list.item(i) else {
            continue;
        };
        match node.dyn_into::<web::HtmlElement>() {
            Ok(el) => out.push(el),
            Err(_) => log::warn!("[dom] skipping non-HTML match for {}", selector),
        }
    }
    if out.is_empty() {
        log::warn!("[dom] nothing matches {}", selector);
    }
    Ok(out)
}

/// Find every pupil and pair it with its parent eye. Pupils without a parent
/// have no geometry to follow and are dropped.
pub fn discover_pupils(document: &web::Document, selector: &str) -> anyhow::Result<Vec<DomPupil>> {
    let pupils = query_html_elements(document, selector)?
        .into_iter()
        .filter_map(|pupil| match pupil.parent_element() {
            Some(eye) => Some(DomPupil { pupil, eye }),
            None => {
                log::warn!("[dom] {} element has no parent eye", selector);
                None
            }
        })
        .collect();
    Ok(pupils)
}

pub fn discover_characters(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    query_html_elements(document, selector)
}
