use crate::dom::DomPupil;
use crate::effects::{Effects, InputEvent};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type PageEffects = Effects<DomPupil, web::HtmlElement>;

pub fn wire_input_handlers(document: &web::Document, effects: Rc<PageEffects>) {
    wire_pointermove(document, effects.clone());
    wire_character_hover(effects);
}

fn wire_pointermove(document: &web::Document, effects: Rc<PageEffects>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        effects.dispatch(InputEvent::PointerMove {
            x: f64::from(ev.client_x()),
            y: f64::from(ev.client_y()),
        });
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_character_hover(effects: Rc<PageEffects>) {
    for (i, character) in effects.hover.characters().iter().enumerate() {
        let fx_enter = effects.clone();
        let enter = Closure::wrap(Box::new(move || {
            fx_enter.dispatch(InputEvent::PointerEnter(i));
        }) as Box<dyn FnMut()>);
        _ = character.add_event_listener_with_callback("pointerenter", enter.as_ref().unchecked_ref());
        enter.forget();

        let fx_leave = effects.clone();
        let leave = Closure::wrap(Box::new(move || {
            fx_leave.dispatch(InputEvent::PointerLeave(i));
        }) as Box<dyn FnMut()>);
        _ = character.add_event_listener_with_callback("pointerleave", leave.as_ref().unchecked_ref());
        leave.forget();
    }
}
