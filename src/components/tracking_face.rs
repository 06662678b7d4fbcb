//! Cartoon face whose pupils follow the pointer.
//!
//! Subscribes to window `mousemove` once on mount (hydrate only) and
//! removes the listener in a single `on_cleanup` path, whichever eye mode
//! is active at teardown. If the face element is not mounted yet the
//! handler skips the update and the face stays static.

use leptos::prelude::*;

use crate::state::face::FaceState;

/// The face. Pupil offsets and the open/shielded mode come from `face`;
/// password focus transitions are wired up by the owning page.
#[component]
pub fn TrackingFace(face: RwSignal<FaceState>) -> impl IntoView {
    let face_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let face_ref_track = face_ref.clone();
        let on_mouse_move = Closure::wrap(Box::new(move |ev: web_sys::MouseEvent| {
            let Some(el) = face_ref_track.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let center = (rect.left() + (rect.width() * 0.5), rect.top() + (rect.height() * 0.5));
            let pointer = (f64::from(ev.client_x()), f64::from(ev.client_y()));
            face.update(|state| state.track_pointer(center, pointer));
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);

        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback("mousemove", on_mouse_move.as_ref().unchecked_ref());
        }

        // The closure stays owned here until unmount, then the listener
        // goes away with it.
        on_cleanup(move || {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback("mousemove", on_mouse_move.as_ref().unchecked_ref());
            }
        });
    }

    let pupil_style = move || {
        let (x, y) = face.get().pupil_offset;
        format!("transform: translate({x}px, {y}px)")
    };

    let eye_socket = move |modifier: &'static str| {
        view! {
            <div class=format!("tracking-face__eye tracking-face__eye--{modifier}")>
                {move || {
                    if face.get().eyes_open() {
                        view! {
                            <div class="tracking-face__pupil" style=pupil_style>
                                <div class="tracking-face__glint"></div>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! { <div class="tracking-face__lid"></div> }.into_any()
                    }
                }}
            </div>
        }
    };

    view! {
        <div class="tracking-face" node_ref=face_ref>
            <div class="tracking-face__head">
                {eye_socket("left")}
                {eye_socket("right")}
                <div class="tracking-face__mouth"></div>
            </div>
        </div>
    }
}
