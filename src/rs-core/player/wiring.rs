use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent};

use crate::{
    bindings::{DomView, EventListenerRegistry, Marker},
    controller::PlayerController,
    controls::PointerSample,
    errors::PlayerInitError,
    Logger,
};

pub(super) type SharedController = Rc<RefCell<PlayerController<DomView>>>;

/// Run `action` on the controller, unless it is already being used by another
/// handler further up the stack.
pub(super) fn dispatch(
    controller: &SharedController,
    event: &'static str,
    action: impl FnOnce(&mut PlayerController<DomView>),
) {
    match controller.try_borrow_mut() {
        Ok(mut ctrl) => action(&mut ctrl),
        Err(_) => Logger::lazy_debug(&|| format!("Player: skipping re-entrant \"{event}\" event")),
    }
}

/// Build a listener calling a controller method which does not need the event.
fn on(
    controller: &SharedController,
    event: &'static str,
    action: fn(&mut PlayerController<DomView>),
) -> impl FnMut(Event) + 'static {
    let controller = Rc::clone(controller);
    move |_| dispatch(&controller, event, action)
}

/// Register every listener the player relies on.
///
/// On error, listeners registered until then stay in `registry`, it is up to
/// the caller to remove them.
pub(super) fn register_listeners(
    controller: &SharedController,
    registry: &mut EventListenerRegistry,
) -> Result<(), PlayerInitError> {
    let (document, container, video, line) = {
        let ctrl = controller.borrow();
        let view = ctrl.view();
        let line = view.html_element(Marker::Line).ok();
        (
            view.document().clone(),
            view.container().clone(),
            view.video().clone(),
            line,
        )
    };

    register_media_listeners(controller, registry, video.as_ref())?;
    register_container_listeners(controller, registry, &container)?;
    match line {
        Some(line) => register_timeline_listeners(controller, registry, &line)?,
        None => Logger::warn("Player: no scrub line found, seeking with the pointer is disabled"),
    }
    register_page_listeners(controller, registry, document.as_ref())?;

    Logger::lazy_info(&|| format!("Player: {} listeners registered", registry.len()));
    Ok(())
}

fn register_media_listeners(
    controller: &SharedController,
    registry: &mut EventListenerRegistry,
    video: &EventTarget,
) -> Result<(), PlayerInitError> {
    registry.listen(
        video,
        "click",
        on(controller, "click", PlayerController::toggle_video),
    )?;
    registry.listen(
        video,
        "loadedmetadata",
        on(controller, "loadedmetadata", PlayerController::on_loaded_metadata),
    )?;
    registry.listen(
        video,
        "timeupdate",
        on(controller, "timeupdate", PlayerController::on_time_update),
    )?;
    registry.listen(
        video,
        "dblclick",
        on(controller, "dblclick", PlayerController::toggle_fullscreen),
    )?;
    registry.listen(
        video,
        "volumechange",
        on(controller, "volumechange", PlayerController::update_volume_input),
    )
}

fn register_container_listeners(
    controller: &SharedController,
    registry: &mut EventListenerRegistry,
    container: &HtmlElement,
) -> Result<(), PlayerInitError> {
    registry.listen(
        container,
        "fullscreenchange",
        on(controller, "fullscreenchange", PlayerController::check_fullscreen),
    )?;
    registry.listen(
        container,
        "mousemove",
        on(controller, "mousemove", PlayerController::check_interface),
    )?;

    let controls: [(Marker, &'static str, fn(&mut PlayerController<DomView>)); 3] = [
        (Marker::ToggleVideo, "click", PlayerController::toggle_video),
        (Marker::ToggleVolume, "click", PlayerController::toggle_mute),
        (Marker::Fullscreen, "click", PlayerController::toggle_fullscreen),
    ];
    for (marker, event, action) in controls {
        match find_control(controller, marker) {
            Some(target) => registry.listen(&target, event, on(controller, event, action))?,
            None => warn_missing_control(marker),
        }
    }

    match find_control(controller, Marker::VolumeInput) {
        Some(input) => {
            let ctrl = Rc::clone(controller);
            registry.listen(&input, "input", move |event: Event| {
                let value = event
                    .current_target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                    .map(|input| input.value_as_number());
                if let Some(value) = value {
                    dispatch(&ctrl, "input", |c| c.set_volume(value));
                }
            })?;
        }
        None => warn_missing_control(Marker::VolumeInput),
    }
    Ok(())
}

fn register_timeline_listeners(
    controller: &SharedController,
    registry: &mut EventListenerRegistry,
    line: &HtmlElement,
) -> Result<(), PlayerInitError> {
    let ctrl = Rc::clone(controller);
    let hovered_line = line.clone();
    registry.listen(line, "mousemove", move |event: Event| {
        if let Some(sample) = pointer_sample(&event, &hovered_line) {
            dispatch(&ctrl, "mousemove", |c| c.calc_ghost_line(&sample));
        }
    })?;

    let ctrl = Rc::clone(controller);
    let clicked_line = line.clone();
    registry.listen(line, "click", move |event: Event| {
        if let Some(sample) = pointer_sample(&event, &clicked_line) {
            dispatch(&ctrl, "click", |c| c.seek_to_pointer(&sample));
        }
    })
}

fn register_page_listeners(
    controller: &SharedController,
    registry: &mut EventListenerRegistry,
    document: &EventTarget,
) -> Result<(), PlayerInitError> {
    let ctrl = Rc::clone(controller);
    registry.listen(document, "keydown", move |event: Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let code = event.code();
        dispatch(&ctrl, "keydown", |c| {
            if c.handle_key(&code) {
                event.prevent_default();
            }
        });
    })
}

/// Read where the pointer is relative to the scrub line.
fn pointer_sample(event: &Event, line: &HtmlElement) -> Option<PointerSample> {
    let event = event.dyn_ref::<MouseEvent>()?;
    let rect = line.get_bounding_client_rect();
    Some(PointerSample::new(
        f64::from(event.client_x()),
        rect.left(),
        f64::from(line.offset_width()),
    ))
}

fn find_control(controller: &SharedController, marker: Marker) -> Option<EventTarget> {
    controller
        .borrow()
        .view()
        .element(marker)
        .ok()
        .map(EventTarget::from)
}

fn warn_missing_control(marker: Marker) {
    Logger::lazy_warn(&|| format!("Player: no \"{}\" control found", marker.selector()));
}
