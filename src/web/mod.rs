//! DOM wiring for the standalone page
//!
//! Finds the page's canvas, guide and controls by id, then turns DOM events
//! into `InputEvent`s for a shared `PadCore`. The dispatch outcome decides
//! what to refresh: painting pushes the dirty part of the surface to the
//! canvas with `putImageData`, guide changes rebuild or hide the overlay.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{
    CanvasRenderingContext2d, Document, Event, HtmlAnchorElement, HtmlCanvasElement, HtmlElement,
    HtmlInputElement, ImageData, MouseEvent, Window,
};

use crate::core::PadError;
use crate::domain::PadConfig;
use crate::pad::{
    DispatchOutcome, ExportedImage, InputEvent, PadCore, PointerButton, PressOutcome,
};
use crate::spatial::GridDimensions;

/// Element ids the page is expected to provide
#[derive(Clone, Debug)]
pub struct MountIds {
    pub canvas: &'static str,
    pub guide: &'static str,
    pub color_input: &'static str,
    pub toggle_guide: &'static str,
    pub clear_button: &'static str,
    pub resize_button: &'static str,
    pub save_button: &'static str,
    pub grid_x_input: &'static str,
    pub grid_y_input: &'static str,
}

impl Default for MountIds {
    fn default() -> Self {
        Self {
            canvas: "canvas",
            guide: "guide",
            color_input: "colorInput",
            toggle_guide: "toggleGuide",
            clear_button: "clearButton",
            resize_button: "resizeButton",
            save_button: "saveButton",
            grid_x_input: "gridXInput",
            grid_y_input: "gridYInput",
        }
    }
}

struct Page {
    window: Window,
    document: Document,
    pad: PadCore,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    guide: HtmlElement,
    color_input: HtmlInputElement,
    toggle_guide: HtmlInputElement,
    grid_x_input: HtmlInputElement,
    grid_y_input: HtmlInputElement,
    guide_revision: Option<u32>,
}

/// Mount onto the default element ids with default settings
#[wasm_bindgen(js_name = mountDefault)]
pub fn mount_default() -> Result<(), JsValue> {
    mount(MountIds::default(), PadConfig::default())
}

/// Mount onto the default element ids with a JSON config
#[wasm_bindgen(js_name = mountWithConfig)]
pub fn mount_with_config(json: String) -> Result<(), JsValue> {
    let config = PadConfig::from_json(&json).map_err(to_js)?;
    mount(MountIds::default(), config)
}

pub fn mount(ids: MountIds, config: PadConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = element(&document, ids.canvas)?;
    canvas.set_width(config.surface_width);
    canvas.set_height(config.surface_height);
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let color_input: HtmlInputElement = element(&document, ids.color_input)?;
    let toggle_guide: HtmlInputElement = element(&document, ids.toggle_guide)?;
    let grid_x_input: HtmlInputElement = element(&document, ids.grid_x_input)?;
    let grid_y_input: HtmlInputElement = element(&document, ids.grid_y_input)?;

    // Start from whatever grid size the page's inputs hold, like the page script did
    let mut config = config;
    if let Ok(dims) = GridDimensions::parse(&grid_x_input.value(), &grid_y_input.value()) {
        config.columns = dims.columns;
        config.rows = dims.rows;
    }
    config.guide_visible = toggle_guide.checked();

    let pad = PadCore::new(config).map_err(to_js)?;
    color_input.set_value(&pad.active_color().to_hex());

    let page = Rc::new(RefCell::new(Page {
        window,
        guide: element(&document, ids.guide)?,
        document: document.clone(),
        pad,
        canvas,
        ctx,
        color_input,
        toggle_guide,
        grid_x_input,
        grid_y_input,
        guide_revision: None,
    }));

    refresh(&mut page.borrow_mut())?;

    {
        let target = page.borrow().canvas.clone();
        listen(&target, "mousedown", &page, |page, event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return Ok(None);
            };
            let rect = page.canvas.get_bounding_client_rect();
            let x = mouse.client_x() as f64 - rect.left();
            let y = mouse.client_y() as f64 - rect.top();
            // Pick-back is tied to Ctrl only
            Ok(Some(InputEvent::Press {
                x,
                y,
                button: PointerButton::from_dom(mouse.button()),
                modifier: mouse.ctrl_key(),
            }))
        })?;
    }

    {
        let target = page.borrow().color_input.clone();
        listen(&target, "input", &page, |page, _| {
            Ok(Some(InputEvent::SetColor(page.color_input.value())))
        })?;
    }

    {
        let target = page.borrow().toggle_guide.clone();
        listen(&target, "change", &page, |page, _| {
            Ok(Some(InputEvent::ToggleGuide(page.toggle_guide.checked())))
        })?;
    }

    listen(&element::<HtmlElement>(&document, ids.clear_button)?, "click", &page, |_, _| {
        Ok(Some(InputEvent::Clear))
    })?;

    listen(&element::<HtmlElement>(&document, ids.resize_button)?, "click", &page, |page, _| {
        Ok(Some(InputEvent::Resize {
            columns: page.grid_x_input.value(),
            rows: page.grid_y_input.value(),
        }))
    })?;

    listen(&element::<HtmlElement>(&document, ids.save_button)?, "click", &page, |_, _| {
        Ok(Some(InputEvent::Save))
    })?;

    log::info!("mounted on #{}", ids.canvas);
    Ok(())
}

fn to_js(err: PadError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{} has the wrong type", id)))
}

/// Register `read` for `kind` on `target`; whatever event it produces is
/// dispatched to the pad and the page refreshed.
fn listen<F>(
    target: &web_sys::EventTarget,
    kind: &str,
    page: &Rc<RefCell<Page>>,
    read: F,
) -> Result<(), JsValue>
where
    F: Fn(&Page, &Event) -> Result<Option<InputEvent>, JsValue> + 'static,
{
    let page = Rc::clone(page);
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let mut page = page.borrow_mut();
        let result = read(&*page, &event).and_then(|input| match input {
            Some(input) => handle(&mut *page, input),
            None => Ok(()),
        });
        if let Err(err) = result {
            log::warn!("event handler failed: {:?}", err);
        }
    });
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn handle(page: &mut Page, input: InputEvent) -> Result<(), JsValue> {
    let window = page.window.clone();
    let mut ask = |prompt: &str| window.confirm_with_message(prompt).unwrap_or(false);

    let outcome = page.pad.dispatch(input, &mut ask).map_err(to_js)?;
    match &outcome {
        DispatchOutcome::Press(PressOutcome::Picked(color)) => {
            page.color_input.set_value(&color.to_hex());
        }
        DispatchOutcome::Saved(image) => download(&page.document, image)?,
        _ => {}
    }

    if outcome.needs_redraw() {
        blit(page)?;
    }
    if outcome.needs_guide_update() {
        sync_guide(page)?;
    }
    Ok(())
}

fn refresh(page: &mut Page) -> Result<(), JsValue> {
    blit(page)?;
    sync_guide(page)
}

/// Push the dirty region of the surface to the canvas
fn blit(page: &mut Page) -> Result<(), JsValue> {
    if !page.pad.collect_dirty_rect() {
        return Ok(());
    }
    let Some(rect) = page.pad.pending_rect() else {
        return Ok(());
    };

    let bytes: Vec<u8> = page
        .pad
        .extract_pending_pixels()
        .iter()
        .flat_map(|p| p.to_le_bytes())
        .collect();
    let data = ImageData::new_with_u8_clamped_array_and_sh(Clamped(bytes.as_slice()), rect.w, rect.h)?;
    page.ctx.put_image_data(&data, rect.x as f64, rect.y as f64)
}

/// Rebuild the guide cells after a resize, then show or hide it
fn sync_guide(page: &mut Page) -> Result<(), JsValue> {
    let guide = page.pad.guide();
    if page.guide_revision != Some(guide.revision()) {
        let style = page.guide.style();
        style.set_property("width", &format!("{}px", page.pad.surface_width()))?;
        style.set_property("height", &format!("{}px", page.pad.surface_height()))?;
        let (columns, rows) = guide.css_template();
        style.set_property("grid-template-columns", &columns)?;
        style.set_property("grid-template-rows", &rows)?;
        match guide.dom_cell_count() {
            Some(count) => page.guide.set_inner_html(&"<div></div>".repeat(count)),
            None => {
                log::warn!(
                    "{}x{} grid is too fine for a guide overlay",
                    guide.columns(),
                    guide.rows()
                );
                page.guide.set_inner_html("");
            }
        }
        page.guide_revision = Some(guide.revision());
    }

    if guide.is_visible() {
        page.guide.style().remove_property("display")?;
    } else {
        page.guide.style().set_property("display", "none")?;
    }
    Ok(())
}

/// Hand the encoded image to the browser as a file download
fn download(document: &Document, image: &ExportedImage) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(image.bytes.as_slice()).buffer());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(image.mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(&image.filename);
    link.click();

    web_sys::Url::revoke_object_url(&url)?;
    log::info!("saved {} ({} bytes)", image.filename, image.bytes.len());
    Ok(())
}
