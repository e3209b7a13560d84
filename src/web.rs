//! Browser host: binds the controller to the page markup.
//!
//! Expected markup: a container holding `.wrapper__col` columns, each with an
//! `h2` color label, a `button` and an `i` lock icon. Interactive elements
//! carry `data-type="lock"` or `data-type="copy"`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent, Window, console};

use crate::clipboard::{Clipboard, ClipboardError, CopyReporter};
use crate::color::from_rgb24;
use crate::controller::{
    ColorSource, Location, MarkupNode, PaletteController, SwatchSurface, resolve_click,
};
use crate::types::{Foreground, LOCKED_GLYPH, SwatchIndex, lock_glyph};

const COLUMN_SELECTOR: &str = ".wrapper__col";

struct DomColumn {
    root: HtmlElement,
    label: HtmlElement,
    button: HtmlElement,
    icon: Element,
}

/// Swatch columns found in the page.
pub struct DomSwatches {
    columns: Vec<DomColumn>,
}

impl DomSwatches {
    pub fn collect(container: &Element) -> Result<Self, JsValue> {
        let nodes = container.query_selector_all(COLUMN_SELECTOR)?;
        let mut columns = Vec::with_capacity(nodes.length() as usize);
        for position in 0..nodes.length() {
            let Some(node) = nodes.item(position) else {
                continue;
            };
            let root: HtmlElement = node.dyn_into()?;
            columns.push(DomColumn {
                label: child(&root, "h2")?.dyn_into()?,
                button: child(&root, "button")?.dyn_into()?,
                icon: child(&root, "i")?,
                root,
            });
        }
        Ok(Self { columns })
    }
}

/// A page element seen through the swatch columns it may belong to.
struct DomNode<'a> {
    element: Element,
    swatches: &'a DomSwatches,
}

impl MarkupNode for DomNode<'_> {
    fn parent(&self) -> Option<Self> {
        self.element.parent_element().map(|element| DomNode {
            element,
            swatches: self.swatches,
        })
    }

    fn action_type(&self) -> Option<String> {
        self.element.get_attribute("data-type")
    }

    fn swatch_index(&self) -> Option<SwatchIndex> {
        self.swatches
            .columns
            .iter()
            .position(|column| column.root.is_same_node(Some(self.element.as_ref())))
    }
}

fn child(root: &HtmlElement, selector: &str) -> Result<Element, JsValue> {
    root.query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("swatch column is missing its `{selector}`")))
}

// No tracing subscriber runs in the page, so failures go to the console.
fn console_warn(message: &str, err: &JsValue) {
    console::warn_2(&JsValue::from_str(message), err);
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        console_warn(&format!("failed to set {property}: {value}"), &err);
    }
}

impl SwatchSurface for DomSwatches {
    fn count(&self) -> usize {
        self.columns.len()
    }

    fn paint(&mut self, index: SwatchIndex, color: &str, foreground: Foreground) {
        let Some(column) = self.columns.get(index) else {
            return;
        };
        column.label.set_text_content(Some(color));
        set_style(&column.root, "background-color", color);
        set_style(&column.label, "color", foreground.css());
        set_style(&column.button, "color", foreground.css());
    }

    fn show_lock(&mut self, index: SwatchIndex, locked: bool) {
        let Some(column) = self.columns.get(index) else {
            return;
        };
        let classes = column.icon.class_list();
        let switched = classes
            .remove_1(lock_glyph(!locked))
            .and_then(|()| classes.add_1(lock_glyph(locked)));
        if let Err(err) = switched {
            console_warn(&format!("failed to switch lock icon of swatch {index}"), &err);
        }
    }

    fn initial_lock(&self, index: SwatchIndex) -> bool {
        self.columns
            .get(index)
            .is_some_and(|column| column.icon.class_list().contains(LOCKED_GLYPH))
    }

    fn initial_color(&self, index: SwatchIndex) -> String {
        self.columns
            .get(index)
            .and_then(|column| column.label.text_content())
            .unwrap_or_default()
    }
}

/// `location.hash`, replaced through the history API.
pub struct BrowserLocation {
    window: Window,
}

impl Location for BrowserLocation {
    fn fragment(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn replace_fragment(&mut self, body: &str) {
        let url = format!("#{body}");
        let replaced = self
            .window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(err) = replaced {
            console_warn("failed to replace fragment", &err);
        }
    }
}

/// Colors from `Math.random`.
pub struct MathRandomColors;

impl ColorSource for MathRandomColors {
    fn random_color(&mut self) -> String {
        from_rgb24((js_sys::Math::random() * 16_777_216.0) as u32)
    }
}

/// `navigator.clipboard.writeText`, awaited on the microtask queue.
pub struct WebClipboard {
    window: Window,
}

impl Clipboard for WebClipboard {
    fn write_text(&mut self, text: String, reporter: CopyReporter) {
        let promise = self.window.navigator().clipboard().write_text(&text);
        spawn_local(async move {
            let result = JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| ClipboardError::WriteError(format!("{err:?}")));
            reporter.finish(result);
        });
    }
}

type BrowserController =
    PaletteController<DomSwatches, BrowserLocation, MathRandomColors, WebClipboard>;

/// Writes copies that settled since the last user event to the console.
fn report_settled_copies(controller: &BrowserController) {
    for outcome in controller.drain_copy_outcomes() {
        let text = JsValue::from_str(&outcome.text);
        match outcome.result {
            Ok(()) => console::log_2(&JsValue::from_str("copied"), &text),
            Err(err) => {
                console_warn(&format!("copy of swatch {} failed: {err}", outcome.index), &text)
            }
        }
    }
}

/// Takes over the swatch container matched by `container_selector`: paints
/// the initial palette and installs the keyboard and click handlers.
#[wasm_bindgen]
pub fn mount(container_selector: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let container = document
        .query_selector(container_selector)?
        .ok_or_else(|| JsValue::from_str(&format!("no element matches `{container_selector}`")))?;

    let controller: Rc<RefCell<BrowserController>> =
        Rc::new(RefCell::new(PaletteController::new(
            DomSwatches::collect(&container)?,
            BrowserLocation {
                window: window.clone(),
            },
            MathRandomColors,
            WebClipboard { window },
        )));
    controller.borrow_mut().start();

    let keys = Rc::clone(&controller);
    let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let mut controller = keys.borrow_mut();
        if controller.handle_key(&event.code()) {
            event.prevent_default();
        }
        report_settled_copies(&controller);
    });
    document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();

    let clicks = Rc::clone(&controller);
    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        let mut controller = clicks.borrow_mut();
        let resolved = resolve_click(DomNode {
            element: target,
            swatches: controller.surface(),
        });
        if let Some((index, action)) = resolved {
            controller.handle_action(index, action);
        }
        report_settled_copies(&controller);
    });
    container.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}
