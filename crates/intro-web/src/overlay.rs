use crate::constants::*;
use crate::dom::{self, DomError};
use crate::style;
use intro_core::{ParticleStyle, PreloadProgress, ProgressSink, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The overlay region and the particle container inside it.
///
/// Either may be missing from the markup; the intro then runs without visuals
/// but still preloads and broadcasts readiness.
pub struct DomSurface {
    document: web::Document,
    overlay: Option<web::HtmlElement>,
    container: Option<web::Element>,
}

impl DomSurface {
    pub fn from_document(document: &web::Document) -> Self {
        let overlay = dom::element_by_id(document, OVERLAY_ID)
            .map_err(|e| log::warn!("[intro] overlay unavailable: {}", e))
            .ok();
        let container = dom::query(document, CONTAINER_SELECTOR)
            .map_err(|e| log::warn!("[intro] particle container unavailable: {}", e))
            .ok();
        Self {
            document: document.clone(),
            overlay,
            container,
        }
    }

    fn create_heart(&self, glyph: &str, size: f32) -> Result<web::HtmlElement, DomError> {
        let container = self
            .container
            .as_ref()
            .ok_or(DomError::MissingElement(CONTAINER_SELECTOR))?;
        let el = self
            .document
            .create_element("div")?
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| DomError::WrongType(HEART_CLASS))?;
        el.class_list().add_1(HEART_CLASS)?;
        el.set_text_content(Some(glyph));
        el.style()
            .set_property("font-size", &style::font_size_value(size))?;
        container.append_child(&el)?;
        Ok(el)
    }
}

impl Surface for DomSurface {
    // A heart that failed to be created is simply not drawn.
    type Handle = Option<web::HtmlElement>;

    fn spawn_particle(&mut self, glyph: &'static str, size: f32) -> Self::Handle {
        match self.create_heart(glyph, size) {
            Ok(el) => Some(el),
            Err(e) => {
                log::debug!("heart not created: {}", e);
                None
            }
        }
    }

    fn apply_style(&mut self, handle: &Self::Handle, style: &ParticleStyle) {
        let Some(el) = handle else {
            return;
        };
        let css = el.style();
        for (name, value) in style::particle_declarations(style) {
            _ = css.set_property(name, &value);
        }
    }

    fn mark_ready(&mut self) {
        if let Some(overlay) = &self.overlay {
            _ = overlay.class_list().add_1(READY_CLASS);
        }
    }

    fn announce_ready(&mut self) {
        match web::Event::new(ASSETS_READY_EVENT) {
            Ok(event) => {
                _ = self.document.dispatch_event(&event);
            }
            Err(e) => log::warn!("could not create {}: {:?}", ASSETS_READY_EVENT, e),
        }
    }

    fn hide_overlay(&mut self) {
        if let Some(overlay) = &self.overlay {
            _ = overlay.class_list().add_1(HIDDEN_CLASS);
        }
    }

    fn remove_overlay(&mut self) {
        if let Some(overlay) = &self.overlay {
            _ = overlay.style().set_property("display", "none");
        }
        if let Some(container) = &self.container {
            container.set_inner_html("");
        }
    }
}

/// Progress bar and percent text. Either may be absent from the markup.
pub struct ProgressBar {
    bar: Option<web::HtmlElement>,
    label: Option<web::Element>,
}

impl ProgressBar {
    pub fn from_document(document: &web::Document) -> Self {
        Self {
            bar: dom::element_by_id(document, PROGRESS_BAR_ID).ok(),
            label: document.get_element_by_id(PROGRESS_TEXT_ID),
        }
    }
}

impl ProgressSink for ProgressBar {
    fn update_progress(&mut self, progress: PreloadProgress) {
        if let Some(bar) = &self.bar {
            _ = bar
                .style()
                .set_property("width", &style::progress_width(&progress));
        }
        if let Some(label) = &self.label {
            label.set_text_content(Some(&style::progress_label(&progress)));
        }
    }
}
