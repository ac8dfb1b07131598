use crate::{ArNavigator, Command, GuidanceConfig, Pose};
use glam::{Quat, Vec3};
use serde::Serialize;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize tracing
    tracing_wasm::set_as_global_default();
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        tracing::error!("Serialization error: {}", e);
        JsValue::NULL
    })
}

fn js_error(e: crate::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct WasmArNavigator {
    inner: RefCell<ArNavigator>,
}

#[wasm_bindgen]
impl WasmArNavigator {
    /// Create a navigator
    ///
    /// # Arguments
    /// * `config` - Partial guidance config object, or `undefined` for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmArNavigator, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            GuidanceConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Config error: {}", e)))?
        };

        let navigator = ArNavigator::new(config).map_err(js_error)?;
        Ok(Self {
            inner: RefCell::new(navigator),
        })
    }

    /// Call once the immersive session and reference space are ready
    #[wasm_bindgen(js_name = sessionStarted)]
    pub fn session_started(&self) -> Result<(), JsValue> {
        self.inner
            .borrow_mut()
            .session_started()
            .map_err(js_error)
    }

    /// Report that immersive AR is unavailable; returns the message to show
    #[wasm_bindgen(js_name = sessionUnsupported)]
    pub fn session_unsupported(&self, reason: &str) -> String {
        self.inner
            .borrow_mut()
            .session_unsupported(reason)
            .to_string()
    }

    #[wasm_bindgen(js_name = sessionEnded)]
    pub fn session_ended(&self) {
        self.inner.borrow_mut().session_ended();
    }

    /// Feed the viewer pose for this animation frame
    ///
    /// # Arguments
    /// * `px`, `py`, `pz` - Viewer position in the reference space
    /// * `qx`, `qy`, `qz`, `qw` - Viewer orientation quaternion
    ///
    /// # Returns
    /// Guidance frame object while navigating, otherwise `null`
    #[allow(clippy::too_many_arguments)]
    #[wasm_bindgen(js_name = frame)]
    pub fn frame(&self, px: f32, py: f32, pz: f32, qx: f32, qy: f32, qz: f32, qw: f32) -> JsValue {
        let pose = Pose::from_position_orientation(
            Vec3::new(px, py, pz),
            Quat::from_xyzw(qx, qy, qz, qw),
        );
        match self.inner.borrow_mut().frame(Some(pose)) {
            Some(frame) => to_js(&frame),
            None => JsValue::NULL,
        }
    }

    /// Tracking lost for this frame (no viewer pose available)
    #[wasm_bindgen(js_name = trackingLost)]
    pub fn tracking_lost(&self) {
        self.inner.borrow_mut().frame(None);
    }

    /// Save the current pose as a marker
    ///
    /// # Returns
    /// Index of the new marker
    #[wasm_bindgen(js_name = addMarker)]
    pub fn add_marker(&self) -> Result<u32, JsValue> {
        let mut navigator = self.inner.borrow_mut();
        navigator.command(Command::AddMarker).map_err(js_error)?;
        Ok(navigator.session().markers().len() as u32 - 1)
    }

    #[wasm_bindgen(js_name = navigateTo)]
    pub fn navigate_to(&self, index: u32) -> Result<(), JsValue> {
        self.inner
            .borrow_mut()
            .command(Command::start(index as usize))
            .map_err(js_error)
    }

    /// Navigate toward the most recently added marker
    #[wasm_bindgen(js_name = navigateToLatest)]
    pub fn navigate_to_latest(&self) -> Result<(), JsValue> {
        self.inner
            .borrow_mut()
            .command(Command::NavigateToLatest)
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = stopNavigation)]
    pub fn stop_navigation(&self) -> Result<(), JsValue> {
        self.inner
            .borrow_mut()
            .command(Command::StopNavigation)
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = isNavigating)]
    pub fn is_navigating(&self) -> bool {
        self.inner.borrow().session().is_navigating()
    }

    #[wasm_bindgen(js_name = markerCount)]
    pub fn marker_count(&self) -> u32 {
        self.inner.borrow().session().markers().len() as u32
    }

    /// All markers in insertion order
    #[wasm_bindgen(js_name = markers)]
    pub fn markers(&self) -> JsValue {
        let navigator = self.inner.borrow();
        let markers: Vec<_> = navigator.session().markers().iter().copied().collect();
        to_js(&markers)
    }

    /// Indicator snapshot (position, rotation, scale, visible) for the renderer
    #[wasm_bindgen(js_name = indicator)]
    pub fn indicator(&self) -> JsValue {
        to_js(self.inner.borrow().session().indicator())
    }

    /// Take queued guidance events
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&self) -> JsValue {
        to_js(&self.inner.borrow_mut().drain_events())
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_add_and_navigate() {
        let nav = WasmArNavigator::new(JsValue::UNDEFINED).unwrap();
        nav.session_started().unwrap();
        nav.frame(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0);

        assert_eq!(nav.add_marker().unwrap(), 0);
        nav.navigate_to(0).unwrap();
        assert!(nav.is_navigating());

        let frame = nav.frame(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        assert!(!frame.is_null());
    }

    #[wasm_bindgen_test]
    fn test_invalid_index_is_error() {
        let nav = WasmArNavigator::new(JsValue::UNDEFINED).unwrap();
        assert!(nav.navigate_to(3).is_err());
        assert!(!nav.is_navigating());
    }

    #[wasm_bindgen_test]
    fn test_frame_before_session_is_null() {
        let nav = WasmArNavigator::new(JsValue::NULL).unwrap();
        assert!(nav.frame(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0).is_null());
        assert!(nav.add_marker().is_err());
    }
}
