// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
use std::time::Duration;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
use crate::{runtime::Runtime, scheduler::SchedulingPrimitive, scheduler::Tick, time_source::TimeSource};

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
#[derive(Debug)]
pub struct WasmRuntime;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
impl Runtime for WasmRuntime {
    type Clock = WasmClock;
    type Scheduler = WasmScheduler;

    fn parts() -> (Self::Clock, Self::Scheduler) {
        (WasmClock, WasmScheduler)
    }
}

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
fn global_function(name: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

/// Calls a global function with the global object as `this`; browsers reject
/// `requestAnimationFrame` invoked on anything but `window`.
#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
fn call_global(name: &str, args: &[&JsValue]) -> Option<JsValue> {
    let function = global_function(name)?;
    let this: JsValue = js_sys::global().into();
    let result = match args {
        [] => function.call0(&this),
        [a] => function.call1(&this, a),
        [a, b] => function.call2(&this, a, b),
        _ => return None,
    };
    result.ok()
}

/// `performance.now()` in seconds, falling back to `Date.now()` where the
/// high-resolution clock is missing.
#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct WasmClock;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
impl TimeSource for WasmClock {
    fn now(&self) -> f64 {
        let performance = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("performance"))
            .ok()
            .filter(|p| p.is_object());

        let millis = performance
            .and_then(|p| {
                let now = js_sys::Reflect::get(&p, &JsValue::from_str("now"))
                    .ok()?
                    .dyn_into::<js_sys::Function>()
                    .ok()?;
                now.call0(&p).ok()?.as_f64()
            })
            .unwrap_or_else(js_sys::Date::now);

        millis / 1000.0
    }
}

/// Browser scheduling: `requestAnimationFrame` when the host exposes it, `setTimeout`
/// otherwise.
#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct WasmScheduler;

/// Browser timer id, tagged with the API that issued it.
#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WasmHandle {
    Frame(i32),
    Timeout(i32),
}

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
fn as_id(value: Option<JsValue>) -> i32 {
    value.and_then(|v| v.as_f64()).unwrap_or_default() as i32
}

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
impl SchedulingPrimitive for WasmScheduler {
    type Handle = WasmHandle;

    fn frame_sync_available(&self) -> bool {
        global_function("requestAnimationFrame").is_some()
            && global_function("cancelAnimationFrame").is_some()
    }

    fn request_frame(&self, tick: Tick) -> Self::Handle {
        // Frees itself after the one call; a cancelled frame leaks the closure
        let callback = Closure::once_into_js(move |_timestamp: JsValue| tick());
        WasmHandle::Frame(as_id(call_global("requestAnimationFrame", &[&callback])))
    }

    fn set_timeout(&self, delay: Duration, tick: Tick) -> Self::Handle {
        let callback = Closure::once_into_js(move || tick());
        let millis = JsValue::from_f64(delay.as_millis() as f64);
        WasmHandle::Timeout(as_id(call_global("setTimeout", &[&callback, &millis])))
    }

    fn cancel(&self, handle: Self::Handle) {
        let (api, id) = match handle {
            WasmHandle::Frame(id) => ("cancelAnimationFrame", id),
            WasmHandle::Timeout(id) => ("clearTimeout", id),
        };
        call_global(api, &[&JsValue::from(id)]);
    }
}
