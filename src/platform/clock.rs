//! Frame timing.

/// Monotonic source of frame delta time.
pub trait Clock {
    /// Seconds since the clock started.
    fn elapsed_secs(&self) -> f32;

    /// Seconds since the previous call (since start on the first call).
    fn delta_secs(&mut self) -> f32;
}

/// Wall clock backed by `Instant` (native).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct SystemClock {
    start: std::time::Instant,
    last_tick: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl SystemClock {
    pub fn new() -> Self {
        let now = std::time::Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn elapsed_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    fn delta_secs(&mut self) -> f32 {
        let now = std::time::Instant::now();
        let delta = now - self.last_tick;
        self.last_tick = now;
        delta.as_secs_f32()
    }
}

/// Wall clock fed by `requestAnimationFrame` timestamps (milliseconds).
///
/// `Instant` is unavailable on wasm32, so the host pushes the browser's
/// high-resolution time in with `set_now_ms` before reading the delta.
#[cfg(target_arch = "wasm32")]
#[derive(Debug)]
pub struct SystemClock {
    start_ms: f64,
    last_ms: f64,
    now_ms: f64,
}

#[cfg(target_arch = "wasm32")]
impl SystemClock {
    pub fn new() -> Self {
        let now = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);
        Self {
            start_ms: now,
            last_ms: now,
            now_ms: now,
        }
    }

    /// Record the current animation frame timestamp
    pub fn set_now_ms(&mut self, now_ms: f64) {
        self.now_ms = now_ms.max(self.now_ms);
    }
}

#[cfg(target_arch = "wasm32")]
impl Clock for SystemClock {
    fn elapsed_secs(&self) -> f32 {
        ((self.now_ms - self.start_ms) / 1000.0) as f32
    }

    fn delta_secs(&mut self) -> f32 {
        let delta = (self.now_ms - self.last_ms) / 1000.0;
        self.last_ms = self.now_ms;
        delta as f32
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Clock that advances a fixed step per frame; used for headless runs and tests.
#[derive(Debug, Clone)]
pub struct ManualClock {
    step: f32,
    elapsed: f32,
}

impl ManualClock {
    pub fn new(step: f32) -> Self {
        Self {
            step: step.max(0.0),
            elapsed: 0.0,
        }
    }

    pub fn set_step(&mut self, step: f32) {
        self.step = step.max(0.0);
    }
}

impl Clock for ManualClock {
    fn elapsed_secs(&self) -> f32 {
        self.elapsed
    }

    fn delta_secs(&mut self) -> f32 {
        self.elapsed += self.step;
        self.step
    }
}
