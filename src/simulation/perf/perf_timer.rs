//! Millisecond stopwatch: `Date.now()` in the browser, `Instant` natively.

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[inline]
fn now() -> Stamp {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::Instant::now()
    }
}

#[inline]
fn millis_since(stamp: Stamp) -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() - stamp
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        stamp.elapsed().as_secs_f64() * 1000.0
    }
}

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start: Stamp,
    lap: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let t = now();
        PerfTimer { start: t, lap: t }
    }

    /// Total time since `start`
    pub(crate) fn elapsed_ms(&self) -> f64 {
        millis_since(self.start)
    }

    /// Time since the previous lap (or `start`), then begin a new lap
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let ms = millis_since(self.lap);
        self.lap = now();
        ms
    }
}
