use gloo::timers::callback::Interval;
use showreel_core::Ticker;

/// Browser `setInterval` through gloo; the returned [`Interval`] clears the
/// timer when dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTicker;

impl Ticker for GlooTicker {
    type Guard = Interval;

    fn every(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, move || tick())
    }
}
