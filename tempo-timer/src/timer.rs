// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::options::{validate_period, TimerOptions};
use core::fmt;
use core::time::Duration;
use parking_lot::{Mutex, ReentrantMutex};
use std::sync::Arc;
use tempo_core::{debug, trace, warn, CancellationToken, Result};
use tempo_runtime::runtime::Runtime;
use tempo_runtime::{DefaultRuntime, SchedulingPrimitive, Strategy, Tick, TimeSource};

/// Pushes the first baseline just past one period, so the first tick fires even with a
/// zero period.
const START_EPSILON: f64 = 1e-6;

/// User callback invoked once per elapsed period.
pub type Callback = Arc<dyn Fn() + Send + Sync + 'static>;

type Handle<R> = <<R as Runtime>::Scheduler as SchedulingPrimitive>::Handle;

/// Bookkeeping of one active firing chain. Exists only while firing.
struct Chain<H> {
    token: CancellationToken,
    last_fired_at: f64,
    // Overshoot of the last invocation, in [0, period)
    drift: f64,
    pending: Option<H>,
}

struct State<H> {
    period: f64,
    callback: Option<Callback>,
    chain: Option<Chain<H>>,
}

struct Shared<R: Runtime> {
    clock: R::Clock,
    scheduler: R::Scheduler,
    strategy: Strategy,
    default_timeout: Duration,
    // Held across a tick's decision and callback, and by stop_firing. Reentrant so the
    // callback can stop or restart its own timer.
    gate: ReentrantMutex<()>,
    state: Mutex<State<Handle<R>>>,
}

/// Periodic callback scheduler with drift correction.
///
/// The timer rides a [`SchedulingPrimitive`] that ticks at its own cadence, usually
/// faster than the target period. On each tick it measures the time since the last
/// invocation, fires the callback once a full period has elapsed, and carries the
/// overshoot forward as drift so the next interval is shortened by the same amount.
/// The long-run invocation rate therefore converges to `1 / period` instead of drifting
/// below it.
///
/// A period of zero fires on every tick of the primitive.
///
/// # Lifecycle
///
/// The timer is either idle or firing. [`start_firing`](Self::start_firing) invokes the
/// callback synchronously and keeps exactly one tick outstanding until
/// [`stop_firing`](Self::stop_firing) cancels it. Dropping the timer stops it.
///
/// # Threads
///
/// The timer is `Sync`, and ticks may arrive on any thread of a multi-threaded host.
/// Callbacks never overlap. Once `stop_firing` returns, the callback is not running
/// and will not run again until the next `start_firing`. When called from another
/// thread, `stop_firing` blocks until an in-flight callback finishes, so a callback
/// must not wait on a thread that is stopping its timer.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
/// use tempo_runtime::impls::manual::ManualRuntime;
/// use tempo_timer::Timer;
///
/// let timer = Timer::<ManualRuntime>::new();
/// let steps = Arc::new(AtomicUsize::new(0));
/// let counter = steps.clone();
///
/// timer.set_period(0.5)?;
/// timer.on_fire(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
/// timer.start_firing();
/// assert_eq!(steps.load(Ordering::SeqCst), 1);
///
/// // Frames land on a 60 Hz grid, so the fire at t=2s arrives just after 2s
/// timer.scheduler().advance(Duration::from_millis(2100));
/// assert_eq!(steps.load(Ordering::SeqCst), 5);
/// # Ok::<(), tempo_core::TempoError>(())
/// ```
pub struct Timer<R: Runtime = DefaultRuntime> {
    shared: Arc<Shared<R>>,
}

impl<R: Runtime> Timer<R> {
    /// Idle timer on the runtime's own clock and primitive, with default options.
    pub fn new() -> Self {
        Self::with_options(TimerOptions::default())
    }

    pub fn with_options(options: TimerOptions) -> Self {
        let (clock, scheduler) = R::parts();
        Self::with_parts(clock, scheduler, options)
    }

    /// Idle timer on an injected clock and primitive.
    ///
    /// The scheduling strategy is fixed here: frame-synchronized when the primitive
    /// supports it and `options` does not request legacy mode, timeouts otherwise.
    pub fn with_parts(clock: R::Clock, scheduler: R::Scheduler, options: TimerOptions) -> Self {
        let strategy = Strategy::select(options.is_legacy(), scheduler.frame_sync_available());
        debug!("timer: using {} strategy", strategy);

        Self {
            shared: Arc::new(Shared {
                clock,
                scheduler,
                strategy,
                default_timeout: options.timeout(),
                gate: ReentrantMutex::new(()),
                state: Mutex::new(State {
                    period: options.initial_period(),
                    callback: None,
                    chain: None,
                }),
            }),
        }
    }

    /// Set the target period in seconds.
    ///
    /// Takes effect from the next tick without restarting the chain. The interval in
    /// flight is measured against the previous baseline, so it may not match the new
    /// period exactly.
    ///
    /// # Errors
    /// Returns [`TempoError::Configuration`](tempo_core::TempoError::Configuration) if
    /// `seconds` is negative, NaN or infinite; the period is left unchanged.
    pub fn set_period(&self, seconds: f64) -> Result<()> {
        let seconds = validate_period(seconds)?;
        self.shared.state.lock().period = seconds;
        debug!("timer: period set to {}s", seconds);
        Ok(())
    }

    pub fn period(&self) -> f64 {
        self.shared.state.lock().period
    }

    /// Stop firing, then install `callback`. `None` leaves a timer that does nothing.
    pub fn set_callback(&self, callback: Option<Callback>) {
        self.stop_firing();
        self.shared.state.lock().callback = callback;
    }

    /// Shorthand for `set_callback(Some(Arc::new(callback)))`.
    pub fn on_fire<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.set_callback(Some(Arc::new(callback)));
    }

    pub fn clear_callback(&self) {
        self.set_callback(None);
    }

    /// Begin firing. No-op if already firing.
    ///
    /// The first tick runs synchronously, so an installed callback has been invoked
    /// once by the time this returns.
    pub fn start_firing(&self) {
        let _gate = self.shared.gate.lock();
        let token = {
            let mut state = self.shared.state.lock();
            if state.chain.is_some() {
                return;
            }

            let period = state.period;
            let token = CancellationToken::new();
            state.chain = Some(Chain {
                token: token.clone(),
                last_fired_at: self.shared.clock.now() - period - START_EPSILON,
                drift: 0.0,
                pending: None,
            });
            token
        };

        debug!("timer: started firing");
        self.shared.tick(&token);
    }

    /// Stop firing and cancel the outstanding tick. No-op if idle.
    pub fn stop_firing(&self) {
        // Cancel before waiting on the gate so a tick running elsewhere does not reschedule
        if let Some(chain) = self.shared.state.lock().chain.as_ref() {
            chain.token.cancel();
        }

        let _gate = self.shared.gate.lock();
        let chain = self.shared.state.lock().chain.take();
        let Some(chain) = chain else {
            return;
        };

        chain.token.cancel();
        if let Some(handle) = chain.pending {
            self.shared.scheduler.cancel(handle);
        }
        debug!("timer: stopped firing");
    }

    pub fn is_firing(&self) -> bool {
        self.shared.state.lock().chain.is_some()
    }

    /// Strategy chosen at construction.
    pub fn strategy(&self) -> Strategy {
        self.shared.strategy
    }

    /// Overshoot carried into the current interval; zero while idle.
    pub fn drift(&self) -> f64 {
        self.shared
            .state
            .lock()
            .chain
            .as_ref()
            .map_or(0.0, |chain| chain.drift)
    }

    /// Clock reading of the last invocation of this chain. `None` while idle.
    pub fn last_fired_at(&self) -> Option<f64> {
        self.shared
            .state
            .lock()
            .chain
            .as_ref()
            .map(|chain| chain.last_fired_at)
    }

    pub fn clock(&self) -> &R::Clock {
        &self.shared.clock
    }

    pub fn scheduler(&self) -> &R::Scheduler {
        &self.shared.scheduler
    }
}

impl<R: Runtime> Shared<R> {
    fn tick(self: &Arc<Self>, token: &CancellationToken) {
        let _gate = self.gate.lock();
        if token.is_cancelled() {
            return;
        }

        let fire = {
            let mut state = self.state.lock();
            let period = state.period;

            let Some(callback) = state.callback.clone() else {
                warn!("timer: tick without a callback, chain not rescheduled");
                return;
            };
            let Some(chain) = state
                .chain
                .as_mut()
                .filter(|chain| chain.token.same_chain(token))
            else {
                return;
            };

            chain.pending = None;
            let now = self.clock.now();
            let elapsed = now - (chain.last_fired_at - chain.drift);

            if elapsed >= period {
                chain.last_fired_at = now;
                chain.drift = if period > 0.0 { elapsed % period } else { 0.0 };
                Some(callback)
            } else {
                trace!("timer: skipping tick, {:.6}s of {:.6}s elapsed", elapsed, period);
                None
            }
        };

        // State unlocked: the callback may stop, restart or reconfigure the timer
        if let Some(callback) = fire {
            callback();
        }

        self.reschedule(token);
    }

    fn reschedule(self: &Arc<Self>, token: &CancellationToken) {
        if token.is_cancelled() {
            return;
        }

        let mut state = self.state.lock();
        let period = state.period;

        // A chain stopped or replaced during the callback stays dead
        let Some(chain) = state
            .chain
            .as_mut()
            .filter(|chain| chain.token.same_chain(token))
        else {
            return;
        };
        if chain.pending.is_some() {
            return;
        }

        let weak = Arc::downgrade(self);
        let next = token.clone();
        let tick: Tick = Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.tick(&next);
            }
        });

        chain.pending = Some(match self.strategy {
            Strategy::FrameSynchronized => self.scheduler.request_frame(tick),
            Strategy::Timeout => self.scheduler.set_timeout(self.timeout_for(period), tick),
        });
    }

    fn timeout_for(&self, period: f64) -> Duration {
        if period > 0.0 {
            Duration::from_millis((period * 1000.0).round() as u64)
        } else {
            self.default_timeout
        }
    }
}

impl<R: Runtime> Default for Timer<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Runtime> Drop for Timer<R> {
    fn drop(&mut self) {
        self.stop_firing();
    }
}

impl<R: Runtime> fmt::Debug for Timer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("Timer")
            .field("period", &state.period)
            .field("firing", &state.chain.is_some())
            .field("has_callback", &state.callback.is_some())
            .field("strategy", &self.shared.strategy)
            .finish()
    }
}
