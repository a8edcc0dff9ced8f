//! Wall-clock timers as explicit scheduled events
//!
//! The host polls [`Timers::pop_due`] with the current time; nothing fires on
//! its own, so tests drive timers with a virtual clock. A fired event carries
//! its scheduled time, so follow-up timers keep wall-clock pacing however late
//! the poll arrives.

/// Cancellation token for a scheduled event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct TimerEntry<E> {
    id: TimerId,
    fire_at_ms: f64,
    period_ms: Option<f64>,
    event: E,
}

/// An event that came due
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<E> {
    pub id: TimerId,
    /// When the event was scheduled to fire, not when it was polled
    pub at_ms: f64,
    pub event: E,
}

/// Queue of pending one-shot and repeating events
#[derive(Debug, Clone)]
pub struct Timers<E> {
    next_id: u64,
    entries: Vec<TimerEntry<E>>,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<E: Clone> Timers<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `event` once, `delay_ms` after `now_ms`
    pub fn schedule_once(&mut self, now_ms: f64, delay_ms: f64, event: E) -> TimerId {
        self.insert(now_ms + delay_ms, None, event)
    }

    /// Fire `event` every `period_ms` (at least 1 ms), starting one period after `now_ms`
    pub fn schedule_every(&mut self, now_ms: f64, period_ms: f64, event: E) -> TimerId {
        let period_ms = period_ms.max(1.0);
        self.insert(now_ms + period_ms, Some(period_ms), event)
    }

    fn insert(&mut self, fire_at_ms: f64, period_ms: Option<f64>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(TimerEntry {
            id,
            fire_at_ms,
            period_ms,
            event,
        });
        id
    }

    /// Cancel a pending timer. Unknown, fired or already-cancelled ids are ignored.
    pub fn cancel(&mut self, id: TimerId) {
        self.entries.retain(|entry| entry.id != id);
    }

    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Pop the earliest event due at `now_ms`, rescheduling it if it repeats
    pub fn pop_due(&mut self, now_ms: f64) -> Option<Fired<E>> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.fire_at_ms <= now_ms)
            .min_by(|(_, a), (_, b)| {
                a.fire_at_ms
                    .total_cmp(&b.fire_at_ms)
                    .then(a.id.0.cmp(&b.id.0))
            })
            .map(|(index, _)| index)?;

        let entry = &mut self.entries[index];
        let fired = Fired {
            id: entry.id,
            at_ms: entry.fire_at_ms,
            event: entry.event.clone(),
        };
        match entry.period_ms {
            Some(period) => entry.fire_at_ms += period,
            None => {
                self.entries.remove(index);
            }
        }
        Some(fired)
    }

    /// Every event due at `now_ms`, in fire-time order
    pub fn due(&mut self, now_ms: f64) -> Vec<Fired<E>> {
        let mut fired = Vec::new();
        while let Some(next) = self.pop_due(now_ms) {
            fired.push(next);
        }
        fired
    }
}
