// ============================================================================
// ORDER STATUS - Delivery phases and the status timeline state machine
// ============================================================================

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

/// Minutes between backfilled timestamps of skipped steps
const BACKFILL_STEP_MINUTES: i64 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryPhase {
    Placed,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl DeliveryPhase {
    pub const ALL: [DeliveryPhase; 5] = [
        DeliveryPhase::Placed,
        DeliveryPhase::Confirmed,
        DeliveryPhase::Preparing,
        DeliveryPhase::OutForDelivery,
        DeliveryPhase::Delivered,
    ];

    pub fn index(&self) -> usize {
        match self {
            DeliveryPhase::Placed => 0,
            DeliveryPhase::Confirmed => 1,
            DeliveryPhase::Preparing => 2,
            DeliveryPhase::OutForDelivery => 3,
            DeliveryPhase::Delivered => 4,
        }
    }

    pub fn next(&self) -> Option<DeliveryPhase> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    pub fn title(&self) -> &'static str {
        match self {
            DeliveryPhase::Placed => "Order Placed",
            DeliveryPhase::Confirmed => "Restaurant Confirmed",
            DeliveryPhase::Preparing => "Preparing Your Meal",
            DeliveryPhase::OutForDelivery => "Out for Delivery",
            DeliveryPhase::Delivered => "Delivered",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DeliveryPhase::Placed => "📋",
            DeliveryPhase::Confirmed => "🏪",
            DeliveryPhase::Preparing => "👨‍🍳",
            DeliveryPhase::OutForDelivery => "🚴",
            DeliveryPhase::Delivered => "📦",
        }
    }

    pub fn map_phase(&self) -> MapPhase {
        match self {
            DeliveryPhase::Placed | DeliveryPhase::Confirmed | DeliveryPhase::Preparing => MapPhase::Preparing,
            DeliveryPhase::OutForDelivery => MapPhase::EnRoute,
            DeliveryPhase::Delivered => MapPhase::Delivered,
        }
    }

    /// Progress bar value, 0-100
    pub fn progress(&self) -> u8 {
        match self {
            DeliveryPhase::Placed => 10,
            DeliveryPhase::Confirmed => 25,
            DeliveryPhase::Preparing => 50,
            DeliveryPhase::OutForDelivery => 75,
            DeliveryPhase::Delivered => 100,
        }
    }

    pub fn estimated_time(&self) -> &'static str {
        match self {
            DeliveryPhase::Placed => "Est. 10:30 AM",
            DeliveryPhase::Confirmed => "Est. 10:35 AM",
            DeliveryPhase::Preparing => "Est. 10:45 AM",
            DeliveryPhase::OutForDelivery => "Est. 11:00 AM",
            DeliveryPhase::Delivered => "Delivered 11:15 AM",
        }
    }
}

/// Position of the rider on the simulated map
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapPhase {
    Preparing,
    PickedUp,
    EnRoute,
    ArrivingSoon,
    Delivered,
}

impl MapPhase {
    pub fn label(&self) -> &'static str {
        match self {
            MapPhase::Preparing => "preparing",
            MapPhase::PickedUp => "picked up",
            MapPhase::EnRoute => "en route",
            MapPhase::ArrivingSoon => "arriving soon",
            MapPhase::Delivered => "delivered",
        }
    }

    /// (top, left) offsets in percent of the map area
    pub fn agent_position(&self) -> (u8, u8) {
        match self {
            MapPhase::Preparing | MapPhase::PickedUp => (50, 15),
            MapPhase::EnRoute => (50, 50),
            MapPhase::ArrivingSoon => (50, 80),
            MapPhase::Delivered => (50, 85),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusStep {
    pub phase: DeliveryPhase,
    pub timestamp: Option<NaiveTime>,
    pub completed: bool,
    pub is_current: bool,
}

impl StatusStep {
    fn pending(phase: DeliveryPhase) -> Self {
        Self {
            phase,
            timestamp: None,
            completed: false,
            is_current: false,
        }
    }

    /// "10:42", or the placeholder shown before the step has a time
    pub fn time_label(&self) -> String {
        match self.timestamp {
            Some(time) => time.format("%H:%M").to_string(),
            None if self.is_current => "Processing...".to_string(),
            None => "Pending".to_string(),
        }
    }
}

/// Outcome of a single timer tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Not started yet; ticks are ignored until `start`
    Idle,
    Advanced(DeliveryPhase),
    /// Entered the last phase; the timer must be cancelled
    Finished,
    AlreadyTerminal,
}

/// Fixed, ordered delivery timeline with exactly one current step once started
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusTimeline {
    steps: Vec<StatusStep>,
    current: Option<usize>,
    terminal: bool,
}

impl Default for StatusTimeline {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTimeline {
    pub fn new() -> Self {
        Self {
            steps: DeliveryPhase::ALL.iter().copied().map(StatusStep::pending).collect(),
            current: None,
            terminal: false,
        }
    }

    /// First step becomes current, stamped with `now`
    pub fn start(&mut self, now: NaiveTime) {
        if self.current.is_some() {
            return;
        }
        let first = &mut self.steps[0];
        first.is_current = true;
        first.completed = false;
        first.timestamp = Some(now);
        self.current = Some(0);
    }

    pub fn advance(&mut self, now: NaiveTime) -> Transition {
        if self.terminal {
            return Transition::AlreadyTerminal;
        }
        let Some(current) = self.current else {
            return Transition::Idle;
        };

        let next = current + 1;
        let last = self.steps.len() - 1;

        for (idx, step) in self.steps.iter_mut().enumerate().take(next) {
            step.completed = true;
            step.is_current = false;
            if step.timestamp.is_none() {
                let minutes_back = (next - idx) as i64 * BACKFILL_STEP_MINUTES;
                step.timestamp = Some(now - Duration::minutes(minutes_back));
            }
        }

        let step = &mut self.steps[next];
        step.is_current = true;
        step.timestamp = Some(now);
        self.current = Some(next);

        if next == last {
            step.completed = true;
            self.terminal = true;
            Transition::Finished
        } else {
            step.completed = false;
            Transition::Advanced(step.phase)
        }
    }

    pub fn steps(&self) -> &[StatusStep] {
        &self.steps
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Step the page headline follows; the first step before start
    pub fn active_step(&self) -> &StatusStep {
        &self.steps[self.current.unwrap_or(0)]
    }

    pub fn is_started(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn current_count(timeline: &StatusTimeline) -> usize {
        timeline.steps().iter().filter(|s| s.is_current).count()
    }

    #[test]
    fn test_phase_order() {
        assert_eq!(DeliveryPhase::Placed.next(), Some(DeliveryPhase::Confirmed));
        assert_eq!(DeliveryPhase::Delivered.next(), None);
        for (idx, phase) in DeliveryPhase::ALL.iter().enumerate() {
            assert_eq!(phase.index(), idx);
        }
        assert_eq!(DeliveryPhase::OutForDelivery.map_phase(), MapPhase::EnRoute);
        assert_eq!(DeliveryPhase::Delivered.progress(), 100);
    }

    #[test]
    fn test_ticks_before_start_are_ignored() {
        let mut timeline = StatusTimeline::new();
        assert_eq!(timeline.advance(at(10, 0)), Transition::Idle);
        assert_eq!(current_count(&timeline), 0);
        assert_eq!(timeline.active_step().time_label(), "Pending");
    }

    #[test]
    fn test_start_marks_first_step_current() {
        let mut timeline = StatusTimeline::new();
        timeline.start(at(10, 30));

        let first = &timeline.steps()[0];
        assert!(first.is_current);
        assert!(!first.completed);
        assert_eq!(first.time_label(), "10:30");
        assert_eq!(current_count(&timeline), 1);
    }

    #[test]
    fn test_each_tick_moves_current_by_one() {
        let mut timeline = StatusTimeline::new();
        timeline.start(at(10, 30));
        let total = DeliveryPhase::ALL.len();

        for n in 1..total - 1 {
            assert_eq!(timeline.advance(at(10, 30 + n as u32)), Transition::Advanced(DeliveryPhase::ALL[n]));
            assert_eq!(timeline.current_index(), Some(n));
            assert_eq!(current_count(&timeline), 1);
            for (idx, step) in timeline.steps().iter().enumerate() {
                assert_eq!(step.completed, idx < n, "step {} after {} ticks", idx, n);
            }
        }
    }

    #[test]
    fn test_last_phase_is_terminal() {
        let mut timeline = StatusTimeline::new();
        timeline.start(at(10, 30));
        for _ in 0..DeliveryPhase::ALL.len() - 2 {
            timeline.advance(at(10, 40));
        }

        assert_eq!(timeline.advance(at(10, 45)), Transition::Finished);
        assert!(timeline.is_terminal());
        assert!(timeline.steps().iter().all(|s| s.completed));
        let last = timeline.steps().last().unwrap();
        assert!(last.is_current);
        assert_eq!(current_count(&timeline), 1);

        let snapshot = timeline.clone();
        assert_eq!(timeline.advance(at(11, 0)), Transition::AlreadyTerminal);
        assert_eq!(timeline, snapshot);
    }

    #[test]
    fn test_missing_timestamps_are_backfilled() {
        let mut timeline = StatusTimeline::new();
        timeline.start(at(10, 30));
        timeline.steps[0].timestamp = None;

        timeline.advance(at(10, 40));
        assert_eq!(timeline.steps()[0].timestamp, Some(at(10, 38)));
        assert_eq!(timeline.steps()[1].timestamp, Some(at(10, 40)));
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut timeline = StatusTimeline::new();
        timeline.start(at(10, 30));
        timeline.advance(at(10, 31));
        timeline.start(at(9, 0));
        assert_eq!(timeline.current_index(), Some(1));
    }
}
