//! Deferred game procedures
//!
//! Verb handlers only ask for a procedure to run later. The game loop drains
//! due procedures from the queue and runs them between commands, so a
//! procedure never runs inside the dispatcher that scheduled it.

use log::debug;

/// What to run when a timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    BuyDrinks,
    BuyWine,
    OpenDrawbridge,
    Urinate,
    SpludwickGoesToCauldron,
    SpludwickReturns,
    AvvySitDown,
    Jump,
    AvariciusTalks,
    ArkataShouts,
    CardiffSurvey,
    GiveLuteToGeida,
}

/// Why a timer was set; used to cancel it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    Drinks,
    DrawbridgeFalls,
    GoToToilet,
    SpludwickWalk,
    SittingDown,
    Jumping,
    AvariciusTalks,
    ArkataShouts,
    CardiffSurvey,
    GeidaSings,
}

impl Reason {
    pub const ALL: [Reason; 10] = [
        Reason::Drinks,
        Reason::DrawbridgeFalls,
        Reason::GoToToilet,
        Reason::SpludwickWalk,
        Reason::SittingDown,
        Reason::Jumping,
        Reason::AvariciusTalks,
        Reason::ArkataShouts,
        Reason::CardiffSurvey,
        Reason::GeidaSings,
    ];
}

pub trait Scheduler {
    fn add_timer(&mut self, delay_ticks: u32, procedure: Procedure, reason: Reason);

    /// Drops every pending timer set for `reason`
    fn cancel_timer(&mut self, reason: Reason);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    pub remaining: u32,
    pub procedure: Procedure,
    pub reason: Reason,
}

#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    timers: Vec<Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[Timer] {
        &self.timers
    }

    pub fn is_pending(&self, reason: Reason) -> bool {
        self.timers.iter().any(|t| t.reason == reason)
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Advances every timer by one tick and returns the procedures that fell
    /// due, in the order they were scheduled
    pub fn tick(&mut self) -> Vec<Procedure> {
        let mut due = Vec::new();
        self.timers.retain_mut(|timer| {
            timer.remaining = timer.remaining.saturating_sub(1);
            if timer.remaining == 0 {
                due.push(timer.procedure);
                false
            } else {
                true
            }
        });
        if !due.is_empty() {
            debug!("Timers fired: {:?}", due);
        }
        due
    }
}

impl Scheduler for TimerQueue {
    fn add_timer(&mut self, delay_ticks: u32, procedure: Procedure, reason: Reason) {
        debug!(
            "add_timer({}, {:?}, {:?})",
            delay_ticks, procedure, reason
        );
        self.timers.push(Timer {
            remaining: delay_ticks.max(1),
            procedure,
            reason,
        });
    }

    fn cancel_timer(&mut self, reason: Reason) {
        self.timers.retain(|t| t.reason != reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timers_fire_after_their_delay() {
        let mut q = TimerQueue::new();
        q.add_timer(2, Procedure::BuyWine, Reason::Drinks);
        q.add_timer(1, Procedure::Jump, Reason::Jumping);

        assert_eq!(q.tick(), vec![Procedure::Jump]);
        assert_eq!(q.tick(), vec![Procedure::BuyWine]);
        assert!(q.tick().is_empty());
    }

    #[test]
    fn test_cancel_by_reason() {
        let mut q = TimerQueue::new();
        q.add_timer(5, Procedure::CardiffSurvey, Reason::CardiffSurvey);
        q.add_timer(5, Procedure::ArkataShouts, Reason::ArkataShouts);
        q.cancel_timer(Reason::CardiffSurvey);

        assert!(!q.is_pending(Reason::CardiffSurvey));
        assert!(q.is_pending(Reason::ArkataShouts));
    }

    #[test]
    fn test_zero_delay_fires_on_next_tick() {
        let mut q = TimerQueue::new();
        q.add_timer(0, Procedure::Urinate, Reason::GoToToilet);
        assert_eq!(q.tick(), vec![Procedure::Urinate]);
    }
}
