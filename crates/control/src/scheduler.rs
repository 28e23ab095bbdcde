//! Tick Scheduler
//!
//! Repeating timers driven by elapsed wall-clock time. The host owns the
//! real clock and calls [`TickScheduler::advance`] with the time that passed;
//! the scheduler answers with the ticks that came due, in order. Nothing runs
//! on its own, so a cancelled task can never fire again.

use std::time::Duration;

/// Handle to a repeating task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

pub trait TickScheduler {
    /// Start a task firing every `period`.
    fn schedule_repeating(&mut self, period: Duration) -> TaskHandle;
    /// Stop a task. Returns false if it was not active.
    fn cancel(&mut self, handle: TaskHandle) -> bool;
    /// Let `elapsed` pass and return every tick that came due.
    fn advance(&mut self, elapsed: Duration) -> Vec<TaskHandle>;
    fn is_active(&self, handle: TaskHandle) -> bool;
    fn active_tasks(&self) -> usize;
}

#[derive(Debug, Clone)]
struct RepeatingTask {
    handle: TaskHandle,
    period: Duration,
    /// Time since the last tick
    pending: Duration,
}

/// Accumulator based scheduler; each task keeps the remainder of the
/// elapsed time that did not fill a whole period.
#[derive(Debug, Clone, Default)]
pub struct IntervalScheduler {
    next_id: u64,
    tasks: Vec<RepeatingTask>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TickScheduler for IntervalScheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.push(RepeatingTask {
            handle,
            period: period.max(Duration::from_micros(1)),
            pending: Duration::ZERO,
        });
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.handle != handle);
        self.tasks.len() != before
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<TaskHandle> {
        let mut fired = Vec::new();
        for task in &mut self.tasks {
            task.pending += elapsed;
            while task.pending >= task.period {
                task.pending -= task.period;
                fired.push(task.handle);
            }
        }
        fired
    }

    fn is_active(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|task| task.handle == handle)
    }

    fn active_tasks(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_period() {
        let mut scheduler = IntervalScheduler::new();
        let task = scheduler.schedule_repeating(Duration::from_millis(50));

        assert!(scheduler.advance(Duration::from_millis(30)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(30)), vec![task]);
        // 10 ms carried over
        assert_eq!(scheduler.advance(Duration::from_millis(140)), vec![task; 3]);
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let mut scheduler = IntervalScheduler::new();
        let task = scheduler.schedule_repeating(Duration::from_millis(50));
        assert!(scheduler.cancel(task));
        assert!(!scheduler.cancel(task));
        assert!(!scheduler.is_active(task));
        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
        assert_eq!(scheduler.active_tasks(), 0);
    }

    #[test]
    fn test_handles_are_unique() {
        let mut scheduler = IntervalScheduler::new();
        let a = scheduler.schedule_repeating(Duration::from_millis(50));
        scheduler.cancel(a);
        let b = scheduler.schedule_repeating(Duration::from_millis(50));
        assert_ne!(a, b);
        assert!(scheduler.is_active(b));
    }

    #[test]
    fn test_zero_period_is_bounded() {
        let mut scheduler = IntervalScheduler::new();
        scheduler.schedule_repeating(Duration::ZERO);
        assert_eq!(scheduler.advance(Duration::from_millis(1)).len(), 1000);
    }
}
