//! 지연 작업 큐
//!
//! 이벤트 루프의 tick에서 `drain_due`로 만기 작업을 꺼낸다.
//! 큐를 소유한 쪽이 drop되면 대기 중인 작업도 함께 사라진다.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Scheduled<T> {
    due: Instant,
    payload: T,
}

/// 만기 시각 기준 1회성 예약 작업 목록
#[derive(Debug)]
pub struct DeferredQueue<T> {
    tasks: Vec<Scheduled<T>>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self { tasks: Vec::new() }
    }
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `now + delay` 시점에 전달할 작업 예약
    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) {
        self.tasks.push(Scheduled {
            due: now + delay,
            payload,
        });
    }

    /// 모든 예약 취소, 취소된 개수 반환
    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        count
    }

    /// 만기된 작업을 예약 순서대로 꺼낸다
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        let mut index = 0;
        while index < self.tasks.len() {
            if self.tasks[index].due <= now {
                due.push(self.tasks.remove(index).payload);
            } else {
                index += 1;
            }
        }
        due
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_due_respects_deadline() {
        let start = Instant::now();
        let mut queue = DeferredQueue::new();
        queue.schedule(start, Duration::from_millis(1000), "reply");

        assert!(queue.drain_due(start + Duration::from_millis(999)).is_empty());
        assert_eq!(queue.pending(), 1);

        let due = queue.drain_due(start + Duration::from_millis(1000));
        assert_eq!(due, vec!["reply"]);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_drain_keeps_schedule_order() {
        let start = Instant::now();
        let mut queue = DeferredQueue::new();
        queue.schedule(start, Duration::from_millis(10), 1);
        queue.schedule(start, Duration::from_millis(500), 2);
        queue.schedule(start, Duration::from_millis(20), 3);

        let due = queue.drain_due(start + Duration::from_millis(100));
        assert_eq!(due, vec![1, 3]);
        assert_eq!(queue.pending(), 1);
    }

    #[test]
    fn test_cancel_all() {
        let start = Instant::now();
        let mut queue = DeferredQueue::new();
        queue.schedule(start, Duration::from_millis(10), 'a');
        queue.schedule(start, Duration::from_millis(10), 'b');

        assert_eq!(queue.cancel_all(), 2);
        assert_eq!(queue.cancel_all(), 0);
        assert!(queue.drain_due(start + Duration::from_secs(1)).is_empty());
    }
}
