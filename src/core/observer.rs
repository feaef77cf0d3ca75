//! 구독자 목록 - 스토어 변경 알림 전달
//!
//! 구독 순서대로 동기 전달하며, 한 구독자의 실패(에러 반환 또는 panic)는
//! 로그만 남기고 나머지 구독자 전달을 계속한다.

use std::cell::{Cell, RefCell};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// 구독 해제용 토큰
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<E> = Box<dyn FnMut(&E) -> anyhow::Result<()>>;

/// 이벤트 `E`에 대한 구독자 목록
pub struct Observers<E> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(SubscriptionId, Callback<E>)>>,
    /// 전달 중 추가된 구독 (전달이 끝난 뒤 합류)
    added_during_notify: RefCell<Vec<(SubscriptionId, Callback<E>)>>,
    /// 전달 중 해제된 구독
    removed_during_notify: RefCell<Vec<SubscriptionId>>,
    notifying: Cell<bool>,
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self {
            next_id: Cell::new(1),
            entries: RefCell::new(Vec::new()),
            added_during_notify: RefCell::new(Vec::new()),
            removed_during_notify: RefCell::new(Vec::new()),
            notifying: Cell::new(false),
        }
    }
}

impl<E> Observers<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 구독 추가
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: FnMut(&E) -> anyhow::Result<()> + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        if self.notifying.get() {
            self.added_during_notify
                .borrow_mut()
                .push((id, Box::new(callback)));
        } else {
            self.entries.borrow_mut().push((id, Box::new(callback)));
        }
        id
    }

    /// 구독 해제. 존재하지 않는 토큰이면 false
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        if self.notifying.get() {
            let mut added = self.added_during_notify.borrow_mut();
            if let Some(pos) = added.iter().position(|(sid, _)| *sid == id) {
                added.remove(pos);
                return true;
            }
            if id.0 >= self.next_id.get() {
                return false;
            }
            let mut removed = self.removed_during_notify.borrow_mut();
            if removed.contains(&id) {
                return false;
            }
            removed.push(id);
            return true;
        }

        let mut entries = self.entries.borrow_mut();
        match entries.iter().position(|(sid, _)| *sid == id) {
            Some(pos) => {
                entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// 구독자 수
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 모든 구독자에게 이벤트 전달
    ///
    /// 전달 중 구독/해제는 이번 전달이 끝난 뒤 반영된다.
    pub fn notify(&self, kind: &str, event: &E) {
        let mut current = std::mem::take(&mut *self.entries.borrow_mut());
        self.notifying.set(true);

        for (id, callback) in current.iter_mut() {
            if self.removed_during_notify.borrow().contains(id) {
                continue;
            }
            match catch_unwind(AssertUnwindSafe(|| callback(event))) {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    tracing::warn!(kind, subscriber = id.0, error = %err, "observer failed");
                }
                Err(_) => {
                    tracing::warn!(kind, subscriber = id.0, "observer panicked");
                }
            }
        }

        self.notifying.set(false);
        let removed = std::mem::take(&mut *self.removed_during_notify.borrow_mut());
        current.retain(|(id, _)| !removed.contains(id));
        current.append(&mut self.added_during_notify.borrow_mut());
        *self.entries.borrow_mut() = current;
    }
}
