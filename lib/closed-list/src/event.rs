use std::fmt::Debug;

/// 订阅句柄，用于取消订阅
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Handler<T> = Box<dyn FnMut(&T)>;

/// 游标经过头部时的通知
///
/// 按注册顺序同步调用各个回调，回调参数为触发时的头部元素。
/// 回调只能拿到元素的不可变引用，因此无法在通知过程中修改列表。
pub struct HeadReached<T> {
    handlers: Vec<(Subscription, Handler<T>)>,
    next_id: u64,
}

impl<T> HeadReached<T> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn subscribe<F>(&mut self, handler: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;
        self.handlers.push((subscription, Box::new(handler)));
        subscription
    }

    /// 取消订阅，返回该订阅是否存在
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(id, _)| *id != subscription);
        self.handlers.len() != before
    }

    pub(crate) fn emit(&mut self, head: &T) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(head);
        }
    }

    /// 连续触发 times 次
    pub(crate) fn emit_times(&mut self, head: &T, times: u128) {
        if self.handlers.is_empty() {
            return;
        }
        for _ in 0..times {
            self.emit(head);
        }
    }

    #[inline]
    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

impl<T> Default for HeadReached<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for HeadReached<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadReached")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn test_emit_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut event = HeadReached::new();

        let first = log.clone();
        event.subscribe(move |v: &i32| first.borrow_mut().push(("first", *v)));
        let second = log.clone();
        event.subscribe(move |v: &i32| second.borrow_mut().push(("second", *v)));

        event.emit(&7);

        assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut event = HeadReached::new();

        let counter = count.clone();
        let subscription = event.subscribe(move |_: &i32| *counter.borrow_mut() += 1);
        assert!(event.unsubscribe(subscription));
        assert!(!event.unsubscribe(subscription));

        event.emit(&1);
        assert_eq!(*count.borrow(), 0);
        assert_eq!(event.subscriber_count(), 0);
    }

    #[test]
    fn test_emit_times() {
        let count = Rc::new(RefCell::new(0));
        let mut event = HeadReached::new();
        let counter = count.clone();
        event.subscribe(move |_: &i32| *counter.borrow_mut() += 1);

        event.emit_times(&1, 3);
        assert_eq!(*count.borrow(), 3);
    }
}
