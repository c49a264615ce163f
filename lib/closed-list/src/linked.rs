use crate::{
    contract::ClosedList,
    entity::{EntityArena, EntityId, SENTINEL},
    error::{check_index, check_insert_index, ClosedListError, Result},
    event::{HeadReached, Subscription},
};
use std::{
    fmt::Debug,
    iter::FusedIterator,
    ops::{Index, IndexMut},
};

/// 使用双向链表组成的闭环列表
///
/// 节点保存在 arena 中，通过下标互相引用。按下标访问需要从头部开始遍历，为 O(index)；
/// 定位后的插入和删除只需要修改前后节点的链接。
///
/// 移动游标时逐步移动：向后移动时每次落在头部触发一次通知，
/// 向前移动时每次落在头部的前一个节点（即末尾）触发一次通知。因此移动 s 步的开销为 O(s)。
///
/// ```
/// use closed_list::{ClosedList, LinkedClosedList};
///
/// let mut list = LinkedClosedList::from_iter(["x", "y", "z"]);
/// list.move_next(4);
/// assert_eq!(list.current(), Some(&"y"));
/// ```
pub struct LinkedClosedList<T> {
    arena: EntityArena<T>,
    head: EntityId,
    current: EntityId,
    len: usize,
    head_reached: HeadReached<T>,
}

impl<T> LinkedClosedList<T> {
    pub fn new() -> Self {
        Self {
            arena: EntityArena::new(),
            head: SENTINEL,
            current: SENTINEL,
            len: 0,
            head_reached: HeadReached::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: EntityArena::with_capacity(capacity),
            ..Self::new()
        }
    }

    fn entity_at(&self, index: usize) -> EntityId {
        let mut id = self.head;
        for _ in 0..index {
            id = self.arena[id].next;
        }
        id
    }

    fn add_first(&mut self, item: T) {
        let id = self.arena.alloc(item);
        self.head = id;
        self.current = id;
        self.len = 1;
    }

    fn add_between(&mut self, item: T, previous: EntityId, next: EntityId) -> EntityId {
        let id = self.arena.alloc(item);
        self.arena.link_between(id, previous, next);
        self.len += 1;
        id
    }

    /// 摘除节点，必要时调整 head 和 current
    fn detach(&mut self, id: EntityId) -> Option<T> {
        if self.len == 1 {
            let value = self.arena.release(id);
            self.reset();
            return value;
        }

        let next = self.arena[id].next;
        if id == self.head {
            self.head = next;
        }
        if id == self.current {
            self.current = next;
        }
        self.len -= 1;
        self.arena.release(id)
    }

    fn reset(&mut self) {
        self.arena.clear();
        self.head = SENTINEL;
        self.current = SENTINEL;
        self.len = 0;
    }

    fn move_forward(&mut self, step: usize) {
        if self.len == 0 {
            return;
        }
        for _ in 0..step {
            self.current = self.arena[self.current].next;
            if self.current == self.head {
                self.reach_head();
            }
        }
    }

    fn move_backward(&mut self, step: usize) {
        if self.len == 0 {
            return;
        }
        for _ in 0..step {
            self.current = self.arena[self.current].previous;
            if self.current == self.arena[self.head].previous {
                self.reach_head();
            }
        }
    }

    fn reach_head(&mut self) {
        if let Some(head) = self.arena[self.head].value.as_ref() {
            log::trace!("cursor crossed head of linked closed list");
            self.head_reached.emit(head);
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_ring(&self) {
        if self.len == 0 {
            assert_eq!(self.head, SENTINEL);
            assert_eq!(self.current, SENTINEL);
            return;
        }

        let mut id = self.head;
        let mut cursor_seen = false;
        for _ in 0..self.len {
            let next = self.arena[id].next;
            assert_eq!(self.arena[next].previous, id, "previous is not the inverse of next");
            assert!(self.arena[id].value.is_some());
            cursor_seen |= id == self.current;
            id = next;
        }
        assert_eq!(id, self.head, "ring does not close after len steps");
        assert!(cursor_seen, "cursor is outside of the ring");
    }
}

impl<T> ClosedList<T> for LinkedClosedList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.len)?;
        self.arena[self.entity_at(index)]
            .value
            .as_ref()
            .ok_or(ClosedListError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_index(index, self.len)?;
        let len = self.len;
        let id = self.entity_at(index);
        self.arena[id]
            .value
            .as_mut()
            .ok_or(ClosedListError::IndexOutOfRange { index, len })
    }

    fn head(&self) -> Option<&T> {
        self.arena[self.head].value.as_ref()
    }

    fn current(&self) -> Option<&T> {
        self.arena[self.current].value.as_ref()
    }

    fn previous(&self) -> Option<&T> {
        self.arena[self.arena[self.current].previous].value.as_ref()
    }

    fn next(&self) -> Option<&T> {
        self.arena[self.arena[self.current].next].value.as_ref()
    }

    fn position(&self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let mut id = self.head;
        for index in 0..self.len {
            if id == self.current {
                return Some(index);
            }
            id = self.arena[id].next;
        }
        None
    }

    fn push(&mut self, item: T) {
        if self.len == 0 {
            self.add_first(item);
        } else {
            let last = self.arena[self.head].previous;
            self.add_between(item, last, self.head);
        }
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        check_insert_index(index, self.len)?;
        if index == self.len {
            self.push(item);
            return Ok(());
        }

        let at = self.entity_at(index);
        let previous = self.arena[at].previous;
        let id = self.add_between(item, previous, at);
        if index == 0 {
            self.head = id;
        }
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        check_index(index, self.len)?;
        let len = self.len;
        let id = self.entity_at(index);
        self.detach(id)
            .ok_or(ClosedListError::IndexOutOfRange { index, len })
    }

    fn clear(&mut self) {
        log::debug!("clear linked closed list of {} element(s)", self.len);
        self.reset();
    }

    fn iter(&self) -> Self::Iter<'_> {
        Iter {
            arena: &self.arena,
            id: self.head,
            remaining: self.len,
        }
    }

    fn move_next(&mut self, step: isize) {
        if step >= 0 {
            self.move_forward(step.unsigned_abs());
        } else {
            self.move_backward(step.unsigned_abs());
        }
    }

    fn move_back(&mut self, step: isize) {
        if step >= 0 {
            self.move_backward(step.unsigned_abs());
        } else {
            self.move_forward(step.unsigned_abs());
        }
    }

    fn on_head_reached<F>(&mut self, handler: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        self.head_reached.subscribe(handler)
    }

    fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.head_reached.unsubscribe(subscription)
    }

    fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let mut id = self.head;
        for _ in 0..self.len {
            if self.arena[id].value.as_ref() == Some(item) {
                return self.detach(id).is_some();
            }
            id = self.arena[id].next;
        }
        false
    }
}

/// 从头部开始遍历链式闭环列表，遍历 len 个元素后结束
pub struct Iter<'a, T> {
    arena: &'a EntityArena<T>,
    id: EntityId,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entity = &self.arena[self.id];
        self.id = entity.next;
        self.remaining -= 1;
        entity.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            id: self.id,
            remaining: self.remaining,
        }
    }
}

impl<T> FromIterator<T> for LinkedClosedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T> From<Vec<T>> for LinkedClosedList<T> {
    fn from(data: Vec<T>) -> Self {
        data.into_iter().collect()
    }
}

impl<T> Extend<T> for LinkedClosedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> Default for LinkedClosedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a LinkedClosedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for LinkedClosedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for LinkedClosedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedClosedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Debug> Debug for LinkedClosedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedClosedList")
            .field("data", &self.iter().collect::<Vec<_>>())
            .field("position", &self.position())
            .field("head_reached", &self.head_reached)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_single_entity_is_self_looped() {
        let list = LinkedClosedList::from(vec![42]);
        let head = list.head;
        assert_eq!(list.arena[head].next, head);
        assert_eq!(list.arena[head].previous, head);
        assert_eq!(list.previous(), Some(&42));
        assert_eq!(list.next(), Some(&42));
        list.assert_ring();
    }

    #[test]
    fn test_insert_at_zero_becomes_head() {
        let mut list = LinkedClosedList::from(vec![2, 3]);
        list.insert(0, 1).unwrap();
        assert_eq!(list.head(), Some(&1));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        // the cursor stays on its entity
        assert_eq!(list.current(), Some(&2));
        assert_eq!(list.position(), Some(1));
        list.assert_ring();
    }

    #[test]
    fn test_remove_head_under_cursor() {
        let mut list = LinkedClosedList::from(vec!['a', 'b', 'c']);
        assert_eq!(list.remove_at(0), Ok('a'));
        assert_eq!(list.head(), Some(&'b'));
        assert_eq!(list.current(), Some(&'b'));
        assert_eq!(list.previous(), Some(&'c'));
        list.assert_ring();
    }

    #[test]
    fn test_remove_last_under_cursor_wraps_to_head() {
        let mut list = LinkedClosedList::from(vec!['a', 'b', 'c']);
        list.move_back(1);
        assert_eq!(list.remove_at(2), Ok('c'));
        assert_eq!(list.current(), Some(&'a'));
        assert_eq!(list.position(), Some(0));
        list.assert_ring();
    }

    #[test]
    fn test_remove_sole_element_resets_to_sentinel() {
        let mut list = LinkedClosedList::from(vec![1]);
        assert_eq!(list.remove_at(0), Ok(1));
        assert_eq!(list.head, SENTINEL);
        assert_eq!(list.current, SENTINEL);
        assert_eq!(list.arena.slots(), 1);
        list.assert_ring();
    }

    #[test]
    fn test_removed_entities_are_reused() {
        let mut list = LinkedClosedList::from(vec![1, 2, 3]);
        let slots = list.arena.slots();
        list.remove_at(1).unwrap();
        list.push(4);
        assert_eq!(list.arena.slots(), slots);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4]);
        list.assert_ring();
    }

    #[test]
    fn test_remove_by_value_relinks() {
        let mut list = LinkedClosedList::from(vec![1, 2, 1, 3]);
        assert!(list.remove(&1));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
        assert!(list.remove(&3));
        assert!(!list.remove(&3));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
        list.assert_ring();
    }

    #[test]
    fn test_backward_boundary_is_before_head() {
        let mut list = LinkedClosedList::from(vec![0, 1, 2]);
        let heads = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = heads.clone();
        list.on_head_reached(move |head| sink.borrow_mut().push(*head));

        // 0 -> 2 crosses, 2 -> 1 and 1 -> 0 do not
        list.move_back(1);
        assert_eq!(*heads.borrow(), vec![0]);
        list.move_back(2);
        assert_eq!(*heads.borrow(), vec![0]);
        assert_eq!(list.position(), Some(0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_panics_out_of_range() {
        let list = LinkedClosedList::from(vec![1]);
        let _value = list[1];
    }
}
