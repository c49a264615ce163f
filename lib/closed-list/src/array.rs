use crate::{
    contract::ClosedList,
    error::{check_capacity, check_index, check_insert_index, Result},
    event::{HeadReached, Subscription},
};
use std::{
    fmt::Debug,
    ops::{Index, IndexMut},
    slice,
};

/// 使用 Vec 存储的闭环列表
///
/// 随机访问为 O(1)，插入和删除需要移动元素，为 O(n)。
/// 移动游标时直接取模计算新位置和越过头部的次数，与步数无关。
pub struct ContiguousClosedList<T> {
    data: Vec<T>,
    ptr: usize,
    head_reached: HeadReached<T>,
}

impl<T> ContiguousClosedList<T> {
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(Vec::with_capacity(capacity))
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn move_by(&mut self, delta: i128) {
        if self.data.is_empty() {
            return;
        }

        let len = self.data.len() as i128;
        let target = self.ptr as i128 + delta;
        let laps = target.div_euclid(len).unsigned_abs();
        self.ptr = target.rem_euclid(len) as usize;

        if laps > 0 {
            log::trace!("cursor crossed head {laps} time(s), now at {}", self.ptr);
            self.head_reached.emit_times(&self.data[0], laps);
        }
    }
}

impl<T> ClosedList<T> for ContiguousClosedList<T> {
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.data.len())?;
        Ok(&self.data[index])
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_index(index, self.data.len())?;
        Ok(&mut self.data[index])
    }

    fn head(&self) -> Option<&T> {
        self.data.first()
    }

    fn current(&self) -> Option<&T> {
        self.data.get(self.ptr)
    }

    fn previous(&self) -> Option<&T> {
        if self.ptr == 0 {
            self.data.last()
        } else {
            self.data.get(self.ptr - 1)
        }
    }

    fn next(&self) -> Option<&T> {
        if self.data.is_empty() {
            return None;
        }
        self.data.get((self.ptr + 1) % self.data.len())
    }

    fn position(&self) -> Option<usize> {
        (!self.data.is_empty()).then_some(self.ptr)
    }

    fn push(&mut self, item: T) {
        self.data.push(item);
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        check_insert_index(index, self.data.len())?;
        self.data.insert(index, item);

        // keep the cursor on the same element
        if self.data.len() > 1 && index <= self.ptr {
            self.ptr += 1;
        }
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        check_index(index, self.data.len())?;
        let value = self.data.remove(index);

        if index < self.ptr {
            self.ptr -= 1;
        } else if self.ptr >= self.data.len() {
            // removed the last element under the cursor, or the list is now empty
            self.ptr = 0;
        }
        Ok(value)
    }

    fn clear(&mut self) {
        log::debug!("clear contiguous closed list of {} element(s)", self.data.len());
        self.data.clear();
        self.ptr = 0;
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.data.iter()
    }

    fn move_next(&mut self, step: isize) {
        self.move_by(step as i128);
    }

    fn move_back(&mut self, step: isize) {
        self.move_by(-(step as i128));
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

    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.data.iter().position(|value| value == item)
    }

    fn copy_to(&self, target: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone,
    {
        check_capacity(target.len(), offset, self.data.len())?;
        target[offset..offset + self.data.len()].clone_from_slice(&self.data);
        Ok(())
    }
}

impl<T> From<Vec<T>> for ContiguousClosedList<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            data,
            ptr: 0,
            head_reached: HeadReached::new(),
        }
    }
}

impl<T> FromIterator<T> for ContiguousClosedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for ContiguousClosedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<T> Default for ContiguousClosedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a ContiguousClosedList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> Index<usize> for ContiguousClosedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for ContiguousClosedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: PartialEq> PartialEq for ContiguousClosedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Debug> Debug for ContiguousClosedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContiguousClosedList")
            .field("data", &self.data)
            .field("ptr", &self.ptr)
            .field("head_reached", &self.head_reached)
            .finish()
    }
}
