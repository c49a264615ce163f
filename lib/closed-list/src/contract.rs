use crate::{
    error::{check_capacity, Result},
    event::Subscription,
};

/// 闭环列表
///
/// 有序、可按下标访问的列表，首尾相连。列表内部维护一个游标，
/// 游标可以向前或向后移动任意步数，越过头部（下标 0）时触发 head reached 通知。
///
/// 空列表时 `head`、`current`、`previous`、`next` 均返回 `None`，移动游标不产生任何效果。
pub trait ClosedList<T> {
    type Iter<'a>: ExactSizeIterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// 元素数量
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Result<&T>;

    fn get_mut(&mut self, index: usize) -> Result<&mut T>;

    /// 替换指定下标的元素，返回旧值
    fn set(&mut self, index: usize, value: T) -> Result<T> {
        Ok(std::mem::replace(self.get_mut(index)?, value))
    }

    /// 下标 0 的元素
    fn head(&self) -> Option<&T>;
    /// 游标所在元素
    fn current(&self) -> Option<&T>;
    /// 游标前一个元素，游标在头部时为最后一个元素
    fn previous(&self) -> Option<&T>;
    /// 游标后一个元素，游标在末尾时为头部元素
    fn next(&self) -> Option<&T>;
    /// 游标所在下标
    fn position(&self) -> Option<usize>;

    /// 追加到末尾（即头部之前）
    fn push(&mut self, item: T);

    /// 插入元素，使其位于 index 处。index 可以等于 len，此时等同于 push
    fn insert(&mut self, index: usize, item: T) -> Result<()>;

    /// 删除指定下标的元素
    ///
    /// 删除游标所在元素时，游标移动到被删除元素的后一个元素。
    fn remove_at(&mut self, index: usize) -> Result<T>;

    fn clear(&mut self);

    /// 从头部开始按顺序遍历所有元素
    fn iter(&self) -> Self::Iter<'_>;

    /// 游标向后移动 step 步，step 为负数时向前移动
    fn move_next(&mut self, step: isize);

    /// 游标向前移动 step 步，step 为负数时向后移动
    fn move_back(&mut self, step: isize);

    #[inline]
    fn step_forward(&mut self) {
        self.move_next(1)
    }

    #[inline]
    fn step_back(&mut self) {
        self.move_back(1)
    }

    /// 注册 head reached 回调
    ///
    /// 回调在移动游标的调用中同步执行，每越过头部一次执行一次。
    fn on_head_reached<F>(&mut self, handler: F) -> Subscription
    where
        F: FnMut(&T) + 'static;

    fn unsubscribe(&mut self, subscription: Subscription) -> bool;

    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|value| value == item)
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// 删除从头部开始第一个等于 item 的元素，返回是否删除
    fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(item) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// 将所有元素按顺序复制到 target[offset..]
    ///
    /// 空间不足时返回错误，且不会写入任何元素
    fn copy_to(&self, target: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone,
    {
        check_capacity(target.len(), offset, self.len())?;
        for (slot, value) in target[offset..].iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }
        Ok(())
    }
}
