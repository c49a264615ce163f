//! 闭环列表
//!
//! 首尾相连的有序列表，带有一个可以前后移动任意步数的游标，
//! 游标每次越过头部都会触发 head reached 通知。
//!
//! 提供两种实现：
//! - [`ContiguousClosedList`]：Vec 存储，取模计算游标位置
//! - [`LinkedClosedList`]：双向链表存储，逐步移动游标
//!
//! ```
//! use closed_list::{ClosedList, ContiguousClosedList};
//! use std::{cell::Cell, rc::Rc};
//!
//! let mut list = ContiguousClosedList::from(vec!["a", "b", "c"]);
//! let reached = Rc::new(Cell::new(0));
//! let counter = reached.clone();
//! list.on_head_reached(move |_| counter.set(counter.get() + 1));
//!
//! list.move_back(1);
//! assert_eq!(list.current(), Some(&"c"));
//! assert_eq!(reached.get(), 1);
//! ```

/// 包含使用数组结构封装的闭环列表
mod array;
/// 闭环列表的公共接口
mod contract;
/// 链式闭环列表的节点
mod entity;
mod error;
/// head reached 通知
mod event;
/// 包含使用链式节点封装的闭环列表
mod linked;


pub use array::*;
pub use contract::*;
pub use error::{ClosedListError, Result};
pub use event::*;
pub use linked::{Iter as LinkedIter, LinkedClosedList};
