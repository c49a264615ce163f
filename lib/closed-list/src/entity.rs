use std::ops::{Index, IndexMut};

/// 节点在 [`EntityArena`] 中的下标
pub(crate) type EntityId = usize;

/// 空节点，永远位于 arena 的 0 号位置
///
/// 空节点不保存值，next 和 previous 都指向自身。空列表的 head 和 current 都指向它，
/// 因此读取时不需要额外判断列表是否为空。
pub(crate) const SENTINEL: EntityId = 0;

/// 链式闭环列表中的节点
///
/// next 和 previous 只是 arena 中的下标，节点之间没有所有权关系。
/// 只有一个节点时 next 和 previous 都指向自身。
#[derive(Debug)]
pub(crate) struct SequenceEntity<T> {
    pub(crate) value: Option<T>,
    pub(crate) next: EntityId,
    pub(crate) previous: EntityId,
}

impl<T> SequenceEntity<T> {
    /// 自环节点
    fn detached(id: EntityId, value: Option<T>) -> Self {
        Self {
            value,
            next: id,
            previous: id,
        }
    }
}

/// 保存所有节点的 arena
///
/// 被删除的节点放入 vacant 中，之后插入时复用。
#[derive(Debug)]
pub(crate) struct EntityArena<T> {
    entities: Vec<SequenceEntity<T>>,
    vacant: Vec<EntityId>,
}

impl<T> EntityArena<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut entities = Vec::with_capacity(capacity + 1);
        entities.push(SequenceEntity::detached(SENTINEL, None));
        Self {
            entities,
            vacant: Vec::new(),
        }
    }

    /// 分配一个自环节点
    pub fn alloc(&mut self, value: T) -> EntityId {
        match self.vacant.pop() {
            Some(id) => {
                self.entities[id] = SequenceEntity::detached(id, Some(value));
                id
            }
            None => {
                let id = self.entities.len();
                self.entities
                    .push(SequenceEntity::detached(id, Some(value)));
                id
            }
        }
    }

    /// 将 id 链接到 previous 和 next 之间
    pub fn link_between(&mut self, id: EntityId, previous: EntityId, next: EntityId) {
        self.entities[id].previous = previous;
        self.entities[id].next = next;
        self.entities[previous].next = id;
        self.entities[next].previous = id;
    }

    /// 将节点从环中摘除并回收，返回节点保存的值
    pub fn release(&mut self, id: EntityId) -> Option<T> {
        if id == SENTINEL {
            return None;
        }

        let SequenceEntity {
            previous, next, ..
        } = self.entities[id];
        self.entities[previous].next = next;
        self.entities[next].previous = previous;

        let value = self.entities[id].value.take();
        self.entities[id].next = id;
        self.entities[id].previous = id;
        self.vacant.push(id);
        value
    }

    /// 丢弃所有节点，只保留空节点
    pub fn clear(&mut self) {
        self.entities.truncate(1);
        self.entities[SENTINEL] = SequenceEntity::detached(SENTINEL, None);
        self.vacant.clear();
    }

    /// 已分配（含空节点和待复用节点）的槽位数量
    #[cfg(test)]
    pub fn slots(&self) -> usize {
        self.entities.len()
    }
}

impl<T> Index<EntityId> for EntityArena<T> {
    type Output = SequenceEntity<T>;

    #[inline]
    fn index(&self, id: EntityId) -> &Self::Output {
        &self.entities[id]
    }
}

impl<T> IndexMut<EntityId> for EntityArena<T> {
    #[inline]
    fn index_mut(&mut self, id: EntityId) -> &mut Self::Output {
        &mut self.entities[id]
    }
}
