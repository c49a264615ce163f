use thiserror::Error;

/// 闭环列表操作的错误
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ClosedListError {
    /// 下标越界
    ///
    /// 读写、删除时下标需小于 len；插入时下标允许等于 len
    #[error("index {index} out of range for closed list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// copy_to 的目标空间不足
    #[error("target of length {available} cannot hold {required} elements")]
    Capacity { required: usize, available: usize },
}

pub type Result<T, E = ClosedListError> = std::result::Result<T, E>;

/// 检查读写、删除下标
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(ClosedListError::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// 检查插入下标，len 本身是合法的插入位置
#[inline]
pub(crate) fn check_insert_index(index: usize, len: usize) -> Result<()> {
    if index > len {
        return Err(ClosedListError::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// 检查 copy_to 的目标空间
pub(crate) fn check_capacity(available: usize, offset: usize, len: usize) -> Result<()> {
    match offset.checked_add(len) {
        Some(required) if required <= available => Ok(()),
        Some(required) => Err(ClosedListError::Capacity {
            required,
            available,
        }),
        None => Err(ClosedListError::Capacity {
            required: usize::MAX,
            available,
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_check_index() {
        assert!(check_index(0, 1).is_ok());
        assert_eq!(
            check_index(1, 1),
            Err(ClosedListError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert!(check_index(0, 0).is_err());
    }

    #[test]
    fn test_check_insert_index() {
        assert!(check_insert_index(0, 0).is_ok());
        assert!(check_insert_index(3, 3).is_ok());
        assert!(check_insert_index(4, 3).is_err());
    }

    #[test]
    fn test_check_capacity() {
        assert!(check_capacity(10, 5, 5).is_ok());
        assert_eq!(
            check_capacity(5, 0, 10),
            Err(ClosedListError::Capacity {
                required: 10,
                available: 5
            })
        );
        assert!(check_capacity(10, usize::MAX, 1).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = ClosedListError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 7 out of range for closed list of length 3"
        );
    }
}
