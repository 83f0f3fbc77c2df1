//! Caller-owned backing storage
//!
//! 调用者拥有的底层存储
//!
//! A ring buffer never allocates. It is bound to a contiguous block supplied
//! by the caller, either borrowed (`&mut [T]`, `&mut [T; N]`) or moved in
//! (`[T; N]`, and `Vec<T>` / `Box<[T]>` with the `alloc` feature). The block
//! is handed back by `RingBuffer::into_storage`.
//!
//! 环形缓冲区从不分配内存。它绑定到调用者提供的连续内存块，可以是借用的
//! （`&mut [T]`、`&mut [T; N]`）或移入的（`[T; N]`，以及启用 `alloc` 特性时的
//! `Vec<T>` / `Box<[T]>`）。通过 `RingBuffer::into_storage` 归还该内存块。

/// Contiguous block of slots a ring buffer is bound to
///
/// 环形缓冲区绑定的连续槽位块
///
/// # Type Parameters
/// - `Item`: Slot type. `Copy` because entries are moved in and out by bulk
///   copies; `Default` supplies the fill value for zeroing.
///
/// # 类型参数
/// - `Item`: 槽位类型。需要 `Copy`，因为条目通过批量拷贝移入移出；
///   `Default` 提供清零时的填充值。
pub trait Storage {
    type Item: Copy + Default;

    /// All slots of the block, initialized or not from the FIFO's point of view
    ///
    /// 内存块的全部槽位
    fn slots(&self) -> &[Self::Item];

    /// Mutable view of all slots
    ///
    /// 全部槽位的可变视图
    fn slots_mut(&mut self) -> &mut [Self::Item];
}

impl<T: Copy + Default> Storage for &mut [T] {
    type Item = T;

    #[inline(always)]
    fn slots(&self) -> &[T] {
        self
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Copy + Default, const N: usize> Storage for &mut [T; N] {
    type Item = T;

    #[inline(always)]
    fn slots(&self) -> &[T] {
        &self[..]
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [T] {
        &mut self[..]
    }
}

impl<T: Copy + Default, const N: usize> Storage for [T; N] {
    type Item = T;

    #[inline(always)]
    fn slots(&self) -> &[T] {
        self
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [T] {
        self
    }
}

#[cfg(feature = "alloc")]
impl<T: Copy + Default> Storage for alloc::vec::Vec<T> {
    type Item = T;

    #[inline(always)]
    fn slots(&self) -> &[T] {
        self
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [T] {
        self
    }
}

#[cfg(feature = "alloc")]
impl<T: Copy + Default> Storage for alloc::boxed::Box<[T]> {
    type Item = T;

    #[inline(always)]
    fn slots(&self) -> &[T] {
        self
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [T] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len_of<S: Storage>(storage: &S) -> usize {
        storage.slots().len()
    }

    #[test]
    fn test_borrowed_and_owned_views() {
        let mut backing = [0u16; 6];
        assert_eq!(len_of(&&mut backing[..]), 6);
        assert_eq!(len_of(&&mut backing), 6);

        let mut owned = [7u32; 3];
        owned.slots_mut()[1] = 9;
        assert_eq!(owned.slots(), &[7, 9, 7]);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_heap_views() {
        let mut v = alloc::vec![1u8, 2, 3];
        v.slots_mut()[0] = 4;
        assert_eq!(v.slots(), &[4, 2, 3]);

        let boxed: alloc::boxed::Box<[u8]> = v.into_boxed_slice();
        assert_eq!(len_of(&boxed), 3);
    }
}
