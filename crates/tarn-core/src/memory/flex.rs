// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Header-plus-trailing-array layout for variable-sized structures.

use std::alloc::{self, handle_alloc_error, Layout};
use std::ptr;

/// A fixed header followed by a variable-length array of items, allocated
/// in a single block.
///
/// This is a dynamically sized type: it only exists behind a pointer, and
/// the item count lives in the pointer metadata rather than in the header.
/// Use [`Flex::boxed`] to build one.
///
/// # Examples
///
/// ```
/// use tarn_core::memory::Flex;
///
/// let chunk = Flex::boxed("heights", &[3u16, 1, 4, 1, 5]);
/// assert_eq!(chunk.header, "heights");
/// assert_eq!(chunk.items.len(), 5);
/// ```
#[repr(C)]
pub struct Flex<H, T> {
    /// The fixed-size prefix.
    pub header: H,
    /// The trailing items.
    pub items: [T],
}

impl<H, T: Copy> Flex<H, T> {
    /// Allocates a `Flex` holding `header` followed by a copy of `items`.
    ///
    /// # Panics
    ///
    /// Panics if the combined layout overflows `isize`. Allocation failure
    /// goes through [`handle_alloc_error`].
    pub fn boxed(header: H, items: &[T]) -> Box<Self> {
        let (layout, items_offset) = Self::layout_for(items.len());
        unsafe {
            let raw = if layout.size() == 0 {
                // Zero-size allocations are invalid; a well-aligned dangling
                // pointer stands in, matching what `Box` expects for
                // zero-sized values.
                layout.align() as *mut u8
            } else {
                let raw = alloc::alloc(layout);
                if raw.is_null() {
                    handle_alloc_error(layout);
                }
                raw
            };
            // SAFETY: `raw` is valid for `layout`, the header slot starts at
            // offset 0 and the item slots at `items_offset`, both within the
            // allocation and properly aligned by `Layout::extend`.
            ptr::write(raw.cast::<H>(), header);
            ptr::copy_nonoverlapping(
                items.as_ptr(),
                raw.add(items_offset).cast::<T>(),
                items.len(),
            );
            // SAFETY: a `*mut [T]` carries the length metadata the fat
            // pointer needs; its data half points at the allocation start,
            // and the allocated layout matches what `Box` will compute for
            // the value when freeing it.
            let fat = ptr::slice_from_raw_parts_mut(raw.cast::<T>(), items.len()) as *mut Self;
            Box::from_raw(fat)
        }
    }

    fn layout_for(len: usize) -> (Layout, usize) {
        let header = Layout::new::<H>();
        let items = match Layout::array::<T>(len) {
            Ok(items) => items,
            Err(_) => panic!("flex array layout overflow"),
        };
        match header.extend(items) {
            Ok((layout, offset)) => (layout.pad_to_align(), offset),
            Err(_) => panic!("flex array layout overflow"),
        }
    }
}

impl<H, T> Flex<H, T> {
    /// Number of trailing items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when there are no trailing items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct ChunkHeader {
        label: String,
        flags: u32,
    }

    #[test]
    fn test_boxed_preserves_header_and_items() {
        let chunk = Flex::boxed(
            ChunkHeader {
                label: "terrain".to_string(),
                flags: 3,
            },
            &[1u32, 2, 3],
        );
        assert_eq!(chunk.header.label, "terrain");
        assert_eq!(chunk.header.flags, 3);
        assert_eq!(&chunk.items, &[1, 2, 3]);
        assert_eq!(chunk.len(), 3);
    }

    #[test]
    fn test_boxed_with_empty_tail() {
        let chunk: Box<Flex<u64, u8>> = Flex::boxed(7, &[]);
        assert_eq!(chunk.header, 7);
        assert!(chunk.is_empty());
        assert_eq!(chunk.len(), 0);
    }

    #[test]
    fn test_items_are_mutable_through_the_box() {
        let mut chunk = Flex::boxed(0u8, &[10u32, 20, 30]);
        chunk.items[1] = 99;
        assert_eq!(&chunk.items, &[10, 99, 30]);
    }

    #[test]
    fn test_header_drops_with_the_box() {
        let tracker = Rc::new(());
        let chunk = Flex::boxed(Rc::clone(&tracker), &[0u8, 1, 2, 3]);
        assert_eq!(Rc::strong_count(&tracker), 2);
        drop(chunk);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_zero_sized_header() {
        let chunk: Box<Flex<(), u16>> = Flex::boxed((), &[5, 6]);
        assert_eq!(&chunk.items, &[5, 6]);
    }
}
