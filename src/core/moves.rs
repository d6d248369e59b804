//! # Move Engine
//!
//! Ordered relocation on plain vectors plus the modulo-wrap rule that every
//! cursor in the app follows. The Board Store validates indices and then
//! calls into here, so these functions assume their inputs are in range.

/// Move `items[from]` to position `to` of the sequence left after removing
/// it. Moving "down" one slot is `to = from + 1`, "up" is `to = from - 1`.
pub fn reorder<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}

/// Move `source[from]` into `dest` at `to`, where `to` indexes `dest` as it
/// currently is (`0..=dest.len()`).
pub fn transfer<T>(source: &mut Vec<T>, from: usize, dest: &mut Vec<T>, to: usize) {
    let item = source.remove(from);
    dest.insert(to, item);
}

/// Step `current` by `delta` inside `0..len`, wrapping at both ends.
///
/// A step below zero lands on `len - 1` rather than clamping. Returns `None`
/// for an empty range.
pub fn wrap_index(current: usize, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as isize;
    let next = (current as isize + delta).rem_euclid(len);
    Some(next as usize)
}

/// Reduce an index into `0..len` after the sequence changed length.
pub fn rewrap(index: usize, len: usize) -> Option<usize> {
    wrap_index(index, 0, len)
}
