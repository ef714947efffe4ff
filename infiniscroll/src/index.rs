/// Wraps an arbitrary index into `0..count` using floor modulo.
///
/// Negative indexes wrap from the end (`-1` maps to `count - 1`). With `count == 0` there is no
/// valid index; this returns `0` instead of dividing by zero, so callers must still guard empty
/// collections before using the result.
pub fn corrected_index(index: i64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let n = count as i64;
    if (0..n).contains(&index) {
        return index as usize;
    }
    index.rem_euclid(n) as usize
}

/// Maps between the padded slot space and the host's logical index space.
///
/// `offset` accumulates the cell shifts applied by re-centering, so that the item drawn at a slot
/// keeps its logical identity after the scroll offset jumps. It is kept reduced to `0..count`, so
/// `logical + offset` always names a slot within the first two copies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopIndex {
    count: usize,
    offset: i64,
}

impl LoopIndex {
    pub fn new(count: usize) -> Self {
        Self { count, offset: 0 }
    }

    pub fn with_offset(count: usize, offset: i64) -> Self {
        Self {
            count,
            offset: corrected_index(offset, count) as i64,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.offset = self.correct(self.offset) as i64;
    }

    pub fn correct(&self, index: i64) -> usize {
        corrected_index(index, self.count)
    }

    pub fn logical_for_slot(&self, slot: usize) -> usize {
        self.correct((slot as i64).wrapping_sub(self.offset))
    }

    /// Re-derives a slot in the first copy (`0..count`) for a logical index.
    pub fn slot_for_logical(&self, logical: usize) -> usize {
        self.correct((logical as i64).wrapping_add(self.offset))
    }

    /// Bumps the offset by the corrected shift and returns the amount added.
    ///
    /// The offset wraps within one cycle; mappings only depend on it modulo `count`.
    pub fn shift(&mut self, shift_count: i64) -> usize {
        let corrected = self.correct(shift_count);
        self.offset = self.correct(self.offset + corrected as i64) as i64;
        corrected
    }
}
