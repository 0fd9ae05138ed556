//! Visibility windowing: which planes belong in the render set.

use fnv::FnvHashSet;
use smallvec::SmallVec;
use std::ops::Range;

/// Contiguous index range kept visible around `active`.
///
/// The offset is `visible_range / 2` (floor), so even ranges are treated as the
/// next smaller odd range rather than made asymmetric.
#[inline]
pub fn visible_window(active: usize, visible_range: usize, total: usize) -> Range<usize> {
    if total == 0 {
        return 0..0;
    }
    let offset = visible_range / 2;
    let min = active.saturating_sub(offset);
    let max = active.saturating_add(offset).min(total - 1);
    if min > max {
        return 0..0;
    }
    min..max + 1
}

/// Indices touched by one [`RenderSet::apply`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderDiff {
    pub added: SmallVec<[usize; 4]>,
    pub removed: SmallVec<[usize; 4]>,
}

impl RenderDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Plane indices currently attached to the visible scene.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderSet {
    members: FnvHashSet<usize>,
}

impl RenderSet {
    /// Converge membership onto `window` for a carousel of `total` planes.
    pub fn apply(&mut self, window: Range<usize>, total: usize) -> RenderDiff {
        let mut diff = RenderDiff::default();
        for i in 0..total {
            let inside = window.contains(&i);
            if inside {
                if self.members.insert(i) {
                    diff.added.push(i);
                }
            } else if self.members.remove(&i) {
                diff.removed.push(i);
            }
        }
        // Members left over from a longer, previous plane list.
        let mut stale: SmallVec<[usize; 4]> =
            self.members.iter().copied().filter(|&i| i >= total).collect();
        stale.sort_unstable();
        for i in stale {
            self.members.remove(&i);
            diff.removed.push(i);
        }
        diff
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in ascending order.
    pub fn sorted(&self) -> SmallVec<[usize; 4]> {
        let mut v: SmallVec<[usize; 4]> = self.members.iter().copied().collect();
        v.sort_unstable();
        v
    }
}
