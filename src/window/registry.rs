//! Window registry: the ordered set of open window records.
//!
//! All operations are total. Acting on an id that has no record is a silent
//! no-op, except [`WindowRegistry::open`], which creates the record.

use super::{Point, WindowRecord, ZOrderAllocator};
use crate::constants::{CASCADE_ORIGIN_X, CASCADE_ORIGIN_Y, CASCADE_STEP};
use crate::content::ContentId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowRegistry {
    records: Vec<WindowRecord>,
    z_order: ZOrderAllocator,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn index_of(&self, id: ContentId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    fn record_mut(&mut self, id: ContentId) -> Option<&mut WindowRecord> {
        self.records.iter_mut().find(|record| record.id == id)
    }

    pub fn get(&self, id: ContentId) -> Option<&WindowRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: ContentId) -> bool {
        self.index_of(id).is_some()
    }

    /// Records in creation order.
    pub fn records(&self) -> &[WindowRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Highest stacking value handed out so far.
    pub fn highest_z(&self) -> u32 {
        self.z_order.highest()
    }

    /// Where a window created right now would be placed. Recomputed from the
    /// number of currently tracked records, not from a running counter.
    pub fn default_position(&self) -> Point {
        let n = i32::try_from(self.records.len()).unwrap_or(i32::MAX);
        let offset = n.saturating_mul(CASCADE_STEP);
        Point::new(
            CASCADE_ORIGIN_X.saturating_add(offset),
            CASCADE_ORIGIN_Y.saturating_add(offset),
        )
    }

    /// Open `id`, restore it if minimized, or bring it to front if it is
    /// already showing.
    pub fn open(&mut self, id: ContentId) {
        let Some(index) = self.index_of(id) else {
            let position = self.default_position();
            let z_index = self.z_order.next_z();
            self.records.push(WindowRecord::new(id, z_index, position));
            tracing::debug!(window = %id, z_index, x = position.x, y = position.y, "opened window");
            return;
        };
        if self.records[index].minimized {
            let z_index = self.z_order.next_z();
            let record = &mut self.records[index];
            record.minimized = false;
            record.z_index = z_index;
            tracing::debug!(window = %id, z_index, "restored window");
        } else {
            self.bring_to_front(id);
        }
    }

    pub fn close(&mut self, id: ContentId) {
        if let Some(index) = self.index_of(id) {
            self.records.remove(index);
            tracing::debug!(window = %id, "closed window");
        }
    }

    /// Hide a window without dropping its record. The stacking value is kept.
    pub fn minimize(&mut self, id: ContentId) {
        if let Some(record) = self.record_mut(id)
            && !record.minimized
        {
            record.minimized = true;
            tracing::debug!(window = %id, "minimized window");
        }
    }

    pub fn bring_to_front(&mut self, id: ContentId) {
        if !self.contains(id) {
            return;
        }
        let z_index = self.z_order.next_z();
        if let Some(record) = self.record_mut(id) {
            record.z_index = z_index;
            tracing::trace!(window = %id, z_index, "raised window");
        }
    }

    /// Move a window. Negative coordinates are clamped to zero; minimized
    /// windows are moved as well.
    pub fn update_position(&mut self, id: ContentId, x: i32, y: i32) {
        if let Some(record) = self.record_mut(id) {
            record.position = Point::new(x, y).clamped();
        }
    }

    pub fn is_open_visible(&self, id: ContentId) -> bool {
        self.get(id).is_some_and(|record| !record.minimized)
    }

    /// Ids of windows that are open and not minimized, in creation order.
    pub fn list_open_visible(&self) -> Vec<ContentId> {
        self.records
            .iter()
            .filter(|record| !record.minimized)
            .map(|record| record.id)
            .collect()
    }

    /// Visible windows from back to front.
    pub fn paint_order(&self) -> Vec<&WindowRecord> {
        let mut visible: Vec<&WindowRecord> = self
            .records
            .iter()
            .filter(|record| !record.minimized)
            .collect();
        visible.sort_by_key(|record| record.z_index);
        visible
    }

    /// The visible window with the highest stacking value.
    pub fn front_most(&self) -> Option<ContentId> {
        self.records
            .iter()
            .filter(|record| !record.minimized)
            .max_by_key(|record| record.z_index)
            .map(|record| record.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BASE_Z_INDEX;

    fn z(reg: &WindowRegistry, id: ContentId) -> u32 {
        reg.get(id).map(WindowRecord::z_index).unwrap_or_default()
    }

    #[test]
    fn first_window_gets_cascade_origin_and_fresh_z() {
        let mut reg = WindowRegistry::new();
        reg.open(ContentId::About);
        let record = reg.get(ContentId::About).unwrap();
        assert_eq!(record.position(), Point::new(100, 80));
        assert_eq!(record.z_index(), BASE_Z_INDEX + 1);
        assert!(!record.is_minimized());
    }

    #[test]
    fn reopening_open_window_raises_instead_of_duplicating() {
        let mut reg = WindowRegistry::new();
        reg.open(ContentId::About);
        reg.open(ContentId::Projects);
        let before = z(&reg, ContentId::About);
        reg.open(ContentId::About);
        assert_eq!(reg.len(), 2);
        assert!(z(&reg, ContentId::About) > before);
        assert!(z(&reg, ContentId::About) > z(&reg, ContentId::Projects));
    }

    #[test]
    fn minimize_keeps_z_and_restore_bumps_it() {
        let mut reg = WindowRegistry::new();
        reg.open(ContentId::Terminal);
        let before = z(&reg, ContentId::Terminal);
        reg.minimize(ContentId::Terminal);
        assert_eq!(z(&reg, ContentId::Terminal), before);
        assert!(reg.get(ContentId::Terminal).unwrap().is_minimized());
        reg.open(ContentId::Terminal);
        assert!(!reg.get(ContentId::Terminal).unwrap().is_minimized());
        assert!(z(&reg, ContentId::Terminal) > before);
    }

    #[test]
    fn operations_on_absent_ids_are_noops() {
        let mut reg = WindowRegistry::new();
        reg.close(ContentId::Skills);
        reg.minimize(ContentId::Skills);
        reg.bring_to_front(ContentId::Skills);
        reg.update_position(ContentId::Skills, 5, 5);
        assert!(reg.is_empty());
        // no stacking value was consumed
        assert_eq!(reg.highest_z(), BASE_Z_INDEX);
    }

    #[test]
    fn update_position_clamps_negative_coordinates() {
        let mut reg = WindowRegistry::new();
        reg.open(ContentId::Contact);
        reg.update_position(ContentId::Contact, -40, 12);
        assert_eq!(reg.get(ContentId::Contact).unwrap().position(), Point::new(0, 12));
        reg.update_position(ContentId::Contact, 7, -1);
        assert_eq!(reg.get(ContentId::Contact).unwrap().position(), Point::new(7, 0));
    }

    #[test]
    fn minimized_windows_can_still_be_moved() {
        let mut reg = WindowRegistry::new();
        reg.open(ContentId::Settings);
        reg.minimize(ContentId::Settings);
        reg.update_position(ContentId::Settings, 300, 200);
        assert_eq!(reg.get(ContentId::Settings).unwrap().position(), Point::new(300, 200));
    }

    #[test]
    fn paint_order_is_back_to_front_and_skips_minimized() {
        let mut reg = WindowRegistry::new();
        reg.open(ContentId::About);
        reg.open(ContentId::Projects);
        reg.open(ContentId::Skills);
        reg.bring_to_front(ContentId::About);
        reg.minimize(ContentId::Skills);
        let order: Vec<ContentId> = reg.paint_order().iter().map(|r| r.id()).collect();
        assert_eq!(order, vec![ContentId::Projects, ContentId::About]);
        assert_eq!(reg.front_most(), Some(ContentId::About));
    }

    #[test]
    fn cascade_counts_minimized_records() {
        let mut reg = WindowRegistry::new();
        reg.open(ContentId::About);
        reg.minimize(ContentId::About);
        reg.open(ContentId::Skills);
        assert_eq!(reg.get(ContentId::Skills).unwrap().position(), Point::new(130, 110));
    }
}
