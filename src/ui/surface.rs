//! Rendering boundary.
//!
//! Decision code never touches a concrete UI. It talks to a [`UiSurface`],
//! and [`ViewTree`] is the retained in-memory surface the kiosk renders
//! into and the view server exposes.

use super::region::Region;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Write access to named UI regions.
///
/// Operations on a region the surface does not have are silent no-ops.
pub trait UiSurface: Send {
    fn set_visible(&mut self, region: Region, visible: bool);
    fn set_text(&mut self, region: Region, text: &str);
    fn set_class(&mut self, region: Region, class: &str, on: bool);

    /// `None` when the region does not exist
    fn is_visible(&self, region: Region) -> Option<bool>;

    fn set_rows(&mut self, region: Region, rows: &[String]) {
        self.set_text(region, &rows.join("\n"));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegionView {
    pub visible: bool,
    pub text: String,
    pub rows: Vec<String>,
    pub classes: BTreeSet<String>,
}

impl RegionView {
    fn shown() -> Self {
        Self {
            visible: true,
            ..Default::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// Retained view of the kiosk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewTree {
    regions: BTreeMap<Region, RegionView>,
    /// Count of writes that actually changed something
    #[serde(skip)]
    mutations: u64,
}

impl ViewTree {
    /// Full kiosk layout with every region empty. The wind annotation
    /// starts detached; everything else is visible.
    pub fn kiosk() -> Self {
        let mut tree = Self::with_regions(Region::ALL);
        if let Some(view) = tree.regions.get_mut(&Region::WindAnnotation) {
            view.visible = false;
        }
        tree
    }

    /// A layout variant that only has some of the regions
    pub fn with_regions<I: IntoIterator<Item = Region>>(regions: I) -> Self {
        Self {
            regions: regions
                .into_iter()
                .map(|r| (r, RegionView::shown()))
                .collect(),
            mutations: 0,
        }
    }

    pub fn region(&self, region: Region) -> Option<&RegionView> {
        self.regions.get(&region)
    }

    pub fn text(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(|v| v.text.as_str())
    }

    pub fn has_class(&self, region: Region, class: &str) -> bool {
        self.regions.get(&region).is_some_and(|v| v.has_class(class))
    }

    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }

    fn touch(&mut self, changed: bool) {
        if changed {
            self.mutations += 1;
        }
    }
}

impl UiSurface for ViewTree {
    fn set_visible(&mut self, region: Region, visible: bool) {
        let changed = match self.regions.get_mut(&region) {
            Some(view) if view.visible != visible => {
                view.visible = visible;
                true
            }
            _ => false,
        };
        self.touch(changed);
    }

    fn set_text(&mut self, region: Region, text: &str) {
        let changed = match self.regions.get_mut(&region) {
            Some(view) if view.text != text || !view.rows.is_empty() => {
                view.text = text.to_string();
                view.rows.clear();
                true
            }
            _ => false,
        };
        self.touch(changed);
    }

    fn set_class(&mut self, region: Region, class: &str, on: bool) {
        let changed = match self.regions.get_mut(&region) {
            Some(view) if on => view.classes.insert(class.to_string()),
            Some(view) => view.classes.remove(class),
            None => false,
        };
        self.touch(changed);
    }

    fn is_visible(&self, region: Region) -> Option<bool> {
        self.regions.get(&region).map(|v| v.visible)
    }

    fn set_rows(&mut self, region: Region, rows: &[String]) {
        let changed = match self.regions.get_mut(&region) {
            Some(view) if view.rows != rows || !view.text.is_empty() => {
                view.rows = rows.to_vec();
                view.text.clear();
                true
            }
            _ => false,
        };
        self.touch(changed);
    }
}
