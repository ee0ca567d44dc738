//! Two-click select/swap interaction.
//!
//! A [`Session`] owns the dataset, its scales and the in-progress selection.
//! Front-ends turn pointer clicks into [`Command`]s and react to the returned
//! [`Effect`]s; nothing here touches a rendering or audio API.

use crate::data::{parse_dataset, swap_base_height, DataItem};
use crate::error::Result;
use crate::geometry::{build_triangle, fill_for, Hsl, Triangle};
use crate::layout::Layout;
use crate::scale::Scales;
use smallvec::SmallVec;

/// Indices of the items picked so far, in click order. Holds at most two.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    items: SmallVec<[usize; 2]>,
}

impl SelectionSet {
    pub fn contains(&self, index: usize) -> bool {
        self.items.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().copied()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn insert(&mut self, index: usize) {
        self.items.push(index);
    }

    fn remove(&mut self, index: usize) {
        self.items.retain(|i| *i != index);
    }

    fn pair(&self) -> Option<(usize, usize)> {
        match self.items.as_slice() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}

/// Resting states between clicks. Two selected items never persist past the
/// command that selected the second one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    OneSelected(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Select(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Item left the selection; its stroke goes back to default.
    Deselected(usize),
    /// Item joined the selection; its stroke is highlighted.
    Selected(usize),
    PlaySelectCue,
    Swapped { a: usize, b: usize },
    /// Redraw every shape with an animated transition.
    StartTransition,
}

pub type Effects = SmallVec<[Effect; 4]>;

#[derive(Clone, Debug)]
pub struct Session {
    items: Vec<DataItem>,
    scales: Scales,
    selection: SelectionSet,
}

impl Session {
    /// Scales are computed here, once, from the loaded items.
    pub fn new(items: Vec<DataItem>, layout: &Layout) -> Self {
        let scales = Scales::from_data(&items, layout);
        log::info!(
            "[session] items={} x_domain={:?} y_domain={:?}",
            items.len(),
            scales.x.domain(),
            scales.y.domain()
        );
        Self {
            items,
            scales,
            selection: SelectionSet::default(),
        }
    }

    pub fn from_json(json: &str, layout: &Layout) -> Result<Self> {
        Ok(Self::new(parse_dataset(json)?, layout))
    }

    pub fn items(&self) -> &[DataItem] {
        &self.items
    }

    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(index)
    }

    pub fn state(&self) -> SelectionState {
        match self.selection.iter().next() {
            Some(i) => SelectionState::OneSelected(i),
            None => SelectionState::Idle,
        }
    }

    pub fn triangle(&self, index: usize) -> Option<Triangle> {
        self.items
            .get(index)
            .map(|item| build_triangle(item, &self.scales))
    }

    pub fn fill(&self, index: usize, hovered: bool) -> Option<Hsl> {
        self.items
            .get(index)
            .map(|item| fill_for(item, &self.scales, hovered))
    }

    pub fn handle(&mut self, command: Command) -> Effects {
        match command {
            Command::Select(index) => self.select(index),
        }
    }

    fn select(&mut self, index: usize) -> Effects {
        let mut effects = Effects::new();
        if index >= self.items.len() {
            log::warn!("[select] ignoring click on unknown item {}", index);
            return effects;
        }

        if self.selection.contains(index) {
            self.selection.remove(index);
            effects.push(Effect::Deselected(index));
        } else if self.selection.len() < 2 {
            self.selection.insert(index);
            effects.push(Effect::Selected(index));
            effects.push(Effect::PlaySelectCue);
        }

        if let Some((a, b)) = self.selection.pair() {
            swap_base_height(&mut self.items, a, b);
            self.selection.clear();
            log::info!("[swap] exchanged base/height of items {} and {}", a, b);
            effects.push(Effect::Swapped { a, b });
            effects.push(Effect::StartTransition);
        }
        effects
    }
}
