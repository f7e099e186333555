//! Shared state and layout for the stack and queue simulators.

use crate::data::{Record, ensure_unique_ids};
use crate::error::InputError;
use crate::frame::{FrameSink, Layout, LinkTracker, Step, StatusOverrides, fresh_id, values_text};
use crate::layout::LayoutConfig;
use crate::model::{Element, Frame, Position};

#[derive(Debug, Clone)]
pub(super) struct Item {
    pub id: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
pub(super) enum Orientation {
    /// Slot 0 at the bottom; `capacity` fixes the column height for the trace.
    Vertical { capacity: usize },
    Horizontal,
}

/// A labelled marker pointing at a slot, or at the spot before slot 0 when
/// the container is empty.
pub(super) struct Marker {
    pub id: &'static str,
    pub label: String,
    pub slot: Option<usize>,
}

struct ContainerSnapshot<'a> {
    items: &'a [Item],
    orientation: Orientation,
    markers: &'a [Marker],
}

impl ContainerSnapshot<'_> {
    fn position(&self, config: &LayoutConfig, slot: usize) -> Position {
        match self.orientation {
            Orientation::Vertical { capacity } => {
                let row = capacity.saturating_sub(slot + 1);
                config
                    .origin
                    .offset(0.0, row as f64 * (config.box_height + config.box_gap))
            }
            Orientation::Horizontal => config.slot(slot),
        }
    }

    fn marker_position(&self, config: &LayoutConfig, marker: &Marker, index: usize) -> Position {
        match (self.orientation, marker.slot) {
            (Orientation::Vertical { .. }, Some(slot)) => self
                .position(config, slot)
                .offset(-config.pointer_offset, config.box_height / 2.0),
            (Orientation::Vertical { capacity }, None) => {
                // One row below the bottom slot.
                config.origin.offset(
                    -config.pointer_offset,
                    capacity as f64 * (config.box_height + config.box_gap) + config.box_height / 2.0,
                )
            }
            (Orientation::Horizontal, slot) => {
                let anchor = match slot {
                    Some(slot) => self.position(config, slot),
                    None => config
                        .origin
                        .offset(-(config.box_width + config.box_gap), 0.0),
                };
                // Alternate markers above and below the row.
                let dy = if index % 2 == 0 {
                    -config.pointer_offset / 2.0
                } else {
                    config.box_height + config.pointer_offset / 2.0
                };
                anchor.offset(config.box_width / 2.0, dy)
            }
        }
    }
}

impl Layout for ContainerSnapshot<'_> {
    fn layout(&self, config: &LayoutConfig) -> Vec<Element> {
        let mut elements: Vec<Element> = self
            .items
            .iter()
            .enumerate()
            .map(|(slot, item)| {
                Element::boxed(
                    item.id.clone(),
                    item.value,
                    self.position(config, slot),
                    config.box_width,
                    config.box_height,
                )
                .with_description(slot.to_string())
            })
            .collect();
        for (index, marker) in self.markers.iter().enumerate() {
            elements.push(Element::pointer(
                marker.id,
                marker.label.clone(),
                self.marker_position(config, marker, index),
            ));
        }
        elements
    }
}

/// Mutable state plus frame collection shared by stack and queue traces.
pub(super) struct ContainerTrace<'a> {
    pub items: Vec<Item>,
    pub orientation: Orientation,
    sink: FrameSink<'a>,
    links: LinkTracker,
}

impl<'a> ContainerTrace<'a> {
    pub fn new(
        records: &[Record],
        orientation: Orientation,
        config: &'a LayoutConfig,
    ) -> Result<Self, InputError> {
        ensure_unique_ids(records)?;
        Ok(Self {
            items: records
                .iter()
                .map(|r| Item {
                    id: r.id.clone(),
                    value: r.value,
                })
                .collect(),
            orientation,
            sink: FrameSink::new(config),
            links: LinkTracker::new(),
        })
    }

    pub fn fresh_id(&self) -> String {
        fresh_id("item", |candidate| {
            self.items.iter().any(|item| item.id == candidate)
        })
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.items.iter().map(|i| i.value).collect()
    }

    pub fn emit(&mut self, statuses: StatusOverrides, markers: &[Marker], step: Step) {
        let contents = values_text(&self.values());
        let snapshot = ContainerSnapshot {
            items: &self.items,
            orientation: self.orientation,
            markers,
        };
        let step = step.var("contents", contents).var("size", self.items.len());
        self.sink.emit(&snapshot, &statuses, &self.links, step);
    }

    pub fn finish(self) -> Vec<Frame> {
        self.sink.finish()
    }
}
