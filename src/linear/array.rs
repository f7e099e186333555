use crate::data::Record;
use crate::frame::{FrameSink, Layout, LinkTracker, Step, StatusOverrides, overrides, values_text};
use crate::highlight::ActionTag;
use crate::layout::LayoutConfig;
use crate::model::{Element, Frame, Status, format_number};

/// A row of slots with an optional index marker underneath.
struct ArraySnapshot<'a> {
    slots: &'a [Option<f64>],
    cursor: Option<usize>,
}

impl Layout for ArraySnapshot<'_> {
    fn layout(&self, config: &LayoutConfig) -> Vec<Element> {
        let mut elements: Vec<Element> = self
            .slots
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let slot = Element::boxed(
                    format!("slot-{}", i),
                    *value,
                    config.slot(i),
                    config.box_width,
                    config.box_height,
                )
                .with_description(i.to_string());
                match &config.scale_group {
                    Some(group) => slot.with_scale_group(group.clone()),
                    None => slot,
                }
            })
            .collect();

        if let Some(i) = self.cursor {
            let position = config
                .slot(i)
                .offset(config.box_width / 2.0, config.box_height + config.pointer_offset / 2.0);
            elements.push(Element::pointer("pointer-i", "i", position));
        }
        elements
    }
}

/// Drives one array trace.
struct ArrayTrace<'a> {
    slots: Vec<Option<f64>>,
    sink: FrameSink<'a>,
    links: LinkTracker,
}

impl<'a> ArrayTrace<'a> {
    fn new(records: &[Record], config: &'a LayoutConfig) -> Self {
        Self {
            slots: records.iter().map(|r| r.value).collect(),
            sink: FrameSink::new(config),
            links: LinkTracker::new(),
        }
    }

    fn emit(&mut self, statuses: StatusOverrides, cursor: Option<usize>, step: Step) {
        let snapshot = ArraySnapshot {
            slots: &self.slots,
            cursor,
        };
        let step = step.var("array", values_text(&self.slots));
        self.sink.emit(&snapshot, &statuses, &self.links, step);
    }

    fn all(&self, status: Status) -> StatusOverrides {
        overrides((0..self.slots.len()).map(|i| (slot_id(i), status.clone())))
    }

    fn finish(self) -> Vec<Frame> {
        self.sink.finish()
    }
}

fn slot_id(i: usize) -> String {
    format!("slot-{}", i)
}

/// Inserts `value` at `index`, shifting the tail one slot to the right.
pub fn insert(records: &[Record], index: i64, value: f64, config: &LayoutConfig) -> Vec<Frame> {
    let mut trace = ArrayTrace::new(records, config);
    let len = trace.slots.len();
    trace.emit(
        StatusOverrides::new(),
        None,
        Step::new(
            ActionTag::Init,
            format!("Insert {} at index {}", format_number(value), index),
        )
        .var("index", index as f64)
        .var("value", value)
        .var("length", len),
    );

    if index < 0 || index as usize > len {
        trace.emit(
            StatusOverrides::new(),
            None,
            Step::new(
                ActionTag::InvalidIndex,
                format!("Index {} is outside the valid range [0, {}]", index, len),
            )
            .var("index", index as f64)
            .var("error", "invalid index"),
        );
        return trace.finish();
    }
    let index = index as usize;

    trace.slots.push(None);
    trace.emit(
        overrides([(slot_id(len), Status::Inactive)]),
        None,
        Step::new(ActionTag::Grow, format!("Grow the array to length {}", len + 1))
            .var("length", len + 1),
    );

    for i in (index + 1..=len).rev() {
        trace.emit(
            overrides([
                (slot_id(i - 1), Status::Prepare),
                (slot_id(i), Status::Prepare),
            ]),
            Some(i),
            Step::new(
                ActionTag::PrepareShift,
                format!("Move arr[{}] into arr[{}]", i - 1, i),
            )
            .var("i", i),
        );
        trace.slots.swap(i - 1, i);
        trace.emit(
            overrides([
                (slot_id(i - 1), Status::Inactive),
                (slot_id(i), Status::Complete),
            ]),
            Some(i),
            Step::new(
                ActionTag::Shift,
                format!("arr[{}] now holds {}", i, slot_text(trace.slots[i])),
            )
            .var("i", i),
        );
    }

    trace.slots[index] = Some(value);
    trace.emit(
        overrides([(slot_id(index), Status::Target)]),
        Some(index),
        Step::new(
            ActionTag::Assign,
            format!("arr[{}] = {}", index, format_number(value)),
        )
        .var("index", index)
        .var("value", value),
    );

    let done = trace.all(Status::Complete);
    trace.emit(
        done,
        None,
        Step::new(
            ActionTag::Complete,
            format!("Inserted {} at index {}", format_number(value), index),
        )
        .var("length", len + 1),
    );
    trace.finish()
}

/// Removes the slot at `index`, shifting the tail one slot to the left.
pub fn delete(records: &[Record], index: i64, config: &LayoutConfig) -> Vec<Frame> {
    let mut trace = ArrayTrace::new(records, config);
    let len = trace.slots.len();
    trace.emit(
        StatusOverrides::new(),
        None,
        Step::new(ActionTag::Init, format!("Delete the element at index {}", index))
            .var("index", index as f64)
            .var("length", len),
    );

    if index < 0 || index as usize >= len {
        let upper = len as i64 - 1;
        trace.emit(
            StatusOverrides::new(),
            None,
            Step::new(
                ActionTag::InvalidIndex,
                format!("Index {} is outside the valid range [0, {}]", index, upper),
            )
            .var("index", index as f64)
            .var("error", "invalid index"),
        );
        return trace.finish();
    }
    let index = index as usize;

    let removed = trace.slots[index].take();
    trace.emit(
        overrides([(slot_id(index), Status::Target)]),
        Some(index),
        Step::new(
            ActionTag::Select,
            format!("removed = arr[{}] = {}", index, slot_text(removed)),
        )
        .var("removed", removed),
    );

    for i in index..len - 1 {
        trace.emit(
            overrides([
                (slot_id(i), Status::Prepare),
                (slot_id(i + 1), Status::Prepare),
            ]),
            Some(i),
            Step::new(
                ActionTag::PrepareShift,
                format!("Move arr[{}] into arr[{}]", i + 1, i),
            )
            .var("i", i),
        );
        trace.slots.swap(i, i + 1);
        trace.emit(
            overrides([
                (slot_id(i), Status::Complete),
                (slot_id(i + 1), Status::Inactive),
            ]),
            Some(i),
            Step::new(
                ActionTag::Shift,
                format!("arr[{}] now holds {}", i, slot_text(trace.slots[i])),
            )
            .var("i", i),
        );
    }

    trace.slots.pop();
    trace.emit(
        StatusOverrides::new(),
        None,
        Step::new(
            ActionTag::RemoveLast,
            format!("Shrink the array to length {}", len - 1),
        )
        .var("length", len - 1),
    );

    let done = trace.all(Status::Complete);
    trace.emit(
        done,
        None,
        Step::new(
            ActionTag::Complete,
            format!("Deleted {} from index {}", slot_text(removed), index),
        )
        .var("removed", removed)
        .var("length", len - 1),
    );
    trace.finish()
}

/// Linear scan for `value`.
pub fn search(records: &[Record], value: f64, config: &LayoutConfig) -> Vec<Frame> {
    let mut trace = ArrayTrace::new(records, config);
    trace.emit(
        StatusOverrides::new(),
        None,
        Step::new(ActionTag::Init, format!("Search for {}", format_number(value)))
            .var("value", value),
    );

    for i in 0..trace.slots.len() {
        let mut statuses = overrides((0..i).map(|j| (slot_id(j), Status::Inactive)));
        statuses.insert(slot_id(i), Status::Target);
        let current = trace.slots[i];
        trace.emit(
            statuses.clone(),
            Some(i),
            Step::new(
                ActionTag::Compare,
                format!(
                    "Compare arr[{}] = {} with {}",
                    i,
                    slot_text(current),
                    format_number(value)
                ),
            )
            .var("i", i),
        );
        if current == Some(value) {
            statuses.insert(slot_id(i), Status::Complete);
            trace.emit(
                statuses,
                Some(i),
                Step::new(
                    ActionTag::Found,
                    format!("Found {} at index {}", format_number(value), i),
                )
                .var("found", true)
                .var("index", i),
            );
            return trace.finish();
        }
    }

    let exhausted = trace.all(Status::Inactive);
    trace.emit(
        exhausted,
        None,
        Step::new(
            ActionTag::NotFound,
            format!("{} is not in the array", format_number(value)),
        )
        .var("found", false)
        .var("index", -1.0),
    );
    trace.finish()
}

fn slot_text(value: Option<f64>) -> String {
    value.map_or_else(|| "empty".to_string(), format_number)
}
