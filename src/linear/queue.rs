use super::container::{ContainerTrace, Item, Marker, Orientation};
use crate::data::Record;
use crate::error::InputError;
use crate::frame::{Step, StatusOverrides, overrides};
use crate::highlight::ActionTag;
use crate::layout::LayoutConfig;
use crate::model::{Frame, Status, format_number};

fn markers(trace: &ContainerTrace) -> [Marker; 2] {
    let last = trace.items.len().checked_sub(1);
    let front = last.map(|_| 0);
    [
        Marker {
            id: "front",
            label: "front".to_string(),
            slot: front,
        },
        Marker {
            id: "rear",
            label: "rear".to_string(),
            slot: last,
        },
    ]
}

pub fn enqueue(records: &[Record], value: f64, config: &LayoutConfig) -> Result<Vec<Frame>, InputError> {
    let mut trace = ContainerTrace::new(records, Orientation::Horizontal, config)?;
    trace.emit(
        StatusOverrides::new(),
        &markers(&trace),
        Step::new(ActionTag::Init, format!("Enqueue {}", format_number(value))).var("value", value),
    );

    let id = trace.fresh_id();
    trace.items.push(Item {
        id: id.clone(),
        value: None,
    });
    trace.emit(
        overrides([(id.clone(), Status::Prepare)]),
        &markers(&trace),
        Step::new(ActionTag::Prepare, "rear += 1"),
    );

    if let Some(item) = trace.items.last_mut() {
        item.value = Some(value);
    }
    trace.emit(
        overrides([(id.clone(), Status::Target)]),
        &markers(&trace),
        Step::new(
            ActionTag::SlotUpdate,
            format!("queue[rear] = {}", format_number(value)),
        ),
    );

    trace.emit(
        overrides([(id, Status::Complete)]),
        &markers(&trace),
        Step::new(
            ActionTag::Complete,
            format!("Enqueued {}", format_number(value)),
        ),
    );
    Ok(trace.finish())
}

pub fn dequeue(records: &[Record], config: &LayoutConfig) -> Result<Vec<Frame>, InputError> {
    let mut trace = ContainerTrace::new(records, Orientation::Horizontal, config)?;
    trace.emit(
        StatusOverrides::new(),
        &markers(&trace),
        Step::new(ActionTag::Init, "Dequeue the front element"),
    );

    if trace.items.is_empty() {
        trace.emit(
            StatusOverrides::new(),
            &markers(&trace),
            Step::new(ActionTag::Underflow, "Cannot dequeue: the queue is empty")
                .var("error", "queue underflow"),
        );
        return Ok(trace.finish());
    }

    let front = trace.items[0].clone();
    trace.emit(
        overrides([(front.id.clone(), Status::Target)]),
        &markers(&trace),
        Step::new(
            ActionTag::Prepare,
            format!("value = queue[front] = {}", value_text(front.value)),
        )
        .var("value", front.value),
    );

    trace.items.remove(0);
    trace.emit(
        StatusOverrides::new(),
        &markers(&trace),
        Step::new(ActionTag::SlotUpdate, "front += 1").var("returned", front.value),
    );

    trace.emit(
        StatusOverrides::new(),
        &markers(&trace),
        Step::new(
            ActionTag::Complete,
            format!("Dequeued {}", value_text(front.value)),
        )
        .var("returned", front.value),
    );
    Ok(trace.finish())
}

pub fn peek(records: &[Record], config: &LayoutConfig) -> Result<Vec<Frame>, InputError> {
    let mut trace = ContainerTrace::new(records, Orientation::Horizontal, config)?;
    trace.emit(
        StatusOverrides::new(),
        &markers(&trace),
        Step::new(ActionTag::Init, "Peek at the front element"),
    );

    let Some(front) = trace.items.first().cloned() else {
        trace.emit(
            StatusOverrides::new(),
            &markers(&trace),
            Step::new(ActionTag::Underflow, "Cannot peek: the queue is empty")
                .var("error", "queue underflow"),
        );
        return Ok(trace.finish());
    };

    trace.emit(
        overrides([(front.id.clone(), Status::Target)]),
        &markers(&trace),
        Step::new(ActionTag::Prepare, "Read queue[front]"),
    );
    trace.emit(
        overrides([(front.id, Status::Complete)]),
        &markers(&trace),
        Step::new(
            ActionTag::Complete,
            format!("The front element is {}", value_text(front.value)),
        )
        .var("returned", front.value),
    );
    Ok(trace.finish())
}

fn value_text(value: Option<f64>) -> String {
    value.map_or_else(|| "empty".to_string(), format_number)
}
