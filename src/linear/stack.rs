use super::container::{ContainerTrace, Item, Marker, Orientation};
use crate::data::Record;
use crate::error::InputError;
use crate::frame::{Step, StatusOverrides, overrides};
use crate::highlight::ActionTag;
use crate::layout::LayoutConfig;
use crate::model::{Frame, Status, format_number};

fn top_marker(trace: &ContainerTrace) -> Marker {
    let top = trace.items.len().checked_sub(1);
    Marker {
        id: "top",
        label: match top {
            Some(i) => format!("top = {}", i),
            None => "top = -1".to_string(),
        },
        slot: top,
    }
}

fn new_trace<'a>(
    records: &[Record],
    extra: usize,
    config: &'a LayoutConfig,
) -> Result<ContainerTrace<'a>, InputError> {
    let capacity = records.len() + extra;
    ContainerTrace::new(records, Orientation::Vertical { capacity }, config)
}

/// Terminal error frame shared by pop and peek. Follows the `init` frame.
fn underflow(trace: &mut ContainerTrace, action: &str) {
    let marker = top_marker(trace);
    trace.emit(
        StatusOverrides::new(),
        &[marker],
        Step::new(
            ActionTag::Underflow,
            format!("Cannot {}: the stack is empty", action),
        )
        .var("error", "stack underflow"),
    );
}

pub fn push(records: &[Record], value: f64, config: &LayoutConfig) -> Result<Vec<Frame>, InputError> {
    let mut trace = new_trace(records, 1, config)?;
    let marker = top_marker(&trace);
    trace.emit(
        StatusOverrides::new(),
        &[marker],
        Step::new(ActionTag::Init, format!("Push {}", format_number(value))).var("value", value),
    );

    let id = trace.fresh_id();
    trace.items.push(Item {
        id: id.clone(),
        value: None,
    });
    let marker = top_marker(&trace);
    trace.emit(
        overrides([(id.clone(), Status::Prepare)]),
        &[marker],
        Step::new(ActionTag::Prepare, "top += 1"),
    );

    if let Some(item) = trace.items.last_mut() {
        item.value = Some(value);
    }
    let marker = top_marker(&trace);
    trace.emit(
        overrides([(id.clone(), Status::Target)]),
        &[marker],
        Step::new(
            ActionTag::SlotUpdate,
            format!("stack[top] = {}", format_number(value)),
        ),
    );

    let marker = top_marker(&trace);
    trace.emit(
        overrides([(id, Status::Complete)]),
        &[marker],
        Step::new(
            ActionTag::Complete,
            format!("Pushed {}", format_number(value)),
        ),
    );
    Ok(trace.finish())
}

pub fn pop(records: &[Record], config: &LayoutConfig) -> Result<Vec<Frame>, InputError> {
    let mut trace = new_trace(records, 0, config)?;
    let marker = top_marker(&trace);
    trace.emit(
        StatusOverrides::new(),
        &[marker],
        Step::new(ActionTag::Init, "Pop the top element"),
    );

    let Some(top) = trace.items.last().cloned() else {
        underflow(&mut trace, "pop");
        return Ok(trace.finish());
    };

    let marker = top_marker(&trace);
    trace.emit(
        overrides([(top.id.clone(), Status::Target)]),
        &[marker],
        Step::new(
            ActionTag::Prepare,
            format!("value = stack[top] = {}", value_text(top.value)),
        )
        .var("value", top.value),
    );

    trace.items.pop();
    let marker = top_marker(&trace);
    trace.emit(
        StatusOverrides::new(),
        &[marker],
        Step::new(ActionTag::SlotUpdate, "top -= 1").var("returned", top.value),
    );

    let marker = top_marker(&trace);
    trace.emit(
        StatusOverrides::new(),
        &[marker],
        Step::new(
            ActionTag::Complete,
            format!("Popped {}", value_text(top.value)),
        )
        .var("returned", top.value),
    );
    Ok(trace.finish())
}

pub fn peek(records: &[Record], config: &LayoutConfig) -> Result<Vec<Frame>, InputError> {
    let mut trace = new_trace(records, 0, config)?;
    let marker = top_marker(&trace);
    trace.emit(
        StatusOverrides::new(),
        &[marker],
        Step::new(ActionTag::Init, "Peek at the top element"),
    );

    let Some(top) = trace.items.last().cloned() else {
        underflow(&mut trace, "peek");
        return Ok(trace.finish());
    };

    let marker = top_marker(&trace);
    trace.emit(
        overrides([(top.id.clone(), Status::Target)]),
        &[marker],
        Step::new(ActionTag::Prepare, "Read stack[top]"),
    );
    let marker = top_marker(&trace);
    trace.emit(
        overrides([(top.id, Status::Complete)]),
        &[marker],
        Step::new(
            ActionTag::Complete,
            format!("The top element is {}", value_text(top.value)),
        )
        .var("returned", top.value),
    );
    Ok(trace.finish())
}

fn value_text(value: Option<f64>) -> String {
    value.map_or_else(|| "empty".to_string(), format_number)
}
