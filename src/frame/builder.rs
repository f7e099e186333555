use super::LinkTracker;
use crate::highlight::ActionTag;
use crate::layout::LayoutConfig;
use crate::model::{Element, ElementId, Frame, Link, Status, Value, Variables};
use ahash::{AHashMap, AHashSet};

/// Per-frame status overrides keyed by element id.
pub type StatusOverrides = AHashMap<ElementId, Status>;

/// Turns a structural snapshot into positioned elements with default statuses.
///
/// Implementations describe *where* things are and how nodes relate; the
/// builder takes care of statuses and links.
pub trait Layout {
    fn layout(&self, config: &LayoutConfig) -> Vec<Element>;
}

/// The textual part of a frame: what happened and which variables matter.
#[derive(Debug, Clone, Default)]
pub struct Step {
    pub description: String,
    pub tag: Option<ActionTag>,
    pub variables: Variables,
}

impl Step {
    pub fn new(tag: ActionTag, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            tag: Some(tag),
            variables: Variables::new(),
        }
    }

    pub fn var(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.variables.insert(name.to_string(), value.into());
        self
    }
}

/// Collects status overrides from `(id, status)` pairs.
pub fn overrides<I, K>(pairs: I) -> StatusOverrides
where
    I: IntoIterator<Item = (K, Status)>,
    K: Into<ElementId>,
{
    pairs.into_iter().map(|(k, s)| (k.into(), s)).collect()
}

/// Assembles one frame.
///
/// Elements come from `snapshot`; overrides replace their default status.
/// Links are recomputed from node relations and take their status from
/// `link_statuses`. A relation whose target is not part of the snapshot is
/// dropped so that every link in the frame names elements of that frame.
pub fn build_frame<S: Layout + ?Sized>(
    step_number: usize,
    snapshot: &S,
    config: &LayoutConfig,
    statuses: &StatusOverrides,
    link_statuses: &LinkTracker,
    step: Step,
) -> Frame {
    let mut elements = snapshot.layout(config);
    for element in &mut elements {
        if let Some(status) = statuses.get(&element.id) {
            element.status = status.clone();
        }
    }

    let present: AHashSet<&str> = elements.iter().map(|e| e.id.as_str()).collect();
    let mut links = Vec::new();
    for element in elements.iter().filter(|e| e.is_node()) {
        for target in element.targets() {
            if !present.contains(target.as_str()) {
                log::warn!(
                    "Dropping link '{}' -> '{}' in step {}: target is not in the frame",
                    element.id,
                    target,
                    step_number
                );
                continue;
            }
            let mut link = Link::new(&element.id, target);
            link.status = link_statuses.get(&element.id, target);
            links.push(link);
        }
    }

    Frame {
        step_number,
        description: step.description,
        elements,
        links,
        action_tag: step.tag,
        variables: step.variables,
    }
}

/// Accumulates the frames of one trace and numbers them densely.
pub struct FrameSink<'a> {
    config: &'a LayoutConfig,
    frames: Vec<Frame>,
}

impl<'a> FrameSink<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self {
            config,
            frames: Vec::new(),
        }
    }

    pub fn emit<S: Layout + ?Sized>(
        &mut self,
        snapshot: &S,
        statuses: &StatusOverrides,
        link_statuses: &LinkTracker,
        step: Step,
    ) {
        let frame = build_frame(
            self.frames.len(),
            snapshot,
            self.config,
            statuses,
            link_statuses,
            step,
        );
        self.frames.push(frame);
    }

    pub fn finish(self) -> Vec<Frame> {
        self.frames
    }
}
