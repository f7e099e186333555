use crate::frame::{FrameSink, Layout, LinkTracker, Step, StatusOverrides, list_text};
use crate::highlight::ActionTag;
use crate::layout::LayoutConfig;
use crate::model::{Element, Frame, LinkStatus, Status, format_number};
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

/// Anything BFS and DFS can walk and draw.
pub trait SearchSpace {
    /// Neighbors of `id` in visiting order. Blocked cells are never listed.
    fn neighbors(&self, id: &str) -> Vec<String>;

    fn directed(&self) -> bool;

    /// Positioned elements for one frame. `distances` holds the distance
    /// (BFS) or depth (DFS) of every node discovered so far.
    fn elements(&self, distances: &AHashMap<String, f64>, config: &LayoutConfig) -> Vec<Element>;
}

struct SpaceView<'a, S: ?Sized> {
    space: &'a S,
    distances: &'a AHashMap<String, f64>,
}

impl<S: SearchSpace + ?Sized> Layout for SpaceView<'_, S> {
    fn layout(&self, config: &LayoutConfig) -> Vec<Element> {
        self.space.elements(self.distances, config)
    }
}

/// Search bookkeeping plus frame collection.
struct SearchTrace<'a, S: ?Sized> {
    space: &'a S,
    end: String,
    distances: AHashMap<String, f64>,
    parent: AHashMap<String, String>,
    seen: AHashSet<String>,
    /// Nodes whose neighbors have been handled, in processing order.
    processed: Vec<String>,
    /// Queue or stack contents, front first.
    pending: Vec<String>,
    current: Vec<String>,
    path: Vec<String>,
    sink: FrameSink<'a>,
    links: LinkTracker,
}

impl<'a, S: SearchSpace + ?Sized> SearchTrace<'a, S> {
    fn new(space: &'a S, end: &str, config: &'a LayoutConfig) -> Self {
        Self {
            space,
            end: end.to_string(),
            distances: AHashMap::new(),
            parent: AHashMap::new(),
            seen: AHashSet::new(),
            processed: Vec::new(),
            pending: Vec::new(),
            current: Vec::new(),
            path: Vec::new(),
            sink: FrameSink::new(config),
            links: LinkTracker::new(),
        }
    }

    fn statuses(&self) -> StatusOverrides {
        let mut statuses = StatusOverrides::new();
        for id in &self.processed {
            statuses.insert(id.clone(), Status::visited());
        }
        for id in &self.pending {
            statuses.insert(id.clone(), Status::Prepare);
        }
        for id in &self.current {
            statuses.insert(id.clone(), Status::Target);
        }
        for id in &self.path {
            statuses.insert(id.clone(), Status::Complete);
        }
        statuses
    }

    fn emit(&mut self, pending_name: &str, step: Step) {
        let statuses = self.statuses();
        let step = step
            .var(pending_name, list_text(&self.pending))
            .var("visited", self.processed.len());
        let view = SpaceView {
            space: self.space,
            distances: &self.distances,
        };
        self.sink.emit(&view, &statuses, &self.links, step);
    }

    fn discover(&mut self, id: &str, from: Option<&str>, distance: f64) {
        self.seen.insert(id.to_string());
        self.distances.insert(id.to_string(), distance);
        if let Some(from) = from {
            self.parent.insert(id.to_string(), from.to_string());
        }
    }

    fn distance(&self, id: &str) -> f64 {
        self.distances.get(id).copied().unwrap_or_default()
    }

    fn link(&mut self, u: &str, v: &str, status: LinkStatus) {
        let directed = self.space.directed();
        self.links.set(u, v, status, directed);
    }

    /// Follows `parent` back from the end node and emits `path_found`.
    fn path_found(&mut self, pending_name: &str, measure: &str) {
        let mut path = vec![self.end.clone()];
        while let Some(prev) = path.last().and_then(|id| self.parent.get(id)) {
            if path.contains(prev) {
                break;
            }
            path.push(prev.clone());
        }
        path.reverse();
        for pair in path.windows(2) {
            self.link(&pair[0], &pair[1], LinkStatus::Complete);
        }
        let distance = self.distance(&self.end);
        self.current.clear();
        self.path = path;
        let route = self.path.join(" -> ");
        self.emit(
            pending_name,
            Step::new(
                ActionTag::PathFound,
                format!("Reached {}: {}", self.end, route),
            )
            .var("found", true)
            .var(measure, distance)
            .var("path", route),
        );
    }

    fn not_found(&mut self, pending_name: &str) {
        self.current.clear();
        let end = self.end.clone();
        self.emit(
            pending_name,
            Step::new(ActionTag::NotFound, format!("{} cannot be reached", end)).var("found", false),
        );
    }

    fn finish(self) -> Vec<Frame> {
        self.sink.finish()
    }
}

/// Breadth-first search that dequeues one node per step.
pub fn bfs<S: SearchSpace + ?Sized>(space: &S, start: &str, end: &str, config: &LayoutConfig) -> Vec<Frame> {
    let mut trace = SearchTrace::new(space, end, config);
    let mut queue = VecDeque::from([start.to_string()]);
    trace.discover(start, None, 0.0);
    trace.pending = queue.iter().cloned().collect();
    trace.emit(
        "queue",
        Step::new(ActionTag::Init, format!("queue = [{}], dist[{}] = 0", start, start)),
    );

    while let Some(u) = queue.pop_front() {
        trace.pending = queue.iter().cloned().collect();
        trace.current = vec![u.clone()];
        let du = trace.distance(&u);
        trace.emit(
            "queue",
            Step::new(ActionTag::Dequeue, format!("u = {}", u))
                .var("u", u.as_str())
                .var("distance", du),
        );

        if u == end {
            trace.path_found("queue", "distance");
            return trace.finish();
        }
        trace.emit(
            "queue",
            Step::new(ActionTag::CheckEnd, format!("{} is not the end node", u)),
        );

        let neighbors = space.neighbors(&u);
        if !neighbors.is_empty() {
            for v in neighbors.iter().filter(|v| !trace.seen.contains(*v)) {
                trace.links.set(&u, v, LinkStatus::Path, space.directed());
            }
            trace.emit(
                "queue",
                Step::new(
                    ActionTag::Explore,
                    format!("Neighbors of {}: {}", u, list_text(&neighbors)),
                ),
            );
        }

        let mut discovered = Vec::new();
        for v in &neighbors {
            if trace.seen.contains(v) {
                continue;
            }
            trace.discover(v, Some(u.as_str()), du + 1.0);
            trace.link(&u, v, LinkStatus::Visited);
            queue.push_back(v.clone());
            discovered.push(v.clone());
        }
        trace.processed.push(u.clone());
        if !discovered.is_empty() {
            trace.pending = queue.iter().cloned().collect();
            trace.emit(
                "queue",
                Step::new(
                    ActionTag::VisitNeighbors,
                    format!(
                        "Visit {} at distance {}",
                        list_text(&discovered),
                        format_number(du + 1.0)
                    ),
                ),
            );
        }
    }

    trace.pending.clear();
    trace.not_found("queue");
    trace.finish()
}

/// Breadth-first search that expands a whole frontier layer per step.
pub fn layered_bfs<S: SearchSpace + ?Sized>(space: &S, start: &str, end: &str, config: &LayoutConfig) -> Vec<Frame> {
    let mut trace = SearchTrace::new(space, end, config);
    trace.discover(start, None, 0.0);
    let mut frontier = vec![start.to_string()];
    trace.pending = frontier.clone();
    trace.emit(
        "frontier",
        Step::new(ActionTag::Init, format!("frontier = [{}], dist[{}] = 0", start, start)),
    );

    let mut depth = 0.0;
    while !frontier.is_empty() {
        let layer = std::mem::take(&mut frontier);
        trace.pending.clear();
        trace.current = layer.clone();
        trace.emit(
            "frontier",
            Step::new(
                ActionTag::ExpandLayer,
                format!("Expand {} cell(s) at distance {}", layer.len(), format_number(depth)),
            )
            .var("layer", list_text(&layer))
            .var("distance", depth),
        );

        if layer.iter().any(|cell| cell == end) {
            trace.path_found("frontier", "distance");
            return trace.finish();
        }
        trace.emit(
            "frontier",
            Step::new(ActionTag::CheckEnd, format!("{} is not in this layer", end)),
        );

        for cell in &layer {
            for next in space.neighbors(cell) {
                if trace.seen.contains(&next) {
                    continue;
                }
                trace.discover(&next, Some(cell.as_str()), depth + 1.0);
                frontier.push(next);
            }
        }
        trace.processed.extend(layer);
        trace.current.clear();
        trace.pending = frontier.clone();
        depth += 1.0;
        trace.emit(
            "frontier",
            Step::new(
                ActionTag::VisitNeighbors,
                format!("{} new cell(s) at distance {}", frontier.len(), format_number(depth)),
            ),
        );
    }

    trace.not_found("frontier");
    trace.finish()
}

/// Stack-based depth-first search. Depth is assigned when a node is popped,
/// and neighbors are pushed in reverse so they pop in visiting order.
pub fn dfs<S: SearchSpace + ?Sized>(space: &S, start: &str, end: &str, config: &LayoutConfig) -> Vec<Frame> {
    let mut trace = SearchTrace::new(space, end, config);
    let mut stack: Vec<(String, Option<String>)> = vec![(start.to_string(), None)];
    trace.pending = vec![start.to_string()];
    trace.emit(
        "stack",
        Step::new(ActionTag::Init, format!("stack = [{}]", start)),
    );

    while let Some((u, from)) = stack.pop() {
        if trace.seen.contains(&u) {
            log::trace!("DFS skips '{}': already visited", u);
            continue;
        }
        let depth = from.as_deref().map_or(0.0, |f| trace.distance(f) + 1.0);
        trace.discover(&u, from.as_deref(), depth);
        if let Some(from) = &from {
            trace.link(from, &u, LinkStatus::Visited);
        }
        trace.pending = stack.iter().rev().map(|(id, _)| id.clone()).collect();
        trace.current = vec![u.clone()];
        trace.emit(
            "stack",
            Step::new(ActionTag::Pop, format!("Pop {} at depth {}", u, format_number(depth)))
                .var("u", u.as_str())
                .var("depth", depth),
        );

        if u == end {
            trace.path_found("stack", "depth");
            return trace.finish();
        }
        trace.emit(
            "stack",
            Step::new(ActionTag::CheckEnd, format!("{} is not the end node", u)),
        );

        let fresh: Vec<String> = space
            .neighbors(&u)
            .into_iter()
            .filter(|v| !trace.seen.contains(v))
            .collect();
        for v in fresh.iter().rev() {
            stack.push((v.clone(), Some(u.clone())));
        }
        trace.processed.push(u.clone());
        trace.current.clear();
        trace.pending = stack.iter().rev().map(|(id, _)| id.clone()).collect();
        let description = if fresh.is_empty() {
            format!("{} has no unvisited neighbors", u)
        } else {
            format!("Push {}", list_text(fresh.iter().rev()))
        };
        trace.emit("stack", Step::new(ActionTag::PushNeighbors, description));
    }

    trace.pending.clear();
    trace.not_found("stack");
    trace.finish()
}
