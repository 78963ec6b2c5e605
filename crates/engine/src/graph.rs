//! Dependency graph construction and cycle detection.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use taskrank_core::{Task, TaskId};

/// Cycles found in a task batch.
///
/// Each cycle is the id sequence of a closed dependency loop, rotated so
/// the smallest id comes first and reported exactly once. A task that
/// depends on itself appears as a one-element cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CycleReport {
    cycles: Vec<Vec<TaskId>>,
}

impl CycleReport {
    /// True if no cycles were found.
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Number of distinct cycles.
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    /// The cycles, in the order detection found them.
    pub fn cycles(&self) -> &[Vec<TaskId>] {
        &self.cycles
    }
}

/// Node state during depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not yet visited
    White,
    /// On the current traversal path
    Gray,
    /// Fully explored
    Black,
}

/// The dependency graph of one task batch.
///
/// Built once per analysis call and never mutated afterwards. Edges only
/// connect ids present in the batch; dependencies referencing outside ids
/// still count as declared (and therefore unmet) but are not traversed.
pub struct DependencyGraph {
    /// task -> in-batch dependencies
    edges: HashMap<TaskId, Vec<TaskId>>,
    /// task -> in-batch dependents (tasks it blocks)
    dependents: HashMap<TaskId, Vec<TaskId>>,
    /// task -> number of declared dependencies, including outside ids
    declared: HashMap<TaskId, usize>,
    /// batch ids in ascending order, for reproducible traversal
    order: Vec<TaskId>,
}

impl DependencyGraph {
    /// Build the graph from a batch's dependency lists.
    pub fn build(tasks: &[Task]) -> Self {
        let ids: HashSet<TaskId> = tasks.iter().map(|t| t.id).collect();

        let mut edges: HashMap<TaskId, Vec<TaskId>> = HashMap::new();
        let mut dependents: HashMap<TaskId, Vec<TaskId>> = HashMap::new();
        let mut declared: HashMap<TaskId, usize> = HashMap::new();

        for task in tasks {
            declared.insert(task.id, task.dependencies.len());

            let in_batch: Vec<TaskId> = task
                .dependencies
                .iter()
                .copied()
                .filter(|dep| ids.contains(dep))
                .collect();

            // Blocking is counted per task, so a dependency listed twice
            // registers one dependent. A self-dependency forms a cycle but
            // blocks no other task.
            let mut counted = HashSet::new();
            for dep in &in_batch {
                if *dep != task.id && counted.insert(*dep) {
                    dependents.entry(*dep).or_default().push(task.id);
                }
            }

            edges.insert(task.id, in_batch);
        }

        let mut order: Vec<TaskId> = tasks.iter().map(|t| t.id).collect();
        order.sort_unstable();

        Self {
            edges,
            dependents,
            declared,
            order,
        }
    }

    /// Number of other batch tasks whose dependency list contains `id`.
    pub fn blocks_count(&self, id: TaskId) -> usize {
        self.dependents.get(&id).map_or(0, |deps| deps.len())
    }

    /// Number of dependencies the task declares, including ids outside
    /// the batch.
    pub fn declared_dependencies(&self, id: TaskId) -> usize {
        self.declared.get(&id).copied().unwrap_or(0)
    }

    /// True if the task declares any dependency. With no completion state
    /// in a batch, every declared dependency counts as outstanding.
    pub fn has_unmet_dependency(&self, id: TaskId) -> bool {
        self.declared_dependencies(id) > 0
    }

    /// Find all dependency cycles using a three-color depth-first search.
    pub fn detect_cycles(&self) -> CycleReport {
        let mut color: HashMap<TaskId, Color> =
            self.order.iter().map(|id| (*id, Color::White)).collect();
        let mut path = Vec::new();
        let mut seen: HashSet<Vec<TaskId>> = HashSet::new();
        let mut cycles = Vec::new();

        for &id in &self.order {
            if color[&id] == Color::White {
                self.visit(id, &mut color, &mut path, &mut seen, &mut cycles);
            }
        }

        CycleReport { cycles }
    }

    fn visit(
        &self,
        node: TaskId,
        color: &mut HashMap<TaskId, Color>,
        path: &mut Vec<TaskId>,
        seen: &mut HashSet<Vec<TaskId>>,
        cycles: &mut Vec<Vec<TaskId>>,
    ) {
        color.insert(node, Color::Gray);
        path.push(node);

        for &dep in self.edges.get(&node).into_iter().flatten() {
            match color.get(&dep) {
                Some(Color::White) => self.visit(dep, color, path, seen, cycles),
                Some(Color::Gray) => {
                    // Back-edge: the cycle is the path segment from the
                    // gray node to the current node.
                    if let Some(start) = path.iter().position(|&p| p == dep) {
                        let cycle = canonicalize(&path[start..]);
                        if seen.insert(cycle.clone()) {
                            cycles.push(cycle);
                        }
                    }
                }
                _ => {}
            }
        }

        path.pop();
        color.insert(node, Color::Black);
    }
}

/// Rotate a cycle so its smallest id comes first, deduplicating cycles
/// that differ only by starting node.
fn canonicalize(cycle: &[TaskId]) -> Vec<TaskId> {
    let min_pos = cycle
        .iter()
        .enumerate()
        .min_by_key(|(_, id)| **id)
        .map(|(pos, _)| pos)
        .unwrap_or(0);

    let mut rotated = Vec::with_capacity(cycle.len());
    rotated.extend_from_slice(&cycle[min_pos..]);
    rotated.extend_from_slice(&cycle[..min_pos]);
    rotated
}
