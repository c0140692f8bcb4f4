//! Topological ordering of report sections.
//!
//! Kahn's algorithm with a deterministic lexicographic tie-break. Edges to
//! unknown section ids are ignored, and sections caught in a dependency
//! cycle are appended at the end in their original relative order rather
//! than dropped or treated as an error.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use super::model::Section;

/// Compute a topological order over `sections`, returned as a permutation
/// of indices into the input slice.
///
/// Identical inputs (as a multiset of id/dependency pairs) always produce
/// the same order regardless of input arrangement; ties between ready
/// sections break lexicographically by id. The operation is idempotent.
pub fn topo_order(sections: &[Section]) -> Vec<usize> {
    // First occurrence wins when ids are duplicated.
    let mut index_of: HashMap<&str, usize> = HashMap::new();
    for (i, section) in sections.iter().enumerate() {
        index_of.entry(section.id.as_str()).or_insert(i);
    }

    let mut indegree = vec![0usize; sections.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); sections.len()];
    for (i, section) in sections.iter().enumerate() {
        for dep in &section.depends_on {
            match index_of.get(dep.as_str()) {
                Some(&j) => {
                    // A self-dependency is a one-node cycle: the in-degree
                    // never clears and the section falls through to the
                    // cycle remainder below.
                    indegree[i] += 1;
                    dependents[j].push(i);
                }
                None => {
                    debug!(section = %section.id, dependency = %dep, "ignoring edge to unknown section");
                }
            }
        }
    }

    let mut ready: BTreeSet<(&str, usize)> = sections
        .iter()
        .enumerate()
        .filter(|&(i, _)| indegree[i] == 0)
        .map(|(i, s)| (s.id.as_str(), i))
        .collect();

    let mut order = Vec::with_capacity(sections.len());
    let mut placed = vec![false; sections.len()];
    while let Some((_, i)) = ready.pop_first() {
        order.push(i);
        placed[i] = true;
        for &d in &dependents[i] {
            if d == i {
                continue;
            }
            indegree[d] -= 1;
            if indegree[d] == 0 {
                ready.insert((sections[d].id.as_str(), d));
            }
        }
    }

    // Cycle members keep their original relative order.
    if order.len() < sections.len() {
        warn!(
            stuck = sections.len() - order.len(),
            "dependency cycle detected; cyclic sections keep input order"
        );
        for (i, was_placed) in placed.iter().enumerate() {
            if !was_placed {
                order.push(i);
            }
        }
    }

    order
}

/// Return `sections` permuted into topological order.
pub fn sort_sections(mut sections: Vec<Section>) -> Vec<Section> {
    let order = topo_order(&sections);
    let mut slots: Vec<Option<Section>> = sections.drain(..).map(Some).collect();
    order.into_iter().filter_map(|i| slots[i].take()).collect()
}
