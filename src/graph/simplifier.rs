use std::collections::HashSet;

use crate::solution::Solution;

/// What a simplification pass changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimplifyOutcome {
    /// Number of raw dependency entries removed
    pub removed: usize,
    /// Whether any reachability search ran into a cycle
    pub cycle_encountered: bool,
}

/// Removes dependencies that are implied by a longer path
///
/// Given `A -> B`, `B -> C` and `A -> C`, the edge `A -> C` is dropped since
/// `A` still reaches `C` through `B`. Works on the raw dependency identifiers
/// in place; the solution must be resolved again afterwards.
#[derive(Debug, Default)]
pub struct GraphSimplifier;

struct Search<'a> {
    solution: &'a Solution,
    owner: usize,
    candidate: &'a str,
    visited: HashSet<&'a str>,
    on_path: HashSet<&'a str>,
    cycle_encountered: bool,
}

impl GraphSimplifier {
    pub fn new() -> Self {
        Self
    }

    pub fn simplify(&self, solution: &mut Solution) -> SimplifyOutcome {
        let mut outcome = SimplifyOutcome::default();

        for owner in 0..solution.projects().len() {
            let mut i = 0;
            while i < solution.projects()[owner].raw_dependencies().len() {
                let candidate = solution.projects()[owner].raw_dependencies()[i].clone();

                if self.is_implied(solution, owner, &candidate, &mut outcome) {
                    let mut deps = solution.projects()[owner].raw_dependencies().to_vec();
                    deps.remove(i);
                    solution.projects_mut()[owner].set_raw_dependencies(deps);
                    outcome.removed += 1;
                } else {
                    i += 1;
                }
            }
        }

        outcome
    }

    /// True when `candidate` is reachable from another dependency of `owner`
    /// without using the `owner -> candidate` edge itself.
    fn is_implied(
        &self,
        solution: &Solution,
        owner: usize,
        candidate: &str,
        outcome: &mut SimplifyOutcome,
    ) -> bool {
        let mut search = Search {
            solution,
            owner,
            candidate,
            visited: HashSet::new(),
            on_path: HashSet::new(),
            cycle_encountered: false,
        };

        let implied = solution.projects()[owner]
            .raw_dependencies()
            .iter()
            .filter(|dep| dep.as_str() != candidate)
            .any(|start| search.reaches(start));

        outcome.cycle_encountered |= search.cycle_encountered;
        implied
    }
}

impl<'a> Search<'a> {
    fn reaches(&mut self, from: &'a str) -> bool {
        if from == self.candidate {
            return true;
        }
        if self.on_path.contains(from) {
            self.cycle_encountered = true;
            return false;
        }
        if !self.visited.insert(from) {
            return false;
        }
        // Identifiers outside the solution lead nowhere
        let Some(position) = self.solution.position(from) else {
            return false;
        };

        self.on_path.insert(from);
        let (solution, owner, candidate) = (self.solution, self.owner, self.candidate);
        let found = solution.projects()[position]
            .raw_dependencies()
            .iter()
            .filter(|dep| position != owner || dep.as_str() != candidate)
            .any(|dep| self.reaches(dep));
        self.on_path.remove(from);

        found
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solution::Project;

    fn solution_of(edges: &[(&str, &[&str])]) -> Solution {
        let mut solution = Solution::new("test");
        for (name, deps) in edges {
            let mut project = Project::new(*name, *name, name);
            for dep in *deps {
                project.add_raw_dependency(dep);
            }
            solution.add_project(project);
        }
        solution
    }

    fn raw(solution: &Solution, id: &str) -> Vec<String> {
        solution.get(id).unwrap().raw_dependencies().to_vec()
    }

    fn edge_set(solution: &Solution) -> BTreeSet<(String, String)> {
        solution
            .projects()
            .iter()
            .flat_map(|p| {
                p.raw_dependencies()
                    .iter()
                    .map(move |d| (p.key(), d.clone()))
            })
            .collect()
    }

    fn reachable(solution: &Solution, from: &str) -> BTreeSet<String> {
        let mut seen = BTreeSet::new();
        let mut stack = vec![from.to_string()];
        while let Some(id) = stack.pop() {
            if let Some(project) = solution.get(&id) {
                for dep in project.raw_dependencies() {
                    if seen.insert(dep.clone()) {
                        stack.push(dep.clone());
                    }
                }
            }
        }
        seen
    }

    #[test]
    fn test_removes_transitive_edge() {
        let mut solution = solution_of(&[("a", &["b", "c"]), ("b", &["c"]), ("c", &[])]);
        let outcome = GraphSimplifier::new().simplify(&mut solution);

        assert_eq!(raw(&solution, "a"), vec!["b"]);
        assert_eq!(raw(&solution, "b"), vec!["c"]);
        assert_eq!(outcome.removed, 1);
        assert!(!outcome.cycle_encountered);
    }

    #[test]
    fn test_removes_long_transitive_edges() {
        let mut solution = solution_of(&[
            ("a", &["d", "b", "c"]),
            ("b", &["c"]),
            ("c", &["d"]),
            ("d", &[]),
        ]);
        GraphSimplifier::new().simplify(&mut solution);
        assert_eq!(raw(&solution, "a"), vec!["b"]);
        assert_eq!(raw(&solution, "b"), vec!["c"]);
        assert_eq!(raw(&solution, "c"), vec!["d"]);
    }

    #[test]
    fn test_unknown_identifiers_are_tolerated() {
        let mut solution = solution_of(&[("a", &["ghost", "b"]), ("b", &["phantom"])]);
        let outcome = GraphSimplifier::new().simplify(&mut solution);
        assert_eq!(raw(&solution, "a"), vec!["ghost", "b"]);
        assert_eq!(outcome.removed, 0);
    }

    #[test]
    fn test_cycle_terminates_and_keeps_reachability() {
        let mut solution = solution_of(&[("a", &["b", "c"]), ("b", &["a", "c"]), ("c", &[])]);
        let before: HashMap<&str, BTreeSet<String>> = ["a", "b", "c"]
            .into_iter()
            .map(|id| (id, reachable(&solution, id)))
            .collect();

        let outcome = GraphSimplifier::new().simplify(&mut solution);

        assert!(outcome.cycle_encountered);
        for id in ["a", "b", "c"] {
            assert_eq!(reachable(&solution, id), before[id], "reachability of {id}");
        }
    }

    #[test]
    fn test_mutual_siblings_keep_one_edge() {
        // b and c reach each other, so only one of a's edges may go
        let mut solution = solution_of(&[("a", &["b", "c"]), ("b", &["c"]), ("c", &["b"])]);
        GraphSimplifier::new().simplify(&mut solution);
        assert_eq!(raw(&solution, "a").len(), 1);
        assert!(reachable(&solution, "a").contains("b"));
        assert!(reachable(&solution, "a").contains("c"));
    }

    #[test]
    fn test_result_does_not_depend_on_project_order() {
        let edges: &[(&str, &[&str])] = &[
            ("app", &["ui", "core", "log"]),
            ("ui", &["core", "log"]),
            ("core", &["log"]),
            ("log", &[]),
            ("tool", &["core", "log"]),
        ];
        let mut forward = solution_of(edges);
        let reversed_edges: Vec<(&str, &[&str])> = edges.iter().rev().cloned().collect();
        let mut backward = solution_of(&reversed_edges);

        GraphSimplifier::new().simplify(&mut forward);
        GraphSimplifier::new().simplify(&mut backward);

        assert_eq!(edge_set(&forward), edge_set(&backward));
        assert_eq!(raw(&forward, "app"), vec!["ui"]);
        assert_eq!(raw(&forward, "tool"), vec!["core"]);
    }

    #[test]
    fn test_preserves_reachability_on_dag() {
        let mut solution = solution_of(&[
            ("a", &["b", "c", "e"]),
            ("b", &["d", "e"]),
            ("c", &["d"]),
            ("d", &["e"]),
            ("e", &[]),
        ]);
        let before: Vec<BTreeSet<String>> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|id| reachable(&solution, id))
            .collect();

        GraphSimplifier::new().simplify(&mut solution);

        let after: Vec<BTreeSet<String>> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|id| reachable(&solution, id))
            .collect();
        assert_eq!(before, after);
        assert_eq!(raw(&solution, "a"), vec!["b", "c"]);
        assert_eq!(raw(&solution, "b"), vec!["d"]);
    }
}
