use std::time::Instant;

use crate::error::{Result, SolverError};
use crate::models::{MacroVector, MenuItem};
use crate::solver::config::SolverConfig;
use crate::solver::greedy;

/// An eligible catalog item, ready for the search.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    /// Position in the caller's catalog.
    pub menu_index: usize,
    pub macros: MacroVector,
    /// Pinned items must be selected at some multiplier.
    pub pinned: bool,
}

/// Best feasible assignment found so far. `choices[i]` is the multiplier
/// index chosen for candidate `i`, or `None` when unselected.
#[derive(Debug, Clone)]
pub(crate) struct Incumbent {
    pub choices: Vec<Option<usize>>,
    pub objective: f64,
}

/// One selected item: catalog position plus the chosen serving multiplier.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemChoice {
    pub item_index: usize,
    pub multiplier: f64,
}

/// Everything a solve produces.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// Selected items in engine selection order.
    pub selection: Vec<ItemChoice>,

    /// Achieved totals, unrounded. Rounding happens at result assembly.
    pub totals: MacroVector,

    /// Signed per-macro deviation: totals minus target.
    pub deviation: MacroVector,

    /// Weighted squared distance between totals and target.
    pub objective: f64,

    /// True when the search exhausted the tree (or hit an exact match);
    /// false when the budget ran out and this is the best incumbent found.
    pub proven_optimal: bool,

    pub nodes_explored: u64,

    /// Names of catalog items excluded for lacking a usable macro profile.
    pub skipped: Vec<String>,
}

/// Solve the meal selection problem for one catalog and target.
///
/// Filters ineligible items, seeds an incumbent by randomized greedy
/// construction, then runs branch-and-bound over per-item multiplier
/// choices. Pure with respect to its inputs; all search state is local to
/// the call, so concurrent solves share nothing mutable.
pub fn solve(menu: &[MenuItem], goal: MacroVector, config: &SolverConfig) -> Result<SolveOutcome> {
    config.validate()?;
    if !goal.is_valid() {
        return Err(SolverError::InvalidInput(
            "target macros must be finite and non-negative".to_string(),
        ));
    }

    let mut skipped = Vec::new();
    let mut cands = Vec::new();
    for (idx, item) in menu.iter().enumerate() {
        match item.macros() {
            Some(macros) => cands.push(Candidate {
                menu_index: idx,
                macros,
                pinned: false,
            }),
            None => skipped.push(item.name.clone()),
        }
    }

    for id in &config.required {
        let menu_index = menu
            .iter()
            .position(|item| item.id == *id)
            .ok_or_else(|| SolverError::ItemNotFound(format!("required item id {id}")))?;
        let cand = cands
            .iter_mut()
            .find(|c| c.menu_index == menu_index)
            .ok_or_else(|| {
                SolverError::InvalidInput(format!(
                    "required item '{}' has no usable nutrition",
                    menu[menu_index].name
                ))
            })?;
        cand.pinned = true;
    }

    // Selecting nothing is always feasible, so an empty eligible set is a
    // trivially optimal empty meal, not an error.
    if cands.is_empty() {
        let objective = MacroVector::ZERO.weighted_sq_dist(&goal, &config.weights);
        return Ok(SolveOutcome {
            selection: Vec::new(),
            totals: MacroVector::ZERO,
            deviation: MacroVector::ZERO - goal,
            objective,
            proven_optimal: true,
            nodes_explored: 0,
            skipped,
        });
    }

    // High-impact items first so the box bound tightens early. Stable sort
    // keeps catalog order among ties, which keeps results reproducible.
    let max_mult = config.max_multiplier();
    let impact = |c: &Candidate| {
        (c.macros * max_mult).weighted_sq_dist(&MacroVector::ZERO, &config.weights)
    };
    cands.sort_by(|a, b| {
        impact(b)
            .partial_cmp(&impact(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // reach[d] bounds what items d.. can still add per macro.
    let n = cands.len();
    let mut reach = vec![MacroVector::ZERO; n + 1];
    let mut pins_after = vec![0usize; n + 1];
    for i in (0..n).rev() {
        reach[i] = reach[i + 1] + cands[i].macros * max_mult;
        pins_after[i] = pins_after[i + 1] + usize::from(cands[i].pinned);
    }

    let incumbent = greedy::seed_incumbent(
        &cands,
        &config.multipliers,
        goal,
        config.weights,
        config.max_items,
        config.restarts,
        config.seed,
    );

    let mut search = Search {
        cands: &cands,
        mults: &config.multipliers,
        goal,
        weights: config.weights,
        max_items: config.max_items,
        reach,
        pins_after,
        deadline: config.time_limit.map(|limit| Instant::now() + limit),
        max_nodes: config.max_nodes,
        nodes: 0,
        budget_hit: false,
        optimal_found: incumbent.objective == 0.0,
        best: Some(incumbent),
    };

    if !search.optimal_found {
        let mut choices = vec![None; n];
        search.dfs(0, 0, MacroVector::ZERO, &mut choices);
    }

    let best = search
        .best
        .take()
        .ok_or_else(|| SolverError::Infeasible("search produced no incumbent".to_string()))?;

    let mut selection = Vec::new();
    let mut totals = MacroVector::ZERO;
    for (ci, choice) in best.choices.iter().enumerate() {
        if let Some(k) = choice {
            let multiplier = config.multipliers[*k];
            selection.push(ItemChoice {
                item_index: cands[ci].menu_index,
                multiplier,
            });
            totals += cands[ci].macros * multiplier;
        }
    }

    let objective = totals.weighted_sq_dist(&goal, &config.weights);
    Ok(SolveOutcome {
        selection,
        totals,
        deviation: totals - goal,
        objective,
        proven_optimal: search.optimal_found || !search.budget_hit,
        nodes_explored: search.nodes,
        skipped,
    })
}

struct Search<'a> {
    cands: &'a [Candidate],
    mults: &'a [f64],
    goal: MacroVector,
    weights: MacroVector,
    max_items: usize,
    reach: Vec<MacroVector>,
    pins_after: Vec<usize>,
    deadline: Option<Instant>,
    max_nodes: u64,
    nodes: u64,
    budget_hit: bool,
    optimal_found: bool,
    best: Option<Incumbent>,
}

impl Search<'_> {
    fn budget_spent(&mut self) -> bool {
        if self.budget_hit {
            return true;
        }
        if self.nodes >= self.max_nodes {
            self.budget_hit = true;
            return true;
        }
        if let Some(deadline) = self.deadline {
            // Clock checks are comparatively expensive, so only every 1024 nodes.
            if self.nodes % 1024 == 0 && Instant::now() >= deadline {
                self.budget_hit = true;
                return true;
            }
        }
        false
    }

    /// Lower bound on the objective for any completion of this node.
    ///
    /// Totals only grow (macros are non-negative), so the reachable totals
    /// lie in the box [total, total + reach[depth]] per macro. The weighted
    /// squared distance from the target to that box is a valid relaxation;
    /// in particular any overshoot of the target is permanent and prunes.
    fn box_bound(&self, depth: usize, total: MacroVector) -> f64 {
        let lo = total.as_array();
        let hi = (total + self.reach[depth]).as_array();
        let g = self.goal.as_array();
        let w = self.weights.as_array();
        (0..4)
            .map(|i| {
                let gap = if g[i] < lo[i] {
                    lo[i] - g[i]
                } else if g[i] > hi[i] {
                    g[i] - hi[i]
                } else {
                    0.0
                };
                w[i] * gap * gap
            })
            .sum()
    }

    fn record(&mut self, choices: &[Option<usize>], objective: f64) {
        // Strict improvement only: the first incumbent wins ties, which
        // makes the result deterministic for a fixed candidate order.
        let better = self.best.as_ref().is_none_or(|b| objective < b.objective);
        if better {
            if objective == 0.0 {
                self.optimal_found = true;
            }
            self.best = Some(Incumbent {
                choices: choices.to_vec(),
                objective,
            });
        }
    }

    fn dfs(
        &mut self,
        depth: usize,
        used: usize,
        total: MacroVector,
        choices: &mut Vec<Option<usize>>,
    ) {
        if self.optimal_found || self.budget_spent() {
            return;
        }
        self.nodes += 1;

        // Remaining pinned items must still fit under the cardinality cap.
        if used + self.pins_after[depth] > self.max_items {
            return;
        }

        if let Some(best) = &self.best {
            if self.box_bound(depth, total) >= best.objective {
                return;
            }
        }

        // Leaf: all items decided, or the cap is hit and no pins remain
        // (everything from here stays unselected).
        if depth == self.cands.len() || (used == self.max_items && self.pins_after[depth] == 0) {
            let objective = total.weighted_sq_dist(&self.goal, &self.weights);
            self.record(choices, objective);
            return;
        }

        let cand = &self.cands[depth];
        let mut children: Vec<(Option<usize>, MacroVector)> =
            Vec::with_capacity(self.mults.len() + 1);
        if !cand.pinned {
            children.push((None, total));
        }
        for (k, mult) in self.mults.iter().enumerate() {
            children.push((Some(k), total + cand.macros * *mult));
        }
        // Most promising child first; stable sort keeps the skip-then-
        // ascending-multiplier order among equal bounds.
        children.sort_by(|a, b| {
            self.box_bound(depth + 1, a.1)
                .partial_cmp(&self.box_bound(depth + 1, b.1))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        for (choice, child_total) in children {
            choices[depth] = choice;
            let child_used = used + usize::from(choice.is_some());
            self.dfs(depth + 1, child_used, child_total, choices);
            if self.optimal_found || self.budget_hit {
                break;
            }
        }
        choices[depth] = None;
    }
}
