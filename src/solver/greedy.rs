use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::MacroVector;
use crate::solver::engine::{Candidate, Incumbent};

/// Seed the branch-and-bound incumbent with a randomized greedy build.
///
/// Round zero is pure greedy (always the best improving move); later rounds
/// pick among the top few improving moves at random, and every build gets a
/// multiplier-refinement pass. The best result across rounds wins. A good
/// incumbent up front is what makes the box bound prune.
pub(crate) fn seed_incumbent(
    cands: &[Candidate],
    mults: &[f64],
    goal: MacroVector,
    weights: MacroVector,
    max_items: usize,
    restarts: usize,
    seed: u64,
) -> Incumbent {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut best = build(cands, mults, goal, weights, max_items, &mut rng, 1);
    refine(&mut best, cands, mults, goal, weights);

    for _ in 1..restarts {
        if best.objective == 0.0 {
            break;
        }
        let mut candidate = build(cands, mults, goal, weights, max_items, &mut rng, 3);
        refine(&mut candidate, cands, mults, goal, weights);
        if candidate.objective < best.objective {
            best = candidate;
        }
    }

    best
}

fn objective_of(total: MacroVector, goal: MacroVector, weights: MacroVector) -> f64 {
    total.weighted_sq_dist(&goal, &weights)
}

/// Greedy construction: start from the pinned items, then repeatedly take
/// an objective-improving (item, multiplier) move until nothing improves or
/// the cardinality cap is hit. `width` > 1 randomizes among the best moves.
fn build(
    cands: &[Candidate],
    mults: &[f64],
    goal: MacroVector,
    weights: MacroVector,
    max_items: usize,
    rng: &mut StdRng,
    width: usize,
) -> Incumbent {
    let mut choices: Vec<Option<usize>> = vec![None; cands.len()];
    let mut total = MacroVector::ZERO;
    let mut used = 0;

    // Pinned items always go in, each at its best multiplier so far.
    for (ci, cand) in cands.iter().enumerate() {
        if !cand.pinned {
            continue;
        }
        let mut best_k = 0;
        let mut best_obj = f64::INFINITY;
        for (k, mult) in mults.iter().enumerate() {
            let obj = objective_of(total + cand.macros * *mult, goal, weights);
            if obj < best_obj {
                best_obj = obj;
                best_k = k;
            }
        }
        choices[ci] = Some(best_k);
        total += cand.macros * mults[best_k];
        used += 1;
    }

    while used < max_items {
        let current = objective_of(total, goal, weights);

        let mut moves: Vec<(usize, usize, f64)> = Vec::new();
        for (ci, cand) in cands.iter().enumerate() {
            if choices[ci].is_some() {
                continue;
            }
            for (k, mult) in mults.iter().enumerate() {
                let obj = objective_of(total + cand.macros * *mult, goal, weights);
                if obj < current {
                    moves.push((ci, k, obj));
                }
            }
        }
        if moves.is_empty() {
            break;
        }

        moves.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal));
        let pick = if width <= 1 {
            0
        } else {
            rng.gen_range(0..moves.len().min(width))
        };
        let (ci, k, _) = moves[pick];
        choices[ci] = Some(k);
        total += cands[ci].macros * mults[k];
        used += 1;
    }

    Incumbent {
        objective: objective_of(total, goal, weights),
        choices,
    }
}

/// Local refinement: for each selected item try every other multiplier, and
/// dropping it entirely when not pinned. Repeats until a pass changes
/// nothing, with a small pass cap.
fn refine(
    inc: &mut Incumbent,
    cands: &[Candidate],
    mults: &[f64],
    goal: MacroVector,
    weights: MacroVector,
) {
    let mut total = MacroVector::ZERO;
    for (ci, choice) in inc.choices.iter().enumerate() {
        if let Some(k) = choice {
            total += cands[ci].macros * mults[*k];
        }
    }

    for _ in 0..4 {
        let mut changed = false;

        for ci in 0..cands.len() {
            let Some(k) = inc.choices[ci] else { continue };
            let without = total - cands[ci].macros * mults[k];

            let mut best_choice = Some(k);
            let mut best_obj = objective_of(total, goal, weights);

            if !cands[ci].pinned {
                let obj = objective_of(without, goal, weights);
                if obj < best_obj {
                    best_obj = obj;
                    best_choice = None;
                }
            }
            for (alt, mult) in mults.iter().enumerate() {
                if alt == k {
                    continue;
                }
                let obj = objective_of(without + cands[ci].macros * *mult, goal, weights);
                if obj < best_obj {
                    best_obj = obj;
                    best_choice = Some(alt);
                }
            }

            if best_choice != Some(k) {
                inc.choices[ci] = best_choice;
                total = match best_choice {
                    Some(alt) => without + cands[ci].macros * mults[alt],
                    None => without,
                };
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    inc.objective = objective_of(total, goal, weights);
}
