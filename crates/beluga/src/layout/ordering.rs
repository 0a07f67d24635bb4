//! Bounded barycenter crossing minimization.
//!
//! Heuristic only: each pass sweeps top-to-bottom then bottom-to-top,
//! reordering one layer at a time against its already-fixed neighbor layer.
//! A vertex sorts by the mean position of its adjacent-layer neighbors and
//! keeps its current index when it has none; the sort is stable, so equal
//! barycenters preserve the existing order. Sweeping stops after a full
//! pass changes nothing or the pass cap is hit.

use super::normalize::NormalizedLayers;
use rustc_hash::FxHashMap;

/// Reorders `normalized.layers` in place. Returns the passes executed.
pub fn minimize_crossings(normalized: &mut NormalizedLayers, max_passes: usize) -> usize {
    let layer_count = normalized.layers.len();
    if layer_count < 2 {
        return 0;
    }
    let mut passes = 0;
    while passes < max_passes {
        passes += 1;
        let mut changed = false;
        for i in 1..layer_count {
            changed |= reorder(&mut normalized.layers, i, i - 1, &normalized.pred);
        }
        for i in (0..layer_count - 1).rev() {
            changed |= reorder(&mut normalized.layers, i, i + 1, &normalized.succ);
        }
        if !changed {
            break;
        }
    }
    passes
}

fn reorder(
    layers: &mut [Vec<String>],
    target: usize,
    fixed: usize,
    links: &FxHashMap<String, Vec<String>>,
) -> bool {
    let keys: Vec<f64> = {
        let fixed_pos: FxHashMap<&str, usize> = layers[fixed]
            .iter()
            .enumerate()
            .map(|(p, id)| (id.as_str(), p))
            .collect();
        layers[target]
            .iter()
            .enumerate()
            .map(|(idx, id)| {
                let neighbors = links.get(id).map(|v| v.as_slice()).unwrap_or(&[]);
                let mut sum = 0.0;
                let mut count = 0usize;
                for n in neighbors {
                    if let Some(&p) = fixed_pos.get(n.as_str()) {
                        sum += p as f64;
                        count += 1;
                    }
                }
                if count == 0 {
                    idx as f64
                } else {
                    sum / count as f64
                }
            })
            .collect()
    };

    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| keys[a].total_cmp(&keys[b]));
    if order.iter().enumerate().all(|(i, &j)| i == j) {
        return false;
    }
    let mut slots: Vec<Option<String>> = std::mem::take(&mut layers[target])
        .into_iter()
        .map(Some)
        .collect();
    layers[target] = order
        .into_iter()
        .map(|j| slots[j].take().unwrap_or_default())
        .collect();
    true
}
