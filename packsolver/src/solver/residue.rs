use num_integer::Integer;

const UNREACHED: u64 = u64::MAX;
const NO_EDGE: u32 = u32::MAX;

/// Cheapest combination of packs for every residue class modulo `modulus`.
///
/// Costs are vectors of `stride` components compared lexicographically. Every edge (one pack)
/// adds a fixed, lexicographically positive cost vector and moves `step` classes forward.
/// Edges are added one at a time: the classes linked by a step form cycles, and a single walk
/// around each cycle starting from its cheapest class settles all of them.
///
/// Memory is `modulus * stride` cost components, independent of the amounts involved.
pub struct ResidueTable {
    modulus: usize,
    stride: usize,
    steps: Vec<usize>,
    costs: Vec<u64>,
    last_edge: Vec<u32>,
}

impl ResidueTable {
    /// Builds the table from `(step, cost)` edges, each cost vector having `stride` components.
    /// Class zero is reached with an all-zero cost and no edges.
    pub fn build(modulus: usize, stride: usize, edges: &[(u64, Vec<u64>)]) -> Self {
        let mut costs = vec![UNREACHED; modulus * stride];
        costs[..stride].fill(0);

        let mut table = ResidueTable {
            modulus,
            stride,
            steps: edges
                .iter()
                .map(|(step, _)| (step % modulus as u64) as usize)
                .collect(),
            costs,
            last_edge: vec![NO_EDGE; modulus],
        };

        let mut candidate = vec![0; stride];
        for (idx, (_, edge_cost)) in edges.iter().enumerate() {
            let step = table.steps[idx];
            let n_cycles = step.gcd(&modulus);
            let cycle_len = modulus / n_cycles;

            for start in 0..n_cycles {
                let cheapest = cycle(start, step, modulus, cycle_len)
                    .filter(|&class| table.cost(class).is_some())
                    .min_by(|&a, &b| table.entry(a).cmp(table.entry(b)));
                let Some(mut class) = cheapest else {
                    continue;
                };
                for _ in 1..cycle_len {
                    let next = (class + step) % modulus;
                    for (c, (&from, &add)) in candidate
                        .iter_mut()
                        .zip(table.entry(class).iter().zip(edge_cost))
                    {
                        *c = from + add;
                    }
                    if candidate.as_slice() < table.entry(next) {
                        table.entry_mut(next).copy_from_slice(&candidate);
                        table.last_edge[next] = idx as u32;
                    }
                    class = next;
                }
            }
        }
        table
    }

    /// Cost of the cheapest combination in `class`, `None` if no combination falls in it.
    pub fn cost(&self, class: usize) -> Option<&[u64]> {
        let entry = self.entry(class);
        match entry.first() {
            Some(&UNREACHED) | None => None,
            Some(_) => Some(entry),
        }
    }

    /// Edge indices of the cheapest combination in `class`.
    /// Empty for class zero and for unreached classes.
    pub fn decompose(&self, class: usize) -> impl Iterator<Item = usize> + '_ {
        let mut class = class;
        std::iter::from_fn(move || {
            let idx = *self.last_edge.get(class)?;
            if idx == NO_EDGE {
                return None;
            }
            let idx = idx as usize;
            class = (class + self.modulus - self.steps[idx]) % self.modulus;
            Some(idx)
        })
    }

    fn entry(&self, class: usize) -> &[u64] {
        &self.costs[class * self.stride..(class + 1) * self.stride]
    }

    fn entry_mut(&mut self, class: usize) -> &mut [u64] {
        &mut self.costs[class * self.stride..(class + 1) * self.stride]
    }
}

fn cycle(start: usize, step: usize, modulus: usize, len: usize) -> impl Iterator<Item = usize> {
    std::iter::successors(Some(start), move |&class| Some((class + step) % modulus)).take(len)
}
