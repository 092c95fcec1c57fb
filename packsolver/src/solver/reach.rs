const UNREACHABLE: u32 = u32::MAX;

/// For every amount in `0..len`: the minimal number of packs adding up to exactly that amount,
/// and the size of one pack of such a minimal decomposition.
///
/// Sizes are tried from the largest to the smallest and only a strictly better count replaces the
/// current entry, so among minimal decompositions the one with the largest leading pack is kept.
/// Following `last_pack` from any amount down to zero therefore yields the minimal decomposition
/// holding the most packs of the largest size, then of the next largest size, and so on.
///
/// `len` is at most `u32::MAX`.
pub struct ReachTable<'a> {
    sizes: &'a [u64],
    n_packs: Vec<u32>,
    last_pack: Vec<u32>,
}

impl<'a> ReachTable<'a> {
    /// Builds the table for `sizes` (ascending, no duplicates) over the amounts `0..len`.
    pub fn build(sizes: &'a [u64], len: usize) -> Self {
        let mut n_packs = vec![UNREACHABLE; len];
        let mut last_pack = vec![0; len];
        if let Some(zero) = n_packs.first_mut() {
            *zero = 0;
        }

        for amount in 1..len {
            for (idx, &size) in sizes.iter().enumerate().rev() {
                let size = size as usize;
                if size > amount {
                    continue;
                }
                let prev = n_packs[amount - size];
                if prev != UNREACHABLE && prev + 1 < n_packs[amount] {
                    n_packs[amount] = prev + 1;
                    last_pack[amount] = idx as u32;
                }
            }
        }

        ReachTable {
            sizes,
            n_packs,
            last_pack,
        }
    }

    pub fn len(&self) -> usize {
        self.n_packs.len()
    }

    /// Minimal number of packs summing to exactly `amount`, `None` if no combination of packs does.
    pub fn n_packs(&self, amount: usize) -> Option<u32> {
        match self.n_packs.get(amount) {
            Some(&n) if n != UNREACHABLE => Some(n),
            _ => None,
        }
    }

    /// Smallest exactly reachable amount in `from..self.len()`.
    pub fn first_reachable(&self, from: usize) -> Option<usize> {
        (from..self.len()).find(|&amount| self.n_packs(amount).is_some())
    }

    /// Size indices of the packs of the preferred minimal decomposition of `amount`, largest first.
    /// Empty if `amount` is zero or unreachable.
    pub fn decompose(&self, amount: usize) -> impl Iterator<Item = usize> + '_ {
        let mut rest = match self.n_packs(amount) {
            Some(_) => amount,
            None => 0,
        };
        std::iter::from_fn(move || {
            if rest == 0 {
                return None;
            }
            let idx = self.last_pack[rest] as usize;
            rest -= self.sizes[idx] as usize;
            Some(idx)
        })
    }
}
