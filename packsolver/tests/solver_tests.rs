#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use itertools::Itertools;
    use packsolver::entities::{Catalog, Combination, PackSize};
    use packsolver::util::assertions;
    use packsolver::solver::{DEFAULT_TABLE_LIMIT, MAX_TABLE_LIMIT};
    use packsolver::{PackSolver, SolveError, solve};
    use rand::prelude::SmallRng;
    use rand::seq::IteratorRandom;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    const DEFAULT_SIZES: [PackSize; 5] = [250, 500, 1000, 2000, 5000];
    const ODD_SIZES: [PackSize; 5] = [10, 15, 20, 50, 100];

    const N_RANDOM_INSTANCES: usize = 500;
    const N_BRUTE_FORCE_INSTANCES: usize = 200;

    fn catalog(sizes: &[PackSize]) -> Catalog {
        Catalog::new(sizes.iter().copied()).unwrap()
    }

    /// Enumerates every count vector that could matter and keeps the preferred covering one.
    fn brute_force(quantity: u64, sizes: &[PackSize]) -> Combination {
        sizes
            .iter()
            .map(|&s| 0..=(quantity / s as u64 + 1))
            .multi_cartesian_product()
            .map(|counts| sizes.iter().copied().zip(counts).collect::<Combination>())
            .filter(|c| c.covers(quantity))
            .min_by(|a, b| a.preference_cmp(b))
            .unwrap()
    }

    #[test_case(&DEFAULT_SIZES, 1, &[(250, 1)]; "one item")]
    #[test_case(&DEFAULT_SIZES, 250, &[(250, 1)]; "exact fit")]
    #[test_case(&DEFAULT_SIZES, 251, &[(500, 1)]; "next size up")]
    #[test_case(&DEFAULT_SIZES, 501, &[(250, 1), (500, 1)]; "two sizes")]
    #[test_case(&DEFAULT_SIZES, 12001, &[(250, 1), (2000, 1), (5000, 2)]; "larger than largest pack")]
    #[test_case(&DEFAULT_SIZES, 9999, &[(5000, 2)]; "just below two largest")]
    #[test_case(&ODD_SIZES, 1, &[(10, 1)]; "odd sizes one item")]
    #[test_case(&ODD_SIZES, 17, &[(20, 1)]; "odd sizes single pack")]
    #[test_case(&ODD_SIZES, 23, &[(10, 1), (15, 1)]; "odd sizes mixed")]
    #[test_case(&ODD_SIZES, 40, &[(20, 2)]; "odd sizes exact")]
    #[test_case(&ODD_SIZES, 111, &[(15, 1), (100, 1)]; "odd sizes small overshoot")]
    #[test_case(&ODD_SIZES, 250, &[(50, 1), (100, 2)]; "odd sizes fewest packs")]
    #[test_case(&ODD_SIZES, 251, &[(15, 1), (20, 2), (100, 2)]; "odd sizes tie broken by larger packs")]
    #[test_case(&[3, 5], 6, &[(3, 2)]; "largest pack not always in the answer")]
    #[test_case(&[3, 5], 7, &[(3, 1), (5, 1)]; "overshoot of one")]
    #[test_case(&[23, 31, 53], 500_000, &[(23, 2), (31, 7), (53, 9429)]; "large order coprime sizes")]
    fn known_answers(sizes: &[PackSize], quantity: i64, expected: &[(PackSize, u64)]) {
        let solution = solve(quantity, &catalog(sizes)).unwrap();
        assert_eq!(solution.order.quantity(), quantity as u64);
        assert_eq!(
            solution.combination,
            expected.iter().copied().collect::<Combination>()
        );
    }

    #[test]
    fn large_order_breakdown() {
        let solution = solve(12001, &catalog(&DEFAULT_SIZES)).unwrap();
        assert_eq!(solution.shipped_amount(), 12250);
        assert_eq!(solution.pack_count(), 4);
        assert_eq!(solution.overshoot(), 249);
        assert_eq!(solution.combination.count(5000), 2);
    }

    #[test]
    fn huge_order() {
        let solution = solve(1_000_000_000_000, &catalog(&DEFAULT_SIZES)).unwrap();
        assert_eq!(
            solution.combination,
            Combination::from_counts([(5000, 200_000_000)])
        );
    }

    #[test]
    fn large_coprime_sizes() {
        let solution = solve(1_000_000_000, &catalog(&[99_991, 100_003])).unwrap();
        assert_eq!(
            solution.combination,
            Combination::from_counts([(99_991, 2500), (100_003, 7500)])
        );
        assert_eq!(solution.overshoot(), 0);
    }

    #[test]
    fn huge_packs_small_order() {
        let solution = solve(3, &catalog(&[2, 4_000_000_001])).unwrap();
        assert_eq!(solution.combination, Combination::from_counts([(2, 2)]));
    }

    #[test]
    fn table_limit_exceeded() {
        let result = solve(9_000_000_000_000_000_000, &catalog(&[2, 4_000_000_001]));
        assert_eq!(
            result,
            Err(SolveError::TableLimitExceeded {
                entries: 8_000_000_002,
                limit: DEFAULT_TABLE_LIMIT,
            })
        );

        let solver = PackSolver::new(catalog(&[23, 31, 53])).with_table_limit(100);
        assert_eq!(solver.table_limit(), 100);
        assert!(solver.solve(10).is_ok());
        assert_eq!(
            solver.solve(500_000),
            Err(SolveError::TableLimitExceeded {
                entries: 159,
                limit: 100
            })
        );

        let solver = PackSolver::new(catalog(&[23, 31, 53])).with_table_limit(u64::MAX);
        assert_eq!(solver.table_limit(), MAX_TABLE_LIMIT);
    }

    #[test_case(0; "zero")]
    #[test_case(-5; "negative")]
    #[test_case(i64::MIN; "most negative")]
    fn invalid_order(quantity: i64) {
        assert_eq!(
            solve(quantity, &catalog(&DEFAULT_SIZES)),
            Err(SolveError::InvalidOrder { quantity })
        );
    }

    #[test_case(10; "valid order")]
    #[test_case(0; "invalid order")]
    fn empty_catalog(quantity: i64) {
        assert_eq!(
            solve(quantity, &Catalog::default()),
            Err(SolveError::EmptyCatalog)
        );
    }

    #[test]
    fn single_size_catalog() {
        let catalog = catalog(&[7]);
        for quantity in 1..50 {
            let solution = solve(quantity, &catalog).unwrap();
            assert_eq!(solution.combination.n_distinct_sizes(), 1);
            assert_eq!(solution.pack_count(), (quantity as u64).div_ceil(7));
        }
    }

    #[test]
    fn solver_keeps_its_catalog() {
        let solver = PackSolver::new(catalog(&DEFAULT_SIZES));
        assert_eq!(solver.catalog().len(), 5);
        let a = solver.solve(501).unwrap();
        let b = solve(501, solver.catalog()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn matches_brute_force() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..N_BRUTE_FORCE_INSTANCES {
            let n_sizes = rng.random_range(1..=4);
            let sizes: Vec<PackSize> = (5..45).choose_multiple(&mut rng, n_sizes);
            let quantity = rng.random_range(1..=100u64);

            let catalog = catalog(&sizes);
            let solution = solve(quantity as i64, &catalog).unwrap();
            let expected = brute_force(quantity, catalog.sizes().collect_vec().as_slice());

            assert_eq!(
                solution.combination, expected,
                "order {quantity} with sizes {sizes:?}"
            );
        }
    }

    #[test]
    fn feasible_for_large_orders() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..N_RANDOM_INSTANCES {
            let n_sizes = rng.random_range(1..=5);
            let sizes: Vec<PackSize> = (1..300).choose_multiple(&mut rng, n_sizes);
            let quantity = rng.random_range(1..=10_000_000i64);

            let catalog = catalog(&sizes);
            let solution = solve(quantity, &catalog).unwrap();

            assert!(assertions::solution_is_feasible(&catalog, &solution));
            assert!(solution.combination.iter().all(|(_, count)| count > 0));
        }
    }

    #[test]
    fn no_cheaper_combination_nearby() {
        // lowering any count breaks coverage, so the overshoot cannot be reduced by dropping packs
        let catalog = catalog(&ODD_SIZES);
        for quantity in 1..=400 {
            let solution = solve(quantity, &catalog).unwrap();
            for (size, _) in solution.combination.iter() {
                let fewer = solution
                    .combination
                    .iter()
                    .map(|(s, c)| if s == size { (s, c - 1) } else { (s, c) })
                    .collect::<Combination>();
                assert!(!fewer.covers(quantity as u64));
            }
        }
    }

    #[test]
    fn preference_order() {
        let a = Combination::from_counts([(100, 2), (20, 2), (15, 1)]);
        let b = Combination::from_counts([(15, 17)]);
        let c = Combination::from_counts([(100, 2), (50, 1), (10, 1)]);

        assert_eq!(a.shipped_amount(), b.shipped_amount());
        // same amount, fewer packs
        assert_eq!(a.preference_cmp(&b), Ordering::Less);
        // smaller amount
        assert_eq!(a.preference_cmp(&c), Ordering::Less);
        assert_eq!(c.preference_cmp(&a), Ordering::Greater);
        assert_eq!(a.preference_cmp(&a.clone()), Ordering::Equal);

        // same amount and count: more of the largest size wins
        let d = Combination::from_counts([(4, 1), (1, 1)]);
        let e = Combination::from_counts([(3, 1), (2, 1)]);
        assert_eq!(d.preference_cmp(&e), Ordering::Less);
    }
}
