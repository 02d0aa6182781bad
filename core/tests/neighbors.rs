use anyhow::Result;
use neighborhood_core::{
    generate_neighbors, GeneratorConfig, NeighborError, NeighborGenerator, ParameterSpace, Point,
};
use std::collections::BTreeSet;

fn solver_space() -> Result<ParameterSpace> {
    let space = ParameterSpace::from_values(vec![
        vec![0, 1],
        vec![1, 2, 3],
        vec![5, 10, 25, 50, 100],
        vec![10, 100, 1000, 10000],
        vec![0, 1],
        vec![0, 1],
        vec![1, 2, 3],
        vec![5, 10, 25, 50, 100],
        vec![10, 100, 1000, 10000],
        vec![0, 1],
    ])?;
    Ok(space)
}

fn solver_start() -> Point {
    Point::new(vec![0, 2, 5, 1000, 1, 0, 2, 5, 1000, 1])
}

#[test]
fn neighbors_are_distinct_in_space_and_differ_from_start() -> Result<()> {
    let space = solver_space()?;
    let start = solver_start();
    for seed in [1, 2, 3, 0xDEAD_BEEF, u64::MAX] {
        let points = generate_neighbors(&start, &space, 25, seed)?;
        assert_eq!(points.len(), 25, "seed={seed:#x}");
        for p in &points {
            assert_eq!(p.len(), start.len(), "seed={seed:#x}");
            assert_ne!(p, &start, "seed={seed:#x}");
            assert!(space.is_neighbor(&start, p), "seed={seed:#x} point={p}");
        }
    }
    Ok(())
}

#[test]
fn same_seed_reproduces_the_same_set() -> Result<()> {
    let space = solver_space()?;
    let start = solver_start();
    let first = generate_neighbors(&start, &space, 10, 1)?;
    let second = generate_neighbors(&start, &space, 10, 1)?;
    assert_eq!(first, second);

    // Different iterations should explore differently.
    let other = generate_neighbors(&start, &space, 10, 2)?;
    assert_ne!(first, other);
    Ok(())
}

#[test]
fn mutations_lean_toward_adjacent_values() -> Result<()> {
    // Start at the low end of a five-value dimension; nearer values must
    // show up more often across many single-dimension neighbors.
    let space = ParameterSpace::from_values(vec![vec![5, 10, 25, 50, 100]])?;
    let start = Point::new(vec![5]);
    let mut counts = [0u32; 5];
    for seed in 0..4_000 {
        for p in generate_neighbors(&start, &space, 1, seed)? {
            let domain = space.domain(0).expect("one dimension");
            counts[domain.position(p[0]).expect("value in domain")] += 1;
        }
    }
    assert_eq!(counts[0], 0);
    assert!(counts[1] > counts[2] && counts[2] > counts[3] && counts[3] > counts[4]);
    Ok(())
}

#[test]
fn iterations_can_skip_points_already_handed_out() -> Result<()> {
    let space = solver_space()?;
    let start = solver_start();
    let generator = NeighborGenerator::new(&space);

    let mut seen = BTreeSet::new();
    for iteration in 1..=5 {
        let batch = generator.generate_excluding(&start, 8, iteration, &seen)?;
        assert_eq!(batch.len(), 8);
        assert!(batch.is_disjoint(&seen), "iteration={iteration}");
        seen.extend(batch);
    }
    assert_eq!(seen.len(), 40);
    Ok(())
}

#[test]
fn unreachable_targets_fail_instead_of_spinning() -> Result<()> {
    let space = ParameterSpace::from_values(vec![vec![0, 1]])?;
    let err = generate_neighbors(&Point::new(vec![0]), &space, 2, 1).unwrap_err();
    assert!(err.is_unsatisfiable());
    assert_eq!(
        err,
        NeighborError::Unsatisfiable {
            requested: 2,
            reachable: 1
        }
    );

    // A reachable but unlucky target trips the attempt bound.
    let space = solver_space()?;
    let generator =
        NeighborGenerator::with_config(&space, GeneratorConfig::default().with_max_attempts(10));
    let err = generator.generate(&solver_start(), 500, 1).unwrap_err();
    assert!(matches!(err, NeighborError::AttemptsExhausted { attempts: 10, .. }));
    assert!(err.is_unsatisfiable());
    Ok(())
}

#[test]
fn hundred_value_ranges_are_searchable() -> Result<()> {
    let space = ParameterSpace::from_values(vec![(0..101).collect(), vec![0, 1]])?;
    let start = Point::new(vec![50, 0]);
    let points = generate_neighbors(&start, &space, 3, 5)?;
    assert_eq!(points.len(), 3);
    for p in &points {
        assert_ne!(p, &start);
        assert!(space.is_neighbor(&start, p));
    }
    Ok(())
}
