//! Detailed profiling benchmark to measure time spent in build and each query kind

use flatquad::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

fn main() {
    println!("flatquad Profiling Benchmark");
    println!("============================\n");

    let num_items = 1_000_000;
    let num_tests = 1_000;

    // Fixed seed for reproducibility
    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    // Small boxes in a 100x100 space
    let boxes: Vec<Rect> = (0..num_items)
        .map(|_| {
            let min = Vec2::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
            let size = Vec2::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
            Rect::new(min, (min + size).min(Vec2::splat(100.0)))
        })
        .collect();

    let fits = |b: &Rect, min: Vec2, max: Vec2| b.inside_of(&Rect { min, max });
    for depth in [4, 6, 8, 10] {
        let build_start = Instant::now();
        let tree = QuadTree::build(boxes.clone(), Vec2::ZERO, Vec2::splat(100.0), depth, fits);
        println!(
            "build depth {:>2}: {:>10.2}ms  nodes {:>8}  kept at root {:>6}",
            depth,
            build_start.elapsed().as_secs_f64() * 1000.0,
            tree.node_count(),
            tree.root().own_count()
        );
    }

    let tree = QuadTree::build(boxes, Vec2::ZERO, Vec2::splat(100.0), 8, fits);
    let mut results = Vec::new();

    let centers: Vec<Vec2> = (0..num_tests)
        .map(|_| Vec2::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();

    // Region queries by coverage
    for (side, label) in [(100.0, "100%"), (70.71, "50%"), (31.62, "10%"), (10.0, "1%"), (1.0, "0.01%")] {
        let region_start = Instant::now();
        let mut visited = 0;
        for c in &centers {
            tree.query_region(&Rect::from_center(*c, side * 0.5), &mut results);
            visited += results.len();
        }
        let elapsed = region_start.elapsed();
        println!(
            "query_region ({:<5} coverage) - {} queries: {:>10.2}ms  visited {}",
            label,
            num_tests,
            elapsed.as_secs_f64() * 1000.0,
            visited
        );
    }

    // Radius queries
    let radius_start = Instant::now();
    for c in &centers {
        tree.query_radius(*c, 2.0, &mut results);
    }
    println!("query_radius (r = 2)          - {} queries: {:>10.2}ms", num_tests, radius_start.elapsed().as_secs_f64() * 1000.0);

    // Point probes
    let point_start = Instant::now();
    for c in &centers {
        tree.query_run(c, &mut results);
    }
    println!("query_run (point)             - {} queries: {:>10.2}ms", num_tests, point_start.elapsed().as_secs_f64() * 1000.0);

    // Segment probes, mostly crossing quadrant boundaries
    let segment_start = Instant::now();
    for pair in centers.windows(2) {
        tree.query_run(&Segment::new(pair[0], pair[1]), &mut results);
    }
    println!("query_run (segment)           - {} queries: {:>10.2}ms", num_tests - 1, segment_start.elapsed().as_secs_f64() * 1000.0);
}
