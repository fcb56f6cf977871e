//! Benchmark for `query_region` performance
//!
//! Builds a tree over 1M random points in a 100x100 space and times region
//! queries with varying coverage (10%, 1%, 0.01%), then compares the total
//! against a linear scan of the same points.

use flatquad::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

/// Generate a random query rectangle with sides up to `max_size`
fn random_query<R: Rng>(rng: &mut R, max_size: f32) -> Rect {
    let min = Vec2::new(rng.random_range(0.0..(100.0 - max_size)), rng.random_range(0.0..(100.0 - max_size)));
    let size = Vec2::new(rng.random_range(0.0..max_size), rng.random_range(0.0..max_size));
    Rect::new(min, min + size)
}

fn bench_search(tree: &QuadTree<Vec2>, queries: &[Rect], percentage_str: &str) {
    let mut results = Vec::new();
    let mut found = 0;
    let start = Instant::now();

    for query in queries {
        tree.query_region(query, &mut results);
        found += results.len();
    }

    let elapsed = start.elapsed();
    println!("{} searches {}%: {}ms ({} visited)", queries.len(), percentage_str, elapsed.as_millis(), found);
}

fn bench_linear(points: &[Vec2], queries: &[Rect], percentage_str: &str) {
    let start = Instant::now();
    let mut found = 0;
    for query in queries {
        found += points.iter().filter(|p| query.contains_point(**p)).count();
    }
    let elapsed = start.elapsed();
    println!("{} linear scans {}%: {}ms ({} inside)", queries.len(), percentage_str, elapsed.as_millis(), found);
}

fn main() {
    let num_items = 1_000_000;
    let num_tests = 1_000;

    let mut rng = rand::rngs::StdRng::seed_from_u64(95756739);

    let points: Vec<Vec2> = (0..num_items)
        .map(|_| Vec2::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();

    let start = Instant::now();
    let fits = |p: &Vec2, min: Vec2, max: Vec2| Rect { min, max }.contains_point(*p);
    let tree = QuadTree::build(points.clone(), Vec2::ZERO, Vec2::splat(100.0), 8, fits);
    println!("{} points indexed in {}ms ({} nodes)", num_items, start.elapsed().as_millis(), tree.node_count());

    for (max_size, label) in [(31.62, "10"), (10.0, "1"), (1.0, "0.01")] {
        let queries: Vec<Rect> = (0..num_tests).map(|_| random_query(&mut rng, max_size)).collect();
        bench_search(&tree, &queries, label);
        bench_linear(&points, &queries, label);
    }
}
