//! Follow a point probe down to its leaf.
use flatquad::prelude::*;

fn main() {
    let points = vec![
        Vec2::new(25.0, 25.0),
        Vec2::new(75.0, 75.0),
        Vec2::new(25.0, 75.0),
        Vec2::new(75.0, 25.0),
    ];
    let fits = |p: &Vec2, min: Vec2, max: Vec2| Rect { min, max }.contains_point(*p);
    let tree = QuadTree::build(points, Vec2::ZERO, Vec2::splat(100.0), 2, fits);

    let mut results = Vec::new();
    tree.query_run(&Vec2::new(30.0, 30.0), &mut results);
    let hits: Vec<Vec2> = results.iter().map(|&i| tree[i]).collect();
    println!("Probe (30, 30): {:?}", hits);
}
