//! Find elements stored in nodes overlapping a rectangle.
use flatquad::prelude::*;

fn main() {
    let points = vec![
        Vec2::new(1.0, 1.0),
        Vec2::new(3.0, 2.0),
        Vec2::new(6.0, 6.0),
        Vec2::new(7.5, 1.5),
    ];
    let fits = |p: &Vec2, min: Vec2, max: Vec2| Rect { min, max }.contains_point(*p);
    let tree = QuadTree::build(points, Vec2::ZERO, Vec2::splat(8.0), 2, fits);

    let query = Rect::new(Vec2::ZERO, Vec2::splat(4.0));
    let mut results = Vec::new();
    tree.query_region(&query, &mut results);
    println!("Region {:?}: indices {:?}", query, results);

    tree.region(&query, |p| println!("  visited {p}"));
}
