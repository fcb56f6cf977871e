//! Radius queries visit the enclosing square; filter for a true circle.
use flatquad::prelude::*;

fn main() {
    let points: Vec<Vec2> = (0..10)
        .flat_map(|x| (0..10).map(move |y| Vec2::new(x as f32, y as f32)))
        .collect();
    let fits = |p: &Vec2, min: Vec2, max: Vec2| Rect { min, max }.contains_point(*p);
    let tree = QuadTree::build(points, Vec2::ZERO, Vec2::splat(10.0), 3, fits);

    let center = Vec2::new(5.0, 5.0);
    let radius = 2.0;

    let mut square = 0;
    let mut circle = Vec::new();
    tree.radius(center, radius, |p| {
        square += 1;
        if p.distance(center) <= radius {
            circle.push(*p);
        }
    });
    println!("Visited {} points near {center}, {} within radius {radius}:", square, circle.len());
    println!("{:?}", circle);
}
