//! Segment probes crossing quadrant boundaries fall back to every child.
use flatquad::prelude::*;

fn main() {
    let lines: Vec<Segment> = (0..128)
        .flat_map(|x| (0..128).map(move |y| Segment::point(Vec2::new(x as f32, y as f32))))
        .collect();
    let fits = |s: &Segment, min: Vec2, max: Vec2| {
        let q = Rect { min, max };
        q.contains_point(s.p1) && q.contains_point(s.p2)
    };
    let tree = QuadTree::build(lines, Vec2::ZERO, Vec2::splat(128.0), 4, fits);

    for probe in [
        Segment::new(Vec2::new(65.0, 65.0), Vec2::new(70.0, 70.0)),
        Segment::new(Vec2::new(65.0, 65.0), Vec2::new(127.0, 127.0)),
        Segment::new(Vec2::new(200.0, 200.0), Vec2::new(210.0, 210.0)),
    ] {
        let mut visits = 0;
        tree.run(&probe, |_| visits += 1);
        println!("{:?} -> {} candidates", probe, visits);
    }
}
