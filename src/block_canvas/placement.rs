use super::geometry::{Point, Viewport};
use rand::Rng;

/// Picks a top-left corner at least `padding` pixels away from every viewport
/// edge. An axis too small to honour the padding collapses to its center.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, padding: f64) -> Point {
    Point::new(
        pick_axis(rng, viewport.width, padding),
        pick_axis(rng, viewport.height, padding),
    )
}

fn pick_axis<R: Rng + ?Sized>(rng: &mut R, extent: f64, padding: f64) -> f64 {
    let extent = if extent.is_finite() { extent.max(0.0) } else { 0.0 };
    let padding = if padding.is_finite() { padding.max(0.0) } else { 0.0 };
    let (lo, hi) = (padding, extent - padding);
    if lo < hi {
        rng.gen_range(lo..=hi)
    } else {
        extent / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn stays_inside_padded_area() {
        let mut rng = SmallRng::seed_from_u64(7);
        for (w, h) in [(200.0, 200.0), (201.0, 640.0), (1920.0, 1080.0)] {
            for _ in 0..500 {
                let p = random_position(&mut rng, Viewport::new(w, h), 100.0);
                assert!((100.0..=w - 100.0).contains(&p.x), "x={} w={w}", p.x);
                assert!((100.0..=h - 100.0).contains(&p.y), "y={} h={h}", p.y);
            }
        }
    }

    #[test]
    fn exact_minimum_viewport_pins_to_padding() {
        let mut rng = SmallRng::seed_from_u64(1);
        let p = random_position(&mut rng, Viewport::new(200.0, 200.0), 100.0);
        assert_eq!(p, Point::new(100.0, 100.0));
    }

    #[test]
    fn small_viewport_collapses_to_center() {
        let mut rng = SmallRng::seed_from_u64(3);
        let p = random_position(&mut rng, Viewport::new(150.0, 40.0), 100.0);
        assert_eq!(p, Point::new(75.0, 20.0));

        let p = random_position(&mut rng, Viewport::new(-10.0, f64::NAN), 100.0);
        assert_eq!(p, Point::new(0.0, 0.0));
    }
}
