//! Core geometric types for the marketmap heatmap layout engine.
//!
//! This crate provides the plain-float primitives the layout engine and its
//! callers share:
//! - [`Point`]: a 2D coordinate
//! - [`Size`]: width and height
//! - [`Rect`]: origin plus size, with the intersection/union/containment
//!   queries the engine's invariants are stated in terms of
//!
//! Nothing here depends on a rendering toolkit; callers map [`Rect`] into
//! whatever drawing surface they use.

mod geometry;

pub use geometry::{Point, Rect, Size};

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // GEOMETRY TESTS
    // ==========================================================================

    mod geometry_tests {
        use super::*;
        use proptest::prelude::*;

        #[test]
        fn test_point_new() {
            let p = Point::new(10.0, 20.0);
            assert_eq!(p.x, 10.0);
            assert_eq!(p.y, 20.0);
        }

        #[test]
        fn test_size_area() {
            assert_eq!(Size::new(4.0, 2.5).area(), 10.0);
            assert_eq!(Size::ZERO.area(), 0.0);
        }

        #[test]
        fn test_rect_from_size() {
            let r = Rect::from_size(Size::new(200.0, 100.0));
            assert_eq!(r, Rect::new(0.0, 0.0, 200.0, 100.0));
        }

        #[test]
        fn test_rect_contains_point() {
            let r = Rect::new(0.0, 0.0, 100.0, 50.0);
            assert!(r.contains_point(&Point::new(0.0, 0.0)));
            assert!(r.contains_point(&Point::new(100.0, 50.0)));
            assert!(!r.contains_point(&Point::new(100.1, 25.0)));
        }

        #[test]
        fn test_rect_serde_round_trip() {
            let r = Rect::new(1.0, 2.0, 3.0, 4.0);
            let json = serde_json::to_string(&r).expect("serializes");
            let back: Rect = serde_json::from_str(&json).expect("deserializes");
            assert_eq!(r, back);
        }

        proptest! {
            #[test]
            fn prop_rect_area_non_negative(
                x in -1000.0f64..1000.0, y in -1000.0f64..1000.0,
                w in 0.0f64..1000.0, h in 0.0f64..1000.0
            ) {
                let r = Rect::new(x, y, w, h);
                prop_assert!(r.area() >= 0.0);
            }

            #[test]
            fn prop_rect_intersects_self(
                x in -1000.0f64..1000.0, y in -1000.0f64..1000.0,
                w in 0.1f64..1000.0, h in 0.1f64..1000.0
            ) {
                let r = Rect::new(x, y, w, h);
                prop_assert!(r.intersects(&r));
            }

            #[test]
            fn prop_rect_intersection_within_both(
                x1 in -100.0f64..100.0, y1 in -100.0f64..100.0,
                w1 in 1.0f64..100.0, h1 in 1.0f64..100.0,
                x2 in -100.0f64..100.0, y2 in -100.0f64..100.0,
                w2 in 1.0f64..100.0, h2 in 1.0f64..100.0
            ) {
                let a = Rect::new(x1, y1, w1, h1);
                let b = Rect::new(x2, y2, w2, h2);
                if let Some(i) = a.intersection(&b) {
                    prop_assert!(a.contains_rect(&i, 1e-9));
                    prop_assert!(b.contains_rect(&i, 1e-9));
                }
            }

            #[test]
            fn prop_rect_union_contains_both(
                x1 in -100.0f64..100.0, y1 in -100.0f64..100.0,
                w1 in 0.0f64..100.0, h1 in 0.0f64..100.0,
                x2 in -100.0f64..100.0, y2 in -100.0f64..100.0,
                w2 in 0.0f64..100.0, h2 in 0.0f64..100.0
            ) {
                let a = Rect::new(x1, y1, w1, h1);
                let b = Rect::new(x2, y2, w2, h2);
                let u = a.union(&b);
                prop_assert!(u.contains_rect(&a, 1e-9));
                prop_assert!(u.contains_rect(&b, 1e-9));
            }

            #[test]
            fn prop_rect_aspect_ratio_at_least_one(
                w in 0.1f64..1000.0, h in 0.1f64..1000.0
            ) {
                let r = Rect::new(0.0, 0.0, w, h);
                prop_assert!(r.aspect_ratio() >= 1.0);
            }
        }
    }
}
