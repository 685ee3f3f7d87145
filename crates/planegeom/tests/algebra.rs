//! Algebraic properties that hold across both rectangle types.

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex, PoisonError},
    };

    use planegeom::{Bounds, MutableRectangle, Point, Rectangle};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use tracing::{Level, subscriber};

    /// Integer-valued coordinates, so sums and differences are exact.
    fn coord() -> impl Strategy<Value = f64> {
        (-1_000_000i32..1_000_000).prop_map(f64::from)
    }

    /// Integer-valued dimensions, including negative ones.
    fn dimension() -> impl Strategy<Value = f64> {
        (-1_000i32..100_000).prop_map(f64::from)
    }

    /// Points on the integer grid.
    fn point() -> impl Strategy<Value = Point> {
        (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
    }

    /// Immutable rectangles, built from possibly negative dimensions.
    fn rectangle() -> impl Strategy<Value = Rectangle> {
        (coord(), coord(), dimension(), dimension())
            .prop_map(|(left, top, width, height)| Rectangle::new(left, top, width, height))
    }

    /// Mutable rectangles, built from possibly negative dimensions.
    fn mutable_rectangle() -> impl Strategy<Value = MutableRectangle> {
        (coord(), coord(), dimension(), dimension())
            .prop_map(|(left, top, width, height)| {
                MutableRectangle::new(left, top, width, height)
            })
    }

    proptest! {
        #[test]
        fn add_then_sub_is_identity(a in point(), b in point()) {
            prop_assert_eq!((a + b) - b, a);
        }

        #[test]
        fn distance_to_self_is_zero(a in point()) {
            prop_assert_eq!(a.squared_distance_to(a), 0.0);
            prop_assert_eq!(a.distance_to(a), 0.0);
        }

        #[test]
        fn distance_is_symmetric(a in point(), b in point()) {
            prop_assert_eq!(a.distance_to(b), b.distance_to(a));
            prop_assert_eq!(a.distance_to(b), (a - b).magnitude());
        }

        #[test]
        fn dimensions_never_negative(r in rectangle(), m in mutable_rectangle()) {
            prop_assert!(r.width() >= 0.0 && r.height() >= 0.0);
            prop_assert!(m.width() >= 0.0 && m.height() >= 0.0);
        }

        #[test]
        fn containment_is_reflexive(r in rectangle()) {
            prop_assert!(r.contains_point(r.top_left()));
            prop_assert!(r.contains_point(r.top_right()));
            prop_assert!(r.contains_point(r.bottom_left()));
            prop_assert!(r.contains_point(r.bottom_right()));
            prop_assert!(r.contains_rect(&r));
        }

        #[test]
        fn intersects_is_symmetric(a in rectangle(), b in mutable_rectangle()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn intersection_lies_within_both(a in rectangle(), b in rectangle()) {
            let i = a.intersection(&b);
            prop_assert_eq!(i.is_some(), a.intersects(&b));
            prop_assert_eq!(i, b.intersection(&a));
            if let Some(i) = i {
                prop_assert!(a.contains_rect(&i));
                prop_assert!(b.contains_rect(&i));
            }
        }

        #[test]
        fn bounding_box_contains_both(a in rectangle(), b in mutable_rectangle()) {
            let bb = a.bounding_box(&b);
            prop_assert!(bb.contains_rect(&a));
            prop_assert!(bb.contains_rect(&b));
            prop_assert_eq!(bb, b.bounding_box(&a));
        }

        #[test]
        fn from_points_spans_corners(a in point(), b in point()) {
            let r = Rectangle::from_points(a, b);
            prop_assert!(r.contains_point(a));
            prop_assert!(r.contains_point(b));
            prop_assert_eq!(r, MutableRectangle::from_points(b, a));
        }
    }

    #[test]
    fn construction() {
        let r = Rectangle::new(20.0, 50.0, 300.0, 600.0);
        assert_eq!(
            (r.left(), r.top(), r.right(), r.bottom()),
            (20.0, 50.0, 320.0, 650.0)
        );

        let r = Rectangle::from_points(Point::new(20.0, 50.0), Point::new(300.0, 600.0));
        assert_eq!(
            (r.left(), r.top(), r.width(), r.height(), r.right(), r.bottom()),
            (20.0, 50.0, 280.0, 550.0, 300.0, 600.0)
        );
    }

    /// The two variants normalize finite negative dimensions differently: the
    /// immutable rectangle clamps to zero, the mutable one flips the sign. Both
    /// send negative infinity to zero. The rectangles are therefore unequal.
    #[test]
    fn negative_dimensions_diverge_between_variants() {
        let fixed = Rectangle::new(0.0, 0.0, -5.0, -5.0);
        assert_eq!((fixed.width(), fixed.height()), (0.0, 0.0));

        let mut resizable = MutableRectangle::new(0.0, 0.0, -5.0, -5.0);
        assert_eq!((resizable.width(), resizable.height()), (5.0, 5.0));
        assert!(fixed != resizable);

        resizable.set_width(-2.0);
        assert_eq!(resizable.width(), 2.0);

        let fixed = Rectangle::new(0.0, 0.0, f64::NEG_INFINITY, f64::NEG_INFINITY);
        let resizable = MutableRectangle::new(0.0, 0.0, f64::NEG_INFINITY, f64::NEG_INFINITY);
        assert_eq!(fixed, resizable);
    }

    #[test]
    fn overlap() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(5.0, 5.0, 10.0, 10.0);
        let i = a.intersection(&b);
        assert_eq!(i, Some(Rectangle::new(5.0, 5.0, 5.0, 5.0)));

        let a = Rectangle::new(0.0, 0.0, 1.0, 1.0);
        let b = Rectangle::new(10.0, 10.0, 1.0, 1.0);
        assert!(!a.intersects(&b));
        assert_eq!(a.intersection(&b), None);
    }

    /// A writer that collects formatted log output for inspection.
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn normalization_is_traced() {
        let capture = Capture::default();
        let writer = capture.clone();
        let collector = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(Level::TRACE)
            .finish();

        subscriber::with_default(collector, || {
            Rectangle::new(0.0, 0.0, -1.0, 1.0);
            MutableRectangle::new(0.0, 0.0, 1.0, -1.0);
            Rectangle::new(0.0, 0.0, 1.0, 1.0);
        });

        let out = String::from_utf8_lossy(&capture.0.lock().unwrap()).into_owned();
        assert!(out.contains("clamped negative dimension to zero"), "{out}");
        assert!(out.contains("flipped negative dimension"), "{out}");
        assert_eq!(out.lines().count(), 2, "{out}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_normalizes() -> Result<(), serde_json::Error> {
        let json = r#"{"left":1.0,"top":2.0,"width":-3.0,"height":4.0}"#;

        let r: Rectangle = serde_json::from_str(json)?;
        assert_eq!(r.width(), 0.0);
        let m: MutableRectangle = serde_json::from_str(json)?;
        assert_eq!(m.width(), 3.0);

        assert_eq!(
            serde_json::to_string(&m)?,
            r#"{"left":1.0,"top":2.0,"width":3.0,"height":4.0}"#
        );
        let p: Point = serde_json::from_str(r#"{"x":1.0,"y":-1.0}"#)?;
        assert_eq!(p, Point::new(1.0, -1.0));
        Ok(())
    }
}
