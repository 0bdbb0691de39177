//! Integration tests sampling built curves at known positions.
#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use lifecurve::{ControlPoint, Curve, Vec2, error, persist, preset_from_name};

    fn straight_line() -> Curve {
        Curve::builder()
            .anchor_point((0.0, 0.0))
            .anchor_point((1.0, 10.0))
            .build()
    }

    fn double_straight_line() -> Curve {
        Curve::builder()
            .anchor_point((0.0, 0.0))
            .anchor_point((0.4, 10.0))
            .anchor_point((1.0, 10.0))
            .build()
    }

    fn bent() -> Curve {
        Curve::builder()
            .anchor_point((0.0, 0.0))
            .control_point1((0.2, 1.0))
            .control_point2((0.8, 0.0))
            .anchor_point((1.0, 1.0))
            .build()
    }

    fn mixed() -> Curve {
        Curve::builder()
            .anchor_point((0.0, 0.0))
            .anchor_point((0.5, 0.5))
            .control_point1((0.6, 0.5))
            .control_point2((0.8, 2.0))
            .anchor_point((1.0, 2.0))
            .build()
    }

    macro_rules! value_tests {
        ($(($curve:ident, $label:ident, $position:expr, $expected:expr)),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<$curve _at_ $label>]() {
                        let curve = $curve();
                        let value = curve.value($position);
                        assert_relative_eq!(value, $expected, epsilon = 1e-3);
                    }
                }
            )*
        };
    }

    value_tests! {
        (straight_line, start, 0.0, 0.0),
        (straight_line, two_fifths, 0.4, 4.0),
        (straight_line, end, 1.0, 10.0),
        (double_straight_line, start, 0.0, 0.0),
        (double_straight_line, first_midpoint, 0.2, 5.0),
        (double_straight_line, plateau, 0.8, 10.0),
        (bent, start, 0.0, 0.0),
        (bent, tenth, 0.1, 0.244),
        (bent, half, 0.5, 0.5),
        (bent, end, 1.0, 1.0),
        (mixed, quarter, 0.25, 0.25),
        (mixed, joint, 0.5, 0.5),
        (mixed, end, 1.0, 2.0),
        (mixed, before_start, -1.0, 0.0),
        (mixed, past_end, 3.0, 2.0),
    }

    #[test]
    fn builder_produces_boundary_tangents() {
        let curve = mixed();
        let points = curve.control_points();
        assert_eq!(points.len(), 3);
        assert!(points[0].tangent_in.is_none());
        assert!(points.iter().skip(1).all(|p| p.tangent_in.is_some()));
        assert!(points.iter().take(2).all(|p| p.tangent_out.is_some()));
        assert!(points[2].tangent_out.is_none());
        assert_eq!(points[1].tangent_out, Some(Vec2::new(0.6, 0.5)));
        assert_eq!(points[2].tangent_in, Some(Vec2::new(0.8, 2.0)));
    }

    #[test]
    fn builder_sorts_backward_anchors() {
        // The builder does not reject an anchor behind the previous one; the
        // curve simply keeps its points in X order.
        let curve = Curve::builder()
            .anchor_point((0.5, 1.0))
            .anchor_point((0.0, 0.0))
            .build();
        let xs: Vec<f32> = curve.control_points().iter().map(ControlPoint::x).collect();
        assert_eq!(xs, vec![0.0, 0.5]);
    }

    #[test]
    fn saved_curve_loads_equal() -> error::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("curve.json");
        let curve = mixed();
        persist::save(&curve, &path)?;
        assert_eq!(persist::load(&path)?, curve);
        Ok(())
    }

    #[test]
    fn loading_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = persist::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(error::Error::Io(_))));
    }

    #[test]
    fn presets_are_fresh_copies() -> error::Result<()> {
        let a = preset_from_name("fade")?;
        let b = preset_from_name("fade")?;
        assert_eq!(a, b);
        assert!(preset_from_name("nope").is_err());
        Ok(())
    }
}
