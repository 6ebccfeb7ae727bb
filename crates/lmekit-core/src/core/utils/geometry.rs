use nalgebra::Point3;

pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm()
}

/// Bond angle in degrees with `b` as the vertex.
pub fn angle_degrees(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> f64 {
    (a - b).angle(&(c - b)).to_degrees()
}

/// Signed dihedral angle in degrees for the chain `a-b-c-d`, in `(-180, 180]`.
///
/// Positive values are clockwise rotations of `a` onto `d` when viewed along
/// `b -> c`.
pub fn torsion_degrees(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    d: &Point3<f64>,
) -> f64 {
    let b1 = b - a;
    let b2 = c - b;
    let b3 = d - c;

    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);

    let y = b2.norm() * b1.dot(&n2);
    let x = n1.dot(&n2);
    y.atan2(x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 2.0, 2.0);
        assert_close(distance(&a, &b), 3.0);
        assert_close(distance(&b, &a), 3.0);
    }

    #[test]
    fn angle_degrees_measures_at_vertex() {
        let vertex = Point3::origin();
        assert_close(
            angle_degrees(&Point3::new(1.0, 0.0, 0.0), &vertex, &Point3::new(0.0, 1.0, 0.0)),
            90.0,
        );
        assert_close(
            angle_degrees(&Point3::new(1.0, 0.0, 0.0), &vertex, &Point3::new(-2.0, 0.0, 0.0)),
            180.0,
        );
    }

    #[test]
    fn torsion_degrees_covers_cis_trans_and_gauche() {
        let a = Point3::new(1.0, 0.0, 0.0);
        let b = Point3::new(0.0, 0.0, 0.0);
        let c = Point3::new(0.0, 0.0, 1.0);

        assert_close(torsion_degrees(&a, &b, &c, &Point3::new(1.0, 0.0, 1.0)), 0.0);
        assert_close(
            torsion_degrees(&a, &b, &c, &Point3::new(-1.0, 0.0, 1.0)),
            180.0,
        );
        assert_close(torsion_degrees(&a, &b, &c, &Point3::new(0.0, 1.0, 1.0)), 90.0);
        assert_close(
            torsion_degrees(&a, &b, &c, &Point3::new(0.0, -1.0, 1.0)),
            -90.0,
        );
    }
}
