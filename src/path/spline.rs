use crate::foundation::core::{BezPath, Point, Vec2};

const DUPLICATE_EPS: f64 = 1.0e-9;

/// Natural cubic spline through every knot, emitted as one cubic Bézier per span.
///
/// The second derivative is zero at both ends. Consecutive duplicate knots are collapsed first,
/// and two knots degrade to a straight line.
pub(crate) fn natural_spline(points: &[Point]) -> BezPath {
    let knots = dedup(points);
    let mut path = BezPath::new();
    let Some(&first) = knots.first() else {
        return path;
    };
    path.move_to(first);

    let n = knots.len() - 1;
    match n {
        0 => return path,
        1 => {
            path.line_to(knots[1]);
            return path;
        }
        _ => {}
    }

    let k: Vec<Vec2> = knots.iter().map(|p| p.to_vec2()).collect();
    let (p1, p2) = control_points(&k);
    for i in 0..n {
        path.curve_to(p1[i].to_point(), p2[i].to_point(), knots[i + 1]);
    }
    path
}

/// Solves the tridiagonal system for the first control point of every span (Thomas algorithm).
fn control_points(k: &[Vec2]) -> (Vec<Vec2>, Vec<Vec2>) {
    let n = k.len() - 1;
    let mut a = vec![0.0_f64; n];
    let mut b = vec![0.0_f64; n];
    let mut c = vec![0.0_f64; n];
    let mut r = vec![Vec2::ZERO; n];

    b[0] = 2.0;
    c[0] = 1.0;
    r[0] = k[0] + 2.0 * k[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        c[i] = 1.0;
        r[i] = 4.0 * k[i] + 2.0 * k[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * k[n - 1] + k[n];

    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m * c[i - 1];
        r[i] = r[i] - m * r[i - 1];
    }

    let mut p1 = vec![Vec2::ZERO; n];
    p1[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        p1[i] = (r[i] - c[i] * p1[i + 1]) / b[i];
    }

    let mut p2 = vec![Vec2::ZERO; n];
    for i in 0..n - 1 {
        p2[i] = 2.0 * k[i + 1] - p1[i + 1];
    }
    p2[n - 1] = (k[n] + p1[n - 1]) * 0.5;

    (p1, p2)
}

fn dedup(points: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if out
            .last()
            .is_some_and(|last| (*last - p).hypot2() <= DUPLICATE_EPS * DUPLICATE_EPS)
        {
            continue;
        }
        out.push(p);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/path/spline.rs"]
mod tests;
