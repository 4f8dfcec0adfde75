use fixedquad::{Interval, IntervalQuadrature, QuadratureError, Triangle, TriangleQuadrature};

fn main() -> Result<(), QuadratureError> {
    // Simpson's rule on [-1, 1], given as a fixed-size table
    let simpson = IntervalQuadrature::<f64>::from_array(
        [-1.0, 0.0, 1.0],
        [1.0 / 3.0, 4.0 / 3.0, 1.0 / 3.0],
    );
    println!(
        "Simpson: Int(x^3 - x, {{x, 0, 2}}) = {} (expected 2)",
        simpson.integrate(|x| x * x * x - x, &Interval::new(0.0, 2.0))
    );

    // Edge midpoint rule on the triangle, degree 2
    let midpoints = TriangleQuadrature::<f64>::from_table(
        vec![0.5, 0.5, 0.0, 0.0, 0.5, 0.5, 0.5, 0.0, 0.5],
        vec![1.0 / 3.0; 3],
    )?;
    let triangle = Triangle::new([0.0, 0.0], [1.0, 0.0], [0.0, 1.0]);
    println!(
        "Edge midpoints: Int(x * y, T) = {} (expected {})",
        midpoints.integrate(|x, y| x * y, &triangle),
        1.0 / 24.0
    );

    // One weight too few
    match IntervalQuadrature::<f64>::from_table(vec![-0.5, 0.5], vec![2.0]) {
        Ok(_) => println!("Malformed table was accepted"),
        Err(e) => println!("Malformed table rejected: {e}"),
    }

    Ok(())
}
