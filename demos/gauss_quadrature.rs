use fixedquad::{
    Interval, IntervalQuadrature, IntervalRuleType, Triangle, TriangleQuadrature,
    TriangleRuleType,
};

fn main() {
    // Both rules are exact for x^2
    let unit = Interval::new(0.0, 1.0);

    let quad = IntervalQuadrature::<f64>::new(IntervalRuleType::Legendre3);
    println!(
        "Gauss-Legendre 3 points: Int(x^2, {{x, 0, 1}}) = {:.15}",
        quad.integrate(|x| x * x, &unit)
    );

    let quad = IntervalQuadrature::<f64>::new(IntervalRuleType::Lobatto5);
    println!(
        "Gauss-Lobatto 5 points: Int(x^2, {{x, 0, 1}}) = {:.15}",
        quad.integrate(|x| x * x, &unit)
    );

    // The default rule is 5-point Gauss-Legendre
    let quad = IntervalQuadrature::<f64>::default();
    println!(
        "Gauss-Legendre 5 points: Int(sin(x), {{x, 0, 1}}) = {:.15}",
        quad.integrate(f64::sin, &unit)
    );

    let quarter = Interval::new(0.0, std::f64::consts::FRAC_PI_2);
    println!(
        "Gauss-Legendre 5 points: Int(sin(x), {{x, 0, pi/2}}) = {:.15}",
        quad.integrate(f64::sin, &quarter)
    );

    let triangle1 = Triangle::new([0.0, 0.0], [1.0, 0.0], [0.0, 1.0]);
    let triangle2 = Triangle::new([0.0, 0.0], [2.0, 0.0], [0.0, 3.0]);

    let quad = TriangleQuadrature::<f64>::new(TriangleRuleType::P3);
    println!(
        "3 points: Int(x^2 + y^2, T1) = {:.15} (expected 0.166667)",
        quad.integrate(|x, y| x * x + y * y, &triangle1)
    );

    // The default rule has 7 points
    let quad = TriangleQuadrature::<f64>::default();
    println!(
        "7 points: Int(x * y, T1) = {:.15} (expected 0.0416667)",
        quad.integrate(|x, y| x * y, &triangle1)
    );

    let quad = TriangleQuadrature::<f64>::new(TriangleRuleType::P7);
    println!(
        "7 points: Int(sin(x) * cos(y), T1) = {:.15} (expected 0.150584)",
        quad.integrate(|x, y| x.sin() * y.cos(), &triangle1)
    );

    let quad = TriangleQuadrature::<f64>::new(TriangleRuleType::P12);
    println!(
        "12 points: Int(x^2 + y^2, T2) = {:.15} (expected 6.5)",
        quad.integrate(|x, y| x * x + y * y, &triangle2)
    );
    println!(
        "12 points: Int(sin(x) * cos(y), T1) = {:.15} (expected 0.150584)",
        quad.integrate(|x, y| x.sin() * y.cos(), &triangle1)
    );
}
