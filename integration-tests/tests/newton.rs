use approx::assert_relative_eq;

use integration_tests::{Counting, Polynomial};
use rootfind_core::from_fn;
use rootfind_solvers::equation::{
    Action, BracketError, Config, ConfigError, Error, Event, Method, Newton, NewtonSafe, Solver1D,
    Status,
};

#[test]
fn newton_finds_bracketed_polynomial_roots() {
    let cases: [(&[f64], f64, [f64; 2]); 4] = [
        (&[2.0], 1.0, [0.0, 5.0]),
        (&[-1.5, 3.0], 2.5, [0.0, 4.0]),
        (&[0.5, 4.0, -3.0], 0.2, [0.0, 1.0]),
        (&[1.0, 2.0, 3.0, 7.0], 6.0, [5.0, 10.0]),
    ];

    for (roots, guess, bounds) in cases {
        let f = Counting::new(Polynomial::from_roots(roots));

        let solution = Newton::default()
            .solve(&f, 1e-12, guess, bounds)
            .expect("bracketed root should converge");

        let [low, high] = bounds;
        assert_eq!(solution.status, Status::Converged);
        assert!(low <= solution.x && solution.x <= high);
        assert!(
            roots
                .iter()
                .any(|root| (solution.x - root).abs() < 1e-10),
            "{} is not among {roots:?}",
            solution.x,
        );
        assert_eq!(solution.evals, f.calls());
        assert!(solution.evals <= Config::default().max_evals());
    }
}

#[test]
fn both_solvers_agree_on_square_root() {
    let f = from_fn(|x: f64| x * x - 2.0).with_derivative(|x: f64| 2.0 * x);

    let newton = Newton::default()
        .solve(&f, 1e-12, 1.0, [0.0, 2.0])
        .expect("converges");
    let safe = NewtonSafe::default()
        .solve(&f, 1e-12, 1.0, [0.0, 2.0])
        .expect("converges");

    assert_relative_eq!(newton.x, std::f64::consts::SQRT_2, epsilon = 1e-12);
    assert_relative_eq!(safe.x, std::f64::consts::SQRT_2, epsilon = 1e-12);
    assert_eq!(newton.method, Method::Newton);
    assert_eq!(safe.method, Method::NewtonSafe);
}

#[test]
fn overshooting_newton_still_lands_in_bounds() {
    let f = Counting::new(from_fn(f64::atan).with_derivative(|x: f64| 1.0 / (1.0 + x * x)));

    for guess in [1.4, 1.5, 1.8, -1.5] {
        let solution = Newton::default()
            .solve(&f, 1e-12, guess, [-2.0, 2.0])
            .expect("handoff should converge");

        assert!((-2.0..=2.0).contains(&solution.x));
        assert_relative_eq!(solution.x, 0.0, epsilon = 1e-10);
    }
}

#[test]
fn handoff_is_visible_only_to_observers() {
    let f = from_fn(f64::atan).with_derivative(|x: f64| 1.0 / (1.0 + x * x));
    let mut handoffs = 0;

    let solution = Newton::default()
        .solve_observed(&f, 1e-12, 1.5, [-1.0, 2.0], |event: &Event| -> Option<Action> {
            if matches!(event, Event::Handoff { .. }) {
                handoffs += 1;
            }
            None
        })
        .expect("converges");

    assert_eq!(handoffs, 1);
    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.method, Method::NewtonSafe);
}

#[test]
fn one_evaluation_is_not_enough() {
    let f = from_fn(|x: f64| x * x - 2.0).with_derivative(|x: f64| 2.0 * x);
    let mut solver = Newton::default();
    solver.set_max_evals(1).expect("valid budget");

    let error = solver
        .solve(&f, 1e-10, 90.0, [0.0, 100.0])
        .expect_err("one evaluation cannot converge");

    assert_eq!(error, Error::MaxEvals { max_evals: 1 });
    assert_eq!(
        error.to_string(),
        "maximum number of function evaluations (1) exceeded"
    );
}

#[test]
fn missing_derivative_is_reported_by_both_solvers() {
    let f = Counting::new(from_fn(|x: f64| x * x - 2.0));

    for (result, solver) in [
        (
            Newton::default().solve(&f, 1e-10, 1.0, [0.0, 2.0]),
            Method::Newton,
        ),
        (
            NewtonSafe::default().solve(&f, 1e-10, 1.0, [0.0, 2.0]),
            Method::NewtonSafe,
        ),
    ] {
        assert_eq!(
            result,
            Err(Error::Config(ConfigError::DerivativeRequired { solver }))
        );
    }
    assert_eq!(f.calls(), 0);
}

#[test]
fn safeguarded_solver_needs_sign_change() {
    let f = Polynomial::new([1.0, 0.0, 1.0]);

    let error = NewtonSafe::default()
        .solve(&f, 1e-10, 0.0, [-1.0, 1.0])
        .expect_err("x² + 1 has no real root");

    assert!(matches!(
        error,
        Error::Bracket(BracketError::NoSignChange { f_min, f_max, .. })
            if f_min == 2.0 && f_max == 2.0
    ));
}

#[test]
fn repeated_solves_are_identical() {
    let f = Polynomial::from_roots(&[0.3, 1.7, 2.9]);
    let solver = Newton::default();

    let first = solver.solve(&f, 1e-12, 2.2, [1.0, 2.5]).expect("converges");
    let second = solver.solve(&f, 1e-12, 2.2, [1.0, 2.5]).expect("converges");

    assert_eq!(first, second);
    assert_eq!(first.x.to_bits(), second.x.to_bits());
}

#[test]
fn solve_from_step_brackets_then_converges() {
    let f = Counting::new(Polynomial::from_roots(&[-4.0]));
    let mut solver = Newton::default();
    solver.set_lower_bound(-10.0).expect("valid limit");

    let solution = solver
        .solve_from_step(&f, 1e-12, 3.0, 0.5)
        .expect("bracket search should succeed");

    assert_relative_eq!(solution.x, -4.0, epsilon = 1e-10);
    assert_eq!(solution.evals, f.calls());
}
