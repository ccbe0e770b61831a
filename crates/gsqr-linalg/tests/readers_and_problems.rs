//! Integration tests for the table readers and the problem builders.

use std::io::Write;

use gsqr_linalg::io::{parse_orbit, parse_population, parse_system, read_population, read_system};
use gsqr_linalg::problems::{conic_design, fit_conic, solve_system, PolynomialModel};
use gsqr_linalg::SolverConfig;

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ---------------------------------------------------------------------------
// System files
// ---------------------------------------------------------------------------

#[test]
fn read_system_from_file_and_solve() {
    let file = write_temp("3 3\n4 -2 1 11\n-2 4 -2 -16\n1 -2 4 17\n");
    let system = read_system(file.path()).unwrap();
    assert_eq!(system.a.shape(), (3, 3));

    let solution = solve_system(&system, &SolverConfig::default()).unwrap();
    let expected = [1.0, -2.0, 3.0];
    for (got, want) in solution.x.iter().zip(expected.iter()) {
        assert!((got - want).abs() < 1e-9, "got {}, want {}", got, want);
    }
    assert!(solution.residual < 1e-9);
}

#[test]
fn system_augmented_matrix_matches_input() {
    let system = parse_system("2 2\n1 0 3\n0 1 5\n").unwrap();
    let ab = system.augmented().unwrap();
    assert_eq!(ab.shape(), (2, 3));
    assert_eq!(ab.row_slice(1), &[0.0, 1.0, 5.0]);
}

#[test]
fn system_row_count_must_match_header() {
    let err = parse_system("3 2\n1 0 3\n0 1 5\n").unwrap_err();
    assert!(format!("{:#}", err).contains("declares 3 rows"), "{:#}", err);
}

#[test]
fn system_column_count_must_match_header() {
    assert!(parse_system("2 5\n1 0 3\n0 1 5\n").is_err());
}

#[test]
fn system_header_needs_two_fields() {
    assert!(parse_system("2\n1 0 3\n0 1 5\n").is_err());
}

#[test]
fn missing_file_names_path() {
    let err = read_system("/nonexistent/system.txt").unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/system.txt"));
}

#[test]
fn empty_file_is_an_error() {
    assert!(parse_system("").is_err());
    assert!(parse_system("# only a comment\n").is_err());
}

// ---------------------------------------------------------------------------
// Population series
// ---------------------------------------------------------------------------

#[test]
fn population_fit_recovers_exact_cubic() {
    let model = PolynomialModel::default();
    let coeffs = [150.0, 80.0, 12.0, -3.0];
    let years: Vec<f64> = (0..11).map(|k| 1900.0 + 10.0 * k as f64).collect();
    let mut content = format!("{}\n", years.len());
    for &t in &years {
        let s = model.rescale(t);
        let y = coeffs[0] + coeffs[1] * s + coeffs[2] * s * s + coeffs[3] * s * s * s;
        content.push_str(&format!("{} {}\n", t, y));
    }
    let file = write_temp(&content);

    let series = read_population(file.path()).unwrap();
    let fit = model.fit(&series, &SolverConfig::default()).unwrap();
    for (got, want) in fit.coefficients.iter().zip(coeffs.iter()) {
        assert!((got - want).abs() < 1e-7, "got {}, want {}", got, want);
    }
    assert!(fit.residual < 1e-7);

    let s2010 = model.rescale(2010.0);
    let expected = coeffs[0] + coeffs[1] * s2010 + coeffs[2] * s2010.powi(2) + coeffs[3] * s2010.powi(3);
    assert!((fit.predict(2010.0) - expected).abs() < 1e-6);
}

#[test]
fn population_design_matrix_columns() {
    let series = parse_population("2\n1950 10\n2000 20\n").unwrap();
    let (a, y) = PolynomialModel::default().design(&series).unwrap();
    assert_eq!(a.shape(), (2, 4));
    assert_eq!(a.row_slice(0), &[1.0, 0.0, 0.0, 0.0]);
    assert_eq!(a.row_slice(1), &[1.0, 1.0, 1.0, 1.0]);
    assert_eq!(y.as_slice(), &[10.0, 20.0]);
}

#[test]
fn population_fit_with_noise_has_positive_residual() {
    let series = parse_population(
        "6\n1900 76\n1920 106\n1940 132\n1960 179\n1980 227\n2000 281\n",
    )
    .unwrap();
    let model = PolynomialModel {
        degree: 1,
        ..PolynomialModel::default()
    };
    let fit = model.fit(&series, &SolverConfig::default()).unwrap();
    assert_eq!(fit.coefficients.len(), 2);
    assert!(fit.residual > 0.0);
    let fitted = fit.fitted(&series);
    assert_eq!(fitted.len(), series.len());
}

#[test]
fn population_too_few_points_for_degree_fails() {
    let series = parse_population("2\n1950 10\n2000 20\n").unwrap();
    assert!(PolynomialModel::default()
        .fit(&series, &SolverConfig::default())
        .is_err());
}

// ---------------------------------------------------------------------------
// Orbit observations
// ---------------------------------------------------------------------------

fn ellipse_file_content(n: usize) -> String {
    // x^2 / 4 + y^2 = 1
    let mut content = format!("{}\n", n);
    for k in 0..n {
        let theta = 2.0 * std::f64::consts::PI * k as f64 / n as f64;
        content.push_str(&format!("{:.15} {:.15}\n", 2.0 * theta.cos(), theta.sin()));
    }
    content
}

#[test]
fn orbit_design_has_conic_columns() {
    let obs = parse_orbit("1\n2 3\n").unwrap();
    let (a, b) = conic_design(&obs).unwrap();
    assert_eq!(a.row_slice(0), &[4.0, 6.0, 9.0, 2.0, 3.0]);
    assert_eq!(b.as_slice(), &[-1.0]);
}

#[test]
fn orbit_fit_recovers_known_ellipse() {
    let obs = parse_orbit(&ellipse_file_content(10)).unwrap();
    assert_eq!(obs.len(), 10);
    let fit = fit_conic(&obs, &SolverConfig::default()).unwrap();
    let expected = [-0.25, 0.0, -1.0, 0.0, 0.0];
    for ((name, got), want) in fit.named().zip(expected.iter()) {
        assert!((got - want).abs() < 1e-6, "{} = {}, want {}", name, got, want);
    }
    assert!(fit.residual < 1e-6);
    assert!(fit.evaluate(2.0, 0.0).abs() < 1e-6);
}

#[test]
fn orbit_header_count_must_match() {
    assert!(parse_orbit("3\n1 2\n3 4\n").is_err());
}
