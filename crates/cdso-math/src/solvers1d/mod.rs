//! 1D root-finding solvers.
//!
//! The y* search of the CDS option kernel needs a solver started from a
//! guess rather than a bracket: [`brent_from_guess`] expands a bracket
//! outward from `guess ± step` and then runs Brent's method inside it.
//! [`brent`] is the bracketed workhorse, usable on its own.

use cdso_core::{
    errors::{Error, Result},
    Real,
};

const MAX_ITERATIONS: u32 = 100;
const MAX_BRACKET_EVALUATIONS: u32 = 50;
const BRACKET_GROWTH: Real = 1.6;
const DEFAULT_ACCURACY: Real = 1.0e-11;

// ── Brent ─────────────────────────────────────────────────────────────────────

/// Brent's method for finding a root of `f(x)` in `[x_min, x_max]`.
///
/// Combines bisection, secant, and inverse quadratic interpolation.
pub fn brent<F>(f: F, x_min: Real, x_max: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let acc = if accuracy > 0.0 {
        accuracy
    } else {
        DEFAULT_ACCURACY
    };
    let mut a = x_min;
    let mut b = x_max;
    let mut fa = f(a);
    let mut fb = f(b);

    if fa * fb > 0.0 {
        return Err(Error::RootNotBracketed(format!(
            "f({a}) and f({b}) have the same sign"
        )));
    }
    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for _ in 0..MAX_ITERATIONS {
        if fb * fc > 0.0 {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }
        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * acc;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol || fb == 0.0 {
            return Ok(b);
        }
        if e.abs() >= tol && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (p, q) = if a == c {
                let p = 2.0 * xm * s;
                let q = 1.0 - s;
                (p, q)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                let p = s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0));
                let q = (q - 1.0) * (r - 1.0) * (s - 1.0);
                (p, q)
            };
            let (p, q) = if p > 0.0 { (p, -q) } else { (-p, q) };
            if 2.0 * p < (3.0 * xm * q - (tol * q).abs()) && 2.0 * p < (e * q).abs() {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }
        a = b;
        fa = fb;
        b += if d.abs() > tol {
            d
        } else if xm > 0.0 {
            tol
        } else {
            -tol
        };
        fb = f(b);
    }
    Err(Error::Runtime(
        "Brent solver: maximum iterations reached".into(),
    ))
}

// ── Brent from a guess ────────────────────────────────────────────────────────

/// Brent's method started from an initial `guess` and bracket half-width
/// `step`, expanding the bracket geometrically (always from the end with the
/// smaller residual) until a sign change is found.
///
/// Fails with [`Error::RootNotBracketed`] if no sign change appears within a
/// bounded number of expansions — for the y* equation this indicates
/// inconsistent curve/model inputs rather than solver weakness.
pub fn brent_from_guess<F>(f: F, guess: Real, step: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    if step <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "bracket step must be positive, got {step}"
        )));
    }

    let f_guess = f(guess);
    if f_guess == 0.0 {
        return Ok(guess);
    }

    // Orient the initial bracket so the guess is the endpoint already on
    // the known side of the root.
    let (mut x_min, mut x_max, mut f_min, mut f_max) = if f_guess > 0.0 {
        let lo = guess - step;
        (lo, guess, f(lo), f_guess)
    } else {
        let hi = guess + step;
        (guess, hi, f_guess, f(hi))
    };

    for _ in 0..MAX_BRACKET_EVALUATIONS {
        if f_min * f_max <= 0.0 {
            if f_min == 0.0 {
                return Ok(x_min);
            }
            if f_max == 0.0 {
                return Ok(x_max);
            }
            return brent(f, x_min, x_max, accuracy);
        }
        if f_min.abs() < f_max.abs() {
            x_min += BRACKET_GROWTH * (x_min - x_max);
            f_min = f(x_min);
        } else {
            x_max += BRACKET_GROWTH * (x_max - x_min);
            f_max = f(x_max);
        }
    }

    Err(Error::RootNotBracketed(format!(
        "no sign change in [{x_min}, {x_max}] after {MAX_BRACKET_EVALUATIONS} expansions \
         (guess {guess}, step {step})"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn brent_sqrt2() {
        let root = brent(|x| x * x - 2.0, 0.0, 2.0, 1e-12).unwrap();
        assert!((root - 2.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn brent_opposite_signs_required() {
        assert!(matches!(
            brent(|x| x, 1.0, 2.0, 1e-10),
            Err(Error::RootNotBracketed(_))
        ));
    }

    #[test]
    fn guess_solver_finds_root_far_from_guess() {
        // Root at 5.0, guess at 0.1 with a small step: the bracket has to
        // grow several times before it straddles the root.
        let root = brent_from_guess(|x| x - 5.0, 0.1, 0.1, 1e-10).unwrap();
        assert!((root - 5.0).abs() < 1e-9, "got {root}");
    }

    #[test]
    fn guess_solver_exact_guess() {
        let root = brent_from_guess(|x| x - 1.0, 1.0, 0.1, 1e-10).unwrap();
        assert_eq!(root, 1.0);
    }

    #[test]
    fn guess_solver_rejects_signless_function() {
        // Strictly positive everywhere: no root to bracket.
        assert!(matches!(
            brent_from_guess(|x: f64| x * x + 1.0, 0.0, 0.1, 1e-10),
            Err(Error::RootNotBracketed(_))
        ));
    }

    #[test]
    fn guess_solver_rejects_non_positive_step() {
        assert!(brent_from_guess(|x| x, 1.0, 0.0, 1e-10).is_err());
    }

    proptest! {
        #[test]
        fn guess_solver_solves_shifted_cubic(r in -3.0f64..3.0, g in -3.0f64..3.0) {
            // x^3 + x - c is strictly increasing with a unique real root.
            let c = r * r * r + r;
            let root = brent_from_guess(|x| x * x * x + x - c, g, 0.1, 1e-10).unwrap();
            prop_assert!((root - r).abs() < 1e-7);
        }
    }
}
