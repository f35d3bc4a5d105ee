use std::fmt;

use crate::math::polynomial::polynomial::Polynomial;

// 輸出格式（係數由高次到低次）：
//
//   degree 0:  "15"
//   degree 1:  "2x + 5", "-x", "x - 3.5"
//   degree n:  "2x**3 - 6x**2 + 15"
//
// 係數 ±1 省略數字，係數為 0 的項省略；常數項永遠印出數值。

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coefs = self.coefficients();
        let degree = self.degree();
        match degree {
            0 => write!(f, "{}", coefs[0]),
            1 => {
                write_leading(f, coefs[0], "x")?;
                write_constant(f, coefs[1])
            },
            _ => {
                write_leading(f, coefs[0], &format!("x**{}", degree))?;
                for (i, &coef) in coefs[1..degree - 1].iter().enumerate() {
                    write_term(f, coef, &format!("x**{}", degree - 1 - i))?;
                }
                write_term(f, coefs[degree - 1], "x")?;
                write_constant(f, coefs[degree])
            }
        }
    }
}

fn write_leading(f: &mut fmt::Formatter<'_>, coef: f64, variable: &str) -> fmt::Result {
    if coef == -1.0 {
        write!(f, "-")?;
    } else if coef != 1.0 {
        write!(f, "{}", coef)?;
    }
    write!(f, "{}", variable)
}

fn write_sign(f: &mut fmt::Formatter<'_>, coef: f64) -> fmt::Result {
    if coef > 0.0 {
        write!(f, " + ")
    } else {
        write!(f, " - ")
    }
}

fn write_term(f: &mut fmt::Formatter<'_>, coef: f64, variable: &str) -> fmt::Result {
    if coef == 0.0 {
        return Ok(());
    }
    write_sign(f, coef)?;
    if coef.abs() != 1.0 {
        write!(f, "{}", coef.abs())?;
    }
    write!(f, "{}", variable)
}

fn write_constant(f: &mut fmt::Formatter<'_>, coef: f64) -> fmt::Result {
    if coef == 0.0 {
        return Ok(());
    }
    write_sign(f, coef)?;
    write!(f, "{}", coef.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(coefs: &[f64]) -> String {
        Polynomial::new(coefs.to_vec()).to_string()
    }

    #[test]
    fn test_constant() {
        assert_eq!(render(&[15.0]), "15");
        assert_eq!(render(&[-0.5]), "-0.5");
        assert_eq!(render(&[]), "0");
    }

    #[test]
    fn test_linear() {
        assert_eq!(render(&[2.0, 5.0]), "2x + 5");
        assert_eq!(render(&[1.0, 0.0]), "x");
        assert_eq!(render(&[-1.0, 3.0]), "-x + 3");
        assert_eq!(render(&[2.5, -1.0]), "2.5x - 1");
        assert_eq!(render(&[-4.0, -0.25]), "-4x - 0.25");
    }

    #[test]
    fn test_higher_degree() {
        assert_eq!(render(&[2.0, -6.0, 0.0, 15.0]), "2x**3 - 6x**2 + 15");
        assert_eq!(render(&[2.0, -6.0, 2.0, 20.0]), "2x**3 - 6x**2 + 2x + 20");
        assert_eq!(render(&[6.0, -12.0, 0.0]), "6x**2 - 12x");
        assert_eq!(render(&[1.0, 0.0, 0.0]), "x**2");
        assert_eq!(render(&[-1.0, 1.0, -1.0, 1.0]), "-x**3 + x**2 - x + 1");
        assert_eq!(render(&[1.0, -1.0, 0.0, 0.0, 0.0]), "x**4 - x**3");
        assert_eq!(render(&[3.0, 0.0, 1.0, 0.0, -2.0]), "3x**4 + x**2 - 2");
        assert_eq!(render(&[1.0, -5.5, 13.75]), "x**2 - 5.5x + 13.75");
    }

    #[test]
    fn test_operation_results() {
        let p = Polynomial::new(vec![2.0, -6.0, 0.0, 15.0]);
        let q = Polynomial::new(vec![2.0, 5.0]);
        assert_eq!(p.sum(&q).to_string(), "2x**3 - 6x**2 + 2x + 20");
        assert_eq!(p.diff(1).unwrap().to_string(), "6x**2 - 12x");
        assert_eq!(q.pow(3).unwrap().to_string(), "8x**3 + 60x**2 + 150x + 125");
        assert_eq!(p.pow(0).unwrap().to_string(), "1");
    }
}
